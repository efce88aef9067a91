//! Every solution in this crate is discoverable from the crate's module

use aoc_solutions as _;
use aoc_solver::{LinkedModules, SolutionDiscovery};

#[test]
fn test_all_2025_solutions_are_registered() {
    let linked = LinkedModules::collect();
    let root = linked.get("aoc_solutions").unwrap();

    let discovery = SolutionDiscovery::new(&linked)
        .no_solutions_dir()
        .run(root)
        .unwrap();

    let keys: Vec<String> = discovery.registry.all().map(|d| d.key()).collect();
    assert_eq!(keys, vec!["202501", "202502", "202503", "202504"]);
    assert!(discovery.report.ineligible.is_empty());

    for descriptor in discovery.registry.all() {
        assert_eq!(descriptor.implementation().module, "aoc_solutions");
        assert!(descriptor.implementation().name.starts_with("aoc_solutions::my_solutions::year_2025::"));
    }
}
