//! The installed registry serves lookups and construction from many threads
//!
//! Kept in its own test binary because it installs the process-wide registry.

use aoc_solver::{
    AocSolution, BaseSolution, Container, LinkedModules, PuzzleContext, Solution, SolutionBase,
    SolutionContext, SolutionDiscovery, SolutionFactory, SolutionRegistry, SolveError,
    StaticFetcher,
};
use std::sync::Arc;

aoc_solver::solution_module!();

#[derive(AocSolution)]
#[aoc(year = 2016, day = 3)]
struct Triangles {
    #[base]
    base: BaseSolution,
}

impl Solution for Triangles {
    fn solve_a(&self) -> Result<i64, SolveError> {
        Ok(self.data()?.lines().count() as i64)
    }

    fn solve_b(&self) -> Result<i64, SolveError> {
        Ok(i64::from(self.day()))
    }
}

#[derive(AocSolution)]
#[aoc(year = 2016, day = 4)]
struct Rooms {
    #[base]
    base: BaseSolution,
}

impl Solution for Rooms {
    fn solve_a(&self) -> Result<i64, SolveError> {
        Ok(self.data()?.len() as i64)
    }

    fn solve_b(&self) -> Result<i64, SolveError> {
        Ok(i64::from(self.day()))
    }
}

#[test]
fn test_parallel_lookup_and_create() {
    let linked = LinkedModules::collect();
    let root = linked.get(env!("CARGO_CRATE_NAME")).unwrap();
    let discovered = SolutionDiscovery::new(&linked)
        .no_solutions_dir()
        .run(root)
        .unwrap();
    let registry = discovered.registry.install().unwrap();

    std::thread::scope(|scope| {
        let workers: Vec<_> = (0..8)
            .map(|worker| {
                scope.spawn(move || {
                    let registry = SolutionRegistry::global().unwrap();
                    let factory = SolutionFactory::new(registry);
                    let day = 3 + worker % 2;

                    for _ in 0..50 {
                        assert!(registry.lookup(2016, day).is_some());
                        assert!(registry.lookup(2016, 5).is_none());
                        assert_eq!(registry.all().count(), 2);

                        let context = Arc::new(SolutionContext::new());
                        let container = Container::new()
                            .with_fetcher(Arc::new(StaticFetcher::new("a\nb\n")))
                            .with_configurator(context.clone());

                        assert!(factory.create(2016, 5, &container).unwrap().is_none());
                        let mut solution = factory.create(2016, day, &container).unwrap().unwrap();
                        solution.initialize().unwrap();
                        assert_eq!(solution.solve_b().unwrap(), i64::from(day));
                        assert_eq!((context.year(), context.day()), (2016, day));
                    }
                })
            })
            .collect();

        for worker in workers {
            worker.join().unwrap();
        }
    });

    assert!(std::ptr::eq(registry, SolutionRegistry::global().unwrap()));
}
