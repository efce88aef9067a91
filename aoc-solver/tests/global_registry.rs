//! The process-wide registry is installed exactly once
//!
//! Kept in its own test binary so no other test observes the global state.

use aoc_solver::{
    AccessorBody, Capabilities, RegistrationError, RegistryBuilder, SolutionDescriptor,
    SolutionRegistry, SolutionType, TypeKind,
};

static DAY_1: SolutionType = SolutionType {
    name: "Day1",
    module: "global_registry",
    kind: TypeKind::Concrete,
    capabilities: Capabilities::REQUIRED,
    year_body: AccessorBody::literal(2025),
    day_body: AccessorBody::literal(1),
    constructor: None,
};

#[test]
fn test_install_once_then_read_only() {
    assert!(SolutionRegistry::global().is_none());

    let registry = RegistryBuilder::new()
        .register(SolutionDescriptor::new(&DAY_1, 2025, 1).unwrap())
        .build()
        .unwrap();
    let installed = registry.install().unwrap();
    assert_eq!(installed.len(), 1);

    let global = SolutionRegistry::global().unwrap();
    assert!(std::ptr::eq(global, installed));
    assert!(global.lookup(2025, 1).is_some());

    let second = RegistryBuilder::new().build().unwrap().install();
    assert!(matches!(second, Err(RegistrationError::AlreadyInstalled)));
    assert_eq!(SolutionRegistry::global().unwrap().len(), 1);
}
