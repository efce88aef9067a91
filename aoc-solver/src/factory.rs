//! Solution factory

use crate::container::DependencyResolver;
use crate::error::ResolveError;
use crate::registry::SolutionRegistry;
use crate::solution::Solution;

/// Creates solutions by (year, day) through a dependency resolver
///
/// Instances are never cached: every call to [`create`](Self::create)
/// resolves a fresh one.
///
/// # Example
///
/// ```no_run
/// use aoc_solver::{Container, SolutionFactory, SolutionRegistry};
///
/// let registry = SolutionRegistry::global().expect("registry installed at startup");
/// let factory = SolutionFactory::new(registry);
/// match factory.create(2025, 1, &Container::new()) {
///     Ok(Some(_solution)) => { /* initialize and solve */ }
///     Ok(None) => eprintln!("no such puzzle"),
///     Err(e) => eprintln!("construction failed: {e}"),
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SolutionFactory<'r> {
    registry: &'r SolutionRegistry,
}

impl<'r> SolutionFactory<'r> {
    /// Create a factory over `registry`
    pub fn new(registry: &'r SolutionRegistry) -> Self {
        Self { registry }
    }

    /// Construct the solution registered for a year and day
    ///
    /// # Arguments
    /// * `year` - The Advent of Code year
    /// * `day` - The day within the year
    /// * `resolver` - Constructs the instance and supplies its dependencies
    ///
    /// # Returns
    /// * `Ok(Some(solution))` - A freshly constructed solution
    /// * `Ok(None)` - Nothing is registered for this year and day; the resolver was not called
    /// * `Err(ResolveError)` - The resolver failed to construct the solution
    pub fn create(
        &self,
        year: i32,
        day: i32,
        resolver: &dyn DependencyResolver,
    ) -> Result<Option<Box<dyn Solution>>, ResolveError> {
        let Some(descriptor) = self.registry.lookup(year, day) else {
            tracing::debug!(year, day, "no solution registered");
            return Ok(None);
        };

        resolver.resolve(descriptor.implementation()).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::AccessorBody;
    use crate::module::{Capabilities, SolutionType, TypeKind};
    use crate::registry::{RegistryBuilder, SolutionDescriptor};
    use std::cell::RefCell;

    static DAY_1: SolutionType = SolutionType {
        name: "Day1",
        module: "factory_tests",
        kind: TypeKind::Concrete,
        capabilities: Capabilities::REQUIRED,
        year_body: AccessorBody::literal(2025),
        day_body: AccessorBody::literal(1),
        constructor: None,
    };

    /// Records every type it is asked to resolve and always fails
    #[derive(Default)]
    struct Recording {
        calls: RefCell<Vec<&'static str>>,
    }

    impl DependencyResolver for Recording {
        fn resolve(&self, ty: &'static SolutionType) -> Result<Box<dyn Solution>, ResolveError> {
            self.calls.borrow_mut().push(ty.name);
            Err(ResolveError::NotConstructible(ty.name))
        }
    }

    fn registry() -> SolutionRegistry {
        RegistryBuilder::new()
            .register(SolutionDescriptor::new(&DAY_1, 2025, 1).unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_unknown_key_skips_resolver() {
        let registry = registry();
        let resolver = Recording::default();

        let result = SolutionFactory::new(&registry).create(1999, 1, &resolver);
        assert!(matches!(result, Ok(None)));
        assert!(resolver.calls.borrow().is_empty());
    }

    #[test]
    fn test_known_key_resolves_registered_type_once() {
        let registry = registry();
        let resolver = Recording::default();

        let result = SolutionFactory::new(&registry).create(2025, 1, &resolver);
        assert!(matches!(result, Err(ResolveError::NotConstructible("Day1"))));
        assert_eq!(*resolver.calls.borrow(), vec!["Day1"]);
    }
}
