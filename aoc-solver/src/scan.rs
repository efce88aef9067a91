//! Candidate scanning

use crate::error::TypeLoadError;
use crate::module::{Module, SolutionType};
use std::sync::Arc;

/// Candidate types found in a set of modules
#[derive(Debug, Default)]
pub struct Candidates {
    /// Concrete types holding every required capability
    pub types: Vec<&'static SolutionType>,
    /// Types or whole modules that failed to load
    pub failures: Vec<TypeLoadError>,
}

/// Collect every candidate solution type from `modules`
///
/// Only type metadata is read; nothing is constructed. A module whose listing
/// fails entirely contributes no candidates, while a module with individual
/// failing types still contributes the types that did load. A type reachable
/// through more than one module is yielded once.
pub fn scan_candidates(modules: &[Arc<dyn Module>]) -> Candidates {
    let mut candidates = Candidates::default();

    for module in modules {
        let slots = match module.types() {
            Ok(slots) => slots,
            Err(error) => {
                tracing::debug!(module = %module.identity(), %error, "module types could not be listed");
                candidates.failures.push(error);
                continue;
            }
        };

        for slot in slots {
            match slot {
                Ok(ty) if ty.is_candidate() => {
                    if !candidates.types.iter().any(|seen| std::ptr::eq(*seen, ty)) {
                        candidates.types.push(ty);
                    }
                }
                Ok(_) => {}
                Err(error) => {
                    tracing::debug!(module = %module.identity(), %error, "type failed to load");
                    candidates.failures.push(error);
                }
            }
        }
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::AccessorBody;
    use crate::container::Container;
    use crate::error::ResolveError;
    use crate::module::{Capabilities, ModuleIdentity, ModuleRef, TypeKind, TypeSlot};
    use crate::solution::Solution;
    use std::sync::Mutex;
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    fn never(_: &Container) -> Result<Box<dyn Solution>, ResolveError> {
        Err(ResolveError::Dependency("unused".to_string()))
    }

    const fn record(name: &'static str, kind: TypeKind, capabilities: Capabilities) -> SolutionType {
        SolutionType {
            name,
            module: "scan_tests",
            kind,
            capabilities,
            year_body: AccessorBody::literal(2025),
            day_body: AccessorBody::literal(1),
            constructor: Some(never),
        }
    }

    static CONCRETE: SolutionType = record("Concrete", TypeKind::Concrete, Capabilities::REQUIRED);
    static ABSTRACT: SolutionType = record("Abstract", TypeKind::Abstract, Capabilities::REQUIRED);
    static BASE_ONLY: SolutionType =
        record("BaseOnly", TypeKind::Concrete, Capabilities::SOLUTION_BASE);
    static SOLUTION_ONLY: SolutionType =
        record("SolutionOnly", TypeKind::Concrete, Capabilities::SOLUTION);

    #[derive(Debug)]
    struct Listing(&'static str, Result<Vec<TypeSlot>, TypeLoadError>);

    impl Module for Listing {
        fn identity(&self) -> ModuleIdentity {
            ModuleIdentity::new(self.0, None)
        }

        fn references(&self) -> Vec<ModuleRef> {
            Vec::new()
        }

        fn types(&self) -> Result<Vec<TypeSlot>, TypeLoadError> {
            self.1.clone()
        }
    }

    #[test]
    fn test_filters_to_concrete_types_with_both_capabilities() {
        let modules: Vec<Arc<dyn Module>> = vec![Arc::new(Listing(
            "m",
            Ok(vec![Ok(&ABSTRACT), Ok(&BASE_ONLY), Ok(&CONCRETE), Ok(&SOLUTION_ONLY)]),
        ))];

        let found = scan_candidates(&modules);
        assert_eq!(found.types.len(), 1);
        assert_eq!(found.types[0].name, "Concrete");
        assert!(found.failures.is_empty());
    }

    #[test]
    fn test_tolerates_type_load_failures() {
        let modules: Vec<Arc<dyn Module>> = vec![
            Arc::new(Listing(
                "partial",
                Ok(vec![Err(TypeLoadError::new("partial::Broken", "missing dependency")), Ok(&CONCRETE)]),
            )),
            Arc::new(Listing("broken", Err(TypeLoadError::new("broken", "corrupt")))),
            Arc::new(Listing("again", Ok(vec![Ok(&CONCRETE)]))),
        ];

        let found = scan_candidates(&modules);
        assert_eq!(found.types.len(), 1);
        assert_eq!(found.failures.len(), 2);
    }

    /// Records the level of every event
    struct Levels(Arc<Mutex<Vec<Level>>>);

    impl<S: Subscriber> Layer<S> for Levels {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            self.0.lock().unwrap().push(*event.metadata().level());
        }
    }

    #[test]
    fn test_listing_failures_stay_below_warn() {
        let modules: Vec<Arc<dyn Module>> = vec![
            Arc::new(Listing("broken", Err(TypeLoadError::new("broken", "corrupt")))),
            Arc::new(Listing(
                "partial",
                Ok(vec![Err(TypeLoadError::new("partial::Broken", "missing dependency"))]),
            )),
        ];
        let levels = Arc::new(Mutex::new(Vec::new()));
        let subscriber = tracing_subscriber::registry().with(Levels(Arc::clone(&levels)));

        let found = tracing::subscriber::with_default(subscriber, || scan_candidates(&modules));

        assert_eq!(found.failures.len(), 2);
        let levels = levels.lock().unwrap();
        assert_eq!(levels.len(), 2);
        assert!(levels.iter().all(|level| *level > Level::WARN));
    }
}
