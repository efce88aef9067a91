//! Dependency container and resolver seam

use crate::error::ResolveError;
use crate::module::SolutionType;
use crate::solution::{DataFetcher, FromContainer, Solution, SolutionConfigurator};
use std::sync::Arc;

/// Constructs solution instances on demand
///
/// The [`SolutionFactory`](crate::SolutionFactory) calls the resolver only after
/// a descriptor has been found, so the resolver never sees unregistered types.
pub trait DependencyResolver {
    /// Construct a new instance of `ty` with its dependencies wired in
    fn resolve(&self, ty: &'static SolutionType) -> Result<Box<dyn Solution>, ResolveError>;
}

/// Services available to solution constructors
///
/// # Example
///
/// ```
/// use aoc_solver::{Container, SolutionContext, StaticFetcher};
/// use std::sync::Arc;
///
/// let container = Container::new()
///     .with_fetcher(Arc::new(StaticFetcher::new("input")))
///     .with_configurator(Arc::new(SolutionContext::new()));
/// assert!(container.fetcher().is_ok());
/// ```
#[derive(Clone, Default)]
pub struct Container {
    fetcher: Option<Arc<dyn DataFetcher>>,
    configurator: Option<Arc<dyn SolutionConfigurator>>,
}

impl Container {
    /// Create an empty container
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the input fetcher shared by every solution
    pub fn with_fetcher(mut self, fetcher: Arc<dyn DataFetcher>) -> Self {
        self.fetcher = Some(fetcher);
        self
    }

    /// Register the configurator that records the active puzzle
    pub fn with_configurator(mut self, configurator: Arc<dyn SolutionConfigurator>) -> Self {
        self.configurator = Some(configurator);
        self
    }

    /// The registered input fetcher
    pub fn fetcher(&self) -> Result<Arc<dyn DataFetcher>, ResolveError> {
        self.fetcher
            .clone()
            .ok_or_else(|| ResolveError::Dependency("DataFetcher".to_string()))
    }

    /// The registered configurator
    pub fn configurator(&self) -> Result<Arc<dyn SolutionConfigurator>, ResolveError> {
        self.configurator
            .clone()
            .ok_or_else(|| ResolveError::Dependency("SolutionConfigurator".to_string()))
    }
}

/// Type-erased constructor stored in a [`SolutionType`]
///
/// `#[derive(AocSolution)]` registers `construct::<Self>` for every solution.
pub fn construct<T>(container: &Container) -> Result<Box<dyn Solution>, ResolveError>
where
    T: Solution + FromContainer + 'static,
{
    let solution = T::from_container(container)?;
    Ok(Box::new(solution))
}

impl DependencyResolver for Container {
    fn resolve(&self, ty: &'static SolutionType) -> Result<Box<dyn Solution>, ResolveError> {
        let constructor = ty.constructor.ok_or(ResolveError::NotConstructible(ty.name))?;
        tracing::debug!(solution = ty.name, "constructing solution");
        constructor(self)
    }
}
