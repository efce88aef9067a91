//! Core traits shared by every puzzle solution

use crate::container::Container;
use crate::error::{FetchError, ResolveError, SolveError};
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicI32, Ordering};

/// The (year, day) pair a solution operates on
pub trait PuzzleContext {
    /// The Advent of Code year
    fn year(&self) -> i32;
    /// The day within the year
    fn day(&self) -> i32;
}

/// Provides puzzle input for the currently configured puzzle
pub trait DataFetcher: Send + Sync {
    /// Retrieve the raw puzzle input
    fn get_data(&self) -> Result<String, FetchError>;
}

/// Fetcher returning fixed text, for tests and offline runs
#[derive(Debug, Clone)]
pub struct StaticFetcher {
    data: String,
}

impl StaticFetcher {
    /// Create a fetcher that always returns `data`
    pub fn new(data: impl Into<String>) -> Self {
        Self { data: data.into() }
    }
}

impl DataFetcher for StaticFetcher {
    fn get_data(&self) -> Result<String, FetchError> {
        Ok(self.data.clone())
    }
}

/// Binds solutions to an execution context
pub trait SolutionConfigurator: Send + Sync {
    /// Record the year and day of `context`
    fn set_context(&self, context: &dyn PuzzleContext);
}

/// Shared (year, day) cell
///
/// Solutions write into it when they are constructed, and input fetchers read
/// it to know which puzzle to fetch. Both values start at `0`.
#[derive(Debug, Default)]
pub struct SolutionContext {
    year: AtomicI32,
    day: AtomicI32,
}

impl SolutionContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }
}

impl PuzzleContext for SolutionContext {
    fn year(&self) -> i32 {
        self.year.load(Ordering::Acquire)
    }

    fn day(&self) -> i32 {
        self.day.load(Ordering::Acquire)
    }
}

impl SolutionConfigurator for SolutionContext {
    fn set_context(&self, context: &dyn PuzzleContext) {
        self.year.store(context.year(), Ordering::Release);
        self.day.store(context.day(), Ordering::Release);
    }
}

/// Shared plumbing of every solution: the input fetcher and the fetched input
pub struct BaseSolution {
    fetcher: Arc<dyn DataFetcher>,
    data: Option<String>,
}

impl BaseSolution {
    /// Create a base that reads its input from `fetcher`
    pub fn new(fetcher: Arc<dyn DataFetcher>) -> Self {
        Self {
            fetcher,
            data: None,
        }
    }

    /// Build a base from the fetcher registered in `container`
    pub fn from_container(container: &Container) -> Result<Self, ResolveError> {
        Ok(Self::new(container.fetcher()?))
    }

    /// Fetch the puzzle input and normalize its line endings
    pub fn initialize(&mut self) -> Result<(), SolveError> {
        let raw = self.fetcher.get_data()?;
        self.data = Some(normalize_line_endings(raw));
        Ok(())
    }

    /// The normalized puzzle input
    ///
    /// # Returns
    /// * `Ok(&str)` - The input fetched by [`initialize`](Self::initialize)
    /// * `Err(SolveError::NotInitialized)` - `initialize` has not run yet
    pub fn data(&self) -> Result<&str, SolveError> {
        self.data.as_deref().ok_or(SolveError::NotInitialized)
    }

    /// Check whether the input has been fetched
    pub fn is_initialized(&self) -> bool {
        self.data.is_some()
    }
}

impl fmt::Debug for BaseSolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BaseSolution")
            .field("initialized", &self.is_initialized())
            .finish_non_exhaustive()
    }
}

fn normalize_line_endings(raw: String) -> String {
    if raw.contains('\r') {
        raw.replace("\r\n", "\n")
    } else {
        raw
    }
}

/// Access to the [`BaseSolution`] a solution is built on
///
/// Implemented by `#[derive(AocSolution)]` for the field marked `#[base]`.
pub trait SolutionBase {
    /// The shared base
    fn base(&self) -> &BaseSolution;
    /// The shared base, mutably
    fn base_mut(&mut self) -> &mut BaseSolution;

    /// Shortcut for the normalized puzzle input
    fn data(&self) -> Result<&str, SolveError> {
        self.base().data()
    }
}

/// A puzzle solution computing answers for parts A and B
///
/// # Example
///
/// ```
/// use aoc_solver::{AocSolution, BaseSolution, Solution, SolveError, SolutionBase};
///
/// #[derive(AocSolution)]
/// #[aoc(year = 2025, day = 1)]
/// struct Lines {
///     #[base]
///     base: BaseSolution,
/// }
///
/// impl Solution for Lines {
///     fn solve_a(&self) -> Result<i64, SolveError> {
///         Ok(self.data()?.lines().count() as i64)
///     }
///
///     fn solve_b(&self) -> Result<i64, SolveError> {
///         Ok(self.data()?.len() as i64)
///     }
/// }
/// ```
pub trait Solution: PuzzleContext + SolutionBase + Send {
    /// Compute the answer for part A
    fn solve_a(&self) -> Result<i64, SolveError>;

    /// Compute the answer for part B
    fn solve_b(&self) -> Result<i64, SolveError>;

    /// Fetch the puzzle input before solving
    fn initialize(&mut self) -> Result<(), SolveError> {
        self.base_mut().initialize()
    }
}

/// Construction of a type from the dependency container
pub trait FromContainer: Sized {
    /// Build a new instance, pulling dependencies from `container`
    fn from_container(container: &Container) -> Result<Self, ResolveError>;
}
