//! Error types for the solver library

use std::path::PathBuf;
use thiserror::Error;

/// Error type for solving a puzzle
#[derive(Debug, Error)]
pub enum SolveError {
    /// The solution was asked for its data before `initialize` ran
    #[error("Solution data accessed before initialization")]
    NotInitialized,
    /// Input format doesn't match expected structure
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// Fetching the puzzle input failed
    #[error("Fetch failed: {0}")]
    Fetch(#[from] FetchError),
    /// An error occurred while solving
    #[error("Solve failed: {0}")]
    Failed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Error raised by a [`DataFetcher`](crate::DataFetcher)
#[derive(Debug, Error)]
#[error("{0}")]
pub struct FetchError(#[source] pub Box<dyn std::error::Error + Send + Sync>);

impl FetchError {
    /// Wrap any error as a fetch failure
    pub fn new(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self(source.into())
    }
}

/// Error raised while the dependency resolver constructs a solution
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The type has no constructor the resolver can call
    #[error("Type {0} cannot be constructed")]
    NotConstructible(&'static str),
    /// A dependency of the type could not be provided
    #[error("Missing dependency: {0}")]
    Dependency(String),
}

/// Error raised while loading a module
#[derive(Debug, Error)]
pub enum LoadError {
    /// No linked module matches the requested reference
    #[error("Module {0} is not linked into this executable")]
    NotLinked(String),
    /// The file is a module artifact, but not one this executable can load
    #[error("Cannot load {} at runtime: module is not linked into this executable", .0.display())]
    Unsupported(PathBuf),
    /// The file name does not describe a module
    #[error("Not a module file: {}", .0.display())]
    InvalidFileName(PathBuf),
    /// An I/O error occurred while reading a module file or directory
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error raised while listing the types of a module
#[derive(Debug, Clone, Error)]
#[error("Failed to load {target}: {reason}")]
pub struct TypeLoadError {
    /// Module or type that failed to load
    pub target: String,
    /// Why it failed
    pub reason: String,
}

impl TypeLoadError {
    /// Create a new type load error
    pub fn new(target: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            reason: reason.into(),
        }
    }
}

/// Error type for registration failures
#[derive(Debug, Clone, Error)]
pub enum RegistrationError {
    /// Two or more solution types share the same `{year}{day:02}` key
    #[error("Duplicate solution registration for key {key}: {}", .implementations.join(", "))]
    DuplicateKey {
        /// The conflicting key
        key: String,
        /// Every type claiming the key
        implementations: Vec<&'static str>,
    },
    /// The process-wide registry has already been installed
    #[error("Solution registry is already installed")]
    AlreadyInstalled,
}

/// Error type for a discovery run
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// The solutions file pattern is not a valid glob
    #[error("Invalid solutions file pattern: {0}")]
    Pattern(#[from] globset::Error),
    /// Registration of the discovered solutions failed
    #[error(transparent)]
    Registration(#[from] RegistrationError),
}
