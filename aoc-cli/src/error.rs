//! Error types for the CLI

use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP client error
    #[error("HTTP client error: {0}")]
    Http(#[from] aoc_http_client::AocError),

    /// Solution discovery failed
    #[error("Discovery failed: {0}")]
    Discovery(#[from] aoc_solver::DiscoveryError),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),

    /// The solution could not be constructed
    #[error("Resolve error: {0}")]
    Resolve(#[from] aoc_solver::ResolveError),

    /// Solver error
    #[error("Solver error: {0}")]
    Solve(#[from] aoc_solver::SolveError),

    /// At least one part returned an error
    #[error("{0} part(s) failed")]
    PartsFailed(usize),

    /// No solution has the requested key
    #[error("No solution registered for {year} day {day}")]
    NotFound { year: i32, day: i32 },
}

/// Cache-specific errors
#[derive(Error, Debug)]
pub enum CacheError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Cache directory creation failed
    #[error("Cache directory creation failed: {0}")]
    DirCreation(String),
}
