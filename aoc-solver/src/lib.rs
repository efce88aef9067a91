//! Advent of Code Solution Discovery
//!
//! Finds every puzzle solution linked into a program, keys each one by its
//! (year, day) pair and constructs them on demand.
//!
//! # Overview
//!
//! This library provides:
//! - The traits every solution implements ([`Solution`], [`PuzzleContext`], [`SolutionBase`])
//! - A derive macro that registers a solution type without constructing it
//! - A module graph loader walking from a root module to every solution module
//! - Static extraction of each solution's year and day from its compiled accessors
//! - An immutable, conflict-checked registry and a factory building solutions on demand
//!
//! # Quick Example
//!
//! ```
//! use aoc_solver::{AocSolution, BaseSolution, Solution, SolutionBase, SolveError};
//!
//! #[derive(AocSolution)]
//! #[aoc(year = 2025, day = 1)]
//! pub struct Day1 {
//!     #[base]
//!     base: BaseSolution,
//! }
//!
//! impl Solution for Day1 {
//!     fn solve_a(&self) -> Result<i64, SolveError> {
//!         Ok(self.data()?.lines().count() as i64)
//!     }
//!
//!     fn solve_b(&self) -> Result<i64, SolveError> {
//!         Ok(0)
//!     }
//! }
//! ```
//!
//! # Key Concepts
//!
//! ## Modules
//!
//! Each crate holding solutions is a [`Module`]. Crates declare the modules they
//! reference with [`solution_module!`], and [`LinkedModules::collect`] builds the
//! catalog of everything linked into the executable.
//!
//! ## Accessor Bodies
//!
//! `#[aoc(year = .., day = ..)]` compiles both values into an [`AccessorBody`].
//! Discovery reads those bodies with [`extract_constant`]; only literal values
//! are recovered, so a solution with a computed year or day is not registered.
//!
//! ## Discovery
//!
//! [`SolutionDiscovery`] runs the whole pipeline once at startup and produces a
//! [`SolutionRegistry`], which is published process-wide with
//! [`SolutionRegistry::install`]. A [`SolutionFactory`] then creates solutions
//! through a [`DependencyResolver`] such as [`Container`].

pub mod body;
mod container;
mod discovery;
mod error;
mod extract;
mod factory;
mod loader;
mod module;
mod registry;
mod scan;
mod solution;

// Re-export public API
pub use body::AccessorBody;
pub use container::{Container, DependencyResolver, construct};
pub use discovery::{DEFAULT_FILE_PATTERN, Discovery, DiscoveryReport, SolutionDiscovery, default_solutions_dir};
pub use error::{
    DiscoveryError, FetchError, LoadError, RegistrationError, ResolveError, SolveError, TypeLoadError,
};
pub use extract::{extract_constant, extract_descriptor, extract_keys};
pub use factory::SolutionFactory;
pub use loader::{
    ModuleLoader, ModuleOrigin, ModuleSet, SkippedModule, load_directory_modules, load_reference_graph,
    module_name_from_path,
};
pub use module::{
    Capabilities, Constructor, LinkedModule, LinkedModules, Module, ModuleDef, ModuleIdentity, ModuleRef,
    SolutionType, TypeKind, TypeSlot, normalize_module_name,
};
pub use registry::{RegistryBuilder, SolutionDescriptor, SolutionRegistry};
pub use scan::{Candidates, scan_candidates};
pub use solution::{
    BaseSolution, DataFetcher, FromContainer, PuzzleContext, Solution, SolutionBase, SolutionConfigurator,
    SolutionContext, StaticFetcher,
};

// Re-export inventory for use by the derive macro
pub use inventory;

// Re-export the derive macro
pub use aoc_solver_macros::AocSolution;
