//! The discovery pipeline
//!
//! Runs once at startup: load the module graph, scan it for candidate types,
//! extract their keys from the accessor bodies, and build the registry.

use crate::error::{DiscoveryError, TypeLoadError};
use crate::extract::extract_descriptor;
use crate::loader::{ModuleLoader, ModuleSet, SkippedModule, load_directory_modules, load_reference_graph};
use crate::module::{Module, ModuleIdentity};
use crate::registry::{RegistryBuilder, SolutionRegistry};
use crate::scan::scan_candidates;
use globset::Glob;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// File pattern matching solution module artifacts
pub const DEFAULT_FILE_PATTERN: &str = "libaoc_*solutions.rlib";

/// The directory holding the running executable
pub fn default_solutions_dir() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    exe.parent().map(Path::to_path_buf)
}

/// Configures and runs solution discovery
///
/// # Example
///
/// ```no_run
/// use aoc_solver::{LinkedModules, SolutionDiscovery};
///
/// let linked = LinkedModules::collect();
/// let root = linked.get("aoc").expect("root module is linked");
/// let discovery = SolutionDiscovery::new(&linked)
///     .file_pattern("libaoc_*solutions.rlib")
///     .run(root)
///     .unwrap();
/// println!("{} solutions", discovery.registry.len());
/// ```
pub struct SolutionDiscovery<'l> {
    loader: &'l dyn ModuleLoader,
    solutions_dir: Option<PathBuf>,
    file_pattern: String,
}

impl<'l> SolutionDiscovery<'l> {
    /// Create a discovery run over `loader`
    ///
    /// Scans the executable's directory with [`DEFAULT_FILE_PATTERN`] unless
    /// configured otherwise.
    pub fn new(loader: &'l dyn ModuleLoader) -> Self {
        Self {
            loader,
            solutions_dir: default_solutions_dir(),
            file_pattern: DEFAULT_FILE_PATTERN.to_string(),
        }
    }

    /// Scan `dir` for solution modules
    pub fn solutions_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.solutions_dir = Some(dir.into());
        self
    }

    /// Skip the directory scan and use the reference graph only
    pub fn no_solutions_dir(mut self) -> Self {
        self.solutions_dir = None;
        self
    }

    /// Match solution module files with the glob `pattern`
    pub fn file_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.file_pattern = pattern.into();
        self
    }

    /// Run discovery starting at `root`
    ///
    /// # Returns
    /// * `Ok(Discovery)` - The registry and a report of everything skipped
    /// * `Err(DiscoveryError::Pattern)` - The file pattern is not a valid glob
    /// * `Err(DiscoveryError::Registration)` - Two solutions share a key
    pub fn run(&self, root: Arc<dyn Module>) -> Result<Discovery, DiscoveryError> {
        let pattern = Glob::new(&self.file_pattern)?.compile_matcher();

        let mut set = ModuleSet::new();
        load_reference_graph(self.loader, root, &mut set);
        if let Some(dir) = &self.solutions_dir {
            load_directory_modules(self.loader, dir, &pattern, &mut set);
        }
        let (modules, skipped) = set.into_parts();

        let candidates = scan_candidates(&modules);
        let mut descriptors = Vec::with_capacity(candidates.types.len());
        let mut ineligible = Vec::new();
        for ty in candidates.types {
            match extract_descriptor(ty) {
                Some(descriptor) => descriptors.push(descriptor),
                None => {
                    tracing::debug!(solution = ty.name, "year or day is not a literal constant");
                    ineligible.push(ty.name);
                }
            }
        }

        let registry = RegistryBuilder::new().register_all(descriptors).build()?;

        tracing::info!(
            modules = modules.len(),
            skipped = skipped.len(),
            solutions = registry.len(),
            "solution discovery complete"
        );

        Ok(Discovery {
            registry,
            report: DiscoveryReport {
                modules: modules.iter().map(|m| m.identity()).collect(),
                skipped,
                type_failures: candidates.failures,
                ineligible,
            },
        })
    }
}

/// Result of a discovery run
#[derive(Debug)]
pub struct Discovery {
    /// The registry of discovered solutions
    pub registry: SolutionRegistry,
    /// What discovery loaded and skipped
    pub report: DiscoveryReport,
}

/// Record of a discovery run
#[derive(Debug, Default)]
pub struct DiscoveryReport {
    /// Identities of every loaded module
    pub modules: Vec<ModuleIdentity>,
    /// Modules that could not be loaded
    pub skipped: Vec<SkippedModule>,
    /// Types and modules whose type listing failed
    pub type_failures: Vec<TypeLoadError>,
    /// Candidates without literal year and day values
    pub ineligible: Vec<&'static str>,
}
