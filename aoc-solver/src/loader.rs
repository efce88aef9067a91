//! Module graph loading
//!
//! Discovery starts from a root module and walks its references breadth-first,
//! then adds the solution modules found in a runtime directory. Modules that
//! fail to resolve or load are skipped and recorded, never fatal.

use crate::error::LoadError;
use crate::module::{LinkedModules, Module, ModuleIdentity, ModuleRef, normalize_module_name};
use globset::GlobMatcher;
use std::collections::{HashSet, VecDeque};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Source of modules for discovery
pub trait ModuleLoader {
    /// Modules already loaded into the process
    fn resident(&self) -> Vec<Arc<dyn Module>>;

    /// Load the module satisfying a reference
    fn load(&self, reference: &ModuleRef) -> Result<Arc<dyn Module>, LoadError>;

    /// Read which module a file holds, without loading it
    fn inspect_file(&self, path: &Path) -> Result<ModuleRef, LoadError>;

    /// Load the module held by a file
    fn load_file(&self, path: &Path) -> Result<Arc<dyn Module>, LoadError>;
}

impl ModuleLoader for LinkedModules {
    fn resident(&self) -> Vec<Arc<dyn Module>> {
        self.iter().collect()
    }

    fn load(&self, reference: &ModuleRef) -> Result<Arc<dyn Module>, LoadError> {
        self.find(reference)
            .ok_or_else(|| LoadError::NotLinked(reference.to_string()))
    }

    fn inspect_file(&self, path: &Path) -> Result<ModuleRef, LoadError> {
        module_name_from_path(path)
            .map(|name| ModuleRef::named(&name))
            .ok_or_else(|| LoadError::InvalidFileName(path.to_path_buf()))
    }

    fn load_file(&self, path: &Path) -> Result<Arc<dyn Module>, LoadError> {
        let reference = self.inspect_file(path)?;
        self.find(&reference)
            .ok_or_else(|| LoadError::Unsupported(path.to_path_buf()))
    }
}

/// Derive a module name from an artifact file name
///
/// Strips the extension and a leading `lib`, then normalizes `-` to `_`.
///
/// # Example
///
/// ```
/// use aoc_solver::module_name_from_path;
/// use std::path::Path;
///
/// assert_eq!(
///     module_name_from_path(Path::new("target/debug/libaoc_solutions.rlib")).as_deref(),
///     Some("aoc_solutions")
/// );
/// assert_eq!(module_name_from_path(Path::new("aoc-2024-solutions.dll")).as_deref(), Some("aoc_2024_solutions"));
/// ```
pub fn module_name_from_path(path: &Path) -> Option<String> {
    let stem = path.file_stem()?.to_str()?;
    let name = stem.strip_prefix("lib").unwrap_or(stem);
    (!name.is_empty()).then(|| normalize_module_name(name))
}

/// Where a skipped module came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleOrigin {
    /// A reference from another module
    Reference(ModuleRef),
    /// A file in the solutions directory
    File(PathBuf),
}

impl fmt::Display for ModuleOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reference(reference) => write!(f, "reference {reference}"),
            Self::File(path) => write!(f, "file {}", path.display()),
        }
    }
}

/// A module that was skipped during loading
#[derive(Debug)]
pub struct SkippedModule {
    /// What was being loaded
    pub origin: ModuleOrigin,
    /// Why it was skipped
    pub error: LoadError,
}

/// A set of loaded modules, deduplicated by identity
///
/// Keeps insertion order so reports read in traversal order.
#[derive(Default)]
pub struct ModuleSet {
    modules: Vec<Arc<dyn Module>>,
    identities: HashSet<ModuleIdentity>,
    skipped: Vec<SkippedModule>,
}

impl ModuleSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a module unless one with the same identity is present
    ///
    /// Returns `true` if the module was added.
    pub fn insert(&mut self, module: Arc<dyn Module>) -> bool {
        if !self.identities.insert(module.identity()) {
            return false;
        }
        self.modules.push(module);
        true
    }

    /// Check whether any loaded module satisfies `reference`
    pub fn satisfies(&self, reference: &ModuleRef) -> bool {
        self.identities.iter().any(|identity| reference.matches(identity))
    }

    /// The loaded modules
    pub fn modules(&self) -> &[Arc<dyn Module>] {
        &self.modules
    }

    /// The modules skipped so far
    pub fn skipped(&self) -> &[SkippedModule] {
        &self.skipped
    }

    /// Number of loaded modules
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Check if no module was loaded
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Split into loaded modules and skipped modules
    pub fn into_parts(self) -> (Vec<Arc<dyn Module>>, Vec<SkippedModule>) {
        (self.modules, self.skipped)
    }

    fn skip(&mut self, origin: ModuleOrigin, error: LoadError) {
        tracing::debug!(%origin, %error, "skipping module");
        self.skipped.push(SkippedModule { origin, error });
    }
}

/// Load the transitive reference closure of `root`
///
/// Walks references breadth-first. References already satisfied by a visited
/// module are not followed again, which also terminates reference cycles.
/// A reference is resolved against the loader's resident modules first, and
/// loaded through [`ModuleLoader::load`] otherwise; failures are skipped.
pub fn load_reference_graph(loader: &dyn ModuleLoader, root: Arc<dyn Module>, set: &mut ModuleSet) {
    let resident = loader.resident();
    let mut queue = VecDeque::from([root]);

    while let Some(module) = queue.pop_front() {
        if !set.insert(Arc::clone(&module)) {
            continue;
        }

        for reference in module.references() {
            if set.satisfies(&reference) {
                continue;
            }

            let loaded = match resident.iter().find(|m| reference.matches(&m.identity())) {
                Some(existing) => Ok(Arc::clone(existing)),
                None => loader.load(&reference),
            };

            match loaded {
                Ok(loaded) => queue.push_back(loaded),
                Err(error) => set.skip(ModuleOrigin::Reference(reference), error),
            }
        }
    }
}

/// Add the solution modules found in `dir`
///
/// Lists `dir` once, without recursion, and considers the files whose name
/// matches `pattern`. A file naming a module that is already resident is
/// reused; any other file is loaded through [`ModuleLoader::load_file`].
/// A missing or unreadable directory contributes nothing.
pub fn load_directory_modules(
    loader: &dyn ModuleLoader,
    dir: &Path,
    pattern: &GlobMatcher,
    set: &mut ModuleSet,
) {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(error) => {
            tracing::debug!(dir = %dir.display(), %error, "solutions directory not readable");
            return;
        }
    };

    let mut paths: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .filter(|entry| pattern.is_match(entry.file_name()))
        .map(|entry| entry.path())
        // follows symlinks, unlike `DirEntry::file_type`
        .filter(|path| path.is_file())
        .collect();
    paths.sort();

    let resident = loader.resident();
    for path in paths {
        let reference = match loader.inspect_file(&path) {
            Ok(reference) => reference,
            Err(error) => {
                set.skip(ModuleOrigin::File(path), error);
                continue;
            }
        };

        let loaded = match resident.iter().find(|m| reference.matches(&m.identity())) {
            Some(existing) => Ok(Arc::clone(existing)),
            None => loader.load_file(&path),
        };

        match loaded {
            Ok(module) => {
                set.insert(module);
            }
            Err(error) => set.skip(ModuleOrigin::File(path), error),
        }
    }
}
