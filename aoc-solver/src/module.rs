//! Modules, type handles and the linked module catalog
//!
//! A module is a unit of compiled solutions: one crate, identified by its name
//! and version, that references other modules and defines solution types.
//! Crates announce themselves with [`solution_module!`](crate::solution_module)
//! and their solution types with `#[derive(AocSolution)]`; both end up in
//! `inventory` and are grouped into modules by [`LinkedModules::collect`].

use crate::body::AccessorBody;
use crate::container::Container;
use crate::error::{ResolveError, TypeLoadError};
use crate::solution::Solution;
use bitflags::bitflags;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Normalize a crate or artifact name into a module name
///
/// Cargo package names use `-` where crate names use `_`.
pub fn normalize_module_name(name: &str) -> String {
    name.replace('-', "_")
}

/// Identity of a loaded module (`name@version`)
///
/// Used to deduplicate modules while walking the reference graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModuleIdentity {
    name: String,
    version: Option<String>,
}

impl ModuleIdentity {
    /// Create an identity from a module name and optional version
    pub fn new(name: &str, version: Option<&str>) -> Self {
        Self {
            name: normalize_module_name(name),
            version: version.map(str::to_string),
        }
    }

    /// The module name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The module version, if known
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }
}

impl fmt::Display for ModuleIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(version) => write!(f, "{}@{}", self.name, version),
            None => f.write_str(&self.name),
        }
    }
}

/// A reference from one module to another
///
/// A reference without a version matches any version of the named module.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleRef {
    name: String,
    version: Option<String>,
}

impl ModuleRef {
    /// Reference a module by name, any version
    pub fn named(name: &str) -> Self {
        Self {
            name: normalize_module_name(name),
            version: None,
        }
    }

    /// Reference a specific version of a module
    pub fn versioned(name: &str, version: &str) -> Self {
        Self {
            name: normalize_module_name(name),
            version: Some(version.to_string()),
        }
    }

    /// The referenced module name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check whether a module identity satisfies this reference
    pub fn matches(&self, identity: &ModuleIdentity) -> bool {
        self.name == identity.name
            && self
                .version
                .as_deref()
                .is_none_or(|v| identity.version() == Some(v))
    }
}

impl fmt::Display for ModuleRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(version) => write!(f, "{}@{}", self.name, version),
            None => f.write_str(&self.name),
        }
    }
}

/// Result of loading a single type from a module listing
pub type TypeSlot = Result<&'static SolutionType, TypeLoadError>;

/// A unit of compiled code that can be queried for the types it defines
pub trait Module: Send + Sync + fmt::Debug {
    /// Identity used for deduplication
    fn identity(&self) -> ModuleIdentity;

    /// Modules this module references
    fn references(&self) -> Vec<ModuleRef>;

    /// List every type defined by this module
    ///
    /// # Returns
    /// * `Ok(slots)` - One slot per type; individual types may have failed to load
    /// * `Err(TypeLoadError)` - The module's types cannot be listed at all
    fn types(&self) -> Result<Vec<TypeSlot>, TypeLoadError>;
}

/// Whether a type can be instantiated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    /// A concrete type with a constructor
    Concrete,
    /// A type that only describes shared behavior
    Abstract,
}

bitflags! {
    /// Capabilities a type satisfies
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Capabilities: u8 {
        /// Built on [`BaseSolution`](crate::BaseSolution) through [`SolutionBase`](crate::SolutionBase)
        const SOLUTION_BASE = 1;
        /// Implements [`Solution`]
        const SOLUTION = 1 << 1;
        /// Everything a discoverable solution needs
        const REQUIRED = Self::SOLUTION_BASE.bits() | Self::SOLUTION.bits();
    }
}

/// Constructor stored in a [`SolutionType`]
pub type Constructor = fn(&Container) -> Result<Box<dyn Solution>, ResolveError>;

/// Registration record of a solution type
///
/// Holds everything discovery needs to know about a type without creating one:
/// its capabilities, the compiled bodies of its `year`/`day` accessors and the
/// constructor the dependency resolver calls later.
#[derive(Debug)]
pub struct SolutionType {
    /// Fully qualified type name
    pub name: &'static str,
    /// Name of the module (crate) defining the type
    pub module: &'static str,
    /// Whether the type can be instantiated
    pub kind: TypeKind,
    /// Capabilities the type satisfies
    pub capabilities: Capabilities,
    /// Compiled body of the `year` accessor
    pub year_body: AccessorBody,
    /// Compiled body of the `day` accessor
    pub day_body: AccessorBody,
    /// Constructor used by the dependency resolver
    pub constructor: Option<Constructor>,
}

impl SolutionType {
    /// Check whether this type is a concrete, constructible solution
    pub fn is_candidate(&self) -> bool {
        self.kind == TypeKind::Concrete
            && self.capabilities.contains(Capabilities::REQUIRED)
            && self.constructor.is_some()
    }
}

inventory::collect!(SolutionType);

/// Declaration of a statically linked module
///
/// Submitted by [`solution_module!`](crate::solution_module).
#[derive(Debug)]
pub struct ModuleDef {
    /// Crate name
    pub name: &'static str,
    /// Crate version
    pub version: &'static str,
    /// Names of referenced modules
    pub references: &'static [&'static str],
}

inventory::collect!(ModuleDef);

/// Declare the current crate as a solution module
///
/// Lists the modules this crate references, so discovery can walk from a root
/// module to every crate holding solutions.
///
/// # Example
///
/// ```ignore
/// // In the binary crate: the root module references the solution crates.
/// aoc_solver::solution_module!("aoc_solutions");
///
/// // In a solution crate without further references.
/// aoc_solver::solution_module!();
/// ```
#[macro_export]
macro_rules! solution_module {
    ($($reference:literal),* $(,)?) => {
        $crate::inventory::submit! {
            $crate::ModuleDef {
                name: ::core::env!("CARGO_CRATE_NAME"),
                version: ::core::env!("CARGO_PKG_VERSION"),
                references: &[$($reference),*],
            }
        }
    };
}

/// A module linked into the running executable
#[derive(Debug)]
pub struct LinkedModule {
    identity: ModuleIdentity,
    references: Vec<ModuleRef>,
    types: Vec<&'static SolutionType>,
}

impl LinkedModule {
    fn declared(def: &ModuleDef) -> Self {
        Self {
            identity: ModuleIdentity::new(def.name, Some(def.version)),
            references: def.references.iter().map(|r| ModuleRef::named(r)).collect(),
            types: Vec::new(),
        }
    }

    fn implicit(name: &str) -> Self {
        Self {
            identity: ModuleIdentity::new(name, None),
            references: Vec::new(),
            types: Vec::new(),
        }
    }
}

impl Module for LinkedModule {
    fn identity(&self) -> ModuleIdentity {
        self.identity.clone()
    }

    fn references(&self) -> Vec<ModuleRef> {
        self.references.clone()
    }

    fn types(&self) -> Result<Vec<TypeSlot>, TypeLoadError> {
        Ok(self.types.iter().map(|ty| Ok(*ty)).collect())
    }
}

/// Catalog of every module linked into the executable
#[derive(Debug, Clone)]
pub struct LinkedModules {
    modules: BTreeMap<String, Arc<LinkedModule>>,
}

impl LinkedModules {
    /// Collect every module and solution type submitted through `inventory`
    pub fn collect() -> Self {
        Self::from_parts(
            inventory::iter::<ModuleDef>(),
            inventory::iter::<SolutionType>(),
        )
    }

    /// Build a catalog from explicit module declarations and types
    ///
    /// Types whose crate has no declaration are grouped into an implicit module
    /// without references. If a crate is declared twice, the first declaration wins.
    pub fn from_parts<'a>(
        defs: impl IntoIterator<Item = &'a ModuleDef>,
        types: impl IntoIterator<Item = &'static SolutionType>,
    ) -> Self {
        let mut modules: BTreeMap<String, LinkedModule> = BTreeMap::new();

        for def in defs {
            let name = normalize_module_name(def.name);
            if modules.contains_key(&name) {
                tracing::warn!(module = %name, "module declared more than once, keeping the first declaration");
                continue;
            }
            modules.insert(name, LinkedModule::declared(def));
        }

        for ty in types {
            let name = normalize_module_name(ty.module);
            modules
                .entry(name)
                .or_insert_with_key(|name| LinkedModule::implicit(name))
                .types
                .push(ty);
        }

        Self {
            modules: modules
                .into_iter()
                .map(|(name, module)| (name, Arc::new(module)))
                .collect(),
        }
    }

    /// Find a linked module by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Module>> {
        self.modules
            .get(&normalize_module_name(name))
            .map(|m| Arc::clone(m) as Arc<dyn Module>)
    }

    /// Find the linked module satisfying a reference
    pub fn find(&self, reference: &ModuleRef) -> Option<Arc<dyn Module>> {
        self.modules
            .get(reference.name())
            .filter(|m| reference.matches(&m.identity))
            .map(|m| Arc::clone(m) as Arc<dyn Module>)
    }

    /// Iterate over every linked module
    pub fn iter(&self) -> impl Iterator<Item = Arc<dyn Module>> + '_ {
        self.modules
            .values()
            .map(|m| Arc::clone(m) as Arc<dyn Module>)
    }

    /// Number of linked modules
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Check if no module is linked
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}
