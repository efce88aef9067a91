//! Solution registry for looking up discovered solutions

use crate::error::RegistrationError;
use crate::module::SolutionType;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Metadata associating a solution type with its (year, day) key
///
/// Both values are non-negative and were read from literal accessor bodies.
#[derive(Debug, Clone, Copy)]
pub struct SolutionDescriptor {
    implementation: &'static SolutionType,
    year: i32,
    day: i32,
}

impl SolutionDescriptor {
    /// Create a descriptor
    ///
    /// Returns `None` if `year` or `day` is negative.
    pub fn new(implementation: &'static SolutionType, year: i32, day: i32) -> Option<Self> {
        (year >= 0 && day >= 0).then_some(Self {
            implementation,
            year,
            day,
        })
    }

    /// The type implementing the solution
    pub fn implementation(&self) -> &'static SolutionType {
        self.implementation
    }

    /// The Advent of Code year
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The day within the year
    pub fn day(&self) -> i32 {
        self.day
    }

    /// The registry key: the year followed by the zero-padded day
    ///
    /// # Example
    ///
    /// ```
    /// # use aoc_solver::{AccessorBody, Capabilities, SolutionDescriptor, SolutionType, TypeKind};
    /// # static DAY_2: SolutionType = SolutionType {
    /// #     name: "Day2",
    /// #     module: "doc",
    /// #     kind: TypeKind::Concrete,
    /// #     capabilities: Capabilities::REQUIRED,
    /// #     year_body: AccessorBody::literal(2025),
    /// #     day_body: AccessorBody::literal(2),
    /// #     constructor: None,
    /// # };
    /// let descriptor = SolutionDescriptor::new(&DAY_2, 2025, 2).unwrap();
    /// assert_eq!(descriptor.key(), "202502");
    /// ```
    pub fn key(&self) -> String {
        format!("{}{:02}", self.year, self.day)
    }
}

impl PartialEq for SolutionDescriptor {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.implementation, other.implementation)
            && self.year == other.year
            && self.day == other.day
    }
}

impl Eq for SolutionDescriptor {}

/// Builder for constructing a SolutionRegistry
///
/// Descriptors are collected first and checked for conflicting keys when the
/// registry is built, so a conflict always names every implementation involved.
///
/// # Example
///
/// ```
/// # use aoc_solver::RegistryBuilder;
/// let registry = RegistryBuilder::new().build().unwrap();
/// assert!(registry.lookup(2025, 1).is_none());
/// ```
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    descriptors: Vec<SolutionDescriptor>,
}

impl RegistryBuilder {
    /// Create a new empty registry builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a descriptor
    pub fn register(mut self, descriptor: SolutionDescriptor) -> Self {
        self.descriptors.push(descriptor);
        self
    }

    /// Add every descriptor from an iterator
    pub fn register_all(mut self, descriptors: impl IntoIterator<Item = SolutionDescriptor>) -> Self {
        self.descriptors.extend(descriptors);
        self
    }

    /// Finalize the builder and create an immutable registry
    ///
    /// # Returns
    /// * `Ok(SolutionRegistry)` - Every key is unique
    /// * `Err(RegistrationError::DuplicateKey)` - Two or more descriptors share a key;
    ///   the smallest conflicting key is reported
    pub fn build(self) -> Result<SolutionRegistry, RegistrationError> {
        let mut groups: BTreeMap<(i32, i32), Vec<SolutionDescriptor>> = BTreeMap::new();
        for descriptor in self.descriptors {
            groups
                .entry((descriptor.year, descriptor.day))
                .or_default()
                .push(descriptor);
        }

        if let Some(conflict) = groups.values().find(|group| group.len() > 1) {
            let mut implementations: Vec<&'static str> =
                conflict.iter().map(|d| d.implementation.name).collect();
            implementations.sort_unstable();
            return Err(RegistrationError::DuplicateKey {
                key: conflict[0].key(),
                implementations,
            });
        }

        let solutions = groups
            .into_iter()
            .filter_map(|(key, group)| group.into_iter().next().map(|d| (key, d)))
            .collect();

        Ok(SolutionRegistry { solutions })
    }
}

static GLOBAL_REGISTRY: OnceLock<SolutionRegistry> = OnceLock::new();

/// Immutable registry of discovered solutions
///
/// Once built, it cannot be modified, so lookups need no synchronization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolutionRegistry {
    solutions: BTreeMap<(i32, i32), SolutionDescriptor>,
}

impl SolutionRegistry {
    /// Look up the descriptor registered for a year and day
    pub fn lookup(&self, year: i32, day: i32) -> Option<&SolutionDescriptor> {
        self.solutions.get(&(year, day))
    }

    /// Iterate over every registered descriptor, ordered by key
    pub fn all(&self) -> impl Iterator<Item = &SolutionDescriptor> + '_ {
        self.solutions.values()
    }

    /// Number of registered solutions
    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    /// Check if no solution is registered
    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    /// Publish this registry as the process-wide registry
    ///
    /// The global registry can be installed exactly once.
    ///
    /// # Returns
    /// * `Ok(&'static SolutionRegistry)` - The installed registry
    /// * `Err(RegistrationError::AlreadyInstalled)` - A registry was installed before
    pub fn install(self) -> Result<&'static SolutionRegistry, RegistrationError> {
        let mut pending = Some(self);
        let installed = GLOBAL_REGISTRY.get_or_init(|| pending.take().unwrap_or_default());
        match pending {
            None => Ok(installed),
            Some(_) => Err(RegistrationError::AlreadyInstalled),
        }
    }

    /// The process-wide registry, if one has been installed
    pub fn global() -> Option<&'static SolutionRegistry> {
        GLOBAL_REGISTRY.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::AccessorBody;
    use crate::module::{Capabilities, TypeKind};

    const fn record(name: &'static str) -> SolutionType {
        SolutionType {
            name,
            module: "registry_tests",
            kind: TypeKind::Concrete,
            capabilities: Capabilities::REQUIRED,
            year_body: AccessorBody::computed(),
            day_body: AccessorBody::computed(),
            constructor: None,
        }
    }

    static FIRST: SolutionType = record("First");
    static SECOND: SolutionType = record("Second");
    static THIRD: SolutionType = record("Third");

    fn descriptor(ty: &'static SolutionType, year: i32, day: i32) -> SolutionDescriptor {
        SolutionDescriptor::new(ty, year, day).unwrap()
    }

    #[test]
    fn test_key_format() {
        assert_eq!(descriptor(&FIRST, 2025, 2).key(), "202502");
        assert_eq!(descriptor(&FIRST, 2025, 25).key(), "202525");
        assert_eq!(descriptor(&FIRST, 2015, 0).key(), "201500");
    }

    #[test]
    fn test_negative_values_are_rejected() {
        assert!(SolutionDescriptor::new(&FIRST, -1, 1).is_none());
        assert!(SolutionDescriptor::new(&FIRST, 2025, -1).is_none());
    }

    #[test]
    fn test_lookup_and_all() {
        let registry = RegistryBuilder::new()
            .register(descriptor(&SECOND, 2025, 2))
            .register(descriptor(&FIRST, 2025, 1))
            .build()
            .unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.lookup(2025, 1).unwrap().implementation().name, "First");
        assert!(registry.lookup(2099, 1).is_none());

        let keys: Vec<String> = registry.all().map(SolutionDescriptor::key).collect();
        assert_eq!(keys, vec!["202501", "202502"]);
        assert_eq!(registry.all().count(), 2);
    }

    #[test]
    fn test_duplicate_key_names_key_and_implementations() {
        let err = RegistryBuilder::new()
            .register_all([
                descriptor(&THIRD, 2024, 5),
                descriptor(&FIRST, 2025, 3),
                descriptor(&SECOND, 2025, 3),
            ])
            .build()
            .unwrap_err();

        match &err {
            RegistrationError::DuplicateKey { key, implementations } => {
                assert_eq!(key, "202503");
                assert_eq!(implementations, &vec!["First", "Second"]);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().contains("202503"));
    }
}
