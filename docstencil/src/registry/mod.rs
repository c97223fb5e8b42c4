//! Lookup of named annotation conventions.
//!
//! Templates attach conventions by name. The lookup is fallible by value:
//! a name the registry does not know yields `None`, which callers treat as
//! a normal outcome rather than an error.

mod builtin;

use std::collections::BTreeMap;

use crate::Annotation;

pub use builtin::BuiltinConventions;

/// Source of predefined annotation conventions.
pub trait ConventionRegistry {
    /// Resolve `name` to its annotation definition.
    fn lookup(&self, name: &str) -> Option<Annotation>;
}

impl<R: ConventionRegistry + ?Sized> ConventionRegistry for &R {
    fn lookup(&self, name: &str) -> Option<Annotation> {
        (**self).lookup(name)
    }
}

/// Registry populated at runtime by the host.
///
/// # Examples
///
/// ```
/// use docstencil::{Annotation, AnnotationRule, ConventionRegistry, RegistryMap};
///
/// let mut registry = RegistryMap::new();
/// registry.register("banner", Annotation::new().rule(AnnotationRule::always("# $1")));
/// assert!(registry.lookup("banner").is_some());
/// assert!(registry.lookup("missing").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RegistryMap {
    conventions: BTreeMap<String, Annotation>,
}

impl RegistryMap {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `annotation` under `name`, replacing any earlier entry.
    pub fn register(&mut self, name: impl Into<String>, annotation: Annotation) -> &mut Self {
        self.conventions.insert(name.into(), annotation);
        self
    }

    /// Registered convention names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.conventions.keys().map(String::as_str)
    }
}

impl ConventionRegistry for RegistryMap {
    fn lookup(&self, name: &str) -> Option<Annotation> {
        self.conventions.get(name).cloned()
    }
}
