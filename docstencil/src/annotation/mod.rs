//! Annotation definitions: ordered lists of line-generation rules.
//!
//! An [`Annotation`] describes how one documentation convention renders a
//! comment. Rules are plain data; nothing is checked when an annotation is
//! built or attached to a template. Structural problems surface when the
//! renderer processes the rule.
//!
//! The serialised form mirrors the rule tuples hosts write by hand:
//!
//! ```rust
//! use docstencil::Annotation;
//! use serde_json::json;
//!
//! let annotation: Annotation = serde_json::from_value(json!([
//!     [null, "/**"],
//!     ["Parameter", " * @param %s $1", {"type": ["func"]}],
//!     [["Parameter", "Type"], " * @param {%s} %s $1", {"required": "Tparam"}],
//!     [null, " */"],
//! ]))?;
//! assert_eq!(annotation.len(), 4);
//! # Ok::<_, serde_json::Error>(())
//! ```

mod rule;

use serde::{Deserialize, Serialize};

pub use rule::{AnnotationRule, RuleOptions, Selector};

/// Ordered rule list for one convention.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Annotation {
    rules: Vec<AnnotationRule>,
}

impl Annotation {
    /// Create an annotation without rules.
    #[must_use]
    pub const fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule, consuming and returning `self`.
    #[must_use]
    pub fn rule(mut self, rule: AnnotationRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Append a rule in place.
    pub fn push(&mut self, rule: AnnotationRule) {
        self.rules.push(rule);
    }

    /// Rules in evaluation order.
    #[must_use]
    pub fn rules(&self) -> &[AnnotationRule] {
        &self.rules
    }

    /// Number of rules.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` when the annotation has no rules.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl FromIterator<AnnotationRule> for Annotation {
    fn from_iter<I: IntoIterator<Item = AnnotationRule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Annotation {
    type Item = &'a AnnotationRule;
    type IntoIter = std::slice::Iter<'a, AnnotationRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

#[cfg(test)]
mod tests;
