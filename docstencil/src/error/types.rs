//! Primary error enum for template configuration and rendering.

use thiserror::Error;

/// Errors that can occur while loading templates or rendering annotations.
///
/// Benign configuration misses, such as asking for a convention the
/// registry does not know, are not errors; they surface here only through
/// the strict [`crate::Template::try_add_default_annotation`] variant.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TemplateError {
    /// A rule could not be rendered; generation for the element is aborted.
    #[error("invalid rule #{index} in convention '{convention}': {reason}")]
    InvalidRule {
        /// Convention that owns the offending rule.
        convention: String,
        /// Zero-based position of the rule within the annotation.
        index: usize,
        /// Human-readable description of what is wrong with the rule.
        reason: String,
    },

    /// Rendering was requested but no convention is selected.
    #[error("no annotation convention selected")]
    NoConventionSelected,

    /// The selected convention has no attached annotation definition.
    #[error("annotation convention '{name}' is selected but not attached")]
    MissingConvention {
        /// Name of the selected convention.
        name: String,
    },

    /// The convention registry does not know the requested name.
    #[error("unknown annotation convention '{name}'")]
    UnknownConvention {
        /// Name that failed to resolve.
        name: String,
    },

    /// A loose table had a value of the wrong shape for a known key.
    #[error("template key '{key}' must be {expected}")]
    Shape {
        /// Offending key.
        key: String,
        /// Description of the accepted shape.
        expected: &'static str,
    },

    /// The selected convention's key holds a list that is not a rule list.
    #[error("annotation '{name}' is not a valid rule list: {source}")]
    InvalidAnnotation {
        /// Key holding the annotation.
        name: String,
        /// Underlying deserialisation error.
        #[source]
        source: serde_json::Error,
    },

    /// Deserialising template data from JSON values failed.
    #[error("failed to parse template data: {0}")]
    Parse(#[from] serde_json::Error),

    /// Parsing TOML template text failed.
    #[error("failed to parse TOML template: {source}")]
    Toml {
        /// Underlying error reported by the TOML parser.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}
