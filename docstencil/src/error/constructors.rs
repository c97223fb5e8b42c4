//! Constructors for `TemplateError`.

use super::TemplateError;

impl TemplateError {
    /// Construct an [`TemplateError::InvalidRule`] for the rule at `index`.
    ///
    /// # Examples
    ///
    /// ```
    /// use docstencil::TemplateError;
    /// let e = TemplateError::invalid_rule("jsdoc", 2, "empty composite selector");
    /// assert_eq!(
    ///     e.to_string(),
    ///     "invalid rule #2 in convention 'jsdoc': empty composite selector"
    /// );
    /// ```
    #[must_use]
    pub fn invalid_rule(
        convention: impl Into<String>,
        index: usize,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidRule {
            convention: convention.into(),
            index,
            reason: reason.into(),
        }
    }

    /// Construct an [`TemplateError::UnknownConvention`].
    #[must_use]
    pub fn unknown_convention(name: impl Into<String>) -> Self {
        Self::UnknownConvention { name: name.into() }
    }

    /// Construct a [`TemplateError::Shape`] for a table key.
    #[must_use]
    pub fn shape(key: impl Into<String>, expected: &'static str) -> Self {
        Self::Shape {
            key: key.into(),
            expected,
        }
    }

    /// Returns the rule index when the error points at a specific rule.
    #[must_use]
    pub const fn rule_index(&self) -> Option<usize> {
        match self {
            Self::InvalidRule { index, .. } => Some(*index),
            _ => None,
        }
    }
}

#[cfg(feature = "toml")]
impl From<toml::de::Error> for TemplateError {
    fn from(source: toml::de::Error) -> Self {
        Self::Toml {
            source: Box::new(source),
        }
    }
}
