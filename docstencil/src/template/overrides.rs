//! Partial template configuration applied with [`Template::configure`].
//!
//! Overrides merge shallowly: a field that is present replaces the current
//! value wholesale, including nested tables such as `append`; an absent
//! field leaves the current value alone. Annotation conventions and
//! unknown keys are top-level keys of their own, so each replaces only its
//! own entry.

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::{Annotation, AppendDirective, PositionFn, Template, TemplateError, TemplateResult};

const ANNOTATION_CONVENTION: &str = "annotation_convention";
const USE_DEFAULT_COMMENT: &str = "use_default_comment";
const APPEND: &str = "append";

/// Set of template fields to overwrite.
///
/// # Examples
///
/// ```
/// use docstencil::{Template, TemplateOverrides};
/// use serde_json::json;
///
/// let mut template = Template::new();
/// template
///     .configure(TemplateOverrides::new().use_default_comment(true))
///     .configure(TemplateOverrides::from_value(json!({
///         "annotation_convention": "numpydoc",
///         "custom_flag": 3,
///     }))?);
/// assert!(template.use_default_comment());
/// assert_eq!(template.annotation_convention(), Some("numpydoc"));
/// assert_eq!(template.extra("custom_flag"), Some(&json!(3)));
/// # Ok::<_, docstencil::TemplateError>(())
/// ```
#[derive(Clone, Default)]
pub struct TemplateOverrides {
    pub(super) annotation_convention: Option<String>,
    pub(super) use_default_comment: Option<bool>,
    pub(super) append: Option<AppendDirective>,
    pub(super) position: Option<PositionFn>,
    pub(super) annotations: BTreeMap<String, Annotation>,
    pub(super) extra: Map<String, Value>,
}

impl TemplateOverrides {
    /// Overrides that change nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the selected convention name.
    #[must_use]
    pub fn annotation_convention(mut self, name: impl Into<String>) -> Self {
        self.annotation_convention = Some(name.into());
        self
    }

    /// Replace the default-comment flag.
    #[must_use]
    pub const fn use_default_comment(mut self, enabled: bool) -> Self {
        self.use_default_comment = Some(enabled);
        self
    }

    /// Replace the whole append directive.
    #[must_use]
    pub fn append(mut self, directive: AppendDirective) -> Self {
        self.append = Some(directive);
        self
    }

    /// Replace the position callback.
    #[must_use]
    pub fn position(mut self, callback: PositionFn) -> Self {
        self.position = Some(callback);
        self
    }

    /// Replace the annotation stored under `name`.
    #[must_use]
    pub fn annotation(mut self, name: impl Into<String>, annotation: Annotation) -> Self {
        let key = name.into();
        self.extra.remove(&key);
        self.annotations.insert(key, annotation);
        self
    }

    /// Replace an unknown key, preserved verbatim.
    #[must_use]
    pub fn extra(mut self, key: impl Into<String>, value: Value) -> Self {
        let name = key.into();
        self.annotations.remove(&name);
        self.extra.insert(name, value);
        self
    }

    /// Build overrides from a loose table.
    ///
    /// `annotation_convention` must be a string (or null, meaning absent),
    /// `use_default_comment` a boolean and `append` an append table.
    /// Lists of tuples that read as rule lists become annotation
    /// conventions; every other key, including lists that do not parse as
    /// rules, is kept verbatim. A malformed rule list is only reported when
    /// it is selected for rendering.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::Shape`] for a non-table input or a mistyped
    /// known key and [`TemplateError::Parse`] for a malformed `append`
    /// table.
    pub fn from_value(value: Value) -> TemplateResult<Self> {
        let Value::Object(table) = value else {
            return Err(TemplateError::shape("<root>", "a table"));
        };
        let mut overrides = Self::new();
        for (key, entry) in table {
            overrides.route(key, entry)?;
        }
        Ok(overrides)
    }

    fn route(&mut self, key: String, raw: Value) -> TemplateResult<()> {
        let value = match (key.as_str(), raw) {
            (ANNOTATION_CONVENTION, Value::Null) => return Ok(()),
            (ANNOTATION_CONVENTION, Value::String(name)) => {
                self.annotation_convention = Some(name);
                return Ok(());
            }
            (ANNOTATION_CONVENTION, _) => {
                return Err(TemplateError::shape(ANNOTATION_CONVENTION, "a string"));
            }
            (USE_DEFAULT_COMMENT, Value::Bool(enabled)) => {
                self.use_default_comment = Some(enabled);
                return Ok(());
            }
            (USE_DEFAULT_COMMENT, _) => {
                return Err(TemplateError::shape(USE_DEFAULT_COMMENT, "a boolean"));
            }
            (APPEND, table) => {
                self.append = Some(serde_json::from_value(table)?);
                return Ok(());
            }
            (_, other) => other,
        };
        let parsed = is_tuple_list(&value)
            .then(|| Annotation::deserialize(&value))
            .transpose();
        match parsed {
            Ok(Some(annotation)) => {
                self.annotations.insert(key, annotation);
            }
            Ok(None) => {
                self.extra.insert(key, value);
            }
            Err(err) => {
                debug!(key = %key, error = %err, "kept unparsable rule list verbatim");
                self.extra.insert(key, value);
            }
        }
        Ok(())
    }
}

/// Whether `value` has the outer shape of a rule list: an array of arrays.
fn is_tuple_list(value: &Value) -> bool {
    value
        .as_array()
        .is_some_and(|items| items.iter().all(Value::is_array))
}

impl fmt::Debug for TemplateOverrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemplateOverrides")
            .field("annotation_convention", &self.annotation_convention)
            .field("use_default_comment", &self.use_default_comment)
            .field("append", &self.append)
            .field("position", &self.position.as_ref().map(|_| "<callback>"))
            .field("annotations", &self.annotations.keys().collect::<Vec<_>>())
            .field("extra", &self.extra)
            .finish()
    }
}

impl Template {
    /// Shallow-merge `overrides` into this template.
    ///
    /// Present fields replace current values; nothing is validated.
    pub fn configure(&mut self, overrides: TemplateOverrides) -> &mut Self {
        let TemplateOverrides {
            annotation_convention,
            use_default_comment,
            append,
            position,
            annotations,
            extra,
        } = overrides;
        if let Some(name) = annotation_convention {
            self.annotation_convention = Some(name);
        }
        if let Some(enabled) = use_default_comment {
            self.use_default_comment = enabled;
        }
        if let Some(directive) = append {
            self.append = Some(directive);
        }
        if let Some(callback) = position {
            self.position = Some(callback);
        }
        for (name, annotation) in annotations {
            self.extra.remove(&name);
            self.annotations.insert(name, annotation);
        }
        for (key, value) in extra {
            self.annotations.remove(&key);
            self.extra.insert(key, value);
        }
        self
    }
}
