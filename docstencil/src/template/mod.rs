//! Per-filetype annotation template.
//!
//! A [`Template`] is built once when a filetype's configuration loads,
//! optionally customised, and then read for every annotation request. It
//! maps convention names to [`Annotation`] definitions and carries the
//! selected convention plus placement settings.
//!
//! Mutators take `&mut self` and return `&mut Self` so calls chain:
//!
//! ```rust
//! use docstencil::{DiscoveredNodes, RenderRequest, Template};
//!
//! let mut template = Template::new();
//! template
//!     .add_annotation("numpydoc")
//!     .add_default_annotation("google_docstrings");
//!
//! let nodes = DiscoveredNodes::new()
//!     .with_values("HasParameter", ["true"])
//!     .with_values("Parameter", ["path"]);
//! let rendered = template.render(&RenderRequest::new("func", &nodes))?;
//! assert_eq!(rendered.lines(), ["\"\"\"", "", "Args:", "    path (): ", "\"\"\""]);
//! # Ok::<_, docstencil::TemplateError>(())
//! ```

mod overrides;

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::{
    Annotation, AppendDirective, BuiltinConventions, ConventionRegistry, DiscoveredNodes,
    PositionFn, RenderOptions, RenderedAnnotation, Renderer, TemplateError, TemplateResult,
    TrailingSeparator,
};

pub use overrides::TemplateOverrides;

/// Annotation conventions and placement settings for one filetype.
#[derive(Clone, Default)]
pub struct Template {
    annotations: BTreeMap<String, Annotation>,
    annotation_convention: Option<String>,
    use_default_comment: bool,
    append: Option<AppendDirective>,
    position: Option<PositionFn>,
    extra: Map<String, Value>,
}

impl Template {
    /// An empty template with no conventions attached.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a template from a loose table.
    ///
    /// Equivalent to configuring an empty template with
    /// [`TemplateOverrides::from_value`].
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`TemplateOverrides::from_value`].
    pub fn from_value(value: Value) -> TemplateResult<Self> {
        let mut template = Self::new();
        template.configure(TemplateOverrides::from_value(value)?);
        Ok(template)
    }

    /// Build a template from TOML text.
    ///
    /// TOML has no null, so rules without a selector use an empty string.
    ///
    /// ```rust
    /// use docstencil::Template;
    ///
    /// let template = Template::from_toml_str(r##"
    ///     annotation_convention = "banner"
    ///     banner = [["", "# $1"], ["Parameter", "# - %s"]]
    /// "##)?;
    /// assert_eq!(template.selected_annotation().map(|a| a.len()), Some(2));
    /// # Ok::<_, docstencil::TemplateError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::Toml`] for invalid TOML and otherwise the
    /// errors of [`Template::from_value`].
    #[cfg(feature = "toml")]
    pub fn from_toml_str(text: &str) -> TemplateResult<Self> {
        let table: toml::Table = toml::from_str(text)?;
        Self::from_value(serde_json::to_value(table)?)
    }

    /// Serialise the template into the flat table shape `from_value` reads.
    ///
    /// The position callback has no table form and is omitted.
    #[must_use]
    pub fn to_value(&self) -> Value {
        let mut table = self.extra.clone();
        if let Some(name) = &self.annotation_convention {
            table.insert("annotation_convention".to_owned(), Value::String(name.clone()));
        }
        table.insert(
            "use_default_comment".to_owned(),
            Value::Bool(self.use_default_comment),
        );
        if let Some(directive) = &self.append {
            table.insert(
                "append".to_owned(),
                serde_json::to_value(directive).unwrap_or(Value::Null),
            );
        }
        for (name, annotation) in &self.annotations {
            table.insert(
                name.clone(),
                serde_json::to_value(annotation).unwrap_or(Value::Null),
            );
        }
        Value::Object(table)
    }

    /// Attach the built-in convention `name`, if it exists.
    ///
    /// Unknown names leave the template untouched.
    pub fn add_annotation(&mut self, name: &str) -> &mut Self {
        self.add_annotation_from(name, &BuiltinConventions)
    }

    /// Attach convention `name` from `registry`, if it exists.
    ///
    /// Unknown names leave the template untouched.
    pub fn add_annotation_from(
        &mut self,
        name: &str,
        registry: &dyn ConventionRegistry,
    ) -> &mut Self {
        match registry.lookup(name) {
            Some(annotation) => {
                debug!(
                    convention = name,
                    rules = annotation.len(),
                    "attached annotation convention"
                );
                self.annotations.insert(name.to_owned(), annotation);
            }
            None => debug!(convention = name, "annotation convention not found; ignoring"),
        }
        self
    }

    /// Select `name` and attach the built-in convention of that name.
    ///
    /// The selection sticks even when `name` is not a built-in convention;
    /// use [`Template::try_add_default_annotation`] to fail instead.
    pub fn add_default_annotation(&mut self, name: &str) -> &mut Self {
        self.add_default_annotation_from(name, &BuiltinConventions)
    }

    /// Select `name` and attach it from `registry`.
    ///
    /// The selection sticks even when `registry` does not know `name`.
    pub fn add_default_annotation_from(
        &mut self,
        name: &str,
        registry: &dyn ConventionRegistry,
    ) -> &mut Self {
        self.annotation_convention = Some(name.to_owned());
        self.add_annotation_from(name, registry)
    }

    /// Select and attach `name` from `registry`, or change nothing.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::UnknownConvention`] when `registry` does not
    /// know `name`; the template is left as it was.
    pub fn try_add_default_annotation(
        &mut self,
        name: &str,
        registry: &dyn ConventionRegistry,
    ) -> TemplateResult<&mut Self> {
        let annotation = registry
            .lookup(name)
            .ok_or_else(|| TemplateError::unknown_convention(name))?;
        self.annotations.insert(name.to_owned(), annotation);
        self.annotation_convention = Some(name.to_owned());
        Ok(self)
    }

    /// Attach a caller-built annotation under `name`, optionally selecting it.
    ///
    /// The annotation is stored as given; problems in its rules surface when
    /// it is rendered.
    pub fn add_custom_annotation(
        &mut self,
        name: &str,
        annotation: Annotation,
        is_default: bool,
    ) -> &mut Self {
        self.annotations.insert(name.to_owned(), annotation);
        if is_default {
            self.annotation_convention = Some(name.to_owned());
        }
        self
    }

    /// The annotation attached under `name`.
    #[must_use]
    pub fn annotation(&self, name: &str) -> Option<&Annotation> {
        self.annotations.get(name)
    }

    /// Names of all attached conventions, sorted.
    pub fn annotation_names(&self) -> impl Iterator<Item = &str> {
        self.annotations.keys().map(String::as_str)
    }

    /// The selected convention name.
    #[must_use]
    pub fn annotation_convention(&self) -> Option<&str> {
        self.annotation_convention.as_deref()
    }

    /// The annotation of the selected convention, when both exist.
    #[must_use]
    pub fn selected_annotation(&self) -> Option<&Annotation> {
        self.annotation_convention()
            .and_then(|name| self.annotation(name))
    }

    /// Whether rendered lines get the filetype's comment token.
    #[must_use]
    pub const fn use_default_comment(&self) -> bool {
        self.use_default_comment
    }

    /// The append directive.
    #[must_use]
    pub const fn append(&self) -> Option<&AppendDirective> {
        self.append.as_ref()
    }

    /// The position callback.
    #[must_use]
    pub const fn position(&self) -> Option<&PositionFn> {
        self.position.as_ref()
    }

    /// A key the template does not interpret, kept verbatim.
    #[must_use]
    pub fn extra(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    /// Render the selected convention for one element.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::NoConventionSelected`] when nothing is
    /// selected, [`TemplateError::InvalidAnnotation`] when the selected name
    /// holds a list that does not parse as rules,
    /// [`TemplateError::MissingConvention`] when it holds nothing usable, and
    /// [`TemplateError::InvalidRule`] when a rule cannot be rendered.
    pub fn render(&self, request: &RenderRequest<'_>) -> TemplateResult<RenderedAnnotation> {
        let name = self
            .annotation_convention()
            .ok_or(TemplateError::NoConventionSelected)?;
        let annotation = self
            .annotation(name)
            .ok_or_else(|| self.unusable_convention(name))?;
        let options = RenderOptions::default()
            .convention(name)
            .trailing_separator(request.trailing_separator);
        let rendered = Renderer::new(annotation)
            .with_options(options)
            .render(request.element_type, request.nodes)?;
        Ok(match request.comment_token {
            Some(token) if self.use_default_comment => rendered.with_comment_prefix(token),
            _ => rendered,
        })
    }

    fn unusable_convention(&self, name: &str) -> TemplateError {
        let parse_error = self
            .extra(name)
            .filter(|value| value.is_array())
            .and_then(|value| Annotation::deserialize(value).err());
        match parse_error {
            Some(source) => TemplateError::InvalidAnnotation {
                name: name.to_owned(),
                source,
            },
            None => TemplateError::MissingConvention {
                name: name.to_owned(),
            },
        }
    }
}

impl fmt::Debug for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Template")
            .field("annotation_convention", &self.annotation_convention)
            .field("annotations", &self.annotations.keys().collect::<Vec<_>>())
            .field("use_default_comment", &self.use_default_comment)
            .field("append", &self.append)
            .field("position", &self.position)
            .field("extra", &self.extra)
            .finish()
    }
}

/// Inputs for [`Template::render`].
#[derive(Debug, Clone, Copy)]
pub struct RenderRequest<'a> {
    element_type: &'a str,
    nodes: &'a DiscoveredNodes,
    comment_token: Option<&'a str>,
    trailing_separator: TrailingSeparator,
}

impl<'a> RenderRequest<'a> {
    /// Request rendering for an element of `element_type`.
    #[must_use]
    pub const fn new(element_type: &'a str, nodes: &'a DiscoveredNodes) -> Self {
        Self {
            element_type,
            nodes,
            comment_token: None,
            trailing_separator: TrailingSeparator::Keep,
        }
    }

    /// The filetype's comment token, used when the template asks for it.
    #[must_use]
    pub const fn comment_token(mut self, token: &'a str) -> Self {
        self.comment_token = Some(token);
        self
    }

    /// Placement of `after_each` lines.
    #[must_use]
    pub const fn trailing_separator(mut self, policy: TrailingSeparator) -> Self {
        self.trailing_separator = policy;
        self
    }
}
