//! Evaluates annotation rules against discovered values.
//!
//! Rules run in declared order and every matching rule contributes lines.
//! All rules that apply to the element are checked before any line is
//! produced, so a structurally invalid rule aborts the whole render instead
//! of yielding partial text.

mod format;
mod output;

use tracing::{trace, warn};

use crate::{Annotation, AnnotationRule, DiscoveredNodes, Selector, TemplateError, TemplateResult};

pub use output::{JumpMarker, RenderedAnnotation};

const NO_VALUES: &[&str] = &[];

/// Default jump-marker token.
pub const DEFAULT_MARKER: &str = "$1";

/// Convention name reported for annotations rendered outside a template.
pub const CUSTOM_CONVENTION: &str = "<custom>";

/// Whether `after_each` lines follow the last rendered instance too.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TrailingSeparator {
    /// Emit the line after every instance, including the last.
    #[default]
    Keep,
    /// Emit the line only between instances.
    Suppress,
}

/// Settings for a render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    convention: String,
    marker: String,
    trailing_separator: TrailingSeparator,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            convention: CUSTOM_CONVENTION.to_owned(),
            marker: DEFAULT_MARKER.to_owned(),
            trailing_separator: TrailingSeparator::default(),
        }
    }
}

impl RenderOptions {
    /// Name used when reporting invalid rules.
    #[must_use]
    pub fn convention(mut self, name: impl Into<String>) -> Self {
        self.convention = name.into();
        self
    }

    /// Token marking cursor targets in templates.
    #[must_use]
    pub fn marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    /// Placement of `after_each` lines.
    #[must_use]
    pub const fn trailing_separator(mut self, policy: TrailingSeparator) -> Self {
        self.trailing_separator = policy;
        self
    }
}

/// Renders one annotation.
///
/// # Examples
///
/// ```
/// use docstencil::{Annotation, AnnotationRule, DiscoveredNodes, JumpMarker, Renderer};
///
/// let annotation = Annotation::new().rule(
///     AnnotationRule::for_kind("Parameter", "%s: $1")
///         .before_first_item(["Parameters", "----------"]),
/// );
/// let nodes = DiscoveredNodes::new().with_values("Parameter", ["a", "b"]);
/// let rendered = Renderer::new(&annotation).render("func", &nodes)?;
/// assert_eq!(rendered.lines(), ["Parameters", "----------", "a: ", "b: "]);
/// assert_eq!(rendered.first_marker(), Some(JumpMarker { line: 2, column: 3 }));
/// # Ok::<_, docstencil::TemplateError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Renderer<'a> {
    annotation: &'a Annotation,
    options: RenderOptions,
}

/// How a matching rule fires.
enum Firing<'n> {
    /// Once, without substitution values.
    Once,
    /// Once per matched instance, with that instance's slot values.
    PerInstance(Vec<Vec<&'n str>>),
}

impl<'a> Renderer<'a> {
    /// Create a renderer with default options.
    #[must_use]
    pub fn new(annotation: &'a Annotation) -> Self {
        Self {
            annotation,
            options: RenderOptions::default(),
        }
    }

    /// Replace the render options.
    #[must_use]
    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// Render the annotation for an element of `element_type`.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::InvalidRule`] naming the first applicable
    /// rule that cannot be rendered: an empty composite selector or a
    /// template with more `%s` slots than the rule supplies values.
    pub fn render(
        &self,
        element_type: &str,
        nodes: &DiscoveredNodes,
    ) -> TemplateResult<RenderedAnnotation> {
        self.validate(element_type)?;

        let mut rendered = RenderedAnnotation::default();
        for (index, rule) in self.annotation.rules().iter().enumerate() {
            if !rule.applies_to(element_type) {
                trace!(index, element_type, "rule skipped: element type excluded");
                continue;
            }
            let Some(firing) = fire(rule, nodes) else {
                trace!(index, "rule skipped: no match");
                continue;
            };
            trace!(index, "rule fired");
            self.emit(rule, firing, &mut rendered);
        }
        Ok(rendered)
    }

    fn validate(&self, element_type: &str) -> TemplateResult<()> {
        for (index, rule) in self.annotation.rules().iter().enumerate() {
            if !rule.applies_to(element_type) {
                continue;
            }
            if let Err(reason) = check_rule(rule) {
                warn!(
                    convention = %self.options.convention,
                    index,
                    %reason,
                    "aborting annotation render on invalid rule"
                );
                return Err(TemplateError::invalid_rule(
                    self.options.convention.clone(),
                    index,
                    reason,
                ));
            }
        }
        Ok(())
    }

    fn emit(&self, rule: &AnnotationRule, firing: Firing<'_>, rendered: &mut RenderedAnnotation) {
        let marker = self.options.marker.as_str();
        let literal = |rendered: &mut RenderedAnnotation, line: &str| {
            let expanded = format::expand(line, None, marker);
            rendered.push_line(expanded.text, &expanded.markers);
        };

        for header in rule.options().before_first_item.iter().flatten() {
            literal(rendered, header.as_str());
        }

        match firing {
            Firing::Once => {
                let expanded = format::expand(rule.template(), Some(NO_VALUES), marker);
                rendered.push_line(expanded.text, &expanded.markers);
            }
            Firing::PerInstance(instances) => {
                let count = instances.len();
                for (position, values) in instances.iter().enumerate() {
                    let expanded = format::expand(rule.template(), Some(values.as_slice()), marker);
                    rendered.push_line(expanded.text, &expanded.markers);
                    let is_last = position + 1 == count;
                    if let Some(separator) = rule.options().after_each.as_deref()
                        && (!is_last || self.options.trailing_separator == TrailingSeparator::Keep)
                    {
                        literal(rendered, separator);
                    }
                }
            }
        }
    }
}

/// Structural checks for a rule the renderer is about to process.
fn check_rule(rule: &AnnotationRule) -> Result<(), String> {
    match rule.selector() {
        Selector::Composite(kinds) if kinds.is_empty() => {
            return Err("composite selector names no value kinds".to_owned());
        }
        Selector::Always | Selector::Kind(_) | Selector::Composite(_) => {}
    }
    let supplied = if rule.options().no_results {
        0
    } else {
        rule.selector().value_count()
    };
    let slots = format::count_slots(rule.template());
    if slots > supplied {
        return Err(format!(
            "template has {slots} `%s` slot(s) but the rule supplies {supplied} value(s)"
        ));
    }
    Ok(())
}

/// Decides whether and how `rule` fires against `nodes`.
fn fire<'n>(rule: &AnnotationRule, nodes: &'n DiscoveredNodes) -> Option<Firing<'n>> {
    let matches = match rule.selector() {
        Selector::Always => {
            let fires = !rule.options().no_results || nodes.is_empty();
            return fires.then_some(Firing::Once);
        }
        Selector::Kind(kind) => nodes
            .instances(kind)
            .iter()
            .map(|instance| vec![instance.display()])
            .collect::<Vec<_>>(),
        Selector::Composite(kinds) => composite_matches(kinds, rule, nodes),
    };
    if rule.options().no_results {
        matches.is_empty().then_some(Firing::Once)
    } else if matches.is_empty() {
        None
    } else {
        Some(Firing::PerInstance(matches))
    }
}

/// Slot values for every `required` instance holding all of `kinds`.
///
/// A missing `required` option or composite kind yields no matches.
fn composite_matches<'n>(
    kinds: &[String],
    rule: &AnnotationRule,
    nodes: &'n DiscoveredNodes,
) -> Vec<Vec<&'n str>> {
    let Some(required) = rule.options().required.as_deref() else {
        return Vec::new();
    };
    nodes
        .instances(required)
        .iter()
        .filter_map(|instance| {
            kinds
                .iter()
                .map(|kind| instance.first(kind))
                .collect::<Option<Vec<_>>>()
        })
        .collect()
}
