//! A single line-generation rule and its options.

use serde::{Deserialize, Serialize};

/// Chooses which discovered values a rule renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// No selector: the rule fires once, unconditionally.
    Always,
    /// Fires once per discovered instance of the named value kind.
    Kind(String),
    /// Fires once per instance of the `required` kind whose groups hold all
    /// of the listed kinds together.
    Composite(Vec<String>),
}

impl Selector {
    /// Number of values this selector supplies to `%s` slots per firing.
    #[must_use]
    pub fn value_count(&self) -> usize {
        match self {
            Self::Always => 0,
            Self::Kind(_) => 1,
            Self::Composite(kinds) => kinds.len(),
        }
    }
}

/// Optional behaviour attached to a rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleOptions {
    /// Render only when the selector matches nothing.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub no_results: bool,
    /// Element types the rule is restricted to; `None` means all.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<String>>,
    /// Literal lines emitted once, before the first line the rule renders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before_first_item: Option<Vec<String>>,
    /// Literal line emitted after each rendered instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after_each: Option<String>,
    /// Composite kind whose instances a list selector reads from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<String>,
}

impl RuleOptions {
    fn is_default(&self) -> bool {
        self == &Self::default()
    }
}

/// A selector, an output template and options.
///
/// Templates contain `%s` slots filled positionally from the matched values
/// and a jump marker (conventionally `$1`) where the cursor should land.
///
/// # Examples
///
/// ```
/// use docstencil::{AnnotationRule, Selector};
///
/// let rule = AnnotationRule::for_kind("Parameter", "@param %s $1")
///     .only_types(["func"])
///     .after_each("");
/// assert_eq!(rule.selector(), &Selector::Kind("Parameter".into()));
/// assert!(rule.applies_to("func"));
/// assert!(!rule.applies_to("class"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawRule", into = "RawRule")]
pub struct AnnotationRule {
    selector: Selector,
    template: String,
    options: RuleOptions,
}

impl AnnotationRule {
    /// A rule without a selector.
    #[must_use]
    pub fn always(template: impl Into<String>) -> Self {
        Self::with_selector(Selector::Always, template)
    }

    /// A rule selecting a single value kind.
    #[must_use]
    pub fn for_kind(kind: impl Into<String>, template: impl Into<String>) -> Self {
        Self::with_selector(Selector::Kind(kind.into()), template)
    }

    /// A rule selecting several kinds that co-occur in `required` instances.
    #[must_use]
    pub fn composite<I, K>(
        kinds: I,
        required: impl Into<String>,
        template: impl Into<String>,
    ) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self::with_selector(
            Selector::Composite(kinds.into_iter().map(Into::into).collect()),
            template,
        )
        .required(required)
    }

    /// A rule with an explicit selector and default options.
    #[must_use]
    pub fn with_selector(selector: Selector, template: impl Into<String>) -> Self {
        Self {
            selector,
            template: template.into(),
            options: RuleOptions::default(),
        }
    }

    /// Render only when the selector matches nothing.
    #[must_use]
    pub const fn no_results(mut self) -> Self {
        self.options.no_results = true;
        self
    }

    /// Restrict the rule to the given element types.
    #[must_use]
    pub fn only_types<I, T>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.options.types = Some(types.into_iter().map(Into::into).collect());
        self
    }

    /// Emit `lines` once before the first rendered line.
    #[must_use]
    pub fn before_first_item<I, T>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.options.before_first_item = Some(lines.into_iter().map(Into::into).collect());
        self
    }

    /// Emit `line` after each rendered instance.
    #[must_use]
    pub fn after_each(mut self, line: impl Into<String>) -> Self {
        self.options.after_each = Some(line.into());
        self
    }

    /// Name the composite kind a list selector reads from.
    #[must_use]
    pub fn required(mut self, kind: impl Into<String>) -> Self {
        self.options.required = Some(kind.into());
        self
    }

    /// Replace all options at once.
    #[must_use]
    pub fn with_options(mut self, options: RuleOptions) -> Self {
        self.options = options;
        self
    }

    /// The rule's selector.
    #[must_use]
    pub const fn selector(&self) -> &Selector {
        &self.selector
    }

    /// The output template.
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// The rule's options.
    #[must_use]
    pub const fn options(&self) -> &RuleOptions {
        &self.options
    }

    /// Returns `true` unless a `type` restriction excludes `element_type`.
    #[must_use]
    pub fn applies_to(&self, element_type: &str) -> bool {
        self.options
            .types
            .as_ref()
            .is_none_or(|types| types.iter().any(|t| t == element_type))
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawSelector {
    One(String),
    Many(Vec<String>),
}

/// Wire shape of a rule: `[selector, template]` or
/// `[selector, template, options]`.
///
/// An empty string selector means "no selector" for formats without null,
/// such as TOML.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawRule {
    Full(Option<RawSelector>, String, RuleOptions),
    Short(Option<RawSelector>, String),
}

impl From<RawRule> for AnnotationRule {
    fn from(raw: RawRule) -> Self {
        let (selector, template, options) = match raw {
            RawRule::Full(selector, template, options) => (selector, template, options),
            RawRule::Short(selector, template) => (selector, template, RuleOptions::default()),
        };
        let selector = match selector {
            None => Selector::Always,
            Some(RawSelector::One(kind)) if kind.is_empty() => Selector::Always,
            Some(RawSelector::One(kind)) => Selector::Kind(kind),
            Some(RawSelector::Many(kinds)) => Selector::Composite(kinds),
        };
        Self::with_selector(selector, template).with_options(options)
    }
}

impl From<AnnotationRule> for RawRule {
    fn from(rule: AnnotationRule) -> Self {
        let selector = match rule.selector {
            Selector::Always => None,
            Selector::Kind(kind) => Some(RawSelector::One(kind)),
            Selector::Composite(kinds) => Some(RawSelector::Many(kinds)),
        };
        if rule.options.is_default() {
            Self::Short(selector, rule.template)
        } else {
            Self::Full(selector, rule.template, rule.options)
        }
    }
}
