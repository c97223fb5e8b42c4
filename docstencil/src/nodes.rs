//! Values discovered in source code for a single annotated element.
//!
//! The discovery layer walks the syntax tree and reports what it found,
//! grouped by value kind. The renderer only reads this data.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use crate::{TemplateResult, TemplateResultExt};

/// One discovered value.
///
/// Plain values carry just a display string. Composite values (for example
/// a parameter together with its type) also carry named groups of
/// co-located sub-values, which composite selectors read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "RawInstance")]
pub struct Instance {
    display: String,
    groups: BTreeMap<String, Vec<String>>,
}

impl Instance {
    /// Create a plain value with the given display string.
    #[must_use]
    pub fn new(display: impl Into<String>) -> Self {
        Self {
            display: display.into(),
            groups: BTreeMap::new(),
        }
    }

    /// Create a composite value from `(group, value)` pairs.
    ///
    /// The display string is the first value of every group, in group-name
    /// order, separated by spaces.
    ///
    /// ```
    /// use docstencil::Instance;
    ///
    /// let tparam = Instance::group([("Parameter", "count"), ("Type", "int")]);
    /// assert_eq!(tparam.first("Type"), Some("int"));
    /// assert_eq!(tparam.display(), "count int");
    /// ```
    #[must_use]
    pub fn group<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut groups: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (name, value) in pairs {
            groups.entry(name.into()).or_default().push(value.into());
        }
        Self::from_groups(groups)
    }

    /// Attach additional values under `name`, keeping the display string.
    #[must_use]
    pub fn with_group<I, V>(mut self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.groups
            .entry(name.into())
            .or_default()
            .extend(values.into_iter().map(Into::into));
        self
    }

    /// Text substituted into `%s` slots for single-kind selectors.
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// All values recorded under `name`.
    #[must_use]
    pub fn group_values(&self, name: &str) -> Option<&[String]> {
        self.groups
            .get(name)
            .map(Vec::as_slice)
            .filter(|values| !values.is_empty())
    }

    /// First value recorded under `name`.
    #[must_use]
    pub fn first(&self, name: &str) -> Option<&str> {
        self.group_values(name)
            .and_then(<[String]>::first)
            .map(String::as_str)
    }

    fn from_groups(groups: BTreeMap<String, Vec<String>>) -> Self {
        let display = groups
            .values()
            .filter_map(|values| values.first())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ");
        Self { display, groups }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawInstance {
    Display(String),
    Group(BTreeMap<String, OneOrMany>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl From<RawInstance> for Instance {
    fn from(raw: RawInstance) -> Self {
        match raw {
            RawInstance::Display(display) => Self::new(display),
            RawInstance::Group(groups) => Self::from_groups(
                groups
                    .into_iter()
                    .map(|(name, values)| {
                        let values = match values {
                            OneOrMany::One(value) => vec![value],
                            OneOrMany::Many(values) => values,
                        };
                        (name, values)
                    })
                    .collect(),
            ),
        }
    }
}

/// Discovered values for one element, keyed by value kind.
///
/// Instances keep discovery order within each kind.
///
/// # Examples
///
/// ```
/// use docstencil::DiscoveredNodes;
///
/// let nodes = DiscoveredNodes::new().with_values("Parameter", ["a", "b"]);
/// assert_eq!(nodes.instances("Parameter").len(), 2);
/// assert!(nodes.instances("Return").is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct DiscoveredNodes {
    kinds: BTreeMap<String, Vec<Instance>>,
}

impl DiscoveredNodes {
    /// Create an empty set of discovered values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append plain values under `kind`, consuming and returning `self`.
    #[must_use]
    pub fn with_values<I, V>(mut self, kind: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let name = kind.into();
        for value in values {
            self.push(name.clone(), Instance::new(value));
        }
        self
    }

    /// Append a single instance under `kind`.
    pub fn push(&mut self, kind: impl Into<String>, instance: Instance) -> &mut Self {
        self.kinds.entry(kind.into()).or_default().push(instance);
        self
    }

    /// Instances discovered for `kind`, empty when the kind is unknown.
    #[must_use]
    pub fn instances(&self, kind: &str) -> &[Instance] {
        self.kinds.get(kind).map(Vec::as_slice).unwrap_or_default()
    }

    /// Returns `true` when no instance of any kind was discovered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kinds.values().all(Vec::is_empty)
    }

    /// Iterate over kinds that have at least one instance, sorted by name.
    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.kinds
            .iter()
            .filter(|(_, instances)| !instances.is_empty())
            .map(|(kind, _)| kind.as_str())
    }

    /// Build discovered values from a JSON table.
    ///
    /// Each key is a value kind mapping to a list whose entries are either
    /// display strings or tables of named groups.
    ///
    /// # Errors
    ///
    /// Returns [`crate::TemplateError::Parse`] when the table has another
    /// shape.
    pub fn from_value(value: Value) -> TemplateResult<Self> {
        serde_json::from_value(value).into_template()
    }
}

#[cfg(test)]
mod tests {
    use super::{DiscoveredNodes, Instance};
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn unknown_kinds_are_empty() {
        let nodes = DiscoveredNodes::new();
        assert!(nodes.instances("Parameter").is_empty());
        assert!(nodes.is_empty());
    }

    #[test]
    fn empty_kind_lists_do_not_count() {
        let nodes = DiscoveredNodes::from_value(json!({"Parameter": []})).expect("parse");
        assert!(nodes.is_empty());
        assert_eq!(nodes.kinds().count(), 0);
    }

    #[test]
    fn parses_plain_and_grouped_instances() {
        let nodes = DiscoveredNodes::from_value(json!({
            "Parameter": ["a", "b"],
            "Tparam": [{"Parameter": "a", "Type": ["int", "str"]}],
        }))
        .expect("parse");
        let displays: Vec<&str> = nodes
            .instances("Parameter")
            .iter()
            .map(Instance::display)
            .collect();
        assert_eq!(displays, ["a", "b"]);
        let tparam = nodes.instances("Tparam").first().expect("tparam");
        assert_eq!(tparam.first("Type"), Some("int"));
        assert_eq!(
            tparam.group_values("Type"),
            Some(&["int".to_owned(), "str".to_owned()][..])
        );
    }

    #[rstest]
    #[case(json!({"Parameter": "a"}))]
    #[case(json!(["Parameter"]))]
    #[case(json!({"Parameter": [1]}))]
    fn rejects_malformed_tables(#[case] value: serde_json::Value) {
        assert!(DiscoveredNodes::from_value(value).is_err());
    }

    #[test]
    fn kinds_are_sorted_while_instances_keep_discovery_order() {
        let mut nodes = DiscoveredNodes::new().with_values("Return", ["r"]);
        nodes
            .push("Parameter", Instance::new("z"))
            .push("Parameter", Instance::new("a"));
        assert_eq!(nodes.kinds().collect::<Vec<_>>(), ["Parameter", "Return"]);
        let displays: Vec<&str> = nodes
            .instances("Parameter")
            .iter()
            .map(Instance::display)
            .collect();
        assert_eq!(displays, ["z", "a"]);
    }

    #[test]
    fn with_group_preserves_display() {
        let instance = Instance::new("x").with_group("Type", ["int"]);
        assert_eq!(instance.display(), "x");
        assert_eq!(instance.first("Type"), Some("int"));
        assert_eq!(instance.first("Missing"), None);
    }
}
