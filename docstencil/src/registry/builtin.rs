//! Conventions shipped with the crate.

use crate::kinds::element::{CLASS, FILE, FUNC, TYPE};
use crate::kinds::value::{
    ARBITRARY_ARGS, CLASS_ATTRIBUTE, CLASS_NAME, GENERICS, HAS_PARAMETER, HAS_RETURN, HAS_THROW,
    KWARGS, PARAMETER, RETURN_TYPE_HINT, THROW, TPARAM, TYPE as TYPE_KIND,
};
use crate::{Annotation, AnnotationRule as Rule};

use super::ConventionRegistry;

const NAMES: &[&str] = &[
    "doxygen",
    "emmylua",
    "google_docstrings",
    "jsdoc",
    "ldoc",
    "numpydoc",
    "reST",
    "rustdoc",
];

/// Compile-time table of predefined conventions.
///
/// # Examples
///
/// ```
/// use docstencil::{BuiltinConventions, ConventionRegistry};
///
/// assert!(BuiltinConventions.lookup("google_docstrings").is_some());
/// assert!(BuiltinConventions.lookup("no_such_style").is_none());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinConventions;

impl BuiltinConventions {
    /// Names of every built-in convention, sorted.
    #[must_use]
    pub const fn names() -> &'static [&'static str] {
        NAMES
    }
}

impl ConventionRegistry for BuiltinConventions {
    fn lookup(&self, name: &str) -> Option<Annotation> {
        let annotation = match name {
            "doxygen" => doxygen(),
            "emmylua" => emmylua(),
            "google_docstrings" => google_docstrings(),
            "jsdoc" => jsdoc(),
            "ldoc" => ldoc(),
            "numpydoc" => numpydoc(),
            "reST" => rest(),
            "rustdoc" => rustdoc(),
            _ => return None,
        };
        Some(annotation)
    }
}

fn google_docstrings() -> Annotation {
    Annotation::new()
        .rule(Rule::always("\"\"\"$1"))
        .rule(Rule::for_kind(HAS_PARAMETER, "").only_types([FUNC]))
        .rule(Rule::for_kind(HAS_PARAMETER, "Args:").only_types([FUNC]))
        .rule(Rule::for_kind(PARAMETER, "    %s ($1): $1").only_types([FUNC]))
        .rule(
            Rule::composite([PARAMETER, TYPE_KIND], TPARAM, "    %s (%s): $1").only_types([FUNC]),
        )
        .rule(Rule::for_kind(ARBITRARY_ARGS, "    %s: $1").only_types([FUNC]))
        .rule(Rule::for_kind(KWARGS, "    %s: $1").only_types([FUNC]))
        .rule(
            Rule::for_kind(CLASS_ATTRIBUTE, "    %s: $1")
                .only_types([CLASS])
                .before_first_item(["", "Attributes:"]),
        )
        .rule(Rule::for_kind(HAS_RETURN, "").only_types([FUNC]))
        .rule(Rule::for_kind(HAS_RETURN, "Returns:").only_types([FUNC]))
        .rule(Rule::for_kind(HAS_RETURN, "    $1").only_types([FUNC]))
        .rule(Rule::for_kind(HAS_THROW, "").only_types([FUNC]))
        .rule(Rule::for_kind(HAS_THROW, "Raises:").only_types([FUNC]))
        .rule(Rule::for_kind(THROW, "    %s: $1").only_types([FUNC]))
        .rule(Rule::always("\"\"\""))
}

fn numpydoc() -> Annotation {
    Annotation::new()
        .rule(Rule::always("\"\"\"$1"))
        .rule(
            Rule::for_kind(HAS_PARAMETER, "")
                .only_types([FUNC])
                .before_first_item(["", "Parameters", "----------"]),
        )
        .rule(Rule::for_kind(PARAMETER, "%s : $1").only_types([FUNC]))
        .rule(Rule::composite([PARAMETER, TYPE_KIND], TPARAM, "%s : %s").only_types([FUNC]))
        .rule(Rule::for_kind(ARBITRARY_ARGS, "%s : $1").only_types([FUNC]))
        .rule(Rule::for_kind(KWARGS, "%s : $1").only_types([FUNC]))
        .rule(
            Rule::for_kind(CLASS_ATTRIBUTE, "%s : $1")
                .only_types([CLASS])
                .before_first_item(["", "Attributes", "----------"]),
        )
        .rule(
            Rule::for_kind(HAS_RETURN, "$1")
                .only_types([FUNC])
                .before_first_item(["", "Returns", "-------"]),
        )
        .rule(
            Rule::for_kind(THROW, "%s")
                .only_types([FUNC])
                .before_first_item(["", "Raises", "------"])
                .after_each("    $1"),
        )
        .rule(Rule::always("\"\"\""))
}

fn rest() -> Annotation {
    Annotation::new()
        .rule(Rule::always("\"\"\"$1"))
        .rule(Rule::for_kind(HAS_PARAMETER, "").only_types([FUNC]))
        .rule(Rule::for_kind(PARAMETER, ":param %s: $1").only_types([FUNC]))
        .rule(Rule::composite([PARAMETER], TPARAM, ":param %s: $1").only_types([FUNC]))
        .rule(Rule::composite([PARAMETER, TYPE_KIND], TPARAM, ":type %s: %s").only_types([FUNC]))
        .rule(Rule::for_kind(HAS_RETURN, ":return: $1").only_types([FUNC]))
        .rule(Rule::for_kind(RETURN_TYPE_HINT, ":rtype: %s").only_types([FUNC]))
        .rule(Rule::for_kind(THROW, ":raises %s: $1").only_types([FUNC]))
        .rule(Rule::always("\"\"\""))
}

fn emmylua() -> Annotation {
    Annotation::new()
        .rule(Rule::always("--- $1").no_results().only_types([FILE]))
        .rule(Rule::always("--- $1").only_types([FUNC, CLASS, TYPE]))
        .rule(Rule::for_kind(CLASS_NAME, "---@class %s $1").only_types([CLASS]))
        .rule(Rule::for_kind(GENERICS, "---@generic %s $1").only_types([FUNC]))
        .rule(Rule::for_kind(PARAMETER, "---@param %s any $1").only_types([FUNC]))
        .rule(
            Rule::composite([PARAMETER, TYPE_KIND], TPARAM, "---@param %s %s $1")
                .only_types([FUNC]),
        )
        .rule(Rule::for_kind(HAS_RETURN, "---@return $1").only_types([FUNC]))
        .rule(Rule::for_kind(TYPE_KIND, "---@type %s $1").only_types([TYPE]))
}

fn ldoc() -> Annotation {
    Annotation::new()
        .rule(Rule::always("--- $1"))
        .rule(Rule::for_kind(PARAMETER, "-- @param %s $1").only_types([FUNC]))
        .rule(Rule::for_kind(HAS_RETURN, "-- @return $1").only_types([FUNC]))
        .rule(Rule::for_kind(CLASS_NAME, "-- @type %s").only_types([CLASS]))
}

fn jsdoc() -> Annotation {
    Annotation::new()
        .rule(Rule::always("/**"))
        .rule(Rule::always(" * @file $1").no_results().only_types([FILE]))
        .rule(Rule::always(" * $1").only_types([FUNC, CLASS, TYPE]))
        .rule(Rule::for_kind(CLASS_NAME, " * @classdesc %s $1").only_types([CLASS]))
        .rule(Rule::for_kind(PARAMETER, " * @param {any} %s $1").only_types([FUNC]))
        .rule(
            Rule::composite([TYPE_KIND, PARAMETER], TPARAM, " * @param {%s} %s $1")
                .only_types([FUNC]),
        )
        .rule(Rule::for_kind(HAS_RETURN, " * @returns {$1} $1").only_types([FUNC]))
        .rule(Rule::for_kind(THROW, " * @throws {%s} $1").only_types([FUNC]))
        .rule(Rule::for_kind(TYPE_KIND, " * @type {%s} $1").only_types([TYPE]))
        .rule(Rule::always(" */"))
}

fn rustdoc() -> Annotation {
    Annotation::new()
        .rule(Rule::always("//! $1").no_results().only_types([FILE]))
        .rule(Rule::always("/// $1").only_types([FUNC, CLASS, TYPE]))
        .rule(
            Rule::for_kind(PARAMETER, "/// * `%s` - $1")
                .only_types([FUNC])
                .before_first_item(["///", "/// # Arguments", "///"]),
        )
        .rule(
            Rule::for_kind(HAS_RETURN, "/// $1")
                .only_types([FUNC])
                .before_first_item(["///", "/// # Returns", "///"]),
        )
}

fn doxygen() -> Annotation {
    Annotation::new()
        .rule(Rule::always("/**"))
        .rule(Rule::always(" * @file $1").no_results().only_types([FILE]))
        .rule(Rule::always(" * @brief $1"))
        .rule(Rule::for_kind(HAS_PARAMETER, " *").only_types([FUNC]))
        .rule(Rule::for_kind(GENERICS, " * @tparam %s $1").only_types([FUNC, CLASS]))
        .rule(Rule::for_kind(PARAMETER, " * @param %s $1").only_types([FUNC]))
        .rule(Rule::for_kind(HAS_RETURN, " * @return $1").only_types([FUNC]))
        .rule(Rule::always(" */"))
}
