//! Unit tests for error construction and display.

use rstest::rstest;

use super::TemplateError;

#[rstest]
#[case(TemplateError::invalid_rule("numpydoc", 4, "too many slots"), Some(4))]
#[case(TemplateError::unknown_convention("nope"), None)]
#[case(TemplateError::NoConventionSelected, None)]
fn rule_index_only_for_invalid_rules(#[case] err: TemplateError, #[case] expected: Option<usize>) {
    assert_eq!(err.rule_index(), expected);
}

#[test]
fn invalid_rule_names_convention_and_index() {
    let err = TemplateError::invalid_rule("google_docstrings", 7, "empty composite selector");
    let text = err.to_string();
    assert!(text.contains("google_docstrings"), "{text}");
    assert!(text.contains("#7"), "{text}");
}

#[test]
fn shape_error_describes_expectation() {
    let err = TemplateError::shape("use_default_comment", "a boolean");
    assert_eq!(
        err.to_string(),
        "template key 'use_default_comment' must be a boolean"
    );
}

#[test]
fn serde_errors_convert() {
    let source = serde_json::from_str::<bool>("not json").expect_err("invalid json");
    let err = TemplateError::from(source);
    assert!(matches!(err, TemplateError::Parse(_)));
}
