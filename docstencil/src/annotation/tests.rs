//! Unit tests for rule construction and the tuple wire format.

use rstest::rstest;
use serde_json::{Value, json};

use super::{Annotation, AnnotationRule, RuleOptions, Selector};

#[rstest]
#[case(json!([null, "\"\"\"$1"]), Selector::Always)]
#[case(json!(["", "\"\"\"$1"]), Selector::Always)]
#[case(json!(["Return", "@return $1"]), Selector::Kind("Return".into()))]
#[case(
    json!([["Parameter", "Type"], "%s (%s)", {"required": "Tparam"}]),
    Selector::Composite(vec!["Parameter".into(), "Type".into()])
)]
fn parses_selectors(#[case] raw: Value, #[case] expected: Selector) {
    let rule: AnnotationRule = serde_json::from_value(raw).expect("rule parses");
    assert_eq!(rule.selector(), &expected);
}

#[test]
fn parses_all_options() {
    let rule: AnnotationRule = serde_json::from_value(json!([
        "Parameter",
        "%s: $1",
        {
            "no_results": true,
            "type": ["func", "class"],
            "before_first_item": ["Args:"],
            "after_each": "",
            "required": "Tparam"
        }
    ]))
    .expect("rule parses");
    assert_eq!(
        rule.options(),
        &RuleOptions {
            no_results: true,
            types: Some(vec!["func".into(), "class".into()]),
            before_first_item: Some(vec!["Args:".into()]),
            after_each: Some(String::new()),
            required: Some("Tparam".into()),
        }
    );
}

#[test]
fn serialises_back_to_short_tuples() {
    let rule = AnnotationRule::for_kind("Parameter", "%s");
    assert_eq!(
        serde_json::to_value(&rule).expect("serialise"),
        json!(["Parameter", "%s"])
    );
}

#[test]
fn serialises_options_when_present() {
    let rule = AnnotationRule::always("- $1").no_results().only_types(["file"]);
    assert_eq!(
        serde_json::to_value(&rule).expect("serialise"),
        json!([null, "- $1", {"no_results": true, "type": ["file"]}])
    );
}

#[rstest]
#[case(json!([]))]
#[case(json!([null]))]
#[case(json!([1, "x"]))]
#[case(json!([null, "x", {}, "extra"]))]
fn rejects_badly_shaped_tuples(#[case] raw: Value) {
    assert!(serde_json::from_value::<AnnotationRule>(raw).is_err());
}

#[test]
fn empty_composite_is_accepted_as_data() {
    let rule: AnnotationRule =
        serde_json::from_value(json!([[], "%s"])).expect("malformed rules are still data");
    assert_eq!(rule.selector(), &Selector::Composite(Vec::new()));
}

#[test]
fn composite_builder_sets_required() {
    let rule = AnnotationRule::composite(["Parameter", "Type"], "Tparam", "%s (%s)");
    assert_eq!(rule.options().required.as_deref(), Some("Tparam"));
    assert_eq!(rule.selector().value_count(), 2);
}

#[test]
fn annotation_keeps_rule_order() {
    let annotation = Annotation::new()
        .rule(AnnotationRule::always("first"))
        .rule(AnnotationRule::always("second"));
    let templates: Vec<&str> = annotation.into_iter().map(AnnotationRule::template).collect();
    assert_eq!(templates, ["first", "second"]);
}

#[rstest]
#[case(None, "file", true)]
#[case(Some(vec!["func"]), "func", true)]
#[case(Some(vec!["func"]), "file", false)]
#[case(Some(vec![]), "func", false)]
fn type_filter(#[case] types: Option<Vec<&str>>, #[case] element: &str, #[case] applies: bool) {
    let mut rule = AnnotationRule::always("x");
    if let Some(allowed) = types {
        rule = rule.only_types(allowed);
    }
    assert_eq!(rule.applies_to(element), applies);
}
