//! Steps that build and reconfigure templates.

use anyhow::{Result, anyhow, ensure};
use docstencil::{Annotation, BuiltinConventions, Template, TemplateOverrides};
use rstest_bdd_macros::{given, then, when};
use test_helpers::text::normalize_scalar;

use super::helpers::{json_literal, with_template};
use crate::fixtures::TemplateContext;

#[given("an empty template")]
fn empty_template(template_context: &TemplateContext) {
    template_context.template.set(Template::new());
}

#[given("a template whose default convention {name} is defined as {rules}")]
fn custom_default(template_context: &TemplateContext, name: String, rules: String) -> Result<()> {
    let annotation: Annotation = serde_json::from_value(json_literal(&rules)?)?;
    let convention = normalize_scalar(&name);
    with_template(template_context, |template| {
        template.add_custom_annotation(&convention, annotation, true);
        Ok(())
    })
}

#[when("the built-in convention {name} is added")]
fn add_builtin(template_context: &TemplateContext, name: String) -> Result<()> {
    with_template(template_context, |template| {
        template.add_annotation(&normalize_scalar(&name));
        Ok(())
    })
}

#[given("the built-in convention {name} is the default")]
fn given_default_builtin(template_context: &TemplateContext, name: String) -> Result<()> {
    add_default_builtin(template_context, name)
}

#[when("the built-in convention {name} is made the default")]
fn add_default_builtin(template_context: &TemplateContext, name: String) -> Result<()> {
    with_template(template_context, |template| {
        template.add_default_annotation(&normalize_scalar(&name));
        Ok(())
    })
}

#[when("the convention {name} is strictly made the default")]
fn strict_default(template_context: &TemplateContext, name: String) -> Result<()> {
    with_template(template_context, |template| {
        let convention = normalize_scalar(&name);
        if let Err(err) = template.try_add_default_annotation(&convention, &BuiltinConventions) {
            template_context.error.set(err);
        }
        Ok(())
    })
}

#[given("the template is configured with {table}")]
fn given_configured(template_context: &TemplateContext, table: String) -> Result<()> {
    configure(template_context, table)
}

#[when("the template is reconfigured with {table}")]
fn configure(template_context: &TemplateContext, table: String) -> Result<()> {
    let overrides = TemplateOverrides::from_value(json_literal(&table)?)?;
    with_template(template_context, |template| {
        template.configure(overrides);
        Ok(())
    })
}

#[then("the selected convention is {name}")]
fn selected_is(template_context: &TemplateContext, name: String) -> Result<()> {
    let expected = normalize_scalar(&name);
    let selected = template_context
        .template
        .with_ref(|template| template.annotation_convention().map(str::to_owned))
        .ok_or_else(|| anyhow!("template missing"))?;
    ensure!(
        selected.as_deref() == Some(expected.as_str()),
        "expected selection {expected}, found {selected:?}"
    );
    Ok(())
}

#[then("no convention is selected")]
fn nothing_selected(template_context: &TemplateContext) -> Result<()> {
    let selected = template_context
        .template
        .with_ref(|template| template.annotation_convention().map(str::to_owned))
        .ok_or_else(|| anyhow!("template missing"))?;
    ensure!(selected.is_none(), "unexpected selection {selected:?}");
    Ok(())
}

#[then("the attached conventions are {names}")]
fn attached_are(template_context: &TemplateContext, names: String) -> Result<()> {
    let expected = test_helpers::text::split_list(&names);
    let attached: Vec<String> = template_context
        .template
        .with_ref(|template| template.annotation_names().map(str::to_owned).collect())
        .ok_or_else(|| anyhow!("template missing"))?;
    ensure!(attached == expected, "expected {expected:?}, found {attached:?}");
    Ok(())
}

#[then("the template setting {key} is {value}")]
fn setting_is(template_context: &TemplateContext, key: String, value: String) -> Result<()> {
    let field = normalize_scalar(&key);
    let expected = json_literal(&value)?;
    let actual = template_context
        .template
        .with_ref(|template| template.to_value().get(&field).cloned())
        .ok_or_else(|| anyhow!("template missing"))?;
    ensure!(
        actual.as_ref() == Some(&expected),
        "setting {field}: expected {expected}, found {actual:?}"
    );
    Ok(())
}
