//! Steps that render the selected convention and inspect the output.

use anyhow::{Result, anyhow, ensure};
use docstencil::{DiscoveredNodes, RenderRequest, RenderedAnnotation, TemplateError};
use rstest_bdd_macros::{given, then, when};
use test_helpers::markers::parse_markers;
use test_helpers::text::{normalize_scalar, parse_node_table};

use super::helpers::json_literal;
use crate::fixtures::TemplateContext;

#[given("no discovered nodes")]
fn no_nodes(template_context: &TemplateContext) {
    template_context.nodes.set(DiscoveredNodes::new());
}

#[given("discovered nodes {table}")]
fn discovered(template_context: &TemplateContext, table: String) -> Result<()> {
    let nodes = parse_node_table(&table)?
        .into_iter()
        .fold(DiscoveredNodes::new(), |nodes, (kind, values)| {
            nodes.with_values(kind, values)
        });
    template_context.nodes.set(nodes);
    Ok(())
}

#[given("the comment token {token}")]
fn comment_token(template_context: &TemplateContext, token: String) {
    template_context.comment_token.set(normalize_scalar(&token));
}

#[when("a {element} element is rendered")]
fn render(template_context: &TemplateContext, element: String) -> Result<()> {
    let element_type = normalize_scalar(&element);
    let nodes = template_context.nodes.take().unwrap_or_default();
    let token = template_context.comment_token.take();
    let outcome = template_context
        .template
        .with_ref(|template| {
            let mut request = RenderRequest::new(&element_type, &nodes);
            if let Some(comment) = token.as_deref() {
                request = request.comment_token(comment);
            }
            template.render(&request)
        })
        .ok_or_else(|| anyhow!("template missing"))?;
    match outcome {
        Ok(rendered) => template_context.rendered.set(rendered),
        Err(err) => template_context.error.set(err),
    }
    Ok(())
}

#[then("the rendered lines are {lines}")]
fn lines_are(template_context: &TemplateContext, lines: String) -> Result<()> {
    let expected: Vec<String> = serde_json::from_value(json_literal(&lines)?)?;
    let actual = template_context
        .rendered
        .with_ref(|rendered| rendered.lines().to_vec())
        .ok_or_else(|| anyhow!("render produced no output"))?;
    ensure!(actual == expected, "expected {expected:?}, found {actual:?}");
    Ok(())
}

#[then("no lines are rendered")]
fn nothing_rendered(template_context: &TemplateContext) -> Result<()> {
    let empty = template_context
        .rendered
        .with_ref(RenderedAnnotation::is_empty)
        .ok_or_else(|| anyhow!("render produced no output"))?;
    ensure!(empty, "expected no lines");
    Ok(())
}

#[then("jump markers are at {markers}")]
fn markers_at(template_context: &TemplateContext, markers: String) -> Result<()> {
    let expected = parse_markers(&markers)?;
    let actual: Vec<(usize, usize)> = template_context
        .rendered
        .with_ref(|rendered| {
            rendered
                .markers()
                .iter()
                .map(|marker| (marker.line, marker.column))
                .collect()
        })
        .ok_or_else(|| anyhow!("render produced no output"))?;
    ensure!(actual == expected, "expected {expected:?}, found {actual:?}");
    Ok(())
}

#[then("rendering fails with an invalid rule at index {index}")]
fn invalid_rule(template_context: &TemplateContext, index: usize) -> Result<()> {
    let err = template_context
        .error
        .take()
        .ok_or_else(|| anyhow!("render did not fail"))?;
    ensure!(err.rule_index() == Some(index), "unexpected error: {err}");
    ensure!(template_context.rendered.is_empty(), "partial output was stored");
    Ok(())
}

#[then("rendering fails because no convention is selected")]
fn no_selection(template_context: &TemplateContext) -> Result<()> {
    let err = template_context
        .error
        .take()
        .ok_or_else(|| anyhow!("render did not fail"))?;
    ensure!(
        matches!(err, TemplateError::NoConventionSelected),
        "unexpected error: {err}"
    );
    Ok(())
}

#[then("the request fails because {name} is unknown")]
fn unknown(template_context: &TemplateContext, name: String) -> Result<()> {
    let expected = normalize_scalar(&name);
    let err = template_context
        .error
        .take()
        .ok_or_else(|| anyhow!("request did not fail"))?;
    ensure!(
        matches!(&err, TemplateError::UnknownConvention { name } if *name == expected),
        "unexpected error: {err}"
    );
    Ok(())
}
