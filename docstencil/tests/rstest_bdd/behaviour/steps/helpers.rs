//! Helpers shared by the template and render steps.

use anyhow::{Context, Result};
use docstencil::Template;
use serde_json::Value;
use test_helpers::text::unquote;

use crate::fixtures::TemplateContext;

/// Parses a single-quoted JSON literal written in step text.
pub(crate) fn json_literal(raw: &str) -> Result<Value> {
    serde_json::from_str(unquote(raw)).with_context(|| format!("step JSON is invalid: {raw}"))
}

/// Runs `update` against the scenario template, creating one if needed.
pub(crate) fn with_template<F>(context: &TemplateContext, update: F) -> Result<()>
where
    F: FnOnce(&mut Template) -> Result<()>,
{
    let mut template = context.template.take().unwrap_or_default();
    let outcome = update(&mut template);
    context.template.set(template);
    outcome
}
