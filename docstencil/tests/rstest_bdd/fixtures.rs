//! Shared fixtures for the `rstest-bdd` behavioural scaffolding.

use docstencil::{DiscoveredNodes, RenderedAnnotation, Template, TemplateError};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;

/// Scenario state carrying a template through configuration and rendering.
#[derive(Debug, Default, ScenarioState)]
pub struct TemplateContext {
    /// Template under test; steps take it, mutate it and put it back.
    pub template: Slot<Template>,
    /// Nodes handed to the renderer.
    pub nodes: Slot<DiscoveredNodes>,
    /// Comment token supplied with render requests.
    pub comment_token: Slot<String>,
    /// Output of a successful render.
    pub rendered: Slot<RenderedAnnotation>,
    /// Error from a failed render or configuration step.
    pub error: Slot<TemplateError>,
}

/// Creates a clean scenario state.
#[fixture]
pub fn template_context() -> TemplateContext {
    TemplateContext::default()
}
