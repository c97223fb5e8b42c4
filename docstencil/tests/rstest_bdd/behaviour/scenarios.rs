//! Binds the `docstencil` behavioural feature files to the step registry.

use crate::fixtures::{TemplateContext, template_context};
use rstest_bdd_macros::scenarios;

scenarios!(
    "tests/features/rendering.feature",
    fixtures = [template_context: TemplateContext]
);
scenarios!(
    "tests/features/template_store.feature",
    fixtures = [template_context: TemplateContext]
);
