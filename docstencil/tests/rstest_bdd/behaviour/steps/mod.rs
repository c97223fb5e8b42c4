//! Behavioural step modules registered with `rstest-bdd`.

pub mod helpers;
pub mod render_steps;
pub mod template_steps;
