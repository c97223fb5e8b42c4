//! Error types produced by template configuration and rendering.

mod constructors;
mod types;

pub use types::TemplateError;

#[cfg(test)]
mod tests;
