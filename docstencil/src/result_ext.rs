//! Extensions for mapping errors to `TemplateResult` concisely.
//!
//! These helpers reduce repetitive `.map_err(|e| TemplateError::…(e))`
//! patterns when converting external error types into the crate's
//! [`TemplateResult`] alias.
//!
//! # Examples
//!
//! ```
//! use docstencil::{TemplateResult, TemplateResultExt};
//!
//! fn parse_flag(text: &str) -> TemplateResult<bool> {
//!     // serde_json::Error implements Into<TemplateError>
//!     serde_json::from_str(text).into_template()
//! }
//!
//! assert!(parse_flag("true").is_ok());
//! assert!(parse_flag("maybe").is_err());
//! ```

use crate::{TemplateError, TemplateResult};

/// Generic extension for mapping any `Result<T, E>` with
/// `E: Into<TemplateError>` into a [`TemplateResult<T>`].
pub trait TemplateResultExt<T, E> {
    /// Convert `Result<T, E>` into `TemplateResult<T>` using `Into<TemplateError>`.
    ///
    /// # Errors
    ///
    /// Propagates the original error after conversion into [`TemplateError`].
    fn into_template(self) -> TemplateResult<T>;
}

impl<T, E> TemplateResultExt<T, E> for Result<T, E>
where
    E: Into<TemplateError>,
{
    fn into_template(self) -> TemplateResult<T> {
        self.map_err(Into::into)
    }
}
