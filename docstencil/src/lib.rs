//! Declarative annotation templates for documentation-comment generators.
//!
//! A filetype loads a [`Template`]: a set of named annotation conventions
//! (numpydoc, jsdoc, rustdoc, ...) plus placement settings. Each convention
//! is an ordered [`Annotation`] of rules. Given the element type being
//! documented and the [`DiscoveredNodes`] a parser found for it, the
//! [`Renderer`] turns the rules into comment lines and reports the jump
//! markers a cursor should visit. [`resolve_placement`] decides where the
//! lines go.
//!
//! ```rust
//! use docstencil::{DiscoveredNodes, RenderRequest, Template, kinds};
//!
//! let mut template = Template::new();
//! template.add_default_annotation("jsdoc");
//!
//! let nodes = DiscoveredNodes::new().with_values(kinds::value::PARAMETER, ["a"]);
//! let rendered = template.render(&RenderRequest::new(kinds::element::FUNC, &nodes))?;
//! assert_eq!(rendered.lines(), ["/**", " * ", " * @param {any} a ", " */"]);
//! # Ok::<_, docstencil::TemplateError>(())
//! ```

mod annotation;
mod error;
pub mod kinds;
mod nodes;
mod placement;
mod registry;
mod render;
mod result_ext;
mod template;

pub use annotation::{Annotation, AnnotationRule, RuleOptions, Selector};
pub use error::TemplateError;
pub use nodes::{DiscoveredNodes, Instance};
pub use placement::{
    AppendDirective, AppendPosition, CodeStructure, InsertPosition, NodeSpan, Placement,
    PlacementSource, PositionFn, resolve_placement,
};
pub use registry::{BuiltinConventions, ConventionRegistry, RegistryMap};
pub use render::{
    CUSTOM_CONVENTION, DEFAULT_MARKER, JumpMarker, RenderOptions, RenderedAnnotation, Renderer,
    TrailingSeparator,
};
pub use result_ext::TemplateResultExt;
pub use template::{RenderRequest, Template, TemplateOverrides};

/// Result type used throughout the crate.
pub type TemplateResult<T> = Result<T, TemplateError>;
