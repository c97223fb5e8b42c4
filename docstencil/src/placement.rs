//! Where a rendered annotation is inserted.
//!
//! The host owns the syntax tree; it exposes the annotated element and its
//! named children through [`CodeStructure`]. Resolution order is:
//!
//! 1. the template's `position` callback, when it returns a position;
//! 2. the `append` directive, unless the element type is disabled and as
//!    long as `child_name` or `fallback` exists;
//! 3. directly above the element.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::Template;

/// Zero-based source range of a syntax node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeSpan {
    /// First row of the node.
    pub start_row: usize,
    /// Column of the node's first character.
    pub start_column: usize,
    /// Last row of the node.
    pub end_row: usize,
    /// Column just past the node's last character.
    pub end_column: usize,
}

impl NodeSpan {
    /// Build a span from start and end coordinates.
    #[must_use]
    pub const fn new(start: (usize, usize), end: (usize, usize)) -> Self {
        Self {
            start_row: start.0,
            start_column: start.1,
            end_row: end.0,
            end_column: end.1,
        }
    }
}

/// Absolute coordinates where annotation lines are inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertPosition {
    /// Row the first annotation line occupies after insertion.
    pub row: usize,
    /// Indentation column for the inserted lines.
    pub column: usize,
}

/// Read access to the code around the annotated element.
pub trait CodeStructure {
    /// Span of the element being annotated.
    fn element_span(&self) -> NodeSpan;

    /// Span of the element's child named `name`, if present.
    fn child(&self, name: &str) -> Option<NodeSpan>;
}

/// Side of the sibling node the annotation goes on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppendPosition {
    /// Insert on the node's first row, pushing it down.
    Before,
    /// Insert on the row after the node ends.
    After,
}

/// Places annotations relative to a named child node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppendDirective {
    /// Child node to place the annotation against.
    pub child_name: String,
    /// Child used when `child_name` is absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<String>,
    /// Side of the child the annotation goes on.
    pub position: AppendPosition,
    /// Element types that ignore this directive.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub disabled: Vec<String>,
}

impl AppendDirective {
    /// Directive placing annotations on `position` of `child_name`.
    #[must_use]
    pub fn new(child_name: impl Into<String>, position: AppendPosition) -> Self {
        Self {
            child_name: child_name.into(),
            fallback: None,
            position,
            disabled: Vec::new(),
        }
    }

    /// Child to use when the primary one is absent.
    #[must_use]
    pub fn fallback(mut self, name: impl Into<String>) -> Self {
        self.fallback = Some(name.into());
        self
    }

    /// Element types for which the directive does not apply.
    #[must_use]
    pub fn disabled<I, T>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.disabled = types.into_iter().map(Into::into).collect();
        self
    }

    fn applies_to(&self, element_type: &str) -> bool {
        !self.disabled.iter().any(|t| t == element_type)
    }

    fn locate(&self, structure: &dyn CodeStructure) -> Option<(String, NodeSpan)> {
        structure
            .child(&self.child_name)
            .map(|span| (self.child_name.clone(), span))
            .or_else(|| {
                let fallback = self.fallback.as_deref()?;
                structure
                    .child(fallback)
                    .map(|span| (fallback.to_owned(), span))
            })
    }
}

type PositionCallback = dyn Fn(&str, &dyn CodeStructure) -> Option<InsertPosition> + Send + Sync;

/// Host callback overriding insertion coordinates.
///
/// Receives the element type and the code structure. Returning `None`
/// defers to the `append` directive and default placement.
#[derive(Clone)]
pub struct PositionFn(Arc<PositionCallback>);

impl PositionFn {
    /// Wrap a callback.
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&str, &dyn CodeStructure) -> Option<InsertPosition> + Send + Sync + 'static,
    {
        Self(Arc::new(callback))
    }

    /// Invoke the callback.
    #[must_use]
    pub fn call(
        &self,
        element_type: &str,
        structure: &dyn CodeStructure,
    ) -> Option<InsertPosition> {
        (self.0)(element_type, structure)
    }
}

impl fmt::Debug for PositionFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PositionFn(<callback>)")
    }
}

/// Which rule decided the insertion point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementSource {
    /// The template's `position` callback.
    Callback,
    /// The `append` directive, anchored on the named child.
    Append {
        /// Child node the annotation was placed against.
        node: String,
        /// Side of that node.
        position: AppendPosition,
    },
    /// Directly above the annotated element.
    Default,
}

/// Resolved insertion point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// Absolute coordinates.
    pub position: InsertPosition,
    /// What produced them.
    pub source: PlacementSource,
}

/// Decide where the annotation for an element of `element_type` goes.
///
/// # Examples
///
/// ```
/// use docstencil::{
///     AppendDirective, AppendPosition, CodeStructure, NodeSpan, PlacementSource, Template,
///     TemplateOverrides, resolve_placement,
/// };
///
/// struct Function;
/// impl CodeStructure for Function {
///     fn element_span(&self) -> NodeSpan {
///         NodeSpan::new((10, 0), (14, 0))
///     }
///     fn child(&self, name: &str) -> Option<NodeSpan> {
///         (name == "block").then(|| NodeSpan::new((11, 4), (14, 0)))
///     }
/// }
///
/// let mut template = Template::new();
/// template.configure(
///     TemplateOverrides::new()
///         .append(AppendDirective::new("block", AppendPosition::Before).disabled(["file"])),
/// );
/// let placement = resolve_placement(&template, "func", &Function);
/// assert_eq!((placement.position.row, placement.position.column), (11, 4));
/// assert!(matches!(placement.source, PlacementSource::Append { .. }));
///
/// let placement = resolve_placement(&template, "file", &Function);
/// assert_eq!(placement.source, PlacementSource::Default);
/// ```
#[must_use]
pub fn resolve_placement(
    template: &Template,
    element_type: &str,
    structure: &dyn CodeStructure,
) -> Placement {
    if let Some(position) = template
        .position()
        .and_then(|callback| callback.call(element_type, structure))
    {
        debug!(element_type, ?position, "placement from position callback");
        return Placement {
            position,
            source: PlacementSource::Callback,
        };
    }

    let anchored = template
        .append()
        .filter(|directive| directive.applies_to(element_type))
        .and_then(|directive| {
            directive
                .locate(structure)
                .map(|(node, span)| (directive.position, node, span))
        });
    if let Some((side, node, span)) = anchored {
        let row = match side {
            AppendPosition::Before => span.start_row,
            AppendPosition::After => span.end_row + 1,
        };
        let position = InsertPosition {
            row,
            column: span.start_column,
        };
        debug!(element_type, %node, ?side, ?position, "placement from append directive");
        return Placement {
            position,
            source: PlacementSource::Append {
                node,
                position: side,
            },
        };
    }

    let element = structure.element_span();
    let position = InsertPosition {
        row: element.start_row,
        column: element.start_column,
    };
    debug!(element_type, ?position, "default placement above element");
    Placement {
        position,
        source: PlacementSource::Default,
    }
}
