//! Rendered annotation text and cursor targets.

use serde::Serialize;

/// Position where the interactive cursor may land after insertion.
///
/// Both coordinates are zero-based; `column` counts characters, not bytes,
/// within the rendered line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct JumpMarker {
    /// Index of the line within the rendered annotation.
    pub line: usize,
    /// Character offset of the marker within that line.
    pub column: usize,
}

/// Output of a render pass: ordered lines plus jump markers in emission
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderedAnnotation {
    lines: Vec<String>,
    markers: Vec<JumpMarker>,
}

impl RenderedAnnotation {
    pub(super) fn push_line(&mut self, text: String, columns: &[usize]) {
        let line = self.lines.len();
        self.markers
            .extend(columns.iter().map(|&column| JumpMarker { line, column }));
        self.lines.push(text);
    }

    /// Rendered lines in order.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Jump markers in the order their lines were emitted.
    #[must_use]
    pub fn markers(&self) -> &[JumpMarker] {
        &self.markers
    }

    /// The marker a host normally places the cursor on first.
    #[must_use]
    pub fn first_marker(&self) -> Option<JumpMarker> {
        self.markers.first().copied()
    }

    /// Returns `true` when no line was rendered.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Consume the annotation, returning only its lines.
    #[must_use]
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Prefix every line with a filetype comment token.
    ///
    /// Lines become `"{token} {line}"`; a blank line without markers becomes
    /// the bare token. Marker columns shift with their lines.
    ///
    /// # Examples
    ///
    /// ```
    /// use docstencil::{Annotation, AnnotationRule, DiscoveredNodes, Renderer};
    ///
    /// let annotation = Annotation::new()
    ///     .rule(AnnotationRule::always("$1"))
    ///     .rule(AnnotationRule::always(""));
    /// let rendered = Renderer::new(&annotation)
    ///     .render("func", &DiscoveredNodes::new())?
    ///     .with_comment_prefix("--");
    /// assert_eq!(rendered.lines(), ["-- ", "--"]);
    /// assert_eq!(rendered.markers()[0].column, 3);
    /// # Ok::<_, docstencil::TemplateError>(())
    /// ```
    #[must_use]
    pub fn with_comment_prefix(mut self, token: &str) -> Self {
        for (index, line) in self.lines.iter_mut().enumerate() {
            let has_marker = self.markers.iter().any(|marker| marker.line == index);
            if line.is_empty() && !has_marker {
                token.clone_into(line);
            } else {
                *line = format!("{token} {line}");
            }
        }
        let shift = token.chars().count() + 1;
        for marker in &mut self.markers {
            marker.column += shift;
        }
        self
    }
}
