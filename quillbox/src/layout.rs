//! Geometry exchanged with the render host.
//!
//! The widget performs no text shaping. Each frame the host reports where
//! its shaped glyph run sits and how wide it is; the widget derives caret
//! and selection-highlight geometry from that and hands it back through
//! [`Caret`] and [`SelectionHighlight`].

/// Position and advance width of the shaped text, in host pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GlyphRun {
    /// X coordinate of the text origin inside the widget.
    pub origin_x: f32,
    /// Advance width of the shaped run. Ignored while the buffer is empty.
    pub advance: f32,
}

impl GlyphRun {
    /// Creates a glyph run description.
    pub fn new(origin_x: f32, advance: f32) -> Self {
        Self { origin_x, advance }
    }
}

/// Caret geometry and visibility for the current frame.
///
/// The caret always sits at the end of the rendered text; there is no
/// interior cursor index in this widget.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Caret {
    /// X coordinate of the caret.
    pub x: f32,
    /// Whether the caret should be drawn this frame.
    pub visible: bool,
}

/// Selection-highlight geometry and opacity for the current frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SelectionHighlight {
    /// Width of the highlight rectangle; tracks the caret's x offset.
    pub width: f32,
    /// Current opacity, faded toward the selection state each frame.
    pub alpha: f32,
}
