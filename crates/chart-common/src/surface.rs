//! The abstract drawing surface a chart renders onto.

use std::io::Write;

use crate::error::ChartResult;
use crate::geometry::Rect;
use crate::style::Style;

/// A drawable target sized to a chart's pixel dimensions.
///
/// A surface is scoped to a single render call: it is acquired from a
/// provider closure (`FnOnce(u32, u32) -> ChartResult<S>`), receives draw
/// calls, and is serialized exactly once via [`Surface::finish`].
pub trait Surface {
    /// Set the DPI used to scale font sizes from points to pixels.
    fn set_dpi(&mut self, dpi: f64);

    /// Draw a rectangle, filling and/or stroking according to the style.
    ///
    /// A style without a fill color strokes only; a style without a stroke
    /// color fills only.
    fn fill_rect(&mut self, rect: Rect, style: &Style);

    /// Draw `text` with its left baseline anchored at `(x, y)`, honoring the
    /// style's font color, font size, and rotation.
    fn draw_text(&mut self, text: &str, x: i32, y: i32, style: &Style);

    /// Serialize the rendered image to `out`.
    ///
    /// Write failures propagate unchanged; drawing already performed is
    /// discarded rather than partially committed.
    fn finish(&mut self, out: &mut dyn Write) -> ChartResult<()>;
}
