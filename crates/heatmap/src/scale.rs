//! Value-to-color mapping for heatmap cells.

use chart_common::Color;

/// Linear white-to-blue ramp over `[0, max]`.
///
/// Values normalize against the grid maximum and clamp to `[0, 1]`, so
/// out-of-range values saturate at the ramp ends instead of wrapping
/// channel arithmetic.
#[derive(Debug, Clone, Copy)]
pub struct ColorRamp {
    max: f64,
}

impl ColorRamp {
    /// Build a ramp from the grid's maximum value (single pass, no
    /// caching).
    ///
    /// A grid whose maximum is not positive (all zeros or negatives) has
    /// no usable range; every value then maps to white.
    pub fn from_grid(grid: &[Vec<f64>]) -> Self {
        let max = grid
            .iter()
            .flatten()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);
        if max <= 0.0 {
            tracing::warn!(max, "heatmap has no positive values; all cells render white");
        }
        Self { max }
    }

    /// Ramp with an explicit maximum.
    pub fn with_max(max: f64) -> Self {
        Self { max }
    }

    /// Map a value to its cell color: white at the bottom of the range,
    /// pure blue at the top.
    pub fn color_for(&self, value: f64) -> Color {
        let t = if self.max > 0.0 {
            (value / self.max).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let level = (t * 255.0).round() as u8;
        Color::new(255 - level, 255 - level, 255, 255)
    }
}
