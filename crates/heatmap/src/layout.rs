//! Canvas partitioning into label regions and the cell-plotting region.

use chart_common::Rect;

use crate::options::HeatmapOptions;

/// The four regions of a heatmap canvas.
///
/// Layout depends only on canvas dimensions and the configured label-region
/// sizes, never on grid content, so it is O(1) and fully deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartLayout {
    /// The full canvas.
    pub outer: Rect,
    /// Band along the left edge reserved for row labels.
    pub row_labels: Rect,
    /// Band along the top edge, right of the row-label band, reserved for
    /// column labels.
    pub column_labels: Rect,
    /// Remaining region where cells are plotted.
    pub cells: Rect,
}

impl ChartLayout {
    /// Partition a canvas of the given pixel dimensions.
    pub fn compute(width: u32, height: u32, options: &HeatmapOptions) -> Self {
        let outer = Rect::from_dimensions(width, height);
        let row_labels = Rect::new(0, 0, options.row_label_width, outer.bottom);
        let column_labels = Rect::new(
            row_labels.right,
            0,
            outer.right,
            options.column_label_height,
        );
        let cells = Rect::new(
            row_labels.right,
            column_labels.bottom,
            outer.right,
            outer.bottom,
        );

        Self {
            outer,
            row_labels,
            column_labels,
            cells,
        }
    }
}
