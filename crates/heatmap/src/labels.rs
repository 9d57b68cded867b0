//! Row and column label placement and drawing.

use chart_common::{Style, Surface};

use crate::cells::CellLayout;
use crate::options::HeatmapOptions;

/// Draw column labels above the first cell of each column, rotated to read
/// bottom-to-top.
pub fn draw_column_labels<S: Surface>(
    surface: &mut S,
    labels: &[String],
    cells: &CellLayout,
    options: &HeatmapOptions,
) {
    let style = Style::text(options.label_color, options.font_size).with_rotation(-90.0);
    for (col, label) in labels.iter().enumerate() {
        let Some(cell) = cells.first_cell_of_column(col) else {
            continue;
        };
        let x = cell.rect.center_x();
        let y = cell.rect.top - options.label_offset;
        surface.draw_text(label, x, y, &style);
    }
}

/// Draw row labels at the left canvas edge, vertically centered on the
/// first cell of each row.
pub fn draw_row_labels<S: Surface>(
    surface: &mut S,
    labels: &[String],
    cells: &CellLayout,
    options: &HeatmapOptions,
) {
    let style = Style::text(options.label_color, options.font_size);
    for (row, label) in labels.iter().enumerate() {
        let Some(cell) = cells.first_cell_of_row(row) else {
            continue;
        };
        surface.draw_text(label, 0, cell.rect.center_y(), &style);
    }
}
