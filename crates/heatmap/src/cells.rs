//! Mapping grid values to per-cell screen rectangles.

use chart_common::Rect;

/// One grid value paired with the rectangle it occupies on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub value: f64,
    pub rect: Rect,
}

/// Cell rectangles for a whole grid, in column-major order.
///
/// Callers address cells through the typed accessors rather than
/// recomputing flat-sequence offsets, so nothing outside this module
/// depends on the iteration order.
#[derive(Debug, Clone)]
pub struct CellLayout {
    cells: Vec<Cell>,
    columns: usize,
    rows: usize,
}

impl CellLayout {
    /// Subdivide `region` into one rectangle per grid entry.
    ///
    /// Cell dimensions use truncating integer division, which can leave
    /// unrendered slack on the right/bottom edges when the region does not
    /// divide evenly; the slack is accepted rather than redistributed.
    pub fn compute(grid: &[Vec<f64>], region: Rect) -> Self {
        let columns = grid.len();
        let rows = grid.first().map_or(0, Vec::len);
        if columns == 0 || rows == 0 {
            return Self {
                cells: Vec::new(),
                columns,
                rows,
            };
        }

        let cell_width = region.width() / columns as i32;
        let cell_height = region.height() / rows as i32;
        tracing::debug!(
            columns,
            rows,
            cell_width,
            cell_height,
            "computed heatmap cell layout"
        );

        let mut cells = Vec::with_capacity(columns * rows);
        for (col, values) in grid.iter().enumerate() {
            for (row, &value) in values.iter().enumerate() {
                let left = region.left + col as i32 * cell_width;
                let top = region.top + row as i32 * cell_height;
                cells.push(Cell {
                    value,
                    rect: Rect::new(left, top, left + cell_width, top + cell_height),
                });
            }
        }

        Self {
            cells,
            columns,
            rows,
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells in column-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Cell at the given column and row, if in range.
    pub fn cell_at(&self, col: usize, row: usize) -> Option<&Cell> {
        if col >= self.columns || row >= self.rows {
            return None;
        }
        self.cells.get(col * self.rows + row)
    }

    /// Topmost cell of a column; column labels anchor to it.
    pub fn first_cell_of_column(&self, col: usize) -> Option<&Cell> {
        self.cell_at(col, 0)
    }

    /// Leftmost cell of a row; row labels anchor to it.
    pub fn first_cell_of_row(&self, row: usize) -> Option<&Cell> {
        self.cell_at(0, row)
    }
}
