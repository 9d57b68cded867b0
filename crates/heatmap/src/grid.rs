//! Heatmap data and shape validation.

use chart_common::{ChartError, ChartResult};

use crate::options::HeatmapOptions;
use crate::DEFAULT_DPI;

/// A grid of numeric values with row and column labels.
///
/// The grid is column-major: `grid[col][row]`. All columns must have the
/// same length and label counts must match the grid shape; [`Heatmap::validate`]
/// checks this before any layout work.
#[derive(Debug, Clone)]
pub struct Heatmap {
    /// Cell values, one inner vector per column.
    pub grid: Vec<Vec<f64>>,
    /// One label per row, drawn at the left canvas edge.
    pub row_labels: Vec<String>,
    /// One label per column, drawn above the first row.
    pub col_labels: Vec<String>,
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Font scaling factor; values that are not positive fall back to
    /// [`DEFAULT_DPI`] at render time.
    pub dpi: f64,
    pub options: HeatmapOptions,
}

impl Heatmap {
    pub fn new(
        grid: Vec<Vec<f64>>,
        row_labels: Vec<String>,
        col_labels: Vec<String>,
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            grid,
            row_labels,
            col_labels,
            width,
            height,
            dpi: DEFAULT_DPI,
            options: HeatmapOptions::default(),
        }
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.grid.len()
    }

    /// Number of rows (length of the first column; 0 for an empty grid).
    pub fn rows(&self) -> usize {
        self.grid.first().map_or(0, Vec::len)
    }

    /// Check grid shape and label counts.
    ///
    /// Checks run in a fixed order and stop at the first failure: empty
    /// grid, ragged columns, row label count, column label count.
    pub fn validate(&self) -> ChartResult<()> {
        if self.grid.is_empty() {
            return Err(ChartError::EmptyGrid);
        }

        let expected = self.grid[0].len();
        for (column, values) in self.grid.iter().enumerate() {
            if values.len() != expected {
                return Err(ChartError::RaggedGrid {
                    column,
                    expected,
                    actual: values.len(),
                });
            }
        }

        if self.row_labels.len() != expected {
            return Err(ChartError::RowLabelCountMismatch {
                labels: self.row_labels.len(),
                rows: expected,
            });
        }
        if self.col_labels.len() != self.grid.len() {
            return Err(ChartError::ColLabelCountMismatch {
                labels: self.col_labels.len(),
                columns: self.grid.len(),
            });
        }

        Ok(())
    }

    /// Largest value in the grid, computed in one pass per call.
    ///
    /// Returns negative infinity for a grid with no values.
    pub fn max_value(&self) -> f64 {
        self.grid
            .iter()
            .flatten()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max)
    }
}
