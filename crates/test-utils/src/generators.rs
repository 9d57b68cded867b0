//! Test data generators for creating synthetic heatmap grids.
//!
//! These generators create predictable, verifiable data patterns that can
//! be used across the test suite.

/// Creates a test grid with predictable values.
///
/// The grid is column-major (`grid[col][row]`) and each cell value is
/// calculated as `col * 1000 + row`, which makes it easy to verify that
/// values land in the right cell by checking `grid[col][row] == col * 1000
/// + row`.
///
/// # Example
///
/// ```
/// use test_utils::create_test_grid;
///
/// let grid = create_test_grid(10, 5);
/// assert_eq!(grid.len(), 10);       // 10 columns
/// assert_eq!(grid[0].len(), 5);     // 5 rows each
/// assert_eq!(grid[0][0], 0.0);      // col=0, row=0
/// assert_eq!(grid[3][2], 3002.0);   // col=3, row=2
/// ```
pub fn create_test_grid(columns: usize, rows: usize) -> Vec<Vec<f64>> {
    (0..columns)
        .map(|col| (0..rows).map(|row| (col * 1000 + row) as f64).collect())
        .collect()
}

/// Creates a grid where every cell holds the same value.
pub fn create_uniform_grid(columns: usize, rows: usize, value: f64) -> Vec<Vec<f64>> {
    vec![vec![value; rows]; columns]
}

/// Creates sequential labels with a common prefix: `["r0", "r1", ...]`.
pub fn create_labels(prefix: &str, count: usize) -> Vec<String> {
    (0..count).map(|i| format!("{}{}", prefix, i)).collect()
}
