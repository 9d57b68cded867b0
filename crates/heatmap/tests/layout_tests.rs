//! Tests for canvas partitioning and per-cell geometry.

use chart_common::Rect;
use heatmap::{CellLayout, ChartLayout, HeatmapOptions};
use test_utils::create_test_grid;

// ============================================================================
// Region partitioning
// ============================================================================

#[test]
fn test_regions_on_600x600() {
    let layout = ChartLayout::compute(600, 600, &HeatmapOptions::default());

    assert_eq!(layout.outer, Rect::new(0, 0, 600, 600));
    assert_eq!(layout.row_labels, Rect::new(0, 0, 300, 600));
    assert_eq!(layout.column_labels, Rect::new(300, 0, 600, 300));
    assert_eq!(layout.cells, Rect::new(300, 300, 600, 600));
}

#[test]
fn test_regions_tile_the_canvas() {
    let layout = ChartLayout::compute(900, 700, &HeatmapOptions::default());

    // Column-label band starts where the row-label band ends, cells region
    // fills whatever remains
    assert_eq!(layout.column_labels.left, layout.row_labels.right);
    assert_eq!(layout.cells.left, layout.row_labels.right);
    assert_eq!(layout.cells.top, layout.column_labels.bottom);
    assert_eq!(layout.cells.right, layout.outer.right);
    assert_eq!(layout.cells.bottom, layout.outer.bottom);
}

// ============================================================================
// Cell geometry
// ============================================================================

#[test]
fn test_cells_2x2_in_300x300_region() {
    let grid = create_test_grid(2, 2);
    let cells = CellLayout::compute(&grid, Rect::new(300, 300, 600, 600));

    assert_eq!(cells.len(), 4);
    assert_eq!(cells.cell_at(0, 0).unwrap().rect, Rect::new(300, 300, 450, 450));
    assert_eq!(cells.cell_at(0, 1).unwrap().rect, Rect::new(300, 450, 450, 600));
    assert_eq!(cells.cell_at(1, 0).unwrap().rect, Rect::new(450, 300, 600, 450));
    assert_eq!(cells.cell_at(1, 1).unwrap().rect, Rect::new(450, 450, 600, 600));
}

#[test]
fn test_cells_are_column_major() {
    let grid = vec![vec![1.0, 3.0], vec![2.0, 4.0]];
    let cells = CellLayout::compute(&grid, Rect::new(0, 0, 100, 100));

    let values: Vec<f64> = cells.iter().map(|cell| cell.value).collect();
    assert_eq!(values, vec![1.0, 3.0, 2.0, 4.0]);
}

#[test]
fn test_typed_accessors_match_grid_positions() {
    let grid = create_test_grid(4, 3);
    let cells = CellLayout::compute(&grid, Rect::new(0, 0, 400, 300));

    // Values encode their position as col * 1000 + row
    assert_eq!(cells.cell_at(2, 1).unwrap().value, 2001.0);
    assert_eq!(cells.first_cell_of_column(3).unwrap().value, 3000.0);
    assert_eq!(cells.first_cell_of_row(2).unwrap().value, 2.0);
    assert!(cells.cell_at(4, 0).is_none());
    assert!(cells.cell_at(0, 3).is_none());
}

#[test]
fn test_adjacent_cells_share_edges() {
    let grid = create_test_grid(3, 3);
    let cells = CellLayout::compute(&grid, Rect::new(0, 0, 100, 100));

    for col in 0..2 {
        for row in 0..3 {
            let here = cells.cell_at(col, row).unwrap().rect;
            let right = cells.cell_at(col + 1, row).unwrap().rect;
            assert_eq!(here.right, right.left);
        }
    }
    for col in 0..3 {
        for row in 0..2 {
            let here = cells.cell_at(col, row).unwrap().rect;
            let below = cells.cell_at(col, row + 1).unwrap().rect;
            assert_eq!(here.bottom, below.top);
        }
    }
}

#[test]
fn test_truncation_slack_at_far_edges() {
    // 100 / 3 truncates to 33; the last pixel column/row stays unrendered
    let grid = create_test_grid(3, 3);
    let cells = CellLayout::compute(&grid, Rect::new(0, 0, 100, 100));

    assert_eq!(cells.cell_at(2, 2).unwrap().rect.right, 99);
    assert_eq!(cells.cell_at(2, 2).unwrap().rect.bottom, 99);
}

#[test]
fn test_empty_and_rowless_grids_produce_no_cells() {
    let no_columns: Vec<Vec<f64>> = Vec::new();
    let cells = CellLayout::compute(&no_columns, Rect::new(0, 0, 100, 100));
    assert!(cells.is_empty());

    let no_rows: Vec<Vec<f64>> = vec![Vec::new()];
    let cells = CellLayout::compute(&no_rows, Rect::new(0, 0, 100, 100));
    assert!(cells.is_empty());
    assert!(cells.first_cell_of_column(0).is_none());
}
