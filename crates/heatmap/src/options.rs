//! Named configuration for heatmap layout and colors.

use chart_common::{ChartResult, Color};
use serde::{Deserialize, Serialize};

/// Layout and paint configuration.
///
/// Every field has a default matching the library's classic fixed
/// appearance; options load from JSON or are built in code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeatmapOptions {
    /// Width of the row-label band along the left edge.
    pub row_label_width: i32,
    /// Height of the column-label band along the top edge.
    pub column_label_height: i32,
    /// Gap between a column label and the top edge of its first cell.
    pub label_offset: i32,
    /// Label font size in points.
    pub font_size: f32,
    /// Fill and stroke of the full-canvas background.
    pub background: Color,
    /// Stroke color around each cell.
    pub cell_outline: Color,
    /// Backing panel painted behind the column labels.
    pub column_label_panel: Color,
    /// Backing panel painted behind the row labels.
    pub row_label_panel: Color,
    /// Label text color.
    pub label_color: Color,
}

impl Default for HeatmapOptions {
    fn default() -> Self {
        Self {
            row_label_width: 300,
            column_label_height: 300,
            label_offset: 10,
            font_size: 18.0,
            background: Color::BLACK,
            cell_outline: Color::BLACK,
            column_label_panel: Color::RED,
            row_label_panel: Color::GREEN,
            label_color: Color::BLACK,
        }
    }
}

impl HeatmapOptions {
    /// Load options from a JSON string; absent fields keep their defaults.
    pub fn from_json(json_str: &str) -> ChartResult<Self> {
        Ok(serde_json::from_str(json_str)?)
    }
}
