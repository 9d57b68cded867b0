//! The render orchestrator: validation, layout, painting, serialization.

use std::io::Write;

use chart_common::{ChartResult, Style, Surface};

use crate::cells::CellLayout;
use crate::grid::Heatmap;
use crate::labels;
use crate::layout::ChartLayout;
use crate::scale::ColorRamp;
use crate::DEFAULT_DPI;

impl Heatmap {
    /// Render the heatmap onto a surface acquired from `provider` and
    /// serialize it to `out`.
    ///
    /// The pipeline runs in a fixed order: validate, acquire surface,
    /// paint background, paint cells, paint label panels over the cells,
    /// draw column then row labels, flush. Any failure is returned
    /// unchanged and nothing is committed to `out`. A validation failure
    /// means no surface is ever acquired and no draw call is issued.
    pub fn render<S, P, W>(&self, provider: P, out: &mut W) -> ChartResult<()>
    where
        S: Surface,
        P: FnOnce(u32, u32) -> ChartResult<S>,
        W: Write,
    {
        self.validate()?;
        tracing::debug!(
            columns = self.columns(),
            rows = self.rows(),
            width = self.width,
            height = self.height,
            "rendering heatmap"
        );

        let mut surface = provider(self.width, self.height)?;
        surface.set_dpi(if self.dpi > 0.0 { self.dpi } else { DEFAULT_DPI });

        let layout = ChartLayout::compute(self.width, self.height, &self.options);
        surface.fill_rect(
            layout.outer,
            &Style::outlined(self.options.background, self.options.background, 1.0),
        );

        let ramp = ColorRamp::from_grid(&self.grid);
        let cells = CellLayout::compute(&self.grid, layout.cells);
        for cell in cells.iter() {
            surface.fill_rect(
                cell.rect,
                &Style::outlined(ramp.color_for(cell.value), self.options.cell_outline, 1.0),
            );
        }

        // Label panels paint after the cells so they cover any overlap
        surface.fill_rect(
            layout.column_labels,
            &Style::filled(self.options.column_label_panel),
        );
        surface.fill_rect(
            layout.row_labels,
            &Style::filled(self.options.row_label_panel),
        );

        labels::draw_column_labels(&mut surface, &self.col_labels, &cells, &self.options);
        labels::draw_row_labels(&mut surface, &self.row_labels, &cells, &self.options);

        surface.finish(out)
    }
}
