//! A surface implementation that records draw calls instead of rasterizing.
//!
//! Tests assert on the recorded operation sequence: how many rectangles and
//! text draws a render produced, in what order, and with which styles. The
//! surface writes into a shared [`DrawLog`] handle so the log stays
//! inspectable after the render pipeline has consumed the surface, and
//! `finish` dumps the operations deterministically so byte-level
//! idempotence can be checked without a raster backend.

use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use chart_common::{ChartResult, Color, Rect, Style, Surface};

/// One recorded draw operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    SetDpi {
        dpi: f64,
    },
    Rect {
        rect: Rect,
        fill: Option<Color>,
        stroke: Option<Color>,
        stroke_width: f32,
    },
    Text {
        text: String,
        x: i32,
        y: i32,
        color: Option<Color>,
        font_size: f32,
        rotation_degrees: f32,
    },
}

/// Shared, cloneable handle onto a recorded operation sequence.
#[derive(Debug, Clone, Default)]
pub struct DrawLog {
    ops: Rc<RefCell<Vec<DrawOp>>>,
}

impl DrawLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded operations, in order.
    pub fn ops(&self) -> Vec<DrawOp> {
        self.ops.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.ops.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.borrow().is_empty()
    }

    /// All recorded rectangle draws, in order.
    pub fn rect_fills(&self) -> Vec<(Rect, Option<Color>)> {
        self.ops
            .borrow()
            .iter()
            .filter_map(|op| match op {
                DrawOp::Rect { rect, fill, .. } => Some((*rect, *fill)),
                _ => None,
            })
            .collect()
    }

    /// All recorded text draws, in order: (text, x, y, rotation).
    pub fn text_draws(&self) -> Vec<(String, i32, i32, f32)> {
        self.ops
            .borrow()
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text {
                    text,
                    x,
                    y,
                    rotation_degrees,
                    ..
                } => Some((text.clone(), *x, *y, *rotation_degrees)),
                _ => None,
            })
            .collect()
    }

    fn push(&self, op: DrawOp) {
        self.ops.borrow_mut().push(op);
    }
}

/// Surface that captures draw calls in order.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    log: DrawLog,
}

impl RecordingSurface {
    /// Surface with its own private log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Surface that appends to a shared log.
    pub fn with_log(log: DrawLog) -> Self {
        Self { log }
    }

    /// Handle onto this surface's log.
    pub fn log(&self) -> DrawLog {
        self.log.clone()
    }
}

impl Surface for RecordingSurface {
    fn set_dpi(&mut self, dpi: f64) {
        self.log.push(DrawOp::SetDpi { dpi });
    }

    fn fill_rect(&mut self, rect: Rect, style: &Style) {
        self.log.push(DrawOp::Rect {
            rect,
            fill: style.fill_color,
            stroke: style.stroke_color,
            stroke_width: style.stroke_width,
        });
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, style: &Style) {
        self.log.push(DrawOp::Text {
            text: text.to_string(),
            x,
            y,
            color: style.font_color,
            font_size: style.font_size,
            rotation_degrees: style.rotation_degrees,
        });
    }

    fn finish(&mut self, out: &mut dyn Write) -> ChartResult<()> {
        for op in self.log.ops.borrow().iter() {
            writeln!(out, "{:?}", op)?;
        }
        Ok(())
    }
}
