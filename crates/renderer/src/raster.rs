//! RGBA raster surface implementing the `chart_common::Surface` seam.

use std::io::Write;

use chart_common::{ChartResult, Color, Rect, Style, Surface};
use image::{imageops, Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_hollow_rect_mut, draw_text_mut};
use rusttype::{point, Font, Scale};

use crate::png;

/// Font sizes are given in points; pixels = points * dpi / 72.
const POINTS_PER_INCH: f64 = 72.0;

/// A drawing surface backed by an RGBA pixel buffer.
///
/// The buffer starts fully white. Text drawing requires a font; a surface
/// without one renders shapes normally and skips text with a single
/// warning, leaving the missing-font policy to the caller (load one with
/// [`crate::font`] and attach it via [`RasterSurface::with_font`]).
pub struct RasterSurface {
    image: RgbaImage,
    dpi: f64,
    font: Option<Font<'static>>,
    missing_font_warned: bool,
}

impl RasterSurface {
    /// Create a surface of the given pixel dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, Rgba([255, 255, 255, 255])),
            dpi: POINTS_PER_INCH,
            font: None,
            missing_font_warned: false,
        }
    }

    /// Attach a font for text drawing.
    pub fn with_font(mut self, font: Font<'static>) -> Self {
        self.font = Some(font);
        self
    }

    /// The underlying pixel buffer.
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }
}

fn to_rgba(color: Color) -> Rgba<u8> {
    Rgba([color.r, color.g, color.b, color.a])
}

/// Advance width and line height of `text` at the given scale, in pixels.
fn measure_text(font: &Font<'_>, text: &str, scale: Scale) -> (u32, u32) {
    let v_metrics = font.v_metrics(scale);
    let width: f32 = font
        .layout(text, scale, point(0.0, v_metrics.ascent))
        .map(|glyph| glyph.unpositioned().h_metrics().advance_width)
        .sum();
    let height = v_metrics.ascent - v_metrics.descent;
    (width.ceil() as u32, height.ceil() as u32)
}

/// Draw rotated text by rendering into a scratch buffer and blitting a
/// quarter-turned copy. `turns` counts clockwise quarter turns (1..=3).
///
/// The anchor `(x, y)` stays on the glyph run's starting corner: the top
/// for a clockwise turn, the bottom for a counterclockwise one.
fn draw_rotated_text(
    image: &mut RgbaImage,
    font: &Font<'_>,
    text: &str,
    x: i32,
    y: i32,
    scale: Scale,
    color: Rgba<u8>,
    turns: i32,
) {
    let (text_w, text_h) = measure_text(font, text, scale);
    if text_w == 0 || text_h == 0 {
        return;
    }

    let mut scratch = RgbaImage::from_pixel(text_w, text_h, to_rgba(Color::transparent()));
    draw_text_mut(&mut scratch, color, 0, 0, scale, font, text);

    let rotated = match turns {
        1 => imageops::rotate90(&scratch),
        2 => imageops::rotate180(&scratch),
        _ => imageops::rotate270(&scratch),
    };

    let (ox, oy) = match turns {
        1 => (x, y),
        2 => (x - rotated.width() as i32, y - rotated.height() as i32),
        _ => (x, y - rotated.height() as i32),
    };
    imageops::overlay(image, &rotated, ox as i64, oy as i64);
}

impl Surface for RasterSurface {
    fn set_dpi(&mut self, dpi: f64) {
        if dpi > 0.0 {
            self.dpi = dpi;
        }
    }

    fn fill_rect(&mut self, rect: Rect, style: &Style) {
        let (w, h) = (rect.width(), rect.height());
        if w <= 0 || h <= 0 {
            return;
        }

        if let Some(fill) = style.fill_color {
            let region = imageproc::rect::Rect::at(rect.left, rect.top).of_size(w as u32, h as u32);
            draw_filled_rect_mut(&mut self.image, region, to_rgba(fill));
        }

        if let Some(stroke) = style.stroke_color {
            let passes = style.stroke_width.round().max(1.0) as i32;
            for inset in 0..passes {
                let (sw, sh) = (w - 2 * inset, h - 2 * inset);
                if sw <= 0 || sh <= 0 {
                    break;
                }
                let border = imageproc::rect::Rect::at(rect.left + inset, rect.top + inset)
                    .of_size(sw as u32, sh as u32);
                draw_hollow_rect_mut(&mut self.image, border, to_rgba(stroke));
            }
        }
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, style: &Style) {
        let font = match self.font.as_ref() {
            Some(font) => font,
            None => {
                if !self.missing_font_warned {
                    tracing::warn!("no font attached to raster surface; skipping text draws");
                    self.missing_font_warned = true;
                }
                return;
            }
        };

        let px_size = (style.font_size as f64 * self.dpi / POINTS_PER_INCH) as f32;
        let scale = Scale::uniform(px_size);
        let color = to_rgba(style.font_color.unwrap_or(Color::BLACK));

        // Arbitrary angles are rounded to the nearest quarter turn
        let turns = ((style.rotation_degrees / 90.0).round() as i32).rem_euclid(4);
        if turns == 0 {
            let ascent = font.v_metrics(scale).ascent.ceil() as i32;
            draw_text_mut(&mut self.image, color, x, y - ascent, scale, font, text);
        } else {
            draw_rotated_text(&mut self.image, font, text, x, y, scale, color, turns);
        }
    }

    fn finish(&mut self, out: &mut dyn Write) -> ChartResult<()> {
        let encoded = png::encode_auto(
            self.image.as_raw(),
            self.image.width() as usize,
            self.image.height() as usize,
        )?;
        out.write_all(&encoded)?;
        Ok(())
    }
}
