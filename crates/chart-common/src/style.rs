//! Paint attributes applied to a single draw call.

use crate::color::Color;

/// Bundle of paint attributes for one draw call.
///
/// A style is passed per call and never persisted; absent colors mean the
/// corresponding operation (fill, stroke, text) is skipped by the surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub fill_color: Option<Color>,
    pub stroke_color: Option<Color>,
    pub stroke_width: f32,
    pub font_color: Option<Color>,
    pub font_size: f32,
    /// Text rotation in degrees; negative values rotate counterclockwise.
    pub rotation_degrees: f32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fill_color: None,
            stroke_color: None,
            stroke_width: 1.0,
            font_color: None,
            font_size: 12.0,
            rotation_degrees: 0.0,
        }
    }
}

impl Style {
    /// Fill-only style.
    pub fn filled(color: Color) -> Self {
        Self {
            fill_color: Some(color),
            ..Self::default()
        }
    }

    /// Fill plus stroke outline.
    pub fn outlined(fill: Color, stroke: Color, stroke_width: f32) -> Self {
        Self {
            fill_color: Some(fill),
            stroke_color: Some(stroke),
            stroke_width,
            ..Self::default()
        }
    }

    /// Text style with the given color and size.
    pub fn text(color: Color, font_size: f32) -> Self {
        Self {
            font_color: Some(color),
            font_size,
            ..Self::default()
        }
    }

    /// Set the text rotation in degrees.
    pub fn with_rotation(mut self, degrees: f32) -> Self {
        self.rotation_degrees = degrees;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_has_no_stroke() {
        let style = Style::filled(Color::RED);
        assert_eq!(style.fill_color, Some(Color::RED));
        assert_eq!(style.stroke_color, None);
    }

    #[test]
    fn test_text_rotation() {
        let style = Style::text(Color::BLACK, 18.0).with_rotation(-90.0);
        assert_eq!(style.font_size, 18.0);
        assert_eq!(style.rotation_degrees, -90.0);
    }
}
