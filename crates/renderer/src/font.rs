//! Fallible font loading for text rendering.
//!
//! Font availability is a capability, not an assumption: every loader
//! returns a `Result`, and the caller decides whether a missing font is
//! fatal. A `RasterSurface` constructed without a font still renders
//! shapes and skips text (see `raster`).

use std::io;
use std::path::Path;

use chart_common::ChartError;
use rusttype::Font;
use thiserror::Error;

/// Errors raised while loading a font.
#[derive(Debug, Error)]
pub enum FontError {
    #[error("font data could not be parsed")]
    InvalidData,

    #[error("no usable default font found on this system")]
    NoDefaultFont,

    #[error("failed to read font file: {0}")]
    Io(#[from] io::Error),
}

impl From<FontError> for ChartError {
    fn from(err: FontError) -> Self {
        ChartError::Font(err.to_string())
    }
}

/// Well-known TrueType font locations probed by [`load_default`].
const DEFAULT_FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Parse a font from owned TrueType data.
pub fn from_vec(data: Vec<u8>) -> Result<Font<'static>, FontError> {
    Font::try_from_vec(data).ok_or(FontError::InvalidData)
}

/// Read and parse a TrueType font file.
pub fn from_file(path: impl AsRef<Path>) -> Result<Font<'static>, FontError> {
    let data = std::fs::read(path)?;
    from_vec(data)
}

/// Load the first usable font from the well-known system locations.
pub fn load_default() -> Result<Font<'static>, FontError> {
    for path in DEFAULT_FONT_PATHS {
        let path = Path::new(path);
        if !path.exists() {
            continue;
        }
        match from_file(path) {
            Ok(font) => return Ok(font),
            Err(err) => {
                tracing::debug!(path = %path.display(), error = %err, "skipping unusable font");
            }
        }
    }
    Err(FontError::NoDefaultFont)
}
