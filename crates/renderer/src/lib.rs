//! Raster drawing backend for heatmap charts.
//!
//! Implements the `chart_common::Surface` seam on top of an RGBA pixel
//! buffer:
//! - Rectangle fill/stroke and text drawing (`raster`)
//! - Fallible font loading (`font`)
//! - PNG serialization (`png`)

pub mod font;
pub mod png;
pub mod raster;

pub use font::FontError;
pub use raster::RasterSurface;
