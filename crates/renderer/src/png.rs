//! PNG encoding for RGBA surface buffers.
//!
//! Two encoding modes, selected automatically by `encode_auto`:
//! - **Indexed (color type 3)** when the image holds at most 256 unique
//!   colors, the common case for flat-color charts, and much smaller.
//! - **Truecolor RGBA (color type 6)** otherwise.
//!
//! Palette order follows first encounter in scanline order, so repeated
//! encodings of the same pixels produce byte-identical output.

use std::collections::{HashMap, HashSet};
use std::io::Write;

use chart_common::{ChartError, ChartResult};
use rayon::prelude::*;

const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// Maximum colors for indexed PNG (PNG8)
const MAX_PALETTE_SIZE: usize = 256;

/// Minimum pixels to benefit from parallel color scanning
const PARALLEL_THRESHOLD: usize = 4096; // 64x64 or larger

#[inline(always)]
fn pack_color(px: &[u8]) -> u32 {
    u32::from_be_bytes([px[0], px[1], px[2], px[3]])
}

#[inline(always)]
fn unpack_color(packed: u32) -> [u8; 4] {
    packed.to_be_bytes()
}

/// Encode RGBA pixels as a PNG, choosing indexed or truecolor mode.
///
/// `pixels` must hold exactly `width * height * 4` bytes.
pub fn encode_auto(pixels: &[u8], width: usize, height: usize) -> ChartResult<Vec<u8>> {
    if pixels.len() != width * height * 4 {
        return Err(ChartError::Encode(format!(
            "pixel buffer is {} bytes, expected {} for {}x{} RGBA",
            pixels.len(),
            width * height * 4,
            width,
            height
        )));
    }

    match build_palette(pixels) {
        Some((palette, indices)) => encode_indexed(width, height, &palette, &indices),
        None => encode_rgba(pixels, width, height),
    }
}

/// Encode RGBA pixels as a truecolor PNG (color type 6).
pub fn encode_rgba(pixels: &[u8], width: usize, height: usize) -> ChartResult<Vec<u8>> {
    let mut png = Vec::new();
    png.extend_from_slice(&PNG_SIGNATURE);

    write_chunk(&mut png, b"IHDR", &ihdr(width, height, 6));

    let idat = deflate_scanlines(pixels, width * 4)?;
    write_chunk(&mut png, b"IDAT", &idat);

    write_chunk(&mut png, b"IEND", &[]);
    Ok(png)
}

/// Encode palette indices as an indexed PNG (color type 3).
pub fn encode_indexed(
    width: usize,
    height: usize,
    palette: &[[u8; 4]],
    indices: &[u8],
) -> ChartResult<Vec<u8>> {
    let mut png = Vec::new();
    png.extend_from_slice(&PNG_SIGNATURE);

    write_chunk(&mut png, b"IHDR", &ihdr(width, height, 3));

    let mut plte = Vec::with_capacity(palette.len() * 3);
    for [r, g, b, _] in palette {
        plte.extend_from_slice(&[*r, *g, *b]);
    }
    write_chunk(&mut png, b"PLTE", &plte);

    // tRNS carries one alpha byte per palette entry; only needed when any
    // color is not fully opaque
    if palette.iter().any(|[_, _, _, a]| *a < 255) {
        let trns: Vec<u8> = palette.iter().map(|[_, _, _, a]| *a).collect();
        write_chunk(&mut png, b"tRNS", &trns);
    }

    let idat = deflate_scanlines(indices, width.max(1))?;
    write_chunk(&mut png, b"IDAT", &idat);

    write_chunk(&mut png, b"IEND", &[]);
    Ok(png)
}

/// Try to build a palette and per-pixel indices.
///
/// Returns `None` when the image has more than `MAX_PALETTE_SIZE` unique
/// colors and must fall back to truecolor.
fn build_palette(pixels: &[u8]) -> Option<(Vec<[u8; 4]>, Vec<u8>)> {
    if pixels.is_empty() {
        return None;
    }

    let num_pixels = pixels.len() / 4;
    let ordered = if num_pixels >= PARALLEL_THRESHOLD {
        unique_colors_parallel(pixels)
    } else {
        unique_colors(pixels)
    };
    if ordered.len() > MAX_PALETTE_SIZE {
        return None;
    }

    let index_of: HashMap<u32, u8> = ordered
        .iter()
        .enumerate()
        .map(|(idx, packed)| (*packed, idx as u8))
        .collect();

    let lookup = |px: &[u8]| index_of.get(&pack_color(px)).copied().unwrap_or(0);
    let indices: Vec<u8> = if num_pixels >= PARALLEL_THRESHOLD {
        pixels
            .par_chunks(parallel_chunk_len(pixels.len()))
            .flat_map_iter(|chunk| chunk.chunks_exact(4).map(lookup))
            .collect()
    } else {
        pixels.chunks_exact(4).map(lookup).collect()
    };

    let palette = ordered.into_iter().map(unpack_color).collect();
    Some((palette, indices))
}

/// Unique colors in first-encounter order.
///
/// Stops scanning once the palette limit is exceeded; callers treat a
/// result longer than `MAX_PALETTE_SIZE` as "too many colors".
fn unique_colors(pixels: &[u8]) -> Vec<u32> {
    let mut seen: HashSet<u32> = HashSet::with_capacity(MAX_PALETTE_SIZE + 1);
    let mut ordered = Vec::with_capacity(MAX_PALETTE_SIZE + 1);

    for px in pixels.chunks_exact(4) {
        let packed = pack_color(px);
        if seen.insert(packed) {
            ordered.push(packed);
            if ordered.len() > MAX_PALETTE_SIZE {
                break;
            }
        }
    }

    ordered
}

/// Parallel unique-color scan for larger images.
///
/// Each chunk is scanned independently, then the per-chunk results are
/// merged in chunk order so the final palette order stays deterministic.
fn unique_colors_parallel(pixels: &[u8]) -> Vec<u32> {
    let per_chunk: Vec<Vec<u32>> = pixels
        .par_chunks(parallel_chunk_len(pixels.len()))
        .map(unique_colors)
        .collect();

    let mut seen: HashSet<u32> = HashSet::with_capacity(MAX_PALETTE_SIZE + 1);
    let mut ordered = Vec::with_capacity(MAX_PALETTE_SIZE + 1);
    for chunk_colors in per_chunk {
        for packed in chunk_colors {
            if seen.insert(packed) {
                ordered.push(packed);
                if ordered.len() > MAX_PALETTE_SIZE {
                    return ordered;
                }
            }
        }
    }

    ordered
}

/// Chunk length in bytes for parallel scans: pixel-aligned, one slice per
/// worker thread.
fn parallel_chunk_len(total_bytes: usize) -> usize {
    let pixels = total_bytes / 4;
    let per_thread = (pixels / rayon::current_num_threads()).max(256);
    per_thread * 4
}

fn ihdr(width: usize, height: usize, color_type: u8) -> Vec<u8> {
    let mut data = Vec::with_capacity(13);
    data.extend_from_slice(&(width as u32).to_be_bytes());
    data.extend_from_slice(&(height as u32).to_be_bytes());
    data.push(8); // bit depth
    data.push(color_type);
    data.push(0); // compression method
    data.push(0); // filter method
    data.push(0); // interlace method
    data
}

/// Prefix each scanline with filter type 0 and zlib-compress the result.
fn deflate_scanlines(data: &[u8], row_bytes: usize) -> ChartResult<Vec<u8>> {
    let rows = if row_bytes == 0 { 0 } else { data.len() / row_bytes };
    let mut raw = Vec::with_capacity(data.len() + rows);
    for row in data.chunks_exact(row_bytes) {
        raw.push(0); // filter type: none
        raw.extend_from_slice(row);
    }

    let mut encoder = flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::fast());
    encoder
        .write_all(&raw)
        .map_err(|e| ChartError::Encode(format!("IDAT compression failed: {}", e)))?;
    encoder
        .finish()
        .map_err(|e| ChartError::Encode(format!("IDAT compression failed: {}", e)))
}

fn write_chunk(png: &mut Vec<u8>, kind: &[u8; 4], data: &[u8]) {
    png.extend_from_slice(&(data.len() as u32).to_be_bytes());
    png.extend_from_slice(kind);
    png.extend_from_slice(data);

    let mut hasher = crc32fast::Hasher::new();
    hasher.update(kind);
    hasher.update(data);
    png.extend_from_slice(&hasher.finalize().to_be_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ihdr_dimensions(png: &[u8]) -> (u32, u32) {
        // signature (8) + length (4) + "IHDR" (4), then width/height
        let width = u32::from_be_bytes([png[16], png[17], png[18], png[19]]);
        let height = u32::from_be_bytes([png[20], png[21], png[22], png[23]]);
        (width, height)
    }

    #[test]
    fn test_build_palette_simple() {
        // 4 pixels: red, green, blue, red (3 unique colors)
        let pixels = [
            255, 0, 0, 255, // red
            0, 255, 0, 255, // green
            0, 0, 255, 255, // blue
            255, 0, 0, 255, // red again
        ];

        let (palette, indices) = build_palette(&pixels).unwrap();
        assert_eq!(palette.len(), 3);
        assert_eq!(indices, vec![0, 1, 2, 0]);
        assert_eq!(palette[0], [255, 0, 0, 255]);
    }

    #[test]
    fn test_build_palette_with_transparency() {
        let pixels = [
            255, 0, 0, 255, // red, opaque
            0, 0, 0, 0, // transparent
        ];

        let (palette, _) = build_palette(&pixels).unwrap();
        assert_eq!(palette.len(), 2);
        assert!(palette.iter().any(|[_, _, _, a]| *a == 0));
        assert!(palette.iter().any(|[_, _, _, a]| *a == 255));
    }

    #[test]
    fn test_build_palette_too_many_colors() {
        // 300 unique colors forces the truecolor fallback
        let mut pixels = Vec::with_capacity(300 * 4);
        for i in 0..300u32 {
            pixels.extend_from_slice(&[(i % 256) as u8, (i / 256) as u8, 7, 255]);
        }
        assert!(build_palette(&pixels).is_none());
    }

    #[test]
    fn test_parallel_scan_matches_sequential() {
        // 128x128 image, ~50 unique colors, above PARALLEL_THRESHOLD
        let mut pixels = Vec::with_capacity(128 * 128 * 4);
        for y in 0..128usize {
            for x in 0..128usize {
                let idx = ((x / 8) + (y / 8)) % 50;
                pixels.extend_from_slice(&[(idx * 5) as u8, (100 + idx * 3) as u8, 9, 255]);
            }
        }

        assert_eq!(unique_colors_parallel(&pixels), unique_colors(&pixels));
    }

    #[test]
    fn test_encode_auto_signature_and_dimensions() {
        let pixels = [
            255, 0, 0, 255, //
            0, 255, 0, 255, //
            0, 255, 0, 255, //
            255, 0, 0, 255, //
        ];

        let png = encode_auto(&pixels, 2, 2).unwrap();
        assert_eq!(&png[0..8], &PNG_SIGNATURE);
        assert_eq!(ihdr_dimensions(&png), (2, 2));
    }

    #[test]
    fn test_encode_auto_rejects_bad_buffer_length() {
        let result = encode_auto(&[0u8; 7], 2, 2);
        assert!(matches!(result, Err(ChartError::Encode(_))));
    }

    #[test]
    fn test_indexed_smaller_than_rgba_for_flat_images() {
        // Flat two-color 64x64 image, the shape a rendered chart produces
        let mut pixels = Vec::with_capacity(64 * 64 * 4);
        for i in 0..(64 * 64) {
            if i % 2 == 0 {
                pixels.extend_from_slice(&[255, 255, 255, 255]);
            } else {
                pixels.extend_from_slice(&[0, 0, 255, 255]);
            }
        }

        let auto = encode_auto(&pixels, 64, 64).unwrap();
        let rgba = encode_rgba(&pixels, 64, 64).unwrap();
        assert!(auto.len() < rgba.len());
    }

    #[test]
    fn test_encode_is_deterministic() {
        let mut pixels = Vec::with_capacity(96 * 96 * 4);
        for i in 0..(96 * 96usize) {
            let shade = ((i / 96) % 40 * 6) as u8;
            pixels.extend_from_slice(&[shade, shade, 255, 255]);
        }

        let first = encode_auto(&pixels, 96, 96).unwrap();
        let second = encode_auto(&pixels, 96, 96).unwrap();
        assert_eq!(first, second);
    }
}
