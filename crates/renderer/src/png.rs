//! PNG encoding for rendered frames.
//!
//! Frames are flat dark backgrounds with a handful of colors plus
//! antialiased edges, so the encoder picks the smallest of:
//! - **Indexed (color type 3)** when there are at most 256 distinct colors.
//! - **RGB (color type 2)** when every pixel is opaque.
//! - **RGBA (color type 6)** otherwise.

use std::collections::HashMap;
use std::io::Write;

use flate2::write::ZlibEncoder;
use flate2::Compression;
use rayon::prelude::*;
use wallpaper_common::{WallpaperError, WallpaperResult};

const SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

const MAX_PALETTE_SIZE: usize = 256;

/// Rows per work unit when building scanlines in parallel.
const ROWS_PER_CHUNK: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorType {
    Rgb = 2,
    Indexed = 3,
    Rgba = 6,
}

/// Encode straight (non-premultiplied) RGBA pixels.
pub fn encode_png(pixels: &[u8], width: u32, height: u32) -> WallpaperResult<Vec<u8>> {
    let (w, h) = (width as usize, height as usize);
    if w == 0 || h == 0 {
        return Err(WallpaperError::EncodeError(format!(
            "empty image {}x{}",
            width, height
        )));
    }
    if pixels.len() != w * h * 4 {
        return Err(WallpaperError::EncodeError(format!(
            "expected {} bytes for {}x{}, got {}",
            w * h * 4,
            width,
            height,
            pixels.len()
        )));
    }

    if let Some((palette, indices)) = extract_palette(pixels) {
        return encode_indexed(&palette, &indices, w, h);
    }

    let opaque = pixels.par_chunks_exact(4).all(|p| p[3] == 255);
    if opaque {
        let rgb: Vec<u8> = pixels
            .chunks_exact(4)
            .flat_map(|p| [p[0], p[1], p[2]])
            .collect();
        encode_raw(ColorType::Rgb, &rgb, w * 3, w, h)
    } else {
        encode_raw(ColorType::Rgba, pixels, w * 4, w, h)
    }
}

/// Distinct colors and per-pixel indices, or `None` past 256 colors.
fn extract_palette(pixels: &[u8]) -> Option<(Vec<[u8; 4]>, Vec<u8>)> {
    let mut lookup: HashMap<u32, u8> = HashMap::with_capacity(MAX_PALETTE_SIZE);
    let mut palette: Vec<[u8; 4]> = Vec::with_capacity(MAX_PALETTE_SIZE);
    let mut indices = Vec::with_capacity(pixels.len() / 4);

    for p in pixels.chunks_exact(4) {
        let key = u32::from_le_bytes([p[0], p[1], p[2], p[3]]);
        let index = match lookup.get(&key) {
            Some(&i) => i,
            None => {
                if palette.len() >= MAX_PALETTE_SIZE {
                    return None;
                }
                let i = palette.len() as u8;
                palette.push([p[0], p[1], p[2], p[3]]);
                lookup.insert(key, i);
                i
            }
        };
        indices.push(index);
    }
    Some((palette, indices))
}

fn encode_indexed(palette: &[[u8; 4]], indices: &[u8], w: usize, h: usize) -> WallpaperResult<Vec<u8>> {
    let mut png = Vec::with_capacity(indices.len() / 4);
    png.extend_from_slice(&SIGNATURE);
    write_chunk(&mut png, b"IHDR", &ihdr(w, h, ColorType::Indexed));

    let plte: Vec<u8> = palette.iter().flat_map(|c| [c[0], c[1], c[2]]).collect();
    write_chunk(&mut png, b"PLTE", &plte);

    if palette.iter().any(|c| c[3] < 255) {
        let trns: Vec<u8> = palette.iter().map(|c| c[3]).collect();
        write_chunk(&mut png, b"tRNS", &trns);
    }

    write_chunk(&mut png, b"IDAT", &deflate_scanlines(indices, w, h)?);
    write_chunk(&mut png, b"IEND", &[]);
    Ok(png)
}

fn encode_raw(color_type: ColorType, data: &[u8], stride: usize, w: usize, h: usize) -> WallpaperResult<Vec<u8>> {
    let mut png = Vec::with_capacity(data.len() / 8);
    png.extend_from_slice(&SIGNATURE);
    write_chunk(&mut png, b"IHDR", &ihdr(w, h, color_type));
    write_chunk(&mut png, b"IDAT", &deflate_scanlines(data, stride, h)?);
    write_chunk(&mut png, b"IEND", &[]);
    Ok(png)
}

fn ihdr(w: usize, h: usize, color_type: ColorType) -> [u8; 13] {
    let mut data = [0u8; 13];
    data[0..4].copy_from_slice(&(w as u32).to_be_bytes());
    data[4..8].copy_from_slice(&(h as u32).to_be_bytes());
    data[8] = 8; // bit depth
    data[9] = color_type as u8;
    // compression, filter and interlace methods stay 0
    data
}

/// Prefix each row with filter type 0 and zlib-compress.
fn deflate_scanlines(data: &[u8], stride: usize, rows: usize) -> WallpaperResult<Vec<u8>> {
    let filtered: Vec<u8> = data[..stride * rows]
        .par_chunks(stride * ROWS_PER_CHUNK)
        .flat_map_iter(|block| {
            let mut out = Vec::with_capacity(block.len() + block.len() / stride);
            for row in block.chunks_exact(stride) {
                out.push(0);
                out.extend_from_slice(row);
            }
            out
        })
        .collect();

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::fast());
    let compress_err = |e: std::io::Error| WallpaperError::EncodeError(format!("IDAT compression failed: {}", e));
    encoder.write_all(&filtered).map_err(compress_err)?;
    encoder.finish().map_err(compress_err)
}

fn write_chunk(png: &mut Vec<u8>, chunk_type: &[u8; 4], data: &[u8]) {
    png.extend_from_slice(&(data.len() as u32).to_be_bytes());
    png.extend_from_slice(chunk_type);
    png.extend_from_slice(data);

    let mut hasher = crc32fast::Hasher::new();
    hasher.update(chunk_type);
    hasher.update(data);
    png.extend_from_slice(&hasher.finalize().to_be_bytes());
}
