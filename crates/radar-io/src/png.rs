//! PNG image format support
//!
//! Surfaces are written as 8-bit PNG. A surface with a palette becomes an
//! indexed image whose tRNS chunk makes the palette's transparent index
//! fully transparent; a surface without one becomes grayscale with value 0
//! marked transparent.

use crate::{IoError, IoResult};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use radar_core::{Palette, Surface};
use std::io::{BufRead, Seek, Write};
use std::sync::Arc;

/// Read an indexed or grayscale PNG image
///
/// Bit depths 1, 2, 4 and 8 are accepted; each sample becomes one pixel
/// index. Indexed images carry their palette, with the first fully
/// transparent entry of a tRNS chunk flagged as the transparent index.
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Surface> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::IDENTITY);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let info = reader.info();
    let width = info.width;
    let height = info.height;
    let color_type = info.color_type;
    let bit_depth = info.bit_depth;

    let bits = match (color_type, bit_depth) {
        (ColorType::Grayscale | ColorType::Indexed, BitDepth::One) => 1,
        (ColorType::Grayscale | ColorType::Indexed, BitDepth::Two) => 2,
        (ColorType::Grayscale | ColorType::Indexed, BitDepth::Four) => 4,
        (ColorType::Grayscale | ColorType::Indexed, BitDepth::Eight) => 8,
        _ => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNG format: {:?} {:?}",
                color_type, bit_depth
            )));
        }
    };

    let palette = if color_type == ColorType::Indexed {
        let rgb = info
            .palette
            .as_ref()
            .ok_or_else(|| IoError::InvalidData("indexed PNG without palette".to_string()))?;
        let transparent = info
            .trns
            .as_ref()
            .and_then(|alpha| alpha.iter().position(|&a| a == 0))
            .map(|i| i as u8);
        Some(Palette::from_rgb_bytes(rgb)?.with_transparent_index(transparent))
    } else {
        None
    };

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let bytes_per_row = output_info.line_size;
    let rows = &buf[..output_info.buffer_size()];
    let per_byte = 8 / bits;
    let sample_mask = ((1u16 << bits) - 1) as u8;

    let mut surface = Surface::new(width, height)?;
    for y in 0..height {
        let row = &rows[y as usize * bytes_per_row..];
        for x in 0..width {
            let byte = row[(x / per_byte) as usize];
            let shift = 8 - bits * (x % per_byte + 1);
            surface.set_pixel_unchecked(x, y, (byte >> shift) & sample_mask);
        }
    }

    if let Some(palette) = palette {
        surface.set_palette(Some(Arc::new(palette)));
    }
    Ok(surface)
}

/// Write a surface as an 8-bit PNG
pub fn write_png<W: Write>(surface: &Surface, writer: W) -> IoResult<()> {
    let (width, height) = surface.size();

    let mut encoder = Encoder::new(writer, width, height);
    encoder.set_depth(BitDepth::Eight);

    match surface.palette() {
        Some(palette) => {
            encoder.set_color(ColorType::Indexed);
            encoder.set_palette(palette.to_rgb_bytes());
            let alpha = palette.alpha_bytes();
            if !alpha.is_empty() {
                encoder.set_trns(alpha);
            }
        }
        None => {
            encoder.set_color(ColorType::Grayscale);
            // 16-bit big-endian gray sample value
            encoder.set_trns(vec![0u8, 0]);
        }
    }

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;
    writer
        .write_image_data(surface.data())
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;
    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;

    Ok(())
}
