//! GIF image format support
//!
//! Radar frames are published as palette-indexed GIFs. Only the first
//! frame is read; later frames of an animation are ignored.

use crate::{IoError, IoResult};
use gif::{ColorOutput, DecodeOptions, Encoder, Frame};
use radar_core::{Palette, Surface};
use std::io::{Read, Write};
use std::sync::Arc;

/// Read the first frame of a GIF image
///
/// The frame is placed on a canvas the size of the logical screen at its
/// left/top offset; pixels it does not cover stay 0. Indices are kept as
/// is, and the palette comes from the frame's local color table or, if it
/// has none, from the global one.
pub fn read_gif<R: Read>(reader: R) -> IoResult<Surface> {
    let mut options = DecodeOptions::new();
    options.set_color_output(ColorOutput::Indexed);

    let mut decoder = options
        .read_info(reader)
        .map_err(|e| IoError::DecodeError(format!("GIF decode error: {}", e)))?;

    let screen_width = u32::from(decoder.width());
    let screen_height = u32::from(decoder.height());

    let frame = decoder
        .read_next_frame()
        .map_err(|e| IoError::DecodeError(format!("GIF frame error: {}", e)))?
        .ok_or_else(|| IoError::InvalidData("no frames in GIF".to_string()))?
        .clone();

    let palette_bytes: &[u8] = if let Some(ref local_palette) = frame.palette {
        local_palette
    } else if let Some(global_palette) = decoder.global_palette() {
        global_palette
    } else {
        return Err(IoError::InvalidData("GIF has no color map".to_string()));
    };
    let palette = Palette::from_rgb_bytes(palette_bytes)?.with_transparent_index(frame.transparent);
    if palette.is_empty() {
        return Err(IoError::InvalidData("GIF color map is empty".to_string()));
    }

    let left = u32::from(frame.left);
    let top = u32::from(frame.top);
    let width = u32::from(frame.width);
    let height = u32::from(frame.height);

    // Some encoders write a zero-sized logical screen
    let canvas_width = screen_width.max(left + width);
    let canvas_height = screen_height.max(top + height);

    let mut surface = Surface::new(canvas_width, canvas_height)?.with_palette(Arc::new(palette));
    let buffer = &frame.buffer;
    for y in 0..height {
        for x in 0..width {
            let idx = (y * width + x) as usize;
            if let Some(&val) = buffer.get(idx) {
                surface.set_pixel_unchecked(left + x, top + y, val);
            }
        }
    }

    log::debug!(
        "decoded GIF frame {}x{} at ({}, {}) on {}x{} canvas",
        width,
        height,
        left,
        top,
        canvas_width,
        canvas_height
    );
    Ok(surface)
}

/// Write a surface as a single-frame GIF
///
/// The palette becomes the global color table, padded with black to a
/// power of two entries. A surface without a palette is written with a
/// grayscale ramp. The palette's transparent index is carried over.
pub fn write_gif<W: Write>(surface: &Surface, mut writer: W) -> IoResult<()> {
    let (w, h) = surface.size();
    let width = u16::try_from(w)
        .map_err(|_| IoError::EncodeError(format!("width {} exceeds GIF limit", w)))?;
    let height = u16::try_from(h)
        .map_err(|_| IoError::EncodeError(format!("height {} exceeds GIF limit", h)))?;

    let (mut rgb, transparent) = match surface.palette() {
        Some(palette) => (palette.to_rgb_bytes(), palette.transparent_index()),
        None => ((0..=255u8).flat_map(|v| [v, v, v]).collect(), None),
    };
    let entries = (rgb.len() / 3).next_power_of_two().max(2);
    rgb.resize(entries * 3, 0);

    let mut encoder = Encoder::new(&mut writer, width, height, &rgb)
        .map_err(|e| IoError::EncodeError(format!("GIF encoder error: {}", e)))?;

    let mut frame = Frame::from_indexed_pixels(width, height, surface.data().to_vec(), transparent);
    frame.palette = None; // Use global palette

    encoder
        .write_frame(&frame)
        .map_err(|e| IoError::EncodeError(format!("GIF frame write error: {}", e)))?;

    Ok(())
}
