//! Border/data channel separation
//!
//! A cropped frame mixes two kinds of index: overlay lines drawn at a few
//! reserved indices, and reflectivity levels 0..=15. They are split into
//! a binary border surface and a data surface whose levels are stretched
//! to the full 0..=255 range.

use crate::RestoreConfig;
use radar_core::Surface;

/// Stretch a reflectivity level to 0..=255.
///
/// Computes `round(index * 255 / scale)`, saturated at 255. With the
/// default scale of 15 this is exactly `index * 17` for levels 0..=15.
/// A scale of zero is treated as 1.
pub fn rescale_index(index: u8, scale: u8) -> u8 {
    let scale = u32::from(scale.max(1));
    let value = (u32::from(index) * 255 + scale / 2) / scale;
    value.min(255) as u8
}

/// Split a frame into `(border, data)` surfaces.
///
/// For a pixel whose index is one of the configured overlay indices, the
/// border surface gets 1 and the data surface 0. Every other pixel gets 0
/// in the border surface and its rescaled level in the data surface. The
/// border surface carries the binary palette, the data surface the data
/// palette from `config`.
pub fn extract_borders(image: &Surface, config: &RestoreConfig) -> (Surface, Surface) {
    let is_border: [bool; 256] = std::array::from_fn(|i| config.is_border(i as u8));
    let scale = config.reflectivity_scale();
    let levels: [u8; 256] = std::array::from_fn(|i| rescale_index(i as u8, scale));

    let mut border = image.create_template();
    border.set_palette(Some(config.border_palette().clone()));
    let mut data = image.create_template();
    data.set_palette(Some(config.data_palette().clone()));

    for ((&src, b), d) in image
        .data()
        .iter()
        .zip(border.data_mut().iter_mut())
        .zip(data.data_mut().iter_mut())
    {
        if is_border[src as usize] {
            *b = 1;
        } else {
            *d = levels[src as usize];
        }
    }

    log::debug!(
        "separated {}x{} frame: {} border pixels",
        image.width(),
        image.height(),
        border.count_pixels()
    );
    (border, data)
}
