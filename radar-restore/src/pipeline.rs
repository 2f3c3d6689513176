//! Restoration entry points
//!
//! Every entry point takes a whole frame and returns the restored (or just
//! cropped) frame as base64 text of a PNG. All per-frame state lives on the
//! stack of the call, so independent frames may be restored from several
//! threads with one shared [`RestoreConfig`].

use crate::channels::extract_borders;
use crate::crop::crop;
use crate::{RestoreConfig, RestoreResult};
use radar_core::Surface;
use radar_inpaint::inpaint_with_stats;
use radar_io::{encode_png_base64, read_image_from_bytes};
use radar_morph::inpaint_mask;
use std::sync::Arc;

/// Restore a frame and return the restored surface.
///
/// Crops to the region of interest, separates the overlay from the data,
/// derives the inpaint mask and rebuilds the data under it. Overlay pixels
/// outside the data region are left as 0.
///
/// # Errors
///
/// Returns [`RestoreError::UnsupportedImageSize`](crate::RestoreError::UnsupportedImageSize)
/// for unrecognized frame sizes.
pub fn restore(image: &Surface, config: &RestoreConfig) -> RestoreResult<Surface> {
    let cropped = crop(image, config)?;
    let (border, data) = extract_borders(&cropped, config);
    let mask = inpaint_mask(&data, &border, &config.closing_sel()?)?;
    let (restored, stats) = inpaint_with_stats(&data, &mask)?;
    log::debug!(
        "restored {}x{} frame: {} masked pixels, {} unresolved",
        restored.width(),
        restored.height(),
        mask.count_pixels(),
        stats.unresolved
    );
    Ok(restored)
}

/// Restore a frame and encode it as base64 PNG text.
pub fn run(image: &Surface, config: &RestoreConfig) -> RestoreResult<String> {
    log::info!("Start processing frame ({}x{})", image.width(), image.height());
    let restored = restore(image, config)?;
    let encoded = encode_png_base64(&restored)?;
    log::info!("Finish processing frame");
    Ok(encoded)
}

/// Crop a frame and encode it as base64 PNG text, without restoration.
///
/// The frame's own palette is kept, with the configured transparent index
/// marked transparent.
pub fn run_crop_only(image: &Surface, config: &RestoreConfig) -> RestoreResult<String> {
    log::info!("Start cropping frame ({}x{})", image.width(), image.height());
    let mut cropped = crop(image, config)?;
    if let Some(palette) = cropped.palette() {
        let palette = palette
            .as_ref()
            .clone()
            .with_transparent_index(Some(config.transparent_index()));
        cropped.set_palette(Some(Arc::new(palette)));
    }
    let encoded = encode_png_base64(&cropped)?;
    log::info!("Finish cropping frame");
    Ok(encoded)
}

/// Decode a GIF or PNG frame and [`run`] it.
pub fn run_bytes(bytes: &[u8], config: &RestoreConfig) -> RestoreResult<String> {
    let image = read_image_from_bytes(bytes)?;
    run(&image, config)
}

/// Decode a GIF or PNG frame and [`run_crop_only`] it.
pub fn run_crop_only_bytes(bytes: &[u8], config: &RestoreConfig) -> RestoreResult<String> {
    let image = read_image_from_bytes(bytes)?;
    run_crop_only(&image, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RestoreError;
    use radar_core::Rect;

    fn small_config() -> RestoreConfig {
        RestoreConfig::new().with_roi(7, 7, Rect::new(1, 1, 5, 5))
    }

    #[test]
    fn test_restore_fills_line_through_data() {
        // 5x5 ROI of level 5 with an overlay column at x == 2
        let mut image = Surface::new(7, 7).unwrap();
        for y in 1..6 {
            for x in 1..6 {
                let v = if x == 3 { 241 } else { 5 };
                image.set_pixel_unchecked(x, y, v);
            }
        }
        let restored = restore(&image, &small_config()).unwrap();
        assert_eq!(restored.size(), (5, 5));
        assert!(restored.data().iter().all(|&v| v == 85));
    }

    #[test]
    fn test_restore_leaves_overlay_outside_data() {
        // Overlay in empty sky stays empty
        let mut image = Surface::new(7, 7).unwrap();
        for y in 1..6 {
            image.set_pixel_unchecked(5, y, 243);
        }
        image.set_pixel_unchecked(1, 1, 15);
        let restored = restore(&image, &small_config()).unwrap();
        assert_eq!(restored.get_pixel(0, 0), Some(255));
        assert_eq!(restored.count_pixels(), 1);
    }

    #[test]
    fn test_run_unsupported_size() {
        let image = Surface::new(10, 10).unwrap();
        for result in [
            run(&image, &RestoreConfig::default()),
            run_crop_only(&image, &RestoreConfig::default()),
        ] {
            assert!(matches!(
                result,
                Err(RestoreError::UnsupportedImageSize {
                    width: 10,
                    height: 10
                })
            ));
        }
    }

    #[test]
    fn test_run_bytes_rejects_garbage() {
        assert!(matches!(
            run_bytes(b"definitely not an image", &RestoreConfig::default()),
            Err(RestoreError::Io(_))
        ));
    }
}
