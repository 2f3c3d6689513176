//! Region-of-interest cropping
//!
//! Published frames frame the radar disc with a legend and a one-pixel
//! edge. Only frame sizes listed in the [`RoiTable`](crate::RoiTable) are
//! recognized; anything else is rejected rather than guessed at.

use crate::{RestoreConfig, RestoreError, RestoreResult};
use radar_core::Surface;

/// Cut the region of interest out of a frame.
///
/// The palette of `image` is kept.
///
/// # Errors
///
/// Returns [`RestoreError::UnsupportedImageSize`] if the frame size has no
/// ROI in `config`, and [`RestoreError::RoiOutsideFrame`] if its ROI is
/// empty or runs past the frame edge.
pub fn crop(image: &Surface, config: &RestoreConfig) -> RestoreResult<Surface> {
    let (width, height) = image.size();
    let Some(rect) = config.roi().lookup(width, height) else {
        log::warn!("no region of interest for {}x{} frame", width, height);
        return Err(RestoreError::UnsupportedImageSize { width, height });
    };
    if !rect.fits_within(width, height) {
        log::warn!("region of interest {:?} exceeds {}x{} frame", rect, width, height);
        return Err(RestoreError::RoiOutsideFrame { rect, width, height });
    }
    Ok(image.clip_rectangle(&rect)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use radar_core::{Palette, Rect};
    use std::sync::Arc;

    #[test]
    fn test_crop_recognized_sizes() {
        let cfg = RestoreConfig::default();
        for ((w, h), rect) in cfg.roi().iter() {
            let image = Surface::new(w, h).unwrap();
            let cropped = crop(&image, &cfg).unwrap();
            assert_eq!(cropped.size(), rect.size());
        }
    }

    #[test]
    fn test_crop_offset_and_palette() {
        let cfg = RestoreConfig::new().with_roi(6, 4, Rect::new(1, 1, 3, 2));
        let data: Vec<u8> = (0..24).collect();
        let image = Surface::from_data(6, 4, data)
            .unwrap()
            .with_palette(Arc::new(Palette::radar()));
        let cropped = crop(&image, &cfg).unwrap();
        assert_eq!(cropped.size(), (3, 2));
        assert_eq!(cropped.data(), &[7, 8, 9, 13, 14, 15]);
        assert!(cropped.has_palette());
    }

    #[test]
    fn test_crop_roi_past_frame_edge() {
        let image = Surface::new(10, 10).unwrap();
        for rect in [Rect::new(5, 5, 10, 10), Rect::new(0, 0, 11, 10), Rect::new(0, 9, 10, 2)] {
            let cfg = RestoreConfig::new().with_roi(10, 10, rect);
            match crop(&image, &cfg) {
                Err(RestoreError::RoiOutsideFrame { rect: r, width, height }) => {
                    assert_eq!((r, width, height), (rect, 10, 10));
                }
                other => panic!("expected RoiOutsideFrame, got {:?}", other.map(|s| s.size())),
            }
        }

        // Touching the far edge is still inside
        let cfg = RestoreConfig::new().with_roi(10, 10, Rect::new(5, 5, 5, 5));
        assert_eq!(crop(&image, &cfg).unwrap().size(), (5, 5));
    }

    #[test]
    fn test_crop_unsupported_size() {
        let image = Surface::new(100, 100).unwrap();
        assert!(matches!(
            crop(&image, &RestoreConfig::default()),
            Err(RestoreError::UnsupportedImageSize {
                width: 100,
                height: 100
            })
        ));
    }
}
