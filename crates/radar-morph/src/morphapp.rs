//! Morphological application functions
//!
//! Derivation of the inpaint mask: the subset of overlay pixels that cross
//! the radar data region.

use crate::binary::check_binary;
use crate::{MorphResult, Sel, close};
use radar_core::Surface;

/// Compute the inpaint mask for a data surface and its border overlay.
///
/// The data surface is binarized and closed with `sel`, which swallows the
/// thin border lines running through regions with signal. The result gates
/// the border surface, so only border pixels inside the closed data region
/// are marked for reconstruction. Border pixels outside it are decoration
/// and stay out of the mask.
///
/// # Arguments
/// * `data` - rescaled reflectivity surface (0 = no signal)
/// * `border` - binary border surface (1 = overlay pixel)
/// * `sel` - structuring element for the closing, normally a 3x3 square
///
/// # Errors
///
/// Returns an error if the surfaces differ in size or `border` is not binary.
pub fn inpaint_mask(data: &Surface, border: &Surface, sel: &Sel) -> MorphResult<Surface> {
    check_binary(border)?;
    let region = close(&data.binarize(), sel)?;
    let mask = border.select_masked(&region)?;
    log::debug!(
        "inpaint mask: {} of {} border pixels inside data region",
        mask.count_pixels(),
        border.count_pixels()
    );
    Ok(mask)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MorphError;

    fn box3() -> Sel {
        Sel::create_square(3).unwrap()
    }

    #[test]
    fn test_border_through_data_is_masked() {
        // Data everywhere except a vertical border line at x == 2
        let mut data = Surface::new(5, 5).unwrap();
        let mut border = Surface::new(5, 5).unwrap();
        for y in 0..5 {
            for x in 0..5 {
                if x == 2 {
                    border.set_pixel_unchecked(x, y, 1);
                } else {
                    data.set_pixel_unchecked(x, y, 34);
                }
            }
        }
        let mask = inpaint_mask(&data, &border, &box3()).unwrap();
        assert_eq!(mask, border);
        assert_eq!(mask.count_pixels(), 5);
    }

    #[test]
    fn test_border_outside_data_is_excluded() {
        // Data block on the left, border line far away on the right
        let mut data = Surface::new(8, 4).unwrap();
        let mut border = Surface::new(8, 4).unwrap();
        for y in 0..4 {
            data.set_pixel_unchecked(0, y, 17);
            data.set_pixel_unchecked(1, y, 17);
            border.set_pixel_unchecked(6, y, 1);
        }
        let mask = inpaint_mask(&data, &border, &box3()).unwrap();
        assert_eq!(mask.count_pixels(), 0);
    }

    #[test]
    fn test_mask_is_subset_of_border() {
        let data = Surface::from_data(4, 1, vec![17, 0, 17, 0]).unwrap();
        let border = Surface::from_data(4, 1, vec![0, 1, 0, 1]).unwrap();
        let mask = inpaint_mask(&data, &border, &box3()).unwrap();
        for (m, b) in mask.data().iter().zip(border.data()) {
            assert!(*m <= *b);
        }
        assert_eq!(mask.get_pixel(1, 0), Some(1));
    }

    #[test]
    fn test_rejects_non_binary_border() {
        let data = Surface::new(2, 2).unwrap();
        let border = Surface::from_data(2, 2, vec![0, 0, 0, 241]).unwrap();
        assert!(matches!(
            inpaint_mask(&data, &border, &box3()),
            Err(MorphError::NotBinary { x: 1, y: 1, .. })
        ));
    }
}
