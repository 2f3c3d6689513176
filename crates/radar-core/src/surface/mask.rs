//! Mask operations for surfaces
//!
//! Indicator masks and gating of one surface through another. Any index
//! other than 0 counts as "set". Indicator masks are binary surfaces
//! carrying [`Palette::binary`].

use super::Surface;
use crate::Palette;
use crate::error::{Error, Result};
use std::sync::Arc;

impl Surface {
    /// Create a binary indicator of nonzero pixels.
    ///
    /// Output is 0 where the input is 0 and 1 everywhere else.
    pub fn binarize(&self) -> Surface {
        Surface {
            grid: self.grid.map(|v| u8::from(v != 0)),
            palette: Some(Arc::new(Palette::binary())),
        }
    }

    /// Create a binary mask of pixels whose index is one of `vals`.
    pub fn make_mask_from_vals(&self, vals: &[u8]) -> Surface {
        Surface {
            grid: self.grid.map(|v| u8::from(vals.contains(&v))),
            palette: Some(Arc::new(Palette::binary())),
        }
    }

    /// Gate this surface through `mask`.
    ///
    /// Output is 0 where `mask` is 0 and this surface's value elsewhere.
    /// The output keeps this surface's palette.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the sizes differ.
    pub fn select_masked(&self, mask: &Surface) -> Result<Surface> {
        if !self.sizes_equal(mask) {
            return Err(Error::DimensionMismatch {
                expected: self.size(),
                actual: mask.size(),
            });
        }
        let mut out = self.clone();
        for (dst, &m) in out.data_mut().iter_mut().zip(mask.data()) {
            if m == 0 {
                *dst = 0;
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binarize() {
        let s = Surface::from_data(4, 1, vec![0, 1, 17, 255]).unwrap();
        let b = s.binarize();
        assert_eq!(b.data(), &[0, 1, 1, 1]);
        assert!(b.is_binary());
    }

    #[test]
    fn test_make_mask_from_vals() {
        let s = Surface::from_data(5, 1, vec![241, 3, 243, 0, 242]).unwrap();
        let m = s.make_mask_from_vals(&[241, 243]);
        assert_eq!(m.data(), &[1, 0, 1, 0, 0]);
    }

    #[test]
    fn test_select_masked() {
        let s = Surface::from_data(3, 1, vec![5, 6, 7]).unwrap();
        let m = Surface::from_data(3, 1, vec![1, 0, 1]).unwrap();
        assert_eq!(s.select_masked(&m).unwrap().data(), &[5, 0, 7]);
    }

    #[test]
    fn test_select_masked_size_mismatch() {
        let s = Surface::new(3, 1).unwrap();
        let m = Surface::new(1, 3).unwrap();
        assert!(matches!(
            s.select_masked(&m),
            Err(Error::DimensionMismatch { .. })
        ));
    }
}
