//! Rectangle clipping for surfaces
//!
//! Extraction of rectangular sub-regions. The clipped surface keeps the
//! source palette.

use super::Surface;
use crate::Rect;
use crate::error::{Error, Result};
use crate::grid::Grid;

impl Surface {
    /// Extract a rectangular sub-region from the surface.
    ///
    /// If the rectangle extends beyond the surface bounds, it is clipped to
    /// the valid region.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The requested width or height is 0
    /// - The rectangle origin is outside the surface
    ///
    /// # Examples
    ///
    /// ```
    /// use radar_core::{Rect, Surface};
    ///
    /// let s = Surface::new(100, 80).unwrap();
    /// let clipped = s.clip_rectangle(&Rect::new(10, 20, 50, 40)).unwrap();
    /// assert_eq!(clipped.size(), (50, 40));
    ///
    /// // Regions extending beyond the surface are clipped
    /// let clipped = s.clip_rectangle(&Rect::new(80, 60, 50, 50)).unwrap();
    /// assert_eq!(clipped.size(), (20, 20));
    /// ```
    pub fn clip_rectangle(&self, rect: &Rect) -> Result<Surface> {
        let Rect { x, y, w, h } = *rect;
        if w == 0 || h == 0 {
            return Err(Error::InvalidParameter(format!(
                "clip rectangle has zero dimension: {}x{}",
                w, h
            )));
        }

        let (src_w, src_h) = self.size();
        if x >= src_w || y >= src_h {
            return Err(Error::InvalidParameter(format!(
                "clip rectangle origin ({}, {}) is outside image bounds ({}x{})",
                x, y, src_w, src_h
            )));
        }

        let clip_w = w.min(src_w - x);
        let clip_h = h.min(src_h - y);

        let src = self.data();
        let mut data = Vec::with_capacity(clip_w as usize * clip_h as usize);
        for row in y..y + clip_h {
            let start = self.grid.index_of(x, row);
            data.extend_from_slice(&src[start..start + clip_w as usize]);
        }

        Ok(Surface {
            grid: Grid::from_vec(clip_w, clip_h, data)?,
            palette: self.palette.clone(),
        })
    }
}
