//! Surface - palette-indexed image container
//!
//! A `Surface` is a width x height grid of 8-bit palette indices plus an
//! optional display palette. The indices carry meaning on their own
//! (reflectivity level, binary flag); the palette is only consulted when
//! the surface is encoded.
//!
//! # Ownership model
//!
//! Pixel data is owned by the surface. Palettes are shared through `Arc`
//! so that every surface produced in a run can point at the same
//! read-only table. Surfaces are `Send + Sync` and hold no global state.

mod access;
mod clip;
mod mask;

use crate::Palette;
use crate::error::Result;
use crate::grid::Grid;
use std::sync::Arc;

/// Palette-indexed image
///
/// # Examples
///
/// ```
/// use radar_core::Surface;
///
/// let mut surface = Surface::new(640, 480).unwrap();
/// surface.set_pixel(3, 4, 15).unwrap();
/// assert_eq!(surface.get_pixel(3, 4), Some(15));
/// assert_eq!(surface.width(), 640);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    grid: Grid<u8>,
    palette: Option<Arc<Palette>>,
}

impl Surface {
    /// Create a surface with every index set to 0 and no palette.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`](crate::Error::InvalidDimension)
    /// if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(Self::from_grid(Grid::new(width, height, 0)?))
    }

    /// Wrap an existing grid of indices.
    pub fn from_grid(grid: Grid<u8>) -> Self {
        Surface {
            grid,
            palette: None,
        }
    }

    /// Build a surface from a row-major index buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer length is not `width * height`.
    pub fn from_data(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        Ok(Self::from_grid(Grid::from_vec(width, height, data)?))
    }

    /// Attach a palette, consuming and returning the surface.
    pub fn with_palette(mut self, palette: Arc<Palette>) -> Self {
        self.palette = Some(palette);
        self
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    /// Get `(width, height)`.
    #[inline]
    pub fn size(&self) -> (u32, u32) {
        (self.grid.width(), self.grid.height())
    }

    /// Get the underlying grid.
    #[inline]
    pub fn grid(&self) -> &Grid<u8> {
        &self.grid
    }

    /// Get mutable access to the underlying grid.
    #[inline]
    pub fn grid_mut(&mut self) -> &mut Grid<u8> {
        &mut self.grid
    }

    /// Get raw access to the index data.
    #[inline]
    pub fn data(&self) -> &[u8] {
        self.grid.data()
    }

    /// Get mutable access to the index data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        self.grid.data_mut()
    }

    /// Check whether a palette is attached.
    #[inline]
    pub fn has_palette(&self) -> bool {
        self.palette.is_some()
    }

    /// Get the attached palette, if any.
    #[inline]
    pub fn palette(&self) -> Option<&Arc<Palette>> {
        self.palette.as_ref()
    }

    /// Set or remove the palette.
    pub fn set_palette(&mut self, palette: Option<Arc<Palette>>) {
        self.palette = palette;
    }

    /// Create a zeroed surface with the same size and palette.
    pub fn create_template(&self) -> Self {
        Surface {
            grid: self.grid.map(|_| 0),
            palette: self.palette.clone(),
        }
    }

    /// Check if two surfaces have the same width and height.
    pub fn sizes_equal(&self, other: &Surface) -> bool {
        self.grid.same_size(&other.grid)
    }

    /// Count pixels with a nonzero index.
    pub fn count_pixels(&self) -> usize {
        self.grid.data().iter().filter(|&&v| v != 0).count()
    }

    /// Check whether every index is 0 or 1.
    pub fn is_binary(&self) -> bool {
        self.grid.data().iter().all(|&v| v <= 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_zeroed() {
        let s = Surface::new(4, 3).unwrap();
        assert_eq!(s.size(), (4, 3));
        assert_eq!(s.count_pixels(), 0);
        assert!(s.is_binary());
        assert!(!s.has_palette());
    }

    #[test]
    fn test_template_keeps_palette() {
        let palette = Arc::new(Palette::binary());
        let s = Surface::from_data(2, 2, vec![1, 0, 1, 1])
            .unwrap()
            .with_palette(palette.clone());
        let t = s.create_template();
        assert!(t.sizes_equal(&s));
        assert_eq!(t.count_pixels(), 0);
        assert!(Arc::ptr_eq(t.palette().unwrap(), &palette));
    }

    #[test]
    fn test_is_binary() {
        let s = Surface::from_data(3, 1, vec![0, 1, 2]).unwrap();
        assert!(!s.is_binary());
        assert_eq!(s.count_pixels(), 2);
    }

    #[test]
    fn test_surface_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Surface>();
    }
}
