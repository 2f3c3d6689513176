//! Pixel access functions
//!
//! Bounds-checked and panicking accessors for individual pixels.

use super::Surface;
use crate::error::Result;

impl Surface {
    /// Get a pixel value at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u8> {
        self.grid.get(x, y)
    }

    /// Get a pixel value without an `Option`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u8 {
        self.grid.get_unchecked(x, y)
    }

    /// Set a pixel value at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::PixelOutOfBounds`](crate::Error::PixelOutOfBounds)
    /// if coordinates are out of bounds.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, val: u8) -> Result<()> {
        self.grid.set(x, y, val)
    }

    /// Set a pixel value.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: u8) {
        self.grid.set_unchecked(x, y, val)
    }
}
