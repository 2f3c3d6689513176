//! Grid - flat two-dimensional buffer
//!
//! `Grid<T>` stores one value per pixel in row-major order with no padding.
//! The value at (x, y) lives at index `y * width + x`. It is the storage
//! behind [`Surface`](crate::Surface) and is used directly for per-pixel
//! scratch arrays such as distance fields and pixel states.
//!
//! # Examples
//!
//! ```
//! use radar_core::Grid;
//!
//! let mut grid = Grid::new(4, 3, f32::INFINITY).unwrap();
//! grid.set(1, 2, 0.5).unwrap();
//! assert_eq!(grid.get(1, 2), Some(0.5));
//! assert_eq!(grid.index_of(1, 2), 9);
//! assert!(!grid.contains(4, 0));
//! ```

use crate::error::{Error, Result};

/// 4-connected neighbor offsets (left, right, down, up).
pub const CROSS_4: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, 1), (0, -1)];

/// 8-connected neighbor offsets, center excluded.
pub const RING_8: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Row-major two-dimensional buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    width: u32,
    height: u32,
    data: Vec<T>,
}

impl<T: Copy> Grid<T> {
    /// Create a grid with every cell set to `fill`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32, fill: T) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let len = (width as usize) * (height as usize);
        Ok(Grid {
            width,
            height,
            data: vec![fill; len],
        })
    }

    /// Wrap an existing row-major buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for an empty size and
    /// [`Error::BufferSize`] if `data.len() != width * height`.
    pub fn from_vec(width: u32, height: u32, data: Vec<T>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        if data.len() != (width as usize) * (height as usize) {
            return Err(Error::BufferSize {
                width,
                height,
                len: data.len(),
            });
        }
        Ok(Grid {
            width,
            height,
            data,
        })
    }

    /// Get the width in cells.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in cells.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false; grids have at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the raw row-major data.
    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Get mutable access to the raw row-major data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the grid and return its buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Check whether signed coordinates fall inside the grid.
    ///
    /// Each axis is checked against its own dimension.
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    /// Linear index of (x, y). The caller guarantees the point is in bounds.
    #[inline]
    pub fn index_of(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Coordinates of a linear index.
    #[inline]
    pub fn coords_of(&self, index: usize) -> (u32, u32) {
        let w = self.width as usize;
        ((index % w) as u32, (index / w) as u32)
    }

    /// Get the neighbor of (x, y) at offset (dx, dy), if it is in bounds.
    #[inline]
    pub fn neighbor(&self, x: u32, y: u32, dx: i32, dy: i32) -> Option<(u32, u32)> {
        let nx = x as i32 + dx;
        let ny = y as i32 + dy;
        self.contains(nx, ny).then_some((nx as u32, ny as u32))
    }

    /// Get the value at (x, y), or `None` if out of bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<T> {
        if x < self.width && y < self.height {
            Some(self.data[self.index_of(x, y)])
        } else {
            None
        }
    }

    /// Get the value at signed coordinates, or `None` if out of bounds.
    #[inline]
    pub fn get_signed(&self, x: i32, y: i32) -> Option<T> {
        if self.contains(x, y) {
            Some(self.data[self.index_of(x as u32, y as u32)])
        } else {
            None
        }
    }

    /// Get the value at (x, y) without returning an `Option`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_unchecked(&self, x: u32, y: u32) -> T {
        assert!(
            x < self.width && y < self.height,
            "({x}, {y}) outside {}x{}",
            self.width,
            self.height
        );
        self.data[self.index_of(x, y)]
    }

    /// Set the value at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::PixelOutOfBounds`] if the coordinates are outside.
    pub fn set(&mut self, x: u32, y: u32, value: T) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::PixelOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let i = self.index_of(x, y);
        self.data[i] = value;
        Ok(())
    }

    /// Set the value at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn set_unchecked(&mut self, x: u32, y: u32, value: T) {
        assert!(
            x < self.width && y < self.height,
            "({x}, {y}) outside {}x{}",
            self.width,
            self.height
        );
        let i = self.index_of(x, y);
        self.data[i] = value;
    }

    /// Set every cell to `value`.
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    /// Build a same-sized grid by applying `f` to every cell.
    pub fn map<U: Copy>(&self, f: impl FnMut(T) -> U) -> Grid<U> {
        Grid {
            width: self.width,
            height: self.height,
            data: self.data.iter().copied().map(f).collect(),
        }
    }

    /// Check whether two grids have the same width and height.
    pub fn same_size<U>(&self, other: &Grid<U>) -> bool {
        self.width == other.width && self.height == other.height
    }
}
