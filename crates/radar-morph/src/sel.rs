//! Structuring Element (SEL) for morphological operations
//!
//! A structuring element defines the neighborhood used in morphological
//! operations. Offsets are measured from the origin `(cx, cy)`.

use crate::{MorphError, MorphResult};

/// Element type in a structuring element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum SelElement {
    /// Don't care - this position is ignored
    #[default]
    DontCare = 0,
    /// Hit - participates in erosion and dilation
    Hit = 1,
}

/// Structuring Element (SEL)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sel {
    width: u32,
    height: u32,
    cx: u32,
    cy: u32,
    data: Vec<SelElement>,
}

impl Sel {
    /// Create a structuring element of don't-care elements with the origin
    /// at the center.
    pub fn new(width: u32, height: u32) -> MorphResult<Self> {
        if width == 0 || height == 0 {
            return Err(MorphError::InvalidSel(format!(
                "zero-sized sel: {}x{}",
                width, height
            )));
        }
        Ok(Sel {
            width,
            height,
            cx: width / 2,
            cy: height / 2,
            data: vec![SelElement::DontCare; (width * height) as usize],
        })
    }

    /// Create a rectangular "brick" structuring element with all hits
    pub fn create_brick(width: u32, height: u32) -> MorphResult<Self> {
        let mut sel = Self::new(width, height)?;
        sel.data.fill(SelElement::Hit);
        Ok(sel)
    }

    /// Create a square structuring element with all hits
    ///
    /// `create_square(3)` is the 8-connected 3x3 box: the pixel itself plus
    /// its eight neighbors.
    pub fn create_square(size: u32) -> MorphResult<Self> {
        Self::create_brick(size, size)
    }

    /// Get the width
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the origin `(cx, cy)`
    pub fn origin(&self) -> (u32, u32) {
        (self.cx, self.cy)
    }

    /// Move the origin.
    pub fn set_origin(&mut self, cx: u32, cy: u32) -> MorphResult<()> {
        if cx >= self.width || cy >= self.height {
            return Err(MorphError::InvalidSel(format!(
                "origin ({}, {}) outside {}x{} sel",
                cx, cy, self.width, self.height
            )));
        }
        self.cx = cx;
        self.cy = cy;
        Ok(())
    }

    /// Get the element at (x, y)
    pub fn get_element(&self, x: u32, y: u32) -> Option<SelElement> {
        if x < self.width && y < self.height {
            Some(self.data[(y * self.width + x) as usize])
        } else {
            None
        }
    }

    /// Set the element at (x, y)
    pub fn set_element(&mut self, x: u32, y: u32, elem: SelElement) -> MorphResult<()> {
        if x >= self.width || y >= self.height {
            return Err(MorphError::InvalidSel(format!(
                "element ({}, {}) outside {}x{} sel",
                x, y, self.width, self.height
            )));
        }
        self.data[(y * self.width + x) as usize] = elem;
        Ok(())
    }

    /// Iterate over hit positions as `(dx, dy)` offsets from the origin.
    pub fn hit_offsets(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let (cx, cy) = (self.cx as i32, self.cy as i32);
        let w = self.width;
        self.data
            .iter()
            .enumerate()
            .filter(|(_, e)| **e == SelElement::Hit)
            .map(move |(i, _)| {
                let x = (i as u32 % w) as i32;
                let y = (i as u32 / w) as i32;
                (x - cx, y - cy)
            })
    }

    /// Count the hit elements.
    pub fn hit_count(&self) -> usize {
        self.data.iter().filter(|e| **e == SelElement::Hit).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_offsets() {
        let sel = Sel::create_square(3).unwrap();
        assert_eq!(sel.origin(), (1, 1));
        let offsets: Vec<_> = sel.hit_offsets().collect();
        assert_eq!(offsets.len(), 9);
        assert!(offsets.contains(&(-1, -1)));
        assert!(offsets.contains(&(0, 0)));
        assert!(offsets.contains(&(1, 1)));
    }

    #[test]
    fn test_set_element() {
        let mut sel = Sel::new(3, 1).unwrap();
        assert_eq!(sel.hit_count(), 0);
        sel.set_element(2, 0, SelElement::Hit).unwrap();
        assert_eq!(sel.hit_offsets().collect::<Vec<_>>(), vec![(1, 0)]);
        assert!(sel.set_element(3, 0, SelElement::Hit).is_err());
    }

    #[test]
    fn test_invalid_sel() {
        assert!(Sel::new(0, 3).is_err());
        let mut sel = Sel::create_brick(2, 2).unwrap();
        assert!(sel.set_origin(2, 0).is_err());
        sel.set_origin(0, 0).unwrap();
        assert_eq!(sel.origin(), (0, 0));
    }
}
