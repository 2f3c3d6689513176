//! Palette - display colors for indexed surfaces
//!
//! A palette maps 8-bit indices to RGB colors. It is consulted only when a
//! surface is encoded; pixel indices keep their own meaning (reflectivity
//! level or binary flag) regardless of the colors attached to them.
//!
//! One index may be flagged as transparent. Encoders emit it with zero
//! alpha.

use crate::error::{Error, Result};

/// Maximum number of palette entries for 8-bit indices.
pub const MAX_ENTRIES: usize = 256;

/// Color shown for the background/no-data index.
pub const TRANSPARENT_COLOR: Rgb = Rgb::new(7, 122, 205);

/// RGB color entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    /// Red component
    pub red: u8,
    /// Green component
    pub green: u8,
    /// Blue component
    pub blue: u8,
}

impl Rgb {
    /// Create a new RGB color
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Create a grayscale color
    pub const fn gray(value: u8) -> Self {
        Self::new(value, value, value)
    }
}

/// Palette for indexed surfaces
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Palette {
    colors: Vec<Rgb>,
    transparent: Option<u8>,
}

impl Palette {
    /// Create an empty palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a palette from packed `r, g, b` triples.
    ///
    /// A trailing partial triple is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PaletteFull`] if more than 256 colors are given.
    pub fn from_rgb_bytes(bytes: &[u8]) -> Result<Self> {
        let mut palette = Self::new();
        for chunk in bytes.chunks_exact(3) {
            palette.add_rgb(chunk[0], chunk[1], chunk[2])?;
        }
        Ok(palette)
    }

    /// Palette for reconstructed radar data.
    ///
    /// Index 0 is the transparent background color; indices 1..=255 form a
    /// linear grayscale ramp.
    pub fn radar() -> Self {
        let mut colors: Vec<Rgb> = (0..=255u8).map(Rgb::gray).collect();
        colors[0] = TRANSPARENT_COLOR;
        Self {
            colors,
            transparent: Some(0),
        }
    }

    /// Palette for binary surfaces: 0 is transparent, 1 is black.
    pub fn binary() -> Self {
        Self {
            colors: vec![TRANSPARENT_COLOR, Rgb::gray(0)],
            transparent: Some(0),
        }
    }

    /// Get the number of colors
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Check if empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Get a color by index
    pub fn get(&self, index: usize) -> Option<&Rgb> {
        self.colors.get(index)
    }

    /// Get RGB values at index
    pub fn get_rgb(&self, index: usize) -> Option<(u8, u8, u8)> {
        self.colors.get(index).map(|c| (c.red, c.green, c.blue))
    }

    /// Add a color and return its index.
    pub fn add_color(&mut self, color: Rgb) -> Result<usize> {
        if self.colors.len() >= MAX_ENTRIES {
            return Err(Error::PaletteFull(MAX_ENTRIES));
        }
        self.colors.push(color);
        Ok(self.colors.len() - 1)
    }

    /// Add an RGB color
    pub fn add_rgb(&mut self, r: u8, g: u8, b: u8) -> Result<usize> {
        self.add_color(Rgb::new(r, g, b))
    }

    /// Replace the color at `index`.
    pub fn set_color(&mut self, index: usize, color: Rgb) -> Result<()> {
        let len = self.colors.len();
        let slot = self
            .colors
            .get_mut(index)
            .ok_or(Error::IndexOutOfBounds { index, len })?;
        *slot = color;
        Ok(())
    }

    /// Get all colors as a slice
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Index rendered fully transparent, if any.
    pub fn transparent_index(&self) -> Option<u8> {
        self.transparent
    }

    /// Flag `index` as transparent (or clear the flag with `None`).
    pub fn set_transparent_index(&mut self, index: Option<u8>) {
        self.transparent = index;
    }

    /// Builder form of [`Palette::set_transparent_index`].
    pub fn with_transparent_index(mut self, index: Option<u8>) -> Self {
        self.transparent = index;
        self
    }

    /// Pack the colors as `r, g, b` triples.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.colors
            .iter()
            .flat_map(|c| [c.red, c.green, c.blue])
            .collect()
    }

    /// Per-entry alpha values up to and including the transparent index.
    ///
    /// Empty if no index is transparent or the index has no color.
    pub fn alpha_bytes(&self) -> Vec<u8> {
        match self.transparent {
            Some(t) if (t as usize) < self.colors.len() => {
                let mut alpha = vec![255u8; t as usize + 1];
                alpha[t as usize] = 0;
                alpha
            }
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radar_palette() {
        let p = Palette::radar();
        assert_eq!(p.len(), 256);
        assert_eq!(p.get_rgb(0), Some((7, 122, 205)));
        assert_eq!(p.get_rgb(1), Some((1, 1, 1)));
        assert_eq!(p.get_rgb(255), Some((255, 255, 255)));
        assert_eq!(p.transparent_index(), Some(0));
    }

    #[test]
    fn test_binary_palette() {
        let p = Palette::binary();
        assert_eq!(p.len(), 2);
        assert_eq!(p.get_rgb(1), Some((0, 0, 0)));
        assert_eq!(p.alpha_bytes(), vec![0]);
    }

    #[test]
    fn test_palette_full() {
        let mut p = Palette::radar();
        assert!(matches!(p.add_rgb(1, 2, 3), Err(Error::PaletteFull(256))));
    }

    #[test]
    fn test_rgb_bytes_roundtrip() {
        let p = Palette::from_rgb_bytes(&[1, 2, 3, 4, 5, 6, 7]).unwrap();
        assert_eq!(p.len(), 2);
        assert_eq!(p.to_rgb_bytes(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_alpha_bytes_for_later_index() {
        let p = Palette::from_rgb_bytes(&[0; 12])
            .unwrap()
            .with_transparent_index(Some(2));
        assert_eq!(p.alpha_bytes(), vec![255, 255, 0]);
        let p = p.with_transparent_index(Some(9));
        assert!(p.alpha_bytes().is_empty());
    }
}
