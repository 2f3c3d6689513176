//! Restoration settings
//!
//! A [`RestoreConfig`] is built once, then shared read-only by every frame
//! restored with it.

use radar_core::{Palette, Rect};
use radar_morph::{MorphResult, Sel};
use std::sync::Arc;

/// Overlay indices in the published frames
pub const DEFAULT_BORDER_INDICES: [u8; 2] = [241, 243];

/// Highest reflectivity index; maps to 255 after rescaling
pub const REFLECTIVITY_SCALE: u8 = 15;

/// Side of the square structuring element that closes the data region
pub const DEFAULT_CLOSING_SIZE: u32 = 3;

/// Frame sizes with a known region of interest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoiTable {
    entries: Vec<((u32, u32), Rect)>,
}

impl Default for RoiTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl RoiTable {
    /// Create an empty table.
    pub fn new() -> Self {
        RoiTable {
            entries: Vec::new(),
        }
    }

    /// The two published frame layouts.
    ///
    /// | size    | ROI                |
    /// |---------|--------------------|
    /// | 640x480 | 478x478 at (1, 1)  |
    /// | 672x512 | 510x510 at (1, 1)  |
    pub fn standard() -> Self {
        let mut table = Self::new();
        table.insert(640, 480, Rect::new(1, 1, 478, 478));
        table.insert(672, 512, Rect::new(1, 1, 510, 510));
        table
    }

    /// Register `rect` for frames of `width` x `height`, replacing any
    /// earlier entry for that size.
    pub fn insert(&mut self, width: u32, height: u32, rect: Rect) {
        match self.entries.iter_mut().find(|(size, _)| *size == (width, height)) {
            Some(entry) => entry.1 = rect,
            None => self.entries.push(((width, height), rect)),
        }
    }

    /// ROI for an exact frame size.
    pub fn lookup(&self, width: u32, height: u32) -> Option<Rect> {
        self.entries
            .iter()
            .find(|(size, _)| *size == (width, height))
            .map(|&(_, rect)| rect)
    }

    /// Iterate over `((width, height), rect)` entries.
    pub fn iter(&self) -> impl Iterator<Item = ((u32, u32), Rect)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Settings for the restoration pipeline
#[derive(Debug, Clone)]
pub struct RestoreConfig {
    roi: RoiTable,
    border_indices: Vec<u8>,
    transparent_index: u8,
    closing_size: u32,
    data_palette: Arc<Palette>,
    border_palette: Arc<Palette>,
}

impl Default for RestoreConfig {
    fn default() -> Self {
        RestoreConfig {
            roi: RoiTable::standard(),
            border_indices: DEFAULT_BORDER_INDICES.to_vec(),
            transparent_index: 0,
            closing_size: DEFAULT_CLOSING_SIZE,
            data_palette: Arc::new(Palette::radar()),
            border_palette: Arc::new(Palette::binary()),
        }
    }
}

impl RestoreConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the ROI for one frame size.
    pub fn with_roi(mut self, width: u32, height: u32, rect: Rect) -> Self {
        self.roi.insert(width, height, rect);
        self
    }

    /// Replace the set of overlay indices.
    pub fn with_border_indices(mut self, indices: &[u8]) -> Self {
        self.border_indices = indices.to_vec();
        self
    }

    /// Set the index written transparent in the output PNG.
    ///
    /// Both the data and the border palette are updated.
    pub fn with_transparent_index(mut self, index: u8) -> Self {
        self.transparent_index = index;
        self.data_palette = Arc::new(
            self.data_palette
                .as_ref()
                .clone()
                .with_transparent_index(Some(index)),
        );
        self.border_palette = Arc::new(
            self.border_palette
                .as_ref()
                .clone()
                .with_transparent_index(Some(index)),
        );
        self
    }

    /// Set the side of the square structuring element used to close the
    /// data region.
    pub fn with_closing_size(mut self, size: u32) -> Self {
        self.closing_size = size;
        self
    }

    pub fn roi(&self) -> &RoiTable {
        &self.roi
    }

    pub fn border_indices(&self) -> &[u8] {
        &self.border_indices
    }

    /// Check whether `index` is an overlay index.
    pub fn is_border(&self, index: u8) -> bool {
        self.border_indices.contains(&index)
    }

    pub fn transparent_index(&self) -> u8 {
        self.transparent_index
    }

    pub fn reflectivity_scale(&self) -> u8 {
        REFLECTIVITY_SCALE
    }

    pub fn closing_size(&self) -> u32 {
        self.closing_size
    }

    /// Structuring element for closing the data region.
    ///
    /// # Errors
    ///
    /// Returns an error if the closing size is zero.
    pub fn closing_sel(&self) -> MorphResult<Sel> {
        Sel::create_square(self.closing_size)
    }

    /// Palette attached to rescaled and restored data.
    pub fn data_palette(&self) -> &Arc<Palette> {
        &self.data_palette
    }

    /// Palette attached to the binary overlay surface.
    pub fn border_palette(&self) -> &Arc<Palette> {
        &self.border_palette
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_roi_table() {
        let table = RoiTable::standard();
        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup(640, 480), Some(Rect::new(1, 1, 478, 478)));
        assert_eq!(table.lookup(672, 512), Some(Rect::new(1, 1, 510, 510)));
        assert_eq!(table.lookup(480, 640), None);
        assert_eq!(table.lookup(641, 480), None);
    }

    #[test]
    fn test_roi_insert_replaces() {
        let mut table = RoiTable::new();
        assert!(table.is_empty());
        table.insert(10, 10, Rect::new(0, 0, 5, 5));
        table.insert(10, 10, Rect::new(1, 1, 8, 8));
        assert_eq!(table.len(), 1);
        assert_eq!(table.lookup(10, 10), Some(Rect::new(1, 1, 8, 8)));
        assert_eq!(table.iter().count(), 1);
    }

    #[test]
    fn test_default_config() {
        let cfg = RestoreConfig::default();
        assert_eq!(cfg.border_indices(), &[241, 243]);
        assert!(cfg.is_border(241));
        assert!(cfg.is_border(243));
        assert!(!cfg.is_border(242));
        assert_eq!(cfg.transparent_index(), 0);
        assert_eq!(cfg.reflectivity_scale(), 15);
        assert_eq!(cfg.closing_sel().unwrap().hit_count(), 9);
        assert_eq!(cfg.data_palette().len(), 256);
        assert_eq!(cfg.border_palette().len(), 2);
    }

    #[test]
    fn test_builders() {
        let cfg = RestoreConfig::new()
            .with_roi(100, 80, Rect::new(2, 2, 50, 50))
            .with_border_indices(&[7])
            .with_transparent_index(9)
            .with_closing_size(5);
        assert_eq!(cfg.roi().lookup(100, 80), Some(Rect::new(2, 2, 50, 50)));
        assert_eq!(cfg.roi().len(), 3);
        assert!(cfg.is_border(7));
        assert!(!cfg.is_border(241));
        assert_eq!(cfg.data_palette().transparent_index(), Some(9));
        assert_eq!(cfg.border_palette().transparent_index(), Some(9));
        assert_eq!(cfg.closing_sel().unwrap().hit_count(), 25);
        assert!(RestoreConfig::new().with_closing_size(0).closing_sel().is_err());
    }

    #[test]
    fn test_config_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RestoreConfig>();
    }
}
