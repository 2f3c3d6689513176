//! radar-test - Regression test framework for radar restoration
//!
//! Provides [`RegParams`], which numbers each check in a regression test,
//! collects failures and reports them at the end, and fixtures that build
//! synthetic radar frames.
//!
//! # Usage
//!
//! ```
//! use radar_test::RegParams;
//!
//! let mut rp = RegParams::new("example");
//! rp.compare_values(4.0, 2.0 + 2.0, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" (default) or "display"

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use radar_core::{Palette, Surface};
use std::sync::Arc;

/// Index of the horizontal overlay line in [`synthetic_frame`]
pub const FIXTURE_ROW_BORDER: u8 = 241;
/// Index of the vertical overlay line in [`synthetic_frame`]
pub const FIXTURE_COLUMN_BORDER: u8 = 243;

/// Build a synthetic palette-indexed radar frame.
///
/// The frame holds an echo disc centered in the image whose indices run
/// through 1..=15 in rings, with index 0 (no signal) outside it. A
/// horizontal line of [`FIXTURE_ROW_BORDER`] crosses the middle row and a
/// vertical line of [`FIXTURE_COLUMN_BORDER`] crosses the column at one
/// third of the width. Both lines run edge to edge, so they pass through
/// the disc and through empty sky.
pub fn synthetic_frame(width: u32, height: u32) -> TestResult<Surface> {
    if width < 8 || height < 8 {
        return Err(TestError::InvalidFixture(format!(
            "frame must be at least 8x8, got {}x{}",
            width, height
        )));
    }
    let mut frame = Surface::new(width, height)?.with_palette(Arc::new(Palette::radar()));
    let (cx, cy) = (width as f32 / 2.0, height as f32 / 2.0);
    let radius = cx.min(cy) * 0.75;

    for y in 0..height {
        for x in 0..width {
            let r = ((x as f32 - cx).powi(2) + (y as f32 - cy).powi(2)).sqrt();
            if r < radius {
                let ring = (r / radius * 15.0) as u8;
                frame.set_pixel_unchecked(x, y, 15 - ring.min(14));
            }
        }
    }
    let row = height / 2;
    for x in 0..width {
        frame.set_pixel_unchecked(x, row, FIXTURE_ROW_BORDER);
    }
    let column = width / 3;
    for y in 0..height {
        frame.set_pixel_unchecked(column, y, FIXTURE_COLUMN_BORDER);
    }
    Ok(frame)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthetic_frame_layout() {
        let frame = synthetic_frame(64, 48).unwrap();
        assert_eq!(frame.size(), (64, 48));
        assert_eq!(frame.get_pixel(0, 0), Some(0));
        assert_eq!(frame.get_pixel(5, 24), Some(FIXTURE_ROW_BORDER));
        assert_eq!(frame.get_pixel(21, 3), Some(FIXTURE_COLUMN_BORDER));
        assert_eq!(frame.get_pixel(32, 23), Some(15));
        assert!(
            frame
                .data()
                .iter()
                .all(|&v| v <= 15 || v == FIXTURE_ROW_BORDER || v == FIXTURE_COLUMN_BORDER)
        );
    }

    #[test]
    fn test_synthetic_frame_too_small() {
        assert!(matches!(
            synthetic_frame(4, 40),
            Err(TestError::InvalidFixture(_))
        ));
    }
}
