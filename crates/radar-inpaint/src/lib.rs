//! radar-inpaint - Fast marching inpainting
//!
//! This crate provides:
//!
//! - [`NarrowBand`], a min-priority queue with replace and remove by key
//! - [`inpaint`], which rebuilds masked pixels by marching inward from
//!   their known surroundings
//!
//! # Examples
//!
//! ```
//! use radar_core::Surface;
//! use radar_inpaint::inpaint;
//!
//! let mut data = Surface::new(3, 3).unwrap();
//! data.data_mut().fill(85);
//! let mut mask = Surface::new(3, 3).unwrap();
//! mask.set_pixel_unchecked(1, 1, 1);
//! data.set_pixel_unchecked(1, 1, 0);
//!
//! let restored = inpaint(&data, &mask).unwrap();
//! assert_eq!(restored.get_pixel(1, 1), Some(85));
//! ```

mod error;
pub mod fmm;
pub mod narrow_band;

pub use error::{InpaintError, InpaintResult};
pub use fmm::{InpaintStats, PixelState, inpaint, inpaint_with_stats, solve_eikonal};
pub use narrow_band::NarrowBand;
