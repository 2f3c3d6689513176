//! radar-core - Basic data structures for radar image restoration
//!
//! This crate provides the fundamental data structures used throughout
//! the restoration pipeline:
//!
//! - [`Grid`] - Flat row-major buffer shared by every per-pixel array
//! - [`Surface`] - Palette-indexed image container
//! - [`Palette`] - Display colors for indexed surfaces
//! - [`Rect`] - Regions of interest

pub mod error;
pub mod grid;
pub mod palette;
pub mod rect;
pub mod surface;

pub use error::{Error, Result};
pub use grid::{CROSS_4, Grid, RING_8};
pub use palette::{Palette, Rgb, TRANSPARENT_COLOR};
pub use rect::Rect;
pub use surface::Surface;
