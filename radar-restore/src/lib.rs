//! radar-restore - Radar frame restoration
//!
//! Published radar composites draw a map overlay (coast lines, county
//! borders) straight into the palette-indexed frame, hiding the
//! reflectivity underneath. This crate removes the overlay and rebuilds
//! the hidden data:
//!
//! 1. crop the frame to its region of interest
//! 2. split overlay pixels from reflectivity levels
//! 3. close the data region and keep only the overlay pixels inside it
//! 4. inpaint those pixels by fast marching from their surroundings
//! 5. encode the result as base64 PNG text
//!
//! # Example
//!
//! ```
//! use radar_restore::{RestoreConfig, Surface, run};
//!
//! let config = RestoreConfig::default();
//! let frame = Surface::new(640, 480).unwrap();
//! let png_base64 = run(&frame, &config).unwrap();
//! assert!(!png_base64.is_empty());
//! ```

pub mod channels;
pub mod config;
pub mod crop;
pub mod error;
pub mod pipeline;

pub use channels::{extract_borders, rescale_index};
pub use config::{RestoreConfig, RoiTable};
pub use crop::crop;
pub use error::{RestoreError, RestoreResult};
pub use pipeline::{restore, run, run_bytes, run_crop_only, run_crop_only_bytes};

// Re-export core types (primary data structures used everywhere)
pub use radar_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use radar_inpaint as inpaint;
pub use radar_io as io;
pub use radar_morph as morph;
