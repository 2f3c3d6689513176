//! Error types for radar-inpaint

use thiserror::Error;

/// Errors that can occur during inpainting
#[derive(Debug, Error)]
pub enum InpaintError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] radar_core::Error),

    /// The inpaint mask holds an index other than 0 or 1
    #[error("inpaint mask must be binary, found index {found} at ({x}, {y})")]
    NotBinaryMask { x: u32, y: u32, found: u8 },
}

/// Result type for inpainting
pub type InpaintResult<T> = Result<T, InpaintError>;
