//! Error types for the restoration pipeline

use thiserror::Error;

/// Errors that can occur while restoring a frame
#[derive(Debug, Error)]
pub enum RestoreError {
    /// The frame size has no region of interest
    #[error("unsupported image size: {width}x{height}")]
    UnsupportedImageSize { width: u32, height: u32 },

    /// The configured region of interest does not fit inside the frame
    #[error("region of interest {rect:?} does not fit a {width}x{height} frame")]
    RoiOutsideFrame {
        rect: radar_core::Rect,
        width: u32,
        height: u32,
    },

    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] radar_core::Error),

    /// Morphology error
    #[error("morphology error: {0}")]
    Morph(#[from] radar_morph::MorphError),

    /// Inpainting error
    #[error("inpaint error: {0}")]
    Inpaint(#[from] radar_inpaint::InpaintError),

    /// Decoding or encoding error
    #[error("image I/O error: {0}")]
    Io(#[from] radar_io::IoError),
}

/// Result type for the restoration pipeline
pub type RestoreResult<T> = Result<T, RestoreError>;
