//! Error types for radar-morph

use thiserror::Error;

/// Errors that can occur during morphological operations
#[derive(Debug, Error)]
pub enum MorphError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] radar_core::Error),

    /// Invalid structuring element
    #[error("invalid structuring element: {0}")]
    InvalidSel(String),

    /// Input is not a binary surface
    #[error("expected a binary surface, found index {found} at ({x}, {y})")]
    NotBinary { x: u32, y: u32, found: u8 },
}

/// Result type for morphological operations
pub type MorphResult<T> = Result<T, MorphError>;
