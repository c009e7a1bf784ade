//! Error types for pixwarp-transform

use thiserror::Error;

/// Errors that can occur while remapping an image
#[derive(Debug, Error)]
pub enum TransformError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] pixwarp_core::Error),

    /// Invalid transformation parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// The mapper was built for an image of a different shape
    #[error("mapper built for {}x{} applied to {}x{} image", .mapper.0, .mapper.1, .image.0, .image.1)]
    DimensionMismatch { mapper: (u32, u32), image: (u32, u32) },

    /// The crop margin would consume the whole image
    #[error("crop margin {margin} too large for {width}x{height} image")]
    CropTooLarge { margin: u32, width: u32, height: u32 },
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;
