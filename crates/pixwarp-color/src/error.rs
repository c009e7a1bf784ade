//! Error types for pixwarp-color

use thiserror::Error;

/// Errors that can occur during palette operations
#[derive(Debug, Error)]
pub enum ColorError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] pixwarp_core::Error),

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// Empty image or palette
    #[error("empty image: no pixels to process")]
    EmptyImage,

    /// More distinct colors than the target palette can receive
    #[error("found {found} distinct colors but the palette holds {capacity}")]
    PaletteOverflow { found: usize, capacity: usize },
}

/// Result type for color operations
pub type ColorResult<T> = Result<T, ColorError>;
