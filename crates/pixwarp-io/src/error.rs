//! Errors from reading and writing image files

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input path could not be read
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Neither PNG nor JPEG, or the codec feature is off
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("invalid image data: {0}")]
    InvalidData(String),

    #[error("decode error: {0}")]
    DecodeError(String),

    #[error("encode error: {0}")]
    EncodeError(String),

    /// Decoded pixels did not form a valid image
    #[error(transparent)]
    Core(#[from] pixwarp_core::Error),
}

pub type IoResult<T> = Result<T, IoError>;
