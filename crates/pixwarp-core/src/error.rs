//! Errors raised by the image buffer

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// An image side is 0
    #[error("image must be at least 1x1, got {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// A pixel coordinate lies outside the image
    #[error("pixel ({x}, {y}) is outside the {width}x{height} image")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, Error>;
