//! Error type for the pixwarp pipeline

use crate::config::ConfigError;
use thiserror::Error;

/// Any failure between reading the configuration and saving the result
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("image I/O: {0}")]
    Io(#[from] pixwarp_io::IoError),

    #[error("transform: {0}")]
    Transform(#[from] pixwarp_transform::TransformError),

    #[error("palette: {0}")]
    Color(#[from] pixwarp_color::ColorError),

    #[error("image: {0}")]
    Core(#[from] pixwarp_core::Error),

    /// A viewer failed to display an image
    #[error("display: {0}")]
    Display(String),
}

pub type Result<T> = std::result::Result<T, Error>;
