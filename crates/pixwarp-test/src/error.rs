//! Error type for the regression helpers

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TestError {
    /// A display-mode image could not be saved
    #[error("cannot save regression image {}: {source}", path.display())]
    ImageWrite {
        path: PathBuf,
        source: pixwarp_io::IoError,
    },
}

pub type TestResult<T> = Result<T, TestError>;
