//! Image format detection
//!
//! Reading detects formats by the magic number at the start of the data;
//! writing picks the format from the output file's extension.

use crate::{IoError, IoResult};
use pixwarp_core::ImageFormat;
use std::path::Path;

/// Leading bytes of each supported container
const SIGNATURES: &[(&[u8], ImageFormat)] = &[
    (b"\x89PNG\r\n\x1a\n", ImageFormat::Png),
    (&[0xFF, 0xD8, 0xFF], ImageFormat::Jpeg),
];

/// Format of an encoded image, judged by its signature.
pub fn detect_format_from_bytes(data: &[u8]) -> IoResult<ImageFormat> {
    if data.len() < 3 {
        return Err(IoError::InvalidData(format!(
            "{} bytes are too few to identify an image",
            data.len()
        )));
    }
    SIGNATURES
        .iter()
        .find(|(sig, _)| data.starts_with(sig))
        .map(|&(_, format)| format)
        .ok_or_else(|| IoError::UnsupportedFormat("neither PNG nor JPEG data".to_string()))
}

/// Choose the output format from a path's extension
pub fn format_for_path<P: AsRef<Path>>(path: P) -> IoResult<ImageFormat> {
    let path = path.as_ref();
    let format = path
        .extension()
        .and_then(|e| e.to_str())
        .map(ImageFormat::from_extension)
        .unwrap_or_default();
    if format == ImageFormat::Unknown {
        return Err(IoError::UnsupportedFormat(format!(
            "cannot infer output format from {}",
            path.display()
        )));
    }
    Ok(format)
}
