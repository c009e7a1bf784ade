//! pixwarp-io - Image I/O for pixwarp
//!
//! Loads JPEG/PNG files into a [`Pix`] and saves a [`Pix`] back to disk.
//! Which codecs are compiled in is controlled by the `png-format` and
//! `jpeg` features (both on by default).

mod error;
pub mod format;
#[cfg(feature = "jpeg")]
pub mod jpeg;
#[cfg(feature = "png-format")]
pub mod png;

pub use error::{IoError, IoResult};
pub use format::{detect_format_from_bytes, format_for_path};
pub use pixwarp_core::ImageFormat;

use log::debug;
use pixwarp_core::Pix;
use std::fs::{self, File};
use std::io::{BufWriter, Cursor, Write};
use std::path::Path;

/// Read an image file, detecting its format from the content.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Pix> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| IoError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let pix = read_image_mem(&bytes)?;
    debug!(
        "read {} ({}x{}, {:?})",
        path.display(),
        pix.width(),
        pix.height(),
        pix.informat()
    );
    Ok(pix)
}

/// Decode an image held in memory.
pub fn read_image_mem(data: &[u8]) -> IoResult<Pix> {
    match detect_format_from_bytes(data)? {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(Cursor::new(data)),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::read_jpeg(Cursor::new(data)),
        other => Err(IoError::UnsupportedFormat(format!(
            "{:?} support is not enabled",
            other
        ))),
    }
}

/// Encode an image into an in-memory buffer.
pub fn write_image_mem(pix: &Pix, format: ImageFormat) -> IoResult<Vec<u8>> {
    let mut buffer = Vec::new();
    write_image_to(pix, &mut buffer, format)?;
    Ok(buffer)
}

/// Encode an image into any writer.
pub fn write_image_to<W: Write>(pix: &Pix, writer: W, format: ImageFormat) -> IoResult<()> {
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::write_png(pix, writer),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::write_jpeg(pix, writer, jpeg::DEFAULT_QUALITY),
        other => {
            drop(writer);
            Err(IoError::UnsupportedFormat(format!(
                "cannot write {:?}",
                other
            )))
        }
    }
}

/// Write an image to a file in the given format.
///
/// The file is only created once encoding has succeeded, so a failed
/// encode never leaves a truncated file behind.
pub fn write_image<P: AsRef<Path>>(pix: &Pix, path: P, format: ImageFormat) -> IoResult<()> {
    let path = path.as_ref();
    let bytes = write_image_mem(pix, format)?;
    let mut file = BufWriter::new(File::create(path)?);
    file.write_all(&bytes)?;
    file.flush()?;
    debug!("wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}

/// Write an image, choosing the format from the file extension.
pub fn write_image_auto<P: AsRef<Path>>(pix: &Pix, path: P) -> IoResult<()> {
    let format = format_for_path(&path)?;
    write_image(pix, path, format)
}
