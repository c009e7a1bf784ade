//! JPEG image format support
//!
//! Reads JPEG images with `jpeg-decoder` and writes them with
//! `jpeg-encoder`. Grayscale input is replicated into RGB; CMYK input is
//! converted with the naive `255 - (c|m|y)` inversion scaled by `k`.

use crate::{IoError, IoResult};
use jpeg_decoder::{Decoder, PixelFormat};
use jpeg_encoder::{ColorType, Encoder};
use pixwarp_core::{ImageFormat, Pix, color};
use std::io::{Read, Write};

/// Default encoder quality, the same as the common `cv2.imwrite` default.
pub const DEFAULT_QUALITY: u8 = 95;

/// Read a JPEG image from a reader.
pub fn read_jpeg<R: Read>(reader: R) -> IoResult<Pix> {
    let mut decoder = Decoder::new(reader);
    let data = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(format!("JPEG decode error: {}", e)))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("JPEG header missing".to_string()))?;

    let width = info.width as u32;
    let height = info.height as u32;

    let pixels: Vec<u32> = match info.pixel_format {
        PixelFormat::L8 => data.iter().map(|&g| color::compose_rgb(g, g, g)).collect(),
        PixelFormat::L16 => data
            .chunks_exact(2)
            .map(|c| color::compose_rgb(c[0], c[0], c[0]))
            .collect(),
        PixelFormat::RGB24 => data
            .chunks_exact(3)
            .map(|c| color::compose_rgb(c[0], c[1], c[2]))
            .collect(),
        PixelFormat::CMYK32 => data
            .chunks_exact(4)
            .map(|c| {
                let k = c[3] as u32;
                let ch = |v: u8| ((255 - v as u32) * k / 255) as u8;
                color::compose_rgb(ch(c[0]), ch(c[1]), ch(c[2]))
            })
            .collect(),
    };

    let mut pix = Pix::from_raw(width, height, pixels)?.into_mut();
    pix.set_informat(ImageFormat::Jpeg);
    Ok(pix.into())
}

/// Write a `Pix` as a baseline RGB JPEG.
///
/// # Errors
///
/// JPEG cannot store images wider or taller than 65535 pixels.
pub fn write_jpeg<W: Write>(pix: &Pix, writer: W, quality: u8) -> IoResult<()> {
    let (Ok(width), Ok(height)) = (u16::try_from(pix.width()), u16::try_from(pix.height())) else {
        return Err(IoError::EncodeError(format!(
            "{}x{} exceeds the JPEG size limit",
            pix.width(),
            pix.height()
        )));
    };

    let data: Vec<u8> = pix.data().iter().flat_map(|&p| color::to_array(p)).collect();
    let encoder = Encoder::new(writer, quality.clamp(1, 100));
    encoder
        .encode(&data, width, height, ColorType::Rgb)
        .map_err(|e| IoError::EncodeError(format!("JPEG encode error: {}", e)))
}
