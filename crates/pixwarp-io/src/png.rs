//! PNG codec
//!
//! Any PNG is decoded to 8-bit samples; gray becomes equal RGB and alpha is
//! ignored.

use crate::{IoError, IoResult};
use pixwarp_core::{ImageFormat, Pix, color};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};

fn decode_err(stage: &'static str) -> impl FnOnce(png::DecodingError) -> IoError {
    move |e| IoError::DecodeError(format!("PNG {stage}: {e}"))
}

fn encode_err(stage: &'static str) -> impl FnOnce(png::EncodingError) -> IoError {
    move |e| IoError::EncodeError(format!("PNG {stage}: {e}"))
}

/// Decode the first frame of a PNG stream.
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Pix> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::normalize_to_color8());
    let mut reader = decoder.read_info().map_err(decode_err("header"))?;

    let size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("PNG frame is too large".to_string()))?;
    let mut buf = vec![0; size];
    let frame = reader.next_frame(&mut buf).map_err(decode_err("frame"))?;

    let channels = match frame.color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "PNG color type {other:?} at depth {:?}",
                frame.bit_depth
            )));
        }
    };
    // gray (with or without alpha) reads its only sample three times
    let (g, b) = if channels < 3 { (0, 0) } else { (1, 2) };

    let used = frame.width as usize * channels;
    let pixels: Vec<u32> = buf[..frame.buffer_size()]
        .chunks(frame.line_size)
        .take(frame.height as usize)
        .flat_map(|line| {
            line[..used]
                .chunks_exact(channels)
                .map(move |s| color::compose_rgb(s[0], s[g], s[b]))
        })
        .collect();

    let mut pix = Pix::from_raw(frame.width, frame.height, pixels)?.into_mut();
    pix.set_informat(ImageFormat::Png);
    Ok(pix.into())
}

/// Encode as 8-bit RGB PNG.
pub fn write_png<W: Write>(pix: &Pix, writer: W) -> IoResult<()> {
    let mut encoder = Encoder::new(writer, pix.width(), pix.height());
    encoder.set_color(ColorType::Rgb);
    encoder.set_depth(BitDepth::Eight);
    let mut writer = encoder.write_header().map_err(encode_err("header"))?;

    let bytes: Vec<u8> = pix.data().iter().flat_map(|&p| color::to_array(p)).collect();
    writer.write_image_data(&bytes).map_err(encode_err("data"))?;
    writer.finish().map_err(encode_err("trailer"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_png_roundtrip_rgb() {
        let mut pix_mut = Pix::new(5, 4).unwrap().into_mut();
        pix_mut.set_rgb(0, 0, 255, 0, 0).unwrap();
        pix_mut.set_rgb(1, 1, 0, 255, 0).unwrap();
        pix_mut.set_rgb(4, 3, 0, 0, 255).unwrap();
        let pix: Pix = pix_mut.into();

        let mut buffer = Vec::new();
        write_png(&pix, &mut buffer).unwrap();
        let pix2 = read_png(Cursor::new(buffer)).unwrap();

        assert_eq!(pix2.informat(), ImageFormat::Png);
        assert!(pix2.equals(&pix));
    }

    #[test]
    fn test_png_grayscale_expands_to_rgb() {
        let mut buffer = Vec::new();
        {
            let mut encoder = Encoder::new(&mut buffer, 2, 1);
            encoder.set_color(ColorType::Grayscale);
            encoder.set_depth(BitDepth::Eight);
            let mut w = encoder.write_header().unwrap();
            w.write_image_data(&[10, 200]).unwrap();
        }
        let pix = read_png(Cursor::new(buffer)).unwrap();
        assert_eq!(pix.get_rgb(0, 0), Some((10, 10, 10)));
        assert_eq!(pix.get_rgb(1, 0), Some((200, 200, 200)));
    }

    #[test]
    fn test_png_garbage_is_decode_error() {
        let err = read_png(Cursor::new(vec![1u8, 2, 3, 4])).unwrap_err();
        assert!(matches!(err, IoError::DecodeError(_)));
    }
}
