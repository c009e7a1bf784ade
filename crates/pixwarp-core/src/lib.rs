//! pixwarp-core - the image buffer every pixwarp crate works on
//!
//! [`Pix`] is a shared read-only image and [`PixMut`] its writable form.
//! Pixels are packed words (see [`color`]) addressed as `(x, y)`, column
//! first. Borders, clipping and comparison are methods on [`Pix`].

pub mod error;
pub mod pix;

pub use error::{Error, Result};
pub use pix::{ImageFormat, Pix, PixMut};

/// Packed pixel words
///
/// A pixel is `0xRRGGBBAA`. The low byte is always `0xff` so that a packed
/// word reads the same way the codecs lay out RGBA bytes.
pub mod color {
    /// Opaque black.
    pub const BLACK: u32 = 0x0000_00ff;
    /// Opaque white.
    pub const WHITE: u32 = 0xffff_ffff;

    const OPAQUE: u32 = 0xff;

    #[inline]
    pub fn red(pixel: u32) -> u8 {
        (pixel >> 24) as u8
    }

    #[inline]
    pub fn green(pixel: u32) -> u8 {
        (pixel >> 16) as u8
    }

    #[inline]
    pub fn blue(pixel: u32) -> u8 {
        (pixel >> 8) as u8
    }

    /// Pack three channels into an opaque pixel.
    #[inline]
    pub fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
        u32::from_be_bytes([r, g, b, 0]) | OPAQUE
    }

    #[inline]
    pub fn extract_rgb(pixel: u32) -> (u8, u8, u8) {
        let [r, g, b, _] = pixel.to_be_bytes();
        (r, g, b)
    }

    #[inline]
    pub fn from_array([r, g, b]: [u8; 3]) -> u32 {
        compose_rgb(r, g, b)
    }

    #[inline]
    pub fn to_array(pixel: u32) -> [u8; 3] {
        let [r, g, b, _] = pixel.to_be_bytes();
        [r, g, b]
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_compose_extract() {
            let p = compose_rgb(12, 200, 255);
            assert_eq!(extract_rgb(p), (12, 200, 255));
            assert_eq!(p & 0xff, 0xff);
        }

        #[test]
        fn test_constants() {
            assert_eq!(BLACK, compose_rgb(0, 0, 0));
            assert_eq!(WHITE, compose_rgb(255, 255, 255));
        }

        #[test]
        fn test_array_roundtrip() {
            let p = from_array([1, 2, 3]);
            assert_eq!(to_array(p), [1, 2, 3]);
        }
    }
}
