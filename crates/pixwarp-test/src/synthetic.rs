//! Synthetic test images
//!
//! Deterministic images built in memory so tests need no fixture files.

use pixwarp_core::{Pix, color};

/// Every pixel gets a color unique to its position: red encodes the
/// column, green the row, blue a mix of both.
pub fn coordinate_image(width: u32, height: u32) -> Pix {
    let data = (0..height)
        .flat_map(|y| (0..width).map(move |x| coordinate_color(x, y)))
        .collect();
    Pix::from_raw(width, height, data).expect("non-empty synthetic image")
}

/// The color `coordinate_image` stores at `(x, y)`.
pub fn coordinate_color(x: u32, y: u32) -> u32 {
    color::compose_rgb(
        (x % 256) as u8,
        (y % 256) as u8,
        ((x / 256 + 16 * (y / 256)) % 256) as u8,
    )
}

/// Each row is a single gray level equal to the row index (mod 256), the
/// "single-channel-repeated" image used for vertical-shift checks.
pub fn row_gray_image(width: u32, height: u32) -> Pix {
    let data = (0..height)
        .flat_map(|y| {
            let g = (y % 256) as u8;
            std::iter::repeat_n(color::compose_rgb(g, g, g), width as usize)
        })
        .collect();
    Pix::from_raw(width, height, data).expect("non-empty synthetic image")
}

/// Horizontal bands cycling through `colors`, `band` rows each.
pub fn banded_image(width: u32, height: u32, band: u32, colors: &[u32]) -> Pix {
    let band = band.max(1);
    let data = (0..height)
        .flat_map(|y| {
            let c = colors[((y / band) as usize) % colors.len()];
            std::iter::repeat_n(c, width as usize)
        })
        .collect();
    Pix::from_raw(width, height, data).expect("non-empty synthetic image")
}

/// Smooth RGB gradient, useful as quantizer input.
pub fn color_gradient(width: u32, height: u32) -> Pix {
    let data = (0..height)
        .flat_map(|y| {
            (0..width).map(move |x| {
                let r = ((x * 255) / width.max(1)) as u8;
                let g = ((y * 255) / height.max(1)) as u8;
                let b = (128u32.wrapping_add((x + y) * 64 / (width + height).max(1))) as u8;
                color::compose_rgb(r, g, b)
            })
        })
        .collect();
    Pix::from_raw(width, height, data).expect("non-empty synthetic image")
}
