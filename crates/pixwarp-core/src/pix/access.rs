//! Single-pixel reads and writes at `(x, y)` = (column, row)

use super::{Pix, PixMut};
use crate::color;
use crate::error::{Error, Result};

#[inline]
fn index_of(width: u32, x: u32, y: u32) -> usize {
    y as usize * width as usize + x as usize
}

#[inline]
fn inside(width: u32, height: u32, x: u32, y: u32) -> bool {
    x < width && y < height
}

impl Pix {
    /// Pixel at `(x, y)`, or `None` outside the image.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        inside(self.width(), self.height(), x, y).then(|| self.get_pixel_unchecked(x, y))
    }

    /// Pixel at `(x, y)` with only the buffer's own bounds check.
    ///
    /// An `x` past the row end silently reads the next row.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        self.data()[index_of(self.width(), x, y)]
    }

    pub fn get_rgb(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        self.get_pixel(x, y).map(color::extract_rgb)
    }
}

impl PixMut {
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        inside(self.width(), self.height(), x, y)
            .then(|| self.data()[index_of(self.width(), x, y)])
    }

    /// Write one pixel.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfBounds`] when `(x, y)` is outside the image.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: u32) -> Result<()> {
        let (width, height) = (self.width(), self.height());
        if !inside(width, height, x, y) {
            return Err(Error::OutOfBounds {
                x,
                y,
                width,
                height,
            });
        }
        self.set_pixel_unchecked(x, y, val);
        Ok(())
    }

    /// Write one pixel with only the buffer's own bounds check.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: u32) {
        let i = index_of(self.width(), x, y);
        self.data_mut()[i] = val;
    }

    pub fn set_rgb(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) -> Result<()> {
        self.set_pixel(x, y, color::compose_rgb(r, g, b))
    }
}
