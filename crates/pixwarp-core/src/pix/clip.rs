//! Sub-rectangle extraction

use super::Pix;
use crate::error::{Error, Result};

impl Pix {
    /// Copy the `w x h` rectangle whose top-left corner is `(x, y)`.
    ///
    /// The rectangle is cut down to the part that overlaps the image.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] for a zero-sized rectangle or a corner
    /// outside the image.
    ///
    /// ```
    /// use pixwarp_core::Pix;
    ///
    /// let pix = Pix::new(100, 80).unwrap();
    /// let part = pix.clip_rectangle(80, 60, 50, 50).unwrap();
    /// assert_eq!((part.width(), part.height()), (20, 20));
    /// ```
    pub fn clip_rectangle(&self, x: u32, y: u32, w: u32, h: u32) -> Result<Pix> {
        if w == 0 || h == 0 {
            return Err(Error::InvalidParameter(format!(
                "empty clip rectangle {w}x{h}"
            )));
        }
        let (width, height) = (self.width(), self.height());
        if x >= width || y >= height {
            return Err(Error::InvalidParameter(format!(
                "clip corner ({x}, {y}) lies outside the {width}x{height} image"
            )));
        }

        let cols = x as usize..(x + w.min(width - x)) as usize;
        let rows = y..y + h.min(height - y);
        let data: Vec<u32> = rows
            .flat_map(|row| self.row_data(row)[cols.clone()].iter().copied())
            .collect();

        let mut out = Pix::from_raw(cols.len() as u32, h.min(height - y), data)?.into_mut();
        out.set_informat(self.informat());
        Ok(out.into())
    }
}
