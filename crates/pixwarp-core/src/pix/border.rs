//! Constant-color frames: padding an image and cutting the frame off again

use super::Pix;
use crate::error::{Error, Result};

impl Pix {
    /// Pad every side with `npix` pixels of `val`.
    ///
    /// The result is `(w + 2*npix) x (h + 2*npix)`; `npix == 0` gives a copy.
    pub fn add_border(&self, npix: u32, val: u32) -> Result<Pix> {
        self.add_border_general(npix, npix, npix, npix, val)
    }

    /// Pad each side by its own amount.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] when the padded size does not fit `u32`.
    pub fn add_border_general(
        &self,
        left: u32,
        right: u32,
        top: u32,
        bot: u32,
        val: u32,
    ) -> Result<Pix> {
        let w = self.width();
        let h = self.height();
        let (Some(wd), Some(hd)) = (
            w.checked_add(left).and_then(|v| v.checked_add(right)),
            h.checked_add(top).and_then(|v| v.checked_add(bot)),
        ) else {
            return Err(Error::InvalidParameter(format!(
                "border ({left}, {right}, {top}, {bot}) overflows {w}x{h} image"
            )));
        };

        let mut out = Pix::new_filled(wd, hd, val)?.into_mut();
        out.set_informat(self.informat());
        for y in 0..h {
            let dst = out.row_data_mut(y + top);
            dst[left as usize..(left + w) as usize].copy_from_slice(self.row_data(y));
        }
        Ok(out.into())
    }

    /// Cut `npix` pixels off every side.
    ///
    /// # Errors
    ///
    /// Fails when the frame would consume the whole image.
    pub fn remove_border(&self, npix: u32) -> Result<Pix> {
        self.remove_border_general(npix, npix, npix, npix)
    }

    /// Cut each side by its own amount.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] unless at least one row and one column
    /// remain.
    pub fn remove_border_general(&self, left: u32, right: u32, top: u32, bot: u32) -> Result<Pix> {
        let w = self.width();
        let h = self.height();
        let horiz = u64::from(left) + u64::from(right);
        let vert = u64::from(top) + u64::from(bot);
        if horiz >= u64::from(w) || vert >= u64::from(h) {
            return Err(Error::InvalidParameter(format!(
                "border ({left}, {right}, {top}, {bot}) leaves nothing of {w}x{h} image"
            )));
        }
        if horiz == 0 && vert == 0 {
            return Ok(self.deep_clone());
        }
        self.clip_rectangle(left, top, w - left - right, h - top - bot)
    }
}
