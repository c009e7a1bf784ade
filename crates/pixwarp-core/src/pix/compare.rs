//! Image comparison

use super::Pix;

impl Pix {
    /// Check if two images have identical dimensions and pixels.
    pub fn equals(&self, other: &Pix) -> bool {
        self.width() == other.width()
            && self.height() == other.height()
            && self.data() == other.data()
    }

    /// Check if two images have the same width and height.
    pub fn sizes_equal(&self, other: &Pix) -> bool {
        self.width() == other.width() && self.height() == other.height()
    }

    /// Count pixels that differ between two same-sized images.
    ///
    /// Returns `None` if the sizes differ.
    pub fn count_diff_pixels(&self, other: &Pix) -> Option<usize> {
        if !self.sizes_equal(other) {
            return None;
        }
        Some(
            self.data()
                .iter()
                .zip(other.data())
                .filter(|(a, b)| a != b)
                .count(),
        )
    }
}
