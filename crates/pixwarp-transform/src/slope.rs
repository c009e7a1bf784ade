//! Slope row shift
//!
//! Column `j` is rolled down by `ceil(m * j + height / 2)` rows, where
//! `m = height / width`. The result is a diagonal shear with wraparound.

use crate::mapper::{CoordinateMapper, wrap};
use crate::resample::remap;
use crate::{TransformError, TransformResult};
use pixwarp_core::Pix;

/// Inverse mapping for the slope row shift.
#[derive(Debug, Clone)]
pub struct SlopeShift {
    width: u32,
    height: u32,
    slope: f64,
    offsets: Vec<i64>,
}

impl SlopeShift {
    pub fn new(width: u32, height: u32) -> TransformResult<Self> {
        if width == 0 || height == 0 {
            return Err(TransformError::InvalidParameters(format!(
                "cannot build slope shift for {width}x{height} image"
            )));
        }
        let slope = f64::from(height) / f64::from(width);
        let base = f64::from(height / 2);
        let offsets = (0..width)
            .map(|j| (slope * f64::from(j) + base).ceil() as i64)
            .collect();
        Ok(Self {
            width,
            height,
            slope,
            offsets,
        })
    }

    /// `height / width`.
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Downward roll of column `x`.
    pub fn column_offset(&self, x: u32) -> i64 {
        self.offsets[x as usize]
    }
}

impl CoordinateMapper for SlopeShift {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[inline]
    fn source(&self, x: u32, y: u32) -> (u32, u32) {
        (x, wrap(y, -self.offsets[x as usize], self.height))
    }
}

/// Apply the slope row shift to an image.
pub fn slope_shift(pix: &Pix) -> TransformResult<Pix> {
    let mapper = SlopeShift::new(pix.width(), pix.height())?;
    log::debug!("slope shift: m = {}, base offset {}", mapper.slope, pix.height() / 2);
    remap(pix, &mapper)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_square() {
        let s = SlopeShift::new(4, 4).unwrap();
        let offsets: Vec<i64> = (0..4).map(|x| s.column_offset(x)).collect();
        assert_eq!(offsets, vec![2, 3, 4, 5]);
    }

    #[test]
    fn test_offsets_fractional_slope() {
        // m = 3/4, base 1: ceil(1), ceil(1.75), ceil(2.5), ceil(3.25)
        let s = SlopeShift::new(4, 3).unwrap();
        assert_eq!(s.slope(), 0.75);
        let offsets: Vec<i64> = (0..4).map(|x| s.column_offset(x)).collect();
        assert_eq!(offsets, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_source_rolls_down() {
        let s = SlopeShift::new(4, 4).unwrap();
        // column 0, offset 2: destination row 0 reads source row 2
        assert_eq!(s.source(0, 0), (0, 2));
        assert_eq!(s.source(0, 2), (0, 0));
        // column 2, offset 4: identity
        for y in 0..4 {
            assert_eq!(s.source(2, y), (2, y));
        }
    }

    #[test]
    fn test_single_pixel() {
        let s = SlopeShift::new(1, 1).unwrap();
        assert_eq!(s.source(0, 0), (0, 0));
    }
}
