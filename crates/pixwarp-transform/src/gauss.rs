//! Gaussian vertical shift
//!
//! Each column is rolled vertically by an amount that follows a scaled
//! normal density evaluated across the image width, producing a bell-shaped
//! bulge. The density is sampled at `width - 1` evenly spaced integer
//! positions over `[0, width]`; column `j` reads sample `j - 1`, and
//! column 0 reads the last sample.

use crate::mapper::{CoordinateMapper, wrap};
use crate::resample::remap;
use crate::{TransformError, TransformResult};
use pixwarp_core::Pix;
use std::f64::consts::PI;

/// Inverse mapping for the Gaussian vertical shift.
#[derive(Debug, Clone)]
pub struct GaussShift {
    width: u32,
    height: u32,
    density: Vec<f64>,
    min_density: i64,
    max_density: i64,
    shifts: Vec<i64>,
}

impl GaussShift {
    /// Build the shift table for a `width` x `height` image.
    ///
    /// When fewer than two samples exist, or all samples coincide, the
    /// density is undefined and every column gets a zero shift.
    pub fn new(width: u32, height: u32) -> TransformResult<Self> {
        if width == 0 || height == 0 {
            return Err(TransformError::InvalidParameters(format!(
                "cannot build gaussian shift for {width}x{height} image"
            )));
        }

        let samples = sample_positions(width, width as usize - 1);
        let density = scaled_density(&samples);

        let (min_density, max_density, shifts) = match &density {
            Some(pdf) => {
                let min = pdf.iter().copied().fold(f64::INFINITY, f64::min).ceil() as i64;
                let max = pdf.iter().copied().fold(f64::NEG_INFINITY, f64::max).ceil() as i64;
                let last = pdf.len() - 1;
                let shifts = (0..width as usize)
                    .map(|j| {
                        let sample = if j == 0 { last } else { j - 1 };
                        pdf[sample].ceil() as i64 - max + min
                    })
                    .collect();
                (min, max, shifts)
            }
            None => (0, 0, vec![0; width as usize]),
        };

        Ok(Self {
            width,
            height,
            density: density.unwrap_or_default(),
            min_density,
            max_density,
            shifts,
        })
    }

    /// Density samples; empty when the distribution is degenerate.
    pub fn density(&self) -> &[f64] {
        &self.density
    }

    /// Ceiling of the smallest density sample.
    pub fn min_density(&self) -> i64 {
        self.min_density
    }

    /// Ceiling of the largest density sample.
    pub fn max_density(&self) -> i64 {
        self.max_density
    }

    /// Vertical shift applied to column `x`.
    pub fn column_shift(&self, x: u32) -> i64 {
        self.shifts[x as usize]
    }
}

impl CoordinateMapper for GaussShift {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[inline]
    fn source(&self, x: u32, y: u32) -> (u32, u32) {
        (x, wrap(y, self.shifts[x as usize], self.height))
    }
}

/// Apply the Gaussian vertical shift to an image.
pub fn gauss_shift(pix: &Pix) -> TransformResult<Pix> {
    let mapper = GaussShift::new(pix.width(), pix.height())?;
    log::debug!(
        "gauss shift: {} samples, density range [{}, {}]",
        mapper.density.len(),
        mapper.min_density,
        mapper.max_density
    );
    remap(pix, &mapper)
}

/// `count` evenly spaced values over `[0, stop]` with the endpoint included,
/// truncated to integers.
fn sample_positions(stop: u32, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => {
            let stop = f64::from(stop);
            let step = stop / (count - 1) as f64;
            (0..count)
                .map(|k| {
                    if k == count - 1 {
                        stop
                    } else {
                        (k as f64 * step).trunc()
                    }
                })
                .collect()
        }
    }
}

/// `pi * sd * exp(-0.5 * ((x - mean) / sd)^2)` over the samples, using the
/// population standard deviation. `None` when it is undefined.
fn scaled_density(samples: &[f64]) -> Option<Vec<f64>> {
    if samples.len() < 2 {
        return None;
    }
    let n = samples.len() as f64;
    let mean = samples.iter().sum::<f64>() / n;
    let var = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
    let sd = var.sqrt();
    if sd == 0.0 || !sd.is_finite() {
        return None;
    }
    Some(
        samples
            .iter()
            .map(|x| PI * sd * (-0.5 * ((x - mean) / sd).powi(2)).exp())
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_positions() {
        assert_eq!(sample_positions(10, 0), Vec::<f64>::new());
        assert_eq!(sample_positions(10, 1), vec![0.0]);
        assert_eq!(sample_positions(3, 2), vec![0.0, 3.0]);
        assert_eq!(sample_positions(10, 4), vec![0.0, 3.0, 6.0, 10.0]);
    }

    #[test]
    fn test_density_peaks_in_middle() {
        let samples = sample_positions(100, 99);
        let pdf = scaled_density(&samples).unwrap();
        let peak = pdf
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(i, _)| i)
            .unwrap();
        assert!((45..=53).contains(&peak), "peak at {peak}");
        assert!(pdf[0] < pdf[peak]);
        assert!(pdf[98] < pdf[peak]);
    }

    #[test]
    fn test_degenerate_widths_are_identity() {
        for w in [1, 2] {
            let g = GaussShift::new(w, 5).unwrap();
            assert!(g.density().is_empty());
            for x in 0..w {
                assert_eq!(g.column_shift(x), 0);
                for y in 0..5 {
                    assert_eq!(g.source(x, y), (x, y));
                }
            }
        }
    }

    #[test]
    fn test_width_three_shift() {
        // samples [0, 3]: both densities are pi*1.5*exp(-0.5), ceil 3
        let g = GaussShift::new(3, 7).unwrap();
        assert_eq!(g.min_density(), 3);
        assert_eq!(g.max_density(), 3);
        for x in 0..3 {
            assert_eq!(g.column_shift(x), 3);
        }
        assert_eq!(g.source(1, 5), (1, 1));
    }

    /// Shifts for width 7, worked out by hand from the truncated samples
    /// `[0, 1, 2, 4, 5, 7]`.
    const WIDTH_7_SHIFTS: [i64; 7] = [-2, -1, 1, 2, 3, 1, -2];

    const WIDTH_50_SHIFTS: [i64; 50] = [
        -24, -23, -22, -21, -19, -17, -16, -14, -12, -10, -8, -7, -5, -3, -1, 1, 3, 4, 6, 7, 8,
        9, 10, 11, 11, 11, 11, 11, 10, 9, 8, 7, 6, 4, 3, 1, -1, -3, -4, -6, -8, -10, -12, -14,
        -16, -17, -19, -20, -22, -24,
    ];

    #[test]
    fn test_width_seven_table() {
        let g = GaussShift::new(7, 10).unwrap();
        let shifts: Vec<i64> = (0..7).map(|x| g.column_shift(x)).collect();
        assert_eq!(shifts, WIDTH_7_SHIFTS);
    }

    #[test]
    fn test_width_fifty_table() {
        let g = GaussShift::new(50, 10).unwrap();
        let shifts: Vec<i64> = (0..50).map(|x| g.column_shift(x)).collect();
        assert_eq!(shifts, WIDTH_50_SHIFTS);
        // column 0 reads the last sample, so it repeats column 49
        assert_eq!(shifts[0], shifts[49]);
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(GaussShift::new(0, 5).is_err());
        assert!(GaussShift::new(5, 0).is_err());
    }
}
