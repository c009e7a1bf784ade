//! Sine-wave displacement
//!
//! Two independent sinusoids displace the image. The horizontal offset of
//! row `i` is `amplitude_x * sin(period_x * (rad(i) + phase_x)) + shift_x`;
//! the vertical offset of column `j` is the same expression over `rad(j)`
//! with the `y` parameters. Offsets are truncated toward zero and wrap
//! around the image edges.
//!
//! Wrapped pixels along the edges can be removed with a symmetric crop
//! whose margin is the largest positive offset of either axis.

use crate::crop::crop_margin;
use crate::mapper::{CoordinateMapper, radians, wrap};
use crate::resample::remap;
use crate::{TransformError, TransformResult};
use pixwarp_core::Pix;

/// Parameters of one sinusoid.
///
/// `phase` is in radians; the index it is added to is converted from
/// degrees, so one pixel counts as one degree.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WaveAxis {
    pub amplitude: f64,
    pub period: f64,
    pub phase: f64,
    pub shift: f64,
}

impl WaveAxis {
    /// All-zero axis; produces no displacement.
    pub const ZERO: WaveAxis = WaveAxis {
        amplitude: 0.0,
        period: 0.0,
        phase: 0.0,
        shift: 0.0,
    };

    pub fn new(amplitude: f64, period: f64, phase: f64, shift: f64) -> Self {
        Self {
            amplitude,
            period,
            phase,
            shift,
        }
    }

    /// Truncated offset at pixel index `index`.
    pub fn offset(&self, index: u32) -> i64 {
        let alpha = radians(f64::from(index));
        let value = self.amplitude * (self.period * (alpha + self.phase)).sin() + self.shift;
        // `as` saturates and maps NaN to zero
        value.trunc() as i64
    }

    fn is_finite(&self) -> bool {
        self.amplitude.is_finite()
            && self.period.is_finite()
            && self.phase.is_finite()
            && self.shift.is_finite()
    }
}

/// Horizontal (`x`) and vertical (`y`) sinusoids.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveParams {
    pub x: WaveAxis,
    pub y: WaveAxis,
}

impl WaveParams {
    /// No displacement on either axis.
    pub fn identity() -> Self {
        Self {
            x: WaveAxis::ZERO,
            y: WaveAxis::ZERO,
        }
    }

    fn validate(&self) -> TransformResult<()> {
        if self.x.is_finite() && self.y.is_finite() {
            Ok(())
        } else {
            Err(TransformError::InvalidParameters(format!(
                "wave parameters must be finite: {self:?}"
            )))
        }
    }
}

impl Default for WaveParams {
    /// Vertical wave of amplitude 20 and period 1, no horizontal motion.
    fn default() -> Self {
        Self {
            x: WaveAxis::ZERO,
            y: WaveAxis::new(20.0, 1.0, 0.0, 0.0),
        }
    }
}

/// Inverse mapping for the sine-wave displacement.
#[derive(Debug, Clone)]
pub struct SineWave {
    width: u32,
    height: u32,
    /// Horizontal offset per row.
    row_offsets: Vec<i64>,
    /// Vertical offset per column.
    col_offsets: Vec<i64>,
}

impl SineWave {
    pub fn new(width: u32, height: u32, params: &WaveParams) -> TransformResult<Self> {
        if width == 0 || height == 0 {
            return Err(TransformError::InvalidParameters(format!(
                "cannot build sine wave for {width}x{height} image"
            )));
        }
        params.validate()?;
        Ok(Self {
            width,
            height,
            row_offsets: (0..height).map(|i| params.x.offset(i)).collect(),
            col_offsets: (0..width).map(|j| params.y.offset(j)).collect(),
        })
    }

    /// Horizontal offset applied to row `y`.
    pub fn row_offset(&self, y: u32) -> i64 {
        self.row_offsets[y as usize]
    }

    /// Vertical offset applied to column `x`.
    pub fn column_offset(&self, x: u32) -> i64 {
        self.col_offsets[x as usize]
    }

    /// Largest positive offset over the whole grid, or 0.
    pub fn border_size(&self) -> u32 {
        let max = self
            .row_offsets
            .iter()
            .chain(&self.col_offsets)
            .copied()
            .max()
            .unwrap_or(0);
        max.clamp(0, i64::from(u32::MAX)) as u32
    }
}

impl CoordinateMapper for SineWave {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[inline]
    fn source(&self, x: u32, y: u32) -> (u32, u32) {
        (
            wrap(x, self.row_offsets[y as usize], self.width),
            wrap(y, self.col_offsets[x as usize], self.height),
        )
    }
}

/// Apply the sine-wave displacement, optionally cropping the wrapped edges.
///
/// # Errors
///
/// Returns [`TransformError::CropTooLarge`] when `crop` is set and the
/// margin would leave no pixels.
pub fn sine_wave(pix: &Pix, params: &WaveParams, crop: bool) -> TransformResult<Pix> {
    let mapper = SineWave::new(pix.width(), pix.height(), params)?;
    let margin = mapper.border_size();
    log::debug!("sine wave: {params:?}, crop margin {margin}");

    // Check the crop before resampling so a bad configuration fails fast.
    if crop {
        check_margin(margin, pix.width(), pix.height())?;
    }
    let out = remap(pix, &mapper)?;
    if crop { crop_margin(&out, margin) } else { Ok(out) }
}

fn check_margin(margin: u32, width: u32, height: u32) -> TransformResult<()> {
    let twice = 2 * u64::from(margin);
    if margin > 0 && (twice >= u64::from(width) || twice >= u64::from(height)) {
        return Err(TransformError::CropTooLarge {
            margin,
            width,
            height,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_axis_offsets() {
        for i in [0, 1, 90, 179, 1000] {
            assert_eq!(WaveAxis::ZERO.offset(i), 0);
        }
    }

    #[test]
    fn test_offset_truncates_toward_zero() {
        // sin(270 deg) = -1: 2.5 * -1 = -2.5 truncates to -2
        let axis = WaveAxis::new(2.5, 1.0, 0.0, 0.0);
        assert_eq!(axis.offset(90), 2);
        assert_eq!(axis.offset(270), -2);
        assert_eq!(axis.offset(0), 0);
    }

    #[test]
    fn test_shift_only() {
        let axis = WaveAxis::new(0.0, 0.0, 0.0, 3.7);
        assert_eq!(axis.offset(0), 3);
        assert_eq!(axis.offset(55), 3);
    }

    #[test]
    fn test_axis_pairing() {
        // x sinusoid follows the row, y sinusoid follows the column
        let params = WaveParams {
            x: WaveAxis::new(0.0, 0.0, 0.0, 1.0),
            y: WaveAxis::new(0.0, 0.0, 0.0, 2.0),
        };
        let w = SineWave::new(5, 7, &params).unwrap();
        assert_eq!(w.source(0, 0), (1, 2));
        assert_eq!(w.source(4, 6), (0, 1));
    }

    #[test]
    fn test_border_size_ignores_negative() {
        let params = WaveParams {
            x: WaveAxis::new(0.0, 0.0, 0.0, -4.0),
            y: WaveAxis::ZERO,
        };
        let w = SineWave::new(8, 8, &params).unwrap();
        assert_eq!(w.border_size(), 0);
    }

    #[test]
    fn test_default_params() {
        let p = WaveParams::default();
        assert_eq!(p.x, WaveAxis::ZERO);
        assert_eq!(p.y.amplitude, 20.0);
        assert_eq!(p.y.period, 1.0);
    }

    #[test]
    fn test_non_finite_rejected() {
        let params = WaveParams {
            x: WaveAxis::new(f64::NAN, 1.0, 0.0, 0.0),
            y: WaveAxis::ZERO,
        };
        assert!(SineWave::new(4, 4, &params).is_err());
    }

    #[test]
    fn test_check_margin() {
        assert!(check_margin(0, 1, 1).is_ok());
        assert!(check_margin(2, 5, 5).is_ok());
        assert!(matches!(
            check_margin(3, 6, 10),
            Err(TransformError::CropTooLarge {
                margin: 3,
                width: 6,
                height: 10
            })
        ));
    }
}
