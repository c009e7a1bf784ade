//! pixwarp-transform - Pixel remapping effects
//!
//! Every effect is an inverse [`CoordinateMapper`] applied by the
//! [`remap`] resampler:
//!
//! - Gaussian vertical shift (bell-shaped column roll)
//! - Slope row shift (diagonal shear with wraparound)
//! - Sine-wave displacement on both axes, with optional edge crop
//!
//! The crate also provides the symmetric crop used after the sine wave and
//! aspect-preserving preview scaling.
//!
//! # Example
//!
//! ```
//! use pixwarp_core::Pix;
//! use pixwarp_transform::{WaveParams, sine_wave, slope_shift};
//!
//! let pix = Pix::new(64, 48).unwrap();
//! let sheared = slope_shift(&pix).unwrap();
//! assert_eq!(sheared.width(), 64);
//!
//! let waved = sine_wave(&pix, &WaveParams::identity(), true).unwrap();
//! assert!(waved.equals(&pix));
//! ```

pub mod crop;
mod error;
pub mod gauss;
pub mod mapper;
pub mod resample;
pub mod scale;
pub mod slope;
pub mod wave;

pub use crop::crop_margin;
pub use error::{TransformError, TransformResult};
pub use gauss::{GaussShift, gauss_shift};
pub use mapper::CoordinateMapper;
pub use resample::remap;
pub use scale::{scale_to_height, scale_to_size};
pub use slope::{SlopeShift, slope_shift};
pub use wave::{SineWave, WaveAxis, WaveParams, sine_wave};
