//! Coordinate mappers
//!
//! Every effect in this crate is an inverse mapping: for each destination
//! pixel `(x, y)` the mapper names the source pixel whose value is copied
//! there. Mappers are built for one image shape and precompute whatever
//! per-row or per-column tables they need, so [`CoordinateMapper::source`]
//! stays cheap inside the resampling loop.

/// Inverse pixel mapping for a fixed image shape.
///
/// `x` is the column and `y` the row. The returned source coordinate must
/// lie inside `0..width` by `0..height`; the resampler relies on it.
pub trait CoordinateMapper: Sync {
    /// `(width, height)` of the image this mapper was built for.
    fn dimensions(&self) -> (u32, u32);

    /// Source `(x, y)` for destination pixel `(x, y)`.
    fn source(&self, x: u32, y: u32) -> (u32, u32);
}

/// Adds `offset` to `index` modulo `len`, for any sign or size of offset.
///
/// `len` must be nonzero.
#[inline]
pub(crate) fn wrap(index: u32, offset: i64, len: u32) -> u32 {
    let len = i64::from(len);
    let reduced = offset.rem_euclid(len);
    ((i64::from(index) + reduced) % len) as u32
}

/// Degrees to radians, computed as `deg / 180 * pi`.
#[inline]
pub(crate) fn radians(deg: f64) -> f64 {
    deg / 180.0 * std::f64::consts::PI
}
