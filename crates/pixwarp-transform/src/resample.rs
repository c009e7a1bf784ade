//! Image resampler
//!
//! Walks every destination pixel, asks a [`CoordinateMapper`] for the
//! source coordinate and copies that pixel. The output is a new image of
//! the same shape; the input is never modified.
//!
//! With the `parallel` feature, destination rows are distributed over the
//! rayon thread pool. Every row is written by exactly one worker, so the
//! result is identical to the sequential pass.

use crate::mapper::CoordinateMapper;
use crate::{TransformError, TransformResult};
use pixwarp_core::Pix;

/// Apply `mapper` to every pixel of `pix`.
///
/// # Errors
///
/// Returns [`TransformError::DimensionMismatch`] if the mapper was built
/// for a different image shape.
pub fn remap<M>(pix: &Pix, mapper: &M) -> TransformResult<Pix>
where
    M: CoordinateMapper + ?Sized,
{
    let image = (pix.width(), pix.height());
    let expected = mapper.dimensions();
    if expected != image {
        return Err(TransformError::DimensionMismatch {
            mapper: expected,
            image,
        });
    }

    let mut out = pix.create_template().into_mut();
    fill_rows(pix, mapper, out.data_mut());
    Ok(out.into())
}

#[cfg(not(feature = "parallel"))]
fn fill_rows<M>(pix: &Pix, mapper: &M, dst: &mut [u32])
where
    M: CoordinateMapper + ?Sized,
{
    let w = pix.width() as usize;
    for (y, row) in dst.chunks_exact_mut(w).enumerate() {
        fill_row(pix, mapper, y as u32, row);
    }
}

#[cfg(feature = "parallel")]
fn fill_rows<M>(pix: &Pix, mapper: &M, dst: &mut [u32])
where
    M: CoordinateMapper + ?Sized,
{
    use rayon::prelude::*;

    let w = pix.width() as usize;
    dst.par_chunks_exact_mut(w)
        .enumerate()
        .for_each(|(y, row)| fill_row(pix, mapper, y as u32, row));
}

#[inline]
fn fill_row<M>(pix: &Pix, mapper: &M, y: u32, row: &mut [u32])
where
    M: CoordinateMapper + ?Sized,
{
    for (x, dst) in row.iter_mut().enumerate() {
        let (sx, sy) = mapper.source(x as u32, y);
        *dst = pix.get_pixel_unchecked(sx, sy);
    }
}
