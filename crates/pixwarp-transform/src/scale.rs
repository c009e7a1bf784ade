//! Preview scaling
//!
//! Scales are computed per destination pixel from the source rectangle it
//! covers. When shrinking, the rectangle spans several source pixels and
//! their channels are averaged (area mapping). When enlarging, it spans a
//! single pixel, which reduces to nearest-neighbour sampling.

use crate::{TransformError, TransformResult};
use pixwarp_core::{Pix, color};

/// Scale to `height`, keeping the aspect ratio.
///
/// The width is `trunc(width * height / original_height)`, at least 1.
pub fn scale_to_height(pix: &Pix, height: u32) -> TransformResult<Pix> {
    if height == 0 {
        return Err(TransformError::InvalidParameters(
            "preview height must be positive".into(),
        ));
    }
    let width = f64::from(pix.width()) * f64::from(height) / f64::from(pix.height());
    let width = (width.trunc() as u32).max(1);
    scale_to_size(pix, width, height)
}

/// Scale to exactly `width` x `height`.
pub fn scale_to_size(pix: &Pix, width: u32, height: u32) -> TransformResult<Pix> {
    if width == 0 || height == 0 {
        return Err(TransformError::InvalidParameters(format!(
            "cannot scale to {width}x{height}"
        )));
    }
    let (ws, hs) = (pix.width(), pix.height());
    if (ws, hs) == (width, height) {
        return Ok(pix.deep_clone());
    }
    log::trace!("scale {ws}x{hs} -> {width}x{height}");

    let cols: Vec<(u32, u32)> = (0..width).map(|x| span(x, ws, width)).collect();
    let mut out = Pix::new(width, height)?.into_mut();
    for y in 0..height {
        let (y0, y1) = span(y, hs, height);
        let row = out.row_data_mut(y);
        for (dst, &(x0, x1)) in row.iter_mut().zip(&cols) {
            *dst = average(pix, x0, x1, y0, y1);
        }
    }
    Ok(out.into())
}

/// Source range `[start, end)` covered by destination index `i`.
fn span(i: u32, src: u32, dst: u32) -> (u32, u32) {
    let (i, src, dst) = (u64::from(i), u64::from(src), u64::from(dst));
    let start = i * src / dst;
    let end = ((i + 1) * src / dst).max(start + 1).min(src);
    (start as u32, end as u32)
}

fn average(pix: &Pix, x0: u32, x1: u32, y0: u32, y1: u32) -> u32 {
    if x1 - x0 == 1 && y1 - y0 == 1 {
        return pix.get_pixel_unchecked(x0, y0);
    }
    let (mut r, mut g, mut b) = (0u64, 0u64, 0u64);
    for y in y0..y1 {
        for &p in &pix.row_data(y)[x0 as usize..x1 as usize] {
            let (pr, pg, pb) = color::extract_rgb(p);
            r += u64::from(pr);
            g += u64::from(pg);
            b += u64::from(pb);
        }
    }
    let n = u64::from(x1 - x0) * u64::from(y1 - y0);
    let avg = |sum: u64| ((sum + n / 2) / n) as u8;
    color::compose_rgb(avg(r), avg(g), avg(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span() {
        assert_eq!(span(0, 10, 5), (0, 2));
        assert_eq!(span(4, 10, 5), (8, 10));
        assert_eq!(span(0, 2, 4), (0, 1));
        assert_eq!(span(3, 2, 4), (1, 2));
    }

    #[test]
    fn test_scale_to_height_dimensions() {
        let pix = Pix::new(1200, 900).unwrap();
        let out = scale_to_height(&pix, 600).unwrap();
        assert_eq!((out.width(), out.height()), (800, 600));

        let pix = Pix::new(10, 3).unwrap();
        let out = scale_to_height(&pix, 600).unwrap();
        assert_eq!((out.width(), out.height()), (2000, 600));
    }

    #[test]
    fn test_scale_to_height_truncates_width() {
        // 7 * 2 / 3 = 4.67
        let pix = Pix::new(7, 3).unwrap();
        let out = scale_to_height(&pix, 2).unwrap();
        assert_eq!(out.width(), 4);
    }

    #[test]
    fn test_shrink_averages() {
        let white = color::WHITE;
        let black = color::compose_rgb(0, 0, 0);
        let pix = Pix::from_raw(2, 1, vec![white, black]).unwrap();
        let out = scale_to_size(&pix, 1, 1).unwrap();
        assert_eq!(color::extract_rgb(out.get_pixel(0, 0).unwrap()), (128, 128, 128));
    }

    #[test]
    fn test_enlarge_samples() {
        let a = color::compose_rgb(10, 20, 30);
        let b = color::compose_rgb(40, 50, 60);
        let pix = Pix::from_raw(2, 1, vec![a, b]).unwrap();
        let out = scale_to_size(&pix, 4, 2).unwrap();
        assert_eq!(out.row_data(0), &[a, a, b, b]);
        assert_eq!(out.row_data(1), &[a, a, b, b]);
    }

    #[test]
    fn test_zero_target_rejected() {
        let pix = Pix::new(4, 4).unwrap();
        assert!(scale_to_height(&pix, 0).is_err());
        assert!(scale_to_size(&pix, 0, 3).is_err());
    }
}
