//! Symmetric crop

use crate::{TransformError, TransformResult};
use pixwarp_core::Pix;

/// Remove `margin` pixels from every edge.
///
/// A zero margin returns an unshared copy of the input.
///
/// # Errors
///
/// Returns [`TransformError::CropTooLarge`] if `2 * margin` reaches the
/// width or the height.
pub fn crop_margin(pix: &Pix, margin: u32) -> TransformResult<Pix> {
    let (w, h) = (pix.width(), pix.height());
    if margin == 0 {
        return Ok(pix.deep_clone());
    }
    let twice = 2 * u64::from(margin);
    if twice >= u64::from(w) || twice >= u64::from(h) {
        return Err(TransformError::CropTooLarge {
            margin,
            width: w,
            height: h,
        });
    }
    Ok(pix.remove_border(margin)?)
}
