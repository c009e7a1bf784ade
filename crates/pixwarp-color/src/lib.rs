//! pixwarp-color - Palette reduction for pixwarp
//!
//! - Median cut quantization down to a handful of colors
//! - Positional palette substitution (first-seen color takes the first
//!   target entry, and so on)
//! - The six-color pop-art palette and the [`pop_art`] effect combining
//!   both steps
//!
//! # Example
//!
//! ```
//! use pixwarp_color::{PopArtOptions, pop_art};
//! use pixwarp_core::{Pix, color};
//!
//! let pix = Pix::new_filled(8, 8, color::compose_rgb(40, 80, 120)).unwrap();
//! let out = pop_art(&pix, &PopArtOptions::default()).unwrap();
//! assert_eq!(out.get_pixel(0, 0), Some(pixwarp_color::palette::RED));
//! ```

mod error;
pub mod palette;
pub mod quantize;

pub use error::{ColorError, ColorResult};
pub use palette::{
    PaletteMap, ScanOrder, discover_colors, incidence_palette, pop_art_palette, substitute_palette,
};
pub use quantize::{MedianCutOptions, median_cut_quant, median_cut_quant_simple};

use pixwarp_core::Pix;

/// Options for the pop-art effect
#[derive(Debug, Clone)]
pub struct PopArtOptions {
    /// Number of colors the quantizer keeps
    pub colors: u32,
    /// Target palette, at least `colors` entries
    pub palette: Vec<u32>,
    /// Traversal used to order discovered colors
    pub scan_order: ScanOrder,
}

impl Default for PopArtOptions {
    fn default() -> Self {
        Self {
            colors: 6,
            palette: pop_art_palette(),
            scan_order: ScanOrder::RowMajor,
        }
    }
}

/// Quantize `pix` to `colors` colors and recolor it with the palette.
pub fn pop_art(pix: &Pix, options: &PopArtOptions) -> ColorResult<Pix> {
    if options.palette.len() < options.colors as usize {
        return Err(ColorError::InvalidParameters(format!(
            "palette has {} entries, fewer than the {} colors requested",
            options.palette.len(),
            options.colors
        )));
    }
    let quantized = median_cut_quant_simple(pix, options.colors)?;
    substitute_palette(&quantized, &options.palette, options.scan_order)
}
