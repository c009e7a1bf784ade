//! Palette substitution
//!
//! A reduced-color image is recolored with a fixed target palette: each
//! distinct color, in the order it is first met while scanning, takes the
//! target entry at the same position.
//!
//! Substituting twice gives the same image as substituting once only when
//! the target palette equals the discovered colors. With any other target,
//! the second pass rediscovers the recolored image and can move colors
//! again: the pop-art palette turns the green of a first pass into red.
//!
//! # Pop-art palette
//!
//! The six-color pop-art look draws its targets from six base colors
//! through an incidence table of `(slot, base)` pairs, both 1-based.
//! The default table sends slots 1..=6 to red, red, green, blue, green,
//! blue.

use crate::{ColorError, ColorResult};
use pixwarp_core::{Pix, color};
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

pub const RED: u32 = 0xff00_00ff;
pub const GREEN: u32 = 0x00ff_00ff;
pub const BLUE: u32 = 0x0000_ffff;
pub const YELLOW: u32 = 0xffff_00ff;
pub const MAGENTA: u32 = 0xff00_ffff;
pub const CYAN: u32 = 0x00ff_ffff;

/// Base colors addressed by the incidence table.
pub const POP_ART_BASE: [u32; 6] = [RED, GREEN, BLUE, YELLOW, MAGENTA, CYAN];

/// `(slot, base color)` pairs, 1-based.
pub const POP_ART_INCIDENCE: [(usize, usize); 6] = [(1, 1), (2, 1), (3, 2), (4, 3), (5, 2), (6, 3)];

/// Pixel traversal order used when discovering colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanOrder {
    /// Left to right within a row, rows top to bottom
    #[default]
    RowMajor,
    /// Top to bottom within a column, columns left to right
    ColumnMajor,
}

impl ScanOrder {
    fn pixels<'a>(self, pix: &'a Pix) -> Box<dyn Iterator<Item = u32> + 'a> {
        match self {
            ScanOrder::RowMajor => Box::new(pix.data().iter().copied()),
            ScanOrder::ColumnMajor => {
                let (w, h) = (pix.width(), pix.height());
                Box::new(
                    (0..w).flat_map(move |x| (0..h).map(move |y| pix.get_pixel_unchecked(x, y))),
                )
            }
        }
    }
}

/// Color with the alpha byte normalized, so equal RGB compares equal.
#[inline]
fn rgb_key(pixel: u32) -> u32 {
    let (r, g, b) = color::extract_rgb(pixel);
    color::compose_rgb(r, g, b)
}

/// Distinct colors of `pix` in first-seen order.
pub fn discover_colors(pix: &Pix, order: ScanOrder) -> Vec<u32> {
    let mut seen = HashSet::new();
    let mut colors = Vec::new();
    for p in order.pixels(pix) {
        let key = rgb_key(p);
        if seen.insert(key) {
            colors.push(key);
        }
    }
    colors
}

/// Mapping from discovered colors to target palette entries.
#[derive(Debug, Clone)]
pub struct PaletteMap {
    discovered: Vec<u32>,
    lookup: HashMap<u32, u32>,
}

impl PaletteMap {
    /// Scan `pix` and pair each distinct color with `target[index]`.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::PaletteOverflow`] if the image holds more
    /// distinct colors than `target` has entries.
    pub fn build(pix: &Pix, target: &[u32], order: ScanOrder) -> ColorResult<Self> {
        if target.is_empty() {
            return Err(ColorError::InvalidParameters("target palette is empty".into()));
        }
        let discovered = discover_colors(pix, order);
        if discovered.len() > target.len() {
            return Err(ColorError::PaletteOverflow {
                found: discovered.len(),
                capacity: target.len(),
            });
        }
        let lookup = discovered
            .iter()
            .zip(target)
            .map(|(&from, &to)| (from, rgb_key(to)))
            .collect();
        Ok(Self { discovered, lookup })
    }

    /// Colors in discovery order.
    pub fn discovered(&self) -> &[u32] {
        &self.discovered
    }

    /// Target color for `pixel`, if it was seen during discovery.
    pub fn get(&self, pixel: u32) -> Option<u32> {
        self.lookup.get(&rgb_key(pixel)).copied()
    }

    /// Recolor `pix`, which must contain only discovered colors.
    pub fn apply(&self, pix: &Pix) -> ColorResult<Pix> {
        let mut out = pix.create_template().into_mut();
        for (dst, &src) in out.data_mut().iter_mut().zip(pix.data()) {
            *dst = self.get(src).ok_or_else(|| {
                let (r, g, b) = color::extract_rgb(src);
                ColorError::InvalidParameters(format!("color ({r}, {g}, {b}) was not discovered"))
            })?;
        }
        Ok(out.into())
    }
}

/// Replace every color of `pix` with its positional target palette entry.
pub fn substitute_palette(pix: &Pix, target: &[u32], order: ScanOrder) -> ColorResult<Pix> {
    let map = PaletteMap::build(pix, target, order)?;
    let discovered: Vec<(u8, u8, u8)> =
        map.discovered.iter().map(|&c| color::extract_rgb(c)).collect();
    log::debug!(
        "palette: discovered {discovered:?} for {} targets",
        target.len()
    );
    map.apply(pix)
}

/// Expand an incidence table into a palette.
///
/// Each `(slot, base)` pair, both 1-based, puts `base_colors[base - 1]`
/// into position `slot - 1`. Every slot from 1 to the table length must
/// be assigned exactly once.
pub fn incidence_palette(base_colors: &[u32], table: &[(usize, usize)]) -> ColorResult<Vec<u32>> {
    let mut palette: Vec<Option<u32>> = vec![None; table.len()];
    for &(slot, base) in table {
        let color = base
            .checked_sub(1)
            .and_then(|i| base_colors.get(i))
            .ok_or_else(|| ColorError::InvalidParameters(format!("no base color {base}")))?;
        let entry = slot
            .checked_sub(1)
            .and_then(|i| palette.get_mut(i))
            .ok_or_else(|| ColorError::InvalidParameters(format!("slot {slot} out of range")))?;
        if entry.replace(*color).is_some() {
            return Err(ColorError::InvalidParameters(format!("slot {slot} assigned twice")));
        }
    }
    // every slot was filled once, since the table has one pair per slot
    Ok(palette.into_iter().flatten().collect())
}

static POP_ART_PALETTE: LazyLock<Vec<u32>> = LazyLock::new(|| {
    incidence_palette(&POP_ART_BASE, &POP_ART_INCIDENCE)
        .expect("pop-art incidence table assigns slots 1..=6 once each")
});

/// The six-entry pop-art palette, expanded from [`POP_ART_INCIDENCE`].
pub fn pop_art_palette() -> Vec<u32> {
    POP_ART_PALETTE.clone()
}
