//! Median cut quantization
//!
//! Reduces an RGB image to at most `max_colors` colors. The color
//! histogram is split into boxes: the box with the largest
//! `population * volume` is cut at its weighted median along its widest
//! channel, until enough boxes exist or none can be cut. Every pixel then
//! takes the mean color of its box.
//!
//! The output is an ordinary RGB image, ready for palette substitution.

use crate::{ColorError, ColorResult};
use pixwarp_core::{Pix, color};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

/// Options for median cut quantization
#[derive(Debug, Clone)]
pub struct MedianCutOptions {
    /// Maximum number of colors in the output
    pub max_colors: u32,
    /// Boxes with this many pixels or fewer are not split
    pub min_box_pixels: u32,
}

impl Default for MedianCutOptions {
    fn default() -> Self {
        Self {
            max_colors: 6,
            min_box_pixels: 1,
        }
    }
}

/// Quantize `pix` with the median cut algorithm.
pub fn median_cut_quant(pix: &Pix, options: &MedianCutOptions) -> ColorResult<Pix> {
    if options.max_colors == 0 || options.max_colors > 256 {
        return Err(ColorError::InvalidParameters(
            "max_colors must be between 1 and 256".to_string(),
        ));
    }

    let histogram = histogram(pix);
    if histogram.is_empty() {
        return Err(ColorError::EmptyImage);
    }

    let mut heap = BinaryHeap::new();
    heap.push(ColorBox::new(histogram));
    let mut done = Vec::new();

    while heap.len() + done.len() < options.max_colors as usize {
        let Some(cbox) = heap.pop() else { break };
        if cbox.population <= u64::from(options.min_box_pixels) {
            done.push(cbox);
            continue;
        }
        match cbox.split() {
            Ok((a, b)) => {
                heap.push(a);
                heap.push(b);
            }
            Err(whole) => done.push(whole),
        }
    }
    done.extend(heap);

    let mut lookup = HashMap::new();
    for cbox in &done {
        let mean = cbox.mean_color();
        for &(c, _) in &cbox.colors {
            lookup.insert(c, mean);
        }
    }
    log::debug!(
        "median cut: {} boxes from {} distinct colors",
        done.len(),
        lookup.len()
    );

    let mut out = pix.create_template().into_mut();
    for (dst, &src) in out.data_mut().iter_mut().zip(pix.data()) {
        *dst = lookup.get(&rgb(src)).copied().unwrap_or(src);
    }
    Ok(out.into())
}

/// Median cut to `max_colors` with default options otherwise.
pub fn median_cut_quant_simple(pix: &Pix, max_colors: u32) -> ColorResult<Pix> {
    median_cut_quant(
        pix,
        &MedianCutOptions {
            max_colors,
            ..Default::default()
        },
    )
}

/// Pixel with alpha forced to opaque.
#[inline]
fn rgb(pixel: u32) -> u32 {
    let (r, g, b) = color::extract_rgb(pixel);
    color::compose_rgb(r, g, b)
}

fn histogram(pix: &Pix) -> Vec<(u32, u64)> {
    let mut counts: HashMap<u32, u64> = HashMap::new();
    for &p in pix.data() {
        *counts.entry(rgb(p)).or_insert(0) += 1;
    }
    let mut colors: Vec<(u32, u64)> = counts.into_iter().collect();
    // HashMap order is random; sort for reproducible splits
    colors.sort_unstable();
    colors
}

fn channel(c: u32, ch: usize) -> u8 {
    color::to_array(c)[ch]
}

/// A box in RGB space holding histogram entries
#[derive(Debug, Clone)]
struct ColorBox {
    colors: Vec<(u32, u64)>,
    population: u64,
    min: [u8; 3],
    max: [u8; 3],
}

impl ColorBox {
    fn new(colors: Vec<(u32, u64)>) -> Self {
        let mut min = [255u8; 3];
        let mut max = [0u8; 3];
        let mut population = 0;
        for &(c, n) in &colors {
            let rgb = color::to_array(c);
            for ch in 0..3 {
                min[ch] = min[ch].min(rgb[ch]);
                max[ch] = max[ch].max(rgb[ch]);
            }
            population += n;
        }
        Self {
            colors,
            population,
            min,
            max,
        }
    }

    fn volume(&self) -> u64 {
        (0..3)
            .map(|ch| u64::from(self.max[ch] - self.min[ch]) + 1)
            .product()
    }

    fn priority(&self) -> u64 {
        self.population * self.volume()
    }

    fn widest_channel(&self) -> usize {
        let range = |ch: usize| self.max[ch] - self.min[ch];
        if range(0) >= range(1) && range(0) >= range(2) {
            0
        } else if range(1) >= range(2) {
            1
        } else {
            2
        }
    }

    /// Cut at the weighted median of the widest channel.
    fn split(mut self) -> Result<(ColorBox, ColorBox), ColorBox> {
        if self.colors.len() < 2 {
            return Err(self);
        }
        let ch = self.widest_channel();
        self.colors.sort_by_key(|&(c, _)| (channel(c, ch), c));

        let half = self.population / 2;
        let mut acc = 0;
        let mut cut = self.colors.len() - 1;
        for (i, &(_, n)) in self.colors.iter().enumerate() {
            acc += n;
            if acc >= half {
                cut = i + 1;
                break;
            }
        }
        let cut = cut.clamp(1, self.colors.len() - 1);

        let upper = self.colors.split_off(cut);
        Ok((ColorBox::new(self.colors), ColorBox::new(upper)))
    }

    fn mean_color(&self) -> u32 {
        let mut sum = [0u64; 3];
        for &(c, n) in &self.colors {
            let rgb = color::to_array(c);
            for ch in 0..3 {
                sum[ch] += u64::from(rgb[ch]) * n;
            }
        }
        let pop = self.population.max(1);
        color::from_array(sum.map(|s| (s / pop) as u8))
    }
}

impl PartialEq for ColorBox {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ColorBox {}

impl Ord for ColorBox {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority()
            .cmp(&other.priority())
            .then_with(|| other.colors.first().cmp(&self.colors.first()))
    }
}

impl PartialOrd for ColorBox {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
