//! RGB image buffer
//!
//! [`Pix`] is what every pixwarp effect consumes and returns. A pixel is
//! one packed 32-bit RGB word (see [`crate::color`]), stored row by row
//! from the top.
//!
//! # Ownership model
//!
//! A `Pix` is a shared handle: `clone()` only bumps a reference count and
//! never copies pixels. Effects read their input through `&Pix` and build a
//! fresh output. To write pixels, turn a handle into a [`PixMut`] with
//! [`Pix::into_mut`] (which copies only when the data is shared) and turn
//! it back with `Into<Pix>` when done.

mod access;
mod border;
mod clip;
mod compare;

use crate::color;
use crate::error::{Error, Result};
use std::sync::Arc;

/// Container format an image was decoded from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImageFormat {
    /// Built in memory, or not known
    #[default]
    Unknown,
    Jpeg,
    Png,
}

impl ImageFormat {
    /// Canonical extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Unknown => "dat",
            Self::Jpeg => "jpg",
            Self::Png => "png",
        }
    }

    /// Format named by a file extension, ignoring case.
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" | "jpe" | "jfif" => Self::Jpeg,
            "png" => Self::Png,
            _ => Self::Unknown,
        }
    }
}

#[derive(Debug, Clone)]
struct PixData {
    width: u32,
    height: u32,
    informat: ImageFormat,
    /// `width * height` packed words, row-major
    data: Vec<u32>,
}

impl PixData {
    fn with_pixels(width: u32, height: u32, data: Vec<u32>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let needed = width as usize * height as usize;
        if data.len() != needed {
            return Err(Error::InvalidParameter(format!(
                "{}x{} image needs {needed} pixels, got {}",
                width,
                height,
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            informat: ImageFormat::Unknown,
            data,
        })
    }

    #[inline]
    fn row_range(&self, y: u32) -> std::ops::Range<usize> {
        let start = y as usize * self.width as usize;
        start..start + self.width as usize
    }
}

/// Shared, immutable RGB image
///
/// ```
/// use pixwarp_core::Pix;
///
/// let pix = Pix::new(320, 200).unwrap();
/// assert_eq!((pix.width(), pix.height()), (320, 200));
/// ```
#[derive(Debug, Clone)]
pub struct Pix {
    inner: Arc<PixData>,
}

impl Pix {
    /// Black image of the given size.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidDimension`] if either side is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::new_filled(width, height, color::BLACK)
    }

    /// Image with every pixel set to `val`.
    pub fn new_filled(width: u32, height: u32, val: u32) -> Result<Self> {
        let len = width as usize * height as usize;
        Self::from_raw(width, height, vec![val; len])
    }

    /// Take ownership of a row-major pixel vector.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidDimension`] for a zero side,
    /// [`Error::InvalidParameter`] if the length is not `width * height`.
    pub fn from_raw(width: u32, height: u32, data: Vec<u32>) -> Result<Self> {
        Ok(PixData::with_pixels(width, height, data)?.into())
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Format this image was decoded from.
    #[inline]
    pub fn informat(&self) -> ImageFormat {
        self.inner.informat
    }

    /// All pixels, row-major.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.inner.data.len()
    }

    /// Pixels of row `y`. Panics when `y` is out of range.
    #[inline]
    pub fn row_data(&self, y: u32) -> &[u32] {
        &self.inner.data[self.inner.row_range(y)]
    }

    /// How many handles share this image's pixels.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Black image with this image's size and format.
    pub fn create_template(&self) -> Self {
        PixData {
            data: vec![color::BLACK; self.inner.data.len()],
            ..(*self.inner).clone_header()
        }
        .into()
    }

    /// Copy of the pixels that shares nothing with `self`.
    pub fn deep_clone(&self) -> Self {
        (*self.inner).clone().into()
    }

    /// Writable image, or `self` back if another handle shares the data.
    pub fn try_into_mut(self) -> std::result::Result<PixMut, Self> {
        Arc::try_unwrap(self.inner)
            .map(|inner| PixMut { inner })
            .map_err(|inner| Pix { inner })
    }

    /// Writable copy, leaving `self` untouched.
    pub fn to_mut(&self) -> PixMut {
        PixMut {
            inner: (*self.inner).clone(),
        }
    }

    /// Writable image, copying only if the data is shared.
    pub fn into_mut(self) -> PixMut {
        self.try_into_mut().unwrap_or_else(|shared| shared.to_mut())
    }
}

impl PixData {
    fn clone_header(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            informat: self.informat,
            data: Vec::new(),
        }
    }
}

impl From<PixData> for Pix {
    fn from(data: PixData) -> Self {
        Pix {
            inner: Arc::new(data),
        }
    }
}

/// Uniquely owned, writable RGB image
#[derive(Debug)]
pub struct PixMut {
    inner: PixData,
}

impl PixMut {
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    pub fn set_informat(&mut self, format: ImageFormat) {
        self.inner.informat = format;
    }

    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    #[inline]
    pub fn data_mut(&mut self) -> &mut [u32] {
        &mut self.inner.data
    }

    /// Writable pixels of row `y`. Panics when `y` is out of range.
    #[inline]
    pub fn row_data_mut(&mut self, y: u32) -> &mut [u32] {
        let range = self.inner.row_range(y);
        &mut self.inner.data[range]
    }

    pub fn fill(&mut self, val: u32) {
        self.inner.data.fill(val);
    }
}

impl From<PixMut> for Pix {
    fn from(pix_mut: PixMut) -> Self {
        pix_mut.inner.into()
    }
}
