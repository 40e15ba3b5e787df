//! Interleaved BGR(A) pixel buffers.
//!
//! Pixels are stored row-major with no row padding; each pixel occupies
//! `channels` consecutive bytes in blue, green, red(, padding) order. The
//! owned [`BgrImage`] and the borrowed [`BgrImageRef`] both validate the buffer
//! length against their [`Geometry`] on construction.
use super::traits::{ImageView, ImageViewMut};
use crate::error::{EdgeFilterError, Result};
use crate::types::{ChannelCount, Geometry};

/// Byte offsets of the colour channels within one pixel.
pub const BLUE: usize = 0;
pub const GREEN: usize = 1;
pub const RED: usize = 2;

fn check_len(geometry: &Geometry, actual: usize) -> Result<()> {
    let expected = geometry.buffer_len();
    if actual != expected {
        return Err(EdgeFilterError::BufferSize { expected, actual });
    }
    Ok(())
}

/// Owned interleaved pixel buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BgrImage {
    geometry: Geometry,
    data: Vec<u8>,
}

impl BgrImage {
    /// Wrap an existing buffer. Fails when `data.len()` does not match the
    /// geometry.
    pub fn from_vec(geometry: Geometry, data: Vec<u8>) -> Result<Self> {
        check_len(&geometry, data.len())?;
        Ok(Self { geometry, data })
    }

    /// Zero-filled buffer. Reservation failure is reported rather than
    /// aborting the process.
    pub fn try_zeroed(geometry: Geometry) -> Result<Self> {
        let bytes = geometry.buffer_len();
        let mut data = Vec::new();
        data.try_reserve_exact(bytes)
            .map_err(|_| EdgeFilterError::Allocation { bytes })?;
        data.resize(bytes, 0);
        Ok(Self { geometry, data })
    }

    /// Build an image by evaluating `f(x, y)` for every pixel. Only the first
    /// `channels` bytes of each returned array are kept.
    pub fn from_fn<F>(geometry: Geometry, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> [u8; 4],
    {
        let n = geometry.channels().get();
        let mut data = Vec::with_capacity(geometry.buffer_len());
        for y in 0..geometry.height() {
            for x in 0..geometry.width() {
                data.extend_from_slice(&f(x, y)[..n]);
            }
        }
        Self { geometry, data }
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }
}

impl ImageView for BgrImage {
    #[inline]
    fn geometry(&self) -> Geometry {
        self.geometry
    }
    #[inline]
    fn data(&self) -> &[u8] {
        &self.data
    }
}

impl ImageViewMut for BgrImage {
    #[inline]
    fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

/// Borrowed read-only view over an external buffer.
#[derive(Clone, Copy, Debug)]
pub struct BgrImageRef<'a> {
    geometry: Geometry,
    data: &'a [u8],
}

impl<'a> BgrImageRef<'a> {
    pub fn new(geometry: Geometry, data: &'a [u8]) -> Result<Self> {
        check_len(&geometry, data.len())?;
        Ok(Self { geometry, data })
    }

    /// Convenience for raw callers holding loose geometry values.
    pub fn from_raw(
        data: &'a [u8],
        channels: ChannelCount,
        width: usize,
        height: usize,
    ) -> Result<Self> {
        Self::new(Geometry::new(width, height, channels)?, data)
    }
}

impl ImageView for BgrImageRef<'_> {
    #[inline]
    fn geometry(&self) -> Geometry {
        self.geometry
    }
    #[inline]
    fn data(&self) -> &[u8] {
        self.data
    }
}
