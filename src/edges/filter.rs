//! Inverted Sobel edge image over interleaved BGR(A) buffers.
//!
//! For every pixel the edge magnitude is 0 on the one-pixel border and
//! `|sumX| + |sumY|` clamped to `[0, 255]` elsewhere (see [`super::grad`]).
//! The written value is `255 - magnitude`, so flat regions come out white and
//! strong edges dark. B, G and R receive the same value; a 4th byte is copied
//! from the input pixel unchanged.
use super::grad::{edge_magnitude, sobel_sums};
use crate::error::Result;
use crate::image::bgr::{BLUE, GREEN, RED};
use crate::image::{BgrImage, BgrImageRef, ImageView, ImageViewMut};
use crate::types::{ChannelCount, Geometry};
use log::debug;

/// Stateless Sobel edge filter.
#[derive(Clone, Copy, Debug, Default)]
pub struct EdgeFilter;

impl EdgeFilter {
    pub fn new() -> Self {
        Self
    }

    /// Filter `input` into a newly allocated image of the same geometry.
    ///
    /// Fails only when the output buffer cannot be reserved.
    pub fn apply<I>(&self, input: &I) -> Result<BgrImage>
    where
        I: ImageView + ?Sized,
    {
        let mut output = BgrImage::try_zeroed(input.geometry())?;
        self.apply_into(input, &mut output);
        Ok(output)
    }

    /// Raw-buffer entry point: validates geometry and buffer length, then
    /// returns the filtered bytes.
    pub fn apply_raw(
        &self,
        pixels: &[u8],
        channels: ChannelCount,
        width: usize,
        height: usize,
    ) -> Result<Vec<u8>> {
        let input = BgrImageRef::from_raw(pixels, channels, width, height)?;
        Ok(self.apply(&input)?.into_vec())
    }

    /// Filter `input` into a caller-provided buffer.
    ///
    /// # Panics
    /// Panics if the two geometries differ.
    pub fn apply_into<I, O>(&self, input: &I, output: &mut O)
    where
        I: ImageView + ?Sized,
        O: ImageViewMut + ?Sized,
    {
        let g = input.geometry();
        assert_eq!(
            g,
            output.geometry(),
            "output geometry must match input geometry"
        );
        debug!(
            "EdgeFilter::apply {}x{} channels={}",
            g.width(),
            g.height(),
            g.channels().get()
        );

        let n = g.channels().get();
        for (y, out_row) in output.rows_mut().enumerate() {
            for (x, out_px) in out_row.chunks_exact_mut(n).enumerate() {
                let display = 255 - magnitude_at(input, &g, x, y);
                out_px[BLUE] = display;
                out_px[GREEN] = display;
                out_px[RED] = display;
                if g.channels() == ChannelCount::Bgra {
                    out_px[3] = input.pixel(x, y)[3];
                }
            }
        }
    }
}

#[inline]
fn magnitude_at<I>(input: &I, g: &Geometry, x: usize, y: usize) -> u8
where
    I: ImageView + ?Sized,
{
    if g.is_border(x, y) {
        return 0;
    }
    let (sum_x, sum_y) = sobel_sums(input, x, y);
    edge_magnitude(sum_x, sum_y)
}
