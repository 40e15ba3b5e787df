use crate::types::{ChannelCount, Geometry};

/// Read access to an interleaved 8-bit image with tightly packed rows.
pub trait ImageView {
    fn geometry(&self) -> Geometry;

    /// Entire backing buffer, `geometry().buffer_len()` bytes.
    fn data(&self) -> &[u8];

    #[inline]
    fn width(&self) -> usize {
        self.geometry().width()
    }

    #[inline]
    fn height(&self) -> usize {
        self.geometry().height()
    }

    #[inline]
    fn channels(&self) -> ChannelCount {
        self.geometry().channels()
    }

    /// Byte offset of pixel (x, y): `(x + y * width) * channels`.
    #[inline]
    fn offset(&self, x: usize, y: usize) -> usize {
        let g = self.geometry();
        (x + y * g.width()) * g.channels().get()
    }

    /// Channel bytes of pixel (x, y).
    #[inline]
    fn pixel(&self, x: usize, y: usize) -> &[u8] {
        let start = self.offset(x, y);
        &self.data()[start..start + self.channels().get()]
    }
}

pub trait ImageViewMut: ImageView {
    fn data_mut(&mut self) -> &mut [u8];

    #[inline]
    fn pixel_mut(&mut self, x: usize, y: usize) -> &mut [u8] {
        let start = self.offset(x, y);
        let n = self.channels().get();
        &mut self.data_mut()[start..start + n]
    }

    fn rows_mut(&mut self) -> std::slice::ChunksExactMut<'_, u8> {
        let row_bytes = self.geometry().row_bytes();
        self.data_mut().chunks_exact_mut(row_bytes)
    }
}
