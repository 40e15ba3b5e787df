use crate::error::{EdgeFilterError, Result};
use serde::Serialize;

/// Number of interleaved byte samples per pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ChannelCount {
    /// Blue, green, red.
    Bgr,
    /// Blue, green, red plus one padding/alpha byte.
    Bgra,
}

impl ChannelCount {
    /// Derive the channel count from a source bit depth (24 or 32).
    pub fn from_bit_depth(bits: u16) -> Result<Self> {
        match bits / 8 {
            3 if bits % 8 == 0 => Ok(Self::Bgr),
            4 if bits % 8 == 0 => Ok(Self::Bgra),
            _ => Err(EdgeFilterError::BitDepth(bits)),
        }
    }

    /// Bytes per pixel.
    #[inline]
    pub fn get(self) -> usize {
        match self {
            Self::Bgr => 3,
            Self::Bgra => 4,
        }
    }

    #[inline]
    pub fn bit_depth(self) -> u16 {
        self.get() as u16 * 8
    }
}

/// Image geometry shared by the input and output buffers of a filter run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Geometry {
    width: usize,
    height: usize,
    channels: ChannelCount,
}

impl Geometry {
    /// Validated constructor. Both dimensions must be positive and the byte
    /// length `width * height * channels` must fit in `usize`.
    pub fn new(width: usize, height: usize, channels: ChannelCount) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(EdgeFilterError::Geometry { width, height });
        }
        width
            .checked_mul(channels.get())
            .and_then(|row| row.checked_mul(height))
            .ok_or(EdgeFilterError::GeometryOverflow { width, height })?;
        Ok(Self {
            width,
            height,
            channels,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn channels(&self) -> ChannelCount {
        self.channels
    }

    /// Bytes between the starts of consecutive rows.
    #[inline]
    pub fn row_bytes(&self) -> usize {
        self.width * self.channels.get()
    }

    /// Required buffer length in bytes: `width * height * channels`.
    #[inline]
    pub fn buffer_len(&self) -> usize {
        self.row_bytes() * self.height
    }

    /// Whether (x, y) lies on the outermost row or column.
    #[inline]
    pub fn is_border(&self, x: usize, y: usize) -> bool {
        x == 0 || x == self.width - 1 || y == 0 || y == self.height - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_depth_maps_to_channel_count() {
        assert_eq!(ChannelCount::from_bit_depth(24).unwrap(), ChannelCount::Bgr);
        assert_eq!(ChannelCount::from_bit_depth(32).unwrap(), ChannelCount::Bgra);
        assert!(ChannelCount::from_bit_depth(8).is_err());
        assert!(ChannelCount::from_bit_depth(16).is_err());
        assert!(ChannelCount::from_bit_depth(30).is_err());
        assert_eq!(ChannelCount::Bgra.bit_depth(), 32);
    }

    #[test]
    fn zero_dimension_is_rejected() {
        assert!(Geometry::new(0, 4, ChannelCount::Bgr).is_err());
        assert!(Geometry::new(4, 0, ChannelCount::Bgr).is_err());
        let g = Geometry::new(5, 2, ChannelCount::Bgra).unwrap();
        assert_eq!(g.row_bytes(), 20);
        assert_eq!(g.buffer_len(), 40);
    }

    #[test]
    fn oversized_geometry_is_rejected() {
        assert!(matches!(
            Geometry::new(1 << 62, 4, ChannelCount::Bgra),
            Err(EdgeFilterError::GeometryOverflow { .. })
        ));
        assert!(matches!(
            Geometry::new(usize::MAX / 3 + 1, 1, ChannelCount::Bgr),
            Err(EdgeFilterError::GeometryOverflow { .. })
        ));
        assert!(matches!(
            Geometry::new(1 << 20, usize::MAX >> 20, ChannelCount::Bgr),
            Err(EdgeFilterError::GeometryOverflow { .. })
        ));
    }

    #[test]
    fn border_covers_outer_ring_only() {
        let g = Geometry::new(4, 3, ChannelCount::Bgr).unwrap();
        let border: Vec<(usize, usize)> = (0..3)
            .flat_map(|y| (0..4).map(move |x| (x, y)))
            .filter(|&(x, y)| g.is_border(x, y))
            .collect();
        assert_eq!(border.len(), 10);
        assert!(!g.is_border(1, 1));
        assert!(!g.is_border(2, 1));
    }
}
