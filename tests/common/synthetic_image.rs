#![allow(dead_code)]

use sobel_edge::image::BgrImage;
use sobel_edge::{ChannelCount, Geometry};

pub fn geometry(width: usize, height: usize, channels: ChannelCount) -> Geometry {
    Geometry::new(width, height, channels).expect("image dimensions must be positive")
}

/// Every pixel set to the same BGR colour; padding byte 0.
pub fn flat_bgr(width: usize, height: usize, channels: ChannelCount, bgr: [u8; 3]) -> BgrImage {
    BgrImage::from_fn(geometry(width, height, channels), |_, _| {
        [bgr[0], bgr[1], bgr[2], 0]
    })
}

/// Columns `x < split_x` take `left`, the rest take `right`.
pub fn vertical_step(
    width: usize,
    height: usize,
    split_x: usize,
    left: [u8; 3],
    right: [u8; 3],
) -> BgrImage {
    BgrImage::from_fn(geometry(width, height, ChannelCount::Bgr), |x, _| {
        let c = if x < split_x { left } else { right };
        [c[0], c[1], c[2], 0]
    })
}

/// High-contrast checkerboard in gray levels 32 / 220.
pub fn checkerboard(width: usize, height: usize, cell: usize, channels: ChannelCount) -> BgrImage {
    assert!(cell > 0, "cell size must be positive");
    BgrImage::from_fn(geometry(width, height, channels), |x, y| {
        let v = if ((x / cell) + (y / cell)) & 1 == 0 {
            32u8
        } else {
            220u8
        };
        [v, v, v, 0xAA]
    })
}

/// Deterministic pseudo-random pixels (xorshift32).
pub fn noise(width: usize, height: usize, channels: ChannelCount, seed: u32) -> BgrImage {
    let mut state = seed.max(1);
    BgrImage::from_fn(geometry(width, height, channels), |_, _| {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        state.to_le_bytes()
    })
}
