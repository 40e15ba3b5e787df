//! Packing of one BGR pixel into a 32-bit RGBA-ordered word.
use crate::image::bgr::{BLUE, GREEN, RED};

/// Alpha byte stored in the low 8 bits of every packed sample.
pub const PACKED_ALPHA: u32 = 0xFF;

/// Pack the first three bytes of `pixel` (blue, green, red) as
/// `R << 24 | G << 16 | B << 8 | 0xFF`.
///
/// # Panics
/// Panics if `pixel` holds fewer than three bytes.
#[inline]
pub fn pack(pixel: &[u8]) -> u32 {
    (u32::from(pixel[RED]) << 24)
        | (u32::from(pixel[GREEN]) << 16)
        | (u32::from(pixel[BLUE]) << 8)
        | PACKED_ALPHA
}

/// Inverse of [`pack`], returned in `[blue, green, red]` order. The alpha byte
/// is dropped.
#[inline]
pub fn unpack(rgba: u32) -> [u8; 3] {
    let mut out = [0u8; 3];
    out[BLUE] = (rgba >> 8) as u8;
    out[GREEN] = (rgba >> 16) as u8;
    out[RED] = (rgba >> 24) as u8;
    out
}
