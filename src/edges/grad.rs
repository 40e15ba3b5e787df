//! Sobel gradients evaluated on packed pixel words.
//!
//! - Each 3×3 neighbour is packed with [`pack`] and multiplied by its kernel
//!   weight; the two kernels are accumulated in separate passes.
//! - Kernels are indexed `[x offset + 1][y offset + 1]`, so `SOBEL_GX` varies
//!   along y within a column and `SOBEL_GY` along x.
//! - Arithmetic is 32-bit two's complement with wrap-around. The weight
//!   multiplies the whole packed word, so a carry out of one colour byte
//!   lands in the next one and overflow past bit 31 is discarded. Exact
//!   output depends on this; a luminance-based gradient would produce
//!   different images.
//!
//! Callers handle the border: [`convolve_packed`] requires (x, y) to have a
//! full 3×3 neighbourhood inside the image.
use super::pack::pack;
use crate::image::ImageView;

/// 3×3 integer kernel indexed `[i + 1][j + 1]` for x offset `i`, y offset `j`.
pub type Kernel3 = [[i32; 3]; 3];

pub const SOBEL_GX: Kernel3 = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]];
pub const SOBEL_GY: Kernel3 = [[-1, -2, -1], [0, 0, 0], [1, 2, 1]];

/// Weighted sum of the packed 3×3 neighbourhood centred on (x, y).
///
/// Samples are addressed as `(x + i + (y + j) * width) * channels`.
pub fn convolve_packed<I>(img: &I, x: usize, y: usize, kernel: &Kernel3) -> i32
where
    I: ImageView + ?Sized,
{
    let g = img.geometry();
    debug_assert!(
        x >= 1 && y >= 1 && x + 1 < g.width() && y + 1 < g.height(),
        "({x}, {y}) has no full neighbourhood in {}x{}",
        g.width(),
        g.height()
    );
    let n = g.channels().get();
    let data = img.data();

    let mut sum = 0i32;
    for (i, column) in kernel.iter().enumerate() {
        let sx = x + i - 1;
        for (j, &weight) in column.iter().enumerate() {
            let sy = y + j - 1;
            let idx = (sx + sy * g.width()) * n;
            let packed = pack(&data[idx..idx + 3]);
            sum = sum.wrapping_add(weight.wrapping_mul(packed as i32));
        }
    }
    sum
}

/// `(sumX, sumY)` for an interior pixel, one full pass per kernel.
#[inline]
pub fn sobel_sums<I>(img: &I, x: usize, y: usize) -> (i32, i32)
where
    I: ImageView + ?Sized,
{
    (
        convolve_packed(img, x, y, &SOBEL_GX),
        convolve_packed(img, x, y, &SOBEL_GY),
    )
}

/// `|sumX| + |sumY|` clamped to `[0, 255]`. The absolute values and their sum
/// wrap, so a result past `i32::MAX` clamps to 0.
#[inline]
pub fn edge_magnitude(sum_x: i32, sum_y: i32) -> u8 {
    sum_x
        .wrapping_abs()
        .wrapping_add(sum_y.wrapping_abs())
        .clamp(0, 255) as u8
}
