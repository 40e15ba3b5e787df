//! Sobel edge filtering on interleaved BGR(A) images.
//!
//! - `pack`: one pixel to a 32-bit `R G B 0xFF` word and back.
//! - `grad`: the GX/GY kernels convolved against packed words.
//! - `filter`: [`EdgeFilter`], which walks every pixel, applies the border
//!   policy and writes the inverted grayscale result.

pub mod filter;
pub mod grad;
pub mod pack;

pub use filter::EdgeFilter;
pub use grad::{edge_magnitude, sobel_sums, Kernel3, SOBEL_GX, SOBEL_GY};
pub use pack::{pack, unpack};
