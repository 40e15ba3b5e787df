#![doc = include_str!("../README.md")]

pub mod config;
pub mod diagnostics;
pub mod edges;
pub mod error;
pub mod image;
pub mod pipeline;
pub mod types;

// --- High-level re-exports -------------------------------------------------

pub use crate::diagnostics::{EdgeStats, FilterReport};
pub use crate::edges::EdgeFilter;
pub use crate::error::{EdgeFilterError, Result};
pub use crate::pipeline::{apply_files, run};
pub use crate::types::{ChannelCount, Geometry};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for embedding the filter in a larger pipeline.
///
/// ```
/// use sobel_edge::prelude::*;
///
/// # fn main() -> sobel_edge::Result<()> {
/// let (w, h) = (8usize, 6usize);
/// let bgr = vec![200u8; w * h * 3];
/// let input = BgrImageRef::from_raw(&bgr, ChannelCount::Bgr, w, h)?;
///
/// let edges = EdgeFilter::new().apply(&input)?;
/// assert_eq!(edges.geometry(), input.geometry());
/// assert!(edges.data().iter().all(|&v| v == 255));
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{BgrImage, BgrImageRef, ImageView, ImageViewMut};
    pub use crate::{ChannelCount, EdgeFilter, Geometry};
}
