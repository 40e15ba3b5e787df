//! Error taxonomy for the filter and its I/O glue.
//!
//! The pixel transform itself never fails once its inputs are validated; every
//! variant here comes from a boundary: decoding, buffer reservation, encoding,
//! geometry checks, or tool configuration.
use std::path::PathBuf;

pub type Result<T, E = EdgeFilterError> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum EdgeFilterError {
    /// Input bitmap could not be opened or decoded.
    #[error("failed to read input {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Input decoded fine but is not an 8-bit RGB/RGBA layout.
    #[error("unsupported pixel layout {color} in {}", path.display())]
    UnsupportedLayout { path: PathBuf, color: String },

    /// Output buffer could not be reserved.
    #[error("failed to allocate {bytes} bytes for output")]
    Allocation { bytes: usize },

    /// Output bitmap could not be persisted.
    #[error("failed to write output {}: {message}", path.display())]
    Write { path: PathBuf, message: String },

    #[error("buffer holds {actual} bytes, geometry requires {expected}")]
    BufferSize { expected: usize, actual: usize },

    #[error("image dimensions must be positive, got {width}x{height}")]
    Geometry { width: usize, height: usize },

    #[error("{width}x{height} image exceeds the addressable buffer size")]
    GeometryOverflow { width: usize, height: usize },

    #[error("unsupported bit depth {0}, expected 24 or 32")]
    BitDepth(u16),

    #[error("invalid config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error("failed to write JSON {}: {message}", path.display())]
    Json { path: PathBuf, message: String },
}
