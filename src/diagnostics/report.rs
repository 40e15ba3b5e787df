use super::timing::TimingBreakdown;
use crate::image::ImageView;
use crate::types::Geometry;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Summary of the filtered pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeStats {
    /// Pixels on the outer one-pixel frame.
    pub border_pixels: usize,
    pub interior_pixels: usize,
    /// Interior pixels with a nonzero edge magnitude (output below 255).
    pub edge_pixels: usize,
    /// Interior pixels at full magnitude (output 0).
    pub saturated_pixels: usize,
}

impl EdgeStats {
    /// Tally an output image produced by [`EdgeFilter`](crate::EdgeFilter).
    pub fn from_output<I: ImageView + ?Sized>(output: &I) -> Self {
        let g = output.geometry();
        let mut stats = Self::default();
        for y in 0..g.height() {
            for x in 0..g.width() {
                if g.is_border(x, y) {
                    stats.border_pixels += 1;
                    continue;
                }
                stats.interior_pixels += 1;
                let value = output.pixel(x, y)[0];
                if value < 255 {
                    stats.edge_pixels += 1;
                }
                if value == 0 {
                    stats.saturated_pixels += 1;
                }
            }
        }
        stats
    }
}

/// Result of a file-level filter run.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub geometry: Geometry,
    pub stats: EdgeStats,
    pub timings: TimingBreakdown,
}

impl fmt::Display for FilterReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} ({}x{}, {}-bit): {} edge / {} interior pixels, {:.3} ms",
            self.input.display(),
            self.output.display(),
            self.geometry.width(),
            self.geometry.height(),
            self.geometry.channels().bit_depth(),
            self.stats.edge_pixels,
            self.stats.interior_pixels,
            self.timings.total_ms
        )
    }
}
