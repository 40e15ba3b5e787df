//! File-level orchestration: read bitmap, filter, write bitmap.
//!
//! [`run`] returns a typed error; [`apply_files`] keeps the plain success flag
//! and logs the failure instead. Neither retries.
use crate::diagnostics::timing::elapsed_ms;
use crate::diagnostics::{EdgeStats, FilterReport, TimingBreakdown};
use crate::edges::EdgeFilter;
use crate::error::Result;
use crate::image::io::{load_bitmap, save_bitmap};
use crate::image::ImageView;
use log::{debug, error, info};
use std::path::Path;
use std::time::Instant;

/// Filter the bitmap at `input` and write the result to `output`.
///
/// The output keeps the input's geometry and bit depth. A failed read or
/// allocation stops before the transform; a failed write happens after it.
pub fn run(input: &Path, output: &Path) -> Result<FilterReport> {
    debug!(
        "pipeline::run start input={} output={}",
        input.display(),
        output.display()
    );
    let total_start = Instant::now();
    let mut timings = TimingBreakdown::default();

    let source = timings.measure("load", || load_bitmap(input))?;
    let filtered = timings.measure("filter", || EdgeFilter::new().apply(&source))?;
    timings.measure("save", || save_bitmap(&filtered, output))?;
    timings.total_ms = elapsed_ms(total_start);

    let stats = EdgeStats::from_output(&filtered);
    debug!(
        "pipeline::run done edge_pixels={} total_ms={:.3}",
        stats.edge_pixels, timings.total_ms
    );
    Ok(FilterReport {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        geometry: filtered.geometry(),
        stats,
        timings,
    })
}

/// Like [`run`] but reports only success, logging any failure.
pub fn apply_files(input: &Path, output: &Path) -> bool {
    match run(input, output) {
        Ok(report) => {
            info!("{report}");
            true
        }
        Err(err) => {
            error!("{err}");
            false
        }
    }
}
