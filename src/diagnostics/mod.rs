//! Run reports: per-stage timings and a tally of the filtered pixels.

pub mod report;
pub mod timing;

pub use report::{EdgeStats, FilterReport};
pub use timing::{StageTiming, TimingBreakdown};
