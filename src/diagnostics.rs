//! Structured reports produced by the pipeline and the noise sweep.
//!
//! Everything here is `Serialize` so the demo binaries can dump it as JSON;
//! field names are camelCase on the wire.

pub mod report;
pub mod timing;

pub use report::{PipelineInput, PipelineReport, SweepReport, SweepSample, SweepStats};
pub use timing::{StageTiming, TimingBreakdown};
