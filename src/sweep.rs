//! Monte Carlo noise sweep over a range of seeds.
//!
//! Each seed is an independent pipeline frame with its own freshly seeded
//! noise source, so frames run in parallel and the per-seed results do not
//! depend on scheduling.

use crate::diagnostics::timing::elapsed_ms;
use crate::diagnostics::{SweepReport, SweepSample, SweepStats};
use crate::pipeline::{run_pipeline, PipelineParams};
use log::debug;
use rayon::prelude::*;
use std::ops::Range;
use std::time::Instant;

pub fn run_sweep(params: &PipelineParams, seeds: Range<u64>) -> SweepReport {
    let t0 = Instant::now();
    let samples: Vec<SweepSample> = seeds
        .into_par_iter()
        .map(|seed| run_frame(params, seed))
        .collect();
    let stats = SweepStats::from_samples(&samples);
    debug!(
        "sweep frames={} failures={} mean_error={:.6}",
        stats.frames, stats.failures, stats.mean_error
    );
    SweepReport {
        input: params.describe(),
        stats,
        samples,
        elapsed_ms: elapsed_ms(t0),
    }
}

fn run_frame(params: &PipelineParams, seed: u64) -> SweepSample {
    match run_pipeline(&params.with_seed(Some(seed))) {
        Ok(report) => SweepSample {
            seed,
            error: Some(report.error),
            failure: None,
        },
        Err(err) => {
            debug!("sweep seed={seed} failed: {err}");
            SweepSample {
                seed,
                error: None,
                failure: Some(err.to_string()),
            }
        }
    }
}
