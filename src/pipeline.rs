//! One frame of the transform → range → adjust → solve → inverse pipeline.
//!
//! The true anchors are forward-mapped exactly once per frame to obtain the
//! beacon map; that single result is both returned for display and used for
//! solving, so noise never has to be replayed by reseeding.
//!
//! Ranges are measured from the query to the true anchors. With scale
//! adjustment enabled they are rescaled to the beacon geometry before the
//! solve, and the beacon-space estimate is mapped back through the inverse
//! transform when `invert_result` is set.

use crate::angle::is_normalized_degrees;
use crate::diagnostics::timing::elapsed_ms;
use crate::diagnostics::{PipelineInput, PipelineReport, TimingBreakdown};
use crate::error::GeometryError;
use crate::scale::ScaleAdjustment;
use crate::transform::{self, NoiseSource, TransformParams};
use crate::trilateration::{TrilaterationOptions, Trilaterator};
use crate::types::{observations_from, Anchors, Point2D};
use log::{debug, warn};
use std::time::Instant;

/// Anisotropy above which the uniform-scale heuristic is reported as unreliable.
const ANISOTROPY_WARN: f64 = 1.05;

/// Everything one frame needs; owned by the host and passed by reference.
#[derive(Clone, Debug)]
pub struct PipelineParams {
    pub anchors: Anchors,
    pub query: Point2D,
    pub transform: TransformParams,
    /// Noise seed for this frame. `None` disables noise.
    pub seed: Option<u64>,
    pub scale_adjust: bool,
    pub invert_result: bool,
    pub trilateration: TrilaterationOptions,
}

impl Default for PipelineParams {
    fn default() -> Self {
        Self {
            anchors: Anchors::default(),
            query: Point2D::new(30.0, 40.0),
            transform: TransformParams::identity(),
            seed: None,
            scale_adjust: true,
            invert_result: true,
            trilateration: TrilaterationOptions::default(),
        }
    }
}

impl PipelineParams {
    pub fn with_seed(&self, seed: Option<u64>) -> Self {
        Self {
            seed,
            ..self.clone()
        }
    }

    pub fn describe(&self) -> PipelineInput {
        PipelineInput {
            anchors: self.anchors,
            query: self.query,
            transform: self.transform,
            seed: self.seed,
            scale_adjust: self.scale_adjust,
            invert_result: self.invert_result,
        }
    }
}

pub fn run_pipeline(params: &PipelineParams) -> Result<PipelineReport, GeometryError> {
    let t0 = Instant::now();
    let mut timings = TimingBreakdown::default();
    let tp = params.transform;
    tp.validate()?;

    if !is_normalized_degrees(tp.rotation_degrees) {
        debug!(
            "rotation {}° outside (-180, 180], equivalent to {}°",
            tp.rotation_degrees,
            tp.normalized_rotation_degrees()
        );
    }
    if params.scale_adjust && tp.anisotropy() > ANISOTROPY_WARN {
        warn!(
            "uniform scale adjustment with anisotropic transform (scale_x={}, scale_y={}); result is approximate",
            tp.scale_x, tp.scale_y
        );
    }

    let beacons = timings.time("forward", || {
        let mut noise = params.seed.map(NoiseSource::seeded);
        transform::forward_all(&params.anchors, tp, noise.as_mut())
    });
    debug!("pipeline beacons={:?} seed={:?}", beacons, params.seed);

    let raw_distances = timings.time("ranges", || params.anchors.distances_to(&params.query));

    let (distances, scale) = if params.scale_adjust {
        let adj = timings.time("scale", || ScaleAdjustment::compute(&params.anchors, &beacons))?;
        debug!("pipeline scale factor={:.6}", adj.factor);
        (adj.apply(&raw_distances), Some(adj))
    } else {
        (raw_distances, None)
    };

    let solver = Trilaterator::new(params.trilateration);
    let observations = observations_from(&beacons, &distances);
    let solution = timings.time("solve", || solver.solve(&observations))?;
    debug!(
        "pipeline solution=({:.4}, {:.4}) rms_residual={:.3e}",
        solution.point.x,
        solution.point.y,
        solution.rms_residual()
    );

    let recovered = if params.invert_result {
        timings.time("inverse", || transform::inverse(solution.point, tp))?
    } else {
        solution.point
    };
    let error = recovered.distance(&params.query);
    timings.total_ms = elapsed_ms(t0);

    Ok(PipelineReport {
        input: params.describe(),
        beacons,
        raw_distances,
        distances,
        scale,
        solution,
        recovered,
        error,
        timings,
    })
}
