#![doc = include_str!("../README.md")]

// Core geometry.
pub mod error;
pub mod scale;
pub mod transform;
pub mod trilateration;
pub mod types;

pub mod angle;

// Frame orchestration and tooling around the core.
pub mod config;
pub mod diagnostics;
pub mod io;
pub mod pipeline;
pub mod sweep;

// --- High-level re-exports -------------------------------------------------

pub use crate::error::GeometryError;
pub use crate::types::{AnchorLabel, Anchors, Observation, Point2D};

// Host-facing operations.
pub use crate::scale::{apply_scale_adjustment, compute_scale_adjustment};
pub use crate::transform::{transform_point, untransform_point, NoiseSource, TransformParams};
pub use crate::trilateration::{solve_trilateration, TrilaterationResult, Trilaterator};

pub use crate::diagnostics::PipelineReport;
pub use crate::pipeline::{run_pipeline, PipelineParams};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use trilateration_sandbox::prelude::*;
///
/// let anchors = Anchors::new(
///     Point2D::new(0.0, 0.0),
///     Point2D::new(100.0, 0.0),
///     Point2D::new(0.0, 100.0),
/// );
/// let truth = Point2D::new(30.0, 40.0);
/// let obs = observations_from(&anchors, &anchors.distances_to(&truth));
/// let p = solve_trilateration(&obs).unwrap();
/// assert!(p.distance(&truth) < 1e-6);
/// ```
pub mod prelude {
    pub use crate::types::observations_from;
    pub use crate::{
        run_pipeline, solve_trilateration, Anchors, GeometryError, Observation, PipelineParams,
        Point2D, TransformParams,
    };
}
