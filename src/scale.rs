//! Uniform-scale adjustment of observed distances.
//!
//! Distances measured against one anchor geometry are carried over to a
//! differently scaled copy of that geometry by dividing each one by
//!
//! ```text
//! factor = mean_pairwise(true anchors) / mean_pairwise(transformed anchors)
//! ```
//!
//! If the transformed anchors are the true anchors scaled by `k`, then
//! `factor = 1/k` and every distance is multiplied by `k`, matching the
//! transformed geometry.
//!
//! # Known limitation
//!
//! This is a heuristic. It assumes a single isotropic scale between the two
//! spaces. With anisotropic scale (`scale_x != scale_y`) the mean pairwise
//! distance ratio is only an average and the adjusted distances are biased
//! along the stretched axis. Rotation and translation do not change pairwise
//! distances, so they neither help nor hurt the estimate.

use crate::error::GeometryError;
use crate::types::{Anchors, Point2D};
use serde::Serialize;

/// Mean of the three pairwise Euclidean distances.
pub fn mean_pairwise_distance(p1: &Point2D, p2: &Point2D, p3: &Point2D) -> f64 {
    (p1.distance(p2) + p2.distance(p3) + p1.distance(p3)) / 3.0
}

/// Ratio of the true anchor spread to the transformed anchor spread.
pub fn adjustment_factor(
    true_anchors: &Anchors,
    transformed_anchors: &Anchors,
) -> Result<f64, GeometryError> {
    let [t1, t2, t3] = true_anchors.points();
    let [o1, o2, o3] = transformed_anchors.points();
    let true_mean = mean_pairwise_distance(t1, t2, t3);
    let observed_mean = mean_pairwise_distance(o1, o2, o3);
    // A zero true spread gives factor 0, which `apply` would divide by.
    for mean in [observed_mean, true_mean] {
        if !mean.is_finite() || mean == 0.0 {
            return Err(GeometryError::DivisionByZero {
                mean_distance: mean,
            });
        }
    }
    Ok(true_mean / observed_mean)
}

/// Divides each distance by `factor`.
pub fn apply(distances: &[f64; 3], factor: f64) -> [f64; 3] {
    distances.map(|d| d / factor)
}

/// Factor actually used for one pipeline frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleAdjustment {
    pub factor: f64,
    pub true_mean_distance: f64,
    pub observed_mean_distance: f64,
}

impl ScaleAdjustment {
    pub fn compute(
        true_anchors: &Anchors,
        transformed_anchors: &Anchors,
    ) -> Result<Self, GeometryError> {
        let factor = adjustment_factor(true_anchors, transformed_anchors)?;
        let [t1, t2, t3] = true_anchors.points();
        let [o1, o2, o3] = transformed_anchors.points();
        Ok(Self {
            factor,
            true_mean_distance: mean_pairwise_distance(t1, t2, t3),
            observed_mean_distance: mean_pairwise_distance(o1, o2, o3),
        })
    }

    pub fn apply(&self, distances: &[f64; 3]) -> [f64; 3] {
        apply(distances, self.factor)
    }
}

/// Host-facing alias of [`adjustment_factor`].
pub fn compute_scale_adjustment(
    true_anchors: &Anchors,
    transformed_anchors: &Anchors,
) -> Result<f64, GeometryError> {
    adjustment_factor(true_anchors, transformed_anchors)
}

/// Host-facing alias of [`apply`].
pub fn apply_scale_adjustment(distances: &[f64; 3], factor: f64) -> [f64; 3] {
    apply(distances, factor)
}
