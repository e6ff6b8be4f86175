//! Closed-form three-anchor trilateration.
//!
//! Each observation `(P_i, r_i)` constrains the unknown point to the circle
//! `(x - x_i)² + (y - y_i)² = r_i²`. Subtracting the first circle from the
//! other two cancels the quadratic terms and leaves a 2×2 linear system
//!
//! ```text
//! 2(x2-x1)·x + 2(y2-y1)·y = r1² - r2² - x1² + x2² - y1² + y2²
//! 2(x3-x1)·x + 2(y3-y1)·y = r1² - r3² - x1² + x3² - y1² + y3²
//! ```
//!
//! solved with Cramer's rule. The third anchor removes the two-circle
//! ambiguity, so exactly one point comes out. For inconsistent (noisy)
//! distances the same system still has a unique solution, which is returned
//! as the best fit together with per-anchor residuals.
//!
//! The system is singular exactly when the anchors are collinear. The
//! determinant is compared against a threshold relative to the anchor
//! spread so the check behaves the same at any coordinate magnitude.

use crate::error::GeometryError;
use crate::types::{Observation, Point2D};
use log::debug;
use nalgebra::{Matrix2, Vector2};
use serde::{Deserialize, Serialize};

/// Solver options.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrilaterationOptions {
    /// Relative singularity threshold; scaled by the squared anchor spread.
    pub epsilon: f64,
}

impl Default for TrilaterationOptions {
    fn default() -> Self {
        Self { epsilon: 1e-9 }
    }
}

/// Solution of one three-anchor solve.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrilaterationResult {
    pub point: Point2D,
    /// Determinant of the linearized system.
    pub determinant: f64,
    /// `|point - anchor_i| - r_i` for each observation.
    pub residuals: [f64; 3],
}

impl TrilaterationResult {
    pub fn rms_residual(&self) -> f64 {
        let sum: f64 = self.residuals.iter().map(|r| r * r).sum();
        (sum / 3.0).sqrt()
    }

    pub fn max_abs_residual(&self) -> f64 {
        self.residuals.iter().fold(0.0f64, |m, r| m.max(r.abs()))
    }
}

/// Stateless three-anchor solver.
#[derive(Clone, Copy, Debug, Default)]
pub struct Trilaterator {
    options: TrilaterationOptions,
}

impl Trilaterator {
    pub fn new(options: TrilaterationOptions) -> Self {
        Self { options }
    }

    pub fn solve(
        &self,
        observations: &[Observation; 3],
    ) -> Result<TrilaterationResult, GeometryError> {
        // The linear system works on squared ranges; reject any that overflow.
        for (index, obs) in observations.iter().enumerate() {
            if !(obs.distance * obs.distance).is_finite() || obs.distance < 0.0 {
                return Err(GeometryError::InvalidObservation {
                    index,
                    distance: obs.distance,
                });
            }
        }

        let [o1, o2, o3] = observations;
        let (p1, p2, p3) = (o1.anchor, o2.anchor, o3.anchor);
        let (r1, r2, r3) = (o1.distance, o2.distance, o3.distance);

        let a = Matrix2::new(
            2.0 * (p2.x - p1.x),
            2.0 * (p2.y - p1.y),
            2.0 * (p3.x - p1.x),
            2.0 * (p3.y - p1.y),
        );
        let b = Vector2::new(
            r1 * r1 - r2 * r2 - p1.x * p1.x + p2.x * p2.x - p1.y * p1.y + p2.y * p2.y,
            r1 * r1 - r3 * r3 - p1.x * p1.x + p3.x * p3.x - p1.y * p1.y + p3.y * p3.y,
        );

        let det = a.determinant();
        let threshold = self.singularity_threshold(&p1, &p2, &p3);
        if !det.is_finite() || det.abs() <= threshold {
            debug!(
                "Trilaterator::solve degenerate anchors det={:.3e} threshold={:.3e}",
                det, threshold
            );
            return Err(GeometryError::DegenerateGeometry {
                determinant: det,
                threshold,
            });
        }

        // Cramer's rule.
        let x = (b[0] * a[(1, 1)] - a[(0, 1)] * b[1]) / det;
        let y = (a[(0, 0)] * b[1] - b[0] * a[(1, 0)]) / det;
        let point = Point2D::new(x, y);
        if !point.is_finite() {
            return Err(GeometryError::DegenerateGeometry {
                determinant: det,
                threshold,
            });
        }

        let residuals = [0usize, 1, 2].map(|i| {
            let obs = &observations[i];
            point.distance(&obs.anchor) - obs.distance
        });

        Ok(TrilaterationResult {
            point,
            determinant: det,
            residuals,
        })
    }

    // det(A) carries a factor 4·|P2-P1|·|P3-P1|·sin θ; compare it against the
    // same scale so the test is independent of coordinate units.
    fn singularity_threshold(&self, p1: &Point2D, p2: &Point2D, p3: &Point2D) -> f64 {
        let spread = p1.distance(p2).max(p1.distance(p3));
        4.0 * spread * spread * self.options.epsilon
    }
}

/// Host-facing solve with default options.
pub fn solve_trilateration(observations: &[Observation; 3]) -> Result<Point2D, GeometryError> {
    Trilaterator::default().solve(observations).map(|r| r.point)
}
