/// Failures reported by the transform, trilateration and scale stages.
///
/// All variants are deterministic functions of the input; nothing here is
/// transient or worth retrying.
#[derive(Clone, Debug, PartialEq)]
pub enum GeometryError {
    /// Anchors are collinear (or nearly so); the linear system is singular.
    DegenerateGeometry { determinant: f64, threshold: f64 },
    /// One of the anchor sets is coincident, so no scale ratio exists.
    DivisionByZero { mean_distance: f64 },
    /// Transform parameters cannot be applied or inverted.
    InvalidTransform { reason: String },
    /// A distance is negative, not finite, or too large to square.
    InvalidObservation { index: usize, distance: f64 },
}

impl std::fmt::Display for GeometryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeometryError::DegenerateGeometry {
                determinant,
                threshold,
            } => write!(
                f,
                "degenerate anchor geometry (|det|={:.3e} < {:.3e})",
                determinant.abs(),
                threshold
            ),
            GeometryError::DivisionByZero { mean_distance } => write!(
                f,
                "anchors are coincident (mean pairwise distance {mean_distance})"
            ),
            GeometryError::InvalidTransform { reason } => {
                write!(f, "invalid transform: {reason}")
            }
            GeometryError::InvalidObservation { index, distance } => {
                write!(f, "invalid distance for observation {index}: {distance}")
            }
        }
    }
}

impl std::error::Error for GeometryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_kind() {
        let err = GeometryError::DegenerateGeometry {
            determinant: 0.0,
            threshold: 1e-5,
        };
        assert!(err.to_string().contains("degenerate"));

        let err = GeometryError::InvalidTransform {
            reason: "scale_x must be > 0 (got 0)".to_string(),
        };
        assert!(err.to_string().contains("scale_x"));
    }
}
