//! Angle helpers for rotation parameters given in degrees.

/// Folds an angle in degrees into the half-open range (-180, 180].
#[inline]
pub fn normalize_degrees(angle_deg: f64) -> f64 {
    let mut norm = angle_deg.rem_euclid(360.0);
    if norm > 180.0 {
        norm -= 360.0;
    }
    // rem_euclid maps -180 to 180 already; keep -0.0 out of the output.
    if norm == 0.0 {
        0.0
    } else {
        norm
    }
}

/// Returns true when `angle_deg` already lies in (-180, 180].
#[inline]
pub fn is_normalized_degrees(angle_deg: f64) -> bool {
    angle_deg > -180.0 && angle_deg <= 180.0
}
