//! Parameters of the true-space → observed-space transform.
//!
//! The transform is applied as noise → translate → rotate → scale; see
//! [`forward`](super::forward). Scale factors must be strictly positive for the
//! mapping to be invertible.

use crate::angle::normalize_degrees;
use crate::error::GeometryError;
use serde::{Deserialize, Serialize};

/// Translation, rotation, anisotropic scale and optional additive noise.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformParams {
    pub translate_x: f64,
    pub translate_y: f64,
    /// Rotation about the origin, applied after translation. Expected in
    /// (-180, 180]; other values are accepted and behave periodically.
    pub rotation_degrees: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    /// Peak-to-peak amplitude of the uniform noise added before translation.
    pub noise_amplitude: f64,
}

impl Default for TransformParams {
    fn default() -> Self {
        Self::identity()
    }
}

impl TransformParams {
    /// Parameters under which forward and inverse are exact no-ops.
    pub const fn identity() -> Self {
        Self {
            translate_x: 0.0,
            translate_y: 0.0,
            rotation_degrees: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            noise_amplitude: 0.0,
        }
    }

    pub fn with_translation(mut self, dx: f64, dy: f64) -> Self {
        self.translate_x = dx;
        self.translate_y = dy;
        self
    }

    pub fn with_rotation_degrees(mut self, degrees: f64) -> Self {
        self.rotation_degrees = degrees;
        self
    }

    pub fn with_scale(mut self, sx: f64, sy: f64) -> Self {
        self.scale_x = sx;
        self.scale_y = sy;
        self
    }

    pub fn with_uniform_scale(self, s: f64) -> Self {
        self.with_scale(s, s)
    }

    pub fn with_noise(mut self, amplitude: f64) -> Self {
        self.noise_amplitude = amplitude;
        self
    }

    pub fn rotation_radians(&self) -> f64 {
        self.rotation_degrees.to_radians()
    }

    /// Rotation folded into (-180, 180].
    pub fn normalized_rotation_degrees(&self) -> f64 {
        normalize_degrees(self.rotation_degrees)
    }

    /// Ratio of the larger to the smaller scale factor (1.0 for uniform scale).
    pub fn anisotropy(&self) -> f64 {
        let (lo, hi) = if self.scale_x <= self.scale_y {
            (self.scale_x, self.scale_y)
        } else {
            (self.scale_y, self.scale_x)
        };
        hi / lo
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    /// Checks what `inverse` needs: strictly positive scales and finite
    /// offsets. Noise is not inverted, so its amplitude is not checked here.
    pub fn check_invertible(&self) -> Result<(), GeometryError> {
        for (name, value) in [("scale_x", self.scale_x), ("scale_y", self.scale_y)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(GeometryError::InvalidTransform {
                    reason: format!("{name} must be finite and > 0 (got {value})"),
                });
            }
        }
        for (name, value) in [
            ("translate_x", self.translate_x),
            ("translate_y", self.translate_y),
            ("rotation_degrees", self.rotation_degrees),
        ] {
            if !value.is_finite() {
                return Err(GeometryError::InvalidTransform {
                    reason: format!("{name} must be finite (got {value})"),
                });
            }
        }
        Ok(())
    }

    /// Full parameter validation used by the pipeline before any work.
    pub fn validate(&self) -> Result<(), GeometryError> {
        self.check_invertible()?;
        if !self.noise_amplitude.is_finite() || self.noise_amplitude < 0.0 {
            return Err(GeometryError::InvalidTransform {
                reason: format!(
                    "noise_amplitude must be finite and >= 0 (got {})",
                    self.noise_amplitude
                ),
            });
        }
        Ok(())
    }
}
