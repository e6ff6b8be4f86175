//! Invertible mapping between true space and observed space.
//!
//! `forward` applies, in this fixed order:
//!
//! 1. optional uniform noise (`x` draw first, then `y`),
//! 2. translation by `(translate_x, translate_y)`,
//! 3. rotation about the origin by `rotation_degrees`,
//! 4. per-axis scale `(scale_x, scale_y)`.
//!
//! `inverse` undoes steps 2–4 in reverse order. Noise is not recoverable and
//! is never inverted.

pub mod noise;
pub mod params;

pub use noise::NoiseSource;
pub use params::TransformParams;

use crate::error::GeometryError;
use crate::types::{Anchors, Point2D};
use nalgebra::{Rotation2, Vector2};

/// Maps a true-space point into observed space.
///
/// Noise is added only when `noise` is supplied and
/// `params.noise_amplitude > 0`; in that case exactly two draws are consumed.
pub fn forward(
    point: Point2D,
    params: TransformParams,
    noise: Option<&mut NoiseSource>,
) -> Point2D {
    let mut p = point.to_vector();
    if let Some(src) = noise {
        if params.noise_amplitude > 0.0 {
            p[0] += src.next_offset(params.noise_amplitude);
            p[1] += src.next_offset(params.noise_amplitude);
        }
    }
    p += Vector2::new(params.translate_x, params.translate_y);
    let p = Rotation2::new(params.rotation_radians()) * p;
    let p = p.component_mul(&Vector2::new(params.scale_x, params.scale_y));
    Point2D::from_vector(p)
}

/// Maps an observed-space point back into true space.
pub fn inverse(point: Point2D, params: TransformParams) -> Result<Point2D, GeometryError> {
    params.check_invertible()?;
    let p = point
        .to_vector()
        .component_div(&Vector2::new(params.scale_x, params.scale_y));
    let p = Rotation2::new(-params.rotation_radians()) * p;
    let p = p - Vector2::new(params.translate_x, params.translate_y);
    Ok(Point2D::from_vector(p))
}

/// Forward-maps all three anchors, threading one noise source through them
/// in label order.
pub fn forward_all(
    anchors: &Anchors,
    params: TransformParams,
    mut noise: Option<&mut NoiseSource>,
) -> Anchors {
    let mut out = anchors.0;
    for p in out.iter_mut() {
        *p = forward(*p, params, noise.as_deref_mut());
    }
    Anchors(out)
}

/// Host-facing forward transform. A seed starts a fresh noise sequence for
/// this call; `None` disables noise.
pub fn transform_point(point: Point2D, params: TransformParams, seed: Option<u64>) -> Point2D {
    let mut src = seed.map(NoiseSource::seeded);
    forward(point, params, src.as_mut())
}

/// Host-facing inverse transform.
pub fn untransform_point(
    point: Point2D,
    params: TransformParams,
) -> Result<Point2D, GeometryError> {
    inverse(point, params)
}
