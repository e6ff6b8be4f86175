use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use trilateration_sandbox::{Anchors, Point2D, TransformParams};

pub fn right_triangle() -> Anchors {
    Anchors::new(
        Point2D::new(0.0, 0.0),
        Point2D::new(100.0, 0.0),
        Point2D::new(0.0, 100.0),
    )
}

pub fn assert_close(actual: Point2D, expected: Point2D, tol: f64) {
    assert!(
        actual.distance(&expected) < tol,
        "expected {expected:?}, got {actual:?} (tol {tol})"
    );
}

/// Deterministic stream of noise-free transforms covering the parameter space.
pub fn random_transforms(seed: u64, count: usize) -> Vec<TransformParams> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            // Rotation in (-180, 180].
            let rotation = 180.0 - rng.gen_range(0.0..360.0);
            TransformParams::identity()
                .with_translation(rng.gen_range(-500.0..500.0), rng.gen_range(-500.0..500.0))
                .with_rotation_degrees(rotation)
                .with_scale(rng.gen_range(0.05..20.0), rng.gen_range(0.05..20.0))
        })
        .collect()
}

pub fn random_points(seed: u64, count: usize, extent: f64) -> Vec<Point2D> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| Point2D::new(rng.gen_range(-extent..extent), rng.gen_range(-extent..extent)))
        .collect()
}
