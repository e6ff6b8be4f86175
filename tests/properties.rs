mod common;

use common::fixtures::{assert_close, random_points, random_transforms, right_triangle};
use trilateration_sandbox::scale::{adjustment_factor, apply};
use trilateration_sandbox::transform::{forward, inverse};
use trilateration_sandbox::types::observations_from;
use trilateration_sandbox::{
    apply_scale_adjustment, compute_scale_adjustment, solve_trilateration, transform_point,
    untransform_point, Anchors, GeometryError, Point2D, TransformParams,
};

#[test]
fn identity_round_trip_is_exact() {
    let id = TransformParams::identity();
    for p in random_points(1, 200, 1e4) {
        let back = inverse(forward(p, id, None), id).unwrap();
        assert_close(back, p, 1e-9);
    }
}

#[test]
fn inverse_undoes_any_noise_free_transform() {
    let points = random_points(2, 50, 1000.0);
    for params in random_transforms(3, 200) {
        for &p in &points {
            let back = untransform_point(transform_point(p, params, None), params).unwrap();
            assert_close(back, p, 1e-9);
        }
    }
}

#[test]
fn rotation_boundary_of_180_degrees_round_trips() {
    let params = TransformParams::identity()
        .with_rotation_degrees(180.0)
        .with_translation(3.0, -4.0);
    let p = Point2D::new(10.0, 20.0);
    let fwd = forward(p, params, None);
    assert_close(fwd, Point2D::new(-13.0, -16.0), 1e-9);
    assert_close(inverse(fwd, params).unwrap(), p, 1e-9);
}

#[test]
fn inverse_reports_invalid_scale() {
    for (sx, sy) in [(0.0, 1.0), (1.0, 0.0), (-1.0, 1.0), (f64::NAN, 1.0)] {
        let params = TransformParams::identity().with_scale(sx, sy);
        assert!(matches!(
            untransform_point(Point2D::new(1.0, 1.0), params),
            Err(GeometryError::InvalidTransform { .. })
        ));
    }
}

#[test]
fn inverse_reports_non_finite_offsets() {
    let id = TransformParams::identity();
    for params in [
        id.with_rotation_degrees(f64::NAN),
        id.with_translation(f64::INFINITY, 0.0),
        id.with_translation(0.0, f64::NEG_INFINITY),
    ] {
        assert!(
            matches!(
                untransform_point(Point2D::new(1.0, 2.0), params),
                Err(GeometryError::InvalidTransform { .. })
            ),
            "{params:?}"
        );
    }
    // Noise is never inverted; a bad amplitude does not block the inverse.
    assert!(untransform_point(Point2D::new(1.0, 2.0), id.with_noise(-1.0)).is_ok());
}

#[test]
fn exact_distances_recover_true_point() {
    let anchors = right_triangle();
    let truth = Point2D::new(30.0, 40.0);
    let d = anchors.distances_to(&truth);
    assert!((d[0] - 50.0).abs() < 1e-12);
    let p = solve_trilateration(&observations_from(&anchors, &d)).unwrap();
    assert_close(p, truth, 1e-6);
}

#[test]
fn exact_distances_recover_random_points() {
    let anchors = Anchors::new(
        Point2D::new(-120.0, 15.0),
        Point2D::new(80.0, -60.0),
        Point2D::new(20.0, 140.0),
    );
    for truth in random_points(4, 500, 400.0) {
        let obs = observations_from(&anchors, &anchors.distances_to(&truth));
        assert_close(solve_trilateration(&obs).unwrap(), truth, 1e-6);
    }
}

#[test]
fn collinear_anchors_never_produce_a_point() {
    let anchors = Anchors::new(
        Point2D::new(0.0, 0.0),
        Point2D::new(50.0, 0.0),
        Point2D::new(100.0, 0.0),
    );
    for d in [[0.0, 0.0, 0.0], [10.0, 40.0, 90.0], [1.0, 2.0, 3.0], [500.0, 1.0, 77.0]] {
        let res = solve_trilateration(&observations_from(&anchors, &d));
        assert!(
            matches!(res, Err(GeometryError::DegenerateGeometry { .. })),
            "{res:?}"
        );
    }
}

#[test]
fn scale_adjustment_is_noop_for_identical_anchors() {
    let anchors = right_triangle();
    let factor = compute_scale_adjustment(&anchors, &anchors).unwrap();
    assert_eq!(factor, 1.0);
    let d = [3.5, 70.0, 12.25];
    assert_eq!(apply_scale_adjustment(&d, factor), d);
}

#[test]
fn coincident_transformed_anchors_are_division_by_zero() {
    let p = Point2D::new(5.0, 5.0);
    assert!(matches!(
        compute_scale_adjustment(&right_triangle(), &Anchors::new(p, p, p)),
        Err(GeometryError::DivisionByZero { .. })
    ));
}

#[test]
fn same_seed_reproduces_noise() {
    let params = TransformParams::identity()
        .with_translation(1.0, 2.0)
        .with_rotation_degrees(33.0)
        .with_noise(8.0);
    for p in random_points(5, 20, 100.0) {
        let a = transform_point(p, params, Some(1234));
        let b = transform_point(p, params, Some(1234));
        assert_eq!(a, b);
        assert_ne!(a, transform_point(p, params, None));
    }
}

#[test]
fn uniformly_scaled_geometry_recovers_unscaled_solution() {
    let anchors = right_triangle();
    let truth = Point2D::new(30.0, 40.0);
    let baseline = solve_trilateration(&observations_from(
        &anchors,
        &anchors.distances_to(&truth),
    ))
    .unwrap();

    for k in [0.01, 0.5, 2.0, 37.0] {
        let scaled_anchors = Anchors(anchors.0.map(|p| Point2D::new(p.x * k, p.y * k)));
        let scaled_distances = anchors.distances_to(&truth).map(|d| d * k);

        // Scaled geometry as the reference, unscaled anchors as the solve space.
        let factor = adjustment_factor(&scaled_anchors, &anchors).unwrap();
        assert!((factor - k).abs() < 1e-9 * k.max(1.0));
        let adjusted = apply(&scaled_distances, factor);
        let p = solve_trilateration(&observations_from(&anchors, &adjusted)).unwrap();
        assert_close(p, baseline, 1e-6);
    }
}
