use crate::plane::{angle_between_deg, intersect_three, Plane, PlaneNormal};
use approx::assert_abs_diff_eq;

#[test]
fn test_intersect_three_axis_aligned_planes() {
    // x = 1, y = 2, z = 3 intersect at (1, 2, 3).
    let p1 = Plane { a: 1.0, b: 0.0, c: 0.0, d: -1.0 };
    let p2 = Plane { a: 0.0, b: 1.0, c: 0.0, d: -2.0 };
    let p3 = Plane { a: 0.0, b: 0.0, c: 1.0, d: -3.0 };

    let (x, y, z) = intersect_three(p1, p2, p3).unwrap();
    assert_abs_diff_eq!(x, 1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(y, 2.0, epsilon = 1e-9);
    assert_abs_diff_eq!(z, 3.0, epsilon = 1e-9);
}

#[test]
fn test_intersect_three_singular_planes_rejected() {
    // Three parallel planes never meet at a point.
    let p1 = Plane { a: 1.0, b: 0.0, c: 0.0, d: 0.0 };
    let p2 = Plane { a: 1.0, b: 0.0, c: 0.0, d: -1.0 };
    let p3 = Plane { a: 1.0, b: 0.0, c: 0.0, d: -2.0 };

    assert!(intersect_three(p1, p2, p3).is_err());
}

#[test]
fn test_angle_between_orthogonal_normals() {
    let a = PlaneNormal { a: 1.0, b: 0.0, c: 0.0 };
    let b = PlaneNormal { a: 0.0, b: 1.0, c: 0.0 };
    assert_abs_diff_eq!(angle_between_deg(&a, &b), 90.0, epsilon = 1e-6);
}

#[test]
fn test_angle_between_identical_normals_is_zero() {
    let a = PlaneNormal { a: 0.6, b: 0.8, c: 0.0 };
    assert!(angle_between_deg(&a, &a) < 1e-6);
}

#[test]
fn test_angle_between_opposite_normals_is_zero() {
    // |nA . nB| absolute-values out the sign ambiguity.
    let a = PlaneNormal { a: 1.0, b: 0.0, c: 0.0 };
    let b = PlaneNormal { a: -1.0, b: 0.0, c: 0.0 };
    assert!(angle_between_deg(&a, &b) < 1e-6);
}
