use crate::equatorial::EquatorialDir;
use crate::meteor_plane::fit_meteor_plane;

#[test]
fn test_fit_meteor_plane_is_unit_normal() {
    let points = vec![
        EquatorialDir { ra_deg: 10.0, dec_deg: 5.0 },
        EquatorialDir { ra_deg: 20.0, dec_deg: 10.0 },
        EquatorialDir { ra_deg: 30.0, dec_deg: 14.0 },
        EquatorialDir { ra_deg: 40.0, dec_deg: 17.0 },
    ];
    let n = fit_meteor_plane(&points).unwrap();
    let magnitude = (n.a * n.a + n.b * n.b + n.c * n.c).sqrt();
    assert!((magnitude - 1.0).abs() < 1e-9);
}

#[test]
fn test_single_point_is_underdetermined() {
    let points = vec![EquatorialDir { ra_deg: 10.0, dec_deg: 5.0 }];
    assert!(fit_meteor_plane(&points).is_err());
}

#[test]
fn test_empty_points_is_underdetermined() {
    assert!(fit_meteor_plane(&[]).is_err());
}

#[test]
fn test_equator_great_circle_normal_points_to_pole() {
    // Points along the celestial equator (dec = 0) span the plane
    // spanned by the x/y axes; its normal should point along z.
    let points: Vec<EquatorialDir> =
        (0..10).map(|i| EquatorialDir { ra_deg: (i as f64) * 30.0, dec_deg: 0.0 }).collect();
    let n = fit_meteor_plane(&points).unwrap();
    assert!(n.a.abs() < 1e-6, "a = {}", n.a);
    assert!(n.b.abs() < 1e-6, "b = {}", n.b);
    assert!((n.c.abs() - 1.0).abs() < 1e-6, "c = {}", n.c);
}
