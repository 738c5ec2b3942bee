use crate::geodesy::{Geocentric, Geodetic};
use crate::kinematics::{along_track_distances, instantaneous_velocities};
use crate::trajectory::TrajectoryPoint;
use chrono::{Duration, TimeZone, Utc};

fn point(x_m: f64, seconds: i64) -> TrajectoryPoint {
    let t0 = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
    TrajectoryPoint {
        geocentric: Geocentric { x_m, y_m: 0.0, z_m: 0.0 },
        geodetic: Geodetic { lat_deg: 0.0, lon_deg: 0.0, height_m: 0.0 },
        time_utc: t0 + Duration::seconds(seconds),
    }
}

#[test]
fn test_along_track_distances_from_first_point() {
    let points = vec![point(0.0, 0), point(100.0, 1), point(300.0, 2)];
    let distances = along_track_distances(&points);
    assert_eq!(distances, vec![0.0, 100.0, 300.0]);
}

#[test]
fn test_velocities_use_secant_from_first_point() {
    let points = vec![point(0.0, 0), point(100.0, 1), point(300.0, 3)];
    let velocities = instantaneous_velocities(&points);
    assert!((velocities[0] - 0.0).abs() < 1e-9);
    assert!((velocities[1] - 100.0).abs() < 1e-9); // 100 m / 1 s
    assert!((velocities[2] - 100.0).abs() < 1e-9); // 300 m / 3 s
}

#[test]
fn test_velocity_denominator_is_monotone() {
    let points = vec![point(0.0, 0), point(50.0, 1), point(120.0, 2), point(260.0, 5)];
    let times_s: Vec<f64> =
        points.iter().map(|p| (p.time_utc - points[0].time_utc).num_seconds() as f64).collect();
    for w in times_s.windows(2) {
        assert!(w[1] > w[0]);
    }
}

#[test]
fn test_empty_points_yield_empty_outputs() {
    assert!(along_track_distances(&[]).is_empty());
    assert!(instantaneous_velocities(&[]).is_empty());
}
