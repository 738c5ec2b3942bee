//! Kinematics: along-track distance and secant-from-first-point
//! velocity, derived from a solved station trajectory.

use crate::trajectory::TrajectoryPoint;

/// Euclidean (L2) distance from the first point, in meters, for each
/// point in `points` (including the first, which is always `0.0`).
pub fn along_track_distances(points: &[TrajectoryPoint]) -> Vec<f64> {
    let Some(first) = points.first() else { return Vec::new() };
    points
        .iter()
        .map(|p| {
            let dx = p.geocentric.x_m - first.geocentric.x_m;
            let dy = p.geocentric.y_m - first.geocentric.y_m;
            let dz = p.geocentric.z_m - first.geocentric.z_m;
            (dx * dx + dy * dy + dz * dz).sqrt()
        })
        .collect()
}

/// Velocity at each point (meters/second) as the secant from the first
/// point: `distance(i) / (t_i − t_0)`. The first point has no defined
/// velocity and is reported as `0.0`.
///
/// Meteor sampling is sparse enough that this secant-from-origin
/// formulation is numerically stabler near the noisy endpoints than a
/// consecutive-difference derivative.
pub fn instantaneous_velocities(points: &[TrajectoryPoint]) -> Vec<f64> {
    let Some(first) = points.first() else { return Vec::new() };
    let distances = along_track_distances(points);
    let t0 = first.time_utc;

    points
        .iter()
        .zip(distances.iter())
        .map(|(p, &d)| {
            let dt = (p.time_utc - t0).num_milliseconds() as f64 / 1000.0;
            if dt == 0.0 {
                0.0
            } else {
                d / dt
            }
        })
        .collect()
}
