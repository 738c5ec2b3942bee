//! Trajectory solver: per-point three-plane intersection and
//! two-station merge.

use crate::equatorial::{to_unit_vector, EquatorialDir};
use crate::error::{Result, TrajectoryError};
use crate::geodesy::{geodetic_to_geocentric, Geocentric, Geodetic};
use crate::plane::{intersect_three, Plane, PlaneNormal};
use crate::sidereal::gmst_degrees;
use crate::station::{sidereal_geocentric_to_true_geodetic, Station};
use crate::time::julian_date;
use chrono::{DateTime, Utc};

/// A single solved trajectory point, in both the sidereal-substituted
/// geocentric frame used by the solve and true geodetic coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryPoint {
    pub geocentric: Geocentric,
    pub geodetic: Geodetic,
    pub time_utc: DateTime<Utc>,
}

fn station_plane(normal: PlaneNormal, station_vector: Geocentric) -> Plane {
    let d = -(normal.a * station_vector.x_m + normal.b * station_vector.y_m + normal.c * station_vector.z_m);
    Plane { a: normal.a, b: normal.b, c: normal.c, d }
}

/// Builds the normal plane through the sight line from `own_station` to
/// the observed direction, orthogonal to `own_station`'s meteor plane
/// (Ceplecha eqn. 18).
fn normal_plane(sight: &crate::equatorial::UnitVector3, own_normal: &PlaneNormal, own_vector: Geocentric) -> Plane {
    let n = PlaneNormal {
        a: sight.eta * own_normal.c - sight.zeta * own_normal.b,
        b: sight.zeta * own_normal.a - sight.xi * own_normal.c,
        c: sight.xi * own_normal.b - sight.eta * own_normal.a,
    };
    let d = -(n.a * own_vector.x_m + n.b * own_vector.y_m + n.c * own_vector.z_m);
    Plane { a: n.a, b: n.b, c: n.c, d }
}

/// Solves a single observed direction to a 3D point: intersects the two
/// stations' meteor planes with the sight-line normal plane built from
/// `own_station`'s own meteor-plane normal and observed direction, then
/// converts the sidereal-frame solution to true geodetic coordinates by
/// subtracting Greenwich mean sidereal time at `t_utc`.
fn solve_one_point(
    dir: &EquatorialDir,
    t_utc: DateTime<Utc>,
    own_station: &Station,
    own_normal: &PlaneNormal,
    other_station: &Station,
    other_normal: &PlaneNormal,
) -> Result<TrajectoryPoint> {
    let s_own = own_station.geocentric_lst_vector(t_utc)?;
    let s_other = other_station.geocentric_lst_vector(t_utc)?;

    let plane_own = station_plane(*own_normal, s_own);
    let plane_other = station_plane(*other_normal, s_other);

    let sight = to_unit_vector(dir)?;
    let plane_n = normal_plane(&sight, own_normal, s_own);

    let (x, y, z) = intersect_three(plane_own, plane_other, plane_n)?;
    let sidereal_point = Geocentric { x_m: x, y_m: y, z_m: z };

    let gmst_deg = gmst_degrees(julian_date(t_utc));
    let geodetic = sidereal_geocentric_to_true_geodetic(&sidereal_point, gmst_deg);
    let geocentric = geodetic_to_geocentric(&geodetic)?;

    Ok(TrajectoryPoint { geocentric, geodetic, time_utc: t_utc })
}

/// Solves every observed point for one station's track.
///
/// A point whose three-plane solve is singular (or whose direction is
/// numerically invalid) is logged and dropped rather than failing the
/// whole meteor. If more than half of `observed` drop, the meteor fails
/// with [`TrajectoryError::IllConditioned`].
pub fn solve_station_trajectory(
    station_label: &str,
    observed: &[(EquatorialDir, DateTime<Utc>)],
    own_station: &Station,
    own_normal: &PlaneNormal,
    other_station: &Station,
    other_normal: &PlaneNormal,
) -> Result<Vec<TrajectoryPoint>> {
    let total = observed.len();
    let mut points = Vec::with_capacity(total);
    let mut dropped = 0usize;

    for (dir, t_utc) in observed {
        match solve_one_point(dir, *t_utc, own_station, own_normal, other_station, other_normal) {
            Ok(point) => points.push(point),
            Err(err) => {
                dropped += 1;
                tracing::warn!(station = station_label, error = %err, "dropping trajectory point");
            }
        }
    }

    if total > 0 && dropped * 2 > total {
        return Err(TrajectoryError::IllConditioned {
            station: station_label.to_string(),
            dropped,
            total,
        });
    }

    Ok(points)
}

/// Merges two per-station trajectories into one time-tagged sequence by
/// greedily emitting whichever head has the greater height, so the
/// result is strictly non-increasing in height by construction.
pub fn merge_trajectories(a: Vec<TrajectoryPoint>, b: Vec<TrajectoryPoint>) -> Vec<TrajectoryPoint> {
    let mut a = a.into_iter().peekable();
    let mut b = b.into_iter().peekable();
    let mut merged = Vec::with_capacity(a.len() + b.len());

    loop {
        match (a.peek(), b.peek()) {
            (Some(pa), Some(pb)) => {
                if pa.geodetic.height_m >= pb.geodetic.height_m {
                    merged.push(a.next().unwrap());
                } else {
                    merged.push(b.next().unwrap());
                }
            }
            (Some(_), None) => merged.push(a.next().unwrap()),
            (None, Some(_)) => merged.push(b.next().unwrap()),
            (None, None) => break,
        }
    }

    merged
}
