//! Radiant solver: the meteor's apparent point of origin, as the
//! intersection of the two stations' meteor planes.

use crate::equatorial::{solve_goniometry, EquatorialDir};
use crate::error::Result;
use crate::horizontal::equatorial_to_horizontal;
use crate::plane::{angle_between_deg, PlaneNormal};
use crate::station::Station;
use chrono::{DateTime, Utc};

/// A solved radiant: its sky direction plus the inter-plane angle `Q`
/// (degrees) between the two stations' meteor planes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Radiant {
    pub direction: EquatorialDir,
    pub q_deg: f64,
}

/// Intersects two stations' meteor-plane normals to resolve the
/// meteor's radiant.
///
/// The cross product `nA × nB` has two antipodal orientations; the one
/// whose direction sits above the horizon at *both* stations at
/// `t_utc` is chosen. If neither orientation clears both horizons the
/// first (unnegated) choice is returned — the altitude check is a
/// disambiguation heuristic, not a correctness requirement.
pub fn solve_radiant(
    n_a: &PlaneNormal,
    n_b: &PlaneNormal,
    station_a: &Station,
    station_b: &Station,
    t_utc: DateTime<Utc>,
) -> Result<Radiant> {
    let cross = n_a.cross(n_b);
    let normalized = cross.scale(1.0 / cross.magnitude());

    let candidate = solve_goniometry(&crate::equatorial::UnitVector3::new(
        normalized.a,
        normalized.b,
        normalized.c,
    ))?;

    let direction = if above_both_horizons(&candidate, station_a, station_b, t_utc) {
        candidate
    } else {
        let negated = normalized.scale(-1.0);
        let alt_candidate = solve_goniometry(&crate::equatorial::UnitVector3::new(
            negated.a, negated.b, negated.c,
        ))?;
        alt_candidate
    };

    let q_deg = angle_between_deg(n_a, n_b);

    Ok(Radiant { direction, q_deg })
}

fn above_both_horizons(dir: &EquatorialDir, station_a: &Station, station_b: &Station, t_utc: DateTime<Utc>) -> bool {
    equatorial_to_horizontal(dir, station_a, t_utc).alt_deg >= 0.0
        && equatorial_to_horizontal(dir, station_b, t_utc).alt_deg >= 0.0
}
