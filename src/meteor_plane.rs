//! Meteor-plane solver: fits the great circle through a station's
//! observed meteor directions.

use crate::equatorial::{to_unit_vector, EquatorialDir};
use crate::error::{Result, TrajectoryError};
use crate::plane::PlaneNormal;

/// Fits the plane normal (Ceplecha eqns. 9 & 11) best describing the
/// great circle through `points`, expressed in the equatorial frame.
///
/// Accumulates `Σξη, Σηζ, Σηη, Σξζ, Σξξ` over all points, then
/// ```text
/// a' = Σξη·Σηζ − Σηη·Σξζ
/// b' = Σξη·Σξζ − Σξξ·Σηζ
/// c' = Σξξ·Σηη − (Σξη)²
/// ```
/// normalized by `d' = √(a'²+b'²+c'²)`.
///
/// # Errors
/// A single point, or points degenerate enough that `d' ≈ 0` (e.g.
/// collinear on a meridian), yield [`TrajectoryError::Underdetermined`].
pub fn fit_meteor_plane(points: &[EquatorialDir]) -> Result<PlaneNormal> {
    if points.len() < 2 {
        return Err(TrajectoryError::Underdetermined {
            reason: format!("need at least 2 points, got {}", points.len()),
        });
    }

    let (mut s_xi_eta, mut s_eta_zeta, mut s_eta_eta, mut s_xi_zeta, mut s_xi_xi) =
        (0.0, 0.0, 0.0, 0.0, 0.0);

    for dir in points {
        let v = to_unit_vector(dir)?;
        s_xi_eta += v.xi * v.eta;
        s_eta_zeta += v.eta * v.zeta;
        s_eta_eta += v.eta * v.eta;
        s_xi_zeta += v.xi * v.zeta;
        s_xi_xi += v.xi * v.xi;
    }

    let a_prime = s_xi_eta * s_eta_zeta - s_eta_eta * s_xi_zeta;
    let b_prime = s_xi_eta * s_xi_zeta - s_xi_xi * s_eta_zeta;
    let c_prime = s_xi_xi * s_eta_eta - s_xi_eta * s_xi_eta;
    let d_prime = (a_prime * a_prime + b_prime * b_prime + c_prime * c_prime).sqrt();

    if d_prime < 1e-12 {
        return Err(TrajectoryError::Underdetermined {
            reason: "points are degenerate (e.g. collinear on a meridian)".into(),
        });
    }

    Ok(PlaneNormal { a: a_prime / d_prime, b: b_prime / d_prime, c: c_prime / d_prime })
}
