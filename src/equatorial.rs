//! Equatorial (RA/Dec) ↔ unit-vector conversions.
//!
//! Meteor-plane fitting and radiant intersection both work in the
//! `(ξ, η, ζ)` unit-vector representation of a sky direction; this
//! module is the only place that representation is constructed or
//! unwound back to RA/Dec.

use crate::error::{validate_dec, validate_ra, Result, TrajectoryError};

/// A direction on the celestial sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquatorialDir {
    /// Right ascension in degrees, `[0, 360)`.
    pub ra_deg: f64,
    /// Declination in degrees, `[-90, 90]`.
    pub dec_deg: f64,
}

/// A unit vector in the equatorial frame, `(ξ, η, ζ)` in Ceplecha's
/// notation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitVector3 {
    pub xi: f64,
    pub eta: f64,
    pub zeta: f64,
}

impl UnitVector3 {
    pub fn new(xi: f64, eta: f64, zeta: f64) -> Self {
        UnitVector3 { xi, eta, zeta }
    }

    pub fn magnitude(&self) -> f64 {
        (self.xi * self.xi + self.eta * self.eta + self.zeta * self.zeta).sqrt()
    }

    pub fn dot(&self, other: &UnitVector3) -> f64 {
        self.xi * other.xi + self.eta * other.eta + self.zeta * other.zeta
    }

    pub fn cross(&self, other: &UnitVector3) -> UnitVector3 {
        UnitVector3 {
            xi: self.eta * other.zeta - self.zeta * other.eta,
            eta: self.zeta * other.xi - self.xi * other.zeta,
            zeta: self.xi * other.eta - self.eta * other.xi,
        }
    }

    pub fn scale(&self, k: f64) -> UnitVector3 {
        UnitVector3 { xi: self.xi * k, eta: self.eta * k, zeta: self.zeta * k }
    }

    /// Normalizes the vector to unit magnitude.
    pub fn normalized(&self) -> Self {
        let m = self.magnitude();
        self.scale(1.0 / m)
    }
}

/// Converts a direction on the sky to a unit vector (Ceplecha eqn. 9's
/// `(ξ, η, ζ)`): `(cos δ cos α, cos δ sin α, sin δ)`.
///
/// # Example
/// ```
/// use meteor_trajectory::equatorial::{to_unit_vector, EquatorialDir};
///
/// let v = to_unit_vector(&EquatorialDir { ra_deg: 0.0, dec_deg: 0.0 }).unwrap();
/// assert!((v.xi - 1.0).abs() < 1e-9);
/// assert!(v.eta.abs() < 1e-9);
/// assert!(v.zeta.abs() < 1e-9);
/// ```
pub fn to_unit_vector(dir: &EquatorialDir) -> Result<UnitVector3> {
    validate_ra(dir.ra_deg)?;
    validate_dec(dir.dec_deg)?;

    let ra_rad = dir.ra_deg.to_radians();
    let dec_rad = dir.dec_deg.to_radians();

    Ok(UnitVector3 {
        xi: dec_rad.cos() * ra_rad.cos(),
        eta: dec_rad.cos() * ra_rad.sin(),
        zeta: dec_rad.sin(),
    })
}

/// Inverts [`to_unit_vector`]: given a direction vector of magnitude
/// approximately 1, returns the unique `(RA, Dec)` that reproduces it.
///
/// Branches on the signs of `sin(RA)` (`η`) and `cos(RA)` (`ξ`) to place
/// RA in the correct quadrant, and clamps `ζ` to `[-1, 1]` to absorb
/// floating-point drift before taking `asin`.
///
/// # Errors
/// Returns [`TrajectoryError::Unresolvable`] if the input is too far
/// from unit magnitude to trust (`|v| `outside `[0.5, 1.5]`) — this
/// indicates corrupt input, not a normal condition.
///
/// # Example
/// ```
/// use meteor_trajectory::equatorial::{to_unit_vector, solve_goniometry, EquatorialDir};
///
/// let original = EquatorialDir { ra_deg: 266.7788, dec_deg: 59.4235 };
/// let v = to_unit_vector(&original).unwrap();
/// let recovered = solve_goniometry(&v).unwrap();
/// assert!((recovered.ra_deg - original.ra_deg).abs() < 1e-3);
/// assert!((recovered.dec_deg - original.dec_deg).abs() < 1e-3);
/// ```
pub fn solve_goniometry(v: &UnitVector3) -> Result<EquatorialDir> {
    let magnitude = v.magnitude();
    if !(0.5..=1.5).contains(&magnitude) {
        return Err(TrajectoryError::Unresolvable);
    }

    let zeta_clamped = v.zeta.clamp(-1.0, 1.0);
    let dec_rad = zeta_clamped.asin();
    let cos_dec = dec_rad.cos();

    let ra_rad = if cos_dec.abs() < 1e-12 {
        // Pole: RA is undefined, fixed at 0 by convention.
        0.0
    } else {
        let sin_ra = (v.eta / cos_dec).clamp(-1.0, 1.0);
        let cos_ra = (v.xi / cos_dec).clamp(-1.0, 1.0);
        sin_ra.atan2(cos_ra)
    };

    let mut ra_deg = ra_rad.to_degrees();
    if ra_deg < 0.0 {
        ra_deg += 360.0;
    }

    Ok(EquatorialDir { ra_deg, dec_deg: dec_rad.to_degrees() })
}
