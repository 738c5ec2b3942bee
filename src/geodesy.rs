//! Geodetic ↔ geocentric Cartesian conversions.
//!
//! Ceplecha (1987) eqns. 7–8: a closed-form correction from geodetic to
//! geocentric latitude plus an empirical Earth-radius-at-latitude term,
//! rather than the textbook WGS-84 ellipsoid formula. The constants
//! below are Ceplecha's, not a generic ellipsoid's, and must be used
//! verbatim for the station-frame math in [`crate::station`] to agree
//! with the rest of the pipeline.

use crate::error::{validate_latitude, Result};

/// A position on (or above) the reference ellipsoid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geodetic {
    /// Latitude in degrees, +N/-S.
    pub lat_deg: f64,
    /// Longitude in degrees, +E/-W, Greenwich = 0.
    pub lon_deg: f64,
    /// Height above the reference ellipsoid, in meters.
    pub height_m: f64,
}

/// A geocentric Cartesian position, in meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geocentric {
    pub x_m: f64,
    pub y_m: f64,
    pub z_m: f64,
}

impl Geocentric {
    /// Euclidean distance from the origin (the geocenter), in meters.
    pub fn magnitude_m(&self) -> f64 {
        (self.x_m * self.x_m + self.y_m * self.y_m + self.z_m * self.z_m).sqrt()
    }

    /// Euclidean distance to another geocentric point, in meters.
    pub fn distance_m(&self, other: &Geocentric) -> f64 {
        let dx = self.x_m - other.x_m;
        let dy = self.y_m - other.y_m;
        let dz = self.z_m - other.z_m;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

/// Ceplecha's geocentric latitude correction (eqn. 7), in degrees.
fn geocentric_latitude_deg(lat_deg: f64) -> f64 {
    lat_deg - 0.1924240867 * (2.0 * lat_deg).to_radians().sin()
        + 0.000323122 * (4.0 * lat_deg).to_radians().sin()
        - 0.0000007235 * (6.0 * lat_deg).to_radians().sin()
}

/// Ceplecha's Earth-radius-at-latitude term (eqn. 7), in meters.
fn earth_radius_m(lat_deg: f64) -> f64 {
    let sin2 = lat_deg.to_radians().sin().powi(2);
    (40680669.86 * (1.0 - 0.0133439554 * sin2) / (1.0 - 0.006694385096 * sin2)).sqrt()
}

/// Converts geodetic (lat, lon, height) to geocentric (X, Y, Z), in
/// meters, via Ceplecha eqns. 7–8.
///
/// `lon_deg` may be a geodetic longitude or a local sidereal time
/// substituted for longitude — see [`crate::station::Station::geocentric_lst_vector`].
///
/// # Example
/// ```
/// use meteor_trajectory::geodesy::{geodetic_to_geocentric, Geodetic};
///
/// let g = geodetic_to_geocentric(&Geodetic { lat_deg: 49.970222, lon_deg: 14.780208, height_m: 524.0 }).unwrap();
/// assert!(g.magnitude_m() > 6_300_000.0 && g.magnitude_m() < 6_400_000.0);
/// ```
pub fn geodetic_to_geocentric(g: &Geodetic) -> Result<Geocentric> {
    validate_latitude(g.lat_deg)?;

    let phi_prime_rad = geocentric_latitude_deg(g.lat_deg).to_radians();
    let r = earth_radius_m(g.lat_deg);
    let lon_rad = g.lon_deg.to_radians();

    let rh = r + g.height_m;
    Ok(Geocentric {
        x_m: rh * phi_prime_rad.cos() * lon_rad.cos(),
        y_m: rh * phi_prime_rad.cos() * lon_rad.sin(),
        z_m: rh * phi_prime_rad.sin(),
    })
}

/// Converts geocentric (X, Y, Z) back to geodetic (lat, lon, height).
///
/// The forward map's geocentric latitude `φ'` satisfies `tan(φ') = Z / p`
/// exactly (`p = sqrt(X² + Y²)`), independent of height, so `φ'` is
/// recovered directly via `atan2`. Geodetic latitude is then the root of
/// `geocentric_latitude_deg(lat) = φ'`, found by Newton's method from an
/// initial guess of `φ'` itself (the correction is under 0.2°, so this
/// converges in a handful of iterations). This is stable at the poles:
/// `p → 0` gives `φ' → ±90°` via `atan2`, and every correction term
/// vanishes there (`sin(2·90°) = sin(4·90°) = sin(6·90°) = 0`), so
/// `lat = φ' = ±90°` exactly with no division by zero.
///
/// # Example
/// ```
/// use meteor_trajectory::geodesy::{geodetic_to_geocentric, geocentric_to_geodetic, Geodetic};
///
/// let original = Geodetic { lat_deg: 49.107290, lon_deg: 15.200930, height_m: 656.0 };
/// let geocentric = geodetic_to_geocentric(&original).unwrap();
/// let back = geocentric_to_geodetic(&geocentric);
///
/// assert!((back.lat_deg - original.lat_deg).abs() < 1e-8);
/// assert!((back.lon_deg - original.lon_deg).abs() < 1e-8);
/// assert!((back.height_m - original.height_m).abs() < 1e-3);
/// ```
pub fn geocentric_to_geodetic(g: &Geocentric) -> Geodetic {
    let p = (g.x_m * g.x_m + g.y_m * g.y_m).sqrt();
    let lon_deg = g.y_m.atan2(g.x_m).to_degrees();
    let phi_prime_deg = g.z_m.atan2(p).to_degrees();

    let mut lat_deg = phi_prime_deg;
    for _ in 0..20 {
        let f = geocentric_latitude_deg(lat_deg) - phi_prime_deg;
        if f.abs() < 1e-12 {
            break;
        }
        // Numeric derivative; the correction term is smooth and small,
        // so a fixed step is sufficient for Newton's method here.
        let h = 1e-6;
        let df = (geocentric_latitude_deg(lat_deg + h) - geocentric_latitude_deg(lat_deg - h)) / (2.0 * h);
        lat_deg -= f / df;
    }

    let magnitude = g.magnitude_m();
    let height_m = magnitude - earth_radius_m(lat_deg);

    Geodetic { lat_deg, lon_deg, height_m }
}
