//! Equatorial ↔ horizontal (Alt/Az) transforms.
//!
//! Used only to test whether a candidate radiant direction lies above a
//! station's horizon at the meteor epoch.

use crate::equatorial::EquatorialDir;
use crate::station::Station;
use chrono::{DateTime, Utc};
use std::f64::consts::PI;

/// Altitude/azimuth, both in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Horizontal {
    /// Elevation above the horizon, `[-90, 90]`.
    pub alt_deg: f64,
    /// Degrees clockwise from true north.
    pub az_deg: f64,
}

/// Converts equatorial coordinates to horizontal coordinates for a
/// given station and UTC instant, via the standard Meeus spherical
/// trigonometry formulation (hour angle from local sidereal time, then
/// altitude/azimuth from HA/Dec/latitude).
///
/// # Example
/// ```
/// use chrono::{Utc, TimeZone};
/// use meteor_trajectory::equatorial::EquatorialDir;
/// use meteor_trajectory::geodesy::Geodetic;
/// use meteor_trajectory::station::Station;
/// use meteor_trajectory::horizontal::equatorial_to_horizontal;
///
/// let station = Station::new(
///     Geodetic { lat_deg: 39.0005, lon_deg: -92.3009, height_m: 0.0 },
///     0.0,
///     "test",
/// ).unwrap();
/// let dt = Utc.with_ymd_and_hms(2025, 4, 21, 19, 5, 6).unwrap();
///
/// let horiz = equatorial_to_horizontal(&EquatorialDir { ra_deg: 279.2347, dec_deg: 38.7837 }, &station, dt);
/// assert!(horiz.alt_deg > -90.0 && horiz.alt_deg < 90.0);
/// ```
pub fn equatorial_to_horizontal(dir: &EquatorialDir, station: &Station, t_utc: DateTime<Utc>) -> Horizontal {
    let dec_rad = dir.dec_deg.to_radians();
    let lat_rad = station.geodetic.lat_deg.to_radians();

    let lst_deg = station.lst_degrees(t_utc);
    let ha_deg = lst_deg - dir.ra_deg;
    let ha_rad = ha_deg.to_radians();

    let sin_alt = dec_rad.sin() * lat_rad.sin() + dec_rad.cos() * lat_rad.cos() * ha_rad.cos();
    let alt_rad = sin_alt.clamp(-1.0, 1.0).asin();

    let cos_az = ((dec_rad.sin() - alt_rad.sin() * lat_rad.sin()) / (alt_rad.cos() * lat_rad.cos()))
        .clamp(-1.0, 1.0);
    let mut az_rad = cos_az.acos();
    if ha_rad.sin() > 0.0 {
        az_rad = 2.0 * PI - az_rad;
    }

    let mut az_deg = az_rad.to_degrees();
    if az_deg < 0.0 {
        az_deg += 360.0;
    }

    Horizontal { alt_deg: alt_rad.to_degrees(), az_deg }
}
