//! Mean sidereal time.
//!
//! Ceplecha's station-frame equations key the geocentric Cartesian
//! longitude to the *local mean sidereal time* rather than geodetic
//! longitude. Only mean sidereal time is needed here — the nutation
//! correction that distinguishes apparent from mean sidereal time has
//! no counterpart anywhere in the trajectory pipeline, so it is not
//! implemented.

/// Computes Greenwich Mean Sidereal Time (GMST) in **degrees**
/// (`[0, 360)`) from a Julian Date.
///
/// Uses the IAU 1982 model (Meeus, *Astronomical Algorithms*, 2nd ed.,
/// Ch. 12):
///
/// ```text
/// θ = 280.46061837 + 360.98564736629 × (JD - 2451545.0)
/// ```
///
/// # Example
/// ```
/// use chrono::{Utc, TimeZone};
/// use meteor_trajectory::time::julian_date;
/// use meteor_trajectory::sidereal::gmst_degrees;
///
/// let dt = Utc.with_ymd_and_hms(1987, 4, 10, 19, 21, 0).unwrap();
/// let jd = julian_date(dt);
/// let gmst = gmst_degrees(jd);
/// assert!((gmst - 128.7379).abs() < 1e-3); // matches Meeus Example 11.a (8.5825h)
/// ```
pub fn gmst_degrees(jd: f64) -> f64 {
    let d = jd - 2451545.0;
    let theta = 280.46061837 + 360.98564736629 * d;
    let mut deg = theta % 360.0;
    if deg < 0.0 {
        deg += 360.0;
    }
    deg
}

/// Computes Local Mean Sidereal Time in **degrees** (`[0, 360)`) from a
/// Julian Date and a longitude.
///
/// `lon_deg` may be a geodetic longitude, or a station's local sidereal
/// time substituted for longitude (as [`crate::station::Station::geocentric_lst_vector`]
/// does) — the function itself has no opinion on which.
///
/// # Example
/// ```
/// use chrono::{Utc, TimeZone};
/// use meteor_trajectory::time::julian_date;
/// use meteor_trajectory::sidereal::lst_degrees;
///
/// let dt = Utc.with_ymd_and_hms(1987, 4, 10, 19, 21, 0).unwrap();
/// let jd = julian_date(dt);
/// let lst = lst_degrees(jd, -64.0);
/// assert!((lst - 64.7379).abs() < 1e-3);
/// ```
pub fn lst_degrees(jd: f64, lon_deg: f64) -> f64 {
    let mut deg = gmst_degrees(jd) + lon_deg;
    deg %= 360.0;
    if deg < 0.0 {
        deg += 360.0;
    }
    deg
}
