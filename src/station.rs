//! Station model: an immutable observing-site descriptor plus its
//! derived geocentric frame.

use crate::error::Result;
use crate::geodesy::{geocentric_to_geodetic, geodetic_to_geocentric, Geocentric, Geodetic};
use crate::sidereal::lst_degrees;
use crate::time::julian_date;
use chrono::{DateTime, Utc};

/// A fixed-camera plate solution bound to a station, used when a fresh
/// plate solve is unavailable (gateway timeout) or undesired
/// (`load_fixed` in the host configuration).
#[derive(Debug, Clone, PartialEq)]
pub struct StationWcs {
    /// Path to the WCS file, opaque to this crate.
    pub path: String,
    /// Instant the plate solution was computed for.
    pub time: DateTime<Utc>,
}

/// An immutable ground-station descriptor.
///
/// Stations are value types: `with_wcs`/`with_time_zone` are consuming
/// builders that return a new `Station` rather than mutating in place,
/// so a `Station` shared by reference (e.g. across two `Meteor`s) is
/// never mutated out from under its holders.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    pub label: String,
    pub geodetic: Geodetic,
    /// Offset from UTC, in hours.
    pub time_zone_hours: f64,
    pub wcs: Option<StationWcs>,
    geocentric: Geocentric,
}

impl Station {
    /// Constructs a station, precomputing its geocentric position once.
    pub fn new(geodetic: Geodetic, time_zone_hours: f64, label: impl Into<String>) -> Result<Self> {
        let geocentric = geodetic_to_geocentric(&geodetic)?;
        Ok(Station { label: label.into(), geodetic, time_zone_hours, wcs: None, geocentric })
    }

    /// The station's precomputed geocentric position (meters).
    pub fn geocentric(&self) -> Geocentric {
        self.geocentric
    }

    /// Rebinds the station's fixed-camera plate solution.
    pub fn with_wcs(mut self, path: impl Into<String>, time: DateTime<Utc>) -> Self {
        self.wcs = Some(StationWcs { path: path.into(), time });
        self
    }

    /// Replaces the station's time-zone offset.
    pub fn with_time_zone(mut self, time_zone_hours: f64) -> Self {
        self.time_zone_hours = time_zone_hours;
        self
    }

    /// Local mean sidereal time at this station, in degrees, for a UTC
    /// instant.
    ///
    /// The station's time-zone offset is added to the instant *before*
    /// computing sidereal time (`+ time_zone · hour`); the fixed-WCS
    /// path and its tests depend on this ordering.
    pub fn lst_degrees(&self, t_utc: DateTime<Utc>) -> f64 {
        let jd = julian_date(t_utc);
        let jd_local = crate::time::jd_plus_hours(jd, self.time_zone_hours);
        lst_degrees(jd_local, self.geodetic.lon_deg)
    }

    /// The geocentric vector obtained by substituting this station's
    /// local sidereal time (in degrees) for geodetic longitude — the
    /// vector that appears in Ceplecha's intersection equations.
    pub fn geocentric_lst_vector(&self, t_utc: DateTime<Utc>) -> Result<Geocentric> {
        let lst = self.lst_degrees(t_utc);
        geodetic_to_geocentric(&Geodetic {
            lat_deg: self.geodetic.lat_deg,
            lon_deg: lst,
            height_m: self.geodetic.height_m,
        })
    }
}

/// Converts a geocentric point expressed in the sidereal (LST) frame
/// back to true geodetic coordinates by subtracting Greenwich mean
/// sidereal time from the sidereal longitude.
///
/// Used by [`crate::trajectory`] once a point has been solved in the
/// LST-substituted frame.
pub fn sidereal_geocentric_to_true_geodetic(g: &Geocentric, gmst_deg: f64) -> Geodetic {
    let sidereal_geodetic = geocentric_to_geodetic(g);
    let mut lon_deg = sidereal_geodetic.lon_deg - gmst_deg;
    lon_deg = ((lon_deg + 180.0).rem_euclid(360.0)) - 180.0;
    Geodetic { lat_deg: sidereal_geodetic.lat_deg, lon_deg, height_m: sidereal_geodetic.height_m }
}
