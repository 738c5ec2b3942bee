//! Host configuration surface: the keyed options a host
//! supplies to construct the two stations and drive the plate-solver
//! gateway. The core never performs its own file I/O — loading a
//! `config.toml` or equivalent is the host's job; this module only
//! describes the shape of the values it expects.

use crate::error::Result;
use crate::geodesy::Geodetic;
use crate::station::Station;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One observatory's share of the host configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ObservatoryConfig {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub sealevel: f64,
    pub timezone: f64,
    pub wcs_path: Option<String>,
    pub wcs_time: Option<DateTime<Utc>>,
}

impl ObservatoryConfig {
    /// Builds the immutable [`Station`] this configuration describes.
    pub fn to_station(&self) -> Result<Station> {
        let geodetic = Geodetic {
            lat_deg: self.latitude,
            lon_deg: self.longitude,
            height_m: self.sealevel,
        };
        let station = Station::new(geodetic, self.timezone, self.name.clone())?;
        Ok(match (&self.wcs_path, self.wcs_time) {
            (Some(path), Some(time)) => station.with_wcs(path.clone(), time),
            _ => station,
        })
    }
}

/// The full keyed configuration surface described in the external
/// interfaces section: two observatories plus plate-solver policy.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HostConfig {
    pub first_observatory: ObservatoryConfig,
    pub second_observatory: ObservatoryConfig,
    /// Plate-solver poll interval, in seconds.
    pub timeout: u32,
    /// Folder-pairing tolerance, in seconds.
    pub time_tolerance: u32,
    /// Plate-solver credential.
    pub token: String,
    /// When true, use each station's pre-bound WCS instead of
    /// submitting a new plate solve.
    pub load_fixed: bool,
}

impl HostConfig {
    /// Builds both stations described by this configuration.
    pub fn to_stations(&self) -> Result<(Station, Station)> {
        Ok((self.first_observatory.to_station()?, self.second_observatory.to_station()?))
    }
}
