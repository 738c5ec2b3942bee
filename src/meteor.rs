//! Top-level meteor record: the two stations' observations of a single
//! event, plus lazily-computed derived quantities.
//!
//! Each derived quantity (meteor planes, radiant, per-station
//! trajectories, the merged trajectory, kinematics) is computed once
//! and cached behind a [`OnceLock`] — only the success path is cached,
//! since [`TrajectoryError`] carries a non-`Clone` I/O variant; a
//! failing computation is simply retried (cheap, and rare) on the next
//! call rather than cached.

use crate::equatorial::EquatorialDir;
use crate::error::Result;
use crate::kinematics::{along_track_distances, instantaneous_velocities};
use crate::meteor_plane::fit_meteor_plane;
use crate::plane::PlaneNormal;
use crate::radiant::{solve_radiant, Radiant};
use crate::station::Station;
use crate::trajectory::{merge_trajectories, solve_station_trajectory, TrajectoryPoint};
use chrono::{DateTime, Utc};
use std::sync::{Arc, OnceLock};

/// One station's observed directions for a meteor, each tagged with
/// its capture instant.
#[derive(Debug, Clone, PartialEq)]
pub struct MeteorObservation {
    pub directions: Vec<EquatorialDir>,
    pub times_utc: Vec<DateTime<Utc>>,
}

impl MeteorObservation {
    fn as_pairs(&self) -> Vec<(EquatorialDir, DateTime<Utc>)> {
        self.directions.iter().copied().zip(self.times_utc.iter().copied()).collect()
    }

    fn epoch(&self) -> Option<DateTime<Utc>> {
        self.times_utc.first().copied()
    }
}

/// A two-station meteor observation and its derived geometry.
pub struct Meteor {
    station_a: Arc<Station>,
    station_b: Arc<Station>,
    obs_a: MeteorObservation,
    obs_b: MeteorObservation,
    plane_a: OnceLock<PlaneNormal>,
    plane_b: OnceLock<PlaneNormal>,
    radiant: OnceLock<Radiant>,
    trajectory_a: OnceLock<Vec<TrajectoryPoint>>,
    trajectory_b: OnceLock<Vec<TrajectoryPoint>>,
    merged: OnceLock<Vec<TrajectoryPoint>>,
}

impl Meteor {
    pub fn new(
        station_a: Arc<Station>,
        obs_a: MeteorObservation,
        station_b: Arc<Station>,
        obs_b: MeteorObservation,
    ) -> Self {
        Meteor {
            station_a,
            station_b,
            obs_a,
            obs_b,
            plane_a: OnceLock::new(),
            plane_b: OnceLock::new(),
            radiant: OnceLock::new(),
            trajectory_a: OnceLock::new(),
            trajectory_b: OnceLock::new(),
            merged: OnceLock::new(),
        }
    }

    pub fn station_a(&self) -> &Station {
        &self.station_a
    }

    pub fn station_b(&self) -> &Station {
        &self.station_b
    }

    /// Station A's fitted meteor-plane normal.
    pub fn meteor_plane_a(&self) -> Result<PlaneNormal> {
        if let Some(v) = self.plane_a.get() {
            return Ok(*v);
        }
        let v = fit_meteor_plane(&self.obs_a.directions)?;
        Ok(*self.plane_a.get_or_init(|| v))
    }

    /// Station B's fitted meteor-plane normal.
    pub fn meteor_plane_b(&self) -> Result<PlaneNormal> {
        if let Some(v) = self.plane_b.get() {
            return Ok(*v);
        }
        let v = fit_meteor_plane(&self.obs_b.directions)?;
        Ok(*self.plane_b.get_or_init(|| v))
    }

    /// The meteor's radiant, resolved at station A's first
    /// observation instant.
    pub fn radiant(&self) -> Result<Radiant> {
        if let Some(v) = self.radiant.get() {
            return Ok(*v);
        }
        let n_a = self.meteor_plane_a()?;
        let n_b = self.meteor_plane_b()?;
        let epoch = self.obs_a.epoch().or_else(|| self.obs_b.epoch()).unwrap_or_default();
        let v = solve_radiant(&n_a, &n_b, &self.station_a, &self.station_b, epoch)?;
        Ok(*self.radiant.get_or_init(|| v))
    }

    /// Station A's solved trajectory points.
    pub fn trajectory_a(&self) -> Result<Vec<TrajectoryPoint>> {
        if let Some(v) = self.trajectory_a.get() {
            return Ok(v.clone());
        }
        let n_a = self.meteor_plane_a()?;
        let n_b = self.meteor_plane_b()?;
        let v = solve_station_trajectory(
            &self.station_a.label,
            &self.obs_a.as_pairs(),
            &self.station_a,
            &n_a,
            &self.station_b,
            &n_b,
        )?;
        Ok(self.trajectory_a.get_or_init(|| v).clone())
    }

    /// Station B's solved trajectory points.
    pub fn trajectory_b(&self) -> Result<Vec<TrajectoryPoint>> {
        if let Some(v) = self.trajectory_b.get() {
            return Ok(v.clone());
        }
        let n_a = self.meteor_plane_a()?;
        let n_b = self.meteor_plane_b()?;
        let v = solve_station_trajectory(
            &self.station_b.label,
            &self.obs_b.as_pairs(),
            &self.station_b,
            &n_b,
            &self.station_a,
            &n_a,
        )?;
        Ok(self.trajectory_b.get_or_init(|| v).clone())
    }

    /// The merged, height-ordered trajectory.
    pub fn merged_trajectory(&self) -> Result<Vec<TrajectoryPoint>> {
        if let Some(v) = self.merged.get() {
            return Ok(v.clone());
        }
        let a = self.trajectory_a()?;
        let b = self.trajectory_b()?;
        let v = merge_trajectories(a, b);
        Ok(self.merged.get_or_init(|| v).clone())
    }

    /// Station A's along-track distances (meters), from its first
    /// trajectory point.
    ///
    /// Kinematics are computed per station rather than over the merged
    /// trajectory: the merge is height-ordered, not time-ordered, so
    /// its `time_utc` tags are not monotonically increasing and would
    /// feed [`instantaneous_velocities`] a denominator that can go flat
    /// or negative.
    pub fn along_track_distances_a_m(&self) -> Result<Vec<f64>> {
        Ok(along_track_distances(&self.trajectory_a()?))
    }

    /// Station B's along-track distances (meters), from its first
    /// trajectory point.
    pub fn along_track_distances_b_m(&self) -> Result<Vec<f64>> {
        Ok(along_track_distances(&self.trajectory_b()?))
    }

    /// Station A's secant-from-first-point velocities (m/s).
    pub fn velocities_a_mps(&self) -> Result<Vec<f64>> {
        Ok(instantaneous_velocities(&self.trajectory_a()?))
    }

    /// Station B's secant-from-first-point velocities (m/s).
    pub fn velocities_b_mps(&self) -> Result<Vec<f64>> {
        Ok(instantaneous_velocities(&self.trajectory_b()?))
    }
}
