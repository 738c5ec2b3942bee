//! # meteor-trajectory
//!
//! Two-station astrometric-geometric meteor trajectory solver
//! implementing Ceplecha (1987): observation ingestion, plate-solution
//! application, coordinate-frame transformations, meteor-plane
//! fitting, radiant computation, per-point trajectory reconstruction,
//! time-ordered merging, and kinematics.
//!
//! The crate is a synchronous core with no interior suspension; the
//! only cancellable, blocking operations live behind the
//! [`gateway`] contract, which the host drives from its own worker.
//!
//! ## Quick example: fit a meteor plane from a handful of directions
//!
//! ```
//! use meteor_trajectory::equatorial::EquatorialDir;
//! use meteor_trajectory::meteor_plane::fit_meteor_plane;
//!
//! let points = vec![
//!     EquatorialDir { ra_deg: 260.0, dec_deg: 55.0 },
//!     EquatorialDir { ra_deg: 262.0, dec_deg: 57.0 },
//!     EquatorialDir { ra_deg: 264.0, dec_deg: 59.0 },
//! ];
//! let normal = fit_meteor_plane(&points).unwrap();
//! assert!((normal.a * normal.a + normal.b * normal.b + normal.c * normal.c - 1.0).abs() < 1e-9);
//! ```

pub mod config;
pub mod equatorial;
pub mod error;
pub mod gateway;
pub mod geodesy;
pub mod gpx_export;
pub mod horizontal;
pub mod kinematics;
pub mod meteor;
pub mod meteor_plane;
pub mod parser;
pub mod pixel;
pub mod plane;
pub mod plate;
pub mod radiant;
pub mod sidereal;
pub mod station;
pub mod time;
pub mod trajectory;

#[cfg(test)]
pub mod tests;
