//! Error types for the meteor trajectory solver.

use thiserror::Error;

/// Errors surfaced by the plate-solution gateway.
///
/// These map directly onto the operation table in the gateway contract:
/// the gateway itself never retries, so callers see exactly one of
/// these per failed call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GatewayError {
    /// Credential rejected by the plate-solving service.
    #[error("authentication failed")]
    AuthFailed,

    /// Transport-level failure (network, malformed response, etc.).
    #[error("transport error: {0}")]
    Transport(String),

    /// Poll budget (`max_attempts` × `poll_interval`) exhausted before the job finished.
    #[error("timed out waiting for plate solution after {attempts} attempts")]
    Timeout {
        /// Number of polls performed before giving up.
        attempts: u32,
    },

    /// `download_wcs` called before the job reports done.
    #[error("plate solution not ready")]
    NotReady,

    /// The caller's cancellation signal fired between polls.
    #[error("cancelled")]
    Cancelled,
}

/// Top-level error type for the solver.
///
/// Component-internal faults are either recovered locally (logged and
/// skipped when per-point, see [`crate::trajectory`]) or surfaced as one
/// of these variants. The core never silently discards a whole meteor
/// without surfacing at least `Underdetermined` or `IllConditioned`.
#[derive(Debug, Error)]
pub enum TrajectoryError {
    /// Malformed detection file; recoverable at the meteor granularity.
    #[error("parse error at byte offset {offset}: {message}")]
    Parse {
        /// Byte offset into the file where parsing broke down.
        offset: usize,
        /// Description of what was expected.
        message: String,
    },

    /// An angular or positional input fell outside its documented domain.
    #[error("{parameter} = {value} is outside the valid domain {valid_range}")]
    NumericDomain {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// The invalid value.
        value: f64,
        /// Human-readable description of the valid domain.
        valid_range: &'static str,
    },

    /// `solve_goniometry` could not find a branch reproducing the input
    /// unit vector within tolerance. Indicates corrupt input, not a
    /// normal condition.
    #[error("goniometric inverse could not reproduce the input direction")]
    Unresolvable,

    /// Too few, or degenerate (e.g. collinear-on-a-meridian), observations
    /// to fit a meteor plane.
    #[error("underdetermined meteor plane fit: {reason}")]
    Underdetermined {
        /// Why the fit could not be resolved.
        reason: String,
    },

    /// More than half of one station's points failed the three-plane
    /// solve; the whole meteor is unusable.
    #[error("ill-conditioned trajectory: dropped {dropped}/{total} points for station {station}")]
    IllConditioned {
        /// Label of the offending station.
        station: String,
        /// Points dropped.
        dropped: usize,
        /// Total points attempted.
        total: usize,
    },

    /// Plate-solution gateway failure. Callers may fall back to a
    /// station's pre-bound WCS.
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// File not found / unreadable.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for `Result`s in this crate.
pub type Result<T> = std::result::Result<T, TrajectoryError>;

/// Validates that a right ascension lies in `[0, 360)` degrees.
#[inline]
pub fn validate_ra(ra_deg: f64) -> Result<()> {
    if !(0.0..360.0).contains(&ra_deg) {
        Err(TrajectoryError::NumericDomain {
            parameter: "RA",
            value: ra_deg,
            valid_range: "[0, 360)",
        })
    } else {
        Ok(())
    }
}

/// Validates that a declination lies in `[-90, 90]` degrees.
#[inline]
pub fn validate_dec(dec_deg: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&dec_deg) {
        Err(TrajectoryError::NumericDomain {
            parameter: "Dec",
            value: dec_deg,
            valid_range: "[-90, 90]",
        })
    } else {
        Ok(())
    }
}

/// Validates that a latitude lies in `[-90, 90]` degrees.
#[inline]
pub fn validate_latitude(lat_deg: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&lat_deg) {
        Err(TrajectoryError::NumericDomain {
            parameter: "latitude",
            value: lat_deg,
            valid_range: "[-90, 90]",
        })
    } else {
        Ok(())
    }
}
