//! Pixel ↔ equatorial conversion via a plate solution.
//!
//! A plate solution is treated abstractly as a [`PlateSolution`]
//! implementor bound to a WCS file path; the solver consumes it only
//! through the pixel↔equatorial primitive and never interprets a WCS's
//! internals beyond that. [`WcsFile`] implements that contract for
//! the common case of a gnomonic (TAN) tangent-plane solution described
//! by `CRVAL`/`CRPIX`/`CD` header cards — the standard projection used
//! by astrometry.net and most all-sky meteor cameras — adapting the
//! scale/rotation tangent-plane projection into a full CD-matrix form.

use crate::equatorial::EquatorialDir;
use crate::error::{Result, TrajectoryError};
use crate::pixel::PixelPoint;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// The pixel↔equatorial primitive: a function object bound
/// to a plate solution. Implementations may use any equivalent library;
/// this crate's own [`WcsFile`] is a minimal TAN-projection reference.
pub trait PlateSolution {
    fn pixel_to_equatorial(&self, p: PixelPoint) -> Result<EquatorialDir>;
    fn equatorial_to_pixel(&self, dir: &EquatorialDir) -> Result<PixelPoint>;
}

/// A gnomonic (TAN) WCS plate solution: reference pixel, reference sky
/// position, and a 2×2 linear CD matrix mapping pixel offsets to
/// intermediate world coordinates in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WcsFile {
    pub crpix1: f64,
    pub crpix2: f64,
    pub crval1_deg: f64,
    pub crval2_deg: f64,
    pub cd: [[f64; 2]; 2],
}

impl WcsFile {
    /// Parses the subset of FITS header cards this crate needs
    /// (`CRPIX1`, `CRPIX2`, `CRVAL1`, `CRVAL2`, `CD1_1`, `CD1_2`,
    /// `CD2_1`, `CD2_2`) out of a WCS file. Cards are `KEY = value`
    /// lines (optionally FITS-card-padded to 80 columns with a trailing
    /// `/ comment`); anything else is ignored.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_header_text(&text)
    }

    /// Parses WCS header cards directly out of in-memory text, without
    /// touching the filesystem.
    pub fn from_header_text(text: &str) -> Result<Self> {
        let mut values: HashMap<&str, f64> = HashMap::new();
        for line in text.lines() {
            let Some((key, rest)) = line.split_once('=') else { continue };
            let key = key.trim();
            let value_part = rest.split('/').next().unwrap_or(rest).trim();
            if let Ok(v) = value_part.parse::<f64>() {
                values.insert(key, v);
            }
        }

        let get = |key: &'static str| -> Result<f64> {
            values.get(key).copied().ok_or(TrajectoryError::Parse {
                offset: 0,
                message: format!("missing WCS header card {key}"),
            })
        };

        Ok(WcsFile {
            crpix1: get("CRPIX1")?,
            crpix2: get("CRPIX2")?,
            crval1_deg: get("CRVAL1")?,
            crval2_deg: get("CRVAL2")?,
            cd: [[get("CD1_1")?, get("CD1_2")?], [get("CD2_1")?, get("CD2_2")?]],
        })
    }

    fn cd_inverse(&self) -> [[f64; 2]; 2] {
        let [[a, b], [c, d]] = self.cd;
        let det = a * d - b * c;
        [[d / det, -b / det], [-c / det, a / det]]
    }
}

impl PlateSolution for WcsFile {
    fn pixel_to_equatorial(&self, p: PixelPoint) -> Result<EquatorialDir> {
        let dx = p.x - self.crpix1;
        let dy = p.y - self.crpix2;

        // Intermediate world coordinates (degrees), then radians.
        let xi = (self.cd[0][0] * dx + self.cd[0][1] * dy).to_radians();
        let eta = (self.cd[1][0] * dx + self.cd[1][1] * dy).to_radians();

        let ra0 = self.crval1_deg.to_radians();
        let dec0 = self.crval2_deg.to_radians();

        let rho = (xi * xi + eta * eta).sqrt();
        let c = rho.atan();
        let (sin_c, cos_c) = (c.sin(), c.cos());

        let dec_rad = if rho == 0.0 {
            dec0
        } else {
            (cos_c * dec0.sin() + eta * sin_c * dec0.cos() / rho).asin()
        };
        let ra_rad = if rho == 0.0 {
            ra0
        } else {
            ra0 + (xi * sin_c).atan2(rho * dec0.cos() * cos_c - eta * dec0.sin() * sin_c)
        };

        let mut ra_deg = ra_rad.to_degrees();
        ra_deg = ra_deg.rem_euclid(360.0);

        Ok(EquatorialDir { ra_deg, dec_deg: dec_rad.to_degrees() })
    }

    fn equatorial_to_pixel(&self, dir: &EquatorialDir) -> Result<PixelPoint> {
        let ra = dir.ra_deg.to_radians();
        let dec = dir.dec_deg.to_radians();
        let ra0 = self.crval1_deg.to_radians();
        let dec0 = self.crval2_deg.to_radians();

        let cos_c = dec.sin() * dec0.sin() + dec.cos() * dec0.cos() * (ra - ra0).cos();
        if cos_c <= 0.0 {
            return Err(TrajectoryError::NumericDomain {
                parameter: "equatorial_to_pixel target",
                value: cos_c,
                valid_range: "same hemisphere as the plate center",
            });
        }

        let xi = (dec.cos() * (ra - ra0).sin() / cos_c).to_degrees();
        let eta = ((dec0.cos() * dec.sin() - dec0.sin() * dec.cos() * (ra - ra0).cos()) / cos_c)
            .to_degrees();

        let cd_inv = self.cd_inverse();
        let dx = cd_inv[0][0] * xi + cd_inv[0][1] * eta;
        let dy = cd_inv[1][0] * xi + cd_inv[1][1] * eta;

        Ok(PixelPoint { x: self.crpix1 + dx, y: self.crpix2 + dy, frame: 0 })
    }
}
