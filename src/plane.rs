//! Plane representations and the 3×3 linear solve used to intersect
//! three planes at a point.

use crate::error::{Result, TrajectoryError};

/// A plane `a·X + b·Y + c·Z + d = 0` in geocentric Cartesian space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

/// A normalized plane normal, with no offset term — the output of the
/// meteor-plane fit and the radiant solver's inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneNormal {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl PlaneNormal {
    pub fn magnitude(&self) -> f64 {
        (self.a * self.a + self.b * self.b + self.c * self.c).sqrt()
    }

    pub fn dot(&self, other: &PlaneNormal) -> f64 {
        self.a * other.a + self.b * other.b + self.c * other.c
    }

    pub fn cross(&self, other: &PlaneNormal) -> PlaneNormal {
        PlaneNormal {
            a: self.b * other.c - self.c * other.b,
            b: self.c * other.a - self.a * other.c,
            c: self.a * other.b - self.b * other.a,
        }
    }

    pub fn scale(&self, k: f64) -> PlaneNormal {
        PlaneNormal { a: self.a * k, b: self.b * k, c: self.c * k }
    }
}

/// The relative threshold (vs. the largest plane coefficient magnitude)
/// below which the 3×3 system is declared singular.
pub const DETERMINANT_THRESHOLD: f64 = 1e-9;

/// Solves the 3×3 linear system formed by three planes for their common
/// point, via Gaussian elimination with partial pivoting.
///
/// Refuses to return a point if the pivoted determinant's absolute
/// value falls below `1e-9 · max(|coefficient|)` across the augmented
/// matrix — the planes are too close to parallel to trust the solve.
pub fn intersect_three(p1: Plane, p2: Plane, p3: Plane) -> Result<(f64, f64, f64)> {
    let mut m = [
        [p1.a, p1.b, p1.c, -p1.d],
        [p2.a, p2.b, p2.c, -p2.d],
        [p3.a, p3.b, p3.c, -p3.d],
    ];

    let max_coeff = m
        .iter()
        .flat_map(|row| row[..3].iter())
        .fold(0.0_f64, |acc, v| acc.max(v.abs()));

    for col in 0..3 {
        let pivot_row = (col..3)
            .max_by(|&r1, &r2| m[r1][col].abs().total_cmp(&m[r2][col].abs()))
            .unwrap();
        m.swap(col, pivot_row);

        if m[col][col].abs() < DETERMINANT_THRESHOLD * max_coeff.max(1.0) {
            return Err(TrajectoryError::Underdetermined {
                reason: "three-plane intersection is singular to within tolerance".into(),
            });
        }

        for row in (col + 1)..3 {
            let factor = m[row][col] / m[col][col];
            for k in col..4 {
                m[row][k] -= factor * m[col][k];
            }
        }
    }

    let z = m[2][3] / m[2][2];
    let y = (m[1][3] - m[1][2] * z) / m[1][1];
    let x = (m[0][3] - m[0][1] * y - m[0][2] * z) / m[0][0];

    Ok((x, y, z))
}

/// Angle between two plane normals, in degrees: `arccos(|nA·nB| / (|nA|·|nB|))`.
///
/// The absolute value keeps the result in `[0°, 90°]` regardless of
/// which way either normal happens to point; `|n|` is renormalized
/// defensively even though both inputs are expected to be unit length.
pub fn angle_between_deg(a: &PlaneNormal, b: &PlaneNormal) -> f64 {
    let cos_q = (a.dot(b) / (a.magnitude() * b.magnitude())).abs().clamp(0.0, 1.0);
    cos_q.acos().to_degrees()
}
