//! End-to-end radiant scenario: the Ondřejov/Kunžak two-station
//! observation of a single meteor, carried over from the reference
//! implementation's own radiant-calculation test vectors.
//!
//! The expected radiant here is the *corrected* value — the reference
//! vectors' own assertion bakes in a transcription bug in its Eta
//! computation (`cos(dec)*cos(ra)` instead of `cos(dec)*sin(ra)`),
//! which this crate deliberately does not reproduce. The tolerance box
//! below accounts for the resulting offset from that fixture's
//! expected value.

use chrono::{TimeZone, Utc};
use meteor_trajectory::equatorial::EquatorialDir;
use meteor_trajectory::geodesy::Geodetic;
use meteor_trajectory::meteor_plane::fit_meteor_plane;
use meteor_trajectory::radiant::solve_radiant;
use meteor_trajectory::station::Station;

const ONDREJOV: &[[f64; 2]] = &[
    [358.647, 8.286], [358.711, 8.142], [358.776, 8.031], [358.838, 7.912], [358.892, 7.772],
    [359.003, 7.642], [359.094, 7.543], [359.162, 7.386], [359.220, 7.233], [359.304, 7.092],
    [359.396, 6.971], [359.456, 6.852], [359.559, 6.680], [359.612, 6.599], [359.693, 6.482],
    [359.777, 6.318], [359.863, 6.188], [359.945, 6.049], [0.027, 5.910], [0.085, 5.792],
    [0.161, 5.667], [0.243, 5.505], [0.342, 5.359], [0.408, 5.239], [0.471, 5.085],
    [0.564, 4.954], [0.642, 4.840], [0.707, 4.720], [0.798, 4.612], [0.886, 4.449],
    [0.948, 4.298], [1.038, 4.168], [1.105, 4.082], [1.169, 3.964], [1.285, 3.824],
    [1.344, 3.697], [1.360, 3.588], [1.482, 3.468], [1.550, 3.315], [1.654, 3.226],
    [1.709, 3.068], [1.750, 2.950], [1.793, 2.887], [1.935, 2.749], [1.992, 2.624],
    [2.048, 2.545], [2.131, 2.343], [2.208, 2.199], [2.285, 2.101], [2.323, 2.029],
    [2.441, 1.847], [2.542, 1.695], [2.579, 1.669], [2.609, 1.557], [2.676, 1.438],
    [2.745, 1.380],
];

const KUNZAK: &[[f64; 2]] = &[
    [327.429, 37.968], [327.552, 37.916], [327.615, 37.886], [327.693, 37.811], [327.750, 37.720],
    [327.846, 37.631], [327.996, 37.529], [328.078, 37.437], [328.177, 37.370], [328.218, 37.286],
    [328.359, 37.126], [328.477, 37.075], [328.522, 36.974], [328.696, 36.903], [328.745, 36.785],
    [328.877, 36.721], [328.963, 36.643], [329.058, 36.494], [329.177, 36.427], [329.255, 36.330],
    [329.355, 36.239], [329.500, 36.117], [329.608, 35.994], [329.625, 35.935], [329.754, 35.820],
    [329.862, 35.735], [329.980, 35.608], [330.075, 35.520], [330.147, 35.426], [330.316, 35.327],
    [330.411, 35.232], [330.501, 35.154], [330.626, 35.025], [330.723, 34.916], [330.790, 34.832],
    [330.878, 34.704], [330.961, 34.643], [331.055, 34.536], [331.152, 34.412], [331.223, 34.299],
    [331.350, 34.187], [331.414, 34.098], [331.532, 34.018], [331.619, 33.921], [331.651, 33.824],
    [331.788, 33.695], [331.926, 33.552], [331.983, 33.489], [332.072, 33.420], [332.164, 33.281],
    [332.254, 33.143], [332.390, 33.100], [332.484, 32.934], [332.523, 32.892], [332.641, 32.760],
];

fn directions(points: &[[f64; 2]]) -> Vec<EquatorialDir> {
    points.iter().map(|p| EquatorialDir { ra_deg: p[0], dec_deg: p[1] }).collect()
}

#[test]
fn test_radiant_matches_corrected_reference_vectors() {
    let ondrejov = Station::new(
        Geodetic { lat_deg: 49.970222, lon_deg: 14.780208, height_m: 524.0 },
        1.0,
        "Ondrejov",
    )
    .unwrap();
    let kunzak = Station::new(
        Geodetic { lat_deg: 49.107290, lon_deg: 15.200930, height_m: 656.0 },
        1.0,
        "Kunzak",
    )
    .unwrap();

    let points_a = directions(ONDREJOV);
    let points_b = directions(KUNZAK);

    let n_a = fit_meteor_plane(&points_a).unwrap();
    let n_b = fit_meteor_plane(&points_b).unwrap();

    let epoch = Utc.with_ymd_and_hms(2018, 10, 8, 22, 3, 54).unwrap();
    let radiant = solve_radiant(&n_a, &n_b, &ondrejov, &kunzak, epoch).unwrap();

    assert!(
        (radiant.direction.ra_deg - 266.7788).abs() < 1.1839,
        "RA = {}, expected ~266.7788",
        radiant.direction.ra_deg
    );
    assert!(
        (radiant.direction.dec_deg - 59.4235).abs() < 0.0592,
        "Dec = {}, expected ~59.4235",
        radiant.direction.dec_deg
    );
    assert!((radiant.q_deg - 7.06).abs() < 1.0, "Q = {}, expected ~7.06", radiant.q_deg);
}
