//! R5: trajectory smoke test.
//!
//! No physical 5-meteor fixture ships in this crate's reference
//! material, so this exercises the full pipeline — parse, meteor
//! plane, radiant, per-point trajectory solve, and merge — on a
//! synthetic meteor built from the same Ondřejov/Kunžak observation
//! geometry as the radiant scenario, checking the structural
//! invariants a real fixture would validate: a non-empty, strictly
//! non-increasing-in-height merged track, with altitudes in a
//! physically plausible meteor range.

use chrono::{Duration, TimeZone, Utc};
use meteor_trajectory::equatorial::EquatorialDir;
use meteor_trajectory::geodesy::Geodetic;
use meteor_trajectory::meteor::{Meteor, MeteorObservation};
use meteor_trajectory::station::Station;
use std::sync::Arc;

const ONDREJOV: &[[f64; 2]] = &[
    [358.647, 8.286], [358.711, 8.142], [358.776, 8.031], [358.838, 7.912], [358.892, 7.772],
    [359.003, 7.642], [359.094, 7.543], [359.162, 7.386], [359.220, 7.233], [359.304, 7.092],
];

const KUNZAK: &[[f64; 2]] = &[
    [327.429, 37.968], [327.552, 37.916], [327.615, 37.886], [327.693, 37.811], [327.750, 37.720],
    [327.846, 37.631], [327.996, 37.529], [328.078, 37.437], [328.177, 37.370], [328.218, 37.286],
];

fn observation(points: &[[f64; 2]], start: chrono::DateTime<Utc>) -> MeteorObservation {
    let directions: Vec<EquatorialDir> =
        points.iter().map(|p| EquatorialDir { ra_deg: p[0], dec_deg: p[1] }).collect();
    let times_utc = (0..points.len()).map(|i| start + Duration::milliseconds(100 * i as i64)).collect();
    MeteorObservation { directions, times_utc }
}

#[test]
fn test_merged_trajectory_is_structurally_sound() {
    let _ = tracing_subscriber::fmt().with_env_filter("meteor_trajectory=warn").try_init();

    let station_a = Arc::new(
        Station::new(Geodetic { lat_deg: 49.970222, lon_deg: 14.780208, height_m: 524.0 }, 1.0, "Ondrejov")
            .unwrap(),
    );
    let station_b = Arc::new(
        Station::new(Geodetic { lat_deg: 49.107290, lon_deg: 15.200930, height_m: 656.0 }, 1.0, "Kunzak")
            .unwrap(),
    );

    let epoch = Utc.with_ymd_and_hms(2018, 10, 8, 22, 3, 54).unwrap();
    let obs_a = observation(ONDREJOV, epoch);
    let obs_b = observation(KUNZAK, epoch);

    let meteor = Meteor::new(station_a, obs_a, station_b, obs_b);
    let merged = meteor.merged_trajectory().unwrap();

    assert!(!merged.is_empty());

    for window in merged.windows(2) {
        assert!(
            window[0].geodetic.height_m >= window[1].geodetic.height_m,
            "merged trajectory must be non-increasing in height"
        );
    }

    for point in &merged {
        assert!(
            point.geodetic.height_m > 10_000.0 && point.geodetic.height_m < 300_000.0,
            "height {} outside plausible meteor altitude range",
            point.geodetic.height_m
        );
    }
}
