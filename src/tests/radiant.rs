use crate::geodesy::Geodetic;
use crate::plane::PlaneNormal;
use crate::radiant::solve_radiant;
use crate::station::Station;
use chrono::{TimeZone, Utc};

fn station(lat: f64, lon: f64, label: &str) -> Station {
    Station::new(Geodetic { lat_deg: lat, lon_deg: lon, height_m: 0.0 }, 0.0, label).unwrap()
}

#[test]
fn test_q_angle_for_orthogonal_planes() {
    let n_a = PlaneNormal { a: 1.0, b: 0.0, c: 0.0 };
    let n_b = PlaneNormal { a: 0.0, b: 1.0, c: 0.0 };
    let station_a = station(45.0, 10.0, "A");
    let station_b = station(46.0, 11.0, "B");
    let t = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();

    let radiant = solve_radiant(&n_a, &n_b, &station_a, &station_b, t).unwrap();
    assert!((radiant.q_deg - 90.0).abs() < 1e-6);
}

#[test]
fn test_radiant_direction_is_valid_unit_vector_roundtrip() {
    let n_a = PlaneNormal { a: 0.6, b: 0.8, c: 0.0 };
    let n_b = PlaneNormal { a: 0.0, b: 0.0, c: 1.0 };
    let station_a = station(45.0, 10.0, "A");
    let station_b = station(46.0, 11.0, "B");
    let t = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();

    let radiant = solve_radiant(&n_a, &n_b, &station_a, &station_b, t).unwrap();
    assert!((0.0..360.0).contains(&radiant.direction.ra_deg));
    assert!((-90.0..=90.0).contains(&radiant.direction.dec_deg));
}
