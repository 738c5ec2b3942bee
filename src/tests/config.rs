use crate::config::{HostConfig, ObservatoryConfig};

fn sample_config() -> HostConfig {
    HostConfig {
        first_observatory: ObservatoryConfig {
            name: "Ondrejov".into(),
            latitude: 49.970222,
            longitude: 14.780208,
            sealevel: 524.0,
            timezone: 1.0,
            wcs_path: None,
            wcs_time: None,
        },
        second_observatory: ObservatoryConfig {
            name: "Kunzak".into(),
            latitude: 49.107290,
            longitude: 15.200930,
            sealevel: 656.0,
            timezone: 1.0,
            wcs_path: Some("kunzak.wcs".into()),
            wcs_time: Some(chrono::Utc::now()),
        },
        timeout: 10,
        time_tolerance: 5,
        token: "secret".into(),
        load_fixed: false,
    }
}

#[test]
fn test_to_stations_builds_both() {
    let config = sample_config();
    let (a, b) = config.to_stations().unwrap();

    assert_eq!(a.label, "Ondrejov");
    assert_eq!(b.label, "Kunzak");
    assert!(a.wcs.is_none());
    assert!(b.wcs.is_some());
}

#[test]
fn test_load_fixed_round_trips_through_the_struct() {
    let mut config = sample_config();
    config.load_fixed = true;
    assert!(config.load_fixed);
}
