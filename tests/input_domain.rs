use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sunrise_noaa::{sunrise_sunset, CivilDate, SunriseError};

#[test]
fn test_random_out_of_range_latitudes() {
    let mut rng = StdRng::seed_from_u64(42);
    let date = CivilDate::new(2017, 3, 23);

    for _ in 0..1_000 {
        let magnitude = rng.random_range(90.000_001..1_000.0);
        let latitude = if rng.random::<bool>() {
            magnitude
        } else {
            -magnitude
        };
        assert_eq!(
            sunrise_sunset(latitude, 0.0, 0.0, &date),
            Err(SunriseError::InvalidLatitude(latitude))
        );
    }
}

#[test]
fn test_random_out_of_range_longitudes_and_offsets() {
    let mut rng = StdRng::seed_from_u64(0xDEADBEEF);
    let date = CivilDate::new(2017, 3, 23);

    for _ in 0..1_000 {
        let longitude = rng.random_range(180.000_001..720.0);
        assert_eq!(
            sunrise_sunset(0.0, -longitude, 0.0, &date),
            Err(SunriseError::InvalidLongitude(-longitude))
        );

        let offset = rng.random_range(14.000_001..48.0);
        assert_eq!(
            sunrise_sunset(0.0, 0.0, offset, &date),
            Err(SunriseError::InvalidUTCOffset(offset))
        );
    }
}

#[test]
fn test_random_valid_inputs_at_low_latitudes() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..500 {
        let latitude = rng.random_range(-60.0..=60.0);
        let longitude = rng.random_range(-180.0..=180.0);
        let offset = rng.random_range(-12..=14) as f64;
        let date = CivilDate::new(
            rng.random_range(1800..=2100),
            rng.random_range(1..=12),
            rng.random_range(1..=28),
        );

        let (sunrise, sunset) = sunrise_sunset(latitude, longitude, offset, &date)
            .unwrap_or_else(|err| panic!("{latitude}, {longitude}, {offset} on {date}: {err}"));
        assert!(sunrise.hour < 24 && sunrise.minute < 60 && sunrise.second < 60);
        assert!(sunset.hour < 24 && sunset.minute < 60 && sunset.second < 60);
    }
}
