use approx::assert_abs_diff_eq;
use hifitime::Unit;
use sunrise_noaa::{
    compute_sun_events, sunrise_sunset, CivilDate, Location, PolarCondition, SecondRounding,
    SunriseError, SunriseParams, TimeOfDay,
};

const SAO_PAULO: (f64, f64, f64) = (-23.545570, -46.704082, -3.0);
const MALAGA: (f64, f64, f64) = (36.720160, -4.420340, 1.0);
const NEW_DELHI: (f64, f64, f64) = (28.613084, 77.209168, 5.5);
const DALLAS: (f64, f64, f64) = (32.755701, -96.797296, -5.0);

fn march_23_2017() -> CivilDate {
    CivilDate::new(2017, 3, 23)
}

#[test]
fn test_reference_cities() {
    let cases = [
        ("Sao Paulo", SAO_PAULO, (6, 11, 44), (18, 14, 27)),
        ("Malaga", MALAGA, (7, 16, 45), (19, 32, 10)),
        ("New Delhi", NEW_DELHI, (6, 21, 45), (18, 34, 7)),
        ("Dallas", DALLAS, (7, 26, 34), (19, 41, 7)),
    ];

    for (city, (lat, lon, offset), rise, set) in cases {
        let (sunrise, sunset) = sunrise_sunset(lat, lon, offset, &march_23_2017()).unwrap();
        assert_eq!(sunrise, TimeOfDay::new(rise.0, rise.1, rise.2), "{city}");
        assert_eq!(sunset, TimeOfDay::new(set.0, set.1, set.2), "{city}");
    }
}

#[test]
fn test_invalid_inputs() {
    let (lat, lon, offset) = SAO_PAULO;
    let date = march_23_2017();

    for bad_lat in [-95.0, 100.0] {
        assert_eq!(
            sunrise_sunset(bad_lat, lon, offset, &date),
            Err(SunriseError::InvalidLatitude(bad_lat))
        );
    }
    for bad_lon in [-185.0, 190.0] {
        assert_eq!(
            sunrise_sunset(lat, bad_lon, offset, &date),
            Err(SunriseError::InvalidLongitude(bad_lon))
        );
    }
    for bad_offset in [-15.0, 18.0] {
        assert_eq!(
            sunrise_sunset(lat, lon, bad_offset, &date),
            Err(SunriseError::InvalidUTCOffset(bad_offset))
        );
    }
    for bad_year in [1000, 3000] {
        let result = sunrise_sunset(lat, lon, offset, &CivilDate::new(bad_year, 3, 23));
        assert!(
            matches!(result, Err(SunriseError::InvalidDate(_))),
            "year {bad_year}: {result:?}"
        );
    }
}

#[test]
fn test_results_are_deterministic() {
    let (lat, lon, offset) = NEW_DELHI;
    let first = sunrise_sunset(lat, lon, offset, &march_23_2017()).unwrap();
    for _ in 0..10 {
        assert_eq!(
            sunrise_sunset(lat, lon, offset, &march_23_2017()).unwrap(),
            first
        );
    }
}

#[test]
fn test_sunrise_before_sunset() {
    for (lat, lon, offset) in [SAO_PAULO, MALAGA, NEW_DELHI, DALLAS] {
        let location = Location::new(lat, lon).unwrap();
        let events =
            compute_sun_events(&location, offset, &march_23_2017(), &SunriseParams::default())
                .unwrap();
        assert!(events.sunrise < events.sunset, "{events}");
        assert!(events.day_length().to_seconds() > 0.0);
    }
}

#[test]
fn test_symmetry_around_noon_without_refinement() {
    let params = SunriseParams::builder()
        .refine_iterations(0)
        .build()
        .unwrap();
    for (lat, lon, offset) in [SAO_PAULO, MALAGA, NEW_DELHI, DALLAS] {
        let location = Location::new(lat, lon).unwrap();
        let events = compute_sun_events(&location, offset, &march_23_2017(), &params).unwrap();
        assert_abs_diff_eq!(
            events.solar_noon_seconds - events.sunrise_seconds,
            events.sunset_seconds - events.solar_noon_seconds,
            epsilon = 1e-6
        );
    }
}

#[test]
fn test_symmetry_of_a_single_evaluation() {
    use sunrise_noaa::solar_geometry::SolarGeometry;
    use sunrise_noaa::time::{julian_century, julian_day};

    for (lat, lon, offset) in [SAO_PAULO, MALAGA, NEW_DELHI, DALLAS] {
        let jd = julian_day(&march_23_2017(), offset).unwrap();
        let (sunrise, noon, sunset) = SolarGeometry::at(julian_century(jd))
            .event_offsets(lat, lon, offset)
            .unwrap();
        assert_abs_diff_eq!(sunset - noon, noon - sunrise, epsilon = 1e-6);
    }
}

#[test]
fn test_refined_noon_is_not_the_midpoint() {
    let (lat, lon, offset) = DALLAS;
    let location = Location::new(lat, lon).unwrap();
    let events =
        compute_sun_events(&location, offset, &march_23_2017(), &SunriseParams::default())
            .unwrap();
    let midpoint = (events.sunrise_seconds + events.sunset_seconds) / 2.0;
    assert!((events.solar_noon_seconds - midpoint).abs() > 1.0);
}

#[test]
fn test_truncate_rounding() {
    let (lat, lon, offset) = MALAGA;
    let location = Location::new(lat, lon).unwrap();
    let params = SunriseParams::builder()
        .rounding(SecondRounding::Truncate)
        .build()
        .unwrap();
    let events = compute_sun_events(&location, offset, &march_23_2017(), &params).unwrap();
    assert_eq!(
        events.sunset.seconds_since_midnight(),
        events.sunset_seconds.floor() as u32
    );
    assert_eq!(
        events.sunrise.seconds_since_midnight(),
        events.sunrise_seconds.floor() as u32
    );
}

#[test]
fn test_polar_conditions() {
    let june = CivilDate::new(2017, 6, 21);
    let december = CivilDate::new(2017, 12, 21);

    let cases = [
        (80.0, &june, PolarCondition::PolarDay),
        (-80.0, &june, PolarCondition::PolarNight),
        (80.0, &december, PolarCondition::PolarNight),
        (-80.0, &december, PolarCondition::PolarDay),
    ];
    for (lat, date, expected) in cases {
        match sunrise_sunset(lat, 0.0, 0.0, date) {
            Err(SunriseError::SunNeverRisesOrSets { condition, .. }) => {
                assert_eq!(condition, expected, "lat {lat} on {date}")
            }
            other => panic!("lat {lat} on {date}: expected {expected}, got {other:?}"),
        }
    }
}

#[test]
fn test_events_as_epochs() {
    let (lat, lon, offset) = DALLAS;
    let location = Location::new(lat, lon).unwrap();
    let events =
        compute_sun_events(&location, offset, &march_23_2017(), &SunriseParams::default())
            .unwrap();

    // Local midnight in UTC-5 is 05:00 UTC.
    let (_, _, day, hour, minute, _, _) = events
        .local_midnight_epoch()
        .round(Unit::Second * 1.0)
        .to_gregorian_utc();
    assert_eq!((day, hour, minute), (23, 5, 0));

    let noon = events.solar_noon_epoch();
    assert!(events.sunrise_epoch() < noon);
    assert!(noon < events.sunset_epoch());
    assert_abs_diff_eq!(
        (events.sunset_epoch() - events.sunrise_epoch()).to_seconds(),
        events.day_length().to_seconds(),
        epsilon = 1e-3
    );
}
