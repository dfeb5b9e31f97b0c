//! Midnight sun, polar night and the degenerate outputs that come with them.

use solpos::{Output, Request, SunriseResult, TrigCache, calculate};

fn solstice_noon(month: i32, latitude: f64) -> Output {
    let mut request = Request::new();
    request.year = Some(2020);
    request.month = Some(month);
    request.day = Some(21);
    request.hour = Some(12);
    request.minute = Some(0);
    request.second = Some(0);
    request.timezone = Some(0.0);
    request.latitude = Some(latitude);
    request.longitude = Some(0.0);

    let mut output = Output::new();
    calculate(&request, &mut output, &mut TrigCache::new()).unwrap();
    output
}

#[test]
fn test_midnight_sun() {
    let output = solstice_noon(6, 89.9);

    assert!((output.declination().unwrap() - 23.434_771).abs() < 1e-5);
    assert_eq!(output.sunset_hour_angle(), Some(180.0));
    assert_eq!(output.sunrise_sunset(), Some(SunriseResult::AllDay));
    assert_eq!(output.sunrise(), None);
    assert_eq!(output.sunset(), None);

    assert!((output.zenith().unwrap() - 66.465_232).abs() < 1e-5);
    assert!((output.azimuth().unwrap() - 179.520_279).abs() < 1e-5);
    assert!(output.etr().unwrap() > 0.0);
    assert!(output.air_mass().is_some());
}

#[test]
fn test_polar_night() {
    let output = solstice_noon(12, 89.9);

    assert_eq!(output.sunset_hour_angle(), Some(0.0));
    assert_eq!(output.sunrise_sunset(), Some(SunriseResult::AllNight));
    assert_eq!(output.zenith(), Some(99.0));
    assert_eq!(output.elevation(), Some(-9.0));
    assert!((output.refracted_elevation().unwrap() - -8.964_199).abs() < 1e-5);

    assert_eq!(output.air_mass(), None);
    assert_eq!(output.pressure_corrected_air_mass(), None);
    assert_eq!(output.prime(), None);
    assert_eq!(output.unprime(), None);

    assert_eq!(output.etr_normal(), Some(0.0));
    assert_eq!(output.etr(), Some(0.0));
    assert_eq!(output.etr_tilt(), Some(0.0));
}

#[test]
fn test_southern_hemisphere_is_mirrored() {
    let june = solstice_noon(6, -89.9);
    assert_eq!(june.sunrise_sunset(), Some(SunriseResult::AllNight));

    let december = solstice_noon(12, -89.9);
    assert_eq!(december.sunrise_sunset(), Some(SunriseResult::AllDay));
}

#[test]
fn test_exact_poles() {
    for (month, latitude, expected) in [
        (6, 90.0, SunriseResult::AllDay),
        (12, 90.0, SunriseResult::AllNight),
        (6, -90.0, SunriseResult::AllNight),
        (12, -90.0, SunriseResult::AllDay),
    ] {
        let output = solstice_noon(month, latitude);
        assert_eq!(output.sunrise_sunset(), Some(expected), "{month} {latitude}");
        assert_eq!(output.azimuth(), Some(180.0));
    }
}

#[test]
fn test_arctic_circle_still_has_a_day() {
    let output = solstice_noon(3, 66.0);
    let sunrise_sunset = output.sunrise_sunset().unwrap();
    assert!(sunrise_sunset.is_regular_day());

    let length = sunrise_sunset.sunset().unwrap() - sunrise_sunset.sunrise().unwrap();
    assert!((length - 720.0).abs() < 30.0);
}

#[cfg(feature = "chrono")]
#[test]
fn test_no_timestamps_on_polar_days() {
    use chrono::{TimeZone, Utc};
    use solpos::Solpos;

    let datetime = Utc.with_ymd_and_hms(2020, 6, 21, 12, 0, 0).unwrap();
    let solpos = Solpos::new(&datetime, 89.9, 0.0, []).unwrap();

    assert_eq!(solpos.sunrise(), None);
    assert_eq!(solpos.sunset(), None);
    assert_eq!(solpos.sunrise_sunset(), Some(SunriseResult::AllDay));
}
