//! Property tests over random dates, times and locations.

use proptest::prelude::*;
use solpos::{Output, Request, SunriseResult, TrigCache, calculate};

#[allow(clippy::too_many_arguments)]
fn request(
    year: i32,
    day_of_year: i32,
    hour: i32,
    minute: i32,
    second: i32,
    timezone: f64,
    latitude: f64,
    longitude: f64,
) -> Request {
    let mut request = Request::new();
    request.functions = solpos::Functions::ALL;
    request.year = Some(year);
    request.day_of_year = Some(day_of_year);
    request.hour = Some(hour);
    request.minute = Some(minute);
    request.second = Some(second);
    request.timezone = Some(timezone);
    request.latitude = Some(latitude);
    request.longitude = Some(longitude);
    request.tilt = 30.0;
    request
}

proptest! {
    #[test]
    fn outputs_stay_in_range(
        year in 1950..=2050i32,
        day_of_year in 1..=365i32,
        hour in 0..=23i32,
        minute in 0..=59i32,
        second in 0..=59i32,
        timezone in -12.0..=12.0f64,
        latitude in -90.0..=90.0f64,
        longitude in -180.0..=180.0f64,
    ) {
        let request = request(year, day_of_year, hour, minute, second, timezone, latitude, longitude);
        let mut output = Output::new();
        calculate(&request, &mut output, &mut TrigCache::new()).unwrap();

        let zenith = output.zenith().unwrap();
        prop_assert!((0.0..=99.0).contains(&zenith));
        prop_assert!((0.0..=360.0).contains(&output.azimuth().unwrap()));
        prop_assert!((-180.0..=180.0).contains(&output.hour_angle().unwrap()));
        prop_assert!((-23.5..=23.5).contains(&output.declination().unwrap()));
        prop_assert!((0.0..=180.0).contains(&output.sunset_hour_angle().unwrap()));
        prop_assert!(output.refracted_elevation().unwrap() >= -9.0);
        prop_assert!((-720.0..=720.0).contains(&output.solar_time_correction().unwrap()));
        prop_assert!(output.etr().unwrap() >= 0.0);
        prop_assert!(output.etr_tilt().unwrap() >= 0.0);
        prop_assert!(output.shadowband_factor().unwrap().is_finite());

        match output.air_mass() {
            Some(air_mass) => {
                prop_assert!(output.refracted_zenith().unwrap() <= 93.0);
                prop_assert!(air_mass.is_finite() && air_mass > 0.0);
            }
            None => prop_assert!(output.refracted_zenith().unwrap() > 93.0),
        }

        if let Some(SunriseResult::RegularDay { sunrise, sunset }) = output.sunrise_sunset() {
            prop_assert!(sunrise < sunset);
        }
    }

    #[test]
    fn calculation_is_idempotent(
        year in 1950..=2050i32,
        day_of_year in 1..=365i32,
        hour in 0..=23i32,
        latitude in -89.0..=89.0f64,
        longitude in -180.0..=180.0f64,
    ) {
        let request = request(year, day_of_year, hour, 0, 0, 0.0, latitude, longitude);
        let mut output = Output::new();
        let mut cache = TrigCache::new();

        calculate(&request, &mut output, &mut cache).unwrap();
        let first = output.clone();
        calculate(&request, &mut output, &mut cache).unwrap();

        prop_assert_eq!(first, output);
    }

    #[test]
    fn sunrise_barely_depends_on_time_of_day(
        day_of_year in 1..=365i32,
        latitude in -60.0..=60.0f64,
    ) {
        let morning = request(2000, day_of_year, 9, 0, 0, 0.0, latitude, 0.0);
        let evening = request(2000, day_of_year, 15, 0, 0, 0.0, latitude, 0.0);

        let mut first = Output::new();
        let mut second = Output::new();
        calculate(&morning, &mut first, &mut TrigCache::new()).unwrap();
        calculate(&evening, &mut second, &mut TrigCache::new()).unwrap();

        let sunrise_shift = (first.sunrise().unwrap() - second.sunrise().unwrap()).abs();
        prop_assert!(sunrise_shift < 5.0);
    }
}
