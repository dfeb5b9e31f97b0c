//! Input validation through the public calculate entry point.

use solpos::{Error, Functions, Output, Param, Request, TrigCache, calculate, validate};

fn reference_request() -> Request {
    let mut request = Request::new();
    request.year = Some(1999);
    request.month = Some(7);
    request.day = Some(22);
    request.hour = Some(9);
    request.minute = Some(45);
    request.second = Some(37);
    request.timezone = Some(-5.0);
    request.latitude = Some(33.65);
    request.longitude = Some(-84.43);
    request
}

fn run(request: &Request) -> Result<Output, Error> {
    let mut output = Output::new();
    calculate(request, &mut output, &mut TrigCache::new()).map(|()| output)
}

#[test]
fn test_year_range() {
    for (year, valid) in [(1949, false), (1950, true), (2050, true), (2051, false)] {
        let mut request = reference_request();
        request.year = Some(year);
        assert_eq!(run(&request).is_ok(), valid, "year {year}");
    }

    let mut request = reference_request();
    request.year = Some(2051);
    assert_eq!(run(&request).unwrap_err(), Error::InvalidYear { value: 2051 });
}

#[test]
fn test_location_range() {
    let mut request = reference_request();
    request.latitude = Some(91.0);
    assert_eq!(run(&request).unwrap_err(), Error::invalid_latitude(91.0));

    let mut request = reference_request();
    request.longitude = Some(-180.5);
    assert_eq!(run(&request).unwrap_err(), Error::invalid_longitude(-180.5));

    let mut request = reference_request();
    request.latitude = Some(-90.0);
    request.longitude = Some(180.0);
    assert!(run(&request).is_ok());
}

#[test]
fn test_time_range() {
    let cases = [
        ((25, 0, 0), Error::InvalidHour { value: 25 }),
        ((12, 60, 0), Error::InvalidMinute { value: 60 }),
        ((12, 0, 60), Error::InvalidSecond { value: 60 }),
        (
            (24, 0, 1),
            Error::InvalidEndOfDay {
                minute: 0,
                second: 1,
            },
        ),
    ];

    for ((hour, minute, second), expected) in cases {
        let mut request = reference_request();
        request.hour = Some(hour);
        request.minute = Some(minute);
        request.second = Some(second);
        assert_eq!(run(&request).unwrap_err(), expected);
    }

    let mut request = reference_request();
    request.hour = Some(24);
    request.minute = Some(0);
    request.second = Some(0);
    assert!(run(&request).is_ok());
}

#[test]
fn test_timezone_and_interval_range() {
    let mut request = reference_request();
    request.timezone = Some(12.5);
    assert_eq!(
        run(&request).unwrap_err(),
        Error::InvalidTimezone { value: 12.5 }
    );

    let mut request = reference_request();
    request.interval = 28_801;
    assert_eq!(
        run(&request).unwrap_err(),
        Error::InvalidInterval { value: 28_801 }
    );
}

#[test]
fn test_date_range() {
    let mut request = reference_request();
    request.month = Some(0);
    assert_eq!(run(&request).unwrap_err(), Error::InvalidMonth { value: 0 });

    let mut request = reference_request();
    request.day = Some(32);
    assert_eq!(run(&request).unwrap_err(), Error::InvalidDay { value: 32 });

    let mut request = reference_request();
    request.functions = Functions::ALL;
    request.day_of_year = Some(367);
    assert_eq!(
        run(&request).unwrap_err(),
        Error::InvalidDayOfYear { value: 367 }
    );
}

#[test]
fn test_atmosphere_panel_and_shadowband_range() {
    let mut request = reference_request();
    request.pressure = 2500.0;
    assert_eq!(run(&request).unwrap_err(), Error::invalid_pressure(2500.0));

    let mut request = reference_request();
    request.temperature = -150.0;
    assert_eq!(
        run(&request).unwrap_err(),
        Error::invalid_temperature(-150.0)
    );

    let mut request = reference_request();
    request.tilt = 200.0;
    assert_eq!(run(&request).unwrap_err(), Error::InvalidTilt { value: 200.0 });

    let mut request = reference_request();
    request.aspect = -400.0;
    assert_eq!(
        run(&request).unwrap_err(),
        Error::InvalidAspect { value: -400.0 }
    );

    let mut request = reference_request();
    request.shadowband_radius = 0.0;
    assert_eq!(
        run(&request).unwrap_err(),
        Error::InvalidShadowbandRadius { value: 0.0 }
    );
}

#[test]
fn test_no_function_selected() {
    let mut request = reference_request();
    request.functions = Functions::empty();
    assert_eq!(run(&request).unwrap_err(), Error::NoFunction);
    assert_eq!(validate(&request), Err(Error::NoFunction));
}

#[test]
fn test_missing_required_input() {
    let request = Request::new();
    assert_eq!(run(&request).unwrap_err(), Error::missing_input("year"));

    let mut request = reference_request();
    request.timezone = None;
    assert_eq!(run(&request).unwrap_err(), Error::missing_input("timezone"));
}

#[test]
fn test_missing_prerequisite() {
    let mut request = reference_request();
    request.functions = Functions::SUNRISE_SUNSET | Functions::S_SUNSET_HOUR_ANGLE;
    request.functions.clear_flag(Functions::DAY_OF_YEAR);
    assert_eq!(
        run(&request).unwrap_err(),
        Error::missing_prerequisite("sunrise/sunset", "true solar time")
    );

    request.functions.add_flag(Functions::TRUE_SOLAR_TIME);
    assert!(run(&request).is_ok());
}

#[test]
fn test_every_composite_is_self_sufficient() {
    let composites = [
        Functions::S_GEOMETRY,
        Functions::S_UNREFRACTED_ZENITH,
        Functions::S_SUNSET_HOUR_ANGLE,
        Functions::S_SHADOWBAND,
        Functions::S_TRUE_SOLAR_TIME,
        Functions::S_SUNRISE_SUNSET,
        Functions::S_SOLAR_AZIMUTH,
        Functions::S_REFRACTION,
        Functions::S_AIR_MASS,
        Functions::S_PRIME,
        Functions::S_ETR,
        Functions::S_TILT,
        Functions::S_ALL,
    ];

    for functions in composites {
        let mut request = reference_request();
        request.day_of_year = Some(203);
        request.functions = functions;
        assert!(run(&request).is_ok(), "{functions:?}");
    }
}

#[test]
fn test_parameter_type_errors() {
    let mut request = reference_request();
    assert_eq!(
        request.apply_parameters([("tilt", Param::Int(30))]),
        Err(Error::parameter_type("tilt", "float"))
    );
    assert_eq!(
        request.apply_parameters([("day", Param::Float(22.0))]),
        Err(Error::parameter_type("day", "integer"))
    );

    assert!(request.apply_parameters([("unknown", Param::Int(1))]).is_ok());
    assert_eq!(request, reference_request());
}

#[cfg(feature = "chrono")]
#[test]
fn test_solpos_new_reports_parameter_errors() {
    use chrono::{TimeZone, Utc};
    use solpos::Solpos;

    let datetime = Utc.with_ymd_and_hms(1999, 7, 22, 14, 45, 37).unwrap();
    let err = Solpos::new(&datetime, 33.65, -84.43, [("press", Param::Int(1006))]).unwrap_err();
    assert_eq!(err, Error::parameter_type("press", "float"));

    let too_early = Utc.with_ymd_and_hms(1949, 12, 31, 12, 0, 0).unwrap();
    let err = Solpos::new(&too_early, 33.65, -84.43, []).unwrap_err();
    assert_eq!(err, Error::InvalidYear { value: 1949 });
}
