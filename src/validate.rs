//! Fail-fast checks of a [`Request`] before anything is computed.
//!
//! The first problem found is reported. Checks run in this order: the
//! function mask, date/time/location (geometry), atmosphere (refraction and
//! air mass), panel (tilt), shadow band, then the prerequisites of every
//! selected function.
//!
//! Pressure is range-checked whenever air mass is selected, even without
//! refraction, since the pressure-corrected air mass uses it. An air-mass-only
//! mask can therefore fail with `InvalidPressure`.

use crate::error::{
    check_aspect, check_day, check_day_of_year, check_interval, check_latitude,
    check_longitude, check_month, check_pressure, check_shadowband, check_temperature,
    check_tilt, check_time_of_day, check_timezone, check_year,
};
use crate::functions::Functions;
use crate::solpos::Stage;
use crate::types::{Clock, Request, Site};
use crate::{Error, Result};

/// Inputs that passed validation, ready for the geometry stage.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct Inputs {
    pub(crate) clock: Option<Clock>,
    pub(crate) site: Option<Site>,
}

/// Checks a request without running it.
///
/// # Errors
/// Returns the first problem found: `NoFunction`, `MissingInput`, a range
/// error for the offending field, or `MissingPrerequisite`.
///
/// # Example
/// ```
/// # use solpos::{validate, Error, Functions, Request};
/// let mut request = Request::new();
/// request.functions = Functions::empty();
/// assert_eq!(validate(&request), Err(Error::NoFunction));
///
/// request.functions = Functions::AIR_MASS;
/// request.refracted_zenith = Some(60.0);
/// assert!(validate(&request).is_ok());
/// ```
pub fn validate(request: &Request) -> Result<()> {
    check_inputs(request).map(|_| ())
}

pub(crate) fn check_inputs(request: &Request) -> Result<Inputs> {
    let functions = request.functions;
    if functions.is_no_function() {
        return Err(Error::NoFunction);
    }

    let mut inputs = Inputs::default();
    if functions.contains(Functions::GEOMETRY) {
        check_date(request)?;
        inputs.clock = Some(check_clock(request)?);
        inputs.site = Some(check_site(request)?);
    }

    if functions.contains(Functions::REFRACTION) {
        check_temperature(request.temperature)?;
        check_pressure(request.pressure)?;
    } else if functions.contains(Functions::AIR_MASS) {
        check_pressure(request.pressure)?;
    }

    if functions.contains(Functions::TILT) {
        check_tilt(request.tilt)?;
        check_aspect(request.aspect)?;
    }

    if functions.contains(Functions::SHADOWBAND) {
        check_shadowband(
            request.shadowband_width,
            request.shadowband_radius,
            request.shadowband_sky,
        )?;
    }

    check_prerequisites(request)?;
    Ok(inputs)
}

fn required<T>(value: Option<T>, name: &'static str) -> Result<T> {
    value.ok_or(Error::missing_input(name))
}

fn check_date(request: &Request) -> Result<()> {
    check_year(required(request.year, "year")?)?;
    if request.functions.contains(Functions::DAY_OF_YEAR) {
        check_day_of_year(required(request.day_of_year, "day of year")?)
    } else {
        check_month(required(request.month, "month")?)?;
        check_day(required(request.day, "day")?)
    }
}

fn check_clock(request: &Request) -> Result<Clock> {
    let hour = required(request.hour, "hour")?;
    let minute = required(request.minute, "minute")?;
    let second = required(request.second, "second")?;
    check_time_of_day(hour, minute, second)?;

    let timezone = required(request.timezone, "timezone")?;
    check_timezone(timezone)?;
    check_interval(request.interval)?;

    Ok(Clock {
        hour,
        minute,
        second,
        interval: request.interval,
        timezone,
    })
}

fn check_site(request: &Request) -> Result<Site> {
    let longitude = required(request.longitude, "longitude")?;
    check_longitude(longitude)?;
    let latitude = required(request.latitude, "latitude")?;
    check_latitude(latitude)?;

    Ok(Site {
        latitude,
        longitude,
    })
}

/// Every selected stage must have its prerequisite stages selected too.
fn check_prerequisites(request: &Request) -> Result<()> {
    let functions = request.functions;

    for stage in Stage::PIPELINE {
        if !functions.contains(stage.function()) {
            continue;
        }

        if let Some(missing) = Stage::PIPELINE.into_iter().find(|required| {
            stage.prerequisites().contains(required.function())
                && !functions.contains(required.function())
        }) {
            return Err(Error::missing_prerequisite(stage.name(), missing.name()));
        }

        if stage.needs_refracted_zenith()
            && !functions.contains(Functions::REFRACTION)
            && request.refracted_zenith.is_none()
        {
            return Err(Error::missing_prerequisite(
                stage.name(),
                "refraction or a refracted zenith angle",
            ));
        }
    }
    Ok(())
}
