//! Input records and result shapes for SOLPOS calculations.

use crate::functions::Functions;
use crate::time::CalendarDate;
use crate::{Error, Result};
#[cfg(feature = "chrono")]
use chrono::{DateTime, FixedOffset, TimeZone};
use log::trace;

/// Default surface pressure in millibars.
pub const DEFAULT_PRESSURE: f64 = 1013.0;
/// Default ambient temperature in degrees Celsius.
pub const DEFAULT_TEMPERATURE: f64 = 15.0;
/// Default panel aspect in degrees (south-facing).
pub const DEFAULT_ASPECT: f64 = 180.0;
/// Default shadow-band width in centimeters.
pub const DEFAULT_SHADOWBAND_WIDTH: f64 = 7.6;
/// Default shadow-band radius in centimeters.
pub const DEFAULT_SHADOWBAND_RADIUS: f64 = 31.7;
/// Default shadow-band sky factor.
pub const DEFAULT_SHADOWBAND_SKY: f64 = 0.04;
/// Default solar constant in W/m².
pub const DEFAULT_SOLAR_CONSTANT: f64 = 1367.0;

/// Inputs to one SOLPOS calculation.
///
/// Date, time and location fields start unset and must be given before any
/// calculation that depends on them; the atmospheric, panel and shadow-band
/// fields start at the NREL defaults.
///
/// # Example
/// ```
/// # use solpos::{Functions, Request};
/// let mut request = Request::new();
/// request.year = Some(1999);
/// request.month = Some(7);
/// request.day = Some(22);
/// request.hour = Some(9);
/// request.minute = Some(45);
/// request.second = Some(37);
/// request.timezone = Some(-5.0);
/// request.latitude = Some(33.65);
/// request.longitude = Some(-84.43);
///
/// assert_eq!(request.pressure, 1013.0);
/// assert_eq!(request.functions, Functions::DEFAULT);
/// assert_eq!(request.calendar_date().unwrap().day_of_year(), 203);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    /// Four-digit year (1950 to 2050).
    pub year: Option<i32>,
    /// Month number (1 to 12); used unless [`Functions::DAY_OF_YEAR`] is selected.
    pub month: Option<i32>,
    /// Day of month (1 to 31); used unless [`Functions::DAY_OF_YEAR`] is selected.
    pub day: Option<i32>,
    /// Day of year (1 to 366); used when [`Functions::DAY_OF_YEAR`] is selected.
    pub day_of_year: Option<i32>,
    /// Local standard hour (0 to 24).
    pub hour: Option<i32>,
    /// Minute (0 to 59).
    pub minute: Option<i32>,
    /// Second (0 to 59).
    pub second: Option<i32>,
    /// Measurement interval in seconds (0 to 28800). Non-zero values move the
    /// calculation to the midpoint of an interval ending at the given time.
    pub interval: i32,
    /// Latitude in degrees, north positive.
    pub latitude: Option<f64>,
    /// Longitude in degrees, east positive.
    pub longitude: Option<f64>,
    /// Timezone in hours east of UTC (-12 to 12).
    pub timezone: Option<f64>,
    /// Surface pressure in millibars.
    pub pressure: f64,
    /// Ambient dry-bulb temperature in degrees Celsius.
    pub temperature: f64,
    /// Panel tilt from horizontal in degrees.
    pub tilt: f64,
    /// Panel azimuth in degrees, N=0 E=90 S=180 W=270.
    pub aspect: f64,
    /// Shadow-band width in centimeters.
    pub shadowband_width: f64,
    /// Shadow-band radius in centimeters.
    pub shadowband_radius: f64,
    /// Shadow-band sky factor.
    pub shadowband_sky: f64,
    /// Solar constant in W/m².
    pub solar_constant: f64,
    /// Refracted zenith angle supplied by the caller.
    ///
    /// Lets air mass, ETR and tilt run without [`Functions::REFRACTION`].
    /// Ignored when refraction is selected.
    pub refracted_zenith: Option<f64>,
    /// Calculations to run.
    pub functions: Functions,
}

impl Request {
    /// Creates a request with no date, time or location and default atmosphere.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            year: None,
            month: None,
            day: None,
            day_of_year: None,
            hour: None,
            minute: None,
            second: None,
            interval: 0,
            latitude: None,
            longitude: None,
            timezone: None,
            pressure: DEFAULT_PRESSURE,
            temperature: DEFAULT_TEMPERATURE,
            tilt: 0.0,
            aspect: DEFAULT_ASPECT,
            shadowband_width: DEFAULT_SHADOWBAND_WIDTH,
            shadowband_radius: DEFAULT_SHADOWBAND_RADIUS,
            shadowband_sky: DEFAULT_SHADOWBAND_SKY,
            solar_constant: DEFAULT_SOLAR_CONSTANT,
            refracted_zenith: None,
            functions: Functions::DEFAULT,
        }
    }

    /// Creates a request for a timestamp and location.
    ///
    /// The timestamp's own offset becomes the timezone, so a `DateTime<Utc>`
    /// yields timezone 0 and local fields in UTC.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn from_datetime<Tz: TimeZone>(
        datetime: &DateTime<Tz>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        let mut request = Self::new();
        request.set_datetime(datetime);
        request.latitude = Some(latitude);
        request.longitude = Some(longitude);
        request
    }

    /// Replaces the date, time-of-day and timezone fields from a timestamp.
    ///
    /// Sub-second precision is dropped.
    #[cfg(feature = "chrono")]
    pub fn set_datetime<Tz: TimeZone>(&mut self, datetime: &DateTime<Tz>) {
        let (date, [hour, minute, second]) = crate::time::datetime_fields(datetime);
        self.year = Some(date.year());
        self.month = Some(date.month());
        self.day = Some(date.day());
        self.day_of_year = Some(date.day_of_year());
        self.hour = Some(hour);
        self.minute = Some(minute);
        self.second = Some(second);
        self.timezone = Some(crate::time::timezone_hours(datetime));
    }

    /// Local timestamp described by the date, time and timezone fields.
    ///
    /// Returns `None` if any of them is unset or they do not form a real date.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn datetime(&self) -> Option<DateTime<FixedOffset>> {
        let date = self.calendar_date().ok()?;
        crate::time::datetime_from_fields(
            &date,
            self.hour?,
            self.minute?,
            self.second?,
            self.timezone?,
        )
    }

    /// Resolves the calendar date from either month/day or day-of-year input,
    /// depending on whether [`Functions::DAY_OF_YEAR`] is selected.
    ///
    /// # Errors
    /// Returns `MissingInput` for unset fields, or a range error for invalid
    /// month, day or day of year.
    pub fn calendar_date(&self) -> Result<CalendarDate> {
        let year = self.year.ok_or(Error::missing_input("year"))?;
        if self.functions.contains(Functions::DAY_OF_YEAR) {
            let day_of_year = self
                .day_of_year
                .ok_or(Error::missing_input("day of year"))?;
            CalendarDate::from_day_of_year(year, day_of_year)
        } else {
            let month = self.month.ok_or(Error::missing_input("month"))?;
            let day = self.day.ok_or(Error::missing_input("day"))?;
            CalendarDate::from_month_day(year, month, day)
        }
    }

    /// Applies named construction parameters.
    ///
    /// Recognized keys are `press`, `temp`, `tilt` and `aspect` (float),
    /// `month` and `day` (integer) and `function` (a [`Functions`] mask).
    /// Unknown keys are ignored.
    ///
    /// # Errors
    /// Returns `ParameterType` when a recognized key carries the wrong kind of value.
    ///
    /// # Example
    /// ```
    /// # use solpos::{Functions, Param, Request};
    /// let mut request = Request::new();
    /// request
    ///     .apply_parameters([("press", Param::Float(1006.0)), ("function", Functions::S_ETR.into())])
    ///     .unwrap();
    /// assert_eq!(request.pressure, 1006.0);
    /// assert_eq!(request.functions, Functions::S_ETR);
    ///
    /// assert!(request.apply_parameters([("temp", Param::Int(20))]).is_err());
    /// ```
    pub fn apply_parameters<'a, I>(&mut self, parameters: I) -> Result<()>
    where
        I: IntoIterator<Item = (&'a str, Param)>,
    {
        for (key, value) in parameters {
            match key {
                "press" => self.pressure = value.float("press")?,
                "temp" => self.temperature = value.float("temp")?,
                "tilt" => self.tilt = value.float("tilt")?,
                "aspect" => self.aspect = value.float("aspect")?,
                "month" => self.month = Some(value.int("month")?),
                "day" => self.day = Some(value.int("day")?),
                "function" => self.functions = value.functions("function")?,
                _ => trace!("ignoring unknown parameter {key}"),
            }
        }
        Ok(())
    }
}

impl Default for Request {
    fn default() -> Self {
        Self::new()
    }
}

/// Value of a named construction parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Param {
    /// Floating-point value.
    Float(f64),
    /// Integer value.
    Int(i32),
    /// Function selector mask.
    Functions(Functions),
}

impl Param {
    fn float(self, key: &'static str) -> Result<f64> {
        match self {
            Self::Float(value) => Ok(value),
            _ => Err(Error::parameter_type(key, "float")),
        }
    }

    fn int(self, key: &'static str) -> Result<i32> {
        match self {
            Self::Int(value) => Ok(value),
            _ => Err(Error::parameter_type(key, "integer")),
        }
    }

    fn functions(self, key: &'static str) -> Result<Functions> {
        match self {
            Self::Functions(value) => Ok(value),
            _ => Err(Error::parameter_type(key, "function mask")),
        }
    }
}

impl From<f64> for Param {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<i32> for Param {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl From<Functions> for Param {
    fn from(value: Functions) -> Self {
        Self::Functions(value)
    }
}

/// Local clock inputs that passed validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Clock {
    pub(crate) hour: i32,
    pub(crate) minute: i32,
    pub(crate) second: i32,
    pub(crate) interval: i32,
    pub(crate) timezone: f64,
}

/// Observer location that passed validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Site {
    pub(crate) latitude: f64,
    pub(crate) longitude: f64,
}

/// Sunrise and sunset for the calculation date.
///
/// Times default to minutes from local midnight; the `chrono` helpers map them
/// to timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SunriseResult<T = f64> {
    /// Regular day with distinct sunrise and sunset.
    RegularDay {
        /// Time of sunrise.
        sunrise: T,
        /// Time of sunset.
        sunset: T,
    },
    /// Polar day: the sun stays above the horizon.
    AllDay,
    /// Polar night: the sun stays below the horizon.
    AllNight,
}

impl<T> SunriseResult<T> {
    /// Checks if this represents a regular day with sunrise and sunset.
    pub const fn is_regular_day(&self) -> bool {
        matches!(self, Self::RegularDay { .. })
    }

    /// Checks if this represents a polar day (sun never sets).
    pub const fn is_polar_day(&self) -> bool {
        matches!(self, Self::AllDay)
    }

    /// Checks if this represents a polar night (sun never rises).
    pub const fn is_polar_night(&self) -> bool {
        matches!(self, Self::AllNight)
    }

    /// Gets sunrise time if this is a regular day.
    pub const fn sunrise(&self) -> Option<&T> {
        if let Self::RegularDay { sunrise, .. } = self {
            Some(sunrise)
        } else {
            None
        }
    }

    /// Gets sunset time if this is a regular day.
    pub const fn sunset(&self) -> Option<&T> {
        if let Self::RegularDay { sunset, .. } = self {
            Some(sunset)
        } else {
            None
        }
    }

    /// Converts the sunrise and sunset times, keeping polar cases as they are.
    pub fn map<U, F: FnMut(T) -> U>(self, mut f: F) -> SunriseResult<U> {
        match self {
            Self::RegularDay { sunrise, sunset } => SunriseResult::RegularDay {
                sunrise: f(sunrise),
                sunset: f(sunset),
            },
            Self::AllDay => SunriseResult::AllDay,
            Self::AllNight => SunriseResult::AllNight,
        }
    }
}
