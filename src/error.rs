//! Error types for the SOLPOS calculator.

use thiserror::Error;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur while configuring or running a SOLPOS calculation.
///
/// Every validation failure names the offending input and its valid range.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// No calculation function was selected.
    #[error("no function selected")]
    NoFunction,
    /// A required input was never set.
    #[error("missing input: {name} must be set")]
    MissingInput {
        /// Name of the unset input.
        name: &'static str,
    },
    /// A selected function needs another function (or input) that was not selected.
    #[error("function {function} requires {requires}")]
    MissingPrerequisite {
        /// The selected function.
        function: &'static str,
        /// What it depends on.
        requires: &'static str,
    },
    /// A named construction parameter had the wrong value type.
    #[error("wrong type for parameter {key}, expected {expected}")]
    ParameterType {
        /// Parameter key.
        key: &'static str,
        /// Expected value type.
        expected: &'static str,
    },
    /// Invalid year (must be between 1950 and 2050).
    #[error("invalid year {value} (must be between 1950 and 2050)")]
    InvalidYear {
        /// The invalid year provided.
        value: i32,
    },
    /// Invalid month (must be between 1 and 12).
    #[error("invalid month {value} (must be between 1 and 12)")]
    InvalidMonth {
        /// The invalid month provided.
        value: i32,
    },
    /// Invalid day of month (must be between 1 and 31).
    #[error("invalid day {value} (must be between 1 and 31)")]
    InvalidDay {
        /// The invalid day provided.
        value: i32,
    },
    /// Invalid day of year (must be between 1 and 366).
    #[error("invalid day of year {value} (must be between 1 and 366)")]
    InvalidDayOfYear {
        /// The invalid day number provided.
        value: i32,
    },
    /// Invalid hour (must be between 0 and 24).
    #[error("invalid hour {value} (must be between 0 and 24)")]
    InvalidHour {
        /// The invalid hour provided.
        value: i32,
    },
    /// Invalid minute (must be between 0 and 59).
    #[error("invalid minute {value} (must be between 0 and 59)")]
    InvalidMinute {
        /// The invalid minute provided.
        value: i32,
    },
    /// Invalid second (must be between 0 and 59).
    #[error("invalid second {value} (must be between 0 and 59)")]
    InvalidSecond {
        /// The invalid second provided.
        value: i32,
    },
    /// Hour 24 given with a non-zero minute or second.
    #[error("invalid time 24:{minute:02}:{second:02} (hour 24 requires minute and second 0)")]
    InvalidEndOfDay {
        /// Minute provided with hour 24.
        minute: i32,
        /// Second provided with hour 24.
        second: i32,
    },
    /// Invalid timezone offset (must be between -12 and +12 hours).
    #[error("invalid timezone {value} h (must be between -12 and +12)")]
    InvalidTimezone {
        /// The invalid offset provided.
        value: f64,
    },
    /// Invalid measurement interval (must be between 0 and 28800 seconds).
    #[error("invalid interval {value} s (must be between 0 and 28800)")]
    InvalidInterval {
        /// The invalid interval provided.
        value: i32,
    },
    /// Invalid longitude (must be between -180 and +180 degrees).
    #[error("invalid longitude {value}° (must be between -180° and +180°)")]
    InvalidLongitude {
        /// The invalid longitude provided.
        value: f64,
    },
    /// Invalid latitude (must be between -90 and +90 degrees).
    #[error("invalid latitude {value}° (must be between -90° and +90°)")]
    InvalidLatitude {
        /// The invalid latitude provided.
        value: f64,
    },
    /// Invalid ambient temperature (must be between -100 and +100 °C).
    #[error("invalid temperature {value}°C (must be between -100°C and +100°C)")]
    InvalidTemperature {
        /// The invalid temperature provided.
        value: f64,
    },
    /// Invalid surface pressure (must be between 0 and 2000 mb).
    #[error("invalid pressure {value} mb (must be between 0 and 2000)")]
    InvalidPressure {
        /// The invalid pressure provided.
        value: f64,
    },
    /// Invalid panel tilt (magnitude must not exceed 180 degrees).
    #[error("invalid tilt {value}° (must be between -180° and +180°)")]
    InvalidTilt {
        /// The invalid tilt provided.
        value: f64,
    },
    /// Invalid panel aspect (must be between -360 and +360 degrees).
    #[error("invalid aspect {value}° (must be between -360° and +360°)")]
    InvalidAspect {
        /// The invalid aspect provided.
        value: f64,
    },
    /// Invalid shadow-band width (must be between 1 and 100 cm).
    #[error("invalid shadow band width {value} cm (must be between 1 and 100)")]
    InvalidShadowbandWidth {
        /// The invalid width provided.
        value: f64,
    },
    /// Invalid shadow-band radius (must be between 1 and 100 cm).
    #[error("invalid shadow band radius {value} cm (must be between 1 and 100)")]
    InvalidShadowbandRadius {
        /// The invalid radius provided.
        value: f64,
    },
    /// Invalid shadow-band sky factor (must be between -1 and +1).
    #[error("invalid shadow band sky factor {value} (must be between -1 and +1)")]
    InvalidShadowbandSky {
        /// The invalid sky factor provided.
        value: f64,
    },
}

impl Error {
    /// Creates a missing input error.
    #[must_use]
    pub const fn missing_input(name: &'static str) -> Self {
        Self::MissingInput { name }
    }

    /// Creates a missing prerequisite error.
    #[must_use]
    pub const fn missing_prerequisite(function: &'static str, requires: &'static str) -> Self {
        Self::MissingPrerequisite { function, requires }
    }

    /// Creates a parameter type error.
    #[must_use]
    pub const fn parameter_type(key: &'static str, expected: &'static str) -> Self {
        Self::ParameterType { key, expected }
    }

    /// Creates an invalid latitude error.
    #[must_use]
    pub const fn invalid_latitude(value: f64) -> Self {
        Self::InvalidLatitude { value }
    }

    /// Creates an invalid longitude error.
    #[must_use]
    pub const fn invalid_longitude(value: f64) -> Self {
        Self::InvalidLongitude { value }
    }

    /// Creates an invalid pressure error.
    #[must_use]
    pub const fn invalid_pressure(value: f64) -> Self {
        Self::InvalidPressure { value }
    }

    /// Creates an invalid temperature error.
    #[must_use]
    pub const fn invalid_temperature(value: f64) -> Self {
        Self::InvalidTemperature { value }
    }

    /// Returns true for errors caused by an out-of-range input value.
    #[must_use]
    pub const fn is_range_error(&self) -> bool {
        !matches!(
            self,
            Self::NoFunction
                | Self::MissingInput { .. }
                | Self::MissingPrerequisite { .. }
                | Self::ParameterType { .. }
        )
    }
}

/// Validates the year is within the algorithm's range (1950 to 2050).
///
/// # Errors
/// Returns `InvalidYear` outside 1950..=2050.
pub fn check_year(year: i32) -> Result<()> {
    if !(1950..=2050).contains(&year) {
        return Err(Error::InvalidYear { value: year });
    }
    Ok(())
}

/// Validates the month (1 to 12).
///
/// # Errors
/// Returns `InvalidMonth` outside 1..=12.
pub fn check_month(month: i32) -> Result<()> {
    if !(1..=12).contains(&month) {
        return Err(Error::InvalidMonth { value: month });
    }
    Ok(())
}

/// Validates the day of month (1 to 31).
///
/// # Errors
/// Returns `InvalidDay` outside 1..=31.
pub fn check_day(day: i32) -> Result<()> {
    if !(1..=31).contains(&day) {
        return Err(Error::InvalidDay { value: day });
    }
    Ok(())
}

/// Validates the day of year (1 to 366).
///
/// # Errors
/// Returns `InvalidDayOfYear` outside 1..=366.
pub fn check_day_of_year(daynum: i32) -> Result<()> {
    if !(1..=366).contains(&daynum) {
        return Err(Error::InvalidDayOfYear { value: daynum });
    }
    Ok(())
}

/// Validates hour, minute and second, allowing exactly 24:00:00 as end of day.
///
/// # Errors
/// Returns `InvalidHour`, `InvalidMinute`, `InvalidSecond` or `InvalidEndOfDay`.
pub fn check_time_of_day(hour: i32, minute: i32, second: i32) -> Result<()> {
    if !(0..=24).contains(&hour) {
        return Err(Error::InvalidHour { value: hour });
    }
    if !(0..=59).contains(&minute) {
        return Err(Error::InvalidMinute { value: minute });
    }
    if !(0..=59).contains(&second) {
        return Err(Error::InvalidSecond { value: second });
    }
    if hour == 24 && (minute > 0 || second > 0) {
        return Err(Error::InvalidEndOfDay { minute, second });
    }
    Ok(())
}

/// Validates the timezone offset in hours (-12 to +12).
///
/// # Errors
/// Returns `InvalidTimezone` for offsets beyond ±12 hours.
pub fn check_timezone(timezone: f64) -> Result<()> {
    if !(-12.0..=12.0).contains(&timezone) {
        return Err(Error::InvalidTimezone { value: timezone });
    }
    Ok(())
}

/// Validates the measurement interval in seconds (0 to 28800).
///
/// # Errors
/// Returns `InvalidInterval` outside 0..=28800.
pub fn check_interval(interval: i32) -> Result<()> {
    if !(0..=28_800).contains(&interval) {
        return Err(Error::InvalidInterval { value: interval });
    }
    Ok(())
}

/// Validates latitude is within the valid range (-90 to +90 degrees).
///
/// # Errors
/// Returns `InvalidLatitude` if latitude is outside -90 to +90 degrees.
pub fn check_latitude(latitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::invalid_latitude(latitude));
    }
    Ok(())
}

/// Validates longitude is within the valid range (-180 to +180 degrees).
///
/// # Errors
/// Returns `InvalidLongitude` if longitude is outside -180 to +180 degrees.
pub fn check_longitude(longitude: f64) -> Result<()> {
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(Error::invalid_longitude(longitude));
    }
    Ok(())
}

/// Validates the ambient temperature (-100 to +100 °C).
///
/// # Errors
/// Returns `InvalidTemperature` outside ±100 °C.
pub fn check_temperature(temperature: f64) -> Result<()> {
    if !(-100.0..=100.0).contains(&temperature) {
        return Err(Error::invalid_temperature(temperature));
    }
    Ok(())
}

/// Validates the surface pressure (0 to 2000 mb).
///
/// # Errors
/// Returns `InvalidPressure` outside 0..=2000 mb.
pub fn check_pressure(pressure: f64) -> Result<()> {
    if !(0.0..=2000.0).contains(&pressure) {
        return Err(Error::invalid_pressure(pressure));
    }
    Ok(())
}

/// Validates the panel tilt. The bound is ±180° even though a physical tilt is ±90°.
///
/// # Errors
/// Returns `InvalidTilt` when |tilt| > 180°.
pub fn check_tilt(tilt: f64) -> Result<()> {
    if !(-180.0..=180.0).contains(&tilt) {
        return Err(Error::InvalidTilt { value: tilt });
    }
    Ok(())
}

/// Validates the panel aspect (-360 to +360 degrees).
///
/// # Errors
/// Returns `InvalidAspect` when |aspect| > 360°.
pub fn check_aspect(aspect: f64) -> Result<()> {
    if !(-360.0..=360.0).contains(&aspect) {
        return Err(Error::InvalidAspect { value: aspect });
    }
    Ok(())
}

/// Validates shadow-band width, radius and sky factor.
///
/// # Errors
/// Returns `InvalidShadowbandWidth`, `InvalidShadowbandRadius` or `InvalidShadowbandSky`.
pub fn check_shadowband(width: f64, radius: f64, sky: f64) -> Result<()> {
    if !(1.0..=100.0).contains(&width) {
        return Err(Error::InvalidShadowbandWidth { value: width });
    }
    if !(1.0..=100.0).contains(&radius) {
        return Err(Error::InvalidShadowbandRadius { value: radius });
    }
    if !(-1.0..=1.0).contains(&sky) {
        return Err(Error::InvalidShadowbandSky { value: sky });
    }
    Ok(())
}
