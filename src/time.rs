//! Calendar conversions for the SOLPOS date inputs.
//!
//! Converts between day-of-month and day-of-year with Gregorian leap-year
//! handling and, with the `chrono` feature, between request fields and
//! timezone-aware timestamps.

use crate::error::{check_day, check_day_of_year, check_month};
use crate::{Error, Result};
#[cfg(feature = "chrono")]
use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, TimeDelta, TimeZone, Timelike};

/// Cumulative number of days prior to the beginning of each month
/// (index 1 = January), for common and leap years.
const MONTH_DAYS: [[i32; 13]; 2] = [
    [0, 0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334],
    [0, 0, 31, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335],
];

/// Seconds per minute.
#[cfg(feature = "chrono")]
const SECONDS_PER_MINUTE: f64 = 60.0;

/// Seconds per hour.
#[cfg(feature = "chrono")]
const SECONDS_PER_HOUR: f64 = 3600.0;

/// Returns true for Gregorian leap years.
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Converts a month and day of month to a day of year (Feb 1 = 32).
///
/// # Errors
/// Returns `InvalidMonth` or `InvalidDay` for out-of-range components.
///
/// # Example
/// ```
/// # use solpos::time::day_of_month_to_day_of_year;
/// assert_eq!(day_of_month_to_day_of_year(1999, 7, 22).unwrap(), 203);
/// assert_eq!(day_of_month_to_day_of_year(2000, 3, 1).unwrap(), 61);
/// ```
pub fn day_of_month_to_day_of_year(year: i32, month: i32, day: i32) -> Result<i32> {
    check_month(month)?;
    check_day(day)?;
    let index = usize::try_from(month).map_err(|_| Error::InvalidMonth { value: month })?;

    let mut daynum = day + MONTH_DAYS[0][index];
    if is_leap_year(year) && month > 2 {
        daynum += 1;
    }
    Ok(daynum)
}

/// Converts a day of year to `(month, day)`.
///
/// Day 366 of a common year maps to December 32.
///
/// # Errors
/// Returns `InvalidDayOfYear` outside 1..=366.
///
/// # Example
/// ```
/// # use solpos::time::day_of_year_to_day_of_month;
/// assert_eq!(day_of_year_to_day_of_month(1999, 203).unwrap(), (7, 22));
/// assert_eq!(day_of_year_to_day_of_month(2000, 60).unwrap(), (2, 29));
/// ```
pub fn day_of_year_to_day_of_month(year: i32, daynum: i32) -> Result<(i32, i32)> {
    check_day_of_year(daynum)?;
    let table = &MONTH_DAYS[usize::from(is_leap_year(year))];

    let month = (1..=12_usize)
        .rev()
        .find(|&month| daynum > table[month])
        .unwrap_or(1);
    let month_number = i32::try_from(month).map_err(|_| Error::InvalidDayOfYear { value: daynum })?;
    Ok((month_number, daynum - table[month]))
}

/// A calendar date carried in both month/day and day-of-year form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarDate {
    year: i32,
    month: i32,
    day: i32,
    day_of_year: i32,
}

impl CalendarDate {
    /// Builds a date from month and day of month, deriving the day of year.
    ///
    /// A day past the end of its month rolls into the next one, so
    /// February 31 of 1999 becomes March 3 (day 62).
    ///
    /// # Errors
    /// Returns `InvalidMonth` or `InvalidDay` for out-of-range components.
    ///
    /// # Example
    /// ```
    /// # use solpos::CalendarDate;
    /// let date = CalendarDate::from_month_day(1999, 2, 31).unwrap();
    /// assert_eq!((date.month(), date.day(), date.day_of_year()), (3, 3, 62));
    /// ```
    pub fn from_month_day(year: i32, month: i32, day: i32) -> Result<Self> {
        let day_of_year = day_of_month_to_day_of_year(year, month, day)?;
        Self::from_day_of_year(year, day_of_year)
    }

    /// Builds a date from a day of year, deriving month and day of month.
    ///
    /// Day 366 of a common year rolls over to January 1 of the next year.
    ///
    /// # Errors
    /// Returns `InvalidDayOfYear` outside 1..=366.
    pub fn from_day_of_year(year: i32, day_of_year: i32) -> Result<Self> {
        check_day_of_year(day_of_year)?;
        let days_in_year = if is_leap_year(year) { 366 } else { 365 };
        let (year, day_of_year) = if day_of_year > days_in_year {
            (year + 1, day_of_year - days_in_year)
        } else {
            (year, day_of_year)
        };

        let (month, day) = day_of_year_to_day_of_month(year, day_of_year)?;
        Ok(Self {
            year,
            month,
            day,
            day_of_year,
        })
    }

    /// Four-digit year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Month number (January = 1).
    #[must_use]
    pub const fn month(&self) -> i32 {
        self.month
    }

    /// Day of month.
    #[must_use]
    pub const fn day(&self) -> i32 {
        self.day
    }

    /// Day of year (February 1 = 32).
    #[must_use]
    pub const fn day_of_year(&self) -> i32 {
        self.day_of_year
    }
}

/// UTC offset of a timestamp in fractional hours (east positive).
#[cfg(feature = "chrono")]
pub fn timezone_hours<Tz: TimeZone>(datetime: &DateTime<Tz>) -> f64 {
    use chrono::Offset;

    f64::from(datetime.offset().fix().local_minus_utc()) / SECONDS_PER_HOUR
}

/// Builds the fixed offset for a timezone given in hours.
#[cfg(feature = "chrono")]
fn fixed_offset(timezone: f64) -> Option<FixedOffset> {
    let seconds = crate::math::floor(timezone * SECONDS_PER_HOUR + 0.5);
    FixedOffset::east_opt(seconds as i32)
}

/// Local midnight of a calendar date at a fixed timezone offset.
#[cfg(feature = "chrono")]
fn local_midnight(
    year: i32,
    month: i32,
    day: i32,
    timezone: f64,
) -> Option<DateTime<FixedOffset>> {
    let offset = fixed_offset(timezone)?;
    let date = NaiveDate::from_ymd_opt(year, u32::try_from(month).ok()?, u32::try_from(day).ok()?)?;
    offset
        .from_local_datetime(&date.and_hms_opt(0, 0, 0)?)
        .single()
}

/// Builds a local timestamp from date, time-of-day and timezone fields.
///
/// Hour 24 rolls over to midnight of the next day. Returns `None` when the
/// fields do not form a real date.
#[cfg(feature = "chrono")]
#[must_use]
pub fn datetime_from_fields(
    date: &CalendarDate,
    hour: i32,
    minute: i32,
    second: i32,
    timezone: f64,
) -> Option<DateTime<FixedOffset>> {
    let midnight = local_midnight(date.year, date.month, date.day, timezone)?;
    let seconds = i64::from(hour) * 3600 + i64::from(minute) * 60 + i64::from(second);
    midnight.checked_add_signed(TimeDelta::try_seconds(seconds)?)
}

/// Converts minutes from local midnight to a timestamp on the given date.
///
/// Fractional seconds are truncated.
#[cfg(feature = "chrono")]
#[must_use]
pub fn minutes_to_datetime(
    date: &CalendarDate,
    timezone: f64,
    minutes: f64,
) -> Option<DateTime<FixedOffset>> {
    if !minutes.is_finite() {
        return None;
    }
    let midnight = local_midnight(date.year, date.month, date.day, timezone)?;
    let seconds = crate::math::floor(minutes * SECONDS_PER_MINUTE) as i64;
    midnight.checked_add_signed(TimeDelta::try_seconds(seconds)?)
}

/// Splits a timestamp into SOLPOS date and time-of-day fields.
#[cfg(feature = "chrono")]
#[allow(clippy::cast_possible_wrap)]
pub(crate) fn datetime_fields<Tz: TimeZone>(datetime: &DateTime<Tz>) -> (CalendarDate, [i32; 3]) {
    let date = CalendarDate {
        year: datetime.year(),
        month: datetime.month() as i32,
        day: datetime.day() as i32,
        day_of_year: datetime.ordinal() as i32,
    };
    let time = [
        datetime.hour() as i32,
        datetime.minute() as i32,
        datetime.second() as i32,
    ];
    (date, time)
}
