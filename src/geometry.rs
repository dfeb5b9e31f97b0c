//! Base solar geometry: Earth radius vector, Julian day, ecliptic and
//! equatorial coordinates of the sun, sidereal time and hour angle.
//!
//! Follows Michalsky (1988), "The Astronomical Almanac's algorithm for
//! approximate solar position (1950-2050)", Solar Energy 40(3), 227-235,
//! with the Fourier series for the earth radius vector from Spencer (1971).

use crate::math::{
    DEGRAD, RADDEG, asin, atan2, cos, fold_degrees_180, normalize_degrees_0_to_360,
    normalize_hours_0_to_24, sin,
};
use crate::time::CalendarDate;
use crate::types::Clock;

/// Julian day offset for 0 UT on the last day of 1949.
const JULIAN_DAY_1949: f64 = 32916.5;
/// Julian day of the J2000.0 epoch, relative to the same origin.
const J2000: f64 = 51545.0;

/// Time-dependent quantities shared by every later stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Geometry {
    /// Day angle in degrees.
    pub(crate) day_angle: f64,
    /// Earth radius vector, multiplies the solar constant.
    pub(crate) earth_radius_vector: f64,
    /// Universal time in fractional hours.
    pub(crate) universal_time: f64,
    pub(crate) julian_day: f64,
    /// Days since J2000.0.
    pub(crate) ecliptic_time: f64,
    pub(crate) mean_longitude: f64,
    pub(crate) mean_anomaly: f64,
    pub(crate) ecliptic_longitude: f64,
    pub(crate) obliquity: f64,
    pub(crate) declination: f64,
    pub(crate) right_ascension: f64,
    /// Greenwich mean sidereal time in hours.
    pub(crate) greenwich_sidereal_time: f64,
    /// Local mean sidereal time in degrees.
    pub(crate) local_sidereal_time: f64,
    /// Hour angle in degrees, west positive, in [-180, 180].
    pub(crate) hour_angle: f64,
}

impl Geometry {
    /// Computes the geometry for a validated date, clock and longitude.
    pub(crate) fn compute(date: &CalendarDate, clock: &Clock, longitude: f64) -> Self {
        let day_angle = day_angle(date.day_of_year());
        let earth_radius_vector = earth_radius_vector(day_angle);
        let universal_time = universal_time(clock);

        let delta = date.year() - 1949;
        let leap = delta / 4;
        let julian_day = JULIAN_DAY_1949
            + 365.0 * f64::from(delta)
            + f64::from(leap)
            + f64::from(date.day_of_year())
            + universal_time / 24.0;
        let ecliptic_time = julian_day - J2000;

        let mean_longitude = normalize_degrees_0_to_360(280.460 + 0.985_647_4 * ecliptic_time);
        let mean_anomaly = normalize_degrees_0_to_360(357.528 + 0.985_600_3 * ecliptic_time);
        let ecliptic_longitude = normalize_degrees_0_to_360(
            mean_longitude
                + 1.915 * sin(mean_anomaly * RADDEG)
                + 0.020 * sin(2.0 * mean_anomaly * RADDEG),
        );
        let obliquity = 23.439 - 4.0e-07 * ecliptic_time;

        let declination =
            DEGRAD * asin(sin(obliquity * RADDEG) * sin(ecliptic_longitude * RADDEG));

        let top = cos(RADDEG * obliquity) * sin(RADDEG * ecliptic_longitude);
        let bottom = cos(RADDEG * ecliptic_longitude);
        let mut right_ascension = DEGRAD * atan2(top, bottom);
        if right_ascension < 0.0 {
            right_ascension += 360.0;
        }

        let greenwich_sidereal_time =
            normalize_hours_0_to_24(6.697_375 + 0.065_709_824_2 * ecliptic_time + universal_time);
        let local_sidereal_time =
            normalize_degrees_0_to_360(greenwich_sidereal_time * 15.0 + longitude);
        let hour_angle = fold_degrees_180(local_sidereal_time - right_ascension);

        Self {
            day_angle,
            earth_radius_vector,
            universal_time,
            julian_day,
            ecliptic_time,
            mean_longitude,
            mean_anomaly,
            ecliptic_longitude,
            obliquity,
            declination,
            right_ascension,
            greenwich_sidereal_time,
            local_sidereal_time,
            hour_angle,
        }
    }
}

fn day_angle(day_of_year: i32) -> f64 {
    360.0 * f64::from(day_of_year - 1) / 365.0
}

fn earth_radius_vector(day_angle: f64) -> f64 {
    let sd = sin(RADDEG * day_angle);
    let cd = cos(RADDEG * day_angle);
    let d2 = 2.0 * day_angle;
    let c2 = cos(RADDEG * d2);
    let s2 = sin(RADDEG * d2);

    1.000_110 + 0.034_221 * cd + 0.001_280 * sd + 0.000_719 * c2 + 0.000_077 * s2
}

/// Universal time in hours, shifted back to the interval midpoint.
fn universal_time(clock: &Clock) -> f64 {
    let seconds = f64::from(clock.hour) * 3600.0
        + f64::from(clock.minute) * 60.0
        + f64::from(clock.second)
        - f64::from(clock.interval) / 2.0;
    seconds / 3600.0 - clock.timezone
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-6;

    fn clock(hour: i32, minute: i32, second: i32, interval: i32, timezone: f64) -> Clock {
        Clock {
            hour,
            minute,
            second,
            interval,
            timezone,
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < TOLERANCE,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_reference_geometry() {
        let date = CalendarDate::from_month_day(1999, 7, 22).unwrap();
        let geometry = Geometry::compute(&date, &clock(9, 45, 37, 0, -5.0), -84.43);

        assert_close(geometry.day_angle, 199.232_876_712_328_76);
        assert_close(geometry.earth_radius_vector, 0.967_988_176_660_197_9);
        assert_close(geometry.universal_time, 14.760_277_777_777_778);
        assert_close(geometry.julian_day, 51_382.115_011_574_075);
        assert_close(geometry.ecliptic_time, -162.884_988_425_925_26);
        assert_close(geometry.mean_longitude, 119.912_834_658_956_65);
        assert_close(geometry.mean_anomaly, 196.988_506_541_911_56);
        assert_close(geometry.ecliptic_longitude, 119.364_487_428_864_89);
        assert_close(geometry.obliquity, 23.439_065_153_995_37);
        assert_close(geometry.declination, 20.283_574_417_709_225);
        assert_close(geometry.right_ascension, 121.519_065_481_486);
        assert_close(geometry.greenwich_sidereal_time, 10.754_508_823_491_193);
        assert_close(geometry.local_sidereal_time, 76.887_632_352_367_89);
        assert_close(geometry.hour_angle, -44.631_433_129_118_11);
    }

    #[test]
    fn test_interval_shifts_to_midpoint() {
        let date = CalendarDate::from_month_day(1999, 7, 22).unwrap();
        let instant = Geometry::compute(&date, &clock(9, 45, 37, 0, -5.0), -84.43);
        let averaged = Geometry::compute(&date, &clock(9, 45, 37, 600, -5.0), -84.43);

        assert_close(averaged.universal_time, 14.676_944_444_444_445);
        assert_close(instant.universal_time - averaged.universal_time, 300.0 / 3600.0);
        assert_close(averaged.hour_angle, -45.881_398_623_327_684);
    }

    #[test]
    fn test_winter_solstice_noon() {
        let date = CalendarDate::from_month_day(2020, 12, 21).unwrap();
        let geometry = Geometry::compute(&date, &clock(12, 0, 0, 0, 0.0), 0.0);

        assert_close(geometry.julian_day, 59_205.0);
        assert_close(geometry.earth_radius_vector, 1.034_256_779_882_63);
        assert_close(geometry.declination, -23.435_907_307_623_662);
        assert_close(geometry.hour_angle, 0.424_548_422_361_283_43);
    }

    #[test]
    fn test_hour_angle_stays_folded() {
        let date = CalendarDate::from_day_of_year(2010, 100).unwrap();
        for hour in 0..=24 {
            for longitude in [-180.0, -90.0, 0.0, 90.0, 180.0] {
                let geometry = Geometry::compute(&date, &clock(hour, 0, 0, 0, 0.0), longitude);
                assert!((-180.0..=180.0).contains(&geometry.hour_angle));
                assert!((0.0..360.0).contains(&geometry.right_ascension));
                assert!((0.0..24.0).contains(&geometry.greenwich_sidereal_time));
            }
        }
    }
}
