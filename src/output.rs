//! Results of a SOLPOS calculation.

use crate::functions::Functions;
use crate::geometry::Geometry;
use crate::pipeline::{AirMass, Etr, Prime, Refraction, SolarTime, Tilt, Zenith};
use crate::time::CalendarDate;
use crate::types::SunriseResult;
#[cfg(feature = "chrono")]
use chrono::{DateTime, FixedOffset};

/// Values produced by the last calculation.
///
/// Every getter returns `None` when the stage producing the value was not
/// selected, when the calculation failed, or when the value is undefined for
/// the sun's position (air mass and the prime factors with the sun far below
/// the horizon).
#[derive(Debug, Clone, PartialEq)]
pub struct Output {
    pub(crate) functions: Functions,
    pub(crate) timezone: Option<f64>,
    pub(crate) date: Option<CalendarDate>,
    pub(crate) geometry: Option<Geometry>,
    pub(crate) zenith: Option<Zenith>,
    pub(crate) sunset_hour_angle: Option<f64>,
    pub(crate) shadowband_factor: Option<f64>,
    pub(crate) solar_time: Option<SolarTime>,
    pub(crate) sunrise_sunset: Option<SunriseResult>,
    pub(crate) azimuth: Option<f64>,
    pub(crate) refraction: Option<Refraction>,
    pub(crate) air_mass: Option<AirMass>,
    pub(crate) prime: Option<Prime>,
    pub(crate) etr: Option<Etr>,
    pub(crate) tilt: Option<Tilt>,
}

impl Output {
    /// Creates an empty output.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            functions: Functions::empty(),
            timezone: None,
            date: None,
            geometry: None,
            zenith: None,
            sunset_hour_angle: None,
            shadowband_factor: None,
            solar_time: None,
            sunrise_sunset: None,
            azimuth: None,
            refraction: None,
            air_mass: None,
            prime: None,
            etr: None,
            tilt: None,
        }
    }

    /// Function mask of the last successful calculation (empty before one).
    #[must_use]
    pub const fn functions(&self) -> Functions {
        self.functions
    }

    /// Date the calculation used, in both month/day and day-of-year form.
    #[must_use]
    pub const fn date(&self) -> Option<CalendarDate> {
        self.date
    }

    /// Day of year (February 1 = 32).
    #[must_use]
    pub fn day_of_year(&self) -> Option<i32> {
        self.date.map(|date| date.day_of_year())
    }

    /// Month number derived from, or given with, the date.
    #[must_use]
    pub fn month(&self) -> Option<i32> {
        self.date.map(|date| date.month())
    }

    /// Day of month derived from, or given with, the date.
    #[must_use]
    pub fn day(&self) -> Option<i32> {
        self.date.map(|date| date.day())
    }

    /// Day angle in degrees.
    #[must_use]
    pub fn day_angle(&self) -> Option<f64> {
        self.geometry.map(|g| g.day_angle)
    }

    /// Earth radius vector (multiplies the solar constant).
    #[must_use]
    pub fn earth_radius_vector(&self) -> Option<f64> {
        self.geometry.map(|g| g.earth_radius_vector)
    }

    /// Universal time in fractional hours.
    #[must_use]
    pub fn universal_time(&self) -> Option<f64> {
        self.geometry.map(|g| g.universal_time)
    }

    /// Julian day minus 2,400,000 days (to eliminate roundoff).
    #[must_use]
    pub fn julian_day(&self) -> Option<f64> {
        self.geometry.map(|g| g.julian_day)
    }

    /// Days since J2000.0.
    #[must_use]
    pub fn ecliptic_time(&self) -> Option<f64> {
        self.geometry.map(|g| g.ecliptic_time)
    }

    /// Mean longitude in degrees.
    #[must_use]
    pub fn mean_longitude(&self) -> Option<f64> {
        self.geometry.map(|g| g.mean_longitude)
    }

    /// Mean anomaly in degrees.
    #[must_use]
    pub fn mean_anomaly(&self) -> Option<f64> {
        self.geometry.map(|g| g.mean_anomaly)
    }

    /// Ecliptic longitude in degrees.
    #[must_use]
    pub fn ecliptic_longitude(&self) -> Option<f64> {
        self.geometry.map(|g| g.ecliptic_longitude)
    }

    /// Obliquity of the ecliptic in degrees.
    #[must_use]
    pub fn obliquity(&self) -> Option<f64> {
        self.geometry.map(|g| g.obliquity)
    }

    /// Declination in degrees.
    #[must_use]
    pub fn declination(&self) -> Option<f64> {
        self.geometry.map(|g| g.declination)
    }

    /// Right ascension in degrees.
    #[must_use]
    pub fn right_ascension(&self) -> Option<f64> {
        self.geometry.map(|g| g.right_ascension)
    }

    /// Greenwich mean sidereal time in hours.
    #[must_use]
    pub fn greenwich_sidereal_time(&self) -> Option<f64> {
        self.geometry.map(|g| g.greenwich_sidereal_time)
    }

    /// Local mean sidereal time in degrees.
    #[must_use]
    pub fn local_sidereal_time(&self) -> Option<f64> {
        self.geometry.map(|g| g.local_sidereal_time)
    }

    /// Hour angle in degrees, west positive.
    #[must_use]
    pub fn hour_angle(&self) -> Option<f64> {
        self.geometry.map(|g| g.hour_angle)
    }

    /// Solar zenith angle without refraction, capped at 99°.
    #[must_use]
    pub fn zenith(&self) -> Option<f64> {
        self.zenith.map(|z| z.zenith)
    }

    /// Solar elevation without refraction.
    #[must_use]
    pub fn elevation(&self) -> Option<f64> {
        self.zenith.map(|z| z.elevation)
    }

    /// Sunset hour angle in degrees.
    #[must_use]
    pub const fn sunset_hour_angle(&self) -> Option<f64> {
        self.sunset_hour_angle
    }

    /// Shadow-band correction factor.
    #[must_use]
    pub const fn shadowband_factor(&self) -> Option<f64> {
        self.shadowband_factor
    }

    /// True solar time in minutes from midnight.
    #[must_use]
    pub fn true_solar_time(&self) -> Option<f64> {
        self.solar_time.map(|t| t.true_solar_time)
    }

    /// Minutes to add to local standard time to get true solar time.
    #[must_use]
    pub fn solar_time_correction(&self) -> Option<f64> {
        self.solar_time.map(|t| t.correction)
    }

    /// Equation of time in minutes.
    #[must_use]
    pub fn equation_of_time(&self) -> Option<f64> {
        self.solar_time.map(|t| t.equation_of_time)
    }

    /// Sunrise and sunset in local standard minutes from midnight.
    #[must_use]
    pub const fn sunrise_sunset(&self) -> Option<SunriseResult> {
        self.sunrise_sunset
    }

    /// Sunrise in local standard minutes from midnight, if the sun rises.
    #[must_use]
    pub fn sunrise(&self) -> Option<f64> {
        self.sunrise_sunset?.sunrise().copied()
    }

    /// Sunset in local standard minutes from midnight, if the sun sets.
    #[must_use]
    pub fn sunset(&self) -> Option<f64> {
        self.sunrise_sunset?.sunset().copied()
    }

    /// Solar azimuth in degrees, N=0 E=90 S=180 W=270.
    #[must_use]
    pub const fn azimuth(&self) -> Option<f64> {
        self.azimuth
    }

    /// Solar elevation corrected for refraction.
    #[must_use]
    pub fn refracted_elevation(&self) -> Option<f64> {
        self.refraction.map(|r| r.elevation)
    }

    /// Solar zenith angle corrected for refraction.
    #[must_use]
    pub fn refracted_zenith(&self) -> Option<f64> {
        self.refraction.map(|r| r.zenith)
    }

    /// Cosine of the refracted zenith angle.
    #[must_use]
    pub fn cos_zenith(&self) -> Option<f64> {
        self.refraction.map(|r| r.cos_zenith)
    }

    /// Relative optical air mass.
    #[must_use]
    pub fn air_mass(&self) -> Option<f64> {
        self.air_mass.map(|a| a.relative)
    }

    /// Pressure-corrected air mass.
    #[must_use]
    pub fn pressure_corrected_air_mass(&self) -> Option<f64> {
        self.air_mass.map(|a| a.pressure_corrected)
    }

    /// Factor that normalizes Kt, Kn, etc.
    #[must_use]
    pub fn prime(&self) -> Option<f64> {
        self.prime.map(|p| p.prime)
    }

    /// Factor that denormalizes Kt' back to Kt.
    #[must_use]
    pub fn unprime(&self) -> Option<f64> {
        self.prime.map(|p| p.unprime)
    }

    /// Extraterrestrial direct normal irradiance in W/m².
    #[must_use]
    pub fn etr_normal(&self) -> Option<f64> {
        self.etr.map(|e| e.normal)
    }

    /// Extraterrestrial global horizontal irradiance in W/m².
    #[must_use]
    pub fn etr(&self) -> Option<f64> {
        self.etr.map(|e| e.horizontal)
    }

    /// Cosine of the solar incidence angle on the panel.
    #[must_use]
    pub fn cos_incidence(&self) -> Option<f64> {
        self.tilt.map(|t| t.cos_incidence)
    }

    /// Extraterrestrial global irradiance on the tilted panel in W/m².
    #[must_use]
    pub fn etr_tilt(&self) -> Option<f64> {
        self.tilt.map(|t| t.irradiance)
    }

    /// Sunrise as a timestamp at the calculation's timezone.
    ///
    /// `None` on polar days and nights, or when sunrise/sunset was not computed.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn sunrise_datetime(&self) -> Option<DateTime<FixedOffset>> {
        self.minutes_to_datetime(self.sunrise()?)
    }

    /// Sunset as a timestamp at the calculation's timezone.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn sunset_datetime(&self) -> Option<DateTime<FixedOffset>> {
        self.minutes_to_datetime(self.sunset()?)
    }

    /// Sunrise and sunset as timestamps, keeping polar cases.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn sunrise_sunset_datetimes(&self) -> Option<SunriseResult<DateTime<FixedOffset>>> {
        match self.sunrise_sunset? {
            SunriseResult::RegularDay { sunrise, sunset } => Some(SunriseResult::RegularDay {
                sunrise: self.minutes_to_datetime(sunrise)?,
                sunset: self.minutes_to_datetime(sunset)?,
            }),
            SunriseResult::AllDay => Some(SunriseResult::AllDay),
            SunriseResult::AllNight => Some(SunriseResult::AllNight),
        }
    }

    #[cfg(feature = "chrono")]
    fn minutes_to_datetime(&self, minutes: f64) -> Option<DateTime<FixedOffset>> {
        crate::time::minutes_to_datetime(&self.date?, self.timezone?, minutes)
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}
