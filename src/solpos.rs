//! The calculation pipeline and the [`Solpos`] context that owns one.

use crate::functions::Functions;
use crate::geometry::Geometry;
use crate::math::{RADDEG, cos};
use crate::output::Output;
use crate::pipeline;
use crate::trig::TrigCache;
use crate::types::{Request, Site};
use crate::validate::{Inputs, check_inputs};
use crate::{Error, Result};
#[cfg(feature = "chrono")]
use crate::types::{Param, SunriseResult};
#[cfg(feature = "chrono")]
use chrono::{DateTime, FixedOffset, TimeZone};
use log::{debug, trace};

/// One sub-calculation of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Earth radius vector, Julian day, declination, sidereal time, hour angle.
    Geometry,
    /// Zenith and elevation without refraction.
    UnrefractedZenith,
    /// Sunset hour angle.
    SunsetHourAngle,
    /// Shadow-band correction factor.
    Shadowband,
    /// True solar time and equation of time.
    TrueSolarTime,
    /// Sunrise and sunset.
    SunriseSunset,
    /// Solar azimuth.
    SolarAzimuth,
    /// Refraction-corrected elevation and zenith.
    Refraction,
    /// Relative and pressure-corrected air mass.
    AirMass,
    /// Kt prime/unprime factors.
    Prime,
    /// Extraterrestrial irradiance.
    Etr,
    /// Irradiance on a tilted panel.
    Tilt,
}

impl Stage {
    /// Stages in execution order.
    pub const PIPELINE: [Self; 12] = [
        Self::Geometry,
        Self::UnrefractedZenith,
        Self::SunsetHourAngle,
        Self::Shadowband,
        Self::TrueSolarTime,
        Self::SunriseSunset,
        Self::SolarAzimuth,
        Self::Refraction,
        Self::AirMass,
        Self::Prime,
        Self::Etr,
        Self::Tilt,
    ];

    /// Function flag that selects this stage.
    #[must_use]
    pub const fn function(self) -> Functions {
        match self {
            Self::Geometry => Functions::GEOMETRY,
            Self::UnrefractedZenith => Functions::UNREFRACTED_ZENITH,
            Self::SunsetHourAngle => Functions::SUNSET_HOUR_ANGLE,
            Self::Shadowband => Functions::SHADOWBAND,
            Self::TrueSolarTime => Functions::TRUE_SOLAR_TIME,
            Self::SunriseSunset => Functions::SUNRISE_SUNSET,
            Self::SolarAzimuth => Functions::SOLAR_AZIMUTH,
            Self::Refraction => Functions::REFRACTION,
            Self::AirMass => Functions::AIR_MASS,
            Self::Prime => Functions::PRIME,
            Self::Etr => Functions::ETR,
            Self::Tilt => Functions::TILT,
        }
    }

    /// Stages that must also be selected for this one to run.
    ///
    /// Air mass and ETR also need a refracted zenith, which may come from
    /// [`Request::refracted_zenith`] instead of the refraction stage.
    #[must_use]
    pub const fn prerequisites(self) -> Functions {
        match self {
            Self::Geometry | Self::AirMass => Functions::empty(),
            Self::UnrefractedZenith | Self::SunsetHourAngle | Self::TrueSolarTime | Self::Etr => {
                Functions::GEOMETRY
            }
            Self::Shadowband => Functions::SUNSET_HOUR_ANGLE,
            Self::SunriseSunset => Functions::SUNSET_HOUR_ANGLE.union(Functions::TRUE_SOLAR_TIME),
            Self::SolarAzimuth | Self::Refraction => Functions::UNREFRACTED_ZENITH,
            Self::Prime => Functions::AIR_MASS,
            Self::Tilt => Functions::SOLAR_AZIMUTH.union(Functions::ETR),
        }
    }

    /// Human-readable name used in errors and logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Geometry => "geometry",
            Self::UnrefractedZenith => "unrefracted zenith",
            Self::SunsetHourAngle => "sunset hour angle",
            Self::Shadowband => "shadow band",
            Self::TrueSolarTime => "true solar time",
            Self::SunriseSunset => "sunrise/sunset",
            Self::SolarAzimuth => "solar azimuth",
            Self::Refraction => "refraction",
            Self::AirMass => "air mass",
            Self::Prime => "prime",
            Self::Etr => "ETR",
            Self::Tilt => "tilt",
        }
    }

    pub(crate) const fn needs_refracted_zenith(self) -> bool {
        matches!(self, Self::AirMass | Self::Etr)
    }
}

/// Runs one SOLPOS calculation.
///
/// `output` and `cache` are cleared first, so a failed calculation leaves
/// an empty output behind. Calculating twice from the same request gives
/// identical output.
///
/// # Errors
/// Returns the first validation failure; see [`crate::validate`].
///
/// # Example
/// ```
/// # use solpos::{calculate, Output, Request, TrigCache};
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
/// let mut output = Output::new();
/// let mut cache = TrigCache::new();
/// calculate(&request, &mut output, &mut cache).unwrap();
///
/// assert_eq!(output.day_of_year(), Some(203));
/// assert!((output.zenith().unwrap() - 41.6037).abs() < 1e-4);
/// ```
pub fn calculate(request: &Request, output: &mut Output, cache: &mut TrigCache) -> Result<()> {
    *output = Output::new();
    cache.reset();

    let inputs = check_inputs(request).inspect_err(|err| {
        debug!("rejected SOLPOS request: {err}");
    })?;

    let functions = request.functions;
    output.timezone = request.timezone;
    output.date = request.calendar_date().ok();

    for stage in Stage::PIPELINE {
        if functions.contains(stage.function()) {
            trace!("running {} stage", stage.name());
            if let Err(err) = run_stage(stage, request, &inputs, output, cache) {
                *output = Output::new();
                debug!("{} stage failed: {err}", stage.name());
                return Err(err);
            }
        }
    }

    output.functions = functions;
    debug!(
        "computed SOLPOS functions {:#06x} for day {:?}",
        functions.bits(),
        output.day_of_year()
    );
    Ok(())
}

fn upstream<T>(value: Option<T>, stage: Stage, requires: Stage) -> Result<T> {
    value.ok_or(Error::missing_prerequisite(stage.name(), requires.name()))
}

fn site(inputs: &Inputs) -> Result<Site> {
    inputs.site.ok_or(Error::missing_input("latitude"))
}

/// Refracted zenith from the refraction stage, else the caller's value.
fn refracted_zenith(request: &Request, output: &Output, stage: Stage) -> Result<(f64, f64)> {
    if let Some(refraction) = output.refraction {
        return Ok((refraction.zenith, refraction.cos_zenith));
    }
    let zenith = upstream(request.refracted_zenith, stage, Stage::Refraction)?;
    Ok((zenith, cos(RADDEG * zenith)))
}

fn run_stage(
    stage: Stage,
    request: &Request,
    inputs: &Inputs,
    output: &mut Output,
    cache: &mut TrigCache,
) -> Result<()> {
    match stage {
        Stage::Geometry => {
            let date = output.date.ok_or(Error::missing_input("date"))?;
            let clock = inputs.clock.ok_or(Error::missing_input("time of day"))?;
            output.geometry = Some(Geometry::compute(&date, &clock, site(inputs)?.longitude));
        }
        Stage::UnrefractedZenith => {
            let geometry = upstream(output.geometry, stage, Stage::Geometry)?;
            let trig =
                cache.get_or_compute(geometry.declination, geometry.hour_angle, site(inputs)?.latitude);
            output.zenith = Some(pipeline::unrefracted_zenith(&trig));
        }
        Stage::SunsetHourAngle => {
            let geometry = upstream(output.geometry, stage, Stage::Geometry)?;
            let latitude = site(inputs)?.latitude;
            let trig = cache.get_or_compute(geometry.declination, geometry.hour_angle, latitude);
            output.sunset_hour_angle = Some(pipeline::sunset_hour_angle(
                &trig,
                geometry.declination,
                latitude,
            ));
        }
        Stage::Shadowband => {
            let geometry = upstream(output.geometry, stage, Stage::Geometry)?;
            let ssha = upstream(output.sunset_hour_angle, stage, Stage::SunsetHourAngle)?;
            let trig =
                cache.get_or_compute(geometry.declination, geometry.hour_angle, site(inputs)?.latitude);
            output.shadowband_factor = Some(pipeline::shadowband_factor(
                &trig,
                ssha,
                request.shadowband_width,
                request.shadowband_radius,
                request.shadowband_sky,
            ));
        }
        Stage::TrueSolarTime => {
            let geometry = upstream(output.geometry, stage, Stage::Geometry)?;
            let clock = inputs.clock.ok_or(Error::missing_input("time of day"))?;
            output.solar_time = Some(pipeline::true_solar_time(
                geometry.hour_angle,
                &clock,
                site(inputs)?.longitude,
            ));
        }
        Stage::SunriseSunset => {
            let ssha = upstream(output.sunset_hour_angle, stage, Stage::SunsetHourAngle)?;
            let solar_time = upstream(output.solar_time, stage, Stage::TrueSolarTime)?;
            output.sunrise_sunset = Some(pipeline::sunrise_sunset(ssha, solar_time.correction));
        }
        Stage::SolarAzimuth => {
            let geometry = upstream(output.geometry, stage, Stage::Geometry)?;
            let zenith = upstream(output.zenith, stage, Stage::UnrefractedZenith)?;
            let trig =
                cache.get_or_compute(geometry.declination, geometry.hour_angle, site(inputs)?.latitude);
            output.azimuth = Some(pipeline::solar_azimuth(
                &trig,
                zenith.elevation,
                geometry.hour_angle,
            ));
        }
        Stage::Refraction => {
            let zenith = upstream(output.zenith, stage, Stage::UnrefractedZenith)?;
            output.refraction = Some(pipeline::refraction(
                zenith.elevation,
                request.pressure,
                request.temperature,
            ));
        }
        Stage::AirMass => {
            let (zenith, _) = refracted_zenith(request, output, stage)?;
            output.air_mass = pipeline::air_mass(zenith, request.pressure);
            if output.air_mass.is_none() {
                trace!("air mass undefined at refracted zenith {zenith}");
            }
        }
        Stage::Prime => {
            output.prime = output
                .air_mass
                .map(|air_mass| pipeline::prime(air_mass.relative));
        }
        Stage::Etr => {
            let geometry = upstream(output.geometry, stage, Stage::Geometry)?;
            let (_, cos_zenith) = refracted_zenith(request, output, stage)?;
            output.etr = Some(pipeline::extraterrestrial(
                request.solar_constant,
                geometry.earth_radius_vector,
                cos_zenith,
            ));
        }
        Stage::Tilt => {
            let azimuth = upstream(output.azimuth, stage, Stage::SolarAzimuth)?;
            let etr = upstream(output.etr, stage, Stage::Etr)?;
            let (zenith, cos_zenith) = refracted_zenith(request, output, stage)?;
            output.tilt = Some(pipeline::tilted(
                cos_zenith,
                zenith,
                azimuth,
                request.tilt,
                request.aspect,
                etr.normal,
            ));
        }
    }
    Ok(())
}

/// A request together with the output and cache of its last calculation.
///
/// # Example
/// ```
/// # #[cfg(feature = "chrono")] {
/// use chrono::{DateTime, FixedOffset};
/// use solpos::{Param, Solpos};
///
/// let datetime = "1999-07-22T09:45:37-05:00".parse::<DateTime<FixedOffset>>().unwrap();
/// let solpos = Solpos::new(
///     &datetime,
///     33.65,
///     -84.43,
///     [("press", Param::Float(1006.0)), ("temp", Param::Float(27.0))],
/// )
/// .unwrap();
///
/// let sunrise = solpos.sunrise().unwrap();
/// assert_eq!(sunrise.to_rfc3339(), "1999-07-22T05:47:10-05:00");
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Solpos {
    request: Request,
    output: Output,
    cache: TrigCache,
}

impl Solpos {
    /// Builds a context for a timestamp and location, applies named
    /// parameters and calculates.
    ///
    /// # Errors
    /// Returns `ParameterType` for a mistyped parameter, or any error of [`calculate`].
    /// The context is not returned on error; to correct one input and retry,
    /// build it with [`Request::from_datetime`] and [`Solpos::from_request`],
    /// then call [`Solpos::calculate`] again after each fix.
    ///
    /// ```
    /// # use chrono::{TimeZone, Utc};
    /// # use solpos::{Error, Request, Solpos};
    /// let datetime = Utc.with_ymd_and_hms(1999, 7, 22, 14, 45, 37).unwrap();
    /// let mut solpos = Solpos::from_request(Request::from_datetime(&datetime, 95.0, -84.43));
    /// assert_eq!(solpos.calculate(), Err(Error::invalid_latitude(95.0)));
    ///
    /// solpos.request_mut().latitude = Some(33.65);
    /// assert!(solpos.calculate().is_ok());
    /// ```
    #[cfg(feature = "chrono")]
    pub fn new<'a, Tz, I>(
        datetime: &DateTime<Tz>,
        latitude: f64,
        longitude: f64,
        parameters: I,
    ) -> Result<Self>
    where
        Tz: TimeZone,
        I: IntoIterator<Item = (&'a str, Param)>,
    {
        let mut request = Request::from_datetime(datetime, latitude, longitude);
        request.apply_parameters(parameters)?;

        let mut solpos = Self::from_request(request);
        solpos.calculate()?;
        Ok(solpos)
    }

    /// Wraps a request without calculating.
    #[must_use]
    pub fn from_request(request: Request) -> Self {
        Self {
            request,
            output: Output::new(),
            cache: TrigCache::new(),
        }
    }

    /// Recalculates from the current request.
    ///
    /// # Errors
    /// See [`calculate`].
    pub fn calculate(&mut self) -> Result<()> {
        calculate(&self.request, &mut self.output, &mut self.cache)
    }

    /// Current inputs.
    #[must_use]
    pub const fn request(&self) -> &Request {
        &self.request
    }

    /// Mutable inputs; call [`Solpos::calculate`] afterwards to refresh the output.
    pub const fn request_mut(&mut self) -> &mut Request {
        &mut self.request
    }

    /// Output of the last calculation.
    #[must_use]
    pub const fn output(&self) -> &Output {
        &self.output
    }

    /// Replaces the date and time from a timestamp (not recalculated).
    #[cfg(feature = "chrono")]
    pub fn set_datetime<Tz: TimeZone>(&mut self, datetime: &DateTime<Tz>) {
        self.request.set_datetime(datetime);
    }

    /// Local timestamp of the request.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn datetime(&self) -> Option<DateTime<FixedOffset>> {
        self.request.datetime()
    }

    /// Sunrise of the last calculation, `None` on polar days and nights.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn sunrise(&self) -> Option<DateTime<FixedOffset>> {
        self.output.sunrise_datetime()
    }

    /// Sunset of the last calculation, `None` on polar days and nights.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn sunset(&self) -> Option<DateTime<FixedOffset>> {
        self.output.sunset_datetime()
    }

    /// Sunrise and sunset of the last calculation as timestamps.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn sunrise_sunset(&self) -> Option<SunriseResult<DateTime<FixedOffset>>> {
        self.output.sunrise_sunset_datetimes()
    }
}
