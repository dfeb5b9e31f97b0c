//! Sub-calculations that follow the base geometry.
//!
//! Each function is pure: it takes the upstream values it needs and returns
//! its own record. The orchestrator in [`crate::solpos`] decides which ones
//! run and threads their results through.

use crate::math::{
    DEGRAD, RADDEG, abs, acos, cos, exp, polynomial, powf, powi, sin, tan,
};
use crate::trig::LocalTrig;
use crate::types::{Clock, SunriseResult};

/// Unrefracted zenith angles beyond this are reported as this value.
const MAX_ZENITH: f64 = 99.0;
/// Refracted elevation never drops below this.
const MIN_REFRACTED_ELEVATION: f64 = -9.0;
/// Above this refracted zenith the air-mass formula no longer applies.
const MAX_AIR_MASS_ZENITH: f64 = 93.0;
/// Below this |cos δ · cos φ| (or |cos e · cos φ|) the observer is treated as polar.
const POLAR_THRESHOLD: f64 = 0.001;
/// Reference pressure of the refraction and air-mass formulas, in millibars.
const REFERENCE_PRESSURE: f64 = 1013.0;

/// Refraction correction in arc seconds for elevations in [-0.575°, 5°).
const LOW_ELEVATION_REFRACTION: [f64; 5] = [1735.0, -518.2, 103.4, -12.79, 0.711];

/// Zenith and elevation without refraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Zenith {
    pub(crate) zenith: f64,
    pub(crate) elevation: f64,
}

/// True solar time and its derived equation of time, all in minutes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SolarTime {
    pub(crate) true_solar_time: f64,
    /// Correction from local standard time to true solar time, in [-720, 720].
    pub(crate) correction: f64,
    pub(crate) equation_of_time: f64,
}

/// Refraction-corrected position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Refraction {
    pub(crate) elevation: f64,
    pub(crate) zenith: f64,
    pub(crate) cos_zenith: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct AirMass {
    pub(crate) relative: f64,
    pub(crate) pressure_corrected: f64,
}

/// Perez Kt prime factors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Prime {
    pub(crate) prime: f64,
    pub(crate) unprime: f64,
}

/// Extraterrestrial irradiance in W/m².
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Etr {
    pub(crate) normal: f64,
    pub(crate) horizontal: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Tilt {
    pub(crate) cos_incidence: f64,
    pub(crate) irradiance: f64,
}

/// Zenith angle from declination, hour angle and latitude.
pub(crate) fn unrefracted_zenith(trig: &LocalTrig) -> Zenith {
    let cos_zenith = (trig.sin_declination() * trig.sin_latitude()
        + trig.cos_declination() * trig.cos_latitude() * trig.cos_hour_angle())
    .clamp(-1.0, 1.0);

    let zenith = (acos(cos_zenith) * DEGRAD).min(MAX_ZENITH);
    Zenith {
        zenith,
        elevation: 90.0 - zenith,
    }
}

/// Sunset hour angle in degrees: 0 when the sun never rises, 180 when it never sets.
pub(crate) fn sunset_hour_angle(trig: &LocalTrig, declination: f64, latitude: f64) -> f64 {
    let cdcl = trig.cos_declination() * trig.cos_latitude();

    if abs(cdcl) >= POLAR_THRESHOLD {
        let cos_ssha = -trig.sin_latitude() * trig.sin_declination() / cdcl;
        if cos_ssha < -1.0 {
            180.0
        } else if cos_ssha > 1.0 {
            0.0
        } else {
            DEGRAD * acos(cos_ssha)
        }
    } else if (declination >= 0.0 && latitude > 0.0) || (declination < 0.0 && latitude < 0.0) {
        180.0
    } else {
        0.0
    }
}

/// Drummond (1956) shadow-band correction factor.
pub(crate) fn shadowband_factor(
    trig: &LocalTrig,
    sunset_hour_angle: f64,
    width: f64,
    radius: f64,
    sky: f64,
) -> f64 {
    let p = 0.636_619_8 * width / radius * powi(trig.cos_declination(), 3);
    let t1 = trig.sin_latitude() * trig.sin_declination() * sunset_hour_angle * RADDEG;
    let t2 = trig.cos_latitude() * trig.cos_declination() * sin(sunset_hour_angle * RADDEG);

    sky + 1.0 / (1.0 - p * (t1 + t2))
}

pub(crate) fn true_solar_time(hour_angle: f64, clock: &Clock, longitude: f64) -> SolarTime {
    let true_solar_time = (180.0 + hour_angle) * 4.0;

    let mut correction = true_solar_time
        - 60.0 * f64::from(clock.hour)
        - f64::from(clock.minute)
        - f64::from(clock.second) / 60.0
        + f64::from(clock.interval) / 120.0;
    while correction > 720.0 {
        correction -= 1440.0;
    }
    while correction < -720.0 {
        correction += 1440.0;
    }

    SolarTime {
        true_solar_time,
        correction,
        equation_of_time: correction + 60.0 * clock.timezone - 4.0 * longitude,
    }
}

/// Sunrise and sunset in local standard minutes from midnight.
pub(crate) fn sunrise_sunset(sunset_hour_angle: f64, correction: f64) -> SunriseResult {
    if sunset_hour_angle <= 1.0 {
        SunriseResult::AllNight
    } else if sunset_hour_angle >= 179.0 {
        SunriseResult::AllDay
    } else {
        SunriseResult::RegularDay {
            sunrise: 720.0 - 4.0 * sunset_hour_angle - correction,
            sunset: 720.0 + 4.0 * sunset_hour_angle - correction,
        }
    }
}

/// Solar azimuth in degrees, N=0 E=90 S=180 W=270, from the unrefracted elevation.
pub(crate) fn solar_azimuth(trig: &LocalTrig, elevation: f64, hour_angle: f64) -> f64 {
    let cecl = cos(RADDEG * elevation) * trig.cos_latitude();
    if abs(cecl) < POLAR_THRESHOLD {
        return 180.0;
    }

    let cos_azimuth = ((sin(RADDEG * elevation) * trig.sin_latitude() - trig.sin_declination())
        / cecl)
        .clamp(-1.0, 1.0);
    let azimuth = 180.0 - acos(cos_azimuth) * DEGRAD;

    if hour_angle > 0.0 {
        360.0 - azimuth
    } else {
        azimuth
    }
}

/// Refraction correction in degrees (Zimmerman, 1981).
fn refraction_correction(elevation: f64, pressure: f64, temperature: f64) -> f64 {
    if elevation > 85.0 {
        return 0.0;
    }

    let tan_elevation = tan(RADDEG * elevation);
    let arc_seconds = if elevation >= 5.0 {
        58.1 / tan_elevation - 0.07 / powi(tan_elevation, 3)
            + 0.000_086 / powi(tan_elevation, 5)
    } else if elevation >= -0.575 {
        polynomial(&LOW_ELEVATION_REFRACTION, elevation)
    } else {
        -20.774 / tan_elevation
    };

    arc_seconds * (pressure * 283.0) / (REFERENCE_PRESSURE * (273.0 + temperature)) / 3600.0
}

pub(crate) fn refraction(elevation: f64, pressure: f64, temperature: f64) -> Refraction {
    let elevation = (elevation + refraction_correction(elevation, pressure, temperature))
        .max(MIN_REFRACTED_ELEVATION);
    let zenith = 90.0 - elevation;

    Refraction {
        elevation,
        zenith,
        cos_zenith: cos(RADDEG * zenith),
    }
}

/// Kasten (1966) relative air mass. `None` when the sun is too far below the horizon.
pub(crate) fn air_mass(refracted_zenith: f64, pressure: f64) -> Option<AirMass> {
    if refracted_zenith > MAX_AIR_MASS_ZENITH {
        return None;
    }

    let relative = 1.0
        / (cos(RADDEG * refracted_zenith)
            + 0.505_72 * powf(96.079_95 - refracted_zenith, -1.6364));
    Some(AirMass {
        relative,
        pressure_corrected: relative * pressure / REFERENCE_PRESSURE,
    })
}

/// Perez et al. (1990) Kt prime factors from the relative air mass.
pub(crate) fn prime(relative_air_mass: f64) -> Prime {
    let unprime = 1.031 * exp(-1.4 / (0.9 + 9.4 / relative_air_mass)) + 0.1;
    Prime {
        prime: 1.0 / unprime,
        unprime,
    }
}

/// Normal and horizontal extraterrestrial irradiance; zero with the sun below the horizon.
pub(crate) fn extraterrestrial(solar_constant: f64, earth_radius_vector: f64, cos_zenith: f64) -> Etr {
    if cos_zenith > 0.0 {
        let normal = solar_constant * earth_radius_vector;
        Etr {
            normal,
            horizontal: normal * cos_zenith,
        }
    } else {
        Etr {
            normal: 0.0,
            horizontal: 0.0,
        }
    }
}

/// Incidence on a tilted panel and the resulting extraterrestrial irradiance.
pub(crate) fn tilted(
    cos_zenith: f64,
    refracted_zenith: f64,
    azimuth: f64,
    tilt: f64,
    aspect: f64,
    etr_normal: f64,
) -> Tilt {
    let cos_incidence = cos_zenith * cos(RADDEG * tilt)
        + sin(RADDEG * refracted_zenith)
            * sin(RADDEG * tilt)
            * (cos(RADDEG * azimuth) * cos(RADDEG * aspect)
                + sin(RADDEG * azimuth) * sin(RADDEG * aspect));

    let irradiance = if cos_incidence > 0.0 {
        etr_normal * cos_incidence
    } else {
        0.0
    };
    Tilt {
        cos_incidence,
        irradiance,
    }
}
