//! Per-calculation cache of the local trigonometric terms.
//!
//! Zenith, sunset hour angle, shadow band and azimuth all need the sines and
//! cosines of declination, hour angle and latitude. The cache computes them
//! once per calculation and is cleared when the next one starts.

use crate::math::{RADDEG, cos, sin};

/// Sines and cosines of declination, hour angle and latitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalTrig {
    cos_declination: f64,
    cos_hour_angle: f64,
    cos_latitude: f64,
    sin_declination: f64,
    sin_latitude: f64,
}

impl LocalTrig {
    /// Computes the terms from angles in degrees.
    #[must_use]
    pub fn new(declination: f64, hour_angle: f64, latitude: f64) -> Self {
        Self {
            cos_declination: cos(RADDEG * declination),
            cos_hour_angle: cos(RADDEG * hour_angle),
            cos_latitude: cos(RADDEG * latitude),
            sin_declination: sin(RADDEG * declination),
            sin_latitude: sin(RADDEG * latitude),
        }
    }

    /// cos(declination).
    #[must_use]
    pub const fn cos_declination(&self) -> f64 {
        self.cos_declination
    }

    /// cos(hour angle).
    #[must_use]
    pub const fn cos_hour_angle(&self) -> f64 {
        self.cos_hour_angle
    }

    /// cos(latitude).
    #[must_use]
    pub const fn cos_latitude(&self) -> f64 {
        self.cos_latitude
    }

    /// sin(declination).
    #[must_use]
    pub const fn sin_declination(&self) -> f64 {
        self.sin_declination
    }

    /// sin(latitude).
    #[must_use]
    pub const fn sin_latitude(&self) -> f64 {
        self.sin_latitude
    }
}

/// Lazily filled holder for [`LocalTrig`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TrigCache {
    trig: Option<LocalTrig>,
}

impl TrigCache {
    /// Creates an empty cache.
    #[must_use]
    pub const fn new() -> Self {
        Self { trig: None }
    }

    /// Forgets the cached terms.
    pub fn reset(&mut self) {
        self.trig = None;
    }

    /// True once the terms have been computed for the current calculation.
    #[must_use]
    pub const fn is_computed(&self) -> bool {
        self.trig.is_some()
    }

    /// Cached terms, if any.
    #[must_use]
    pub const fn get(&self) -> Option<&LocalTrig> {
        self.trig.as_ref()
    }

    /// Returns the cached terms, computing them on first use.
    ///
    /// Later calls return the first result even if the angles differ; call
    /// [`TrigCache::reset`] before reusing the cache for another instant.
    pub fn get_or_compute(&mut self, declination: f64, hour_angle: f64, latitude: f64) -> LocalTrig {
        *self
            .trig
            .get_or_insert_with(|| LocalTrig::new(declination, hour_angle, latitude))
    }
}
