//! Function selector: which outputs a calculation produces.
//!
//! Each leaf flag switches on one sub-calculation. The `S_*` composite masks
//! combine a leaf with every flag it transitively depends on, the way the
//! NREL `S_*` switches do (including the day-of-year input bit). To use
//! month/day input with a composite, clear [`Functions::DAY_OF_YEAR`]
//! afterwards.

use bitflags::bitflags;

bitflags! {
    /// Bitmask selecting SOLPOS sub-calculations.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Functions: u32 {
        /// Placeholder bit that selects nothing.
        const NON_FUNCTION = 1 << 0;
        /// Date is given as day of year instead of month and day.
        const DAY_OF_YEAR = 1 << 1;
        /// Base astronomical geometry.
        const GEOMETRY = 1 << 2;
        /// Solar zenith angle without refraction.
        const UNREFRACTED_ZENITH = 1 << 3;
        /// Sunset hour angle.
        const SUNSET_HOUR_ANGLE = 1 << 4;
        /// Shadow-band correction factor.
        const SHADOWBAND = 1 << 5;
        /// True solar time and equation of time.
        const TRUE_SOLAR_TIME = 1 << 6;
        /// Sunrise and sunset times.
        const SUNRISE_SUNSET = 1 << 7;
        /// Solar azimuth angle.
        const SOLAR_AZIMUTH = 1 << 8;
        /// Atmospheric refraction correction.
        const REFRACTION = 1 << 9;
        /// Relative and pressure-corrected air mass.
        const AIR_MASS = 1 << 10;
        /// Kt prime/unprime factors.
        const PRIME = 1 << 11;
        /// Irradiance on a tilted surface.
        const TILT = 1 << 12;
        /// Extraterrestrial irradiance.
        const ETR = 1 << 13;
    }
}

impl Functions {
    /// Every calculation with month/day date input.
    pub const DEFAULT: Self = Self::GEOMETRY
        .union(Self::UNREFRACTED_ZENITH)
        .union(Self::SUNSET_HOUR_ANGLE)
        .union(Self::SHADOWBAND)
        .union(Self::TRUE_SOLAR_TIME)
        .union(Self::SUNRISE_SUNSET)
        .union(Self::SOLAR_AZIMUTH)
        .union(Self::REFRACTION)
        .union(Self::AIR_MASS)
        .union(Self::PRIME)
        .union(Self::TILT)
        .union(Self::ETR);

    /// Every calculation with day-of-year date input.
    pub const ALL: Self = Self::DEFAULT.union(Self::DAY_OF_YEAR);

    /// Day-of-year input.
    pub const S_DOY: Self = Self::DAY_OF_YEAR;
    /// Geometry and its prerequisites.
    pub const S_GEOMETRY: Self = Self::GEOMETRY.union(Self::S_DOY);
    /// Unrefracted zenith and its prerequisites.
    pub const S_UNREFRACTED_ZENITH: Self = Self::UNREFRACTED_ZENITH.union(Self::S_GEOMETRY);
    /// Sunset hour angle and its prerequisites.
    pub const S_SUNSET_HOUR_ANGLE: Self = Self::SUNSET_HOUR_ANGLE.union(Self::S_GEOMETRY);
    /// Shadow-band correction and its prerequisites.
    pub const S_SHADOWBAND: Self = Self::SHADOWBAND.union(Self::S_SUNSET_HOUR_ANGLE);
    /// True solar time and its prerequisites.
    pub const S_TRUE_SOLAR_TIME: Self = Self::TRUE_SOLAR_TIME.union(Self::S_GEOMETRY);
    /// Sunrise/sunset and its prerequisites.
    pub const S_SUNRISE_SUNSET: Self = Self::SUNRISE_SUNSET
        .union(Self::S_SUNSET_HOUR_ANGLE)
        .union(Self::S_TRUE_SOLAR_TIME);
    /// Solar azimuth and its prerequisites.
    pub const S_SOLAR_AZIMUTH: Self = Self::SOLAR_AZIMUTH.union(Self::S_UNREFRACTED_ZENITH);
    /// Refraction and its prerequisites.
    pub const S_REFRACTION: Self = Self::REFRACTION.union(Self::S_UNREFRACTED_ZENITH);
    /// Air mass and its prerequisites.
    pub const S_AIR_MASS: Self = Self::AIR_MASS.union(Self::S_REFRACTION);
    /// Prime/unprime and its prerequisites.
    pub const S_PRIME: Self = Self::PRIME.union(Self::S_AIR_MASS);
    /// Extraterrestrial irradiance and its prerequisites.
    pub const S_ETR: Self = Self::ETR.union(Self::S_REFRACTION);
    /// Tilted-surface irradiance and its prerequisites.
    pub const S_TILT: Self = Self::TILT
        .union(Self::S_SOLAR_AZIMUTH)
        .union(Self::S_REFRACTION)
        .union(Self::S_ETR);
    /// Everything.
    pub const S_ALL: Self = Self::ALL;

    /// Returns true if any bit of `flag` is set.
    #[must_use]
    pub const fn has_flag(self, flag: Self) -> bool {
        self.intersects(flag)
    }

    /// Sets every bit of `flag`.
    pub fn add_flag(&mut self, flag: Self) {
        self.insert(flag);
    }

    /// Clears every bit of `flag`.
    pub fn clear_flag(&mut self, flag: Self) {
        self.remove(flag);
    }

    /// Flips every bit of `flag`.
    pub fn toggle_flag(&mut self, flag: Self) {
        self.toggle(flag);
    }

    /// True when no sub-calculation is selected at all.
    #[must_use]
    pub const fn is_no_function(self) -> bool {
        self.difference(Self::NON_FUNCTION).is_empty()
    }
}

impl Default for Functions {
    fn default() -> Self {
        Self::DEFAULT
    }
}
