//! # SOLPOS
//!
//! Solar position and extraterrestrial irradiance after NREL's SOLPOS 2.0,
//! valid for the years 1950 to 2050.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! A calculation takes a [`Request`] (date, local standard time, timezone,
//! location, atmosphere, panel orientation) and a [`Functions`] mask that
//! selects which of the sub-calculations to run. Results land in an
//! [`Output`]; values of stages that did not run are `None`.
//!
//! Available outputs include:
//! - day angle, earth radius vector, Julian day, declination, right ascension,
//!   sidereal time and hour angle
//! - zenith and elevation, with and without refraction correction
//! - solar azimuth
//! - sunset hour angle, sunrise and sunset
//! - true solar time and equation of time
//! - shadow-band correction factor
//! - relative and pressure-corrected air mass, Kt prime factors
//! - extraterrestrial irradiance (normal, horizontal, tilted surface)
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions
//! - `chrono` (default): `DateTime<Tz>` constructors and timestamp sunrise/sunset
//! - `libm`: Use pure Rust math for `no_std` environments
//!
//! ```toml
//! # no_std with timestamps
//! solpos = { version = "0.1", default-features = false, features = ["libm", "chrono"] }
//! ```
//!
//! ## References
//!
//! - Michalsky, J. (1988). The Astronomical Almanac's algorithm for approximate
//!   solar position (1950-2050). Solar Energy, 40(3), 227-235.
//! - Zimmerman, J. C. (1981). Sun-pointing programs and their accuracy. SAND81-0761.
//! - Kasten, F. (1966). A new table and approximation formula for the relative
//!   optical air mass. Arch. Meteorol. Geophys. Bioklimataol., B14, 206-223.
//! - Perez, R. et al. (1990). Making full use of the clearness index for
//!   parameterizing hourly insolation conditions. Solar Energy, 45(2), 111-114.
//!
//! ## Quick Start
//!
//! ### With chrono
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use chrono::{DateTime, FixedOffset};
//! use solpos::{Param, Solpos};
//!
//! let datetime = "1999-07-22T09:45:37-05:00".parse::<DateTime<FixedOffset>>().unwrap();
//! let solpos = Solpos::new(
//!     &datetime,
//!     33.65,  // latitude
//!     -84.43, // longitude
//!     [
//!         ("press", Param::Float(1006.0)),
//!         ("temp", Param::Float(27.0)),
//!         ("tilt", Param::Float(33.65)),
//!         ("aspect", Param::Float(135.0)),
//!     ],
//! )
//! .unwrap();
//!
//! let output = solpos.output();
//! println!("Zenith: {:.4}°", output.refracted_zenith().unwrap());
//! println!("Azimuth: {:.4}°", output.azimuth().unwrap());
//! println!("ETR tilt: {:.1} W/m²", output.etr_tilt().unwrap());
//! println!("Sunrise: {}", solpos.sunrise().unwrap());
//! # }
//! ```
//!
//! ### Numeric API
//! ```rust
//! use solpos::{calculate, Functions, Output, Request, TrigCache};
//!
//! let mut request = Request::new();
//! request.year = Some(1999);
//! request.day_of_year = Some(203);
//! request.hour = Some(9);
//! request.minute = Some(45);
//! request.second = Some(37);
//! request.timezone = Some(-5.0);
//! request.latitude = Some(33.65);
//! request.longitude = Some(-84.43);
//! request.functions = Functions::S_ETR;
//!
//! let mut output = Output::new();
//! calculate(&request, &mut output, &mut TrigCache::new()).unwrap();
//!
//! assert_eq!(output.month(), Some(7));
//! assert!(output.etr().unwrap() > 0.0);
//! assert!(output.azimuth().is_none());
//! ```
//!
//! ## Coordinate System
//!
//! - **Latitude**: degrees north, south negative
//! - **Longitude**: degrees east, west negative
//! - **Timezone**: hours east of UTC, west negative (US Mountain = -7)
//! - **Azimuth**: 0° = North, measured clockwise (0° to 360°)
//! - **Zenith angle**: 0° = directly overhead, 90° = horizon

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of mathematical constants in tests
    clippy::unreadable_literal, // Coefficients are kept as published
)]

// Public API exports
pub use crate::error::{Error, Result};
pub use crate::functions::Functions;
pub use crate::output::Output;
pub use crate::solpos::{Solpos, Stage, calculate};
pub use crate::time::CalendarDate;
pub use crate::trig::{LocalTrig, TrigCache};
pub use crate::types::{Param, Request, SunriseResult};
pub use crate::validate::validate;

// Core modules
pub mod error;
pub mod functions;
pub mod output;
pub mod solpos;
pub mod types;
pub mod validate;

// Calculation modules
mod geometry;
mod pipeline;
pub mod trig;

// Internal modules
mod math;

// Public modules
pub mod time;
