//! # Solar Ephemeris
//!
//! Topocentric sun position and sunrise, transit and sunset times.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! Two interchangeable position engines are provided:
//! - **SPA** (Solar Position Algorithm): NREL's reference algorithm (±0.0003°, years -2000 to 6000)
//! - **Grena3**: closed-form approximation (±0.01°, years 2010-2110, about 10x faster)
//!
//! The sunrise solver is built on SPA and reports, per day, either a regular day with
//! sunrise, transit and sunset, or a polar day/night with the transit only. Any sun
//! elevation can define "rise" and "set", so the same solver yields civil, nautical and
//! astronomical twilight.
//!
//! ΔT (TT minus UT) is always an explicit input; [`time::DeltaT`] estimates it from the
//! polynomial fits of Espenak & Meeus.
//!
//! ## Feature Flags
//!
//! - `std` (default): native float math, `std::error::Error`, the `HashMap` batch sunrise API
//! - `chrono` (default): `DateTime<Tz>` based API
//! - `libm`: pure Rust math for `no_std` targets
//! - `serde`: `Serialize`/`Deserialize` for the value types
//!
//! ```toml
//! # Default: std + chrono
//! solar-ephemeris = "0.1"
//!
//! # no_std, numeric API only
//! solar-ephemeris = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## References
//!
//! - Reda, I.; Andreas, A. (2003). Solar position algorithm for solar radiation applications.
//!   Solar Energy, 76(5), 577-589. DOI: <http://dx.doi.org/10.1016/j.solener.2003.12.003>
//! - Grena, R. (2012). Five new algorithms for the computation of sun position from 2010 to 2110.
//!   Solar Energy, 86(5), 1323-1337. DOI: <http://dx.doi.org/10.1016/j.solener.2012.01.024>
//!
//! ## Quick Start
//!
//! ### Solar Position
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use solar_ephemeris::{spa, AtmosphericConditions, time::DeltaT};
//! use chrono::{DateTime, FixedOffset};
//!
//! // Vienna at noon
//! let datetime = "2026-06-21T12:00:00+02:00".parse::<DateTime<FixedOffset>>().unwrap();
//! let position = spa::solar_position(
//!     datetime,
//!     48.21,   // latitude
//!     16.37,   // longitude
//!     190.0,   // elevation (meters)
//!     DeltaT::estimate_from_date_like(&datetime).unwrap(),
//!     Some(AtmosphericConditions::standard()),
//! ).unwrap();
//!
//! println!("Azimuth: {:.3}°", position.azimuth());
//! println!("Elevation: {:.3}°", position.elevation_angle());
//! # }
//! ```
//!
//! ### Without chrono
//! ```rust
//! use solar_ephemeris::{spa, time::JulianDate, Horizon, SunriseResult};
//!
//! let jd = JulianDate::from_utc(2026, 6, 21, 10, 0, 0.0, 69.0).unwrap();
//! let position = spa::solar_position_from_julian(jd, 48.21, 16.37, 190.0, None).unwrap();
//! assert!(position.is_sun_up());
//!
//! let day = spa::sunrise_transit_set_utc(2026, 6, 21, 48.21, 16.37, 69.0, Horizon::SunriseSunset)
//!     .unwrap();
//! if let SunriseResult::RegularDay { sunrise, sunset, .. } = day {
//!     println!("{:.2} h to {:.2} h UTC", sunrise.hours(), sunset.hours());
//! }
//! ```
//!
//! ### Sunrise and Twilight
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use solar_ephemeris::{spa, Horizon, SunriseResult};
//! use chrono::{DateTime, FixedOffset};
//!
//! let day = "2026-06-21T00:00:00-07:00".parse::<DateTime<FixedOffset>>().unwrap();
//! let result = spa::sunrise_transit_set(day, 37.7749, -122.4194, 69.0, Horizon::CivilTwilight)
//!     .unwrap();
//!
//! match result {
//!     SunriseResult::RegularDay { sunrise, transit, sunset } => {
//!         println!("Dawn: {sunrise}, noon: {transit}, dusk: {sunset}");
//!     }
//!     SunriseResult::AllDay { .. } | SunriseResult::AllNight { .. } => {
//!         println!("No twilight boundaries today");
//!     }
//! }
//! # }
//! ```
//!
//! ## Coordinate System
//!
//! - **Azimuth**: 0° = North, measured clockwise (0° to 360°)
//! - **Zenith angle**: 0° = directly overhead, 90° = horizon (0° to 180°)
//! - **Elevation angle**: 0° = horizon, 90° = directly overhead (-90° to +90°)

#![deny(missing_docs)]
#![warn(clippy::pedantic, clippy::nursery, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_precision_loss,
    clippy::float_cmp, // exact comparisons in tests
)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("either the `std` or the `libm` feature must be enabled");

pub use crate::algorithm::{Algorithm, Grena3, PositionAlgorithm, Spa};
pub use crate::error::{Error, Result};
pub use crate::spa::SpaTimeDependent;
pub use crate::types::{
    AtmosphericConditions, GeoCoordinate, Horizon, HoursUtc, SolarPosition, SunriseResult,
};

pub mod algorithm;
pub mod grena3;
pub mod spa;

pub mod error;
pub mod time;
pub mod types;

mod math;

#[cfg(all(test, feature = "chrono"))]
mod tests {
    use super::*;
    use chrono::{DateTime, FixedOffset, TimeZone, Utc};

    #[test]
    fn test_timezone_does_not_change_the_instant() {
        let datetime_fixed = "2023-06-21T12:00:00-07:00"
            .parse::<DateTime<FixedOffset>>()
            .unwrap();
        let datetime_utc = Utc.with_ymd_and_hms(2023, 6, 21, 19, 0, 0).unwrap();

        let spa_fixed = spa::solar_position(
            datetime_fixed,
            37.7749,
            -122.4194,
            0.0,
            69.0,
            Some(AtmosphericConditions::standard()),
        )
        .unwrap();
        let spa_utc = spa::solar_position(
            datetime_utc,
            37.7749,
            -122.4194,
            0.0,
            69.0,
            Some(AtmosphericConditions::standard()),
        )
        .unwrap();
        assert_eq!(spa_fixed, spa_utc);

        let grena_fixed = grena3::solar_position(datetime_fixed, 37.7749, -122.4194, 69.0, None)
            .unwrap();
        let grena_utc = grena3::solar_position(datetime_utc, 37.7749, -122.4194, 69.0, None)
            .unwrap();
        assert_eq!(grena_fixed, grena_utc);
    }

    #[test]
    fn test_horizon_default_is_sunrise_sunset() {
        assert_eq!(Horizon::default(), Horizon::SunriseSunset);
        assert_eq!(Algorithm::default(), Algorithm::Spa);
    }
}
