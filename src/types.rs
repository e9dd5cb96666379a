//! Value types passed into and returned from the calculations.

use crate::error::{check_latitude, check_longitude};
use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Observer location on the Earth's surface.
///
/// Construction fails for latitudes outside `[-90, 90]` or longitudes outside
/// `[-180, 180]`; values are never clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawCoordinate"))]
pub struct GeoCoordinate {
    latitude: f64,
    longitude: f64,
}

impl GeoCoordinate {
    /// Creates a validated coordinate.
    ///
    /// # Errors
    /// Returns [`Error::InvalidLatitude`] or [`Error::InvalidLongitude`].
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        Ok(Self {
            latitude: check_latitude(latitude)?,
            longitude: check_longitude(longitude)?,
        })
    }

    /// Latitude in degrees, positive north.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees, positive east of Greenwich.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawCoordinate {
    latitude: f64,
    longitude: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawCoordinate> for GeoCoordinate {
    type Error = Error;

    fn try_from(raw: RawCoordinate) -> Result<Self> {
        Self::new(raw.latitude, raw.longitude)
    }
}

/// Local air pressure and temperature used for refraction correction.
///
/// Any values are accepted. Conditions that are not finite, with pressure not
/// strictly between 0 and 3000 hPa, or with temperature not above -273 °C or
/// above 273 °C are "unusable": the engines then skip refraction correction entirely, the
/// same as when no conditions are passed at all.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AtmosphericConditions {
    pressure: f64,
    temperature: f64,
}

impl AtmosphericConditions {
    /// Creates conditions from pressure (hPa, equivalently millibar) and temperature (°C).
    #[must_use]
    pub const fn new(pressure: f64, temperature: f64) -> Self {
        Self {
            pressure,
            temperature,
        }
    }

    /// Standard atmosphere: 1013.25 hPa and 15 °C.
    #[must_use]
    pub const fn standard() -> Self {
        Self::new(1013.25, 15.0)
    }

    /// Annual average pressure in hPa.
    #[must_use]
    pub const fn pressure(&self) -> f64 {
        self.pressure
    }

    /// Annual average temperature in °C.
    #[must_use]
    pub const fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Whether refraction correction can be computed from these conditions.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        self.pressure.is_finite()
            && self.temperature.is_finite()
            && self.pressure > 0.0
            && self.pressure < 3000.0
            && self.temperature > -273.0
            && self.temperature <= 273.0
    }
}

/// Returns the conditions only if refraction correction should be applied.
pub(crate) fn usable_conditions(
    atmosphere: Option<AtmosphericConditions>,
) -> Option<AtmosphericConditions> {
    match atmosphere {
        Some(conditions) if conditions.is_usable() => Some(conditions),
        Some(conditions) => {
            log::trace!(
                "ignoring atmospheric conditions {} hPa / {} °C, refraction disabled",
                conditions.pressure,
                conditions.temperature
            );
            None
        }
        None => None,
    }
}

/// Topocentric sun position.
///
/// Azimuth is measured clockwise from true north in `[0, 360)`, the zenith
/// angle from the local vertical in `[0, 180]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawPosition"))]
pub struct SolarPosition {
    azimuth: f64,
    zenith_angle: f64,
}

impl SolarPosition {
    /// Creates a position, rejecting out-of-range angles.
    ///
    /// # Errors
    /// Returns [`Error::InvalidPosition`] if azimuth is outside `[0, 360)` or the
    /// zenith angle is outside `[0, 180]`.
    pub fn new(azimuth: f64, zenith_angle: f64) -> Result<Self> {
        if is_valid_azimuth(azimuth) && is_valid_zenith_angle(zenith_angle) {
            Ok(Self {
                azimuth,
                zenith_angle,
            })
        } else {
            Err(Error::InvalidPosition {
                azimuth,
                zenith_angle,
            })
        }
    }

    /// Position produced by one of the engines. Out-of-range output is an
    /// algorithm defect and panics.
    pub(crate) fn from_engine(azimuth: f64, zenith_angle: f64) -> Self {
        assert!(
            is_valid_azimuth(azimuth),
            "engine produced azimuth {azimuth}° outside [0, 360)"
        );
        assert!(
            is_valid_zenith_angle(zenith_angle),
            "engine produced zenith angle {zenith_angle}° outside [0, 180]"
        );
        Self {
            azimuth,
            zenith_angle,
        }
    }

    /// Azimuth in degrees, clockwise from north.
    #[must_use]
    pub const fn azimuth(&self) -> f64 {
        self.azimuth
    }

    /// Zenith angle in degrees.
    #[must_use]
    pub const fn zenith_angle(&self) -> f64 {
        self.zenith_angle
    }

    /// Elevation above the horizon in degrees, `90 - zenith`.
    #[must_use]
    pub fn elevation_angle(&self) -> f64 {
        90.0 - self.zenith_angle
    }

    /// True when the sun's center is above the geometric horizon.
    #[must_use]
    pub fn is_sun_up(&self) -> bool {
        self.elevation_angle() > 0.0
    }

    /// True when the sun's center is on or below the geometric horizon.
    #[must_use]
    pub fn is_sun_down(&self) -> bool {
        !self.is_sun_up()
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawPosition {
    azimuth: f64,
    zenith_angle: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPosition> for SolarPosition {
    type Error = Error;

    fn try_from(raw: RawPosition) -> Result<Self> {
        Self::new(raw.azimuth, raw.zenith_angle)
    }
}

fn is_valid_azimuth(azimuth: f64) -> bool {
    (0.0..360.0).contains(&azimuth)
}

fn is_valid_zenith_angle(zenith_angle: f64) -> bool {
    (0.0..=180.0).contains(&zenith_angle)
}

/// Sun-center elevation that defines a rise or set event.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Horizon {
    /// Conventional sunrise/sunset at -0.83337°, allowing for mean refraction
    /// and the solar semi-diameter.
    #[default]
    SunriseSunset,
    /// Civil twilight, -6°.
    CivilTwilight,
    /// Nautical twilight, -12°.
    NauticalTwilight,
    /// Astronomical twilight, -18°.
    AstronomicalTwilight,
    /// Any other elevation angle in degrees. Must be finite; the sunrise
    /// functions reject NaN and infinities with [`Error::InvalidHorizon`].
    Custom(f64),
}

impl Horizon {
    /// The four named presets.
    pub const PRESETS: [Self; 4] = [
        Self::SunriseSunset,
        Self::CivilTwilight,
        Self::NauticalTwilight,
        Self::AstronomicalTwilight,
    ];

    /// Elevation angle of the sun's center in degrees.
    #[must_use]
    pub const fn elevation_angle(&self) -> f64 {
        match self {
            Self::SunriseSunset => -0.83337,
            Self::CivilTwilight => -6.0,
            Self::NauticalTwilight => -12.0,
            Self::AstronomicalTwilight => -18.0,
            Self::Custom(angle) => *angle,
        }
    }
}

impl Eq for Horizon {}

impl core::hash::Hash for Horizon {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        core::mem::discriminant(self).hash(state);
        if let Self::Custom(angle) = self {
            // +0.0 == -0.0, so they must hash alike
            let angle = if *angle == 0.0 { 0.0 } else { *angle };
            angle.to_bits().hash(state);
        }
    }
}

/// Outcome of a sunrise/transit/sunset calculation for one day.
///
/// `T` is the time representation: `chrono::DateTime<Tz>` for the chrono API,
/// [`HoursUtc`] for the numeric API.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SunriseResult<T> {
    /// The sun crosses the horizon twice.
    RegularDay {
        /// Rising through the horizon.
        sunrise: T,
        /// Upper culmination.
        transit: T,
        /// Setting through the horizon.
        sunset: T,
    },
    /// Polar day: the sun stays above the horizon.
    AllDay {
        /// Upper culmination.
        transit: T,
    },
    /// Polar night: the sun stays below the horizon.
    AllNight {
        /// Upper culmination, still defined below the horizon.
        transit: T,
    },
}

impl<T> SunriseResult<T> {
    /// Time of solar transit, present for every variant.
    pub const fn transit(&self) -> &T {
        match self {
            Self::RegularDay { transit, .. }
            | Self::AllDay { transit }
            | Self::AllNight { transit } => transit,
        }
    }

    /// Sunrise, if the sun crosses the horizon on this day.
    pub const fn sunrise(&self) -> Option<&T> {
        match self {
            Self::RegularDay { sunrise, .. } => Some(sunrise),
            _ => None,
        }
    }

    /// Sunset, if the sun crosses the horizon on this day.
    pub const fn sunset(&self) -> Option<&T> {
        match self {
            Self::RegularDay { sunset, .. } => Some(sunset),
            _ => None,
        }
    }

    /// `true` for [`SunriseResult::RegularDay`].
    pub const fn is_regular_day(&self) -> bool {
        matches!(self, Self::RegularDay { .. })
    }

    /// `true` for [`SunriseResult::AllDay`].
    pub const fn is_all_day(&self) -> bool {
        matches!(self, Self::AllDay { .. })
    }

    /// `true` for [`SunriseResult::AllNight`].
    pub const fn is_all_night(&self) -> bool {
        matches!(self, Self::AllNight { .. })
    }

    /// Converts every contained time with `f`, keeping the variant.
    pub fn map<U, F: FnMut(T) -> U>(self, mut f: F) -> SunriseResult<U> {
        match self {
            Self::RegularDay {
                sunrise,
                transit,
                sunset,
            } => SunriseResult::RegularDay {
                sunrise: f(sunrise),
                transit: f(transit),
                sunset: f(sunset),
            },
            Self::AllDay { transit } => SunriseResult::AllDay {
                transit: f(transit),
            },
            Self::AllNight { transit } => SunriseResult::AllNight {
                transit: f(transit),
            },
        }
    }

    /// Like [`SunriseResult::map`] for fallible conversions.
    ///
    /// # Errors
    /// Returns the first error produced by `f`.
    pub fn try_map<U, E, F: FnMut(T) -> core::result::Result<U, E>>(
        self,
        mut f: F,
    ) -> core::result::Result<SunriseResult<U>, E> {
        Ok(match self {
            Self::RegularDay {
                sunrise,
                transit,
                sunset,
            } => SunriseResult::RegularDay {
                sunrise: f(sunrise)?,
                transit: f(transit)?,
                sunset: f(sunset)?,
            },
            Self::AllDay { transit } => SunriseResult::AllDay {
                transit: f(transit)?,
            },
            Self::AllNight { transit } => SunriseResult::AllNight {
                transit: f(transit)?,
            },
        })
    }
}

/// Time of day in hours since 0h UTC, in `[0, 24)`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "f64"))]
pub struct HoursUtc(f64);

#[cfg(feature = "serde")]
impl TryFrom<f64> for HoursUtc {
    type Error = Error;

    fn try_from(hours: f64) -> Result<Self> {
        if (0.0..24.0).contains(&hours) {
            Ok(Self(hours))
        } else {
            Err(Error::invalid_datetime("hours outside [0, 24)"))
        }
    }
}

impl HoursUtc {
    pub(crate) const fn from_hours(hours: f64) -> Self {
        Self(hours)
    }

    /// Hours since midnight UTC.
    #[must_use]
    pub const fn hours(&self) -> f64 {
        self.0
    }

    /// Splits into whole hours, minutes and (fractional) seconds.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn hms(&self) -> (u32, u32, f64) {
        let total_seconds = self.0 * 3600.0;
        let hours = (total_seconds / 3600.0) as u32;
        let minutes = ((total_seconds - f64::from(hours) * 3600.0) / 60.0) as u32;
        let seconds = total_seconds - f64::from(hours) * 3600.0 - f64::from(minutes) * 60.0;
        (hours, minutes, seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geo_coordinate_rejects_out_of_range() {
        let coordinate = GeoCoordinate::new(39.742476, -105.1786).unwrap();
        assert_eq!(coordinate.latitude(), 39.742476);
        assert_eq!(coordinate.longitude(), -105.1786);

        assert!(matches!(
            GeoCoordinate::new(139.742476, -105.1786),
            Err(Error::InvalidLatitude { .. })
        ));
        assert!(matches!(
            GeoCoordinate::new(39.742476, -205.1786),
            Err(Error::InvalidLongitude { .. })
        ));
        assert!(GeoCoordinate::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_atmospheric_usability() {
        assert!(AtmosphericConditions::standard().is_usable());
        assert!(AtmosphericConditions::new(820.0, 11.0).is_usable());
        assert!(AtmosphericConditions::new(2999.0, -272.0).is_usable());
        assert!(AtmosphericConditions::new(1.0, 273.0).is_usable());

        assert!(!AtmosphericConditions::new(-2.0, 11.0).is_usable());
        assert!(!AtmosphericConditions::new(0.0, 11.0).is_usable());
        assert!(!AtmosphericConditions::new(3000.0, 11.0).is_usable());
        assert!(!AtmosphericConditions::new(1000.0, 1000.0).is_usable());
        assert!(!AtmosphericConditions::new(1000.0, -273.0).is_usable());
        assert!(!AtmosphericConditions::new(1000.0, -274.0).is_usable());
        assert!(!AtmosphericConditions::new(f64::NAN, 10.0).is_usable());
        assert!(!AtmosphericConditions::new(1000.0, f64::INFINITY).is_usable());

        assert_eq!(usable_conditions(None), None);
        assert_eq!(
            usable_conditions(Some(AtmosphericConditions::new(-2.0, 1000.0))),
            None
        );
        assert_eq!(
            usable_conditions(Some(AtmosphericConditions::standard())),
            Some(AtmosphericConditions::standard())
        );
    }

    #[test]
    fn test_solar_position_creation() {
        let position = SolarPosition::new(180.0, 45.0).unwrap();
        assert_eq!(position.azimuth(), 180.0);
        assert_eq!(position.zenith_angle(), 45.0);
        assert_eq!(position.elevation_angle(), 45.0);
        assert!(position.is_sun_up());

        assert!(SolarPosition::new(360.0, 45.0).is_err());
        assert!(SolarPosition::new(-0.1, 45.0).is_err());
        assert!(SolarPosition::new(0.0, -1.0).is_err());
        assert!(SolarPosition::new(0.0, 181.0).is_err());
        assert!(SolarPosition::new(f64::NAN, 90.0).is_err());
        assert!(SolarPosition::new(0.0, 180.0).is_ok());
    }

    #[test]
    fn test_sun_up_and_down() {
        assert!(SolarPosition::new(180.0, 30.0).unwrap().is_sun_up());
        assert!(SolarPosition::new(180.0, 90.0).unwrap().is_sun_down());
        assert!(SolarPosition::new(180.0, 120.0).unwrap().is_sun_down());
    }

    #[test]
    #[should_panic(expected = "outside [0, 180]")]
    fn test_engine_output_out_of_range_panics() {
        let _ = SolarPosition::from_engine(10.0, 180.5);
    }

    #[test]
    fn test_horizon_elevation_angles() {
        assert_eq!(Horizon::default(), Horizon::SunriseSunset);
        assert_eq!(Horizon::SunriseSunset.elevation_angle(), -0.83337);
        assert_eq!(Horizon::CivilTwilight.elevation_angle(), -6.0);
        assert_eq!(Horizon::NauticalTwilight.elevation_angle(), -12.0);
        assert_eq!(Horizon::AstronomicalTwilight.elevation_angle(), -18.0);
        assert_eq!(Horizon::Custom(-3.5).elevation_angle(), -3.5);
        assert_eq!(Horizon::Custom(5.0).elevation_angle(), 5.0);
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_horizon_hash_normalizes_zero_sign() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(Horizon::Custom(0.0));
        set.insert(Horizon::Custom(-0.0));
        set.extend(Horizon::PRESETS);

        assert_eq!(set.len(), 5);
    }

    #[test]
    fn test_sunrise_result_accessors() {
        let regular = SunriseResult::RegularDay {
            sunrise: 6,
            transit: 12,
            sunset: 18,
        };
        assert_eq!(regular.sunrise(), Some(&6));
        assert_eq!(regular.transit(), &12);
        assert_eq!(regular.sunset(), Some(&18));
        assert!(regular.is_regular_day());

        let all_day = SunriseResult::AllDay { transit: 12 };
        assert_eq!(all_day.sunrise(), None);
        assert_eq!(all_day.sunset(), None);
        assert!(all_day.is_all_day());
        assert!(!all_day.is_all_night());

        let all_night = SunriseResult::AllNight { transit: 12 };
        assert!(all_night.is_all_night());
        assert_eq!(all_night.transit(), &12);
    }

    #[test]
    fn test_sunrise_result_map() {
        let hours = SunriseResult::RegularDay {
            sunrise: 0.25,
            transit: 0.5,
            sunset: 0.75,
        }
        .map(|fraction| fraction * 24.0);
        assert_eq!(
            hours,
            SunriseResult::RegularDay {
                sunrise: 6.0,
                transit: 12.0,
                sunset: 18.0
            }
        );

        let failed: core::result::Result<SunriseResult<u8>, &str> =
            SunriseResult::AllNight { transit: 1 }.try_map(|_| Err("nope"));
        assert_eq!(failed, Err("nope"));
    }

    #[test]
    fn test_hours_utc_hms() {
        let (h, m, s) = HoursUtc::from_hours(6.2119444).hms();
        assert_eq!((h, m), (6, 12));
        assert!((s - 43.0).abs() < 0.01);
    }
}
