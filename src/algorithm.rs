//! Interchangeable position engines.
//!
//! Both engines answer the same question, so callers that want to choose at run
//! time (or swap in the faster engine for bulk work) can program against
//! [`PositionAlgorithm`] or hold an [`Algorithm`] value.

use crate::spa::SpaTimeDependent;
use crate::time::JulianDate;
use crate::{AtmosphericConditions, GeoCoordinate, Result, SolarPosition, grena3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Computes the topocentric sun position for a validated observer.
///
/// # Example
/// ```rust
/// use solar_ephemeris::{Algorithm, GeoCoordinate, PositionAlgorithm, time::JulianDate};
///
/// let jd = JulianDate::from_utc(2024, 6, 21, 12, 0, 0.0, 69.0).unwrap();
/// let berlin = GeoCoordinate::new(52.52, 13.405).unwrap();
///
/// for algorithm in [Algorithm::Spa, Algorithm::Grena3] {
///     let position = algorithm.solar_position(jd, berlin, 34.0, None);
///     println!("{algorithm:?}: zenith {:.3}°", position.zenith_angle());
/// }
/// ```
pub trait PositionAlgorithm {
    /// Position at `jd` for an observer at `coordinate`, `elevation` meters above
    /// sea level. Refraction is corrected only for usable `atmosphere`.
    ///
    /// # Panics
    /// Panics if `elevation` or the ΔT carried by `jd` is not finite.
    fn solar_position(
        &self,
        jd: JulianDate,
        coordinate: GeoCoordinate,
        elevation: f64,
        atmosphere: Option<AtmosphericConditions>,
    ) -> SolarPosition;

    /// Like [`solar_position`](Self::solar_position), validating raw coordinates first.
    ///
    /// # Errors
    /// Returns error for invalid coordinates
    fn solar_position_at(
        &self,
        jd: JulianDate,
        latitude: f64,
        longitude: f64,
        elevation: f64,
        atmosphere: Option<AtmosphericConditions>,
    ) -> Result<SolarPosition> {
        let coordinate = GeoCoordinate::new(latitude, longitude)?;
        Ok(self.solar_position(jd, coordinate, elevation, atmosphere))
    }
}

/// The NREL SPA engine, see [`crate::spa`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Spa;

/// The Grena3 engine, see [`crate::grena3`]. Ignores the observer elevation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Grena3;

impl PositionAlgorithm for Spa {
    fn solar_position(
        &self,
        jd: JulianDate,
        coordinate: GeoCoordinate,
        elevation: f64,
        atmosphere: Option<AtmosphericConditions>,
    ) -> SolarPosition {
        SpaTimeDependent::from_julian(jd).topocentric(coordinate, elevation, atmosphere)
    }
}

impl PositionAlgorithm for Grena3 {
    fn solar_position(
        &self,
        jd: JulianDate,
        coordinate: GeoCoordinate,
        _elevation: f64,
        atmosphere: Option<AtmosphericConditions>,
    ) -> SolarPosition {
        grena3::topocentric(jd, coordinate, atmosphere)
    }
}

/// Engine selection by value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Algorithm {
    /// High accuracy, years -2000 to 6000.
    #[default]
    Spa,
    /// About 0.01° accuracy for 2010 to 2110, much faster.
    Grena3,
}

impl PositionAlgorithm for Algorithm {
    fn solar_position(
        &self,
        jd: JulianDate,
        coordinate: GeoCoordinate,
        elevation: f64,
        atmosphere: Option<AtmosphericConditions>,
    ) -> SolarPosition {
        match self {
            Self::Spa => Spa.solar_position(jd, coordinate, elevation, atmosphere),
            Self::Grena3 => Grena3.solar_position(jd, coordinate, elevation, atmosphere),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spa;

    fn spa_example() -> (JulianDate, GeoCoordinate) {
        (
            JulianDate::from_utc(2003, 10, 17, 19, 30, 30.0, 67.0).unwrap(),
            GeoCoordinate::new(39.742476, -105.1786).unwrap(),
        )
    }

    #[test]
    fn test_enum_dispatch_matches_engines() {
        let (jd, coordinate) = spa_example();
        let atmosphere = Some(AtmosphericConditions::new(820.0, 11.0));

        assert_eq!(
            Algorithm::Spa.solar_position(jd, coordinate, 1830.14, atmosphere),
            spa::solar_position_from_julian(jd, 39.742476, -105.1786, 1830.14, atmosphere)
                .unwrap()
        );
        assert_eq!(
            Algorithm::Grena3.solar_position(jd, coordinate, 1830.14, atmosphere),
            grena3::solar_position_from_julian(jd, 39.742476, -105.1786, atmosphere).unwrap()
        );
    }

    #[test]
    fn test_engines_agree_roughly() {
        let (jd, coordinate) = spa_example();
        let engines: [&dyn PositionAlgorithm; 2] = [&Spa, &Grena3];
        let positions = engines.map(|engine| engine.solar_position(jd, coordinate, 0.0, None));

        assert!((positions[0].azimuth() - positions[1].azimuth()).abs() < 0.02);
        assert!((positions[0].zenith_angle() - positions[1].zenith_angle()).abs() < 0.02);
    }

    #[test]
    fn test_grena3_ignores_elevation() {
        let (jd, coordinate) = spa_example();
        assert_eq!(
            Grena3.solar_position(jd, coordinate, 0.0, None),
            Grena3.solar_position(jd, coordinate, 4000.0, None)
        );
        assert_ne!(
            Spa.solar_position(jd, coordinate, 0.0, None),
            Spa.solar_position(jd, coordinate, 4000.0, None)
        );
    }

    #[test]
    fn test_solar_position_at_validates() {
        let (jd, _) = spa_example();
        assert!(Algorithm::default().solar_position_at(jd, 90.5, 0.0, 0.0, None).is_err());
        assert!(Grena3.solar_position_at(jd, 0.0, -180.5, 0.0, None).is_err());
        assert!(Spa.solar_position_at(jd, -90.0, 180.0, 0.0, None).is_ok());
    }
}
