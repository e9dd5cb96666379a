//! Error type shared by all calculations.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors returned by position and sunrise calculations.
///
/// Only observer coordinates are validated strictly. Unusable atmospheric
/// conditions never produce an error; they switch refraction correction off.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Latitude outside `[-90, 90]` degrees (or NaN).
    #[error("invalid latitude {value}° (must be between -90° and +90°)")]
    InvalidLatitude {
        /// The rejected latitude.
        value: f64,
    },

    /// Longitude outside `[-180, 180]` degrees (or NaN).
    #[error("invalid longitude {value}° (must be between -180° and +180°)")]
    InvalidLongitude {
        /// The rejected longitude.
        value: f64,
    },

    /// Horizon elevation angle that is not a finite number.
    #[error("invalid horizon elevation angle {value}° (must be finite)")]
    InvalidHorizon {
        /// The rejected elevation angle.
        value: f64,
    },

    /// Calendar or civil-time input that cannot be converted.
    #[error("invalid date/time: {message}")]
    InvalidDateTime {
        /// What was wrong with the input.
        message: &'static str,
    },

    /// No ΔT estimate exists for the requested year.
    #[error("no ΔT estimate available for year {year}")]
    DeltaTOutOfRange {
        /// The decimal year that was requested.
        year: f64,
    },

    /// Azimuth or zenith angle outside its valid range.
    #[error("invalid solar position: azimuth {azimuth}°, zenith angle {zenith_angle}°")]
    InvalidPosition {
        /// Azimuth supplied, in degrees.
        azimuth: f64,
        /// Zenith angle supplied, in degrees.
        zenith_angle: f64,
    },
}

impl Error {
    pub(crate) const fn invalid_datetime(message: &'static str) -> Self {
        Self::InvalidDateTime { message }
    }
}

/// Validates a latitude in degrees.
///
/// # Errors
/// Returns [`Error::InvalidLatitude`] outside `[-90, 90]` and for NaN.
pub fn check_latitude(latitude: f64) -> Result<f64> {
    if (-90.0..=90.0).contains(&latitude) {
        Ok(latitude)
    } else {
        Err(Error::InvalidLatitude { value: latitude })
    }
}

/// Validates a longitude in degrees.
///
/// # Errors
/// Returns [`Error::InvalidLongitude`] outside `[-180, 180]` and for NaN.
pub fn check_longitude(longitude: f64) -> Result<f64> {
    if (-180.0..=180.0).contains(&longitude) {
        Ok(longitude)
    } else {
        Err(Error::InvalidLongitude { value: longitude })
    }
}
