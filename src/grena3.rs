//! Grena3 solar position algorithm.
//!
//! Algorithm no. 3 of Grena, 'Five new algorithms for the computation of sun position
//! from 2010 to 2110', Solar Energy 86 (2012) pp. 1323-1337.
//!
//! Valid for the years 2010 to 2110 with a maximum error of about 0.01°, and roughly
//! an order of magnitude faster than SPA. Outside that window it still returns a
//! position, with degrading accuracy. Observer elevation is not taken into account.

#![allow(clippy::unreadable_literal)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::suboptimal_flops)]

use crate::math::{PI, asin, atan2, cos, floor, normalize_degrees, sin, sqrt, tan};
use crate::time::JulianDate;
use crate::types::usable_conditions;
use crate::{AtmosphericConditions, GeoCoordinate, Result, SolarPosition};

#[cfg(feature = "chrono")]
use chrono::{DateTime, TimeZone};

/// Julian Date of 2060-01-01 0h UT, where the day count `t` is zero.
const T_EPOCH: f64 = 2_473_459.5;

/// Calculate solar position using the Grena3 algorithm.
///
/// # Arguments
/// * `datetime` - Timezone-aware date and time
/// * `latitude` - Observer latitude in degrees (-90 to +90)
/// * `longitude` - Observer longitude in degrees (-180 to +180)
/// * `delta_t` - ΔT in seconds (TT minus UT)
/// * `atmosphere` - Pressure and temperature for refraction correction, `None` to skip it
///
/// # Errors
/// Returns error for invalid coordinates (latitude outside ±90°, longitude outside ±180°)
///
/// # Panics
/// Panics if `delta_t` is not finite.
///
/// # Example
/// ```rust
/// use solar_ephemeris::{grena3, AtmosphericConditions};
/// use chrono::{DateTime, FixedOffset};
///
/// let datetime = "2023-06-21T12:00:00-07:00".parse::<DateTime<FixedOffset>>().unwrap();
/// let position = grena3::solar_position(
///     datetime,
///     37.7749,     // San Francisco latitude
///     -122.4194,   // San Francisco longitude
///     69.0,        // ΔT (seconds)
///     Some(AtmosphericConditions::standard()),
/// ).unwrap();
///
/// println!("Azimuth: {:.3}°", position.azimuth());
/// println!("Elevation: {:.3}°", position.elevation_angle());
/// ```
#[cfg(feature = "chrono")]
#[allow(clippy::needless_pass_by_value)]
pub fn solar_position<Tz: TimeZone>(
    datetime: DateTime<Tz>,
    latitude: f64,
    longitude: f64,
    delta_t: f64,
    atmosphere: Option<AtmosphericConditions>,
) -> Result<SolarPosition> {
    let jd = JulianDate::from_datetime(&datetime, delta_t)?;
    solar_position_from_julian(jd, latitude, longitude, atmosphere)
}

/// Calculate solar position from a Julian date using the Grena3 algorithm.
///
/// The ΔT carried by `jd` is used.
///
/// # Errors
/// Returns error for invalid coordinates
///
/// # Panics
/// Panics if the ΔT carried by `jd` is not finite.
pub fn solar_position_from_julian(
    jd: JulianDate,
    latitude: f64,
    longitude: f64,
    atmosphere: Option<AtmosphericConditions>,
) -> Result<SolarPosition> {
    let coordinate = GeoCoordinate::new(latitude, longitude)?;
    Ok(topocentric(jd, coordinate, atmosphere))
}

pub(crate) fn topocentric(
    jd: JulianDate,
    coordinate: GeoCoordinate,
    atmosphere: Option<AtmosphericConditions>,
) -> SolarPosition {
    let t = day_count(jd.julian_date());
    let t_e = t + 1.1574e-5 * jd.delta_t();
    let omega_at_e = 0.0172019715 * t_e;

    // Apparent sun longitude and obliquity of the ecliptic
    let lambda = -1.388803
        + 1.720279216e-2 * t_e
        + 3.3366e-2 * sin(omega_at_e - 0.06172)
        + 3.53e-4 * sin(2.0 * omega_at_e - 0.1163);
    let epsilon = 4.089567e-1 - 6.19e-9 * t_e;

    let s_lambda = sin(lambda);
    let c_lambda = cos(lambda);
    let s_epsilon = sin(epsilon);
    let c_epsilon = sqrt(1.0 - s_epsilon * s_epsilon);

    let mut alpha = atan2(s_lambda * c_epsilon, c_lambda);
    if alpha < 0.0 {
        alpha += 2.0 * PI;
    }
    let delta = asin(s_lambda * s_epsilon);

    // Hour angle, wrapped to (-π, π]
    let mut h = 1.7528311 + 6.300388099 * t + coordinate.longitude().to_radians() - alpha;
    h = ((h + PI) % (2.0 * PI)) - PI;
    if h < -PI {
        h += 2.0 * PI;
    }

    let s_phi = sin(coordinate.latitude().to_radians());
    let c_phi = sqrt(1.0 - s_phi * s_phi);
    let s_delta = sin(delta);
    let c_delta = sqrt(1.0 - s_delta * s_delta);
    let s_h = sin(h);
    let c_h = cos(h);

    // Elevation with parallax, then azimuth
    let s_epsilon0 = (s_phi * s_delta + c_phi * c_delta * c_h).clamp(-1.0, 1.0);
    let e_p = asin(s_epsilon0) - 4.26e-5 * sqrt(1.0 - s_epsilon0 * s_epsilon0);
    let gamma = atan2(s_h, c_h * s_phi - s_delta * c_phi / c_delta);

    let delta_re = match usable_conditions(atmosphere) {
        Some(conditions) if e_p > 0.0 => {
            (0.08422 * (conditions.pressure() / 1000.0))
                / ((273.0 + conditions.temperature()) * tan(e_p + 0.003138 / (e_p + 0.08919)))
        }
        _ => 0.0,
    };

    let z = PI / 2.0 - (e_p + delta_re).min(PI / 2.0);

    SolarPosition::from_engine(normalize_degrees((gamma + PI).to_degrees()), z.to_degrees())
}

/// Grena's day count `t`: days since 2060-01-01 0h UT, with the time of day
/// scaled by the published coefficient 0.0416667 per hour.
fn day_count(jd: f64) -> f64 {
    let midnight = floor(jd + 0.5) - 0.5;
    let hours = (jd - midnight) * 24.0;
    (midnight - T_EPOCH) + 0.0416667 * hours
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Grena's own calendar formula, valid from March 2000 on.
    #[allow(clippy::cast_possible_truncation)]
    fn published_day_count(year: i32, month: i32, day: i32, hours: f64) -> f64 {
        let (y, m) = if month <= 2 {
            (year - 1, month + 12)
        } else {
            (year, month)
        };
        f64::from((365.25 * f64::from(y - 2000)) as i32)
            + f64::from((30.6001 * f64::from(m + 1)) as i32)
            - f64::from((0.01 * f64::from(y)) as i32)
            + f64::from(day)
            + 0.0416667 * hours
            - 21958.0
    }

    #[test]
    fn test_day_count_matches_published_formula() {
        for &(year, month, day, hour) in &[
            (2010, 1, 1, 0),
            (2012, 1, 1, 11),
            (2015, 6, 28, 17),
            (2060, 1, 1, 0),
            (2099, 12, 31, 23),
            (2100, 2, 28, 12),
            (2100, 3, 1, 6),
            (2110, 7, 4, 18),
        ] {
            let jd = JulianDate::from_utc(year, month, day, hour, 30, 0.0, 0.0).unwrap();
            let expected = published_day_count(
                year,
                i32::try_from(month).unwrap(),
                i32::try_from(day).unwrap(),
                f64::from(hour) + 0.5,
            );
            assert!(
                (day_count(jd.julian_date()) - expected).abs() < 1e-6,
                "{year}-{month}-{day} {hour}h"
            );
        }
        assert_eq!(day_count(T_EPOCH), 0.0);
    }

    #[test]
    fn test_grena_sample_case() {
        // Grena (2012) sample: 2012-01-01 12:00 UTC+1, pressure 1 atm, 20 °C
        let jd = JulianDate::from_utc(2012, 1, 1, 11, 0, 0.0, 65.0).unwrap();
        let position = solar_position_from_julian(
            jd,
            0.73117_f64.to_degrees(),
            0.21787_f64.to_degrees(),
            Some(AtmosphericConditions::new(1000.0, 20.0)),
        )
        .unwrap();

        assert!((position.zenith_angle() - 1.13381_f64.to_degrees()).abs() < 1e-3);
        assert!(
            (position.azimuth() - normalize_degrees((-0.0591845 + PI).to_degrees())).abs() < 1e-3
        );
    }

    #[test]
    fn test_berlin_afternoon() {
        let jd = JulianDate::from_utc(2015, 6, 28, 17, 45, 12.0, 68.0).unwrap();
        let position = solar_position_from_julian(
            jd,
            52.509663,
            13.376481,
            Some(AtmosphericConditions::new(1000.0, 20.0)),
        )
        .unwrap();

        assert!((position.azimuth() - 291.232854).abs() < 0.01);
        assert!((position.zenith_angle() - 76.799924).abs() < 0.01);
    }

    #[test]
    fn test_unusable_conditions_match_no_refraction() {
        let jd = JulianDate::from_utc(2015, 6, 12, 13, 34, 11.0, 69.0).unwrap();
        let without = solar_position_from_julian(jd, -3.107, -60.025, None).unwrap();
        let silly = solar_position_from_julian(
            jd,
            -3.107,
            -60.025,
            Some(AtmosphericConditions::new(f64::NAN, 20.0)),
        )
        .unwrap();
        let refracted = solar_position_from_julian(
            jd,
            -3.107,
            -60.025,
            Some(AtmosphericConditions::new(1000.0, 20.0)),
        )
        .unwrap();

        assert_eq!(without, silly);
        assert!(refracted.zenith_angle() < without.zenith_angle());
        assert!((refracted.zenith_angle() - 44.1425).abs() < 0.01);
        assert!((refracted.azimuth() - 51.608).abs() < 0.01);
    }

    #[test]
    fn test_no_refraction_below_horizon() {
        let jd = JulianDate::from_utc(2015, 6, 12, 1, 0, 0.0, 69.0).unwrap();
        let without = solar_position_from_julian(jd, 52.5, 13.4, None).unwrap();
        let with = solar_position_from_julian(
            jd,
            52.5,
            13.4,
            Some(AtmosphericConditions::standard()),
        )
        .unwrap();

        assert!(without.zenith_angle() > 90.0);
        assert_eq!(without, with);
    }

    #[test]
    fn test_coordinate_validation() {
        let jd = JulianDate::from_utc(2023, 6, 21, 19, 0, 0.0, 69.0).unwrap();
        assert!(solar_position_from_julian(jd, 95.0, 0.0, None).is_err());
        assert!(solar_position_from_julian(jd, 0.0, 185.0, None).is_err());
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_chrono_entry_point() {
        use chrono::FixedOffset;

        let datetime = "2012-01-01T12:00:00+01:00"
            .parse::<DateTime<FixedOffset>>()
            .unwrap();
        let position = solar_position(
            datetime,
            0.73117_f64.to_degrees(),
            0.21787_f64.to_degrees(),
            65.0,
            Some(AtmosphericConditions::new(1000.0, 20.0)),
        )
        .unwrap();

        assert!((position.zenith_angle() - 64.9626).abs() < 1e-3);
    }
}
