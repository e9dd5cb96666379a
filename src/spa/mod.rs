//! NREL Solar Position Algorithm.
//!
//! High-accuracy topocentric sun position after Reda & Andreas (2003), nominally
//! ±0.0003° for the years -2000 to 6000, plus the sunrise/transit/sunset solver of
//! the same paper's appendix A.2.
//!
//! Reference: Reda, I.; Andreas, A. (2003). Solar position algorithm for solar radiation applications.
//! Solar Energy, 76(5), 577-589. DOI: <http://dx.doi.org/10.1016/j.solener.2003.12.003>

#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::unreadable_literal)]

use crate::math::{
    asin, atan, atan2, cos, mul_add, normalize_degrees, polynomial, sin, tan,
};
use crate::time::JulianDate;
use crate::types::usable_conditions;
use crate::{AtmosphericConditions, GeoCoordinate, Horizon, Result, SolarPosition};

mod coefficients;
mod sunrise;

use coefficients::{
    B_SERIES, L_SERIES, LUNISOLAR_ARGUMENTS, MEAN_OBLIQUITY, NUTATION_AMPLITUDES,
    NUTATION_ARGUMENT_MULTIPLES, PeriodicTerm, R_SERIES,
};

#[cfg(all(feature = "chrono", feature = "std"))]
pub use sunrise::sunrise_transit_set_batch;
#[cfg(feature = "chrono")]
pub use sunrise::sunrise_transit_set;
pub use sunrise::sunrise_transit_set_utc;

#[cfg(feature = "chrono")]
use chrono::{DateTime, TimeZone};

/// Aberration constant in arcseconds.
const ABERRATION_CONSTANT: f64 = -20.4898;

/// Equatorial horizontal parallax of the sun at 1 AU, in arcseconds.
const SUN_HORIZONTAL_PARALLAX: f64 = 8.794;

/// Earth flattening factor `1 - f`.
const EARTH_FLATTENING_FACTOR: f64 = 0.99664719;

/// Earth equatorial radius in meters.
const EARTH_RADIUS_METERS: f64 = 6378140.0;

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Refraction is only applied while the sun is above the standard rise/set elevation.
const REFRACTION_THRESHOLD: f64 = Horizon::SunriseSunset.elevation_angle();

/// Calculate solar position using the SPA algorithm.
///
/// # Arguments
/// * `datetime` - Date and time with timezone
/// * `latitude` - Observer latitude in degrees (-90 to +90)
/// * `longitude` - Observer longitude in degrees (-180 to +180)
/// * `elevation` - Observer elevation in meters above sea level
/// * `delta_t` - ΔT in seconds (TT minus UT)
/// * `atmosphere` - Pressure and temperature for refraction correction, `None` to skip it
///
/// # Errors
/// Returns error for invalid coordinates (latitude outside ±90°, longitude outside ±180°)
///
/// # Panics
/// Panics if `elevation` or `delta_t` is not finite.
///
/// # Example
/// ```rust
/// use solar_ephemeris::{spa, AtmosphericConditions};
/// use chrono::{DateTime, FixedOffset};
///
/// let datetime = "2003-10-17T12:30:30-07:00".parse::<DateTime<FixedOffset>>().unwrap();
///
/// let position = spa::solar_position(
///     datetime,
///     39.742476,   // latitude
///     -105.1786,   // longitude
///     1830.14,     // elevation (meters)
///     67.0,        // ΔT (seconds)
///     Some(AtmosphericConditions::new(820.0, 11.0)),
/// ).unwrap();
///
/// assert!((position.azimuth() - 194.34024).abs() < 1e-4);
/// assert!((position.zenith_angle() - 50.11162).abs() < 1e-4);
/// ```
#[cfg(feature = "chrono")]
#[allow(clippy::needless_pass_by_value)]
pub fn solar_position<Tz: TimeZone>(
    datetime: DateTime<Tz>,
    latitude: f64,
    longitude: f64,
    elevation: f64,
    delta_t: f64,
    atmosphere: Option<AtmosphericConditions>,
) -> Result<SolarPosition> {
    let jd = JulianDate::from_datetime(&datetime, delta_t)?;
    solar_position_from_julian(jd, latitude, longitude, elevation, atmosphere)
}

/// Calculate solar position from a Julian date.
///
/// Works without chrono and in `no_std` builds.
///
/// # Errors
/// Returns error for invalid coordinates
///
/// # Panics
/// Panics if `elevation` or the ΔT carried by `jd` is not finite.
///
/// # Example
/// ```rust
/// use solar_ephemeris::{spa, time::JulianDate, AtmosphericConditions};
///
/// // 2023-06-21 12:00:00 UTC with ΔT = 69 s
/// let jd = JulianDate::from_utc(2023, 6, 21, 12, 0, 0.0, 69.0).unwrap();
///
/// let position = spa::solar_position_from_julian(
///     jd,
///     37.7749,
///     -122.4194,
///     0.0,
///     Some(AtmosphericConditions::standard()),
/// ).unwrap();
///
/// println!("Azimuth: {:.3}°", position.azimuth());
/// println!("Elevation: {:.3}°", position.elevation_angle());
/// ```
pub fn solar_position_from_julian(
    jd: JulianDate,
    latitude: f64,
    longitude: f64,
    elevation: f64,
    atmosphere: Option<AtmosphericConditions>,
) -> Result<SolarPosition> {
    SpaTimeDependent::from_julian(jd).solar_position(latitude, longitude, elevation, atmosphere)
}

/// Computes the observer-independent part of the algorithm for one instant.
///
/// # Errors
/// Returns [`crate::Error::InvalidDateTime`] if the instant cannot be converted.
///
/// # Example
/// ```rust
/// use solar_ephemeris::spa;
/// use chrono::{DateTime, Utc};
///
/// let datetime = "2024-03-20T12:00:00Z".parse::<DateTime<Utc>>().unwrap();
/// let parts = spa::time_dependent_parts(datetime, 69.0).unwrap();
///
/// for latitude in [-60.0, -30.0, 0.0, 30.0, 60.0] {
///     let position = parts.solar_position(latitude, 0.0, 0.0, None).unwrap();
///     println!("{latitude:>5}°: zenith {:.2}°", position.zenith_angle());
/// }
/// ```
#[cfg(feature = "chrono")]
#[allow(clippy::needless_pass_by_value)]
pub fn time_dependent_parts<Tz: TimeZone>(
    datetime: DateTime<Tz>,
    delta_t: f64,
) -> Result<SpaTimeDependent> {
    Ok(SpaTimeDependent::from_julian(JulianDate::from_datetime(
        &datetime, delta_t,
    )?))
}

/// Geocentric sun quantities for one instant (steps 1-8 of the algorithm).
///
/// Computing these dominates the cost of a position. For many observers at the
/// same instant, compute them once and call
/// [`solar_position`](Self::solar_position) per observer; the result is the same as
/// calling [`solar_position_from_julian`] for each of them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpaTimeDependent {
    radius_vector: f64,
    sidereal_time: f64,
    right_ascension: f64,
    declination: f64,
}

impl SpaTimeDependent {
    /// Evaluates the heliocentric series, nutation, aberration and sidereal time.
    #[must_use]
    pub fn from_julian(jd: JulianDate) -> Self {
        let nutation = NutationObliquity::at(&jd);
        let position = geocentric_position(jd.julian_ephemeris_millennium(), nutation);

        Self {
            radius_vector: position.radius_vector,
            sidereal_time: apparent_sidereal_time(&jd, nutation),
            right_ascension: position.right_ascension,
            declination: position.declination,
        }
    }

    /// Earth-sun distance in astronomical units.
    #[must_use]
    pub const fn radius_vector(&self) -> f64 {
        self.radius_vector
    }

    /// Apparent sidereal time at Greenwich in degrees.
    #[must_use]
    pub const fn apparent_sidereal_time(&self) -> f64 {
        self.sidereal_time
    }

    /// Geocentric right ascension in degrees, `[0, 360)`.
    #[must_use]
    pub const fn right_ascension(&self) -> f64 {
        self.right_ascension
    }

    /// Geocentric declination in degrees.
    #[must_use]
    pub const fn declination(&self) -> f64 {
        self.declination
    }

    /// Completes the calculation for one observer.
    ///
    /// # Errors
    /// Returns error for invalid coordinates
    ///
    /// # Panics
    /// Panics if `elevation` is not finite.
    pub fn solar_position(
        &self,
        latitude: f64,
        longitude: f64,
        elevation: f64,
        atmosphere: Option<AtmosphericConditions>,
    ) -> Result<SolarPosition> {
        let coordinate = GeoCoordinate::new(latitude, longitude)?;
        Ok(self.topocentric(coordinate, elevation, atmosphere))
    }

    /// Steps 9-15: hour angle, parallax, elevation, refraction and azimuth.
    pub(crate) fn topocentric(
        &self,
        coordinate: GeoCoordinate,
        elevation: f64,
        atmosphere: Option<AtmosphericConditions>,
    ) -> SolarPosition {
        let phi = coordinate.latitude().to_radians();
        let delta = self.declination.to_radians();

        // 3.9. Observer local hour angle
        let h = normalize_degrees(self.sidereal_time + coordinate.longitude() - self.right_ascension)
            .to_radians();

        // 3.10. Equatorial horizontal parallax
        let xi = (SUN_HORIZONTAL_PARALLAX / (SECONDS_PER_HOUR * self.radius_vector)).to_radians();

        // 3.11-3.12. Parallax in right ascension and topocentric declination
        let u = atan(EARTH_FLATTENING_FACTOR * tan(phi));
        let x = mul_add(elevation / EARTH_RADIUS_METERS, cos(phi), cos(u));
        let y = mul_add(
            elevation / EARTH_RADIUS_METERS,
            sin(phi),
            EARTH_FLATTENING_FACTOR * sin(u),
        );

        let denominator = mul_add(-x * sin(xi), cos(h), cos(delta));
        let delta_alpha = atan2(-x * sin(xi) * sin(h), denominator);
        let delta_prime = atan2(mul_add(-y, sin(xi), sin(delta)) * cos(delta_alpha), denominator);
        let h_prime = h - delta_alpha;

        // 3.14.1. Topocentric elevation angle without refraction
        let e0 = asin(
            mul_add(
                sin(phi),
                sin(delta_prime),
                cos(phi) * cos(delta_prime) * cos(h_prime),
            )
            .clamp(-1.0, 1.0),
        )
        .to_degrees();

        // 3.14.2-3.14.4. Refraction correction and zenith angle
        let elevation_angle = (e0 + refraction_correction(e0, atmosphere)).min(90.0);
        let zenith = 90.0 - elevation_angle;

        // 3.15. Topocentric azimuth, measured eastward from north
        let gamma = atan2(
            sin(h_prime),
            mul_add(cos(h_prime), sin(phi), -(tan(delta_prime) * cos(phi))),
        );
        let azimuth = normalize_degrees(gamma.to_degrees() + 180.0);

        SolarPosition::from_engine(azimuth, zenith)
    }
}

fn refraction_correction(e0: f64, atmosphere: Option<AtmosphericConditions>) -> f64 {
    match usable_conditions(atmosphere) {
        Some(conditions) if e0 > REFRACTION_THRESHOLD => {
            (conditions.pressure() / 1010.0) * (283.0 / (273.0 + conditions.temperature())) * 1.02
                / (60.0 * tan((e0 + 10.3 / (e0 + 5.11)).to_radians()))
        }
        _ => 0.0,
    }
}

/// Nutation in longitude together with the true obliquity of the ecliptic.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NutationObliquity {
    /// Δψ in degrees.
    delta_psi: f64,
    /// True obliquity ε in degrees.
    epsilon: f64,
}

impl NutationObliquity {
    /// Steps 3.4 and 3.5 for one instant.
    pub(crate) fn at(jd: &JulianDate) -> Self {
        let jce = jd.julian_ephemeris_century();
        let (delta_psi, delta_epsilon) = nutation(jce);
        let epsilon0 = polynomial(&MEAN_OBLIQUITY, jd.julian_ephemeris_millennium() / 10.0);

        Self {
            delta_psi,
            epsilon: epsilon0 / SECONDS_PER_HOUR + delta_epsilon,
        }
    }
}

/// Geocentric equatorial coordinates of the sun.
#[derive(Debug, Clone, Copy)]
pub(crate) struct EquatorialPosition {
    /// Earth radius vector in AU.
    pub(crate) radius_vector: f64,
    /// Geocentric right ascension α in degrees.
    pub(crate) right_ascension: f64,
    /// Geocentric declination δ in degrees.
    pub(crate) declination: f64,
}

/// Sums one heliocentric series (L, B or R) into a value in radians (AU for R).
fn earth_series(series: &[&[PeriodicTerm]], jme: f64) -> f64 {
    let mut sums = [0.0; 6];
    for (sum, terms) in sums.iter_mut().zip(series) {
        // smallest amplitudes first
        *sum = terms
            .iter()
            .rev()
            .map(|&(amplitude, phase, frequency)| amplitude * cos(mul_add(frequency, jme, phase)))
            .sum();
    }
    polynomial(&sums[..series.len()], jme) / 1e8
}

/// Nutation in longitude and obliquity, both in degrees.
fn nutation(jce: f64) -> (f64, f64) {
    let x = LUNISOLAR_ARGUMENTS.map(|coefficients| polynomial(&coefficients, jce));

    let mut delta_psi = 0.0;
    let mut delta_epsilon = 0.0;
    for (multiples, &[a, b, c, d]) in NUTATION_ARGUMENT_MULTIPLES
        .iter()
        .zip(&NUTATION_AMPLITUDES)
    {
        let argument = multiples
            .iter()
            .zip(&x)
            .map(|(&multiple, &argument)| f64::from(multiple) * argument)
            .sum::<f64>()
            .to_radians();

        delta_psi += mul_add(b, jce, a) * sin(argument);
        delta_epsilon += mul_add(d, jce, c) * cos(argument);
    }

    (delta_psi / 36_000_000.0, delta_epsilon / 36_000_000.0)
}

/// Steps 3.2-3.8: sun coordinates at `jme` under the given nutation.
pub(crate) fn geocentric_position(jme: f64, nutation: NutationObliquity) -> EquatorialPosition {
    // 3.2. Earth heliocentric longitude, latitude and radius vector
    let l_degrees = normalize_degrees(earth_series(L_SERIES, jme).to_degrees());
    let b_degrees = earth_series(B_SERIES, jme).to_degrees();
    let radius_vector = earth_series(R_SERIES, jme);

    // 3.3. Geocentric longitude and latitude
    let theta_degrees = normalize_degrees(l_degrees + 180.0);
    let beta = (-b_degrees).to_radians();

    // 3.6-3.7. Aberration and apparent sun longitude
    let delta_tau = ABERRATION_CONSTANT / (SECONDS_PER_HOUR * radius_vector);
    let lambda = (theta_degrees + nutation.delta_psi + delta_tau).to_radians();
    let epsilon = nutation.epsilon.to_radians();

    // 3.8. Geocentric right ascension and declination
    let alpha = atan2(
        mul_add(sin(lambda), cos(epsilon), -(tan(beta) * sin(epsilon))),
        cos(lambda),
    );
    let delta = asin(mul_add(
        sin(beta),
        cos(epsilon),
        cos(beta) * sin(epsilon) * sin(lambda),
    ));

    EquatorialPosition {
        radius_vector,
        right_ascension: normalize_degrees(alpha.to_degrees()),
        declination: delta.to_degrees(),
    }
}

/// Step 3.5: apparent sidereal time at Greenwich in degrees.
pub(crate) fn apparent_sidereal_time(jd: &JulianDate, nutation: NutationObliquity) -> f64 {
    let jc = jd.julian_century();
    let nu0_degrees = normalize_degrees(mul_add(
        jc * jc,
        0.000387933 - jc / 38710000.0,
        mul_add(360.98564736629, jd.julian_date() - 2451545.0, 280.46061837),
    ));

    mul_add(
        nutation.delta_psi,
        cos(nutation.epsilon.to_radians()),
        nu0_degrees,
    )
}
