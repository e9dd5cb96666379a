//! Sunrise, transit and sunset after appendix A.2 of Reda & Andreas (2003).
//!
//! The solver evaluates the geocentric sun position at 0h UT of the day before,
//! the day itself and the day after, interpolates it to the approximate event
//! times and applies one correction step to rise and set.

#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]

use super::{EquatorialPosition, NutationObliquity, apparent_sidereal_time, geocentric_position};
use crate::math::{acos, asin, cos, floor, limit_to, mul_add, sin};
use crate::time::JulianDate;
use crate::{Error, GeoCoordinate, Horizon, HoursUtc, Result, SunriseResult};

#[cfg(feature = "chrono")]
use chrono::{DateTime, Datelike, NaiveDateTime, NaiveTime, Offset, TimeDelta, TimeZone};
#[cfg(all(feature = "chrono", feature = "std"))]
use std::collections::HashMap;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Sidereal degrees per solar day used for the event sidereal times (A.2.8).
const SIDEREAL_RATE: f64 = 360.985647;

/// Calculate sunrise, transit and sunset for the civil day of `day`.
///
/// The day is the calendar date of `day` in its own time zone; the time of day is
/// ignored. All returned instants lie within that civil day and carry the zone
/// of `day`.
///
/// # Arguments
/// * `day` - Any instant on the requested day
/// * `latitude` - Observer latitude in degrees (-90 to +90)
/// * `longitude` - Observer longitude in degrees (-180 to +180)
/// * `delta_t` - ΔT in seconds (TT minus UT)
/// * `horizon` - Sun elevation that defines rise and set
///
/// # Errors
/// Returns error for invalid coordinates, a non-finite horizon angle, or if the
/// day cannot be represented.
///
/// # Panics
/// Panics if `delta_t` is not finite.
///
/// # Example
/// ```rust
/// use solar_ephemeris::{spa, Horizon, SunriseResult};
/// use chrono::{DateTime, FixedOffset};
///
/// let day = "2003-10-17T12:30:30-07:00".parse::<DateTime<FixedOffset>>().unwrap();
/// let result = spa::sunrise_transit_set(day, 39.742476, -105.1786, 67.0, Horizon::SunriseSunset)
///     .unwrap();
///
/// if let SunriseResult::RegularDay { sunrise, transit, sunset } = result {
///     assert_eq!(sunrise.format("%H:%M").to_string(), "06:12");
///     assert_eq!(transit.format("%H:%M").to_string(), "11:46");
///     assert_eq!(sunset.format("%H:%M").to_string(), "17:20");
/// }
/// ```
#[cfg(feature = "chrono")]
#[allow(clippy::needless_pass_by_value)]
pub fn sunrise_transit_set<Tz: TimeZone>(
    day: DateTime<Tz>,
    latitude: f64,
    longitude: f64,
    delta_t: f64,
    horizon: Horizon,
) -> Result<SunriseResult<DateTime<Tz>>> {
    let coordinate = GeoCoordinate::new(latitude, longitude)?;
    check_horizon(horizon)?;
    check_delta_t(delta_t);
    let civil_day = CivilDay::containing(&day)?;
    let ephemeris = DayEphemeris::at_midnight(civil_day.ut_midnight()?);

    ephemeris
        .solve(coordinate, delta_t, horizon)
        .try_map(|fraction| civil_day.place(fraction))
}

/// Calculate sunrise and sunset for several horizons of the same day.
///
/// The day-dependent ephemeris is evaluated once and shared by all horizons, so
/// this is considerably cheaper than repeated [`sunrise_transit_set`] calls.
/// Each result equals the one of the corresponding single call.
///
/// # Errors
/// Returns error for invalid coordinates, any non-finite horizon angle, or if
/// the day cannot be represented.
///
/// # Panics
/// Panics if `delta_t` is not finite.
///
/// # Example
/// ```rust
/// use solar_ephemeris::{spa, Horizon};
/// use chrono::{DateTime, Utc};
///
/// let day = "2023-03-01T12:00:00Z".parse::<DateTime<Utc>>().unwrap();
/// let results = spa::sunrise_transit_set_batch(day, 60.1547, -1.1494, 69.2, Horizon::PRESETS)
///     .unwrap();
///
/// assert_eq!(results.len(), 4);
/// let civil = &results[&Horizon::CivilTwilight];
/// let sunrise = &results[&Horizon::SunriseSunset];
/// assert!(civil.sunrise().unwrap() < sunrise.sunrise().unwrap());
/// ```
#[cfg(all(feature = "chrono", feature = "std"))]
#[allow(clippy::needless_pass_by_value)]
pub fn sunrise_transit_set_batch<Tz, I>(
    day: DateTime<Tz>,
    latitude: f64,
    longitude: f64,
    delta_t: f64,
    horizons: I,
) -> Result<HashMap<Horizon, SunriseResult<DateTime<Tz>>>>
where
    Tz: TimeZone,
    I: IntoIterator<Item = Horizon>,
{
    let coordinate = GeoCoordinate::new(latitude, longitude)?;
    check_delta_t(delta_t);
    let civil_day = CivilDay::containing(&day)?;
    let ephemeris = DayEphemeris::at_midnight(civil_day.ut_midnight()?);

    horizons
        .into_iter()
        .map(|horizon| {
            check_horizon(horizon)?;
            let result = ephemeris
                .solve(coordinate, delta_t, horizon)
                .try_map(|fraction| civil_day.place(fraction))?;
            Ok((horizon, result))
        })
        .collect()
}

/// Calculate sunrise, transit and sunset for a UTC calendar day without chrono.
///
/// Times are hours of the same UTC day in `[0, 24)`. An event that falls just
/// outside the UTC day (e.g. a transit shortly before 0h UT far east of Greenwich)
/// is wrapped into it.
///
/// # Errors
/// Returns error for invalid date components or coordinates, or a non-finite
/// horizon angle.
///
/// # Panics
/// Panics if `delta_t` is not finite.
///
/// # Example
/// ```
/// use solar_ephemeris::{spa, Horizon, SunriseResult};
///
/// let result = spa::sunrise_transit_set_utc(
///     2023, 6, 21,
///     37.7749,   // San Francisco latitude
///     -122.4194, // San Francisco longitude
///     69.0,      // ΔT (seconds)
///     Horizon::SunriseSunset,
/// ).unwrap();
///
/// if let SunriseResult::RegularDay { sunrise, transit, sunset } = result {
///     println!("Sunrise: {:.2} hours UTC", sunrise.hours());
///     println!("Transit: {:.2} hours UTC", transit.hours());
///     println!("Sunset: {:.2} hours UTC", sunset.hours());
/// }
/// ```
pub fn sunrise_transit_set_utc(
    year: i32,
    month: u32,
    day: u32,
    latitude: f64,
    longitude: f64,
    delta_t: f64,
    horizon: Horizon,
) -> Result<SunriseResult<HoursUtc>> {
    let coordinate = GeoCoordinate::new(latitude, longitude)?;
    check_horizon(horizon)?;
    check_delta_t(delta_t);
    let midnight = JulianDate::from_utc(year, month, day, 0, 0, 0.0, 0.0)?;

    Ok(DayEphemeris::at_midnight(midnight)
        .solve(coordinate, delta_t, horizon)
        .map(|fraction| HoursUtc::from_hours(limit_to(fraction, 1.0) * 24.0)))
}

fn check_horizon(horizon: Horizon) -> Result<()> {
    let angle = horizon.elevation_angle();
    if angle.is_finite() {
        Ok(())
    } else {
        Err(Error::InvalidHorizon { value: angle })
    }
}

fn check_delta_t(delta_t: f64) {
    assert!(delta_t.is_finite(), "ΔT must be finite, got {delta_t}");
}

/// A.2.1-A.2.2: everything that depends on the day only.
#[derive(Debug, Clone, Copy)]
struct DayEphemeris {
    /// Apparent sidereal time at Greenwich at 0h UT, degrees.
    sidereal_time: f64,
    /// Sun positions at 0h of the day before, the day and the day after.
    positions: [EquatorialPosition; 3],
}

/// Interpolated sun position and hour angle at one event estimate.
#[derive(Debug, Clone, Copy)]
struct Refinement {
    /// Local hour angle H' in degrees, `[-180, 180]`.
    hour_angle: f64,
    /// Sun altitude h in degrees.
    altitude: f64,
    /// Declination δ' in radians.
    declination: f64,
}

impl DayEphemeris {
    /// `midnight` is 0h UT of the day; its ΔT is ignored.
    fn at_midnight(midnight: JulianDate) -> Self {
        let midnight = JulianDate::new(midnight.julian_date(), 0.0);
        let nutation = NutationObliquity::at(&midnight);

        let position_on = |offset: f64| {
            geocentric_position(
                midnight.plus_days(offset).julian_ephemeris_millennium(),
                nutation,
            )
        };

        Self {
            sidereal_time: apparent_sidereal_time(&midnight, nutation),
            positions: [position_on(-1.0), position_on(0.0), position_on(1.0)],
        }
    }

    /// Event times as fractions of the UT day starting at the ephemeris midnight.
    fn solve(&self, coordinate: GeoCoordinate, delta_t: f64, horizon: Horizon) -> SunriseResult<f64> {
        let h0 = horizon.elevation_angle();
        let phi = coordinate.latitude().to_radians();
        let today = self.positions[1];
        let delta1 = today.declination.to_radians();

        // A.2.3. Approximate transit
        let m0 = (today.right_ascension - coordinate.longitude() - self.sidereal_time) / 360.0;

        // A.2.4. Hour angle of the horizon crossing
        let acos_arg = mul_add(-sin(phi), sin(delta1), sin(h0.to_radians())) / (cos(phi) * cos(delta1));

        let transit_estimate = limit_to(m0, 1.0);
        let transit_refinement = self.refine(transit_estimate, coordinate, delta_t);

        // A.2.13. Transit
        let transit = transit_estimate - transit_refinement.hour_angle / 360.0;

        if acos_arg < -1.0 || acos_arg > 1.0 {
            let all_day = acos_arg < -1.0;
            log::debug!(
                "{} at latitude {}° for horizon {}° (acos argument {acos_arg})",
                if all_day { "polar day" } else { "polar night" },
                coordinate.latitude(),
                h0
            );
            log::trace!("transit fraction {transit}");
            return if all_day {
                SunriseResult::AllDay { transit }
            } else {
                SunriseResult::AllNight { transit }
            };
        }

        let h0_degrees = acos(acos_arg).to_degrees().min(180.0);

        // A.2.5-A.2.6. Approximate rise and set
        let sunrise_estimate = limit_to(m0 - h0_degrees / 360.0, 1.0);
        let sunset_estimate = limit_to(m0 + h0_degrees / 360.0, 1.0);

        // A.2.14-A.2.15. Rise and set after one correction step
        let correct = |estimate: f64| {
            let r = self.refine(estimate, coordinate, delta_t);
            estimate
                + (r.altitude - h0)
                    / (360.0 * cos(r.declination) * cos(phi) * sin(r.hour_angle.to_radians()))
        };
        let sunrise = correct(sunrise_estimate);
        let sunset = correct(sunset_estimate);

        log::trace!("day fractions: sunrise {sunrise}, transit {transit}, sunset {sunset}");

        SunriseResult::RegularDay {
            sunrise,
            transit,
            sunset,
        }
    }

    /// A.2.8-A.2.12 for a single event estimate `m`.
    fn refine(&self, m: f64, coordinate: GeoCoordinate, delta_t: f64) -> Refinement {
        let [before, today, after] = self.positions;

        // A.2.8-A.2.9
        let nu = mul_add(SIDEREAL_RATE, m, self.sidereal_time);
        let n = m + delta_t / SECONDS_PER_DAY;

        // A.2.10. Interpolated right ascension and declination
        let interpolate = |previous: f64, current: f64, next: f64| {
            let a = limit_if_necessary(current - previous);
            let b = limit_if_necessary(next - current);
            let c = b - a;
            current + n * mul_add(c, n, a + b) / 2.0
        };
        let alpha_prime = interpolate(
            before.right_ascension,
            today.right_ascension,
            after.right_ascension,
        );
        let delta_prime =
            interpolate(before.declination, today.declination, after.declination).to_radians();

        // A.2.11. Local hour angle
        let hour_angle = limit_hour_angle(nu + coordinate.longitude() - alpha_prime);

        // A.2.12. Sun altitude
        let phi = coordinate.latitude().to_radians();
        let altitude = asin(mul_add(
            sin(phi),
            sin(delta_prime),
            cos(phi) * cos(delta_prime) * cos(hour_angle.to_radians()),
        ))
        .to_degrees();

        Refinement {
            hour_angle,
            altitude,
            declination: delta_prime,
        }
    }
}

/// Differences above two units are wrapped; the right ascension jumps by 360°
/// once a year and the interpolation works in fractions of that.
fn limit_if_necessary(value: f64) -> f64 {
    if !(-2.0..=2.0).contains(&value) {
        limit_to(value, 1.0)
    } else {
        value
    }
}

/// Reduces an hour angle into `[-180, 180]`.
fn limit_hour_angle(h_prime: f64) -> f64 {
    let normalized = h_prime / 360.0;
    let limited = 360.0 * (normalized - floor(normalized));

    if limited < -180.0 {
        limited + 360.0
    } else if limited > 180.0 {
        limited - 360.0
    } else {
        limited
    }
}

/// The local calendar day a sunrise query refers to.
#[cfg(feature = "chrono")]
struct CivilDay<Tz: TimeZone> {
    /// First instant of the day in the caller's zone.
    midnight: DateTime<Tz>,
    /// UTC offset in effect at `midnight`, seconds.
    offset_seconds: i32,
}

#[cfg(feature = "chrono")]
impl<Tz: TimeZone> CivilDay<Tz> {
    const MILLIS_PER_DAY: f64 = 86_400_000.0;

    fn containing(day: &DateTime<Tz>) -> Result<Self> {
        let date = day.date_naive();
        let timezone = day.timezone();
        let local_midnight = date.and_time(NaiveTime::MIN);

        let midnight = match timezone.from_local_datetime(&local_midnight).earliest() {
            Some(midnight) => midnight,
            None => {
                // No 00:00 on this date (DST gap at midnight). The day starts where the
                // gap ends, which is 00:00 at the offset in effect before the gap.
                let before_gap = timezone.from_utc_datetime(&Self::utc_of(
                    local_midnight,
                    day.offset().fix().local_minus_utc(),
                )?);
                timezone.from_utc_datetime(&Self::utc_of(
                    local_midnight,
                    before_gap.offset().fix().local_minus_utc(),
                )?)
            }
        };
        // relative to the naive midnight, so that a skipped midnight keeps the day frame
        let offset_seconds = i32::try_from((local_midnight - midnight.naive_utc()).num_seconds())
            .map_err(|_| Error::invalid_datetime("day start out of range"))?;

        Ok(Self {
            midnight,
            offset_seconds,
        })
    }

    fn utc_of(local: NaiveDateTime, offset_seconds: i32) -> Result<NaiveDateTime> {
        local
            .checked_sub_signed(TimeDelta::seconds(i64::from(offset_seconds)))
            .ok_or(Error::invalid_datetime("day start out of range"))
    }

    /// 0h UT of the civil date.
    fn ut_midnight(&self) -> Result<JulianDate> {
        let date = self.midnight.date_naive();
        JulianDate::from_utc(date.year(), date.month(), date.day(), 0, 0, 0.0, 0.0)
    }

    /// Converts a fraction of the UT day into an instant of this civil day.
    #[allow(clippy::cast_possible_truncation)]
    fn place(&self, fraction: f64) -> Result<DateTime<Tz>> {
        let local_fraction =
            limit_to(fraction + f64::from(self.offset_seconds) / SECONDS_PER_DAY, 1.0);
        let millis = (Self::MILLIS_PER_DAY * local_fraction) as i64;

        self.midnight
            .clone()
            .checked_add_signed(TimeDelta::milliseconds(millis))
            .ok_or(Error::invalid_datetime("event time out of range"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fractions(
        year: i32,
        month: u32,
        day: u32,
        latitude: f64,
        longitude: f64,
        delta_t: f64,
        horizon: Horizon,
    ) -> SunriseResult<f64> {
        let midnight = JulianDate::from_utc(year, month, day, 0, 0, 0.0, 0.0).unwrap();
        let coordinate = GeoCoordinate::new(latitude, longitude).unwrap();
        DayEphemeris::at_midnight(midnight).solve(coordinate, delta_t, horizon)
    }

    fn assert_hours(actual: f64, hours: u32, minutes: u32, seconds: u32, tolerance_seconds: f64) {
        let expected = f64::from(hours * 3600 + minutes * 60 + seconds);
        let actual_seconds = limit_to(actual, 1.0) * SECONDS_PER_DAY;
        assert!(
            (actual_seconds - expected).abs() <= tolerance_seconds,
            "expected {hours:02}:{minutes:02}:{seconds:02}, got {actual_seconds} s"
        );
    }

    #[test]
    fn test_limit_hour_angle() {
        assert_eq!(limit_hour_angle(0.0), 0.0);
        assert!((limit_hour_angle(190.0) - -170.0).abs() < 1e-9);
        assert!((limit_hour_angle(-190.0) - 170.0).abs() < 1e-9);
        assert!((limit_hour_angle(725.0) - 5.0).abs() < 1e-9);
        assert!((limit_hour_angle(180.0) - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_limit_if_necessary() {
        assert_eq!(limit_if_necessary(0.98), 0.98);
        assert_eq!(limit_if_necessary(-1.5), -1.5);
        assert!((limit_if_necessary(-359.02) - 0.98).abs() < 1e-9);
        assert!((limit_if_necessary(2.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_spa_example_day_fractions() {
        // 2003-10-17 at Golden, CO; local time is UTC-7
        let result = fractions(2003, 10, 17, 39.742476, -105.1786, 67.0, Horizon::SunriseSunset);

        let SunriseResult::RegularDay {
            sunrise,
            transit,
            sunset,
        } = result
        else {
            panic!("expected regular day, got {result:?}");
        };
        assert_hours(sunrise, 13, 12, 43, 1.5);
        assert_hours(transit, 18, 46, 4, 1.5);
        assert_hours(sunset, 0, 20, 19, 1.5);
    }

    #[test]
    fn test_polar_classification() {
        let summer = fractions(2015, 6, 17, 70.978056, 25.974722, 0.0, Horizon::SunriseSunset);
        assert!(summer.is_all_day());
        // transit at 12:16:55 local (UTC+2)
        assert_hours(*summer.transit(), 10, 16, 55, 2.0);

        let winter = fractions(2015, 1, 17, 70.978056, 25.974722, 0.0, Horizon::SunriseSunset);
        assert!(winter.is_all_night());
        assert!(winter.sunrise().is_none());
    }

    #[test]
    fn test_twilight_order() {
        let horizons = [
            Horizon::AstronomicalTwilight,
            Horizon::NauticalTwilight,
            Horizon::CivilTwilight,
            Horizon::SunriseSunset,
        ];
        let rises: Vec<f64> = horizons
            .iter()
            .map(|&horizon| {
                *fractions(2023, 3, 1, 60.1547, -1.1494, 69.2, horizon)
                    .sunrise()
                    .unwrap()
            })
            .collect();

        assert!(rises.windows(2).all(|pair| pair[0] < pair[1]), "{rises:?}");
    }

    #[test]
    fn test_transit_is_independent_of_horizon() {
        let standard = fractions(2023, 3, 1, 60.1547, -1.1494, 69.2, Horizon::SunriseSunset);
        let custom = fractions(2023, 3, 1, 60.1547, -1.1494, 69.2, Horizon::Custom(5.0));
        assert_eq!(standard.transit(), custom.transit());
    }

    #[test]
    fn test_custom_horizon_above_the_sun_is_polar_night() {
        // The sun at 60° N in March never gets 60° high
        let result = fractions(2023, 3, 1, 60.1547, -1.1494, 69.2, Horizon::Custom(60.0));
        assert!(result.is_all_night());
    }

    #[test]
    fn test_numeric_api_wraps_into_utc_day() {
        let result =
            sunrise_transit_set_utc(2015, 6, 17, -36.8406, 174.74, 0.0, Horizon::SunriseSunset)
                .unwrap();

        for hours in [result.sunrise(), Some(result.transit()), result.sunset()]
            .into_iter()
            .flatten()
        {
            assert!((0.0..24.0).contains(&hours.hours()), "{hours:?}");
        }
        // 12:21:47 NZST is 00:21:47 UTC
        assert!((result.transit().hours() - 0.363).abs() < 0.01);
    }

    #[test]
    fn test_numeric_api_validation() {
        assert!(sunrise_transit_set_utc(2023, 13, 1, 0.0, 0.0, 69.0, Horizon::default()).is_err());
        assert!(sunrise_transit_set_utc(2023, 2, 30, 0.0, 0.0, 69.0, Horizon::default()).is_err());
        assert!(sunrise_transit_set_utc(2023, 6, 21, 95.0, 0.0, 69.0, Horizon::default()).is_err());
        assert!(sunrise_transit_set_utc(2023, 6, 21, 0.0, 200.0, 69.0, Horizon::default()).is_err());
    }

    #[test]
    fn test_non_finite_horizon_is_rejected() {
        for angle in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let result =
                sunrise_transit_set_utc(2023, 3, 1, 52.0, 13.0, 69.0, Horizon::Custom(angle));
            assert!(
                matches!(result, Err(Error::InvalidHorizon { .. })),
                "{angle}: {result:?}"
            );
        }
    }

    #[test]
    #[should_panic(expected = "ΔT must be finite")]
    fn test_non_finite_delta_t_panics() {
        let _ = sunrise_transit_set_utc(2023, 3, 1, 52.0, 13.0, f64::NAN, Horizon::default());
    }

    #[test]
    fn test_poles_are_polar() {
        let north = fractions(2023, 6, 21, 90.0, 0.0, 69.0, Horizon::SunriseSunset);
        let south = fractions(2023, 6, 21, -90.0, 0.0, 69.0, Horizon::SunriseSunset);
        assert!(north.is_all_day());
        assert!(south.is_all_night());
    }

    #[cfg(feature = "chrono")]
    mod civil {
        use super::*;
        use chrono::{FixedOffset, NaiveDate, Timelike};

        #[test]
        fn test_results_stay_within_civil_day() {
            let zone = FixedOffset::east_opt(12 * 3600).unwrap();
            let day = zone.with_ymd_and_hms(2015, 6, 17, 23, 59, 0).unwrap();
            let result =
                sunrise_transit_set(day, -36.8406, 174.74, 0.0, Horizon::SunriseSunset).unwrap();

            let date = NaiveDate::from_ymd_opt(2015, 6, 17).unwrap();
            assert_eq!(result.sunrise().unwrap().date_naive(), date);
            assert_eq!(result.transit().date_naive(), date);
            assert_eq!(result.sunset().unwrap().date_naive(), date);
            assert_eq!(result.transit().hour(), 12);
            assert_eq!(result.transit().offset(), &zone);
        }

        #[test]
        fn test_time_of_day_is_ignored() {
            let zone = FixedOffset::west_opt(7 * 3600).unwrap();
            let morning = zone.with_ymd_and_hms(2003, 10, 17, 0, 0, 0).unwrap();
            let evening = zone.with_ymd_and_hms(2003, 10, 17, 23, 30, 0).unwrap();

            assert_eq!(
                sunrise_transit_set(morning, 39.742476, -105.1786, 67.0, Horizon::SunriseSunset),
                sunrise_transit_set(evening, 39.742476, -105.1786, 67.0, Horizon::SunriseSunset)
            );
        }

        #[test]
        fn test_place_truncates_to_milliseconds() {
            let zone = FixedOffset::east_opt(0).unwrap();
            let civil_day = CivilDay::containing(&zone.with_ymd_and_hms(2020, 1, 1, 8, 0, 0).unwrap())
                .unwrap();

            let placed = civil_day.place(0.5 + 0.4 / SECONDS_PER_DAY / 1000.0).unwrap();
            assert_eq!(placed, zone.with_ymd_and_hms(2020, 1, 1, 12, 0, 0).unwrap());

            let wrapped = civil_day.place(-0.25).unwrap();
            assert_eq!(wrapped, zone.with_ymd_and_hms(2020, 1, 1, 18, 0, 0).unwrap());
        }

        #[test]
        fn test_nan_horizon_is_rejected_for_civil_days() {
            let day = FixedOffset::east_opt(0)
                .unwrap()
                .with_ymd_and_hms(2023, 3, 1, 12, 0, 0)
                .unwrap();

            let result = sunrise_transit_set(day, 52.0, 13.0, 69.0, Horizon::Custom(f64::NAN));
            assert!(
                matches!(result, Err(Error::InvalidHorizon { value }) if value.is_nan()),
                "{result:?}"
            );
        }
    }
}
