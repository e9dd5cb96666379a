//! Astronomical time scale: Julian dates and ΔT.
//!
//! [`JulianDate`] is the instant consumed by both position engines. ΔT is never
//! computed implicitly; callers pass it in, optionally estimated with [`DeltaT`].

#![allow(clippy::unreadable_literal)]

use crate::math::{floor, polynomial};
use crate::{Error, Result};
#[cfg(feature = "chrono")]
use chrono::{Datelike, TimeZone, Timelike};

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian Date of the J2000.0 epoch, 2000-01-01 12:00 TT.
const J2000: f64 = 2_451_545.0;

const DAYS_PER_CENTURY: f64 = 36_525.0;

/// First Julian Date of the Gregorian calendar (1582-10-15).
const GREGORIAN_START: f64 = 2_299_160.0;

/// An instant on the Julian Date scale (UT) together with its ΔT.
///
/// All ephemeris quantities (JDE, JC, JCE, JME) are derived on demand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JulianDate {
    jd: f64,
    delta_t: f64,
}

impl JulianDate {
    /// Wraps an already known Julian Date (UT) and ΔT in seconds.
    #[must_use]
    pub const fn new(jd: f64, delta_t: f64) -> Self {
        Self { jd, delta_t }
    }

    /// Converts any timezone-aware `DateTime` (via UTC).
    ///
    /// # Errors
    /// Returns [`Error::InvalidDateTime`] if the calendar fields cannot be converted.
    #[cfg(feature = "chrono")]
    pub fn from_datetime<Tz: TimeZone>(
        datetime: &chrono::DateTime<Tz>,
        delta_t: f64,
    ) -> Result<Self> {
        let utc = datetime.naive_utc();
        Self::from_utc(
            utc.year(),
            utc.month(),
            utc.day(),
            utc.hour(),
            utc.minute(),
            f64::from(utc.second()) + f64::from(utc.nanosecond()) / 1e9,
            delta_t,
        )
    }

    /// Builds a Julian date from UTC calendar fields.
    ///
    /// Dates before 1582-10-15 are interpreted in the Julian calendar.
    ///
    /// # Errors
    /// Returns [`Error::InvalidDateTime`] for out-of-range fields, days that do not
    /// exist in the month, and the dates skipped by the Gregorian reform.
    ///
    /// # Example
    /// ```
    /// # use solar_ephemeris::time::JulianDate;
    /// let jd = JulianDate::from_utc(2000, 1, 1, 12, 0, 0.0, 0.0).unwrap();
    /// assert_eq!(jd.julian_date(), 2_451_545.0);
    /// ```
    pub fn from_utc(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
        delta_t: f64,
    ) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::invalid_datetime("month must be between 1 and 12"));
        }
        if day == 0 || day > days_in_month(year, month) {
            return Err(Error::invalid_datetime("day is out of range for month"));
        }
        if year == 1582 && month == 10 && (5..=14).contains(&day) {
            return Err(Error::invalid_datetime(
                "1582-10-05 through 1582-10-14 do not exist in the Gregorian calendar",
            ));
        }
        if hour > 23 {
            return Err(Error::invalid_datetime("hour must be between 0 and 23"));
        }
        if minute > 59 {
            return Err(Error::invalid_datetime("minute must be between 0 and 59"));
        }
        // leap seconds (up to 61) pass through, as chrono may report them
        if !(0.0..61.0).contains(&second) {
            return Err(Error::invalid_datetime("second must be in [0, 61)"));
        }

        Ok(Self::new(
            julian_day_number(year, month, day, hour, minute, second),
            delta_t,
        ))
    }

    /// Julian Date (UT).
    #[must_use]
    pub const fn julian_date(&self) -> f64 {
        self.jd
    }

    /// ΔT = TT − UT in seconds.
    #[must_use]
    pub const fn delta_t(&self) -> f64 {
        self.delta_t
    }

    /// Julian Ephemeris Day, `JD + ΔT / 86400`.
    #[must_use]
    pub fn julian_ephemeris_day(&self) -> f64 {
        self.jd + self.delta_t / SECONDS_PER_DAY
    }

    /// Julian centuries (UT) since J2000.0.
    #[must_use]
    pub fn julian_century(&self) -> f64 {
        (self.jd - J2000) / DAYS_PER_CENTURY
    }

    /// Julian ephemeris centuries since J2000.0.
    #[must_use]
    pub fn julian_ephemeris_century(&self) -> f64 {
        (self.julian_ephemeris_day() - J2000) / DAYS_PER_CENTURY
    }

    /// Julian ephemeris millennia since J2000.0.
    #[must_use]
    pub fn julian_ephemeris_millennium(&self) -> f64 {
        self.julian_ephemeris_century() / 10.0
    }

    /// Same ΔT, shifted by a number of days.
    #[must_use]
    pub(crate) fn plus_days(self, days: f64) -> Self {
        Self::new(self.jd + days, self.delta_t)
    }
}

/// Meeus, Astronomical Algorithms ch. 7, with the Gregorian correction from
/// 1582-10-15 on.
fn julian_day_number(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> f64 {
    let (y, m) = if month < 3 {
        (f64::from(year - 1), f64::from(month + 12))
    } else {
        (f64::from(year), f64::from(month))
    };

    let day_fraction =
        f64::from(day) + (f64::from(hour) + (f64::from(minute) + second / 60.0) / 60.0) / 24.0;
    let jd = floor(365.25 * (y + 4716.0)) + floor(30.6001 * (m + 1.0)) + day_fraction - 1524.5;

    if jd > GREGORIAN_START {
        let century = floor(y / 100.0);
        jd + 2.0 - century + floor(century / 4.0)
    } else {
        jd
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let gregorian = year > 1582 || (year == 1582 && month > 10);
    let leap = if gregorian {
        (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
    } else {
        year % 4 == 0
    };
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if leap => 29,
        2 => 28,
        _ => 31,
    }
}

/// One piece of the Espenak & Meeus ΔT fit: valid below `until`, evaluated as a
/// polynomial in `(year - origin) / scale`.
struct DeltaTSegment {
    until: f64,
    origin: f64,
    scale: f64,
    coefficients: &'static [f64],
}

const DELTA_T_SEGMENTS: &[DeltaTSegment] = &[
    DeltaTSegment {
        until: -500.0,
        origin: 1820.0,
        scale: 100.0,
        coefficients: &[-20.0, 0.0, 32.0],
    },
    DeltaTSegment {
        until: 500.0,
        origin: 0.0,
        scale: 100.0,
        coefficients: &[
            10583.6,
            -1014.41,
            33.78311,
            -5.952053,
            -0.1798452,
            0.022174192,
            0.0090316521,
        ],
    },
    DeltaTSegment {
        until: 1600.0,
        origin: 1000.0,
        scale: 100.0,
        coefficients: &[
            1574.2,
            -556.01,
            71.23472,
            0.319781,
            -0.8503463,
            -0.005050998,
            0.0083572073,
        ],
    },
    DeltaTSegment {
        until: 1700.0,
        origin: 1600.0,
        scale: 1.0,
        coefficients: &[120.0, -0.9808, -0.01532, 1.0 / 7129.0],
    },
    DeltaTSegment {
        until: 1800.0,
        origin: 1700.0,
        scale: 1.0,
        coefficients: &[8.83, 0.1603, -0.0059285, 0.00013336, -1.0 / 1_174_000.0],
    },
    DeltaTSegment {
        until: 1860.0,
        origin: 1800.0,
        scale: 1.0,
        coefficients: &[
            13.72,
            -0.332447,
            0.0068612,
            0.0041116,
            -0.00037436,
            0.0000121272,
            -0.0000001699,
            0.000000000875,
        ],
    },
    DeltaTSegment {
        until: 1900.0,
        origin: 1860.0,
        scale: 1.0,
        coefficients: &[
            7.62,
            0.5737,
            -0.251754,
            0.01680668,
            -0.0004473624,
            1.0 / 233_174.0,
        ],
    },
    DeltaTSegment {
        until: 1920.0,
        origin: 1900.0,
        scale: 1.0,
        coefficients: &[-2.79, 1.494119, -0.0598939, 0.0061966, -0.000197],
    },
    DeltaTSegment {
        until: 1941.0,
        origin: 1920.0,
        scale: 1.0,
        coefficients: &[21.20, 0.84493, -0.076100, 0.0020936],
    },
    DeltaTSegment {
        until: 1961.0,
        origin: 1950.0,
        scale: 1.0,
        coefficients: &[29.07, 0.407, -1.0 / 233.0, 1.0 / 2547.0],
    },
    DeltaTSegment {
        until: 1986.0,
        origin: 1975.0,
        scale: 1.0,
        coefficients: &[45.45, 1.067, -1.0 / 260.0, -1.0 / 718.0],
    },
    DeltaTSegment {
        until: 2005.0,
        origin: 2000.0,
        scale: 1.0,
        coefficients: &[
            63.86,
            0.3345,
            -0.060374,
            0.0017275,
            0.000651814,
            0.00002373599,
        ],
    },
    DeltaTSegment {
        until: 2015.0,
        origin: 2005.0,
        scale: 1.0,
        coefficients: &[64.69, 0.2930],
    },
];

/// Segment used from 2015 up to and including the year 3000.
const DELTA_T_FINAL: DeltaTSegment = DeltaTSegment {
    until: 3000.0,
    origin: 2015.0,
    scale: 1.0,
    coefficients: &[67.62, 0.3645, 0.0039755],
};

/// ΔT estimator after Espenak & Meeus (polynomial fits, 2014 update).
///
/// See <https://www.eclipsewise.com/help/deltatpoly2014.html>.
pub struct DeltaT;

impl DeltaT {
    /// Estimates ΔT in seconds for a decimal year.
    ///
    /// # Errors
    /// Returns [`Error::DeltaTOutOfRange`] beyond the year 3000 or for a non-finite year.
    ///
    /// # Example
    /// ```
    /// # use solar_ephemeris::time::DeltaT;
    /// let delta_t = DeltaT::estimate(2024.5).unwrap();
    /// assert!(delta_t > 60.0 && delta_t < 80.0);
    /// ```
    pub fn estimate(decimal_year: f64) -> Result<f64> {
        if !decimal_year.is_finite() || decimal_year > DELTA_T_FINAL.until {
            return Err(Error::DeltaTOutOfRange { year: decimal_year });
        }

        let segment = DELTA_T_SEGMENTS
            .iter()
            .find(|segment| decimal_year < segment.until)
            .unwrap_or(&DELTA_T_FINAL);

        Ok(polynomial(
            segment.coefficients,
            (decimal_year - segment.origin) / segment.scale,
        ))
    }

    /// Estimates ΔT for the middle of a calendar month, `year + (month - 0.5) / 12`.
    ///
    /// # Errors
    /// Returns an error for a month outside 1..=12 or a year without estimate.
    pub fn estimate_from_date(year: i32, month: u32) -> Result<f64> {
        if !(1..=12).contains(&month) {
            return Err(Error::invalid_datetime("month must be between 1 and 12"));
        }
        Self::estimate(f64::from(year) + (f64::from(month) - 0.5) / 12.0)
    }

    /// Estimates ΔT from anything carrying a calendar date (`DateTime`, `NaiveDate`, ...).
    ///
    /// # Errors
    /// Returns an error for years without estimate.
    ///
    /// # Example
    /// ```
    /// # use solar_ephemeris::time::DeltaT;
    /// use chrono::NaiveDate;
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
    /// assert_eq!(
    ///     DeltaT::estimate_from_date_like(&date).unwrap(),
    ///     DeltaT::estimate_from_date(2024, 6).unwrap()
    /// );
    /// ```
    #[cfg(feature = "chrono")]
    pub fn estimate_from_date_like<D: Datelike>(date: &D) -> Result<f64> {
        Self::estimate_from_date(date.year(), date.month())
    }
}
