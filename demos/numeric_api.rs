//! Sun position and sunrise without chrono, e.g. for `no_std` targets.
//!
//! ```text
//! cargo run --example numeric_api --no-default-features --features libm
//! ```

use solar_ephemeris::time::{DeltaT, JulianDate};
use solar_ephemeris::{Horizon, SunriseResult, spa};

fn main() -> Result<(), solar_ephemeris::Error> {
    let (year, month, day) = (2024, 6, 21);
    let (latitude, longitude) = (48.21, 16.37); // Vienna
    let delta_t = DeltaT::estimate_from_date(year, month)?;

    for hour in [4, 8, 12, 16, 20] {
        let jd = JulianDate::from_utc(year, month, day, hour, 0, 0.0, delta_t)?;
        let position = spa::solar_position_from_julian(jd, latitude, longitude, 190.0, None)?;
        println!(
            "{hour:02}:00 UTC  azimuth {:7.3}°  elevation {:7.3}°",
            position.azimuth(),
            position.elevation_angle()
        );
    }

    let result =
        spa::sunrise_transit_set_utc(year, month, day, latitude, longitude, delta_t, Horizon::default())?;
    match result {
        SunriseResult::RegularDay {
            sunrise,
            transit,
            sunset,
        } => {
            for (label, time) in [("Sunrise", sunrise), ("Transit", transit), ("Sunset", sunset)] {
                let (h, m, s) = time.hms();
                println!("{label}: {h:02}:{m:02}:{s:04.1} UTC");
            }
        }
        SunriseResult::AllDay { .. } | SunriseResult::AllNight { .. } => {
            println!("No sunrise or sunset today");
        }
    }

    Ok(())
}
