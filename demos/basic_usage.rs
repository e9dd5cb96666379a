//! Basic solar position calculation.

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use solar_ephemeris::{AtmosphericConditions, spa, time::DeltaT};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Noon Pacific Time and the same instant in UTC
    let datetime_fixed = "2023-06-21T12:00:00-07:00".parse::<DateTime<FixedOffset>>()?;
    let datetime_utc = Utc.with_ymd_and_hms(2023, 6, 21, 19, 0, 0).unwrap();
    let latitude = 37.7749; // San Francisco
    let longitude = -122.4194;

    let delta_t = DeltaT::estimate_from_date_like(&datetime_fixed)?;
    let atmosphere = Some(AtmosphericConditions::new(1013.25, 15.0));

    let position_fixed = spa::solar_position(
        datetime_fixed,
        latitude,
        longitude,
        0.0,     // elevation (m)
        delta_t, // ΔT (s)
        atmosphere,
    )?;
    let position_utc =
        spa::solar_position(datetime_utc, latitude, longitude, 0.0, delta_t, atmosphere)?;

    println!("Solar position for San Francisco on June 21, 2023 at noon Pacific Time");
    println!("(ΔT estimated as {delta_t:.1} s):");
    println!("  Azimuth: {:.3}°", position_fixed.azimuth());
    println!("  Elevation: {:.3}°", position_fixed.elevation_angle());
    println!("  Zenith angle: {:.3}°", position_fixed.zenith_angle());
    println!(
        "  Same result from the UTC instant: {}",
        position_fixed == position_utc
    );

    let unrefracted =
        spa::solar_position(datetime_fixed, latitude, longitude, 0.0, delta_t, None)?;
    println!(
        "  Refraction lifts the sun by {:.4}°",
        unrefracted.zenith_angle() - position_fixed.zenith_angle()
    );

    if position_fixed.is_sun_up() {
        println!("  Sun is above the horizon");
    } else {
        println!("  Sun is below the horizon");
    }

    Ok(())
}
