//! Compare SPA and Grena3 for speed and accuracy.

use chrono::{DateTime, Duration, Utc};
use solar_ephemeris::{Algorithm, GeoCoordinate, PositionAlgorithm, time::DeltaT, time::JulianDate};
use std::time::Instant;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let start = "2023-06-21T00:00:00Z".parse::<DateTime<Utc>>()?;
    let observer = GeoCoordinate::new(37.7749, -122.4194)?; // San Francisco
    let delta_t = DeltaT::estimate_from_date_like(&start)?;

    let instants: Vec<JulianDate> = (0..24 * 365)
        .map(|hour| JulianDate::from_datetime(&(start + Duration::hours(hour)), delta_t))
        .collect::<Result<_, _>>()?;

    println!("Hourly positions for San Francisco over one year ({} instants)", instants.len());
    println!();

    let mut positions = Vec::new();
    for algorithm in [Algorithm::Spa, Algorithm::Grena3] {
        let timer = Instant::now();
        let computed: Vec<_> = instants
            .iter()
            .map(|&jd| algorithm.solar_position(jd, observer, 0.0, None))
            .collect();
        println!("{algorithm:?}: {:?}", timer.elapsed());
        positions.push(computed);
    }

    let (mut max_zenith, mut max_azimuth) = (0.0_f64, 0.0_f64);
    for (spa, grena) in positions[0].iter().zip(&positions[1]) {
        max_zenith = max_zenith.max((spa.zenith_angle() - grena.zenith_angle()).abs());
        if spa.zenith_angle() > 10.0 {
            let difference = (spa.azimuth() - grena.azimuth()).abs();
            max_azimuth = max_azimuth.max(difference.min(360.0 - difference));
        }
    }

    println!();
    println!("Largest differences:");
    println!("  Zenith angle: {max_zenith:.5}°");
    println!("  Azimuth: {max_azimuth:.5}°");
    println!();
    println!("Grena3 is designed for the years 2010-2110 with about 0.01° accuracy.");
    println!("SPA covers the years -2000 to 6000 with about 0.0003° accuracy.");

    Ok(())
}
