//! Sunrise, sunset and twilight across latitudes, in each city's own time zone.

use chrono::{DateTime, TimeZone};
use chrono_tz::Tz;
use solar_ephemeris::{Horizon, SunriseResult, spa, time::DeltaT};

struct City {
    name: &'static str,
    latitude: f64,
    longitude: f64,
    zone: Tz,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cities = [
        City {
            name: "Longyearbyen, Svalbard",
            latitude: 78.22,
            longitude: 15.65,
            zone: chrono_tz::Arctic::Longyearbyen,
        },
        City {
            name: "Anchorage, Alaska",
            latitude: 61.216667,
            longitude: -149.866667,
            zone: chrono_tz::America::Anchorage,
        },
        City {
            name: "Auckland, New Zealand",
            latitude: -36.840556,
            longitude: 174.74,
            zone: chrono_tz::Pacific::Auckland,
        },
        City {
            name: "Singapore",
            latitude: 1.283333,
            longitude: 103.833333,
            zone: chrono_tz::Asia::Singapore,
        },
    ];

    let delta_t = DeltaT::estimate_from_date(2023, 12)?;

    for city in &cities {
        let day = city.zone.with_ymd_and_hms(2023, 12, 21, 12, 0, 0).unwrap();
        println!("=== {} ({:.2}°, {:.2}°) ===", city.name, city.latitude, city.longitude);
        println!("{}", day.format("%A, %B %-d %Y"));

        let results = spa::sunrise_transit_set_batch(
            day,
            city.latitude,
            city.longitude,
            delta_t,
            Horizon::PRESETS,
        )?;
        for horizon in Horizon::PRESETS {
            print_result(label(horizon), &results[&horizon]);
        }
        println!();
    }

    Ok(())
}

const fn label(horizon: Horizon) -> &'static str {
    match horizon {
        Horizon::SunriseSunset => "Sunrise/Sunset",
        Horizon::CivilTwilight => "Civil twilight",
        Horizon::NauticalTwilight => "Nautical twilight",
        Horizon::AstronomicalTwilight => "Astronomical twilight",
        Horizon::Custom(_) => "Custom",
    }
}

fn print_result(label: &str, result: &SunriseResult<DateTime<Tz>>) {
    match result {
        SunriseResult::RegularDay {
            sunrise,
            transit,
            sunset,
        } => println!(
            "  {label:<22} {} - {} - {}",
            sunrise.format("%H:%M:%S"),
            transit.format("%H:%M:%S"),
            sunset.format("%H:%M:%S %Z")
        ),
        SunriseResult::AllDay { transit } => {
            println!("  {label:<22} sun up all day, transit {}", transit.format("%H:%M:%S %Z"));
        }
        SunriseResult::AllNight { transit } => {
            println!("  {label:<22} sun down all day, transit {}", transit.format("%H:%M:%S %Z"));
        }
    }
}
