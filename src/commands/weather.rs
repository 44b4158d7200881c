//! Standalone weather search: current conditions, forecast, and a clothing
//! recommendation for a location.

use anyhow::Result;
use owo_colors::OwoColorize;

use super::create_spinner;
use crate::weather::{clothing_advice, WeatherClient};

pub async fn run(client: Option<WeatherClient>, location: String) -> Result<()> {
    let Some(client) = client else {
        anyhow::bail!(
            "No weather API key configured.\n\n\
            Set the WEATHER_API_KEY environment variable, or add to \
            ~/.config/tripdir/config.toml:\n  \
            [weather]\n  \
            api_key = \"...\""
        );
    };

    let location = location.trim().to_string();
    if location.is_empty() {
        anyhow::bail!("Please enter a location");
    }

    let spinner = create_spinner(format!("Looking up {location}"));
    let result = client.fetch(&location).await;
    spinner.finish_and_clear();
    let data = result?;

    // --- Location ---
    let place = if data.location.region.is_empty() {
        format!("{}, {}", data.location.name, data.location.country)
    } else {
        format!(
            "{}, {}, {}",
            data.location.name, data.location.region, data.location.country
        )
    };
    println!("{}", place.bold());
    println!("{}", format!("Local time: {}", data.location.localtime).dimmed());
    println!();

    // --- Current conditions ---
    println!(
        "  {:.0}°C  {}  (feels like {:.0}°C)",
        data.current.temp_c, data.current.condition.text, data.current.feelslike_c
    );
    println!(
        "  Humidity {}%, wind {:.0} km/h",
        data.current.humidity, data.current.wind_kph
    );

    if let Some(first_day) = data.forecast.forecast_days.first() {
        println!(
            "  Sunrise {}, sunset {}",
            first_day.astro.sunrise, first_day.astro.sunset
        );
    }

    // --- Forecast ---
    if !data.forecast.forecast_days.is_empty() {
        println!();
        println!("{}", "Forecast".bold());
        for day in &data.forecast.forecast_days {
            println!(
                "  {}  {:>3.0}°C / {:>3.0}°C  {}",
                day.date.format("%a %b %-d"),
                day.day.maxtemp_c,
                day.day.mintemp_c,
                day.day.condition.text
            );
        }
    }

    println!();
    println!(
        "{}",
        clothing_advice(data.current.temp_c, &data.current.condition.text).dimmed()
    );

    Ok(())
}
