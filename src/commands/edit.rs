use anyhow::Result;
use dialoguer::Input;
use owo_colors::OwoColorize;
use std::path::Path;

use super::{merge_forecast, require_field};
use crate::datetime::parse_when;
use crate::record::ItineraryDraft;
use crate::store;
use crate::weather::WeatherClient;

pub async fn run(
    dir: &Path,
    client: Option<WeatherClient>,
    id: String,
    trip_name: Option<String>,
    destination: Option<String>,
    when: Option<String>,
    activities: Option<String>,
) -> Result<()> {
    let existing = store::get(dir, &id)?;

    // With no field flags at all, prompt for everything, prefilled with the
    // current values. With flags, untouched fields carry over unchanged.
    let interactive =
        trip_name.is_none() && destination.is_none() && when.is_none() && activities.is_none();

    let trip_name = resolve_field(trip_name, interactive, "  Trip name", &existing.trip_name)?;
    let trip_name = require_field(trip_name, "Trip name")?;

    let destination = resolve_field(
        destination,
        interactive,
        "  Destination",
        &existing.destination,
    )?;
    let destination = require_field(destination, "Destination")?;

    let date_time = if let Some(w) = when {
        parse_when(&w)?
    } else if interactive {
        let current = existing.date_time.format("%Y-%m-%dT%H:%M").to_string();
        loop {
            let input: String = Input::new()
                .with_prompt("  When?")
                .default(current.clone())
                .interact_text()?;
            match parse_when(&input) {
                Ok(dt) => break dt,
                Err(e) => eprintln!("  {}", e.to_string().red()),
            }
        }
    } else {
        existing.date_time
    };

    let activities = resolve_field(activities, interactive, "  Activities", &existing.activities)?;

    // Forecast is recomputed on every edit; destination or date may have
    // changed and stale weather is worse than none.
    let weather_forecast = merge_forecast(client.as_ref(), &destination, date_time.date()).await;

    let draft = ItineraryDraft {
        trip_name,
        destination,
        date_time,
        activities,
        weather_forecast,
    };

    let record = store::update(dir, &id, draft)?;

    if interactive {
        println!();
    }
    println!("{}", format!("  Updated: {}", record.trip_name).green());

    Ok(())
}

fn resolve_field(
    flag: Option<String>,
    interactive: bool,
    prompt: &str,
    current: &str,
) -> Result<String> {
    match flag {
        Some(value) => Ok(value),
        None if interactive => Ok(Input::new()
            .with_prompt(prompt)
            .default(current.to_string())
            .interact_text()?),
        None => Ok(current.to_string()),
    }
}
