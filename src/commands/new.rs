use anyhow::Result;
use dialoguer::Input;
use owo_colors::OwoColorize;
use std::path::Path;

use super::{merge_forecast, prompt_with_retry, require_field};
use crate::datetime::parse_when;
use crate::record::ItineraryDraft;
use crate::store;
use crate::weather::WeatherClient;

pub async fn run(
    dir: &Path,
    client: Option<WeatherClient>,
    trip_name: Option<String>,
    destination: Option<String>,
    when: Option<String>,
    activities: Option<String>,
) -> Result<()> {
    let interactive = trip_name.is_none() || destination.is_none() || when.is_none();

    // --- Trip name ---
    let trip_name = match trip_name {
        Some(name) => require_field(name, "Trip name")?,
        None => {
            let name: String = Input::new().with_prompt("  Trip name").interact_text()?;
            require_field(name, "Trip name")?
        }
    };

    // --- Destination ---
    let destination = match destination {
        Some(dest) => require_field(dest, "Destination")?,
        None => {
            let dest: String = Input::new().with_prompt("  Destination").interact_text()?;
            require_field(dest, "Destination")?
        }
    };

    // --- When ---
    let date_time = if let Some(w) = when {
        parse_when(&w)?
    } else {
        prompt_with_retry("  When?", parse_when)?
    };

    // --- Activities ---
    let activities = match activities {
        Some(a) => a,
        None if interactive => Input::<String>::new()
            .with_prompt("  Activities (skip)")
            .default(String::new())
            .show_default(false)
            .interact_text()?,
        None => String::new(),
    };

    let weather_forecast = merge_forecast(client.as_ref(), &destination, date_time.date()).await;
    let got_forecast = weather_forecast.is_some();

    let draft = ItineraryDraft {
        trip_name,
        destination,
        date_time,
        activities,
        weather_forecast,
    };

    let record = store::create(dir, draft)?;

    if interactive {
        println!();
    }
    println!("{}", format!("  Created: {}", record.trip_name).green());
    println!("  {}", format!("id: {}", record.id).dimmed());
    if !got_forecast {
        println!("{}", "  No forecast available, saved without weather".dimmed());
    }

    Ok(())
}
