use anyhow::Result;
use owo_colors::OwoColorize;
use std::path::Path;

use crate::render;
use crate::store;

pub fn run(dir: &Path, verbose: bool) -> Result<()> {
    let mut records = store::list(dir);

    if records.is_empty() {
        println!(
            "{}",
            "No itineraries yet. Create your first travel plan with `tripdir new`".dimmed()
        );
        return Ok(());
    }

    records.sort_by_key(|r| r.date_time);

    // Group records by day and print
    let mut current_label: Option<String> = None;

    for record in &records {
        let label = render::date_label(record.date_time.date());

        if current_label.as_ref() != Some(&label) {
            if current_label.is_some() {
                println!();
            }
            println!("{}", label.bold());
            current_label = Some(label);
        }

        let id_tag = format!("[{}]", record.id);
        println!(
            "  {} {} → {}  {}",
            render::time_label(record.date_time),
            record.trip_name.bold(),
            record.destination,
            id_tag.dimmed()
        );

        if let Some(forecast) = &record.weather_forecast {
            println!("          {}", render::forecast_line(forecast).dimmed());
        }

        if verbose {
            if !record.activities.is_empty() {
                println!("          {}", record.activities);
            }
            let mut stamps = format!("Created {}", record.created_at.format("%Y-%m-%d %H:%M"));
            if let Some(updated) = record.updated_at {
                stamps.push_str(&format!(", updated {}", updated.format("%Y-%m-%d %H:%M")));
            }
            println!("          {}", stamps.dimmed());
        }
    }

    Ok(())
}
