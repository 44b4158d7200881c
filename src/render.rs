//! Terminal rendering helpers shared by the list and calendar views.

use crate::record::ForecastSummary;
use chrono::{Local, NaiveDate, NaiveDateTime};

/// Format a date as a human-readable label (e.g. "Today", "Tomorrow",
/// "Wed Feb 25 2026").
pub fn date_label(date: NaiveDate) -> String {
    let today = Local::now().date_naive();

    match (date - today).num_days() {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => date.format("%a %b %-d %Y").to_string(),
    }
}

/// Format the time portion of a record, right-aligned (e.g. "  09:00").
pub fn time_label(dt: NaiveDateTime) -> String {
    format!("{:>7}", dt.format("%H:%M"))
}

/// One-line forecast summary (e.g. "Sunny, high 24°C / low 13°C").
pub fn forecast_line(forecast: &ForecastSummary) -> String {
    format!(
        "{}, high {:.0}°C / low {:.0}°C",
        forecast.condition, forecast.max_temp, forecast.min_temp
    )
}
