pub mod calendar;
pub mod delete;
pub mod edit;
pub mod list;
pub mod new;
pub mod weather;

use anyhow::Result;
use chrono::NaiveDate;
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;

use crate::record::ForecastSummary;
use crate::weather::{lookup_summary, WeatherClient};

/// Spinner shown while a network lookup is in flight.
fn create_spinner(message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["-", "\\", "|", "/"])
            .template("{msg} {spinner}")
            .unwrap(),
    );
    spinner.set_message(message);
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));
    spinner
}

/// Best-effort forecast merge for a record about to be saved.
///
/// `None` (no client configured, lookup failed, no day matched) means the
/// record is saved without a forecast; it never blocks the save.
async fn merge_forecast(
    client: Option<&WeatherClient>,
    destination: &str,
    date: NaiveDate,
) -> Option<ForecastSummary> {
    let client = client?;

    let spinner = create_spinner("  Fetching forecast".to_string());
    let summary = lookup_summary(client, destination, date).await;
    spinner.finish_and_clear();

    summary
}

/// Prompt the user with retry on parse errors.
fn prompt_with_retry<T, F>(prompt: &str, parse: F) -> Result<T>
where
    F: Fn(&str) -> Result<T>,
{
    loop {
        let input: String = Input::new().with_prompt(prompt).interact_text()?;
        match parse(&input) {
            Ok(result) => return Ok(result),
            Err(e) => {
                eprintln!("  {}", e.to_string().red());
            }
        }
    }
}

/// Reject blank input for required form fields before anything touches
/// storage.
fn require_field(value: String, field: &str) -> Result<String> {
    if value.trim().is_empty() {
        anyhow::bail!("{} is required", field);
    }
    Ok(value)
}
