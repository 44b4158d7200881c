//! Month calendar view over the itinerary directory.
//!
//! Loads the full record set once per invocation; nothing here mutates
//! records or shares state with the other views.

use anyhow::{Context, Result};
use chrono::{Datelike, Local, NaiveDate};
use owo_colors::OwoColorize;
use std::collections::HashMap;
use std::path::Path;

use crate::record::Itinerary;
use crate::render;
use crate::store;

pub fn run(dir: &Path, month: Option<String>, day: Option<String>) -> Result<()> {
    let records = store::list(dir);

    if let Some(day) = day {
        let date = NaiveDate::parse_from_str(&day, "%Y-%m-%d")
            .with_context(|| format!("Could not parse day: \"{day}\" (expected YYYY-MM-DD)"))?;
        print_day_details(date, &records);
        return Ok(());
    }

    let first = match month {
        Some(m) => parse_month(&m)?,
        None => {
            let today = Local::now().date_naive();
            today.with_day(1).unwrap_or(today)
        }
    };

    print_month(first, &records);
    Ok(())
}

/// Parse `YYYY-MM` into the first day of that month.
fn parse_month(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{input}-01"), "%Y-%m-%d")
        .with_context(|| format!("Could not parse month: \"{input}\" (expected YYYY-MM)"))
}

/// Records grouped by calendar day, using exact year/month/day equality.
fn records_by_day(records: &[Itinerary]) -> HashMap<NaiveDate, Vec<&Itinerary>> {
    let mut by_day: HashMap<NaiveDate, Vec<&Itinerary>> = HashMap::new();
    for record in records {
        by_day.entry(record.date_time.date()).or_default().push(record);
    }
    by_day
}

/// Lay a month out as weeks of optional day numbers, Sunday first.
/// Leading `None` cells pad the first week to the right weekday.
fn month_weeks(first: NaiveDate) -> Vec<[Option<u32>; 7]> {
    let mut weeks = Vec::new();
    let mut week = [None; 7];
    let mut slot = first.weekday().num_days_from_sunday() as usize;

    for day in 1..=days_in_month(first) {
        week[slot] = Some(day);
        slot += 1;
        if slot == 7 {
            weeks.push(week);
            week = [None; 7];
            slot = 0;
        }
    }
    if week.iter().any(|d| d.is_some()) {
        weeks.push(week);
    }

    weeks
}

fn days_in_month(first: NaiveDate) -> u32 {
    match first.month() {
        12 => NaiveDate::from_ymd_opt(first.year() + 1, 1, 1),
        m => NaiveDate::from_ymd_opt(first.year(), m + 1, 1),
    }
    .map(|next| next.signed_duration_since(first).num_days() as u32)
    .unwrap_or(31)
}

fn print_month(first: NaiveDate, records: &[Itinerary]) {
    let by_day = records_by_day(records);
    let today = Local::now().date_naive();

    println!("{}", first.format("%B %Y").to_string().bold());
    println!(" Sun  Mon  Tue  Wed  Thu  Fri  Sat");

    for week in month_weeks(first) {
        let mut line = String::new();
        for cell in week {
            match cell {
                Some(day) => {
                    let date = first.with_day(day);
                    let count = date
                        .as_ref()
                        .and_then(|d| by_day.get(d))
                        .map(|v| v.len())
                        .unwrap_or(0);

                    let marker = if count > 0 { '*' } else { ' ' };
                    let cell_text = format!("{day:>4}{marker}");

                    if date == Some(today) {
                        line.push_str(&cell_text.green().bold().to_string());
                    } else if count > 0 {
                        line.push_str(&cell_text.bold().to_string());
                    } else {
                        line.push_str(&cell_text);
                    }
                }
                None => line.push_str("     "),
            }
        }
        println!("{line}");
    }

    let total: usize = by_day
        .iter()
        .filter(|(date, _)| date.year() == first.year() && date.month() == first.month())
        .map(|(_, v)| v.len())
        .sum();
    println!();
    println!(
        "{}",
        format!(
            "{} {} this month (* marks days with trips)",
            total,
            if total == 1 { "trip" } else { "trips" }
        )
        .dimmed()
    );
}

/// Detail panel for a single day, in list order.
fn print_day_details(date: NaiveDate, records: &[Itinerary]) {
    let day_records: Vec<&Itinerary> = records
        .iter()
        .filter(|r| r.date_time.date() == date)
        .collect();

    println!("{}", render::date_label(date).bold());

    if day_records.is_empty() {
        println!("{}", "  No itineraries for this date".dimmed());
        return;
    }

    for record in day_records {
        println!(
            "  {} {}  {}",
            render::time_label(record.date_time),
            record.trip_name.bold(),
            format!("({})", record.destination).dimmed()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record_on(dt: &str, name: &str) -> Itinerary {
        Itinerary {
            id: format!("1_{name}"),
            trip_name: name.to_string(),
            destination: "Paris".to_string(),
            date_time: chrono::NaiveDateTime::parse_from_str(dt, "%Y-%m-%dT%H:%M").unwrap(),
            activities: String::new(),
            created_at: Utc::now(),
            updated_at: None,
            weather_forecast: None,
        }
    }

    #[test]
    fn june_2024_starts_on_saturday() {
        let first = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let weeks = month_weeks(first);

        assert_eq!(weeks[0], [None, None, None, None, None, None, Some(1)]);
        assert_eq!(weeks.last().unwrap()[0], Some(30));
    }

    #[test]
    fn leap_february_has_29_days() {
        let first = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        assert_eq!(days_in_month(first), 29);
    }

    #[test]
    fn december_has_31_days() {
        let first = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap();
        assert_eq!(days_in_month(first), 31);
    }

    #[test]
    fn same_day_records_group_under_one_date() {
        let records = vec![
            record_on("2024-06-01T09:00", "Morning"),
            record_on("2024-06-01T18:30", "Evening"),
            record_on("2024-06-02T09:00", "Other"),
        ];
        let by_day = records_by_day(&records);

        let june_first = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(by_day[&june_first].len(), 2);
        assert_eq!(by_day.len(), 2);
    }

    #[test]
    fn parse_month_accepts_yyyy_mm() {
        assert_eq!(
            parse_month("2024-06").unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
        );
        assert!(parse_month("June").is_err());
    }
}
