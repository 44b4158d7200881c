//! Create record files in the itinerary directory.

use super::{ensure_dir, path_for, write_record, StoreResult};
use crate::record::{Itinerary, ItineraryDraft};
use chrono::Utc;
use std::path::Path;

/// Create a new record file in the itinerary directory.
///
/// Assigns a fresh id from the creation timestamp plus the sanitized trip
/// name, stamps `createdAt`, and writes the record as pretty-printed JSON.
///
/// Returns the stored record, including its assigned id.
pub fn create(dir: &Path, draft: ItineraryDraft) -> StoreResult<Itinerary> {
    ensure_dir(dir)?;

    let now = Utc::now();
    let id = unique_id(dir, now.timestamp_millis(), &draft.trip_name);

    let record = Itinerary {
        id,
        trip_name: draft.trip_name,
        destination: draft.destination,
        date_time: draft.date_time,
        activities: draft.activities,
        created_at: now,
        updated_at: None,
        weather_forecast: draft.weather_forecast,
    };

    write_record(dir, &record)?;
    Ok(record)
}

/// Replace anything that isn't alphanumeric with an underscore, so the id
/// stays safe to use as a filename.
pub fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect()
}

/// Build `{millis}_{sanitized name}`, adding a -2, -3… suffix if a record
/// with that id already exists.
fn unique_id(dir: &Path, millis: i64, trip_name: &str) -> String {
    let base = format!("{}_{}", millis, sanitize(trip_name));

    if !path_for(dir, &base).exists() {
        return base;
    }

    let mut n = 2;
    loop {
        let suffixed = format!("{base}-{n}");
        if !path_for(dir, &suffixed).exists() {
            return suffixed;
        }
        n += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn make_draft() -> ItineraryDraft {
        ItineraryDraft {
            trip_name: "Paris Trip".to_string(),
            destination: "Paris".to_string(),
            date_time: NaiveDate::from_ymd_opt(2024, 6, 1)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
            activities: "Museum".to_string(),
            weather_forecast: None,
        }
    }

    #[test]
    fn test_sanitize() {
        assert_eq!(sanitize("Paris Trip"), "Paris_Trip");
        assert_eq!(sanitize("Tokyo 2026!"), "Tokyo_2026_");
        assert_eq!(sanitize("côte d'azur"), "côte_d_azur");
        assert_eq!(sanitize("plain"), "plain");
    }

    #[test]
    fn create_assigns_id_and_created_at() {
        let tmp = TempDir::new().unwrap();
        let record = create(tmp.path(), make_draft()).unwrap();

        assert!(record.id.ends_with("_Paris_Trip"));
        assert!(record.updated_at.is_none());
        assert!(record.weather_forecast.is_none());
        assert!(tmp.path().join(format!("{}.json", record.id)).exists());
    }

    #[test]
    fn create_writes_pretty_json_without_forecast_key() {
        let tmp = TempDir::new().unwrap();
        let record = create(tmp.path(), make_draft()).unwrap();

        let content =
            std::fs::read_to_string(tmp.path().join(format!("{}.json", record.id))).unwrap();
        assert!(content.contains('\n'));
        assert!(content.contains("\"tripName\": \"Paris Trip\""));
        assert!(!content.contains("weatherForecast"));
    }

    #[test]
    fn create_works_when_dir_is_missing() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("itineraries");
        let record = create(&nested, make_draft()).unwrap();
        assert!(nested.join(format!("{}.json", record.id)).exists());
    }

    #[test]
    fn unique_id_suffixes_on_collision() {
        let tmp = TempDir::new().unwrap();
        let base = format!("{}_{}", 1717232400000i64, "Paris_Trip");
        std::fs::write(tmp.path().join(format!("{base}.json")), "{}").unwrap();
        std::fs::write(tmp.path().join(format!("{base}-2.json")), "{}").unwrap();

        let id = unique_id(tmp.path(), 1717232400000, "Paris Trip");
        assert_eq!(id, format!("{base}-3"));
    }

    #[test]
    fn created_ids_are_unique() {
        let tmp = TempDir::new().unwrap();
        let a = create(tmp.path(), make_draft()).unwrap();
        let b = create(tmp.path(), make_draft()).unwrap();
        assert_ne!(a.id, b.id);
    }
}
