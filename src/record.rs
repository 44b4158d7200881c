//! Itinerary record types.
//!
//! An `Itinerary` is the unit of storage: one record per JSON file in the
//! itinerary directory. Drafts carry the submitted form fields; the store
//! assigns ids and timestamps.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// A planned trip, stored as one pretty-printed JSON file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Itinerary {
    /// Unique id, assigned at creation. Doubles as the storage key.
    pub id: String,
    pub trip_name: String,
    /// Where the trip goes; also the weather lookup query.
    pub destination: String,
    /// Scheduled date and time of the trip.
    #[serde(with = "datetime_format")]
    pub date_time: NaiveDateTime,
    /// Free-text notes about planned activities.
    pub activities: String,
    /// Set once when the record is first saved, never mutated.
    pub created_at: DateTime<Utc>,
    /// Refreshed on every update; absent until the first edit.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// Present only when a forecast lookup succeeded at save/update time.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub weather_forecast: Option<ForecastSummary>,
}

/// The slice of a forecast day that gets embedded in a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastSummary {
    pub condition: String,
    pub icon: String,
    pub max_temp: f64,
    pub min_temp: f64,
}

/// Submitted form fields for a create or edit.
#[derive(Debug, Clone)]
pub struct ItineraryDraft {
    pub trip_name: String,
    pub destination: String,
    pub date_time: NaiveDateTime,
    pub activities: String,
    pub weather_forecast: Option<ForecastSummary>,
}

/// `dateTime` is stored as `YYYY-MM-DDTHH:MM`, matching the combined
/// date+time form value. A trailing `:SS` is accepted on read.
mod datetime_format {
    use chrono::NaiveDateTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%dT%H:%M";

    pub fn serialize<S: Serializer>(dt: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&dt.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<NaiveDateTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&s, FORMAT)
            .or_else(|_| NaiveDateTime::parse_from_str(&s, "%Y-%m-%dT%H:%M:%S"))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn make_record() -> Itinerary {
        Itinerary {
            id: "1717232400000_Paris_Trip".to_string(),
            trip_name: "Paris Trip".to_string(),
            destination: "Paris".to_string(),
            date_time: NaiveDate::from_ymd_opt(2024, 6, 1)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
            activities: "Museum".to_string(),
            created_at: Utc::now(),
            updated_at: None,
            weather_forecast: None,
        }
    }

    #[test]
    fn serializes_camel_case_fields() {
        let json = serde_json::to_value(make_record()).unwrap();
        assert!(json.get("tripName").is_some());
        assert!(json.get("dateTime").is_some());
        assert!(json.get("createdAt").is_some());
        assert_eq!(json["dateTime"], "2024-06-01T09:00");
    }

    #[test]
    fn absent_forecast_is_omitted_not_null() {
        let json = serde_json::to_value(make_record()).unwrap();
        assert!(json.get("weatherForecast").is_none());
        assert!(json.get("updatedAt").is_none());
    }

    #[test]
    fn present_forecast_round_trips() {
        let mut record = make_record();
        record.weather_forecast = Some(ForecastSummary {
            condition: "Sunny".to_string(),
            icon: "//cdn.weatherapi.com/sunny.png".to_string(),
            max_temp: 24.5,
            min_temp: 13.0,
        });
        let json = serde_json::to_string(&record).unwrap();
        let parsed: Itinerary = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.weather_forecast, record.weather_forecast);
        assert!(json.contains("maxTemp"));
    }

    #[test]
    fn date_time_accepts_trailing_seconds() {
        let json = serde_json::to_string(&make_record()).unwrap();
        let with_seconds = json.replace("2024-06-01T09:00", "2024-06-01T09:00:00");
        let parsed: Itinerary = serde_json::from_str(&with_seconds).unwrap();
        assert_eq!(parsed.date_time, make_record().date_time);
    }
}
