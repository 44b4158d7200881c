//! HTTP client for the weatherapi.com forecast endpoint.

use super::types::{ForecastDay, WeatherResponse};
use crate::record::ForecastSummary;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::debug;

const BASE_URL: &str = "https://api.weatherapi.com/v1";

/// How many forecast days to request. weatherapi.com caps free-tier
/// requests at three.
const FORECAST_DAYS: &str = "3";

pub struct WeatherClient {
    http: reqwest::Client,
    api_key: String,
}

impl WeatherClient {
    pub fn new(api_key: String) -> Self {
        WeatherClient {
            http: reqwest::Client::new(),
            api_key,
        }
    }

    /// Fetch current conditions plus the multi-day forecast for a free-text
    /// location query.
    pub async fn fetch(&self, location: &str) -> Result<WeatherResponse> {
        let url = format!("{BASE_URL}/forecast.json");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("q", location),
                ("days", FORECAST_DAYS),
            ])
            .send()
            .await
            .with_context(|| format!("Failed to reach weather service for '{location}'"))?
            .error_for_status()
            .with_context(|| format!("Weather lookup failed for '{location}'"))?;

        response
            .json()
            .await
            .context("Failed to decode weather response")
    }
}

/// The forecast day matching the target date, if the response covers it.
/// No match means "no forecast available", not an error.
pub fn forecast_for_date(response: &WeatherResponse, date: NaiveDate) -> Option<&ForecastDay> {
    response
        .forecast
        .forecast_days
        .iter()
        .find(|day| day.date == date)
}

/// Best-effort forecast lookup for a record about to be saved.
///
/// Any failure (network error, bad response, no forecast day covering the
/// date) degrades to `None` so the save proceeds without a forecast.
pub async fn lookup_summary(
    client: &WeatherClient,
    destination: &str,
    date: NaiveDate,
) -> Option<ForecastSummary> {
    match client.fetch(destination).await {
        Ok(response) => forecast_for_date(&response, date).map(|day| ForecastSummary {
            condition: day.day.condition.text.clone(),
            icon: day.day.condition.icon.clone(),
            max_temp: day.day.maxtemp_c,
            min_temp: day.day.mintemp_c,
        }),
        Err(err) => {
            debug!("Forecast lookup for '{destination}' failed: {err:#}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "location": {
            "name": "Paris",
            "region": "Ile-de-France",
            "country": "France",
            "localtime": "2024-06-01 08:15"
        },
        "current": {
            "temp_c": 18.0,
            "feelslike_c": 17.2,
            "humidity": 63,
            "wind_kph": 11.2,
            "condition": { "text": "Partly cloudy", "icon": "//cdn.weatherapi.com/116.png" }
        },
        "forecast": {
            "forecastday": [
                {
                    "date": "2024-06-01",
                    "day": {
                        "maxtemp_c": 22.4,
                        "mintemp_c": 12.1,
                        "condition": { "text": "Sunny", "icon": "//cdn.weatherapi.com/113.png" }
                    },
                    "astro": { "sunrise": "05:50 AM", "sunset": "09:47 PM" }
                },
                {
                    "date": "2024-06-02",
                    "day": {
                        "maxtemp_c": 19.0,
                        "mintemp_c": 11.5,
                        "condition": { "text": "Light rain", "icon": "//cdn.weatherapi.com/296.png" }
                    },
                    "astro": { "sunrise": "05:49 AM", "sunset": "09:48 PM" }
                }
            ]
        }
    }"#;

    fn sample() -> WeatherResponse {
        serde_json::from_str(SAMPLE).unwrap()
    }

    #[test]
    fn decodes_weatherapi_payload() {
        let response = sample();
        assert_eq!(response.location.name, "Paris");
        assert_eq!(response.current.condition.text, "Partly cloudy");
        assert_eq!(response.forecast.forecast_days.len(), 2);
        assert_eq!(response.forecast.forecast_days[0].astro.sunrise, "05:50 AM");
    }

    #[test]
    fn forecast_for_date_finds_matching_day() {
        let response = sample();
        let date = NaiveDate::from_ymd_opt(2024, 6, 2).unwrap();
        let day = forecast_for_date(&response, date).unwrap();
        assert_eq!(day.day.condition.text, "Light rain");
        assert_eq!(day.day.maxtemp_c, 19.0);
    }

    #[test]
    fn forecast_for_date_misses_uncovered_day() {
        let response = sample();
        let date = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        assert!(forecast_for_date(&response, date).is_none());
    }
}
