//! Weather forecast lookup via weatherapi.com.
//!
//! Used two ways: a best-effort forecast merge when a record is saved or
//! updated, and the standalone `weather` command that renders the full
//! response.

mod client;
mod types;

pub use client::{forecast_for_date, lookup_summary, WeatherClient};
pub use types::{Astro, Condition, Current, Day, Forecast, ForecastDay, Location, WeatherResponse};

/// Clothing recommendation derived from the current temperature and
/// conditions.
pub fn clothing_advice(temp_c: f64, condition: &str) -> String {
    let mut advice = if temp_c < 10.0 {
        "Heavy winter clothing recommended: warm coat, scarf, gloves, and winter boots."
    } else if temp_c < 20.0 {
        "Light jacket or sweater recommended. Long pants advised."
    } else {
        "Light clothing suitable. Short sleeves and light pants/shorts recommended."
    }
    .to_string();

    if condition.to_lowercase().contains("rain") {
        advice.push_str(" Don't forget an umbrella or raincoat!");
    }

    advice
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cold_weather_advice() {
        let advice = clothing_advice(3.0, "Overcast");
        assert!(advice.contains("winter"));
    }

    #[test]
    fn mild_weather_advice() {
        let advice = clothing_advice(15.0, "Partly cloudy");
        assert!(advice.contains("jacket"));
    }

    #[test]
    fn warm_weather_advice() {
        let advice = clothing_advice(26.0, "Sunny");
        assert!(advice.contains("Light clothing"));
    }

    #[test]
    fn rain_appends_umbrella_note() {
        let advice = clothing_advice(15.0, "Light Rain");
        assert!(advice.contains("umbrella"));

        let dry = clothing_advice(15.0, "Clear");
        assert!(!dry.contains("umbrella"));
    }
}
