//! Global configuration at ~/.config/tripdir/config.toml

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::weather::WeatherClient;

static DEFAULT_ITINERARY_DIR: &str = "~/travel/itineraries";

fn default_itinerary_dir() -> PathBuf {
    PathBuf::from(DEFAULT_ITINERARY_DIR)
}

#[derive(Deserialize, Clone)]
pub struct Config {
    /// Where itinerary records live, one JSON file per record.
    #[serde(default = "default_itinerary_dir")]
    pub itinerary_dir: PathBuf,

    #[serde(default)]
    pub weather: WeatherConfig,
}

#[derive(Deserialize, Clone, Default)]
pub struct WeatherConfig {
    /// weatherapi.com key. The WEATHER_API_KEY env var takes precedence.
    pub api_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            itinerary_dir: default_itinerary_dir(),
            weather: WeatherConfig::default(),
        }
    }
}

impl Config {
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
            .join("tripdir");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config file, falling back to defaults if it doesn't exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// The itinerary directory with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let expanded = shellexpand::tilde(&self.itinerary_dir.to_string_lossy()).into_owned();
        PathBuf::from(expanded)
    }

    fn weather_api_key(&self) -> Option<String> {
        std::env::var("WEATHER_API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
            .or_else(|| self.weather.api_key.clone())
    }

    /// A weather client, if a key is configured. `None` degrades forecast
    /// merges to "no forecast".
    pub fn weather_client(&self) -> Option<WeatherClient> {
        self.weather_api_key().map(WeatherClient::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.itinerary_dir, PathBuf::from("~/travel/itineraries"));
        assert!(config.weather.api_key.is_none());
    }

    #[test]
    fn parses_weather_section() {
        let config: Config = toml::from_str(
            r#"
            itinerary_dir = "/tmp/trips"

            [weather]
            api_key = "abc123"
            "#,
        )
        .unwrap();
        assert_eq!(config.itinerary_dir, PathBuf::from("/tmp/trips"));
        assert_eq!(config.weather.api_key.as_deref(), Some("abc123"));
    }
}
