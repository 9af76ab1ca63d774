use anyhow::Context;
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use serde_json::Value;

use crate::{
    config::ApiConfig,
    error::ApiError,
    model::Coordinates,
    provider::openweather::OpenWeatherClient,
};

pub mod openweather;

/// What the geocoder is asked to find.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeoQuery {
    pub name: String,
    pub country_code: Option<String>,
}

impl GeoQuery {
    pub fn new(name: impl Into<String>, country_code: Option<&str>) -> Self {
        Self { name: name.into(), country_code: country_code.map(str::to_owned) }
    }

    /// `q` parameter: `"<name>,<code>"`, or just the name when the code is unknown.
    pub fn as_param(&self) -> String {
        match &self.country_code {
            Some(code) => format!("{},{}", self.name, code),
            None => self.name.clone(),
        }
    }
}

/// Remote geocoding + current weather service.
///
/// One request per call; retrying is the caller's business.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherApi: Send + Sync {
    /// Coordinates of the first candidate matching `query`.
    async fn geocode(&self, query: &GeoQuery) -> Result<Coordinates, ApiError>;

    /// Decoded current-weather response, not yet validated.
    async fn current_weather(&self, coordinates: Coordinates) -> Result<Value, ApiError>;
}

/// Construct the API client described by `config`.
pub fn api_from_config(config: &ApiConfig) -> anyhow::Result<Box<dyn WeatherApi>> {
    let api_key = config.api_key.clone().ok_or_else(|| {
        anyhow::anyhow!(
            "No API key configured for OpenWeather.\n\
             Hint: set API_KEY in the environment."
        )
    })?;

    let client =
        OpenWeatherClient::new(api_key, config).context("Failed to build OpenWeather HTTP client")?;
    Ok(Box::new(client))
}
