//! Yandex.Weather informers API client
//!
//! This module performs the single network call the crate makes: a GET against
//! the informers endpoint with the API key in a header and the coordinates in
//! the query string, decoded into a [`Weather`] record.

use reqwest::Client;
use thiserror::Error;
use tracing::{debug, instrument};

use super::Weather;

/// Base URL for the informers endpoint
pub const INFORMERS_BASE_URL: &str = "https://api.weather.yandex.ru/v2/informers";

/// Header carrying the API key
pub const API_KEY_HEADER: &str = "X-Yandex-API-Key";

/// Default response language
pub const DEFAULT_LANG: &str = "ru_RU";

/// Errors that can occur when fetching weather data
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Transport failure or non-success HTTP status
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Failed to parse JSON response
    #[error("Failed to parse JSON response: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Client for fetching weather data from the informers endpoint
#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: Client,
    base_url: String,
    lang: String,
}

impl Default for WeatherClient {
    fn default() -> Self {
        Self::new()
    }
}

impl WeatherClient {
    /// Create a new WeatherClient with default settings
    pub fn new() -> Self {
        Self::with_client(Client::new())
    }

    /// Create a new WeatherClient with a custom HTTP client
    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            base_url: INFORMERS_BASE_URL.to_string(),
            lang: DEFAULT_LANG.to_string(),
        }
    }

    /// Point the client at a different endpoint (a mock server in tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Request responses in a different language
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn lang(&self) -> &str {
        &self.lang
    }

    /// Fetch weather data for the given coordinates
    ///
    /// Performs exactly one request; there is no retry.
    ///
    /// # Arguments
    /// * `api_key` - Yandex.Weather API key
    /// * `lat` - Latitude coordinate
    /// * `lon` - Longitude coordinate
    ///
    /// # Returns
    /// * `Ok(Weather)` - Weather data for the location
    /// * `Err(WeatherError::RequestFailed)` - Transport error or non-2xx status
    /// * `Err(WeatherError::ParseError)` - The body is not a valid weather record
    #[instrument(skip(self, api_key), level = "debug")]
    pub async fn fetch_weather(
        &self,
        api_key: &str,
        lat: f64,
        lon: f64,
    ) -> Result<Weather, WeatherError> {
        let response = self
            .client
            .get(&self.base_url)
            .header(API_KEY_HEADER, api_key)
            .query(&[
                ("lat", lat.to_string()),
                ("lon", lon.to_string()),
                ("lang", self.lang.clone()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let text = response.text().await?;
        debug!(bytes = text.len(), "received weather response");

        parse_response(&text)
    }
}

/// Decode a response body into a Weather record
fn parse_response(text: &str) -> Result<Weather, WeatherError> {
    Ok(serde_json::from_str(text)?)
}
