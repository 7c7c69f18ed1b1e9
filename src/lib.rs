//! Yandex.Weather client library
//!
//! Fetches weather snapshots from the Yandex.Weather informers API and keeps a
//! JSON file cache so repeated lookups for the same coordinates within a time
//! window do not hit the network.
//!
//! ```no_run
//! use std::time::Duration;
//! use yandex_weather::{get_weather_with_cache, CacheStore};
//!
//! # async fn run() -> Result<(), yandex_weather::Error> {
//! let cache = CacheStore::new("weathers.json");
//! let weather = get_weather_with_cache("API_KEY", 53.3, 83.5, Duration::from_secs(3600), &cache).await?;
//! println!("{}°C", weather.fact.temp);
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod report;
pub mod service;

use std::time::Duration;

pub use cache::{CacheError, CacheStore};
pub use config::{Config, ConfigError};
pub use data::{Fact, Forecast, Info, Part, Weather, WeatherClient, WeatherError};
pub use error::Error;
pub use service::WeatherService;

/// Fetches weather for the given coordinates with a default client
pub async fn get_weather(api_key: &str, lat: f64, lon: f64) -> Result<Weather, WeatherError> {
    WeatherClient::new().fetch_weather(api_key, lat, lon).await
}

/// Fetches weather through the given cache with a default client
///
/// A record for exactly these coordinates younger than `max_age` is served from
/// the cache file; otherwise the weather is fetched and appended to it.
pub async fn get_weather_with_cache(
    api_key: &str,
    lat: f64,
    lon: f64,
    max_age: Duration,
    cache: &CacheStore,
) -> Result<Weather, Error> {
    WeatherService::new(WeatherClient::new(), cache.clone())
        .get_weather_with_cache(api_key, lat, lon, max_age)
        .await
}
