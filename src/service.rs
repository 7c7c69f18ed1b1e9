//! Cached weather lookups
//!
//! [`WeatherService`] ties the [`WeatherClient`] to a [`CacheStore`]: it serves
//! fresh records from the cache file and only goes to the network on a miss.

use std::time::Duration;
use tracing::{debug, info};

use crate::cache::{find_fresh, CacheStore};
use crate::data::{Weather, WeatherClient, WeatherError};
use crate::error::Error;

/// Weather lookups backed by a read-through file cache
#[derive(Debug, Clone)]
pub struct WeatherService {
    client: WeatherClient,
    cache: CacheStore,
}

impl WeatherService {
    pub fn new(client: WeatherClient, cache: CacheStore) -> Self {
        Self { client, cache }
    }

    pub fn client(&self) -> &WeatherClient {
        &self.client
    }

    pub fn cache(&self) -> &CacheStore {
        &self.cache
    }

    /// Fetches weather without touching the cache
    pub async fn get_weather(
        &self,
        api_key: &str,
        lat: f64,
        lon: f64,
    ) -> Result<Weather, WeatherError> {
        self.client.fetch_weather(api_key, lat, lon).await
    }

    /// Returns a cached record if one is fresh enough, otherwise fetches and caches
    ///
    /// 1. The cache file is read once. A record matching the exact coordinates
    ///    and younger than `max_age` is returned with no network activity.
    /// 2. On a miss the weather is fetched. A fetch error is returned as is and
    ///    the cache file is left untouched.
    /// 3. The fetched record is appended and the whole file rewritten. A write
    ///    error is returned even though the fetch succeeded.
    pub async fn get_weather_with_cache(
        &self,
        api_key: &str,
        lat: f64,
        lon: f64,
        max_age: Duration,
    ) -> Result<Weather, Error> {
        let mut records = self.cache.load()?;
        let now = chrono::Utc::now().timestamp();

        if let Some(hit) = find_fresh(&records, lat, lon, max_age, now) {
            debug!(lat, lon, age = hit.age_at(now), "weather cache hit");
            return Ok(hit.clone());
        }

        info!(lat, lon, cached = records.len(), "weather cache miss, fetching");
        let weather = self.client.fetch_weather(api_key, lat, lon).await?;

        records.push(weather.clone());
        self.cache.write_all(&records)?;

        Ok(weather)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Info;
    use tempfile::TempDir;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn body(lat: f64, lon: f64, now: i64) -> serde_json::Value {
        serde_json::json!({
            "now": now,
            "now_dt": "2023-11-14T22:13:20.000Z",
            "info": {"lat": lat, "lon": lon, "url": "https://yandex.ru/pogoda/barnaul"},
            "fact": {"temp": 4, "feels_like": 1, "condition": "clear", "wind_gust": 6.2},
            "forecast": {"date": "2023-11-15", "parts": []}
        })
    }

    fn service(server: &MockServer, temp_dir: &TempDir) -> WeatherService {
        WeatherService::new(
            WeatherClient::new().with_base_url(server.uri()),
            CacheStore::new(temp_dir.path().join("weathers.json")),
        )
    }

    #[tokio::test]
    async fn test_hit_makes_no_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let service = service(&server, &temp_dir);
        let cached = Weather {
            now: chrono::Utc::now().timestamp() - 10,
            info: Info {
                lat: 53.3,
                lon: 83.5,
                url: String::new(),
            },
            ..Default::default()
        };
        service.cache().store(cached.clone()).expect("Store should succeed");

        let weather = service
            .get_weather_with_cache("key", 53.3, 83.5, Duration::from_secs(3600))
            .await
            .expect("Cached fetch should succeed");

        assert_eq!(weather, cached);
    }

    #[tokio::test]
    async fn test_fetch_error_leaves_cache_untouched() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let service = service(&server, &temp_dir);

        let result = service
            .get_weather_with_cache("key", 53.3, 83.5, Duration::from_secs(3600))
            .await;

        assert!(matches!(result, Err(ref e) if e.is_network()));
        assert!(!service.cache().path().exists());
    }

    #[tokio::test]
    async fn test_decode_error_leaves_cache_untouched() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .expect(1)
            .mount(&server)
            .await;

        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let service = service(&server, &temp_dir);

        let result = service
            .get_weather_with_cache("key", 53.3, 83.5, Duration::from_secs(3600))
            .await;

        assert!(matches!(
            result,
            Err(Error::Weather(WeatherError::ParseError(_)))
        ));
        assert!(!service.cache().path().exists());
    }

    #[tokio::test]
    async fn test_miss_fetches_once_then_hits() {
        let server = MockServer::start().await;
        let now = chrono::Utc::now().timestamp();
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body(53.3, 83.5, now)))
            .expect(1)
            .mount(&server)
            .await;

        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let service = service(&server, &temp_dir);

        let first = service
            .get_weather_with_cache("key", 53.3, 83.5, Duration::from_secs(3600))
            .await
            .expect("First fetch should succeed");
        let second = service
            .get_weather_with_cache("key", 53.3, 83.5, Duration::from_secs(3600))
            .await
            .expect("Second fetch should succeed");

        assert_eq!(first, second);
        assert_eq!(service.cache().load().expect("Load should succeed").len(), 1);
    }

    #[tokio::test]
    async fn test_corrupt_cache_is_reported_before_fetching() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let service = service(&server, &temp_dir);
        std::fs::write(service.cache().path(), "[{").expect("Should write file");

        let result = service
            .get_weather_with_cache("key", 53.3, 83.5, Duration::from_secs(3600))
            .await;

        assert!(matches!(result, Err(Error::Cache(_))));
    }

    #[tokio::test]
    async fn test_get_weather_bypasses_cache() {
        let server = MockServer::start().await;
        let now = chrono::Utc::now().timestamp();
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body(53.3, 83.5, now)))
            .expect(2)
            .mount(&server)
            .await;

        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let service = service(&server, &temp_dir);

        service.get_weather("key", 53.3, 83.5).await.expect("Fetch should succeed");
        service.get_weather("key", 53.3, 83.5).await.expect("Fetch should succeed");

        assert!(!service.cache().path().exists());
    }
}
