//! Command-line interface parsing for yaweather
//!
//! This module handles parsing of CLI arguments using clap and merging them
//! with the environment configuration. Flags win over environment values.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

use crate::config::{Config, ConfigError};

/// Default latitude (Barnaul)
pub const DEFAULT_LAT: f64 = 53.3;

/// Default longitude (Barnaul)
pub const DEFAULT_LON: f64 = 83.5;

/// yaweather - Yandex.Weather from the command line
#[derive(Parser, Debug)]
#[command(name = "yaweather")]
#[command(about = "Fetch Yandex.Weather conditions, optionally through a local file cache")]
#[command(version)]
pub struct Cli {
    /// Latitude in degrees
    #[arg(long, global = true, default_value_t = DEFAULT_LAT, allow_negative_numbers = true)]
    pub lat: f64,

    /// Longitude in degrees
    #[arg(long, global = true, default_value_t = DEFAULT_LON, allow_negative_numbers = true)]
    pub lon: f64,

    /// API key (defaults to YANDEX_WEATHER_API_KEY)
    #[arg(long, global = true, value_name = "KEY")]
    pub api_key: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Fetch weather without the cache and print it as JSON
    Fetch,
    /// Fetch weather through the cache and print it as JSON
    Cached(CacheArgs),
    /// Fetch weather through the cache and print a short report
    Report(CacheArgs),
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct CacheArgs {
    /// Maximum age of a cached record in seconds (defaults to WEATHER_CACHE_MAX_AGE_SECS or 3600)
    #[arg(long, value_name = "SECS")]
    pub max_age: Option<u64>,

    /// Cache file path (defaults to WEATHER_CACHE_FILE or ./weathers.json)
    #[arg(long, value_name = "PATH")]
    pub cache_file: Option<PathBuf>,
}

/// Everything a command needs, after merging flags and environment
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub api_key: String,
    pub lat: f64,
    pub lon: f64,
    pub base_url: String,
    pub lang: String,
    pub cache_file: PathBuf,
    pub max_age: Duration,
}

impl Settings {
    /// Merges parsed CLI arguments over the environment configuration.
    ///
    /// # Returns
    /// * `Ok(Settings)` when an API key is available from either source
    /// * `Err(ConfigError::MissingApiKey)` otherwise
    pub fn resolve(cli: &Cli, config: &Config) -> Result<Self, ConfigError> {
        let api_key = match &cli.api_key {
            Some(key) => key.clone(),
            None => config.require_api_key()?.to_string(),
        };

        let (max_age, cache_file) = match &cli.command {
            Command::Fetch => (None, None),
            Command::Cached(args) | Command::Report(args) => {
                (args.max_age, args.cache_file.clone())
            }
        };

        Ok(Settings {
            api_key,
            lat: cli.lat,
            lon: cli.lon,
            base_url: config.base_url.clone(),
            lang: config.lang.clone(),
            cache_file: cache_file.unwrap_or_else(|| config.cache_file.clone()),
            max_age: max_age.map(Duration::from_secs).unwrap_or(config.max_age),
        })
    }
}
