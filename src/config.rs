//! Environment-driven configuration
//!
//! Values are read from the process environment (after an optional `.env`
//! file is loaded by the binary). Only the API key is required, and only by
//! commands that reach the network.

use std::env;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

use crate::cache::DEFAULT_CACHE_FILE;
use crate::data::weather::{DEFAULT_LANG, INFORMERS_BASE_URL};

pub const API_KEY_VAR: &str = "YANDEX_WEATHER_API_KEY";
pub const BASE_URL_VAR: &str = "YANDEX_WEATHER_BASE_URL";
pub const LANG_VAR: &str = "YANDEX_WEATHER_LANG";
pub const CACHE_FILE_VAR: &str = "WEATHER_CACHE_FILE";
pub const CACHE_MAX_AGE_VAR: &str = "WEATHER_CACHE_MAX_AGE_SECS";

/// Default freshness window for cached records
pub const DEFAULT_MAX_AGE: Duration = Duration::from_secs(3600);

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} not set")]
    MissingApiKey(&'static str),

    #[error("{var} must be a whole number of seconds, got '{value}'")]
    InvalidNumber { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_key: Option<String>,
    pub base_url: String,
    pub lang: String,
    pub cache_file: PathBuf,
    pub max_age: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: INFORMERS_BASE_URL.to_string(),
            lang: DEFAULT_LANG.to_string(),
            cache_file: PathBuf::from(DEFAULT_CACHE_FILE),
            max_age: DEFAULT_MAX_AGE,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a config from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let max_age = match non_empty(CACHE_MAX_AGE_VAR) {
            Some(value) => value
                .trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| ConfigError::InvalidNumber {
                    var: CACHE_MAX_AGE_VAR,
                    value,
                })?,
            None => defaults.max_age,
        };

        Ok(Self {
            api_key: non_empty(API_KEY_VAR),
            base_url: non_empty(BASE_URL_VAR).unwrap_or(defaults.base_url),
            lang: non_empty(LANG_VAR).unwrap_or(defaults.lang),
            cache_file: non_empty(CACHE_FILE_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.cache_file),
            max_age,
        })
    }

    /// The API key, or an error naming the variable to set
    pub fn require_api_key(&self) -> Result<&str, ConfigError> {
        self.api_key
            .as_deref()
            .ok_or(ConfigError::MissingApiKey(API_KEY_VAR))
    }
}
