//! Crate-level error type.

use thiserror::Error;

use crate::cache::CacheError;
use crate::config::ConfigError;
use crate::data::WeatherError;

/// Any error the crate can return. Each variant passes the underlying error
/// through unchanged.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Weather(#[from] WeatherError),

    #[error(transparent)]
    Cache(#[from] CacheError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl Error {
    /// Whether the error came from the network call rather than local state
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Weather(WeatherError::RequestFailed(_)))
    }
}
