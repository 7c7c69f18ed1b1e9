//! JSON file cache for fetched weather records
//!
//! The whole cache is one JSON array of [`Weather`] records. It is read in
//! full on every lookup and rewritten in full on every store. Records are only
//! ever appended: stale entries stay in the file and simply stop matching the
//! freshness check.

use chrono::Utc;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

use crate::data::Weather;

/// File name used when no cache path is configured
pub const DEFAULT_CACHE_FILE: &str = "weathers.json";

/// Errors that can occur when reading or writing the cache file
#[derive(Debug, Error)]
pub enum CacheError {
    /// Filesystem error (permissions, disk full, ...)
    #[error("Cache file I/O failed: {0}")]
    Io(#[from] io::Error),

    /// The cache file is not a JSON array of weather records
    #[error("Cache file is not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),

    /// JSON cannot represent NaN or infinite coordinates
    #[error("Cannot cache a record with non-finite coordinates ({lat}, {lon})")]
    NonFiniteCoordinates { lat: f64, lon: f64 },
}

/// Read-through cache of weather records backed by a single file
///
/// No locking is done around the read-modify-write cycle, so two processes
/// sharing a file can lose each other's entries.
#[derive(Debug, Clone)]
pub struct CacheStore {
    /// Path of the cache file
    path: PathBuf,
}

impl Default for CacheStore {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_FILE)
    }
}

impl CacheStore {
    /// Creates a CacheStore backed by the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every record from the cache file, in file order
    ///
    /// A missing file is an empty cache, not an error.
    pub fn load(&self) -> Result<Vec<Weather>, CacheError> {
        let content = match fs::read(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "cache file missing, treating as empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        Ok(serde_json::from_slice(&content)?)
    }

    /// Overwrites the cache file with the given records
    ///
    /// Parent directories are created if missing. The write is not crash-safe.
    /// Records with NaN or infinite coordinates are rejected before the file is
    /// touched.
    pub fn write_all(&self, records: &[Weather]) -> Result<(), CacheError> {
        if let Some(bad) = records
            .iter()
            .find(|r| !r.info.lat.is_finite() || !r.info.lon.is_finite())
        {
            return Err(CacheError::NonFiniteCoordinates {
                lat: bad.info.lat,
                lon: bad.info.lon,
            });
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(records)?;
        fs::write(&self.path, json)?;

        info!(path = %self.path.display(), records = records.len(), "cache file rewritten");
        Ok(())
    }

    /// Looks up a fresh record for the given coordinates
    ///
    /// # Arguments
    /// * `lat` - Latitude, compared exactly against the stored value
    /// * `lon` - Longitude, compared exactly against the stored value
    /// * `max_age` - Records this old or older are ignored
    ///
    /// # Returns
    /// * `Ok(Some(Weather))` on a cache hit
    /// * `Ok(None)` on a cache miss
    /// * `Err` if the cache file exists but cannot be read or parsed
    pub fn get_cached(
        &self,
        lat: f64,
        lon: f64,
        max_age: Duration,
    ) -> Result<Option<Weather>, CacheError> {
        let records = self.load()?;
        let now = Utc::now().timestamp();
        Ok(find_fresh(&records, lat, lon, max_age, now).cloned())
    }

    /// Appends a record to the cache file
    ///
    /// Existing records are kept as they are, including older records for the
    /// same coordinates.
    pub fn store(&self, record: Weather) -> Result<(), CacheError> {
        let mut records = self.load()?;
        records.push(record);
        self.write_all(&records)
    }
}

/// Returns the first record, in order, that matches the coordinates exactly and
/// whose age at `now` is strictly less than `max_age`
///
/// `max_age` is truncated to whole seconds.
pub fn find_fresh(
    records: &[Weather],
    lat: f64,
    lon: f64,
    max_age: Duration,
    now: i64,
) -> Option<&Weather> {
    let max_age_secs = i64::try_from(max_age.as_secs()).unwrap_or(i64::MAX);

    records
        .iter()
        .find(|record| record.matches(lat, lon) && record.age_at(now) < max_age_secs)
}
