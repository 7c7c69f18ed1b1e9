//! Data models for the Yandex.Weather informers API
//!
//! The `Weather` record mirrors the JSON payload returned by the service and is
//! also the unit persisted in the cache file. Coded string fields (conditions,
//! wind directions, etc.) are stored verbatim so cached records survive
//! unchanged; typed views are available through accessor methods.

pub mod codes;
pub mod weather;

pub use codes::{Condition, Daytime, MoonPhase, PartName, Season, WindDirection};
pub use weather::{WeatherClient, WeatherError};

use serde::{Deserialize, Serialize};

/// Base URL for weather condition icons
const ICON_BASE_URL: &str = "https://yastatic.net/weather/i/icons/funky/dark";

/// A weather snapshot for one location, as returned by the informers endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Weather {
    /// Server time (Unix seconds) when the snapshot was produced
    pub now: i64,
    /// Server time in UTC, ISO 8601
    pub now_dt: String,
    /// Location the snapshot belongs to
    pub info: Info,
    /// Current conditions
    pub fact: Fact,
    /// Forecast for the coming day parts
    pub forecast: Forecast,
}

/// Location information
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Info {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lon: f64,
    /// Location page on the Yandex.Weather site
    pub url: String,
}

/// Current weather conditions ("fact")
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fact {
    /// Temperature (°C)
    pub temp: i32,
    /// Feels-like temperature (°C)
    pub feels_like: i32,
    /// Water temperature (°C), only reported where relevant
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temp_water: Option<i32>,
    /// Icon code
    pub icon: String,
    /// Condition code, see [`Condition`]
    pub condition: String,
    /// Wind speed (m/s)
    pub wind_speed: f64,
    /// Wind gust speed (m/s)
    pub wind_gust: f64,
    /// Wind direction code, see [`WindDirection`]
    pub wind_dir: String,
    /// Pressure (mm Hg)
    pub pressure_mm: i32,
    /// Pressure (hPa)
    pub pressure_pa: i32,
    /// Relative humidity (%)
    pub humidity: i32,
    /// Daytime code, see [`Daytime`]
    pub daytime: String,
    /// Whether the daytime is polar day/night
    pub polar: bool,
    /// Season code, see [`Season`]
    pub season: String,
    /// Observation time (Unix seconds)
    pub obs_time: i64,
}

/// Forecast for the current date
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Forecast {
    /// Forecast date, YYYY-MM-DD
    pub date: String,
    /// Forecast date (Unix seconds)
    pub date_ts: i64,
    /// Week number
    pub week: i32,
    /// Local sunrise time, absent in polar regions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sunrise: Option<String>,
    /// Local sunset time, absent in polar regions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sunset: Option<String>,
    /// Moon phase code (0-15), see [`MoonPhase`]
    pub moon_code: i32,
    /// Moon phase text code (`moon-code-N`)
    pub moon_text: String,
    /// Forecasts per part of day
    pub parts: Vec<Part>,
}

/// Forecast for a single part of day
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Part {
    /// Part of day code, see [`PartName`]
    pub part_name: String,
    /// Minimum temperature (°C)
    pub temp_min: i32,
    /// Maximum temperature (°C)
    pub temp_max: i32,
    /// Average temperature (°C)
    pub temp_avg: i32,
    /// Feels-like temperature (°C)
    pub feels_like: i32,
    /// Icon code
    pub icon: String,
    /// Condition code, see [`Condition`]
    pub condition: String,
    /// Daytime code, see [`Daytime`]
    pub daytime: String,
    /// Whether the daytime is polar day/night
    pub polar: bool,
    /// Wind speed (m/s)
    pub wind_speed: f64,
    /// Wind gust speed (m/s)
    pub wind_gust: f64,
    /// Wind direction code, see [`WindDirection`]
    pub wind_dir: String,
    /// Pressure (mm Hg)
    pub pressure_mm: i32,
    /// Pressure (hPa)
    pub pressure_pa: i32,
    /// Relative humidity (%)
    pub humidity: i32,
    /// Expected precipitation (mm)
    pub prec_mm: f64,
    /// Expected precipitation period (minutes)
    pub prec_period: i32,
    /// Precipitation probability (%)
    pub prec_prob: i32,
}

impl Weather {
    /// Returns true if this record was produced for exactly these coordinates.
    ///
    /// Comparison is on the bit pattern: no tolerance is applied, so callers
    /// must pass back the same values they requested with.
    pub fn matches(&self, lat: f64, lon: f64) -> bool {
        self.info.lat.to_bits() == lat.to_bits() && self.info.lon.to_bits() == lon.to_bits()
    }

    /// Age of the record in seconds relative to `now` (Unix seconds)
    ///
    /// Saturates instead of overflowing on out-of-range timestamps.
    pub fn age_at(&self, now: i64) -> i64 {
        now.saturating_sub(self.now)
    }
}

impl Fact {
    pub fn condition(&self) -> Condition {
        Condition::from_code(&self.condition)
    }

    pub fn wind_direction(&self) -> WindDirection {
        WindDirection::from_code(&self.wind_dir)
    }

    pub fn daytime(&self) -> Daytime {
        Daytime::from_code(&self.daytime)
    }

    pub fn season(&self) -> Season {
        Season::from_code(&self.season)
    }

    /// URL of the SVG icon for the current conditions
    pub fn icon_url(&self) -> String {
        icon_url(&self.icon)
    }
}

impl Forecast {
    pub fn moon_phase(&self) -> MoonPhase {
        MoonPhase::from_code(self.moon_code)
    }
}

impl Part {
    pub fn part_name(&self) -> PartName {
        PartName::from_code(&self.part_name)
    }

    pub fn condition(&self) -> Condition {
        Condition::from_code(&self.condition)
    }

    pub fn wind_direction(&self) -> WindDirection {
        WindDirection::from_code(&self.wind_dir)
    }

    pub fn daytime(&self) -> Daytime {
        Daytime::from_code(&self.daytime)
    }

    pub fn icon_url(&self) -> String {
        icon_url(&self.icon)
    }
}

fn icon_url(icon: &str) -> String {
    format!("{}/{}.svg", ICON_BASE_URL, icon)
}
