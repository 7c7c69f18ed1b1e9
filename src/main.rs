//! yaweather - Yandex.Weather from the command line
//!
//! Fetches current conditions for a coordinate pair, either directly or
//! through a local JSON file cache, and prints them as JSON or a short report.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use yandex_weather::cli::{Cli, Command, Settings};
use yandex_weather::{report, CacheStore, Config, WeatherClient, WeatherService};

/// Sends logs to stderr so stdout only carries command output
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "yandex_weather=info,yaweather=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load environment variables from .env file
    dotenv::dotenv().ok();
    init_tracing();

    let config = Config::from_env()?;
    let settings = Settings::resolve(&cli, &config)?;

    let client = WeatherClient::new()
        .with_base_url(settings.base_url.clone())
        .with_lang(settings.lang.clone());
    let service = WeatherService::new(client, CacheStore::new(settings.cache_file.clone()));

    match cli.command {
        Command::Fetch => {
            let weather = service
                .get_weather(&settings.api_key, settings.lat, settings.lon)
                .await?;
            println!("{}", serde_json::to_string_pretty(&weather)?);
        }
        Command::Cached(_) => {
            let weather = service
                .get_weather_with_cache(
                    &settings.api_key,
                    settings.lat,
                    settings.lon,
                    settings.max_age,
                )
                .await?;
            println!("{}", serde_json::to_string_pretty(&weather)?);
        }
        Command::Report(_) => {
            let weather = service
                .get_weather_with_cache(
                    &settings.api_key,
                    settings.lat,
                    settings.lon,
                    settings.max_age,
                )
                .await?;
            print!("{}", report::mini_report(&weather));
            for line in report::forecast_lines(&weather) {
                println!("{}", line);
            }
        }
    }

    Ok(())
}
