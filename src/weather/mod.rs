//! Weather fetch-and-log: one HTTP GET, one CSV append.

pub mod analyze;
pub mod client;
pub mod logger;

use std::env;
use std::path::Path;

use chrono::Utc;
use tracing::{debug, info};

pub use client::{OpenWeatherClient, WeatherApi, WeatherReading};

/// Failure modes of a weather logging run.
#[derive(thiserror::Error, Debug)]
pub enum WeatherError {
    /// `OPENWEATHER_API_KEY` is unset or empty.
    #[error("environment variable OPENWEATHER_API_KEY is not set")]
    MissingApiKey,
    /// The HTTP request failed or the payload did not decode.
    #[error("weather request for '{city}' failed: {source}")]
    Fetch {
        city: String,
        source: reqwest::Error,
    },
    /// The log file could not be written.
    #[error("could not write weather log: {0}")]
    Log(#[from] std::io::Error),
}

/// Reads the API key from the environment.
pub fn api_key_from_env() -> Result<String, WeatherError> {
    match env::var("OPENWEATHER_API_KEY") {
        Ok(key) if !key.is_empty() => Ok(key),
        _ => Err(WeatherError::MissingApiKey),
    }
}

/// Fetches the current weather for `city`, prints the summary, and appends
/// one row to the CSV log at `log_path`. A failed fetch aborts the run
/// before anything is written.
pub fn run(api: &dyn WeatherApi, city: &str, log_path: &Path) -> Result<(), WeatherError> {
    let reading = api.current(city)?;
    if let Ok(raw) = serde_json::to_string_pretty(&reading) {
        debug!(%raw, "weather reading decoded");
    }
    let summary = analyze::summarize(&reading);

    println!("{summary}");
    logger::append_reading(log_path, city, Utc::now(), &reading, &summary)?;
    println!("Logged weather data for {city} to {}", log_path.display());

    info!(city, log = %log_path.display(), "weather reading logged");
    Ok(())
}
