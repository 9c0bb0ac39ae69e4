use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};
use csv::WriterBuilder;
use tracing::debug;

use crate::weather::WeatherError;
use crate::weather::client::WeatherReading;

const HEADER: [&str; 6] = [
    "datetime",
    "city",
    "temperature(C)",
    "wind_speed(m/s)",
    "humidity(%)",
    "summary",
];

/// Appends one reading as a row to the CSV log at `path`.
///
/// The header row is written only when the sink is missing or empty; that
/// is decided once, before the writer is opened.
pub fn append_reading(
    path: &Path,
    city: &str,
    logged_at: DateTime<Utc>,
    reading: &WeatherReading,
    summary: &str,
) -> Result<(), WeatherError> {
    let needs_header = fs::metadata(path).map(|m| m.len() == 0).unwrap_or(true);
    debug!(path = %path.display(), needs_header, "appending weather record");

    let file = OpenOptions::new().append(true).create(true).open(path)?;
    let mut writer = WriterBuilder::new().from_writer(file);

    if needs_header {
        writer.write_record(HEADER).map_err(io::Error::other)?;
    }

    let timestamp = logged_at.to_rfc3339_opts(SecondsFormat::Secs, true);
    let temp = reading.main.temp.to_string();
    let wind = reading.wind.speed.to_string();
    let humidity = reading.main.humidity.to_string();
    writer
        .write_record([
            timestamp.as_str(),
            city,
            temp.as_str(),
            wind.as_str(),
            humidity.as_str(),
            summary,
        ])
        .map_err(io::Error::other)?;
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weather::client::{MainConditions, Wind};
    use std::env;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        env::temp_dir().join(name)
    }

    fn reading() -> WeatherReading {
        WeatherReading {
            main: MainConditions {
                temp: 18.5,
                humidity: 60.0,
            },
            wind: Wind { speed: 4.2 },
        }
    }

    #[test]
    fn test_append_creates_file_with_header() {
        let path = temp_path("coursetools_weather_create.csv");
        let _ = fs::remove_file(&path);

        append_reading(&path, "London", Utc::now(), &reading(), "Mild (11-24°C)").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("datetime,city,temperature(C)"));
        assert!(content.contains("London"));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_header_written_once() {
        let path = temp_path("coursetools_weather_header.csv");
        let _ = fs::remove_file(&path);

        append_reading(&path, "London", Utc::now(), &reading(), "summary").unwrap();
        append_reading(&path, "London", Utc::now(), &reading(), "summary").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let header_count = content.lines().filter(|l| l.starts_with("datetime")).count();
        assert_eq!(header_count, 1);
        assert_eq!(content.lines().count(), 3);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_empty_existing_file_gets_header() {
        let path = temp_path("coursetools_weather_empty.csv");
        fs::write(&path, "").unwrap();

        append_reading(&path, "London", Utc::now(), &reading(), "summary").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("datetime"));

        fs::remove_file(&path).unwrap();
    }
}
