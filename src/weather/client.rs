use serde::{Deserialize, Serialize};

use crate::weather::WeatherError;

const API_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// One decoded current-weather observation, metric units.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReading {
    pub main: MainConditions,
    pub wind: Wind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MainConditions {
    /// Temperature in °C.
    pub temp: f64,
    /// Relative humidity in percent.
    pub humidity: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wind {
    /// Wind speed in m/s.
    pub speed: f64,
}

/// Abstraction over a current-weather provider.
pub trait WeatherApi {
    fn current(&self, city: &str) -> Result<WeatherReading, WeatherError>;
}

/// OpenWeatherMap client.
pub struct OpenWeatherClient {
    client: reqwest::blocking::Client,
    api_key: String,
}

impl OpenWeatherClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            api_key,
        }
    }
}

impl WeatherApi for OpenWeatherClient {
    fn current(&self, city: &str) -> Result<WeatherReading, WeatherError> {
        let fetch = |city: &str| -> reqwest::Result<WeatherReading> {
            self.client
                .get(API_URL)
                .query(&[("q", city), ("appid", &self.api_key), ("units", "metric")])
                .send()?
                .error_for_status()?
                .json()
        };

        fetch(city).map_err(|source| WeatherError::Fetch {
            city: city.to_string(),
            source,
        })
    }
}
