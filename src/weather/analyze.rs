use crate::weather::client::WeatherReading;

/// Summarizes a reading: a temperature band plus condition warnings.
///
/// | Temperature | Band |
/// |-------------|------|
/// | <= 10 °C    | Cold |
/// | <= 24 °C    | Mild |
/// | > 24 °C     | Hot  |
///
/// Wind above 10 m/s and humidity above 80 % append warnings.
pub fn summarize(reading: &WeatherReading) -> String {
    let band = match reading.main.temp {
        t if t <= 10.0 => "Cold (≤10°C)",
        t if t <= 24.0 => "Mild (11-24°C)",
        _ => "Hot (≥25°C)",
    };

    let mut summary = String::from(band);
    if reading.wind.speed > 10.0 {
        summary.push_str(" High wind alert!");
    }
    if reading.main.humidity > 80.0 {
        summary.push_str(" Humid conditions!");
    }
    summary
}
