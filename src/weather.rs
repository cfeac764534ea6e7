//! # Weather Module
//!
//! Current conditions for the configured city from OpenWeatherMap. A single
//! known schema and no fallback logic; like the menu resolver, the public
//! function always returns a reply string.

use anyhow::Result;
use chrono::Utc;
use log::error;
use serde::Deserialize;

use crate::config::BotConfig;
use crate::menu_dates::MENU_TIME_ZONE;

const WEATHER_ERROR_REPLY: &str = "Could not retrieve weather information.";

#[derive(Debug, Deserialize)]
struct WeatherResponse {
    main: WeatherMain,
    wind: WeatherWind,
}

#[derive(Debug, Deserialize)]
struct WeatherMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct WeatherWind {
    speed: f64,
}

/// Fetch and render the current weather. Failures are logged and collapse
/// to a fixed error reply.
pub async fn current_weather(config: &BotConfig) -> String {
    match fetch_weather(config).await {
        Ok(reply) => reply,
        Err(err) => {
            error!("Weather lookup failed: {err}");
            WEATHER_ERROR_REPLY.to_string()
        }
    }
}

async fn fetch_weather(config: &BotConfig) -> Result<String> {
    let response = config
        .client
        .get(&config.weather_api_url)
        .query(&[
            ("q", config.weather_city.as_str()),
            ("APPID", config.weather_api_key.as_str()),
            ("units", "metric"),
        ])
        .send()
        .await?
        .error_for_status()?;

    let weather: WeatherResponse = response.json().await?;

    let now = Utc::now().with_timezone(&MENU_TIME_ZONE);
    Ok(format!(
        "Outside at {} it is now {}°C. Wind speed: {} m/s.\nToday is {} at {}.",
        config.weather_city,
        weather.main.temp,
        weather.wind.speed,
        now.format("%A %d.%m.%Y"),
        now.format("%H:%M:%S")
    ))
}
