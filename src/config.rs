//! # Bot Configuration Module
//!
//! Runtime configuration for the bot: upstream endpoints, the shared HTTP
//! client, and the environment variables that override the defaults.

use anyhow::Result;
use std::env;
use std::time::Duration;

/// Compass Group feed for the Pasila Pääraide / Opetustalo restaurant.
const DEFAULT_MENU_FEED_URL: &str =
    "https://www.compass-group.fi/menuapi/feed/json?costNumber=0083&language=fi";

const DEFAULT_WEATHER_API_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

const DEFAULT_WEATHER_CITY: &str = "Helsinki";

/// Connect and read timeout for all upstream HTTP calls.
const HTTP_TIMEOUT_SECS: u64 = 10;

/// Some feed hosts reject clients without a browser-like User-Agent.
const USER_AGENT: &str = "Mozilla/5.0 (compatible; PaaRaideMenuBot/1.0)";

/// Shared configuration handed to every command handler.
///
/// Built once at startup and passed around behind an `Arc`; the embedded
/// `reqwest::Client` pools connections across requests.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub menu_feed_url: String,
    pub weather_api_url: String,
    pub weather_city: String,
    pub weather_api_key: String,
    pub client: reqwest::Client,
}

impl BotConfig {
    /// Build the configuration from the environment, falling back to the
    /// built-in defaults. Only the weather API key has no default; without
    /// it `/weather` degrades to its fixed error reply.
    pub fn from_env() -> Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            menu_feed_url: env::var("MENU_FEED_URL")
                .unwrap_or_else(|_| DEFAULT_MENU_FEED_URL.to_string()),
            weather_api_url: env::var("WEATHER_API_URL")
                .unwrap_or_else(|_| DEFAULT_WEATHER_API_URL.to_string()),
            weather_city: env::var("WEATHER_CITY")
                .unwrap_or_else(|_| DEFAULT_WEATHER_CITY.to_string()),
            weather_api_key: env::var("OPENWEATHER_API_KEY").unwrap_or_default(),
            client,
        })
    }
}
