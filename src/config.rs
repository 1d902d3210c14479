use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::constants::{
    API_KEY_ENV, DEFAULT_TIMEOUT_SECS, OPENWEATHER_API_BASE, SUMMARY_API_BASE_ENV, TIMEOUT_ENV,
    WEATHER_API_BASE_ENV, WIKIPEDIA_API_BASE,
};

/// Settings for the provider clients, loaded once at startup
#[derive(Debug, Clone)]
pub struct Config {
    /// OpenWeatherMap API key
    pub api_key: String,
    /// Base URL of the weather provider, without trailing slash
    pub weather_api_base: String,
    /// Base URL of the summary provider, without trailing slash
    pub summary_api_base: String,
    /// Overall timeout applied to each request
    pub timeout: Duration,
}

impl Config {
    /// Creates a config for the public providers with the given key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            weather_api_base: OPENWEATHER_API_BASE.to_string(),
            summary_api_base: WIKIPEDIA_API_BASE.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Loads the config from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = lookup(API_KEY_ENV)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .with_context(|| format!("{} is not set", API_KEY_ENV))?;

        let mut config = Self::new(api_key);

        if let Some(base) = lookup(WEATHER_API_BASE_ENV) {
            config.weather_api_base = base.trim_end_matches('/').to_string();
        }
        if let Some(base) = lookup(SUMMARY_API_BASE_ENV) {
            config.summary_api_base = base.trim_end_matches('/').to_string();
        }
        if let Some(raw) = lookup(TIMEOUT_ENV) {
            let secs: u64 = raw
                .trim()
                .parse()
                .with_context(|| format!("{} must be a whole number of seconds", TIMEOUT_ENV))?;
            if secs == 0 {
                bail!("{} must be greater than zero", TIMEOUT_ENV);
            }
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}
