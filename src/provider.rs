//! Weather and summary providers.
//!
//! The file writer only sees the [`WeatherProvider`] and [`SummaryProvider`]
//! traits. [`CityInfoClient`] implements both against OpenWeatherMap and the
//! Wikipedia REST API.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::config::Config;
use crate::constants::USER_AGENT;
use crate::error::CitySummaryError;
use crate::models::{CityName, CurrentWeatherResponse, PageSummaryResponse};

/// Source of current temperatures
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Current temperature in degrees Celsius.
    async fn fetch_temperature(&self, city: &CityName) -> Result<f64, CitySummaryError>;
}

/// Source of encyclopedic city summaries
#[async_trait]
pub trait SummaryProvider: Send + Sync {
    /// Plain-text summary of the city's encyclopedia article.
    async fn fetch_summary(&self, city: &CityName) -> Result<String, CitySummaryError>;
}

/// HTTP client for both providers
#[derive(Debug, Clone)]
pub struct CityInfoClient {
    client: Arc<Client>,
    config: Config,
}

impl CityInfoClient {
    /// Creates a new client; each request is a single attempt bounded by
    /// `config.timeout`.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client: Arc::new(client),
            config,
        })
    }

    /// Sends the request and deserializes the JSON response, classifying
    /// every failure on the way.
    async fn make_request<T: for<'de> Deserialize<'de>>(
        &self,
        request: RequestBuilder,
        city: &CityName,
    ) -> Result<T, CitySummaryError> {
        let response = request.send().await.map_err(|e| {
            warn!(city = %city, error = %e, "Request failed before a response arrived");
            CitySummaryError::from(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(city = %city, %status, "Provider returned an error status");
            return Err(CitySummaryError::from_status(status, city.as_str()));
        }

        let data = response.json::<T>().await?;
        Ok(data)
    }
}

#[async_trait]
impl WeatherProvider for CityInfoClient {
    #[instrument(skip(self, city), fields(city = %city))]
    async fn fetch_temperature(&self, city: &CityName) -> Result<f64, CitySummaryError> {
        let url = format!("{}/data/2.5/weather", self.config.weather_api_base);
        debug!(%url, "Fetching current weather");

        let request = self.client.get(&url).query(&[
            ("q", city.as_str()),
            ("appid", self.config.api_key.as_str()),
            ("units", "metric"),
        ]);

        let weather = self
            .make_request::<CurrentWeatherResponse>(request, city)
            .await?;
        Ok(weather.main.temp)
    }
}

#[async_trait]
impl SummaryProvider for CityInfoClient {
    #[instrument(skip(self, city), fields(city = %city))]
    async fn fetch_summary(&self, city: &CityName) -> Result<String, CitySummaryError> {
        let url = format!(
            "{}/api/rest_v1/page/summary/{}",
            self.config.summary_api_base,
            urlencoding::encode(city.as_str())
        );
        debug!(%url, "Fetching page summary");

        let page = self
            .make_request::<PageSummaryResponse>(self.client.get(&url), city)
            .await?;
        Ok(page.extract)
    }
}
