//! City summaries
//!
//! Looks up a city's current temperature (OpenWeatherMap) and encyclopedia
//! summary (Wikipedia) and writes both to `city_summaries/<city>.txt`.

pub mod config;
pub mod constants;
pub mod error;
pub mod formatters;
pub mod models;
pub mod provider;
pub mod service;
pub mod writer;

pub use config::Config;
pub use error::CitySummaryError;
pub use models::CityName;
pub use provider::{CityInfoClient, SummaryProvider, WeatherProvider};
pub use service::CitySummaryServer;
pub use writer::SummaryFileWriter;
