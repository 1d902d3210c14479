use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::CitySummaryError;

// ============================================================================
// City name
// ============================================================================

/// A validated, non-empty city name.
///
/// Surrounding whitespace is trimmed; the remaining text is used as-is for
/// lookups and in the summary trailer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityName(String);

impl CityName {
    pub fn parse(raw: &str) -> Result<Self, CitySummaryError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CitySummaryError::EmptyInput);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// OpenWeatherMap API Models
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CurrentWeatherResponse {
    pub main: MainReadings,
}

#[derive(Debug, Deserialize)]
pub struct MainReadings {
    pub temp: f64,
}

// ============================================================================
// Wikipedia REST API Models
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct PageSummaryResponse {
    pub extract: String,
}

// ============================================================================
// MCP Tool Request Models
// ============================================================================

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct CityRequest {
    /// Name of the city, e.g. "Zagreb" or "New York"
    pub city: String,
}
