/// User agent string for HTTP requests
pub const USER_AGENT: &str = "city-summary/0.1.0";

/// OpenWeatherMap API base URL
pub const OPENWEATHER_API_BASE: &str = "http://api.openweathermap.org";

/// Wikipedia REST API base URL
pub const WIKIPEDIA_API_BASE: &str = "https://en.wikipedia.org";

/// Directory, relative to the output root, that holds the summary files
pub const SUMMARIES_DIR: &str = "city_summaries";

/// Request timeout used when none is configured
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";
pub const WEATHER_API_BASE_ENV: &str = "CITY_SUMMARY_WEATHER_API_BASE";
pub const SUMMARY_API_BASE_ENV: &str = "CITY_SUMMARY_SUMMARY_API_BASE";
pub const TIMEOUT_ENV: &str = "CITY_SUMMARY_TIMEOUT_SECS";
