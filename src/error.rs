//! Error types for city summary lookups.

use std::path::PathBuf;

use thiserror::Error;

/// Every way a summary request can fail.
///
/// The `Display` output is the message shown to the user, so the wording is
/// kept stable for anything scraping the CLI output.
#[derive(Error, Debug)]
pub enum CitySummaryError {
    #[error("Entered value can't be empty string")]
    EmptyInput,

    #[error("Error: Unauthorized. The API key is invalid or expired.")]
    Unauthorized,

    #[error("Error: Forbidden. The API key does not have the necessary permissions.")]
    Forbidden,

    #[error("City {0} not exists in database")]
    NotFound(String),

    #[error("HTTP error occurred: {0}")]
    Http(String),

    #[error("Error: Connection error. Please check your network connection.")]
    Connection,

    #[error("Error: Timeout. The request took too long to complete.")]
    Timeout,

    #[error("Error: An error occurred. {0}")]
    Request(String),

    #[error("Failed to write summary file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CitySummaryError {
    /// Classifies a non-success HTTP status returned for `city`.
    pub fn from_status(status: reqwest::StatusCode, city: &str) -> Self {
        match status.as_u16() {
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound(city.to_string()),
            _ => Self::Http(status.to_string()),
        }
    }

    /// Whether the failure was caused by what the caller asked for rather than
    /// by the providers or the local machine.
    pub fn is_caller_error(&self) -> bool {
        matches!(self, Self::EmptyInput | Self::NotFound(_))
    }
}

impl From<reqwest::Error> for CitySummaryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::Connection
        } else {
            Self::Request(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_status_classification() {
        assert!(matches!(
            CitySummaryError::from_status(StatusCode::UNAUTHORIZED, "Zagreb"),
            CitySummaryError::Unauthorized
        ));
        assert!(matches!(
            CitySummaryError::from_status(StatusCode::FORBIDDEN, "Zagreb"),
            CitySummaryError::Forbidden
        ));
        assert!(matches!(
            CitySummaryError::from_status(StatusCode::NOT_FOUND, "Zagreb"),
            CitySummaryError::NotFound(city) if city == "Zagreb"
        ));
        assert!(matches!(
            CitySummaryError::from_status(StatusCode::INTERNAL_SERVER_ERROR, "Zagreb"),
            CitySummaryError::Http(_)
        ));
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            CitySummaryError::from_status(StatusCode::NOT_FOUND, "hgff").to_string(),
            "City hgff not exists in database"
        );
        assert_eq!(
            CitySummaryError::from_status(StatusCode::INTERNAL_SERVER_ERROR, "x").to_string(),
            "HTTP error occurred: 500 Internal Server Error"
        );
        assert_eq!(
            CitySummaryError::Forbidden.to_string(),
            "Error: Forbidden. The API key does not have the necessary permissions."
        );
        assert_eq!(
            CitySummaryError::EmptyInput.to_string(),
            "Entered value can't be empty string"
        );
    }

    #[test]
    fn test_is_caller_error() {
        assert!(CitySummaryError::EmptyInput.is_caller_error());
        assert!(CitySummaryError::NotFound("Python".into()).is_caller_error());
        assert!(!CitySummaryError::Timeout.is_caller_error());
        assert!(!CitySummaryError::Unauthorized.is_caller_error());
    }
}
