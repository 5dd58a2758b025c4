//! Error types and status classification for the stats crate.
//!
//! This module provides:
//! - [`StatsError`]: The main error enum for all pipeline operations
//! - [`ErrorKind`]: Classification used to pick a response status

mod kind;

pub use kind::ErrorKind;

use thiserror::Error;

/// Errors that can occur while answering a stats query.
///
/// Every variant carries the user-visible message. The message is surfaced
/// verbatim to API callers, so it must never contain internal state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    /// A required query parameter (player name or team) was missing.
    #[error("{0}")]
    Validation(String),

    /// The player identifier could not be derived, even after the
    /// prefix heuristic.
    #[error("{0}")]
    Resolution(String),

    /// Fetching a page failed at the transport level or returned a
    /// non-success status.
    #[error("{message}")]
    Network {
        /// The URL that was being fetched
        url: String,
        /// Description of the failure
        message: String,
    },

    /// The fetched page did not contain the expected structure.
    #[error("{0}")]
    Extraction(String),

    /// An embedded data blob was found but could not be decoded.
    #[error("{0}")]
    Parse(String),

    /// Anything else. Should not happen in normal operation.
    #[error("{0}")]
    Internal(String),
}

impl StatsError {
    /// Build a network error from a `reqwest` failure.
    pub fn network(url: &str, err: reqwest::Error) -> Self {
        Self::Network {
            url: url.to_string(),
            message: err.to_string(),
        }
    }

    /// Returns the classification of this error.
    ///
    /// ```
    /// use dugout_stats::errors::{ErrorKind, StatsError};
    ///
    /// let error = StatsError::Validation("Name or team of batter not found.".to_string());
    /// assert_eq!(error.kind(), ErrorKind::Validation);
    /// assert_eq!(error.status_code(), 400);
    /// ```
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::Resolution(_) => ErrorKind::Resolution,
            Self::Network { .. } => ErrorKind::Network,
            Self::Extraction(_) => ErrorKind::Extraction,
            Self::Parse(_) => ErrorKind::Parse,
            Self::Internal(_) => ErrorKind::Internal,
        }
    }

    /// HTTP-style status code for this error.
    pub fn status_code(&self) -> u16 {
        self.kind().status_code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_is_bad_request() {
        let error = StatsError::Validation("Name or team of batter not found.".to_string());
        assert_eq!(error.status_code(), 400);
    }

    #[test]
    fn test_derived_errors_are_bad_request() {
        assert_eq!(
            StatsError::Resolution("Baseball Reference Key not found.".into()).status_code(),
            400
        );
        assert_eq!(StatsError::Extraction("Unable to get lineups.".into()).status_code(), 400);
        assert_eq!(StatsError::Parse("Failed to parse players array.".into()).status_code(), 400);
    }

    #[test]
    fn test_network_and_internal_are_server_errors() {
        let error = StatsError::Network {
            url: "https://example.test/page".into(),
            message: "connection refused".into(),
        };
        assert_eq!(error.status_code(), 500);
        assert_eq!(StatsError::Internal("boom".into()).status_code(), 500);
    }

    #[test]
    fn test_error_display_is_message_only() {
        let error = StatsError::Network {
            url: "https://example.test/page".into(),
            message: "HTTP 503 Service Unavailable".into(),
        };
        assert_eq!(format!("{}", error), "HTTP 503 Service Unavailable");

        let error = StatsError::Resolution("Baseball Reference Key not found.".into());
        assert_eq!(format!("{}", error), "Baseball Reference Key not found.");
    }
}
