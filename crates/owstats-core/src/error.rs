//! Error types for the career profile scraper
//!
//! Transport failures are mapped onto a small semantic taxonomy so callers can
//! tell a missing player apart from upstream markup changes or outages.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for all profile scraping operations
///
/// Implements Display for human-readable messages and Serialize
/// so the error can be handed to JSON front-ends as a plain string.
#[derive(Error, Debug)]
pub enum OwStatsError {
    /// Locale is not one of the supported locale codes
    #[error("Invalid locale: {0}")]
    InvalidLocale(String),

    /// Platform string does not name a known platform
    #[error("Invalid platform: {0}")]
    InvalidPlatform(String),

    /// PC profiles are region scoped and need a region segment
    #[error("A region is required for PC profiles")]
    MissingRegion,

    /// Upstream answered 404 for the requested profile
    #[error("Profile not found: {0}")]
    ProfileNotFound(String),

    /// Upstream answered 500, the page markup most likely changed
    #[error("Technical exception - HTML structure may have changed")]
    StructureChanged,

    /// Upstream answered 502
    #[error("Technical exception - upstream not reachable")]
    Unreachable,

    /// Any other status, or no response at all
    #[error("Technical exception - unidentified transport error: {message}")]
    UnknownTransport {
        /// HTTP status if a response was received
        status: Option<u16>,
        /// Underlying failure description
        message: String,
    },

    /// Failed to decode a document or response body
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

impl OwStatsError {
    /// Maps a non-success HTTP status onto the error taxonomy
    ///
    /// `url` is only used to describe the missing profile.
    pub fn from_status(status: u16, url: &str) -> Self {
        match status {
            404 => Self::ProfileNotFound(url.to_string()),
            500 => Self::StructureChanged,
            502 => Self::Unreachable,
            other => Self::UnknownTransport {
                status: Some(other),
                message: format!("unexpected status {} for {}", other, url),
            },
        }
    }
}

impl From<reqwest::Error> for OwStatsError {
    fn from(error: reqwest::Error) -> Self {
        match error.status() {
            Some(status) => Self::from_status(status.as_u16(), error.url().map_or("", |u| u.as_str())),
            None => Self::UnknownTransport {
                status: None,
                message: error.to_string(),
            },
        }
    }
}

impl Serialize for OwStatsError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for profile scraping operations
pub type Result<T> = std::result::Result<T, OwStatsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_not_found() {
        let error = OwStatsError::from_status(404, "https://example.test/career/pc/us/Foo-1");
        match error {
            OwStatsError::ProfileNotFound(url) => assert!(url.ends_with("Foo-1")),
            other => panic!("Expected ProfileNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_from_status_server_errors() {
        assert!(matches!(OwStatsError::from_status(500, ""), OwStatsError::StructureChanged));
        assert!(matches!(OwStatsError::from_status(502, ""), OwStatsError::Unreachable));
    }

    #[test]
    fn test_from_status_other() {
        let error = OwStatsError::from_status(418, "x");
        assert!(matches!(
            error,
            OwStatsError::UnknownTransport { status: Some(418), .. }
        ));
    }

    #[test]
    fn test_error_display_invalid_locale() {
        let error = OwStatsError::InvalidLocale("xx-yy".to_string());
        assert_eq!(error.to_string(), "Invalid locale: xx-yy");
    }

    #[test]
    fn test_error_display_missing_region() {
        let error = OwStatsError::MissingRegion;
        assert_eq!(error.to_string(), "A region is required for PC profiles");
    }

    #[test]
    fn test_error_serialize() {
        let error = OwStatsError::Unreachable;
        let json = serde_json::to_string(&error).expect("Serialization should succeed");
        assert_eq!(json, "\"Technical exception - upstream not reachable\"");
    }

    #[test]
    fn test_error_serialize_with_message() {
        let error = OwStatsError::ProfileNotFound("Foo-1234".to_string());
        let json = serde_json::to_string(&error).expect("Serialization should succeed");
        assert_eq!(json, "\"Profile not found: Foo-1234\"");
    }
}
