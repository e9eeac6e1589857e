//! Error types for WatchMode API operations.

use thiserror::Error;

/// Errors returned by the WatchMode API client.
///
/// The variants keep transport failures, catalog-side rejections, and
/// malformed payloads distinguishable so callers can decide what is worth
/// retrying and what is not.
#[derive(Debug, Error)]
#[allow(clippy::module_name_repetitions)]
pub enum WatchModeError {
    /// Connectivity or timeout failure; no response was obtained.
    #[error("network request failed: {source}")]
    Transport {
        /// The underlying HTTP client error.
        #[source]
        source: reqwest::Error,
    },

    /// Non-success response from the catalog.
    #[error("WatchMode API error (HTTP {status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Catalog-provided message, or the raw body when unparseable.
        message: String,
    },

    /// The catalog reports no title with the given id.
    #[error("no title with id {id}")]
    NotFound {
        /// The unknown title id.
        id: String,
    },

    /// The response body does not satisfy the expected wire shape.
    #[error("failed to decode {endpoint} response: {source}")]
    Decode {
        /// Request path whose response failed to decode.
        endpoint: String,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// A request path could not be joined onto the base URL.
    #[error("invalid request path {path}: {source}")]
    Url {
        /// The offending request path.
        path: String,
        /// The underlying URL parse error.
        #[source]
        source: url::ParseError,
    },

    /// Client construction failed (missing builder field or HTTP setup).
    #[error("client configuration error: {message}")]
    Config {
        /// What was missing or invalid.
        message: String,
    },
}

impl WatchModeError {
    /// Whether retrying the request could plausibly succeed.
    ///
    /// Only transport failures qualify; catalog rejections and malformed
    /// payloads would fail the same way again.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    /// Whether this is the catalog's not-found signal.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_is_not_retryable() {
        // Arrange
        let error = WatchModeError::Api {
            status: 500,
            message: String::from("server error"),
        };

        // Assert
        assert!(!error.is_retryable());
    }

    #[test]
    fn test_not_found_display_names_id() {
        // Arrange
        let error = WatchModeError::NotFound {
            id: String::from("3173903"),
        };

        // Assert
        assert_eq!(error.to_string(), "no title with id 3173903");
        assert!(error.is_not_found());
    }

    #[test]
    fn test_config_error_display() {
        // Arrange
        let error = WatchModeError::Config {
            message: String::from("api_key is required"),
        };

        // Assert
        assert!(error.to_string().contains("api_key is required"));
    }
}
