//! Network and transport errors.

use thiserror::Error;

/// Errors from the schema-fetching client.
///
/// These errors represent network-level failures, HTTP status errors,
/// and malformed responses encountered while fetching schema pages.
/// All of them are fatal for a generation run; the generator surfaces
/// them once and exits non-zero.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed due to network or protocol error.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned a non-success HTTP status code.
    #[error("HTTP {status}: {message}")]
    HttpStatus {
        /// The HTTP status code returned.
        status: u16,
        /// Error message from the response body.
        message: String,
    },

    /// The configured base URL could not be parsed.
    #[error("Invalid base URL '{url}': {source}")]
    InvalidBaseUrl {
        /// The offending URL string.
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// A schema page did not deserialize into the expected shape.
    #[error("Malformed types page: {0}")]
    MalformedPage(String),
}

impl ClientError {
    /// Returns `true` if this error is retryable.
    ///
    /// 5xx errors and 429 (rate limit) are transient; malformed pages and
    /// bad configuration are not.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::HttpStatus { status, .. } => *status >= 500 || *status == 429,
            Self::Request(e) => e.is_timeout() || e.is_connect(),
            Self::InvalidBaseUrl { .. } | Self::MalformedPage(_) => false,
        }
    }

    /// Returns the HTTP status code if this is an HTTP status error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            Self::Request(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_is_retryable() {
        let err = ClientError::HttpStatus {
            status: 500,
            message: "Internal Server Error".to_string(),
        };
        assert!(err.is_retryable());
    }

    #[test]
    fn rate_limit_is_retryable() {
        let err = ClientError::HttpStatus {
            status: 429,
            message: "Too Many Requests".to_string(),
        };
        assert!(err.is_retryable());
    }

    #[test]
    fn auth_failure_not_retryable() {
        let err = ClientError::HttpStatus {
            status: 401,
            message: "Unauthorized".to_string(),
        };
        assert!(!err.is_retryable());
    }

    #[test]
    fn malformed_page_not_retryable() {
        let err = ClientError::MalformedPage("missing pagination".to_string());
        assert!(!err.is_retryable());
    }

    #[test]
    fn status_code_only_for_http_errors() {
        let err = ClientError::HttpStatus {
            status: 404,
            message: "Not Found".to_string(),
        };
        assert_eq!(err.status_code(), Some(404));

        let malformed = ClientError::MalformedPage("bad".to_string());
        assert_eq!(malformed.status_code(), None);
    }
}
