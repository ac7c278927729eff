//! Error types for the review API client

use std::fmt;
use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when calling the review API
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a usable response (DNS, timeout, reset, bad JSON)
    #[error("Cannot get an answer from the API: {request}: {source}")]
    ConnectionError {
        /// Request parameters, for diagnostics
        request: RequestInfo,
        #[source]
        source: reqwest::Error,
    },

    /// API answered with a status other than 200
    #[error("API returned status {status} ({reason}): {body}")]
    InvalidResponseCode {
        /// HTTP status code
        status: u16,
        /// Canonical reason phrase
        reason: String,
        /// Raw response body
        body: String,
    },
}

/// Parameters of a homework status request
///
/// The OAuth token is never included in the rendered text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestInfo {
    pub url: String,
    pub from_date: i64,
}

impl fmt::Display for RequestInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "url = {}, headers = {{Authorization: OAuth ***}}, params = {{from_date: {}}}",
            self.url, self.from_date
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_info_hides_token() {
        let info = RequestInfo {
            url: "https://example.com/api/".to_string(),
            from_date: 1700000000,
        };
        let text = info.to_string();
        assert!(text.contains("from_date: 1700000000"));
        assert!(text.contains("OAuth ***"));
    }

    #[test]
    fn test_invalid_response_code_message() {
        let err = ClientError::InvalidResponseCode {
            status: 503,
            reason: "Service Unavailable".to_string(),
            body: String::new(),
        };
        assert_eq!(
            err.to_string(),
            "API returned status 503 (Service Unavailable): "
        );
    }
}
