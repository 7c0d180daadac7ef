//! Error taxonomy for management API calls.
//!
//! # Design
//! One closed set of failure kinds, produced by exactly one layer each:
//! `Construction` at request-build time, `Encode` when a request body cannot
//! be serialized, `Transport` when the exchange never completes, `Status`
//! when the broker answers with a non-2xx status, and `Decode` when a 2xx
//! body does not match the expected shape. Every layer returns rather than
//! logging-and-continuing, and nothing retries.

use thiserror::Error;

/// Errors returned by [`Client`](crate::Client) operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The base endpoint or the combined request URL is not a valid URL.
    #[error("invalid request URL: {0}")]
    Construction(#[from] url::ParseError),

    /// The request body could not be serialized to JSON.
    #[error("request body encoding failed: {0}")]
    Encode(serde_json::Error),

    /// The exchange never completed: DNS, connect, timeout, or TLS failure.
    #[error("transport failure: {0}")]
    Transport(#[from] ureq::Error),

    /// The broker answered with a non-2xx status. `message` carries the
    /// broker's diagnostic (`error`/`reason` body fields) when present,
    /// otherwise the canonical status phrase.
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// A success response body did not decode into the expected shape.
    #[error("response decoding failed: {0}")]
    Decode(serde_json::Error),
}

impl Error {
    /// True iff the broker reported the resource as absent (HTTP 404).
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Status { status: 404, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_not_found_matches_only_404() {
        let err = Error::Status {
            status: 404,
            message: "Object Not Found".to_string(),
        };
        assert!(err.is_not_found());

        let err = Error::Status {
            status: 500,
            message: "Internal Server Error".to_string(),
        };
        assert!(!err.is_not_found());
    }

    #[test]
    fn status_error_displays_code_and_message() {
        let err = Error::Status {
            status: 404,
            message: "Object Not Found: parameter not found".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 404: Object Not Found: parameter not found");
    }
}
