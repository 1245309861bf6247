//! Error types for the heartbeat forwarder.
//!
//! Uses `thiserror` for ergonomic error handling with automatic `Display` and
//! `Error` trait implementations. Every variant maps to exactly one process
//! exit code via [`TrackioError::exit_code`], so the host extension can react
//! to failures without parsing output.

use reqwest::StatusCode;
use thiserror::Error;

/// Exit code for a successful run (batch sent, or nothing to send).
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code for general errors (missing endpoint, stdin read failure).
pub const EXIT_GENERAL_ERROR: i32 = 1;
/// Exit code for network-level failures and non-auth API errors.
pub const EXIT_NETWORK_OR_API: i32 = 102;
/// Exit code for auth problems (missing key, 401 from the API).
pub const EXIT_INVALID_API_KEY: i32 = 104;

/// The primary error type for forwarder operations.
#[derive(Error, Debug)]
pub enum TrackioError {
    /// The API key flag was absent or empty.
    #[error("API key is required via --key flag")]
    MissingCredential,

    /// The API URL flag was absent or empty.
    #[error("API URL is required via --api-url flag")]
    MissingEndpoint,

    /// Reading the heartbeat batch from stdin failed.
    #[error("failed to read heartbeats from stdin: {0}")]
    InputRead(#[from] std::io::Error),

    /// Transport-level failure: DNS, refused connection, timeout.
    #[error("HTTP request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The server answered with a status >= 400.
    #[error("API error (status {status}): {body}")]
    Api { status: u16, body: String },
}

impl TrackioError {
    /// Process exit code for this failure, per the host extension's contract.
    pub fn exit_code(&self) -> i32 {
        match self {
            TrackioError::MissingCredential => EXIT_INVALID_API_KEY,
            TrackioError::MissingEndpoint | TrackioError::InputRead(_) => EXIT_GENERAL_ERROR,
            TrackioError::Api { status, .. }
                if *status == StatusCode::UNAUTHORIZED.as_u16() =>
            {
                EXIT_INVALID_API_KEY
            }
            TrackioError::Transport(_) | TrackioError::Api { .. } => EXIT_NETWORK_OR_API,
        }
    }
}

/// A specialized `Result` type for forwarder operations.
pub type Result<T> = std::result::Result<T, TrackioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TrackioError::Api {
            status: 401,
            body: "invalid api key".to_string(),
        };
        assert_eq!(err.to_string(), "API error (status 401): invalid api key");

        assert_eq!(
            TrackioError::MissingCredential.to_string(),
            "API key is required via --key flag"
        );
        assert_eq!(
            TrackioError::MissingEndpoint.to_string(),
            "API URL is required via --api-url flag"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: TrackioError = io_err.into();
        assert!(matches!(err, TrackioError::InputRead(_)));
        assert!(err.to_string().contains("pipe closed"));
    }

    #[test]
    fn test_exit_code_for_config_errors() {
        assert_eq!(
            TrackioError::MissingCredential.exit_code(),
            EXIT_INVALID_API_KEY
        );
        assert_eq!(TrackioError::MissingEndpoint.exit_code(), EXIT_GENERAL_ERROR);
    }

    #[test]
    fn test_exit_code_for_input_errors() {
        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        assert_eq!(
            TrackioError::InputRead(io_err).exit_code(),
            EXIT_GENERAL_ERROR
        );
    }

    #[test]
    fn test_exit_code_distinguishes_unauthorized() {
        let unauthorized = TrackioError::Api {
            status: 401,
            body: String::new(),
        };
        assert_eq!(unauthorized.exit_code(), EXIT_INVALID_API_KEY);

        for status in [400, 403, 404, 429, 500, 503] {
            let err = TrackioError::Api {
                status,
                body: String::new(),
            };
            assert_eq!(err.exit_code(), EXIT_NETWORK_OR_API, "status {}", status);
        }
    }
}
