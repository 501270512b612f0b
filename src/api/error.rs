//! Error types for API client implementations.

use thiserror::Error;

/// Errors an apps API client can report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Transport error: {message}")]
    Transport {
        /// Description of the network failure
        message: String,
    },

    #[error("Request failed with status {status}: {message}")]
    Status {
        /// HTTP status code returned by the server
        status: u16,
        /// Error message from the response body
        message: String,
    },

    #[error("App {id} not found")]
    NotFound {
        /// The id that was not found
        id: i32,
    },

    #[error("Malformed response: {message}")]
    Malformed {
        /// Why the response could not be decoded
        message: String,
    },
}

impl ApiError {
    /// HTTP status associated with the error, when there is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::NotFound { .. } => Some(404),
            ApiError::Transport { .. } | ApiError::Malformed { .. } => None,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(error: serde_json::Error) -> Self {
        ApiError::Malformed {
            message: error.to_string(),
        }
    }
}
