//! Error types for the genop client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to a generation service
///
/// Every variant here means the conversation with the service broke; a job
/// the service itself gave up on is not an error but a
/// [`JobOutcome::Failed`](genop_core::domain::job::JobOutcome) value.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request or status check could not be delivered at all
    #[error("transport failure: {0}")]
    Transport(String),

    /// The service answered with an error status code
    #[error("API error (status {status}): {message}")]
    Api {
        /// Status code reported by the service
        status: u16,
        /// Error message from the service
        message: String,
    },

    /// The service answered with something this client cannot interpret
    #[error("failed to parse response: {0}")]
    Parse(String),

    /// The request was rejected locally before reaching the service
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl ClientError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Create a transport error from a message
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Api { status, .. } if *status >= 400 && *status < 500)
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::Api { status, .. } if *status >= 500)
    }

    /// Check if this error is an authentication or authorization rejection
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::Api { status, .. } if *status == 401 || *status == 403)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_predicates() {
        let err = ClientError::api_error(403, "key lacks video access");
        assert!(err.is_client_error());
        assert!(err.is_auth_error());
        assert!(!err.is_server_error());

        let err = ClientError::api_error(503, "overloaded");
        assert!(err.is_server_error());
        assert!(!err.is_auth_error());

        let err = ClientError::transport("connection reset");
        assert!(!err.is_client_error());
        assert!(!err.is_server_error());
    }
}
