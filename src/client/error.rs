//! The error taxonomy every failed request settles into.

use reqwest::StatusCode;
use thiserror::Error;

/// Fallback notification text for an envelope failure without a message.
pub const GENERIC_FAILURE: &str = "request failed";

/// Fallback notification text for a transport failure without a message.
pub const GENERIC_NETWORK_FAILURE: &str = "network error";

/// Classified outcome of a failed request.
///
/// The display text of each variant is the user-facing notification the
/// classifier emits for it (where one is prescribed).
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP 401: the session is no longer valid.
    #[error("session expired, please log in again")]
    Unauthorized,

    /// HTTP 403.
    #[error("no permission to access this resource")]
    Forbidden,

    /// HTTP 404.
    #[error("requested resource does not exist")]
    NotFound,

    /// HTTP 500.
    #[error("internal server error")]
    ServerError,

    /// Any other non-2xx status.
    #[error("request failed with status {status}")]
    UnexpectedStatus { status: u16 },

    /// No HTTP response was received: timeout or connection failure.
    #[error("{message}")]
    Network { message: String },

    /// HTTP 2xx whose envelope carried a non-200 code.
    #[error("{}", message.as_deref().unwrap_or(GENERIC_FAILURE))]
    Application { code: i64, message: Option<String> },

    /// The resolved payload did not deserialize into the requested type.
    /// Local to the caller; produces no notification.
    #[error("failed to decode response payload: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },

    /// The descriptor could not be turned into a transport request.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl ApiError {
    /// Map an HTTP status to its classification.
    pub fn from_status(status: StatusCode) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
            StatusCode::FORBIDDEN => ApiError::Forbidden,
            StatusCode::NOT_FOUND => ApiError::NotFound,
            StatusCode::INTERNAL_SERVER_ERROR => ApiError::ServerError,
            other => ApiError::UnexpectedStatus {
                status: other.as_u16(),
            },
        }
    }

    /// Build a network failure, substituting the generic text for an empty
    /// transport message.
    pub fn network(message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            GENERIC_NETWORK_FAILURE.to_string()
        } else {
            message
        };
        ApiError::Network { message }
    }

    /// Whether this failure forces the logout-and-redirect recovery.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}
