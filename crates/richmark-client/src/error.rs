//! Client error types

use thiserror::Error;

/// Errors that can occur while talking to the portal API
#[derive(Debug, Error)]
pub enum ClientError {
    /// The transport could not complete the request
    #[error("Transport error: {0}")]
    Transport(String),

    /// The server answered with a non-success status (after retries)
    #[error("{method} {url} failed with status {status}")]
    Status {
        method: String,
        url: String,
        status: u16,
    },

    /// The token refresh callback failed
    #[error("Token refresh failed: {0}")]
    TokenRefresh(String),

    /// Request or response body was not valid JSON for the expected type
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ClientError {
    /// Create a transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Create a token refresh error
    pub fn token_refresh(message: impl Into<String>) -> Self {
        Self::TokenRefresh(message.into())
    }

    /// HTTP status when this is a status error
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
