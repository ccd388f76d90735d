//! Error types for the cluster client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur while talking to the cluster.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Error response from the cluster.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// Response body did not match the expected shape.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}
