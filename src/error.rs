//! Error types for the course home client

use thiserror::Error;

/// Course home client error
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Server returned an error
    #[error("Server error {status}: {message}")]
    Server { status: u16, message: String },

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Caller is anonymous or not enrolled in the course
    #[error("Unauthenticated: {0}")]
    Unauthenticated(String),

    /// Response body did not have the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Caller violated an input precondition
    #[error("Precondition violated: {0}")]
    Precondition(String),
}

/// Result type for client operations
pub type Result<T> = std::result::Result<T, ApiError>;
