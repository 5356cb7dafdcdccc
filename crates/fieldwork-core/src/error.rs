//! Error types for the fieldwork client library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all client operations.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Transport-level failures: connection refused, timeout, body decoding
    #[error("Request failed: {source}")]
    Transport {
        #[from]
        source: reqwest::Error,
    },
    /// Non-success HTTP status with the response body as context
    #[error("Backend returned HTTP {status}: {message}")]
    Http { status: u16, message: String },
    /// The backend rejected the bearer token; the stored session was discarded
    #[error("Not authenticated: the session token was rejected")]
    Unauthorized,
    /// Get-by-id miss, mapped from a 404 response
    #[error("{resource} with ID {id} not found")]
    NotFound { resource: &'static str, id: u64 },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Session token file I/O errors
    #[error("Session store error at path '{path}': {source}")]
    SessionStore {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> ApiError {
        ApiError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl ApiError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a configuration error with a message.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Refine a generic 404 into a typed not-found error for the resource
    /// the caller was fetching. Other errors pass through unchanged.
    pub fn for_resource(self, resource: &'static str, id: u64) -> Self {
        match self {
            ApiError::Http { status: 404, .. } => ApiError::NotFound { resource, id },
            other => other,
        }
    }
}

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ApiError>;
