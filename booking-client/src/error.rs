//! Client error types

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Resource already exists
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Any other non-success status returned by the API
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Path does not match any known route
    #[error("Unknown route: {0}")]
    InvalidRoute(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Last fetch failure as recorded on an entity store.
///
/// Cheap to clone. Two values are equal only when they come from the same
/// failure, so re-publishing an unchanged store never looks like a new error.
#[derive(Debug, Clone)]
pub struct FetchError(Arc<ClientError>);

impl FetchError {
    pub fn new(error: ClientError) -> Self {
        Self(Arc::new(error))
    }
}

impl From<ClientError> for FetchError {
    fn from(error: ClientError) -> Self {
        Self::new(error)
    }
}

impl PartialEq for FetchError {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for FetchError {
    type Target = ClientError;

    fn deref(&self) -> &ClientError {
        &self.0
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
