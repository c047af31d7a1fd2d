//! Error types for the Chorus catalog client.

use chorus_core::ChorusError;
use thiserror::Error;

/// Errors that can occur when talking to a Chorus catalog server.
#[derive(Error, Debug)]
pub enum CatalogClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error response
    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// Authentication required but no token available
    #[error("Authentication required")]
    AuthRequired,

    /// Invalid server URL
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse server response
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

impl From<CatalogClientError> for ChorusError {
    fn from(err: CatalogClientError) -> Self {
        match err {
            CatalogClientError::Request(e) => ChorusError::network(e.to_string()),
            CatalogClientError::ServerError { status, message } => {
                ChorusError::catalog(format!("server error ({status}): {message}"))
            }
            CatalogClientError::AuthRequired => ChorusError::AuthRequired,
            CatalogClientError::InvalidUrl(message) => ChorusError::invalid_input(message),
            CatalogClientError::ParseError(message) => ChorusError::catalog(message),
        }
    }
}

/// Result type for catalog client operations.
pub type Result<T> = std::result::Result<T, CatalogClientError>;
