//! Error types for playback management

use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// The media engine refused to load or start playback
    #[error("Engine error: {0}")]
    Engine(String),

    /// The session was used after shutdown
    #[error("Session is closed")]
    SessionClosed,
}

impl PlaybackError {
    /// Create an engine error from any message
    pub fn engine(message: impl Into<String>) -> Self {
        Self::Engine(message.into())
    }
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
