//! Types for Chorus catalog API requests and responses.

use chorus_core::types::{PlaylistId, Track, TrackId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Configuration for connecting to a Chorus catalog server.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Base URL of the server (e.g., "https://api.chorus.example.com")
    pub url: String,
    /// Bearer token for write access to playlists (if authenticated)
    pub bearer_token: Option<String>,
}

impl CatalogConfig {
    /// Create a new catalog config with just the URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            bearer_token: None,
        }
    }

    /// Create a config with an existing bearer token.
    pub fn with_token(url: impl Into<String>, bearer_token: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            bearer_token: Some(bearer_token.into()),
        }
    }
}

// =============================================================================
// Response Envelope
// =============================================================================

/// Standard envelope wrapping every catalog API response body.
///
/// The server returns `{ "data": ... }` for all endpoints; callers only ever
/// see the unwrapped payload.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

// =============================================================================
// Playlist Types
// =============================================================================

/// A playlist as returned by the detail endpoint, with its songs resolved.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistDetail {
    pub id: PlaylistId,
    pub name: String,
    pub description: Option<String>,
    pub cover_url: Option<String>,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub songs: Vec<Track>,
}

/// Request body for adding a song to a playlist.
#[derive(Debug, Serialize)]
pub struct AddSongRequest {
    pub song_id: TrackId,
}
