//! Catalog service abstraction
//!
//! The playback session talks to the music catalog exclusively through this
//! trait, so the session logic stays independent of any concrete transport.
//! The HTTP client crate provides the production implementation; tests swap
//! in lightweight stubs.

use crate::error::Result;
use crate::types::{Playlist, PlaylistId, Track, TrackId};
use async_trait::async_trait;

/// Read access to the music catalog plus play tracking.
///
/// All operations are asynchronous and fallible. Implementations must be
/// shareable across tasks.
#[async_trait]
pub trait CatalogService: Send + Sync {
    // ========================================================================
    // Library Operations
    // ========================================================================

    /// Fetch every song in the catalog
    async fn list_songs(&self) -> Result<Vec<Track>>;

    /// Fetch every playlist visible to the caller
    async fn list_playlists(&self) -> Result<Vec<Playlist>>;

    /// Fetch the songs of a single playlist, in playlist order
    async fn playlist_songs(&self, playlist_id: &PlaylistId) -> Result<Vec<Track>>;

    /// Search songs by title, case-insensitively
    async fn search_songs(&self, query: &str) -> Result<Vec<Track>>;

    // ========================================================================
    // Play Tracking
    // ========================================================================

    /// Record that a track started playing
    async fn record_play(&self, track_id: &TrackId) -> Result<()>;
}
