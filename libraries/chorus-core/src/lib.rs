//! Chorus Core
//!
//! Shared domain types, error handling, and collaborator traits for Chorus.
//!
//! This crate is the foundation the playback session and the catalog client
//! build on. It owns:
//! - **Domain Types**: `Track`, `Artist`, `Album`, `Playlist` and their ids
//! - **Collaborator Traits**: `CatalogService`
//! - **Error Handling**: unified `ChorusError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use chorus_core::types::{ArtistId, Track};
//!
//! // Tracks usually come from the catalog; building one by hand is mostly
//! // useful in tests.
//! let track = Track::new(
//!     "Golden Hour",
//!     ArtistId::generate(),
//!     "https://cdn.example.com/audio/golden-hour.mp3",
//!     215,
//! );
//!
//! assert_eq!(track.duration().as_secs(), 215);
//! assert_eq!(track.artist_name(), "Unknown Artist");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod catalog;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use catalog::CatalogService;
pub use error::{ChorusError, Result};

// Export all types
pub use types::{
    Album, AlbumId, Artist, ArtistId, CreateAlbum, CreateArtist, CreatePlaylist, CreateTrack,
    Playlist, PlaylistId, Track, TrackId, UpdateAlbum, UpdateArtist,
};
