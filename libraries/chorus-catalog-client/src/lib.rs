//! Chorus Catalog Client
//!
//! HTTP client library for the Chorus catalog API.
//!
//! # Features
//!
//! - **Song catalog**: Fetch songs, client-side title search, play tracking
//! - **Artist and album management**: Full CRUD for catalog curation
//! - **Playlists**: Public reads, bearer-token mutations
//! - **`CatalogService`**: [`CatalogClient`] implements the core service trait
//!   so the playback session can consume it directly
//!
//! # Example
//!
//! ```ignore
//! use chorus_catalog_client::{CatalogClient, CatalogConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create client
//!     let config = CatalogConfig::new("https://api.chorus.example.com");
//!     let client = CatalogClient::new(config)?;
//!
//!     // Browse the catalog
//!     let songs_client = client.songs().await;
//!     let songs = songs_client.client().list().await?;
//!     println!("Found {} songs", songs.len());
//!
//!     // Playlist mutations need a bearer token
//!     client.set_token("secret".to_string()).await;
//!     let playlists_client = client.playlists().await;
//!     let playlists = playlists_client.client().list().await?;
//!     println!("Found {} playlists", playlists.len());
//!
//!     Ok(())
//! }
//! ```

mod albums;
mod artists;
mod client;
mod error;
mod playlists;
mod songs;
mod types;

// Re-export main types
pub use client::{
    AlbumsClientHandle, ArtistsClientHandle, CatalogClient, PlaylistsClientHandle,
    SongsClientHandle,
};
pub use error::{CatalogClientError, Result};
pub use types::{AddSongRequest, ApiResponse, CatalogConfig, PlaylistDetail};

// Re-export sub-clients for direct use if needed
pub use albums::AlbumsClient;
pub use artists::ArtistsClient;
pub use playlists::PlaylistsClient;
pub use songs::SongsClient;
