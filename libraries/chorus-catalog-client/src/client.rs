//! Main Chorus catalog client.

use crate::albums::AlbumsClient;
use crate::artists::ArtistsClient;
use crate::error::{CatalogClientError, Result};
use crate::playlists::PlaylistsClient;
use crate::songs::SongsClient;
use crate::types::CatalogConfig;
use async_trait::async_trait;
use chorus_core::types::{Playlist, PlaylistId, Track, TrackId};
use chorus_core::{CatalogService, ChorusError};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::info;

/// Main client for interacting with a Chorus catalog server.
///
/// The client owns the HTTP connection pool and the server configuration,
/// and provides access to song, artist, album, and playlist operations.
/// It also implements [`CatalogService`], which is how the playback session
/// consumes it.
///
/// # Example
///
/// ```ignore
/// use chorus_catalog_client::{CatalogClient, CatalogConfig};
///
/// // Create client
/// let config = CatalogConfig::new("https://api.chorus.example.com");
/// let client = CatalogClient::new(config)?;
///
/// // Browse the catalog
/// let songs = client.songs().await.client().list().await?;
/// println!("Found {} songs", songs.len());
///
/// // Playlist mutations need a bearer token
/// client.set_token("secret".to_string()).await;
/// ```
#[derive(Debug)]
pub struct CatalogClient {
    http: Client,
    config: Arc<RwLock<CatalogConfig>>,
}

impl CatalogClient {
    /// Create a new client with the given configuration.
    pub fn new(config: CatalogConfig) -> Result<Self> {
        // Validate URL
        if config.url.is_empty() {
            return Err(CatalogClientError::InvalidUrl("URL cannot be empty".into()));
        }

        // Parse and normalize URL
        let url = config.url.trim_end_matches('/').to_string();
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(CatalogClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let normalized_config = CatalogConfig {
            url,
            bearer_token: config.bearer_token,
        };

        // Create HTTP client with reasonable defaults
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("Chorus/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(CatalogClientError::Request)?;

        Ok(Self {
            http,
            config: Arc::new(RwLock::new(normalized_config)),
        })
    }

    /// Get the server URL.
    pub async fn url(&self) -> String {
        self.config.read().await.url.clone()
    }

    /// Check if the client has a bearer token.
    pub async fn is_authenticated(&self) -> bool {
        self.config.read().await.bearer_token.is_some()
    }

    /// Set the bearer token (e.g., from stored credentials).
    pub async fn set_token(&self, bearer_token: String) {
        let mut config = self.config.write().await;
        config.bearer_token = Some(bearer_token);
    }

    /// Clear the stored bearer token.
    pub async fn clear_token(&self) {
        let mut config = self.config.write().await;
        config.bearer_token = None;
        info!("Cleared bearer token");
    }

    /// Get a songs client for catalog and play-tracking operations.
    pub async fn songs(&self) -> SongsClientHandle {
        let url = self.url().await;

        SongsClientHandle {
            http: self.http.clone(),
            url,
        }
    }

    /// Get an artists client for artist management.
    pub async fn artists(&self) -> ArtistsClientHandle {
        let url = self.url().await;

        ArtistsClientHandle {
            http: self.http.clone(),
            url,
        }
    }

    /// Get an albums client for album management.
    pub async fn albums(&self) -> AlbumsClientHandle {
        let url = self.url().await;

        AlbumsClientHandle {
            http: self.http.clone(),
            url,
        }
    }

    /// Get a playlists client.
    ///
    /// Reads work without a token; mutations fail with `AuthRequired`
    /// unless a bearer token is configured.
    pub async fn playlists(&self) -> PlaylistsClientHandle {
        let config = self.config.read().await;
        let url = config.url.clone();
        let bearer_token = config.bearer_token.clone();
        drop(config);

        PlaylistsClientHandle {
            http: self.http.clone(),
            url,
            bearer_token,
        }
    }
}

/// Handle for song operations.
///
/// This is returned by `CatalogClient::songs()` and provides access to
/// song-related methods.
pub struct SongsClientHandle {
    http: Client,
    url: String,
}

impl SongsClientHandle {
    /// Get the songs client.
    pub fn client(&self) -> SongsClient<'_> {
        SongsClient::new(&self.http, &self.url)
    }
}

// Note: We don't implement Deref because it would require unsafe lifetime
// extension. Use .client() to get a borrowed client with proper bounds.

/// Handle for artist operations.
pub struct ArtistsClientHandle {
    http: Client,
    url: String,
}

impl ArtistsClientHandle {
    /// Get the artists client.
    pub fn client(&self) -> ArtistsClient<'_> {
        ArtistsClient::new(&self.http, &self.url)
    }
}

/// Handle for album operations.
pub struct AlbumsClientHandle {
    http: Client,
    url: String,
}

impl AlbumsClientHandle {
    /// Get the albums client.
    pub fn client(&self) -> AlbumsClient<'_> {
        AlbumsClient::new(&self.http, &self.url)
    }
}

/// Handle for playlist operations.
pub struct PlaylistsClientHandle {
    http: Client,
    url: String,
    bearer_token: Option<String>,
}

impl PlaylistsClientHandle {
    /// Get the playlists client.
    pub fn client(&self) -> PlaylistsClient<'_> {
        PlaylistsClient::new(&self.http, &self.url, self.bearer_token.as_deref())
    }
}

#[async_trait]
impl CatalogService for CatalogClient {
    async fn list_songs(&self) -> chorus_core::Result<Vec<Track>> {
        let url = self.url().await;

        let songs = SongsClient::new(&self.http, &url).list().await?;
        Ok(songs)
    }

    async fn list_playlists(&self) -> chorus_core::Result<Vec<Playlist>> {
        let url = self.url().await;

        let playlists = PlaylistsClient::new(&self.http, &url, None).list().await?;
        Ok(playlists)
    }

    async fn playlist_songs(&self, playlist_id: &PlaylistId) -> chorus_core::Result<Vec<Track>> {
        let url = self.url().await;

        let playlists = PlaylistsClient::new(&self.http, &url, None);
        match playlists.detail(playlist_id).await {
            Ok(detail) => Ok(detail.songs),
            Err(CatalogClientError::ServerError { status: 404, .. }) => {
                Err(ChorusError::PlaylistNotFound(playlist_id.clone()))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn search_songs(&self, query: &str) -> chorus_core::Result<Vec<Track>> {
        let url = self.url().await;

        let matches = SongsClient::new(&self.http, &url).search(query).await?;
        Ok(matches)
    }

    async fn record_play(&self, track_id: &TrackId) -> chorus_core::Result<()> {
        let url = self.url().await;

        let songs = SongsClient::new(&self.http, &url);
        match songs.record_play(track_id).await {
            Ok(()) => Ok(()),
            Err(CatalogClientError::ServerError { status: 404, .. }) => {
                Err(ChorusError::TrackNotFound(track_id.clone()))
            }
            Err(e) => Err(e.into()),
        }
    }
}
