//! Playlist operations for the Chorus catalog API.
//!
//! Reads are public; mutations require a bearer token. When no token is
//! configured, mutations fail with `AuthRequired` before any request is sent.

use crate::error::{CatalogClientError, Result};
use crate::types::{AddSongRequest, ApiResponse, PlaylistDetail};
use chorus_core::types::{CreatePlaylist, Playlist, PlaylistId, TrackId};
use reqwest::Client;
use tracing::debug;

/// Playlists client for the Chorus catalog API.
pub struct PlaylistsClient<'a> {
    http: &'a Client,
    base_url: &'a str,
    bearer_token: Option<&'a str>,
}

impl<'a> PlaylistsClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str, bearer_token: Option<&'a str>) -> Self {
        Self {
            http,
            base_url,
            bearer_token,
        }
    }

    fn token(&self) -> Result<&'a str> {
        self.bearer_token.ok_or(CatalogClientError::AuthRequired)
    }

    /// Fetch all playlists.
    pub async fn list(&self) -> Result<Vec<Playlist>> {
        let url = format!("{}/playlists", self.base_url);
        debug!(url = %url, "Fetching playlists");

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if status.is_success() {
            let body: ApiResponse<Vec<Playlist>> = response.json().await.map_err(|e| {
                CatalogClientError::ParseError(format!("Failed to parse playlists response: {}", e))
            })?;

            debug!(playlists = body.data.len(), "Fetched playlists");

            Ok(body.data)
        } else if status.as_u16() == 401 {
            Err(CatalogClientError::AuthRequired)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(CatalogClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }

    /// Fetch a single playlist with its songs resolved.
    pub async fn detail(&self, playlist_id: &PlaylistId) -> Result<PlaylistDetail> {
        let url = format!("{}/playlists/{}", self.base_url, playlist_id);
        debug!(url = %url, "Fetching playlist detail");

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if status.is_success() {
            let body: ApiResponse<PlaylistDetail> = response.json().await.map_err(|e| {
                CatalogClientError::ParseError(format!(
                    "Failed to parse playlist detail response: {}",
                    e
                ))
            })?;

            debug!(
                playlist = %body.data.name,
                songs = body.data.songs.len(),
                "Fetched playlist detail"
            );

            Ok(body.data)
        } else if status.as_u16() == 401 {
            Err(CatalogClientError::AuthRequired)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(CatalogClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }

    /// Create a new playlist.
    pub async fn create(&self, playlist: &CreatePlaylist) -> Result<Playlist> {
        let token = self.token()?;
        let url = format!("{}/playlists", self.base_url);
        debug!(url = %url, name = %playlist.name, "Creating playlist");

        let response = self
            .http
            .post(&url)
            .bearer_auth(token)
            .json(playlist)
            .send()
            .await?;
        let status = response.status();

        if status.is_success() {
            let body: ApiResponse<Playlist> = response.json().await.map_err(|e| {
                CatalogClientError::ParseError(format!("Failed to parse playlist response: {}", e))
            })?;

            Ok(body.data)
        } else if status.as_u16() == 401 {
            Err(CatalogClientError::AuthRequired)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(CatalogClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }

    /// Add a song to a playlist.
    pub async fn add_song(&self, playlist_id: &PlaylistId, song_id: &TrackId) -> Result<()> {
        let token = self.token()?;
        let url = format!("{}/playlists/{}/songs", self.base_url, playlist_id);
        debug!(url = %url, song_id = %song_id, "Adding song to playlist");

        let request = AddSongRequest {
            song_id: song_id.clone(),
        };

        let response = self
            .http
            .post(&url)
            .bearer_auth(token)
            .json(&request)
            .send()
            .await?;
        let status = response.status();

        if status.is_success() {
            Ok(())
        } else if status.as_u16() == 401 {
            Err(CatalogClientError::AuthRequired)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(CatalogClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }

    /// Remove a song from a playlist.
    pub async fn remove_song(&self, playlist_id: &PlaylistId, song_id: &TrackId) -> Result<()> {
        let token = self.token()?;
        let url = format!(
            "{}/playlists/{}/songs/{}",
            self.base_url, playlist_id, song_id
        );
        debug!(url = %url, "Removing song from playlist");

        let response = self.http.delete(&url).bearer_auth(token).send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(())
        } else if status.as_u16() == 401 {
            Err(CatalogClientError::AuthRequired)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(CatalogClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }
}
