//! Song catalog operations for the Chorus catalog API.

use crate::error::{CatalogClientError, Result};
use crate::types::ApiResponse;
use chorus_core::types::{CreateTrack, Track, TrackId};
use reqwest::Client;
use tracing::debug;

/// Songs client for the Chorus catalog API.
pub struct SongsClient<'a> {
    http: &'a Client,
    base_url: &'a str,
}

impl<'a> SongsClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str) -> Self {
        Self { http, base_url }
    }

    /// Fetch the full song catalog.
    pub async fn list(&self) -> Result<Vec<Track>> {
        let url = format!("{}/songs", self.base_url);
        debug!(url = %url, "Fetching songs");

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if status.is_success() {
            let body: ApiResponse<Vec<Track>> = response.json().await.map_err(|e| {
                CatalogClientError::ParseError(format!("Failed to parse songs response: {}", e))
            })?;

            debug!(songs = body.data.len(), "Fetched songs");

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

    /// Search songs by title, case-insensitively.
    ///
    /// The catalog API has no search endpoint; this fetches the full catalog
    /// and filters on the client.
    pub async fn search(&self, query: &str) -> Result<Vec<Track>> {
        let needle = query.to_lowercase();
        let songs = self.list().await?;

        let matches: Vec<Track> = songs
            .into_iter()
            .filter(|song| song.title.to_lowercase().contains(&needle))
            .collect();

        debug!(query = %query, matches = matches.len(), "Searched songs");

        Ok(matches)
    }

    /// Create a new song in the catalog.
    pub async fn create(&self, song: &CreateTrack) -> Result<Track> {
        let url = format!("{}/songs", self.base_url);
        debug!(url = %url, title = %song.title, "Creating song");

        let response = self.http.post(&url).json(song).send().await?;
        let status = response.status();

        if status.is_success() {
            let body: ApiResponse<Track> = response.json().await.map_err(|e| {
                CatalogClientError::ParseError(format!("Failed to parse song response: {}", e))
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

    /// Record a completed play of a song, bumping its play count.
    pub async fn record_play(&self, song_id: &TrackId) -> Result<()> {
        let url = format!("{}/songs/{}/play", self.base_url, song_id);
        debug!(url = %url, "Recording play");

        let response = self.http.post(&url).send().await?;
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
