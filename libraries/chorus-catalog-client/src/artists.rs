//! Artist management operations for the Chorus catalog API.

use crate::error::{CatalogClientError, Result};
use crate::types::ApiResponse;
use chorus_core::types::{Artist, ArtistId, CreateArtist, UpdateArtist};
use reqwest::Client;
use tracing::debug;

/// Artists client for the Chorus catalog API.
pub struct ArtistsClient<'a> {
    http: &'a Client,
    base_url: &'a str,
}

impl<'a> ArtistsClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str) -> Self {
        Self { http, base_url }
    }

    /// Fetch all artists.
    pub async fn list(&self) -> Result<Vec<Artist>> {
        let url = format!("{}/artists", self.base_url);
        debug!(url = %url, "Fetching artists");

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if status.is_success() {
            let body: ApiResponse<Vec<Artist>> = response.json().await.map_err(|e| {
                CatalogClientError::ParseError(format!("Failed to parse artists response: {}", e))
            })?;

            debug!(artists = body.data.len(), "Fetched artists");

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

    /// Fetch a single artist by id.
    pub async fn get(&self, artist_id: &ArtistId) -> Result<Artist> {
        let url = format!("{}/artists/{}", self.base_url, artist_id);
        debug!(url = %url, "Fetching artist");

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if status.is_success() {
            let body: ApiResponse<Artist> = response.json().await.map_err(|e| {
                CatalogClientError::ParseError(format!("Failed to parse artist response: {}", e))
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

    /// Create a new artist.
    pub async fn create(&self, artist: &CreateArtist) -> Result<Artist> {
        let url = format!("{}/artists", self.base_url);
        debug!(url = %url, name = %artist.name, "Creating artist");

        let response = self.http.post(&url).json(artist).send().await?;
        let status = response.status();

        if status.is_success() {
            let body: ApiResponse<Artist> = response.json().await.map_err(|e| {
                CatalogClientError::ParseError(format!("Failed to parse artist response: {}", e))
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

    /// Update an existing artist. Only the fields set in `changes` are touched.
    pub async fn update(&self, artist_id: &ArtistId, changes: &UpdateArtist) -> Result<Artist> {
        let url = format!("{}/artists/{}", self.base_url, artist_id);
        debug!(url = %url, "Updating artist");

        let response = self.http.put(&url).json(changes).send().await?;
        let status = response.status();

        if status.is_success() {
            let body: ApiResponse<Artist> = response.json().await.map_err(|e| {
                CatalogClientError::ParseError(format!("Failed to parse artist response: {}", e))
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

    /// Delete an artist.
    pub async fn delete(&self, artist_id: &ArtistId) -> Result<()> {
        let url = format!("{}/artists/{}", self.base_url, artist_id);
        debug!(url = %url, "Deleting artist");

        let response = self.http.delete(&url).send().await?;
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
