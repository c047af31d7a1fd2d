//! Album management operations for the Chorus catalog API.

use crate::error::{CatalogClientError, Result};
use crate::types::ApiResponse;
use chorus_core::types::{Album, AlbumId, CreateAlbum, UpdateAlbum};
use reqwest::Client;
use tracing::debug;

/// Albums client for the Chorus catalog API.
pub struct AlbumsClient<'a> {
    http: &'a Client,
    base_url: &'a str,
}

impl<'a> AlbumsClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str) -> Self {
        Self { http, base_url }
    }

    /// Fetch all albums.
    pub async fn list(&self) -> Result<Vec<Album>> {
        let url = format!("{}/albums", self.base_url);
        debug!(url = %url, "Fetching albums");

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if status.is_success() {
            let body: ApiResponse<Vec<Album>> = response.json().await.map_err(|e| {
                CatalogClientError::ParseError(format!("Failed to parse albums response: {}", e))
            })?;

            debug!(albums = body.data.len(), "Fetched albums");

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

    /// Create a new album.
    pub async fn create(&self, album: &CreateAlbum) -> Result<Album> {
        let url = format!("{}/albums", self.base_url);
        debug!(url = %url, title = %album.title, "Creating album");

        let response = self.http.post(&url).json(album).send().await?;
        let status = response.status();

        if status.is_success() {
            let body: ApiResponse<Album> = response.json().await.map_err(|e| {
                CatalogClientError::ParseError(format!("Failed to parse album response: {}", e))
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

    /// Update an existing album. Only the fields set in `changes` are touched.
    pub async fn update(&self, album_id: &AlbumId, changes: &UpdateAlbum) -> Result<Album> {
        let url = format!("{}/albums/{}", self.base_url, album_id);
        debug!(url = %url, "Updating album");

        let response = self.http.put(&url).json(changes).send().await?;
        let status = response.status();

        if status.is_success() {
            let body: ApiResponse<Album> = response.json().await.map_err(|e| {
                CatalogClientError::ParseError(format!("Failed to parse album response: {}", e))
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

    /// Delete an album.
    pub async fn delete(&self, album_id: &AlbumId) -> Result<()> {
        let url = format!("{}/albums/{}", self.base_url, album_id);
        debug!(url = %url, "Deleting album");

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
