//! Album types

use super::{AlbumId, Artist, ArtistId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An album
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    pub id: AlbumId,
    pub title: String,
    pub artist_id: ArtistId,
    pub cover_url: Option<String>,
    pub release_year: Option<i32>,
    pub created_at: DateTime<Utc>,

    /// Embedded artist, when the catalog denormalizes it
    pub artist: Option<Artist>,
}

/// Data for creating a new album
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAlbum {
    pub title: String,
    pub artist_id: ArtistId,
    pub cover_url: Option<String>,
    pub release_year: Option<i32>,
}

/// Data for updating an album (all fields optional)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateAlbum {
    pub title: Option<String>,
    pub artist_id: Option<ArtistId>,
    pub cover_url: Option<String>,
    pub release_year: Option<i32>,
}
