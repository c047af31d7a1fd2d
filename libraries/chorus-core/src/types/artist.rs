//! Artist types

use super::ArtistId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An artist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    pub id: ArtistId,
    pub name: String,
    pub image_url: Option<String>,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Artist {
    /// Create a new artist with just a name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ArtistId::generate(),
            name: name.into(),
            image_url: None,
            bio: None,
            created_at: Utc::now(),
        }
    }
}

/// Data for creating a new artist
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateArtist {
    pub name: String,
    pub image_url: Option<String>,
    pub bio: Option<String>,
}

/// Data for updating an artist (all fields optional)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateArtist {
    pub name: Option<String>,
    pub image_url: Option<String>,
    pub bio: Option<String>,
}
