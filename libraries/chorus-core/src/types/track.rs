/// Track domain type
use super::{Album, AlbumId, Artist, ArtistId, TrackId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Fallback shown when a track carries no artist information
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";

/// A song in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Unique track identifier
    pub id: TrackId,

    /// Track title
    pub title: String,

    /// Artist identifier
    pub artist_id: ArtistId,

    /// Album identifier, if the track belongs to an album
    pub album_id: Option<AlbumId>,

    /// Track duration in whole seconds
    #[serde(rename = "duration")]
    pub duration_secs: u64,

    /// Where the audio file can be streamed from
    pub audio_url: String,

    /// Cover art URL
    pub cover_url: Option<String>,

    /// How many times the track has been played
    #[serde(default)]
    pub play_count: u64,

    /// When the track was added to the catalog
    pub created_at: DateTime<Utc>,

    /// Embedded artist, when the catalog denormalizes it
    pub artist: Option<Artist>,

    /// Embedded album, when the catalog denormalizes it
    pub album: Option<Album>,
}

impl Track {
    /// Create a new track with minimal metadata
    pub fn new(
        title: impl Into<String>,
        artist_id: ArtistId,
        audio_url: impl Into<String>,
        duration_secs: u64,
    ) -> Self {
        Self {
            id: TrackId::generate(),
            title: title.into(),
            artist_id,
            album_id: None,
            duration_secs,
            audio_url: audio_url.into(),
            cover_url: None,
            play_count: 0,
            created_at: Utc::now(),
            artist: None,
            album: None,
        }
    }

    /// Get the track duration as a Duration
    pub fn duration(&self) -> Duration {
        Duration::from_secs(self.duration_secs)
    }

    /// Artist name for display, falling back to [`UNKNOWN_ARTIST`]
    pub fn artist_name(&self) -> &str {
        self.artist
            .as_ref()
            .map_or(UNKNOWN_ARTIST, |artist| artist.name.as_str())
    }
}

/// Data for creating a new track
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTrack {
    /// Track title
    pub title: String,

    /// Artist identifier
    pub artist_id: ArtistId,

    /// Album identifier, if any
    pub album_id: Option<AlbumId>,

    /// Track duration in whole seconds
    #[serde(rename = "duration")]
    pub duration_secs: u64,

    /// Where the audio file can be streamed from
    pub audio_url: String,

    /// Cover art URL
    pub cover_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_creation() {
        let track = Track::new(
            "Test Song",
            ArtistId::new("artist-1"),
            "https://cdn.example.com/song.mp3",
            180,
        );
        assert_eq!(track.title, "Test Song");
        assert_eq!(track.duration(), Duration::from_secs(180));
        assert_eq!(track.play_count, 0);
        assert!(track.album_id.is_none());
    }

    #[test]
    fn artist_name_falls_back_when_not_embedded() {
        let track = Track::new(
            "Instrumental",
            ArtistId::new("artist-1"),
            "https://cdn.example.com/instrumental.mp3",
            90,
        );
        assert_eq!(track.artist_name(), UNKNOWN_ARTIST);
    }

    #[test]
    fn artist_name_uses_embedded_artist() {
        let mut track = Track::new(
            "Golden Hour",
            ArtistId::new("artist-1"),
            "https://cdn.example.com/golden-hour.mp3",
            215,
        );
        track.artist = Some(Artist::new("JVKE"));
        assert_eq!(track.artist_name(), "JVKE");
    }

    #[test]
    fn duration_serializes_as_wire_seconds() {
        let track = Track::new(
            "Test Song",
            ArtistId::new("artist-1"),
            "https://cdn.example.com/song.mp3",
            180,
        );
        let json = serde_json::to_value(&track).unwrap();
        assert_eq!(json["duration"], 180);
        assert!(json.get("duration_secs").is_none());
    }
}
