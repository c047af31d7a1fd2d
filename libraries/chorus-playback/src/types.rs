//! Core types for the playback session

use chorus_core::types::Track;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Point-in-time view of the playback session
///
/// Pushed to subscribers on every state mutation; consumers never mutate
/// it. The queue is not part of the snapshot and is read separately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackSnapshot {
    /// Track the session is focused on, if any
    pub current_track: Option<Track>,

    /// Whether the engine is currently playing
    pub is_playing: bool,

    /// Playhead position within the current track
    ///
    /// Only meaningful while a track is current; zero otherwise.
    pub elapsed: Duration,

    /// Engine-reported duration of the current track
    ///
    /// Zero until the engine's metadata arrives.
    pub total_duration: Duration,

    /// Output volume in `[0.0, 1.0]`
    pub volume: f64,

    /// Most recent playback failure, if any
    pub last_error: Option<String>,
}

/// Configuration for a playback session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Initial volume (0.0-1.0, default: 0.7)
    pub initial_volume: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            initial_volume: 0.7,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = SessionConfig::default();
        assert_eq!(config.initial_volume, 0.7);
    }

    #[test]
    fn snapshot_round_trips_through_serde() {
        let snapshot = PlaybackSnapshot {
            current_track: None,
            is_playing: false,
            elapsed: Duration::ZERO,
            total_duration: Duration::ZERO,
            volume: 0.7,
            last_error: Some("Engine error: decode failed".to_string()),
        };

        let json = serde_json::to_string(&snapshot).unwrap();
        let back: PlaybackSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}
