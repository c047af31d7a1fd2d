//! Media engine abstraction
//!
//! Abstracts the host's native audio-playback primitive (a platform media
//! element, a native output backend). The playback session drives the engine
//! through commands and folds its event stream back into session state.
//!
//! Only one component subscribes to an engine directly: the session's event
//! pump. Everything else observes playback through session snapshots.

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::sync::broadcast;

/// Events emitted by a media engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EngineEvent {
    /// Playback position advanced (high frequency)
    TimeProgressed {
        /// Position from the start of the loaded media
        position: Duration,
    },

    /// Media metadata became available (fires once per load)
    MetadataLoaded {
        /// Total duration of the loaded media
        duration: Duration,
    },

    /// The loaded media played to its end unattended
    Ended,

    /// The engine failed asynchronously
    Error {
        /// Engine-reported failure message
        message: String,
    },
}

/// Host media engine driven by the playback session
///
/// Implementations wrap whatever actually renders audio. Methods take
/// `&self`: an engine value is a handle, and implementations synchronize
/// internally. Apart from `play`, commands are fire-and-forget; outcomes
/// come back over the event stream.
#[async_trait]
pub trait MediaEngine: Send + Sync {
    /// Assign a new media source by URL
    ///
    /// Replaces whatever was loaded before. Does not start playback.
    fn load(&self, url: &str);

    /// Start or resume playback of the loaded media
    ///
    /// Resolves once playback has actually started, or fails with the
    /// engine's refusal (unsupported format, autoplay policy, network
    /// failure). No timeout is imposed here.
    async fn play(&self) -> Result<()>;

    /// Pause playback, keeping the current position. Idempotent.
    fn pause(&self);

    /// Move the playhead
    ///
    /// Engines may clamp the position to the loaded media's bounds.
    fn seek(&self, position: Duration);

    /// Set output volume in `[0.0, 1.0]`
    fn set_volume(&self, volume: f64);

    /// Subscribe to the engine's event stream
    fn subscribe(&self) -> broadcast::Receiver<EngineEvent>;

    /// Stop playback and release the underlying media resources
    ///
    /// Called at most once, at session teardown.
    fn shutdown(&self);
}
