//! Playback session
//!
//! The single authoritative holder of playback state. Every transport
//! command from a presentation surface goes through [`PlaybackSession`],
//! and every engine event is folded into the same state by one pump task,
//! so there is exactly one writer of the observable snapshot.

use crate::adapter::EngineAdapter;
use crate::engine::{EngineEvent, MediaEngine};
use crate::error::{PlaybackError, Result};
use crate::queue::TrackQueue;
use crate::types::{PlaybackSnapshot, SessionConfig};
use chorus_core::types::{Track, TrackId};
use chorus_core::CatalogService;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, RwLock};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Capacity of the snapshot broadcast channel
const SNAPSHOT_CHANNEL_CAPACITY: usize = 64;

/// Mutable session state, guarded by one lock
struct SessionState {
    queue: TrackQueue,
    current_track: Option<Track>,
    is_playing: bool,
    elapsed: Duration,
    total_duration: Duration,
    volume: f64,
    last_error: Option<String>,

    /// Bumped by every track-start request; a settlement only applies
    /// while the generation it captured is still current.
    generation: u64,
}

impl SessionState {
    fn snapshot(&self) -> PlaybackSnapshot {
        PlaybackSnapshot {
            current_track: self.current_track.clone(),
            is_playing: self.is_playing,
            elapsed: self.elapsed,
            total_duration: self.total_duration,
            volume: self.volume,
            last_error: self.last_error.clone(),
        }
    }
}

struct SessionInner {
    state: RwLock<SessionState>,
    adapter: EngineAdapter,
    catalog: Arc<dyn CatalogService>,
    snapshots: broadcast::Sender<PlaybackSnapshot>,
}

impl SessionInner {
    /// Push the current snapshot to subscribers
    fn publish(&self, state: &SessionState) {
        // No receivers is fine; consumers can always re-read.
        let _ = self.snapshots.send(state.snapshot());
    }

    /// Make `track` current and ask the engine to load and play it
    ///
    /// Claims a fresh generation before awaiting the engine, then applies
    /// the outcome only if no newer request claimed the state meanwhile.
    /// Engine refusals settle into the snapshot instead of propagating.
    async fn begin_track(&self, track: Track) {
        let (generation, url) = {
            let mut state = self.state.write().await;
            state.generation += 1;
            state.current_track = Some(track.clone());
            state.is_playing = false;
            state.elapsed = Duration::ZERO;
            state.total_duration = Duration::ZERO;
            state.last_error = None;
            self.publish(&state);
            (state.generation, track.audio_url.clone())
        };

        debug!(track_id = %track.id, url = %url, "starting playback");
        let started = self.adapter.start(&url).await;

        let mut state = self.state.write().await;
        if state.generation != generation {
            debug!(track_id = %track.id, "playback request superseded, dropping result");
            return;
        }
        match started {
            Ok(()) => {
                state.is_playing = true;
                self.publish(&state);
                drop(state);
                self.spawn_record_play(track.id);
            }
            Err(err) => {
                warn!(track_id = %track.id, error = %err, "engine refused playback");
                state.is_playing = false;
                state.last_error = Some(err.to_string());
                self.publish(&state);
            }
        }
    }

    /// Notify the catalog of a play event without blocking playback
    fn spawn_record_play(&self, track_id: TrackId) {
        let catalog = Arc::clone(&self.catalog);
        tokio::spawn(async move {
            debug!(track_id = %track_id, "recording play");
            if let Err(err) = catalog.record_play(&track_id).await {
                warn!(track_id = %track_id, error = %err, "failed to record play");
            }
        });
    }

    /// Fold one engine event into session state
    async fn handle_event(&self, event: EngineEvent) {
        match event {
            EngineEvent::TimeProgressed { position } => {
                let mut state = self.state.write().await;
                if state.current_track.is_some() {
                    state.elapsed = position;
                    self.publish(&state);
                }
            }
            EngineEvent::MetadataLoaded { duration } => {
                let mut state = self.state.write().await;
                if state.current_track.is_some() {
                    state.total_duration = duration;
                    self.publish(&state);
                }
            }
            EngineEvent::Ended => {
                // Advance over the queue as it stands right now; a queue
                // replaced mid-playback governs this advance already.
                let next = {
                    let state = self.state.read().await;
                    state
                        .current_track
                        .as_ref()
                        .and_then(|current| state.queue.next_after(&current.id))
                        .cloned()
                };
                if let Some(track) = next {
                    debug!(track_id = %track.id, "auto-advancing to next track");
                    self.begin_track(track).await;
                }
            }
            EngineEvent::Error { message } => {
                warn!(error = %message, "engine reported failure");
                let mut state = self.state.write().await;
                state.is_playing = false;
                state.last_error = Some(message);
                self.publish(&state);
            }
        }
    }
}

/// Shared playback session driving one media engine
///
/// Owns the current track, transport state, elapsed/total time, volume,
/// and the navigation queue. Presentation surfaces issue commands through
/// it and observe state through [`snapshot`](Self::snapshot) or the
/// [`subscribe`](Self::subscribe) stream; an application constructs
/// exactly one session and hands it to every surface that needs it.
///
/// Engine failures never propagate out of commands. They settle the
/// session into `is_playing = false` with the failure message retained in
/// the snapshot for optional display.
pub struct PlaybackSession {
    inner: Arc<SessionInner>,
    pump: JoinHandle<()>,
    closed: AtomicBool,
}

impl PlaybackSession {
    /// Create a session around a media engine and a catalog
    ///
    /// Seeds the engine with the configured volume (clamped to
    /// `[0.0, 1.0]`) and starts the event pump. Must be called from
    /// within a Tokio runtime.
    pub fn new(
        engine: Box<dyn MediaEngine>,
        catalog: Arc<dyn CatalogService>,
        config: SessionConfig,
    ) -> Self {
        let volume = config.initial_volume.clamp(0.0, 1.0);
        let adapter = EngineAdapter::new(engine);
        adapter.set_volume(volume);

        let (snapshots, _) = broadcast::channel(SNAPSHOT_CHANNEL_CAPACITY);
        let inner = Arc::new(SessionInner {
            state: RwLock::new(SessionState {
                queue: TrackQueue::new(),
                current_track: None,
                is_playing: false,
                elapsed: Duration::ZERO,
                total_duration: Duration::ZERO,
                volume,
                last_error: None,
                generation: 0,
            }),
            adapter,
            catalog,
            snapshots,
        });
        let pump = Self::spawn_pump(Arc::clone(&inner));

        Self {
            inner,
            pump,
            closed: AtomicBool::new(false),
        }
    }

    fn spawn_pump(inner: Arc<SessionInner>) -> JoinHandle<()> {
        let mut events = inner.adapter.subscribe();
        tokio::spawn(async move {
            loop {
                match events.recv().await {
                    Ok(event) => inner.handle_event(event).await,
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        warn!(skipped, "engine event stream lagged");
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        })
    }

    fn ensure_open(&self) -> Result<()> {
        if self.closed.load(Ordering::SeqCst) {
            return Err(PlaybackError::SessionClosed);
        }
        Ok(())
    }

    /// Subscribe to snapshot updates
    ///
    /// A snapshot is pushed on every state mutation, including queue
    /// changes. Slow subscribers may miss intermediate snapshots; the
    /// latest one always reflects current state.
    pub fn subscribe(&self) -> broadcast::Receiver<PlaybackSnapshot> {
        self.inner.snapshots.subscribe()
    }

    /// Read the current snapshot
    pub async fn snapshot(&self) -> PlaybackSnapshot {
        self.inner.state.read().await.snapshot()
    }

    /// Read the current queue contents in order
    pub async fn queue(&self) -> Vec<Track> {
        self.inner.state.read().await.queue.tracks().to_vec()
    }

    /// Play a specific track, replacing whatever is current
    ///
    /// The track becomes current immediately with `is_playing = false`
    /// until the engine confirms. On confirmation the session records a
    /// play event with the catalog, fire-and-forget. A refusal settles
    /// into the snapshot; it is not returned to the caller.
    pub async fn play_track(&self, track: Track) -> Result<()> {
        self.ensure_open()?;
        self.inner.begin_track(track).await;
        Ok(())
    }

    /// Pause playback, keeping the current position
    ///
    /// No-op when nothing is loaded.
    pub async fn pause(&self) -> Result<()> {
        self.ensure_open()?;
        let mut state = self.inner.state.write().await;
        if state.current_track.is_none() {
            return Ok(());
        }
        self.inner.adapter.pause();
        if state.is_playing {
            state.is_playing = false;
            self.inner.publish(&state);
        }
        Ok(())
    }

    /// Toggle between playing and paused
    ///
    /// No-op when no track is current. Resuming replays the loaded media
    /// without reloading it; a resume refusal settles like a rejected
    /// play.
    pub async fn toggle_play_pause(&self) -> Result<()> {
        self.ensure_open()?;
        let generation = {
            let mut state = self.inner.state.write().await;
            if state.current_track.is_none() {
                return Ok(());
            }
            if state.is_playing {
                self.inner.adapter.pause();
                state.is_playing = false;
                self.inner.publish(&state);
                return Ok(());
            }
            state.generation
        };

        let resumed = self.inner.adapter.resume().await;

        let mut state = self.inner.state.write().await;
        if state.generation != generation {
            debug!("resume superseded by a newer playback request");
            return Ok(());
        }
        match resumed {
            Ok(()) => {
                state.is_playing = true;
                self.inner.publish(&state);
            }
            Err(err) => {
                warn!(error = %err, "engine refused resume");
                state.is_playing = false;
                state.last_error = Some(err.to_string());
                self.inner.publish(&state);
            }
        }
        Ok(())
    }

    /// Move the playhead within the current track
    ///
    /// The snapshot reflects the new position immediately, before the
    /// engine confirms. No-op when nothing is loaded.
    pub async fn seek(&self, position: Duration) -> Result<()> {
        self.ensure_open()?;
        let mut state = self.inner.state.write().await;
        if state.current_track.is_none() {
            return Ok(());
        }
        self.inner.adapter.seek(position);
        state.elapsed = position;
        self.inner.publish(&state);
        Ok(())
    }

    /// Set output volume, clamped to `[0.0, 1.0]`
    ///
    /// Applies whether or not a track is loaded; play state is untouched.
    pub async fn set_volume(&self, volume: f64) -> Result<()> {
        self.ensure_open()?;
        let volume = volume.clamp(0.0, 1.0);
        let mut state = self.inner.state.write().await;
        self.inner.adapter.set_volume(volume);
        state.volume = volume;
        self.inner.publish(&state);
        Ok(())
    }

    /// Play the track after the current one in the queue
    ///
    /// No-op when the queue is empty or no track is current. A current
    /// track that is no longer in the queue restarts from the head.
    pub async fn play_next(&self) -> Result<()> {
        self.ensure_open()?;
        let next = {
            let state = self.inner.state.read().await;
            state
                .current_track
                .as_ref()
                .and_then(|current| state.queue.next_after(&current.id))
                .cloned()
        };
        match next {
            Some(track) => {
                self.inner.begin_track(track).await;
                Ok(())
            }
            None => Ok(()),
        }
    }

    /// Play the track before the current one in the queue
    ///
    /// No-op when the queue is empty or no track is current. A current
    /// track that is no longer in the queue wraps to the tail.
    pub async fn play_previous(&self) -> Result<()> {
        self.ensure_open()?;
        let previous = {
            let state = self.inner.state.read().await;
            state
                .current_track
                .as_ref()
                .and_then(|current| state.queue.previous_before(&current.id))
                .cloned()
        };
        match previous {
            Some(track) => {
                self.inner.begin_track(track).await;
                Ok(())
            }
            None => Ok(()),
        }
    }

    /// Replace the whole queue
    ///
    /// Does not touch the current track or play state; a replacement
    /// governs only subsequent navigation.
    pub async fn replace_queue(&self, tracks: Vec<Track>) -> Result<()> {
        self.ensure_open()?;
        let mut state = self.inner.state.write().await;
        debug!(len = tracks.len(), "replacing queue");
        state.queue.replace(tracks);
        self.inner.publish(&state);
        Ok(())
    }

    /// Append one track to the end of the queue
    pub async fn append_to_queue(&self, track: Track) -> Result<()> {
        self.ensure_open()?;
        let mut state = self.inner.state.write().await;
        state.queue.append(track);
        self.inner.publish(&state);
        Ok(())
    }

    /// Tear the session down, releasing the engine
    ///
    /// Stops the event pump and shuts the engine down exactly once.
    /// Idempotent; commands issued afterwards fail with
    /// [`PlaybackError::SessionClosed`]. Dropping the session has the
    /// same effect.
    pub fn shutdown(&self) {
        if !self.closed.swap(true, Ordering::SeqCst) {
            self.pump.abort();
            self.inner.adapter.shutdown();
        }
    }
}

impl Drop for PlaybackSession {
    fn drop(&mut self) {
        self.shutdown();
    }
}
