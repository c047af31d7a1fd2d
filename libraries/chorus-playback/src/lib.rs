//! Chorus - Playback Management
//!
//! Playback-session coordination for Chorus: the state machine sitting
//! between presentation surfaces, the music catalog, and the host's media
//! engine.
//!
//! This crate provides:
//! - A single shared playback session (current track, play/pause, elapsed
//!   time, volume)
//! - A flat queue with circular next/previous navigation
//! - Auto-advance when a track ends, with play-count bookkeeping
//! - Stale-request guarding for overlapping play commands
//! - Snapshot broadcasting to any number of subscribers
//!
//! # Architecture
//!
//! `chorus-playback` is platform-agnostic:
//! - No dependency on a concrete audio backend; the engine arrives as a
//!   [`MediaEngine`] trait object
//! - No dependency on HTTP; the catalog arrives as a
//!   [`chorus_core::CatalogService`] trait object
//!
//! Presentation surfaces hold the one [`PlaybackSession`] the application
//! constructs, issue commands on it, and render from its snapshots.
//!
//! # Example: Queue Navigation
//!
//! ```rust
//! use chorus_core::types::{ArtistId, Track};
//! use chorus_playback::TrackQueue;
//!
//! let first = Track::new("First", ArtistId::generate(), "https://cdn.example.com/1.mp3", 180);
//! let second = Track::new("Second", ArtistId::generate(), "https://cdn.example.com/2.mp3", 200);
//! let first_id = first.id.clone();
//!
//! let mut queue = TrackQueue::new();
//! queue.replace(vec![first, second]);
//!
//! // Circular: past the tail, navigation wraps to the head.
//! let next = queue.next_after(&first_id).unwrap();
//! assert_eq!(next.title, "Second");
//! let after_next = queue.next_after(&next.id).unwrap();
//! assert_eq!(after_next.title, "First");
//! ```
//!
//! # Example: Platform Integration
//!
//! ```rust,no_run
//! use async_trait::async_trait;
//! use chorus_playback::{EngineEvent, MediaEngine, PlaybackSession, Result, SessionConfig};
//! use std::time::Duration;
//! use tokio::sync::broadcast;
//!
//! // Implement MediaEngine for your platform's player primitive
//! struct MyMediaEngine {
//!     events: broadcast::Sender<EngineEvent>,
//! }
//!
//! #[async_trait]
//! impl MediaEngine for MyMediaEngine {
//!     fn load(&self, _url: &str) {
//!         // hand the URL to the platform player
//!     }
//!
//!     async fn play(&self) -> Result<()> {
//!         // resolve once playback actually starts
//!         Ok(())
//!     }
//!
//!     fn pause(&self) {}
//!
//!     fn seek(&self, _position: Duration) {}
//!
//!     fn set_volume(&self, _volume: f64) {}
//!
//!     fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
//!         self.events.subscribe()
//!     }
//!
//!     fn shutdown(&self) {}
//! }
//!
//! # async fn wire_up(catalog: std::sync::Arc<dyn chorus_core::CatalogService>) {
//! let (events, _) = broadcast::channel(16);
//! let engine = MyMediaEngine { events };
//! let session = PlaybackSession::new(Box::new(engine), catalog, SessionConfig::default());
//!
//! // The player surface renders from snapshots.
//! let mut snapshots = session.subscribe();
//! while let Ok(snapshot) = snapshots.recv().await {
//!     println!("playing: {}", snapshot.is_playing);
//! }
//! # }
//! ```

mod adapter;
mod engine;
mod error;
mod queue;
mod session;
pub mod types;

// Public exports
pub use engine::{EngineEvent, MediaEngine};
pub use error::{PlaybackError, Result};
pub use queue::TrackQueue;
pub use session::PlaybackSession;
pub use types::{PlaybackSnapshot, SessionConfig};
