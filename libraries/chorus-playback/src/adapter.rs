//! Engine adapter
//!
//! Ownership wrapper around the boxed media engine. Centralizes the
//! start-versus-resume distinction and guarantees the engine is released
//! exactly once, whether through an explicit shutdown or on drop.

use crate::engine::{EngineEvent, MediaEngine};
use crate::error::Result;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::sync::broadcast;

/// Sole binding between the session and its media engine
pub(crate) struct EngineAdapter {
    engine: Box<dyn MediaEngine>,
    shut_down: AtomicBool,
}

impl EngineAdapter {
    pub(crate) fn new(engine: Box<dyn MediaEngine>) -> Self {
        Self {
            engine,
            shut_down: AtomicBool::new(false),
        }
    }

    /// Load fresh media and start it from the beginning
    pub(crate) async fn start(&self, url: &str) -> Result<()> {
        self.engine.load(url);
        self.engine.play().await
    }

    /// Continue the currently loaded media without reloading
    pub(crate) async fn resume(&self) -> Result<()> {
        self.engine.play().await
    }

    pub(crate) fn pause(&self) {
        self.engine.pause();
    }

    pub(crate) fn seek(&self, position: Duration) {
        self.engine.seek(position);
    }

    pub(crate) fn set_volume(&self, volume: f64) {
        self.engine.set_volume(volume);
    }

    pub(crate) fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.engine.subscribe()
    }

    /// Release the engine; later calls are no-ops
    pub(crate) fn shutdown(&self) {
        if !self.shut_down.swap(true, Ordering::SeqCst) {
            self.engine.shutdown();
        }
    }
}

impl Drop for EngineAdapter {
    fn drop(&mut self) {
        self.shutdown();
    }
}
