//! Queue navigation
//!
//! A flat, ordered list of tracks with deterministic circular navigation:
//! next from the tail wraps to the head, previous from the head wraps to
//! the tail. The queue holds no notion of a current track; callers pass in
//! the identifier they are navigating from.

use chorus_core::types::{Track, TrackId};

/// Ordered queue of tracks eligible for next/previous navigation
///
/// Views replace the queue wholesale with whatever list they loaded, or
/// append single tracks to the end. Duplicate track ids are permitted;
/// navigation resolves a position by the first matching id.
#[derive(Debug, Clone)]
pub struct TrackQueue {
    tracks: Vec<Track>,
}

impl TrackQueue {
    /// Create a new empty queue
    pub fn new() -> Self {
        Self { tracks: Vec::new() }
    }

    /// Replace the whole queue with a new list of tracks
    pub fn replace(&mut self, tracks: Vec<Track>) {
        self.tracks = tracks;
    }

    /// Append a track to the end, preserving existing order
    pub fn append(&mut self, track: Track) {
        self.tracks.push(track);
    }

    /// Number of tracks in the queue
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Check whether the queue is empty
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// All tracks in queue order
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Position of the first track with the given id
    pub fn position_of(&self, track_id: &TrackId) -> Option<usize> {
        self.tracks.iter().position(|track| track.id == *track_id)
    }

    /// Track that follows `current`, wrapping from tail to head
    ///
    /// When `current` is not in the queue (it was replaced out from under
    /// the playing track), navigation restarts from the head. Returns
    /// `None` only for an empty queue.
    pub fn next_after(&self, current: &TrackId) -> Option<&Track> {
        if self.tracks.is_empty() {
            return None;
        }
        let index = match self.position_of(current) {
            Some(position) => (position + 1) % self.tracks.len(),
            None => 0,
        };
        self.tracks.get(index)
    }

    /// Track that precedes `current`, wrapping from head to tail
    ///
    /// When `current` is not in the queue, navigation restarts from the
    /// tail, mirroring [`next_after`](Self::next_after). Returns `None`
    /// only for an empty queue.
    pub fn previous_before(&self, current: &TrackId) -> Option<&Track> {
        if self.tracks.is_empty() {
            return None;
        }
        let len = self.tracks.len();
        let index = match self.position_of(current) {
            Some(position) => (position + len - 1) % len,
            None => len - 1,
        };
        self.tracks.get(index)
    }
}

impl Default for TrackQueue {
    fn default() -> Self {
        Self::new()
    }
}
