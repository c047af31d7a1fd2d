//! Property-based tests for queue navigation
//!
//! Uses proptest to verify the circular next/previous arithmetic across
//! many random queue lengths and positions.

use chorus_core::types::{ArtistId, Track, TrackId};
use chorus_playback::TrackQueue;
use proptest::prelude::*;

// ===== Helpers =====

fn indexed_track(index: usize) -> Track {
    let mut track = Track::new(
        format!("Song {}", index),
        ArtistId::new("artist-1"),
        format!("https://cdn.example.com/{}.mp3", index),
        180,
    );
    track.id = TrackId::new(format!("track-{}", index));
    track
}

fn queue_of(len: usize) -> TrackQueue {
    let mut queue = TrackQueue::new();
    queue.replace((0..len).map(indexed_track).collect());
    queue
}

fn queue_and_position() -> impl Strategy<Value = (usize, usize)> {
    (1usize..24).prop_flat_map(|len| (Just(len), 0..len))
}

// ===== Property Tests =====

proptest! {
    /// Property: next from index i lands on (i + 1) mod n
    #[test]
    fn next_is_modular_increment((len, position) in queue_and_position()) {
        let queue = queue_of(len);
        let current = TrackId::new(format!("track-{}", position));

        let next = queue.next_after(&current).expect("non-empty queue");

        let expected = format!("track-{}", (position + 1) % len);
        prop_assert_eq!(next.id.as_str(), expected.as_str());
    }

    /// Property: previous from index i lands on (i - 1 + n) mod n
    #[test]
    fn previous_is_modular_decrement((len, position) in queue_and_position()) {
        let queue = queue_of(len);
        let current = TrackId::new(format!("track-{}", position));

        let previous = queue.previous_before(&current).expect("non-empty queue");

        let expected = format!("track-{}", (position + len - 1) % len);
        prop_assert_eq!(previous.id.as_str(), expected.as_str());
    }

    /// Property: previous undoes next from any starting position
    #[test]
    fn previous_undoes_next((len, position) in queue_and_position()) {
        let queue = queue_of(len);
        let current = TrackId::new(format!("track-{}", position));

        let next_id = queue.next_after(&current).expect("non-empty queue").id.clone();
        let back = queue.previous_before(&next_id).expect("non-empty queue");

        prop_assert_eq!(back.id.as_str(), current.as_str());
    }

    /// Property: stepping next n times visits every track once and
    /// returns to the start
    #[test]
    fn full_cycle_visits_every_track(len in 1usize..24) {
        let queue = queue_of(len);
        let mut current = TrackId::new("track-0");
        let mut visited = Vec::with_capacity(len);

        for _ in 0..len {
            let next = queue.next_after(&current).expect("non-empty queue");
            visited.push(next.id.clone());
            current = next.id.clone();
        }

        prop_assert_eq!(visited.len(), len);
        let distinct: std::collections::HashSet<_> =
            visited.iter().map(TrackId::as_str).collect();
        prop_assert_eq!(distinct.len(), len);
        prop_assert_eq!(current.as_str(), "track-0");
    }

    /// Property: navigation from an id that is not in the queue is still
    /// total for non-empty queues: next restarts at the head, previous at
    /// the tail
    #[test]
    fn unknown_current_is_deterministic(len in 1usize..24, suffix in "[a-z]{1,8}") {
        let queue = queue_of(len);
        let missing = TrackId::new(format!("missing-{}", suffix));

        let next = queue.next_after(&missing).expect("non-empty queue");
        prop_assert_eq!(next.id.as_str(), "track-0");

        let previous = queue.previous_before(&missing).expect("non-empty queue");
        let tail = format!("track-{}", len - 1);
        prop_assert_eq!(previous.id.as_str(), tail.as_str());
    }

    /// Property: replace then append keeps length arithmetic exact
    #[test]
    fn length_tracks_mutations(initial in 0usize..24, appended in 0usize..8) {
        let mut queue = TrackQueue::new();
        queue.replace((0..initial).map(indexed_track).collect());

        for index in 0..appended {
            queue.append(indexed_track(initial + index));
        }

        prop_assert_eq!(queue.len(), initial + appended);
        prop_assert_eq!(queue.is_empty(), initial + appended == 0);
    }
}
