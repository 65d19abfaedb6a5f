//! Play queue
//!
//! Ordered songs plus a current index. Navigation is index-based and
//! non-destructive: stepping back and forth never reorders or drops entries.
//!
//! Unlike the stored copy on the server (which union-merges by url), the
//! local queue allows duplicate urls: a user can queue the same pin twice in
//! one session, but the durable record keeps one entry per url.

use crate::types::Direction;
use pindrop_core::SongRef;

/// The ordered list of songs a user intends to play, with a position
#[derive(Debug, Clone, Default)]
pub struct PlayQueue {
    songs: Vec<SongRef>,
    index: Option<usize>,
}

impl PlayQueue {
    /// Create a new empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a queue from a stored record
    ///
    /// The durable sentinel for "nothing selected" is `-1`; anything outside
    /// `[0, len)` is treated the same way.
    pub fn from_saved(songs: Vec<SongRef>, stored_index: i64) -> Self {
        let index = usize::try_from(stored_index)
            .ok()
            .filter(|i| *i < songs.len());
        Self { songs, index }
    }

    /// Append a song; duplicates by url are allowed
    pub fn push(&mut self, song: SongRef) {
        self.songs.push(song);
    }

    /// Number of songs in the queue
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    /// Check if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// All songs in order
    pub fn songs(&self) -> &[SongRef] {
        &self.songs
    }

    /// Current position, if a song is selected
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Current position in the durable representation (`-1` for none)
    pub fn stored_index(&self) -> i64 {
        self.index.map_or(-1, |i| i as i64)
    }

    /// Song at the current position
    pub fn current(&self) -> Option<&SongRef> {
        self.index.and_then(|i| self.songs.get(i))
    }

    /// Select a position directly
    ///
    /// Returns the song at that position, or `None` (without changing the
    /// selection) when out of bounds.
    pub fn select(&mut self, index: usize) -> Option<&SongRef> {
        if index < self.songs.len() {
            self.index = Some(index);
            self.songs.get(index)
        } else {
            None
        }
    }

    /// Step the selection one entry in `direction`
    ///
    /// Valid only if the resulting index stays within `[0, len)`; anything
    /// else returns `None` and leaves the selection untouched.
    pub fn step(&mut self, direction: Direction) -> Option<&SongRef> {
        let current = self.index?;
        let target = match direction {
            Direction::Previous => current.checked_sub(1)?,
            Direction::Next => current + 1,
        };
        self.select(target)
    }

    /// Whether a step forward would land on a song
    pub fn has_next(&self) -> bool {
        match self.index {
            Some(i) => i + 1 < self.songs.len(),
            None => false,
        }
    }

    /// Drop the selection (end-of-queue)
    pub fn clear_selection(&mut self) {
        self.index = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song(url: &str) -> SongRef {
        SongRef::new(url, format!("Title {url}"), "Artist")
    }

    fn queue_of(urls: &[&str]) -> PlayQueue {
        let mut queue = PlayQueue::new();
        for url in urls {
            queue.push(song(url));
        }
        queue
    }

    #[test]
    fn create_empty_queue() {
        let queue = PlayQueue::new();
        assert_eq!(queue.len(), 0);
        assert!(queue.is_empty());
        assert!(queue.current().is_none());
        assert_eq!(queue.stored_index(), -1);
    }

    #[test]
    fn length_equals_number_of_pushes_even_with_duplicates() {
        let queue = queue_of(&["a", "a", "b", "a"]);
        assert_eq!(queue.len(), 4);
    }

    #[test]
    fn select_and_current() {
        let mut queue = queue_of(&["a", "b"]);
        assert_eq!(queue.select(1).unwrap().url, "b");
        assert_eq!(queue.current().unwrap().url, "b");
        assert_eq!(queue.stored_index(), 1);
    }

    #[test]
    fn select_out_of_bounds_is_ignored() {
        let mut queue = queue_of(&["a"]);
        queue.select(0);
        assert!(queue.select(5).is_none());
        assert_eq!(queue.index(), Some(0));
    }

    #[test]
    fn next_then_previous_restores_position() {
        let mut queue = queue_of(&["a", "b", "c"]);
        queue.select(1);

        assert_eq!(queue.step(Direction::Next).unwrap().url, "c");
        assert_eq!(queue.step(Direction::Previous).unwrap().url, "b");
        assert_eq!(queue.index(), Some(1));
        assert_eq!(queue.current().unwrap().url, "b");
    }

    #[test]
    fn step_past_either_end_is_ignored() {
        let mut queue = queue_of(&["a", "b"]);
        queue.select(0);
        assert!(queue.step(Direction::Previous).is_none());
        assert_eq!(queue.index(), Some(0));

        queue.select(1);
        assert!(queue.step(Direction::Next).is_none());
        assert_eq!(queue.index(), Some(1));
    }

    #[test]
    fn step_with_no_selection_is_ignored() {
        let mut queue = queue_of(&["a"]);
        assert!(queue.step(Direction::Next).is_none());
        assert!(queue.index().is_none());
    }

    #[test]
    fn from_saved_restores_valid_index() {
        let queue = PlayQueue::from_saved(vec![song("a"), song("b")], 1);
        assert_eq!(queue.current().unwrap().url, "b");
    }

    #[test]
    fn from_saved_treats_sentinel_and_stale_index_as_none() {
        let queue = PlayQueue::from_saved(vec![song("a")], -1);
        assert!(queue.current().is_none());

        // Index saved against a longer queue than what survived the merge
        let queue = PlayQueue::from_saved(vec![song("a")], 7);
        assert!(queue.current().is_none());
        assert_eq!(queue.stored_index(), -1);
    }

    mod navigation_props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            // Any sequence of steps keeps the selection inside the queue
            #[test]
            fn stepping_never_escapes_bounds(
                len in 1usize..6,
                start in 0usize..6,
                steps in proptest::collection::vec(any::<bool>(), 0..12),
            ) {
                let urls: Vec<String> = (0..len).map(|i| format!("{i}.mp3")).collect();
                let mut queue = PlayQueue::new();
                for url in &urls {
                    queue.push(song(url));
                }
                queue.select(start);

                for forward in steps {
                    let direction = if forward { Direction::Next } else { Direction::Previous };
                    queue.step(direction);
                    if let Some(i) = queue.index() {
                        prop_assert!(i < queue.len());
                    }
                }
            }
        }
    }

    #[test]
    fn has_next_at_boundaries() {
        let mut queue = queue_of(&["a", "b"]);
        assert!(!queue.has_next());
        queue.select(0);
        assert!(queue.has_next());
        queue.select(1);
        assert!(!queue.has_next());
    }
}
