//! Bounded linear undo/redo history over configuration snapshots.
//!
//! Replay suppression is an explicit origin tag checked synchronously at
//! push time, so a state change caused by undo/redo can never be
//! recorded as a new user action.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Who caused a state update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateOrigin {
    User,
    HistoryReplay,
}

/// Three-list undo history: `past` / `present` / `future`, bounded by
/// `max_entries` from the oldest end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct History<T: Clone> {
    past: Vec<T>,
    present: T,
    future: Vec<T>,
    max_entries: usize,
}

impl<T: Clone> History<T> {
    pub fn new(initial: T, max_entries: usize) -> Self {
        Self {
            past: Vec::new(),
            present: initial,
            future: Vec::new(),
            max_entries: max_entries.max(1),
        }
    }

    pub fn present(&self) -> &T {
        &self.present
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Record a new state. A user push moves the current present into the
    /// past (trimming the oldest entry beyond the bound) and clears the
    /// redo branch. Replay-origin pushes are ignored.
    pub fn push(&mut self, new_state: T, origin: UpdateOrigin) {
        if origin == UpdateOrigin::HistoryReplay {
            debug!("history push suppressed: replay origin");
            return;
        }

        self.past.push(std::mem::replace(&mut self.present, new_state));
        if self.past.len() > self.max_entries {
            self.past.remove(0);
        }
        self.future.clear();
    }

    /// Step back one state. No-op when the past is empty.
    pub fn undo(&mut self) -> Option<&T> {
        let previous = self.past.pop()?;
        self.future
            .insert(0, std::mem::replace(&mut self.present, previous));
        Some(&self.present)
    }

    /// Step forward one state. No-op when the future is empty.
    pub fn redo(&mut self) -> Option<&T> {
        if self.future.is_empty() {
            return None;
        }
        let next = self.future.remove(0);
        self.past.push(std::mem::replace(&mut self.present, next));
        Some(&self.present)
    }

    /// Reinitialize: clears both stacks unconditionally. Not part of the
    /// undo chain.
    pub fn reset(&mut self, new_state: T) {
        self.past.clear();
        self.future.clear();
        self.present = new_state;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_push(h: &mut History<i32>, v: i32) {
        h.push(v, UpdateOrigin::User);
    }

    // 1. Undo/redo symmetry -------------------------------------------------

    #[test]
    fn test_undo_redo_symmetry() {
        let mut h = History::new(0, 10);
        user_push(&mut h, 1);
        user_push(&mut h, 2);

        assert_eq!(h.undo(), Some(&1));
        assert_eq!(h.undo(), Some(&0));
        assert_eq!(h.redo(), Some(&1));
        assert_eq!(*h.present(), 1);
    }

    #[test]
    fn test_push_after_undo_clears_future() {
        let mut h = History::new(0, 10);
        user_push(&mut h, 1);
        user_push(&mut h, 2);
        h.undo();

        user_push(&mut h, 3);
        assert!(!h.can_redo());
        assert_eq!(h.redo(), None);
        assert_eq!(*h.present(), 3);
    }

    // 2. Boundary no-ops ----------------------------------------------------

    #[test]
    fn test_undo_on_empty_past_is_noop() {
        let mut h = History::new(7, 10);
        assert_eq!(h.undo(), None);
        assert_eq!(*h.present(), 7);
    }

    #[test]
    fn test_redo_on_empty_future_is_noop() {
        let mut h = History::new(7, 10);
        user_push(&mut h, 8);
        assert_eq!(h.redo(), None);
        assert_eq!(*h.present(), 8);
    }

    // 3. Replay suppression -------------------------------------------------

    #[test]
    fn test_replay_origin_push_is_ignored() {
        let mut h = History::new(0, 10);
        user_push(&mut h, 1);
        h.push(99, UpdateOrigin::HistoryReplay);

        assert_eq!(*h.present(), 1);
        assert_eq!(h.undo(), Some(&0));
    }

    // 4. Bounding -----------------------------------------------------------

    #[test]
    fn test_past_is_bounded_from_the_oldest_end() {
        let mut h = History::new(0, 3);
        for v in 1..=5 {
            user_push(&mut h, v);
        }

        // Only the 3 most recent snapshots survive.
        assert_eq!(h.undo(), Some(&4));
        assert_eq!(h.undo(), Some(&3));
        assert_eq!(h.undo(), Some(&2));
        assert_eq!(h.undo(), None);
    }

    // 5. Reset --------------------------------------------------------------

    #[test]
    fn test_reset_clears_both_stacks() {
        let mut h = History::new(0, 10);
        user_push(&mut h, 1);
        user_push(&mut h, 2);
        h.undo();

        h.reset(42);
        assert_eq!(*h.present(), 42);
        assert!(!h.can_undo());
        assert!(!h.can_redo());
    }
}
