// Staggered reveal scheduling.
// Purely cosmetic: decides when a revealed item looks settled, never whether it is visible.

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Receives every item the renderer reveals, with its stagger delay.
pub trait RevealScheduler {
    fn schedule(&mut self, key: &str, index: usize, delay: Duration);
}

/// Scheduler that reveals everything at once.
#[derive(Debug, Clone, Copy, Default)]
pub struct Immediate;

impl RevealScheduler for Immediate {
    fn schedule(&mut self, _key: &str, _index: usize, _delay: Duration) {}
}

/// Deadline-based reveal queue polled by the UI tick.
///
/// Rescheduling an item replaces its previous deadline, and entries for
/// items a later render hid are left to expire on their own.
#[derive(Debug, Default)]
pub struct RevealQueue {
    pending: HashMap<(String, usize), Instant>,
}

impl RevealQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a reveal relative to an explicit `now`.
    pub fn schedule_at(&mut self, key: &str, index: usize, delay: Duration, now: Instant) {
        let slot = (key.to_string(), index);
        if delay.is_zero() {
            self.pending.remove(&slot);
        } else {
            self.pending.insert(slot, now + delay);
        }
    }

    /// Whether the item's reveal is still in flight at `now`.
    pub fn is_pending(&self, key: &str, index: usize, now: Instant) -> bool {
        self.pending
            .get(&(key.to_string(), index))
            .is_some_and(|due| *due > now)
    }

    /// Drop settled entries. Returns how many were removed.
    pub fn prune(&mut self, now: Instant) -> usize {
        let before = self.pending.len();
        self.pending.retain(|_, due| *due > now);
        before - self.pending.len()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl RevealScheduler for RevealQueue {
    fn schedule(&mut self, key: &str, index: usize, delay: Duration) {
        self.schedule_at(key, index, delay, Instant::now());
    }
}
