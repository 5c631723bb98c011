//! Resize settling.

use std::time::{Duration, Instant};

/// Tracks a burst of resize events and reports when it settles.
///
/// Resizes arrive in bursts while a window is dragged. The engine reacts
/// once, after a quiet interval, rather than on every event. Callers
/// that schedule their own wakeups can ask how long until the burst
/// settles.
#[derive(Clone, Debug)]
pub struct Debouncer {
    settle: Duration,
    last_event: Option<Instant>,
}

impl Debouncer {
    /// Debouncer that settles after `settle` of quiet.
    pub fn new(settle: Duration) -> Self {
        Self {
            settle,
            last_event: None,
        }
    }

    /// Record a resize event now.
    pub fn note(&mut self) {
        self.note_at(Instant::now());
    }

    /// Record a resize event observed at `now`.
    pub fn note_at(&mut self, now: Instant) {
        self.last_event = Some(now);
    }

    /// Whether a burst is waiting to settle.
    pub fn is_pending(&self) -> bool {
        self.last_event.is_some()
    }

    /// Poll against the current time.
    pub fn poll(&mut self) -> bool {
        self.poll_at(Instant::now())
    }

    /// Whether the pending burst has settled by `now`, clearing it if so.
    pub fn poll_at(&mut self, now: Instant) -> bool {
        let Some(last) = self.last_event else {
            return false;
        };
        if now.saturating_duration_since(last) >= self.settle {
            self.last_event = None;
            true
        } else {
            false
        }
    }

    /// Time left before the pending burst settles, measured at `now`.
    pub fn time_until_settle(&self, now: Instant) -> Option<Duration> {
        let last = self.last_event?;
        Some(self.settle.saturating_sub(now.saturating_duration_since(last)))
    }
}
