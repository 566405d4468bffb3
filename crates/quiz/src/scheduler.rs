//! Cancellable one-shot delayed actions.
//!
//! The owner keeps at most one handle and cancels it before registering a
//! replacement, so two advances can never be in flight for the same question.

use std::time::Duration;

/// Handle to a scheduled entry, used to cancel it before it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActionHandle(u64);

#[derive(Debug)]
struct Entry<E> {
    handle: ActionHandle,
    remaining: Duration,
    event: E,
}

/// Single-threaded one-shot timer queue driven by external ticks.
///
/// Entries fire only inside [`ActionScheduler::advance`]; scheduling with a
/// zero delay therefore fires on the next tick, never synchronously within
/// the caller's turn.
#[derive(Debug)]
pub struct ActionScheduler<E> {
    entries: Vec<Entry<E>>,
    next_handle: u64,
}

impl<E> ActionScheduler<E> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_handle: 0,
        }
    }

    /// Registers `event` to fire once `delay` has elapsed on the host's ticks.
    pub fn schedule(&mut self, delay: Duration, event: E) -> ActionHandle {
        let handle = ActionHandle(self.next_handle);
        self.next_handle += 1;
        self.entries.push(Entry {
            handle,
            remaining: delay,
            event,
        });
        handle
    }

    /// Cancels a pending entry.
    ///
    /// Idempotent: cancelling twice, or after the entry fired, is a no-op.
    pub fn cancel(&mut self, handle: ActionHandle) {
        self.entries.retain(|entry| entry.handle != handle);
    }

    /// Returns true while the entry has neither fired nor been cancelled.
    #[must_use]
    pub fn is_pending(&self, handle: ActionHandle) -> bool {
        self.entries.iter().any(|entry| entry.handle == handle)
    }

    /// Number of outstanding entries.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    /// Advances all entries by `delta` and drains the ones that came due,
    /// in schedule order.
    pub fn advance(&mut self, delta: Duration) -> Vec<E> {
        let mut due = Vec::new();
        let mut kept = Vec::new();
        for mut entry in self.entries.drain(..) {
            entry.remaining = entry.remaining.saturating_sub(delta);
            if entry.remaining.is_zero() {
                due.push(entry.event);
            } else {
                kept.push(entry);
            }
        }
        self.entries = kept;
        due
    }
}

impl<E> Default for ActionScheduler<E> {
    fn default() -> Self {
        Self::new()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
