//! Per-tick countdown for fixed-duration sessions.

use std::time::Duration;

/// Counts a session's remaining time down to zero.
///
/// Driven once per host tick while the session is active. After expiry
/// further ticks are no-ops and the remaining time stays clamped at zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionClock {
    remaining: Duration,
    expired: bool,
}

impl SessionClock {
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            remaining: duration,
            expired: false,
        }
    }

    /// Decrements the remaining time, clamped at zero.
    ///
    /// Returns `true` exactly once, on the tick where the countdown crosses
    /// zero; the owning session turns that into its end-of-session effect.
    pub fn tick(&mut self, delta: Duration) -> bool {
        if self.expired {
            return false;
        }
        self.remaining = self.remaining.saturating_sub(delta);
        if self.remaining.is_zero() {
            self.expired = true;
            return true;
        }
        false
    }

    /// Remaining time, never below zero.
    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    /// Remaining whole seconds, rounded up for display.
    #[must_use]
    pub fn remaining_display_secs(&self) -> u64 {
        self.remaining.as_secs_f64().ceil() as u64
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.expired
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
