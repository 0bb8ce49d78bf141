#![forbid(unsafe_code)]

//! Cancellable one-shot delay timer.
//!
//! [`DelayTimer`] is poll-driven: the owner calls [`poll`](DelayTimer::poll)
//! from its event loop and the timer reports the deadline crossing exactly
//! once. There is no background thread, so cancellation is a plain state
//! change and nothing can fire after [`cancel`](DelayTimer::cancel).
//!
//! # Invariants
//!
//! 1. `poll` returns `true` at most once per `arm`.
//! 2. `cancel` is idempotent: cancelling a disarmed or already-fired timer
//!    is a no-op.
//! 3. Re-arming an armed timer replaces the deadline; the old deadline can
//!    never fire.

use std::time::Duration;

use web_time::Instant;

/// A cancellable one-shot deadline.
#[derive(Debug, Clone, Default)]
pub struct DelayTimer {
    deadline: Option<Instant>,
}

impl DelayTimer {
    /// Create a disarmed timer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm (or re-arm) the timer to fire `delay` after `now`.
    pub fn arm(&mut self, now: Instant, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    /// Disarm the timer. Idempotent.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Whether a deadline is pending.
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Check the deadline against `now`.
    ///
    /// Returns `true` exactly once, when the deadline has been reached and
    /// the timer was not cancelled; the timer disarms itself in the same
    /// call.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
