//! Single-slot tick timer.
//!
//! Arming replaces any pending deadline, so at most one tick is ever in flight.
//! A running machine re-arms once per tick it consumes; a paused one declines
//! to, and the slot stays empty until the next unpause.

use std::time::{Duration, Instant};

use tracing::trace;

use crate::core::Effect;

#[derive(Debug, Clone)]
pub struct Ticker {
    origin: Instant,
    deadline: Option<Instant>,
}

impl Ticker {
    pub fn new(origin: Instant) -> Self {
        Self {
            origin,
            deadline: None,
        }
    }

    /// Schedule the next tick `after` from `now`, replacing any pending one.
    pub fn arm(&mut self, now: Instant, after: Duration) {
        self.deadline = Some(now + after);
    }

    /// Execute a scheduling request returned by a transition.
    ///
    /// Returns true if the host should stop.
    pub fn apply(&mut self, effect: Option<Effect>, now: Instant) -> bool {
        match effect {
            Some(Effect::ScheduleTick(after)) => {
                trace!(after_ms = after.as_millis() as u64, "tick armed");
                self.arm(now, after);
                false
            }
            Some(Effect::Quit) => {
                self.deadline = None;
                true
            }
            None => false,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// How long the host may wait for input before the next tick is due.
    ///
    /// `None` means no tick is pending and the host can block indefinitely.
    pub fn timeout(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Consume the pending tick if it is due at `now`.
    pub fn take_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Milliseconds since the ticker was created, for `Event::Tick` stamps.
    pub fn elapsed_ms(&self, now: Instant) -> u64 {
        now.saturating_duration_since(self.origin).as_millis() as u64
    }
}
