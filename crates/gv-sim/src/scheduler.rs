//! Converts wall-clock time into simulated-day boundaries.
//!
//! # Cadence
//!
//! A boundary fires on the first poll where more than `time_step` ms have
//! passed since the previous boundary.  The boundary timestamp then resets
//! to the poll time, not to `previous + time_step`, so:
//!
//! - at most one day advances per poll, however late the poll is;
//! - missed days are never caught up.  A loop that stalls for five
//!   `time_step`s still advances a single day.
//!
//! This keeps the model call count equal to the day count regardless of
//! frame rate.

use gv_core::Millis;

#[derive(Clone, Debug)]
pub struct DayScheduler {
    time_step:     Millis,
    last_boundary: Millis,
}

impl DayScheduler {
    /// Start counting from `now`.
    pub fn new(time_step: Millis, now: Millis) -> Self {
        Self { time_step, last_boundary: now }
    }

    /// Returns `true` if a day boundary has passed, and if so restarts the
    /// interval at `now`.
    pub fn poll(&mut self, now: Millis) -> bool {
        if now.saturating_sub(self.last_boundary) > self.time_step {
            self.last_boundary = now;
            true
        } else {
            false
        }
    }

    #[inline]
    pub fn time_step(&self) -> Millis {
        self.time_step
    }

    #[inline]
    pub fn last_boundary(&self) -> Millis {
        self.last_boundary
    }
}
