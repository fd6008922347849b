//! Wall-clock sources for the frame loop.
//!
//! The loop only ever asks two things of a clock: "what time is it" and
//! "block until the next frame is due".  [`SystemClock`] answers with real
//! time; [`ManualClock`] answers with a shared counter so tests and
//! benchmarks can drive the loop without sleeping.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use gv_core::Millis;

/// A monotonic millisecond clock that can pace frames.
pub trait Clock {
    /// Milliseconds since an arbitrary fixed origin.  Never decreases.
    fn now_ms(&self) -> Millis;

    /// Block until one frame at `frame_rate` has elapsed since the previous
    /// call.  Returns immediately if the frame is already overdue.
    fn wait_frame(&mut self, frame_rate: u32);
}

// ── SystemClock ───────────────────────────────────────────────────────────────

/// Real time via [`Instant`], pacing frames with `thread::sleep`.
pub struct SystemClock {
    origin:     Instant,
    last_frame: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self { origin: now, last_frame: now }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> Millis {
        self.origin.elapsed().as_millis() as Millis
    }

    fn wait_frame(&mut self, frame_rate: u32) {
        let frame = Duration::from_secs(1) / frame_rate.max(1);
        let due = self.last_frame + frame;
        let now = Instant::now();
        if due > now {
            std::thread::sleep(due - now);
            self.last_frame = due;
        } else {
            self.last_frame = now;
        }
    }
}

// ── ManualClock ───────────────────────────────────────────────────────────────

/// A clock whose time only moves when told to.
///
/// Clones share the same counter, so a test can hand one clone to the
/// visualiser and another to a stub model that "spends" time in `pass_day`.
/// Each `wait_frame` advances the shared time by `frame_ms`.
#[derive(Clone, Debug)]
pub struct ManualClock {
    now:      Rc<Cell<Millis>>,
    frame_ms: Millis,
}

impl ManualClock {
    pub fn new(frame_ms: Millis) -> Self {
        Self { now: Rc::new(Cell::new(0)), frame_ms }
    }

    pub fn advance(&self, ms: Millis) {
        self.now.set(self.now.get() + ms);
    }

    pub fn set(&self, ms: Millis) {
        self.now.set(ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> Millis {
        self.now.get()
    }

    fn wait_frame(&mut self, _frame_rate: u32) {
        self.advance(self.frame_ms);
    }
}
