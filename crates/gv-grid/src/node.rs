//! A single grid node: its status and colour-shift animation.
//!
//! # Transitions
//!
//! ```text
//! Healthy(0) → InfectedUnknown(1) → InfectedKnown(2) → Recovered(3) | Dead(4)
//! ```
//!
//! The node never changes its own status.  Transitions are requested by the
//! reconciliation converter through [`Grid::convert`][crate::Grid::convert];
//! the `convert_*` methods are crate-private so nothing else can bypass the
//! grid's bookkeeping.
//!
//! Each transition restarts the colour shift from whatever colour the node is
//! currently showing, so a node converted mid-animation blends from its
//! in-between colour rather than jumping.

use gv_core::Status;

use crate::palette::{Rgb, status_colour};

/// Per-frame channel step used until calibration sets one.
pub const DEFAULT_MAX_STEP: u8 = 5;

/// One grid cell.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    status:     Status,
    /// Colour currently on screen; converges to `status_colour(status)`.
    colour:     Rgb,
    /// Frames spent shifting since the last transition.
    shift_step: u16,
    /// Largest per-channel change applied in one frame.
    max_step:   u8,
}

impl Default for Node {
    fn default() -> Self {
        Self::new(Status::Healthy)
    }
}

impl Node {
    /// A node resting at `status`'s colour.
    pub fn new(status: Status) -> Self {
        Self {
            status,
            colour: status_colour(status),
            shift_step: 0,
            max_step: DEFAULT_MAX_STEP,
        }
    }

    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    #[inline]
    pub fn max_step(&self) -> u8 {
        self.max_step
    }

    /// Frames spent shifting since the last transition.
    #[inline]
    pub fn shift_step(&self) -> u16 {
        self.shift_step
    }

    /// The colour the node is shifting towards.
    #[inline]
    pub fn target_colour(&self) -> Rgb {
        status_colour(self.status)
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.colour != self.target_colour()
    }

    /// Colour to draw.  With `animated == false` the node is shown at its
    /// resting colour regardless of shift progress.
    #[inline]
    pub fn display_colour(&self, animated: bool) -> Rgb {
        if animated { self.colour } else { self.target_colour() }
    }

    /// Advance the colour shift by one frame.  Returns `true` while the node
    /// has not yet reached its resting colour.
    pub fn advance_animation(&mut self) -> bool {
        if !self.is_animating() {
            return false;
        }
        self.colour = self.colour.step_towards(self.target_colour(), self.max_step);
        self.shift_step = self.shift_step.saturating_add(1);
        self.is_animating()
    }

    /// Clamped to at least 1 so every shift terminates.
    pub(crate) fn set_max_step(&mut self, step: u8) {
        self.max_step = step.max(1);
    }

    // ── Transitions ───────────────────────────────────────────────────────

    pub(crate) fn convert_healthy(&mut self) -> bool {
        self.transition(Status::Healthy)
    }

    pub(crate) fn convert_infected(&mut self) -> bool {
        self.transition(Status::InfectedUnknown)
    }

    pub(crate) fn convert_recovered(&mut self) -> bool {
        self.transition(Status::Recovered)
    }

    pub(crate) fn convert_dead(&mut self) -> bool {
        self.transition(Status::Dead)
    }

    /// Returns `false` (and leaves the animation untouched) when the node is
    /// already at `to`.
    fn transition(&mut self, to: Status) -> bool {
        if self.status == to {
            return false;
        }
        self.status = to;
        self.shift_step = 0;
        true
    }
}
