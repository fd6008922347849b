//! Simulated-day counter and wall-clock units.
//!
//! # Design
//!
//! The simulated day is a plain monotonically increasing counter.  Its
//! mapping to wall-clock time is owned by the scheduler in `gv-sim`, which
//! advances it by at most one per poll.  Wall-clock quantities are carried as
//! integer milliseconds (`Millis`) so calibration arithmetic matches the
//! integer formulas exactly.

use std::fmt;

/// Wall-clock milliseconds.
pub type Millis = u64;

/// An absolute simulated-day index.  Day 0 is the first day processed.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Day(pub u32);

impl Day {
    pub const ZERO: Day = Day(0);

    /// The day after `self`.
    #[inline]
    pub fn next(self) -> Day {
        Day(self.0 + 1)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "day {}", self.0)
    }
}
