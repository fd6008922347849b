//! Day-indexed record of every published [`TargetStats`].

use gv_core::{Day, GvError, GvResult, TargetStats};

/// Published stats, one entry per processed day, in day order.
#[derive(Clone, Debug, Default)]
pub struct StatsHistory {
    days: Vec<TargetStats>,
}

impl StatsHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `day`'s stats.  Days must arrive in order with no gaps;
    /// a published day is never overwritten.
    pub fn record(&mut self, day: Day, stats: TargetStats) -> GvResult<()> {
        let expected = Day(self.days.len() as u32);
        if day != expected {
            return Err(GvError::DayOutOfOrder { expected, got: day });
        }
        self.days.push(stats);
        Ok(())
    }

    /// Stats for `day`.  Asking for a day that has not been published yet
    /// is a caller bug and fails with [`GvError::DayNotComputed`].
    pub fn get(&self, day: Day) -> GvResult<&TargetStats> {
        self.days.get(day.index()).ok_or(GvError::DayNotComputed {
            day,
            available: self.days.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn latest(&self) -> Option<(Day, &TargetStats)> {
        self.days.last().map(|s| (Day(self.days.len() as u32 - 1), s))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Day, &TargetStats)> {
        self.days.iter().enumerate().map(|(i, s)| (Day(i as u32), s))
    }
}
