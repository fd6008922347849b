//! The `StatsWriter` trait implemented by all export backends.

use crate::{DailyStatsRow, OutputResult};

/// Trait implemented by the text and CSV writers.
///
/// Errors are returned to the caller; [`StatsOutputObserver`][crate::StatsOutputObserver]
/// stores them for retrieval after the run.
pub trait StatsWriter {
    /// Append one day's stats.
    fn write_day(&mut self, row: &DailyStatsRow) -> OutputResult<()>;

    /// Flush and close the underlying file.
    ///
    /// Idempotent.  Writing after `finish` is a caller bug.
    fn finish(&mut self) -> OutputResult<()>;
}

impl<W: StatsWriter + ?Sized> StatsWriter for Box<W> {
    fn write_day(&mut self, row: &DailyStatsRow) -> OutputResult<()> {
        (**self).write_day(row)
    }

    fn finish(&mut self) -> OutputResult<()> {
        (**self).finish()
    }
}
