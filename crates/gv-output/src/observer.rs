//! `StatsOutputObserver<W>`: bridges `VisObserver` to a `StatsWriter`.

use gv_core::{Day, TargetStats};
use gv_reconcile::ReconcileReport;
use gv_sim::{RunSummary, VisObserver};
use tracing::warn;

use crate::row::DailyStatsRow;
use crate::writer::StatsWriter;
use crate::{OutputError, OutputResult};

/// A [`VisObserver`] that exports every processed day through any
/// [`StatsWriter`] backend.
///
/// Errors from the writer are stored internally because `VisObserver`
/// methods have no return value.  After `vis.run()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct StatsOutputObserver<W: StatsWriter> {
    writer:     W,
    days:       u32,
    last_error: Option<OutputError>,
}

impl<W: StatsWriter> StatsOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, days: 0, last_error: None }
    }

    /// Take the stored write error (if any) after `vis.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Days successfully written so far.
    pub fn days_written(&self) -> u32 {
        self.days
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                warn!(error = %e, "stats export failed; later days may be missing");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: StatsWriter> VisObserver for StatsOutputObserver<W> {
    fn on_day_end(&mut self, day: Day, stats: &TargetStats, report: &ReconcileReport) {
        let row = DailyStatsRow::new(day, stats, report);
        let result = self.writer.write_day(&row);
        if result.is_ok() {
            self.days += 1;
        }
        self.store_err(result);
    }

    fn on_run_end(&mut self, _summary: &RunSummary) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
