//! Visualiser observer trait for progress reporting and data collection.

use gv_core::{Day, Millis, TargetStats};
use gv_reconcile::ReconcileReport;

/// Final diagnostics reported when the loop exits.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunSummary {
    pub days_processed:   u32,
    /// The day that would have been processed next.
    pub final_day:        Day,
    pub frames:           u64,
    /// Calibrated running average of the model's per-day cost.
    pub avg_model_cost:   Millis,
    pub total_converted:  usize,
    pub total_unabsorbed: usize,
    /// `true` if the loop ended on a quit event rather than the day limit.
    pub quit_requested:   bool,
}

/// Callbacks invoked by [`Visualiser::run`][crate::Visualiser::run] around
/// each processed day.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl VisObserver for ProgressPrinter {
///     fn on_day_end(&mut self, day: Day, _stats: &TargetStats, report: &ReconcileReport) {
///         println!("{day}: {} nodes converted", report.converted_total());
///     }
/// }
/// ```
pub trait VisObserver {
    /// Called at a day boundary, before the model is asked for stats.
    fn on_day_start(&mut self, _day: Day) {}

    /// Called once the day's reconciliation has been applied to the grid.
    fn on_day_end(&mut self, _day: Day, _stats: &TargetStats, _report: &ReconcileReport) {}

    /// Called once after the loop exits.
    fn on_run_end(&mut self, _summary: &RunSummary) {}
}

/// A [`VisObserver`] that does nothing.
pub struct NoopObserver;

impl VisObserver for NoopObserver {}
