//! Plain data row written by export backends.

use gv_core::{Category, Day, TargetStats};
use gv_reconcile::ReconcileReport;

/// Everything exported about one processed day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyStatsRow {
    pub day:        u32,
    /// Percentages published by the model.
    pub targets:    TargetStats,
    /// Grid percentages after reconciliation, indexed by [`Category::index`].
    pub grid:       [f64; 4],
    pub converted:  usize,
    pub unabsorbed: usize,
}

impl DailyStatsRow {
    pub fn new(day: Day, targets: &TargetStats, report: &ReconcileReport) -> Self {
        Self {
            day:        day.0,
            targets:    *targets,
            grid:       report.after,
            converted:  report.converted_total(),
            unabsorbed: report.unabsorbed,
        }
    }

    /// Grid percentage for `category` after reconciliation.
    #[inline]
    pub fn grid_pct(&self, category: Category) -> f64 {
        self.grid[category.index()]
    }
}
