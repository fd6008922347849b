//! Summary of one day's reconciliation.

use gv_core::Category;

/// Everything a caller might log or export about one reconciliation.
///
/// Arrays are indexed by [`Category::index`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReconcileReport {
    /// Grid percentages before conversion.
    pub observed:      [f64; 4],
    /// Grid percentages after conversion.
    pub after:         [f64; 4],
    /// Signed excess per category as computed by the diff pass.
    pub excess_counts: [i64; 4],
    pub pool_size:     usize,
    pub converted:     [usize; 4],
    pub unabsorbed:    usize,
    /// Deficit left over after the pool ran dry.
    pub unmet:         [usize; 4],
}

impl ReconcileReport {
    pub fn converted_total(&self) -> usize {
        self.converted.iter().sum()
    }

    #[inline]
    pub fn converted_into(&self, category: Category) -> usize {
        self.converted[category.index()]
    }

    #[inline]
    pub fn after_pct(&self, category: Category) -> f64 {
        self.after[category.index()]
    }
}
