//! Per-day partition of the grid into status categories.

use gv_core::{Category, GvError, GvResult, NodeId, round_pct};
use gv_grid::Grid;

/// One category's bucket for the current day.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CategoryRecord {
    /// Nodes currently in this category, in slot order until the diff pass
    /// samples from them.
    pub nodes:        Vec<NodeId>,
    /// `count / total · 100`, rounded to two decimals.
    pub observed_pct: f64,
    /// Nodes this category contributed to the pool.
    pub excess:       usize,
    /// Nodes this category still has to gain.
    pub needed:       usize,
}

impl CategoryRecord {
    #[inline]
    pub fn count(&self) -> usize {
        self.nodes.len()
    }
}

/// The full reconciliation state for one day.
///
/// Built by [`DailyTally::tally`], consumed by the diff and convert passes,
/// then dropped.  Nothing in it survives to the next day.
#[derive(Clone, Debug)]
pub struct DailyTally {
    categories: [CategoryRecord; 4],
    total:      Vec<NodeId>,
    pool:       Vec<NodeId>,
}

impl DailyTally {
    /// Classify every node in one pass over the grid.
    pub fn tally(grid: &Grid) -> GvResult<Self> {
        if grid.is_empty() {
            return Err(GvError::EmptyGrid);
        }

        let mut categories: [CategoryRecord; 4] = Default::default();
        let mut total = Vec::with_capacity(grid.len());
        for (id, node) in grid.iter() {
            categories[node.status().category().index()].nodes.push(id);
            total.push(id);
        }

        let n = total.len() as f64;
        for record in &mut categories {
            record.observed_pct = round_pct(record.count() as f64 / n * 100.0);
        }

        Ok(Self { categories, total, pool: Vec::new() })
    }

    #[inline]
    pub fn record(&self, category: Category) -> &CategoryRecord {
        &self.categories[category.index()]
    }

    #[inline]
    pub fn record_mut(&mut self, category: Category) -> &mut CategoryRecord {
        &mut self.categories[category.index()]
    }

    /// Every node in the grid, in slot order.
    #[inline]
    pub fn total(&self) -> &[NodeId] {
        &self.total
    }

    #[inline]
    pub fn total_count(&self) -> usize {
        self.total.len()
    }

    /// Nodes selected for conversion this day, in selection order.
    #[inline]
    pub fn pool(&self) -> &[NodeId] {
        &self.pool
    }

    #[inline]
    pub(crate) fn pool_mut(&mut self) -> &mut Vec<NodeId> {
        &mut self.pool
    }

    /// Observed percentages indexed by [`Category::index`].
    pub fn percentages(&self) -> [f64; 4] {
        self.categories.each_ref().map(|r| r.observed_pct)
    }

    /// Category sizes indexed by [`Category::index`].
    pub fn counts(&self) -> [usize; 4] {
        self.categories.each_ref().map(|r| r.count())
    }

    /// Outstanding `needed` per category.
    pub fn needed(&self) -> [usize; 4] {
        self.categories.each_ref().map(|r| r.needed)
    }
}

/// Observed percentages without building node lists.
pub fn observed_percentages(grid: &Grid) -> GvResult<[f64; 4]> {
    if grid.is_empty() {
        return Err(GvError::EmptyGrid);
    }
    let mut counts = [0usize; 4];
    for node in grid.nodes() {
        counts[node.status().category().index()] += 1;
    }
    let n = grid.len() as f64;
    Ok(counts.map(|c| round_pct(c as f64 / n * 100.0)))
}
