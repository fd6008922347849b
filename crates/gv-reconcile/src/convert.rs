//! Convert pass: hand pooled nodes to categories in deficit.

use gv_core::Category;
use gv_grid::Grid;

use crate::DailyTally;

/// What the convert pass did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Conversions {
    /// Nodes converted into each category, indexed by [`Category::index`].
    pub converted:  [usize; 4],
    /// Pooled nodes no deficit absorbed.  They keep their status.
    pub unabsorbed: usize,
}

/// Drain the tally's pool into the grid.
///
/// Each pooled node, in pool order, goes to the first category of
/// [`Category::PRIORITY`] whose `needed` is still positive.  Leftover pool
/// nodes are counted as unabsorbed and left alone; the next day's tally
/// starts fresh, so the slack is not carried forward.
pub fn convert_excess(tally: &mut DailyTally, grid: &mut Grid) -> Conversions {
    let pool = std::mem::take(tally.pool_mut());
    let mut out = Conversions::default();

    for &id in &pool {
        let target = Category::PRIORITY
            .into_iter()
            .find(|&c| tally.record(c).needed > 0);

        match target {
            Some(category) => {
                grid.convert(id, category);
                tally.record_mut(category).needed -= 1;
                out.converted[category.index()] += 1;
            }
            None => out.unabsorbed += 1,
        }
    }

    *tally.pool_mut() = pool;
    out
}
