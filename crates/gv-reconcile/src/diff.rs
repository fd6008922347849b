//! Diff pass: observed vs. target percentages → surplus pool and deficits.

use gv_core::{Category, GridRng, TargetStats, round_count};
use gv_grid::PresentationMode;

use crate::DailyTally;

/// Signed per-category excess, indexed by [`Category::index`].  Positive
/// values were pooled, negative values became `needed`.
pub type ExcessCounts = [i64; 4];

/// Fill the tally's pool and `needed` counts for `target`.
///
/// Surplus selection depends on `mode`:
///
/// - `Unsorted`: a uniform random sample without replacement, so no region
///   of the grid is favoured.
/// - `Sorted`: the first `excess` nodes of the category's slot-ordered list.
///   This is deterministic and positionally biased towards low slots.
///
/// Any pool or `needed` state already on the tally is discarded first.
pub fn compute_diff(
    tally:  &mut DailyTally,
    target: &TargetStats,
    mode:   PresentationMode,
    rng:    &mut GridRng,
) -> ExcessCounts {
    let total = tally.total_count();
    let mut pool = std::mem::take(tally.pool_mut());
    pool.clear();
    let mut counts = [0i64; 4];

    for category in Category::ALL {
        let record = tally.record_mut(category);
        record.excess = 0;
        record.needed = 0;

        let excess = round_count(record.observed_pct - target.get(category), total);
        counts[category.index()] = excess;

        if excess > 0 {
            let take = (excess as usize).min(record.count());
            match mode {
                PresentationMode::Unsorted => {
                    pool.extend_from_slice(rng.sample_prefix(&mut record.nodes, take));
                }
                PresentationMode::Sorted => {
                    pool.extend_from_slice(&record.nodes[..take]);
                }
            }
            record.excess = take;
        } else if excess < 0 {
            let needed = round_count(target.get(category) - record.observed_pct, total);
            record.needed = needed.max(0) as usize;
        }
    }

    *tally.pool_mut() = pool;
    counts
}
