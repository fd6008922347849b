//! `gv-reconcile`: maps population-level targets onto individual grid nodes.
//!
//! # Three-pass reconciliation
//!
//! ```text
//! reconcile(grid, target):
//!   ① Tally      one pass over the grid: node lists + observed % per category.
//!   ② Diff       per category: excess = round((observed − target) / 100 · N)
//!                  excess > 0 → move `excess` nodes into the shared pool
//!                  excess < 0 → needed = round((target − observed) / 100 · N)
//!   ③ Convert    each pooled node goes to the first category still in need,
//!                in priority order Dead > Recovered > Infected > Healthy.
//! ```
//!
//! All four categories are diffed before any node is converted, and the
//! [`DailyTally`] is rebuilt from scratch every day, so no bucket state
//! carries over between days.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use gv_core::{GridRng, TargetStats};
//! use gv_grid::Grid;
//! use gv_reconcile::reconcile;
//!
//! let mut grid = Grid::new(10)?;
//! let mut rng = GridRng::new(42);
//! let report = reconcile(&mut grid, &TargetStats::new(80.0, 20.0, 0.0, 0.0), &mut rng)?;
//! assert_eq!(report.converted_total(), 20);
//! ```

pub mod convert;
pub mod diff;
pub mod report;
pub mod tally;


pub use convert::{Conversions, convert_excess};
pub use diff::{ExcessCounts, compute_diff};
pub use report::ReconcileReport;
pub use tally::{CategoryRecord, DailyTally, observed_percentages};

use gv_core::{GridRng, GvResult, TargetStats};
use gv_grid::Grid;
use tracing::{debug, warn};

/// Run tally → diff → convert against `target` and mark the grid updated.
pub fn reconcile(
    grid:   &mut Grid,
    target: &TargetStats,
    rng:    &mut GridRng,
) -> GvResult<ReconcileReport> {
    let mut tally = DailyTally::tally(grid)?;
    let observed = tally.percentages();

    let excess_counts = compute_diff(&mut tally, target, grid.mode(), rng);
    let pool_size = tally.pool().len();
    let conversions = convert_excess(&mut tally, grid);
    grid.mark_updated();

    let report = ReconcileReport {
        observed,
        after: observed_percentages(grid)?,
        excess_counts,
        pool_size,
        converted: conversions.converted,
        unabsorbed: conversions.unabsorbed,
        unmet: tally.needed(),
    };

    debug!(
        pool = pool_size,
        converted = report.converted_total(),
        unabsorbed = report.unabsorbed,
        "reconciled grid against targets"
    );
    if report.unabsorbed > 0 {
        warn!(unabsorbed = report.unabsorbed, "surplus nodes left in place");
    }
    Ok(report)
}
