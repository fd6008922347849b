//! The epidemic model's per-day output and the rounding rules applied to it.
//!
//! # Rounding
//!
//! Percentages are rounded to two decimals and node counts to the nearest
//! integer, both with ties going to the even neighbour.  Using the same rule
//! for the surplus and the deficit side keeps `excess` and `needed` exact
//! negations of each other for a given category.

use crate::{Category, Day, GvError, GvResult};

/// Maximum distance from 100 the four percentages may sum to before
/// [`TargetStats::validate`] rejects them.
pub const SUM_TOLERANCE: f64 = 0.5;

/// Round a percentage to two decimal places.
#[inline]
pub fn round_pct(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Convert a signed percentage delta into a whole node count.
///
/// `round(delta_pct / 100 * node_count)`.
#[inline]
pub fn round_count(delta_pct: f64, node_count: usize) -> i64 {
    (delta_pct / 100.0 * node_count as f64).round_ties_even() as i64
}

/// Target population percentages for one simulated day.
///
/// Immutable once published; `gv-sim` keeps the full history indexed by day.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetStats {
    pub healthy_percentage:   f64,
    pub infected_percentage:  f64,
    pub recovered_percentage: f64,
    pub dead_percentage:      f64,
}

impl TargetStats {
    pub fn new(healthy: f64, infected: f64, recovered: f64, dead: f64) -> Self {
        Self {
            healthy_percentage:   healthy,
            infected_percentage:  infected,
            recovered_percentage: recovered,
            dead_percentage:      dead,
        }
    }

    /// The target percentage for one category.
    #[inline]
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Healthy => self.healthy_percentage,
            Category::Infected => self.infected_percentage,
            Category::Recovered => self.recovered_percentage,
            Category::Dead => self.dead_percentage,
        }
    }

    pub fn sum(&self) -> f64 {
        Category::ALL.iter().map(|&c| self.get(c)).sum()
    }

    /// Reject negative entries and totals further than [`SUM_TOLERANCE`]
    /// from 100.
    pub fn validate(&self, day: Day) -> GvResult<()> {
        let sum = self.sum();
        let negative = Category::ALL.iter().any(|&c| self.get(c) < 0.0 || self.get(c).is_nan());
        if negative || (sum - 100.0).abs() > SUM_TOLERANCE {
            return Err(GvError::InvalidTargets { day, sum });
        }
        Ok(())
    }

    /// Key/value pairs in export order, keyed the way the model names them.
    pub fn entries(&self) -> [(&'static str, f64); 4] {
        [
            ("healthy_percentage", self.healthy_percentage),
            ("infected_percentage", self.infected_percentage),
            ("recovered_percentage", self.recovered_percentage),
            ("dead_percentage", self.dead_percentage),
        ]
    }
}
