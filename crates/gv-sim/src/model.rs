//! The `EpidemicModel` trait: the external collaborator that publishes
//! per-day population percentages.

use gv_core::{Day, GvError, TargetStats};
use tracing::debug;

use crate::SimResult;

/// Produces one [`TargetStats`] per simulated day.
///
/// The visualiser calls [`pass_day`][Self::pass_day] exactly once per day
/// boundary, with strictly increasing `day` starting at `Day(0)`.  The call
/// is synchronous; its wall-clock cost feeds animation calibration.
///
/// # Example
///
/// ```rust,ignore
/// struct Constant(TargetStats);
///
/// impl EpidemicModel for Constant {
///     fn pass_day(&mut self, _day: Day) -> SimResult<TargetStats> {
///         Ok(self.0)
///     }
/// }
/// ```
pub trait EpidemicModel {
    /// Mark `count` individuals infected before the first day is processed.
    ///
    /// Default: ignored.
    fn seed_infections(&mut self, _count: u32) -> SimResult<()> {
        Ok(())
    }

    /// Advance the model by one day and return that day's percentages.
    fn pass_day(&mut self, day: Day) -> SimResult<TargetStats>;
}

impl<M: EpidemicModel + ?Sized> EpidemicModel for Box<M> {
    fn seed_infections(&mut self, count: u32) -> SimResult<()> {
        (**self).seed_infections(count)
    }

    fn pass_day(&mut self, day: Day) -> SimResult<TargetStats> {
        (**self).pass_day(day)
    }
}

// ── ScriptedModel ─────────────────────────────────────────────────────────────

/// Replays a fixed list of daily targets.
///
/// Day `n` returns `script[n]`.  Requesting a day past the end of the script
/// fails with [`GvError::DayNotComputed`]; the run loop propagates it.
pub struct ScriptedModel {
    script: Vec<TargetStats>,
    seeded: u32,
}

impl ScriptedModel {
    pub fn new(script: Vec<TargetStats>) -> Self {
        Self { script, seeded: 0 }
    }

    pub fn len(&self) -> usize {
        self.script.len()
    }

    pub fn is_empty(&self) -> bool {
        self.script.is_empty()
    }

    /// Infection count passed to `seed_infections`, for inspection.
    pub fn seeded(&self) -> u32 {
        self.seeded
    }
}

impl EpidemicModel for ScriptedModel {
    fn seed_infections(&mut self, count: u32) -> SimResult<()> {
        // The script already reflects its starting infections.
        self.seeded = count;
        debug!(count, days = self.script.len(), "scripted model ignores seed infections");
        Ok(())
    }

    fn pass_day(&mut self, day: Day) -> SimResult<TargetStats> {
        self.script
            .get(day.index())
            .copied()
            .ok_or_else(|| {
                GvError::DayNotComputed { day, available: self.script.len() }.into()
            })
    }
}
