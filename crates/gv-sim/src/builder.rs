//! Fluent builder for constructing a [`Visualiser`].

use gv_core::{Day, GridRng, Status, VisConfig};
use gv_grid::Grid;
use tracing::debug;

use crate::{
    AnimationCalibrator, Clock, DayScheduler, EpidemicModel, SimResult, StatsHistory,
    SystemClock, Visualiser,
};

/// Fluent builder for [`Visualiser<M, C>`].
///
/// # Required inputs
///
/// - [`VisConfig`]: grid size, frame rate, day length, …
/// - `M: EpidemicModel`: the source of daily targets
///
/// # Optional inputs (have defaults)
///
/// | Method                    | Default                         |
/// |---------------------------|---------------------------------|
/// | `.clock(c)`               | [`SystemClock`]                 |
/// | `.initial_statuses(v)`    | Every node `Healthy`            |
/// | `.sorted(true)`           | Start in unsorted presentation  |
///
/// # Example
///
/// ```rust,ignore
/// let mut vis = VisualiserBuilder::new(config, model)
///     .clock(ManualClock::new(16))
///     .sorted(true)
///     .build()?;
/// vis.run(&mut HeadlessPresenter, &mut NoopObserver)?;
/// ```
pub struct VisualiserBuilder<M: EpidemicModel, C: Clock> {
    config:   VisConfig,
    model:    M,
    clock:    C,
    statuses: Option<Vec<Status>>,
    sorted:   bool,
}

impl<M: EpidemicModel> VisualiserBuilder<M, SystemClock> {
    /// Create a builder with all required inputs.
    pub fn new(config: VisConfig, model: M) -> Self {
        Self {
            config,
            model,
            clock:    SystemClock::new(),
            statuses: None,
            sorted:   false,
        }
    }
}

impl<M: EpidemicModel, C: Clock> VisualiserBuilder<M, C> {
    /// Replace the time source.
    pub fn clock<C2: Clock>(self, clock: C2) -> VisualiserBuilder<M, C2> {
        VisualiserBuilder {
            config:   self.config,
            model:    self.model,
            clock,
            statuses: self.statuses,
            sorted:   self.sorted,
        }
    }

    /// Seed node statuses in row-major order (must be `grid_width²` long).
    pub fn initial_statuses(mut self, statuses: Vec<Status>) -> Self {
        self.statuses = Some(statuses);
        self
    }

    /// Start in sorted presentation mode.
    pub fn sorted(mut self, sorted: bool) -> Self {
        self.sorted = sorted;
        self
    }

    /// Validate the config, build the grid, seed the model's starting
    /// infections, and return a ready-to-run [`Visualiser`].
    pub fn build(mut self) -> SimResult<Visualiser<M, C>> {
        self.config.validate()?;

        let mut grid = match &self.statuses {
            Some(s) => Grid::from_statuses(self.config.grid_width, s)?,
            None => Grid::new(self.config.grid_width)?,
        };
        let mut rng = GridRng::new(self.config.seed);
        if self.sorted {
            grid.toggle_sort(&mut rng);
        }

        self.model.seed_infections(self.config.starting_infections)?;
        debug!(
            nodes = grid.len(),
            starting_infections = self.config.starting_infections,
            "visualiser built"
        );

        Ok(Visualiser {
            scheduler:        DayScheduler::new(self.config.time_step_ms, self.clock.now_ms()),
            calibrator:       AnimationCalibrator::new(self.config.frame_rate, self.config.time_step_ms),
            config:           self.config,
            grid,
            model:            self.model,
            history:          StatsHistory::new(),
            clock:            self.clock,
            day:              Day::ZERO,
            rng,
            frames:           0,
            total_converted:  0,
            total_unabsorbed: 0,
        })
    }
}
