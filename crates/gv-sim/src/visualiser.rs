//! The `Visualiser` struct and its frame loop.

use gv_core::{Day, GridRng, VisConfig};
use gv_grid::Grid;
use gv_reconcile::{ReconcileReport, reconcile};
use tracing::{debug, info, trace, warn};

use crate::{
    AnimationCalibrator, Clock, ControlEvent, DayScheduler, EpidemicModel, FrameInfo, Presenter,
    RunSummary, SimResult, StatsHistory, VisObserver,
};

/// The main visualiser runner.
///
/// `Visualiser<M, C>` owns the grid, the model, and all timing state, and
/// drives the frame loop described in the [crate docs][crate].  Nothing is
/// shared with other threads; every mutation happens inside [`run`][Self::run]
/// or the stepping methods it calls.
///
/// Create via [`VisualiserBuilder`][crate::VisualiserBuilder].
pub struct Visualiser<M: EpidemicModel, C: Clock> {
    /// Start-time configuration.  Not mutated after build.
    pub config: VisConfig,

    /// The node grid.  Status changes happen only through reconciliation.
    pub grid: Grid,

    /// The external model producing daily targets.
    pub model: M,

    /// Every target the model has published, by day.
    pub history: StatsHistory,

    pub scheduler:  DayScheduler,
    pub calibrator: AnimationCalibrator,
    pub clock:      C,

    /// Next day to process.
    pub day: Day,

    pub(crate) rng:              GridRng,
    pub(crate) frames:           u64,
    pub(crate) total_converted:  usize,
    pub(crate) total_unabsorbed: usize,
}

impl<M: EpidemicModel, C: Clock> Visualiser<M, C> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run until `day` passes `config.day_limit` or a quit event arrives.
    ///
    /// A day boundary that fired always completes tally, diff, and convert
    /// before the next quit check.  Errors from the model or from a stats
    /// lookup abort the run immediately.
    pub fn run<P: Presenter, O: VisObserver>(
        &mut self,
        presenter: &mut P,
        observer:  &mut O,
    ) -> SimResult<RunSummary> {
        let mut quit = false;
        while self.day.0 <= self.config.day_limit {
            self.clock.wait_frame(self.config.frame_rate);

            if self.handle_events(presenter.poll_events()) {
                quit = true;
                break;
            }

            self.step(observer)?;
            self.draw(presenter);
        }

        let summary = self.summary(quit);
        info!(
            days = summary.days_processed,
            frames = summary.frames,
            avg_model_cost_ms = summary.avg_model_cost,
            converted = summary.total_converted,
            unabsorbed = summary.total_unabsorbed,
            quit = summary.quit_requested,
            "visualiser stopped"
        );
        observer.on_run_end(&summary);
        Ok(summary)
    }

    /// Poll the scheduler and, on a boundary, process one day.
    ///
    /// Returns the day's report if a boundary fired.
    pub fn step<O: VisObserver>(&mut self, observer: &mut O) -> SimResult<Option<ReconcileReport>> {
        if !self.scheduler.poll(self.clock.now_ms()) {
            return Ok(None);
        }
        self.process_day(observer).map(Some)
    }

    /// Process the current day unconditionally: model call, calibration,
    /// reconciliation, then advance the day counter.
    pub fn process_day<O: VisObserver>(&mut self, observer: &mut O) -> SimResult<ReconcileReport> {
        let day = self.day;
        observer.on_day_start(day);

        let started = self.clock.now_ms();
        let stats = self.model.pass_day(day)?;
        let cost = self.clock.now_ms().saturating_sub(started);

        if let Err(e) = stats.validate(day) {
            warn!(error = %e, "reconciling against off-balance targets");
        }
        self.history.record(day, stats)?;

        if self.config.calibrates(day.0) {
            let step = self.calibrator.record(cost);
            self.grid.set_max_step(step);
            trace!(cost_ms = cost, avg_ms = self.calibrator.avg_cost(), step, "calibrated animation");
        }

        let target = *self.history.get(day)?;
        let report = reconcile(&mut self.grid, &target, &mut self.rng)?;
        self.total_converted += report.converted_total();
        self.total_unabsorbed += report.unabsorbed;

        info!(
            day = day.0,
            model_ms = cost,
            converted = report.converted_total(),
            unabsorbed = report.unabsorbed,
            "day passed"
        );
        observer.on_day_end(day, &target, &report);

        self.day = day.next();
        Ok(report)
    }

    /// Flip the presentation mode.  Leaving sorted mode reshuffles slots.
    pub fn toggle_sort(&mut self) {
        let mode = self.grid.toggle_sort(&mut self.rng);
        debug!(mode = ?mode, "presentation mode toggled");
    }

    /// Frames presented so far.
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    // ── Frame helpers ─────────────────────────────────────────────────────

    /// Apply control events.  Returns `true` if the loop should stop.
    fn handle_events(&mut self, events: Vec<ControlEvent>) -> bool {
        let mut quit = false;
        for event in events {
            match event {
                ControlEvent::ToggleSort => self.toggle_sort(),
                ControlEvent::Quit => quit = true,
            }
        }
        quit
    }

    fn draw<P: Presenter>(&mut self, presenter: &mut P) {
        let animate = self.config.animate_nodes;
        if animate && !self.grid.is_sorted_mode() {
            self.grid.advance_animations();
        }

        let frame = FrameInfo {
            day:       self.day,
            frame:     self.frames,
            node_size: self.config.node_size(),
            updated:   self.grid.take_updated(),
        };
        presenter.present(&frame, self.grid.view(animate));
        self.frames += 1;
    }

    fn summary(&self, quit_requested: bool) -> RunSummary {
        RunSummary {
            days_processed:   self.history.len() as u32,
            final_day:        self.day,
            frames:           self.frames,
            avg_model_cost:   self.calibrator.avg_cost(),
            total_converted:  self.total_converted,
            total_unabsorbed: self.total_unabsorbed,
            quit_requested,
        }
    }
}
