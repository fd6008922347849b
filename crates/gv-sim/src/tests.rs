//! Unit and loop tests for gv-sim.

use std::io::Cursor;

use gv_core::{Category, Day, GvError, Millis, Status, TargetStats, VisConfig};
use gv_grid::GridView;
use gv_reconcile::ReconcileReport;

use crate::{
    AnimationCalibrator, ControlEvent, DayScheduler, EpidemicModel, FrameInfo, HeadlessPresenter,
    ManualClock, NoopObserver, Presenter, RunSummary, ScriptedModel, SimError, SimResult,
    StatsHistory, VisObserver, VisualiserBuilder, load_targets_reader,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn test_config(day_limit: u32) -> VisConfig {
    VisConfig {
        grid_width:          10,
        window_size:         100,
        frame_rate:          60,
        time_step_ms:        1_000,
        day_limit,
        starting_infections: 1,
        animate_nodes:       true,
        timed_days:          None,
        seed:                42,
    }
}

fn script() -> Vec<TargetStats> {
    vec![
        TargetStats::new(80.0, 20.0, 0.0, 0.0),
        TargetStats::new(70.0, 20.0, 10.0, 0.0),
        TargetStats::new(70.0, 20.0, 10.0, 0.0),
    ]
}

fn count(statuses: &[Status], category: Category) -> usize {
    statuses.iter().filter(|s| s.category() == category).count()
}

/// Presenter that records frames and emits scripted events on given polls.
#[derive(Default)]
struct RecordingPresenter {
    polls:       u64,
    events:      Vec<(u64, ControlEvent)>,
    frames:      Vec<FrameInfo>,
    last_order:  Vec<Status>,
    last_anim:   Option<bool>,
}

impl RecordingPresenter {
    fn with_event(poll: u64, event: ControlEvent) -> Self {
        Self { events: vec![(poll, event)], ..Self::default() }
    }
}

impl Presenter for RecordingPresenter {
    fn poll_events(&mut self) -> Vec<ControlEvent> {
        let poll = self.polls;
        self.polls += 1;
        self.events
            .iter()
            .filter(|(p, _)| *p == poll)
            .map(|(_, e)| *e)
            .collect()
    }

    fn present(&mut self, frame: &FrameInfo, view: GridView<'_>) {
        self.frames.push(*frame);
        let cells: Vec<_> = view.cells().collect();
        self.last_order = cells.iter().map(|c| c.node.status()).collect();
        self.last_anim = cells.first().map(|c| c.animated);
    }
}

/// Model that spends `cost` ms of shared clock time per day.
struct CostlyModel {
    clock: ManualClock,
    cost:  Millis,
    calls: Vec<Day>,
}

impl EpidemicModel for CostlyModel {
    fn pass_day(&mut self, day: Day) -> SimResult<TargetStats> {
        self.clock.advance(self.cost);
        self.calls.push(day);
        Ok(TargetStats::new(90.0, 10.0, 0.0, 0.0))
    }
}

#[derive(Default)]
struct CountingObserver {
    starts:  Vec<Day>,
    ends:    Vec<(Day, usize)>,
    summary: Option<RunSummary>,
}

impl VisObserver for CountingObserver {
    fn on_day_start(&mut self, day: Day) {
        self.starts.push(day);
    }

    fn on_day_end(&mut self, day: Day, _stats: &TargetStats, report: &ReconcileReport) {
        self.ends.push((day, report.converted_total()));
    }

    fn on_run_end(&mut self, summary: &RunSummary) {
        self.summary = Some(summary.clone());
    }
}

// ── DayScheduler ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod scheduler {
    use super::*;

    #[test]
    fn fires_once_per_elapsed_interval() {
        let mut s = DayScheduler::new(1_000, 0);
        let fired: Vec<bool> = [0, 500, 1_000, 1_500].iter().map(|&t| s.poll(t)).collect();
        assert_eq!(fired, vec![false, false, false, true]);
        assert_eq!(s.last_boundary(), 1_500);
        // Interval restarts at the poll that fired.
        assert!(!s.poll(2_000));
        assert!(!s.poll(2_500));
        assert!(s.poll(2_501));
    }

    #[test]
    fn late_poll_advances_only_one_day() {
        let mut s = DayScheduler::new(1_000, 0);
        assert!(s.poll(10_000));
        assert!(!s.poll(10_001));
        assert!(!s.poll(11_000));
        assert!(s.poll(11_001));
    }

    #[test]
    fn starts_counting_from_construction_time() {
        let mut s = DayScheduler::new(100, 5_000);
        assert!(!s.poll(5_050));
        assert!(s.poll(5_101));
        assert_eq!(s.time_step(), 100);
    }
}

// ── AnimationCalibrator ───────────────────────────────────────────────────────

#[cfg(test)]
mod calibration {
    use super::*;

    #[test]
    fn step_follows_running_average() {
        let mut c = AnimationCalibrator::new(60, 1_000);
        // 15300 / 1000 / 5
        assert_eq!(c.step(), 3);
        assert_eq!(c.record(1_000), 2); // avg 500 → 15300 / 1500 = 10 → 2
        assert_eq!(c.avg_cost(), 500);
        assert_eq!(c.record(3_000), 1); // avg 1750 → 15300 / 2750 = 5 → 1
        assert_eq!(c.avg_cost(), 1_750);
        assert_eq!(c.samples(), 2);
    }

    #[test]
    fn step_is_clamped_to_at_least_one() {
        let mut c = AnimationCalibrator::new(1, 1_000);
        assert_eq!(c.record(100_000), 1);
    }

    #[test]
    fn higher_frame_rate_takes_larger_steps() {
        let mut c = AnimationCalibrator::new(600, 1_000);
        assert_eq!(c.record(0), 30);
    }
}

// ── StatsHistory ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod history {
    use super::*;

    #[test]
    fn records_in_day_order() {
        let mut h = StatsHistory::new();
        h.record(Day(0), script()[0]).unwrap();
        h.record(Day(1), script()[1]).unwrap();
        assert_eq!(h.len(), 2);
        assert_eq!(h.get(Day(1)).unwrap(), &script()[1]);
        assert_eq!(h.latest().unwrap().0, Day(1));
        let days: Vec<Day> = h.iter().map(|(d, _)| d).collect();
        assert_eq!(days, vec![Day(0), Day(1)]);
    }

    #[test]
    fn out_of_order_record_rejected() {
        let mut h = StatsHistory::new();
        let err = h.record(Day(1), script()[0]).unwrap_err();
        assert!(matches!(err, GvError::DayOutOfOrder { expected: Day(0), got: Day(1) }));
    }

    #[test]
    fn requesting_future_day_is_an_error() {
        let mut h = StatsHistory::new();
        h.record(Day(0), script()[0]).unwrap();
        let err = h.get(Day(1)).unwrap_err();
        assert!(matches!(err, GvError::DayNotComputed { day: Day(1), available: 1 }));
    }
}

// ── Loader and ScriptedModel ──────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use super::*;

    #[test]
    fn loads_rows_in_day_order() {
        let csv = "day,healthy,infected,recovered,dead\n1,70,20,10,0\n0,80,20,0,0\n";
        let targets = load_targets_reader(Cursor::new(csv)).unwrap();
        assert_eq!(targets, script()[..2].to_vec());
    }

    #[test]
    fn gap_in_days_rejected() {
        let csv = "day,healthy,infected,recovered,dead\n0,80,20,0,0\n2,70,20,10,0\n";
        assert!(matches!(load_targets_reader(Cursor::new(csv)), Err(GvError::Parse(_))));
    }

    #[test]
    fn malformed_row_rejected() {
        let csv = "day,healthy,infected,recovered,dead\n0,eighty,20,0,0\n";
        assert!(matches!(load_targets_reader(Cursor::new(csv)), Err(GvError::Parse(_))));
    }

    #[test]
    fn scripted_model_runs_out() {
        let mut m = ScriptedModel::new(script());
        assert_eq!(m.pass_day(Day(2)).unwrap(), script()[2]);
        let err = m.pass_day(Day(3)).unwrap_err();
        assert!(matches!(
            err,
            SimError::Core(GvError::DayNotComputed { day: Day(3), available: 3 })
        ));
    }
}

// ── VisualiserBuilder ─────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use super::*;

    #[test]
    fn zero_width_rejected_at_build() {
        let cfg = VisConfig { grid_width: 0, ..test_config(1) };
        let result = VisualiserBuilder::new(cfg, ScriptedModel::new(script())).build();
        assert!(matches!(result, Err(SimError::Core(GvError::Config(_)))));
    }

    #[test]
    fn status_count_mismatch_rejected() {
        let result = VisualiserBuilder::new(test_config(1), ScriptedModel::new(script()))
            .initial_statuses(vec![Status::Healthy; 3])
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn seeds_starting_infections() {
        let cfg = VisConfig { starting_infections: 7, ..test_config(1) };
        let vis = VisualiserBuilder::new(cfg, ScriptedModel::new(script())).build().unwrap();
        assert_eq!(vis.model.seeded(), 7);
        assert_eq!(vis.day, Day::ZERO);
        assert_eq!(vis.grid.len(), 100);
    }

    #[test]
    fn can_start_sorted() {
        let vis = VisualiserBuilder::new(test_config(1), ScriptedModel::new(script()))
            .sorted(true)
            .build()
            .unwrap();
        assert!(vis.grid.is_sorted_mode());
    }
}

// ── Frame loop ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_loop {
    use super::*;

    #[test]
    fn processes_each_day_once_and_converges() {
        let mut vis = VisualiserBuilder::new(test_config(2), ScriptedModel::new(script()))
            .clock(ManualClock::new(100))
            .build()
            .unwrap();
        let mut obs = CountingObserver::default();
        let summary = vis.run(&mut HeadlessPresenter, &mut obs).unwrap();

        assert_eq!(summary.days_processed, 3);
        assert_eq!(summary.final_day, Day(3));
        // Boundaries fire on frames 11, 22, 33 (strictly more than 1000 ms).
        assert_eq!(summary.frames, 33);
        assert!(!summary.quit_requested);

        assert_eq!(obs.starts, vec![Day(0), Day(1), Day(2)]);
        assert_eq!(obs.ends, vec![(Day(0), 20), (Day(1), 10), (Day(2), 0)]);
        assert_eq!(obs.summary, Some(summary.clone()));
        assert_eq!(summary.total_converted, 30);

        let statuses: Vec<Status> = vis.grid.nodes().iter().map(|n| n.status()).collect();
        assert_eq!(count(&statuses, Category::Healthy), 70);
        assert_eq!(count(&statuses, Category::Infected), 20);
        assert_eq!(count(&statuses, Category::Recovered), 10);
    }

    #[test]
    fn stale_stats_request_aborts_run() {
        let short = script()[..2].to_vec();
        let mut vis = VisualiserBuilder::new(test_config(5), ScriptedModel::new(short))
            .clock(ManualClock::new(500))
            .build()
            .unwrap();
        let err = vis.run(&mut HeadlessPresenter, &mut NoopObserver).unwrap_err();
        assert!(matches!(
            err,
            SimError::Core(GvError::DayNotComputed { day: Day(2), available: 2 })
        ));
        assert_eq!(vis.history.len(), 2);
    }

    #[test]
    fn slow_frames_never_catch_up() {
        // Each frame takes five day-lengths; still one day per frame.
        let mut vis = VisualiserBuilder::new(test_config(3), ScriptedModel::new(vec![script()[0]; 4]))
            .clock(ManualClock::new(5_000))
            .build()
            .unwrap();
        let summary = vis.run(&mut HeadlessPresenter, &mut NoopObserver).unwrap();
        assert_eq!(summary.days_processed, 4);
        assert_eq!(summary.frames, 4);
    }

    #[test]
    fn quit_stops_before_any_day() {
        let mut vis = VisualiserBuilder::new(test_config(10), ScriptedModel::new(script()))
            .clock(ManualClock::new(100))
            .build()
            .unwrap();
        let mut presenter = RecordingPresenter::with_event(4, ControlEvent::Quit);
        let summary = vis.run(&mut presenter, &mut NoopObserver).unwrap();

        assert!(summary.quit_requested);
        assert_eq!(summary.days_processed, 0);
        assert_eq!(summary.frames, 4);
    }

    #[test]
    fn quit_after_boundary_keeps_completed_day() {
        let mut vis = VisualiserBuilder::new(test_config(10), ScriptedModel::new(script()))
            .clock(ManualClock::new(100))
            .build()
            .unwrap();
        // Day 0 fires on poll index 10 (frame 11); quit arrives on the next poll.
        let mut presenter = RecordingPresenter::with_event(11, ControlEvent::Quit);
        let summary = vis.run(&mut presenter, &mut NoopObserver).unwrap();

        assert!(summary.quit_requested);
        assert_eq!(summary.days_processed, 1);
        assert_eq!(summary.total_converted, 20);
        assert_eq!(presenter.frames.last().unwrap().day, Day(1));
    }

    #[test]
    fn presenter_sees_updates_once() {
        let mut vis = VisualiserBuilder::new(test_config(0), ScriptedModel::new(script()))
            .clock(ManualClock::new(100))
            .build()
            .unwrap();
        let mut presenter = RecordingPresenter::default();
        vis.run(&mut presenter, &mut NoopObserver).unwrap();

        let updated: Vec<u64> = presenter
            .frames
            .iter()
            .filter(|f| f.updated)
            .map(|f| f.frame)
            .collect();
        // Initial grid, then the day-0 reconciliation.
        assert_eq!(updated, vec![0, 10]);
        assert_eq!(presenter.frames[0].node_size, 10);
    }

    #[test]
    fn toggle_sort_event_switches_view() {
        let mut vis = VisualiserBuilder::new(test_config(0), ScriptedModel::new(script()))
            .clock(ManualClock::new(100))
            .build()
            .unwrap();
        let mut presenter = RecordingPresenter::with_event(0, ControlEvent::ToggleSort);
        vis.run(&mut presenter, &mut NoopObserver).unwrap();

        assert!(vis.grid.is_sorted_mode());
        assert_eq!(presenter.last_anim, Some(false));
        // Infected (rank 1) ahead of healthy (rank 0) in the sorted view.
        let ranks: Vec<u8> = presenter.last_order.iter().map(|s| s.rank()).collect();
        assert!(ranks.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(count(&presenter.last_order[..20], Category::Infected), 20);
    }

    #[test]
    fn calibration_uses_measured_model_cost() {
        let clock = ManualClock::new(100);
        let model = CostlyModel { clock: clock.clone(), cost: 1_000, calls: Vec::new() };
        let mut vis = VisualiserBuilder::new(test_config(0), model)
            .clock(clock)
            .build()
            .unwrap();
        let summary = vis.run(&mut HeadlessPresenter, &mut NoopObserver).unwrap();

        assert_eq!(vis.model.calls, vec![Day(0)]);
        assert_eq!(summary.avg_model_cost, 500);
        assert!(vis.grid.nodes().iter().all(|n| n.max_step() == 2));
    }

    #[test]
    fn calibration_skipped_outside_timed_days() {
        let clock = ManualClock::new(100);
        let model = CostlyModel { clock: clock.clone(), cost: 1_000, calls: Vec::new() };
        let cfg = VisConfig { timed_days: Some(0), ..test_config(0) };
        let mut vis = VisualiserBuilder::new(cfg, model).clock(clock).build().unwrap();
        vis.run(&mut HeadlessPresenter, &mut NoopObserver).unwrap();

        assert_eq!(vis.calibrator.samples(), 0);
        assert!(vis.grid.nodes().iter().all(|n| n.max_step() == gv_grid::DEFAULT_MAX_STEP));
    }

    #[test]
    fn disabled_animation_presents_resting_colours() {
        let cfg = VisConfig { animate_nodes: false, ..test_config(0) };
        let mut vis = VisualiserBuilder::new(cfg, ScriptedModel::new(script()))
            .clock(ManualClock::new(100))
            .build()
            .unwrap();
        let mut presenter = RecordingPresenter::default();
        vis.run(&mut presenter, &mut NoopObserver).unwrap();

        assert_eq!(presenter.last_anim, Some(false));
        assert_eq!(vis.calibrator.samples(), 0);
    }

    #[test]
    fn step_without_boundary_does_nothing() {
        let mut vis = VisualiserBuilder::new(test_config(5), ScriptedModel::new(script()))
            .clock(ManualClock::new(100))
            .build()
            .unwrap();
        assert!(vis.step(&mut NoopObserver).unwrap().is_none());
        vis.clock.set(1_001);
        let report = vis.step(&mut NoopObserver).unwrap().unwrap();
        assert_eq!(report.converted_total(), 20);
        assert_eq!(vis.day, Day(1));
    }

    struct FailingModel;

    impl EpidemicModel for FailingModel {
        fn pass_day(&mut self, day: Day) -> SimResult<TargetStats> {
            Err(SimError::Model { day, message: "solver diverged".into() })
        }
    }

    #[test]
    fn model_failure_aborts_run() {
        let mut vis = VisualiserBuilder::new(test_config(3), FailingModel)
            .clock(ManualClock::new(500))
            .build()
            .unwrap();
        let err = vis.run(&mut HeadlessPresenter, &mut NoopObserver).unwrap_err();
        assert_eq!(err.to_string(), "epidemic model failed on day 0: solver diverged");
        assert!(vis.history.is_empty());
    }
}
