//! `gv-sim`: frame loop orchestrator for the gridvis framework.
//!
//! # Frame loop
//!
//! ```text
//! while day <= day_limit:
//!   ① Wait        Clock::wait_frame paces the loop to the frame rate.
//!   ② Events      Presenter::poll_events; ToggleSort flips the grid view,
//!                 Quit ends the loop here (never mid-day).
//!   ③ Boundary    DayScheduler::poll; on a boundary:
//!                   model.pass_day(day)   (timed)
//!                   history.record(day)
//!                   calibrate animation step from the model's cost
//!                   reconcile(grid, history[day])
//!                   day += 1
//!   ④ Draw        advance colour shifts, Presenter::present.
//! ```
//!
//! Everything runs on the calling thread.  The model call blocks the loop;
//! its latency is what calibration measures.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use gv_core::VisConfig;
//! use gv_sim::{HeadlessPresenter, NoopObserver, ScriptedModel, VisualiserBuilder};
//!
//! let model = ScriptedModel::new(targets);
//! let mut vis = VisualiserBuilder::new(VisConfig::default(), model).build()?;
//! let summary = vis.run(&mut HeadlessPresenter, &mut NoopObserver)?;
//! ```

pub mod builder;
pub mod calibration;
pub mod clock;
pub mod error;
pub mod history;
pub mod loader;
pub mod model;
pub mod observer;
pub mod presenter;
pub mod scheduler;
pub mod visualiser;

#[cfg(test)]
mod tests;

pub use builder::VisualiserBuilder;
pub use calibration::AnimationCalibrator;
pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{SimError, SimResult};
pub use history::StatsHistory;
pub use loader::{load_targets_csv, load_targets_reader};
pub use model::{EpidemicModel, ScriptedModel};
pub use observer::{NoopObserver, RunSummary, VisObserver};
pub use presenter::{ControlEvent, FrameInfo, HeadlessPresenter, Presenter};
pub use scheduler::DayScheduler;
pub use visualiser::Visualiser;
