//! `gv-output`: daily stats export for gridvis runs.
//!
//! Two backends are provided:
//!
//! | Backend  | File created        | Layout                                   |
//! |----------|---------------------|------------------------------------------|
//! | Text     | `daily_stats.txt`   | one `Day: N` block of `key - value` lines |
//! | CSV      | `daily_stats.csv`   | one row per day                          |
//!
//! Both implement [`StatsWriter`] and are driven by [`StatsOutputObserver`],
//! which implements `gv_sim::VisObserver`.  Export is opt-in: an application
//! that configures no export directory simply never builds a writer.
//!
//! # Usage
//!
//! ```rust,ignore
//! use gv_output::{StatsOutputObserver, TextStatsWriter};
//!
//! let writer = TextStatsWriter::new(Path::new("./output"))?;
//! let mut obs = StatsOutputObserver::new(writer);
//! vis.run(&mut presenter, &mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("export error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod text;
pub mod writer;


pub use csv::CsvStatsWriter;
pub use error::{OutputError, OutputResult};
pub use observer::StatsOutputObserver;
pub use row::DailyStatsRow;
pub use text::{BLOCK_RULE, TextStatsWriter};
pub use writer::StatsWriter;
