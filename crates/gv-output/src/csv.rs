//! CSV export backend.
//!
//! Creates `daily_stats.csv` with one row per processed day: the model's
//! target percentages, the grid's percentages after reconciliation, and the
//! conversion counts.

use std::fs::File;
use std::path::Path;

use csv::Writer;
use gv_core::Category;

use crate::{DailyStatsRow, OutputResult};
use crate::writer::StatsWriter;

const HEADER: [&str; 11] = [
    "day",
    "healthy_percentage",
    "infected_percentage",
    "recovered_percentage",
    "dead_percentage",
    "grid_healthy",
    "grid_infected",
    "grid_recovered",
    "grid_dead",
    "converted",
    "unabsorbed",
];

/// Writes daily stats to `daily_stats.csv`.
pub struct CsvStatsWriter {
    days:     Writer<File>,
    finished: bool,
}

impl CsvStatsWriter {
    /// Open (or create) `daily_stats.csv` in `dir` and write the header row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut days = Writer::from_path(dir.join("daily_stats.csv"))?;
        days.write_record(HEADER)?;
        Ok(Self { days, finished: false })
    }
}

impl StatsWriter for CsvStatsWriter {
    fn write_day(&mut self, row: &DailyStatsRow) -> OutputResult<()> {
        let mut record = Vec::with_capacity(HEADER.len());
        record.push(row.day.to_string());
        record.extend(row.targets.entries().iter().map(|(_, v)| v.to_string()));
        record.extend(Category::ALL.iter().map(|&c| row.grid_pct(c).to_string()));
        record.push(row.converted.to_string());
        record.push(row.unabsorbed.to_string());
        self.days.write_record(&record)?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.days.flush()?;
        Ok(())
    }
}
