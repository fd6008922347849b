//! Plain-text block export.
//!
//! Creates `daily_stats.txt` in the output directory.  Each day appends one
//! block:
//!
//! ```text
//! -----------------------------
//! Day: 3
//! healthy_percentage - 97.5
//! infected_percentage - 2
//! recovered_percentage - 0.5
//! dead_percentage - 0
//! converted - 12
//! unabsorbed - 0
//!
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::{DailyStatsRow, OutputResult};
use crate::writer::StatsWriter;

/// Separator line opening every day block.
pub const BLOCK_RULE: &str = "-----------------------------";

/// Writes one `key - value` block per day to `daily_stats.txt`.
pub struct TextStatsWriter {
    out:      BufWriter<File>,
    finished: bool,
}

impl TextStatsWriter {
    /// Create (or truncate) `daily_stats.txt` in `dir`.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let file = File::create(dir.join("daily_stats.txt"))?;
        Ok(Self { out: BufWriter::new(file), finished: false })
    }
}

impl StatsWriter for TextStatsWriter {
    fn write_day(&mut self, row: &DailyStatsRow) -> OutputResult<()> {
        writeln!(self.out, "{BLOCK_RULE}")?;
        writeln!(self.out, "Day: {}", row.day)?;
        for (key, value) in row.targets.entries() {
            writeln!(self.out, "{key} - {value}")?;
        }
        writeln!(self.out, "converted - {}", row.converted)?;
        writeln!(self.out, "unabsorbed - {}", row.unabsorbed)?;
        writeln!(self.out)?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}
