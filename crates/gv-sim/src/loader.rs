//! CSV target-script loader.
//!
//! # CSV format
//!
//! One row per simulated day, days contiguous from 0:
//!
//! ```csv
//! day,healthy,infected,recovered,dead
//! 0,99.96,0.04,0,0
//! 1,99.9,0.1,0,0
//! 2,99.7,0.28,0.02,0
//! ```
//!
//! Rows may appear in any order; gaps or duplicates are rejected.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use gv_core::{Day, GvError, GvResult, TargetStats};

#[derive(Deserialize)]
struct TargetRecord {
    day:       u32,
    healthy:   f64,
    infected:  f64,
    recovered: f64,
    dead:      f64,
}

/// Load a day-indexed target script from a CSV file.
pub fn load_targets_csv(path: &Path) -> GvResult<Vec<TargetStats>> {
    let file = std::fs::File::open(path)?;
    load_targets_reader(file)
}

/// Like [`load_targets_csv`] but accepts any `Read` source.
pub fn load_targets_reader<R: Read>(reader: R) -> GvResult<Vec<TargetStats>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut rows: Vec<TargetRecord> = Vec::new();
    for result in csv_reader.deserialize::<TargetRecord>() {
        rows.push(result.map_err(|e| GvError::Parse(e.to_string()))?);
    }

    rows.sort_by_key(|r| r.day);
    for (i, row) in rows.iter().enumerate() {
        if row.day as usize != i {
            return Err(GvError::Parse(format!(
                "target script has no row for {} (found {} instead)",
                Day(i as u32),
                Day(row.day)
            )));
        }
    }

    Ok(rows
        .into_iter()
        .map(|r| TargetStats::new(r.healthy, r.infected, r.recovered, r.dead))
        .collect())
}
