//! gridvis-console: terminal front end for the gridvis reconciliation engine.
//!
//! Runs a toy compartment model (or a CSV script of daily targets) and shows
//! the grid converging towards each day's percentages.  Press `s` to toggle
//! sorted presentation and `q` to quit.
//!
//! ```text
//! gridvis-console --width 40 --days 120 --export-dir ./output
//! gridvis-console --script targets.csv --headless --export-format csv --export-dir ./output
//! RUST_LOG=info gridvis-console --headless 2> run.log
//! ```

mod cli;
mod config;
mod model;
mod render;


use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use gv_core::{Day, TargetStats};
use gv_output::{
    CsvStatsWriter, OutputResult, StatsOutputObserver, StatsWriter, TextStatsWriter,
};
use gv_reconcile::ReconcileReport;
use gv_sim::{
    EpidemicModel, HeadlessPresenter, ManualClock, RunSummary, ScriptedModel, VisObserver,
    VisualiserBuilder, load_targets_csv,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::Args;
use config::{AppConfig, ExportFormat};
use model::CompartmentModel;
use render::TerminalPresenter;

// ── Observer wrapper ─────────────────────────────────────────────────────────

/// Forwards to the optional stats exporter and keeps a per-day count.
struct ConsoleObserver {
    export: Option<StatsOutputObserver<Box<dyn StatsWriter>>>,
    days:   u32,
}

impl VisObserver for ConsoleObserver {
    fn on_day_start(&mut self, day: Day) {
        if let Some(export) = &mut self.export {
            export.on_day_start(day);
        }
    }

    fn on_day_end(&mut self, day: Day, stats: &TargetStats, report: &ReconcileReport) {
        self.days += 1;
        if let Some(export) = &mut self.export {
            export.on_day_end(day, stats, report);
        }
    }

    fn on_run_end(&mut self, summary: &RunSummary) {
        if let Some(export) = &mut self.export {
            export.on_run_end(summary);
        }
    }
}

fn open_writer(dir: &Path, format: ExportFormat) -> OutputResult<Box<dyn StatsWriter>> {
    std::fs::create_dir_all(dir)?;
    Ok(match format {
        ExportFormat::Text => Box::new(TextStatsWriter::new(dir)?),
        ExportFormat::Csv => Box::new(CsvStatsWriter::new(dir)?),
    })
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    }
    .with_overrides(&args);
    config.visualiser.validate()?;

    // 1. Model: scripted replay or the built-in compartment model.
    let model: Box<dyn EpidemicModel> = match &args.script {
        Some(path) => {
            let script = load_targets_csv(path)
                .with_context(|| format!("failed to load target script {}", path.display()))?;
            info!(days = script.len(), "replaying target script");
            Box::new(ScriptedModel::new(script))
        }
        None => Box::new(CompartmentModel::new(config.model.clone())),
    };

    // 2. Optional daily stats export.
    let export = match &config.export_dir {
        Some(dir) => {
            let writer = open_writer(dir, config.export_format)
                .with_context(|| format!("failed to open export directory {}", dir.display()))?;
            Some(StatsOutputObserver::new(writer))
        }
        None => None,
    };
    let mut observer = ConsoleObserver { export, days: 0 };

    // 3. Run.
    let builder = VisualiserBuilder::new(config.visualiser.clone(), model).sorted(args.sorted);
    let started = Instant::now();
    let summary = if args.headless {
        // Simulated time: one frame per call, no sleeping.
        let frame_ms = u64::from(1_000 / config.visualiser.frame_rate).max(1);
        let mut vis = builder.clock(ManualClock::new(frame_ms)).build()?;
        vis.run(&mut HeadlessPresenter, &mut observer)?
    } else {
        let mut vis = builder.build()?;
        let mut presenter = TerminalPresenter::new().context("failed to set up terminal")?;
        let result = vis.run(&mut presenter, &mut observer);
        let draw_error = presenter.take_error();
        drop(presenter);
        if let Some(e) = draw_error {
            eprintln!("terminal error: {e}");
        }
        result?
    };
    let elapsed = started.elapsed();

    // 4. Report.
    if let Some(e) = observer.export.as_mut().and_then(|o| o.take_error()) {
        eprintln!("export error: {e}");
    }

    println!("=== gridvis-console ===");
    println!(
        "Grid: {0}×{0}  |  Days processed: {1}  |  Frames: {2}",
        config.visualiser.grid_width, summary.days_processed, summary.frames
    );
    println!(
        "Converted: {}  |  Unabsorbed: {}  |  Avg model cost: {} ms",
        summary.total_converted, summary.total_unabsorbed, summary.avg_model_cost
    );
    if summary.quit_requested {
        println!("Stopped at {} on request", summary.final_day);
    }
    if let Some(dir) = &config.export_dir {
        println!("Daily stats ({} days) written to {}", observer.days, dir.display());
    }
    println!("Wall time: {:.2?}", elapsed);

    Ok(())
}
