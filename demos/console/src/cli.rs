use std::path::PathBuf;

use clap::Parser;

use crate::config::ExportFormat;

/// Command-line flags.  Every value flag overrides the matching TOML key.
#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about = "Terminal grid visualiser for an epidemic model")]
pub struct Args {
    /// Path to config TOML
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Nodes per grid side
    #[arg(long)]
    pub width: Option<u32>,

    /// Last day to process
    #[arg(long)]
    pub days: Option<u32>,

    /// Target frames per second
    #[arg(long)]
    pub fps: Option<u32>,

    /// Wall-clock milliseconds per simulated day
    #[arg(long)]
    pub time_step_ms: Option<u64>,

    #[arg(long)]
    pub seed: Option<u64>,

    /// Replay daily targets from a CSV script instead of the built-in model
    #[arg(long, value_name = "CSV")]
    pub script: Option<PathBuf>,

    /// Write daily stats into this directory
    #[arg(long)]
    pub export_dir: Option<PathBuf>,

    #[arg(long, value_enum)]
    pub export_format: Option<ExportFormat>,

    /// Start in sorted presentation
    #[arg(long, default_value_t = false)]
    pub sorted: bool,

    /// Draw resting colours only
    #[arg(long, default_value_t = false)]
    pub no_animation: bool,

    /// Run without a terminal display, as fast as the model allows
    #[arg(long, default_value_t = false)]
    pub headless: bool,
}
