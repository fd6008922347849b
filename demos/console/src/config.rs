//! Application configuration: a TOML file overlaid with CLI flags.
//!
//! ```toml
//! export_dir    = "./output"
//! export_format = "text"
//!
//! [visualiser]
//! grid_width = 40
//! day_limit  = 120
//!
//! [model]
//! beta = 0.35
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;
use gv_core::VisConfig;
use serde::Deserialize;

use crate::cli::Args;
use crate::model::ModelParams;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// `Day: N` blocks of `key - value` lines
    #[default]
    Text,
    /// One row per day
    Csv,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub visualiser:    VisConfig,
    pub model:         ModelParams,
    /// Daily stats export is off unless this is set.
    pub export_dir:    Option<PathBuf>,
    pub export_format: ExportFormat,
}

impl AppConfig {
    /// Parse a TOML config file.  Missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("failed to parse config {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Apply CLI overrides on top of the file values.
    pub fn with_overrides(mut self, args: &Args) -> Self {
        let vis = &mut self.visualiser;
        if let Some(w) = args.width {
            vis.grid_width = w;
        }
        if let Some(d) = args.days {
            vis.day_limit = d;
        }
        if let Some(fps) = args.fps {
            vis.frame_rate = fps;
        }
        if let Some(ms) = args.time_step_ms {
            vis.time_step_ms = ms;
        }
        if let Some(seed) = args.seed {
            vis.seed = seed;
        }
        if args.no_animation {
            vis.animate_nodes = false;
        }
        if let Some(dir) = &args.export_dir {
            self.export_dir = Some(dir.clone());
        }
        if let Some(format) = args.export_format {
            self.export_format = format;
        }
        self
    }
}
