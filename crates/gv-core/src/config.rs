//! Visualiser configuration.
//!
//! Every field is fixed at process start.  The only runtime-mutable piece of
//! presentation state (the sort toggle) lives on the grid, not here.

use crate::{GvError, GvResult, Millis};

/// Top-level visualiser configuration.
///
/// Typically loaded from a TOML file by the application crate and passed to
/// the visualiser builder.  Missing keys fall back to [`Default`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct VisConfig {
    /// Nodes per grid side.  The grid holds `grid_width²` nodes.
    pub grid_width: u32,

    /// Side length of the square grid area in pixels.  Each node is drawn
    /// `window_size / grid_width` pixels wide.
    pub window_size: u32,

    /// Target render frames per second.
    pub frame_rate: u32,

    /// Wall-clock length of one simulated day.  Default: 1000 ms.
    pub time_step_ms: Millis,

    /// Last day processed; the loop runs while `day <= day_limit`.
    pub day_limit: u32,

    /// Individuals the model marks infected before day 0.
    pub starting_infections: u32,

    /// Interpolate node colours across frames and calibrate the step size
    /// against the model's cost.
    pub animate_nodes: bool,

    /// Calibrate animation only during the first `n` days.  `None`
    /// calibrates after every day.
    pub timed_days: Option<u32>,

    /// Seed for excess sampling and the sort-toggle reshuffle.  The same
    /// seed and model always produce identical grids.
    pub seed: u64,
}

impl Default for VisConfig {
    fn default() -> Self {
        Self {
            grid_width:          50,
            window_size:         800,
            frame_rate:          60,
            time_step_ms:        1_000,
            day_limit:           365,
            starting_infections: 1,
            animate_nodes:       true,
            timed_days:          None,
            seed:                42,
        }
    }
}

impl VisConfig {
    /// Total nodes in the grid.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.grid_width as usize * self.grid_width as usize
    }

    /// Pixel side length of one node.
    #[inline]
    pub fn node_size(&self) -> u32 {
        if self.grid_width == 0 {
            return 0;
        }
        self.window_size / self.grid_width
    }

    /// Whether calibration should run after `day`'s model call.
    #[inline]
    pub fn calibrates(&self, day: u32) -> bool {
        self.animate_nodes && self.timed_days.is_none_or(|limit| day < limit)
    }

    /// Reject configurations the run loop cannot execute.
    ///
    /// A zero-width grid is rejected here so percentage computation never
    /// divides by zero inside the per-day loop.
    pub fn validate(&self) -> GvResult<()> {
        if self.grid_width == 0 {
            return Err(GvError::Config("grid_width must be at least 1".into()));
        }
        if self.frame_rate == 0 {
            return Err(GvError::Config("frame_rate must be at least 1".into()));
        }
        if self.time_step_ms == 0 {
            return Err(GvError::Config("time_step_ms must be at least 1".into()));
        }
        if self.window_size < self.grid_width {
            return Err(GvError::Config(format!(
                "window_size {} is smaller than grid_width {}; nodes would be 0 px wide",
                self.window_size, self.grid_width
            )));
        }
        if u32::try_from(self.node_count()).is_err() {
            return Err(GvError::Config(format!(
                "grid_width {} exceeds the addressable node count",
                self.grid_width
            )));
        }
        Ok(())
    }
}
