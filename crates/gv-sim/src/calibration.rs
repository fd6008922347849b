//! Animation-speed calibration against the model's measured cost.
//!
//! The per-frame colour step is derived from how long a whole simulated day
//! takes in wall-clock terms (model cost plus `time_step`):
//!
//! ```text
//! avg  = (avg + sample) / 2
//! step = 255 · frame_rate / (avg + time_step) / 5
//! ```
//!
//! All arithmetic is integer, truncating, and the result is clamped to
//! `1..=255` so a shift always finishes.

use gv_core::Millis;

#[derive(Clone, Debug)]
pub struct AnimationCalibrator {
    frame_rate: u32,
    time_step:  Millis,
    avg_cost:   Millis,
    samples:    u32,
}

impl AnimationCalibrator {
    pub fn new(frame_rate: u32, time_step: Millis) -> Self {
        Self { frame_rate, time_step, avg_cost: 0, samples: 0 }
    }

    /// Fold in one model-call duration and return the new per-frame step.
    pub fn record(&mut self, sample: Millis) -> u8 {
        self.avg_cost = (self.avg_cost + sample) / 2;
        self.samples += 1;
        self.step()
    }

    /// Current per-frame step.
    pub fn step(&self) -> u8 {
        let raw = 255 * self.frame_rate as u64 / (self.avg_cost + self.time_step).max(1) / 5;
        raw.clamp(1, 255) as u8
    }

    #[inline]
    pub fn avg_cost(&self) -> Millis {
        self.avg_cost
    }

    #[inline]
    pub fn samples(&self) -> u32 {
        self.samples
    }
}
