//! Status colours and channel-wise interpolation.

use gv_core::Status;

/// An 8-bit RGB colour.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const HEALTHY: Rgb = Rgb(0, 255, 0);
    pub const INFECTED_UNKNOWN: Rgb = Rgb(255, 0, 0);
    pub const INFECTED_KNOWN: Rgb = Rgb(255, 100, 100);
    pub const RECOVERED: Rgb = Rgb(255, 255, 0);
    pub const DEAD: Rgb = Rgb(0, 0, 0);

    /// Move each channel towards `target` by at most `max_step`.
    #[inline]
    pub fn step_towards(self, target: Rgb, max_step: u8) -> Rgb {
        Rgb(
            step_channel(self.0, target.0, max_step),
            step_channel(self.1, target.1, max_step),
            step_channel(self.2, target.2, max_step),
        )
    }
}

#[inline]
fn step_channel(from: u8, to: u8, max_step: u8) -> u8 {
    if from < to {
        from.saturating_add(max_step).min(to)
    } else {
        from.saturating_sub(max_step).max(to)
    }
}

/// The resting colour of a node with `status`.
pub fn status_colour(status: Status) -> Rgb {
    match status {
        Status::Healthy => Rgb::HEALTHY,
        Status::InfectedUnknown => Rgb::INFECTED_UNKNOWN,
        Status::InfectedKnown => Rgb::INFECTED_KNOWN,
        Status::Recovered => Rgb::RECOVERED,
        Status::Dead => Rgb::DEAD,
    }
}
