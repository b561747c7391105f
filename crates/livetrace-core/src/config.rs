//! Loop configuration: axis mode, frame rate and observation window.

use std::time::Duration;

use crate::error::PlotError;

/// Parameters of a live plot run.
///
/// `fps * obs_window` is the number of samples kept per signal. Neither value
/// changes while the loop runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotConfig {
    /// Grow the X axis with the data while the window fills. When false the
    /// visible range is pinned to `[0, obs_window]` from the first tick.
    pub progress: bool,
    /// Ticks per second.
    pub fps: u32,
    /// Width of the observation window in seconds.
    pub obs_window: u32,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            progress: true,
            fps: 10,
            obs_window: 30,
        }
    }
}

impl PlotConfig {
    pub fn new(progress: bool, fps: u32, obs_window: u32) -> Result<Self, PlotError> {
        let config = Self {
            progress,
            fps,
            obs_window,
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would give a zero-length window or an infinite
    /// tick budget.
    pub fn validate(&self) -> Result<(), PlotError> {
        if self.fps == 0 {
            return Err(PlotError::InvalidConfig("fps must be positive"));
        }
        if self.obs_window == 0 {
            return Err(PlotError::InvalidConfig("obs_window must be positive"));
        }
        if (self.fps as u64) * (self.obs_window as u64) > usize::MAX as u64 {
            return Err(PlotError::InvalidConfig("fps * obs_window overflows"));
        }
        Ok(())
    }

    /// Samples retained per signal (`N`).
    pub fn capacity(&self) -> usize {
        self.fps as usize * self.obs_window as usize
    }

    /// Seconds per tick (`dt`).
    pub fn dt(&self) -> f64 {
        1.0 / self.fps as f64
    }

    /// Wall-clock budget of one tick.
    pub fn tick_budget(&self) -> Duration {
        Duration::from_secs_f64(self.dt())
    }
}
