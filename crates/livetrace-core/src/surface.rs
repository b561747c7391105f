//! The drawing side of the loop.
//!
//! A [`RenderSurface`] is whatever shows the chart: a terminal, a window, or
//! a recorder in tests. The loop asks it whether it still has an open output
//! target, hands it one [`Snapshot`] per tick, and sleeps through it so it
//! can process input while waiting for the next tick.

use std::io;
use std::time::Duration;

use crate::axis::XView;
use crate::figure::Decorations;
use crate::signal::SignalColor;
use crate::window::WindowBuffer;

/// One signal's data for the current frame.
#[derive(Debug, Clone)]
pub struct Trace<'a> {
    pub label: &'a str,
    pub color: SignalColor,
    pub samples: &'a WindowBuffer,
}

impl Trace<'_> {
    /// `(x, y)` pairs, oldest first. `xs` and the window always have the
    /// same length while the loop is running.
    pub fn points<'x>(&'x self, xs: &'x [f64]) -> impl Iterator<Item = (f64, f64)> + 'x {
        xs.iter().copied().zip(self.samples.iter())
    }
}

/// Everything needed to draw one frame.
#[derive(Debug, Clone)]
pub struct Snapshot<'a> {
    pub tick: u64,
    /// Virtual time of this tick in seconds.
    pub time: f64,
    pub fps: u32,
    pub x: &'a [f64],
    pub x_view: XView,
    pub x_bounds: (f64, f64),
    pub traces: Vec<Trace<'a>>,
    pub decorations: Decorations<'a>,
    /// Ticks that overran their budget so far.
    pub overruns: u64,
}

impl Snapshot<'_> {
    /// Combined Y range of all traces, ignoring NaN.
    pub fn y_range(&self) -> Option<(f64, f64)> {
        self.traces
            .iter()
            .filter_map(|t| t.samples.min_max())
            .reduce(|(lo, hi), (l, h)| (lo.min(l), hi.max(h)))
    }
}

pub trait RenderSurface {
    /// Whether at least one output target is still open.
    fn is_open(&mut self) -> io::Result<bool>;

    /// Replace whatever was drawn before with this frame.
    fn render(&mut self, snapshot: &Snapshot<'_>) -> io::Result<()>;

    /// Block for `duration`, processing input meanwhile.
    fn pause(&mut self, duration: Duration) -> io::Result<()>;

    /// Final blocking display once every target has been closed.
    fn show(&mut self) -> io::Result<()> {
        Ok(())
    }
}
