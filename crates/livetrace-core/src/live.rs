//! The live sampler/renderer loop.
//!
//! [`Sampler`] owns the per-signal windows, the virtual clock and the X axis
//! and knows how to take one tick's worth of samples. [`LivePlot`] drives it
//! against a [`RenderSurface`] at `fps` ticks per second until the surface
//! is closed.

use std::time::{Duration, Instant};

use log::{debug, info, warn};

use crate::axis::XAxis;
use crate::clock::VirtualClock;
use crate::config::PlotConfig;
use crate::error::PlotError;
use crate::figure::{Decorations, FigureDescriptor};
use crate::pacing::{FramePacer, Pace};
use crate::signal::Signal;
use crate::surface::{RenderSurface, Snapshot, Trace};
use crate::window::WindowBuffer;

// ---------------------------------------------------------------------------
// Sampler
// ---------------------------------------------------------------------------

/// Sliding-window state of a run.
#[derive(Debug)]
pub struct Sampler {
    signals: Vec<Signal>,
    windows: Vec<WindowBuffer>,
    clock: VirtualClock,
    axis: XAxis,
    config: PlotConfig,
}

impl Sampler {
    pub fn new(signals: Vec<Signal>, config: PlotConfig) -> Self {
        let windows = signals
            .iter()
            .map(|_| WindowBuffer::with_capacity(config.capacity()))
            .collect();
        Self {
            signals,
            windows,
            clock: VirtualClock::new(config.fps),
            axis: XAxis::new(&config),
            config,
        }
    }

    /// Update the X axis for the current tick, then sample every signal at
    /// the tick's virtual time in input order.
    ///
    /// A failing source aborts the tick; signals after it are not sampled.
    pub fn sample_tick(&mut self) -> Result<(), PlotError> {
        let tick = self.clock.tick();
        let t = self.clock.seconds();
        self.axis.update(tick);

        for (signal, window) in self.signals.iter_mut().zip(&mut self.windows) {
            let value = signal.sample(t).map_err(|source| PlotError::Sample {
                label: signal.label().to_string(),
                tick,
                source,
            })?;
            window.push(value);
        }
        Ok(())
    }

    /// Move on to the next tick.
    pub fn advance(&mut self) {
        self.clock.advance();
    }

    /// Frame for the current tick.
    pub fn snapshot<'a>(&'a self, figure: &'a FigureDescriptor, overruns: u64) -> Snapshot<'a> {
        let traces = self
            .signals
            .iter()
            .zip(&self.windows)
            .map(|(signal, window)| Trace {
                label: signal.label(),
                color: signal.color(),
                samples: window,
            })
            .collect();

        Snapshot {
            tick: self.clock.tick(),
            time: self.clock.seconds(),
            fps: self.config.fps,
            x: self.axis.coords(),
            x_view: self.axis.view(),
            x_bounds: self.axis.bounds(),
            traces,
            decorations: Decorations::for_figure(figure),
            overruns,
        }
    }

    /// Index of the current tick.
    pub fn tick(&self) -> u64 {
        self.clock.tick()
    }

    pub fn windows(&self) -> &[WindowBuffer] {
        &self.windows
    }

    pub fn axis(&self) -> &XAxis {
        &self.axis
    }

    pub fn config(&self) -> &PlotConfig {
        &self.config
    }
}

// ---------------------------------------------------------------------------
// LivePlot
// ---------------------------------------------------------------------------

/// What a finished run did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Ticks executed before the surface closed.
    pub ticks: u64,
    /// Ticks that exceeded their `1 / fps` budget.
    pub overruns: u64,
    pub worst_overrun: Duration,
}

#[derive(Debug)]
pub struct LivePlot {
    sampler: Sampler,
    figure: FigureDescriptor,
    pacer: FramePacer,
}

impl LivePlot {
    pub fn new(
        signals: Vec<Signal>,
        figure: FigureDescriptor,
        config: PlotConfig,
    ) -> Result<Self, PlotError> {
        config.validate()?;
        Ok(Self {
            sampler: Sampler::new(signals, config),
            figure,
            pacer: FramePacer::new(config.tick_budget()),
        })
    }

    /// Sample and render until `surface` has no open target, then call
    /// [`RenderSurface::show`] once.
    ///
    /// Each tick that finishes early pauses the surface for the rest of its
    /// budget. A tick that runs long is logged as `overrun by <seconds>` and
    /// the next tick starts immediately; no samples are dropped.
    pub fn run<S: RenderSurface>(&mut self, surface: &mut S) -> Result<RunSummary, PlotError> {
        let config = *self.sampler.config();
        debug!(
            "live plot: {} signal(s), {} fps, {}s window ({} samples), progress={}",
            self.sampler.signals.len(),
            config.fps,
            config.obs_window,
            config.capacity(),
            config.progress
        );

        let mut summary = RunSummary::default();
        while surface.is_open()? {
            let t0 = Instant::now();

            self.sampler.sample_tick()?;
            surface.render(&self.sampler.snapshot(&self.figure, summary.overruns))?;

            match self.pacer.settle(t0.elapsed()) {
                Pace::Wait(left) => surface.pause(left)?,
                Pace::Overrun(excess) => {
                    warn!("overrun by {:.6}s", excess.as_secs_f64());
                    summary.overruns += 1;
                    summary.worst_overrun = summary.worst_overrun.max(excess);
                }
            }

            self.sampler.advance();
            summary.ticks += 1;
        }

        surface.show()?;
        info!(
            "live plot closed after {} ticks ({} overruns)",
            summary.ticks, summary.overruns
        );
        Ok(summary)
    }

    pub fn sampler(&self) -> &Sampler {
        &self.sampler
    }

    pub fn figure(&self) -> &FigureDescriptor {
        &self.figure
    }
}
