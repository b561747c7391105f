//! # livetrace-core
//!
//! **Live sliding-window charts of sampled signals.**
//!
//! `livetrace-core` samples one or more signals at a fixed frame rate, keeps
//! the most recent `fps * obs_window` samples of each in a ring buffer, and
//! hands every frame to a [`RenderSurface`]. Drawing is left to the surface;
//! this crate owns the buffering, the X axis and the frame pacing.
//!
//! ## Quick Start
//!
//! ```
//! use std::f64::consts::PI;
//! use std::io;
//! use std::time::Duration;
//! use livetrace_core::{
//!     FigureDescriptor, LivePlot, PlotConfig, RenderSurface, Signal, SignalColor, Snapshot,
//! };
//!
//! /// Shows three frames, then reports itself closed.
//! struct ThreeFrames(u32);
//!
//! impl RenderSurface for ThreeFrames {
//!     fn is_open(&mut self) -> io::Result<bool> {
//!         Ok(self.0 < 3)
//!     }
//!     fn render(&mut self, _snapshot: &Snapshot<'_>) -> io::Result<()> {
//!         self.0 += 1;
//!         Ok(())
//!     }
//!     fn pause(&mut self, duration: Duration) -> io::Result<()> {
//!         std::thread::sleep(duration);
//!         Ok(())
//!     }
//! }
//!
//! let signals = vec![
//!     Signal::new("U : voltage", SignalColor::Red, |t: f64| (2.0 * PI * t).cos()),
//! ];
//! let config = PlotConfig::new(true, 16, 4).unwrap();
//! let mut plot = LivePlot::new(signals, FigureDescriptor::default(), config).unwrap();
//!
//! let summary = plot.run(&mut ThreeFrames(0)).unwrap();
//! assert_eq!(summary.ticks, 3);
//! ```
//!
//! ## Architecture
//!
//! Clock → Sources → Window buffers + X axis → Snapshot → Surface → Pacer
//!
//! Each tick samples every signal at the virtual time `n / fps`, appends to
//! its [`WindowBuffer`], renders, then sleeps through the surface for the rest
//! of the `1 / fps` budget. Overruns are logged and counted, never recovered.

pub mod axis;
pub mod clock;
pub mod config;
pub mod error;
pub mod figure;
pub mod live;
pub mod pacing;
pub mod signal;
pub mod surface;
pub mod window;

pub use axis::{XAxis, XView};
pub use clock::VirtualClock;
pub use config::PlotConfig;
pub use error::{PlotError, SampleError};
pub use figure::{Decorations, FigureDescriptor, LegendCorner, X_LABEL};
pub use live::{LivePlot, RunSummary, Sampler};
pub use pacing::{FramePacer, Pace};
pub use signal::{ColorParseError, Fallible, Signal, SignalColor, SignalSource};
pub use surface::{RenderSurface, Snapshot, Trace};
pub use window::WindowBuffer;

/// Library version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
