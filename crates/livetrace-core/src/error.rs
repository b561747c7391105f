//! Error types for the live plot loop.

use thiserror::Error;

/// Boxed error returned by a failing sampling callback.
pub type SampleError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("invalid plot config: {0}")]
    InvalidConfig(&'static str),
    #[error("sampling `{label}` failed at tick {tick}: {source}")]
    Sample {
        label: String,
        tick: u64,
        #[source]
        source: SampleError,
    },
    #[error("render surface: {0}")]
    Surface(#[from] std::io::Error),
}
