//! Signal descriptors and the sampling capability.
//!
//! Every tracked signal pairs a label and a draw color with a
//! [`SignalSource`]: anything that maps a timestamp in seconds to a value.
//! Plain closures and `fn` items are sources; wrap fallible callbacks in
//! [`Fallible`] so their errors abort the run instead of panicking.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::error::SampleError;

/// Sampling callback `f(t) -> value`, `t` in seconds since the first tick.
pub trait SignalSource {
    fn sample(&mut self, t: f64) -> Result<f64, SampleError>;
}

impl<F> SignalSource for F
where
    F: FnMut(f64) -> f64,
{
    fn sample(&mut self, t: f64) -> Result<f64, SampleError> {
        Ok(self(t))
    }
}

/// Adapter for callbacks that can fail.
pub struct Fallible<F>(pub F);

impl<F, E> SignalSource for Fallible<F>
where
    F: FnMut(f64) -> Result<f64, E>,
    E: Into<SampleError>,
{
    fn sample(&mut self, t: f64) -> Result<f64, SampleError> {
        (self.0)(t).map_err(Into::into)
    }
}

/// Line color of a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalColor {
    Red,
    Green,
    Blue,
    Cyan,
    Magenta,
    Yellow,
    Black,
    White,
    Rgb(u8, u8, u8),
}

impl fmt::Display for SignalColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Red => write!(f, "red"),
            Self::Green => write!(f, "green"),
            Self::Blue => write!(f, "blue"),
            Self::Cyan => write!(f, "cyan"),
            Self::Magenta => write!(f, "magenta"),
            Self::Yellow => write!(f, "yellow"),
            Self::Black => write!(f, "black"),
            Self::White => write!(f, "white"),
            Self::Rgb(r, g, b) => write!(f, "#{r:02x}{g:02x}{b:02x}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized color `{0}`")]
pub struct ColorParseError(pub String);

impl FromStr for SignalColor {
    type Err = ColorParseError;

    /// Accepts single-letter plotting codes (`r`, `g`, `b`, `c`, `m`, `y`,
    /// `k`, `w`), full names, and `#rrggbb`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let color = match lower.as_str() {
            "r" | "red" => Self::Red,
            "g" | "green" => Self::Green,
            "b" | "blue" => Self::Blue,
            "c" | "cyan" => Self::Cyan,
            "m" | "magenta" => Self::Magenta,
            "y" | "yellow" => Self::Yellow,
            "k" | "black" => Self::Black,
            "w" | "white" => Self::White,
            hex if hex.starts_with('#') => parse_hex(hex).ok_or_else(|| ColorParseError(s.into()))?,
            _ => return Err(ColorParseError(s.into())),
        };
        Ok(color)
    }
}

fn parse_hex(hex: &str) -> Option<SignalColor> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some(SignalColor::Rgb(channel(0)?, channel(2)?, channel(4)?))
}

/// A tracked signal. Supplied once when the plot is built, never mutated
/// apart from the source's own state.
pub struct Signal {
    label: String,
    color: SignalColor,
    source: Box<dyn SignalSource>,
}

impl Signal {
    pub fn new<S>(label: impl Into<String>, color: SignalColor, source: S) -> Self
    where
        S: SignalSource + 'static,
    {
        Self {
            label: label.into(),
            color,
            source: Box::new(source),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn color(&self) -> SignalColor {
        self.color
    }

    /// Query the source at `t` seconds.
    pub fn sample(&mut self, t: f64) -> Result<f64, SampleError> {
        self.source.sample(t)
    }
}

impl fmt::Debug for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("label", &self.label)
            .field("color", &self.color)
            .finish_non_exhaustive()
    }
}
