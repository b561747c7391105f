//! Built-in voltage/current pair plotted by default.

use std::f64::consts::PI;

use livetrace_core::{FigureDescriptor, Signal, SignalColor};

pub const YLABEL: &str = "Voltage(V) / Current(A)";

/// 1 Hz unit-amplitude voltage.
pub fn get_u(t: f64) -> f64 {
    (2.0 * PI * t).cos()
}

/// Current at a tenth of the amplitude, leading the voltage by a quarter period.
pub fn get_i(t: f64) -> f64 {
    0.1 * (2.0 * PI * t + PI / 2.0).cos()
}

pub fn signals() -> Vec<Signal> {
    vec![
        Signal::new("U : voltage", SignalColor::Red, get_u),
        Signal::new("I : current", SignalColor::Blue, get_i),
    ]
}

pub fn figure(title: Option<&str>, ylabel: Option<&str>) -> FigureDescriptor {
    FigureDescriptor::new()
        .title(title.unwrap_or(""))
        .ylabel(ylabel.unwrap_or(YLABEL))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn voltage_starts_at_peak() {
        assert_eq!(get_u(0.0), 1.0);
        assert!((get_u(0.5) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn current_leads_by_quarter_period() {
        assert!(get_i(0.0).abs() < 1e-12);
        assert!((get_i(0.75) - 0.1).abs() < 1e-12);
    }

    #[test]
    fn demo_signals_in_order() {
        let signals = signals();
        let labels: Vec<&str> = signals.iter().map(|s| s.label()).collect();
        assert_eq!(labels, ["U : voltage", "I : current"]);
        assert_eq!(signals[0].color(), SignalColor::Red);
        assert_eq!(signals[1].color(), SignalColor::Blue);
    }

    #[test]
    fn figure_defaults() {
        let fig = figure(None, None);
        assert_eq!(fig.title, "");
        assert_eq!(fig.ylabel, YLABEL);
        let fig = figure(Some("Scope"), Some("A"));
        assert_eq!(fig.title, "Scope");
        assert_eq!(fig.ylabel, "A");
    }
}
