//! X-axis coordinates: grow along a static grid, then slide.
//!
//! While the windows fill, tick `n` shows the first `n + 1` points of an
//! evenly spaced grid over `[0, obs_window]`. Once the windows are full every
//! coordinate moves forward by `dt` each tick, so the plot scrolls.

use crate::config::PlotConfig;

/// Visible X range requested from the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum XView {
    /// Fit the range to the coordinates.
    Auto,
    /// Pin the range, independent of the data.
    Fixed { lo: f64, hi: f64 },
}

/// `num` evenly spaced points over `[start, stop]`, both ends included.
pub fn linspace(start: f64, stop: f64, num: usize) -> Vec<f64> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (num - 1) as f64;
            (0..num).map(|i| start + step * i as f64).collect()
        }
    }
}

#[derive(Debug, Clone)]
pub struct XAxis {
    grid: Vec<f64>,
    coords: Vec<f64>,
    dt: f64,
    obs_window: f64,
    progress: bool,
    filling: bool,
}

impl XAxis {
    pub fn new(config: &PlotConfig) -> Self {
        let obs_window = config.obs_window as f64;
        Self {
            grid: linspace(0.0, obs_window, config.capacity()),
            coords: Vec::with_capacity(config.capacity()),
            dt: config.dt(),
            obs_window,
            progress: config.progress,
            filling: true,
        }
    }

    /// Bring the coordinates to tick `n`.
    pub fn update(&mut self, n: u64) {
        let capacity = self.grid.len();
        if n < capacity as u64 {
            let end = n as usize + 1;
            self.coords.clear();
            self.coords.extend_from_slice(&self.grid[..end]);
            self.filling = true;
        } else {
            if self.coords.len() < capacity {
                self.coords.clear();
                self.coords.extend_from_slice(&self.grid);
            }
            for x in &mut self.coords {
                *x += self.dt;
            }
            self.filling = false;
        }
    }

    pub fn coords(&self) -> &[f64] {
        &self.coords
    }

    /// The static grid over `[0, obs_window]`.
    pub fn grid(&self) -> &[f64] {
        &self.grid
    }

    pub fn is_filling(&self) -> bool {
        self.filling
    }

    pub fn view(&self) -> XView {
        if !self.progress && self.filling {
            XView::Fixed {
                lo: 0.0,
                hi: self.obs_window,
            }
        } else {
            XView::Auto
        }
    }

    /// Range a surface should display for the current tick. Auto views span
    /// the coordinates; a single point is widened by one tick on the right.
    pub fn bounds(&self) -> (f64, f64) {
        match self.view() {
            XView::Fixed { lo, hi } => (lo, hi),
            XView::Auto => match (self.coords.first(), self.coords.last()) {
                (Some(&lo), Some(&hi)) if hi > lo => (lo, hi),
                (Some(&lo), Some(_)) => (lo, lo + self.dt),
                _ => (0.0, self.obs_window),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(progress: bool) -> PlotConfig {
        PlotConfig::new(progress, 4, 2).unwrap()
    }

    #[test]
    fn linspace_endpoints() {
        let g = linspace(0.0, 4.0, 5);
        assert_eq!(g, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
        assert_eq!(linspace(0.0, 4.0, 1), vec![0.0]);
        assert!(linspace(0.0, 4.0, 0).is_empty());
    }

    #[test]
    fn grows_along_grid_prefix() {
        let mut axis = XAxis::new(&config(true));
        for n in 0..8u64 {
            axis.update(n);
            assert_eq!(axis.coords().len(), n as usize + 1);
            assert_eq!(axis.coords(), &axis.grid()[..=n as usize]);
            assert!(axis.is_filling());
        }
    }

    #[test]
    fn slides_by_dt_once_full() {
        let mut axis = XAxis::new(&config(true));
        for n in 0..8u64 {
            axis.update(n);
        }
        let before = axis.coords().to_vec();
        axis.update(8);
        assert!(!axis.is_filling());
        assert_eq!(axis.coords().len(), 8);
        for (a, b) in before.iter().zip(axis.coords()) {
            assert!((b - a - 0.25).abs() < 1e-12);
        }
    }

    #[test]
    fn stays_sorted_while_sliding() {
        let mut axis = XAxis::new(&config(true));
        for n in 0..40u64 {
            axis.update(n);
            assert!(axis.coords().windows(2).all(|w| w[0] <= w[1]));
        }
    }

    #[test]
    fn non_progress_pins_view_while_filling() {
        let mut axis = XAxis::new(&config(false));
        for n in 0..8u64 {
            axis.update(n);
            assert_eq!(axis.view(), XView::Fixed { lo: 0.0, hi: 2.0 });
            assert_eq!(axis.bounds(), (0.0, 2.0));
        }
        axis.update(8);
        assert_eq!(axis.view(), XView::Auto);
    }

    #[test]
    fn progress_view_is_auto() {
        let mut axis = XAxis::new(&config(true));
        axis.update(0);
        assert_eq!(axis.view(), XView::Auto);
        assert_eq!(axis.bounds(), (0.0, 0.25));
        axis.update(3);
        let (lo, hi) = axis.bounds();
        assert_eq!(lo, 0.0);
        assert!((hi - 3.0 * 2.0 / 7.0).abs() < 1e-12);
    }

    #[test]
    fn single_point_window_slides() {
        let mut axis = XAxis::new(&PlotConfig::new(true, 1, 1).unwrap());
        axis.update(0);
        assert_eq!(axis.coords(), &[0.0]);
        axis.update(1);
        assert_eq!(axis.coords(), &[1.0]);
        axis.update(2);
        assert_eq!(axis.coords(), &[2.0]);
    }
}
