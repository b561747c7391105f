//! Virtual tick clock.

/// Tick counter driving the sampling timestamps. Tick `n` maps to `n / fps`
/// seconds regardless of how long the ticks actually took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VirtualClock {
    tick: u64,
    fps: u32,
}

impl VirtualClock {
    pub fn new(fps: u32) -> Self {
        Self { tick: 0, fps }
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Timestamp of the current tick in seconds.
    pub fn seconds(&self) -> f64 {
        self.tick as f64 / self.fps as f64
    }

    pub fn advance(&mut self) {
        self.tick += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        let clock = VirtualClock::new(16);
        assert_eq!(clock.tick(), 0);
        assert_eq!(clock.seconds(), 0.0);
    }

    #[test]
    fn seconds_follow_ticks() {
        let mut clock = VirtualClock::new(16);
        for _ in 0..24 {
            clock.advance();
        }
        assert_eq!(clock.tick(), 24);
        assert_eq!(clock.seconds(), 1.5);
    }
}
