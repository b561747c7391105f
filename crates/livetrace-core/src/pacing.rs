//! Frame pacing against a fixed per-tick budget.

use std::time::Duration;

/// Outcome of a finished tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pace {
    /// Tick finished early; wait this long before the next one.
    Wait(Duration),
    /// Tick ran over its budget by this much. Nothing is skipped to catch up.
    Overrun(Duration),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramePacer {
    budget: Duration,
}

impl FramePacer {
    pub fn new(budget: Duration) -> Self {
        Self { budget }
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }

    /// Compare a tick's elapsed time with the budget. Only a strictly
    /// positive remainder is waited for.
    pub fn settle(&self, elapsed: Duration) -> Pace {
        match self.budget.checked_sub(elapsed) {
            Some(left) if !left.is_zero() => Pace::Wait(left),
            _ => Pace::Overrun(elapsed - self.budget),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUDGET: Duration = Duration::from_millis(100);

    #[test]
    fn early_tick_waits_for_remainder() {
        let pacer = FramePacer::new(BUDGET);
        assert_eq!(
            pacer.settle(Duration::from_millis(30)),
            Pace::Wait(Duration::from_millis(70))
        );
    }

    #[test]
    fn late_tick_reports_excess() {
        let pacer = FramePacer::new(BUDGET);
        assert_eq!(
            pacer.settle(Duration::from_millis(125)),
            Pace::Overrun(Duration::from_millis(25))
        );
    }

    #[test]
    fn exact_budget_is_not_waited() {
        let pacer = FramePacer::new(BUDGET);
        assert_eq!(pacer.settle(BUDGET), Pace::Overrun(Duration::ZERO));
    }

    #[test]
    fn instant_tick_waits_full_budget() {
        let pacer = FramePacer::new(BUDGET);
        assert_eq!(pacer.settle(Duration::ZERO), Pace::Wait(BUDGET));
    }
}
