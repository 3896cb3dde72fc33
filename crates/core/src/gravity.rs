//! Gravity curve - how fast pieces fall as a run goes on
//!
//! The interval between automatic drops is a step function of the time elapsed
//! since the run started. It shrinks by a fixed decrement each time a threshold
//! in the table is passed, then holds once the table is exhausted.

use crate::types::{DIFFICULTY_THRESHOLDS_MS, DROP_DECREMENT_MS, START_DROP_MS};

/// Step function mapping elapsed run time to a gravity interval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GravityCurve {
    /// Interval at the start of a run (ms)
    pub initial_ms: u32,
    /// Reduction applied per threshold passed (ms)
    pub decrement_ms: u32,
    /// Elapsed-time thresholds (ms), strictly increasing
    pub thresholds_ms: Vec<u64>,
}

impl GravityCurve {
    /// Gravity interval after `elapsed_ms` of run time.
    ///
    /// A time exactly on a threshold still belongs to the slower band.
    pub fn interval_at(&self, elapsed_ms: u64) -> u32 {
        let passed = self
            .thresholds_ms
            .iter()
            .take_while(|&&t| elapsed_ms > t)
            .count() as u32;
        self.initial_ms
            .saturating_sub(self.decrement_ms.saturating_mul(passed))
    }

    /// Level number for an interval: decrements applied so far.
    pub fn level_for(&self, interval_ms: u32) -> u32 {
        if self.decrement_ms == 0 {
            return 0;
        }
        self.initial_ms.saturating_sub(interval_ms) / self.decrement_ms
    }

    /// Fastest interval the table can reach.
    pub fn final_interval(&self) -> u32 {
        self.thresholds_ms
            .last()
            .map_or(self.initial_ms, |&t| self.interval_at(t + 1))
    }
}

impl Default for GravityCurve {
    fn default() -> Self {
        Self {
            initial_ms: START_DROP_MS,
            decrement_ms: DROP_DECREMENT_MS,
            thresholds_ms: DIFFICULTY_THRESHOLDS_MS.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_band() {
        let curve = GravityCurve::default();
        assert_eq!(curve.interval_at(0), 1000);
        assert_eq!(curve.interval_at(9_999), 1000);
        assert_eq!(curve.interval_at(10_000), 1000);
        assert_eq!(curve.interval_at(10_001), 900);
    }

    #[test]
    fn test_long_band_between_80_and_100_seconds() {
        let curve = GravityCurve::default();
        assert_eq!(curve.interval_at(80_001), 200);
        assert_eq!(curve.interval_at(95_000), 200);
        assert_eq!(curve.interval_at(100_000), 200);
        assert_eq!(curve.interval_at(100_001), 100);
    }

    #[test]
    fn test_holds_after_table() {
        let curve = GravityCurve::default();
        assert_eq!(curve.interval_at(110_000), 100);
        assert_eq!(curve.interval_at(10_000_000), 100);
        assert_eq!(curve.final_interval(), 100);
    }

    #[test]
    fn test_level_for() {
        let curve = GravityCurve::default();
        assert_eq!(curve.level_for(1000), 0);
        assert_eq!(curve.level_for(900), 1);
        assert_eq!(curve.level_for(100), 9);
    }

    #[test]
    fn test_custom_curve() {
        let curve = GravityCurve {
            initial_ms: 500,
            decrement_ms: 200,
            thresholds_ms: vec![1_000, 2_000, 3_000],
        };
        assert_eq!(curve.interval_at(1_500), 300);
        assert_eq!(curve.interval_at(2_500), 100);
        // Saturates instead of wrapping.
        assert_eq!(curve.interval_at(3_500), 0);
        assert_eq!(curve.level_for(100), 2);
    }

    #[test]
    fn test_zero_decrement_level() {
        let curve = GravityCurve {
            initial_ms: 500,
            decrement_ms: 0,
            thresholds_ms: vec![1_000],
        };
        assert_eq!(curve.interval_at(5_000), 500);
        assert_eq!(curve.level_for(500), 0);
    }
}
