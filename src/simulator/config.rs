//! Simulation configuration.

use crate::core::constants::SECONDS_PER_HOUR;

/// Configuration for a simulation run.
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    /// Simulated seconds advanced per step
    pub step_seconds: f64,

    /// Simulated time limit
    pub max_seconds: f64,

    /// Manual clicks per simulated second (fractions carry over between steps)
    pub clicks_per_second: f64,

    /// Ascend as soon as an Ascend would grant at least this many points
    pub ascend_min_points: u64,

    /// Stop after this many Ascends (0 = run until the time limit)
    pub target_ascensions: u32,

    /// Index into the purchase batch sizes used for every purchase
    pub buy_batch_index: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            step_seconds: 1.0,
            max_seconds: (72 * SECONDS_PER_HOUR) as f64,
            clicks_per_second: 5.0,
            ascend_min_points: 100,
            target_ascensions: 1,
            buy_batch_index: 0,
        }
    }
}

impl SimConfig {
    /// Quick config for early-game pacing
    pub fn early_game(hours: u64) -> Self {
        Self {
            max_seconds: (hours * SECONDS_PER_HOUR) as f64,
            target_ascensions: 0,
            ..Default::default()
        }
    }

    /// Config for testing several prestige cycles
    pub fn prestige_cycles(target_ascensions: u32) -> Self {
        Self {
            step_seconds: 10.0,
            max_seconds: (24 * 30 * SECONDS_PER_HOUR) as f64,
            target_ascensions,
            ..Default::default()
        }
    }
}
