//! Per-tier level state and the economy formulas derived from it.
//!
//! A tier only stores its level. Cost and rate are recomputed from the
//! catalog definition on demand, and every cross-tier question (unlocks)
//! takes the sibling levels as an explicit argument.

use super::constants::*;
use crate::catalog::TierDefinition;
use serde::{Deserialize, Serialize};

/// Mutable state of one tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierState {
    pub level: u32,
}

impl TierState {
    pub fn new(level: u32) -> Self {
        Self { level }
    }

    /// Cost of the next level.
    pub fn cost(&self, def: &TierDefinition) -> f64 {
        cost_at(def.base_cost, self.level)
    }

    /// Income per second including level bonuses and `prestige_multiplier`.
    pub fn rate(&self, def: &TierDefinition, prestige_multiplier: f64) -> f64 {
        effective_rate(def.base_rate, self.level, prestige_multiplier)
    }
}

/// `base_cost * 1.15^level`
pub fn cost_at(base_cost: f64, level: u32) -> f64 {
    base_cost * COST_GROWTH.powf(level as f64)
}

/// Income without bonuses: `base_rate * level`.
pub fn raw_rate(base_rate: f64, level: u32) -> f64 {
    base_rate * level as f64
}

/// Level bonus multiplier.
///
/// 1 below level 200. From 200 on: x4, times x4 per full 25 levels past 200,
/// times x100 per full 1000 levels past 200. Both step terms stop growing at
/// level 8000.
pub fn bonus_multiplier(level: u32) -> f64 {
    if level < LEVEL_BONUS_START {
        return 1.0;
    }
    let past_start = level.min(LEVEL_BONUS_CAP) - LEVEL_BONUS_START;
    let steps = (past_start / LEVEL_BONUS_STEP) as i32;
    let milestones = (past_start / LEVEL_BONUS_MILESTONE) as i32;
    LEVEL_BONUS_ACTIVATION
        * LEVEL_BONUS_STEP_FACTOR.powi(steps)
        * LEVEL_BONUS_MILESTONE_FACTOR.powi(milestones)
}

/// `raw_rate * bonus_multiplier * prestige_multiplier`
pub fn effective_rate(base_rate: f64, level: u32, prestige_multiplier: f64) -> f64 {
    raw_rate(base_rate, level) * bonus_multiplier(level) * prestige_multiplier
}

/// Whether tier `index` can be purchased given every tier's current level.
///
/// Tier 0 is always unlocked; every other tier needs the tier directly before
/// it (across page boundaries too) to be owned. Indices outside `levels` are
/// locked.
pub fn is_unlocked(index: usize, levels: &[TierState]) -> bool {
    if index >= levels.len() {
        return false;
    }
    match index.checked_sub(1) {
        None => true,
        Some(prev) => levels[prev].level > 0,
    }
}
