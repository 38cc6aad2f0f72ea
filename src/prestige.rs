use crate::core::constants::{
    ASCEND_GATE_TIER, ASCENSION_POWER_PER_POINT, TRANSCENDENT_POWER_PER_POINT,
    TRANSCEND_MIN_POINTS,
};
use crate::core::engine::ProgressionEngine;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Permanent progress that survives tier resets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrestigeState {
    pub ascension_points: u64,
    /// `1 + 0.01 * ascension_points`; multiplies every tier's income.
    pub ascension_power: f64,
    /// Multiplies the points earned by each Ascend. Only Transcend raises it.
    pub transcendent_power: f64,
}

impl Default for PrestigeState {
    fn default() -> Self {
        Self {
            ascension_points: 0,
            ascension_power: 1.0,
            transcendent_power: 1.0,
        }
    }
}

impl PrestigeState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Ascension power granted by holding `points` ascension points.
pub fn ascension_power_for(points: u64) -> f64 {
    1.0 + points as f64 * ASCENSION_POWER_PER_POINT
}

/// Checks if the player can Ascend
///
/// # Returns
/// true once the gate tier (the 33rd) has been purchased at least once
pub fn can_ascend(engine: &ProgressionEngine) -> bool {
    engine.tier(ASCEND_GATE_TIER).is_some_and(|t| t.level > 0)
}

/// Points an Ascend would grant right now (0 when not eligible).
///
/// `floor(total levels * transcendent power)`, floored after the multiplier.
pub fn ascend_gain(engine: &ProgressionEngine, prestige: &PrestigeState) -> u64 {
    if !can_ascend(engine) {
        return 0;
    }
    (engine.aggregate_levels() as f64 * prestige.transcendent_power).floor() as u64
}

/// Performs an Ascend: converts tier levels into ascension points and resets
/// every tier, the balance and the income rate.
///
/// # Returns
/// The points gained, or `None` (with no state change) when not eligible or
/// when the gain would be zero.
pub fn perform_ascend(engine: &mut ProgressionEngine, prestige: &mut PrestigeState) -> Option<u64> {
    let gained = ascend_gain(engine, prestige);
    if gained == 0 {
        return None;
    }

    prestige.ascension_points = prestige.ascension_points.saturating_add(gained);
    prestige.ascension_power = ascension_power_for(prestige.ascension_points);
    engine.reset_progress();

    info!(
        gained,
        points = prestige.ascension_points,
        power = prestige.ascension_power,
        "ascended"
    );
    Some(gained)
}

pub fn can_transcend(prestige: &PrestigeState) -> bool {
    prestige.ascension_points >= TRANSCEND_MIN_POINTS
}

/// Transcendent power a Transcend would add right now.
pub fn transcend_gain(prestige: &PrestigeState) -> f64 {
    if !can_transcend(prestige) {
        return 0.0;
    }
    prestige.ascension_points as f64 * TRANSCENDENT_POWER_PER_POINT
}

/// Performs a Transcend: converts ascension points into transcendent power,
/// then clears ascension progress and resets every tier, the balance and the
/// income rate.
///
/// # Returns
/// The transcendent power added, or `None` (with no state change) when there
/// are no ascension points.
pub fn perform_transcend(
    engine: &mut ProgressionEngine,
    prestige: &mut PrestigeState,
) -> Option<f64> {
    if !can_transcend(prestige) {
        return None;
    }
    let added = transcend_gain(prestige);

    prestige.transcendent_power += added;
    prestige.ascension_points = 0;
    prestige.ascension_power = 1.0;
    engine.reset_progress();

    info!(
        added,
        transcendent_power = prestige.transcendent_power,
        "transcended"
    );
    Some(added)
}
