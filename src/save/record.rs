//! The persisted save record and conversion to and from live game state.
//!
//! Field names are part of the on-disk format and must not be renamed.
//! Missing fields fall back to the values a brand-new game starts with.

use crate::catalog::TierCatalog;
use crate::core::engine::ProgressionEngine;
use crate::core::offline::{offline_elapsed, offline_gain, LevelRestore, OfflineReport};
use crate::core::constants::PURCHASE_MULTIPLIERS;
use crate::prestige::PrestigeState;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaveRecord {
    pub resource: f64,
    pub total_rps: f64,
    pub prestige_points: u64,
    pub prestige_multiplier: f64,
    pub super_multiplier: f64,
    pub current_multiplier_index: usize,
    pub current_page: usize,
    /// One level per catalog tier, in catalog order.
    pub button_levels: Vec<u32>,
    /// Seconds since the Unix epoch. A record without one earns no offline income.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_time: Option<f64>,
}

impl Default for SaveRecord {
    fn default() -> Self {
        Self {
            resource: 0.0,
            total_rps: 0.0,
            prestige_points: 0,
            prestige_multiplier: 1.0,
            super_multiplier: 1.0,
            current_multiplier_index: 0,
            current_page: 0,
            button_levels: Vec::new(),
            save_time: None,
        }
    }
}

/// Snapshots the game, stamped with `now`.
pub fn to_record(engine: &ProgressionEngine, prestige: &PrestigeState, now: f64) -> SaveRecord {
    SaveRecord {
        resource: engine.resource(),
        total_rps: engine.total_rate(),
        prestige_points: prestige.ascension_points,
        prestige_multiplier: prestige.ascension_power,
        super_multiplier: prestige.transcendent_power,
        current_multiplier_index: engine.multiplier_index(),
        current_page: engine.current_page(),
        button_levels: engine.tiers().iter().map(|t| t.level).collect(),
        save_time: Some(now),
    }
}

/// Rebuilds the game from a record as of `now`, crediting offline income.
///
/// With no record a fresh game and an empty report are returned. Offline
/// income uses the saved `total_rps`, not a rate recomputed after restore.
/// Tier levels are restored only when the saved list matches the catalog size;
/// otherwise levels stay at zero and the income rate is zero.
pub fn from_record(
    record: Option<&SaveRecord>,
    catalog: Arc<TierCatalog>,
    now: f64,
) -> (ProgressionEngine, PrestigeState, OfflineReport) {
    let mut engine = ProgressionEngine::new(catalog);
    let Some(record) = record else {
        return (engine, PrestigeState::default(), OfflineReport::default());
    };

    let elapsed = offline_elapsed(record.save_time.unwrap_or(now), now);
    let gain = offline_gain(record.total_rps, elapsed);

    engine.set_resource(record.resource + gain);
    let prestige = PrestigeState {
        ascension_points: record.prestige_points,
        ascension_power: record.prestige_multiplier,
        transcendent_power: record.super_multiplier,
    };

    if record.current_multiplier_index >= PURCHASE_MULTIPLIERS.len() {
        warn!(
            index = record.current_multiplier_index,
            "saved purchase multiplier index out of range, wrapping"
        );
    }
    engine.set_purchase_multiplier_index(record.current_multiplier_index);

    engine.set_current_page(record.current_page);
    if engine.current_page() != record.current_page {
        warn!(
            page = record.current_page,
            restored = engine.current_page(),
            "saved page out of range, clamping"
        );
    }

    let expected = engine.tiers().len();
    let levels = if engine.restore_levels(&record.button_levels, prestige.ascension_power) {
        LevelRestore::Restored
    } else {
        warn!(
            saved = record.button_levels.len(),
            expected, "saved tier count does not match catalog, skipping level restore"
        );
        LevelRestore::CountMismatch {
            saved: record.button_levels.len(),
            expected,
        }
    };

    (engine, prestige, OfflineReport::new(elapsed, gain, levels))
}
