//! Progression engine: tier roster, balance, income rate and navigation.
//!
//! The engine owns no timer. Callers feed it elapsed seconds through
//! [`ProgressionEngine::tick`] (or wall-clock instants through
//! [`ProgressionEngine::advance_to`]), which keeps it deterministic under test.
//!
//! `total_rate` is a cache of the summed effective rate of every tier. It is
//! updated by exact deltas on purchase, zeroed on reset, and rebuilt by a full
//! scan only when levels are restored wholesale.

use super::arcs::{current_arc, StoryArc};
use super::constants::*;
use super::tier::{is_unlocked, TierState};
use crate::catalog::TierCatalog;
use std::sync::Arc;
use tracing::debug;

/// Outcome of a purchase attempt. Zero levels means the attempt was a no-op.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PurchaseResult {
    pub levels: u32,
    pub spent: f64,
}

#[derive(Debug, Clone)]
pub struct ProgressionEngine {
    catalog: Arc<TierCatalog>,
    tiers: Vec<TierState>,
    resource: f64,
    total_rate: f64,
    current_page: usize,
    multiplier_index: usize,
    last_tick: Option<f64>,
}

impl ProgressionEngine {
    pub fn new(catalog: Arc<TierCatalog>) -> Self {
        let tiers = vec![TierState::default(); catalog.count()];
        Self {
            catalog,
            tiers,
            resource: 0.0,
            total_rate: 0.0,
            current_page: 0,
            multiplier_index: 0,
            last_tick: None,
        }
    }

    pub fn catalog(&self) -> &Arc<TierCatalog> {
        &self.catalog
    }

    pub fn resource(&self) -> f64 {
        self.resource
    }

    /// Overwrites the balance. Used by restores and test setup.
    pub fn set_resource(&mut self, amount: f64) {
        self.resource = amount;
    }

    /// Cached total income per second.
    pub fn total_rate(&self) -> f64 {
        self.total_rate
    }

    pub fn tiers(&self) -> &[TierState] {
        &self.tiers
    }

    pub fn tier(&self, index: usize) -> Option<TierState> {
        self.tiers.get(index).copied()
    }

    pub fn is_tier_unlocked(&self, index: usize) -> bool {
        is_unlocked(index, &self.tiers)
    }

    /// Cost of the next level of tier `index`.
    pub fn tier_cost(&self, index: usize) -> Option<f64> {
        let def = self.catalog.definition_at(index)?;
        Some(self.tiers[index].cost(def))
    }

    /// Current effective rate of tier `index`.
    pub fn tier_rate(&self, index: usize, prestige_multiplier: f64) -> Option<f64> {
        let def = self.catalog.definition_at(index)?;
        Some(self.tiers[index].rate(def, prestige_multiplier))
    }

    /// Sum of every tier's effective rate, computed from scratch.
    pub fn summed_rate(&self, prestige_multiplier: f64) -> f64 {
        self.catalog
            .iter()
            .zip(&self.tiers)
            .map(|(def, tier)| tier.rate(def, prestige_multiplier))
            .sum()
    }

    /// Replaces the rate cache with a full scan.
    pub fn recompute_total_rate(&mut self, prestige_multiplier: f64) -> f64 {
        self.total_rate = self.summed_rate(prestige_multiplier);
        self.total_rate
    }

    /// Sets every tier level at once and rebuilds the rate cache.
    ///
    /// Returns `false` and changes nothing when `levels` does not have exactly
    /// one entry per catalog tier.
    pub fn restore_levels(&mut self, levels: &[u32], prestige_multiplier: f64) -> bool {
        if levels.len() != self.tiers.len() {
            return false;
        }
        for (tier, &level) in self.tiers.iter_mut().zip(levels) {
            tier.level = level;
        }
        self.recompute_total_rate(prestige_multiplier);
        true
    }

    /// Credits `total_rate * delta_seconds`. Negative or NaN deltas are ignored.
    pub fn tick(&mut self, delta_seconds: f64) {
        if delta_seconds.is_nan() || delta_seconds <= 0.0 {
            return;
        }
        self.resource += self.total_rate * delta_seconds;
    }

    /// Ticks by the time elapsed since the previous call. The first call only
    /// records `now`. Backward clock jumps count as zero elapsed time.
    pub fn advance_to(&mut self, now: f64) -> f64 {
        let elapsed = match self.last_tick {
            Some(prev) => (now - prev).max(0.0),
            None => 0.0,
        };
        self.last_tick = Some(now);
        self.tick(elapsed);
        elapsed
    }

    pub fn last_tick(&self) -> Option<f64> {
        self.last_tick
    }

    /// What a manual click would grant right now.
    pub fn click_value(&self) -> f64 {
        let bonus = if self.tiers.first().is_some_and(|t| t.level > 0) {
            self.total_rate * CLICK_RATE_FRACTION
        } else {
            0.0
        };
        CLICK_BASE + bonus
    }

    /// Grants one click of income and returns the amount.
    pub fn click(&mut self) -> f64 {
        let value = self.click_value();
        self.resource += value;
        value
    }

    /// Buys up to the current batch size of levels for tier `index`.
    ///
    /// Each level is priced at its own level, so a batch costs the sum of the
    /// individual costs. Stops at the first unaffordable level. Locked or
    /// unknown tiers are a no-op.
    pub fn purchase_tier(&mut self, index: usize, prestige_multiplier: f64) -> PurchaseResult {
        let mut result = PurchaseResult::default();
        if !self.is_tier_unlocked(index) {
            debug!(tier = index, "purchase ignored: tier locked");
            return result;
        }
        let catalog = Arc::clone(&self.catalog);
        let Some(def) = catalog.definition_at(index) else {
            return result;
        };

        for _ in 0..self.purchase_multiplier() {
            let tier = self.tiers[index];
            let cost = tier.cost(def);
            if self.resource < cost || tier.level == u32::MAX {
                break;
            }
            let next = TierState::new(tier.level + 1);
            self.resource -= cost;
            self.total_rate += next.rate(def, prestige_multiplier) - tier.rate(def, prestige_multiplier);
            self.tiers[index] = next;
            result.levels += 1;
            result.spent += cost;
        }

        debug!(
            tier = index,
            levels = result.levels,
            spent = result.spent,
            level = self.tiers[index].level,
            "tier purchase"
        );
        result
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.catalog.total_pages()
    }

    /// Moves `direction` pages. Moves that would leave the valid range are
    /// ignored. Returns whether the page changed.
    pub fn change_page(&mut self, direction: i32) -> bool {
        let target = self.current_page as i64 + direction as i64;
        if direction == 0 || target < 0 || target >= self.total_pages() as i64 {
            return false;
        }
        self.current_page = target as usize;
        true
    }

    /// Jumps to `page`, clamped to the last page.
    pub fn set_current_page(&mut self, page: usize) {
        self.current_page = page.min(self.total_pages().saturating_sub(1));
    }

    pub fn multiplier_index(&self) -> usize {
        self.multiplier_index
    }

    /// Current batch size, one of [`PURCHASE_MULTIPLIERS`].
    pub fn purchase_multiplier(&self) -> u32 {
        PURCHASE_MULTIPLIERS[self.multiplier_index]
    }

    /// Selects a batch size by index, wrapping past the end of the list.
    pub fn set_purchase_multiplier_index(&mut self, index: usize) {
        self.multiplier_index = index % PURCHASE_MULTIPLIERS.len();
    }

    /// Advances to the next batch size and returns it.
    pub fn cycle_purchase_multiplier(&mut self) -> u32 {
        self.set_purchase_multiplier_index(self.multiplier_index + 1);
        self.purchase_multiplier()
    }

    /// Sum of all tier levels.
    pub fn aggregate_levels(&self) -> u64 {
        self.tiers.iter().map(|t| t.level as u64).sum()
    }

    pub fn current_arc(&self) -> StoryArc {
        current_arc(&self.tiers)
    }

    /// Zeroes every level, the balance and the rate cache. Page and batch
    /// size are kept.
    pub fn reset_progress(&mut self) {
        for tier in &mut self.tiers {
            tier.level = 0;
        }
        self.total_rate = 0.0;
        self.resource = 0.0;
    }
}
