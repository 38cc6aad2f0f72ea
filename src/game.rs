//! The game as a presentation layer sees it.
//!
//! [`Game`] ties the progression engine to the prestige state so callers never
//! pass the ascension power around themselves, and adds read-only previews
//! for display.

use crate::catalog::TierCatalog;
use crate::core::arcs::StoryArc;
use crate::core::engine::{ProgressionEngine, PurchaseResult};
use crate::core::offline::{now_seconds, OfflineReport};
use crate::error::SaveResult;
use crate::prestige::{self, PrestigeState};
use crate::save::{from_record, to_record, SaveManager, SaveRecord};
use std::sync::Arc;

/// Display data for one tier.
#[derive(Debug, Clone, PartialEq)]
pub struct TierSnapshot {
    pub index: usize,
    pub name: String,
    pub page: usize,
    pub level: u32,
    /// Price of the next single level.
    pub cost: f64,
    /// Current effective income of this tier.
    pub rate: f64,
    /// Income the first level would give, shown while the tier is unowned.
    pub next_unit_rate: f64,
    pub unlocked: bool,
    pub affordable: bool,
}

#[derive(Debug, Clone)]
pub struct Game {
    engine: ProgressionEngine,
    prestige: PrestigeState,
    arc: StoryArc,
    arc_changed: bool,
}

impl Game {
    pub fn new(catalog: Arc<TierCatalog>) -> Self {
        Self::from_parts(ProgressionEngine::new(catalog), PrestigeState::default())
    }

    pub fn from_parts(engine: ProgressionEngine, prestige: PrestigeState) -> Self {
        let arc = engine.current_arc();
        Self {
            engine,
            prestige,
            arc,
            arc_changed: false,
        }
    }

    pub fn engine(&self) -> &ProgressionEngine {
        &self.engine
    }

    pub fn catalog(&self) -> &Arc<TierCatalog> {
        self.engine.catalog()
    }

    pub fn prestige(&self) -> &PrestigeState {
        &self.prestige
    }

    pub fn resource(&self) -> f64 {
        self.engine.resource()
    }

    pub fn total_rate(&self) -> f64 {
        self.engine.total_rate()
    }

    pub fn current_page(&self) -> usize {
        self.engine.current_page()
    }

    pub fn total_pages(&self) -> usize {
        self.engine.total_pages()
    }

    pub fn purchase_multiplier(&self) -> u32 {
        self.engine.purchase_multiplier()
    }

    pub fn is_tier_unlocked(&self, index: usize) -> bool {
        self.engine.is_tier_unlocked(index)
    }

    pub fn tier(&self, index: usize) -> Option<TierSnapshot> {
        let catalog = self.engine.catalog();
        let def = catalog.definition_at(index)?;
        let state = self.engine.tier(index)?;
        let power = self.prestige.ascension_power;
        let cost = state.cost(def);
        Some(TierSnapshot {
            index,
            name: def.name.clone(),
            page: catalog.page_of(index),
            level: state.level,
            cost,
            rate: state.rate(def, power),
            next_unit_rate: def.base_rate * power,
            unlocked: self.engine.is_tier_unlocked(index),
            affordable: self.engine.resource() >= cost,
        })
    }

    /// Snapshots of every tier on `page`. Empty past the last page.
    pub fn page_tiers(&self, page: usize) -> Vec<TierSnapshot> {
        let catalog = self.engine.catalog();
        catalog
            .page(page)
            .iter()
            .filter_map(|def| self.tier(def.index))
            .collect()
    }

    pub fn current_arc(&self) -> StoryArc {
        self.arc
    }

    /// Returns the new arc once if a purchase or reset moved the game into a
    /// different one since the last call.
    pub fn take_arc_change(&mut self) -> Option<StoryArc> {
        std::mem::take(&mut self.arc_changed).then_some(self.arc)
    }

    fn refresh_arc(&mut self) {
        let arc = self.engine.current_arc();
        if arc != self.arc {
            self.arc = arc;
            self.arc_changed = true;
        }
    }

    pub fn click_value(&self) -> f64 {
        self.engine.click_value()
    }

    pub fn can_ascend(&self) -> bool {
        prestige::can_ascend(&self.engine)
    }

    /// Points an Ascend would grant now.
    pub fn ascend_preview(&self) -> u64 {
        prestige::ascend_gain(&self.engine, &self.prestige)
    }

    pub fn can_transcend(&self) -> bool {
        prestige::can_transcend(&self.prestige)
    }

    /// Transcendent power a Transcend would add now.
    pub fn transcend_preview(&self) -> f64 {
        prestige::transcend_gain(&self.prestige)
    }

    pub fn tick(&mut self, delta_seconds: f64) {
        self.engine.tick(delta_seconds);
    }

    /// Accrues income up to the wall-clock instant `now`. See
    /// [`ProgressionEngine::advance_to`].
    pub fn advance_to(&mut self, now: f64) -> f64 {
        self.engine.advance_to(now)
    }

    pub fn purchase_tier(&mut self, index: usize) -> PurchaseResult {
        let result = self
            .engine
            .purchase_tier(index, self.prestige.ascension_power);
        if result.levels > 0 {
            self.refresh_arc();
        }
        result
    }

    pub fn click(&mut self) -> f64 {
        self.engine.click()
    }

    pub fn change_page(&mut self, direction: i32) -> bool {
        self.engine.change_page(direction)
    }

    pub fn cycle_purchase_multiplier(&mut self) -> u32 {
        self.engine.cycle_purchase_multiplier()
    }

    pub fn ascend(&mut self) -> Option<u64> {
        let gained = prestige::perform_ascend(&mut self.engine, &mut self.prestige)?;
        self.refresh_arc();
        Some(gained)
    }

    pub fn transcend(&mut self) -> Option<f64> {
        let added = prestige::perform_transcend(&mut self.engine, &mut self.prestige)?;
        self.refresh_arc();
        Some(added)
    }

    pub fn to_record(&self, now: f64) -> SaveRecord {
        to_record(&self.engine, &self.prestige, now)
    }

    /// Restores a game as of `now`, crediting income earned while closed.
    pub fn from_record(
        record: Option<&SaveRecord>,
        catalog: Arc<TierCatalog>,
        now: f64,
    ) -> (Self, OfflineReport) {
        let (engine, prestige, report) = from_record(record, catalog, now);
        (Self::from_parts(engine, prestige), report)
    }

    /// Saves stamped with the current wall-clock time.
    pub fn save(&self, manager: &SaveManager) -> SaveResult<()> {
        self.save_at(manager, now_seconds())
    }

    pub fn save_at(&self, manager: &SaveManager, now: f64) -> SaveResult<()> {
        manager.save(&self.to_record(now))
    }

    /// Loads the save as of the current wall-clock time. A missing or
    /// unreadable save yields a fresh game.
    pub fn load(manager: &SaveManager, catalog: Arc<TierCatalog>) -> (Self, OfflineReport) {
        Self::load_at(manager, catalog, now_seconds())
    }

    pub fn load_at(
        manager: &SaveManager,
        catalog: Arc<TierCatalog>,
        now: f64,
    ) -> (Self, OfflineReport) {
        Self::from_record(manager.load().as_ref(), catalog, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> Game {
        Game::new(Arc::new(TierCatalog::standard().unwrap()))
    }

    fn rich_game() -> Game {
        let mut game = game();
        game.engine.set_resource(1e12);
        game
    }

    #[test]
    fn test_fresh_game_queries() {
        let game = game();
        assert_eq!(game.resource(), 0.0);
        assert_eq!(game.total_rate(), 0.0);
        assert_eq!(game.current_page(), 0);
        assert_eq!(game.total_pages(), 2);
        assert_eq!(game.purchase_multiplier(), 1);
        assert!(game.is_tier_unlocked(0));
        assert!(!game.is_tier_unlocked(1));
        assert_eq!(game.click_value(), 0.01);
        assert_eq!(game.ascend_preview(), 0);
        assert_eq!(game.transcend_preview(), 0.0);
        assert_eq!(game.current_arc().number, 1);
    }

    #[test]
    fn test_tier_snapshot() {
        let mut game = game();
        game.engine.set_resource(0.6);
        let snap = game.tier(0).unwrap();
        assert_eq!(snap.name, "Bottle Cap");
        assert_eq!(snap.page, 0);
        assert_eq!(snap.level, 0);
        assert!((snap.cost - 0.5).abs() < 1e-12);
        assert_eq!(snap.rate, 0.0);
        assert_eq!(snap.next_unit_rate, 0.01);
        assert!(snap.unlocked);
        assert!(snap.affordable);

        let second_page = game.tier(24).unwrap();
        assert_eq!(second_page.page, 1);
        assert!(!second_page.unlocked);
        assert!(!second_page.affordable);

        assert!(game.tier(48).is_none());
    }

    #[test]
    fn test_page_tiers() {
        let game = game();
        let first = game.page_tiers(0);
        assert_eq!(first.len(), 24);
        assert_eq!(first[0].index, 0);
        assert_eq!(game.page_tiers(1)[0].index, 24);
        assert!(game.page_tiers(2).is_empty());
    }

    #[test]
    fn test_purchase_uses_ascension_power() {
        let mut game = rich_game();
        game.prestige.ascension_power = 2.0;
        let result = game.purchase_tier(0);
        assert_eq!(result.levels, 1);
        assert!((game.total_rate() - 0.02).abs() < 1e-12);
        assert_eq!(game.tier(0).unwrap().next_unit_rate, 0.02);
    }

    #[test]
    fn test_arc_change_reported_once() {
        let mut game = rich_game();
        for index in 0..=10 {
            game.purchase_tier(index);
        }
        let arc = game.take_arc_change().unwrap();
        assert_eq!(arc.to_string(), "Arc II: Luxuries");
        assert_eq!(game.take_arc_change(), None);

        game.purchase_tier(0);
        assert_eq!(game.take_arc_change(), None);
    }

    #[test]
    fn test_ascend_resets_arc() {
        let mut game = game();
        game.engine.set_resource(1e30);
        for index in 0..=32 {
            game.purchase_tier(index);
        }
        assert_eq!(game.ascend_preview(), 33);
        game.take_arc_change();

        assert_eq!(game.ascend(), Some(33));
        assert_eq!(game.take_arc_change().map(|a| a.number), Some(1));
        assert_eq!(game.prestige().ascension_points, 33);
        assert!((game.transcend_preview() - 0.033).abs() < 1e-12);
    }

    #[test]
    fn test_record_round_trip_keeps_state() {
        let mut game = rich_game();
        game.purchase_tier(0);
        game.purchase_tier(1);
        game.cycle_purchase_multiplier();
        game.change_page(1);

        let record = game.to_record(100.0);
        let (restored, report) = Game::from_record(Some(&record), Arc::clone(game.catalog()), 100.0);
        assert_eq!(report.gain, 0.0);
        assert_eq!(restored.resource(), game.resource());
        assert!((restored.total_rate() - game.total_rate()).abs() < 1e-12);
        assert_eq!(restored.purchase_multiplier(), 10);
        assert_eq!(restored.current_page(), 1);
        assert_eq!(restored.tier(1).unwrap().level, 1);
    }
}
