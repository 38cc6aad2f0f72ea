//! Property tests for the tier economy.

use investment_sim::core::format::format_number;
use investment_sim::core::tier::{bonus_multiplier, cost_at, effective_rate};
use investment_sim::{Game, SaveRecord, TierCatalog};
use proptest::prelude::*;
use std::sync::Arc;

#[derive(Debug, Clone)]
enum Action {
    Buy(usize),
    Tick(f64),
    Click,
    CycleMultiplier,
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        4 => (0usize..48).prop_map(Action::Buy),
        2 => (0.0f64..100.0).prop_map(Action::Tick),
        1 => Just(Action::Click),
        1 => Just(Action::CycleMultiplier),
    ]
}

fn game_with(resource: f64, power: f64) -> Game {
    let record = SaveRecord {
        resource,
        prestige_multiplier: power,
        button_levels: vec![0; 48],
        save_time: Some(0.0),
        ..SaveRecord::default()
    };
    let catalog = Arc::new(TierCatalog::standard().unwrap());
    Game::from_record(Some(&record), catalog, 0.0).0
}

fn assert_cache_matches(game: &Game) -> Result<(), TestCaseError> {
    let scanned = game
        .engine()
        .summed_rate(game.prestige().ascension_power);
    let cached = game.total_rate();
    let tolerance = scanned.abs().max(1.0) * 1e-9;
    prop_assert!(
        (cached - scanned).abs() <= tolerance,
        "cached rate {} drifted from scanned {}",
        cached,
        scanned
    );
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Every level costs strictly more than the one before it.
    #[test]
    fn cost_strictly_increases(base in 0.01f64..1e6, level in 0u32..4000) {
        prop_assert!(cost_at(base, level + 1) > cost_at(base, level));
    }

    /// Buying a level never lowers a tier's income.
    #[test]
    fn rate_never_decreases(base in 0.01f64..1e6, level in 0u32..9000, power in 1.0f64..10.0) {
        prop_assert!(effective_rate(base, level + 1, power) >= effective_rate(base, level, power));
        prop_assert!(bonus_multiplier(level) >= 1.0);
    }

    /// The cached income rate matches a full scan after any sequence of actions.
    #[test]
    fn cached_rate_matches_scan(
        resource in 0.0f64..1e12,
        power in 1.0f64..3.0,
        actions in prop::collection::vec(arb_action(), 1..80),
    ) {
        let mut game = game_with(resource, power);
        for action in actions {
            match action {
                Action::Buy(index) => {
                    let before = game.resource();
                    let result = game.purchase_tier(index);
                    prop_assert!(game.resource() >= 0.0);
                    prop_assert!((before - result.spent - game.resource()).abs() <= before.abs() * 1e-9 + 1e-9);
                }
                Action::Tick(dt) => game.tick(dt),
                Action::Click => {
                    game.click();
                }
                Action::CycleMultiplier => {
                    game.cycle_purchase_multiplier();
                }
            }
            assert_cache_matches(&game)?;
        }
    }

    /// Unlock order holds: an owned tier's predecessor is always owned.
    #[test]
    fn owned_tiers_form_a_prefix(indices in prop::collection::vec(0usize..48, 1..200)) {
        let mut game = game_with(1e40, 1.0);
        for index in indices {
            game.purchase_tier(index);
        }
        for index in 1..48 {
            if game.tier(index).unwrap().level > 0 {
                prop_assert!(game.tier(index - 1).unwrap().level > 0);
            }
        }
    }

    /// Formatted numbers never lose their sign or go empty.
    #[test]
    fn format_is_never_empty(n in 0.0f64..1e80) {
        let text = format_number(n);
        prop_assert!(!text.is_empty());
        prop_assert!(!text.starts_with('-'));
    }
}
