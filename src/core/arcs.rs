//! Story arcs: progress labels keyed off milestone tiers.

use super::tier::TierState;
use std::fmt;

/// One arc, unlocked once its milestone tier is owned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoryArc {
    pub number: u32,
    pub title: &'static str,
    /// Tier index that must have level > 0. `None` for the opening arc.
    pub milestone_tier: Option<usize>,
}

impl fmt::Display for StoryArc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Arc {}: {}", roman(self.number), self.title)
    }
}

/// All arcs in ascending order.
pub const ARCS: [StoryArc; 7] = [
    arc(1, "Personal Items", None),
    arc(2, "Luxuries", Some(10)),
    arc(3, "Power", Some(16)),
    arc(4, "Solar Neighborhood", Some(23)),
    arc(5, "Galactic Structures", Some(33)),
    arc(6, "Beyond Comprehension", Some(43)),
    arc(7, "The Singularity", Some(47)),
];

const fn arc(number: u32, title: &'static str, milestone_tier: Option<usize>) -> StoryArc {
    StoryArc {
        number,
        title,
        milestone_tier,
    }
}

/// The highest arc whose milestone tier is owned.
pub fn current_arc(levels: &[TierState]) -> StoryArc {
    ARCS.iter()
        .rev()
        .find(|a| match a.milestone_tier {
            None => true,
            Some(index) => levels.get(index).is_some_and(|t| t.level > 0),
        })
        .copied()
        .unwrap_or(ARCS[0])
}

fn roman(n: u32) -> &'static str {
    match n {
        1 => "I",
        2 => "II",
        3 => "III",
        4 => "IV",
        5 => "V",
        6 => "VI",
        7 => "VII",
        _ => "?",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_game_is_first_arc() {
        let levels = vec![TierState::default(); 48];
        let arc = current_arc(&levels);
        assert_eq!(arc.number, 1);
        assert_eq!(arc.to_string(), "Arc I: Personal Items");
    }

    #[test]
    fn test_highest_owned_milestone_wins() {
        let mut levels = vec![TierState::default(); 48];
        levels[10].level = 1;
        assert_eq!(current_arc(&levels).title, "Luxuries");

        levels[33].level = 1;
        assert_eq!(current_arc(&levels).to_string(), "Arc V: Galactic Structures");

        levels[47].level = 3;
        assert_eq!(current_arc(&levels).to_string(), "Arc VII: The Singularity");
    }

    #[test]
    fn test_milestones_beyond_catalog_are_ignored() {
        let levels = vec![TierState::new(1); 12];
        assert_eq!(current_arc(&levels).title, "Luxuries");
    }
}
