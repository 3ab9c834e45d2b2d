use serde::{Deserialize, Serialize};

use super::event::GameEvent;

/// Kind tag of an activity feed entry.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FeedKind {
    Encounter,
    Ambush,
    Discovery,
    Obstacle,
    Attack,
    BeastAttack,
    Flee,
    DefeatedBeast,
    FledBeast,
    LevelUp,
    StatUpgrade,
    BuyItems,
    Equip,
    Drop,
    MarketUpdate,
    Adventurer,
    Bag,
}

impl FeedKind {
    /// Tiebreak weight for entries sharing a timestamp and event index.
    ///
    /// Lower sorts first. Follows the order effects happen inside one transaction,
    /// with the periodic snapshots after every game action.
    pub const fn priority(self) -> u8 {
        match self {
            Self::Encounter => 0,
            Self::Ambush => 1,
            Self::Discovery => 2,
            Self::Obstacle => 3,
            Self::Attack => 4,
            Self::BeastAttack => 5,
            Self::Flee => 6,
            Self::DefeatedBeast => 7,
            Self::FledBeast => 8,
            Self::LevelUp => 9,
            Self::StatUpgrade => 10,
            Self::BuyItems => 11,
            Self::Equip => 12,
            Self::Drop => 13,
            Self::MarketUpdate => 14,
            Self::Adventurer => 15,
            Self::Bag => 16,
        }
    }

    pub fn of(event: &GameEvent) -> Self {
        match event {
            GameEvent::Encounter { .. } => Self::Encounter,
            GameEvent::Discovery { .. } => Self::Discovery,
            GameEvent::Obstacle { .. } => Self::Obstacle,
            GameEvent::DefeatedBeast { .. } => Self::DefeatedBeast,
            GameEvent::FledBeast { .. } => Self::FledBeast,
            GameEvent::StatUpgrade { .. } => Self::StatUpgrade,
            GameEvent::BuyItems { .. } => Self::BuyItems,
            GameEvent::Equip { .. } => Self::Equip,
            GameEvent::Drop { .. } => Self::Drop,
            GameEvent::LevelUp { .. } => Self::LevelUp,
            GameEvent::MarketUpdate { .. } => Self::MarketUpdate,
            GameEvent::Attack { .. } => Self::Attack,
            GameEvent::BeastAttack { .. } => Self::BeastAttack,
            GameEvent::Ambush { .. } => Self::Ambush,
            GameEvent::Flee { .. } => Self::Flee,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    #[test]
    fn priorities_are_unique() {
        let weights: HashSet<u8> = FeedKind::iter().map(FeedKind::priority).collect();
        assert_eq!(weights.len(), FeedKind::iter().count());
    }

    #[test]
    fn snapshots_sort_after_actions() {
        let snapshot = FeedKind::Adventurer.priority().min(FeedKind::Bag.priority());
        for kind in FeedKind::iter() {
            if !matches!(kind, FeedKind::Adventurer | FeedKind::Bag) {
                assert!(kind.priority() < snapshot, "{kind}");
            }
        }
    }
}
