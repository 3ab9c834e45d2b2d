//! Raw feed inputs: typed game-action events and periodic snapshots.

use game_core::Slot;
use serde::{Deserialize, Serialize};

/// What an exploration step turned up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DiscoveryKind {
    Gold,
    Health,
    Loot,
}

/// Stat points added in one upgrade.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatIncrease {
    pub strength: u32,
    pub dexterity: u32,
    pub vitality: u32,
    pub intelligence: u32,
    pub wisdom: u32,
    pub charisma: u32,
    pub luck: u32,
}

/// A game action emitted by the contract.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameEvent {
    Encounter {
        beast_id: u8,
        #[serde(default)]
        level: u32,
        #[serde(default)]
        health: u32,
    },
    Discovery {
        discovery: DiscoveryKind,
        #[serde(default)]
        amount: u32,
        #[serde(default)]
        item_id: Option<u8>,
    },
    Obstacle {
        #[serde(default)]
        damage: u32,
        #[serde(default)]
        dodged: bool,
    },
    DefeatedBeast {
        beast_id: u8,
        #[serde(default)]
        gold_reward: u32,
        #[serde(default)]
        xp_reward: u32,
    },
    FledBeast {
        beast_id: u8,
        #[serde(default)]
        xp_reward: u32,
    },
    StatUpgrade {
        #[serde(default)]
        stats: StatIncrease,
    },
    BuyItems {
        #[serde(default)]
        items: Vec<u8>,
        #[serde(default)]
        potions: u32,
    },
    Equip {
        #[serde(default)]
        items: Vec<u8>,
    },
    Drop {
        #[serde(default)]
        items: Vec<u8>,
    },
    LevelUp {
        level: u32,
    },
    MarketUpdate {
        #[serde(default)]
        items: Vec<u8>,
    },
    Attack {
        #[serde(default)]
        damage: u32,
        #[serde(default)]
        critical: bool,
    },
    BeastAttack {
        beast_id: u8,
        #[serde(default)]
        damage: u32,
        #[serde(default)]
        location: Slot,
        #[serde(default)]
        critical: bool,
    },
    Ambush {
        beast_id: u8,
        #[serde(default)]
        damage: u32,
        #[serde(default)]
        location: Slot,
        #[serde(default)]
        critical: bool,
    },
    Flee {
        success: bool,
    },
}

/// One indexed game event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRow {
    /// Composite `"{block}:{tx}:{index}"` id.
    pub id: String,
    pub timestamp: u64,
    #[serde(default)]
    pub action_count: Option<u32>,
    #[serde(flatten)]
    pub event: GameEvent,
}

/// Periodic adventurer snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdventurerSnapshot {
    pub id: String,
    pub timestamp: u64,
    pub action_count: Option<u32>,
    pub health: u32,
    pub xp: u32,
    pub gold: u32,
}

/// Periodic bag snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BagSnapshot {
    pub id: String,
    pub timestamp: u64,
    pub action_count: Option<u32>,
    pub items: Vec<u8>,
}

/// All raw inputs of one game's activity feed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedStreams {
    pub events: Vec<EventRow>,
    pub adventurers: Vec<AdventurerSnapshot>,
    pub bags: Vec<BagSnapshot>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn event_row_reads_tagged_kind() {
        let row: EventRow = serde_json::from_value(json!({
            "id": "10:0xabc:2",
            "timestamp": 1_700_000_000u64,
            "action_count": 12,
            "kind": "defeated_beast",
            "beast_id": 47,
            "gold_reward": 4,
            "xp_reward": 12
        }))
        .unwrap();
        assert_eq!(row.action_count, Some(12));
        assert_eq!(
            row.event,
            GameEvent::DefeatedBeast {
                beast_id: 47,
                gold_reward: 4,
                xp_reward: 12,
            }
        );
    }

    #[test]
    fn beast_attack_location_is_snake_case() {
        let row: EventRow = serde_json::from_value(json!({
            "id": "10:0xabc:3",
            "timestamp": 5,
            "kind": "beast_attack",
            "beast_id": 47,
            "damage": 15,
            "location": "head"
        }))
        .unwrap();
        assert!(matches!(
            row.event,
            GameEvent::BeastAttack {
                location: Slot::Head,
                critical: false,
                ..
            }
        ));
    }
}
