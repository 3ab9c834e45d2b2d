//! Human-readable messages for feed entries.
//!
//! One formatter per kind. Names come from the static classifier tables so the
//! feed reads the same as the rest of the derived state.
//!
//! Examples:
//! - "Defeated Wolf: +4 gold, +12 XP"
//! - "Wolf hit your head for 15 damage"
//! - "Bought Katana, Shirt and 2 potions"

use game_core::Slot;
use game_core::state::level_from_xp;
use game_core::tables::{beasts, items};

use super::event::{AdventurerSnapshot, BagSnapshot, DiscoveryKind, GameEvent, StatIncrease};

pub fn format_event(event: &GameEvent) -> String {
    match event {
        GameEvent::Encounter {
            beast_id,
            level,
            health,
        } => format!(
            "Encountered {} (level {}, {} HP)",
            beast_name(*beast_id),
            level,
            health
        ),
        GameEvent::Discovery {
            discovery,
            amount,
            item_id,
        } => match (discovery, item_id) {
            (DiscoveryKind::Gold, _) => format!("Discovered {} gold", amount),
            (DiscoveryKind::Health, _) => format!("Discovered {} health", amount),
            (DiscoveryKind::Loot, Some(id)) => format!("Discovered {}", item_name(*id)),
            (DiscoveryKind::Loot, None) => "Discovered loot".to_string(),
        },
        GameEvent::Obstacle { damage, dodged } => {
            if *dodged {
                "Dodged an obstacle".to_string()
            } else {
                format!("Hit by an obstacle for {} damage", damage)
            }
        }
        GameEvent::DefeatedBeast {
            beast_id,
            gold_reward,
            xp_reward,
        } => format!(
            "Defeated {}: +{} gold, +{} XP",
            beast_name(*beast_id),
            gold_reward,
            xp_reward
        ),
        GameEvent::FledBeast {
            beast_id,
            xp_reward,
        } => format!("Fled from {}: +{} XP", beast_name(*beast_id), xp_reward),
        GameEvent::StatUpgrade { stats } => match stat_list(stats) {
            Some(list) => format!("Upgraded stats: {}", list),
            None => "Upgraded stats".to_string(),
        },
        GameEvent::BuyItems { items, potions } => {
            let mut parts = Vec::new();
            if !items.is_empty() {
                parts.push(item_list(items));
            }
            match potions {
                0 => {}
                1 => parts.push("1 potion".to_string()),
                n => parts.push(format!("{} potions", n)),
            }
            if parts.is_empty() {
                "Visited the market".to_string()
            } else {
                format!("Bought {}", parts.join(" and "))
            }
        }
        GameEvent::Equip { items } => format!("Equipped {}", item_list(items)),
        GameEvent::Drop { items } => format!("Dropped {}", item_list(items)),
        GameEvent::LevelUp { level } => format!("Reached level {}", level),
        GameEvent::MarketUpdate { items } => {
            format!("Market refreshed with {} items", items.len())
        }
        GameEvent::Attack { damage, critical } => {
            let mut msg = format!("Attacked for {} damage", damage);
            if *critical {
                msg.push_str(" (critical!)");
            }
            msg
        }
        GameEvent::BeastAttack {
            beast_id,
            damage,
            location,
            critical,
        } => {
            let mut msg = format!(
                "{} hit your {} for {} damage",
                beast_name(*beast_id),
                slot_name(*location),
                damage
            );
            if *critical {
                msg.push_str(" (critical!)");
            }
            msg
        }
        GameEvent::Ambush {
            beast_id,
            damage,
            location,
            ..
        } => format!(
            "Ambushed by {}: {} damage to your {}",
            beast_name(*beast_id),
            damage,
            slot_name(*location)
        ),
        GameEvent::Flee { success } => {
            if *success {
                "Fled successfully".to_string()
            } else {
                "Failed to flee".to_string()
            }
        }
    }
}

pub fn format_adventurer(snapshot: &AdventurerSnapshot) -> String {
    format!(
        "Level {} with {} HP and {} gold",
        level_from_xp(snapshot.xp),
        snapshot.health,
        snapshot.gold
    )
}

pub fn format_bag(snapshot: &BagSnapshot) -> String {
    match snapshot.items.len() {
        0 => "Bag is empty".to_string(),
        1 => "Bag holds 1 item".to_string(),
        n => format!("Bag holds {} items", n),
    }
}

fn beast_name(id: u8) -> &'static str {
    beasts::classify(id).name
}

fn item_name(id: u8) -> &'static str {
    items::classify(id).name
}

fn slot_name(slot: Slot) -> String {
    match slot {
        Slot::None => "body".to_string(),
        other => other.to_string(),
    }
}

fn item_list(ids: &[u8]) -> String {
    if ids.is_empty() {
        return "nothing".to_string();
    }
    ids.iter()
        .map(|id| item_name(*id))
        .collect::<Vec<_>>()
        .join(", ")
}

fn stat_list(stats: &StatIncrease) -> Option<String> {
    let parts: Vec<String> = [
        (stats.strength, "STR"),
        (stats.dexterity, "DEX"),
        (stats.vitality, "VIT"),
        (stats.intelligence, "INT"),
        (stats.wisdom, "WIS"),
        (stats.charisma, "CHA"),
        (stats.luck, "LUCK"),
    ]
    .into_iter()
    .filter(|(points, _)| *points > 0)
    .map(|(points, label)| format!("+{} {}", points, label))
    .collect();
    (!parts.is_empty()).then(|| parts.join(", "))
}
