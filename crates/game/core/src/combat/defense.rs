//! Beast damage against the adventurer's armor slots.
//!
//! This is the single canonical beast-damage algorithm. An unarmored slot takes
//! the beast's attack plus a quarter ([`unarmored_damage`]); total exposure is
//! reported both as the worst single slot (`max`) and as a protection percentage
//! normalized against the per-slot ceiling.

use super::bonus::{jewelry_bonus, special_name_bonus};
use super::elemental::elemental_adjusted_damage;
use crate::GameConfig;
use crate::state::{Adventurer, Beast, Item};
use crate::tables::{ItemType, Slot, items::ids};

/// Damage a beast deals to one armor slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotDamage {
    pub slot: Slot,
    pub damage: u32,
    /// Damage prevented relative to the per-slot ceiling (0 when unarmored).
    pub defense: u32,
}

/// Beast damage across all armor slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BeastDamage {
    /// Worst damage over the five slots.
    pub max: u32,
    pub per_slot: [SlotDamage; 5],
    pub protection_percent: u32,
}

/// Per-slot damage ceiling: `⌊beast_attack × 3 / 2⌋`.
pub fn max_slot_damage(beast: &Beast) -> u32 {
    beast.power().saturating_mul(3) / 2
}

/// Damage to a slot with nothing equipped: `attack + ⌊attack / 4⌋`, at least 2.
pub fn unarmored_damage(beast_attack: u32) -> u32 {
    beast_attack
        .saturating_add(beast_attack / 4)
        .max(GameConfig::BEAST_MIN_DAMAGE)
}

/// Neck item whose bonus applies to `armor_type`.
const fn matching_neck(armor_type: ItemType) -> Option<u8> {
    match armor_type {
        ItemType::Cloth => Some(ids::AMULET),
        ItemType::Hide => Some(ids::PENDANT),
        ItemType::Metal => Some(ids::NECKLACE),
        _ => None,
    }
}

/// Damage a beast deals to one slot.
///
/// # Formula
///
/// ```text
/// attack    = beast_level × (6 − beast_tier)
/// elemental = elemental_adjusted(attack, beast_attack_type, armor_type)
/// special   = 8 × elemental (prefix match) + 2 × elemental (name-suffix match)
/// armor     = armor_level × (6 − armor_tier)
/// neck      = ⌊armor × neck_level × 3 / 100⌋ when the neck matches the armor family
/// damage    = max(2, elemental + special − armor − neck)
/// ```
pub fn slot_damage(beast: &Beast, armor: Option<&Item>, neck: Option<&Item>) -> u32 {
    let attack = beast.power();
    let Some(armor) = armor else {
        return unarmored_damage(attack);
    };

    let elemental = elemental_adjusted_damage(attack, beast.attack_type(), armor.item_type());
    let special = special_name_bonus(elemental, &beast.specials, &armor.specials.name);
    let armor_value = armor.power();
    let neck_reduction = match (neck, matching_neck(armor.item_type())) {
        (Some(neck), Some(wanted)) if neck.id == wanted => jewelry_bonus(armor_value, neck.level()),
        _ => 0,
    };

    elemental
        .saturating_add(special)
        .saturating_sub(armor_value)
        .saturating_sub(neck_reduction)
        .max(GameConfig::BEAST_MIN_DAMAGE)
}

/// Protection percentage for a summed per-slot defense.
///
/// 100 when the ceiling is at or below the damage floor (nothing to mitigate),
/// otherwise `⌊Σ defense / ((ceiling − 2) × 5) × 100⌋` clamped to `[0, 100]`.
pub fn protection_percent(total_defense: u32, max_per_slot: u32) -> u32 {
    if max_per_slot <= GameConfig::BEAST_MIN_DAMAGE {
        return 100;
    }
    let span = u64::from(max_per_slot - GameConfig::BEAST_MIN_DAMAGE) * Slot::ARMOR.len() as u64;
    let percent = u64::from(total_defense) * 100 / span;
    percent.min(100) as u32
}

/// Calculate beast damage across every armor slot of `adventurer`.
pub fn beast_damage(beast: &Beast, adventurer: &Adventurer) -> BeastDamage {
    let ceiling = max_slot_damage(beast);
    let neck = adventurer.equipment.neck.as_ref();

    let per_slot = Slot::ARMOR.map(|slot| {
        let armor = adventurer.equipment.get(slot);
        let damage = slot_damage(beast, armor, neck);
        let defense = match armor {
            Some(_) => ceiling.saturating_sub(damage),
            None => 0,
        };
        SlotDamage {
            slot,
            damage,
            defense,
        }
    });

    let max = per_slot.iter().map(|slot| slot.damage).max().unwrap_or(0);
    let total_defense = per_slot
        .iter()
        .fold(0u32, |total, slot| total.saturating_add(slot.defense));

    BeastDamage {
        max,
        per_slot,
        protection_percent: protection_percent(total_defense, ceiling),
    }
}
