use game_core::{Adventurer, Equipment, Item, Slot, Stats};

use super::error::MappingError;
use super::schema::{Field, Record, Schema};
use crate::source::Row;

pub const HEALTH: &str = "details.adventurer.health";
pub const XP: &str = "details.adventurer.xp";
const GOLD: &str = "details.adventurer.gold";
const BEAST_HEALTH: &str = "details.adventurer.beast_health";
const STAT_UPGRADES: &str = "details.adventurer.stat_upgrades_available";
const SPECIALS_SEED: &str = "details.adventurer.item_specials_seed";
const ACTION_COUNT: &str = "details.adventurer.action_count";

const STRENGTH: &str = "details.adventurer.stats.strength";
const DEXTERITY: &str = "details.adventurer.stats.dexterity";
const VITALITY: &str = "details.adventurer.stats.vitality";
const INTELLIGENCE: &str = "details.adventurer.stats.intelligence";
const WISDOM: &str = "details.adventurer.stats.wisdom";
const CHARISMA: &str = "details.adventurer.stats.charisma";
const LUCK: &str = "details.adventurer.stats.luck";

/// `(slot, id key, xp key)` for every equipment slot.
const EQUIPMENT: [(Slot, &str, &str); 8] = [
    (
        Slot::Weapon,
        "details.adventurer.equipment.weapon.id",
        "details.adventurer.equipment.weapon.xp",
    ),
    (
        Slot::Chest,
        "details.adventurer.equipment.chest.id",
        "details.adventurer.equipment.chest.xp",
    ),
    (
        Slot::Head,
        "details.adventurer.equipment.head.id",
        "details.adventurer.equipment.head.xp",
    ),
    (
        Slot::Waist,
        "details.adventurer.equipment.waist.id",
        "details.adventurer.equipment.waist.xp",
    ),
    (
        Slot::Foot,
        "details.adventurer.equipment.foot.id",
        "details.adventurer.equipment.foot.xp",
    ),
    (
        Slot::Hand,
        "details.adventurer.equipment.hand.id",
        "details.adventurer.equipment.hand.xp",
    ),
    (
        Slot::Neck,
        "details.adventurer.equipment.neck.id",
        "details.adventurer.equipment.neck.xp",
    ),
    (
        Slot::Ring,
        "details.adventurer.equipment.ring.id",
        "details.adventurer.equipment.ring.xp",
    ),
];

pub static ADVENTURER: Schema = Schema {
    entity: "adventurer",
    fields: &[
        Field::required(HEALTH),
        Field::required(XP),
        Field::defaulted(GOLD),
        Field::defaulted(BEAST_HEALTH),
        Field::defaulted(STAT_UPGRADES),
        Field::defaulted(SPECIALS_SEED),
        Field::defaulted(ACTION_COUNT),
        Field::defaulted(STRENGTH),
        Field::defaulted(DEXTERITY),
        Field::defaulted(VITALITY),
        Field::defaulted(INTELLIGENCE),
        Field::defaulted(WISDOM),
        Field::defaulted(CHARISMA),
        Field::defaulted(LUCK),
        Field::defaulted(EQUIPMENT[0].1),
        Field::defaulted(EQUIPMENT[0].2),
        Field::defaulted(EQUIPMENT[1].1),
        Field::defaulted(EQUIPMENT[1].2),
        Field::defaulted(EQUIPMENT[2].1),
        Field::defaulted(EQUIPMENT[2].2),
        Field::defaulted(EQUIPMENT[3].1),
        Field::defaulted(EQUIPMENT[3].2),
        Field::defaulted(EQUIPMENT[4].1),
        Field::defaulted(EQUIPMENT[4].2),
        Field::defaulted(EQUIPMENT[5].1),
        Field::defaulted(EQUIPMENT[5].2),
        Field::defaulted(EQUIPMENT[6].1),
        Field::defaulted(EQUIPMENT[6].2),
        Field::defaulted(EQUIPMENT[7].1),
        Field::defaulted(EQUIPMENT[7].2),
    ],
};

/// Map an adventurer snapshot row.
///
/// Equipped items get their specials revealed from the adventurer's seed. An item
/// whose id belongs to a different slot is dropped with a warning.
pub fn map_adventurer(row: &Row) -> Result<Adventurer, MappingError> {
    let record = ADVENTURER.validate(row)?;
    let item_specials_seed = record.u16(SPECIALS_SEED)?;

    Ok(Adventurer {
        health: record.u32(HEALTH)?,
        xp: record.u32(XP)?,
        gold: record.u32(GOLD)?,
        beast_health: record.u32(BEAST_HEALTH)?,
        stat_upgrades_available: record.u32(STAT_UPGRADES)?,
        item_specials_seed,
        action_count: record.u32(ACTION_COUNT)?,
        stats: map_stats(&record)?,
        equipment: map_equipment(&record, item_specials_seed)?,
    })
}

fn map_stats(record: &Record<'_>) -> Result<Stats, MappingError> {
    Ok(Stats {
        strength: record.u32(STRENGTH)?,
        dexterity: record.u32(DEXTERITY)?,
        vitality: record.u32(VITALITY)?,
        intelligence: record.u32(INTELLIGENCE)?,
        wisdom: record.u32(WISDOM)?,
        charisma: record.u32(CHARISMA)?,
        luck: record.u32(LUCK)?,
    })
}

fn map_equipment(record: &Record<'_>, seed: u16) -> Result<Equipment, MappingError> {
    let mut equipment = Equipment::default();
    for (slot, id_key, xp_key) in EQUIPMENT {
        let id = record.u8(id_key)?;
        if id == 0 {
            continue;
        }
        let item = Item::new(id, record.u32(xp_key)?).with_specials_seed(seed);
        if item.slot() != slot {
            tracing::warn!(%slot, item = id, "item does not fit its equipment slot; ignoring");
            continue;
        }
        // Slot already checked, so equip cannot be rejected.
        let _ = equipment.equip(item);
    }
    Ok(equipment)
}
