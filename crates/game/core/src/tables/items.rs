//! Static item classification table.
//!
//! Item ids are contiguous bands fixed by the contract:
//!
//! ```text
//!   1..=3    necklaces            (tier 1)
//!   4..=8    rings                (silver T2, bronze T3, platinum/titanium/gold T1)
//!   9..=41   magic band           weapons 9..=16, cloth armor 17..=41
//!  42..=71   blade / hide band    weapons 42..=46, hide armor 47..=71
//!  72..=101  bludgeon / metal     weapons 72..=76, metal armor 77..=101
//! ```
//!
//! Within each armor band the slots follow chest, head, waist, foot, hand with
//! five ids each in tier order. The table is a `static`, so every lookup is an
//! index and the boundaries can be tested in isolation.

use super::kinds::{ItemType, Slot};
use crate::error::TableError;

/// Classification of a single item id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItemClass {
    pub id: u8,
    pub name: &'static str,
    pub tier: u8,
    pub item_type: ItemType,
    pub slot: Slot,
    /// Position in the contract's per-slot item list (used by specials).
    pub slot_index: u8,
}

const fn class(
    id: u8,
    name: &'static str,
    tier: u8,
    item_type: ItemType,
    slot: Slot,
    slot_index: u8,
) -> ItemClass {
    ItemClass {
        id,
        name,
        tier,
        item_type,
        slot,
        slot_index,
    }
}

use ItemType::{Blade, Bludgeon, Cloth, Hide, Magic, Metal, Necklace, Ring};
use Slot::{Chest, Foot, Hand, Head, Neck, Waist, Weapon};

/// Classification for id 0 and any id outside `1..=101`.
pub const NONE: ItemClass = class(0, "None", 0, ItemType::None, Slot::None, 0);

#[rustfmt::skip]
static ITEMS: [ItemClass; 102] = [
    NONE,
    // Necklaces
    class(1, "Pendant", 1, Necklace, Neck, 2),
    class(2, "Necklace", 1, Necklace, Neck, 0),
    class(3, "Amulet", 1, Necklace, Neck, 1),
    // Rings
    class(4, "Silver Ring", 2, Ring, Slot::Ring, 1),
    class(5, "Bronze Ring", 3, Ring, Slot::Ring, 2),
    class(6, "Platinum Ring", 1, Ring, Slot::Ring, 3),
    class(7, "Titanium Ring", 1, Ring, Slot::Ring, 4),
    class(8, "Gold Ring", 1, Ring, Slot::Ring, 0),
    // Magic weapons
    class(9, "Ghost Wand", 1, Magic, Weapon, 10),
    class(10, "Grave Wand", 2, Magic, Weapon, 11),
    class(11, "Bone Wand", 3, Magic, Weapon, 12),
    class(12, "Wand", 5, Magic, Weapon, 13),
    class(13, "Grimoire", 1, Magic, Weapon, 14),
    class(14, "Chronicle", 2, Magic, Weapon, 15),
    class(15, "Tome", 3, Magic, Weapon, 16),
    class(16, "Book", 5, Magic, Weapon, 17),
    // Cloth
    class(17, "Divine Robe", 1, Cloth, Chest, 0),
    class(18, "Silk Robe", 2, Cloth, Chest, 1),
    class(19, "Linen Robe", 3, Cloth, Chest, 2),
    class(20, "Robe", 4, Cloth, Chest, 3),
    class(21, "Shirt", 5, Cloth, Chest, 4),
    class(22, "Crown", 1, Cloth, Head, 10),
    class(23, "Divine Hood", 2, Cloth, Head, 11),
    class(24, "Silk Hood", 3, Cloth, Head, 12),
    class(25, "Linen Hood", 4, Cloth, Head, 13),
    class(26, "Hood", 5, Cloth, Head, 14),
    class(27, "Brightsilk Sash", 1, Cloth, Waist, 10),
    class(28, "Silk Sash", 2, Cloth, Waist, 11),
    class(29, "Wool Sash", 3, Cloth, Waist, 12),
    class(30, "Linen Sash", 4, Cloth, Waist, 13),
    class(31, "Sash", 5, Cloth, Waist, 14),
    class(32, "Divine Slippers", 1, Cloth, Foot, 10),
    class(33, "Silk Slippers", 2, Cloth, Foot, 11),
    class(34, "Wool Shoes", 3, Cloth, Foot, 12),
    class(35, "Linen Shoes", 4, Cloth, Foot, 13),
    class(36, "Shoes", 5, Cloth, Foot, 14),
    class(37, "Divine Gloves", 1, Cloth, Hand, 10),
    class(38, "Silk Gloves", 2, Cloth, Hand, 11),
    class(39, "Wool Gloves", 3, Cloth, Hand, 12),
    class(40, "Linen Gloves", 4, Cloth, Hand, 13),
    class(41, "Gloves", 5, Cloth, Hand, 14),
    // Blade weapons
    class(42, "Katana", 1, Blade, Weapon, 5),
    class(43, "Falchion", 2, Blade, Weapon, 6),
    class(44, "Scimitar", 3, Blade, Weapon, 7),
    class(45, "Long Sword", 4, Blade, Weapon, 8),
    class(46, "Short Sword", 5, Blade, Weapon, 9),
    // Hide
    class(47, "Demon Husk", 1, Hide, Chest, 5),
    class(48, "Dragonskin Armor", 2, Hide, Chest, 6),
    class(49, "Studded Leather Armor", 3, Hide, Chest, 7),
    class(50, "Hard Leather Armor", 4, Hide, Chest, 8),
    class(51, "Leather Armor", 5, Hide, Chest, 9),
    class(52, "Demon Crown", 1, Hide, Head, 5),
    class(53, "Dragon's Crown", 2, Hide, Head, 6),
    class(54, "War Cap", 3, Hide, Head, 7),
    class(55, "Leather Cap", 4, Hide, Head, 8),
    class(56, "Cap", 5, Hide, Head, 9),
    class(57, "Demonhide Belt", 1, Hide, Waist, 5),
    class(58, "Dragonskin Belt", 2, Hide, Waist, 6),
    class(59, "Studded Leather Belt", 3, Hide, Waist, 7),
    class(60, "Hard Leather Belt", 4, Hide, Waist, 8),
    class(61, "Leather Belt", 5, Hide, Waist, 9),
    class(62, "Demonhide Boots", 1, Hide, Foot, 5),
    class(63, "Dragonskin Boots", 2, Hide, Foot, 6),
    class(64, "Studded Leather Boots", 3, Hide, Foot, 7),
    class(65, "Hard Leather Boots", 4, Hide, Foot, 8),
    class(66, "Leather Boots", 5, Hide, Foot, 9),
    class(67, "Demon's Hands", 1, Hide, Hand, 5),
    class(68, "Dragonskin Gloves", 2, Hide, Hand, 6),
    class(69, "Studded Leather Gloves", 3, Hide, Hand, 7),
    class(70, "Hard Leather Gloves", 4, Hide, Hand, 8),
    class(71, "Leather Gloves", 5, Hide, Hand, 9),
    // Bludgeon weapons
    class(72, "Warhammer", 1, Bludgeon, Weapon, 0),
    class(73, "Quarterstaff", 2, Bludgeon, Weapon, 1),
    class(74, "Maul", 3, Bludgeon, Weapon, 2),
    class(75, "Mace", 4, Bludgeon, Weapon, 3),
    class(76, "Club", 5, Bludgeon, Weapon, 4),
    // Metal
    class(77, "Holy Chestplate", 1, Metal, Chest, 10),
    class(78, "Ornate Chestplate", 2, Metal, Chest, 11),
    class(79, "Plate Mail", 3, Metal, Chest, 12),
    class(80, "Chain Mail", 4, Metal, Chest, 13),
    class(81, "Ring Mail", 5, Metal, Chest, 14),
    class(82, "Ancient Helm", 1, Metal, Head, 0),
    class(83, "Ornate Helm", 2, Metal, Head, 1),
    class(84, "Great Helm", 3, Metal, Head, 2),
    class(85, "Full Helm", 4, Metal, Head, 3),
    class(86, "Helm", 5, Metal, Head, 4),
    class(87, "Ornate Belt", 1, Metal, Waist, 0),
    class(88, "War Belt", 2, Metal, Waist, 1),
    class(89, "Plated Belt", 3, Metal, Waist, 2),
    class(90, "Mesh Belt", 4, Metal, Waist, 3),
    class(91, "Heavy Belt", 5, Metal, Waist, 4),
    class(92, "Holy Greaves", 1, Metal, Foot, 0),
    class(93, "Ornate Greaves", 2, Metal, Foot, 1),
    class(94, "Greaves", 3, Metal, Foot, 2),
    class(95, "Chain Boots", 4, Metal, Foot, 3),
    class(96, "Heavy Boots", 5, Metal, Foot, 4),
    class(97, "Holy Gauntlets", 1, Metal, Hand, 0),
    class(98, "Ornate Gauntlets", 2, Metal, Hand, 1),
    class(99, "Gauntlets", 3, Metal, Hand, 2),
    class(100, "Chain Gloves", 4, Metal, Hand, 3),
    class(101, "Heavy Gloves", 5, Metal, Hand, 4),
];

/// Well-known jewelry ids referenced by combat rules.
pub mod ids {
    pub const PENDANT: u8 = 1;
    pub const NECKLACE: u8 = 2;
    pub const AMULET: u8 = 3;
    pub const PLATINUM_RING: u8 = 6;
    pub const TITANIUM_RING: u8 = 7;
}

/// Classify an item id, falling back to [`NONE`] for unknown ids.
pub fn classify(id: u8) -> &'static ItemClass {
    ITEMS.get(usize::from(id)).unwrap_or(&NONE)
}

/// Classify an item id, rejecting id 0 and ids past the table.
pub fn try_classify(id: u8) -> Result<&'static ItemClass, TableError> {
    match ITEMS.get(usize::from(id)) {
        Some(class) if id != 0 => Ok(class),
        _ => Err(TableError::UnknownItem(id)),
    }
}

/// Base market price for a tier; tier 1 is the most expensive.
pub const fn base_price(tier: u8) -> u32 {
    if tier == 0 || tier > 5 {
        return 0;
    }
    (6 - tier as u32) * crate::GameConfig::PRICE_PER_TIER
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_ids_match_positions() {
        for (index, class) in ITEMS.iter().enumerate() {
            assert_eq!(usize::from(class.id), index);
        }
    }

    #[test]
    fn band_boundaries() {
        assert_eq!(classify(3).slot, Slot::Neck);
        assert_eq!(classify(4).slot, Slot::Ring);
        assert_eq!(classify(8).slot, Slot::Ring);

        assert_eq!(classify(9).item_type, ItemType::Magic);
        assert_eq!(classify(16).slot, Slot::Weapon);
        assert_eq!(classify(17).item_type, ItemType::Cloth);
        assert_eq!(classify(41).item_type, ItemType::Cloth);

        assert_eq!(classify(42).item_type, ItemType::Blade);
        assert_eq!(classify(47).item_type, ItemType::Hide);
        assert_eq!(classify(71).item_type, ItemType::Hide);

        assert_eq!(classify(72).item_type, ItemType::Bludgeon);
        assert_eq!(classify(77).item_type, ItemType::Metal);
        assert_eq!(classify(101).slot, Slot::Hand);
    }

    #[test]
    fn armor_slots_run_tier_one_to_five() {
        for start in [17u8, 22, 27, 32, 37, 47, 52, 57, 62, 67, 77, 82, 87, 92, 97] {
            let tiers: Vec<u8> = (start..start + 5).map(|id| classify(id).tier).collect();
            assert_eq!(tiers, vec![1, 2, 3, 4, 5], "band starting at {start}");
            let slot = classify(start).slot;
            assert!((start..start + 5).all(|id| classify(id).slot == slot));
        }
    }

    #[test]
    fn slot_indices_are_unique_within_slot() {
        for slot in [
            Slot::Weapon,
            Slot::Chest,
            Slot::Head,
            Slot::Waist,
            Slot::Foot,
            Slot::Hand,
            Slot::Neck,
            Slot::Ring,
        ] {
            let mut seen: Vec<u8> = ITEMS
                .iter()
                .filter(|class| class.slot == slot)
                .map(|class| class.slot_index)
                .collect();
            assert_eq!(seen.len() as u32, slot.item_count(), "{slot}");
            seen.sort_unstable();
            seen.dedup();
            assert_eq!(seen.len() as u32, slot.item_count(), "{slot}");
        }
    }

    #[test]
    fn unknown_ids_classify_as_none() {
        assert_eq!(classify(0), &NONE);
        assert_eq!(classify(102), &NONE);
        assert_eq!(classify(255).tier, 0);
        assert_eq!(try_classify(0), Err(TableError::UnknownItem(0)));
        assert_eq!(try_classify(200), Err(TableError::UnknownItem(200)));
        assert_eq!(try_classify(9).map(|c| c.name), Ok("Ghost Wand"));
    }

    #[test]
    fn base_price_strictly_decreases_with_tier() {
        let prices: Vec<u32> = (1..=5).map(base_price).collect();
        assert_eq!(prices, vec![20, 16, 12, 8, 4]);
        assert!(prices.windows(2).all(|pair| pair[0] > pair[1]));
    }
}
