//! Special names: the "Agony Bane … of Power" decorations on items and beasts.
//!
//! Items derive their special indices from the adventurer's item specials seed;
//! beasts carry theirs directly in the event record. Index 0 means "none" in
//! every table, so all lookups are 1-based.

use super::items;

#[rustfmt::skip]
const ITEM_SUFFIXES: [&str; 16] = [
    "of Power", "of Giant", "of Titans", "of Skill", "of Perfection",
    "of Brilliance", "of Enlightenment", "of Protection", "of Anger", "of Rage",
    "of Fury", "of Vitriol", "of the Fox", "of Detection", "of Reflection",
    "of the Twins",
];

#[rustfmt::skip]
const NAME_PREFIXES: [&str; 69] = [
    "Agony", "Apocalypse", "Armageddon", "Beast", "Behemoth", "Blight", "Blood",
    "Bramble", "Brimstone", "Brood", "Carrion", "Cataclysm", "Chimeric", "Corpse",
    "Corruption", "Damnation", "Death", "Demon", "Dire", "Dragon", "Dread", "Doom",
    "Dusk", "Eagle", "Empyrean", "Fate", "Foe", "Gale", "Ghoul", "Gloom", "Glyph",
    "Golem", "Grim", "Hate", "Havoc", "Honour", "Horror", "Hypnotic", "Kraken",
    "Loath", "Maelstrom", "Mind", "Miracle", "Morbid", "Oblivion", "Onslaught",
    "Pain", "Pandemonium", "Phoenix", "Plague", "Rage", "Rapture", "Rune", "Skull",
    "Sol", "Soul", "Sorrow", "Spirit", "Storm", "Tempest", "Torment", "Vengeance",
    "Victory", "Viper", "Vortex", "Woe", "Wrath", "Light's", "Shimmering",
];

#[rustfmt::skip]
const NAME_SUFFIXES: [&str; 18] = [
    "Bane", "Root", "Bite", "Song", "Roar", "Grasp", "Instrument", "Glow", "Bender",
    "Shadow", "Whisper", "Shout", "Growl", "Tear", "Peak", "Form", "Sun", "Moon",
];

const NUM_ITEMS: u32 = crate::GameConfig::NUM_ITEMS as u32;

fn lookup(table: &'static [&'static str], index: u8) -> Option<&'static str> {
    table.get(usize::from(index).checked_sub(1)?).copied()
}

/// Name for an item suffix index (`1..=16`).
pub fn item_suffix_name(index: u8) -> Option<&'static str> {
    lookup(&ITEM_SUFFIXES, index)
}

/// Name for a name-prefix index (`1..=69`).
pub fn name_prefix(index: u8) -> Option<&'static str> {
    lookup(&NAME_PREFIXES, index)
}

/// Name for a name-suffix index (`1..=18`).
pub fn name_suffix(index: u8) -> Option<&'static str> {
    lookup(&NAME_SUFFIXES, index)
}

/// Raw special indices for an item, before unlock levels are applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SpecialIndices {
    pub suffix: u8,
    pub prefix: u8,
    pub name_suffix: u8,
}

/// Combinatorial specials index for `item_id` under `seed`.
///
/// ```text
/// entropy = seed + id            (seed - id when the sum overflows u16)
/// index   = (entropy mod 101) * slot_length + index_within_slot
/// ```
pub fn specials_index(item_id: u8, seed: u16) -> u32 {
    let class = items::classify(item_id);
    let entropy = match seed.checked_add(u16::from(item_id)) {
        Some(sum) => sum,
        None => seed - u16::from(item_id),
    };
    let rnd = u32::from(entropy) % NUM_ITEMS;
    rnd * class.slot.item_count() + u32::from(class.slot_index)
}

/// Derive the three special indices for an item.
///
/// Returns `None` for id 0 or a zero seed: specials are not revealed until the
/// contract publishes a seed.
pub fn derive(item_id: u8, seed: u16) -> Option<SpecialIndices> {
    if item_id == 0 || seed == 0 {
        return None;
    }
    let index = specials_index(item_id, seed);
    Some(SpecialIndices {
        suffix: (index % ITEM_SUFFIXES.len() as u32) as u8 + 1,
        prefix: (index % NAME_PREFIXES.len() as u32) as u8 + 1,
        name_suffix: (index % NAME_SUFFIXES.len() as u32) as u8 + 1,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookups_are_one_based() {
        assert_eq!(item_suffix_name(0), None);
        assert_eq!(item_suffix_name(1), Some("of Power"));
        assert_eq!(item_suffix_name(16), Some("of the Twins"));
        assert_eq!(item_suffix_name(17), None);
        assert_eq!(name_prefix(1), Some("Agony"));
        assert_eq!(name_prefix(69), Some("Shimmering"));
        assert_eq!(name_suffix(18), Some("Moon"));
    }

    #[test]
    fn index_combines_entropy_slot_length_and_position() {
        // Ghost Wand: weapon slot (18), slot index 10. seed 100 + 9 = 109 -> 109 % 101 = 8.
        assert_eq!(specials_index(9, 100), 8 * 18 + 10);
        // Katana: slot index 5. seed 92 + 42 = 134 -> 33.
        assert_eq!(specials_index(42, 92), 33 * 18 + 5);
    }

    #[test]
    fn overflowing_entropy_subtracts_id() {
        // 65535 + 9 overflows, so entropy = 65535 - 9 = 65526 -> 65526 % 101 = 78.
        assert_eq!(specials_index(9, u16::MAX), 78 * 18 + 10);
    }

    #[test]
    fn derive_is_stable_and_in_range() {
        for id in 1..=101u8 {
            for seed in [1u16, 777, 31_337, u16::MAX] {
                let first = derive(id, seed).unwrap();
                assert_eq!(derive(id, seed), Some(first));
                assert!(item_suffix_name(first.suffix).is_some());
                assert!(name_prefix(first.prefix).is_some());
                assert!(name_suffix(first.name_suffix).is_some());
            }
        }
    }

    #[test]
    fn no_specials_without_seed() {
        assert_eq!(derive(9, 0), None);
        assert_eq!(derive(0, 10), None);
    }
}
