//! Static beast classification table.
//!
//! Beast ids `1..=75` form three type bands of 25 (Magic, Hunter, Brute). Inside a
//! band the ids run in tier order, five per tier. The table is computed at compile
//! time from the name list so the band arithmetic lives in exactly one place.

use super::kinds::BeastType;
use crate::error::TableError;

/// Classification of a single beast id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BeastClass {
    pub id: u8,
    pub name: &'static str,
    pub tier: u8,
    pub beast_type: BeastType,
}

const BAND_SIZE: u8 = 25;
const TIER_SIZE: u8 = 5;

/// Classification for id 0 and ids past the table.
pub const UNKNOWN: BeastClass = BeastClass {
    id: 0,
    name: "Unknown Beast",
    tier: 0,
    beast_type: BeastType::None,
};

#[rustfmt::skip]
const NAMES: [&str; 75] = [
    // Magic
    "Warlock", "Typhon", "Jiangshi", "Anansi", "Basilisk",
    "Gorgon", "Kitsune", "Lich", "Chimera", "Wendigo",
    "Rakshasa", "Werewolf", "Banshee", "Draugr", "Vampire",
    "Goblin", "Ghoul", "Wraith", "Sprite", "Kappa",
    "Fairy", "Leprechaun", "Kelpie", "Pixie", "Gnome",
    // Hunter
    "Griffin", "Manticore", "Phoenix", "Dragon", "Minotaur",
    "Qilin", "Ammit", "Nue", "Skinwalker", "Chupacabra",
    "Weretiger", "Wyvern", "Roc", "Harpy", "Pegasus",
    "Hippogriff", "Fenrir", "Jaguar", "Satori", "Direwolf",
    "Bear", "Wolf", "Mantis", "Spider", "Rat",
    // Brute
    "Kraken", "Colossus", "Balrog", "Leviathan", "Tarrasque",
    "Titan", "Nephilim", "Behemoth", "Hydra", "Juggernaut",
    "Oni", "Jotunn", "Ettin", "Cyclops", "Giant",
    "Nemean Lion", "Berserker", "Yeti", "Golem", "Ent",
    "Troll", "Bigfoot", "Ogre", "Orc", "Skeleton",
];

const fn band_type(offset: u8) -> BeastType {
    match offset / BAND_SIZE {
        0 => BeastType::Magic,
        1 => BeastType::Hunter,
        _ => BeastType::Brute,
    }
}

const fn build() -> [BeastClass; 76] {
    let mut table = [UNKNOWN; 76];
    let mut offset = 0u8;
    while offset < 75 {
        table[offset as usize + 1] = BeastClass {
            id: offset + 1,
            name: NAMES[offset as usize],
            tier: (offset % BAND_SIZE) / TIER_SIZE + 1,
            beast_type: band_type(offset),
        };
        offset += 1;
    }
    table
}

static BEASTS: [BeastClass; 76] = build();

/// Classify a beast id, falling back to [`UNKNOWN`].
pub fn classify(id: u8) -> &'static BeastClass {
    BEASTS.get(usize::from(id)).unwrap_or(&UNKNOWN)
}

/// Classify a beast id, rejecting id 0 and ids past the table.
pub fn try_classify(id: u8) -> Result<&'static BeastClass, TableError> {
    match BEASTS.get(usize::from(id)) {
        Some(class) if id != 0 => Ok(class),
        _ => Err(TableError::UnknownBeast(id)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_bands() {
        assert_eq!(classify(1).beast_type, BeastType::Magic);
        assert_eq!(classify(25).beast_type, BeastType::Magic);
        assert_eq!(classify(26).beast_type, BeastType::Hunter);
        assert_eq!(classify(50).beast_type, BeastType::Hunter);
        assert_eq!(classify(51).beast_type, BeastType::Brute);
        assert_eq!(classify(75).beast_type, BeastType::Brute);
    }

    #[test]
    fn tier_bands() {
        assert_eq!(classify(1).tier, 1);
        assert_eq!(classify(5).tier, 1);
        assert_eq!(classify(6).tier, 2);
        assert_eq!(classify(20).tier, 4);
        assert_eq!(classify(21).tier, 5);
        assert_eq!(classify(25).tier, 5);
        assert_eq!(classify(26).tier, 1);
        assert_eq!(classify(75).tier, 5);
    }

    #[test]
    fn known_names() {
        assert_eq!(classify(1).name, "Warlock");
        assert_eq!(classify(29).name, "Dragon");
        let wolf = classify(47);
        assert_eq!(wolf.name, "Wolf");
        assert_eq!(wolf.tier, 5);
        assert_eq!(wolf.beast_type, BeastType::Hunter);
        assert_eq!(classify(75).name, "Skeleton");
    }

    #[test]
    fn unknown_ids() {
        assert_eq!(classify(0), &UNKNOWN);
        assert_eq!(classify(76), &UNKNOWN);
        assert_eq!(try_classify(76), Err(TableError::UnknownBeast(76)));
        assert!(try_classify(75).is_ok());
    }
}
