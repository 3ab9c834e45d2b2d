//! Classification enums shared by items, beasts, and combat.

/// Item type: attack family for weapons, armor family for armor, or jewelry.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum ItemType {
    #[default]
    None,
    Magic,
    Blade,
    Bludgeon,
    Cloth,
    Hide,
    Metal,
    Ring,
    Necklace,
}

impl ItemType {
    /// The three weapon (attack) families.
    pub const ATTACKS: [ItemType; 3] = [ItemType::Magic, ItemType::Blade, ItemType::Bludgeon];

    /// The three armor (defense) families.
    pub const ARMORS: [ItemType; 3] = [ItemType::Cloth, ItemType::Hide, ItemType::Metal];

    pub const fn is_attack(self) -> bool {
        matches!(self, Self::Magic | Self::Blade | Self::Bludgeon)
    }

    pub const fn is_armor(self) -> bool {
        matches!(self, Self::Cloth | Self::Hide | Self::Metal)
    }
}

/// Equipment slot an item occupies.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Slot {
    #[default]
    None,
    Weapon,
    Chest,
    Head,
    Waist,
    Foot,
    Hand,
    Neck,
    Ring,
}

impl Slot {
    /// Armor slots in the order beasts strike them.
    pub const ARMOR: [Slot; 5] = [Slot::Head, Slot::Chest, Slot::Waist, Slot::Hand, Slot::Foot];

    /// Number of items the contract lists for this slot.
    ///
    /// Feeds the specials derivation, so it must match the contract's item lists.
    pub const fn item_count(self) -> u32 {
        match self {
            Self::Weapon => 18,
            Self::Chest | Self::Head | Self::Waist | Self::Foot | Self::Hand => 15,
            Self::Neck => 3,
            Self::Ring => 5,
            Self::None => 0,
        }
    }
}

/// Beast family, which fixes both its attack and its armor type.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum BeastType {
    #[default]
    None,
    Magic,
    Hunter,
    Brute,
}

impl BeastType {
    pub const fn attack_type(self) -> ItemType {
        match self {
            Self::Magic => ItemType::Magic,
            Self::Hunter => ItemType::Blade,
            Self::Brute => ItemType::Bludgeon,
            Self::None => ItemType::None,
        }
    }

    pub const fn armor_type(self) -> ItemType {
        match self {
            Self::Magic => ItemType::Cloth,
            Self::Hunter => ItemType::Hide,
            Self::Brute => ItemType::Metal,
            Self::None => ItemType::None,
        }
    }
}
