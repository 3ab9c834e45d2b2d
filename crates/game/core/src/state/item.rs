//! Items and their special names.

use super::level::level_from_xp;
use crate::GameConfig;
use crate::tables::{ItemClass, ItemType, Slot, items, specials};

/// Two-word special name shared by items and beasts ("Agony Bane").
///
/// Combat compares these component-wise: a prefix match and a name-suffix match
/// each grant their own multiplier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpecialName {
    pub prefix: Option<u8>,
    pub name_suffix: Option<u8>,
}

impl SpecialName {
    pub const NONE: Self = Self {
        prefix: None,
        name_suffix: None,
    };

    /// Build from raw indices, treating 0 as absent.
    pub fn from_indices(prefix: u8, name_suffix: u8) -> Self {
        Self {
            prefix: (prefix != 0).then_some(prefix),
            name_suffix: (name_suffix != 0).then_some(name_suffix),
        }
    }

    pub fn prefix_matches(&self, other: &SpecialName) -> bool {
        self.prefix.is_some() && self.prefix == other.prefix
    }

    pub fn name_suffix_matches(&self, other: &SpecialName) -> bool {
        self.name_suffix.is_some() && self.name_suffix == other.name_suffix
    }

    /// Rendered "Prefix Suffix" words, if any part is present.
    pub fn words(&self) -> Option<String> {
        let parts: Vec<&str> = [
            self.prefix.and_then(specials::name_prefix),
            self.name_suffix.and_then(specials::name_suffix),
        ]
        .into_iter()
        .flatten()
        .collect();
        (!parts.is_empty()).then(|| parts.join(" "))
    }
}

/// Specials revealed on an item at its current level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemSpecials {
    /// "of Power" style suffix, revealed at level 15.
    pub suffix: Option<u8>,
    /// Two-word name, revealed at level 19.
    pub name: SpecialName,
}

impl ItemSpecials {
    /// Derive the specials visible for `item_id` at `level` under `seed`.
    pub fn derive(item_id: u8, level: u32, seed: u16) -> Self {
        let Some(indices) = specials::derive(item_id, seed) else {
            return Self::default();
        };
        let mut out = Self::default();
        if level >= GameConfig::SUFFIX_UNLOCK_LEVEL {
            out.suffix = Some(indices.suffix);
        }
        if level >= GameConfig::PREFIX_UNLOCK_LEVEL {
            out.name = SpecialName::from_indices(indices.prefix, indices.name_suffix);
        }
        out
    }

    pub fn suffix_name(&self) -> Option<&'static str> {
        self.suffix.and_then(specials::item_suffix_name)
    }
}

/// An owned item instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub id: u8,
    pub xp: u32,
    pub specials: ItemSpecials,
}

impl Item {
    /// Create an item with no specials revealed.
    pub fn new(id: u8, xp: u32) -> Self {
        Self {
            id,
            xp,
            specials: ItemSpecials::default(),
        }
    }

    /// Reveal specials using the owning adventurer's item specials seed.
    #[must_use]
    pub fn with_specials_seed(mut self, seed: u16) -> Self {
        self.specials = ItemSpecials::derive(self.id, self.level(), seed);
        self
    }

    pub fn class(&self) -> &'static ItemClass {
        items::classify(self.id)
    }

    pub fn level(&self) -> u32 {
        level_from_xp(self.xp)
    }

    pub fn tier(&self) -> u8 {
        self.class().tier
    }

    pub fn item_type(&self) -> ItemType {
        self.class().item_type
    }

    pub fn slot(&self) -> Slot {
        self.class().slot
    }

    pub fn base_name(&self) -> &'static str {
        self.class().name
    }

    /// `level × (6 − tier)`: attack for weapons, armor value for armor.
    pub fn power(&self) -> u32 {
        tier_power(self.level(), self.tier())
    }

    /// Full display name with every revealed special.
    pub fn name(&self) -> String {
        let mut name = String::new();
        if let Some(words) = self.specials.name.words() {
            name.push_str(&words);
            name.push(' ');
        }
        name.push_str(self.base_name());
        if let Some(suffix) = self.specials.suffix_name() {
            name.push(' ');
            name.push_str(suffix);
        }
        name
    }
}

/// `level × (6 − tier)`, or 0 for an unclassified tier.
pub(crate) fn tier_power(level: u32, tier: u8) -> u32 {
    if tier == 0 || tier > 5 {
        return 0;
    }
    level.saturating_mul(6 - u32::from(tier))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_uses_level_and_tier() {
        let wand = Item::new(9, 9);
        assert_eq!(wand.level(), 3);
        assert_eq!(wand.tier(), 1);
        assert_eq!(wand.power(), 15);
        assert_eq!(Item::new(0, 100).power(), 0);
    }

    #[test]
    fn specials_respect_unlock_levels() {
        let seed = 4_242;
        let low = Item::new(42, 14 * 14).with_specials_seed(seed);
        assert_eq!(low.specials, ItemSpecials::default());
        assert_eq!(low.name(), "Katana");

        let mid = Item::new(42, 15 * 15).with_specials_seed(seed);
        assert!(mid.specials.suffix.is_some());
        assert_eq!(mid.specials.name, SpecialName::NONE);
        assert!(mid.name().starts_with("Katana of "));

        let high = Item::new(42, 19 * 19).with_specials_seed(seed);
        assert!(high.specials.name.prefix.is_some());
        assert!(high.specials.name.name_suffix.is_some());
        assert!(high.name().contains(" Katana of "));
    }

    #[test]
    fn special_name_matching_requires_presence() {
        let none = SpecialName::NONE;
        assert!(!none.prefix_matches(&none));
        let agony_bane = SpecialName::from_indices(1, 1);
        assert!(agony_bane.prefix_matches(&SpecialName::from_indices(1, 2)));
        assert!(!agony_bane.name_suffix_matches(&SpecialName::from_indices(1, 2)));
        assert_eq!(agony_bane.words().as_deref(), Some("Agony Bane"));
    }
}
