//! Beasts encountered by the adventurer.

use super::item::{SpecialName, tier_power};
use crate::GameConfig;
use crate::tables::{BeastClass, BeastType, ItemType, beasts};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Beast {
    pub id: u8,
    pub health: u32,
    pub level: u32,
    pub seed: u64,
    /// Active specials; empty below the unlock level.
    pub specials: SpecialName,
    pub is_collectable: bool,
}

impl Beast {
    pub fn new(id: u8, health: u32, level: u32) -> Self {
        Self {
            id,
            health,
            level,
            seed: 0,
            specials: SpecialName::NONE,
            is_collectable: false,
        }
    }

    /// Stand-in used when no beast record could be resolved during combat.
    pub fn placeholder(health: u32) -> Self {
        Self::new(0, health, 0)
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_collectable(mut self, is_collectable: bool) -> Self {
        self.is_collectable = is_collectable;
        self
    }

    /// Apply the encoded special indices (`special2`, `special3`).
    ///
    /// Beasts below the unlock level never carry specials, whatever the record says.
    #[must_use]
    pub fn with_specials(mut self, prefix: u8, name_suffix: u8) -> Self {
        self.specials = if self.level >= GameConfig::BEAST_SPECIALS_UNLOCK_LEVEL {
            SpecialName::from_indices(prefix, name_suffix)
        } else {
            SpecialName::NONE
        };
        self
    }

    pub fn class(&self) -> &'static BeastClass {
        beasts::classify(self.id)
    }

    pub fn is_known(&self) -> bool {
        self.class().tier != 0
    }

    pub fn tier(&self) -> u8 {
        self.class().tier
    }

    pub fn beast_type(&self) -> BeastType {
        self.class().beast_type
    }

    pub fn attack_type(&self) -> ItemType {
        self.beast_type().attack_type()
    }

    pub fn armor_type(&self) -> ItemType {
        self.beast_type().armor_type()
    }

    /// `level × (6 − tier)`: both the beast's attack and its armor value.
    pub fn power(&self) -> u32 {
        tier_power(self.level, self.tier())
    }

    pub fn base_name(&self) -> &'static str {
        self.class().name
    }

    pub fn name(&self) -> String {
        match self.specials.words() {
            Some(words) => format!("\"{words}\" {}", self.base_name()),
            None => self.base_name().to_string(),
        }
    }
}
