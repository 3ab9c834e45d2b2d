//! Market offers priced by charisma.

use crate::GameConfig;
use crate::error::TableError;
use crate::tables::{ItemClass, ItemType, Slot, base_price, items};

/// An item offered by the market, priced for a given charisma.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketItem {
    pub id: u8,
    pub price: u32,
}

impl MarketItem {
    /// Price a market id for an adventurer with `charisma`.
    ///
    /// Unknown ids are rejected so a corrupted market list cannot surface "None" items.
    pub fn new(id: u8, charisma: u32) -> Result<Self, TableError> {
        let class = items::try_classify(id)?;
        Ok(Self {
            id,
            price: item_price(class.tier, charisma),
        })
    }

    pub fn class(&self) -> &'static ItemClass {
        items::classify(self.id)
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

    pub fn name(&self) -> &'static str {
        self.class().name
    }
}

/// `max(1, base_price(tier) − charisma)`.
pub fn item_price(tier: u8, charisma: u32) -> u32 {
    base_price(tier)
        .saturating_sub(charisma)
        .max(GameConfig::MIN_PRICE)
}
