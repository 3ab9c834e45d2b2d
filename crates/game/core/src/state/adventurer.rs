//! The adventurer: stats, equipment, and bag.

use arrayvec::ArrayVec;

use super::item::Item;
use super::level::level_from_xp;
use crate::GameConfig;
use crate::tables::Slot;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stats {
    pub strength: u32,
    pub dexterity: u32,
    pub vitality: u32,
    pub intelligence: u32,
    pub wisdom: u32,
    pub charisma: u32,
    pub luck: u32,
}

/// Eight fixed equipment slots.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equipment {
    pub weapon: Option<Item>,
    pub chest: Option<Item>,
    pub head: Option<Item>,
    pub waist: Option<Item>,
    pub foot: Option<Item>,
    pub hand: Option<Item>,
    pub neck: Option<Item>,
    pub ring: Option<Item>,
}

impl Equipment {
    /// Slots in their canonical display order.
    pub const SLOTS: [Slot; 8] = [
        Slot::Weapon,
        Slot::Chest,
        Slot::Head,
        Slot::Waist,
        Slot::Foot,
        Slot::Hand,
        Slot::Neck,
        Slot::Ring,
    ];

    pub fn get(&self, slot: Slot) -> Option<&Item> {
        match slot {
            Slot::Weapon => self.weapon.as_ref(),
            Slot::Chest => self.chest.as_ref(),
            Slot::Head => self.head.as_ref(),
            Slot::Waist => self.waist.as_ref(),
            Slot::Foot => self.foot.as_ref(),
            Slot::Hand => self.hand.as_ref(),
            Slot::Neck => self.neck.as_ref(),
            Slot::Ring => self.ring.as_ref(),
            Slot::None => None,
        }
    }

    fn slot_mut(&mut self, slot: Slot) -> Option<&mut Option<Item>> {
        match slot {
            Slot::Weapon => Some(&mut self.weapon),
            Slot::Chest => Some(&mut self.chest),
            Slot::Head => Some(&mut self.head),
            Slot::Waist => Some(&mut self.waist),
            Slot::Foot => Some(&mut self.foot),
            Slot::Hand => Some(&mut self.hand),
            Slot::Neck => Some(&mut self.neck),
            Slot::Ring => Some(&mut self.ring),
            Slot::None => None,
        }
    }

    /// Place an item in the slot its id classifies to.
    ///
    /// Returns the item back if it has no slot (id 0 or unknown id).
    pub fn equip(&mut self, item: Item) -> Result<(), Item> {
        match self.slot_mut(item.slot()) {
            Some(slot) => {
                *slot = Some(item);
                Ok(())
            }
            None => Err(item),
        }
    }

    /// Equipped items in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Slot, &Item)> {
        Self::SLOTS
            .into_iter()
            .filter_map(|slot| self.get(slot).map(|item| (slot, item)))
    }

    /// The item in `slot`, if it has the given id.
    pub fn holds(&self, slot: Slot, id: u8) -> Option<&Item> {
        self.get(slot).filter(|item| item.id == id)
    }
}

/// Items carried but not equipped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bag {
    items: ArrayVec<Item, { GameConfig::MAX_BAG_ITEMS }>,
}

impl Bag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item, returning it back when the bag is full.
    pub fn push(&mut self, item: Item) -> Result<(), Item> {
        self.items.try_push(item).map_err(|err| err.element())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Adventurer {
    pub health: u32,
    pub xp: u32,
    pub gold: u32,
    pub beast_health: u32,
    pub stat_upgrades_available: u32,
    pub item_specials_seed: u16,
    pub action_count: u32,
    pub stats: Stats,
    pub equipment: Equipment,
}

impl Adventurer {
    pub fn level(&self) -> u32 {
        level_from_xp(self.xp)
    }

    pub fn is_dead(&self) -> bool {
        self.health == 0
    }

    pub fn in_battle(&self) -> bool {
        self.beast_health > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equip_routes_by_slot() {
        let mut equipment = Equipment::default();
        equipment.equip(Item::new(9, 9)).unwrap();
        equipment.equip(Item::new(3, 1)).unwrap();
        equipment.equip(Item::new(86, 4)).unwrap();
        assert_eq!(equipment.weapon.map(|item| item.id), Some(9));
        assert_eq!(equipment.neck.map(|item| item.id), Some(3));
        assert_eq!(equipment.head.map(|item| item.id), Some(86));

        let slots: Vec<Slot> = equipment.iter().map(|(slot, _)| slot).collect();
        assert_eq!(slots, vec![Slot::Weapon, Slot::Head, Slot::Neck]);
    }

    #[test]
    fn equip_rejects_unknown_ids() {
        let mut equipment = Equipment::default();
        assert_eq!(equipment.equip(Item::new(0, 0)), Err(Item::new(0, 0)));
        assert_eq!(equipment.equip(Item::new(150, 0)), Err(Item::new(150, 0)));
    }

    #[test]
    fn bag_caps_at_fifteen() {
        let mut bag = Bag::new();
        for id in 1..=15 {
            bag.push(Item::new(id, 0)).unwrap();
        }
        assert_eq!(bag.len(), 15);
        assert_eq!(bag.push(Item::new(16, 0)), Err(Item::new(16, 0)));
    }
}
