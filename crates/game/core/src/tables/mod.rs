//! Classifier tables: pure id → {tier, type, slot, name} lookups.
//!
//! All tables are `static` and indexed directly by id, so classification never
//! repeats range comparisons at call sites.

pub mod beasts;
pub mod items;
pub mod kinds;
pub mod specials;

pub use beasts::BeastClass;
pub use items::{ItemClass, base_price};
pub use kinds::{BeastType, ItemType, Slot};
pub use specials::SpecialIndices;
