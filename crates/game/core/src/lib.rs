//! Deterministic game rules for Loot Survivor state derivation.
//!
//! `game-core` holds the static item and beast tables, the entity types, the combat
//! math, and phase detection. Every function is pure and I/O free so the same rules
//! can back the runtime service, offline tools, and tests. Callers normally build a
//! [`GameState`] with [`GameState::derive`] and read everything else from it.
pub mod combat;
pub mod config;
pub mod error;
pub mod phase;
pub mod state;
pub mod tables;

pub use combat::{
    BeastDamage, CollectableTraits, CombatPreview, EncounterChances, OutcomeEstimate,
    PlayerDamage, SlotDamage, Victor,
};
pub use config::GameConfig;
pub use error::{ErrorSeverity, GameError, TableError};
pub use phase::Phase;
pub use state::{
    Adventurer, Bag, Beast, Equipment, GameState, Item, ItemSpecials, MarketItem, SpecialName,
    Stats,
};
pub use tables::{BeastClass, BeastType, ItemClass, ItemType, Slot};
