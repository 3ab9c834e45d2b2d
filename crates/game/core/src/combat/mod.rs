//! Combat math.
//!
//! Pure functions over an [`Adventurer`](crate::state::Adventurer) and a
//! [`Beast`](crate::state::Beast). Everything is integer arithmetic with floor
//! semantics; nothing here fails or mutates state.
//!
//! # Core Functions
//!
//! - `elemental_adjusted_damage`: type advantage between attack and armor families
//! - `player_damage`: base and critical damage the adventurer deals
//! - `beast_damage`: per-slot damage the beast deals, plus protection percentage
//! - `EncounterChances::for_adventurer`: flee, ambush, and critical chances
//! - `estimate`: rounds and damage for fighting to the end
//! - `CombatPreview::compute`: all of the above bundled for one encounter

pub mod bonus;
pub mod chance;
pub mod collectable;
pub mod damage;
pub mod defense;
pub mod elemental;
pub mod outcome;
pub mod preview;

pub use chance::{EncounterChances, ambush_chance, crit_chance, flee_chance};
pub use collectable::CollectableTraits;
pub use damage::{PlayerDamage, player_damage};
pub use defense::{BeastDamage, SlotDamage, beast_damage, max_slot_damage, protection_percent};
pub use elemental::{Effectiveness, effectiveness, elemental_adjusted_damage};
pub use outcome::{OutcomeEstimate, Victor, estimate};
pub use preview::CombatPreview;
