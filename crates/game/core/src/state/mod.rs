//! Game entities reconstructed from indexed snapshots.
//!
//! Values here are plain data: the runtime maps rows into them and the combat
//! module reads them. [`GameState`] bundles one game's entities with its phase and
//! combat preview.
pub mod adventurer;
pub mod beast;
pub mod game;
pub mod item;
pub mod level;
pub mod market;

pub use adventurer::{Adventurer, Bag, Equipment, Stats};
pub use beast::Beast;
pub use game::GameState;
pub use item::{Item, ItemSpecials, SpecialName};
pub use level::level_from_xp;
pub use market::{MarketItem, item_price};
