//! Row mapping: indexed snapshot rows into `game-core` entities.
//!
//! Each entity declares a [`Schema`] listing its fields as required or defaulted.
//! A row is validated once against its schema, failing with one aggregated
//! [`MappingError::MissingFields`]; after that, typed reads default absent fields
//! to zero.
pub mod adventurer;
pub mod bag;
pub mod beast;
pub mod error;
pub mod market;
pub mod schema;

pub use adventurer::map_adventurer;
pub use bag::map_bag;
pub use beast::map_beast;
pub use error::MappingError;
pub use market::map_market;
pub use schema::{Field, Presence, Record, Schema};
