//! Game state derivation service for Loot Survivor agents.
//!
//! The runtime turns indexed snapshot rows into `game-core` entities and serves
//! three read models on top of them:
//!
//! - [`GameStateService::game_state`]: the fully derived [`game_core::GameState`]
//! - [`GameStateService::activity_feed`]: a unified, ordered activity feed
//! - [`GameStateService::context`]: phase-specific XML or JSON agent context
//!
//! Rows come from any [`RowSource`]; [`InMemoryRowSource`] backs tests and
//! fixture files.
pub mod api;
pub mod cache;
pub mod config;
pub mod context;
pub mod feed;
pub mod mapper;
pub mod service;
pub mod source;

pub use api::{ErrorSeverity, GameError, MappingError, Result, RuntimeError, SourceError};
pub use cache::GameStateCache;
pub use config::RuntimeConfig;
pub use context::{ContextField, ContextFormat};
pub use feed::{ActivityFeedEntry, FeedKind, FeedStreams};
pub use service::GameStateService;
pub use source::{GameRows, InMemoryRowSource, Row, RowSource};
