//! Upstream row source abstraction.
//!
//! The runtime never talks to an indexer directly. Every fetch goes through
//! [`RowSource`], so the same derivation runs against a live indexer, a JSON
//! fixture, or the in-memory source used by tests.
pub mod memory;
pub mod row;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use game_core::{ErrorSeverity, GameError};

use crate::feed::FeedStreams;

pub use memory::{GameRows, InMemoryRowSource};
pub use row::Row;

/// Failures raised by row sources.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("row source lock was poisoned")]
    LockPoisoned,

    #[error("row source unavailable: {0}")]
    Unavailable(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GameError for SourceError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::LockPoisoned => ErrorSeverity::Internal,
            _ => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::LockPoisoned => "SOURCE_LOCK_POISONED",
            Self::Unavailable(_) => "SOURCE_UNAVAILABLE",
            Self::Io(_) => "SOURCE_IO",
            Self::Json(_) => "SOURCE_JSON",
        }
    }
}

/// Read access to indexed game data.
///
/// Every lookup returns `Ok(None)` (or an empty collection) when the data simply
/// is not there; `Err` is reserved for the source itself failing.
#[async_trait]
pub trait RowSource: Send + Sync {
    /// Most recent adventurer snapshot for a game.
    async fn adventurer(&self, game_id: u64) -> Result<Option<Row>, SourceError>;

    /// Bag sub-rows, one per carried item.
    async fn bag(&self, game_id: u64) -> Result<Vec<Row>, SourceError>;

    /// Market id list: a JSON array, or a string holding one.
    async fn market(&self, game_id: u64) -> Result<Option<Value>, SourceError>;

    /// Beast record taken from the latest encounter event.
    async fn encounter_beast(&self, game_id: u64) -> Result<Option<Row>, SourceError>;

    /// Beast record looked up directly by game id.
    async fn beast(&self, game_id: u64) -> Result<Option<Row>, SourceError>;

    /// Raw game events and snapshot streams for the activity feed.
    async fn feed(&self, game_id: u64) -> Result<FeedStreams, SourceError>;
}
