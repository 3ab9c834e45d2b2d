//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from row sources and row mapping so clients can bubble them
//! up with consistent context.
pub use game_core::{ErrorSeverity, GameError};
use thiserror::Error;

pub use crate::mapper::MappingError;
pub use crate::source::SourceError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    /// No adventurer row exists for the game. Not retried.
    #[error("game {game_id} not found")]
    NotFound { game_id: u64 },

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Mapping(#[from] MappingError),

    #[error("failed to encode context: {0}")]
    Encode(#[from] serde_json::Error),
}

impl RuntimeError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotFound { .. } => ErrorSeverity::Fatal,
            Self::Source(err) => err.severity(),
            Self::Mapping(err) => err.severity(),
            Self::Encode(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "GAME_NOT_FOUND",
            Self::Source(err) => err.error_code(),
            Self::Mapping(err) => err.error_code(),
            Self::Encode(_) => "CONTEXT_ENCODE",
        }
    }
}
