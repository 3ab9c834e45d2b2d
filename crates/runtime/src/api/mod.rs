//! Public error surface of the runtime.
pub mod errors;

pub use errors::{ErrorSeverity, GameError, MappingError, Result, RuntimeError, SourceError};
