//! Common error infrastructure for game-core.
//!
//! This module provides shared types and traits used across all error types in the
//! workspace. Domain-specific errors are defined next to the code that raises them
//! (e.g. [`TableError`] here, mapping errors in the runtime crate).
//!
//! # Design Principles
//!
//! - **Type Safety**: Each failure source has its own error type with specific variants
//! - **Severity Classification**: Errors are categorized for recovery strategies
//! - **No Panics**: Degenerate arithmetic is clamped, never raised as an error

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: The request can proceed in a degraded form
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Internal**: Unexpected state inconsistencies that require investigation
/// - **Fatal**: The request cannot be served at all
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - the caller may fall back to a placeholder or default.
    ///
    /// Examples: unknown market item id, missing beast record
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: required row field missing, field out of range
    Validation,

    /// Internal error - unexpected state inconsistency.
    Internal,

    /// Fatal error - nothing can be derived for this request.
    ///
    /// Examples: subject row absent, upstream unavailable
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }
}

/// Common trait for all workspace errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Lookup failures in the static classifier tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("unknown item id {0}")]
    UnknownItem(u8),

    #[error("unknown beast id {0}")]
    UnknownBeast(u8),
}

impl GameError for TableError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownItem(_) => "UNKNOWN_ITEM",
            Self::UnknownBeast(_) => "UNKNOWN_BEAST",
        }
    }
}
