//! Error types raised while mapping rows into domain entities.

use game_core::{ErrorSeverity, GameError};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MappingError {
    /// Every required key absent from the row, reported together.
    #[error("{entity} row is missing required fields: {}", fields.join(", "))]
    MissingFields {
        entity: &'static str,
        fields: Vec<&'static str>,
    },

    #[error("{entity} field {field} has invalid value {value}")]
    InvalidField {
        entity: &'static str,
        field: &'static str,
        value: String,
    },
}

impl GameError for MappingError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingFields { .. } => "MAPPING_MISSING_FIELDS",
            Self::InvalidField { .. } => "MAPPING_INVALID_FIELD",
        }
    }
}
