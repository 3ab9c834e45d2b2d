//! Per-entity field schemas, validated once at the mapping boundary.

use serde_json::Value;

use super::error::MappingError;
use crate::source::Row;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Presence {
    /// Absence fails mapping.
    Required,
    /// Absence reads as 0 / false.
    Defaulted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Field {
    pub key: &'static str,
    pub presence: Presence,
}

impl Field {
    pub const fn required(key: &'static str) -> Self {
        Self {
            key,
            presence: Presence::Required,
        }
    }

    pub const fn defaulted(key: &'static str) -> Self {
        Self {
            key,
            presence: Presence::Defaulted,
        }
    }
}

/// Declared fields of one entity.
#[derive(Clone, Copy, Debug)]
pub struct Schema {
    pub entity: &'static str,
    pub fields: &'static [Field],
}

impl Schema {
    pub fn declares(&self, key: &str) -> bool {
        self.fields.iter().any(|field| field.key == key)
    }

    /// Check every required field at once.
    ///
    /// Returns a [`Record`] for typed reads, or a single
    /// [`MappingError::MissingFields`] naming every absent required key.
    pub fn validate<'r>(&'static self, row: &'r Row) -> Result<Record<'r>, MappingError> {
        let missing: Vec<&'static str> = self
            .fields
            .iter()
            .filter(|field| field.presence == Presence::Required && !row.contains(field.key))
            .map(|field| field.key)
            .collect();

        if !missing.is_empty() {
            return Err(MappingError::MissingFields {
                entity: self.entity,
                fields: missing,
            });
        }
        Ok(Record { schema: self, row })
    }
}

/// A row that passed validation, read through its schema.
pub struct Record<'r> {
    schema: &'static Schema,
    row: &'r Row,
}

impl Record<'_> {
    pub fn u64(&self, key: &'static str) -> Result<u64, MappingError> {
        debug_assert!(self.schema.declares(key), "undeclared field {key}");
        match self.row.get(key) {
            None => Ok(0),
            Some(value) => parse_u64(value).ok_or_else(|| self.invalid(key, value)),
        }
    }

    pub fn u32(&self, key: &'static str) -> Result<u32, MappingError> {
        self.narrow(key)
    }

    pub fn u16(&self, key: &'static str) -> Result<u16, MappingError> {
        self.narrow(key)
    }

    pub fn u8(&self, key: &'static str) -> Result<u8, MappingError> {
        self.narrow(key)
    }

    pub fn bool(&self, key: &'static str) -> Result<bool, MappingError> {
        debug_assert!(self.schema.declares(key), "undeclared field {key}");
        match self.row.get(key) {
            None => Ok(false),
            Some(Value::Bool(flag)) => Ok(*flag),
            Some(Value::String(text)) if text.eq_ignore_ascii_case("true") => Ok(true),
            Some(Value::String(text)) if text.eq_ignore_ascii_case("false") => Ok(false),
            Some(value) => match parse_u64(value) {
                Some(0) => Ok(false),
                Some(1) => Ok(true),
                _ => Err(self.invalid(key, value)),
            },
        }
    }

    fn narrow<T: TryFrom<u64>>(&self, key: &'static str) -> Result<T, MappingError> {
        let wide = self.u64(key)?;
        T::try_from(wide).map_err(|_| MappingError::InvalidField {
            entity: self.schema.entity,
            field: key,
            value: wide.to_string(),
        })
    }

    fn invalid(&self, key: &'static str, value: &Value) -> MappingError {
        MappingError::InvalidField {
            entity: self.schema.entity,
            field: key,
            value: value.to_string(),
        }
    }
}

/// Accept JSON numbers, decimal strings, and `0x` hex strings.
fn parse_u64(value: &Value) -> Option<u64> {
    match value {
        Value::Number(number) => number.as_u64(),
        Value::String(text) => {
            let text = text.trim();
            match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
                Some(hex) => u64::from_str_radix(hex, 16).ok(),
                None => text.parse().ok(),
            }
        }
        _ => None,
    }
}
