//! Snapshot rows as delivered by the indexer.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One indexed snapshot row.
///
/// Keys are dotted paths of the form `details.<entity>.<field>`. Indexers deliver
/// either a flat map of those paths or the equivalent nested document; [`Row::get`]
/// accepts both so mappers never care which one arrived.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row(Map<String, Value>);

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a JSON object. Any other value yields `None`.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Value at a dotted path. `null` counts as absent.
    pub fn get(&self, path: &str) -> Option<&Value> {
        let value = match self.0.get(path) {
            Some(value) => value,
            None => self.walk(path)?,
        };
        (!value.is_null()).then_some(value)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn walk(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let mut current = self.0.get(segments.next()?)?;
        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn flat_and_nested_paths_agree() {
        let flat = Row::new().with("details.adventurer.health", 99);
        let nested = Row::from_value(json!({"details": {"adventurer": {"health": 99}}})).unwrap();
        assert_eq!(flat.get("details.adventurer.health"), Some(&json!(99)));
        assert_eq!(nested.get("details.adventurer.health"), Some(&json!(99)));
    }

    #[test]
    fn null_is_absent() {
        let row = Row::new().with("details.beast.seed", Value::Null);
        assert!(!row.contains("details.beast.seed"));
        assert!(!row.contains("details.beast.id"));
    }

    #[test]
    fn non_objects_are_rejected() {
        assert!(Row::from_value(json!([1, 2])).is_none());
    }
}
