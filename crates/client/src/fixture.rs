//! JSON fixture files standing in for a live indexer.
//!
//! A fixture is an object keyed by game id, each value holding that game's rows:
//!
//! ```json
//! { "42": { "adventurer": { "details": { "adventurer": { "health": 99, "xp": 19 } } },
//!           "market": [42, 21],
//!           "feed": { "events": [] } } }
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use runtime::{GameRows, InMemoryRowSource, SourceError};

pub fn load(path: &Path) -> Result<InMemoryRowSource, SourceError> {
    let text = fs::read_to_string(path)?;
    let games = parse(&text)?;
    tracing::info!(path = %path.display(), games = games.len(), "loaded fixture");
    Ok(InMemoryRowSource::from_games(games))
}

fn parse(text: &str) -> Result<HashMap<u64, GameRows>, SourceError> {
    Ok(serde_json::from_str(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_games_keyed_by_id() {
        let games = parse(r#"{ "42": { "market": "[1, 2]" }, "7": {} }"#).unwrap();
        assert_eq!(games.len(), 2);
        assert!(games[&42].market.is_some());
        assert_eq!(games[&7], GameRows::default());
    }

    #[test]
    fn rejects_non_numeric_ids() {
        assert!(matches!(
            parse(r#"{ "abc": {} }"#),
            Err(SourceError::Json(_))
        ));
    }
}
