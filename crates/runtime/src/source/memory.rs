//! In-memory RowSource implementation for tests and fixtures.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Row, RowSource, SourceError};
use crate::feed::FeedStreams;

/// Everything the indexer holds for one game.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameRows {
    pub adventurer: Option<Row>,
    pub bag: Vec<Row>,
    pub market: Option<Value>,
    pub encounter_beast: Option<Row>,
    pub beast: Option<Row>,
    pub feed: FeedStreams,
}

/// In-memory implementation of RowSource, keyed by game id.
pub struct InMemoryRowSource {
    games: RwLock<HashMap<u64, GameRows>>,
}

impl InMemoryRowSource {
    pub fn new() -> Self {
        Self {
            games: RwLock::new(HashMap::new()),
        }
    }

    pub fn from_games(games: HashMap<u64, GameRows>) -> Self {
        Self {
            games: RwLock::new(games),
        }
    }

    /// Insert or replace the rows of one game.
    pub fn insert(&self, game_id: u64, rows: GameRows) -> Result<(), SourceError> {
        let mut games = self.games.write().map_err(|_| SourceError::LockPoisoned)?;
        games.insert(game_id, rows);
        Ok(())
    }

    /// Apply `update` to the rows of one game, creating them if absent.
    pub fn update<F>(&self, game_id: u64, update: F) -> Result<(), SourceError>
    where
        F: FnOnce(&mut GameRows),
    {
        let mut games = self.games.write().map_err(|_| SourceError::LockPoisoned)?;
        update(games.entry(game_id).or_default());
        Ok(())
    }

    fn read<T>(
        &self,
        game_id: u64,
        pick: impl FnOnce(&GameRows) -> T,
    ) -> Result<Option<T>, SourceError> {
        let games = self.games.read().map_err(|_| SourceError::LockPoisoned)?;
        Ok(games.get(&game_id).map(pick))
    }
}

impl Default for InMemoryRowSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RowSource for InMemoryRowSource {
    async fn adventurer(&self, game_id: u64) -> Result<Option<Row>, SourceError> {
        Ok(self.read(game_id, |rows| rows.adventurer.clone())?.flatten())
    }

    async fn bag(&self, game_id: u64) -> Result<Vec<Row>, SourceError> {
        Ok(self.read(game_id, |rows| rows.bag.clone())?.unwrap_or_default())
    }

    async fn market(&self, game_id: u64) -> Result<Option<Value>, SourceError> {
        Ok(self.read(game_id, |rows| rows.market.clone())?.flatten())
    }

    async fn encounter_beast(&self, game_id: u64) -> Result<Option<Row>, SourceError> {
        Ok(self
            .read(game_id, |rows| rows.encounter_beast.clone())?
            .flatten())
    }

    async fn beast(&self, game_id: u64) -> Result<Option<Row>, SourceError> {
        Ok(self.read(game_id, |rows| rows.beast.clone())?.flatten())
    }

    async fn feed(&self, game_id: u64) -> Result<FeedStreams, SourceError> {
        Ok(self.read(game_id, |rows| rows.feed.clone())?.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unknown_game_is_empty() {
        let source = InMemoryRowSource::new();
        assert!(source.adventurer(1).await.unwrap().is_none());
        assert!(source.bag(1).await.unwrap().is_empty());
        assert_eq!(source.feed(1).await.unwrap(), FeedStreams::default());
    }

    #[tokio::test]
    async fn update_creates_and_mutates() {
        let source = InMemoryRowSource::new();
        source
            .update(3, |rows| {
                rows.adventurer = Some(Row::new().with("details.adventurer.health", 10));
            })
            .unwrap();
        let row = source.adventurer(3).await.unwrap().unwrap();
        assert!(row.contains("details.adventurer.health"));
    }
}
