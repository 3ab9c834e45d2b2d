//! Caller-owned cache of derived game states.

use std::collections::HashMap;
use std::sync::RwLock;

use game_core::GameState;

use crate::source::SourceError;

/// Derived states keyed by game id.
///
/// An entry is valid only while the game's latest row carries the same
/// `action_count` it was derived from. A different count, or an explicit
/// [`invalidate`](Self::invalidate), evicts it.
#[derive(Default)]
pub struct GameStateCache {
    entries: RwLock<HashMap<u64, GameState>>,
}

impl GameStateCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached state for `game_id`, if derived at `action_count`.
    ///
    /// A stale entry is evicted on the way out.
    pub fn get(
        &self,
        game_id: u64,
        action_count: u32,
    ) -> Result<Option<GameState>, SourceError> {
        {
            let entries = self.entries.read().map_err(|_| SourceError::LockPoisoned)?;
            match entries.get(&game_id) {
                None => return Ok(None),
                Some(state) if state.adventurer.action_count == action_count => {
                    return Ok(Some(state.clone()));
                }
                Some(_) => {}
            }
        }
        self.invalidate(game_id)?;
        Ok(None)
    }

    pub fn insert(&self, state: GameState) -> Result<(), SourceError> {
        let mut entries = self.entries.write().map_err(|_| SourceError::LockPoisoned)?;
        entries.insert(state.game_id, state);
        Ok(())
    }

    pub fn invalidate(&self, game_id: u64) -> Result<(), SourceError> {
        let mut entries = self.entries.write().map_err(|_| SourceError::LockPoisoned)?;
        if entries.remove(&game_id).is_some() {
            tracing::debug!(game_id, "evicted cached game state");
        }
        Ok(())
    }

    pub fn clear(&self) -> Result<(), SourceError> {
        let mut entries = self.entries.write().map_err(|_| SourceError::LockPoisoned)?;
        entries.clear();
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{Adventurer, Bag};

    fn state(game_id: u64, action_count: u32) -> GameState {
        let adventurer = Adventurer {
            health: 10,
            action_count,
            ..Adventurer::default()
        };
        GameState::derive(game_id, adventurer, Bag::new(), Vec::new(), None)
    }

    #[test]
    fn hit_requires_same_action_count() {
        let cache = GameStateCache::new();
        cache.insert(state(1, 5)).unwrap();
        assert!(cache.get(1, 5).unwrap().is_some());
        assert!(cache.get(2, 5).unwrap().is_none());
    }

    #[test]
    fn stale_entry_is_evicted() {
        let cache = GameStateCache::new();
        cache.insert(state(1, 5)).unwrap();
        assert!(cache.get(1, 6).unwrap().is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn explicit_invalidate() {
        let cache = GameStateCache::new();
        cache.insert(state(1, 5)).unwrap();
        cache.insert(state(2, 1)).unwrap();
        cache.invalidate(1).unwrap();
        assert!(cache.get(1, 5).unwrap().is_none());
        assert_eq!(cache.len(), 1);
        cache.clear().unwrap();
        assert!(cache.is_empty());
    }
}
