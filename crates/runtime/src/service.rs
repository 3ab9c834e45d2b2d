//! Request-level orchestration: fetch rows, map them, derive state.

use game_core::{Beast, GameState, Phase};

use crate::api::{Result, RuntimeError};
use crate::cache::GameStateCache;
use crate::config::RuntimeConfig;
use crate::context::{self, ContextField, ContextFormat};
use crate::feed::{self, ActivityFeedEntry};
use crate::mapper::{map_adventurer, map_bag, map_beast, map_market};
use crate::source::{Row, RowSource, SourceError};

/// Derives game state, activity feeds, and agent context for one row source.
///
/// Every request rebuilds state from the latest rows. With the cache enabled, a
/// state derived at the same `action_count` is reused instead.
pub struct GameStateService<S> {
    source: S,
    config: RuntimeConfig,
    cache: Option<GameStateCache>,
}

impl<S: RowSource> GameStateService<S> {
    pub fn new(source: S) -> Self {
        Self::with_config(source, RuntimeConfig::default())
    }

    pub fn with_config(source: S, config: RuntimeConfig) -> Self {
        let cache = config.cache_enabled.then(GameStateCache::new);
        Self {
            source,
            config,
            cache,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn cache(&self) -> Option<&GameStateCache> {
        self.cache.as_ref()
    }

    /// Derive the current [`GameState`] for `game_id`.
    ///
    /// Fails with [`RuntimeError::NotFound`] when the game has no adventurer row
    /// and with a mapping error when that row lacks required fields. Missing bag,
    /// market, or beast data degrades to empty values with a warning.
    pub async fn game_state(&self, game_id: u64) -> Result<GameState> {
        let row = self
            .source
            .adventurer(game_id)
            .await?
            .ok_or(RuntimeError::NotFound { game_id })?;
        let adventurer = map_adventurer(&row)?;

        if let Some(cache) = &self.cache {
            if let Some(state) = cache.get(game_id, adventurer.action_count)? {
                tracing::debug!(game_id, action_count = adventurer.action_count, "cache hit");
                return Ok(state);
            }
        }

        let in_combat = Phase::of(&adventurer) == Phase::Combat;
        let (bag_rows, market, beast) = tokio::try_join!(
            self.source.bag(game_id),
            self.source.market(game_id),
            self.resolve_beast(game_id, in_combat),
        )?;

        let bag = map_bag(&bag_rows, adventurer.item_specials_seed);
        let market = map_market(market.as_ref(), adventurer.stats.charisma);
        let state = GameState::derive(game_id, adventurer, bag, market, beast);

        tracing::debug!(
            game_id,
            phase = %state.phase,
            level = state.level(),
            bag = state.bag.len(),
            market = state.market.len(),
            "derived game state"
        );

        if let Some(cache) = &self.cache {
            cache.insert(state.clone())?;
        }
        Ok(state)
    }

    /// The most recent [`RuntimeConfig::feed_limit`] feed entries, newest first.
    pub async fn activity_feed(&self, game_id: u64) -> Result<Vec<ActivityFeedEntry>> {
        let streams = self.source.feed(game_id).await?;
        Ok(feed::unify(&streams, self.config.feed_limit))
    }

    /// Render the agent context for `game_id`.
    pub async fn context(
        &self,
        game_id: u64,
        format: ContextFormat,
        fields: &[ContextField],
    ) -> Result<String> {
        let state = self.game_state(game_id).await?;
        let feed = self.activity_feed(game_id).await?;
        Ok(context::render(&state, &feed, format, fields)?)
    }

    /// Current opponent, tried from the encounter event first, then the beast
    /// record. Outside combat nothing is fetched.
    async fn resolve_beast(
        &self,
        game_id: u64,
        in_combat: bool,
    ) -> std::result::Result<Option<Beast>, SourceError> {
        if !in_combat {
            return Ok(None);
        }

        let encounter = self.source.encounter_beast(game_id).await?;
        if let Some(beast) = mapped_beast(game_id, "encounter", encounter) {
            return Ok(Some(beast));
        }
        let record = self.source.beast(game_id).await?;
        if let Some(beast) = mapped_beast(game_id, "beast", record) {
            return Ok(Some(beast));
        }

        tracing::warn!(game_id, "no beast record for active combat; using placeholder");
        Ok(None)
    }
}

fn mapped_beast(game_id: u64, origin: &'static str, row: Option<Row>) -> Option<Beast> {
    let row = row?;
    match map_beast(&row) {
        Ok(beast) => Some(beast),
        Err(err) => {
            tracing::warn!(game_id, origin, error = %err, "ignoring unusable beast row");
            None
        }
    }
}
