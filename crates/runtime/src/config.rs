//! Runtime configuration and environment loading.
use std::env;

/// Tunables for [`GameStateService`](crate::GameStateService).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Entries kept in the activity feed.
    pub feed_limit: usize,
    /// Reuse derived states while the action count is unchanged.
    pub cache_enabled: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            feed_limit: Self::DEFAULT_FEED_LIMIT,
            cache_enabled: false,
        }
    }
}

impl RuntimeConfig {
    pub const DEFAULT_FEED_LIMIT: usize = 10;

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SURVIVOR_FEED_LIMIT` - Activity feed entries to keep (default: 10)
    /// - `SURVIVOR_CACHE` - Enable the game state cache: true/false, 1/0, yes/no, on/off (default: false)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(limit) = read_env::<usize>("SURVIVOR_FEED_LIMIT") {
            config.feed_limit = limit.max(1);
        }

        if let Some(enable) = read_env_bool("SURVIVOR_CACHE") {
            config.cache_enabled = enable;
        }

        config
    }

    #[must_use]
    pub fn with_feed_limit(mut self, limit: usize) -> Self {
        self.feed_limit = limit.max(1);
        self
    }

    #[must_use]
    pub fn with_cache(mut self, enabled: bool) -> Self {
        self.cache_enabled = enabled;
        self
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    parse_bool(&env::var(key).ok()?)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
