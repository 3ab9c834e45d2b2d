//! Agent-facing context rendering.
//!
//! A [`GameState`] plus its recent activity feed rendered either as a compact
//! phase-specific XML line ([`xml`]) or a structured JSON document ([`json`]).
//! Both renderings read numbers from the same derived state, so every value in
//! one appears unchanged in the other.
pub mod json;
pub mod xml;

use game_core::GameState;

use crate::feed::ActivityFeedEntry;

pub use json::ContextView;

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ContextFormat {
    #[default]
    Xml,
    Json,
}

/// Top-level sections of the JSON context, usable as an allow-list.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "camelCase")]
pub enum ContextField {
    Game,
    Adventurer,
    CurrentBeast,
    DamagePreview,
    Market,
    RecentEvents,
}

/// Render `state` in `format`.
///
/// `fields` restricts the JSON output to the named sections; the XML shape is
/// fixed per phase and ignores it.
pub fn render(
    state: &GameState,
    feed: &[ActivityFeedEntry],
    format: ContextFormat,
    fields: &[ContextField],
) -> Result<String, serde_json::Error> {
    match format {
        ContextFormat::Xml => Ok(xml::render(state, feed)),
        ContextFormat::Json => json::render(state, feed, fields),
    }
}

/// Live beast health: the adventurer's fight counter, or the beast record's.
pub(crate) fn remaining_beast_health(state: &GameState) -> u32 {
    match state.beast.as_ref() {
        Some(_) if state.adventurer.beast_health > 0 => state.adventurer.beast_health,
        Some(beast) => beast.health,
        None => 0,
    }
}
