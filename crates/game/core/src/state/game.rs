//! Derived per-request game state.

use super::{Adventurer, Bag, Beast, MarketItem};
use crate::combat::{CombatPreview, EncounterChances};
use crate::phase::Phase;

/// Everything derived for one game from its latest snapshot.
///
/// Rebuilt from scratch on every request; nothing here is carried between requests.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub game_id: u64,
    pub phase: Phase,
    pub adventurer: Adventurer,
    pub bag: Bag,
    pub market: Vec<MarketItem>,
    /// Current opponent; a placeholder when in combat with an unresolved beast.
    pub beast: Option<Beast>,
    pub chances: EncounterChances,
    /// Present only in combat against a known beast.
    pub preview: Option<CombatPreview>,
}

impl GameState {
    pub fn derive(
        game_id: u64,
        adventurer: Adventurer,
        bag: Bag,
        market: Vec<MarketItem>,
        beast: Option<Beast>,
    ) -> Self {
        let phase = Phase::of(&adventurer);
        let beast = match (phase, beast) {
            (Phase::Combat, None) => Some(Beast::placeholder(adventurer.beast_health)),
            (Phase::Combat, beast) => beast,
            _ => None,
        };
        let preview = beast
            .as_ref()
            .filter(|beast| beast.is_known())
            .map(|beast| CombatPreview::compute(&adventurer, beast));

        Self {
            game_id,
            phase,
            chances: EncounterChances::for_adventurer(&adventurer),
            adventurer,
            bag,
            market,
            beast,
            preview,
        }
    }

    pub fn level(&self) -> u32 {
        self.adventurer.level()
    }
}
