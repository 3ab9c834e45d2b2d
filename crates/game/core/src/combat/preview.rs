//! Combined combat preview for one adventurer against one beast.

use super::chance::EncounterChances;
use super::collectable::CollectableTraits;
use super::damage::{PlayerDamage, player_damage};
use super::defense::{BeastDamage, beast_damage};
use super::outcome::{OutcomeEstimate, estimate};
use crate::state::{Adventurer, Beast};

/// Everything an agent needs to decide between fighting and fleeing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatPreview {
    pub player_damage: PlayerDamage,
    pub beast_damage: BeastDamage,
    pub chances: EncounterChances,
    pub collectable: CollectableTraits,
    pub outcome: OutcomeEstimate,
}

impl CombatPreview {
    /// Compute the preview for `adventurer` facing `beast`.
    ///
    /// The beast's remaining health comes from the adventurer record, which tracks
    /// the live fight; the beast record only carries its starting health.
    pub fn compute(adventurer: &Adventurer, beast: &Beast) -> Self {
        let player_damage = player_damage(adventurer, beast);
        let beast_damage = beast_damage(beast, adventurer);
        let chances = EncounterChances::for_adventurer(adventurer);
        let remaining = if adventurer.beast_health > 0 {
            adventurer.beast_health
        } else {
            beast.health
        };
        let outcome = estimate(
            player_damage,
            chances.critical,
            remaining,
            beast_damage.max,
            adventurer.health,
        );

        Self {
            player_damage,
            beast_damage,
            chances,
            collectable: CollectableTraits::for_beast(beast),
            outcome,
        }
    }
}
