//! Multi-round fight estimate.

use core::fmt;

use super::damage::PlayerDamage;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum Victor {
    Adventurer,
    Beast,
}

/// Expected result of fighting to the end with the current loadout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OutcomeEstimate {
    pub victor: Victor,
    /// Rounds until the fight ends.
    pub rounds: u32,
    /// Damage the adventurer takes on the way to a win; 0 on a loss.
    pub damage_taken: u32,
}

/// Estimate the fight, with the adventurer striking first each round.
///
/// ```text
/// average         = base + crit% × (critical − base)
/// rounds_to_kill  = ⌈beast_health / max(1, average)⌉
/// rounds_to_die   = ⌈health / beast_damage⌉   (never when beast_damage = 0)
/// win             ⇔ rounds_to_kill ≤ rounds_to_die
/// damage_taken    = (rounds_to_kill − 1) × beast_damage
/// ```
///
/// The average is kept in hundredths so the crit weighting stays in integers.
pub fn estimate(
    player: PlayerDamage,
    crit_chance: u32,
    beast_health: u32,
    beast_damage: u32,
    health: u32,
) -> OutcomeEstimate {
    let crit = u64::from(crit_chance.min(100));
    let spread = u64::from(player.critical.saturating_sub(player.base));
    let average_hundredths = (u64::from(player.base) * 100 + crit * spread).max(100);
    let rounds_to_kill = (u64::from(beast_health) * 100).div_ceil(average_hundredths);
    let rounds_to_kill = u32::try_from(rounds_to_kill).unwrap_or(u32::MAX);

    let rounds_to_die = (beast_damage > 0).then(|| health.div_ceil(beast_damage));

    match rounds_to_die {
        Some(rounds_to_die) if rounds_to_kill > rounds_to_die => OutcomeEstimate {
            victor: Victor::Beast,
            rounds: rounds_to_die,
            damage_taken: 0,
        },
        _ => OutcomeEstimate {
            victor: Victor::Adventurer,
            rounds: rounds_to_kill,
            damage_taken: rounds_to_kill.saturating_sub(1).saturating_mul(beast_damage),
        },
    }
}

impl fmt::Display for OutcomeEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = if self.rounds == 1 { "round" } else { "rounds" };
        match self.victor {
            Victor::Adventurer => write!(
                f,
                "Win in {} {unit}, taking ~{} damage",
                self.rounds, self.damage_taken
            ),
            Victor::Beast => write!(f, "Lose in {} {unit}", self.rounds),
        }
    }
}
