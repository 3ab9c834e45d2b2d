//! Game phase detection.

use crate::state::Adventurer;

/// The single phase a game is in.
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
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum Phase {
    #[default]
    Exploration,
    Combat,
    LevelUp,
    Death,
}

impl Phase {
    /// Classify by fixed priority: death, then combat, then level-up, then exploration.
    pub fn of(adventurer: &Adventurer) -> Self {
        if adventurer.is_dead() {
            Phase::Death
        } else if adventurer.in_battle() {
            Phase::Combat
        } else if adventurer.stat_upgrades_available > 0 {
            Phase::LevelUp
        } else {
            Phase::Exploration
        }
    }

    pub fn is_terminal(self) -> bool {
        self == Phase::Death
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr;

    fn adventurer(health: u32, beast_health: u32, upgrades: u32) -> Adventurer {
        Adventurer {
            health,
            beast_health,
            stat_upgrades_available: upgrades,
            ..Adventurer::default()
        }
    }

    #[test]
    fn priority_order() {
        assert_eq!(Phase::of(&adventurer(0, 20, 2)), Phase::Death);
        assert_eq!(Phase::of(&adventurer(10, 20, 2)), Phase::Combat);
        assert_eq!(Phase::of(&adventurer(10, 0, 2)), Phase::LevelUp);
        assert_eq!(Phase::of(&adventurer(10, 0, 0)), Phase::Exploration);
    }

    #[test]
    fn names_are_snake_case() {
        assert_eq!(Phase::LevelUp.to_string(), "level_up");
        assert_eq!(Phase::from_str("combat"), Ok(Phase::Combat));
        assert!(Phase::Death.is_terminal());
    }
}
