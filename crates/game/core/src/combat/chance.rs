//! Stat-driven percentage chances.

use crate::state::Adventurer;

/// Percentage chances that depend only on the adventurer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncounterChances {
    pub flee: u32,
    pub ambush: u32,
    pub critical: u32,
}

impl EncounterChances {
    pub fn for_adventurer(adventurer: &Adventurer) -> Self {
        let level = adventurer.level();
        Self {
            flee: flee_chance(adventurer.stats.dexterity, level),
            ambush: ambush_chance(adventurer.stats.wisdom, level),
            critical: crit_chance(adventurer.stats.luck),
        }
    }
}

/// 100 when dexterity covers the level, otherwise `⌊dex × 100 / level⌋`.
pub fn flee_chance(dexterity: u32, level: u32) -> u32 {
    if dexterity >= level {
        return 100;
    }
    percent_of(dexterity, level)
}

/// Chance of being ambushed: 0 when wisdom covers the level, otherwise
/// `⌊(level − wis) × 100 / level⌋`.
pub fn ambush_chance(wisdom: u32, level: u32) -> u32 {
    if wisdom >= level {
        return 0;
    }
    percent_of(level - wisdom, level)
}

pub fn crit_chance(luck: u32) -> u32 {
    luck.min(100)
}

// Callers guarantee `part < whole`, so `whole` is non-zero and the result is below 100.
fn percent_of(part: u32, whole: u32) -> u32 {
    (u64::from(part) * 100 / u64::from(whole)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Stats;

    #[test]
    fn flee_scales_with_dexterity() {
        assert_eq!(flee_chance(3, 4), 75);
        assert_eq!(flee_chance(4, 4), 100);
        assert_eq!(flee_chance(9, 4), 100);
        assert_eq!(flee_chance(0, 7), 0);
        assert_eq!(flee_chance(1, 3), 33);
    }

    #[test]
    fn ambush_inverts_wisdom() {
        assert_eq!(ambush_chance(1, 4), 75);
        assert_eq!(ambush_chance(4, 4), 0);
        assert_eq!(ambush_chance(0, 5), 100);
        assert_eq!(ambush_chance(2, 3), 33);
    }

    #[test]
    fn crit_caps_at_hundred() {
        assert_eq!(crit_chance(0), 0);
        assert_eq!(crit_chance(42), 42);
        assert_eq!(crit_chance(250), 100);
    }

    #[test]
    fn fresh_adventurer_is_safe() {
        // Level 1 with zero xp never divides by zero.
        let chances = EncounterChances::for_adventurer(&Adventurer::default());
        assert_eq!(chances.flee, 0);
        assert_eq!(chances.ambush, 100);
        assert_eq!(chances.critical, 0);
    }

    #[test]
    fn golden_adventurer_chances() {
        let adventurer = Adventurer {
            health: 99,
            xp: 19,
            stats: Stats {
                dexterity: 3,
                wisdom: 1,
                luck: 10,
                ..Stats::default()
            },
            ..Adventurer::default()
        };
        assert_eq!(
            EncounterChances::for_adventurer(&adventurer),
            EncounterChances {
                flee: 75,
                ambush: 75,
                critical: 10,
            }
        );
    }
}
