//! Special-name and jewelry bonuses shared by both attack directions.

use crate::GameConfig;
use crate::state::SpecialName;

/// Bonus damage for special-name matches between attacker and defender.
///
/// A prefix match adds `8 × damage`, a name-suffix match adds `2 × damage`; the two
/// are additive.
pub fn special_name_bonus(damage: u32, attacker: &SpecialName, defender: &SpecialName) -> u32 {
    let mut bonus = 0u32;
    if attacker.prefix_matches(defender) {
        bonus = bonus.saturating_add(damage.saturating_mul(GameConfig::PREFIX_MATCH_MULTIPLIER));
    }
    if attacker.name_suffix_matches(defender) {
        bonus = bonus.saturating_add(
            damage.saturating_mul(GameConfig::NAME_SUFFIX_MATCH_MULTIPLIER),
        );
    }
    bonus
}

/// `⌊value × 3 × jewelry_level / 100⌋`.
pub fn jewelry_bonus(value: u32, jewelry_level: u32) -> u32 {
    let scaled = u64::from(value)
        * u64::from(GameConfig::JEWELRY_BONUS_PERCENT_PER_LEVEL)
        * u64::from(jewelry_level);
    u32::try_from(scaled / 100).unwrap_or(u32::MAX)
}
