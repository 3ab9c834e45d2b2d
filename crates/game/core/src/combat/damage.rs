//! Adventurer damage against a beast.

use super::bonus::{jewelry_bonus, special_name_bonus};
use super::elemental::elemental_adjusted_damage;
use crate::GameConfig;
use crate::state::{Adventurer, Beast};
use crate::tables::{Slot, items::ids};

/// Damage the adventurer deals per hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerDamage {
    pub base: u32,
    pub critical: u32,
}

impl PlayerDamage {
    /// Damage dealt without a weapon.
    pub const UNARMED: Self = Self {
        base: GameConfig::MIN_DAMAGE,
        critical: GameConfig::MIN_DAMAGE,
    };
}

/// Calculate the adventurer's base and critical damage against `beast`.
///
/// # Formula
///
/// ```text
/// attack     = weapon_level × (6 − weapon_tier)
/// elemental  = elemental_adjusted(attack, weapon_type, beast_armor)
/// strength   = ⌊elemental × strength × 10 / 100⌋
/// special    = 8 × elemental (prefix match) + 2 × elemental (name-suffix match)
///              + platinum ring: ⌊special × 3 × ring_level / 100⌋
/// armor      = beast_level × (6 − beast_tier)
/// base       = max(4, elemental + strength + special − armor)
///
/// crit_bonus = elemental + titanium ring: ⌊elemental × 3 × ring_level / 100⌋
/// critical   = max(4, elemental + strength + special + crit_bonus − armor)
/// ```
///
/// Without a weapon the adventurer deals [`PlayerDamage::UNARMED`].
pub fn player_damage(adventurer: &Adventurer, beast: &Beast) -> PlayerDamage {
    let Some(weapon) = adventurer.equipment.weapon.as_ref() else {
        return PlayerDamage::UNARMED;
    };
    let equipment = &adventurer.equipment;

    let elemental = elemental_adjusted_damage(weapon.power(), weapon.item_type(), beast.armor_type());
    let strength_bonus = scaled_percent(
        elemental,
        adventurer.stats.strength,
        GameConfig::STRENGTH_BONUS_PERCENT,
    );

    let mut special_bonus = special_name_bonus(elemental, &weapon.specials.name, &beast.specials);
    if let Some(ring) = equipment.holds(Slot::Ring, ids::PLATINUM_RING) {
        special_bonus = special_bonus.saturating_add(jewelry_bonus(special_bonus, ring.level()));
    }

    let mut crit_bonus = elemental;
    if let Some(ring) = equipment.holds(Slot::Ring, ids::TITANIUM_RING) {
        crit_bonus = crit_bonus.saturating_add(jewelry_bonus(crit_bonus, ring.level()));
    }

    let total = elemental
        .saturating_add(strength_bonus)
        .saturating_add(special_bonus);
    let armor = beast.power();

    PlayerDamage {
        base: floor_damage(total, armor),
        critical: floor_damage(total.saturating_add(crit_bonus), armor),
    }
}

fn floor_damage(attack: u32, armor: u32) -> u32 {
    attack.saturating_sub(armor).max(GameConfig::MIN_DAMAGE)
}

/// `⌊value × stat × percent / 100⌋` without intermediate overflow.
fn scaled_percent(value: u32, stat: u32, percent: u32) -> u32 {
    let scaled = u64::from(value) * u64::from(stat) * u64::from(percent) / 100;
    u32::try_from(scaled).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Item, Stats};

    fn adventurer_with(weapon: Option<Item>, ring: Option<Item>, strength: u32) -> Adventurer {
        let mut adventurer = Adventurer {
            health: 100,
            stats: Stats {
                strength,
                ..Stats::default()
            },
            ..Adventurer::default()
        };
        adventurer.equipment.weapon = weapon;
        adventurer.equipment.ring = ring;
        adventurer
    }

    #[test]
    fn ghost_wand_against_wolf() {
        // Ghost Wand L3 T1 (Magic) vs Wolf L12 T5 (Hide): 15 → weak → 8.
        let adventurer = adventurer_with(Some(Item::new(9, 9)), None, 4);
        let wolf = Beast::new(47, 21, 12);
        assert_eq!(
            player_damage(&adventurer, &wolf),
            PlayerDamage { base: 4, critical: 7 }
        );
    }

    #[test]
    fn unarmed_uses_floor() {
        let adventurer = adventurer_with(None, None, 10);
        let beast = Beast::new(1, 50, 1);
        assert_eq!(player_damage(&adventurer, &beast), PlayerDamage::UNARMED);
    }

    #[test]
    fn strong_matchup_with_strength() {
        // Warhammer L10 T1 (Bludgeon) vs Wolf L2 T5 (Hide): 50 → strong → 75.
        // strength 3: ⌊75 × 30 / 100⌋ = 22. armor 2.
        let adventurer = adventurer_with(Some(Item::new(72, 100)), None, 3);
        let wolf = Beast::new(47, 10, 2);
        let damage = player_damage(&adventurer, &wolf);
        assert_eq!(damage.base, 75 + 22 - 2);
        assert_eq!(damage.critical, 75 + 22 + 75 - 2);
    }

    #[test]
    fn special_matches_and_platinum_ring() {
        let seed = 1_234;
        let weapon = Item::new(72, 20 * 20).with_specials_seed(seed);
        let name = weapon.specials.name;
        // Neutral matchup: Bludgeon vs Metal (Brute). Warhammer L20 T1 = 100.
        let beast = Beast::new(75, 100, 19).with_specials(
            name.prefix.unwrap_or_default(),
            name.name_suffix.unwrap_or_default(),
        );
        let armor = beast.power();

        let plain = player_damage(&adventurer_with(Some(weapon), None, 0), &beast);
        assert_eq!(plain.base, 100 + 800 + 200 - armor);

        // Platinum ring L5: special 1000 → +⌊1000 × 15 / 100⌋ = 150.
        let ring = Item::new(ids::PLATINUM_RING, 25);
        let ringed = player_damage(&adventurer_with(Some(weapon), Some(ring), 0), &beast);
        assert_eq!(ringed.base, 100 + 1000 + 150 - armor);
    }

    #[test]
    fn titanium_ring_boosts_critical_only() {
        // Katana L10 T1 (Blade) vs Warlock L1 T1 (Cloth): 50 → strong → 75. armor 5.
        let ring = Item::new(ids::TITANIUM_RING, 100);
        let adventurer = adventurer_with(Some(Item::new(42, 100)), Some(ring), 0);
        let beast = Beast::new(1, 10, 1);
        let damage = player_damage(&adventurer, &beast);
        assert_eq!(damage.base, 75 - 5);
        // crit bonus 75 + ⌊75 × 30 / 100⌋ = 97.
        assert_eq!(damage.critical, 75 + 97 - 5);
    }

    #[test]
    fn floors_hold_for_every_tier() {
        for weapon_id in [9u8, 12, 42, 46, 72, 76] {
            for beast_id in [1u8, 25, 26, 50, 51, 75] {
                let adventurer = adventurer_with(Some(Item::new(weapon_id, 1)), None, 0);
                let beast = Beast::new(beast_id, 10, 50);
                let damage = player_damage(&adventurer, &beast);
                assert!(damage.base >= GameConfig::MIN_DAMAGE);
                assert!(damage.critical >= damage.base);
            }
        }
    }
}
