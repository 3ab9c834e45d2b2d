//! Elemental type advantages.

use crate::tables::ItemType;

/// How an attack family fares against an armor family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Effectiveness {
    Strong,
    Weak,
    Neutral,
}

/// Rock-paper-scissors cycle between attack and armor families.
///
/// Magic beats Metal, Blade beats Cloth, Bludgeon beats Hide; the reverse
/// pairings (Magic/Hide, Blade/Metal, Bludgeon/Cloth) are weak. Everything else,
/// including non-combat types, is neutral.
pub const fn effectiveness(attack: ItemType, defense: ItemType) -> Effectiveness {
    use ItemType::{Blade, Bludgeon, Cloth, Hide, Magic, Metal};
    match (attack, defense) {
        (Magic, Metal) | (Blade, Cloth) | (Bludgeon, Hide) => Effectiveness::Strong,
        (Magic, Hide) | (Blade, Metal) | (Bludgeon, Cloth) => Effectiveness::Weak,
        _ => Effectiveness::Neutral,
    }
}

/// Adjust `base` damage for the elemental matchup.
///
/// # Formula
///
/// ```text
/// effect = ⌊base / 2⌋
/// strong:  base + effect
/// weak:    base − effect
/// neutral: base
/// ```
pub fn elemental_adjusted_damage(base: u32, attack: ItemType, defense: ItemType) -> u32 {
    let effect = base / 2;
    match effectiveness(attack, defense) {
        Effectiveness::Strong => base.saturating_add(effect),
        Effectiveness::Weak => base - effect,
        Effectiveness::Neutral => base,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ItemType::{Blade, Bludgeon, Cloth, Hide, Magic, Metal};

    #[test]
    fn all_nine_pairs() {
        let cases = [
            (Magic, Cloth, 10),
            (Magic, Hide, 5),
            (Magic, Metal, 15),
            (Blade, Cloth, 15),
            (Blade, Hide, 10),
            (Blade, Metal, 5),
            (Bludgeon, Cloth, 5),
            (Bludgeon, Hide, 15),
            (Bludgeon, Metal, 10),
        ];
        for (attack, defense, expected) in cases {
            assert_eq!(
                elemental_adjusted_damage(10, attack, defense),
                expected,
                "{attack} vs {defense}"
            );
        }
    }

    #[test]
    fn partitions_into_three_of_each() {
        let mut strong = 0;
        let mut weak = 0;
        let mut neutral = 0;
        for attack in ItemType::ATTACKS {
            for defense in ItemType::ARMORS {
                match effectiveness(attack, defense) {
                    Effectiveness::Strong => strong += 1,
                    Effectiveness::Weak => weak += 1,
                    Effectiveness::Neutral => neutral += 1,
                }
            }
        }
        assert_eq!((strong, weak, neutral), (3, 3, 3));
    }

    #[test]
    fn odd_base_floors_effect() {
        assert_eq!(elemental_adjusted_damage(15, Magic, Hide), 8);
        assert_eq!(elemental_adjusted_damage(15, Magic, Metal), 22);
        assert_eq!(elemental_adjusted_damage(1, Magic, Hide), 1);
        assert_eq!(elemental_adjusted_damage(0, Blade, Cloth), 0);
    }

    #[test]
    fn strong_matchup_saturates() {
        assert_eq!(elemental_adjusted_damage(u32::MAX, Magic, Metal), u32::MAX);
        assert_eq!(elemental_adjusted_damage(u32::MAX, Blade, Hide), u32::MAX);
        assert_eq!(elemental_adjusted_damage(u32::MAX, Magic, Hide), u32::MAX - u32::MAX / 2);
    }

    #[test]
    fn non_combat_types_are_neutral() {
        assert_eq!(elemental_adjusted_damage(12, Blade, ItemType::None), 12);
        assert_eq!(elemental_adjusted_damage(12, ItemType::Ring, Metal), 12);
    }
}
