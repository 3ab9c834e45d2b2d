//! Cosmetic traits of beasts that can be claimed off-chain.

use crate::GameConfig;
use crate::state::Beast;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CollectableTraits {
    pub eligible: bool,
    pub shiny: bool,
    pub animated: bool,
}

impl CollectableTraits {
    /// Roll traits from the beast seed.
    ///
    /// The low 32 bits decide `shiny`, the high 32 bits decide `animated`. Beasts that
    /// are not collectable, or whose seed is still 0, get no traits at all.
    pub fn for_beast(beast: &Beast) -> Self {
        if !beast.is_collectable || beast.seed == 0 {
            return Self::default();
        }
        let low = beast.seed & 0xFFFF_FFFF;
        let high = beast.seed >> 32;
        Self {
            eligible: true,
            shiny: rolls_trait(low),
            animated: rolls_trait(high),
        }
    }
}

fn rolls_trait(half: u64) -> bool {
    half % GameConfig::COLLECTABLE_ROLL_RANGE < GameConfig::COLLECTABLE_TRAIT_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    fn beast(seed: u64, collectable: bool) -> Beast {
        Beast::new(47, 21, 12)
            .with_seed(seed)
            .with_collectable(collectable)
    }

    #[test]
    fn halves_roll_independently() {
        let shiny_only = CollectableTraits::for_beast(&beast((1 << 32) * 600 + 499, true));
        assert_eq!(
            shiny_only,
            CollectableTraits {
                eligible: true,
                shiny: true,
                animated: false,
            }
        );

        let animated_only = CollectableTraits::for_beast(&beast((1 << 32) * 10_003 + 500, true));
        assert!(animated_only.eligible);
        assert!(!animated_only.shiny);
        assert!(animated_only.animated);
    }

    #[test]
    fn ineligible_beasts_have_no_traits() {
        assert_eq!(
            CollectableTraits::for_beast(&beast(42, false)),
            CollectableTraits::default()
        );
        assert_eq!(
            CollectableTraits::for_beast(&beast(0, true)),
            CollectableTraits::default()
        );
    }

    #[test]
    fn deterministic_for_same_seed() {
        let seed = 0x1234_5678_9ABC_DEF0;
        let first = CollectableTraits::for_beast(&beast(seed, true));
        for _ in 0..4 {
            assert_eq!(CollectableTraits::for_beast(&beast(seed, true)), first);
        }
    }
}
