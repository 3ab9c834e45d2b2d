/// Rule constants mirrored from the on-chain game contract.
///
/// Every value here feeds arithmetic that must match the contract exactly, so
/// they are compile-time constants rather than runtime-tunable settings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig;

impl GameConfig {
    // ===== damage floors =====
    /// Minimum damage an adventurer deals to a beast.
    pub const MIN_DAMAGE: u32 = 4;
    /// Minimum damage a beast deals to a single armor slot.
    pub const BEAST_MIN_DAMAGE: u32 = 2;

    // ===== combat multipliers =====
    /// Strength adds this percentage of elemental damage per point.
    pub const STRENGTH_BONUS_PERCENT: u32 = 10;
    /// Multiplier applied on a name-prefix match ("Agony" vs "Agony").
    pub const PREFIX_MATCH_MULTIPLIER: u32 = 8;
    /// Multiplier applied on a name-suffix match ("Bane" vs "Bane").
    pub const NAME_SUFFIX_MATCH_MULTIPLIER: u32 = 2;
    /// Jewelry bonus per jewelry level, in percent.
    pub const JEWELRY_BONUS_PERCENT_PER_LEVEL: u32 = 3;

    // ===== specials =====
    /// Item level at which the "of …" suffix is revealed.
    pub const SUFFIX_UNLOCK_LEVEL: u32 = 15;
    /// Item level at which the two-word name prefix is revealed.
    pub const PREFIX_UNLOCK_LEVEL: u32 = 19;
    /// Beast level at which beast specials become active.
    pub const BEAST_SPECIALS_UNLOCK_LEVEL: u32 = 19;

    // ===== economy =====
    /// Base price step: `base_price(tier) = (6 - tier) * PRICE_PER_TIER`.
    pub const PRICE_PER_TIER: u32 = 4;
    /// No market item is ever cheaper than this.
    pub const MIN_PRICE: u32 = 1;

    // ===== capacities =====
    pub const MAX_BAG_ITEMS: usize = 15;
    pub const NUM_ITEMS: u8 = 101;
    pub const NUM_BEASTS: u8 = 75;

    // ===== collectables =====
    /// Trait roll space: a half of the seed is reduced modulo this value.
    pub const COLLECTABLE_ROLL_RANGE: u64 = 10_000;
    /// A trait is present when the roll falls below this threshold (5%).
    pub const COLLECTABLE_TRAIT_THRESHOLD: u64 = 500;
}
