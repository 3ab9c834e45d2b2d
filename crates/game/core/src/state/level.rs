/// Level for an XP total: `⌊√xp⌋`, with xp 0 mapped to level 1.
///
/// The contract never produces a level-0 adventurer or item, and level is used as
/// a divisor for flee/ambush chances and as a multiplier for damage. Mapping xp 0
/// to 1 keeps every caller on the same rule instead of special-casing it locally.
pub fn level_from_xp(xp: u32) -> u32 {
    if xp == 0 { 1 } else { xp.isqrt() }
}
