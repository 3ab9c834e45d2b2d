use game_core::Beast;

use super::error::MappingError;
use super::schema::{Field, Schema};
use crate::source::Row;

const ID: &str = "details.beast.id";
const HEALTH: &str = "details.beast.health";
const LEVEL: &str = "details.beast.level";
const SEED: &str = "details.beast.seed";
const SPECIAL2: &str = "details.beast.special2";
const SPECIAL3: &str = "details.beast.special3";
const IS_COLLECTABLE: &str = "details.beast.is_collectable";

pub static BEAST: Schema = Schema {
    entity: "beast",
    fields: &[
        Field::required(ID),
        Field::defaulted(HEALTH),
        Field::defaulted(LEVEL),
        Field::defaulted(SEED),
        Field::defaulted(SPECIAL2),
        Field::defaulted(SPECIAL3),
        Field::defaulted(IS_COLLECTABLE),
    ],
};

/// Map a beast record.
///
/// `special2` and `special3` carry the name prefix and name suffix indices; they
/// are read as-is and only take effect once the beast reaches the unlock level.
pub fn map_beast(row: &Row) -> Result<Beast, MappingError> {
    let record = BEAST.validate(row)?;
    Ok(Beast::new(
        record.u8(ID)?,
        record.u32(HEALTH)?,
        record.u32(LEVEL)?,
    )
    .with_seed(record.u64(SEED)?)
    .with_collectable(record.bool(IS_COLLECTABLE)?)
    .with_specials(record.u8(SPECIAL2)?, record.u8(SPECIAL3)?))
}
