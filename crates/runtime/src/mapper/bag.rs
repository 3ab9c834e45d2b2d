use game_core::{Bag, Item};

use super::error::MappingError;
use super::schema::{Field, Schema};
use crate::source::Row;

const ID: &str = "details.item.id";
const XP: &str = "details.item.xp";

pub static BAG_ITEM: Schema = Schema {
    entity: "bag item",
    fields: &[Field::required(ID), Field::defaulted(XP)],
};

fn map_item(row: &Row, seed: u16) -> Result<Item, MappingError> {
    let record = BAG_ITEM.validate(row)?;
    Ok(Item::new(record.u8(ID)?, record.u32(XP)?).with_specials_seed(seed))
}

/// Map bag sub-rows.
///
/// Malformed rows and id 0 are skipped; rows past capacity are dropped. Neither
/// fails the request.
pub fn map_bag(rows: &[Row], seed: u16) -> Bag {
    let mut bag = Bag::new();
    for (index, row) in rows.iter().enumerate() {
        let item = match map_item(row, seed) {
            Ok(item) if item.id != 0 => item,
            Ok(_) => {
                tracing::warn!(index, "skipping empty bag row");
                continue;
            }
            Err(err) => {
                tracing::warn!(index, error = %err, "skipping malformed bag row");
                continue;
            }
        };
        if let Err(item) = bag.push(item) {
            tracing::warn!(index, item = item.id, "bag full; dropping remaining rows");
            break;
        }
    }
    bag
}
