use game_core::MarketItem;
use serde_json::Value;

/// Map the market payload into priced items.
///
/// The payload is a JSON array of ids or a string holding one. A missing or
/// malformed payload yields an empty market; unknown ids are skipped.
pub fn map_market(payload: Option<&Value>, charisma: u32) -> Vec<MarketItem> {
    let Some(payload) = payload else {
        return Vec::new();
    };
    let Some(ids) = parse_ids(payload) else {
        tracing::warn!(%payload, "malformed market payload; using empty market");
        return Vec::new();
    };

    ids.into_iter()
        .filter_map(|id| match MarketItem::new(id, charisma) {
            Ok(item) => Some(item),
            Err(err) => {
                tracing::warn!(error = %err, "skipping market entry");
                None
            }
        })
        .collect()
}

fn parse_ids(payload: &Value) -> Option<Vec<u8>> {
    match payload {
        Value::Null => Some(Vec::new()),
        Value::Array(values) => values.iter().map(parse_id).collect(),
        Value::String(text) if text.trim().is_empty() => Some(Vec::new()),
        Value::String(text) => match serde_json::from_str::<Value>(text).ok()? {
            nested @ Value::Array(_) => parse_ids(&nested),
            _ => None,
        },
        _ => None,
    }
}

fn parse_id(value: &Value) -> Option<u8> {
    match value {
        Value::Number(number) => number.as_u64().and_then(|id| u8::try_from(id).ok()),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ids(items: &[MarketItem]) -> Vec<u8> {
        items.iter().map(|item| item.id).collect()
    }

    #[test]
    fn array_and_encoded_string_agree() {
        let direct = map_market(Some(&json!([42, 21, 9])), 4);
        let encoded = map_market(Some(&json!("[42, 21, 9]")), 4);
        assert_eq!(direct, encoded);
        assert_eq!(ids(&direct), vec![42, 21, 9]);
        assert_eq!(direct[0].price, 16);
        assert_eq!(direct[1].price, 1);
    }

    #[test]
    fn malformed_payload_is_empty() {
        assert!(map_market(Some(&json!("not json")), 0).is_empty());
        assert!(map_market(Some(&json!({"ids": [1]})), 0).is_empty());
        assert!(map_market(Some(&json!([1, "x"])), 0).is_empty());
        assert!(map_market(Some(&json!("\"[1]\"")), 0).is_empty());
        assert!(map_market(None, 0).is_empty());
    }

    #[test]
    fn unknown_ids_are_skipped() {
        let market = map_market(Some(&json!([0, 42, 150])), 0);
        assert_eq!(ids(&market), vec![42]);
    }
}
