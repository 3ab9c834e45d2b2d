use core::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// On-chain position of an indexed entry.
///
/// Parsed once from the `"{block}:{tx}:{index}"` entry id at ingestion; parts that
/// do not parse are `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainRef {
    pub block_number: Option<u64>,
    pub tx_hash: Option<String>,
    pub event_index: Option<u32>,
}

impl ChainRef {
    pub fn parse(id: &str) -> Self {
        let mut parts = id.splitn(3, ':').map(str::trim);
        let block_number = parts.next().and_then(|part| part.parse().ok());
        let tx_hash = parts
            .next()
            .filter(|part| !part.is_empty())
            .map(str::to_owned);
        let event_index = parts.next().and_then(|part| part.parse().ok());
        Self {
            block_number,
            tx_hash,
            event_index,
        }
    }

    /// Ascending event index with unknown indices sorted last.
    pub fn cmp_event_index(&self, other: &Self) -> Ordering {
        match (self.event_index, other.event_index) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_parts() {
        let chain = ChainRef::parse("812345:0x04ab:3");
        assert_eq!(chain.block_number, Some(812_345));
        assert_eq!(chain.tx_hash.as_deref(), Some("0x04ab"));
        assert_eq!(chain.event_index, Some(3));
    }

    #[test]
    fn bad_parts_become_none() {
        let chain = ChainRef::parse("pending::x");
        assert_eq!(chain, ChainRef::default());

        let short = ChainRef::parse("17:0xff");
        assert_eq!(short.block_number, Some(17));
        assert_eq!(short.tx_hash.as_deref(), Some("0xff"));
        assert_eq!(short.event_index, None);

        assert_eq!(ChainRef::parse(""), ChainRef::default());
    }

    #[test]
    fn unknown_index_sorts_last() {
        let known = ChainRef::parse("1:a:9");
        let unknown = ChainRef::parse("1:a:");
        assert_eq!(known.cmp_event_index(&unknown), Ordering::Less);
        assert_eq!(unknown.cmp_event_index(&known), Ordering::Greater);
        assert_eq!(
            ChainRef::parse("1:a:2").cmp_event_index(&known),
            Ordering::Less
        );
    }
}
