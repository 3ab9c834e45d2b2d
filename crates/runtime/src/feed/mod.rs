//! Activity feed: heterogeneous event streams merged into one ordered log.
//!
//! Game events, adventurer snapshots, and bag snapshots are concatenated,
//! annotated with a human message, and sorted by:
//!
//! 1. timestamp, newest first
//! 2. event index within the block, ascending, unknown last
//! 3. [`FeedKind::priority`], ascending
//! 4. position in the input streams
//!
//! The result is a deterministic total order for identical inputs.
pub mod chain;
pub mod event;
pub mod format;
pub mod kind;

use core::cmp::Reverse;

use serde::{Deserialize, Serialize};

pub use chain::ChainRef;
pub use event::{
    AdventurerSnapshot, BagSnapshot, DiscoveryKind, EventRow, FeedStreams, GameEvent,
    StatIncrease,
};
pub use kind::FeedKind;

/// Structured body of a feed entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeedSummary {
    Event(GameEvent),
    Adventurer { health: u32, xp: u32, gold: u32 },
    Bag { items: Vec<u8> },
}

/// One annotated line of the activity feed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityFeedEntry {
    pub kind: FeedKind,
    pub timestamp: u64,
    pub action_count: Option<u32>,
    pub summary: FeedSummary,
    pub message: String,
    pub chain: ChainRef,
}

impl ActivityFeedEntry {
    pub fn from_event(row: &EventRow) -> Self {
        Self {
            kind: FeedKind::of(&row.event),
            timestamp: row.timestamp,
            action_count: row.action_count,
            message: format::format_event(&row.event),
            summary: FeedSummary::Event(row.event.clone()),
            chain: ChainRef::parse(&row.id),
        }
    }

    pub fn from_adventurer(snapshot: &AdventurerSnapshot) -> Self {
        Self {
            kind: FeedKind::Adventurer,
            timestamp: snapshot.timestamp,
            action_count: snapshot.action_count,
            message: format::format_adventurer(snapshot),
            summary: FeedSummary::Adventurer {
                health: snapshot.health,
                xp: snapshot.xp,
                gold: snapshot.gold,
            },
            chain: ChainRef::parse(&snapshot.id),
        }
    }

    pub fn from_bag(snapshot: &BagSnapshot) -> Self {
        Self {
            kind: FeedKind::Bag,
            timestamp: snapshot.timestamp,
            action_count: snapshot.action_count,
            message: format::format_bag(snapshot),
            summary: FeedSummary::Bag {
                items: snapshot.items.clone(),
            },
            chain: ChainRef::parse(&snapshot.id),
        }
    }
}

/// Merge all streams and keep the newest `limit` entries.
pub fn unify(streams: &FeedStreams, limit: usize) -> Vec<ActivityFeedEntry> {
    let mut entries: Vec<ActivityFeedEntry> = streams
        .events
        .iter()
        .map(ActivityFeedEntry::from_event)
        .chain(streams.adventurers.iter().map(ActivityFeedEntry::from_adventurer))
        .chain(streams.bags.iter().map(ActivityFeedEntry::from_bag))
        .collect();

    // Stable sort: equal keys keep their input position.
    entries.sort_by(|a, b| {
        Reverse(a.timestamp)
            .cmp(&Reverse(b.timestamp))
            .then_with(|| a.chain.cmp_event_index(&b.chain))
            .then_with(|| a.kind.priority().cmp(&b.kind.priority()))
    });
    entries.truncate(limit);

    tracing::debug!(
        events = streams.events.len(),
        adventurers = streams.adventurers.len(),
        bags = streams.bags.len(),
        kept = entries.len(),
        "unified activity feed"
    );
    entries
}
