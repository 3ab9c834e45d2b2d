//! Structured JSON view of a [`GameState`].
//!
//! View structs decouple the wire shape (camelCase, flattened names) from the
//! core entities, so renaming a field in `game-core` never changes the output.

use game_core::{
    Adventurer, BeastType, CombatPreview, GameState, Item, MarketItem, Phase, Slot, Stats, Victor,
};
use serde::Serialize;
use serde_json::{Map, Value};

use super::{ContextField, remaining_beast_health};
use crate::feed::ActivityFeedEntry;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextView<'a> {
    pub game: GameView,
    pub adventurer: AdventurerView,
    pub current_beast: Option<BeastView>,
    pub damage_preview: Option<DamagePreviewView>,
    pub market: Vec<MarketView>,
    pub recent_events: &'a [ActivityFeedEntry],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameView {
    pub id: u64,
    pub phase: Phase,
    pub action_count: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdventurerView {
    pub health: u32,
    pub xp: u32,
    pub level: u32,
    pub gold: u32,
    pub stat_upgrades_available: u32,
    pub stats: Stats,
    pub equipment: Vec<ItemView>,
    pub bag: Vec<ItemView>,
    pub flee_chance: u32,
    pub ambush_chance: u32,
    pub crit_chance: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemView {
    pub id: u8,
    pub name: String,
    pub slot: Slot,
    pub level: u32,
    pub tier: u8,
    pub xp: u32,
}

impl ItemView {
    fn of(item: &Item) -> Self {
        Self {
            id: item.id,
            name: item.name(),
            slot: item.slot(),
            level: item.level(),
            tier: item.tier(),
            xp: item.xp,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BeastView {
    pub id: u8,
    pub name: String,
    pub health: u32,
    pub level: u32,
    pub tier: u8,
    #[serde(rename = "type")]
    pub beast_type: BeastType,
    pub is_collectable: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DamagePreviewView {
    pub player_damage: u32,
    pub critical_damage: u32,
    pub beast_max_damage: u32,
    pub protection_percent: u32,
    pub slots: Vec<SlotDamageView>,
    pub flee_chance: u32,
    pub ambush_chance: u32,
    pub eligible: bool,
    pub shiny: bool,
    pub animated: bool,
    pub outcome: OutcomeView,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotDamageView {
    pub slot: Slot,
    pub damage: u32,
    pub defense: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutcomeView {
    pub victor: Victor,
    pub rounds: u32,
    pub damage_taken: u32,
    pub summary: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketView {
    pub id: u8,
    pub name: &'static str,
    pub slot: Slot,
    pub tier: u8,
    pub price: u32,
}

impl MarketView {
    fn of(item: &MarketItem) -> Self {
        Self {
            id: item.id,
            name: item.name(),
            slot: item.slot(),
            tier: item.tier(),
            price: item.price,
        }
    }
}

impl<'a> ContextView<'a> {
    pub fn build(state: &GameState, feed: &'a [ActivityFeedEntry]) -> Self {
        Self {
            game: GameView {
                id: state.game_id,
                phase: state.phase,
                action_count: state.adventurer.action_count,
            },
            adventurer: adventurer_view(state, &state.adventurer),
            current_beast: state.beast.as_ref().map(|beast| BeastView {
                id: beast.id,
                name: beast.name(),
                health: remaining_beast_health(state),
                level: beast.level,
                tier: beast.tier(),
                beast_type: beast.beast_type(),
                is_collectable: beast.is_collectable,
            }),
            damage_preview: state.preview.as_ref().map(preview_view),
            market: state.market.iter().map(MarketView::of).collect(),
            recent_events: feed,
        }
    }
}

fn adventurer_view(state: &GameState, adventurer: &Adventurer) -> AdventurerView {
    AdventurerView {
        health: adventurer.health,
        xp: adventurer.xp,
        level: adventurer.level(),
        gold: adventurer.gold,
        stat_upgrades_available: adventurer.stat_upgrades_available,
        stats: adventurer.stats,
        equipment: adventurer
            .equipment
            .iter()
            .map(|(_, item)| ItemView::of(item))
            .collect(),
        bag: state.bag.iter().map(ItemView::of).collect(),
        flee_chance: state.chances.flee,
        ambush_chance: state.chances.ambush,
        crit_chance: state.chances.critical,
    }
}

fn preview_view(preview: &CombatPreview) -> DamagePreviewView {
    DamagePreviewView {
        player_damage: preview.player_damage.base,
        critical_damage: preview.player_damage.critical,
        beast_max_damage: preview.beast_damage.max,
        protection_percent: preview.beast_damage.protection_percent,
        slots: preview
            .beast_damage
            .per_slot
            .iter()
            .map(|slot| SlotDamageView {
                slot: slot.slot,
                damage: slot.damage,
                defense: slot.defense,
            })
            .collect(),
        flee_chance: preview.chances.flee,
        ambush_chance: preview.chances.ambush,
        eligible: preview.collectable.eligible,
        shiny: preview.collectable.shiny,
        animated: preview.collectable.animated,
        outcome: OutcomeView {
            victor: preview.outcome.victor,
            rounds: preview.outcome.rounds,
            damage_taken: preview.outcome.damage_taken,
            summary: preview.outcome.to_string(),
        },
    }
}

/// Serialize the view, keeping only `fields` when the allow-list is non-empty.
pub fn render(
    state: &GameState,
    feed: &[ActivityFeedEntry],
    fields: &[ContextField],
) -> Result<String, serde_json::Error> {
    let value = serde_json::to_value(ContextView::build(state, feed))?;
    let value = match value {
        Value::Object(map) if !fields.is_empty() => Value::Object(
            map.into_iter()
                .filter(|(key, _)| fields.iter().any(|field| field.to_string() == *key))
                .collect::<Map<String, Value>>(),
        ),
        other => other,
    };
    serde_json::to_string(&value)
}
