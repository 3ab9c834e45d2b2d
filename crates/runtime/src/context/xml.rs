//! Compact single-line XML rendering, one fixed shape per phase.
//!
//! ```text
//! exploration  adventurer stats equipment bag market ambush events
//! combat       adventurer equipment beast [damage] flee ambush crit [collectable] [outcome]
//! level_up     adventurer stats upgrades market
//! death        adventurer events
//! ```
//!
//! `damage`, `collectable`, and `outcome` need a resolved beast and are left out
//! when fighting a placeholder.

use core::fmt::Display;

use game_core::{Adventurer, GameState, Item, MarketItem, Phase};

use super::remaining_beast_health;
use crate::feed::ActivityFeedEntry;

pub fn render(state: &GameState, feed: &[ActivityFeedEntry]) -> String {
    let mut xml = XmlWriter::new();
    xml.open("context");
    xml.text_element("phase", state.phase);
    adventurer(&mut xml, &state.adventurer);

    match state.phase {
        Phase::Exploration => {
            stats(&mut xml, &state.adventurer);
            equipment(&mut xml, &state.adventurer);
            bag(&mut xml, state);
            market(&mut xml, &state.market);
            xml.empty("ambush", &[("chance", &state.chances.ambush)]);
            events(&mut xml, feed);
        }
        Phase::Combat => {
            equipment(&mut xml, &state.adventurer);
            combat(&mut xml, state);
        }
        Phase::LevelUp => {
            stats(&mut xml, &state.adventurer);
            xml.empty(
                "upgrades",
                &[("available", &state.adventurer.stat_upgrades_available)],
            );
            market(&mut xml, &state.market);
        }
        Phase::Death => events(&mut xml, feed),
    }

    xml.close("context");
    xml.finish()
}

fn adventurer(xml: &mut XmlWriter, adventurer: &Adventurer) {
    xml.empty(
        "adventurer",
        &[
            ("health", &adventurer.health),
            ("level", &adventurer.level()),
            ("xp", &adventurer.xp),
            ("gold", &adventurer.gold),
        ],
    );
}

fn stats(xml: &mut XmlWriter, adventurer: &Adventurer) {
    let stats = &adventurer.stats;
    xml.empty(
        "stats",
        &[
            ("str", &stats.strength),
            ("dex", &stats.dexterity),
            ("vit", &stats.vitality),
            ("int", &stats.intelligence),
            ("wis", &stats.wisdom),
            ("cha", &stats.charisma),
            ("luck", &stats.luck),
        ],
    );
}

fn equipment(xml: &mut XmlWriter, adventurer: &Adventurer) {
    let list = item_list(adventurer.equipment.iter().map(|(_, item)| item));
    xml.text_element("equipment", list);
}

fn bag(xml: &mut XmlWriter, state: &GameState) {
    xml.text_element("bag", item_list(state.bag.iter()));
}

fn market(xml: &mut XmlWriter, market: &[MarketItem]) {
    let list = market
        .iter()
        .map(|item| format!("{}:T{}:{}g", item.name(), item.tier(), item.price))
        .collect::<Vec<_>>()
        .join(",");
    xml.text_element("market", list);
}

fn combat(xml: &mut XmlWriter, state: &GameState) {
    if let Some(beast) = state.beast.as_ref() {
        let name = beast.name();
        xml.empty(
            "beast",
            &[
                ("name", &name),
                ("health", &remaining_beast_health(state)),
                ("level", &beast.level),
                ("tier", &beast.tier()),
                ("type", &beast.beast_type()),
            ],
        );
    }

    if let Some(preview) = state.preview.as_ref() {
        xml.empty(
            "damage",
            &[
                ("base", &preview.player_damage.base),
                ("critical", &preview.player_damage.critical),
                ("taken", &preview.beast_damage.max),
                ("protection", &preview.beast_damage.protection_percent),
            ],
        );
    }

    xml.empty("flee", &[("chance", &state.chances.flee)]);
    xml.empty("ambush", &[("chance", &state.chances.ambush)]);
    xml.empty("crit", &[("chance", &state.chances.critical)]);

    if let Some(preview) = state.preview.as_ref() {
        if preview.collectable.eligible {
            xml.empty(
                "collectable",
                &[
                    ("shiny", &preview.collectable.shiny),
                    ("animated", &preview.collectable.animated),
                ],
            );
        }
        xml.text_element("outcome", preview.outcome);
    }
}

fn events(xml: &mut XmlWriter, feed: &[ActivityFeedEntry]) {
    xml.open("events");
    for entry in feed {
        xml.open_with("event", &[("kind", &entry.kind)]);
        xml.text(&entry.message);
        xml.close("event");
    }
    xml.close("events");
}

/// `Name:L{level}:T{tier}` entries joined by commas.
fn item_list<'a>(items: impl Iterator<Item = &'a Item>) -> String {
    items
        .map(|item| format!("{}:L{}:T{}", item.name(), item.level(), item.tier()))
        .collect::<Vec<_>>()
        .join(",")
}

/// Minimal append-only writer producing unindented XML.
struct XmlWriter {
    out: String,
}

impl XmlWriter {
    fn new() -> Self {
        Self { out: String::new() }
    }

    fn open(&mut self, tag: &str) {
        self.open_with(tag, &[]);
    }

    fn open_with(&mut self, tag: &str, attrs: &[(&str, &dyn Display)]) {
        self.out.push('<');
        self.out.push_str(tag);
        self.attrs(attrs);
        self.out.push('>');
    }

    fn close(&mut self, tag: &str) {
        self.out.push_str("</");
        self.out.push_str(tag);
        self.out.push('>');
    }

    fn empty(&mut self, tag: &str, attrs: &[(&str, &dyn Display)]) {
        self.out.push('<');
        self.out.push_str(tag);
        self.attrs(attrs);
        self.out.push_str("/>");
    }

    fn text(&mut self, value: &str) {
        escape_into(&mut self.out, value);
    }

    fn text_element(&mut self, tag: &str, value: impl Display) {
        self.open(tag);
        self.text(&value.to_string());
        self.close(tag);
    }

    fn attrs(&mut self, attrs: &[(&str, &dyn Display)]) {
        for (name, value) in attrs {
            self.out.push(' ');
            self.out.push_str(name);
            self.out.push_str("=\"");
            escape_into(&mut self.out, &value.to_string());
            self.out.push('"');
        }
    }

    fn finish(self) -> String {
        self.out
    }
}

fn escape_into(out: &mut String, value: &str) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
}
