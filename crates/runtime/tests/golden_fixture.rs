use game_core::{Phase, Victor};
use runtime::{ContextField, ContextFormat, GameRows, GameStateService, InMemoryRowSource};
use serde_json::{Value, json};

const GAME_ID: u64 = 42;

/// Level 4 adventurer wielding a Ghost Wand against a level 12 Wolf.
fn golden_rows() -> GameRows {
    serde_json::from_value(json!({
        "adventurer": {
            "details": {
                "adventurer": {
                    "health": 99,
                    "xp": 19,
                    "gold": 4,
                    "beast_health": 21,
                    "action_count": 12,
                    "stats": {
                        "strength": 4,
                        "dexterity": 3,
                        "vitality": 2,
                        "intelligence": 1,
                        "wisdom": 1,
                        "charisma": 4,
                        "luck": 0
                    },
                    "equipment": {
                        "weapon": { "id": 9, "xp": 9 }
                    }
                }
            }
        },
        "encounter_beast": {
            "details.beast.id": 47,
            "details.beast.health": 21,
            "details.beast.level": 12
        },
        "market": "[42, 21]",
        "feed": {
            "events": [
                {
                    "id": "100:0xabc:0",
                    "timestamp": 1700000100,
                    "action_count": 12,
                    "kind": "encounter",
                    "beast_id": 47,
                    "level": 12,
                    "health": 21
                }
            ]
        }
    }))
    .expect("golden rows should deserialize")
}

fn service() -> GameStateService<InMemoryRowSource> {
    let source = InMemoryRowSource::new();
    source.insert(GAME_ID, golden_rows()).expect("insert rows");
    GameStateService::new(source)
}

#[tokio::test]
async fn golden_state_derivation() {
    let state = service().game_state(GAME_ID).await.expect("state");

    assert_eq!(state.phase, Phase::Combat);
    assert_eq!(state.level(), 4);
    assert_eq!(state.market.len(), 2);

    let beast = state.beast.expect("beast resolved from encounter row");
    assert_eq!(beast.name(), "Wolf");
    assert_eq!(beast.tier(), 5);

    let preview = state.preview.expect("preview for a known beast");
    assert_eq!(preview.player_damage.base, 4);
    assert_eq!(preview.player_damage.critical, 7);
    assert_eq!(preview.beast_damage.max, 15);
    assert_eq!(preview.beast_damage.protection_percent, 0);
    assert_eq!(state.chances.flee, 75);
    assert_eq!(state.chances.ambush, 75);
    assert_eq!(preview.outcome.victor, Victor::Adventurer);
    assert_eq!(preview.outcome.to_string(), "Win in 6 rounds, taking ~75 damage");
}

#[tokio::test]
async fn golden_xml_context() {
    let xml = service()
        .context(GAME_ID, ContextFormat::Xml, &[])
        .await
        .expect("xml context");

    assert!(xml.starts_with("<context><phase>combat</phase>"));
    assert!(xml.ends_with("</context>"));
    assert!(xml.contains("<equipment>Ghost Wand:L3:T1</equipment>"));
    assert!(xml.contains("<beast name=\"Wolf\" health=\"21\" level=\"12\" tier=\"5\""));
    assert!(xml.contains("<damage base=\"4\" critical=\"7\" taken=\"15\" protection=\"0\"/>"));
    assert!(xml.contains("<flee chance=\"75\"/>"));
    assert!(xml.contains("<outcome>Win in 6 rounds, taking ~75 damage</outcome>"));
    assert!(!xml.contains('\n'));
}

#[tokio::test]
async fn xml_and_json_agree_on_numbers() {
    let service = service();
    let xml = service
        .context(GAME_ID, ContextFormat::Xml, &[])
        .await
        .expect("xml context");
    let json: Value = serde_json::from_str(
        &service
            .context(GAME_ID, ContextFormat::Json, &[])
            .await
            .expect("json context"),
    )
    .expect("valid json");

    let preview = &json["damagePreview"];
    let pairs = [
        ("base", &preview["playerDamage"]),
        ("critical", &preview["criticalDamage"]),
        ("taken", &preview["beastMaxDamage"]),
        ("protection", &preview["protectionPercent"]),
    ];
    for (attr, value) in pairs {
        let needle = format!("{attr}=\"{value}\"");
        assert!(xml.contains(&needle), "xml lacks {needle}");
    }
    assert!(xml.contains(&format!(
        "<flee chance=\"{}\"/>",
        json["adventurer"]["fleeChance"]
    )));
    assert!(xml.contains(&format!(
        "health=\"{}\" level=\"{}\" xp=\"{}\" gold=\"{}\"",
        json["adventurer"]["health"],
        json["adventurer"]["level"],
        json["adventurer"]["xp"],
        json["adventurer"]["gold"],
    )));
    assert_eq!(json["market"][0]["name"], "Katana");
    assert_eq!(json["market"][0]["price"], 16);
    assert_eq!(json["recentEvents"][0]["message"], "Encountered Wolf (level 12, 21 HP)");
}

#[tokio::test]
async fn json_field_allow_list() {
    let out = service()
        .context(
            GAME_ID,
            ContextFormat::Json,
            &[ContextField::CurrentBeast, ContextField::DamagePreview],
        )
        .await
        .expect("json context");
    let json: Value = serde_json::from_str(&out).expect("valid json");
    let object = json.as_object().expect("object");

    assert_eq!(object.len(), 2);
    assert_eq!(json["currentBeast"]["name"], "Wolf");
    assert_eq!(json["damagePreview"]["fleeChance"], 75);
}
