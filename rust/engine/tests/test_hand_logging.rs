use std::path::PathBuf;

use holdem_engine::engine::{Engine, NewPlayer};
use holdem_engine::game::Phase;
use holdem_engine::logger::{read_history, HistoryEntry, HistorySink, JsonlHistory, MemoryHistory};
use holdem_engine::player::{ActionKind, PlayerAction};
use holdem_engine::settings::GameSettings;
use holdem_engine::view::TableEvent;

fn run(engine: &mut Engine, id: &str, kind: ActionKind) {
    engine.handle_action(PlayerAction::new(id, kind)).unwrap();
}

fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("holdem-engine-{}-{name}", std::process::id()));
    dir.join("history.jsonl")
}

/// Plays one checked-down hand and returns the history it produced.
fn played_hand() -> Vec<HistoryEntry> {
    let settings = GameSettings {
        seed: Some(99),
        ..GameSettings::default()
    };
    let mut engine = Engine::new(settings).unwrap();
    engine.add_player(NewPlayer::new("ann", "ann", 1000)).unwrap();
    engine.add_player(NewPlayer::new("bob", "bob", 1000)).unwrap();

    run(&mut engine, "ann", ActionKind::Deal);
    run(&mut engine, "ann", ActionKind::PostBlind);
    run(&mut engine, "bob", ActionKind::PostBlind);
    run(&mut engine, "ann", ActionKind::Call);
    run(&mut engine, "bob", ActionKind::Check);
    while engine.phase() != Phase::Complete {
        let on = engine.view().action_on.unwrap();
        run(&mut engine, &on, ActionKind::Check);
    }

    engine
        .drain_events()
        .into_iter()
        .filter_map(|e| match e {
            TableEvent::Action(a) => Some(HistoryEntry::Action(a)),
            TableEvent::RoundComplete(r) => Some(HistoryEntry::Round(r)),
            _ => None,
        })
        .collect()
}

#[test]
fn every_action_and_the_round_are_recorded() {
    let entries = played_hand();
    let actions: Vec<&str> = entries
        .iter()
        .filter_map(|e| match e {
            HistoryEntry::Action(a) => Some(a.action.as_str()),
            HistoryEntry::Round(_) => None,
        })
        .collect();
    assert_eq!(&actions[..5], &["deal", "post_blind", "post_blind", "call", "check"]);
    assert_eq!(actions.len(), 5 + 6);

    let HistoryEntry::Round(round) = entries.last().unwrap() else {
        panic!("round record comes last");
    };
    assert_eq!(round.round, 1);
    assert_eq!(round.board.len(), 5);
    assert!(round.seed.is_some());
    assert_eq!(round.total_won(), round.total_committed());
    assert_eq!(round.players.len(), 2);
    assert!(round.players.iter().all(|p| p.cards.len() == 2 && p.hand.is_some()));
}

#[test]
fn jsonl_round_trip_stamps_times() {
    let path = scratch("roundtrip");
    let entries = played_hand();
    {
        let mut sink = JsonlHistory::create(&path).unwrap();
        for e in &entries {
            sink.append(e).unwrap();
        }
    }

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), entries.len());
    assert!(content.ends_with('\n'));
    assert!(!content.contains('\r'));

    let back = read_history(&path).unwrap();
    assert_eq!(back.len(), entries.len());
    for e in &back {
        let ts = match e {
            HistoryEntry::Action(a) => a.ts.as_deref(),
            HistoryEntry::Round(r) => r.ts.as_deref(),
        };
        let ts = ts.expect("timestamp filled in");
        assert!(chrono::DateTime::parse_from_rfc3339(ts).is_ok(), "{ts}");
    }
    let _ = std::fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn round_records_use_plain_fields() {
    let entries = played_hand();
    let json = serde_json::to_value(entries.last().unwrap()).unwrap();
    assert_eq!(json["kind"], "round");
    assert_eq!(json["table_id"], "table");
    assert!(json["board"][0].is_string());
    assert!(json["players"][0]["committed"]["post_deal"].is_u64());
}

#[test]
fn memory_history_keeps_rounds() {
    let mut memory = MemoryHistory::new();
    for e in played_hand() {
        memory.append(&e).unwrap();
    }
    assert_eq!(memory.rounds().count(), 1);
    assert!(memory.entries().len() > 1);
}

#[test]
fn session_ids_follow_the_request_into_history() {
    let settings = GameSettings {
        seed: Some(99),
        ..GameSettings::default()
    };
    let mut engine = Engine::new(settings).unwrap();
    engine.add_player(NewPlayer::new("ann", "ann", 1000)).unwrap();
    engine.add_player(NewPlayer::new("bob", "bob", 1000)).unwrap();
    engine.drain_events();

    engine
        .handle_action(PlayerAction::new("ann", ActionKind::Deal).from_session("sess-ann"))
        .unwrap();
    run(&mut engine, "ann", ActionKind::PostBlind);

    let sessions: Vec<(String, Option<String>)> = engine
        .drain_events()
        .into_iter()
        .filter_map(|e| match e {
            TableEvent::Action(a) => Some((a.action, a.session_id)),
            _ => None,
        })
        .collect();
    assert_eq!(
        sessions,
        vec![
            ("deal".to_string(), Some("sess-ann".to_string())),
            ("post_blind".to_string(), None),
        ]
    );

    let line = serde_json::to_string(&HistoryEntry::Action(
        match played_hand().remove(0) {
            HistoryEntry::Action(a) => a,
            HistoryEntry::Round(_) => unreachable!("hands start with the deal"),
        },
    ))
    .unwrap();
    assert!(!line.contains("session_id"));
}
