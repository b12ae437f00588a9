use std::sync::{Arc, Mutex};
use std::time::Duration;

use holdem_engine::engine::NewPlayer;
use holdem_engine::game::Phase;
use holdem_engine::player::{ActionKind, PlayerAction};
use holdem_engine::settings::GameSettings;
use holdem_engine::view::Update;
use holdem_server::{EventSubscription, HistoryStore, HistoryWriter, TableError, TableHandle, TablePool};
use tokio::time::timeout;

fn settings(table_id: &str) -> GameSettings {
    GameSettings {
        table_id: table_id.to_string(),
        seed: Some(5),
        ..GameSettings::default()
    }
}

async fn seated(pool: &TablePool, table_id: &str, players: &[&str]) -> TableHandle {
    let table = pool.create_table(settings(table_id)).await.unwrap();
    for id in players {
        table.join(NewPlayer::new(*id, *id, 1000)).await.unwrap();
    }
    table
}

async fn action_on(table: &TableHandle) -> String {
    table.view().await.unwrap().action_on.expect("someone has the action")
}

async fn act(table: &TableHandle, id: &str, kind: ActionKind) {
    table.act(PlayerAction::new(id, kind)).await.unwrap();
}

/// Deals from the first seat and posts both blinds.
async fn start_hand(table: &TableHandle, dealer: &str) {
    act(table, dealer, ActionKind::Deal).await;
    for _ in 0..2 {
        let on = action_on(table).await;
        act(table, &on, ActionKind::PostBlind).await;
    }
    assert_eq!(table.view().await.unwrap().phase, Phase::PostDeal);
}

/// Reads until an update matches or five seconds pass.
async fn wait_for(sub: &mut EventSubscription, pred: impl Fn(&Update) -> bool) -> Option<Update> {
    timeout(Duration::from_secs(5), async {
        while let Some(n) = sub.receiver.recv().await {
            if pred(&n.update) {
                return Some(n.update);
            }
        }
        None
    })
    .await
    .ok()
    .flatten()
}

#[tokio::test]
async fn hole_cards_reach_only_their_owner() {
    let pool = TablePool::default();
    let table = seated(&pool, "cards", &["ann", "ben", "cat"]).await;
    let mut ben = pool.subscribe("cards", "ben").await.unwrap();
    let mut watcher = pool.bus().watch("cards");

    start_hand(&table, "ann").await;

    let dealt = table.hole_cards("ben").await.unwrap();
    assert_eq!(dealt.len(), 2);
    let update = wait_for(&mut ben, |u| matches!(u, Update::HoleCards { .. }))
        .await
        .expect("ben is sent his cards");
    assert_eq!(update, Update::HoleCards { cards: dealt });

    let mut saw_state = false;
    while let Ok(n) = watcher.receiver.try_recv() {
        assert!(!matches!(n.update, Update::HoleCards { .. }));
        saw_state |= matches!(n.update, Update::State(_));
    }
    assert!(saw_state);
}

#[tokio::test]
async fn stale_phase_is_rejected_and_resynced() {
    let pool = TablePool::default();
    let table = seated(&pool, "stale", &["ann", "ben"]).await;
    let mut ann = pool.subscribe("stale", "ann").await.unwrap();

    let err = table
        .act(PlayerAction::new("ann", ActionKind::Check).in_phase(Phase::Flop))
        .await
        .unwrap_err();
    assert_eq!(err.code(), "state_mismatch");

    let update = wait_for(&mut ann, |u| matches!(u, Update::State(_))).await;
    match update {
        Some(Update::State(view)) => assert_eq!(view.phase, Phase::Complete),
        other => panic!("expected a state resync, got {other:?}"),
    }
}

#[tokio::test]
async fn rejected_actions_leave_the_table_usable() {
    let pool = TablePool::default();
    let table = seated(&pool, "errors", &["ann", "ben", "cat"]).await;
    act(&table, "ann", ActionKind::Deal).await;

    let on = action_on(&table).await;
    let other = if on == "ann" { "cat" } else { "ann" };
    let err = table.act(PlayerAction::new(other, ActionKind::Check)).await.unwrap_err();
    assert!(matches!(err, TableError::Game(_)));

    act(&table, &on, ActionKind::PostBlind).await;
    assert_eq!(table.view().await.unwrap().phase, Phase::PreDeal);
}

#[tokio::test]
async fn player_out_of_time_has_their_blind_posted() {
    let pool = TablePool::default();
    let quick = GameSettings {
        action_timeout_secs: 1,
        ..settings("clock")
    };
    let table = pool.create_table(quick).await.unwrap();
    for id in ["ann", "ben", "cat"] {
        table.join(NewPlayer::new(id, id, 1000)).await.unwrap();
    }
    let mut watcher = pool.bus().watch("clock");
    act(&table, "ann", ActionKind::Deal).await;
    let small = action_on(&table).await;

    let update = wait_for(&mut watcher, |u| matches!(u, Update::Automated { .. })).await;
    assert_eq!(
        update,
        Some(Update::Automated {
            player_id: small.clone(),
            action: ActionKind::PostBlind,
        })
    );
    let view = table.view().await.unwrap();
    let seat = view.seats.iter().find(|s| s.player_id == small).unwrap();
    assert_eq!(seat.on_table, 1);
}

#[tokio::test]
async fn leaving_returns_the_buy_in_and_runs_the_hook() {
    let removed = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&removed);
    let pool = TablePool::default().on_player_removed(move |table_id, player| {
        log.lock().unwrap().push((table_id.to_string(), player.id.clone()));
    });
    let table = seated(&pool, "leave", &["ann", "ben"]).await;

    assert_eq!(table.leave("ben").await.unwrap(), 1000);
    assert_eq!(
        *removed.lock().unwrap(),
        vec![("leave".to_string(), "ben".to_string())]
    );
    assert!(matches!(
        table.leave("ben").await,
        Err(TableError::Game(_))
    ));
    assert_eq!(table.view().await.unwrap().seats.len(), 1);
}

#[tokio::test]
async fn finished_hands_are_written_to_history() {
    let store = HistoryStore::new();
    let writer = HistoryWriter::spawn(store.clone());
    let pool = TablePool::default().with_history(writer.clone());
    let table = seated(&pool, "hist", &["ann", "ben"]).await;

    start_hand(&table, "ann").await;
    let on = action_on(&table).await;
    act(&table, &on, ActionKind::Fold).await;
    assert_eq!(table.view().await.unwrap().phase, Phase::Complete);

    writer.flush().await;
    let record = store.round("hist", 1).unwrap().expect("round recorded");
    assert!(record.uncontested);
    assert_eq!(record.total_won(), record.total_committed());
    let actions = store.actions("hist", 1).unwrap();
    let kinds: Vec<&str> = actions.iter().map(|a| a.action.as_str()).collect();
    assert!(kinds.contains(&"fold"));
    assert!(kinds.contains(&"post_blind"));
}

#[tokio::test]
async fn blinds_can_be_stepped_up_on_request() {
    let pool = TablePool::default();
    let schedule = GameSettings {
        blind_increase: Some(holdem_engine::settings::BlindIncrease {
            interval_secs: 3600,
            max_big_blind: 4,
        }),
        ..settings("levels")
    };
    let table = pool.create_table(schedule).await.unwrap();
    assert_eq!(table.increase_blinds().await.unwrap(), Some((2, 4)));
    assert_eq!(table.increase_blinds().await.unwrap(), None);
}
