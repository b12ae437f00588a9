use holdem_engine::engine::{Engine, NewPlayer};
use holdem_engine::errors::GameError;
use holdem_engine::game::Phase;
use holdem_engine::player::{ActionKind, PlayerAction};
use holdem_engine::settings::{GameSettings, SettingsError};
use holdem_engine::state::Blinds;
use holdem_engine::view::{TableEvent, Update};

fn table(n: usize) -> Engine {
    let settings = GameSettings {
        seed: Some(21),
        ..GameSettings::default()
    };
    let mut engine = Engine::new(settings).unwrap();
    for i in 0..n {
        engine
            .add_player(NewPlayer::new(format!("p{i}"), format!("h{i}"), 1000))
            .unwrap();
    }
    engine
}

/// A table whose variant needs at least three players.
fn three_handed_minimum(n: usize) -> Engine {
    let mut settings = GameSettings {
        seed: Some(21),
        auto_post_blinds: true,
        ..GameSettings::default()
    };
    settings.variant.min_players = 3;
    let mut engine = Engine::new(settings).unwrap();
    for i in 0..n {
        engine
            .add_player(NewPlayer::new(format!("p{i}"), format!("h{i}"), 1000))
            .unwrap();
    }
    engine
}

fn act(engine: &mut Engine, id: &str, kind: ActionKind) -> Result<(), GameError> {
    engine.handle_action(PlayerAction::new(id, kind)).map(|_| ())
}

fn action_on(engine: &Engine) -> String {
    engine.view().action_on.expect("someone has the action")
}

fn dealer(engine: &Engine) -> String {
    engine
        .view()
        .seats
        .iter()
        .find(|s| s.dealer)
        .map(|s| s.player_id.clone())
        .expect("a dealer")
}

fn start_hand(engine: &mut Engine) {
    let d = dealer(engine);
    act(engine, &d, ActionKind::Deal).unwrap();
    while engine.phase() == Phase::PreDeal {
        let on = action_on(engine);
        act(engine, &on, ActionKind::PostBlind).unwrap();
    }
}

/// Plays a hand where everyone folds to the big blind.
fn fold_out(engine: &mut Engine) {
    let d = dealer(engine);
    act(engine, &d, ActionKind::Deal).unwrap();
    while engine.phase() != Phase::Complete {
        let on = action_on(engine);
        let kind = match engine.player(&on).unwrap().state.blinds_due() {
            Blinds::None => ActionKind::Fold,
            _ => ActionKind::PostBlind,
        };
        act(engine, &on, kind).unwrap();
    }
}

fn to_flop(engine: &mut Engine) {
    start_hand(engine);
    while engine.phase() == Phase::PostDeal {
        let on = action_on(engine);
        let p = engine.player(&on).unwrap();
        let kind = if p.stack.on_table() < engine.required_bet() {
            ActionKind::Call
        } else {
            ActionKind::Check
        };
        act(engine, &on, kind).unwrap();
    }
}

#[test]
fn invalid_settings_are_rejected() {
    let settings = GameSettings {
        small_blind: 5,
        big_blind: 2,
        ..GameSettings::default()
    };
    assert!(matches!(
        Engine::new(settings),
        Err(SettingsError::InvalidValue(_))
    ));
}

#[test]
fn first_player_hosts_and_deals() {
    let engine = table(2);
    let p0 = engine.player("p0").unwrap();
    assert!(p0.state.is_host());
    assert!(p0.state.is_dealer());
    assert!(!engine.player("p1").unwrap().state.is_host());
    assert_eq!(engine.phase(), Phase::Complete);
    assert_eq!(p0.stack.stack(), 200);
    assert_eq!(p0.stack.wallet(), 800);
}

#[test]
fn bad_joins_leave_the_table_unchanged() {
    let mut engine = table(2);
    let attempts = [
        NewPlayer::new("", "blank", 1000),
        NewPlayer::new("new", "   ", 1000),
        NewPlayer::new("two words", "x", 1000),
        NewPlayer::new("new", "has space", 1000),
        NewPlayer::new("P0", "fresh", 1000),
        NewPlayer::new("fresh", "H1", 1000),
        NewPlayer::new("poor", "poor", 199),
    ];
    for attempt in attempts {
        let err = engine.add_player(attempt.clone()).unwrap_err();
        assert!(matches!(err, GameError::InvalidPlayer(_)), "{attempt:?} gave {err:?}");
    }
    assert_eq!(engine.players().len(), 2);
}

#[test]
fn full_table_rejects_joins() {
    let mut engine = table(9);
    let err = engine
        .add_player(NewPlayer::new("p9", "h9", 1000))
        .unwrap_err();
    assert!(matches!(err, GameError::InvalidPlayer(_)));
    assert_eq!(engine.players().len(), 9);
}

#[test]
fn one_player_cannot_start() {
    let mut engine = table(1);
    assert_eq!(act(&mut engine, "p0", ActionKind::Deal), Err(GameError::NotEnoughPlayers));
    assert_eq!(engine.phase(), Phase::Complete);
}

#[test]
fn mid_hand_joiner_waits_for_the_next_hand() {
    let mut engine = table(3);
    to_flop(&mut engine);
    assert_eq!(engine.phase(), Phase::Flop);

    let seat = engine.add_player(NewPlayer::new("late", "late", 500)).unwrap();
    assert_eq!(seat, 3);
    let late = engine.players().position("late").unwrap();
    assert!(engine.player("late").unwrap().state.is_sitting_out());
    assert!(!engine.players().in_hand().contains(&late));

    while engine.phase() != Phase::Complete {
        let on = action_on(&engine);
        assert_ne!(on, "late");
        act(&mut engine, &on, ActionKind::Check).unwrap();
    }
    assert!(engine.player("late").unwrap().state.is_sitting_out());
    assert!(engine.player("late").unwrap().cards().is_empty());

    start_hand(&mut engine);
    assert!(!engine.player("late").unwrap().state.is_sitting_out());
    assert_eq!(engine.hole_cards("late").unwrap().len(), 2);
}

#[test]
fn dealer_rotation_skips_sitters_and_wraps() {
    let mut engine = table(4);
    act(&mut engine, "p2", ActionKind::SitOut).unwrap();
    assert!(engine.player("p2").unwrap().state.is_sitting_out());

    let mut dealers = Vec::new();
    for _ in 0..3 {
        fold_out(&mut engine);
        dealers.push(dealer(&engine));
    }
    assert_eq!(dealers, vec!["p1", "p3", "p0"]);
    assert_eq!(engine.chips_in_play(), 800);
}

#[test]
fn sit_out_mid_hand_waits_and_checks_on_the_clock() {
    let mut engine = table(3);
    to_flop(&mut engine);
    assert_eq!(action_on(&engine), "p1");

    let update = engine
        .handle_action(PlayerAction::new("p1", ActionKind::SitOut))
        .unwrap();
    let p1 = engine.player("p1").unwrap();
    assert!(!p1.state.is_sitting_out());
    assert!(p1.state.sits_out_next_round());
    assert!(!p1.state.is_folded());
    assert_eq!(p1.state.last_action(), Some(ActionKind::Check));
    assert_eq!(update.view.action_on.as_deref(), Some("p2"));

    let events = engine.drain_events();
    assert!(events.iter().any(|e| matches!(
        e,
        TableEvent::Broadcast { update: Update::Automated { action: ActionKind::Check, .. }, .. }
    )));

    // asking again before the hand ends cancels it
    act(&mut engine, "p1", ActionKind::SitOut).unwrap();
    assert!(!engine.player("p1").unwrap().state.sits_out_next_round());
}

#[test]
fn cash_out_mid_hand_folds_and_moves_the_action() {
    let mut engine = table(3);
    to_flop(&mut engine);
    assert_eq!(action_on(&engine), "p1");

    act(&mut engine, "p1", ActionKind::CashOut).unwrap();
    assert_eq!(engine.players().len(), 2);
    assert!(engine.player("p1").is_none());
    assert_eq!(action_on(&engine), "p2");
    assert_eq!(engine.chips_in_play() + 198, 600);

    while engine.phase() != Phase::Complete {
        let on = action_on(&engine);
        act(&mut engine, &on, ActionKind::Check).unwrap();
    }
    assert_eq!(engine.chips_in_play() + 198, 600);

    let events = engine.drain_events();
    assert!(events.iter().any(|e| matches!(
        e,
        TableEvent::Broadcast { update: Update::Removed { player_id, .. }, .. } if player_id == "p1"
    )));
    let record = events
        .iter()
        .find_map(|e| match e {
            TableEvent::RoundComplete(r) => Some(r),
            _ => None,
        })
        .unwrap();
    let departed = record.players.iter().find(|p| p.player_id == "p1").unwrap();
    assert!(departed.departed);
    assert_eq!(departed.wallet, 998);
    assert_eq!(record.total_committed(), 6);
}

#[test]
fn removal_leaving_one_player_ends_the_hand() {
    let mut engine = table(2);
    start_hand(&mut engine);
    let mut removed = Vec::new();
    let (tx, rx) = std::sync::mpsc::channel();
    engine.add_removed_listener(move |table, p| {
        let _ = tx.send((table.to_string(), p.id.clone()));
    });

    let gone = engine.remove_player("p1").unwrap();
    removed.extend(rx.try_iter());
    assert_eq!(removed, vec![("table".to_string(), "p1".to_string())]);
    assert_eq!(gone.stack.wallet(), 998);
    assert_eq!(engine.phase(), Phase::Complete);
    assert_eq!(engine.player("p0").unwrap().stack.stack(), 202);
}

#[test]
fn removal_below_the_variant_minimum_settles_the_hand() {
    let mut engine = three_handed_minimum(3);
    engine.start_next_round(false).unwrap();
    assert_eq!(engine.phase(), Phase::PostDeal);
    engine.drain_events();

    let on = action_on(&engine);
    let leaver = ["p0", "p1", "p2"]
        .into_iter()
        .find(|id| *id != on)
        .unwrap()
        .to_string();
    let gone = engine.remove_player(&leaver).unwrap();

    assert_eq!(engine.phase(), Phase::Complete);
    assert_eq!(engine.pot(), 0);
    let record = engine
        .drain_events()
        .into_iter()
        .find_map(|e| match e {
            TableEvent::RoundComplete(rec) => Some(rec),
            _ => None,
        })
        .expect("the hand is recorded");
    assert!(!record.uncontested);
    assert_eq!(record.board.len(), 5);
    assert_eq!(record.total_won(), record.total_committed());

    let seated: u32 = engine
        .players()
        .iter()
        .map(|p| p.stack.stack() + p.stack.wallet())
        .sum();
    assert_eq!(seated + gone.stack.wallet(), 3000);
}

#[test]
fn removal_above_the_variant_minimum_keeps_playing() {
    let mut engine = three_handed_minimum(4);
    engine.start_next_round(false).unwrap();
    let on = action_on(&engine);
    let leaver = ["p0", "p1", "p2", "p3"]
        .into_iter()
        .find(|id| *id != on)
        .unwrap()
        .to_string();
    engine.remove_player(&leaver).unwrap();
    assert_eq!(engine.phase(), Phase::PostDeal);
    assert_eq!(action_on(&engine), on);
}

#[test]
fn rejected_start_leaves_the_table_untouched() {
    let mut engine = table(3);
    fold_out(&mut engine);
    act(&mut engine, "p1", ActionKind::SitOut).unwrap();
    act(&mut engine, "p2", ActionKind::SitOut).unwrap();
    let cards = engine.hole_cards("p0").unwrap().to_vec();
    let before = engine.view();

    assert_eq!(engine.start_next_round(false), Err(GameError::NotEnoughPlayers));
    assert_eq!(cards.len(), 2);
    assert_eq!(engine.hole_cards("p0").unwrap(), cards.as_slice());
    assert_eq!(engine.view().action_on, before.action_on);
    assert_eq!(engine.round(), before.round);
}

#[test]
fn leaving_before_the_deal_returns_the_blinds() {
    let mut engine = table(3);
    act(&mut engine, "p0", ActionKind::Deal).unwrap();
    act(&mut engine, "p1", ActionKind::PostBlind).unwrap();
    assert_eq!(engine.player("p1").unwrap().stack.stack(), 199);

    act(&mut engine, "p0", ActionKind::CashOut).unwrap();
    assert_eq!(engine.phase(), Phase::Complete);
    let p1 = engine.player("p1").unwrap();
    assert_eq!(p1.stack.stack(), 200);
    assert!(p1.state.is_dealer());
    assert!(p1.state.is_host());
    assert_eq!(action_on(&engine), "p1");
}

#[test]
fn only_the_host_evicts() {
    let mut engine = table(3);
    let err = engine
        .handle_action(PlayerAction::new("p1", ActionKind::Evict).against("p2"))
        .unwrap_err();
    assert!(matches!(err, GameError::ActionNotAllowed(_)));

    let err = engine
        .handle_action(PlayerAction::new("p0", ActionKind::Evict).against("p0"))
        .unwrap_err();
    assert!(matches!(err, GameError::ActionNotAllowed(_)));

    engine
        .handle_action(PlayerAction::new("p0", ActionKind::Evict).against("p2"))
        .unwrap();
    assert!(engine.player("p2").is_none());
    assert_eq!(engine.players().len(), 2);
}

#[test]
fn reveal_needs_a_fold_or_a_finished_hand() {
    let mut engine = table(3);
    start_hand(&mut engine);
    assert!(matches!(
        act(&mut engine, "p1", ActionKind::Reveal),
        Err(GameError::ActionNotAllowed(_))
    ));
    act(&mut engine, "p0", ActionKind::Fold).unwrap();
    engine.drain_events();
    act(&mut engine, "p0", ActionKind::Reveal).unwrap();
    let cards = engine.hole_cards("p0").unwrap().to_vec();
    assert!(engine.drain_events().iter().any(|e| matches!(
        e,
        TableEvent::Broadcast { update: Update::Reveal { player_id, cards: shown, winner: false, .. }, .. }
            if player_id == "p0" && *shown == cards
    )));
}

#[test]
fn re_buy_needs_a_short_stack() {
    let mut engine = table(2);
    assert!(matches!(
        act(&mut engine, "p0", ActionKind::ReBuy),
        Err(GameError::ActionNotAllowed(_))
    ));
}
