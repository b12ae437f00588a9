use std::time::{Duration, Instant};

use holdem_engine::cards::Card;
use holdem_engine::engine::{Engine, NewPlayer};
use holdem_engine::errors::GameError;
use holdem_engine::game::Phase;
use holdem_engine::player::{ActionKind, PlayerAction};
use holdem_engine::settings::GameSettings;
use holdem_engine::state::Blinds;
use holdem_engine::view::{DealOutcome, TableEvent, Update};

fn table(n: usize) -> Engine {
    let settings = GameSettings {
        seed: Some(11),
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

fn act(engine: &mut Engine, id: &str, kind: ActionKind) -> Result<Option<DealOutcome>, GameError> {
    engine
        .handle_action(PlayerAction::new(id, kind))
        .map(|u| u.outcome)
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

/// Deals a hand and posts both blinds.
fn start_hand(engine: &mut Engine) {
    let d = dealer(engine);
    act(engine, &d, ActionKind::Deal).unwrap();
    for _ in 0..2 {
        let on = action_on(engine);
        act(engine, &on, ActionKind::PostBlind).unwrap();
    }
    assert_eq!(engine.phase(), Phase::PostDeal);
}

fn check_street(engine: &mut Engine) {
    let phase = engine.phase();
    while engine.phase() == phase {
        let on = action_on(engine);
        act(engine, &on, ActionKind::Check).unwrap();
    }
}

#[test]
fn three_handed_hand_plays_to_showdown() {
    let mut engine = table(3);
    assert_eq!(dealer(&engine), "p0");

    act(&mut engine, "p0", ActionKind::Deal).unwrap();
    assert_eq!(engine.phase(), Phase::PreDeal);
    assert_eq!(action_on(&engine), "p1");
    assert_eq!(engine.player("p1").unwrap().state.blinds_due(), Blinds::Small);
    assert_eq!(engine.player("p2").unwrap().state.blinds_due(), Blinds::Big);

    assert_eq!(act(&mut engine, "p1", ActionKind::PostBlind).unwrap(), Some(DealOutcome::BlindsDue));
    assert_eq!(act(&mut engine, "p2", ActionKind::PostBlind).unwrap(), Some(DealOutcome::Dealt));
    assert_eq!(engine.phase(), Phase::PostDeal);
    assert_eq!(engine.required_bet(), 2);
    assert_eq!(engine.min_raise(), 4);
    for id in ["p0", "p1", "p2"] {
        assert_eq!(engine.hole_cards(id).unwrap().len(), 2);
    }

    assert_eq!(action_on(&engine), "p0");
    act(&mut engine, "p0", ActionKind::Call).unwrap();
    let outcome = act(&mut engine, "p1", ActionKind::Call).unwrap();
    assert_eq!(outcome, Some(DealOutcome::WaitingBigBlindCheck));
    assert_eq!(action_on(&engine), "p2");

    act(&mut engine, "p2", ActionKind::Check).unwrap();
    assert_eq!(engine.phase(), Phase::Flop);
    assert_eq!(engine.board().len(), 3);
    assert_eq!(engine.pot(), 6);
    assert_eq!(action_on(&engine), "p1");

    check_street(&mut engine);
    assert_eq!(engine.phase(), Phase::Turn);
    assert_eq!(engine.board().len(), 4);
    check_street(&mut engine);
    assert_eq!(engine.phase(), Phase::River);
    check_street(&mut engine);

    assert_eq!(engine.phase(), Phase::Complete);
    assert_eq!(engine.board().len(), 5);
    assert_eq!(engine.pots().total(), 6);
    assert_eq!(engine.chips_in_play(), 600);
    assert_eq!(dealer(&engine), "p1");
    assert_eq!(action_on(&engine), "p1");

    let events = engine.drain_events();
    let record = events
        .iter()
        .find_map(|e| match e {
            TableEvent::RoundComplete(r) => Some(r),
            _ => None,
        })
        .expect("round record");
    assert_eq!(record.round, 1);
    assert!(!record.uncontested);
    assert_eq!(record.total_committed(), 6);
    assert_eq!(record.total_won(), 6);
    assert!(events.iter().any(|e| matches!(
        e,
        TableEvent::Broadcast { update: Update::Reveal { .. }, .. }
    )));
}

#[test]
fn hole_cards_are_sent_privately() {
    let mut engine = table(2);
    start_hand(&mut engine);
    let events = engine.drain_events();
    for id in ["p0", "p1"] {
        let cards = engine.hole_cards(id).unwrap().to_vec();
        assert!(events.iter().any(|e| matches!(
            e,
            TableEvent::Private { player_id, update: Update::HoleCards { cards: sent }, .. }
                if player_id == id && *sent == cards
        )));
    }
    let view = serde_json::to_string(&engine.view()).unwrap();
    assert!(!view.contains("cards"));
}

#[test]
fn last_player_standing_takes_the_pot() {
    let mut engine = table(3);
    start_hand(&mut engine);
    act(&mut engine, "p0", ActionKind::Fold).unwrap();
    let outcome = act(&mut engine, "p1", ActionKind::Fold).unwrap();
    assert_eq!(outcome, Some(DealOutcome::AutoCompleting));

    assert_eq!(engine.phase(), Phase::Complete);
    assert_eq!(engine.player("p0").unwrap().stack.stack(), 200);
    assert_eq!(engine.player("p1").unwrap().stack.stack(), 199);
    assert_eq!(engine.player("p2").unwrap().stack.stack(), 201);
    assert_eq!(engine.chips_in_play(), 600);

    let events = engine.drain_events();
    assert!(events.iter().any(|e| matches!(
        e,
        TableEvent::Broadcast { update: Update::Status { message }, .. } if message == "h2 takes the pot!"
    )));
    assert!(events
        .iter()
        .any(|e| matches!(e, TableEvent::RoundComplete(r) if r.uncontested)));
}

#[test]
fn all_in_runs_out_the_board() {
    let mut engine = table(2);
    // heads-up the dealer posts the small blind and acts first
    start_hand(&mut engine);
    assert_eq!(action_on(&engine), "p0");

    act(&mut engine, "p0", ActionKind::AllIn).unwrap();
    assert_eq!(engine.required_bet(), 200);
    assert!(engine.player("p0").unwrap().state.is_all_in());

    let outcome = act(&mut engine, "p1", ActionKind::Call).unwrap();
    assert_eq!(outcome, Some(DealOutcome::AutoCompleting));
    assert_eq!(engine.phase(), Phase::Complete);
    assert_eq!(engine.board().len(), 5);
    assert_eq!(engine.chips_in_play(), 400);
    assert_eq!(engine.pots().total(), 400);
}

#[test]
fn deal_listener_can_fix_the_cards() {
    let mut engine = table(2);
    let aces = Card::parse_many(["AS", "AH"]).unwrap();
    let kings = Card::parse_many(["KS", "KH"]).unwrap();
    let board = Card::parse_many(["2C", "7D", "9H", "JS", "3C"]).unwrap();
    engine.add_deal_listener(move |_, phase, dealt, players| {
        if matches!(phase, Phase::PreDeal | Phase::Complete) {
            return;
        }
        for p in players.iter_mut() {
            match p.id.as_str() {
                "p0" => p.set_cards(aces.clone()),
                "p1" => p.set_cards(kings.clone()),
                _ => {}
            }
        }
        let n = dealt.len();
        dealt.clear();
        dealt.extend_from_slice(&board[..n]);
    });

    start_hand(&mut engine);
    act(&mut engine, "p0", ActionKind::AllIn).unwrap();
    act(&mut engine, "p1", ActionKind::Call).unwrap();

    assert_eq!(engine.phase(), Phase::Complete);
    assert_eq!(engine.player("p0").unwrap().stack.stack(), 400);
    assert_eq!(engine.player("p1").unwrap().stack.stack(), 0);
    assert!(engine.player("p1").unwrap().state.is_sitting_out());
    assert_eq!(engine.pots().winners(), vec!["p0".to_string()]);

    assert_eq!(
        engine.start_next_round(false),
        Err(GameError::NotEnoughPlayers)
    );

    act(&mut engine, "p1", ActionKind::ReBuy).unwrap();
    let p1 = engine.player("p1").unwrap();
    assert_eq!(p1.stack.stack(), 200);
    assert_eq!(p1.stack.wallet(), 600);
    assert!(!p1.state.is_sitting_out());
}

#[test]
fn unrankable_hand_is_reported_and_loses() {
    let mut engine = table(2);
    engine.add_deal_listener(|_, phase, board, players| {
        if phase != Phase::River {
            return;
        }
        let stolen = board[..2].to_vec();
        if let Some(p) = players.iter_mut().find(|p| p.id == "p1") {
            p.set_cards(stolen);
        }
    });

    start_hand(&mut engine);
    engine.drain_events();
    act(&mut engine, "p0", ActionKind::AllIn).unwrap();
    act(&mut engine, "p1", ActionKind::Call).unwrap();

    assert_eq!(engine.phase(), Phase::Complete);
    assert_eq!(engine.pots().winners(), vec!["p0".to_string()]);
    assert_eq!(engine.player("p0").unwrap().stack.stack(), 400);
    assert!(engine.player("p1").unwrap().best_hand.is_none());
    let reported = engine.drain_events().into_iter().any(|e| {
        matches!(
            e,
            TableEvent::Broadcast { update: Update::Status { message }, .. }
                if message.starts_with("Could not rank h1's hand")
        )
    });
    assert!(reported);
}

#[test]
fn raises_below_the_minimum_are_rejected() {
    let mut engine = table(3);
    start_hand(&mut engine);

    let err = engine
        .handle_action(PlayerAction::new("p0", ActionKind::Raise).with_amount(1))
        .unwrap_err();
    assert_eq!(err, GameError::InvalidBetAmount { amount: 1, minimum: 2 });

    engine
        .handle_action(PlayerAction::new("p0", ActionKind::Raise).with_amount(4))
        .unwrap();
    assert_eq!(engine.required_bet(), 6);
    assert_eq!(engine.min_raise(), 10);

    engine
        .handle_action(PlayerAction::new("p1", ActionKind::Bet).with_amount(10))
        .unwrap();
    assert_eq!(engine.required_bet(), 10);
    assert_eq!(engine.min_raise(), 14);
}

#[test]
fn turn_order_and_blinds_are_enforced() {
    let mut engine = table(3);
    act(&mut engine, "p0", ActionKind::Deal).unwrap();

    assert_eq!(
        act(&mut engine, "p2", ActionKind::PostBlind),
        Err(GameError::NotPlayersTurn("h2".to_string()))
    );
    assert_eq!(act(&mut engine, "p1", ActionKind::Call), Err(GameError::BlindDue));
    assert_eq!(act(&mut engine, "p0", ActionKind::Deal), Err(GameError::RoundInProgress));
    assert_eq!(
        act(&mut engine, "ghost", ActionKind::Check),
        Err(GameError::PlayerNotFound("ghost".to_string()))
    );
}

#[test]
fn stale_phase_is_rejected_without_change() {
    let mut engine = table(3);
    act(&mut engine, "p0", ActionKind::Deal).unwrap();
    engine.drain_events();
    let before = engine.view();

    let err = engine
        .handle_action(PlayerAction::new("p1", ActionKind::PostBlind).in_phase(Phase::Flop))
        .unwrap_err();
    assert_eq!(
        err,
        GameError::StateMismatch {
            expected: Phase::PreDeal,
            submitted: Phase::Flop
        }
    );
    assert_eq!(engine.view(), before);
    assert!(engine.drain_events().is_empty());

    engine
        .handle_action(PlayerAction::new("p1", ActionKind::PostBlind).in_phase(Phase::PreDeal))
        .unwrap();
}

#[test]
fn timeouts_post_blinds_then_fold() {
    let mut engine = table(3);
    act(&mut engine, "p0", ActionKind::Deal).unwrap();

    let now = Instant::now();
    assert!(engine.handle_timeout(now).unwrap().is_none());
    let deadline = engine.next_deadline().expect("small blind is on the clock");
    assert!(deadline > now);

    let later = now + Duration::from_secs(31);
    let update = engine.handle_timeout(later).unwrap().expect("blind posted");
    assert_eq!(update.action, ActionKind::PostBlind);
    assert!(update.automated);

    let update = engine.handle_timeout(later + Duration::from_secs(31)).unwrap().unwrap();
    assert_eq!(update.action, ActionKind::PostBlind);
    assert_eq!(engine.phase(), Phase::PostDeal);

    let update = engine
        .handle_timeout(later + Duration::from_secs(62))
        .unwrap()
        .unwrap();
    assert_eq!(update.action, ActionKind::Fold);
    assert_eq!(update.player_id, "p0");
    assert!(engine.player("p0").unwrap().state.is_folded());

    let events = engine.drain_events();
    assert!(events.iter().any(|e| matches!(
        e,
        TableEvent::Broadcast { update: Update::Automated { player_id, action: ActionKind::Fold }, .. }
            if player_id == "p0"
    )));
    assert!(events
        .iter()
        .any(|e| matches!(e, TableEvent::Action(a) if a.automated && a.action == "post_blind")));
}

#[test]
fn timeout_checks_when_nothing_is_owed() {
    let mut engine = table(3);
    start_hand(&mut engine);
    act(&mut engine, "p0", ActionKind::Call).unwrap();
    act(&mut engine, "p1", ActionKind::Call).unwrap();
    act(&mut engine, "p2", ActionKind::Check).unwrap();
    assert_eq!(engine.phase(), Phase::Flop);

    let update = engine
        .handle_timeout(Instant::now() + Duration::from_secs(60))
        .unwrap()
        .unwrap();
    assert_eq!(update.action, ActionKind::Check);
    assert_eq!(update.player_id, "p1");
    assert!(!engine.player("p1").unwrap().state.is_folded());
}

#[test]
fn auto_posted_blinds_deal_at_once() {
    let settings = GameSettings {
        auto_post_blinds: true,
        seed: Some(3),
        ..GameSettings::default()
    };
    let mut engine = Engine::new(settings).unwrap();
    for id in ["a", "b", "c"] {
        engine.add_player(NewPlayer::new(id, id, 500)).unwrap();
    }
    let dealer = engine.start_next_round(false).unwrap();
    assert_eq!(dealer, "a");
    assert_eq!(engine.phase(), Phase::PostDeal);
    assert_eq!(engine.player("b").unwrap().stack.on_table(), 1);
    assert_eq!(engine.player("c").unwrap().stack.on_table(), 2);
    assert_eq!(action_on(&engine), "a");
}

#[test]
fn blind_increases_apply_from_the_next_hand() {
    let settings = GameSettings {
        seed: Some(1),
        blind_increase: Some(holdem_engine::settings::BlindIncrease {
            interval_secs: 600,
            max_big_blind: 8,
        }),
        ..GameSettings::default()
    };
    let mut engine = Engine::new(settings).unwrap();
    engine.add_player(NewPlayer::new("a", "a", 500)).unwrap();
    engine.add_player(NewPlayer::new("b", "b", 500)).unwrap();

    assert_eq!(engine.increase_blinds(), Some((2, 4)));
    assert_eq!(engine.increase_blinds(), Some((4, 8)));
    assert_eq!(engine.increase_blinds(), None);
    assert_eq!(engine.blinds(), (1, 2));

    engine.start_next_round(false).unwrap();
    assert_eq!(engine.blinds(), (4, 8));
    assert_eq!(engine.min_raise(), 8);
}
