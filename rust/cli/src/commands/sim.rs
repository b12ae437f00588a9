//! `holdem sim`: automated players at one table, hand after hand.
//!
//! Every decision comes from a ChaCha generator seeded with the table seed,
//! so a seed reproduces the whole session: cards, actions and results.
//! With `--output` the accepted actions and settled hands are written as
//! JSONL history that `holdem replay` can check.

use std::io::Write;
use std::path::PathBuf;

use holdem_engine::engine::{Engine, NewPlayer};
use holdem_engine::errors::GameError;
use holdem_engine::game::Phase;
use holdem_engine::logger::{HistoryEntry, HistorySink, JsonlHistory};
use holdem_engine::player::{ActionKind, PlayerAction};
use holdem_engine::view::TableEvent;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::{debug, info, warn};

use crate::config;
use crate::error::CliError;
use crate::io_utils::ensure_parent_dir;
use crate::ui;

/// Players bring five buy-ins, so a bust can re-buy a few times.
const WALLET_BUY_INS: u32 = 5;
/// Guards against a hand that never completes.
const MAX_ACTIONS_PER_HAND: usize = 500;

#[derive(Debug, Clone)]
pub struct SimOptions {
    pub hands: u32,
    pub players: u8,
    pub seed: Option<u64>,
    pub output: Option<PathBuf>,
    pub verbose: bool,
}

pub fn handle_sim_command(
    opts: SimOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if opts.hands == 0 {
        return Err(CliError::InvalidInput("hands must be at least 1".into()));
    }
    if opts.verbose {
        init_tracing();
    }

    let cfg = config::load()?;
    let seed = opts.seed.or(cfg.seed).unwrap_or_else(rand::random);
    let mut settings = cfg.game_settings("sim");
    settings.seed = Some(seed);
    settings.auto_post_blinds = true;
    settings.action_timeout_secs = 0;
    let buy_in = settings.buy_in;

    let mut engine = Engine::new(settings)?;
    for i in 1..=opts.players {
        let id = format!("p{i}");
        engine.add_player(NewPlayer::new(id.clone(), id, buy_in * WALLET_BUY_INS))?;
    }

    let mut history = match &opts.output {
        Some(path) => {
            ensure_parent_dir(path)?;
            Some(JsonlHistory::create(path)?)
        }
        None => None,
    };
    // drop anything queued while seating players
    engine.drain_events();

    let mut policy = ChaCha20Rng::seed_from_u64(seed);
    let mut played = 0u32;
    let mut records = 0usize;

    for _ in 0..opts.hands {
        rebuy_busted(&mut engine);
        match engine.start_next_round(false) {
            Ok(dealer) => debug!(round = engine.round(), dealer = %dealer, "hand started"),
            Err(GameError::NotEnoughPlayers) => {
                ui::display_warning(err, "not enough players with chips; stopping early")?;
                break;
            }
            Err(e) => return Err(e.into()),
        }
        play_hand(&mut engine, &mut policy)?;
        played += 1;

        for event in engine.drain_events() {
            let entry = match event {
                TableEvent::Action(rec) => HistoryEntry::Action(rec),
                TableEvent::RoundComplete(rec) => {
                    let pot: u32 = rec.pots.iter().map(|p| p.total).sum();
                    if rec.pots.iter().any(|p| p.residual > 0) {
                        warn!(round = rec.round, "pot left chips undistributed");
                    }
                    info!(round = rec.round, pot, uncontested = rec.uncontested, "hand complete");
                    HistoryEntry::Round(rec)
                }
                TableEvent::Private { .. } | TableEvent::Broadcast { .. } => continue,
            };
            if let Some(sink) = history.as_mut() {
                sink.append(&entry)?;
                records += 1;
            }
        }
    }

    writeln!(out, "Hands played: {}", played)?;
    writeln!(out, "Seed: {}", seed)?;
    for p in engine.players().iter() {
        writeln!(
            out,
            "{}: stack {} wallet {}",
            p.id,
            p.stack.stack(),
            p.stack.wallet()
        )?;
    }
    if let Some(path) = &opts.output {
        writeln!(out, "History: {} records written to {}", records, path.display())?;
    }
    Ok(())
}

fn rebuy_busted(engine: &mut Engine) {
    let busted: Vec<String> = engine
        .players()
        .iter()
        .filter(|p| p.stack.stack() == 0)
        .map(|p| p.id.clone())
        .collect();
    for id in busted {
        match engine.handle_action(PlayerAction::new(id.clone(), ActionKind::ReBuy)) {
            Ok(_) => debug!(player_id = %id, "re-bought"),
            Err(e) => debug!(player_id = %id, error = %e, "re-buy refused"),
        }
    }
}

fn play_hand(engine: &mut Engine, policy: &mut ChaCha20Rng) -> Result<(), CliError> {
    for _ in 0..MAX_ACTIONS_PER_HAND {
        if engine.phase() == Phase::Complete {
            return Ok(());
        }
        let Some(player) = engine.players().action_on().and_then(|i| engine.players().get(i))
        else {
            return Err(CliError::Engine(format!(
                "nobody to act in round {} ({})",
                engine.round(),
                engine.phase()
            )));
        };
        let id = player.id.clone();
        let owed = engine.required_bet().saturating_sub(player.stack.on_table());
        let action = choose(engine, &id, owed, policy);

        match engine.handle_action(action.clone()) {
            Ok(update) => debug!(player_id = %id, action = update.action.as_str(), "acted"),
            Err(e) => {
                debug!(player_id = %id, action = action.kind.as_str(), error = %e, "falling back");
                let fallback = if owed == 0 {
                    ActionKind::Check
                } else {
                    ActionKind::Call
                };
                if engine
                    .handle_action(PlayerAction::new(id.clone(), fallback))
                    .is_err()
                {
                    engine.handle_action(PlayerAction::new(id, ActionKind::Fold))?;
                }
            }
        }
    }
    Err(CliError::Engine(format!(
        "round {} did not finish within {} actions",
        engine.round(),
        MAX_ACTIONS_PER_HAND
    )))
}

/// A loose random player: mostly checks and calls, sometimes raises the
/// minimum, rarely shoves or folds.
fn choose(engine: &Engine, id: &str, owed: u32, rng: &mut ChaCha20Rng) -> PlayerAction {
    let roll: u32 = rng.random_range(0..100);
    let (kind, amount) = if owed == 0 {
        match roll {
            0..70 => (ActionKind::Check, 0),
            70..95 => (ActionKind::Bet, engine.min_raise()),
            _ => (ActionKind::AllIn, 0),
        }
    } else {
        match roll {
            0..15 => (ActionKind::Fold, 0),
            15..75 => (ActionKind::Call, 0),
            75..93 => (
                ActionKind::Raise,
                engine.min_raise().saturating_sub(engine.required_bet()),
            ),
            _ => (ActionKind::AllIn, 0),
        }
    };
    PlayerAction::new(id, kind).with_amount(amount)
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("holdem_cli=debug"));
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(hands: u32, players: u8, seed: u64) -> SimOptions {
        SimOptions {
            hands,
            players,
            seed: Some(seed),
            output: None,
            verbose: false,
        }
    }

    fn sim(o: SimOptions) -> Result<String, CliError> {
        let mut out = Vec::new();
        handle_sim_command(o, &mut out, &mut std::io::sink())?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn zero_hands_is_rejected() {
        assert!(matches!(sim(opts(0, 2, 1)), Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn same_seed_same_session() {
        let a = sim(opts(20, 4, 77)).unwrap();
        let b = sim(opts(20, 4, 77)).unwrap();
        assert_eq!(a, b);
        assert!(a.contains("Hands played: 20"));
    }

    #[test]
    fn chips_are_conserved_across_the_session() {
        let text = sim(opts(30, 3, 5)).unwrap();
        let total: u32 = text
            .lines()
            .filter(|l| l.starts_with('p'))
            .map(|l| {
                let nums: Vec<u32> = l
                    .split_whitespace()
                    .filter_map(|w| w.parse().ok())
                    .collect();
                nums.iter().sum::<u32>()
            })
            .sum();
        let buy_in = config::Config::default().buy_in;
        assert_eq!(total, 3 * buy_in * WALLET_BUY_INS);
    }
}
