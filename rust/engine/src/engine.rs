use std::collections::{BTreeMap, VecDeque};
use std::fmt;
use std::time::Instant;

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::game::{Phase, Players};
use crate::hand::evaluate_hand;
use crate::logger::{ActionRecord, PlayerSnapshot, PotRecord, RoundRecord};
use crate::player::{ActionKind, Player, PlayerAction, RebuyOutcome};
use crate::pot::{calculate_pots, GamePots, PotEntrant, SidePot};
use crate::rules::{validate_action, BetContext, ValidatedAction};
use crate::settings::{GameSettings, SettingsError, ShuffleOption};
use crate::state::{Blinds, PlayerState, SitNextRound};
use crate::view::{DealOutcome, GameUpdate, SeatView, TableEvent, TableView, Update};

/// Called after every deal step with the outcome, the phase reached, the
/// board and the players, which it may change.
pub type DealListener = Box<dyn FnMut(DealOutcome, Phase, &mut Vec<Card>, &mut [Player]) + Send>;

/// Called with the table id and the player as they leave.
pub type RemovedListener = Box<dyn FnMut(&str, &Player) + Send>;

const BLIND_DUE_DELAY_MS: u64 = 250;
const STATUS_DELAY_MS: u64 = 1000;
const HOLE_CARDS_DELAY_MS: u64 = 2000;

/// Someone asking for a seat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPlayer {
    pub id: String,
    pub handle: String,
    /// Chips available off the table; the buy-in is taken from here
    pub wallet: u32,
}

impl NewPlayer {
    pub fn new(id: impl Into<String>, handle: impl Into<String>, wallet: u32) -> Self {
        Self {
            id: id.into(),
            handle: handle.into(),
            wallet,
        }
    }
}

/// Round orchestrator for one table.
///
/// Drives a hand through [`Phase::PreDeal`] (blinds), [`Phase::PostDeal`]
/// (hole cards, preflop betting), the flop, turn and river, and settles it at
/// [`Phase::Complete`]. Every method is synchronous and the engine holds no
/// locks; the host must feed it one action at a time.
///
/// Nothing leaves the engine except through return values and the event
/// queue ([`Engine::drain_events`]).
///
/// # Examples
///
/// ```
/// use holdem_engine::engine::{Engine, NewPlayer};
/// use holdem_engine::game::Phase;
/// use holdem_engine::player::{ActionKind, PlayerAction};
/// use holdem_engine::settings::GameSettings;
///
/// let settings = GameSettings { seed: Some(7), ..GameSettings::default() };
/// let mut engine = Engine::new(settings).unwrap();
/// engine.add_player(NewPlayer::new("ann", "ann", 500)).unwrap();
/// engine.add_player(NewPlayer::new("bob", "bob", 500)).unwrap();
///
/// // The first player to sit down holds the button and starts the hand
/// engine.handle_action(PlayerAction::new("ann", ActionKind::Deal)).unwrap();
/// assert_eq!(engine.phase(), Phase::PreDeal);
///
/// // Heads-up the dealer posts the small blind
/// engine.handle_action(PlayerAction::new("ann", ActionKind::PostBlind)).unwrap();
/// engine.handle_action(PlayerAction::new("bob", ActionKind::PostBlind)).unwrap();
/// assert_eq!(engine.phase(), Phase::PostDeal);
/// assert_eq!(engine.hole_cards("ann").map(|c| c.len()), Some(2));
/// ```
pub struct Engine {
    settings: GameSettings,
    small_blind: u32,
    big_blind: u32,
    /// Blinds waiting for the next hand
    pending_blinds: Option<(u32, u32)>,
    phase: Phase,
    round: u32,
    deck: Deck,
    round_seed: Option<u64>,
    players: Players,
    /// Players who left during the current hand; their chips stay in the pot
    departed: Vec<Player>,
    board: Vec<Card>,
    /// Chips collected from finished streets and folds
    pot: u32,
    required_bet: u32,
    min_raise: u32,
    last_raise: u32,
    big_blind_id: Option<String>,
    last_aggressor: Option<String>,
    pots: GamePots,
    uncontested: bool,
    auto_completing: bool,
    events: VecDeque<TableEvent>,
    deal_listeners: Vec<DealListener>,
    removed_listeners: Vec<RemovedListener>,
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("table_id", &self.settings.table_id)
            .field("phase", &self.phase)
            .field("round", &self.round)
            .field("board", &self.board)
            .field("pot", &self.pot)
            .field("players", &self.players.len())
            .finish_non_exhaustive()
    }
}

impl Engine {
    pub fn new(settings: GameSettings) -> Result<Self, SettingsError> {
        settings.validate()?;
        let deck = match settings.seed {
            Some(seed) => Deck::new_with_seed(seed),
            None => Deck::new(),
        };
        Ok(Self {
            small_blind: settings.small_blind,
            big_blind: settings.big_blind,
            min_raise: settings.big_blind,
            settings,
            pending_blinds: None,
            phase: Phase::Complete,
            round: 0,
            deck,
            round_seed: None,
            players: Players::new(),
            departed: Vec::new(),
            board: Vec::with_capacity(5),
            pot: 0,
            required_bet: 0,
            last_raise: 0,
            big_blind_id: None,
            last_aggressor: None,
            pots: GamePots::new(),
            uncontested: false,
            auto_completing: false,
            events: VecDeque::new(),
            deal_listeners: Vec::new(),
            removed_listeners: Vec::new(),
        })
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn table_id(&self) -> &str {
        &self.settings.table_id
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn board(&self) -> &[Card] {
        &self.board
    }

    pub fn pot(&self) -> u32 {
        self.pot
    }

    pub fn required_bet(&self) -> u32 {
        self.required_bet
    }

    pub fn min_raise(&self) -> u32 {
        self.min_raise
    }

    /// Current `(small, big)` blinds.
    pub fn blinds(&self) -> (u32, u32) {
        (self.small_blind, self.big_blind)
    }

    pub fn players(&self) -> &Players {
        &self.players
    }

    pub fn player(&self, player_id: &str) -> Option<&Player> {
        self.players.by_id(player_id)
    }

    /// Pots of the last settled hand.
    pub fn pots(&self) -> &GamePots {
        &self.pots
    }

    /// Seed of the current hand's shuffle, when it had one.
    pub fn round_seed(&self) -> Option<u64> {
        self.round_seed
    }

    pub fn hole_cards(&self, player_id: &str) -> Option<&[Card]> {
        self.players.by_id(player_id).map(Player::cards)
    }

    /// Every chip the table holds: stacks, bets in front of players and the pot.
    pub fn chips_in_play(&self) -> u32 {
        let seated: u32 = self.players.iter().map(|p| p.stack.total_chips()).sum();
        seated + self.pot
    }

    pub fn add_deal_listener<F>(&mut self, listener: F)
    where
        F: FnMut(DealOutcome, Phase, &mut Vec<Card>, &mut [Player]) + Send + 'static,
    {
        self.deal_listeners.push(Box::new(listener));
    }

    pub fn add_removed_listener<F>(&mut self, listener: F)
    where
        F: FnMut(&str, &Player) + Send + 'static,
    {
        self.removed_listeners.push(Box::new(listener));
    }

    pub fn drain_events(&mut self) -> Vec<TableEvent> {
        self.events.drain(..).collect()
    }

    pub fn view(&self) -> TableView {
        TableView {
            table_id: self.settings.table_id.clone(),
            round: self.round,
            phase: self.phase,
            board: self.board.clone(),
            pot: self.pot,
            required_bet: self.required_bet,
            min_raise: self.min_raise,
            small_blind: self.small_blind,
            big_blind: self.big_blind,
            action_on: self
                .players
                .action_on()
                .and_then(|i| self.players.get(i))
                .map(|p| p.id.clone()),
            seats: self.players.iter().map(SeatView::of).collect(),
        }
    }

    /// Seats a player and takes the buy-in from their wallet. The first
    /// player at an empty table becomes host and dealer.
    ///
    /// # Errors
    ///
    /// [`GameError::InvalidPlayer`] when the table is full, the id or handle is
    /// blank or contains whitespace, either is already seated, or the wallet
    /// does not cover the buy-in. Nothing changes on error.
    pub fn add_player(&mut self, new: NewPlayer) -> Result<usize, GameError> {
        let unusable = |s: &str| s.trim().is_empty() || s.chars().any(char::is_whitespace);
        if unusable(&new.id) || unusable(&new.handle) {
            return Err(GameError::InvalidPlayer(
                "player id and handle must be non-blank and contain no spaces".to_string(),
            ));
        }
        if self.players.len() >= self.settings.variant.max_players {
            return Err(GameError::InvalidPlayer(format!(
                "table is full ({} players)",
                self.settings.variant.max_players
            )));
        }
        if self.players.iter().any(|p| {
            p.id.eq_ignore_ascii_case(&new.id) || p.handle.eq_ignore_ascii_case(&new.handle)
        }) {
            return Err(GameError::InvalidPlayer(
                "a player with the same id or handle is already seated".to_string(),
            ));
        }
        if new.wallet < self.settings.buy_in {
            return Err(GameError::InvalidPlayer(format!(
                "wallet of {} does not cover the buy-in of {}",
                new.wallet, self.settings.buy_in
            )));
        }

        let mut player = Player::new(new.id, new.handle, new.wallet);
        player.state = PlayerState::new(self.settings.action_timeout());
        player.stack.re_buy(self.settings.buy_in, 0);
        player.state.initialise(self.phase);
        if self.players.is_empty() {
            player.state.set_host(true);
            player.state.set_dealer(true);
        }
        let seat = self.players.add(player);
        self.broadcast_state();
        Ok(seat)
    }

    /// Takes a player off the table, cashing their stack out to their wallet.
    ///
    /// Mid-hand the player is folded first and their committed chips stay in
    /// the pot. Dealer and host pass to the next seat. A hand left with a single
    /// contender, or with fewer seated players than the variant needs, is
    /// settled at once; a hand still waiting for blinds is abandoned and the
    /// blinds returned.
    pub fn remove_player(&mut self, player_id: &str) -> Result<Player, GameError> {
        if self.players.position(player_id).is_none() {
            return Err(GameError::PlayerNotFound(player_id.to_string()));
        }
        if self.phase == Phase::PreDeal {
            self.abandon_hand();
        }
        let idx = self
            .players
            .position(player_id)
            .ok_or_else(|| GameError::PlayerNotFound(player_id.to_string()))?;

        let betting = self.is_betting_phase();
        let had_action = betting
            && self
                .players
                .get(idx)
                .is_some_and(|p| p.state.is_action_on());
        let next_on_clock = had_action.then(|| self.players.relative_to(idx, 1, true));
        if let Some(p) = self.players.get_mut(idx) {
            if betting && p.is_in_hand() {
                p.state.set_last_action(ActionKind::Fold);
            }
            self.pot += p.stack.collect_bets();
        }
        let next_on_clock = next_on_clock
            .filter(|&n| n != idx)
            .and_then(|n| self.players.get(n))
            .map(|p| p.id.clone());

        let mut player = self
            .players
            .remove(player_id)
            .ok_or_else(|| GameError::PlayerNotFound(player_id.to_string()))?;
        player.state.set_action_on(false);
        player.stack.cash_out();

        if betting && player.stack.total_committed() > 0 {
            self.departed.push(player.clone());
        }
        if player.state.is_dealer() {
            if let Some(d) = self.players.assign_dealer_after(player.seat) {
                if self.phase == Phase::Complete {
                    self.players.give_action_to(d);
                }
            }
        }
        if player.state.is_host() {
            let heir = self.players.dealer();
            if let Some(p) = heir.and_then(|d| self.players.get_mut(d)) {
                p.state.set_host(true);
            }
        }
        if let Some(pos) = next_on_clock.and_then(|id| self.players.position(&id)) {
            self.players.give_action_to(pos);
        }

        let table_id = self.settings.table_id.clone();
        for listener in self.removed_listeners.iter_mut() {
            listener(&table_id, &player);
        }
        self.events.push_back(TableEvent::Broadcast {
            update: Update::Removed {
                player_id: player.id.clone(),
                handle: player.handle.clone(),
            },
            delay_ms: 0,
        });

        if betting {
            let short_handed = self.players.active().len() < self.settings.variant.min_players;
            if short_handed || self.players.in_hand().len() < 2 {
                self.force_complete();
            } else if had_action {
                self.deal();
            }
        }
        self.broadcast_state();
        Ok(player)
    }

    /// Starts the next hand: applies pending sit-outs, shuffles, assigns the
    /// blinds and puts the action on the small blind (or posts both blinds
    /// when the table posts them). Returns the dealer's id.
    ///
    /// # Errors
    ///
    /// [`GameError::RoundInProgress`] unless the last hand is complete, and
    /// [`GameError::NotEnoughPlayers`] when too few players are sitting in.
    pub fn start_next_round(&mut self, move_dealer: bool) -> Result<String, GameError> {
        if self.phase != Phase::Complete {
            return Err(GameError::RoundInProgress);
        }
        let sitting_in = self
            .players
            .iter()
            .filter(|p| p.state.sits_in_next_round(p.stack.stack()))
            .count();
        if sitting_in < self.settings.variant.min_players {
            return Err(GameError::NotEnoughPlayers);
        }
        for p in self.players.iter_mut() {
            p.reset_for_new_round();
        }

        if let Some((small, big)) = self.pending_blinds.take() {
            self.small_blind = small;
            self.big_blind = big;
        }
        self.board.clear();
        self.departed.clear();
        self.pots = GamePots::new();
        self.pot = 0;
        self.uncontested = false;
        self.round_seed = None;
        if self.settings.shuffle == ShuffleOption::Always || self.round == 0 {
            self.deck.shuffle();
            self.round_seed = self.deck.last_seed();
        }

        let flagged = self.players.iter().any(|p| p.state.is_dealer());
        if move_dealer || !flagged {
            self.players.rotate_dealer();
        }
        let dealer_sat_out = self
            .players
            .dealer()
            .and_then(|d| self.players.get(d))
            .is_some_and(|p| p.state.is_sitting_out());
        if dealer_sat_out {
            self.players.rotate_dealer();
        }
        let dealer = self.players.dealer().ok_or(GameError::NotEnoughPlayers)?;

        self.round += 1;
        self.phase = Phase::PreDeal;
        self.required_bet = 0;
        self.min_raise = self.big_blind;
        self.last_raise = 0;
        self.last_aggressor = None;
        self.auto_completing = false;
        self.players.clear_action();

        let heads_up = self.players.active().len() == 2;
        let small = if heads_up {
            dealer
        } else {
            self.players.relative_to(dealer, 1, true)
        };
        let big = self.players.relative_to(small, 1, true);
        let mut big_id = None;
        if let Some(p) = self.players.get_mut(small) {
            p.state.set_blinds_due(Blinds::Small);
        }
        if let Some(p) = self.players.get_mut(big) {
            p.state.set_blinds_due(Blinds::Big);
            big_id = Some(p.id.clone());
        }
        self.big_blind_id = big_id;

        if self.settings.auto_post_blinds {
            self.post_blind(small, true)?;
            self.post_blind(big, true)?;
            self.deal();
        } else {
            self.players.give_action_to(small);
            for idx in [small, big] {
                self.notify_blind_due(idx);
            }
        }

        self.broadcast_state();
        self.players
            .get(dealer)
            .map(|p| p.id.clone())
            .ok_or(GameError::NotEnoughPlayers)
    }

    /// Applies a player's request.
    ///
    /// # Errors
    ///
    /// [`GameError::StateMismatch`] when the action names a phase other than
    /// the table's. This and every other error leave the table untouched.
    pub fn handle_action(&mut self, action: PlayerAction) -> Result<GameUpdate, GameError> {
        if let Some(submitted) = action.phase {
            if submitted != self.phase {
                return Err(GameError::StateMismatch {
                    expected: self.phase,
                    submitted,
                });
            }
        }
        self.apply(action, false)
    }

    /// Acts for the player on the clock once their deadline has passed: posts
    /// a due blind, checks when nothing is owed, otherwise folds.
    pub fn handle_timeout(&mut self, now: Instant) -> Result<Option<GameUpdate>, GameError> {
        if self.phase == Phase::Complete {
            return Ok(None);
        }
        let Some(p) = self.players.action_on().and_then(|i| self.players.get(i)) else {
            return Ok(None);
        };
        match p.state.next_auto_fold() {
            Some(deadline) if deadline <= now => {}
            _ => return Ok(None),
        }
        let kind = if p.state.blinds_due() != Blinds::None {
            ActionKind::PostBlind
        } else if self.is_betting_phase() && self.required_bet <= p.stack.on_table() {
            ActionKind::Check
        } else {
            ActionKind::Fold
        };
        let player_id = p.id.clone();
        self.events.push_back(TableEvent::Broadcast {
            update: Update::Automated {
                player_id: player_id.clone(),
                action: kind,
            },
            delay_ms: 0,
        });
        self.apply(PlayerAction::new(player_id, kind), true).map(Some)
    }

    /// When the player on the clock must act by.
    pub fn next_deadline(&self) -> Option<Instant> {
        if self.phase == Phase::Complete {
            return None;
        }
        self.players
            .action_on()
            .and_then(|i| self.players.get(i))
            .and_then(|p| p.state.next_auto_fold())
    }

    /// Doubles the blinds from the next hand on, unless the big blind would
    /// pass the configured maximum. Returns the new `(small, big)`.
    pub fn increase_blinds(&mut self) -> Option<(u32, u32)> {
        let schedule = self.settings.blind_increase?;
        let (small, big) = self
            .pending_blinds
            .unwrap_or((self.small_blind, self.big_blind));
        let next = (small.saturating_mul(2), big.saturating_mul(2));
        if next.1 > schedule.max_big_blind {
            return None;
        }
        self.pending_blinds = Some(next);
        self.status(format!("Blinds go up to {}/{} next hand", next.0, next.1));
        Some(next)
    }

    /// Moves the hand on as far as the bets allow.
    pub fn deal(&mut self) -> DealOutcome {
        let outcome = self.deal_step();
        let phase = self.phase;
        for listener in self.deal_listeners.iter_mut() {
            listener(outcome, phase, &mut self.board, self.players.as_mut_slice());
        }
        outcome
    }

    fn deal_step(&mut self) -> DealOutcome {
        match self.phase {
            Phase::Complete => DealOutcome::NoDeal,
            Phase::PreDeal => self.deal_hole_cards(),
            Phase::PostDeal => {
                if let Some(outcome) = self.auto_complete_if_no_bets() {
                    return outcome;
                }
                if let Some(outcome) = self.validate_big_blind_check() {
                    return outcome;
                }
                self.deal_street(3, Phase::Flop)
            }
            Phase::Flop => match self.auto_complete_if_no_bets() {
                Some(outcome) => outcome,
                None => self.deal_street(1, Phase::Turn),
            },
            Phase::Turn => match self.auto_complete_if_no_bets() {
                Some(outcome) => outcome,
                None => self.deal_street(1, Phase::River),
            },
            Phase::River => {
                if let Some(outcome) = self.auto_complete_if_no_bets() {
                    return outcome;
                }
                if !self.try_collect_bets_and_reset() {
                    return DealOutcome::WaitingOnBets;
                }
                self.showdown();
                DealOutcome::RoundComplete
            }
        }
    }

    fn deal_hole_cards(&mut self) -> DealOutcome {
        if self.players.active().len() < self.settings.variant.min_players {
            return DealOutcome::NotEnoughPlayers;
        }
        if self.players.in_hand().len() < 2 {
            self.finish_early();
            return DealOutcome::AutoCompleting;
        }
        if let Some(idx) = self.players.action_on() {
            let due = self
                .players
                .get(idx)
                .map_or(Blinds::None, |p| p.state.blinds_due());
            if due != Blinds::None {
                self.notify_blind_due(idx);
                return DealOutcome::BlindsDue;
            }
        }

        let count = self.settings.variant.start_cards;
        self.deck
            .deal_to_players(self.players.as_mut_slice(), count, Player::is_in_hand);
        for p in self.players.iter().filter(|p| p.is_in_hand()) {
            self.events.push_back(TableEvent::Private {
                player_id: p.id.clone(),
                update: Update::HoleCards {
                    cards: p.cards().to_vec(),
                },
                delay_ms: HOLE_CARDS_DELAY_MS,
            });
        }
        self.phase = Phase::PostDeal;

        // Blinds alone can put everyone all-in
        if let Some(outcome) = self.auto_complete_if_no_bets() {
            return outcome;
        }
        DealOutcome::Dealt
    }

    fn deal_street(&mut self, count: usize, next: Phase) -> DealOutcome {
        if !self.try_collect_bets_and_reset() {
            return DealOutcome::WaitingOnBets;
        }
        let cards = self.deck.deal_cards(count);
        self.board.extend(cards);
        self.phase = next;
        self.players.reset_action_for_street();
        DealOutcome::Dealt
    }

    /// Preflop the big blind keeps the option to raise until they have
    /// checked or bet, unless they cannot act any more.
    fn validate_big_blind_check(&self) -> Option<DealOutcome> {
        let bb = self
            .big_blind_id
            .as_deref()
            .and_then(|id| self.players.by_id(id))?;
        let acted = bb
            .state
            .last_action()
            .is_some_and(|k| k == ActionKind::Check || k.is_value_bet());
        let can_act =
            !bb.state.is_folded() && !bb.state.is_sitting_out() && !bb.state.is_all_in();
        if acted || !can_act || self.auto_completing {
            return None;
        }
        Some(if self.pot_equalised() {
            DealOutcome::WaitingBigBlindCheck
        } else {
            DealOutcome::WaitingOnBets
        })
    }

    /// Every player in the hand has put in exactly the required bet this
    /// street, or has nothing left to put in.
    fn pot_equalised(&self) -> bool {
        if self.auto_completing {
            return true;
        }
        let phase = self.phase;
        let required = self.required_bet;
        self.players
            .iter()
            .filter(|p| p.is_in_hand())
            .all(|p| p.stack.committed_in(phase) == Some(required) || p.stack.stack() == 0)
    }

    fn try_collect_bets_and_reset(&mut self) -> bool {
        if !self.pot_equalised() {
            return false;
        }
        if self.auto_completing {
            return true;
        }
        self.pot += self.players.collect_bets(self.phase);
        self.required_bet = 0;
        self.min_raise = self.big_blind;
        self.last_raise = 0;
        for p in self.players.iter_mut() {
            p.state.reset_for_street();
        }
        true
    }

    /// A lone player left in the hand takes the pot. When fewer than two
    /// players can still bet and the bets are level, the remaining streets
    /// are dealt straight out.
    fn auto_complete_if_no_bets(&mut self) -> Option<DealOutcome> {
        if self.auto_completing {
            return None;
        }
        if self.players.in_hand().len() < 2 {
            self.finish_early();
            return Some(DealOutcome::AutoCompleting);
        }
        if self.players.can_still_bet().len() < 2 && self.try_collect_bets_and_reset() {
            self.auto_completing = true;
            let mut steps = 0;
            while self.phase != Phase::Complete && steps < 6 {
                self.deal();
                steps += 1;
            }
            self.auto_completing = false;
            return Some(DealOutcome::AutoCompleting);
        }
        None
    }

    /// Settles a hand the table can no longer play. A lone contender takes
    /// the pot; otherwise the board is dealt out and the hand goes to showdown.
    fn force_complete(&mut self) {
        if self.players.in_hand().len() < 2 {
            self.finish_early();
            return;
        }
        // bets stay whole; showdown splits them by commitment level
        let on_table: u32 = self.players.iter_mut().map(|p| p.stack.collect_bets()).sum();
        self.pot += on_table;
        self.required_bet = 0;
        for p in self.players.iter_mut() {
            p.state.reset_for_street();
        }
        self.players.clear_action();
        self.status("Too few players left; dealing the hand out".to_string());
        self.auto_completing = true;
        let mut steps = 0;
        while self.phase != Phase::Complete && steps < 6 {
            self.deal();
            steps += 1;
        }
        self.auto_completing = false;
    }

    fn finish_early(&mut self) {
        let winner = self.players.in_hand().first().copied();
        self.pot += self.players.collect_bets(self.phase);
        self.required_bet = 0;

        let mut pot = SidePot::new(self.pot);
        let mut won = BTreeMap::new();
        let mut message = None;
        if let Some(p) = winner.and_then(|w| self.players.get_mut(w)) {
            p.stack.transfer_win(self.pot);
            pot.contestants = vec![p.id.clone()];
            pot.winners = vec![p.id.clone()];
            won.insert(p.id.clone(), self.pot);
            message = Some(format!("{} takes the pot!", p.handle));
        }
        if let Some(message) = message {
            self.status(message);
        }
        self.pot = 0;
        self.pots = GamePots::new();
        self.pots.add_side_pot(pot);
        self.uncontested = true;
        self.round_completed(&won);
    }

    fn showdown(&mut self) {
        let board = self.board.clone();
        let mut unranked = Vec::new();
        for p in self.players.iter_mut().filter(|p| p.is_in_hand()) {
            let mut cards = p.cards().to_vec();
            cards.extend_from_slice(&board);
            p.best_hand = match evaluate_hand(&cards) {
                Ok(rank) => Some(rank),
                Err(e) => {
                    unranked.push(format!("Could not rank {}'s hand: {e}", p.handle));
                    None
                }
            };
        }
        // an unranked hand loses to any ranked one
        for message in unranked {
            self.status(message);
        }

        let entrants: Vec<PotEntrant> = self
            .players
            .iter()
            .chain(self.departed.iter())
            .filter(|p| p.is_in_hand() || p.stack.total_committed() > 0)
            .map(|p| PotEntrant {
                player_id: p.id.clone(),
                committed: p.stack.committed().clone(),
                contending: p.is_in_hand(),
                hand: p.best_hand,
            })
            .collect();
        let mut pots = calculate_pots(&entrants);
        let seat_order: Vec<String> = self
            .players
            .seat_order_left_of_dealer()
            .into_iter()
            .filter_map(|i| self.players.get(i).map(|p| p.id.clone()))
            .collect();
        let won = pots.payouts(&seat_order);
        for (id, amount) in &won {
            if let Some(p) = self.players.by_id_mut(id) {
                p.stack.transfer_win(*amount);
            }
        }
        self.pot = 0;

        let first_to_show = self
            .players
            .seat_order_left_of_dealer()
            .into_iter()
            .filter_map(|i| self.players.get(i))
            .find(|p| p.is_in_hand())
            .map(|p| p.id.clone());
        let called = self
            .last_aggressor
            .clone()
            .filter(|id| self.players.by_id(id).is_some_and(Player::is_in_hand))
            .or(first_to_show);
        let winners = pots.winners();
        if let Some(id) = &called {
            self.reveal_cards(id, "was called", winners.contains(id));
        }
        for w in winners.iter().filter(|w| called.as_ref() != Some(*w)) {
            self.reveal_cards(w, "proves they won", true);
        }

        self.pots = pots;
        self.uncontested = false;
        self.round_completed(&won);
    }

    /// Records the settled hand, moves the button on and sits out anyone
    /// left without chips.
    fn round_completed(&mut self, won: &BTreeMap<String, u32>) {
        let snapshot = |p: &Player, departed: bool| PlayerSnapshot {
            player_id: p.id.clone(),
            handle: p.handle.clone(),
            seat: p.seat,
            stack: p.stack.stack(),
            wallet: p.stack.wallet(),
            committed: p
                .stack
                .committed()
                .iter()
                .map(|(phase, n)| (phase.as_str().to_string(), *n))
                .collect(),
            cards: p.cards().iter().map(Card::code).collect(),
            hand: p.best_hand.map(|h| h.describe()),
            contending: !departed && p.is_in_hand(),
            departed,
            won: won.get(&p.id).copied().unwrap_or(0),
        };
        let mut players: Vec<PlayerSnapshot> = self
            .players
            .iter()
            .filter(|p| !p.state.is_sitting_out() || p.stack.total_committed() > 0)
            .map(|p| snapshot(p, false))
            .collect();
        players.extend(self.departed.iter().map(|p| snapshot(p, true)));

        let record = RoundRecord {
            table_id: self.settings.table_id.clone(),
            round: self.round,
            seed: self.round_seed,
            board: self.board.iter().map(Card::code).collect(),
            uncontested: self.uncontested,
            players,
            pots: self
                .pots
                .pots()
                .iter()
                .map(|p| PotRecord {
                    name: p.name.clone(),
                    total: p.total,
                    contestants: p.contestants.clone(),
                    winners: p.winners.clone(),
                    winning_hand: p.winning_hand.map(|h| h.describe()),
                    residual: p.residual,
                })
                .collect(),
            ts: None,
        };
        self.events.push_back(TableEvent::RoundComplete(record));

        self.required_bet = 0;
        self.min_raise = self.big_blind;
        self.last_raise = 0;
        self.phase = Phase::Complete;
        self.players.auto_exclude_zero_stacks();
        self.players.rotate_dealer();
        self.broadcast_state();
    }

    /// Returns the blinds of a hand that never got its cards and goes back to
    /// waiting for a deal.
    fn abandon_hand(&mut self) {
        for p in self.players.iter_mut() {
            let back = p.stack.collect_bets();
            p.stack.transfer_win(back);
            p.stack.clear_commitments();
            p.state.reset_for_new_deal();
        }
        self.required_bet = 0;
        self.min_raise = self.big_blind;
        self.last_raise = 0;
        self.phase = Phase::Complete;
        if let Some(d) = self.players.dealer() {
            self.players.give_action_to(d);
        }
        self.status("Hand abandoned before the deal".to_string());
    }

    fn apply(&mut self, action: PlayerAction, automated: bool) -> Result<GameUpdate, GameError> {
        let idx = self
            .players
            .position(&action.player_id)
            .ok_or_else(|| GameError::PlayerNotFound(action.player_id.clone()))?;
        let (action_on, blinds_due, handle) = match self.players.get(idx) {
            Some(p) => (
                p.state.is_action_on(),
                p.state.blinds_due(),
                p.handle.clone(),
            ),
            None => return Err(GameError::PlayerNotFound(action.player_id.clone())),
        };

        let kind = action.kind;
        if kind.on_turn_only() && !action_on {
            if !(self.phase == Phase::Complete && kind == ActionKind::Fold) {
                return Err(GameError::NotPlayersTurn(handle));
            }
        } else if kind.on_turn_only()
            && blinds_due != Blinds::None
            && !matches!(kind, ActionKind::PostBlind | ActionKind::Fold)
        {
            return Err(GameError::BlindDue);
        }

        let queued = self.events.len();
        let outcome = match kind {
            ActionKind::Deal => {
                self.deal_next_round(idx)?;
                self.record_action(&action.player_id, kind, 0, 0, automated);
                None
            }
            ActionKind::PostBlind => {
                self.post_blind(idx, automated)?;
                Some(self.deal())
            }
            ActionKind::Check
            | ActionKind::Call
            | ActionKind::Bet
            | ActionKind::Raise
            | ActionKind::AllIn => Some(self.bet(idx, kind, action.amount, automated)?),
            ActionKind::Fold => self.fold(idx, automated)?,
            ActionKind::Reveal => {
                self.reveal(idx)?;
                self.record_action(&action.player_id, kind, 0, 0, automated);
                None
            }
            ActionKind::ReBuy => {
                let bought = self.re_buy(idx)?;
                self.record_action(&action.player_id, kind, bought, 0, automated);
                None
            }
            ActionKind::SitOut => {
                self.record_action(&action.player_id, kind, 0, 0, automated);
                self.sit_out(idx)?
            }
            ActionKind::CashOut => {
                let player = self.remove_player(&action.player_id)?;
                self.record_action(&player.id, kind, 0, 0, automated);
                None
            }
            ActionKind::Evict => {
                self.evict(idx, action.target.as_deref())?;
                self.record_action(&action.player_id, kind, 0, 0, automated);
                None
            }
        };
        if let Some(session) = &action.session_id {
            for event in self.events.iter_mut().skip(queued) {
                match event {
                    TableEvent::Action(rec)
                        if !rec.automated && rec.player_id == action.player_id =>
                    {
                        rec.session_id = Some(session.clone());
                    }
                    _ => {}
                }
            }
        }

        self.broadcast_state();
        Ok(GameUpdate {
            action: kind,
            player_id: action.player_id,
            automated,
            outcome,
            view: self.view(),
        })
    }

    fn deal_next_round(&mut self, idx: usize) -> Result<(), GameError> {
        if self.phase != Phase::Complete {
            return Err(GameError::RoundInProgress);
        }
        let Some(p) = self.players.get(idx) else {
            return Err(GameError::NotEnoughPlayers);
        };
        if !(p.state.is_action_on() || p.state.is_dealer() || p.state.is_host()) {
            return Err(GameError::NotPlayersTurn(p.handle.clone()));
        }
        self.start_next_round(false).map(|_| ())
    }

    fn post_blind(&mut self, idx: usize, automated: bool) -> Result<(), GameError> {
        let (small_blind, big_blind) = (self.small_blind, self.big_blind);
        let Some(p) = self.players.get_mut(idx) else {
            return Err(GameError::NotEnoughPlayers);
        };
        let due = p.state.blinds_due();
        let amount = match due {
            Blinds::Small => small_blind,
            Blinds::Big => big_blind,
            Blinds::None => {
                return Err(GameError::ActionNotAllowed("no blind is due".to_string()));
            }
        };
        let before = p.stack.stack();
        if !p.stack.add_to_table(Phase::PostDeal, amount) {
            return Err(GameError::InsufficientChips);
        }
        p.state.set_blinds_due(Blinds::None);
        if p.stack.stack() == 0 {
            p.state.set_all_in(true);
        }
        p.state.set_last_action(ActionKind::PostBlind);
        let moved = before - p.stack.stack();
        let id = p.id.clone();
        let street_total = p.stack.on_table();

        if due == Blinds::Big {
            let top = self
                .players
                .iter()
                .map(|p| p.stack.on_table())
                .max()
                .unwrap_or(0);
            self.set_new_bets(top);
        }
        self.record_action(&id, ActionKind::PostBlind, moved, street_total, automated);
        self.players.move_action_to_next(idx);
        Ok(())
    }

    fn bet(
        &mut self,
        idx: usize,
        kind: ActionKind,
        amount: u32,
        automated: bool,
    ) -> Result<DealOutcome, GameError> {
        if !self.is_betting_phase() {
            return Err(GameError::ActionNotAllowed(format!(
                "cannot {} during {}",
                kind.as_str(),
                self.phase
            )));
        }
        let cap = self.players.max_bet_possible(idx);
        let (required, min_raise, phase) = (self.required_bet, self.min_raise, self.phase);
        let Some(p) = self.players.get_mut(idx) else {
            return Err(GameError::NotEnoughPlayers);
        };
        if !p.is_still_in_hand() {
            return Err(GameError::ActionNotAllowed(format!(
                "{} cannot bet any more this hand",
                p.handle
            )));
        }
        let ctx = BetContext {
            stack: p.stack.stack(),
            on_table: p.stack.on_table(),
            required,
            min_raise,
            cap,
        };
        let validated = validate_action(&ctx, kind, amount)?;
        match validated {
            ValidatedAction::Fold => {}
            ValidatedAction::Check => p.stack.commit_zero(phase),
            ref other => {
                if !p.stack.add_to_table(phase, other.chips()) {
                    return Err(GameError::InsufficientChips);
                }
            }
        }
        let applied = if validated.chips() > 0 && p.stack.stack() == 0 {
            p.state.set_all_in(true);
            ActionKind::AllIn
        } else {
            validated.kind()
        };
        p.state.set_last_action(applied);
        let street_total = p.stack.on_table();
        let id = p.id.clone();

        if applied.is_value_bet() {
            self.set_new_bets(street_total);
            if street_total > required {
                self.last_aggressor = Some(id.clone());
            }
        }
        self.record_action(&id, applied, validated.chips(), street_total, automated);
        self.players.move_action_to_next(idx);
        Ok(self.deal())
    }

    /// After a bet, the required bet is the largest street total and the
    /// minimum raise grows by the largest raise so far.
    fn set_new_bets(&mut self, street_total: u32) {
        let previous = self.required_bet;
        let required = previous.max(street_total);
        self.last_raise = self.last_raise.max(required - previous);
        self.required_bet = required;
        self.min_raise = if self.settings.enforce_minimum_raise {
            required + self.last_raise
        } else {
            required + self.big_blind
        };
    }

    fn fold(&mut self, idx: usize, automated: bool) -> Result<Option<DealOutcome>, GameError> {
        if self.phase == Phase::Complete {
            return Ok(None);
        }
        let Some(p) = self.players.get_mut(idx) else {
            return Err(GameError::NotEnoughPlayers);
        };
        if !p.is_in_hand() {
            return Err(GameError::ActionNotAllowed(format!(
                "{} is not in this hand",
                p.handle
            )));
        }
        p.state.set_last_action(ActionKind::Fold);
        p.state.set_blinds_due(Blinds::None);
        self.pot += p.stack.collect_bets();
        let id = p.id.clone();

        self.record_action(&id, ActionKind::Fold, 0, 0, automated);
        self.players.move_action_to_next(idx);
        Ok(Some(self.deal()))
    }

    fn reveal(&mut self, idx: usize) -> Result<(), GameError> {
        let Some(p) = self.players.get(idx) else {
            return Err(GameError::NotEnoughPlayers);
        };
        if self.phase != Phase::Complete && !p.state.is_folded() {
            return Err(GameError::ActionNotAllowed(
                "cards can only be shown after folding or once the hand is over".to_string(),
            ));
        }
        let id = p.id.clone();
        self.reveal_cards(&id, "shows their cards", false);
        Ok(())
    }

    fn reveal_cards(&mut self, player_id: &str, what: &str, winner: bool) {
        let Some(p) = self.players.by_id(player_id) else {
            return;
        };
        self.events.push_back(TableEvent::Broadcast {
            update: Update::Reveal {
                player_id: p.id.clone(),
                handle: p.handle.clone(),
                cards: p.revealable_cards().to_vec(),
                message: format!("{} {}", p.handle, what),
                winner,
            },
            delay_ms: 0,
        });
    }

    /// Tops a short stack back up to the buy-in and sits the player back in.
    fn re_buy(&mut self, idx: usize) -> Result<u32, GameError> {
        let (buy_in, threshold, phase) = (self.settings.buy_in, self.big_blind, self.phase);
        let Some(p) = self.players.get_mut(idx) else {
            return Err(GameError::NotEnoughPlayers);
        };
        match p.stack.re_buy(buy_in, threshold) {
            RebuyOutcome::Success => {
                if p.state.is_sitting_out() {
                    p.state.toggle_sitting_out(phase, false);
                }
                Ok(buy_in)
            }
            RebuyOutcome::NonZeroStack => Err(GameError::ActionNotAllowed(format!(
                "re-buy needs {threshold} chips or fewer at the table"
            ))),
            RebuyOutcome::NoFunds => Err(GameError::InsufficientChips),
        }
    }

    /// Toggles sitting out. A player who sits out while on the clock is
    /// checked or folded at once; a dealer sitting out between hands passes
    /// the button on.
    fn sit_out(&mut self, idx: usize) -> Result<Option<DealOutcome>, GameError> {
        let phase = self.phase;
        let Some(p) = self.players.get_mut(idx) else {
            return Err(GameError::NotEnoughPlayers);
        };
        let sitting_out_next = match p.state.sit_next_round() {
            SitNextRound::SitOut => true,
            SitNextRound::SitIn => false,
            SitNextRound::None => p.state.is_sitting_out(),
        };
        if !p.state.toggle_sitting_out(phase, !sitting_out_next) {
            return Err(GameError::ActionNotAllowed(
                "sit-out state is unchanged".to_string(),
            ));
        }
        if sitting_out_next || !p.state.is_action_on() {
            return Ok(None);
        }

        if phase == Phase::Complete {
            if p.state.is_dealer() {
                self.players.rotate_dealer();
            }
            return Ok(None);
        }

        let owes = p.state.blinds_due() != Blinds::None || self.required_bet > p.stack.on_table();
        let kind = if owes || phase == Phase::PreDeal {
            ActionKind::Fold
        } else {
            ActionKind::Check
        };
        let id = p.id.clone();
        self.events.push_back(TableEvent::Broadcast {
            update: Update::Automated {
                player_id: id,
                action: kind,
            },
            delay_ms: 0,
        });
        match kind {
            ActionKind::Check => Ok(Some(self.bet(idx, kind, 0, true)?)),
            _ => self.fold(idx, true),
        }
    }

    fn evict(&mut self, idx: usize, target: Option<&str>) -> Result<(), GameError> {
        let Some(p) = self.players.get(idx) else {
            return Err(GameError::NotEnoughPlayers);
        };
        if !p.state.is_host() {
            return Err(GameError::ActionNotAllowed(
                "only the host can evict players".to_string(),
            ));
        }
        let target = target
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| GameError::InvalidPlayer("no player named for eviction".to_string()))?;
        if target == p.id {
            return Err(GameError::ActionNotAllowed(
                "use cash out to leave the table".to_string(),
            ));
        }
        self.remove_player(target).map(|_| ())
    }

    fn record_action(
        &mut self,
        player_id: &str,
        kind: ActionKind,
        amount: u32,
        street_total: u32,
        automated: bool,
    ) {
        self.events.push_back(TableEvent::Action(ActionRecord {
            table_id: self.settings.table_id.clone(),
            round: self.round,
            phase: self.phase.as_str().to_string(),
            player_id: player_id.to_string(),
            action: kind.as_str().to_string(),
            amount,
            street_total,
            automated,
            session_id: None,
            ts: None,
        }));
    }

    fn notify_blind_due(&mut self, idx: usize) {
        let Some(p) = self.players.get(idx) else {
            return;
        };
        let blind = p.state.blinds_due();
        let amount = match blind {
            Blinds::Small => self.small_blind,
            Blinds::Big => self.big_blind,
            Blinds::None => return,
        };
        self.events.push_back(TableEvent::Private {
            player_id: p.id.clone(),
            update: Update::BlindDue { blind, amount },
            delay_ms: BLIND_DUE_DELAY_MS,
        });
    }

    fn status(&mut self, message: String) {
        self.events.push_back(TableEvent::Broadcast {
            update: Update::Status { message },
            delay_ms: STATUS_DELAY_MS,
        });
    }

    fn broadcast_state(&mut self) {
        let view = self.view();
        self.events.push_back(TableEvent::Broadcast {
            update: Update::State(view),
            delay_ms: 0,
        });
    }

    fn is_betting_phase(&self) -> bool {
        matches!(
            self.phase,
            Phase::PostDeal | Phase::Flop | Phase::Turn | Phase::River
        )
    }
}
