use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::game::Phase;
use crate::hand::HandRank;
use crate::state::PlayerState;

/// What a player can ask the table to do.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    /// Start the next hand (dealer only)
    Deal,
    PostBlind,
    Check,
    /// Match the required bet
    Call,
    /// Bet up to an absolute total for the street
    Bet,
    /// Raise the required bet by an amount
    Raise,
    AllIn,
    Fold,
    /// Show hole cards after folding or once the hand is over
    Reveal,
    ReBuy,
    /// Toggle sitting out from the next hand
    SitOut,
    CashOut,
    /// Remove another player (host only)
    Evict,
}

impl ActionKind {
    /// Puts chips in the pot by choice.
    pub fn is_value_bet(self) -> bool {
        matches!(
            self,
            ActionKind::Call | ActionKind::Bet | ActionKind::Raise | ActionKind::AllIn
        )
    }

    /// Only accepted from the player the action is on.
    pub fn on_turn_only(self) -> bool {
        matches!(
            self,
            ActionKind::PostBlind
                | ActionKind::Check
                | ActionKind::Call
                | ActionKind::Bet
                | ActionKind::Raise
                | ActionKind::AllIn
                | ActionKind::Fold
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ActionKind::Deal => "deal",
            ActionKind::PostBlind => "post_blind",
            ActionKind::Check => "check",
            ActionKind::Call => "call",
            ActionKind::Bet => "bet",
            ActionKind::Raise => "raise",
            ActionKind::AllIn => "all_in",
            ActionKind::Fold => "fold",
            ActionKind::Reveal => "reveal",
            ActionKind::ReBuy => "re_buy",
            ActionKind::SitOut => "sit_out",
            ActionKind::CashOut => "cash_out",
            ActionKind::Evict => "evict",
        }
    }
}

/// A request submitted on behalf of a player.
///
/// `phase` is the phase the client last saw; when present and different from
/// the table's, the action is rejected without touching the table.
/// `session_id` names the connection that sent it and is carried into the
/// action's history record.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerAction {
    pub player_id: String,
    pub kind: ActionKind,
    #[serde(default)]
    pub amount: u32,
    #[serde(default)]
    pub phase: Option<Phase>,
    /// Player an eviction is aimed at
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub session_id: Option<String>,
}

impl PlayerAction {
    pub fn new(player_id: impl Into<String>, kind: ActionKind) -> Self {
        Self {
            player_id: player_id.into(),
            kind,
            amount: 0,
            phase: None,
            target: None,
            session_id: None,
        }
    }

    pub fn with_amount(mut self, amount: u32) -> Self {
        self.amount = amount;
        self
    }

    pub fn in_phase(mut self, phase: Phase) -> Self {
        self.phase = Some(phase);
        self
    }

    pub fn against(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn from_session(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RebuyOutcome {
    Success,
    /// Still holding more than the re-buy threshold
    NonZeroStack,
    NoFunds,
}

/// Chips a player controls: `stack` at the table, `wallet` off it, and what
/// has been committed in each street of the current hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerStack {
    stack: u32,
    wallet: u32,
    /// Committed this street and not yet collected
    on_table: u32,
    committed: BTreeMap<Phase, u32>,
}

impl PlayerStack {
    pub fn new(wallet: u32) -> Self {
        Self {
            wallet,
            ..Self::default()
        }
    }

    pub fn stack(&self) -> u32 {
        self.stack
    }

    pub fn wallet(&self) -> u32 {
        self.wallet
    }

    pub fn on_table(&self) -> u32 {
        self.on_table
    }

    /// Stack plus chips in front of the player this street.
    pub fn total_chips(&self) -> u32 {
        self.stack + self.on_table
    }

    pub fn committed(&self) -> &BTreeMap<Phase, u32> {
        &self.committed
    }

    pub fn committed_in(&self, phase: Phase) -> Option<u32> {
        self.committed.get(&phase).copied()
    }

    pub fn total_committed(&self) -> u32 {
        self.committed.values().sum()
    }

    /// Moves `value` from the stack into the street's commitment. Anything
    /// over the stack commits the whole stack. Returns false on an empty stack.
    pub fn add_to_table(&mut self, phase: Phase, value: u32) -> bool {
        if self.stack == 0 {
            return false;
        }
        let moved = value.min(self.stack);
        let street = self.committed.entry(phase).or_insert(0);
        *street += moved;
        self.stack -= moved;
        self.on_table = *street;
        true
    }

    /// Records a check so the street shows a (zero) commitment.
    pub fn commit_zero(&mut self, phase: Phase) {
        self.committed.entry(phase).or_insert(0);
    }

    /// Hands back the part of this street's bet nobody could match.
    pub fn reverse_bet(&mut self, refund: u32, phase: Phase) {
        let refund = refund.min(self.on_table);
        self.stack += refund;
        self.on_table -= refund;
        self.committed.insert(phase, self.on_table);
    }

    /// Clears the street's bet; the returned amount goes to the pot.
    pub fn collect_bets(&mut self) -> u32 {
        std::mem::take(&mut self.on_table)
    }

    pub fn transfer_win(&mut self, amount: u32) {
        self.stack += amount;
    }

    /// Buys back in when the player is down to at most `min_permissible` chips.
    pub fn re_buy(&mut self, buy_in: u32, min_permissible: u32) -> RebuyOutcome {
        if self.total_chips() > min_permissible {
            return RebuyOutcome::NonZeroStack;
        }
        if self.wallet < buy_in {
            return RebuyOutcome::NoFunds;
        }
        self.wallet -= buy_in;
        self.stack += buy_in;
        RebuyOutcome::Success
    }

    /// Returns the stack to the wallet. Chips already committed stay in the pot.
    pub fn cash_out(&mut self) -> u32 {
        let amount = std::mem::take(&mut self.stack);
        self.wallet += amount;
        self.on_table = 0;
        amount
    }

    pub fn clear_commitments(&mut self) {
        self.committed.clear();
        self.on_table = 0;
    }
}

/// A seated player.
#[derive(Debug, Clone)]
pub struct Player {
    pub id: String,
    pub handle: String,
    pub seat: usize,
    pub stack: PlayerStack,
    pub state: PlayerState,
    cards: Vec<Card>,
    /// Cards from the previous hand, kept so they can still be revealed
    last_cards: Vec<Card>,
    pub best_hand: Option<HandRank>,
}

impl Player {
    pub fn new(id: impl Into<String>, handle: impl Into<String>, wallet: u32) -> Self {
        Self {
            id: id.into(),
            handle: handle.into(),
            seat: 0,
            stack: PlayerStack::new(wallet),
            state: PlayerState::default(),
            cards: Vec::with_capacity(2),
            last_cards: Vec::new(),
            best_hand: None,
        }
    }

    pub fn give_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn set_cards(&mut self, cards: Vec<Card>) {
        self.cards = cards;
    }

    /// Hole cards to show: this hand's, or the last hand's once it is over.
    pub fn revealable_cards(&self) -> &[Card] {
        if self.cards.is_empty() {
            &self.last_cards
        } else {
            &self.cards
        }
    }

    /// Dealt into the current hand and not folded.
    pub fn is_in_hand(&self) -> bool {
        !self.state.is_sitting_out() && !self.state.is_folded()
    }

    /// In the hand and still able to bet.
    pub fn is_still_in_hand(&self) -> bool {
        self.is_in_hand() && self.stack.stack() > 0
    }

    pub fn reset_for_new_round(&mut self) {
        if !self.cards.is_empty() {
            self.last_cards = std::mem::take(&mut self.cards);
        }
        self.best_hand = None;
        self.stack.clear_commitments();
        self.state.reset_for_new_round(self.stack.stack());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn over_commit_goes_all_in() {
        let mut s = PlayerStack::new(0);
        s.transfer_win(50);
        assert!(s.add_to_table(Phase::Flop, 80));
        assert_eq!(s.stack(), 0);
        assert_eq!(s.on_table(), 50);
        assert!(!s.add_to_table(Phase::Flop, 10));
    }

    #[test]
    fn street_commitments_accumulate() {
        let mut s = PlayerStack::new(0);
        s.transfer_win(100);
        s.add_to_table(Phase::PostDeal, 2);
        s.add_to_table(Phase::PostDeal, 6);
        assert_eq!(s.committed_in(Phase::PostDeal), Some(8));
        assert_eq!(s.collect_bets(), 8);
        s.add_to_table(Phase::Flop, 10);
        assert_eq!(s.total_committed(), 18);
        assert_eq!(s.on_table(), 10);
    }

    #[test]
    fn reverse_bet_refunds_the_street() {
        let mut s = PlayerStack::new(0);
        s.transfer_win(100);
        s.add_to_table(Phase::Turn, 60);
        s.reverse_bet(20, Phase::Turn);
        assert_eq!(s.stack(), 60);
        assert_eq!(s.committed_in(Phase::Turn), Some(40));
    }

    #[test]
    fn re_buy_needs_short_stack_and_funds() {
        let mut s = PlayerStack::new(250);
        assert_eq!(s.re_buy(200, 2), RebuyOutcome::Success);
        assert_eq!(s.stack(), 200);
        assert_eq!(s.wallet(), 50);
        assert_eq!(s.re_buy(200, 2), RebuyOutcome::NonZeroStack);

        let mut broke = PlayerStack::new(10);
        assert_eq!(broke.re_buy(200, 2), RebuyOutcome::NoFunds);
    }

    #[test]
    fn cash_out_moves_stack_to_wallet() {
        let mut s = PlayerStack::new(500);
        s.re_buy(200, 0);
        s.add_to_table(Phase::Flop, 30);
        assert_eq!(s.cash_out(), 170);
        assert_eq!(s.wallet(), 470);
        assert_eq!(s.total_committed(), 30);
    }

    #[test]
    fn only_seat_actions_need_the_turn() {
        assert!(ActionKind::Fold.on_turn_only());
        assert!(ActionKind::PostBlind.on_turn_only());
        assert!(!ActionKind::Reveal.on_turn_only());
        assert!(!ActionKind::SitOut.on_turn_only());
        assert!(!ActionKind::Evict.on_turn_only());
        assert!(ActionKind::AllIn.is_value_bet());
        assert!(!ActionKind::Check.is_value_bet());
    }
}
