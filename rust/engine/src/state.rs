use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::game::Phase;
use crate::player::ActionKind;

/// Blind a player owes before the cards are dealt.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Blinds {
    #[default]
    None,
    Small,
    Big,
}

/// A sit-in or sit-out request waiting for the next hand boundary.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SitNextRound {
    SitIn,
    SitOut,
    #[default]
    None,
}

/// Per-player flags and the auto-fold timer.
///
/// Three reset points scope the flags: [`reset_for_street`](Self::reset_for_street)
/// after each betting street, [`reset_for_new_deal`](Self::reset_for_new_deal) between
/// hands, and [`reset_for_new_round`](Self::reset_for_new_round) when the next hand
/// starts, which is also where a pending sit-out or sit-in takes effect.
#[derive(Debug, Clone, Default)]
pub struct PlayerState {
    folded: bool,
    all_in: bool,
    dealer: bool,
    host: bool,
    sitting_out: bool,
    sit_next_round: SitNextRound,
    action_on: bool,
    next_auto_fold: Option<Instant>,
    action_timeout: Option<Duration>,
    blinds_due: Blinds,
    was_big_blind: bool,
    last_action: Option<ActionKind>,
}

impl PlayerState {
    pub fn new(action_timeout: Option<Duration>) -> Self {
        Self {
            action_timeout,
            ..Self::default()
        }
    }

    /// Called once when the player takes a seat. Anyone joining while a hand
    /// is running waits out that hand and is sat in at the next one.
    pub fn initialise(&mut self, phase: Phase) {
        if phase != Phase::Complete {
            self.sitting_out = true;
            self.sit_next_round = SitNextRound::SitIn;
        }
    }

    pub fn is_folded(&self) -> bool {
        self.folded
    }

    pub fn is_all_in(&self) -> bool {
        self.all_in
    }

    pub fn set_all_in(&mut self, all_in: bool) {
        self.all_in = all_in;
    }

    pub fn is_dealer(&self) -> bool {
        self.dealer
    }

    pub fn set_dealer(&mut self, dealer: bool) {
        self.dealer = dealer;
    }

    pub fn is_host(&self) -> bool {
        self.host
    }

    pub fn set_host(&mut self, host: bool) {
        self.host = host;
    }

    pub fn is_sitting_out(&self) -> bool {
        self.sitting_out
    }

    /// True when a sit-out takes effect at the next hand.
    pub fn sits_out_next_round(&self) -> bool {
        self.sit_next_round == SitNextRound::SitOut
    }

    pub fn sit_next_round(&self) -> SitNextRound {
        self.sit_next_round
    }

    pub fn is_action_on(&self) -> bool {
        self.action_on
    }

    /// Placing the action starts the auto-fold clock; clearing it cancels the clock.
    pub fn set_action_on(&mut self, on: bool) {
        self.set_action_on_at(on, Instant::now());
    }

    pub fn set_action_on_at(&mut self, on: bool, now: Instant) {
        self.action_on = on;
        self.next_auto_fold = match (on, self.action_timeout) {
            (true, Some(timeout)) => Some(now + timeout),
            _ => None,
        };
    }

    pub fn next_auto_fold(&self) -> Option<Instant> {
        self.next_auto_fold
    }

    pub fn blinds_due(&self) -> Blinds {
        self.blinds_due
    }

    pub fn set_blinds_due(&mut self, blinds: Blinds) {
        if self.blinds_due == Blinds::Big && blinds == Blinds::None {
            self.was_big_blind = true;
        }
        self.blinds_due = blinds;
    }

    /// Set once the big blind has been posted, until the street ends.
    pub fn was_big_blind(&self) -> bool {
        self.was_big_blind
    }

    pub fn last_action(&self) -> Option<ActionKind> {
        self.last_action
    }

    pub fn set_last_action(&mut self, kind: ActionKind) {
        self.last_action = Some(kind);
        if kind == ActionKind::Fold {
            self.folded = true;
        }
    }

    /// Requests a sit-out (`sit_out = true`) or sit-in. Between hands the
    /// change is immediate; during a hand it waits for the next one, and asking
    /// for the opposite before then cancels it. Returns false when the request
    /// changes nothing.
    pub fn toggle_sitting_out(&mut self, phase: Phase, sit_out: bool) -> bool {
        let previous = self.sit_next_round;
        let immediate = phase == Phase::Complete;

        if sit_out == self.sitting_out && previous == SitNextRound::None {
            return false;
        }

        if sit_out {
            self.sit_next_round = if immediate {
                SitNextRound::None
            } else {
                SitNextRound::SitOut
            };
            if !self.sitting_out {
                self.sitting_out = immediate;
            }
        } else if self.sitting_out {
            self.sit_next_round = if immediate {
                SitNextRound::None
            } else {
                SitNextRound::SitIn
            };
            if immediate {
                self.sitting_out = false;
            }
        } else {
            self.sit_next_round = SitNextRound::None;
        }

        self.sit_next_round != previous || immediate
    }

    /// Clears what only lasts one betting street.
    pub fn reset_for_street(&mut self) {
        self.was_big_blind = false;
        self.blinds_due = Blinds::None;
        self.last_action = None;
        self.set_action_on(false);
    }

    /// Clears what only lasts one hand. A pending sit-out survives.
    pub fn reset_for_new_deal(&mut self) {
        self.reset_for_street();
        self.folded = false;
        self.all_in = false;
    }

    /// Whether [`Self::reset_for_new_round`] would leave the player sitting in.
    pub fn sits_in_next_round(&self, stack: u32) -> bool {
        stack > 0
            && match self.sit_next_round {
                SitNextRound::SitIn => true,
                SitNextRound::SitOut => false,
                SitNextRound::None => !self.sitting_out,
            }
    }

    /// Applies the pending sit-out decision. Anyone left without chips sits out
    /// whatever they asked for.
    pub fn reset_for_new_round(&mut self, stack: u32) {
        self.reset_for_new_deal();

        if stack == 0 {
            self.sitting_out = true;
            self.sit_next_round = SitNextRound::None;
            return;
        }

        match self.sit_next_round {
            SitNextRound::SitIn => self.sitting_out = false,
            SitNextRound::SitOut => self.sitting_out = true,
            SitNextRound::None => {}
        }
        self.sit_next_round = SitNextRound::None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joining_between_hands_is_active() {
        let mut s = PlayerState::default();
        s.initialise(Phase::Complete);
        assert!(!s.is_sitting_out());
    }

    #[test]
    fn joining_mid_hand_waits_for_next_round() {
        let mut s = PlayerState::default();
        s.initialise(Phase::Flop);
        assert!(s.is_sitting_out());
        assert_eq!(s.sit_next_round(), SitNextRound::SitIn);
        s.reset_for_new_deal();
        assert!(s.is_sitting_out());
        s.reset_for_new_round(100);
        assert!(!s.is_sitting_out());
    }

    #[test]
    fn sit_out_request_waits_for_boundary_and_can_be_cancelled() {
        let mut s = PlayerState::default();
        assert!(s.toggle_sitting_out(Phase::Turn, true));
        assert!(!s.is_sitting_out());
        assert!(s.sits_out_next_round());

        assert!(s.toggle_sitting_out(Phase::Turn, false));
        assert!(!s.sits_out_next_round());
        s.reset_for_new_round(100);
        assert!(!s.is_sitting_out());
    }

    #[test]
    fn repeated_request_is_rejected() {
        let mut s = PlayerState::default();
        assert!(!s.toggle_sitting_out(Phase::Complete, false));
        assert!(s.toggle_sitting_out(Phase::Complete, true));
        assert!(s.is_sitting_out());
        assert!(!s.toggle_sitting_out(Phase::Complete, true));
    }

    #[test]
    fn sit_in_forecast_matches_the_reset() {
        let mut joiner = PlayerState::default();
        joiner.initialise(Phase::Turn);
        let mut leaver = PlayerState::default();
        leaver.toggle_sitting_out(Phase::Turn, true);
        for (mut s, stack) in [(joiner, 100), (leaver, 100), (PlayerState::default(), 0)] {
            let forecast = s.sits_in_next_round(stack);
            s.reset_for_new_round(stack);
            assert_eq!(forecast, !s.is_sitting_out());
        }
    }

    #[test]
    fn empty_stack_forces_sit_out() {
        let mut s = PlayerState::default();
        s.reset_for_new_round(0);
        assert!(s.is_sitting_out());
    }

    #[test]
    fn action_deadline_follows_flag() {
        let mut s = PlayerState::new(Some(Duration::from_secs(10)));
        let now = Instant::now();
        s.set_action_on_at(true, now);
        assert_eq!(s.next_auto_fold(), Some(now + Duration::from_secs(10)));
        s.set_action_on(false);
        assert_eq!(s.next_auto_fold(), None);
    }

    #[test]
    fn posting_big_blind_marks_the_option() {
        let mut s = PlayerState::default();
        s.set_blinds_due(Blinds::Big);
        s.set_blinds_due(Blinds::None);
        assert!(s.was_big_blind());
        s.reset_for_street();
        assert!(!s.was_big_blind());
    }
}
