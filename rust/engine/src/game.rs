use std::fmt;

use serde::{Deserialize, Serialize};

use crate::player::Player;
use crate::state::Blinds;

/// Where a hand is. A new table sits at [`Phase::Complete`] until the first
/// hand starts.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Waiting for the blinds
    PreDeal,
    /// Hole cards dealt, preflop betting
    PostDeal,
    Flop,
    Turn,
    River,
    Complete,
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::PreDeal => "pre_deal",
            Phase::PostDeal => "post_deal",
            Phase::Flop => "flop",
            Phase::Turn => "turn",
            Phase::River => "river",
            Phase::Complete => "complete",
        }
    }

    /// Streets in which chips can be committed.
    pub fn betting_streets() -> [Phase; 4] {
        [Phase::PostDeal, Phase::Flop, Phase::Turn, Phase::River]
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Seated players kept in seat order. Positions returned by the lookups are
/// indices into that order and are invalidated by [`add`](Self::add) and
/// [`remove`](Self::remove).
#[derive(Debug, Clone, Default)]
pub struct Players {
    seats: Vec<Player>,
}

impl Players {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Player> {
        self.seats.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Player> {
        self.seats.iter_mut()
    }

    pub fn as_mut_slice(&mut self) -> &mut [Player] {
        &mut self.seats
    }

    pub fn get(&self, idx: usize) -> Option<&Player> {
        self.seats.get(idx)
    }

    pub fn get_mut(&mut self, idx: usize) -> Option<&mut Player> {
        self.seats.get_mut(idx)
    }

    pub fn position(&self, player_id: &str) -> Option<usize> {
        self.seats.iter().position(|p| p.id == player_id)
    }

    pub fn by_id(&self, player_id: &str) -> Option<&Player> {
        self.seats.iter().find(|p| p.id == player_id)
    }

    pub fn by_id_mut(&mut self, player_id: &str) -> Option<&mut Player> {
        self.seats.iter_mut().find(|p| p.id == player_id)
    }

    /// Seats the player in the lowest free seat and returns that seat.
    pub fn add(&mut self, mut player: Player) -> usize {
        let seat = self
            .seats
            .iter()
            .enumerate()
            .find(|(i, p)| p.seat != *i)
            .map(|(i, _)| i)
            .unwrap_or(self.seats.len());
        player.seat = seat;
        self.seats.insert(seat, player);
        seat
    }

    pub fn remove(&mut self, player_id: &str) -> Option<Player> {
        let idx = self.position(player_id)?;
        Some(self.seats.remove(idx))
    }

    /// Players dealt into the hand who have not folded, in seat order.
    pub fn in_hand(&self) -> Vec<usize> {
        (0..self.seats.len())
            .filter(|&i| self.seats[i].is_in_hand())
            .collect()
    }

    /// In-hand players who still have chips behind.
    pub fn can_still_bet(&self) -> Vec<usize> {
        (0..self.seats.len())
            .filter(|&i| self.seats[i].is_still_in_hand())
            .collect()
    }

    /// Players not sitting out, in seat order.
    pub fn active(&self) -> Vec<usize> {
        (0..self.seats.len())
            .filter(|&i| !self.seats[i].state.is_sitting_out())
            .collect()
    }

    /// The player `steps` seats after `start`, wrapping round the table. With
    /// `active_only`, seats that cannot bet are skipped; `start` always counts.
    pub fn relative_to(&self, start: usize, steps: usize, active_only: bool) -> usize {
        let n = self.seats.len();
        if n == 0 {
            return start;
        }
        let eligible = |i: usize| i == start || !active_only || self.seats[i].is_still_in_hand();
        let mut idx = start;
        for _ in 0..steps {
            idx = (idx + 1) % n;
            while !eligible(idx) {
                idx = (idx + 1) % n;
            }
        }
        idx
    }

    /// The flagged dealer, or the first seat when nobody has been given the button.
    pub fn dealer(&self) -> Option<usize> {
        if self.seats.is_empty() {
            return None;
        }
        Some(
            self.seats
                .iter()
                .position(|p| p.state.is_dealer())
                .unwrap_or(0),
        )
    }

    pub fn action_on(&self) -> Option<usize> {
        self.seats.iter().position(|p| p.state.is_action_on())
    }

    pub fn clear_action(&mut self) {
        for p in &mut self.seats {
            if p.state.is_action_on() {
                p.state.set_action_on(false);
            }
        }
    }

    /// Passes the action from `current` to the next player able to bet.
    pub fn move_action_to_next(&mut self, current: usize) -> usize {
        let next = self.relative_to(current, 1, true);
        self.seats[current].state.set_action_on(false);
        self.seats[next].state.set_action_on(true);
        next
    }

    pub fn give_action_to(&mut self, idx: usize) {
        self.clear_action();
        if let Some(p) = self.seats.get_mut(idx) {
            p.state.set_action_on(true);
        }
    }

    /// Puts the action on the first player left of the dealer who can still bet.
    pub fn reset_action_for_street(&mut self) -> Option<usize> {
        let dealer = self.dealer()?;
        self.clear_action();
        let first = self.relative_to(dealer, 1, true);
        self.seats[first].state.set_action_on(true);
        Some(first)
    }

    /// Moves the button to the next seat whose player is neither sitting out
    /// nor about to. The first call only flags the initial dealer. Action is
    /// handed to the new dealer so they can start the next hand.
    pub fn rotate_dealer(&mut self) -> Option<usize> {
        let current = self.dealer()?;
        let new_dealer = if !self.seats[current].state.is_dealer() {
            current
        } else {
            (1..self.seats.len())
                .map(|step| self.relative_to(current, step, false))
                .find(|&i| {
                    let s = &self.seats[i].state;
                    !s.is_sitting_out() && !s.sits_out_next_round()
                })
                .unwrap_or(current)
        };
        self.seats[current].state.set_dealer(false);
        self.seats[new_dealer].state.set_dealer(true);
        self.give_action_to(new_dealer);
        Some(new_dealer)
    }

    /// Gives the button to the first seat after `seat` (used once the dealer
    /// has left), preferring players who are sitting in. The action is left alone.
    pub fn assign_dealer_after(&mut self, seat: usize) -> Option<usize> {
        if self.seats.is_empty() {
            return None;
        }
        let n = self.seats.len();
        let start = self.seats.iter().position(|p| p.seat > seat).unwrap_or(0);
        let idx = (0..n)
            .map(|k| (start + k) % n)
            .find(|&i| !self.seats[i].state.is_sitting_out())
            .unwrap_or(start);
        for p in &mut self.seats {
            p.state.set_dealer(false);
        }
        self.seats[idx].state.set_dealer(true);
        Some(idx)
    }

    /// Index of the player owing the given blind.
    pub fn blind_due(&self, blind: Blinds) -> Option<usize> {
        self.seats.iter().position(|p| p.state.blinds_due() == blind)
    }

    /// Refunds the part of the top bet nobody matched, then takes every bet
    /// from the street into the pot. Returns the amount collected.
    pub fn collect_bets(&mut self, phase: Phase) -> u32 {
        let mut bets: Vec<(u32, usize)> = self
            .seats
            .iter()
            .enumerate()
            .map(|(i, p)| (p.stack.committed_in(phase).unwrap_or(0), i))
            .collect();
        bets.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));

        if let [(highest, top), (next, _), ..] = bets[..] {
            if highest > next && self.seats[top].is_in_hand() {
                self.seats[top].stack.reverse_bet(highest - next, phase);
            }
        }

        self.seats.iter_mut().map(|p| p.stack.collect_bets()).sum()
    }

    /// The most any opponent still in the hand could put in this street.
    /// Zero when nobody else has chips.
    pub fn max_bet_possible(&self, excluding: usize) -> u32 {
        self.seats
            .iter()
            .enumerate()
            .filter(|&(i, p)| i != excluding && p.is_in_hand())
            .map(|(_, p)| p.stack.total_chips())
            .max()
            .unwrap_or(0)
    }

    /// Sits out anyone who has run out of chips.
    pub fn auto_exclude_zero_stacks(&mut self) {
        for p in &mut self.seats {
            if p.stack.stack() == 0 && !p.state.is_sitting_out() {
                p.state.toggle_sitting_out(Phase::Complete, true);
            }
        }
    }

    /// Every seat, starting with the one left of the dealer.
    pub fn seat_order_left_of_dealer(&self) -> Vec<usize> {
        let n = self.seats.len();
        let Some(dealer) = self.dealer() else {
            return Vec::new();
        };
        (1..=n).map(|k| (dealer + k) % n).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(n: usize) -> Players {
        let mut players = Players::new();
        for i in 0..n {
            let mut p = Player::new(format!("p{i}"), format!("h{i}"), 1000);
            p.stack.re_buy(100, 0);
            players.add(p);
        }
        players
    }

    #[test]
    fn seats_fill_lowest_gap() {
        let mut players = table(3);
        players.remove("p1");
        let seat = players.add(Player::new("late", "late", 0));
        assert_eq!(seat, 1);
        let seats: Vec<usize> = players.iter().map(|p| p.seat).collect();
        assert_eq!(seats, vec![0, 1, 2]);
    }

    #[test]
    fn relative_to_wraps_and_skips_inactive() {
        let mut players = table(4);
        assert_eq!(players.relative_to(3, 1, false), 0);
        players.get_mut(1).unwrap().state.set_last_action(crate::player::ActionKind::Fold);
        assert_eq!(players.relative_to(0, 1, true), 2);
        assert_eq!(players.relative_to(0, 1, false), 1);
    }

    #[test]
    fn first_rotation_flags_first_seat() {
        let mut players = table(3);
        assert_eq!(players.rotate_dealer(), Some(0));
        assert!(players.get(0).unwrap().state.is_dealer());
        assert_eq!(players.rotate_dealer(), Some(1));
        assert_eq!(players.action_on(), Some(1));
    }

    #[test]
    fn max_bet_ignores_the_bettor() {
        let mut players = table(3);
        players.get_mut(2).unwrap().stack.transfer_win(400);
        assert_eq!(players.max_bet_possible(2), 100);
        assert_eq!(players.max_bet_possible(0), 500);
    }

    #[test]
    fn collect_refunds_unmatched_top_bet() {
        let mut players = table(2);
        players.get_mut(0).unwrap().stack.add_to_table(Phase::Flop, 60);
        players.get_mut(1).unwrap().stack.add_to_table(Phase::Flop, 25);
        assert_eq!(players.collect_bets(Phase::Flop), 50);
        assert_eq!(players.get(0).unwrap().stack.stack(), 75);
        assert_eq!(players.get(0).unwrap().stack.committed_in(Phase::Flop), Some(25));
    }
}
