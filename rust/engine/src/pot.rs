use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::game::Phase;
use crate::hand::HandRank;

/// One pot and who can win it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidePot {
    pub name: String,
    pub total: u32,
    pub contestants: Vec<String>,
    pub winners: Vec<String>,
    pub winning_hand: Option<HandRank>,
    /// Chips left over by an uneven split, paid out one each as odd chips
    pub residual: u32,
}

impl SidePot {
    pub fn new(total: u32) -> Self {
        Self {
            name: String::new(),
            total,
            contestants: Vec::new(),
            winners: Vec::new(),
            winning_hand: None,
            residual: 0,
        }
    }

    /// What each winner gets before odd chips.
    pub fn split_amount(&self) -> u32 {
        match self.winners.len() {
            0 => 0,
            n => self.total / n as u32,
        }
    }

    fn winner_set(&self) -> BTreeSet<&str> {
        self.winners.iter().map(String::as_str).collect()
    }
}

/// The pots of a finished hand, in the order they were formed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GamePots {
    pots: Vec<SidePot>,
}

impl GamePots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a pot, folding it into an existing one won by exactly the same
    /// players. The first pot is the main pot; later ones are lettered.
    pub fn add_side_pot(&mut self, mut pot: SidePot) {
        let winners = pot.winner_set();
        if let Some(existing) = self.pots.iter_mut().find(|p| p.winner_set() == winners) {
            existing.total += pot.total;
            return;
        }
        pot.name = match self.pots.len() {
            0 => "Main Pot".to_string(),
            n => format!("Pot {}", (b'A' + ((n - 1) % 26) as u8) as char),
        };
        self.pots.push(pot);
    }

    pub fn pots(&self) -> &[SidePot] {
        &self.pots
    }

    pub fn is_empty(&self) -> bool {
        self.pots.is_empty()
    }

    pub fn total(&self) -> u32 {
        self.pots.iter().map(|p| p.total).sum()
    }

    /// Every distinct pot winner, in the order they first win.
    pub fn winners(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for w in self.pots.iter().flat_map(|p| p.winners.iter()) {
            if !out.contains(w) {
                out.push(w.clone());
            }
        }
        out
    }

    /// Splits each pot between its winners. A remainder is recorded as the
    /// pot's residual and handed out one chip at a time, to winners in
    /// `seat_order` (which starts left of the dealer). Returns chips won per player.
    pub fn payouts(&mut self, seat_order: &[String]) -> BTreeMap<String, u32> {
        let mut won: BTreeMap<String, u32> = BTreeMap::new();
        for pot in &mut self.pots {
            if pot.winners.is_empty() {
                continue;
            }
            let share = pot.split_amount();
            let remainder = pot.total - share * pot.winners.len() as u32;
            pot.residual = remainder;

            let mut ordered: Vec<&String> = pot.winners.iter().collect();
            ordered.sort_by_key(|w| {
                seat_order
                    .iter()
                    .position(|s| s == *w)
                    .unwrap_or(usize::MAX)
            });
            for (i, w) in ordered.into_iter().enumerate() {
                let odd = u32::from((i as u32) < remainder);
                *won.entry(w.clone()).or_insert(0) += share + odd;
            }
        }
        won
    }
}

/// A player's stake in the hand as the pot engine sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PotEntrant {
    pub player_id: String,
    pub committed: BTreeMap<Phase, u32>,
    /// Still holding cards: not folded and not gone from the table
    pub contending: bool,
    pub hand: Option<HandRank>,
}

/// Builds the pots for a hand from every entrant's per-street commitments.
///
/// Each street is split into tiers at the commitment levels of the players
/// still contending, so an all-in player only contests what they could
/// match. Folded chips count toward the tiers they reach but never win; what a
/// folded player put in above the top tier joins the top tier. A street where
/// only folded players put chips in is contested by everyone still in the hand.
/// Pots with the same winners are merged, and the total always equals the sum
/// of all commitments.
///
/// ```
/// use std::collections::BTreeMap;
/// use holdem_engine::game::Phase;
/// use holdem_engine::pot::{calculate_pots, PotEntrant};
///
/// let entrant = |id: &str, chips: u32| PotEntrant {
///     player_id: id.to_string(),
///     committed: BTreeMap::from([(Phase::Flop, chips)]),
///     contending: true,
///     hand: None,
/// };
/// let pots = calculate_pots(&[entrant("a", 1), entrant("b", 5), entrant("c", 10), entrant("d", 10)]);
/// assert_eq!(pots.total(), 26);
/// ```
pub fn calculate_pots(entrants: &[PotEntrant]) -> GamePots {
    let mut pots = GamePots::new();
    let everyone_contending: Vec<&PotEntrant> = entrants.iter().filter(|e| e.contending).collect();

    for phase in Phase::betting_streets() {
        let paid: Vec<(&PotEntrant, u32)> = entrants
            .iter()
            .filter_map(|e| match e.committed.get(&phase) {
                Some(&n) if n > 0 => Some((e, n)),
                _ => None,
            })
            .collect();
        if paid.is_empty() {
            continue;
        }

        let levels: BTreeSet<u32> = paid
            .iter()
            .filter(|(e, _)| e.contending)
            .map(|&(_, n)| n)
            .collect();

        if levels.is_empty() {
            let total = paid.iter().map(|&(_, n)| n).sum();
            pots.add_side_pot(award(total, &everyone_contending));
            continue;
        }

        let top = levels.iter().next_back().copied().unwrap_or(0);
        let mut floor = 0;
        for &level in &levels {
            let mut total: u32 = paid
                .iter()
                .map(|&(_, n)| n.min(level) - n.min(floor))
                .sum();
            if level == top {
                total += paid.iter().map(|&(_, n)| n.saturating_sub(top)).sum::<u32>();
            }
            let contestants: Vec<&PotEntrant> = paid
                .iter()
                .filter(|&&(e, n)| e.contending && n >= level)
                .map(|&(e, _)| e)
                .collect();
            pots.add_side_pot(award(total, &contestants));
            floor = level;
        }
    }
    pots
}

fn award(total: u32, contestants: &[&PotEntrant]) -> SidePot {
    let best = contestants
        .iter()
        .map(|e| e.hand.map_or(0, |h| h.value))
        .max()
        .unwrap_or(0);
    let winners: Vec<&PotEntrant> = contestants
        .iter()
        .copied()
        .filter(|e| e.hand.map_or(0, |h| h.value) == best)
        .collect();

    let mut pot = SidePot::new(total);
    pot.contestants = contestants.iter().map(|e| e.player_id.clone()).collect();
    pot.winners = winners.iter().map(|e| e.player_id.clone()).collect();
    pot.winning_hand = winners.first().and_then(|e| e.hand);
    pot
}
