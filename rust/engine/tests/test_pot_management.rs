use std::collections::BTreeMap;

use holdem_engine::cards::Card;
use holdem_engine::game::Phase;
use holdem_engine::hand::{evaluate_hand, HandRank};
use holdem_engine::pot::{calculate_pots, PotEntrant};

fn hand(codes: [&str; 5]) -> HandRank {
    evaluate_hand(&Card::parse_many(codes).unwrap()).unwrap()
}

fn entrant(id: &str, streets: &[(Phase, u32)], contending: bool, h: Option<HandRank>) -> PotEntrant {
    PotEntrant {
        player_id: id.to_string(),
        committed: streets.iter().copied().collect(),
        contending,
        hand: h,
    }
}

fn seats(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|s| s.to_string()).collect()
}

#[test]
fn all_in_tiers_form_side_pots() {
    let best = hand(["AS", "AH", "AD", "KC", "KD"]);
    let second = hand(["QS", "QH", "QD", "2C", "3D"]);
    let third = hand(["JS", "JH", "4D", "5C", "7D"]);
    let entrants = [
        entrant("a", &[(Phase::PostDeal, 1)], true, Some(best)),
        entrant("b", &[(Phase::PostDeal, 5)], true, Some(second)),
        entrant("c", &[(Phase::PostDeal, 10)], true, Some(third)),
        entrant("d", &[(Phase::PostDeal, 10)], true, Some(third)),
    ];
    let mut pots = calculate_pots(&entrants);
    assert_eq!(pots.total(), 26);

    let summary: Vec<(&str, u32, usize)> = pots
        .pots()
        .iter()
        .map(|p| (p.name.as_str(), p.total, p.contestants.len()))
        .collect();
    assert_eq!(
        summary,
        vec![("Main Pot", 4, 4), ("Pot A", 12, 3), ("Pot B", 10, 2)]
    );

    let won = pots.payouts(&seats(&["a", "b", "c", "d"]));
    assert_eq!(won.get("a"), Some(&4));
    assert_eq!(won.get("b"), Some(&12));
    assert_eq!(won.get("c"), Some(&5));
    assert_eq!(won.get("d"), Some(&5));
    assert_eq!(won.values().sum::<u32>(), 26);
}

#[test]
fn totals_match_commitments_across_streets_and_folds() {
    let strong = hand(["9S", "9H", "9D", "2C", "3D"]);
    let weak = hand(["8S", "8H", "4D", "2S", "3C"]);
    let entrants = [
        entrant("a", &[(Phase::PostDeal, 2), (Phase::Flop, 6)], false, None),
        entrant("b", &[(Phase::PostDeal, 2), (Phase::Flop, 10), (Phase::Turn, 30)], true, Some(strong)),
        entrant("c", &[(Phase::PostDeal, 2), (Phase::Flop, 10), (Phase::Turn, 12)], true, Some(weak)),
        entrant("d", &[(Phase::PostDeal, 1)], false, None),
    ];
    let committed: u32 = entrants
        .iter()
        .flat_map(|e| e.committed.values())
        .sum();

    let mut pots = calculate_pots(&entrants);
    assert_eq!(pots.total(), committed);
    assert!(pots.pots().iter().all(|p| !p.winners.iter().any(|w| w == "a" || w == "d")));

    let won = pots.payouts(&seats(&["a", "b", "c", "d"]));
    assert_eq!(won.values().sum::<u32>(), committed);
    assert_eq!(won.get("b"), Some(&committed));
}

#[test]
fn folded_only_street_goes_to_remaining_players() {
    let h = hand(["KS", "KH", "4D", "2S", "3C"]);
    let entrants = [
        entrant("a", &[(Phase::PostDeal, 2), (Phase::Flop, 8)], false, None),
        entrant("b", &[(Phase::PostDeal, 2)], true, Some(h)),
    ];
    let mut pots = calculate_pots(&entrants);
    assert_eq!(pots.total(), 12);
    assert_eq!(pots.pots().len(), 1, "same winner set merges");
    let won = pots.payouts(&seats(&["a", "b"]));
    assert_eq!(won, BTreeMap::from([("b".to_string(), 12)]));
}

#[test]
fn split_pot_records_residual_and_odd_chip() {
    let tie = hand(["AS", "KH", "QD", "JC", "9S"]);
    let entrants = [
        entrant("a", &[(Phase::PostDeal, 3)], false, None),
        entrant("b", &[(Phase::PostDeal, 3)], true, Some(tie)),
        entrant("c", &[(Phase::PostDeal, 3)], true, Some(tie)),
    ];
    let mut pots = calculate_pots(&entrants);
    // seat order starts left of the dealer
    let won = pots.payouts(&seats(&["c", "a", "b"]));
    let main = &pots.pots()[0];
    assert_eq!(main.total, 9);
    assert_eq!(main.split_amount(), 4);
    assert_eq!(main.residual, 1);
    assert_eq!(won.get("c"), Some(&5));
    assert_eq!(won.get("b"), Some(&4));
}
