use holdem_engine::cards::{all_suits, Card, Rank};
use holdem_engine::errors::GameError;
use holdem_engine::hand::{evaluate_hand, Category, HandRank};

fn c(code: &str) -> Card {
    code.parse().unwrap()
}

fn eval(codes: &[&str]) -> HandRank {
    let cards: Vec<Card> = codes.iter().map(|s| c(s)).collect();
    evaluate_hand(&cards).unwrap()
}

#[test]
fn royal_flush_is_the_maximum_in_every_suit() {
    for suit in all_suits() {
        let sym = suit.symbol();
        let codes: Vec<String> = ["A", "K", "Q", "J", "T"]
            .iter()
            .map(|r| format!("{r}{sym}"))
            .collect();
        let refs: Vec<&str> = codes.iter().map(String::as_str).collect();
        let rank = eval(&refs);
        assert_eq!(rank.value, 7462, "{suit:?}");
        assert_eq!(rank.category, Category::RoyalFlush);
    }
}

#[test]
fn seven_high_is_the_minimum() {
    let rank = eval(&["2C", "3D", "4H", "5S", "7C"]);
    assert_eq!(rank.value, 1);
    assert_eq!(rank.category, Category::HighCard);
    assert_eq!(rank.high, Rank::Seven);
}

#[test]
fn wheel_is_the_lowest_straight() {
    let wheel = eval(&["AC", "2D", "3H", "4S", "5C"]);
    let six_high = eval(&["2C", "3D", "4H", "5S", "6C"]);
    assert_eq!(wheel.category, Category::Straight);
    assert_eq!(wheel.high, Rank::Five);
    assert_eq!(six_high.category, Category::Straight);
    assert!(six_high.beats(&wheel));

    let trips = eval(&["AC", "AD", "AH", "KS", "QC"]);
    assert!(wheel.beats(&trips));
}

#[test]
fn steel_wheel_is_a_straight_flush() {
    let rank = eval(&["AH", "2H", "3H", "4H", "5H"]);
    assert_eq!(rank.category, Category::StraightFlush);
    assert_eq!(rank.high, Rank::Five);
}

#[test]
fn same_five_cards_in_other_suits_tie() {
    let a = eval(&["KS", "KH", "9C", "7D", "2S", "3C", "4D"]);
    let b = eval(&["KC", "KD", "9H", "7S", "2H", "3D", "4S"]);
    assert_eq!(a.value, b.value);
    assert!(!a.beats(&b) && !b.beats(&a));
}

#[test]
fn higher_trips_win_the_full_house_regression() {
    let board = ["TS", "TC", "KS", "KH", "AD"];
    let mut a_cards: Vec<&str> = board.to_vec();
    a_cards.extend(["TD", "KD"]);
    let mut b_cards: Vec<&str> = board.to_vec();
    b_cards.extend(["AS", "AC"]);

    let a = eval(&a_cards);
    let b = eval(&b_cards);
    assert_eq!(a.category, Category::FullHouse);
    assert_eq!(b.category, Category::FullHouse);
    assert_eq!(a.high, Rank::King);
    assert_eq!(b.high, Rank::Ace);
    assert!(b.beats(&a), "aces full beats kings full");
}

#[test]
fn best_five_of_seven_is_chosen() {
    let rank = eval(&["2H", "9H", "JH", "QH", "3H", "QC", "QD"]);
    assert_eq!(rank.category, Category::Flush);
    assert_eq!(rank.card_codes(), vec!["2H", "3H", "9H", "JH", "QH"]);
}

#[test]
fn categories_rank_in_order() {
    let hands = [
        eval(&["2C", "4D", "6H", "8S", "TC"]),
        eval(&["2C", "2D", "6H", "8S", "TC"]),
        eval(&["2C", "2D", "6H", "6S", "TC"]),
        eval(&["2C", "2D", "2H", "8S", "TC"]),
        eval(&["6C", "7D", "8H", "9S", "TC"]),
        eval(&["2C", "4C", "6C", "8C", "TC"]),
        eval(&["2C", "2D", "2H", "8S", "8C"]),
        eval(&["2C", "2D", "2H", "2S", "TC"]),
        eval(&["6C", "7C", "8C", "9C", "TC"]),
    ];
    for pair in hands.windows(2) {
        assert!(pair[1].beats(&pair[0]), "{:?} should beat {:?}", pair[1].category, pair[0].category);
        assert!(pair[1].category > pair[0].category);
    }
}

#[test]
fn duplicate_cards_are_illegal() {
    let cards = vec![c("AS"), c("AS"), c("KD"), c("QH"), c("JC")];
    assert!(matches!(evaluate_hand(&cards), Err(GameError::IllegalHand(_))));
}

#[test]
fn hand_size_is_checked() {
    let four = vec![c("AS"), c("KS"), c("QS"), c("JS")];
    assert!(matches!(evaluate_hand(&four), Err(GameError::IllegalHand(_))));
    let eight: Vec<Card> = ["AS", "KS", "QS", "JS", "TS", "9S", "8S", "7S"]
        .iter()
        .map(|s| c(s))
        .collect();
    assert!(matches!(evaluate_hand(&eight), Err(GameError::IllegalHand(_))));
}
