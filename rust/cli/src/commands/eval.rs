//! `holdem eval`: ranks a hand given as card codes.

use std::io::Write;

use holdem_engine::cards::Card;
use holdem_engine::hand::evaluate_hand;

use crate::error::CliError;

/// Codes may be separate arguments or one argument split by spaces or commas.
pub fn handle_eval_command(args: &[String], out: &mut dyn Write) -> Result<(), CliError> {
    let codes: Vec<&str> = args
        .iter()
        .flat_map(|a| a.split(|c: char| c == ',' || c.is_whitespace()))
        .filter(|s| !s.is_empty())
        .collect();
    let cards = Card::parse_many(&codes)?;
    let rank = evaluate_hand(&cards).map_err(|e| CliError::InvalidInput(e.to_string()))?;

    let shown: Vec<String> = cards.iter().map(Card::code).collect();
    writeln!(out, "Cards: {}", shown.join(" "))?;
    writeln!(out, "Hand: {}", rank.describe())?;
    writeln!(out, "Value: {}", rank.value)?;
    writeln!(out, "Best five: {}", rank.card_codes().join(" "))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(args: &[&str]) -> Result<String, CliError> {
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        let mut out = Vec::new();
        handle_eval_command(&args, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn comma_and_space_separated_codes_are_accepted() {
        let text = eval(&["as,ks qs", "JS", "TS"]).unwrap();
        assert!(text.contains("Cards: AS KS QS JS TS"));
        assert!(text.contains("Value: 7462"));
    }

    #[test]
    fn seven_cards_report_the_best_five() {
        let text = eval(&["2H", "3H", "9H", "JH", "QH", "2C", "3D"]).unwrap();
        assert!(text.contains("Hand: Flush"));
        assert!(text.contains("Best five: 2H 3H 9H JH QH"));
    }

    #[test]
    fn bad_input_is_rejected() {
        assert!(matches!(eval(&["AS", "KS", "XX"]), Err(CliError::InvalidInput(_))));
        assert!(matches!(eval(&["AS", "KS", "QS"]), Err(CliError::InvalidInput(_))));
        assert!(matches!(
            eval(&["AS", "AS", "QS", "JS", "TS"]),
            Err(CliError::InvalidInput(_))
        ));
    }
}
