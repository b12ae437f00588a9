use crate::errors::GameError;
use crate::player::ActionKind;

/// A betting action resolved against the player's chips. Amounts are the
/// chips moved from the stack by this action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidatedAction {
    Fold,
    Check,
    Call(u32),
    Bet(u32),
    Raise(u32),
    AllIn(u32),
}

impl ValidatedAction {
    pub fn chips(&self) -> u32 {
        match *self {
            ValidatedAction::Fold | ValidatedAction::Check => 0,
            ValidatedAction::Call(n)
            | ValidatedAction::Bet(n)
            | ValidatedAction::Raise(n)
            | ValidatedAction::AllIn(n) => n,
        }
    }

    pub fn kind(&self) -> ActionKind {
        match self {
            ValidatedAction::Fold => ActionKind::Fold,
            ValidatedAction::Check => ActionKind::Check,
            ValidatedAction::Call(_) => ActionKind::Call,
            ValidatedAction::Bet(_) => ActionKind::Bet,
            ValidatedAction::Raise(_) => ActionKind::Raise,
            ValidatedAction::AllIn(_) => ActionKind::AllIn,
        }
    }
}

/// The betting situation facing one player on the current street. All bet
/// levels are street totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BetContext {
    /// Chips behind
    pub stack: u32,
    /// Already committed this street
    pub on_table: u32,
    /// Street total needed to stay in
    pub required: u32,
    /// Smallest street total that counts as a raise
    pub min_raise: u32,
    /// Most any opponent could match; 0 means no opponent has chips
    pub cap: u32,
}

impl BetContext {
    pub fn to_call(&self) -> u32 {
        self.required.saturating_sub(self.on_table)
    }

    fn all_in_total(&self) -> u32 {
        self.stack + self.on_table
    }
}

/// Validates a player action according to betting rules and stack size.
///
/// `amount` means what the player typed: the street total for
/// [`ActionKind::Bet`], the increase over the required bet for
/// [`ActionKind::Raise`], and nothing for the other kinds.
///
/// A call with nothing owed is a check, anything reaching the whole stack is
/// an all-in, and a bet larger than any opponent could match is cut down to
/// what they can.
///
/// # Errors
///
/// - [`GameError::ActionNotAllowed`] for a check facing a bet, or a kind that is not a bet
/// - [`GameError::InvalidBetAmount`] for a bet under the required bet, or a
///   raise under the minimum raise that is not an all-in
///
/// # Examples
///
/// ```
/// use holdem_engine::player::ActionKind;
/// use holdem_engine::rules::{validate_action, BetContext, ValidatedAction};
///
/// let ctx = BetContext { stack: 1000, on_table: 0, required: 50, min_raise: 100, cap: 5000 };
///
/// // Call puts in what is owed
/// assert_eq!(validate_action(&ctx, ActionKind::Call, 0), Ok(ValidatedAction::Call(50)));
///
/// // Raising by 100 makes the street total 150
/// assert_eq!(validate_action(&ctx, ActionKind::Raise, 100), Ok(ValidatedAction::Raise(150)));
///
/// // Short stacks go all-in
/// let short = BetContext { stack: 80, ..ctx };
/// assert_eq!(validate_action(&short, ActionKind::Raise, 100), Ok(ValidatedAction::AllIn(80)));
/// ```
///
/// ```
/// use holdem_engine::errors::GameError;
/// use holdem_engine::player::ActionKind;
/// use holdem_engine::rules::{validate_action, BetContext};
///
/// let ctx = BetContext { stack: 1000, on_table: 0, required: 50, min_raise: 100, cap: 5000 };
///
/// // Invalid: check when facing a bet
/// assert!(matches!(
///     validate_action(&ctx, ActionKind::Check, 0),
///     Err(GameError::ActionNotAllowed(_))
/// ));
///
/// // Invalid: bet to 70 is above the call but under the minimum raise
/// assert!(matches!(
///     validate_action(&ctx, ActionKind::Bet, 70),
///     Err(GameError::InvalidBetAmount { amount: 70, minimum: 100 })
/// ));
/// ```
pub fn validate_action(
    ctx: &BetContext,
    kind: ActionKind,
    amount: u32,
) -> Result<ValidatedAction, GameError> {
    match kind {
        ActionKind::Fold => Ok(ValidatedAction::Fold),
        ActionKind::Check => {
            if ctx.to_call() == 0 {
                Ok(ValidatedAction::Check)
            } else {
                Err(GameError::ActionNotAllowed(format!(
                    "cannot check facing a bet of {}",
                    ctx.required
                )))
            }
        }
        ActionKind::Call => {
            if ctx.to_call() == 0 {
                return Ok(ValidatedAction::Check);
            }
            Ok(settle(ctx, ctx.required, ValidatedAction::Call))
        }
        ActionKind::Bet => target_bet(ctx, amount, amount, ValidatedAction::Bet),
        ActionKind::Raise => {
            let target = ctx.required.saturating_add(amount);
            target_bet(ctx, target, amount, ValidatedAction::Raise)
        }
        // Capped all-ins leave chips behind and are plain bets
        ActionKind::AllIn => Ok(settle(ctx, ctx.all_in_total(), ValidatedAction::Bet)),
        other => Err(GameError::ActionNotAllowed(format!(
            "{} is not a betting action",
            other.as_str()
        ))),
    }
}

fn target_bet(
    ctx: &BetContext,
    target: u32,
    typed: u32,
    label: fn(u32) -> ValidatedAction,
) -> Result<ValidatedAction, GameError> {
    // `typed` is in the player's units; convert minimums back to them for errors
    let offset = target - typed;
    let all_in = target >= ctx.all_in_total();

    if !all_in && target < ctx.required {
        return Err(GameError::InvalidBetAmount {
            amount: typed,
            minimum: ctx.required.saturating_sub(offset),
        });
    }
    if !all_in && target == ctx.required {
        return if ctx.to_call() == 0 {
            Ok(ValidatedAction::Check)
        } else {
            Ok(settle(ctx, target, ValidatedAction::Call))
        };
    }
    if target == 0 {
        return Err(GameError::InvalidBetAmount {
            amount: typed,
            minimum: 1,
        });
    }
    let capped = ctx.cap > 0 && ctx.cap < ctx.min_raise;
    if !all_in && !capped && target < ctx.min_raise {
        return Err(GameError::InvalidBetAmount {
            amount: typed,
            minimum: ctx.min_raise.saturating_sub(offset),
        });
    }
    Ok(settle(ctx, target, label))
}

/// Caps the street total, then turns it into chips to move. Whatever empties
/// the stack is an all-in.
fn settle(ctx: &BetContext, target: u32, label: fn(u32) -> ValidatedAction) -> ValidatedAction {
    let target = if ctx.cap > 0 {
        target.min(ctx.cap.max(ctx.required))
    } else {
        target.min(ctx.required.max(ctx.on_table))
    };
    let add = target.saturating_sub(ctx.on_table);
    if add >= ctx.stack {
        ValidatedAction::AllIn(ctx.stack)
    } else {
        label(add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(stack: u32, on_table: u32, required: u32, min_raise: u32) -> BetContext {
        BetContext {
            stack,
            on_table,
            required,
            min_raise,
            cap: 10_000,
        }
    }

    #[test]
    fn call_with_nothing_owed_is_check() {
        let c = ctx(100, 2, 2, 4);
        assert_eq!(validate_action(&c, ActionKind::Call, 0), Ok(ValidatedAction::Check));
    }

    #[test]
    fn call_short_is_all_in() {
        let c = ctx(30, 0, 50, 100);
        assert_eq!(validate_action(&c, ActionKind::Call, 0), Ok(ValidatedAction::AllIn(30)));
    }

    #[test]
    fn bet_is_a_street_total() {
        let c = ctx(100, 10, 20, 30);
        assert_eq!(validate_action(&c, ActionKind::Bet, 40), Ok(ValidatedAction::Bet(30)));
        assert_eq!(validate_action(&c, ActionKind::Bet, 20), Ok(ValidatedAction::Call(10)));
        assert!(matches!(
            validate_action(&c, ActionKind::Bet, 15),
            Err(GameError::InvalidBetAmount { amount: 15, minimum: 20 })
        ));
    }

    #[test]
    fn raise_minimum_reported_as_increment() {
        let c = ctx(1000, 0, 50, 100);
        assert!(matches!(
            validate_action(&c, ActionKind::Raise, 20),
            Err(GameError::InvalidBetAmount { amount: 20, minimum: 50 })
        ));
    }

    #[test]
    fn short_all_in_raise_is_allowed() {
        let c = ctx(60, 0, 50, 100);
        assert_eq!(validate_action(&c, ActionKind::Bet, 60), Ok(ValidatedAction::AllIn(60)));
    }

    #[test]
    fn bets_are_capped_at_what_opponents_hold() {
        let c = BetContext {
            cap: 80,
            ..ctx(500, 0, 20, 40)
        };
        assert_eq!(validate_action(&c, ActionKind::Bet, 300), Ok(ValidatedAction::Bet(80)));
        assert_eq!(validate_action(&c, ActionKind::AllIn, 0), Ok(ValidatedAction::Bet(80)));
    }

    #[test]
    fn bet_below_minimum_allowed_when_cap_is_lower() {
        let c = BetContext {
            cap: 30,
            ..ctx(500, 0, 20, 40)
        };
        assert_eq!(validate_action(&c, ActionKind::Bet, 30), Ok(ValidatedAction::Bet(30)));
    }

    #[test]
    fn non_betting_kinds_rejected() {
        let c = ctx(100, 0, 0, 2);
        assert!(validate_action(&c, ActionKind::SitOut, 0).is_err());
    }
}
