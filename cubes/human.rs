//! Validation of moves typed in by a human player

use crate::{
    rules::RuleSet,
    state::{GameState, MoveError},
};

/// Rejected human input. The player is asked again, nothing else happens.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidMove {
    /// Input does not start with a number
    #[error("not a number")]
    NotANumber,

    /// Number is not one of the allowed move sizes
    #[error("{0} is not an allowed move size")]
    NotInMoveSet(i64),

    /// Not enough cubes left on the table
    #[error("cannot remove {taken} cube(s), only {remaining} left")]
    ExceedsRemaining {
        #[allow(missing_docs)]
        taken: u32,
        #[allow(missing_docs)]
        remaining: u32,
    },
}

impl From<MoveError> for InvalidMove {
    fn from(err: MoveError) -> Self {
        match err {
            MoveError::NotInMoveSet(size) => InvalidMove::NotInMoveSet(i64::from(size)),
            MoveError::ExceedsRemaining { taken, remaining } => {
                InvalidMove::ExceedsRemaining { taken, remaining }
            }
        }
    }
}

/// Read the leading integer of `text`, ignoring whatever follows it.
///
/// Leading whitespace and a single sign are accepted, so `" 2 cubes"` reads as 2 and
/// `"4.5"` as 4. Values too large for `i64` saturate.
fn leading_integer(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, unsigned) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let digits_len = unsigned.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    // Only digits are left, so the parse can only fail on overflow
    let magnitude = unsigned[..digits_len].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// Turn a line of human input into a legal move for `state`.
///
/// # Errors
///
/// See [`InvalidMove`]. Checks run in order: number, move set, pile size.
pub fn parse_move(text: &str, rules: &RuleSet, state: &GameState) -> Result<u32, InvalidMove> {
    let value = leading_integer(text).ok_or(InvalidMove::NotANumber)?;
    let taken = u32::try_from(value).map_err(|_| InvalidMove::NotInMoveSet(value))?;
    state.check_move(rules, taken)?;
    Ok(taken)
}

/// Prompt shown when asking for a move
pub fn prompt(rules: &RuleSet) -> String {
    format!(
        "How many cubes do you want to remove? ({}): ",
        rules.describe_moves()
    )
}

/// Message shown after a rejected move
pub fn rejection(rules: &RuleSet) -> String {
    format!("Invalid move. Please choose {} cubes.", rules.describe_moves())
}
