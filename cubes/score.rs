//! Game-theoretic value of a position and the static evaluation

use crate::{player::Player, state::GameState};
use auto_ops::impl_op_ex;
use std::fmt::Display;

/// Value of a position, always from [`Player::First`]'s point of view.
///
/// Ordering follows the value, so `Loss < Undecided < Win`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde_repr::Serialize_repr, serde_repr::Deserialize_repr)
)]
#[repr(i8)]
pub enum Score {
    /// [`Player::First`] loses
    Loss = -1,
    /// Game is not over yet
    Undecided = 0,
    /// [`Player::First`] wins
    Win = 1,
}

impl Score {
    /// Numeric value in `{-1, 0, 1}`
    #[inline]
    pub const fn value(self) -> i8 {
        self as i8
    }

    /// Score of a position that `player` has lost
    #[inline]
    pub const fn lost_by(player: Player) -> Self {
        match player {
            Player::First => Score::Loss,
            Player::Second => Score::Win,
        }
    }

    /// Same value seen from `player`'s side
    #[inline]
    #[must_use]
    pub fn for_player(self, player: Player) -> Self {
        match player {
            Player::First => self,
            Player::Second => -self,
        }
    }
}

// Flip the point of view
impl_op_ex!(-|s: &Score| -> Score {
    match s {
        Score::Loss => Score::Win,
        Score::Undecided => Score::Undecided,
        Score::Win => Score::Loss,
    }
});

impl Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Static evaluation: the player facing an empty pile has lost, anything else is undecided
#[inline]
pub const fn evaluate(state: &GameState) -> Score {
    if state.is_terminal() {
        Score::lost_by(state.active_player())
    } else {
        Score::Undecided
    }
}
