//! Game position

use crate::{player::Player, rules::RuleSet};
use std::fmt::Display;

/// Reasons a move cannot be applied to a position
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// Size is not one of the rule set's move sizes
    #[error("{0} is not an allowed move size")]
    NotInMoveSet(u32),

    /// Not enough cubes left on the table
    #[error("cannot remove {taken} cube(s), only {remaining} left")]
    ExceedsRemaining {
        #[allow(missing_docs)]
        taken: u32,
        #[allow(missing_docs)]
        remaining: u32,
    },
}

/// Single position of the game. Every move produces a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    remaining: u32,
    active_player: Player,
    round: u32,
}

impl Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "round {}: {} cubes left, {} to move",
            self.round, self.remaining, self.active_player
        )
    }
}

impl GameState {
    /// Opening position: full pile, [`Player::First`] to move, round 1
    #[inline]
    pub const fn initial(rules: &RuleSet) -> Self {
        Self::new(rules.starting_cubes(), Player::First, 1)
    }

    /// Construct arbitrary position
    #[inline]
    pub const fn new(remaining: u32, active_player: Player, round: u32) -> Self {
        Self {
            remaining,
            active_player,
            round,
        }
    }

    /// Cubes left on the table
    #[inline]
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Player to move
    #[inline]
    pub const fn active_player(&self) -> Player {
        self.active_player
    }

    /// Round counter, grows every time [`Player::First`] moves
    #[inline]
    pub const fn round(&self) -> u32 {
        self.round
    }

    /// The player to move has lost: the pile is empty
    #[inline]
    pub const fn is_terminal(&self) -> bool {
        self.remaining == 0
    }

    /// Check that removing `taken` cubes is legal without applying it
    ///
    /// # Errors
    ///
    /// See [`MoveError`]
    pub fn check_move(&self, rules: &RuleSet, taken: u32) -> Result<(), MoveError> {
        if !rules.contains(taken) {
            return Err(MoveError::NotInMoveSet(taken));
        }
        if taken > self.remaining {
            return Err(MoveError::ExceedsRemaining {
                taken,
                remaining: self.remaining,
            });
        }
        Ok(())
    }

    /// Remove `taken` cubes and pass the turn
    ///
    /// # Errors
    ///
    /// See [`MoveError`]
    pub fn apply_move(&self, rules: &RuleSet, taken: u32) -> Result<Self, MoveError> {
        self.check_move(rules, taken)?;
        Ok(self.child(taken))
    }

    /// Position after a move that is already known to be legal.
    ///
    /// The round only advances when [`Player::First`] completes a move.
    #[must_use]
    pub(crate) const fn child(&self, taken: u32) -> Self {
        let round = match self.active_player {
            Player::First => self.round + 1,
            Player::Second => self.round,
        };
        Self {
            remaining: self.remaining - taken,
            active_player: self.active_player.opposite(),
            round,
        }
    }

    /// Position seen by the search: the round is display-only and stays put
    #[must_use]
    pub(crate) const fn search_child(&self, taken: u32) -> Self {
        Self {
            remaining: self.remaining - taken,
            active_player: self.active_player.opposite(),
            round: self.round,
        }
    }

    /// Positions reachable in one move, in ascending move order
    pub fn moves<'a>(&'a self, rules: &'a RuleSet) -> impl Iterator<Item = (u32, Self)> + 'a {
        rules
            .legal_moves(self.remaining)
            .map(move |taken| (taken, self.search_child(taken)))
    }
}

#[cfg(any(test, feature = "quickcheck"))]
impl quickcheck::Arbitrary for GameState {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        // Keep piles small enough for exhaustive search in property tests
        let remaining = <u32 as quickcheck::Arbitrary>::arbitrary(g) % 40;
        let round = <u32 as quickcheck::Arbitrary>::arbitrary(g) % 20 + 1;
        let active_player = <Player as quickcheck::Arbitrary>::arbitrary(g);
        GameState::new(remaining, active_player, round)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let this = *self;
        Box::new(
            (0..this.remaining)
                .rev()
                .map(move |remaining| GameState::new(remaining, this.active_player, this.round)),
        )
    }
}
