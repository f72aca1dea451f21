//! Game parameters: legal move sizes and the starting pile

use crate::display;
use std::fmt::Display;

/// Third move size of the classic `{1, 2, K}` game
pub const DEFAULT_K: u32 = 4;

/// Starting pile of the classic game
pub const DEFAULT_CUBES: u32 = 20;

/// Errors reported when constructing a [`RuleSet`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleSetError {
    /// No move sizes were given
    #[error("move set cannot be empty")]
    EmptyMoveSet,

    /// Removing nothing is not a move
    #[error("move sizes must be positive, got 0")]
    ZeroMove,
}

/// Legal move sizes together with the starting pile size
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuleSet {
    // Invariant: sorted, distinct, positive, non-empty
    moves: Vec<u32>,
    starting_cubes: u32,
}

impl Display for RuleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Cubes")?;
        display::parens(f, |f| {
            write!(f, "m={}, ", self.starting_cubes())?;
            display::braces(f, |f| display::commas(f, self.moves()))
        })
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            moves: vec![1, 2, DEFAULT_K],
            starting_cubes: DEFAULT_CUBES,
        }
    }
}

impl RuleSet {
    /// Arbitrary move set. Sizes are sorted and duplicates removed.
    ///
    /// # Errors
    ///
    /// Fails when `moves` is empty or contains zero
    pub fn new(mut moves: Vec<u32>, starting_cubes: u32) -> Result<Self, RuleSetError> {
        if moves.is_empty() {
            return Err(RuleSetError::EmptyMoveSet);
        }
        if moves.contains(&0) {
            return Err(RuleSetError::ZeroMove);
        }
        moves.sort_unstable();
        moves.dedup();

        Ok(Self {
            moves,
            starting_cubes,
        })
    }

    /// The classic `{1, 2, k}` game
    ///
    /// # Errors
    ///
    /// Fails when `k` is zero
    pub fn classic(k: u32, starting_cubes: u32) -> Result<Self, RuleSetError> {
        if k == 0 {
            return Err(RuleSetError::ZeroMove);
        }
        Self::new(vec![1, 2, k], starting_cubes)
    }

    /// Legal move sizes in ascending order
    #[inline]
    pub fn moves(&self) -> &[u32] {
        &self.moves
    }

    /// Pile size at the start of the game
    #[inline]
    pub const fn starting_cubes(&self) -> u32 {
        self.starting_cubes
    }

    /// Same moves, different starting pile
    #[must_use]
    pub fn with_starting_cubes(&self, starting_cubes: u32) -> Self {
        Self {
            moves: self.moves.clone(),
            starting_cubes,
        }
    }

    /// Check if `size` is in the move set, regardless of the pile
    #[inline]
    pub fn contains(&self, size: u32) -> bool {
        self.moves.binary_search(&size).is_ok()
    }

    /// Move sizes playable on a pile of `remaining` cubes, ascending
    pub fn legal_moves(&self, remaining: u32) -> impl Iterator<Item = u32> + '_ {
        self.moves.iter().copied().take_while(move |m| *m <= remaining)
    }

    /// Move set rendered for prompts, e.g. `1,2 or 4`
    pub fn describe_moves(&self) -> String {
        let mut s = String::new();
        // Writing into a String cannot fail
        let _ = display::alternatives(&mut s, self.moves());
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_rules() {
        let rules = RuleSet::default();
        assert_eq!(rules.moves(), &[1, 2, 4]);
        assert_eq!(rules.starting_cubes(), 20);
        assert_eq!(rules, RuleSet::classic(DEFAULT_K, DEFAULT_CUBES).unwrap());
        assert_eq!(rules.to_string(), "Cubes(m=20, {1, 2, 4})");
        assert_eq!(rules.describe_moves(), "1,2 or 4");
    }

    #[test]
    fn normalizes_move_set() {
        let rules = RuleSet::new(vec![4, 1, 4, 2], 7).unwrap();
        assert_eq!(rules.moves(), &[1, 2, 4]);

        let rules = RuleSet::classic(2, 10).unwrap();
        assert_eq!(rules.moves(), &[1, 2]);
        assert_eq!(rules.describe_moves(), "1 or 2");
    }

    #[test]
    fn rejects_bad_move_sets() {
        assert_eq!(RuleSet::new(vec![], 5), Err(RuleSetError::EmptyMoveSet));
        assert_eq!(RuleSet::new(vec![0, 1], 5), Err(RuleSetError::ZeroMove));
        assert_eq!(RuleSet::classic(0, 5), Err(RuleSetError::ZeroMove));
        assert_eq!(
            RuleSetError::ZeroMove.to_string(),
            "move sizes must be positive, got 0"
        );
    }

    #[test]
    fn legal_moves_respect_pile() {
        let rules = RuleSet::default();
        assert_eq!(rules.legal_moves(0).collect::<Vec<_>>(), Vec::<u32>::new());
        assert_eq!(rules.legal_moves(1).collect::<Vec<_>>(), vec![1]);
        assert_eq!(rules.legal_moves(3).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(rules.legal_moves(20).collect::<Vec<_>>(), vec![1, 2, 4]);

        let rules = RuleSet::new(vec![3, 5], 10).unwrap();
        assert_eq!(rules.legal_moves(2).count(), 0);
        assert!(rules.contains(5));
        assert!(!rules.contains(4));
    }
}
