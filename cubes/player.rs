//! The two sides of the game

use std::fmt::Display;

/// Side of the game.
///
/// [`Player::First`] always opens the game and is played by the search engine. It is called
/// `MAX` in game messages because the search maximizes its score, [`Player::Second`] is
/// called `MIN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum Player {
    First,
    Second,
}

impl Player {
    /// Opposite player
    #[inline(always)]
    #[must_use]
    pub const fn opposite(self) -> Player {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    /// Name used in game messages
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Player::First => "MAX",
            Player::Second => "MIN",
        }
    }

    /// Run a predicate for both players
    #[inline(always)]
    pub fn forall<P>(mut predicate: P) -> bool
    where
        P: FnMut(Player) -> bool,
    {
        predicate(Player::First) && predicate(Player::Second)
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(any(test, feature = "quickcheck"))]
impl quickcheck::Arbitrary for Player {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        if <bool as quickcheck::Arbitrary>::arbitrary(g) {
            Player::First
        } else {
            Player::Second
        }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        match self {
            Player::First => quickcheck::empty_shrinker(),
            Player::Second => quickcheck::single_shrinker(Player::First),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_involution() {
        assert!(Player::forall(|p| p.opposite().opposite() == p));
        assert_eq!(Player::First.opposite(), Player::Second);
    }

    #[test]
    fn names() {
        assert_eq!(Player::First.to_string(), "MAX");
        assert_eq!(Player::Second.to_string(), "MIN");
    }
}
