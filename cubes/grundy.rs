//! Grundy values of pile sizes.
//!
//! The game is impartial: both players have the same moves, so every pile size has a Grundy
//! value and the player to move loses exactly when it is zero. This gives an independent
//! check of the search and is reported by [`analysis`](crate::analysis).

use crate::rules::RuleSet;

/// Minimum excluded value.
/// See <https://en.wikipedia.org/wiki/Mex_(mathematics)>
pub fn mex(mut values: Vec<u32>) -> u32 {
    values.sort_unstable();
    let mut current = 0;
    for v in values {
        match current.cmp(&v) {
            std::cmp::Ordering::Less => return current,
            std::cmp::Ordering::Equal => current += 1,
            std::cmp::Ordering::Greater => {}
        }
    }
    current
}

/// Infinite iterator of Grundy values for piles `0, 1, 2, ...`, using a ring buffer as long
/// as the largest move.
#[derive(Debug, Clone)]
pub struct GrundySequence<'r> {
    rules: &'r RuleSet,

    /// Ring buffer of previous values
    previous: Vec<u32>,

    /// Pile size to compute the value for
    current: u32,
}

impl<'r> GrundySequence<'r> {
    /// Start at the empty pile
    pub fn new(rules: &'r RuleSet) -> Self {
        let largest = rules.moves().last().copied().unwrap_or(0);
        Self {
            rules,
            previous: vec![0; largest.max(1) as usize],
            current: 0,
        }
    }
}

impl Iterator for GrundySequence<'_> {
    type Item = u32;

    fn next(&mut self) -> Option<Self::Item> {
        let period_len = self.previous.len() as u32;

        let for_mex = self
            .rules
            .legal_moves(self.current)
            .map(|m| self.previous[((self.current - m) % period_len) as usize])
            .collect::<Vec<_>>();
        let value = mex(for_mex);

        self.previous[(self.current % period_len) as usize] = value;
        self.current += 1;

        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mex_works() {
        assert_eq!(mex(vec![0, 0, 2, 5, 1]), 3);
        assert_eq!(mex(vec![0, 1, 2]), 3);
        assert_eq!(mex(vec![0, 1, 1]), 2);
        assert_eq!(mex(vec![1, 2]), 0);
        assert_eq!(mex(vec![]), 0);
    }

    #[test]
    fn sequences() {
        let take = |moves: Vec<u32>, n| {
            let rules = RuleSet::new(moves, 0).unwrap();
            GrundySequence::new(&rules).take(n).collect::<Vec<_>>()
        };

        assert_eq!(take(vec![1, 2, 4], 9), vec![0, 1, 2, 0, 1, 2, 0, 1, 2]);
        assert_eq!(take(vec![1], 4), vec![0, 1, 0, 1]);
        assert_eq!(take(vec![2, 3, 5], 7), vec![0, 0, 1, 1, 2, 2, 3]);
        assert_eq!(take(vec![1, 2, 3], 8), vec![0, 1, 2, 3, 0, 1, 2, 3]);
    }
}
