//! Solve a range of starting piles

use crate::{
    grundy::GrundySequence,
    player::Player,
    rules::RuleSet,
    score::{Score, evaluate},
    search::{self, minimax},
    state::GameState,
};
use std::ops::RangeInclusive;

/// Solution of one starting pile with the first player to move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionReport {
    /// Starting pile
    pub cubes: u32,

    /// Value with best play, from the first player's view
    pub score: Score,

    /// Move the engine opens with, `None` when it cannot move
    pub best_move: Option<u32>,

    /// Grundy value of the pile
    pub grundy: u32,
}

/// Solve every pile size in `cubes` under the move set of `rules`
pub fn analyze(rules: &RuleSet, cubes: RangeInclusive<u32>) -> Vec<PositionReport> {
    let grundy = GrundySequence::new(rules)
        .take(*cubes.end() as usize + 1)
        .collect::<Vec<_>>();

    cubes
        .map(|n| {
            let rules = rules.with_starting_cubes(n);
            let state = GameState::initial(&rules);
            let (score, best_move) = match search::search(&state, &rules) {
                Some(result) => (result.score, Some(result.best_move)),
                None if state.is_terminal() => (evaluate(&state), None),
                None => (Score::lost_by(Player::First), None),
            };
            debug_assert_eq!(score, minimax(&state, &rules, n, true));

            PositionReport {
                cubes: n,
                score,
                best_move,
                grundy: grundy[n as usize],
            }
        })
        .collect()
}
