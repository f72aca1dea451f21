//! Exhaustive minimax search.
//!
//! Every pile shrinks by at least one cube per ply, so the tree is finite and the search
//! always reaches terminal positions when the depth budget equals the pile size. There is no
//! pruning and no caching: children are visited in ascending move order and scored exactly.

use crate::{
    player::Player,
    rules::RuleSet,
    score::{Score, evaluate},
    state::GameState,
};
use log::debug;

/// Move chosen at the root together with its guaranteed value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Number of cubes to remove
    pub best_move: u32,

    /// Value reached with best play from both sides, from [`Player::First`]'s view
    pub score: Score,
}

struct Searcher<'r> {
    rules: &'r RuleSet,
    nodes: u64,
}

impl<'r> Searcher<'r> {
    const fn new(rules: &'r RuleSet) -> Self {
        Self { rules, nodes: 0 }
    }

    fn minimax(&mut self, state: &GameState, depth: u32, maximizing: bool) -> Score {
        self.nodes += 1;

        let score = evaluate(state);
        if depth == 0 || score != Score::Undecided {
            return score;
        }

        let mut best: Option<Score> = None;
        for (_, child) in state.moves(self.rules) {
            let child_score = self.minimax(&child, depth - 1, !maximizing);
            best = Some(match best {
                None => child_score,
                Some(best) if maximizing => best.max(child_score),
                Some(best) => best.min(child_score),
            });
        }

        // No legal move left: stuck the same way as on an empty pile
        best.unwrap_or(Score::lost_by(state.active_player()))
    }
}

/// Value of `state` found by searching at most `depth` plies deep.
///
/// `maximizing` tells whether the player to move picks the largest or the smallest child
/// value. With a budget of at least `state.remaining()` the result is exact.
pub fn minimax(state: &GameState, rules: &RuleSet, depth: u32, maximizing: bool) -> Score {
    Searcher::new(rules).minimax(state, depth, maximizing)
}

/// Pick the best move for [`Player::First`].
///
/// A move that empties the pile is taken immediately. Otherwise every legal move is scored
/// with a full depth search and the first one with the highest score wins, so ties go to the
/// smallest move. Returns `None` when no move is legal.
pub fn search(state: &GameState, rules: &RuleSet) -> Option<SearchResult> {
    debug_assert_eq!(
        state.active_player(),
        Player::First,
        "Root search is run for the first player only"
    );

    let remaining = state.remaining();
    if rules.contains(remaining) {
        let result = SearchResult {
            best_move: remaining,
            score: evaluate(&state.search_child(remaining)),
        };
        debug!("Taking the last {} cube(s)", remaining);
        return Some(result);
    }

    let mut searcher = Searcher::new(rules);
    let mut best: Option<SearchResult> = None;
    for (taken, child) in state.moves(rules) {
        let score = searcher.minimax(&child, remaining, false);
        if best.is_none_or(|best| score > best.score) {
            best = Some(SearchResult {
                best_move: taken,
                score,
            });
        }
    }

    if let Some(result) = best {
        debug!(
            "Searched {} node(s) from {} cube(s): removing {} scores {}",
            searcher.nodes, remaining, result.best_move, result.score
        );
    }
    best
}

/// Move part of [`search`]
#[inline]
pub fn select_best_move(state: &GameState, rules: &RuleSet) -> Option<u32> {
    search(state, rules).map(|result| result.best_move)
}
