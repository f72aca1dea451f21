//! Occupants of the second seat

use crate::{player::Player, rules::RuleSet, search, state::GameState};
use rand::{SeedableRng, rngs::StdRng, seq::IndexedRandom};
use std::collections::VecDeque;

/// Answer given by a [`Seat`] when asked for a move
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Raw line typed by a person, still to be parsed and validated
    Line(String),

    /// Move picked by a program, still to be validated
    Move(u32),

    /// No more input will ever come
    Closed,
}

/// Player sitting in the [`Player::Second`] seat.
///
/// The driver validates every reply and asks again after an invalid one.
pub trait Seat {
    /// Answer for `state`. `prompt` is the question to show a human.
    fn reply(&mut self, prompt: &str, state: &GameState, rules: &RuleSet) -> Reply;
}

/// Replays prepared lines, then closes
#[derive(Debug, Clone, Default)]
pub struct Scripted {
    lines: VecDeque<String>,
}

impl Scripted {
    /// Script answering with `lines` in order
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Lines not consumed yet
    pub fn pending(&self) -> usize {
        self.lines.len()
    }
}

impl Seat for Scripted {
    fn reply(&mut self, _prompt: &str, _state: &GameState, _rules: &RuleSet) -> Reply {
        self.lines.pop_front().map_or(Reply::Closed, Reply::Line)
    }
}

/// Plays perfectly using the search engine
#[derive(Debug, Clone, Copy, Default)]
pub struct Optimal;

impl Seat for Optimal {
    fn reply(&mut self, _prompt: &str, state: &GameState, rules: &RuleSet) -> Reply {
        // Impartial game: the best move only depends on the pile, not on who owns it
        let mirrored = GameState::new(state.remaining(), Player::First, state.round());
        search::select_best_move(&mirrored, rules).map_or(Reply::Closed, Reply::Move)
    }
}

/// Picks a uniformly random legal move
#[derive(Debug, Clone)]
pub struct RandomMover {
    rng: StdRng,
}

impl RandomMover {
    /// Reproducible mover
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Seat for RandomMover {
    fn reply(&mut self, _prompt: &str, state: &GameState, rules: &RuleSet) -> Reply {
        let legal = rules.legal_moves(state.remaining()).collect::<Vec<_>>();
        legal
            .choose(&mut self.rng)
            .copied()
            .map_or(Reply::Closed, Reply::Move)
    }
}

impl<S> Seat for &mut S
where
    S: Seat + ?Sized,
{
    fn reply(&mut self, prompt: &str, state: &GameState, rules: &RuleSet) -> Reply {
        (**self).reply(prompt, state, rules)
    }
}
