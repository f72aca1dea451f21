//! Turn driver: alternates the search engine and the second seat until the pile is empty

use crate::{
    human::{self, InvalidMove},
    player::Player,
    rules::RuleSet,
    score::{Score, evaluate},
    search,
    seat::{Reply, Seat},
    state::GameState,
};
use log::{debug, trace};
use std::fmt::Display;

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Regular end, the other player faced an empty pile or had no legal move
    Winner(Player),

    /// Second seat stopped answering
    Abandoned,
}

/// Driver state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum Turn {
    FirstToMove,
    SecondToMove,
    GameOver(Verdict),
}

/// Things worth telling the players about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A new round starts with the first player to move
    Round {
        #[allow(missing_docs)]
        round: u32,
        #[allow(missing_docs)]
        remaining: u32,
    },

    /// A move was applied
    Moved {
        #[allow(missing_docs)]
        player: Player,
        #[allow(missing_docs)]
        taken: u32,
        #[allow(missing_docs)]
        remaining: u32,
    },

    /// Second seat answered with an invalid move and will be asked again
    Rejected {
        /// Why the answer was refused
        reason: InvalidMove,
        /// Text to show the player
        message: String,
    },

    /// Player to move has cubes left but no move fits
    Stuck {
        #[allow(missing_docs)]
        player: Player,
        #[allow(missing_docs)]
        remaining: u32,
    },

    /// Game has ended
    GameOver(Verdict),
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Event::Round { round, remaining } => write!(
                f,
                "========== ROUND {} ({} cubes left) ============",
                round, remaining
            ),
            Event::Moved {
                player,
                taken,
                remaining,
            } => write!(
                f,
                "{} removes: {} cube(s).\n{} cubes left.",
                player, taken, remaining
            ),
            Event::Rejected { message, .. } => write!(f, "{}", message),
            Event::Stuck { player, remaining } => write!(
                f,
                "{} cannot move with {} cube(s) left.",
                player, remaining
            ),
            Event::GameOver(Verdict::Winner(player)) => write!(f, "{} wins!", player),
            Event::GameOver(Verdict::Abandoned) => write!(f, "Game abandoned."),
        }
    }
}

/// Receives every [`Event`] in order
pub trait Observer {
    #[allow(missing_docs)]
    fn observe(&mut self, event: &Event);
}

impl Observer for Vec<Event> {
    fn observe(&mut self, event: &Event) {
        self.push(event.clone());
    }
}

impl<O> Observer for &mut O
where
    O: Observer + ?Sized,
{
    fn observe(&mut self, event: &Event) {
        (**self).observe(event);
    }
}

/// One game between the search engine and a [`Seat`].
///
/// The driver owns a single [`GameState`] value and replaces it on every move.
pub struct Match<'r, S, O> {
    rules: &'r RuleSet,
    state: GameState,
    turn: Turn,
    prompt: String,
    second: S,
    observer: O,
}

impl<'r, S, O> Match<'r, S, O>
where
    S: Seat,
    O: Observer,
{
    /// Fresh game, first player to move
    pub fn new(rules: &'r RuleSet, second: S, observer: O) -> Self {
        Self {
            rules,
            state: GameState::initial(rules),
            turn: Turn::FirstToMove,
            prompt: human::prompt(rules),
            second,
            observer,
        }
    }

    /// Current position
    #[inline]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// Current driver state
    #[inline]
    pub const fn turn(&self) -> Turn {
        self.turn
    }

    /// Give back the collaborators
    pub fn into_parts(self) -> (S, O) {
        (self.second, self.observer)
    }

    /// Play the game to the end
    pub fn run(&mut self) -> Verdict {
        loop {
            if let Turn::GameOver(verdict) = self.step() {
                return verdict;
            }
        }
    }

    /// Advance by one transition. Finished games stay finished.
    pub fn step(&mut self) -> Turn {
        match self.turn {
            Turn::FirstToMove => self.first_to_move(),
            Turn::SecondToMove => self.second_to_move(),
            Turn::GameOver(_) => {}
        }
        trace!("{} -> {:?}", self.state, self.turn);
        self.turn
    }

    fn first_to_move(&mut self) {
        self.emit(Event::Round {
            round: self.state.round(),
            remaining: self.state.remaining(),
        });

        match search::select_best_move(&self.state, self.rules) {
            Some(taken) => self.play(taken),
            None => self.stuck(),
        }
    }

    fn second_to_move(&mut self) {
        if self.rules.legal_moves(self.state.remaining()).next().is_none() {
            self.stuck();
            return;
        }

        let answer = match self.second.reply(&self.prompt, &self.state, self.rules) {
            Reply::Line(text) => human::parse_move(&text, self.rules, &self.state),
            Reply::Move(taken) => self
                .state
                .check_move(self.rules, taken)
                .map(|()| taken)
                .map_err(InvalidMove::from),
            Reply::Closed => {
                self.finish(Verdict::Abandoned);
                return;
            }
        };

        match answer {
            Ok(taken) => self.play(taken),
            Err(reason) => {
                debug!("Rejected move: {}", reason);
                self.emit(Event::Rejected {
                    reason,
                    message: human::rejection(self.rules),
                });
            }
        }
    }

    /// Apply a move already known to be legal
    fn play(&mut self, taken: u32) {
        let player = self.state.active_player();
        self.state = self.state.child(taken);
        self.emit(Event::Moved {
            player,
            taken,
            remaining: self.state.remaining(),
        });

        match evaluate(&self.state) {
            Score::Undecided => {
                self.turn = match self.state.active_player() {
                    Player::First => Turn::FirstToMove,
                    Player::Second => Turn::SecondToMove,
                };
            }
            _ => self.finish(Verdict::Winner(self.state.active_player().opposite())),
        }
    }

    fn stuck(&mut self) {
        let player = self.state.active_player();
        self.emit(Event::Stuck {
            player,
            remaining: self.state.remaining(),
        });
        self.finish(Verdict::Winner(player.opposite()));
    }

    fn finish(&mut self, verdict: Verdict) {
        debug!("Game over after {}: {:?}", self.state, verdict);
        self.turn = Turn::GameOver(verdict);
        self.emit(Event::GameOver(verdict));
    }

    fn emit(&mut self, event: Event) {
        self.observer.observe(&event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seat::Scripted;

    #[test]
    fn invalid_input_keeps_state() {
        let rules = RuleSet::default();
        let mut events = Vec::new();
        let mut game = Match::new(&rules, Scripted::new(["abc", "99", "1"]), &mut events);

        assert_eq!(game.step(), Turn::SecondToMove);
        let after_first = *game.state();
        assert_eq!(after_first, GameState::new(18, Player::Second, 2));

        assert_eq!(game.step(), Turn::SecondToMove);
        assert_eq!(*game.state(), after_first);
        assert_eq!(game.step(), Turn::SecondToMove);
        assert_eq!(*game.state(), after_first);

        assert_eq!(game.step(), Turn::FirstToMove);
        assert_eq!(*game.state(), GameState::new(17, Player::First, 2));

        let rejections = events
            .iter()
            .filter_map(|e| match e {
                Event::Rejected { reason, .. } => Some(reason.clone()),
                _ => None,
            })
            .collect::<Vec<_>>();
        assert_eq!(
            rejections,
            vec![InvalidMove::NotANumber, InvalidMove::NotInMoveSet(99)]
        );
    }

    #[test]
    fn closed_input_abandons() {
        let rules = RuleSet::default();
        let mut game = Match::new(&rules, Scripted::default(), Vec::new());
        assert_eq!(game.run(), Verdict::Abandoned);
        assert_eq!(game.step(), Turn::GameOver(Verdict::Abandoned));

        let (_, events) = game.into_parts();
        assert_eq!(events.last(), Some(&Event::GameOver(Verdict::Abandoned)));
    }

    #[test]
    fn short_game_transcript() {
        let rules = RuleSet::classic(4, 4).unwrap();
        let mut game = Match::new(&rules, Scripted::default(), Vec::new());
        assert_eq!(game.run(), Verdict::Winner(Player::First));

        let (_, events) = game.into_parts();
        let lines = events.iter().map(ToString::to_string).collect::<Vec<_>>();
        assert_eq!(
            lines,
            vec![
                "========== ROUND 1 (4 cubes left) ============",
                "MAX removes: 4 cube(s).\n0 cubes left.",
                "MAX wins!",
            ]
        );
    }

    #[test]
    fn stuck_second_player_loses() {
        // Taking 3 from 4 leaves a single cube nobody can take
        let rules = RuleSet::new(vec![2, 3], 4).unwrap();
        let mut game = Match::new(&rules, Scripted::default(), Vec::new());
        assert_eq!(game.run(), Verdict::Winner(Player::First));
        let (_, events) = game.into_parts();
        assert_eq!(
            &events[1..],
            &[
                Event::Moved {
                    player: Player::First,
                    taken: 3,
                    remaining: 1
                },
                Event::Stuck {
                    player: Player::Second,
                    remaining: 1
                },
                Event::GameOver(Verdict::Winner(Player::First)),
            ]
        );
    }

    #[test]
    fn stuck_first_player_loses() {
        let rules = RuleSet::new(vec![3], 2).unwrap();
        let mut game = Match::new(&rules, Scripted::default(), Vec::new());
        assert_eq!(game.run(), Verdict::Winner(Player::Second));
        let (_, events) = game.into_parts();
        assert!(events.contains(&Event::Stuck {
            player: Player::First,
            remaining: 2
        }));
    }
}
