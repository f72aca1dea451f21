//! Cube removal game with an exhaustive minimax opponent.
//!
//! Two players take turns removing cubes from a shared pile. Every turn a player removes
//! a number of cubes from a small fixed [move set](crate::rules::RuleSet), by default
//! `{1, 2, 4}`. The player who faces an empty pile has lost.
//!
//! The first player is played by the [search engine](crate::search), which walks the whole
//! game tree and therefore plays perfectly. The second seat is filled by anything
//! implementing [`Seat`](crate::seat::Seat): a human at the console, a scripted test
//! player or another bot. [`Match`](crate::driver::Match) drives the turns.

#![warn(missing_docs)]

pub mod analysis;
pub mod driver;
pub mod grundy;
pub mod human;
pub mod player;
pub mod rules;
pub mod score;
pub mod search;
pub mod seat;
pub mod state;

mod display;
