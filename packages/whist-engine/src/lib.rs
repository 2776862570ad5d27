//! Rules engine for the trick-taking card game Whist, for 3 to 6 players.
//!
//! The [`domain`] module holds the pure rules: hand-size progression across
//! the round schedule, trick resolution with trump and lead-suit precedence,
//! bid/play legality helpers, scoring, and the deck. [`game::Game`] sequences
//! full rounds over a set of [`players::Player`] implementations and commits
//! scores to the [`domain::Scoreboard`].

pub mod domain;
pub mod errors;
pub mod game;
pub mod players;

pub use domain::{Card, Rank, Scoreboard, Suit};
pub use errors::{DomainError, GameError, PlayerError};
pub use game::Game;
pub use players::{Player, RandomPlayer, ScriptedPlayer};
