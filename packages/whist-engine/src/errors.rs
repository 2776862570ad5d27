//! Error types shared across the engine.
//!
//! Every variant is an immediate, non-recoverable fault: the orchestrator
//! never retries or continues past one, since each indicates a broken
//! invariant (for example dealing more cards than the deck holds). Legality
//! of bids and card choices is the concern of the [`crate::players::Player`]
//! implementation, not of these types.

use thiserror::Error;

use crate::domain::seats::Seat;

/// Faults raised by the pure rules layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("invalid player count: {0} (expected 3..=6)")]
    InvalidPlayerCount(usize),
    #[error("invalid card token: {0:?}")]
    ParseCard(String),
    #[error("cannot draw from an empty deck")]
    EmptyDeck,
    #[error("cannot resolve a trick with no plays")]
    EmptyTrick,
    #[error("round {round} out of range for {num_players} players (valid 1..={total})")]
    RoundOutOfRange {
        round: u8,
        num_players: usize,
        total: u8,
    },
}

/// Faults raised by a `Player` implementation while deciding a bid or play.
#[derive(Debug, Error)]
pub enum PlayerError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("player internal error: {0}")]
    Internal(String),
}

/// Faults surfaced by the orchestrator while running a game.
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("player at seat {seat} failed: {source}")]
    Player {
        seat: Seat,
        #[source]
        source: PlayerError,
    },
}
