//! Domain layer: pure game logic types and helpers.

pub mod cards;
pub mod deck;
pub mod rules;
pub mod scoreboard;
pub mod scoring;
pub mod seats;
pub mod tricks;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod tests_props_rules;
#[cfg(test)]
mod tests_rules;
#[cfg(test)]
mod tests_scoreboard;
#[cfg(test)]
mod tests_scoring;
#[cfg(test)]
mod tests_tricks;

// Re-exports for ergonomics
pub use cards::{card_beats, hand_has_suit, Card, Rank, Suit};
pub use deck::Deck;
pub use rules::{hand_size, legal_bids, total_rounds, MAX_HAND_SIZE};
pub use scoreboard::{RoundDetail, Scoreboard};
pub use scoring::round_score;
pub use seats::Seat;
pub use tricks::{legal_plays, resolve_trick};
