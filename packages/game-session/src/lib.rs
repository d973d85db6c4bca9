#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Replayable reducer for a trick-taking card game session.
//!
//! A server streams [`GameEvent`]s to every participant; each participant
//! feeds them, in order, through a [`Session`] and derives the same view of
//! bidding, trick play and scoring.

pub mod domain;
pub mod errors;
pub mod session;

// Re-exports for public API
pub use domain::{
    Card, CardId, Deck, DeckType, EventKind, EventLog, GameEvent, GameRule, GameSnapshot,
    GameState, PlayerId, RoomId, Score, ScoreBoard, Suit,
};
pub use errors::DomainError;
pub use session::Session;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    session_test_support::logging::init();
}
