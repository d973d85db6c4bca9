//! Domain layer: pure game-session types and the phase state machine.

pub mod cards_types;
pub mod event_log;
pub mod events;
pub mod phases;
pub mod players;
pub mod rules;
pub mod scoring;
pub mod snapshot;

#[cfg(test)]
mod fixtures;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_bidding;
#[cfg(test)]
mod tests_props_tricks;
#[cfg(test)]
mod tests_scoring;
#[cfg(test)]
mod tests_start;

// Re-exports for ergonomics
pub use cards_types::{deck_from_cards, Card, CardId, Deck, PlayerId, RoomId, Suit};
pub use event_log::EventLog;
pub use events::{EventKind, GameEvent};
pub use phases::{EventContext, GameState, RoomContext};
pub use rules::{DeckType, GameRule};
pub use scoring::{RoundScore, Score, ScoreBoard, ScoreBoardPayload};
pub use snapshot::{DefaultSnapshotDecoder, GameSnapshot, SnapshotDecoder};
