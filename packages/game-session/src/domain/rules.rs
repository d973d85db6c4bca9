use serde::{Deserialize, Serialize};

/// A lobby needs at least this many joined players before a round may start.
pub const MIN_PLAYERS_TO_START: usize = 2;

/// First trick of every round.
pub const FIRST_TRICK: u32 = 1;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeckType {
    Standard,
    Expansion,
}

/// Static room configuration, fixed at room creation.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct GameRule {
    pub room_size: u32,
    pub n_of_rounds: u32,
    pub deck_type: DeckType,
}

impl Default for GameRule {
    fn default() -> Self {
        Self {
            room_size: 4,
            n_of_rounds: 10,
            deck_type: DeckType::Standard,
        }
    }
}
