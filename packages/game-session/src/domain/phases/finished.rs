use crate::domain::cards_types::PlayerId;
use crate::domain::events::GameEvent;
use crate::domain::phases::{BiddingPhase, GameState, RoomContext};
use crate::domain::scoring::ScoreBoard;

/// A game has been decided; the room may end or start another game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinishedPhase {
    pub room: RoomContext,
    pub winner_id: PlayerId,
    pub score_board: ScoreBoard,
}

impl FinishedPhase {
    pub fn new(room: RoomContext, winner_id: PlayerId, score_board: ScoreBoard) -> Self {
        Self {
            room,
            winner_id,
            score_board,
        }
    }

    pub fn apply(&self, event: &GameEvent) -> GameState {
        match event {
            GameEvent::GameEnded => GameState::GameEnded,

            // A rematch in the same room: the previous winner deals, scores reset.
            GameEvent::RoundStarted(round_started) => GameState::Bidding(BiddingPhase::for_round(
                self.room.clone(),
                self.winner_id.clone(),
                ScoreBoard::empty(),
                round_started,
            )),

            _ => GameState::Finished(self.clone()),
        }
    }

    pub fn is_me_winner(&self) -> bool {
        self.room.is_me(&self.winner_id)
    }
}
