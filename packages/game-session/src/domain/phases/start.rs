use crate::domain::cards_types::PlayerId;
use crate::domain::events::GameEvent;
use crate::domain::phases::{BiddingPhase, GameState, RoomContext};
use crate::domain::rules::MIN_PLAYERS_TO_START;
use crate::domain::scoring::ScoreBoard;

/// Lobby: players join and leave until the owner starts the first round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartPhase {
    pub room: RoomContext,
    pub player_ids: Vec<PlayerId>,
}

impl StartPhase {
    pub fn new(room: RoomContext, player_ids: Vec<PlayerId>) -> Self {
        Self { room, player_ids }
    }

    pub fn apply(&self, event: &GameEvent) -> GameState {
        match event {
            GameEvent::PlayerJoined { player_id } => {
                if self.player_ids.contains(player_id) {
                    return GameState::Start(self.clone());
                }
                let mut player_ids = self.player_ids.clone();
                player_ids.push(player_id.clone());
                GameState::Start(Self::new(self.room.clone(), player_ids))
            }

            GameEvent::PlayerLeft { player_id } => {
                let player_ids = self
                    .player_ids
                    .iter()
                    .filter(|id| *id != player_id)
                    .cloned()
                    .collect();
                GameState::Start(Self::new(self.room.clone(), player_ids))
            }

            // The owner deals first and owns the round.
            GameEvent::RoundStarted(round_started) => GameState::Bidding(BiddingPhase::for_round(
                self.room.clone(),
                self.room.room_owner_id.clone(),
                ScoreBoard::empty(),
                round_started,
            )),

            _ => GameState::Start(self.clone()),
        }
    }

    pub fn is_me_room_owner(&self) -> bool {
        self.room.is_me(&self.room.room_owner_id)
    }

    pub fn can_start_game(&self) -> bool {
        self.player_ids.len() >= MIN_PLAYERS_TO_START
    }
}
