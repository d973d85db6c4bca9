use tracing::{info, warn};

use crate::domain::cards_types::{PlayerId, RoomId};
use crate::domain::events::GameEvent;
use crate::domain::phases::GameState;
use crate::domain::snapshot::SnapshotDecoder;

/// Initial state of a client that attached to a room with no prior state.
///
/// Only a game snapshot moves it forward; it is replaced, never revisited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitForInitialize {
    pub game_room_id: RoomId,
    pub my_player_id: PlayerId,
}

impl WaitForInitialize {
    pub fn new(game_room_id: impl Into<RoomId>, my_player_id: impl Into<PlayerId>) -> Self {
        Self {
            game_room_id: game_room_id.into(),
            my_player_id: my_player_id.into(),
        }
    }

    pub fn apply(&self, event: &GameEvent, decoder: &dyn SnapshotDecoder) -> GameState {
        let GameEvent::GameSnapshot(snapshot) = event else {
            return GameState::WaitForInitialize(self.clone());
        };

        if snapshot.room.game_room_id != self.game_room_id {
            warn!(
                expected = %self.game_room_id,
                got = %snapshot.room.game_room_id,
                "ignoring snapshot for another room"
            );
            return GameState::WaitForInitialize(self.clone());
        }

        match decoder.decode(&self.my_player_id, snapshot) {
            Ok(state) => {
                info!(
                    game_room_id = %self.game_room_id,
                    my_player_id = %self.my_player_id,
                    phase = state.name(),
                    "session initialized from snapshot"
                );
                state
            }
            Err(err) => {
                warn!(game_room_id = %self.game_room_id, error = %err, "rejected game snapshot");
                GameState::WaitForInitialize(self.clone())
            }
        }
    }
}
