use std::env;

use game_session::{PlayerId, RoomId};

use crate::error::ReplayError;

pub const ROOM_ID_VAR: &str = "SESSION_ROOM_ID";
pub const PLAYER_ID_VAR: &str = "SESSION_PLAYER_ID";

/// Identity of the replaying client. Command-line values win over the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayConfig {
    pub room_id: RoomId,
    pub player_id: PlayerId,
}

impl ReplayConfig {
    pub fn resolve(room: Option<String>, player: Option<String>) -> Result<Self, ReplayError> {
        let room_id = match room {
            Some(room) => room,
            None => must_var(ROOM_ID_VAR)?,
        };
        let player_id = match player {
            Some(player) => player,
            None => must_var(PLAYER_ID_VAR)?,
        };

        if room_id.trim().is_empty() {
            return Err(ReplayError::config("room id must not be empty"));
        }
        if player_id.trim().is_empty() {
            return Err(ReplayError::config("player id must not be empty"));
        }

        Ok(Self { room_id, player_id })
    }
}

/// Get required environment variable or return error
fn must_var(name: &str) -> Result<String, ReplayError> {
    env::var(name)
        .map_err(|_| ReplayError::config(format!("Required environment variable '{name}' is not set")))
}
