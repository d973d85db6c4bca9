//! One client's view of one game room.

use tracing::{debug, info};

use crate::domain::cards_types::{Deck, PlayerId, RoomId};
use crate::domain::event_log::EventLog;
use crate::domain::events::GameEvent;
use crate::domain::phases::{EventContext, GameState, WaitForInitialize};
use crate::domain::snapshot::{DefaultSnapshotDecoder, SnapshotDecoder};
use crate::errors::DomainError;

/// Owns the event log and the current phase of a single room.
///
/// Events must be applied in exactly the order the server emitted them; the
/// reducer is neither commutative nor idempotent.
#[derive(Debug)]
pub struct Session<D = DefaultSnapshotDecoder> {
    log: EventLog,
    state: GameState,
    decoder: D,
    events_applied: usize,
}

impl Session<DefaultSnapshotDecoder> {
    pub fn new(game_room_id: impl Into<RoomId>, my_player_id: impl Into<PlayerId>) -> Self {
        Self::with_decoder(game_room_id, my_player_id, DefaultSnapshotDecoder)
    }
}

impl<D: SnapshotDecoder> Session<D> {
    pub fn with_decoder(
        game_room_id: impl Into<RoomId>,
        my_player_id: impl Into<PlayerId>,
        decoder: D,
    ) -> Self {
        Self {
            log: EventLog::new(),
            state: GameState::WaitForInitialize(WaitForInitialize::new(
                game_room_id,
                my_player_id,
            )),
            decoder,
            events_applied: 0,
        }
    }

    /// Reduces one event into the current state and returns the new state.
    pub fn apply(&mut self, event: &GameEvent) -> &GameState {
        let mut ctx = EventContext {
            log: &mut self.log,
            decoder: &self.decoder,
        };
        let next = self.state.apply_event(event, &mut ctx);

        if next.is_terminal() && !self.log.is_closed() {
            info!(
                events_applied = self.events_applied + 1,
                "game ended, discarding event history"
            );
            self.log.close();
        }

        self.state = next;
        self.events_applied += 1;
        debug!(
            phase = self.state.name(),
            log_len = self.log.len(),
            "session advanced"
        );
        &self.state
    }

    /// Applies every event in order and returns the resulting state.
    pub fn replay<'e, I>(&mut self, events: I) -> &GameState
    where
        I: IntoIterator<Item = &'e GameEvent>,
    {
        for event in events {
            self.apply(event);
        }
        &self.state
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn game_events(&self) -> Vec<String> {
        self.state.game_events(&self.log)
    }

    pub fn deck(&self) -> Result<&Deck, DomainError> {
        self.state.deck()
    }

    /// Count of events handed to `apply`, including ones that were no-ops.
    pub fn events_applied(&self) -> usize {
        self.events_applied
    }
}
