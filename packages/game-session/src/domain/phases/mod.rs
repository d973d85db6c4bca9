//! The game-session state machine.
//!
//! Exactly one [`GameState`] is current at a time. Applying an event never
//! mutates the state it is applied to; every transition yields a fresh value,
//! so earlier states stay valid for history and debugging.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::cards_types::{Deck, PlayerId, RoomId};
use crate::domain::event_log::EventLog;
use crate::domain::events::GameEvent;
use crate::domain::rules::GameRule;
use crate::domain::snapshot::SnapshotDecoder;
use crate::errors::DomainError;

pub mod bidding;
pub mod finished;
pub mod side;
pub mod start;
pub mod trick;
pub mod wait;

pub use bidding::BiddingPhase;
pub use finished::FinishedPhase;
pub use side::{
    exchange_hand, BidDeclareChangeWaitingPhase, FuturePredicateWaitingPhase,
    HandChangeWaitingPhase, NextTrickLeadPlayerChangingPhase, SidePhase,
};
pub use start::StartPhase;
pub use trick::TrickPhase;
pub use wait::WaitForInitialize;

static EMPTY_DECK: Deck = Deck::new();

/// Room facts shared by every phase after initialisation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomContext {
    pub deck: Arc<Deck>,
    pub game_room_id: RoomId,
    pub my_player_id: PlayerId,
    pub rule: GameRule,
    pub room_owner_id: PlayerId,
}

impl RoomContext {
    /// True when `player_id` is the local player.
    #[inline]
    pub fn is_me(&self, player_id: &str) -> bool {
        self.my_player_id == player_id
    }
}

/// Capabilities lent to a single transition by the owning session.
pub struct EventContext<'a> {
    pub log: &'a mut EventLog,
    pub decoder: &'a dyn SnapshotDecoder,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameState {
    WaitForInitialize(WaitForInitialize),
    Start(StartPhase),
    Bidding(BiddingPhase),
    Trick(TrickPhase),
    LeadPlayerChanging(NextTrickLeadPlayerChangingPhase),
    HandChangeWaiting(HandChangeWaitingPhase),
    FuturePredicateWaiting(FuturePredicateWaitingPhase),
    BidDeclareChangeWaiting(BidDeclareChangeWaitingPhase),
    Finished(FinishedPhase),
    /// Terminal. Accepts no events and exposes no history.
    GameEnded,
}

impl GameState {
    pub fn name(&self) -> &'static str {
        match self {
            GameState::WaitForInitialize(_) => "wait_for_initialize",
            GameState::Start(_) => "start",
            GameState::Bidding(_) => "bidding",
            GameState::Trick(_) => "trick",
            GameState::LeadPlayerChanging(_) => "lead_player_changing",
            GameState::HandChangeWaiting(_) => "hand_change_waiting",
            GameState::FuturePredicateWaiting(_) => "future_predicate_waiting",
            GameState::BidDeclareChangeWaiting(_) => "bid_declare_change_waiting",
            GameState::Finished(_) => "finished",
            GameState::GameEnded => "game_ended",
        }
    }

    /// The bootstrap and terminal phases keep nothing in the log.
    pub fn records_events(&self) -> bool {
        !matches!(self, GameState::WaitForInitialize(_) | GameState::GameEnded)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, GameState::GameEnded)
    }

    /// Logs `event` (where this phase records events) and returns the next state.
    ///
    /// Total: an event this phase does not recognise yields an equal state.
    pub fn apply_event(&self, event: &GameEvent, ctx: &mut EventContext<'_>) -> GameState {
        if self.records_events() {
            ctx.log.append(event);
        }

        let next = match self {
            GameState::WaitForInitialize(p) => p.apply(event, ctx.decoder),
            GameState::Start(p) => p.apply(event),
            GameState::Bidding(p) => p.apply(event),
            GameState::Trick(p) => p.apply(event),
            GameState::LeadPlayerChanging(p) => p.apply(event),
            GameState::HandChangeWaiting(p) => p.apply(event),
            GameState::FuturePredicateWaiting(p) => p.apply(event),
            GameState::BidDeclareChangeWaiting(p) => p.apply(event),
            GameState::Finished(p) => p.apply(event),
            GameState::GameEnded => GameState::GameEnded,
        };

        if next.name() != self.name() {
            info!(
                from = self.name(),
                to = next.name(),
                event = event.kind().as_str(),
                "phase transition"
            );
        } else {
            debug!(
                phase = self.name(),
                event = event.kind().as_str(),
                "event applied"
            );
        }
        next
    }

    /// Rendered history visible from this phase.
    pub fn game_events(&self, log: &EventLog) -> Vec<String> {
        if self.records_events() {
            log.entries()
        } else {
            Vec::new()
        }
    }

    /// Full card catalogue of the room.
    ///
    /// Fails before a snapshot has initialised the session. The terminal
    /// phase has released its room and answers with an empty deck.
    pub fn deck(&self) -> Result<&Deck, DomainError> {
        match self {
            GameState::WaitForInitialize(_) => Err(DomainError::uninitialized(
                "deck is unavailable until a game snapshot arrives",
            )),
            GameState::GameEnded => Ok(&EMPTY_DECK),
            other => other
                .room()
                .map(|room| room.deck.as_ref())
                .ok_or_else(|| DomainError::uninitialized("phase carries no room")),
        }
    }

    pub fn room(&self) -> Option<&RoomContext> {
        match self {
            GameState::WaitForInitialize(_) | GameState::GameEnded => None,
            GameState::Start(p) => Some(&p.room),
            GameState::Bidding(p) => Some(&p.room),
            GameState::Trick(p) => Some(&p.room),
            GameState::LeadPlayerChanging(p) => Some(&p.trick.room),
            GameState::HandChangeWaiting(p) => Some(&p.trick.room),
            GameState::FuturePredicateWaiting(p) => Some(&p.trick.room),
            GameState::BidDeclareChangeWaiting(p) => Some(&p.trick.room),
            GameState::Finished(p) => Some(&p.room),
        }
    }

    /// The trick in progress, including one interrupted by a side phase.
    pub fn current_trick(&self) -> Option<&TrickPhase> {
        match self {
            GameState::Trick(p) => Some(p),
            GameState::LeadPlayerChanging(p) => Some(p.interrupted()),
            GameState::HandChangeWaiting(p) => Some(p.interrupted()),
            GameState::FuturePredicateWaiting(p) => Some(p.interrupted()),
            GameState::BidDeclareChangeWaiting(p) => Some(p.interrupted()),
            _ => None,
        }
    }

    pub fn as_start(&self) -> Option<&StartPhase> {
        match self {
            GameState::Start(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_bidding(&self) -> Option<&BiddingPhase> {
        match self {
            GameState::Bidding(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_trick(&self) -> Option<&TrickPhase> {
        match self {
            GameState::Trick(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_finished(&self) -> Option<&FinishedPhase> {
        match self {
            GameState::Finished(p) => Some(p),
            _ => None,
        }
    }
}
