//! Authoritative session snapshots and the decoder that turns them into a phase.
//!
//! A client attaching to a room receives one snapshot; everything after that
//! is incremental events.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::cards_types::{deck_from_cards, Card, CardId, PlayerId, RoomId};
use crate::domain::phases::{
    BiddingPhase, FinishedPhase, GameState, RoomContext, StartPhase, TrickPhase,
};
use crate::domain::players::{contains_player, BiddingPlayer, FieldEntry, Seated, TrickingPlayer};
use crate::domain::rules::GameRule;
use crate::domain::scoring::{ScoreBoard, ScoreBoardPayload};
use crate::errors::DomainError;

/// Room header present in all snapshots.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSnapshot {
    pub game_room_id: RoomId,
    pub room_owner_id: PlayerId,
    pub rule: GameRule,
    pub deck: Vec<Card>,
}

/// Top-level snapshot combining room header and phase-specific data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub room: RoomSnapshot,
    pub phase: PhaseSnapshot,
}

/// Adjacently tagged union of phase-specific snapshots.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", content = "data", rename_all = "snake_case")]
pub enum PhaseSnapshot {
    Start(StartSnapshot),
    Bidding(BiddingSnapshot),
    Trick(TrickSnapshot),
    Finished(FinishedSnapshot),
    Ended,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartSnapshot {
    pub player_ids: Vec<PlayerId>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BiddingSnapshot {
    pub round: u32,
    pub dealer_id: PlayerId,
    pub deck: u32,
    pub players: Vec<BiddingPlayer>,
    pub my_card_ids: Vec<CardId>,
    #[serde(default)]
    pub my_bid: Option<u32>,
    #[serde(default)]
    pub score_board: ScoreBoardPayload,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrickSnapshot {
    pub round: u32,
    pub dealer_id: PlayerId,
    pub next_player_id: PlayerId,
    pub players: Vec<TrickingPlayer>,
    pub my_card_ids: Vec<CardId>,
    pub deck: u32,
    #[serde(default)]
    pub field: Vec<FieldEntry>,
    pub trick: u32,
    #[serde(default)]
    pub score_board: ScoreBoardPayload,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinishedSnapshot {
    pub winner_id: PlayerId,
    pub score_board: ScoreBoardPayload,
}

/// Rebuilds the current phase from an authoritative snapshot.
pub trait SnapshotDecoder {
    fn decode(&self, my_player_id: &str, snapshot: &GameSnapshot) -> Result<GameState, DomainError>;
}

/// Decoder for the wire snapshot format above.
///
/// Rejects snapshots whose dealer or next player is not seated, since every
/// later rotation would be undefined.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSnapshotDecoder;

impl SnapshotDecoder for DefaultSnapshotDecoder {
    fn decode(&self, my_player_id: &str, snapshot: &GameSnapshot) -> Result<GameState, DomainError> {
        let room = room_context(my_player_id, &snapshot.room);

        let state = match &snapshot.phase {
            PhaseSnapshot::Start(s) => {
                GameState::Start(StartPhase::new(room, s.player_ids.clone()))
            }

            PhaseSnapshot::Bidding(s) => {
                require_seated(&s.players, &s.dealer_id, "bidding dealer")?;
                GameState::Bidding(BiddingPhase {
                    room,
                    dealer_id: s.dealer_id.clone(),
                    deck_remaining: s.deck,
                    players: s.players.clone(),
                    my_card_ids: s.my_card_ids.clone(),
                    my_bid: s.my_bid,
                    round: s.round,
                    score_board: ScoreBoard::from(s.score_board.clone()),
                })
            }

            PhaseSnapshot::Trick(s) => {
                require_seated(&s.players, &s.dealer_id, "trick dealer")?;
                require_seated(&s.players, &s.next_player_id, "next player")?;
                GameState::Trick(TrickPhase {
                    room,
                    round: s.round,
                    dealer_id: s.dealer_id.clone(),
                    next_player_id: s.next_player_id.clone(),
                    players: s.players.clone(),
                    my_card_ids: s.my_card_ids.clone(),
                    deck_remaining: s.deck,
                    field: s.field.clone(),
                    trick: s.trick,
                    score_board: ScoreBoard::from(s.score_board.clone()),
                })
            }

            PhaseSnapshot::Finished(s) => GameState::Finished(FinishedPhase::new(
                room,
                s.winner_id.clone(),
                ScoreBoard::from(s.score_board.clone()),
            )),

            PhaseSnapshot::Ended => GameState::GameEnded,
        };

        Ok(state)
    }
}

fn room_context(my_player_id: &str, room: &RoomSnapshot) -> RoomContext {
    RoomContext {
        deck: Arc::new(deck_from_cards(room.deck.iter().cloned())),
        game_room_id: room.game_room_id.clone(),
        my_player_id: my_player_id.to_owned(),
        rule: room.rule,
        room_owner_id: room.room_owner_id.clone(),
    }
}

fn require_seated<T: Seated>(
    players: &[T],
    player_id: &str,
    ctx: &'static str,
) -> Result<(), DomainError> {
    if players.is_empty() {
        return Err(DomainError::snapshot(format!("empty roster ({ctx})")));
    }
    if !contains_player(players, player_id) {
        return Err(DomainError::snapshot(format!(
            "{ctx} {player_id} is not in the roster"
        )));
    }
    Ok(())
}
