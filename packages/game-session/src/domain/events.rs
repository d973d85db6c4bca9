//! Inbound game events, as streamed by the authoritative server.
//!
//! The reducer only consumes these; it never emits them.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use crate::domain::cards_types::{Card, CardId, PlayerId};
use crate::domain::scoring::{RoundScore, ScoreBoardPayload};
use crate::domain::snapshot::GameSnapshot;

/// A player dealt into a new round.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundPlayer {
    pub player_id: PlayerId,
    pub card: u32,
}

/// A player entering trick play with a declared bid.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct BidPlayer {
    pub player_id: PlayerId,
    pub bid: u32,
    pub card: u32,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundStarted {
    pub round: u32,
    /// Cards left in the draw deck after dealing.
    pub deck: u32,
    pub joined_players: Vec<RoundPlayer>,
    /// The local player's dealt card ids.
    pub card_ids: Vec<CardId>,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct TrickStarted {
    pub bid_players: Vec<BidPlayer>,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameFinished {
    pub game_winner_id: PlayerId,
    pub score_board: ScoreBoardPayload,
}

#[allow(clippy::large_enum_variant)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    GameSnapshot(Box<GameSnapshot>),

    PlayerJoined {
        player_id: PlayerId,
    },

    PlayerLeft {
        player_id: PlayerId,
    },

    RoundStarted(RoundStarted),

    BidDeclared {
        player_id: PlayerId,
        bid: u32,
    },

    TrickStarted(TrickStarted),

    TrickPlayed {
        player_id: PlayerId,
        played_card: Card,
    },

    LeadPlayerChangeable {
        player_id: PlayerId,
    },

    LeadPlayerChanged {
        new_lead_player_id: PlayerId,
    },

    HandChangeAvailable {
        player_id: PlayerId,
        draw_card_ids: Vec<CardId>,
    },

    PlayerHandChanged {
        player_id: PlayerId,
        return_card_ids: Vec<CardId>,
    },

    FuturePredicateAvailable {
        player_id: PlayerId,
        deck_card_ids: Vec<CardId>,
    },

    FuturePredicated {
        player_id: PlayerId,
    },

    BidDeclareChangeAvailable {
        player_id: PlayerId,
    },

    BidDeclareChanged {
        changed_player_id: PlayerId,
        changed_bid: u32,
    },

    PlayerWon {
        winner_id: PlayerId,
        trick_bonus: i32,
    },

    AllFled {
        winner_id: PlayerId,
    },

    SpecialCreatureAppeared {
        must_have_won: PlayerId,
    },

    RoundFinished {
        round_score: RoundScore,
    },

    GameFinished(GameFinished),

    GameEnded,
}

/// Fieldless tag of a [`GameEvent`], convenient for logging and matching.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum EventKind {
    GameSnapshot,
    PlayerJoined,
    PlayerLeft,
    RoundStarted,
    BidDeclared,
    TrickStarted,
    TrickPlayed,
    LeadPlayerChangeable,
    LeadPlayerChanged,
    HandChangeAvailable,
    PlayerHandChanged,
    FuturePredicateAvailable,
    FuturePredicated,
    BidDeclareChangeAvailable,
    BidDeclareChanged,
    PlayerWon,
    AllFled,
    SpecialCreatureAppeared,
    RoundFinished,
    GameFinished,
    GameEnded,
}

impl EventKind {
    pub const ALL: [EventKind; 21] = [
        EventKind::GameSnapshot,
        EventKind::PlayerJoined,
        EventKind::PlayerLeft,
        EventKind::RoundStarted,
        EventKind::BidDeclared,
        EventKind::TrickStarted,
        EventKind::TrickPlayed,
        EventKind::LeadPlayerChangeable,
        EventKind::LeadPlayerChanged,
        EventKind::HandChangeAvailable,
        EventKind::PlayerHandChanged,
        EventKind::FuturePredicateAvailable,
        EventKind::FuturePredicated,
        EventKind::BidDeclareChangeAvailable,
        EventKind::BidDeclareChanged,
        EventKind::PlayerWon,
        EventKind::AllFled,
        EventKind::SpecialCreatureAppeared,
        EventKind::RoundFinished,
        EventKind::GameFinished,
        EventKind::GameEnded,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::GameSnapshot => "game_snapshot",
            EventKind::PlayerJoined => "player_joined",
            EventKind::PlayerLeft => "player_left",
            EventKind::RoundStarted => "round_started",
            EventKind::BidDeclared => "bid_declared",
            EventKind::TrickStarted => "trick_started",
            EventKind::TrickPlayed => "trick_played",
            EventKind::LeadPlayerChangeable => "lead_player_changeable",
            EventKind::LeadPlayerChanged => "lead_player_changed",
            EventKind::HandChangeAvailable => "hand_change_available",
            EventKind::PlayerHandChanged => "player_hand_changed",
            EventKind::FuturePredicateAvailable => "future_predicate_available",
            EventKind::FuturePredicated => "future_predicated",
            EventKind::BidDeclareChangeAvailable => "bid_declare_change_available",
            EventKind::BidDeclareChanged => "bid_declare_changed",
            EventKind::PlayerWon => "player_won",
            EventKind::AllFled => "all_fled",
            EventKind::SpecialCreatureAppeared => "special_creature_appeared",
            EventKind::RoundFinished => "round_finished",
            EventKind::GameFinished => "game_finished",
            EventKind::GameEnded => "game_ended",
        }
    }
}

impl GameEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            GameEvent::GameSnapshot(_) => EventKind::GameSnapshot,
            GameEvent::PlayerJoined { .. } => EventKind::PlayerJoined,
            GameEvent::PlayerLeft { .. } => EventKind::PlayerLeft,
            GameEvent::RoundStarted(_) => EventKind::RoundStarted,
            GameEvent::BidDeclared { .. } => EventKind::BidDeclared,
            GameEvent::TrickStarted(_) => EventKind::TrickStarted,
            GameEvent::TrickPlayed { .. } => EventKind::TrickPlayed,
            GameEvent::LeadPlayerChangeable { .. } => EventKind::LeadPlayerChangeable,
            GameEvent::LeadPlayerChanged { .. } => EventKind::LeadPlayerChanged,
            GameEvent::HandChangeAvailable { .. } => EventKind::HandChangeAvailable,
            GameEvent::PlayerHandChanged { .. } => EventKind::PlayerHandChanged,
            GameEvent::FuturePredicateAvailable { .. } => EventKind::FuturePredicateAvailable,
            GameEvent::FuturePredicated { .. } => EventKind::FuturePredicated,
            GameEvent::BidDeclareChangeAvailable { .. } => EventKind::BidDeclareChangeAvailable,
            GameEvent::BidDeclareChanged { .. } => EventKind::BidDeclareChanged,
            GameEvent::PlayerWon { .. } => EventKind::PlayerWon,
            GameEvent::AllFled { .. } => EventKind::AllFled,
            GameEvent::SpecialCreatureAppeared { .. } => EventKind::SpecialCreatureAppeared,
            GameEvent::RoundFinished { .. } => EventKind::RoundFinished,
            GameEvent::GameFinished(_) => EventKind::GameFinished,
            GameEvent::GameEnded => EventKind::GameEnded,
        }
    }

    /// Log line for this event; same as its `Display` output.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

/// Human-readable rendering, as stored in the event log.
impl Display for GameEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            GameEvent::GameSnapshot(snapshot) => {
                write!(f, "joined room {}", snapshot.room.game_room_id)
            }
            GameEvent::PlayerJoined { player_id } => write!(f, "{player_id} joined the room"),
            GameEvent::PlayerLeft { player_id } => write!(f, "{player_id} left the room"),
            GameEvent::RoundStarted(rs) => write!(f, "round {} started", rs.round),
            GameEvent::BidDeclared { player_id, bid } => {
                write!(f, "{player_id} declared a bid of {bid}")
            }
            GameEvent::TrickStarted(_) => write!(f, "all bids are in, trick play started"),
            GameEvent::TrickPlayed {
                player_id,
                played_card,
            } => write!(f, "{player_id} played {}", played_card.id),
            GameEvent::LeadPlayerChangeable { player_id } => {
                write!(f, "{player_id} may choose who leads the next trick")
            }
            GameEvent::LeadPlayerChanged { new_lead_player_id } => {
                write!(f, "{new_lead_player_id} leads the next trick")
            }
            GameEvent::HandChangeAvailable {
                player_id,
                draw_card_ids,
            } => write!(
                f,
                "{player_id} drew {} cards and may exchange them",
                draw_card_ids.len()
            ),
            GameEvent::PlayerHandChanged {
                player_id,
                return_card_ids,
            } => write!(
                f,
                "{player_id} returned {} cards to the deck",
                return_card_ids.len()
            ),
            GameEvent::FuturePredicateAvailable { player_id, .. } => {
                write!(f, "{player_id} may look at the top of the deck")
            }
            GameEvent::FuturePredicated { player_id } => {
                write!(f, "{player_id} looked at the top of the deck")
            }
            GameEvent::BidDeclareChangeAvailable { player_id } => {
                write!(f, "{player_id} may change their bid")
            }
            GameEvent::BidDeclareChanged {
                changed_player_id,
                changed_bid,
            } => write!(f, "{changed_player_id} changed their bid to {changed_bid}"),
            GameEvent::PlayerWon {
                winner_id,
                trick_bonus,
            } => {
                if *trick_bonus == 0 {
                    write!(f, "{winner_id} won the trick")
                } else {
                    write!(f, "{winner_id} won the trick with a bonus of {trick_bonus}")
                }
            }
            GameEvent::AllFled { winner_id } => {
                write!(f, "every player escaped, {winner_id} leads next")
            }
            GameEvent::SpecialCreatureAppeared { must_have_won } => {
                write!(f, "the trick was swallowed, {must_have_won} leads next")
            }
            GameEvent::RoundFinished { .. } => write!(f, "round finished"),
            GameEvent::GameFinished(gf) => write!(f, "game finished, {} wins", gf.game_winner_id),
            GameEvent::GameEnded => write!(f, "game ended"),
        }
    }
}
