//! Shared builders for domain unit tests.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::domain::cards_types::{deck_from_cards, Card, Deck, Suit};
use crate::domain::event_log::EventLog;
use crate::domain::events::{BidPlayer, GameEvent, RoundPlayer, RoundStarted, TrickStarted};
use crate::domain::phases::{BiddingPhase, EventContext, GameState, RoomContext, TrickPhase};
use crate::domain::players::{BiddingPlayer, TrickingPlayer};
use crate::domain::rules::GameRule;
use crate::domain::scoring::{RoundScore, Score, ScoreBoard};
use crate::domain::snapshot::{
    DefaultSnapshotDecoder, GameSnapshot, PhaseSnapshot, RoomSnapshot, StartSnapshot,
};

pub const ROOM_ID: &str = "room-1";
pub const OWNER: &str = "P1";

pub fn card(id: &str, suit: Suit, rank: u8) -> Card {
    Card::new(id, suit, rank)
}

pub fn sample_cards() -> Vec<Card> {
    vec![
        card("g1", Suit::Green, 1),
        card("g9", Suit::Green, 9),
        card("y2", Suit::Yellow, 2),
        card("y12", Suit::Yellow, 12),
        card("p5", Suit::Purple, 5),
        card("b14", Suit::Black, 14),
        card("esc1", Suit::Escape, 0),
        card("pir1", Suit::Pirate, 0),
        card("mer1", Suit::Mermaid, 0),
        card("sk", Suit::SkullKing, 0),
        card("krk", Suit::Kraken, 0),
    ]
}

pub fn sample_deck() -> Deck {
    deck_from_cards(sample_cards())
}

pub fn room(my_player_id: &str) -> RoomContext {
    RoomContext {
        deck: Arc::new(sample_deck()),
        game_room_id: ROOM_ID.to_string(),
        my_player_id: my_player_id.to_string(),
        rule: GameRule::default(),
        room_owner_id: OWNER.to_string(),
    }
}

pub fn ids(players: &[&str]) -> Vec<String> {
    players.iter().map(|p| p.to_string()).collect()
}

pub fn round_started(round: u32, players: &[&str], card_ids: &[&str]) -> RoundStarted {
    RoundStarted {
        round,
        deck: 40,
        joined_players: players
            .iter()
            .map(|p| RoundPlayer {
                player_id: p.to_string(),
                card: round,
            })
            .collect(),
        card_ids: ids(card_ids),
    }
}

pub fn trick_started(players: &[&str], bid: u32, card: u32) -> TrickStarted {
    TrickStarted {
        bid_players: players
            .iter()
            .map(|p| BidPlayer {
                player_id: p.to_string(),
                bid,
                card,
            })
            .collect(),
    }
}

pub fn bidding_phase(players: &[&str], me: &str) -> BiddingPhase {
    BiddingPhase {
        room: room(me),
        dealer_id: players[0].to_string(),
        deck_remaining: 40,
        players: players
            .iter()
            .map(|p| BiddingPlayer {
                player_id: p.to_string(),
                is_bid: false,
                card: 3,
            })
            .collect(),
        my_card_ids: ids(&["g1", "y2", "b14"]),
        my_bid: None,
        round: 3,
        score_board: ScoreBoard::empty(),
    }
}

/// Trick phase led by the first player, three cards each, first trick.
pub fn trick_phase(players: &[&str], me: &str) -> TrickPhase {
    TrickPhase {
        room: room(me),
        round: 3,
        dealer_id: players[0].to_string(),
        next_player_id: players[0].to_string(),
        players: players
            .iter()
            .map(|p| TrickingPlayer::new(*p, 1, 3))
            .collect(),
        my_card_ids: ids(&["g1", "y2", "b14"]),
        deck_remaining: 40,
        field: Vec::new(),
        trick: 1,
        score_board: ScoreBoard::empty(),
    }
}

pub fn round_score(entries: &[(&str, i32, i32)]) -> RoundScore {
    entries
        .iter()
        .map(|(p, score, bonus)| {
            (
                p.to_string(),
                Score {
                    score: *score,
                    bonus: *bonus,
                },
            )
        })
        .collect::<BTreeMap<_, _>>()
}

pub fn played(player_id: &str, card_id: &str) -> GameEvent {
    let played_card = sample_deck()
        .remove(card_id)
        .unwrap_or_else(|| card(card_id, Suit::Green, 1));
    GameEvent::TrickPlayed {
        player_id: player_id.to_string(),
        played_card,
    }
}

pub fn start_snapshot(player_ids: &[&str]) -> GameSnapshot {
    GameSnapshot {
        room: RoomSnapshot {
            game_room_id: ROOM_ID.to_string(),
            room_owner_id: OWNER.to_string(),
            rule: GameRule::default(),
            deck: sample_cards(),
        },
        phase: PhaseSnapshot::Start(StartSnapshot {
            player_ids: ids(player_ids),
        }),
    }
}

/// Applies one event with a throwaway decoder and the given log.
pub fn step(state: &GameState, log: &mut EventLog, event: &GameEvent) -> GameState {
    let mut ctx = EventContext {
        log,
        decoder: &DefaultSnapshotDecoder,
    };
    state.apply_event(event, &mut ctx)
}

/// Applies events in order, returning the final state and the log.
pub fn run(state: GameState, events: &[GameEvent]) -> (GameState, EventLog) {
    let mut log = EventLog::new();
    let mut current = state;
    for event in events {
        current = step(&current, &mut log, event);
    }
    (current, log)
}
