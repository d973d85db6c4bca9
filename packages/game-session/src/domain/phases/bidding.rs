use tracing::warn;

use crate::domain::cards_types::{CardId, PlayerId};
use crate::domain::events::{GameEvent, RoundStarted};
use crate::domain::phases::{GameState, RoomContext, TrickPhase};
use crate::domain::players::{replace_player, BiddingPlayer};
use crate::domain::scoring::ScoreBoard;

/// Players declare how many tricks they expect to take this round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BiddingPhase {
    pub room: RoomContext,
    pub dealer_id: PlayerId,
    /// Cards left in the draw deck this round.
    pub deck_remaining: u32,
    pub players: Vec<BiddingPlayer>,
    pub my_card_ids: Vec<CardId>,
    /// The local player's bid, once declared.
    pub my_bid: Option<u32>,
    pub round: u32,
    pub score_board: ScoreBoard,
}

impl BiddingPhase {
    /// Enter bidding for the round announced by `round_started`.
    pub fn for_round(
        room: RoomContext,
        dealer_id: PlayerId,
        score_board: ScoreBoard,
        round_started: &RoundStarted,
    ) -> Self {
        let players = round_started
            .joined_players
            .iter()
            .map(|p| BiddingPlayer {
                player_id: p.player_id.clone(),
                is_bid: false,
                card: p.card,
            })
            .collect();

        Self {
            room,
            dealer_id,
            deck_remaining: round_started.deck,
            players,
            my_card_ids: round_started.card_ids.clone(),
            my_bid: None,
            round: round_started.round,
            score_board,
        }
    }

    pub fn apply(&self, event: &GameEvent) -> GameState {
        match event {
            GameEvent::BidDeclared { player_id, bid } => {
                GameState::Bidding(self.declare_bid(player_id, *bid))
            }

            GameEvent::TrickStarted(trick_started) => {
                GameState::Trick(TrickPhase::from_bidding(self, trick_started))
            }

            _ => GameState::Bidding(self.clone()),
        }
    }

    fn declare_bid(&self, player_id: &str, bid: u32) -> Self {
        let my_bid = if self.room.is_me(player_id) {
            Some(bid)
        } else {
            self.my_bid
        };

        let players = replace_player(&self.players, player_id, |p| BiddingPlayer {
            is_bid: true,
            ..p.clone()
        })
        .unwrap_or_else(|| {
            warn!(player_id, "bid declared by a player outside the roster");
            self.players.clone()
        });

        Self {
            players,
            my_bid,
            ..self.clone()
        }
    }

    pub fn is_everyone_bid(&self) -> bool {
        self.players.iter().all(|p| p.is_bid)
    }

    /// Players still expected to bid, in roster order.
    pub fn pending_players(&self) -> Vec<&str> {
        self.players
            .iter()
            .filter(|p| !p.is_bid)
            .map(|p| p.player_id.as_str())
            .collect()
    }
}
