//! Trick play: the most event-rich phase.
//!
//! Side phases interrupt a `TrickPhase` and resolve back into an updated one
//! through the `with_*` builders below.

use tracing::warn;

use crate::domain::cards_types::{Card, CardId, PlayerId, Suit};
use crate::domain::events::{GameEvent, TrickStarted};
use crate::domain::phases::{
    BidDeclareChangeWaitingPhase, BiddingPhase, FinishedPhase, FuturePredicateWaitingPhase,
    GameState, HandChangeWaitingPhase, NextTrickLeadPlayerChangingPhase, RoomContext,
};
use crate::domain::players::{
    contains_player, player_after, replace_player, FieldEntry, TrickingPlayer,
};
use crate::domain::rules::FIRST_TRICK;
use crate::domain::scoring::{RoundScore, ScoreBoard};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrickPhase {
    pub room: RoomContext,
    pub round: u32,
    /// Player who led the current trick.
    pub dealer_id: PlayerId,
    pub next_player_id: PlayerId,
    /// Fixed at trick-phase entry; never reordered within the round.
    pub players: Vec<TrickingPlayer>,
    pub my_card_ids: Vec<CardId>,
    pub deck_remaining: u32,
    /// Cards played to the trick in progress, in play order.
    pub field: Vec<FieldEntry>,
    /// 1-based index of the trick in progress.
    pub trick: u32,
    pub score_board: ScoreBoard,
}

impl TrickPhase {
    pub fn from_bidding(bidding: &BiddingPhase, trick_started: &TrickStarted) -> Self {
        let players = trick_started
            .bid_players
            .iter()
            .map(|p| TrickingPlayer::new(p.player_id.clone(), p.bid, p.card))
            .collect();

        Self {
            room: bidding.room.clone(),
            round: bidding.round,
            dealer_id: bidding.dealer_id.clone(),
            next_player_id: bidding.dealer_id.clone(),
            players,
            my_card_ids: bidding.my_card_ids.clone(),
            deck_remaining: bidding.deck_remaining,
            field: Vec::new(),
            trick: FIRST_TRICK,
            score_board: bidding.score_board.clone(),
        }
    }

    pub fn apply(&self, event: &GameEvent) -> GameState {
        match event {
            GameEvent::TrickPlayed {
                player_id,
                played_card,
            } => self.play(player_id, played_card),

            GameEvent::LeadPlayerChangeable { player_id } => GameState::LeadPlayerChanging(
                NextTrickLeadPlayerChangingPhase::new(self.clone(), player_id.clone()),
            ),

            GameEvent::HandChangeAvailable {
                player_id,
                draw_card_ids,
            } => GameState::HandChangeWaiting(HandChangeWaitingPhase::new(
                self.clone(),
                player_id.clone(),
                draw_card_ids.clone(),
            )),

            GameEvent::FuturePredicateAvailable {
                player_id,
                deck_card_ids,
            } => GameState::FuturePredicateWaiting(FuturePredicateWaitingPhase::new(
                self.clone(),
                player_id.clone(),
                deck_card_ids.clone(),
            )),

            GameEvent::BidDeclareChangeAvailable { player_id } => GameState::BidDeclareChangeWaiting(
                BidDeclareChangeWaitingPhase::new(self.clone(), player_id.clone()),
            ),

            GameEvent::PlayerWon {
                winner_id,
                trick_bonus,
            } => GameState::Trick(self.win_trick(winner_id, *trick_bonus)),

            GameEvent::AllFled { winner_id } => GameState::Trick(self.resolve_trick(winner_id)),

            GameEvent::SpecialCreatureAppeared { must_have_won } => {
                GameState::Trick(self.resolve_trick(must_have_won))
            }

            GameEvent::RoundFinished { round_score } => {
                GameState::Trick(self.finish_round(round_score))
            }

            // The lead player of the last trick deals the next round.
            GameEvent::RoundStarted(round_started) => GameState::Bidding(BiddingPhase::for_round(
                self.room.clone(),
                self.dealer_id.clone(),
                self.score_board.clone(),
                round_started,
            )),

            GameEvent::GameFinished(game_finished) => GameState::Finished(FinishedPhase::new(
                self.room.clone(),
                game_finished.game_winner_id.clone(),
                ScoreBoard::from(game_finished.score_board.clone()),
            )),

            _ => GameState::Trick(self.clone()),
        }
    }

    fn play(&self, player_id: &str, card: &Card) -> GameState {
        let Some(players) = replace_player(&self.players, player_id, |p| TrickingPlayer {
            card: p.card.saturating_sub(1),
            ..p.clone()
        }) else {
            warn!(player_id, card_id = %card.id, "trick played by a player outside the roster");
            return GameState::Trick(self.clone());
        };

        let next_player_id = player_after(&players, player_id)
            .map(str::to_owned)
            .unwrap_or_else(|| self.next_player_id.clone());

        let my_card_ids = if self.room.is_me(player_id) {
            self.my_card_ids
                .iter()
                .filter(|id| **id != card.id)
                .cloned()
                .collect()
        } else {
            self.my_card_ids.clone()
        };

        let mut field = self.field.clone();
        field.push(FieldEntry {
            player_id: player_id.to_owned(),
            card: card.clone(),
        });

        GameState::Trick(Self {
            players,
            next_player_id,
            my_card_ids,
            field,
            ..self.clone()
        })
    }

    /// `winner_id` takes the trick and its bonus, then leads the next one.
    fn win_trick(&self, winner_id: &str, trick_bonus: i32) -> Self {
        let players = replace_player(&self.players, winner_id, |p| TrickingPlayer {
            took_trick: p.took_trick + 1,
            took_bonus: p.took_bonus + trick_bonus,
            ..p.clone()
        })
        .unwrap_or_else(|| {
            warn!(winner_id, "trick won by a player outside the roster");
            self.players.clone()
        });

        Self {
            players,
            ..self.resolve_trick(winner_id)
        }
    }

    /// Clears the field and hands the lead to `leader_id` without scoring.
    fn resolve_trick(&self, leader_id: &str) -> Self {
        Self {
            field: Vec::new(),
            trick: self.trick + 1,
            ..self.with_lead_player(leader_id)
        }
    }

    fn finish_round(&self, round_score: &RoundScore) -> Self {
        Self {
            score_board: self.score_board.with_round(round_score.clone()),
            field: Vec::new(),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_lead_player(&self, lead_player_id: &str) -> Self {
        if !contains_player(&self.players, lead_player_id) {
            warn!(lead_player_id, "lead handed to a player outside the roster; lead kept");
            return self.clone();
        }
        Self {
            dealer_id: lead_player_id.to_owned(),
            next_player_id: lead_player_id.to_owned(),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_bid_declare(&self, player_id: &str, bid: u32) -> Self {
        let Some(players) = replace_player(&self.players, player_id, |p| TrickingPlayer {
            declared_bid: bid,
            ..p.clone()
        }) else {
            warn!(player_id, "bid change for a player outside the roster");
            return self.clone();
        };

        Self {
            players,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_my_cards(&self, my_card_ids: Vec<CardId>) -> Self {
        Self {
            my_card_ids,
            ..self.clone()
        }
    }

    pub fn is_my_turn(&self) -> bool {
        self.room.is_me(&self.next_player_id)
    }

    pub fn player_of(&self, player_id: &str) -> Option<&TrickingPlayer> {
        self.players.iter().find(|p| p.player_id == player_id)
    }

    /// The local hand resolved against the room deck. Unknown ids are skipped.
    pub fn my_cards(&self) -> Vec<&Card> {
        self.my_card_ids
            .iter()
            .filter_map(|id| self.room.deck.get(id))
            .collect()
    }

    /// Colour the remaining players must follow in the current trick.
    ///
    /// The first coloured card sets it, unless a character card was played
    /// before any coloured card, in which case anything may be played.
    pub fn must_follow(&self) -> Option<Suit> {
        for entry in &self.field {
            let suit = entry.card.suit;
            if suit.is_coloured() {
                return Some(suit);
            }
            if suit.is_character() {
                return None;
            }
        }
        None
    }
}
