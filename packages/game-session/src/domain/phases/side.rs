//! Side phases: rule events that interrupt trick play.
//!
//! Each side phase owns a snapshot of the [`TrickPhase`] it interrupted and the
//! player who must act. Exactly one event resolves it back into trick play;
//! every other event leaves it waiting.

use tracing::debug;

use crate::domain::cards_types::{CardId, PlayerId};
use crate::domain::events::GameEvent;
use crate::domain::phases::{GameState, TrickPhase};

/// Common read surface of the four interrupting phases.
pub trait SidePhase {
    /// The trick play this phase will resume into.
    fn interrupted(&self) -> &TrickPhase;

    /// The player whose action resolves this phase.
    fn target_player_id(&self) -> &str;

    fn is_me_target(&self) -> bool {
        self.interrupted().room.is_me(self.target_player_id())
    }
}

/// New local hand after a hand change: the old hand plus the drawn cards,
/// minus the returned ones, without duplicates and in hand-then-draw order.
pub fn exchange_hand(hand: &[CardId], draws: &[CardId], returned: &[CardId]) -> Vec<CardId> {
    let mut out: Vec<CardId> = Vec::with_capacity(hand.len() + draws.len());
    for id in hand.iter().chain(draws) {
        if !returned.contains(id) && !out.contains(id) {
            out.push(id.clone());
        }
    }
    out
}

/// Waiting for `changing_player_id` to choose who leads the next trick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextTrickLeadPlayerChangingPhase {
    pub trick: TrickPhase,
    pub changing_player_id: PlayerId,
}

impl NextTrickLeadPlayerChangingPhase {
    pub fn new(trick: TrickPhase, changing_player_id: PlayerId) -> Self {
        Self {
            trick,
            changing_player_id,
        }
    }

    pub fn apply(&self, event: &GameEvent) -> GameState {
        match event {
            GameEvent::LeadPlayerChanged { new_lead_player_id } => {
                GameState::Trick(self.trick.with_lead_player(new_lead_player_id))
            }
            _ => GameState::LeadPlayerChanging(self.clone()),
        }
    }
}

impl SidePhase for NextTrickLeadPlayerChangingPhase {
    fn interrupted(&self) -> &TrickPhase {
        &self.trick
    }
    fn target_player_id(&self) -> &str {
        &self.changing_player_id
    }
}

/// Waiting for `changing_player_id` to return cards after drawing `draw_card_ids`.
///
/// Only the local player's hand is modelled. When a remote player's hand
/// changes the phase stays as it is: remote hand contents are never known to
/// this client, so there is nothing to update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandChangeWaitingPhase {
    pub trick: TrickPhase,
    pub changing_player_id: PlayerId,
    pub draw_card_ids: Vec<CardId>,
}

impl HandChangeWaitingPhase {
    pub fn new(trick: TrickPhase, changing_player_id: PlayerId, draw_card_ids: Vec<CardId>) -> Self {
        Self {
            trick,
            changing_player_id,
            draw_card_ids,
        }
    }

    pub fn apply(&self, event: &GameEvent) -> GameState {
        match event {
            GameEvent::PlayerHandChanged {
                player_id,
                return_card_ids,
            } => {
                if !self.trick.room.is_me(player_id) {
                    debug!(player_id, "remote hand change; local view unchanged");
                    return GameState::HandChangeWaiting(self.clone());
                }
                let hand = exchange_hand(
                    &self.trick.my_card_ids,
                    &self.draw_card_ids,
                    return_card_ids,
                );
                GameState::Trick(self.trick.with_my_cards(hand))
            }
            _ => GameState::HandChangeWaiting(self.clone()),
        }
    }
}

impl SidePhase for HandChangeWaitingPhase {
    fn interrupted(&self) -> &TrickPhase {
        &self.trick
    }
    fn target_player_id(&self) -> &str {
        &self.changing_player_id
    }
}

/// Waiting for `predicating_player_id` to finish looking at the deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuturePredicateWaitingPhase {
    pub trick: TrickPhase,
    pub predicating_player_id: PlayerId,
    /// Top of the draw deck, as revealed to the predicating player.
    pub deck_card_ids: Vec<CardId>,
}

impl FuturePredicateWaitingPhase {
    pub fn new(trick: TrickPhase, predicating_player_id: PlayerId, deck_card_ids: Vec<CardId>) -> Self {
        Self {
            trick,
            predicating_player_id,
            deck_card_ids,
        }
    }

    pub fn apply(&self, event: &GameEvent) -> GameState {
        match event {
            GameEvent::FuturePredicated { .. } => GameState::Trick(self.trick.clone()),
            _ => GameState::FuturePredicateWaiting(self.clone()),
        }
    }
}

impl SidePhase for FuturePredicateWaitingPhase {
    fn interrupted(&self) -> &TrickPhase {
        &self.trick
    }
    fn target_player_id(&self) -> &str {
        &self.predicating_player_id
    }
}

/// Waiting for `changing_player_id` to revise a declared bid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BidDeclareChangeWaitingPhase {
    pub trick: TrickPhase,
    pub changing_player_id: PlayerId,
}

impl BidDeclareChangeWaitingPhase {
    pub fn new(trick: TrickPhase, changing_player_id: PlayerId) -> Self {
        Self {
            trick,
            changing_player_id,
        }
    }

    pub fn apply(&self, event: &GameEvent) -> GameState {
        match event {
            GameEvent::BidDeclareChanged {
                changed_player_id,
                changed_bid,
            } => GameState::Trick(self.trick.with_bid_declare(changed_player_id, *changed_bid)),
            _ => GameState::BidDeclareChangeWaiting(self.clone()),
        }
    }
}

impl SidePhase for BidDeclareChangeWaitingPhase {
    fn interrupted(&self) -> &TrickPhase {
        &self.trick
    }
    fn target_player_id(&self) -> &str {
        &self.changing_player_id
    }
}
