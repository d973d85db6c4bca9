//! Per-player records used by the bidding and trick phases, plus roster
//! rotation helpers shared by every phase.
//!
//! Roster order is fixed when a phase is entered and never reshuffled, so
//! "who acts next" is always the entry cyclically following a given player.

use serde::{Deserialize, Serialize};

use crate::domain::cards_types::{Card, PlayerId};

/// A player during the bidding sub-phase.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct BiddingPlayer {
    pub player_id: PlayerId,
    pub is_bid: bool,
    /// Cards remaining in hand.
    pub card: u32,
}

/// A player during trick play.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct TrickingPlayer {
    pub player_id: PlayerId,
    pub declared_bid: u32,
    pub took_trick: u32,
    /// Cards remaining in hand.
    pub card: u32,
    pub took_bonus: i32,
}

impl TrickingPlayer {
    pub fn new(player_id: impl Into<PlayerId>, declared_bid: u32, card: u32) -> Self {
        Self {
            player_id: player_id.into(),
            declared_bid,
            took_trick: 0,
            card,
            took_bonus: 0,
        }
    }
}

/// A card currently played to the active trick.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct FieldEntry {
    pub player_id: PlayerId,
    pub card: Card,
}

/// Anything that occupies a seat in a roster.
pub trait Seated {
    fn player_id(&self) -> &str;
}

impl Seated for BiddingPlayer {
    fn player_id(&self) -> &str {
        &self.player_id
    }
}

impl Seated for TrickingPlayer {
    fn player_id(&self) -> &str {
        &self.player_id
    }
}

pub fn position_of<T: Seated>(players: &[T], player_id: &str) -> Option<usize> {
    players.iter().position(|p| p.player_id() == player_id)
}

pub fn contains_player<T: Seated>(players: &[T], player_id: &str) -> bool {
    position_of(players, player_id).is_some()
}

/// Returns the roster entry immediately following `player_id`, wrapping around.
#[inline]
pub fn player_after<'a, T: Seated>(players: &'a [T], player_id: &str) -> Option<&'a str> {
    let idx = position_of(players, player_id)?;
    Some(players[(idx + 1) % players.len()].player_id())
}

/// Rebuilds the roster with the record for `player_id` replaced by `update(record)`.
///
/// Returns `None` when the player is not seated; the input is left untouched
/// either way.
pub fn replace_player<T, F>(players: &[T], player_id: &str, update: F) -> Option<Vec<T>>
where
    T: Seated + Clone,
    F: FnOnce(&T) -> T,
{
    let idx = position_of(players, player_id)?;
    let mut next = players.to_vec();
    next[idx] = update(&players[idx]);
    Some(next)
}
