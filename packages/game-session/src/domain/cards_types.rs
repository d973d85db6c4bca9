//! Core card-related types: Card, Suit, Deck

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub type CardId = String;
pub type PlayerId = String;
pub type RoomId = String;

/// Colour marker of a card.
///
/// The four colours carry a numeric rank; every other variant is a special card
/// whose rank is always zero. `Black` is the trump colour.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Suit {
    Green,
    Yellow,
    Purple,
    Black,
    Escape,
    Pirate,
    Mermaid,
    SkullKing,
    Tigress,
    Kraken,
    WhiteWhale,
    Loot,
}

impl Suit {
    /// True for the four numbered colours.
    pub const fn is_coloured(self) -> bool {
        matches!(self, Suit::Green | Suit::Yellow | Suit::Purple | Suit::Black)
    }

    /// Character cards cancel the obligation to follow colour when they lead.
    pub const fn is_character(self) -> bool {
        matches!(
            self,
            Suit::Pirate
                | Suit::Mermaid
                | Suit::SkullKing
                | Suit::Tigress
                | Suit::Kraken
                | Suit::WhiteWhale
        )
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub suit: Suit,
    /// 1..=14 for coloured cards, 0 for specials.
    pub rank: u8,
}

impl Card {
    pub fn new(id: impl Into<CardId>, suit: Suit, rank: u8) -> Self {
        Self {
            id: id.into(),
            suit,
            rank,
        }
    }
}

/// Full card catalogue of a room, keyed by card id.
pub type Deck = BTreeMap<CardId, Card>;

pub fn deck_from_cards<I>(cards: I) -> Deck
where
    I: IntoIterator<Item = Card>,
{
    cards.into_iter().map(|c| (c.id.clone(), c)).collect()
}
