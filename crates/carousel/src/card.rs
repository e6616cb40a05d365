use derive_more::{AsRef, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From, Into,
)]
#[serde(transparent)]
pub struct CardId(u32);

impl CardId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct ImageUrl(String);

crate::impl_string_newtype!(ImageUrl);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub image: ImageUrl,
}

impl Card {
    pub fn new(id: u32, image: impl Into<String>) -> Self {
        Self {
            id: CardId(id),
            image: ImageUrl::new(image),
        }
    }

    /// Text shown in place of the image when it cannot be loaded.
    pub fn alt_text(&self) -> String {
        format!("Card {}", self.id)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeckError {
    #[error("A carousel needs at least one card")]
    Empty,
    #[error("Card id {0} is used more than once")]
    DuplicateId(CardId),
}

/// The fixed card list a carousel rotates through. Never empty, ids unique.
#[derive(Debug, Clone, PartialEq, Eq, Deref)]
pub struct Deck(Vec<Card>);

impl Deck {
    pub fn new(cards: Vec<Card>) -> Result<Self, DeckError> {
        if cards.is_empty() {
            return Err(DeckError::Empty);
        }

        let mut seen = HashSet::with_capacity(cards.len());
        if let Some(dup) = cards.iter().find(|c| !seen.insert(c.id)) {
            return Err(DeckError::DuplicateId(dup.id));
        }

        Ok(Self(cards))
    }

    pub fn cards(&self) -> &[Card] {
        &self.0
    }
}

impl TryFrom<Vec<Card>> for Deck {
    type Error = DeckError;

    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Self::new(cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deck_rejects_empty_list() {
        assert_eq!(Deck::new(Vec::new()), Err(DeckError::Empty));
    }

    #[test]
    fn test_deck_rejects_duplicate_ids() {
        let cards = vec![
            Card::new(1, "a.svg"),
            Card::new(2, "b.svg"),
            Card::new(1, "c.svg"),
        ];
        assert_eq!(Deck::new(cards), Err(DeckError::DuplicateId(CardId::new(1))));
    }

    #[test]
    fn test_deck_keeps_card_order() {
        let deck = Deck::new(vec![Card::new(3, "c.svg"), Card::new(1, "a.svg")]).unwrap();
        let ids: Vec<u32> = deck.iter().map(|c| c.id.into()).collect();
        assert_eq!(ids, vec![3, 1]);
        assert_eq!(deck.len(), 2);
    }

    #[test]
    fn test_card_deserialization() {
        let card: Card =
            serde_json::from_str(r#"{ "id": 7, "image": "/images/card7.svg" }"#).unwrap();
        assert_eq!(card, Card::new(7, "/images/card7.svg"));
        assert_eq!(card.alt_text(), "Card 7");
    }
}
