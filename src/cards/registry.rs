//! In-memory card catalog.

use rustc_hash::FxHashMap;

use crate::error::DeckResult;

use super::catalog::CardCatalog;
use super::definition::{Card, CardId, Rarity};

/// Registry of catalog cards.
///
/// ## Example
///
/// ```
/// use rhythm_deck::cards::{Card, CardCatalog, CardId, CardRegistry, Rarity};
///
/// let mut registry = CardRegistry::new();
/// registry.register(Card::new(CardId::new(1), "Aiko Hoshino", Rarity::Legend));
///
/// let found = registry.fetch_cards_by_ids(&[CardId::new(1), CardId::new(2)]).unwrap();
/// assert_eq!(found.len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, Card>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card, replacing any card with the same id.
    ///
    /// Returns the replaced card.
    pub fn register(&mut self, card: Card) -> Option<Card> {
        self.cards.insert(card.id, card)
    }

    /// Get a card by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(&id)
    }

    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.values()
    }

    /// Find cards of one character (exact name match).
    pub fn find_by_character<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Card> {
        self.cards.values().filter(move |c| c.character_name == name)
    }

    /// Find cards of a given rarity.
    pub fn find_by_rarity(&self, rarity: Rarity) -> impl Iterator<Item = &Card> {
        self.cards.values().filter(move |c| c.rarity == rarity)
    }
}

impl CardCatalog for CardRegistry {
    fn fetch_cards_by_ids(&self, ids: &[CardId]) -> DeckResult<Vec<Card>> {
        Ok(ids.iter().filter_map(|id| self.cards.get(id)).cloned().collect())
    }
}

impl FromIterator<Card> for CardRegistry {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut registry = Self::new();
        for card in iter {
            registry.register(card);
        }
        registry
    }
}
