//! Card catalog collaborator.
//!
//! Stored decks only keep card ids. Compiling a stored deck back into a
//! `DeckState` needs the full cards, which live in an external catalog.
//! The engine reaches that catalog only through this trait, so the rule
//! engine and mutation service stay free of I/O.

use crate::error::DeckResult;

use super::definition::{Card, CardId};

/// Resolves card ids to full cards.
pub trait CardCatalog {
    /// Fetch every card whose id is in `ids`.
    ///
    /// Ids the catalog does not know are silently absent from the result.
    /// Order of the returned cards is unspecified.
    fn fetch_cards_by_ids(&self, ids: &[CardId]) -> DeckResult<Vec<Card>>;
}

impl<C: CardCatalog + ?Sized> CardCatalog for &C {
    fn fetch_cards_by_ids(&self, ids: &[CardId]) -> DeckResult<Vec<Card>> {
        (**self).fetch_cards_by_ids(ids)
    }
}
