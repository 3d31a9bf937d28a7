//! Placement rule engine.
//!
//! `PlacementRules` is the seam the mutation layer depends on;
//! `PlacementRuleEngine` is the table-driven implementation.

use tracing::trace;

use crate::cards::Card;
use crate::error::{DeckError, DeckResult};
use crate::topology::{DeckType, SlotAssignment, SlotId};

use super::exceptions::{ExceptionRule, STANDARD_RULES};

/// Outcome of a placement check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    pub allowed: bool,
    /// Why the card was rejected. `None` when allowed.
    pub reason: Option<String>,
}

impl Placement {
    #[must_use]
    pub fn allow() -> Self {
        Self {
            allowed: true,
            reason: None,
        }
    }

    #[must_use]
    pub fn deny(reason: impl Into<String>) -> Self {
        Self {
            allowed: false,
            reason: Some(reason.into()),
        }
    }

    /// Convert into a result carrying a `Validation` error on rejection.
    pub fn into_result(self) -> DeckResult<()> {
        if self.allowed {
            Ok(())
        } else {
            Err(DeckError::Validation {
                reason: self.reason.unwrap_or_default(),
            })
        }
    }
}

/// Placement rules trait.
///
/// Implementations must be pure: the same inputs always give the same
/// answer, and no state is read besides the arguments.
pub trait PlacementRules {
    /// May `card` occupy `slot` in a deck of `deck_type`?
    fn can_place(&self, card: &Card, slot: SlotId, deck_type: DeckType) -> Placement;

    // === Convenience Methods ===

    /// Every slot of `deck_type` the card may occupy, in topology order.
    fn eligible_slots(&self, card: &Card, deck_type: DeckType) -> Vec<SlotId> {
        deck_type
            .topology()
            .iter()
            .map(|e| e.id)
            .filter(|&slot| self.can_place(card, slot, deck_type).allowed)
            .collect()
    }

    /// Keep the candidates that may occupy `slot`.
    ///
    /// Candidates come from the catalog search, already filtered by the
    /// user's query; this only applies the placement rules on top.
    fn filter_candidates<'c, I>(&self, candidates: I, slot: SlotId, deck_type: DeckType) -> Vec<&'c Card>
    where
        I: IntoIterator<Item = &'c Card>,
    {
        candidates
            .into_iter()
            .filter(|card| self.can_place(card, slot, deck_type).allowed)
            .collect()
    }
}

/// Table-driven placement rules.
///
/// ## Example
///
/// ```
/// use rhythm_deck::cards::{Card, CardId, Rarity};
/// use rhythm_deck::rules::{PlacementRuleEngine, PlacementRules};
/// use rhythm_deck::topology::{DeckType, SlotId};
///
/// let engine = PlacementRuleEngine::new();
/// let card = Card::new(CardId::new(1), "Aiko Hoshino", Rarity::SuperRare);
///
/// // Year1 slot 0 is Aiko Hoshino's main slot
/// assert!(engine.can_place(&card, SlotId::new(0), DeckType::Year1).allowed);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct PlacementRuleEngine {
    rules: &'static [ExceptionRule],
}

impl Default for PlacementRuleEngine {
    fn default() -> Self {
        Self {
            rules: STANDARD_RULES,
        }
    }
}

impl PlacementRuleEngine {
    /// Engine with the standard exception table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with a custom exception table (evaluated in slice order).
    #[must_use]
    pub fn with_rules(rules: &'static [ExceptionRule]) -> Self {
        Self { rules }
    }

    #[must_use]
    pub fn rules(&self) -> &'static [ExceptionRule] {
        self.rules
    }
}

impl PlacementRules for PlacementRuleEngine {
    fn can_place(&self, card: &Card, slot: SlotId, deck_type: DeckType) -> Placement {
        let Some(entry) = deck_type.entry(slot) else {
            return Placement::deny(format!("invalid slot {slot}"));
        };

        if entry.assignment.is_generic() {
            return Placement::allow();
        }

        let slot_character = entry.assignment.character();
        let groups = card.groups();

        let same_character = matches!(
            entry.assignment,
            SlotAssignment::Character(name) if card.character_name == name
        );
        let same_generation = slot_character
            .and_then(|c| c.generation)
            .is_some_and(|g| groups.generation == Some(g));
        let same_unit = slot_character
            .and_then(|c| c.unit)
            .is_some_and(|u| groups.unit == Some(u));

        if same_character || same_generation || same_unit {
            return Placement::allow();
        }

        if let Some(rule) = self.rules.iter().find(|r| r.trigger.matches(card, groups)) {
            let admitted = rule.placement.admits(entry, slot_character);
            trace!(rule = rule.name, %slot, card = %card.id, admitted, "exception rule decided");
            return if admitted {
                Placement::allow()
            } else {
                Placement::deny(rule.reason)
            };
        }

        Placement::deny(format!(
            "{slot} requires {} or a member of the same generation or unit",
            entry.assignment
        ))
    }
}
