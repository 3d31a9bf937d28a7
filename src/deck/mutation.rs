//! Validated deck mutations.
//!
//! Every operation either fully applies or leaves the deck untouched.
//! Multi-slot operations build the new slot list on an O(1) clone and
//! commit it with a single assignment, so callers never observe an
//! intermediate state.

use smallvec::SmallVec;
use tracing::{debug, info};

use crate::cards::Card;
use crate::config::DeckConfig;
use crate::error::{DeckError, DeckResult};
use crate::rules::{PlacementRuleEngine, PlacementRules};
use crate::topology::{DeckType, SlotId};

use super::state::{DeckId, DeckMetadata, DeckState, Occupant, PowerLevel};

const FRIEND_SLOT_DISABLED: &str = "the friend slot is disabled";

/// A slot emptied by a swap because its incoming card was not allowed there.
#[derive(Clone, Debug, PartialEq)]
pub struct VacatedSlot {
    pub slot: SlotId,
    /// The card that was removed from the deck.
    pub card: Card,
    pub reason: String,
}

/// Result of a swap.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SwapOutcome {
    pub vacated: SmallVec<[VacatedSlot; 2]>,
}

impl SwapOutcome {
    /// True when both cards landed in their new slots.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.vacated.is_empty()
    }
}

/// Validated operations over a `DeckState`.
///
/// The service holds no deck; the deck is passed into every call.
///
/// ## Example
///
/// ```
/// use rhythm_deck::cards::{Card, CardId, Rarity};
/// use rhythm_deck::config::DeckConfig;
/// use rhythm_deck::deck::{DeckId, DeckMutationService};
/// use rhythm_deck::topology::{DeckType, SlotId};
///
/// let service = DeckMutationService::new(DeckConfig::default());
/// let mut deck = service.create_empty(DeckId::new(1), DeckType::Year1, 0);
///
/// let card = Card::new(CardId::new(10), "Aiko Hoshino", Rarity::Legend);
/// service.place(&mut deck, SlotId::new(0), card).unwrap();
///
/// assert_eq!(deck.slot(SlotId::new(0)).unwrap().power_level().unwrap().get(), 14);
/// ```
#[derive(Clone, Debug)]
pub struct DeckMutationService<R = PlacementRuleEngine> {
    rules: R,
    config: DeckConfig,
}

impl DeckMutationService<PlacementRuleEngine> {
    /// Service using the standard placement rules.
    #[must_use]
    pub fn new(config: DeckConfig) -> Self {
        Self::with_rules(PlacementRuleEngine::new(), config)
    }
}

impl Default for DeckMutationService<PlacementRuleEngine> {
    fn default() -> Self {
        Self::new(DeckConfig::default())
    }
}

impl<R: PlacementRules> DeckMutationService<R> {
    #[must_use]
    pub fn with_rules(rules: R, config: DeckConfig) -> Self {
        Self { rules, config }
    }

    pub fn rules(&self) -> &R {
        &self.rules
    }

    pub fn config(&self) -> &DeckConfig {
        &self.config
    }

    /// Create an empty deck with the configured defaults.
    #[must_use]
    pub fn create_empty(&self, id: DeckId, deck_type: DeckType, created_at: u64) -> DeckState {
        DeckState::new(id, deck_type)
            .with_name(self.config.default_deck_name.clone())
            .with_created_at(created_at)
            .with_friend_slot_enabled(self.config.friend_slot_enabled)
    }

    /// Why `card` may not occupy `slot`, or `Ok` if it may.
    fn admits(&self, state: &DeckState, card: &Card, slot: SlotId) -> Result<(), String> {
        let is_friend = state.entry(slot).is_some_and(|e| e.is_friend());
        if is_friend && !state.friend_slot_enabled {
            return Err(FRIEND_SLOT_DISABLED.to_string());
        }
        let placement = self.rules.can_place(card, slot, state.deck_type);
        if placement.allowed {
            Ok(())
        } else {
            Err(placement.reason.unwrap_or_default())
        }
    }

    /// Place a card into a slot.
    ///
    /// A card already in the slot is replaced and the slot keeps its power
    /// level; an empty slot starts at the configured initial level. A card
    /// that sits in another slot is rejected: moving it is a swap.
    pub fn place(&self, state: &mut DeckState, slot: SlotId, card: Card) -> DeckResult<()> {
        let index = state.require(slot)?;

        if let Some(other) = state.slot_of_card(card.id).filter(|&s| s != slot) {
            return Err(DeckError::validation(format!(
                "{} is already placed in {other}",
                card.id
            )));
        }
        self.admits(state, &card, slot).map_err(DeckError::validation)?;

        let power_level = state.slots[index]
            .power_level()
            .unwrap_or(self.config.initial_power_level);
        debug!(deck = %state.id, %slot, card = %card.id, "card placed");
        state.slots[index].occupant = Some(Occupant { card, power_level });
        Ok(())
    }

    /// Place a card, moving it if it already sits in another slot.
    ///
    /// A move is a swap with the target slot, so the target's previous card
    /// lands in the card's old slot, or is vacated if not allowed there.
    pub fn place_or_move(
        &self,
        state: &mut DeckState,
        slot: SlotId,
        card: Card,
    ) -> DeckResult<SwapOutcome> {
        state.require(slot)?;
        match state.slot_of_card(card.id) {
            Some(from) if from != slot => {
                self.admits(state, &card, slot).map_err(DeckError::validation)?;
                self.swap(state, from, slot)
            }
            _ => {
                self.place(state, slot, card)?;
                Ok(SwapOutcome::default())
            }
        }
    }

    /// Empty a slot, clearing the ace if it pointed there.
    ///
    /// Returns the removed card.
    pub fn remove(&self, state: &mut DeckState, slot: SlotId) -> DeckResult<Option<Card>> {
        let index = state.require(slot)?;
        let removed = state.slots[index].occupant.take();
        if state.ace == Some(slot) {
            state.ace = None;
        }
        if let Some(ref occupant) = removed {
            debug!(deck = %state.id, %slot, card = %occupant.card.id, "card removed");
        }
        Ok(removed.map(|o| o.card))
    }

    /// Exchange the contents of two slots.
    ///
    /// Each card is checked against its destination independently. A card
    /// not allowed at its destination is removed from the deck instead of
    /// rejecting the swap; the removals are reported in the outcome. Power
    /// levels travel with their cards. The ace stays on its slot and is
    /// cleared if that slot ends up empty. Swapping a slot with itself does
    /// nothing; swapping with a disabled friend slot is rejected.
    pub fn swap(&self, state: &mut DeckState, a: SlotId, b: SlotId) -> DeckResult<SwapOutcome> {
        let ia = state.require(a)?;
        let ib = state.require(b)?;
        if a == b {
            return Ok(SwapOutcome::default());
        }
        if !state.friend_slot_enabled
            && [a, b].iter().any(|&s| state.entry(s).is_some_and(|e| e.is_friend()))
        {
            return Err(DeckError::validation(FRIEND_SLOT_DISABLED));
        }

        let mut slots = state.slots.clone();
        let from_a = slots[ia].occupant.take();
        let from_b = slots[ib].occupant.take();

        let mut outcome = SwapOutcome::default();
        let mut settle = |occupant: Option<Occupant>, target: SlotId| {
            let occupant = occupant?;
            match self.admits(state, &occupant.card, target) {
                Ok(()) => Some(occupant),
                Err(reason) => {
                    outcome.vacated.push(VacatedSlot {
                        slot: target,
                        card: occupant.card,
                        reason,
                    });
                    None
                }
            }
        };
        slots[ia].occupant = settle(from_b, a);
        slots[ib].occupant = settle(from_a, b);

        let ace = state.ace.filter(|&slot| {
            slots
                .iter()
                .any(|s| s.slot_id == slot && !s.is_empty())
        });

        state.slots = slots;
        state.ace = ace;
        debug!(deck = %state.id, %a, %b, vacated = outcome.vacated.len(), "slots swapped");
        Ok(outcome)
    }

    /// Toggle the ace on a slot.
    ///
    /// Clears the ace if `slot` is the ace; otherwise makes `slot` the ace
    /// if it holds a card, and ignores the request if it does not.
    /// Returns the resulting ace.
    pub fn toggle_ace(&self, state: &mut DeckState, slot: SlotId) -> DeckResult<Option<SlotId>> {
        let index = state.require(slot)?;
        if state.ace == Some(slot) {
            state.ace = None;
        } else if !state.slots[index].is_empty() {
            state.ace = Some(slot);
        }
        Ok(state.ace)
    }

    /// Set a slot's power level, clamped into range.
    ///
    /// Does nothing on an empty slot. Returns the stored level.
    pub fn set_power_level(
        &self,
        state: &mut DeckState,
        slot: SlotId,
        value: i64,
    ) -> DeckResult<Option<PowerLevel>> {
        let index = state.require(slot)?;
        let level = PowerLevel::clamped(value);
        Ok(state.slots[index].occupant.as_mut().map(|occupant| {
            occupant.power_level = level;
            level
        }))
    }

    /// Switch the deck to another deck type.
    ///
    /// Regenerates every slot from the new topology and drops all cards and
    /// the ace; id, name, metadata and creation time are kept. On a deck
    /// holding any card this is refused with `ConfirmationRequired` unless
    /// `confirmed` is set. Switching to the current type does nothing.
    pub fn change_deck_type(
        &self,
        state: &mut DeckState,
        deck_type: DeckType,
        confirmed: bool,
    ) -> DeckResult<()> {
        if state.deck_type == deck_type {
            return Ok(());
        }

        let count = state.card_count();
        if count > 0 && !confirmed {
            let noun = if count == 1 { "card" } else { "cards" };
            return Err(DeckError::confirmation(format!(
                "Changing the deck type to {deck_type} will remove {count} {noun} from \"{}\"",
                state.name
            )));
        }

        info!(deck = %state.id, from = %state.deck_type, to = %deck_type, removed = count, "deck type changed");
        state.slots = DeckState::empty_slots(deck_type);
        state.deck_type = deck_type;
        state.ace = None;
        Ok(())
    }

    /// Reset the deck: no cards, no ace, default name, empty metadata.
    ///
    /// Id, deck type and creation time are kept.
    pub fn clear(&self, state: &mut DeckState) {
        info!(deck = %state.id, removed = state.card_count(), "deck cleared");
        state.slots = DeckState::empty_slots(state.deck_type);
        state.ace = None;
        state.name = self.config.default_deck_name.clone();
        state.metadata = DeckMetadata::default();
    }

    /// Rename the deck. A blank name falls back to the default name.
    pub fn rename(&self, state: &mut DeckState, name: &str) {
        let name = name.trim();
        state.name = if name.is_empty() {
            self.config.default_deck_name.clone()
        } else {
            name.to_string()
        };
    }

    pub fn set_metadata(&self, state: &mut DeckState, metadata: DeckMetadata) {
        state.metadata = metadata;
    }

    /// Enable or disable the friend slot.
    ///
    /// Disabling empties the friend slot. Returns the card removed, if any.
    pub fn set_friend_slot_enabled(
        &self,
        state: &mut DeckState,
        enabled: bool,
    ) -> DeckResult<Option<Card>> {
        state.friend_slot_enabled = enabled;
        match state.deck_type.friend_slot() {
            Some(friend) if !enabled => self.remove(state, friend),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardId, Rarity};

    fn service() -> DeckMutationService {
        DeckMutationService::default()
    }

    fn card(id: u32, name: &str) -> Card {
        Card::new(CardId::new(id), name, Rarity::SuperRare)
    }

    fn year1() -> DeckState {
        service().create_empty(DeckId::new(1), DeckType::Year1, 1_000)
    }

    #[test]
    fn test_place_initializes_power_level() {
        let svc = service();
        let mut deck = year1();

        svc.place(&mut deck, SlotId::new(1), card(1, "Aiko Hoshino")).unwrap();

        let slot = deck.slot(SlotId::new(1)).unwrap();
        assert_eq!(slot.card().unwrap().id, CardId::new(1));
        assert_eq!(slot.power_level(), Some(PowerLevel::MAX));
    }

    #[test]
    fn test_place_replacement_keeps_power_level() {
        let svc = service();
        let mut deck = year1();

        svc.place(&mut deck, SlotId::new(0), card(1, "Aiko Hoshino")).unwrap();
        svc.set_power_level(&mut deck, SlotId::new(0), 5).unwrap();
        svc.place(&mut deck, SlotId::new(0), card(2, "Aiko Hoshino")).unwrap();

        let slot = deck.slot(SlotId::new(0)).unwrap();
        assert_eq!(slot.card().unwrap().id, CardId::new(2));
        assert_eq!(slot.power_level(), Some(PowerLevel::clamped(5)));
    }

    #[test]
    fn test_place_rejected_leaves_state() {
        let svc = service();
        let mut deck = year1();
        let before = deck.clone();

        let err = svc
            .place(&mut deck, SlotId::new(0), card(1, "Yui Amano"))
            .unwrap_err();

        assert!(matches!(err, DeckError::Validation { ref reason } if reason.contains("Aiko Hoshino")));
        assert_eq!(deck, before);
    }

    #[test]
    fn test_place_unknown_slot() {
        let mut deck = year1();
        let err = service()
            .place(&mut deck, SlotId::new(77), card(1, "Aiko Hoshino"))
            .unwrap_err();
        assert_eq!(err, DeckError::NotFound { slot: SlotId::new(77) });
    }

    #[test]
    fn test_place_duplicate_card_rejected() {
        let svc = service();
        let mut deck = year1();

        svc.place(&mut deck, SlotId::new(1), card(1, "Aiko Hoshino")).unwrap();
        let err = svc
            .place(&mut deck, SlotId::new(2), card(1, "Aiko Hoshino"))
            .unwrap_err();

        assert!(matches!(err, DeckError::Validation { .. }));
        assert!(deck.slot(SlotId::new(2)).unwrap().is_empty());
    }

    #[test]
    fn test_remove_clears_ace() {
        let svc = service();
        let mut deck = year1();
        svc.place(&mut deck, SlotId::new(0), card(1, "Aiko Hoshino")).unwrap();
        svc.toggle_ace(&mut deck, SlotId::new(0)).unwrap();

        let removed = svc.remove(&mut deck, SlotId::new(0)).unwrap();

        assert_eq!(removed.unwrap().id, CardId::new(1));
        assert_eq!(deck.ace(), None);
        assert_eq!(deck.slot(SlotId::new(0)).unwrap().power_level(), None);
    }

    #[test]
    fn test_toggle_ace() {
        let svc = service();
        let mut deck = year1();

        // Empty slot: ignored
        assert_eq!(svc.toggle_ace(&mut deck, SlotId::new(0)).unwrap(), None);

        svc.place(&mut deck, SlotId::new(0), card(1, "Aiko Hoshino")).unwrap();
        assert_eq!(svc.toggle_ace(&mut deck, SlotId::new(0)).unwrap(), Some(SlotId::new(0)));
        assert!(deck.is_ace(SlotId::new(0)));

        assert_eq!(svc.toggle_ace(&mut deck, SlotId::new(0)).unwrap(), None);
    }

    #[test]
    fn test_set_power_level_clamps_and_ignores_empty() {
        let svc = service();
        let mut deck = year1();

        assert_eq!(svc.set_power_level(&mut deck, SlotId::new(0), 3).unwrap(), None);

        svc.place(&mut deck, SlotId::new(0), card(1, "Aiko Hoshino")).unwrap();
        assert_eq!(
            svc.set_power_level(&mut deck, SlotId::new(0), 40).unwrap(),
            Some(PowerLevel::MAX)
        );
        assert_eq!(
            svc.set_power_level(&mut deck, SlotId::new(0), -1).unwrap(),
            Some(PowerLevel::MIN)
        );
    }

    #[test]
    fn test_swap_same_slot_is_noop() {
        let svc = service();
        let mut deck = year1();
        svc.place(&mut deck, SlotId::new(0), card(1, "Aiko Hoshino")).unwrap();
        let before = deck.clone();

        let outcome = svc.swap(&mut deck, SlotId::new(0), SlotId::new(0)).unwrap();

        assert!(outcome.is_clean());
        assert_eq!(deck, before);
    }

    #[test]
    fn test_swap_moves_power_and_clears_emptied_ace() {
        let svc = service();
        let mut deck = year1();
        svc.place(&mut deck, SlotId::new(1), card(1, "Aiko Hoshino")).unwrap();
        svc.set_power_level(&mut deck, SlotId::new(1), 9).unwrap();
        svc.toggle_ace(&mut deck, SlotId::new(1)).unwrap();

        let outcome = svc.swap(&mut deck, SlotId::new(1), SlotId::new(2)).unwrap();

        assert!(outcome.is_clean());
        assert!(deck.slot(SlotId::new(1)).unwrap().is_empty());
        assert_eq!(
            deck.slot(SlotId::new(2)).unwrap().power_level(),
            Some(PowerLevel::clamped(9))
        );
        assert_eq!(deck.ace(), None);
    }

    #[test]
    fn test_swap_keeps_ace_on_its_slot() {
        let svc = service();
        let mut deck = year1();
        svc.place(&mut deck, SlotId::new(1), card(1, "Aiko Hoshino")).unwrap();
        svc.place(&mut deck, SlotId::new(2), card(2, "Aiko Hoshino")).unwrap();
        svc.toggle_ace(&mut deck, SlotId::new(1)).unwrap();

        let outcome = svc.swap(&mut deck, SlotId::new(1), SlotId::new(2)).unwrap();

        assert!(outcome.is_clean());
        assert_eq!(deck.card_at(SlotId::new(1)).unwrap().id, CardId::new(2));
        assert_eq!(deck.ace(), Some(SlotId::new(1)));
    }

    #[test]
    fn test_swap_clears_ace_on_vacated_slot() {
        let svc = service();
        let mut deck = year1();
        // Aiko fits Hana's slot 9 by unit; Hana fits nothing in Mei's slot 3
        svc.place(&mut deck, SlotId::new(3), card(1, "Aiko Hoshino")).unwrap();
        svc.place(&mut deck, SlotId::new(9), card(2, "Hana Mizuki")).unwrap();
        svc.toggle_ace(&mut deck, SlotId::new(3)).unwrap();

        let outcome = svc.swap(&mut deck, SlotId::new(3), SlotId::new(9)).unwrap();

        assert_eq!(outcome.vacated.len(), 1);
        assert_eq!(outcome.vacated[0].slot, SlotId::new(3));
        assert!(deck.slot(SlotId::new(3)).unwrap().is_empty());
        assert_eq!(deck.ace(), None);
    }

    #[test]
    fn test_swap_keeps_ace_when_other_side_vacated() {
        let svc = service();
        let mut deck = year1();
        svc.place(&mut deck, SlotId::new(3), card(1, "Aiko Hoshino")).unwrap();
        svc.place(&mut deck, SlotId::new(9), card(2, "Hana Mizuki")).unwrap();
        svc.toggle_ace(&mut deck, SlotId::new(9)).unwrap();

        svc.swap(&mut deck, SlotId::new(3), SlotId::new(9)).unwrap();

        assert_eq!(deck.card_at(SlotId::new(9)).unwrap().id, CardId::new(1));
        assert_eq!(deck.ace(), Some(SlotId::new(9)));
    }

    #[test]
    fn test_swap_with_disabled_friend_slot_rejected() {
        let svc = service();
        let mut deck = year1();
        svc.place(&mut deck, SlotId::new(0), card(1, "Aiko Hoshino")).unwrap();
        svc.set_friend_slot_enabled(&mut deck, false).unwrap();
        let before = deck.clone();

        let err = svc.swap(&mut deck, SlotId::new(0), SlotId::new(18)).unwrap_err();

        assert_eq!(err, DeckError::validation(FRIEND_SLOT_DISABLED));
        assert_eq!(deck, before);
        assert_eq!(deck.card_count(), 1);
    }

    #[test]
    fn test_swap_vacates_invalid_side() {
        let svc = service();
        let mut deck = year1();
        // Aiko (1st, Aurora) in her slot, Sora (2nd, Nocturne) in hers
        svc.place(&mut deck, SlotId::new(0), card(1, "Aiko Hoshino")).unwrap();
        svc.place(&mut deck, SlotId::new(12), card(2, "Sora Takeda")).unwrap();
        svc.toggle_ace(&mut deck, SlotId::new(12)).unwrap();

        let outcome = svc.swap(&mut deck, SlotId::new(0), SlotId::new(12)).unwrap();

        assert_eq!(outcome.vacated.len(), 2);
        assert!(deck.slot(SlotId::new(0)).unwrap().is_empty());
        assert!(deck.slot(SlotId::new(12)).unwrap().is_empty());
        assert_eq!(deck.ace(), None);
        assert!(deck.check_invariants().is_ok());
    }

    #[test]
    fn test_change_deck_type_needs_confirmation() {
        let svc = service();
        let mut deck = year1();
        svc.place(&mut deck, SlotId::new(0), card(1, "Aiko Hoshino")).unwrap();
        let before = deck.clone();

        let err = svc
            .change_deck_type(&mut deck, DeckType::Year3, false)
            .unwrap_err();
        assert!(err.requires_confirmation());
        assert!(err.to_string().contains("1 card"));
        assert_eq!(deck, before);

        svc.change_deck_type(&mut deck, DeckType::Year3, true).unwrap();
        assert_eq!(deck.deck_type(), DeckType::Year3);
        assert!(!deck.has_any_card());
        assert_eq!(deck.id(), before.id());
        assert_eq!(deck.created_at(), before.created_at());
        assert_eq!(deck.slots().count(), DeckType::Year3.topology().len());
    }

    #[test]
    fn test_change_deck_type_empty_deck_immediate() {
        let svc = service();
        let mut deck = year1();
        svc.change_deck_type(&mut deck, DeckType::Year2, false).unwrap();
        assert_eq!(deck.deck_type(), DeckType::Year2);
    }

    #[test]
    fn test_clear_resets_everything_but_identity() {
        let svc = service();
        let mut deck = year1();
        svc.rename(&mut deck, "Festival");
        svc.set_metadata(
            &mut deck,
            DeckMetadata {
                song: Some("Starlight".into()),
                score: Some(1_200_000),
                notes: "ace on Aiko".into(),
            },
        );
        svc.place(&mut deck, SlotId::new(0), card(1, "Aiko Hoshino")).unwrap();
        svc.toggle_ace(&mut deck, SlotId::new(0)).unwrap();

        svc.clear(&mut deck);

        assert!(!deck.has_any_card());
        assert_eq!(deck.ace(), None);
        assert_eq!(deck.name(), svc.config().default_deck_name);
        assert!(deck.metadata().is_empty());
        assert_eq!(deck.deck_type(), DeckType::Year1);
        assert_eq!(deck.id(), DeckId::new(1));
    }

    #[test]
    fn test_rename_blank_falls_back() {
        let svc = service();
        let mut deck = year1();
        svc.rename(&mut deck, "  Encore  ");
        assert_eq!(deck.name(), "Encore");
        svc.rename(&mut deck, "   ");
        assert_eq!(deck.name(), svc.config().default_deck_name);
    }

    #[test]
    fn test_disabling_friend_slot_empties_it() {
        let svc = service();
        let mut deck = year1();
        let friend = DeckType::Year1.friend_slot().unwrap();
        svc.place(&mut deck, friend, card(1, "Ran Oda")).unwrap();
        svc.toggle_ace(&mut deck, friend).unwrap();

        let removed = svc.set_friend_slot_enabled(&mut deck, false).unwrap();

        assert_eq!(removed.unwrap().id, CardId::new(1));
        assert_eq!(deck.ace(), None);
        let err = svc.place(&mut deck, friend, card(2, "Ran Oda")).unwrap_err();
        assert!(matches!(err, DeckError::Validation { .. }));
    }

    #[test]
    fn test_place_or_move_relocates_card() {
        let svc = service();
        let mut deck = year1();
        let aiko = card(1, "Aiko Hoshino");
        svc.place(&mut deck, SlotId::new(1), aiko.clone()).unwrap();
        svc.place(&mut deck, SlotId::new(0), card(2, "Aiko Hoshino")).unwrap();

        let outcome = svc.place_or_move(&mut deck, SlotId::new(0), aiko).unwrap();

        assert!(outcome.is_clean());
        assert_eq!(deck.card_at(SlotId::new(0)).unwrap().id, CardId::new(1));
        assert_eq!(deck.card_at(SlotId::new(1)).unwrap().id, CardId::new(2));
    }
}
