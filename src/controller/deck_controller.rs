//! The deck controller.

use std::time::{SystemTime, UNIX_EPOCH};

use tracing::{debug, info};

use crate::cards::{Card, CardCatalog};
use crate::config::DeckConfig;
use crate::deck::{DeckId, DeckMetadata, DeckMutationService, DeckState, PowerLevel, SwapOutcome};
use crate::error::{DeckError, DeckResult};
use crate::rules::{PlacementRuleEngine, PlacementRules};
use crate::topology::{DeckType, Frame, SlotId};

use super::ids::DeckIdAllocator;
use super::store::DeckStore;
use super::tabs::DeckTabs;

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Binds the mutation service to one current deck.
///
/// Every mutating method either fails without touching the deck, or
/// succeeds and then saves the full snapshot and writes the deck back into
/// the active tab. Read queries never persist.
///
/// ## Example
///
/// ```
/// use rhythm_deck::cards::{Card, CardId, CardRegistry, Rarity};
/// use rhythm_deck::config::DeckConfig;
/// use rhythm_deck::controller::{DeckController, MemoryStore};
/// use rhythm_deck::topology::{DeckType, SlotId};
///
/// let mut controller = DeckController::new(
///     DeckConfig::default(),
///     DeckType::Year1,
///     MemoryStore::new(),
///     CardRegistry::new(),
/// );
///
/// let card = Card::new(CardId::new(1), "Aiko Hoshino", Rarity::Legend);
/// controller.place(SlotId::new(0), card).unwrap();
///
/// assert!(controller.has_any_card());
/// assert_eq!(controller.store().writes(), 1);
/// ```
pub struct DeckController<S, C, R = PlacementRuleEngine> {
    service: DeckMutationService<R>,
    store: S,
    catalog: C,
    ids: DeckIdAllocator,
    current: DeckState,
    tabs: DeckTabs,
}

impl<S: DeckStore, C: CardCatalog> DeckController<S, C> {
    /// Controller with the standard rules and an empty current deck.
    #[must_use]
    pub fn new(config: DeckConfig, deck_type: DeckType, store: S, catalog: C) -> Self {
        Self::with_service(DeckMutationService::new(config), deck_type, store, catalog)
    }
}

impl<S: DeckStore, C: CardCatalog, R: PlacementRules> DeckController<S, C, R> {
    /// Controller over a custom mutation service.
    ///
    /// The initial empty deck is not saved until it is first mutated.
    #[must_use]
    pub fn with_service(
        service: DeckMutationService<R>,
        deck_type: DeckType,
        store: S,
        catalog: C,
    ) -> Self {
        let mut ids = DeckIdAllocator::new(service.config().id_seed);
        let current = service.create_empty(ids.next_id(), deck_type, now_millis());
        let tabs = DeckTabs::new(service.config().max_tabs);
        Self {
            service,
            store,
            catalog,
            ids,
            current,
            tabs,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn current(&self) -> &DeckState {
        &self.current
    }

    pub fn service(&self) -> &DeckMutationService<R> {
        &self.service
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn tabs(&self) -> &DeckTabs {
        &self.tabs
    }

    // === Persistence ===

    /// Write the current deck back into its tab and save its snapshot.
    fn commit(&mut self) -> DeckResult<()> {
        self.tabs.write_back(&self.current);
        self.store.save(&self.current.snapshot())
    }

    /// Run one mutation and commit it if it succeeded.
    fn mutate<T>(
        &mut self,
        op: impl FnOnce(&DeckMutationService<R>, &mut DeckState) -> DeckResult<T>,
    ) -> DeckResult<T> {
        let value = op(&self.service, &mut self.current)?;
        self.commit()?;
        Ok(value)
    }

    // === Mutations ===

    /// Put a card into a slot, moving it there if it already sits elsewhere.
    pub fn place(&mut self, slot: SlotId, card: Card) -> DeckResult<SwapOutcome> {
        self.mutate(|svc, deck| svc.place_or_move(deck, slot, card))
    }

    pub fn remove(&mut self, slot: SlotId) -> DeckResult<Option<Card>> {
        self.mutate(|svc, deck| svc.remove(deck, slot))
    }

    pub fn swap(&mut self, a: SlotId, b: SlotId) -> DeckResult<SwapOutcome> {
        self.mutate(|svc, deck| svc.swap(deck, a, b))
    }

    pub fn toggle_ace(&mut self, slot: SlotId) -> DeckResult<Option<SlotId>> {
        self.mutate(|svc, deck| svc.toggle_ace(deck, slot))
    }

    pub fn set_power_level(&mut self, slot: SlotId, value: i64) -> DeckResult<Option<PowerLevel>> {
        self.mutate(|svc, deck| svc.set_power_level(deck, slot, value))
    }

    /// Change the deck type.
    ///
    /// Returns `ConfirmationRequired` on a deck holding cards; call again
    /// with `confirmed` set once the user agreed.
    pub fn change_deck_type(&mut self, deck_type: DeckType, confirmed: bool) -> DeckResult<()> {
        self.mutate(|svc, deck| svc.change_deck_type(deck, deck_type, confirmed))
    }

    pub fn clear(&mut self) -> DeckResult<()> {
        self.mutate(|svc, deck| {
            svc.clear(deck);
            Ok(())
        })
    }

    pub fn rename(&mut self, name: &str) -> DeckResult<()> {
        self.mutate(|svc, deck| {
            svc.rename(deck, name);
            Ok(())
        })
    }

    pub fn set_metadata(&mut self, metadata: DeckMetadata) -> DeckResult<()> {
        self.mutate(|svc, deck| {
            svc.set_metadata(deck, metadata);
            Ok(())
        })
    }

    pub fn set_friend_slot_enabled(&mut self, enabled: bool) -> DeckResult<Option<Card>> {
        self.mutate(|svc, deck| svc.set_friend_slot_enabled(deck, enabled))
    }

    // === Deck Lifecycle ===

    /// Replace the current deck with a new empty one.
    pub fn new_deck(&mut self, deck_type: DeckType) -> DeckResult<DeckId> {
        let id = self.ids.next_id();
        self.current = self.service.create_empty(id, deck_type, now_millis());
        info!(deck = %id, %deck_type, "new deck");
        self.commit()?;
        Ok(id)
    }

    /// Load a stored deck as the current deck.
    ///
    /// Card ids are resolved through the catalog. The active tab, if any,
    /// now shows the loaded deck.
    pub fn load(&mut self, id: DeckId) -> DeckResult<()> {
        let snapshot = self.store.load(id)?.ok_or(DeckError::UnknownDeck(id))?;
        self.current = snapshot.restore(&self.catalog, self.service.config())?;
        self.tabs.write_back(&self.current);
        Ok(())
    }

    // === Tabs ===

    /// Open a tab holding a new empty deck and make it current.
    pub fn open_tab(&mut self, name: &str, deck_type: DeckType) -> DeckResult<DeckId> {
        let id = self.ids.next_id();
        let deck = self.service.create_empty(id, deck_type, now_millis());
        self.tabs.open(name, deck.clone())?;
        self.current = deck;
        info!(tab = name, deck = %id, "tab opened");
        self.commit()?;
        Ok(id)
    }

    /// Make a tab's deck current.
    pub fn switch_tab(&mut self, name: &str) -> DeckResult<()> {
        self.current = self.tabs.activate(name)?.clone();
        debug!(tab = name, deck = %self.current.id(), "tab switched");
        Ok(())
    }

    /// Close a tab. The current deck is kept even if it was that tab's.
    pub fn close_tab(&mut self, name: &str) -> DeckResult<()> {
        self.tabs.close(name)?;
        info!(tab = name, "tab closed");
        Ok(())
    }

    #[must_use]
    pub fn active_tab(&self) -> Option<&str> {
        self.tabs.active_name()
    }

    #[must_use]
    pub fn tab_names(&self) -> Vec<&str> {
        self.tabs.names().collect()
    }

    // === Queries ===

    #[must_use]
    pub fn unresolved_main_slots(&self) -> Vec<SlotId> {
        self.current.unresolved_main_slots()
    }

    #[must_use]
    pub fn has_any_card(&self) -> bool {
        self.current.has_any_card()
    }

    #[must_use]
    pub fn is_ace(&self, slot: SlotId) -> bool {
        self.current.is_ace(slot)
    }

    /// Slots of the current deck the card may occupy.
    ///
    /// A disabled friend slot is never listed.
    #[must_use]
    pub fn eligible_slots(&self, card: &Card) -> Vec<SlotId> {
        let deck_type = self.current.deck_type();
        let mut slots = self.service.rules().eligible_slots(card, deck_type);
        if !self.current.friend_slot_enabled() {
            slots.retain(|&slot| Some(slot) != deck_type.friend_slot());
        }
        slots
    }

    #[must_use]
    pub fn frame(&self) -> Frame {
        self.current.deck_type().frame()
    }
}
