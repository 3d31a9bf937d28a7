//! Persisted deck snapshots.
//!
//! A snapshot stores card ids, not cards. Restoring compiles it back into a
//! `DeckState` by fetching the cards from a `CardCatalog` in one batch.
//!
//! ## Round-trip rules
//!
//! - Slot assignments are reproduced exactly; placement rules are not
//!   re-checked
//! - Snapshot slots unknown to the current topology are ignored
//! - Topology slots missing from the snapshot are empty
//! - Card ids the catalog cannot resolve leave their slot empty
//! - A card id listed twice keeps its first slot only
//! - A disabled friend slot is restored empty
//! - The ace survives only if its slot ends up occupied

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::cards::{CardCatalog, CardId};
use crate::config::DeckConfig;
use crate::error::DeckResult;
use crate::topology::{DeckType, SlotId};

use super::state::{DeckId, DeckMetadata, DeckState, Occupant, PowerLevel};

/// One occupied slot in a snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotSnapshot {
    pub slot_id: SlotId,
    pub card_id: CardId,
    #[serde(default)]
    pub power_level: Option<PowerLevel>,
}

/// Persisted form of a deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckSnapshot {
    pub id: DeckId,
    pub name: String,
    pub deck_type: DeckType,
    pub slots: Vec<SlotSnapshot>,
    #[serde(default)]
    pub ace_slot_id: Option<SlotId>,
    #[serde(default = "enabled")]
    pub friend_slot_enabled: bool,
    #[serde(default)]
    pub metadata: DeckMetadata,
    #[serde(default)]
    pub created_at: u64,
}

fn enabled() -> bool {
    true
}

impl DeckState {
    /// Capture this deck as a snapshot.
    #[must_use]
    pub fn snapshot(&self) -> DeckSnapshot {
        DeckSnapshot {
            id: self.id,
            name: self.name.clone(),
            deck_type: self.deck_type,
            slots: self
                .slots
                .iter()
                .filter_map(|s| {
                    s.occupant.as_ref().map(|o| SlotSnapshot {
                        slot_id: s.slot_id,
                        card_id: o.card.id,
                        power_level: Some(o.power_level),
                    })
                })
                .collect(),
            ace_slot_id: self.ace,
            friend_slot_enabled: self.friend_slot_enabled,
            metadata: self.metadata.clone(),
            created_at: self.created_at,
        }
    }
}

impl DeckSnapshot {
    /// Encode as JSON.
    pub fn to_json(&self) -> DeckResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode from JSON.
    pub fn from_json(json: &str) -> DeckResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encode as compact binary.
    pub fn to_bytes(&self) -> DeckResult<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from compact binary.
    pub fn from_bytes(bytes: &[u8]) -> DeckResult<Self> {
        Ok(bincode::deserialize(bytes)?)
    }

    /// Card ids referenced by this snapshot, without duplicates.
    #[must_use]
    pub fn card_ids(&self) -> Vec<CardId> {
        let mut seen = FxHashSet::default();
        self.slots
            .iter()
            .map(|s| s.card_id)
            .filter(|id| seen.insert(*id))
            .collect()
    }

    /// Compile this snapshot back into a deck.
    ///
    /// Occupied slots without a stored power level get the configured
    /// initial level.
    pub fn restore<C: CardCatalog + ?Sized>(
        &self,
        catalog: &C,
        config: &DeckConfig,
    ) -> DeckResult<DeckState> {
        let ids = self.card_ids();
        let cards: FxHashMap<CardId, _> = catalog
            .fetch_cards_by_ids(&ids)?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();

        let mut deck = DeckState::new(self.id, self.deck_type)
            .with_name(self.name.clone())
            .with_created_at(self.created_at)
            .with_friend_slot_enabled(self.friend_slot_enabled);
        deck.metadata = self.metadata.clone();

        let disabled_friend = self
            .deck_type
            .friend_slot()
            .filter(|_| !self.friend_slot_enabled);
        let mut placed = FxHashSet::default();
        for stored in &self.slots {
            let Some(index) = deck.index_of(stored.slot_id) else {
                warn!(deck = %self.id, slot = %stored.slot_id, "dropping slot unknown to {}", self.deck_type);
                continue;
            };
            if disabled_friend == Some(stored.slot_id) {
                warn!(deck = %self.id, slot = %stored.slot_id, card = %stored.card_id, "dropping card in disabled friend slot");
                continue;
            }
            let Some(card) = cards.get(&stored.card_id) else {
                warn!(deck = %self.id, slot = %stored.slot_id, card = %stored.card_id, "dropping card missing from catalog");
                continue;
            };
            if !placed.insert(stored.card_id) {
                warn!(deck = %self.id, slot = %stored.slot_id, card = %stored.card_id, "dropping duplicate card");
                continue;
            }
            deck.slots[index].occupant = Some(Occupant {
                card: card.clone(),
                power_level: stored.power_level.unwrap_or(config.initial_power_level),
            });
        }

        let ace = self.ace_slot_id.filter(|&slot| deck.card_at(slot).is_some());
        deck.ace = ace;

        info!(deck = %self.id, cards = deck.card_count(), "deck restored");
        Ok(deck)
    }
}
