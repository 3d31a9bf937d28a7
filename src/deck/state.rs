//! Deck state.
//!
//! `DeckState` is a plain value. Slots live in an `im::Vector`, so the
//! mutation layer can clone the slot list in O(1), edit the copy and commit
//! it in one assignment.

use std::fmt;

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId};
use crate::config::DEFAULT_DECK_NAME;
use crate::error::{DeckError, DeckResult};
use crate::topology::{DeckType, SlotEntry, SlotId};

/// Identifier of a deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeckId(pub u64);

impl DeckId {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for DeckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Deck({:016x})", self.0)
    }
}

/// Power level of a placed card, always within `MIN..=MAX`.
///
/// Deserializing an out-of-range value clamps it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub struct PowerLevel(u8);

impl PowerLevel {
    pub const MIN: PowerLevel = PowerLevel(1);
    pub const MAX: PowerLevel = PowerLevel(14);

    /// Clamp any integer into the valid range.
    #[must_use]
    pub fn clamped(value: i64) -> Self {
        // Clamped first, so the cast cannot truncate
        Self(value.clamp(Self::MIN.0 as i64, Self::MAX.0 as i64) as u8)
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl Default for PowerLevel {
    fn default() -> Self {
        Self::MAX
    }
}

impl From<u8> for PowerLevel {
    fn from(value: u8) -> Self {
        Self::clamped(value as i64)
    }
}

impl From<PowerLevel> for u8 {
    fn from(level: PowerLevel) -> Self {
        level.0
    }
}

impl From<i64> for PowerLevel {
    fn from(value: i64) -> Self {
        Self::clamped(value)
    }
}

impl From<PowerLevel> for i64 {
    fn from(level: PowerLevel) -> Self {
        i64::from(level.0)
    }
}

impl fmt::Display for PowerLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Lv.{}", self.0)
    }
}

/// A placed card and its power level.
///
/// Keeping both in one value makes "power level present iff card present"
/// hold by construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Occupant {
    pub card: Card,
    pub power_level: PowerLevel,
}

/// One slot of a deck.
#[derive(Clone, Debug, PartialEq)]
pub struct SlotInstance {
    pub slot_id: SlotId,
    pub occupant: Option<Occupant>,
}

impl SlotInstance {
    /// Create an empty slot.
    #[must_use]
    pub fn empty(slot_id: SlotId) -> Self {
        Self {
            slot_id,
            occupant: None,
        }
    }

    #[must_use]
    pub fn card(&self) -> Option<&Card> {
        self.occupant.as_ref().map(|o| &o.card)
    }

    #[must_use]
    pub fn power_level(&self) -> Option<PowerLevel> {
        self.occupant.as_ref().map(|o| o.power_level)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }
}

/// Opaque deck metadata.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckMetadata {
    pub song: Option<String>,
    pub score: Option<u64>,
    pub notes: String,
}

impl DeckMetadata {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// One deck.
///
/// Read freely through the accessors; change only through
/// `DeckMutationService`.
#[derive(Clone, Debug, PartialEq)]
pub struct DeckState {
    pub(super) id: DeckId,
    pub(super) name: String,
    pub(super) deck_type: DeckType,
    pub(super) slots: Vector<SlotInstance>,
    pub(super) ace: Option<SlotId>,
    pub(super) friend_slot_enabled: bool,
    pub(super) metadata: DeckMetadata,
    pub(super) created_at: u64,
}

impl DeckState {
    /// Create an empty deck: one cardless slot per topology entry.
    #[must_use]
    pub fn new(id: DeckId, deck_type: DeckType) -> Self {
        Self {
            id,
            name: DEFAULT_DECK_NAME.to_string(),
            deck_type,
            slots: Self::empty_slots(deck_type),
            ace: None,
            friend_slot_enabled: true,
            metadata: DeckMetadata::default(),
            created_at: 0,
        }
    }

    /// Set the name (builder pattern).
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the creation timestamp in milliseconds (builder pattern).
    #[must_use]
    pub fn with_created_at(mut self, created_at: u64) -> Self {
        self.created_at = created_at;
        self
    }

    /// Set the friend slot flag (builder pattern).
    #[must_use]
    pub fn with_friend_slot_enabled(mut self, enabled: bool) -> Self {
        self.friend_slot_enabled = enabled;
        self
    }

    pub(super) fn empty_slots(deck_type: DeckType) -> Vector<SlotInstance> {
        deck_type
            .topology()
            .iter()
            .map(|e| SlotInstance::empty(e.id))
            .collect()
    }

    // === Accessors ===

    #[must_use]
    pub fn id(&self) -> DeckId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn deck_type(&self) -> DeckType {
        self.deck_type
    }

    #[must_use]
    pub fn ace(&self) -> Option<SlotId> {
        self.ace
    }

    #[must_use]
    pub fn is_ace(&self, slot: SlotId) -> bool {
        self.ace == Some(slot)
    }

    #[must_use]
    pub fn friend_slot_enabled(&self) -> bool {
        self.friend_slot_enabled
    }

    #[must_use]
    pub fn metadata(&self) -> &DeckMetadata {
        &self.metadata
    }

    #[must_use]
    pub fn created_at(&self) -> u64 {
        self.created_at
    }

    /// Slots in topology order.
    pub fn slots(&self) -> impl Iterator<Item = &SlotInstance> {
        self.slots.iter()
    }

    #[must_use]
    pub fn slot(&self, slot: SlotId) -> Option<&SlotInstance> {
        self.slots.iter().find(|s| s.slot_id == slot)
    }

    /// The card in a slot, if any.
    #[must_use]
    pub fn card_at(&self, slot: SlotId) -> Option<&Card> {
        self.slot(slot).and_then(SlotInstance::card)
    }

    pub(super) fn index_of(&self, slot: SlotId) -> Option<usize> {
        self.slots.iter().position(|s| s.slot_id == slot)
    }

    /// Index of a slot, or `NotFound`.
    pub(super) fn require(&self, slot: SlotId) -> DeckResult<usize> {
        self.index_of(slot).ok_or(DeckError::NotFound { slot })
    }

    /// Topology row of a slot.
    #[must_use]
    pub fn entry(&self, slot: SlotId) -> Option<&'static SlotEntry> {
        self.deck_type.entry(slot)
    }

    // === Derived Queries ===

    /// Number of occupied slots.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.slots.iter().filter(|s| !s.is_empty()).count()
    }

    #[must_use]
    pub fn has_any_card(&self) -> bool {
        self.slots.iter().any(|s| !s.is_empty())
    }

    /// Card ids in topology order.
    #[must_use]
    pub fn occupied_card_ids(&self) -> Vec<CardId> {
        self.slots.iter().filter_map(|s| s.card()).map(|c| c.id).collect()
    }

    /// Which slot holds a card, if any.
    #[must_use]
    pub fn slot_of_card(&self, card: CardId) -> Option<SlotId> {
        self.slots
            .iter()
            .find(|s| s.card().is_some_and(|c| c.id == card))
            .map(|s| s.slot_id)
    }

    /// Main slots still waiting for a card.
    ///
    /// A disabled friend slot is intentionally empty and not listed.
    #[must_use]
    pub fn unresolved_main_slots(&self) -> Vec<SlotId> {
        self.slots
            .iter()
            .filter(|s| s.is_empty())
            .filter_map(|s| self.entry(s.slot_id))
            .filter(|e| e.is_main())
            .filter(|e| !(e.is_friend() && !self.friend_slot_enabled))
            .map(|e| e.id)
            .collect()
    }

    /// Check every deck invariant.
    ///
    /// Returns the first violation found, described as a `Validation` error.
    pub fn check_invariants(&self) -> DeckResult<()> {
        let topology = self.deck_type.topology();
        if self.slots.len() != topology.len() {
            return Err(DeckError::validation(format!(
                "deck has {} slots, topology has {}",
                self.slots.len(),
                topology.len()
            )));
        }

        let mut seen = rustc_hash::FxHashSet::default();
        for (instance, entry) in self.slots.iter().zip(topology) {
            if instance.slot_id != entry.id {
                return Err(DeckError::validation(format!(
                    "{} is out of topology order",
                    instance.slot_id
                )));
            }
            if let Some(card) = instance.card() {
                if !seen.insert(card.id) {
                    return Err(DeckError::validation(format!("{} placed twice", card.id)));
                }
            }
        }

        if let Some(ace) = self.ace {
            if self.card_at(ace).is_none() {
                return Err(DeckError::validation(format!("ace {ace} is empty")));
            }
        }

        Ok(())
    }
}
