//! # rhythm-deck
//!
//! Deck composition engine for a collectible-card rhythm game.
//!
//! A deck is a fixed set of slots, each reserved for a character (or for
//! any card, in the case of `free` and `friend` slots). This crate decides
//! which cards may occupy which slot and keeps the deck consistent across
//! every edit.
//!
//! ## Design Principles
//!
//! 1. **Data-Driven**: Slot layouts and placement exceptions are static
//!    tables. Adding a deck type means adding a table, not logic.
//!
//! 2. **Explicit State**: A `DeckState` is a value passed into every
//!    operation. Nothing is global; the controller owns the one current deck.
//!
//! 3. **Errors As Values**: Rule violations, pending confirmations and
//!    unknown slots are `DeckError` values. A failed operation never leaves
//!    partial state behind.
//!
//! ## Modules
//!
//! - `roster`: Characters, generations, units, composite names
//! - `cards`: Cards and the catalog collaborator
//! - `topology`: Slot tables and frames per deck type
//! - `rules`: Placement rule engine and exception table
//! - `deck`: Deck state, mutation service, snapshots
//! - `controller`: Current deck, tabs, persistence
//! - `config`: Engine configuration
//! - `error`: Error values

pub mod cards;
pub mod config;
pub mod controller;
pub mod deck;
pub mod error;
pub mod roster;
pub mod rules;
pub mod topology;

// Re-export commonly used types
pub use crate::cards::{Card, CardCatalog, CardId, CardRegistry, Rarity};
pub use crate::config::DeckConfig;
pub use crate::controller::{DeckController, DeckStore, MemoryStore};
pub use crate::deck::{
    DeckId, DeckMetadata, DeckMutationService, DeckSnapshot, DeckState, PowerLevel, SlotInstance,
    SwapOutcome,
};
pub use crate::error::{DeckError, DeckResult};
pub use crate::roster::{Generation, Unit};
pub use crate::rules::{Placement, PlacementRuleEngine, PlacementRules};
pub use crate::topology::{DeckType, SlotEntry, SlotId, SlotRole};
