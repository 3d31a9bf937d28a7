//! Deck state, its mutations and its persisted form.
//!
//! ## Key Types
//!
//! - `DeckState`: One deck: slots, ace, deck type, metadata
//! - `SlotInstance`: One slot and its optional occupant
//! - `PowerLevel`: Per-card counter, always within 1..=14
//! - `DeckMutationService`: The only way to change a `DeckState`
//! - `DeckSnapshot`: Persisted form, holding card ids instead of cards
//!
//! ## Invariants
//!
//! - Every slot instance belongs to the active topology
//! - A slot holds at most one card, and a power level exactly when it does
//! - The ace, if set, points at an occupied slot
//! - No card id occupies two slots

pub mod mutation;
pub mod snapshot;
pub mod state;

pub use mutation::{DeckMutationService, SwapOutcome, VacatedSlot};
pub use snapshot::{DeckSnapshot, SlotSnapshot};
pub use state::{DeckId, DeckMetadata, DeckState, Occupant, PowerLevel, SlotInstance};
