//! Placement rules: which card may occupy which slot.
//!
//! The decision is a pure function of the card's character name and
//! rarity, the slot id and the deck type. Evaluation order:
//!
//! 1. Unknown slot: rejected.
//! 2. `free` / `friend` slots: accepted.
//! 3. Base rule: same character, same generation or same unit.
//! 4. Exception table, in priority order. The first rule whose trigger
//!    matches decides the outcome; later rules are never consulted.
//! 5. Nothing matched: rejected, naming the slot's character.
//!
//! `PlacementRuleEngine` is stateless and safe to share across threads.

pub mod engine;
pub mod exceptions;

pub use engine::{Placement, PlacementRuleEngine, PlacementRules};
pub use exceptions::{ExceptionRule, GroupMatch, PlacementCondition, RuleTrigger, STANDARD_RULES};
