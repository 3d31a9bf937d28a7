//! Character roster: who belongs to which generation and unit.
//!
//! Cards never store their generation or unit. Both are resolved from the
//! card's character name by table lookup, so adding a character means
//! adding one row to the roster table and nothing else.
//!
//! ## Composite names
//!
//! A composite card represents several characters at once. Its character
//! name joins the individual names with [`COMPOSITE_DELIMITER`], e.g.
//! `"Nana Fujii & Ayane Sakaki"`. A composite name resolves to a generation
//! (or unit) only when every constituent belongs to that same group.

pub mod character;

pub use character::{
    is_composite, lookup, resolve_groups, split_composite, CharacterIdentity, Generation, Groups,
    Unit, COMPOSITE_DELIMITER, ROSTER,
};
