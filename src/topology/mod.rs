//! Slot topology: the fixed slot layout of each deck type.
//!
//! A deck type selects one static table of `SlotEntry` rows and one frame
//! (visual clustering). Rule evaluation only reads the table; the frame is
//! for presentation.
//!
//! Adding a deck type means adding a table and a frame in `tables.rs` and
//! a variant here. Nothing in the rule engine or mutation layer changes.

pub mod frame;
mod tables;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DeckError;
use crate::roster::{self, CharacterIdentity};

pub use frame::{Cluster, Frame};

/// Slot identifier, unique within one deck type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SlotId(pub u16);

impl SlotId {
    /// Create a new slot ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Slot({})", self.0)
    }
}

/// Role of a slot within its cluster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotRole {
    Main,
    Side,
}

impl fmt::Display for SlotRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotRole::Main => f.write_str("main"),
            SlotRole::Side => f.write_str("side"),
        }
    }
}

/// Who a slot is reserved for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotAssignment {
    /// A specific character.
    Character(&'static str),
    /// Accepts any card.
    Free,
    /// Friend's card; accepts any card and may be disabled per deck.
    Friend,
}

impl SlotAssignment {
    /// Generic roles accept every card.
    #[must_use]
    pub const fn is_generic(self) -> bool {
        matches!(self, SlotAssignment::Free | SlotAssignment::Friend)
    }

    /// The assigned character's roster entry, if any.
    #[must_use]
    pub fn character(self) -> Option<&'static CharacterIdentity> {
        match self {
            SlotAssignment::Character(name) => roster::lookup(name),
            _ => None,
        }
    }
}

impl fmt::Display for SlotAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotAssignment::Character(name) => f.write_str(name),
            SlotAssignment::Free => f.write_str("free"),
            SlotAssignment::Friend => f.write_str("friend"),
        }
    }
}

/// One row of a slot topology table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlotEntry {
    pub id: SlotId,
    pub assignment: SlotAssignment,
    pub role: SlotRole,
    /// Display position; opaque to the engine.
    pub row: u8,
    pub col: u8,
}

impl SlotEntry {
    #[must_use]
    pub const fn new(
        id: SlotId,
        assignment: SlotAssignment,
        role: SlotRole,
        row: u8,
        col: u8,
    ) -> Self {
        Self {
            id,
            assignment,
            role,
            row,
            col,
        }
    }

    #[must_use]
    pub const fn is_main(&self) -> bool {
        matches!(self.role, SlotRole::Main)
    }

    #[must_use]
    pub const fn is_friend(&self) -> bool {
        matches!(self.assignment, SlotAssignment::Friend)
    }
}

/// Deck type: selects a slot topology and a frame.
///
/// Serialized by its stable kebab-case name (`"year2-feat-mei"`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeckType {
    Year1,
    Year2,
    Year2FeatMei,
    #[default]
    Year3,
    Year3FeatIzumi,
}

impl DeckType {
    /// Every deck type, in selector order.
    pub const ALL: [DeckType; 5] = [
        DeckType::Year1,
        DeckType::Year2,
        DeckType::Year2FeatMei,
        DeckType::Year3,
        DeckType::Year3FeatIzumi,
    ];

    /// Stable name used in snapshots and selectors.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            DeckType::Year1 => "year1",
            DeckType::Year2 => "year2",
            DeckType::Year2FeatMei => "year2-feat-mei",
            DeckType::Year3 => "year3",
            DeckType::Year3FeatIzumi => "year3-feat-izumi",
        }
    }

    /// Ordered slot table for this deck type.
    #[must_use]
    pub fn topology(self) -> &'static [SlotEntry] {
        match self {
            DeckType::Year1 => tables::YEAR1,
            DeckType::Year2 => tables::YEAR2,
            DeckType::Year2FeatMei => tables::YEAR2_FEAT_MEI,
            DeckType::Year3 => tables::YEAR3,
            DeckType::Year3FeatIzumi => tables::YEAR3_FEAT_IZUMI,
        }
    }

    /// Visual clustering of the slots.
    #[must_use]
    pub fn frame(self) -> Frame {
        let clusters = match self {
            DeckType::Year1 => tables::YEAR1_FRAME,
            DeckType::Year2 => tables::YEAR2_FRAME,
            DeckType::Year2FeatMei => tables::YEAR2_FEAT_MEI_FRAME,
            DeckType::Year3 => tables::YEAR3_FRAME,
            DeckType::Year3FeatIzumi => tables::YEAR3_FEAT_IZUMI_FRAME,
        };
        Frame::new(clusters)
    }

    /// Look up one slot of this deck type.
    #[must_use]
    pub fn entry(self, slot: SlotId) -> Option<&'static SlotEntry> {
        self.topology().iter().find(|e| e.id == slot)
    }

    #[must_use]
    pub fn contains(self, slot: SlotId) -> bool {
        self.entry(slot).is_some()
    }

    /// The friend slot of this deck type, if it has one.
    #[must_use]
    pub fn friend_slot(self) -> Option<SlotId> {
        self.topology().iter().find(|e| e.is_friend()).map(|e| e.id)
    }
}

impl fmt::Display for DeckType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DeckType {
    type Err = DeckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| DeckError::validation(format!("unknown deck type {s:?}")))
    }
}
