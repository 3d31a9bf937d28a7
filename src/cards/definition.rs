//! Card definitions as supplied by the catalog.

use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::roster::{self, Groups};

/// Catalog identifier of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Card rarity, ordered from lowest to highest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rarity {
    #[default]
    #[serde(rename = "R")]
    Rare,
    #[serde(rename = "SR")]
    SuperRare,
    #[serde(rename = "UR")]
    UltraRare,
    #[serde(rename = "LR")]
    Legend,
}

impl Rarity {
    /// The highest rarity a card can have.
    pub const TOP: Rarity = Rarity::Legend;

    /// Short code used by the catalog ("SR").
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Rarity::Rare => "R",
            Rarity::SuperRare => "SR",
            Rarity::UltraRare => "UR",
            Rarity::Legend => "LR",
        }
    }

    #[must_use]
    pub fn is_top(self) -> bool {
        self == Self::TOP
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A card from the catalog.
///
/// ## Example
///
/// ```
/// use rhythm_deck::cards::{Card, CardId, Rarity};
///
/// let card = Card::new(CardId::new(7), "Nana Fujii", Rarity::Legend)
///     .with_title("Midnight Lantern")
///     .with_attr("appeal", "4200");
///
/// assert!(card.rarity.is_top());
/// assert_eq!(card.attr("appeal"), Some("4200"));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,

    /// Card title (display only).
    #[serde(default)]
    pub title: String,

    /// Character name; composite cards join several names.
    pub character_name: String,

    pub rarity: Rarity,

    /// Catalog attributes the engine never interprets.
    #[serde(default)]
    pub attributes: FxHashMap<String, String>,
}

impl Card {
    /// Create a new card.
    #[must_use]
    pub fn new(id: CardId, character_name: impl Into<String>, rarity: Rarity) -> Self {
        Self {
            id,
            title: String::new(),
            character_name: character_name.into(),
            rarity,
            attributes: FxHashMap::default(),
        }
    }

    /// Set the title (builder pattern).
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Add an opaque attribute (builder pattern).
    #[must_use]
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Get an opaque attribute.
    #[must_use]
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Check if this card represents several characters.
    #[must_use]
    pub fn is_composite(&self) -> bool {
        roster::is_composite(&self.character_name)
    }

    /// Generation and unit of this card's character(s).
    #[must_use]
    pub fn groups(&self) -> Groups {
        roster::resolve_groups(&self.character_name)
    }
}
