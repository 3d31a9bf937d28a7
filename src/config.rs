//! Engine configuration.
//!
//! `DeckConfig` holds the few tunables of the deck engine. It is built
//! once at startup and shared by the mutation service and the controller.

use serde::{Deserialize, Serialize};

use crate::deck::PowerLevel;

/// Name given to new and cleared decks unless configured otherwise.
pub const DEFAULT_DECK_NAME: &str = "New Deck";

/// Deck engine configuration.
///
/// ## Example
///
/// ```
/// use rhythm_deck::config::DeckConfig;
///
/// let config = DeckConfig::new()
///     .with_default_deck_name("Untitled")
///     .with_initial_power_level(20)
///     .with_max_tabs(3);
///
/// assert_eq!(config.default_deck_name, "Untitled");
/// assert_eq!(config.initial_power_level.get(), 14); // clamped
/// assert_eq!(config.max_tabs, 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    /// Name of new and cleared decks.
    pub default_deck_name: String,

    /// Power level a card gets when placed into an empty slot.
    pub initial_power_level: PowerLevel,

    /// Maximum number of open deck tabs.
    pub max_tabs: usize,

    /// Whether new decks start with the friend slot enabled.
    pub friend_slot_enabled: bool,

    /// Seed for deck id allocation.
    pub id_seed: u64,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            default_deck_name: DEFAULT_DECK_NAME.to_string(),
            initial_power_level: PowerLevel::MAX,
            max_tabs: 10,
            friend_slot_enabled: true,
            id_seed: 0,
        }
    }
}

impl DeckConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_default_deck_name(mut self, name: impl Into<String>) -> Self {
        self.default_deck_name = name.into();
        self
    }

    /// Set the initial power level, clamped into the valid range.
    #[must_use]
    pub fn with_initial_power_level(mut self, level: i64) -> Self {
        self.initial_power_level = PowerLevel::clamped(level);
        self
    }

    /// Set the tab limit. At least one tab is always allowed.
    #[must_use]
    pub fn with_max_tabs(mut self, max: usize) -> Self {
        self.max_tabs = max.max(1);
        self
    }

    #[must_use]
    pub fn with_friend_slot_enabled(mut self, enabled: bool) -> Self {
        self.friend_slot_enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_id_seed(mut self, seed: u64) -> Self {
        self.id_seed = seed;
        self
    }
}
