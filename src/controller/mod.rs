//! Deck controller: owns the active deck and its persistence lifecycle.
//!
//! The mutation service is stateless; the controller binds it to one
//! current deck, optionally mirrored into a named tab, and saves the full
//! snapshot after every successful mutation.

pub mod deck_controller;
pub mod ids;
pub mod store;
pub mod tabs;

pub use deck_controller::DeckController;
pub use ids::DeckIdAllocator;
pub use store::{DeckStore, MemoryStore};
pub use tabs::{DeckTab, DeckTabs};
