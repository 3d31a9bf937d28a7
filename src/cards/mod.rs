//! Card data and the catalog collaborator.
//!
//! ## Key Types
//!
//! - `CardId`: Catalog identifier of a card
//! - `Rarity`: Card rarity, ordered from lowest to highest
//! - `Card`: Character name, rarity and opaque catalog attributes
//! - `CardCatalog`: Resolves stored card ids to full cards
//! - `CardRegistry`: In-memory catalog
//!
//! The deck engine only interprets a card's character name and rarity.
//! Everything else the catalog knows about a card is carried through
//! untouched in `attributes`.

pub mod catalog;
pub mod definition;
pub mod registry;

pub use catalog::CardCatalog;
pub use definition::{Card, CardId, Rarity};
pub use registry::CardRegistry;
