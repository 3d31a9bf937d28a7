//! Error values returned by deck operations.
//!
//! Every outcome is returned as a value; nothing in the engine panics on a
//! rule violation. Callers surface `Validation::reason` and
//! `ConfirmationRequired::message` verbatim. None of these are transient,
//! so there is no retry logic anywhere.

use thiserror::Error;

use crate::deck::DeckId;
use crate::topology::SlotId;

/// Result alias used throughout the crate.
pub type DeckResult<T> = Result<T, DeckError>;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Placement or swap rule violation.
    #[error("{reason}")]
    Validation { reason: String },

    /// Legal but destructive operation waiting for explicit confirmation.
    #[error("{message}")]
    ConfirmationRequired { message: String },

    /// Slot id absent from the active topology.
    #[error("slot {slot} does not exist in this deck")]
    NotFound { slot: SlotId },

    /// The store has no deck with this id.
    #[error("no stored deck {0}")]
    UnknownDeck(DeckId),

    /// No deck tab with this name.
    #[error("no deck tab named {0:?}")]
    UnknownTab(String),

    /// A tab limit or name clash prevented opening a tab.
    #[error("cannot open tab: {0}")]
    TabRejected(String),

    /// Snapshot could not be encoded or decoded.
    #[error("snapshot error: {0}")]
    Snapshot(String),

    /// The card catalog failed to answer.
    #[error("catalog error: {0}")]
    Catalog(String),

    /// The persistence store failed.
    #[error("store error: {0}")]
    Store(String),
}

impl DeckError {
    pub fn validation(reason: impl Into<String>) -> Self {
        Self::Validation {
            reason: reason.into(),
        }
    }

    pub fn confirmation(message: impl Into<String>) -> Self {
        Self::ConfirmationRequired {
            message: message.into(),
        }
    }

    /// Check if this error only asks the caller to confirm.
    #[must_use]
    pub fn requires_confirmation(&self) -> bool {
        matches!(self, Self::ConfirmationRequired { .. })
    }
}

impl From<serde_json::Error> for DeckError {
    fn from(err: serde_json::Error) -> Self {
        Self::Snapshot(err.to_string())
    }
}

impl From<bincode::Error> for DeckError {
    fn from(err: bincode::Error) -> Self {
        Self::Snapshot(err.to_string())
    }
}
