//! Named deck tabs.
//!
//! Users can keep several decks open side by side. One tab may be active;
//! the controller writes the current deck back into the active tab after
//! every mutation.

use crate::deck::DeckState;
use crate::error::{DeckError, DeckResult};

/// One open deck.
#[derive(Clone, Debug, PartialEq)]
pub struct DeckTab {
    pub name: String,
    pub deck: DeckState,
}

/// Ordered set of open tabs.
#[derive(Clone, Debug)]
pub struct DeckTabs {
    tabs: Vec<DeckTab>,
    active: Option<usize>,
    max_tabs: usize,
}

impl DeckTabs {
    #[must_use]
    pub fn new(max_tabs: usize) -> Self {
        Self {
            tabs: Vec::new(),
            active: None,
            max_tabs,
        }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.tabs.iter().position(|t| t.name == name)
    }

    /// Open a tab and make it active.
    pub fn open(&mut self, name: impl Into<String>, deck: DeckState) -> DeckResult<()> {
        let name = name.into();
        if self.position(&name).is_some() {
            return Err(DeckError::TabRejected(format!("a tab named {name:?} is already open")));
        }
        if self.tabs.len() >= self.max_tabs {
            return Err(DeckError::TabRejected(format!(
                "at most {} tabs can be open",
                self.max_tabs
            )));
        }
        self.tabs.push(DeckTab { name, deck });
        self.active = Some(self.tabs.len() - 1);
        Ok(())
    }

    /// Make a tab active and return its deck.
    pub fn activate(&mut self, name: &str) -> DeckResult<&DeckState> {
        let index = self
            .position(name)
            .ok_or_else(|| DeckError::UnknownTab(name.to_string()))?;
        self.active = Some(index);
        Ok(&self.tabs[index].deck)
    }

    /// Close a tab and return its deck.
    ///
    /// Closing the active tab leaves no tab active.
    pub fn close(&mut self, name: &str) -> DeckResult<DeckState> {
        let index = self
            .position(name)
            .ok_or_else(|| DeckError::UnknownTab(name.to_string()))?;
        let tab = self.tabs.remove(index);
        self.active = match self.active {
            Some(active) if active == index => None,
            Some(active) if active > index => Some(active - 1),
            other => other,
        };
        Ok(tab.deck)
    }

    /// Store `deck` in the active tab, if any.
    pub fn write_back(&mut self, deck: &DeckState) {
        if let Some(index) = self.active {
            self.tabs[index].deck = deck.clone();
        }
    }

    /// Detach from the active tab without closing it.
    pub fn deactivate(&mut self) {
        self.active = None;
    }

    #[must_use]
    pub fn active_name(&self) -> Option<&str> {
        self.active.map(|i| self.tabs[i].name.as_str())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tabs.iter().map(|t| t.name.as_str())
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&DeckTab> {
        self.position(name).map(|i| &self.tabs[i])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }
}
