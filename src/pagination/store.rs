// Page state store.
// Tracks the current page of every panel for the lifetime of a session.

use std::collections::HashMap;

/// Pages are 1-indexed; every panel starts here.
pub const FIRST_PAGE: usize = 1;

/// Mapping from panel key to current page number.
///
/// The store performs no validation; the renderer clamps pages before
/// writing them. Nothing here is persisted, so every launch starts on page 1.
#[derive(Debug, Clone, Default)]
pub struct PageStateStore {
    pages: HashMap<String, usize>,
}

impl PageStateStore {
    /// Create a store with every known panel on the first page.
    pub fn new<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self {
            pages: keys
                .into_iter()
                .map(|key| (key.into(), FIRST_PAGE))
                .collect(),
        }
    }

    /// Current page for a panel. Unknown panels read as the first page.
    pub fn get_page(&self, key: &str) -> usize {
        self.pages.get(key).copied().unwrap_or(FIRST_PAGE)
    }

    /// Record the current page for a panel.
    pub fn set_page(&mut self, key: &str, page: usize) {
        match self.pages.get_mut(key) {
            Some(current) => *current = page,
            None => {
                self.pages.insert(key.to_string(), page);
            }
        }
    }

    /// Whether the panel has an entry.
    pub fn contains(&self, key: &str) -> bool {
        self.pages.contains_key(key)
    }

    /// Put every panel back on the first page.
    pub fn reset(&mut self) {
        for page in self.pages.values_mut() {
            *page = FIRST_PAGE;
        }
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}
