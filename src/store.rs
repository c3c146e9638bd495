//! Persisted key-value storage seam for the theme preference.
//!
//! SYSTEM CONTEXT
//! ==============
//! In the browser this is `localStorage`; tests and storage-less pages use
//! [`MemoryStore`]. The controller never reaches for a global store.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::ThemeError;

/// String key-value store scoped to the page origin.
pub trait PreferenceStore {
    /// Read the value stored under `key`, `Ok(None)` when absent.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store is unavailable or rejects the read.
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store is unavailable or rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), ThemeError>;
}

/// Session-only store. Clones share the same entries, so a clone handed to a
/// second controller behaves like the same origin's storage after a reload.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store with one entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        store
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
