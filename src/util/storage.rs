//! Best-effort preference storage.
//!
//! TRADE-OFFS
//! ==========
//! Browsers may refuse storage entirely (private mode, disabled cookies) or
//! reject individual writes. The port surfaces both as `StoreError` and the
//! controller treats them as a no-op, so the page still works with an
//! in-memory effect for the session.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;

use crate::error::StoreError;

/// Key/value store for a single string preference.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-process store. Used natively and when the browser store is missing.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_owned(), value.to_owned());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// A store that is never available.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnavailableStore;

impl PreferenceStore for UnavailableStore {
    fn load(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable)
    }

    fn save(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable)
    }
}
