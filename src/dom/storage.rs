//! `localStorage`-backed preference store.

use web_sys::{Storage, Window};

use super::describe;
use crate::error::StoreError;
use crate::util::storage::PreferenceStore;

pub struct LocalStore {
    window: Window,
}

impl LocalStore {
    pub fn new(window: Window) -> Self {
        Self { window }
    }

    /// `localStorage` throws in some privacy modes and is `null` in others.
    fn storage(&self) -> Result<Storage, StoreError> {
        match self.window.local_storage() {
            Ok(Some(storage)) => Ok(storage),
            Ok(None) | Err(_) => Err(StoreError::Unavailable),
        }
    }
}

impl PreferenceStore for LocalStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| StoreError::Read { key: key.to_owned(), reason: describe(&e) })
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::Write { key: key.to_owned(), reason: describe(&e) })
    }
}
