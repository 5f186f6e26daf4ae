// ============================================================================
// KEY/VALUE STORAGE - browser localStorage or an in-memory stand-in
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use thiserror::Error;
use web_sys::{window, Storage};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("localStorage is not available")]
    Unavailable,
    #[error("could not serialize record '{key}': {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("could not read '{key}': {reason}")]
    Read { key: String, reason: String },
    #[error("could not write '{key}': {reason}")]
    Write { key: String, reason: String },
    #[error("could not remove '{key}': {reason}")]
    Remove { key: String, reason: String },
}

/// String records addressed by key. Each call reads or writes one whole record.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn handle() -> Result<Storage, StorageError> {
        window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::handle()?.get_item(key).map_err(|e| StorageError::Read {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::handle()?.set_item(key, value).map_err(|e| StorageError::Write {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        Self::handle()?.remove_item(key).map_err(|e| StorageError::Remove {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
    }
}

/// Process-local storage, used by tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.items.borrow().contains_key(key)
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_overwrites_and_removes_whole_records() {
        let storage = MemoryStorage::new();

        storage.set_item("k", "one").unwrap();
        storage.set_item("k", "two").unwrap();
        assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("two"));

        storage.remove_item("k").unwrap();
        assert!(!storage.contains("k"));
        assert_eq!(storage.get_item("k").unwrap(), None);
    }

    #[test]
    fn removing_a_missing_key_is_not_an_error() {
        assert!(MemoryStorage::new().remove_item("absent").is_ok());
    }
}
