use std::rc::Rc;

use super::storage::{KeyValueStore, StorageError};
use crate::models::SessionRecord;

/// Persistence port for the login session record.
pub trait SessionStore {
    fn load(&self) -> Option<SessionRecord>;
    fn save(&self, record: &SessionRecord) -> Result<(), StorageError>;
    fn clear(&self) -> Result<(), StorageError>;
}

pub struct LocalSessionStore {
    storage: Rc<dyn KeyValueStore>,
    key: String,
}

impl LocalSessionStore {
    pub fn new(storage: Rc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }
}

impl SessionStore for LocalSessionStore {
    fn load(&self) -> Option<SessionRecord> {
        match self.storage.get_item(&self.key) {
            Ok(Some(json)) => serde_json::from_str(&json)
                .map_err(|e| log::warn!("⚠️ Ignoring malformed session record: {}", e))
                .ok(),
            Ok(None) => None,
            Err(e) => {
                log::warn!("⚠️ Session record unavailable: {}", e);
                None
            }
        }
    }

    fn save(&self, record: &SessionRecord) -> Result<(), StorageError> {
        let json = serde_json::to_string(record).map_err(|source| StorageError::Serialize {
            key: self.key.clone(),
            source,
        })?;
        self.storage.set_item(&self.key, &json)
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.storage.remove_item(&self.key)
    }
}
