use std::rc::Rc;

use super::storage::{KeyValueStore, StorageError};
use crate::models::{InvoiceDraft, SavedDraft};

/// Persistence port for the invoice draft.
pub trait DraftStore {
    /// Saved draft, or `None` when absent, unreadable or malformed.
    fn load(&self) -> Option<SavedDraft>;
    fn save(&self, draft: &InvoiceDraft) -> Result<(), StorageError>;
    fn clear(&self) -> Result<(), StorageError>;
}

/// Draft stored as one JSON record under a fixed key.
pub struct LocalDraftStore {
    storage: Rc<dyn KeyValueStore>,
    key: String,
}

impl LocalDraftStore {
    pub fn new(storage: Rc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }
}

impl DraftStore for LocalDraftStore {
    fn load(&self) -> Option<SavedDraft> {
        let json = match self.storage.get_item(&self.key) {
            Ok(Some(json)) => json,
            Ok(None) => {
                log::info!("ℹ️ No saved invoice draft");
                return None;
            }
            Err(e) => {
                log::warn!("⚠️ Saved draft unavailable: {}", e);
                return None;
            }
        };

        match serde_json::from_str::<SavedDraft>(&json) {
            Ok(saved) => {
                log::info!("📄 Saved invoice draft loaded");
                Some(saved)
            }
            Err(e) => {
                log::warn!("⚠️ Ignoring malformed saved draft: {}", e);
                None
            }
        }
    }

    fn save(&self, draft: &InvoiceDraft) -> Result<(), StorageError> {
        let json = serde_json::to_string(draft).map_err(|source| StorageError::Serialize {
            key: self.key.clone(),
            source,
        })?;
        self.storage.set_item(&self.key, &json)?;
        log::info!(
            "💾 Invoice draft saved ({} expense lines)",
            draft.expense_details.len()
        );
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.storage.remove_item(&self.key)?;
        log::info!("🗑️ Invoice draft cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::merge_saved;
    use crate::services::storage::MemoryStorage;
    use pretty_assertions::assert_eq;

    const KEY: &str = "invoiceFormData";

    fn store() -> (Rc<MemoryStorage>, LocalDraftStore) {
        let storage = Rc::new(MemoryStorage::new());
        let store = LocalDraftStore::new(storage.clone(), KEY);
        (storage, store)
    }

    #[test]
    fn missing_record_loads_as_none() {
        let (_, store) = store();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn malformed_record_loads_as_none() {
        let (storage, store) = store();
        storage.set_item(KEY, "{not json").unwrap();
        assert_eq!(store.load(), None);

        storage.set_item(KEY, r#"{"vendor": 42}"#).unwrap();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn saved_draft_reloads_verbatim() {
        let (_, store) = store();
        let mut draft = InvoiceDraft::default();
        draft.invoice_number = "INV-7".to_string();

        store.save(&draft).unwrap();

        assert_eq!(merge_saved(InvoiceDraft::default(), store.load()), draft);
    }

    #[test]
    fn clear_removes_the_record() {
        let (storage, store) = store();
        store.save(&InvoiceDraft::default()).unwrap();

        store.clear().unwrap();

        assert!(!storage.contains(KEY));
    }
}
