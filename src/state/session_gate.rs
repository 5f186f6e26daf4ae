use crate::services::{DraftStore, SessionStore};

/// Whether the current browser holds a login session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionGate {
    authenticated: bool,
}

impl SessionGate {
    pub fn restore(sessions: &dyn SessionStore) -> Self {
        match sessions.load() {
            Some(record) => {
                log::info!("✅ Session restored for {}", record.username);
                Self { authenticated: true }
            }
            None => Self::default(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// The session record itself is written by the login form.
    pub fn login(&mut self) {
        self.authenticated = true;
    }

    /// Drops the session and the saved draft. Storage failures are logged;
    /// the gate ends up unauthenticated regardless.
    pub fn logout(&mut self, sessions: &dyn SessionStore, drafts: &dyn DraftStore) {
        if let Err(e) = sessions.clear() {
            log::error!("❌ Could not remove session record: {}", e);
        }
        if let Err(e) = drafts.clear() {
            log::error!("❌ Could not remove saved draft: {}", e);
        }
        self.authenticated = false;
        log::info!("👋 Logout");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{InvoiceDraft, SavedDraft, SessionRecord};
    use crate::services::{
        KeyValueStore, LocalDraftStore, LocalSessionStore, MemoryStorage, StorageError,
    };
    use crate::state::FormState;
    use pretty_assertions::assert_eq;
    use std::rc::Rc;

    fn stores() -> (Rc<MemoryStorage>, LocalSessionStore, Rc<LocalDraftStore>) {
        let storage = Rc::new(MemoryStorage::new());
        let sessions = LocalSessionStore::new(storage.clone(), "invoiceAppSession");
        let drafts = Rc::new(LocalDraftStore::new(storage.clone(), "invoiceFormData"));
        (storage, sessions, drafts)
    }

    #[test]
    fn no_record_means_unauthenticated() {
        let (_, sessions, _) = stores();
        assert!(!SessionGate::restore(&sessions).is_authenticated());
    }

    #[test]
    fn stored_record_restores_authentication() {
        let (_, sessions, _) = stores();
        sessions.save(&SessionRecord::new("abc", 1)).unwrap();

        assert!(SessionGate::restore(&sessions).is_authenticated());
    }

    #[test]
    fn login_flips_flag_without_touching_storage() {
        let (storage, sessions, _) = stores();
        let mut gate = SessionGate::restore(&sessions);

        gate.login();

        assert!(gate.is_authenticated());
        assert!(!storage.contains("invoiceAppSession"));
    }

    #[test]
    fn logout_removes_session_and_draft() {
        let (storage, sessions, drafts) = stores();
        sessions.save(&SessionRecord::new("abc", 1)).unwrap();
        let mut saved = InvoiceDraft::default();
        saved.vendor = "Office Max".to_string();
        drafts.save(&saved).unwrap();
        let mut gate = SessionGate::restore(&sessions);

        gate.logout(&sessions, &*drafts);

        assert!(!gate.is_authenticated());
        assert!(!storage.contains("invoiceAppSession"));
        assert!(!storage.contains("invoiceFormData"));
        assert_eq!(storage.get_item("invoiceFormData").unwrap(), None);

        let form = FormState::load(drafts);
        assert_eq!(form.draft().vendor, "");
        assert_eq!(form.draft().currency, "USD");
    }

    struct BrokenSessions;

    impl SessionStore for BrokenSessions {
        fn load(&self) -> Option<SessionRecord> {
            Some(SessionRecord::new("abc", 1))
        }

        fn save(&self, _record: &SessionRecord) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }

        fn clear(&self) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }

    struct BrokenDrafts;

    impl DraftStore for BrokenDrafts {
        fn load(&self) -> Option<SavedDraft> {
            None
        }

        fn save(&self, _draft: &InvoiceDraft) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }

        fn clear(&self) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }

    #[test]
    fn logout_succeeds_when_storage_cannot_be_cleared() {
        let mut gate = SessionGate::restore(&BrokenSessions);
        assert!(gate.is_authenticated());

        gate.logout(&BrokenSessions, &BrokenDrafts);

        assert!(!gate.is_authenticated());
    }

    #[test]
    fn logout_clears_session_even_if_draft_removal_fails() {
        let (storage, sessions, _) = stores();
        sessions.save(&SessionRecord::new("abc", 1)).unwrap();
        let mut gate = SessionGate::restore(&sessions);

        gate.logout(&sessions, &BrokenDrafts);

        assert!(!gate.is_authenticated());
        assert!(!storage.contains("invoiceAppSession"));
    }
}
