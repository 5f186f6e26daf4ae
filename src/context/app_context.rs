use std::rc::Rc;
use yew::prelude::*;

use crate::config::AppConfig;
use crate::services::{
    BrowserStorage, DraftStore, KeyValueStore, LocalDraftStore, LocalSessionStore, SessionStore,
};

/// Configuration and persistence ports shared by every screen.
#[derive(Clone)]
pub struct AppContext {
    pub config: Rc<AppConfig>,
    pub sessions: Rc<dyn SessionStore>,
    pub drafts: Rc<dyn DraftStore>,
}

impl AppContext {
    /// Stores backed by `window.localStorage`.
    pub fn browser(config: AppConfig) -> Self {
        let storage: Rc<dyn KeyValueStore> = Rc::new(BrowserStorage);
        Self {
            sessions: Rc::new(LocalSessionStore::new(storage.clone(), config.session_key.clone())),
            drafts: Rc::new(LocalDraftStore::new(storage, config.draft_key.clone())),
            config: Rc::new(config),
        }
    }
}

impl PartialEq for AppContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.config, &other.config)
            && std::ptr::addr_eq(Rc::as_ptr(&self.sessions), Rc::as_ptr(&other.sessions))
            && std::ptr::addr_eq(Rc::as_ptr(&self.drafts), Rc::as_ptr(&other.drafts))
    }
}

/// Context provided by `App`. Without a provider the browser-backed defaults
/// are built once per component and the missing provider is logged.
#[hook]
pub fn use_app_context() -> AppContext {
    let provided = use_context::<AppContext>();
    let fallback = use_memo(provided.is_none(), |missing| {
        missing.then(|| {
            log::error!("❌ No AppContext provider, falling back to browser storage");
            AppContext::browser(AppConfig::default())
        })
    });

    provided
        .or_else(|| (*fallback).clone())
        .unwrap_or_else(|| AppContext::browser(AppConfig::default()))
}
