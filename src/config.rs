use crate::utils::{LOGIN_DELAY_MS, STORAGE_KEY_DRAFT, STORAGE_KEY_SESSION};

/// Runtime settings of the app. The defaults are what ships.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub session_key: String,
    pub draft_key: String,
    pub login_delay_ms: u32,
    pub log_level: log::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            session_key: STORAGE_KEY_SESSION.to_string(),
            draft_key: STORAGE_KEY_DRAFT.to_string(),
            login_delay_ms: LOGIN_DELAY_MS,
            log_level: if cfg!(debug_assertions) {
                log::Level::Debug
            } else {
                log::Level::Info
            },
        }
    }
}
