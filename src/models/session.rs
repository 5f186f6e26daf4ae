use serde::{Deserialize, Serialize};

/// Record stored under `invoiceAppSession` once a user has logged in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub username: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
}

impl SessionRecord {
    pub fn new(username: impl Into<String>, timestamp: i64) -> Self {
        Self {
            username: username.into(),
            timestamp,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
}
