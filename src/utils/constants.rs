/// localStorage key of the login session record
pub const STORAGE_KEY_SESSION: &str = "invoiceAppSession";

/// localStorage key of the saved invoice draft
pub const STORAGE_KEY_DRAFT: &str = "invoiceFormData";

/// Simulated network latency of the login submit, in milliseconds
pub const LOGIN_DELAY_MS: u32 = 500;
