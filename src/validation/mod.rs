// ============================================================================
// VALIDATION - pure rules shared by the login screen and the invoice form
// ============================================================================
// Rules never fail loudly: they return the message to render next to the
// offending field, keyed by field.
// ============================================================================

use std::collections::BTreeMap;

pub mod invoice;
pub mod login;

pub use invoice::{is_required, validate_draft, validate_draft_field, REQUIRED_FIELDS};
pub use login::{validate_credentials, validate_login_field, LoginField};

/// Inline error message per offending field.
pub type FieldErrors<F> = BTreeMap<F, &'static str>;
