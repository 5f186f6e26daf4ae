// ============================================================================
// STATE MODULE - plain Rust state machines driven by the yew hooks
// ============================================================================

pub mod form_state;
pub mod login_form;
pub mod preview;
pub mod router;
pub mod session_gate;

pub use form_state::{FormState, SubmitError, SubmitStatus};
pub use login_form::LoginFormState;
pub use preview::PreviewState;
pub use router::Route;
pub use session_gate::SessionGate;
