pub mod draft;
pub mod options;
pub mod sample;
pub mod session;

pub use draft::{merge_saved, DraftField, ExpenseLine, InvoiceDraft, LineField, LineId, SavedDraft};
pub use options::OptionSet;
pub use sample::sample_draft;
pub use session::{LoginCredentials, SessionRecord};
