pub mod draft_store;
pub mod file_reader;
pub mod session_store;
pub mod storage;

pub use draft_store::{DraftStore, LocalDraftStore};
pub use file_reader::read_as_data_url;
pub use session_store::{LocalSessionStore, SessionStore};
pub use storage::{BrowserStorage, KeyValueStore, MemoryStorage, StorageError};
