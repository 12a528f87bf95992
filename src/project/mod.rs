pub mod document;
pub mod file;
pub mod session;
pub mod updates;

pub use document::{file_key, Project, ProjectValue, FILES_KEY};
pub use file::{FileRecord, FileType};
pub use session::Session;
pub use updates::{
    ChangeEvent, ChangeKind, Subscription, UpdateAction, UpdateManager, DEFAULT_HISTORY_LIMIT,
};
