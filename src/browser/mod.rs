//! Media browser: the project's file list as a filtered table, with
//! drag-and-drop import.

pub mod dnd;
pub mod filter;
pub mod format;
pub mod model;
pub mod view;

pub use dnd::{
    absolute_path, paste_to_uris, uri_to_path, DragPayload, DragTracker, Point,
    DRAG_PLACEHOLDER,
};
pub use filter::{FilterState, TypeFilter};
pub use format::{format_json, format_table};
pub use model::{build_rows, FileModel, MediaRow, RowSource, HEADERS};
pub use view::{AddOutcome, DropReport, MediaTreeView, ViewEvents, DUPLICATE_FILE_MESSAGE};
