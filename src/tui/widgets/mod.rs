//! Reusable widgets.

pub mod table;

pub use table::{scroll_offset, RowTable};
