//! Tabular row model behind the media browser.

use serde::Serialize;

use super::filter::FilterState;
use crate::project::{FileRecord, FileType};

pub const HEADERS: [&str; 4] = ["Name", "Type", "Path", "ID"];

/// Read access to a table of text cells, used by generic list views.
pub trait RowSource {
    fn headers(&self) -> &[&str];

    fn row_count(&self) -> usize;

    /// Cell text, or `None` when `row`/`column` is out of range.
    fn cell(&self, row: usize, column: usize) -> Option<&str>;
}

/// One displayed file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MediaRow {
    pub name: String,
    #[serde(rename = "type")]
    pub file_type: FileType,
    /// Directory containing the file
    pub path: String,
    pub id: String,
}

impl MediaRow {
    pub fn from_record(file: &FileRecord) -> Self {
        Self {
            name: file.file_name().to_string(),
            file_type: file.file_type,
            path: file.directory().to_string(),
            id: file.id.clone(),
        }
    }
}

/// Rows currently shown by the browser.
#[derive(Debug, Default)]
pub struct FileModel {
    rows: Vec<MediaRow>,
}

impl FileModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every row with the filtered projection of `files`, keeping
    /// source order.
    pub fn rebuild(&mut self, files: &[FileRecord], filter: &FilterState) {
        self.rows = build_rows(files, filter);
    }

    pub fn rows(&self) -> &[MediaRow] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&MediaRow> {
        self.rows.get(index)
    }
}

impl RowSource for FileModel {
    fn headers(&self) -> &[&str] {
        &HEADERS
    }

    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn cell(&self, row: usize, column: usize) -> Option<&str> {
        let row = self.rows.get(row)?;
        match column {
            0 => Some(&row.name),
            1 => Some(row.file_type.as_str()),
            2 => Some(&row.path),
            3 => Some(&row.id),
            _ => None,
        }
    }
}

pub fn build_rows(files: &[FileRecord], filter: &FilterState) -> Vec<MediaRow> {
    files
        .iter()
        .filter(|f| filter.matches(f))
        .map(MediaRow::from_record)
        .collect()
}
