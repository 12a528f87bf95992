//! The in-memory project document.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::file::FileRecord;
use crate::error::{MediaBinError, Result};

/// Namespace holding the imported file list.
pub const FILES_KEY: &str = "files";

const ID_LENGTH: usize = 10;

/// A value stored under a project key.
#[derive(Debug, Clone, PartialEq)]
pub enum ProjectValue {
    /// The whole file list (`"files"`).
    Files(Vec<FileRecord>),
    /// A single record (`"files/<id>"`).
    File(FileRecord),
}

/// A parsed project key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Key<'a> {
    Files,
    File(&'a str),
}

impl<'a> Key<'a> {
    pub(crate) fn parse(key: &'a str) -> Result<Self> {
        match key.split_once('/') {
            None if key == FILES_KEY => Ok(Key::Files),
            Some((FILES_KEY, id)) if !id.is_empty() && !id.contains('/') => Ok(Key::File(id)),
            _ => Err(MediaBinError::invalid_key(key, "expected 'files' or 'files/<id>'")),
        }
    }
}

/// Build the key addressing a single file record.
pub fn file_key(id: &str) -> String {
    format!("{FILES_KEY}/{id}")
}

/// An editing session's document: the imported files plus any other keys
/// the project file carries, which are preserved untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    files: Vec<FileRecord>,

    #[serde(flatten)]
    other: Map<String, Value>,
}

impl Project {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a project from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| MediaBinError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| MediaBinError::ProjectParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write the project as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(MediaBinError::ProjectSerialize)?;
        fs::write(path, json).map_err(|source| MediaBinError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The ordered file list.
    pub fn files(&self) -> &[FileRecord] {
        &self.files
    }

    /// Look up a key. Returns `Ok(None)` for a well-formed key with no value.
    pub fn get(&self, key: &str) -> Result<Option<ProjectValue>> {
        Ok(match Key::parse(key)? {
            Key::Files => Some(ProjectValue::Files(self.files.clone())),
            Key::File(id) => self.file(id).cloned().map(ProjectValue::File),
        })
    }

    pub fn file(&self, id: &str) -> Option<&FileRecord> {
        self.files.iter().find(|f| f.id == id)
    }

    /// Exact string comparison; paths are never canonicalized.
    pub fn contains_path(&self, path: &str) -> bool {
        self.files.iter().any(|f| f.path == path)
    }

    /// Allocate an id not used by any file in the project.
    pub fn generate_id(&self) -> String {
        loop {
            let id: String = uuid::Uuid::new_v4()
                .simple()
                .to_string()
                .chars()
                .take(ID_LENGTH)
                .collect::<String>()
                .to_uppercase();
            if self.file(&id).is_none() {
                return id;
            }
        }
    }

    pub(crate) fn insert(&mut self, key: &str, value: ProjectValue) -> Result<()> {
        match (Key::parse(key)?, value) {
            (Key::Files, ProjectValue::Files(files)) => {
                if let Some(id) = repeated_id(&self.files, &files) {
                    return Err(MediaBinError::invalid_key(
                        key,
                        format!("file id '{}' already exists", id),
                    ));
                }
                self.files.extend(files);
            }
            (Key::File(id), ProjectValue::File(record)) => {
                if record.id != id {
                    return Err(MediaBinError::invalid_key(key, "record id does not match key"));
                }
                if self.file(id).is_some() {
                    return Err(MediaBinError::invalid_key(key, "file id already exists"));
                }
                self.files.push(record);
            }
            _ => return Err(MediaBinError::invalid_key(key, "value does not match key")),
        }
        Ok(())
    }

    pub(crate) fn set(&mut self, key: &str, value: ProjectValue) -> Result<()> {
        match (Key::parse(key)?, value) {
            (Key::Files, ProjectValue::Files(files)) => {
                if let Some(id) = repeated_id(&[], &files) {
                    return Err(MediaBinError::invalid_key(
                        key,
                        format!("file id '{}' is repeated", id),
                    ));
                }
                self.files = files;
            }
            (Key::File(id), ProjectValue::File(record)) => {
                let slot = self
                    .files
                    .iter_mut()
                    .find(|f| f.id == id)
                    .ok_or_else(|| MediaBinError::invalid_key(key, "no such file"))?;
                *slot = record;
            }
            _ => return Err(MediaBinError::invalid_key(key, "value does not match key")),
        }
        Ok(())
    }

    pub(crate) fn delete(&mut self, key: &str) -> Result<()> {
        match Key::parse(key)? {
            Key::Files => self.files.clear(),
            Key::File(id) => {
                let before = self.files.len();
                self.files.retain(|f| f.id != id);
                if self.files.len() == before {
                    return Err(MediaBinError::invalid_key(key, "no such file"));
                }
            }
        }
        Ok(())
    }

    pub(crate) fn replace_files(&mut self, files: Vec<FileRecord>) {
        self.files = files;
    }
}

/// First id in `incoming` that is already in `existing` or earlier in `incoming`.
fn repeated_id(existing: &[FileRecord], incoming: &[FileRecord]) -> Option<String> {
    let mut seen: HashSet<&str> = existing.iter().map(|f| f.id.as_str()).collect();
    incoming
        .iter()
        .find(|f| !seen.insert(f.id.as_str()))
        .map(|f| f.id.clone())
}
