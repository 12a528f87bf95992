use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const VIDEO_EXTENSIONS: &[&str] = &[".mp4", ".avi", ".mov"];
const AUDIO_EXTENSIONS: &[&str] = &[".mp3", ".wav", ".ogg"];
const IMAGE_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".bmp"];

/// Media type of an imported file, derived from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Video,
    Audio,
    Image,
    #[default]
    Unknown,
}

impl FileType {
    /// Classify a path by its suffix.
    ///
    /// Matching is case-sensitive: `clip.MP4` is `Unknown`.
    pub fn from_path(path: &str) -> Self {
        let has_suffix = |exts: &[&str]| exts.iter().any(|ext| path.ends_with(ext));

        if has_suffix(VIDEO_EXTENSIONS) {
            FileType::Video
        } else if has_suffix(AUDIO_EXTENSIONS) {
            FileType::Audio
        } else if has_suffix(IMAGE_EXTENSIONS) {
            FileType::Image
        } else {
            FileType::Unknown
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FileType::Video => "video",
            FileType::Audio => "audio",
            FileType::Image => "image",
            FileType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One media asset imported into a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Project-unique identifier
    pub id: String,

    /// Path exactly as it was imported (not canonicalized)
    pub path: String,

    #[serde(default)]
    pub tags: Vec<String>,

    /// Fraction of preview chunks generated so far (0.0 - 1.0)
    #[serde(default)]
    pub chunk_completion: f64,

    /// Directory holding generated preview chunks
    #[serde(default)]
    pub chunk_path: String,

    /// Free-form media information (size, duration, ...)
    #[serde(default)]
    pub info: Map<String, Value>,

    #[serde(rename = "type", default)]
    pub file_type: FileType,
}

impl FileRecord {
    /// Create a record for a freshly imported file.
    pub fn new(id: impl Into<String>, path: impl Into<String>) -> Self {
        let path = path.into();
        let file_type = FileType::from_path(&path);
        Self {
            id: id.into(),
            path,
            tags: Vec::new(),
            chunk_completion: 0.0,
            chunk_path: String::new(),
            info: Map::new(),
            file_type,
        }
    }

    /// Last path component, or the whole path if it has none.
    pub fn file_name(&self) -> &str {
        Path::new(&self.path)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(&self.path)
    }

    /// Directory part of the path (empty for bare file names).
    pub fn directory(&self) -> &str {
        Path::new(&self.path)
            .parent()
            .and_then(|p| p.to_str())
            .unwrap_or("")
    }

    /// File size recorded at import time, if known.
    pub fn size(&self) -> Option<u64> {
        self.info.get("size").and_then(Value::as_u64)
    }
}
