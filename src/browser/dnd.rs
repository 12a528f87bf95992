//! Drag and drop plumbing: drop URI decoding and drag-start detection.

use std::env;
use std::path::{Path, PathBuf};

use url::Url;

use crate::error::{MediaBinError, Result};

/// Text carried by drags started from the browser. Nothing consumes it yet.
pub const DRAG_PLACEHOLDER: &str = "media-bin: file drag";

/// A terminal cell position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub column: u16,
    pub row: u16,
}

impl Point {
    pub fn new(column: u16, row: u16) -> Self {
        Self { column, row }
    }

    pub fn manhattan_distance(&self, other: Point) -> u16 {
        self.column.abs_diff(other.column) + self.row.abs_diff(other.row)
    }
}

/// Payload of a drag started from the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragPayload {
    pub text: String,
}

/// Tracks the press position and reports when a drag should begin.
#[derive(Debug, Clone)]
pub struct DragTracker {
    threshold: u16,
    origin: Option<Point>,
}

impl DragTracker {
    pub fn new(threshold: u16) -> Self {
        Self {
            threshold,
            origin: None,
        }
    }

    pub fn press(&mut self, at: Point) {
        self.origin = Some(at);
    }

    pub fn release(&mut self) {
        self.origin = None;
    }

    /// Called on every motion with the button held. Returns a payload once
    /// the pointer is at least `threshold` cells away from the press.
    pub fn motion(&mut self, at: Point) -> Option<DragPayload> {
        let origin = self.origin?;
        if origin.manhattan_distance(at) < self.threshold {
            return None;
        }
        // One drag per press.
        self.origin = None;
        Some(DragPayload {
            text: DRAG_PLACEHOLDER.to_string(),
        })
    }
}

/// Turn a dropped URI into a local path.
///
/// Only `file://` URIs are accepted. A Windows drive path keeps a leading
/// slash after URI decoding (`/C:/clips/a.mp4`); that slash is stripped.
pub fn uri_to_path(uri: &str) -> Option<PathBuf> {
    let url = Url::parse(uri.trim()).ok()?;
    if url.scheme() != "file" {
        return None;
    }

    let path = url.to_file_path().ok()?;
    match path.to_str() {
        Some(s) if is_drive_path(s) => Some(PathBuf::from(&s[1..])),
        _ => Some(path),
    }
}

/// `/C:` or `/C:/...`
fn is_drive_path(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() >= 3
        && b[0] == b'/'
        && b[1].is_ascii_alphabetic()
        && b[2] == b':'
        && (b.len() == 3 || b[3] == b'/')
}

/// Make `path` absolute against the current directory without touching
/// the filesystem, so typed, dropped and imported paths compare equal.
pub fn absolute_path(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = env::current_dir().map_err(|source| MediaBinError::Io {
        path: PathBuf::from("."),
        source,
    })?;
    Ok(cwd.join(path))
}

/// Split pasted terminal text into drop URIs.
///
/// Terminals deliver a dropped file either as a `file://` URI or as a plain
/// (possibly quoted or backslash-escaped) path; plain absolute paths are
/// converted to URIs so both reach the same drop handling.
pub fn paste_to_uris(text: &str) -> Vec<String> {
    let mut uris = Vec::new();
    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if line.starts_with("file://") {
            uris.extend(line.split_whitespace().map(str::to_string));
            continue;
        }
        for path in split_shell_words(line) {
            let path = Path::new(&path);
            match Url::from_file_path(path) {
                Ok(url) => uris.push(url.to_string()),
                Err(()) => tracing::debug!(path = %path.display(), "Ignoring relative pasted path"),
            }
        }
    }
    uris
}

/// Minimal shell-style splitting: whitespace separates words, quotes group,
/// a backslash escapes the next character.
fn split_shell_words(line: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), c) => current.push(c),
            (None, '\'' | '"') => quote = Some(c),
            (None, '\\') => {
                if let Some(next) = chars.next() {
                    current.push(next);
                }
            }
            (None, c) if c.is_whitespace() => {
                if !current.is_empty() {
                    words.push(std::mem::take(&mut current));
                }
            }
            (None, c) => current.push(c),
        }
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}
