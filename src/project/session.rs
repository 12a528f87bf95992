//! A project document together with its update channel.
//!
//! The session is handed to components explicitly; nothing in the crate
//! reaches for a global application object.

use std::path::{Path, PathBuf};

use super::document::{Project, ProjectValue};
use super::updates::{Subscription, UpdateAction, UpdateManager};
use crate::error::Result;

pub struct Session {
    project: Project,
    updates: UpdateManager,
    path: Option<PathBuf>,
}

impl Session {
    /// An unsaved session with an empty project.
    pub fn new() -> Self {
        Self::with_project(Project::new(), None)
    }

    pub fn with_project(project: Project, path: Option<PathBuf>) -> Self {
        Self {
            project,
            updates: UpdateManager::new(),
            path,
        }
    }

    /// Open the project at `path`, or start an empty one that will be saved there.
    pub fn open(path: &Path) -> Result<Self> {
        let project = if path.exists() {
            Project::load(path)?
        } else {
            tracing::info!(path = %path.display(), "Starting new project");
            Project::new()
        };
        Ok(Self::with_project(project, Some(path.to_path_buf())))
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn generate_id(&self) -> String {
        self.project.generate_id()
    }

    /// Cap the undo history; see [`UpdateManager::set_history_limit`].
    pub fn set_history_limit(&mut self, limit: usize) {
        self.updates.set_history_limit(limit);
    }

    pub fn subscribe(&mut self, namespace: impl Into<String>) -> Subscription {
        self.updates.subscribe(namespace)
    }

    pub fn add(&mut self, key: &str, value: ProjectValue) -> Result<()> {
        self.updates
            .dispatch(&mut self.project, UpdateAction::add(key, value))
    }

    pub fn update(&mut self, key: &str, value: ProjectValue) -> Result<()> {
        self.updates
            .dispatch(&mut self.project, UpdateAction::update(key, value))
    }

    pub fn remove(&mut self, key: &str) -> Result<()> {
        self.updates
            .dispatch(&mut self.project, UpdateAction::remove(key))
    }

    pub fn undo(&mut self) -> bool {
        self.updates.undo(&mut self.project)
    }

    pub fn redo(&mut self) -> bool {
        self.updates.redo(&mut self.project)
    }

    /// Save to the session's path. Returns the path written, or `None` for an
    /// unsaved session.
    pub fn save(&self) -> Result<Option<&Path>> {
        match self.path.as_deref() {
            Some(path) => {
                self.project.save(path)?;
                tracing::info!(path = %path.display(), "Saved project");
                Ok(Some(path))
            }
            None => Ok(None),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::FileRecord;
    use tempfile::tempdir;

    #[test]
    fn open_missing_path_starts_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("new.json");
        let session = Session::open(&path).unwrap();
        assert!(session.project().files().is_empty());
        assert_eq!(session.path(), Some(path.as_path()));
    }

    #[test]
    fn save_writes_to_session_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("project.json");
        let mut session = Session::open(&path).unwrap();
        session
            .add("files/A", ProjectValue::File(FileRecord::new("A", "/a.png")))
            .unwrap();

        assert_eq!(session.save().unwrap(), Some(path.as_path()));
        let reopened = Session::open(&path).unwrap();
        assert_eq!(reopened.project().files().len(), 1);
    }

    #[test]
    fn unsaved_session_save_is_noop() {
        let session = Session::new();
        assert_eq!(session.save().unwrap(), None);
    }
}
