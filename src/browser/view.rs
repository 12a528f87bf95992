//! The media browser component.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use super::dnd::{uri_to_path, DragPayload, DragTracker, Point};
use super::filter::{FilterState, TypeFilter};
use super::model::{FileModel, MediaRow, RowSource};
use crate::config::BrowserConfig;
use crate::error::{MediaBinError, Result};
use crate::project::{
    ChangeEvent, ChangeKind, FileRecord, Project, ProjectValue, Session, Subscription, FILES_KEY,
};

/// Message shown when importing a path the project already has.
pub const DUPLICATE_FILE_MESSAGE: &str = "File already added to project.";

/// Result of importing a single path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// The file was appended under this id.
    Added(String),
    /// The exact path is already in the project; nothing changed.
    Duplicate(PathBuf),
}

/// What happened to each URI of a drop.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DropReport {
    pub added: Vec<String>,
    pub duplicates: Vec<PathBuf>,
    pub skipped: Vec<String>,
}

impl DropReport {
    /// User-facing messages the drop produced, one per rejected duplicate.
    pub fn messages(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.duplicates.iter().map(|_| DUPLICATE_FILE_MESSAGE)
    }
}

/// Pointer and drop input a browser-like view responds to.
pub trait ViewEvents {
    fn mouse_press(&mut self, at: Point);

    fn mouse_release(&mut self);

    /// Motion with the primary button held; returns a payload when a drag begins.
    fn mouse_drag(&mut self, at: Point) -> Option<DragPayload>;

    fn drop_uris(&mut self, session: &mut Session, uris: &[String]) -> DropReport;
}

/// Lists the project's files, imports dropped files and follows project
/// changes under the `files` namespace.
pub struct MediaTreeView {
    model: FileModel,
    filter: FilterState,
    clear_enabled: bool,
    drag: DragTracker,
    subscription: Subscription,
}

impl MediaTreeView {
    /// Subscribe to file changes in `session` and build the initial rows.
    pub fn new(session: &mut Session, config: &BrowserConfig) -> Self {
        let subscription = session.subscribe(FILES_KEY);
        let mut view = Self {
            model: FileModel::new(),
            filter: FilterState::new(config.type_filter),
            clear_enabled: false,
            drag: DragTracker::new(config.drag_distance),
            subscription,
        };
        view.rebuild(session.project());
        view
    }

    pub fn rows(&self) -> &[MediaRow] {
        self.model.rows()
    }

    pub fn model(&self) -> &FileModel {
        &self.model
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn filter_text(&self) -> &str {
        &self.filter.text
    }

    pub fn type_filter(&self) -> TypeFilter {
        self.filter.type_filter
    }

    /// Whether the "clear filter" action is available.
    pub fn clear_enabled(&self) -> bool {
        self.clear_enabled
    }

    /// Handle every pending project notification. Returns `true` if the rows
    /// were rebuilt.
    pub fn poll_updates(&mut self, project: &Project) -> bool {
        let mut rebuilt = false;
        for event in self.subscription.drain() {
            rebuilt |= self.on_change(&event, project);
        }
        rebuilt
    }

    /// React to a single project notification.
    pub fn on_change(&mut self, event: &ChangeEvent, project: &Project) -> bool {
        match event.kind {
            ChangeKind::Added => self.update_add(event, project),
            ChangeKind::Updated => self.update_update(event, project),
            ChangeKind::Removed => self.update_remove(event, project),
        }
    }

    fn update_add(&mut self, event: &ChangeEvent, project: &Project) -> bool {
        self.rebuild_if_files(event, project)
    }

    fn update_update(&mut self, event: &ChangeEvent, project: &Project) -> bool {
        self.rebuild_if_files(event, project)
    }

    fn update_remove(&mut self, event: &ChangeEvent, project: &Project) -> bool {
        self.rebuild_if_files(event, project)
    }

    fn rebuild_if_files(&mut self, event: &ChangeEvent, project: &Project) -> bool {
        if !event.in_namespace(FILES_KEY) {
            return false;
        }
        self.rebuild(project);
        true
    }

    /// Rebuild every row from the project's file list.
    pub fn rebuild(&mut self, project: &Project) {
        tracing::info!("updating files model");
        self.model.rebuild(project.files(), &self.filter);
        tracing::debug!(
            rows = self.model.row_count(),
            files = project.files().len(),
            "files model rebuilt"
        );
    }

    /// Import `path` into the project.
    ///
    /// The update goes through the session's update channel; this view picks
    /// up its own notification before returning.
    pub fn add_file(&mut self, session: &mut Session, path: &Path) -> Result<AddOutcome> {
        let path_str = path
            .to_str()
            .ok_or_else(|| MediaBinError::InvalidPath(path.display().to_string()))?;
        if path.file_name().is_none() {
            return Err(MediaBinError::InvalidPath(path_str.to_string()));
        }

        if session.project().contains_path(path_str) {
            tracing::info!(path = path_str, "File already added to project");
            return Ok(AddOutcome::Duplicate(path.to_path_buf()));
        }

        let id = session.generate_id();
        let mut record = FileRecord::new(id.clone(), path_str);
        if let Ok(meta) = fs::metadata(path) {
            record.info.insert("size".into(), Value::from(meta.len()));
        }

        let mut files = session.project().files().to_vec();
        files.push(record);
        session.update(FILES_KEY, ProjectValue::Files(files))?;

        tracing::info!(id = %id, path = path_str, "Added file");
        self.poll_updates(session.project());
        Ok(AddOutcome::Added(id))
    }

    /// Import each dropped `file://` URI that names an existing regular file.
    ///
    /// Duplicates are reported but do not stop the rest of the batch.
    pub fn handle_drop(&mut self, session: &mut Session, uris: &[String]) -> DropReport {
        let mut report = DropReport::default();

        for uri in uris {
            let Some(path) = uri_to_path(uri) else {
                tracing::debug!(uri = %uri, "Ignoring non-file drop");
                report.skipped.push(uri.clone());
                continue;
            };
            if !path.is_file() {
                tracing::debug!(path = %path.display(), "Ignoring drop of missing or non-regular file");
                report.skipped.push(uri.clone());
                continue;
            }

            tracing::info!(path = %path.display(), "Adding file");
            match self.add_file(session, &path) {
                Ok(AddOutcome::Added(id)) => report.added.push(id),
                Ok(AddOutcome::Duplicate(path)) => report.duplicates.push(path),
                Err(e) => {
                    tracing::warn!(error = %e, uri = %uri, "Failed to add dropped file");
                    report.skipped.push(uri.clone());
                }
            }
        }

        report
    }

    /// Replace the filter text and re-render.
    pub fn set_filter_text(&mut self, text: impl Into<String>, project: &Project) {
        self.filter.text = text.into();
        self.filter_changed(project);
    }

    pub fn push_filter_char(&mut self, c: char, project: &Project) {
        self.filter.text.push(c);
        self.filter_changed(project);
    }

    pub fn pop_filter_char(&mut self, project: &Project) {
        if self.filter.text.pop().is_some() {
            self.filter_changed(project);
        }
    }

    /// Empty the filter text; the rows follow through the text change.
    pub fn clear_filter(&mut self, project: &Project) {
        self.set_filter_text(String::new(), project);
    }

    pub fn set_type_filter(&mut self, type_filter: TypeFilter, project: &Project) {
        self.filter.type_filter = type_filter;
        self.rebuild(project);
    }

    fn filter_changed(&mut self, project: &Project) {
        self.rebuild(project);
        self.clear_enabled = !self.filter.text.is_empty();
    }
}

impl ViewEvents for MediaTreeView {
    fn mouse_press(&mut self, at: Point) {
        self.drag.press(at);
    }

    fn mouse_release(&mut self) {
        self.drag.release();
    }

    fn mouse_drag(&mut self, at: Point) -> Option<DragPayload> {
        let payload = self.drag.motion(at)?;
        tracing::debug!(payload = %payload.text, "Drag started");
        Some(payload)
    }

    fn drop_uris(&mut self, session: &mut Session, uris: &[String]) -> DropReport {
        self.handle_drop(session, uris)
    }
}
