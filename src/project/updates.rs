//! Change notification and undo history for the project document.
//!
//! Components subscribe to a key namespace and receive a [`ChangeEvent`] for
//! every action whose key starts with that namespace. Events are delivered
//! over a channel and drained by the subscriber on its own schedule.

use std::sync::mpsc::{self, Receiver, Sender};

use super::document::{Project, ProjectValue};
use super::file::FileRecord;
use crate::error::Result;

/// What happened to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Added,
    Updated,
    Removed,
}

/// Notification sent to subscribers after an action is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    pub kind: ChangeKind,
    pub key: String,
}

impl ChangeEvent {
    pub fn in_namespace(&self, namespace: &str) -> bool {
        self.key.starts_with(namespace)
    }
}

/// A change to apply to the project.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateAction {
    pub kind: ChangeKind,
    pub key: String,
    /// Payload for `Added` and `Updated`; `None` for `Removed`.
    pub value: Option<ProjectValue>,
}

impl UpdateAction {
    pub fn add(key: impl Into<String>, value: ProjectValue) -> Self {
        Self {
            kind: ChangeKind::Added,
            key: key.into(),
            value: Some(value),
        }
    }

    pub fn update(key: impl Into<String>, value: ProjectValue) -> Self {
        Self {
            kind: ChangeKind::Updated,
            key: key.into(),
            value: Some(value),
        }
    }

    pub fn remove(key: impl Into<String>) -> Self {
        Self {
            kind: ChangeKind::Removed,
            key: key.into(),
            value: None,
        }
    }

    fn apply(&self, project: &mut Project) -> Result<()> {
        match (&self.kind, &self.value) {
            (ChangeKind::Added, Some(value)) => project.insert(&self.key, value.clone()),
            (ChangeKind::Updated, Some(value)) => project.set(&self.key, value.clone()),
            (ChangeKind::Removed, _) => project.delete(&self.key),
            (_, None) => Err(crate::error::MediaBinError::invalid_key(
                &self.key,
                "action is missing a value",
            )),
        }
    }

    fn event(&self) -> ChangeEvent {
        ChangeEvent {
            kind: self.kind,
            key: self.key.clone(),
        }
    }
}

/// Receiving end of a namespace subscription.
pub struct Subscription {
    namespace: String,
    receiver: Receiver<ChangeEvent>,
}

impl Subscription {
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Take every event delivered since the last call, oldest first.
    pub fn drain(&self) -> Vec<ChangeEvent> {
        self.receiver.try_iter().collect()
    }
}

struct Subscriber {
    namespace: String,
    sender: Sender<ChangeEvent>,
}

/// An applied action and the file list to put back when it is reverted
/// (or re-applied, on the redo stack).
struct HistoryEntry {
    action: UpdateAction,
    restore: Vec<FileRecord>,
}

/// Undo entries kept when no limit is configured.
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// Applies actions to a project, keeps undo/redo history and notifies
/// subscribers.
pub struct UpdateManager {
    subscribers: Vec<Subscriber>,
    undo_stack: Vec<HistoryEntry>,
    redo_stack: Vec<HistoryEntry>,
    history_limit: usize,
}

impl Default for UpdateManager {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdateManager {
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }

    /// Keep at most `limit` undo entries, dropping the oldest first.
    /// Zero disables undo.
    pub fn set_history_limit(&mut self, limit: usize) {
        self.history_limit = limit;
        self.trim_history();
    }

    pub fn history_limit(&self) -> usize {
        self.history_limit
    }

    /// Register interest in every key starting with `namespace`.
    pub fn subscribe(&mut self, namespace: impl Into<String>) -> Subscription {
        let namespace = namespace.into();
        let (sender, receiver) = mpsc::channel();
        self.subscribers.push(Subscriber {
            namespace: namespace.clone(),
            sender,
        });
        Subscription {
            namespace,
            receiver,
        }
    }

    /// Apply `action`, record it for undo and notify subscribers.
    ///
    /// A failed action leaves the project and the history untouched.
    pub fn dispatch(&mut self, project: &mut Project, action: UpdateAction) -> Result<()> {
        let files_before = project.files().to_vec();
        action.apply(project)?;

        tracing::debug!(kind = ?action.kind, key = %action.key, "applied project action");
        self.broadcast(&action.event());
        self.undo_stack.push(HistoryEntry {
            action,
            restore: files_before,
        });
        self.redo_stack.clear();
        self.trim_history();
        Ok(())
    }

    /// Revert the most recent action. Returns `false` when there is nothing to undo.
    pub fn undo(&mut self, project: &mut Project) -> bool {
        let Some(entry) = self.undo_stack.pop() else {
            return false;
        };

        let files_after = project.files().to_vec();
        project.replace_files(entry.restore);
        self.broadcast(&ChangeEvent {
            kind: ChangeKind::Updated,
            key: entry.action.key.clone(),
        });
        self.redo_stack.push(HistoryEntry {
            action: entry.action,
            restore: files_after,
        });
        true
    }

    /// Re-apply the most recently undone action.
    pub fn redo(&mut self, project: &mut Project) -> bool {
        let Some(entry) = self.redo_stack.pop() else {
            return false;
        };

        let files_before = project.files().to_vec();
        project.replace_files(entry.restore);
        self.broadcast(&entry.action.event());
        self.undo_stack.push(HistoryEntry {
            action: entry.action,
            restore: files_before,
        });
        self.trim_history();
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    fn trim_history(&mut self) {
        let excess = self.undo_stack.len().saturating_sub(self.history_limit);
        self.undo_stack.drain(..excess);
    }

    fn broadcast(&mut self, event: &ChangeEvent) {
        // Dropped subscriptions are pruned on send failure.
        self.subscribers.retain(|sub| {
            if !event.in_namespace(&sub.namespace) {
                return true;
            }
            sub.sender.send(event.clone()).is_ok()
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, path: &str) -> FileRecord {
        FileRecord::new(id, path)
    }

    #[test]
    fn subscribers_receive_matching_namespace_only() {
        let mut manager = UpdateManager::new();
        let mut project = Project::new();
        let files = manager.subscribe("files");
        let clips = manager.subscribe("clips");

        manager
            .dispatch(
                &mut project,
                UpdateAction::add("files/A", ProjectValue::File(record("A", "/a.mp4"))),
            )
            .unwrap();

        assert_eq!(
            files.drain(),
            vec![ChangeEvent {
                kind: ChangeKind::Added,
                key: "files/A".into()
            }]
        );
        assert!(clips.drain().is_empty());
        assert!(files.drain().is_empty());
    }

    #[test]
    fn failed_action_is_not_broadcast_or_recorded() {
        let mut manager = UpdateManager::new();
        let mut project = Project::new();
        let sub = manager.subscribe("files");

        let result = manager.dispatch(&mut project, UpdateAction::remove("files/missing"));
        assert!(result.is_err());
        assert!(sub.drain().is_empty());
        assert!(!manager.can_undo());
    }

    #[test]
    fn undo_and_redo_restore_file_list() {
        let mut manager = UpdateManager::new();
        let mut project = Project::new();
        let sub = manager.subscribe("files");

        manager
            .dispatch(
                &mut project,
                UpdateAction::update("files", ProjectValue::Files(vec![record("A", "/a.mp4")])),
            )
            .unwrap();
        manager
            .dispatch(
                &mut project,
                UpdateAction::add("files/B", ProjectValue::File(record("B", "/b.wav"))),
            )
            .unwrap();
        assert_eq!(project.files().len(), 2);

        assert!(manager.undo(&mut project));
        assert_eq!(project.files().len(), 1);
        assert!(manager.can_redo());

        assert!(manager.redo(&mut project));
        assert_eq!(project.files().len(), 2);
        assert_eq!(project.files()[1].id, "B");

        // dispatch + dispatch + undo + redo
        assert_eq!(sub.drain().len(), 4);
    }

    #[test]
    fn new_action_clears_redo() {
        let mut manager = UpdateManager::new();
        let mut project = Project::new();

        manager
            .dispatch(
                &mut project,
                UpdateAction::add("files/A", ProjectValue::File(record("A", "/a.mp4"))),
            )
            .unwrap();
        manager.undo(&mut project);
        assert!(manager.can_redo());

        manager
            .dispatch(
                &mut project,
                UpdateAction::add("files/B", ProjectValue::File(record("B", "/b.mp4"))),
            )
            .unwrap();
        assert!(!manager.can_redo());
        assert!(!manager.redo(&mut project));
    }

    #[test]
    fn history_is_capped_oldest_first() {
        let mut manager = UpdateManager::new();
        let mut project = Project::new();
        manager.set_history_limit(2);

        for id in ["A", "B", "C"] {
            manager
                .dispatch(
                    &mut project,
                    UpdateAction::add(
                        format!("files/{id}"),
                        ProjectValue::File(record(id, &format!("/{id}.mp4"))),
                    ),
                )
                .unwrap();
        }

        assert!(manager.undo(&mut project));
        assert!(manager.undo(&mut project));
        assert!(!manager.undo(&mut project));
        // The first add is past the limit and stays applied.
        assert_eq!(project.files().len(), 1);
        assert_eq!(project.files()[0].id, "A");
    }

    #[test]
    fn zero_history_limit_disables_undo() {
        let mut manager = UpdateManager::new();
        let mut project = Project::new();
        manager.set_history_limit(0);

        manager
            .dispatch(&mut project, UpdateAction::update("files", ProjectValue::Files(vec![])))
            .unwrap();
        assert!(!manager.can_undo());
    }

    #[test]
    fn dropped_subscription_is_pruned() {
        let mut manager = UpdateManager::new();
        let mut project = Project::new();
        drop(manager.subscribe("files"));

        manager
            .dispatch(&mut project, UpdateAction::update("files", ProjectValue::Files(vec![])))
            .unwrap();
        assert!(manager.subscribers.is_empty());
    }
}
