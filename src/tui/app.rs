//! Application state for the TUI.

use std::collections::VecDeque;
use std::path::Path;

use ratatui::layout::Rect;

use crate::browser::{
    absolute_path, paste_to_uris, AddOutcome, MediaRow, MediaTreeView, Point, TypeFilter, ViewEvents,
    DUPLICATE_FILE_MESSAGE,
};
use crate::config::BrowserConfig;
use crate::project::{file_key, Session};

use super::widgets::scroll_offset;

/// The current UI mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Normal navigation mode.
    Normal,
    /// Editing the filename filter.
    Filter,
    /// Typing a path to import.
    AddPath,
    /// Confirmation dialog mode.
    Confirm(ConfirmAction),
    /// Modal message; dismissed one at a time.
    Message,
    /// Help overlay mode.
    Help,
}

/// Action requiring confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    /// Remove the selected file from the project.
    Remove,
}

/// Main application state for the TUI.
pub struct App {
    /// Project document and its update channel.
    pub session: Session,

    /// The media browser.
    pub view: MediaTreeView,

    /// Currently selected row.
    pub selected: usize,

    /// Current UI mode.
    pub mode: Mode,

    /// Path being typed in `AddPath` mode.
    pub input: String,

    /// Pending modal messages, oldest first.
    pub messages: VecDeque<String>,

    /// Application should quit.
    pub should_quit: bool,

    /// Status message to display.
    pub status_message: Option<String>,

    /// Area the file table was last drawn in, for mouse hit testing.
    pub table_area: Rect,
}

impl App {
    /// Create a new App instance around `session`.
    pub fn new(mut session: Session, config: &BrowserConfig) -> Self {
        let view = MediaTreeView::new(&mut session, config);
        Self {
            session,
            view,
            selected: 0,
            mode: Mode::Normal,
            input: String::new(),
            messages: VecDeque::new(),
            should_quit: false,
            status_message: None,
            table_area: Rect::default(),
        }
    }

    /// Get the currently selected row, if any.
    pub fn selected_row(&self) -> Option<&MediaRow> {
        self.view.rows().get(self.selected)
    }

    pub fn move_selection(&mut self, delta: isize) {
        let len = self.view.rows().len();
        if len == 0 {
            self.selected = 0;
            return;
        }
        let target = self.selected as isize + delta;
        self.selected = target.clamp(0, len as isize - 1) as usize;
    }

    pub fn select_last(&mut self) {
        self.selected = self.view.rows().len().saturating_sub(1);
    }

    /// Apply pending project notifications to the browser.
    pub fn sync(&mut self) {
        if self.view.poll_updates(self.session.project()) {
            self.clamp_selection();
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.view.rows().len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }

    /// Queue a modal message.
    pub fn show_message(&mut self, message: impl Into<String>) {
        self.messages.push_back(message.into());
        self.mode = Mode::Message;
    }

    /// Close the front message; leaves `Message` mode once the queue is empty.
    pub fn dismiss_message(&mut self) {
        self.messages.pop_front();
        if self.messages.is_empty() {
            self.mode = Mode::Normal;
        }
    }

    /// Import a typed path, relative to the working directory.
    pub fn add_path(&mut self, path: &str) {
        let path = match absolute_path(Path::new(path.trim())) {
            Ok(path) => path,
            Err(e) => {
                self.status_message = Some(e.to_string());
                return;
            }
        };
        if !path.is_file() {
            self.status_message = Some(format!("Not a file: {}", path.display()));
            return;
        }

        match self.view.add_file(&mut self.session, &path) {
            Ok(AddOutcome::Added(_)) => {
                self.status_message = Some(format!("Added {}", path.display()));
            }
            Ok(AddOutcome::Duplicate(_)) => self.show_message(DUPLICATE_FILE_MESSAGE),
            Err(e) => self.status_message = Some(e.to_string()),
        }
        self.clamp_selection();
    }

    /// Treat pasted text as files dropped onto the browser.
    pub fn drop_text(&mut self, text: &str) {
        let uris = paste_to_uris(text);
        if uris.is_empty() {
            return;
        }

        let report = self.view.drop_uris(&mut self.session, &uris);
        let messages: Vec<_> = report.messages().collect();
        for message in messages {
            self.show_message(message);
        }
        if !report.added.is_empty() {
            self.status_message = Some(format!("Imported {} file(s)", report.added.len()));
        }
        self.clamp_selection();
    }

    /// Remove the selected file from the project.
    pub fn remove_selected(&mut self) {
        let Some(row) = self.selected_row() else {
            return;
        };
        let (id, name) = (row.id.clone(), row.name.clone());

        match self.session.remove(&file_key(&id)) {
            Ok(()) => self.status_message = Some(format!("Removed {}", name)),
            Err(e) => self.status_message = Some(e.to_string()),
        }
        self.sync();
    }

    pub fn undo(&mut self) {
        self.status_message = Some(if self.session.undo() {
            "Undone".to_string()
        } else {
            "Nothing to undo".to_string()
        });
        self.sync();
    }

    pub fn redo(&mut self) {
        self.status_message = Some(if self.session.redo() {
            "Redone".to_string()
        } else {
            "Nothing to redo".to_string()
        });
        self.sync();
    }

    pub fn save(&mut self) {
        self.status_message = Some(match self.session.save() {
            Ok(Some(path)) => format!("Saved {}", path.display()),
            Ok(None) => "No project file to save to (use --project)".to_string(),
            Err(e) => e.to_string(),
        });
    }

    pub fn set_type_filter(&mut self, type_filter: TypeFilter) {
        self.view.set_type_filter(type_filter, self.session.project());
        self.clamp_selection();
    }

    pub fn push_filter_char(&mut self, c: char) {
        self.view.push_filter_char(c, self.session.project());
        self.clamp_selection();
    }

    pub fn pop_filter_char(&mut self) {
        self.view.pop_filter_char(self.session.project());
        self.clamp_selection();
    }

    pub fn clear_filter(&mut self) {
        self.view.clear_filter(self.session.project());
        self.clamp_selection();
    }

    /// Press inside the table: remember the drag origin and select the row under it.
    pub fn mouse_press(&mut self, column: u16, row: u16) {
        self.view.mouse_press(Point::new(column, row));
        if let Some(index) = self.row_at(column, row) {
            self.selected = index;
        }
    }

    pub fn mouse_drag(&mut self, column: u16, row: u16) {
        if let Some(payload) = self.view.mouse_drag(Point::new(column, row)) {
            self.status_message = Some(format!("Dragging ({})", payload.text));
        }
    }

    pub fn mouse_release(&mut self) {
        self.view.mouse_release();
    }

    /// Row index under a screen position, if any.
    pub fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.table_area;
        // Border on every side, then one header line.
        let first_row = area.y + 2;
        let last_row = (area.y + area.height).saturating_sub(1);
        if column <= area.x
            || column >= (area.x + area.width).saturating_sub(1)
            || row < first_row
            || row >= last_row
        {
            return None;
        }

        let body_height = area.height.saturating_sub(3) as usize;
        let total = self.view.rows().len();
        let index = scroll_offset(self.selected, body_height, total) + (row - first_row) as usize;
        (index < total).then_some(index)
    }

    /// Combined size of the imported files whose size is known.
    pub fn total_size(&self) -> u64 {
        self.session
            .project()
            .files()
            .iter()
            .filter_map(|f| f.size())
            .sum()
    }
}
