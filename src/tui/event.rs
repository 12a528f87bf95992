//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use super::app::{App, ConfirmAction, Mode};
use crate::browser::TypeFilter;

/// Poll for and handle events with a timeout.
///
/// Returns `Ok(true)` if an event was handled, `Ok(false)` if timeout expired.
pub fn handle_events(app: &mut App, timeout: Duration) -> std::io::Result<bool> {
    if !event::poll(timeout)? {
        return Ok(false);
    }
    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(app, key),
        Event::Mouse(mouse) => handle_mouse_event(app, mouse),
        Event::Paste(text) => handle_paste(app, &text),
        _ => return Ok(false),
    }
    Ok(true)
}

/// Handle a single key event.
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    // Global keys (work in any mode)
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    match app.mode {
        Mode::Normal => handle_normal_mode(app, key),
        Mode::Filter => handle_filter_mode(app, key),
        Mode::AddPath => handle_add_path_mode(app, key),
        Mode::Confirm(action) => handle_confirm_mode(app, key, action),
        Mode::Message => handle_message_mode(app, key),
        Mode::Help => handle_help_mode(app, key),
    }
}

/// Handle a mouse event. Only the primary button and the wheel are used.
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    if app.mode != Mode::Normal {
        return;
    }
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => app.mouse_press(mouse.column, mouse.row),
        MouseEventKind::Drag(MouseButton::Left) => app.mouse_drag(mouse.column, mouse.row),
        MouseEventKind::Up(MouseButton::Left) => app.mouse_release(),
        MouseEventKind::ScrollUp => app.move_selection(-1),
        MouseEventKind::ScrollDown => app.move_selection(1),
        _ => {}
    }
}

/// Pasted text: input for the text modes, a file drop otherwise.
pub fn handle_paste(app: &mut App, text: &str) {
    match app.mode {
        Mode::Filter => {
            for c in text.chars().filter(|c| !c.is_control()) {
                app.push_filter_char(c);
            }
        }
        Mode::AddPath => app.input.push_str(text.trim_end_matches(['\r', '\n'])),
        Mode::Normal => app.drop_text(text),
        Mode::Confirm(_) | Mode::Message | Mode::Help => {
            tracing::debug!(mode = ?app.mode, "Ignoring drop while a dialog is open");
            app.status_message = Some("Close the dialog before dropping files".to_string());
        }
    }
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    app.status_message = None;

    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Esc => {
            app.should_quit = true;
        }

        // Navigation
        KeyCode::Up | KeyCode::Char('k') => {
            app.move_selection(-1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.move_selection(1);
        }
        KeyCode::Home | KeyCode::Char('g') => {
            app.selected = 0;
        }
        KeyCode::End | KeyCode::Char('G') => {
            app.select_last();
        }
        KeyCode::PageUp => {
            app.move_selection(-20);
        }
        KeyCode::PageDown => {
            app.move_selection(20);
        }

        // Filters
        KeyCode::Char('/') => {
            app.mode = Mode::Filter;
        }
        KeyCode::Char('x') => {
            if app.view.clear_enabled() {
                app.clear_filter();
            }
        }
        KeyCode::Char('1') => app.set_type_filter(TypeFilter::All),
        KeyCode::Char('2') => app.set_type_filter(TypeFilter::Video),
        KeyCode::Char('3') => app.set_type_filter(TypeFilter::Audio),
        KeyCode::Char('4') => app.set_type_filter(TypeFilter::Image),

        // Project actions
        KeyCode::Char('a') => {
            app.input.clear();
            app.mode = Mode::AddPath;
        }
        KeyCode::Char('d') => {
            if app.selected_row().is_some() {
                app.mode = Mode::Confirm(ConfirmAction::Remove);
            }
        }
        KeyCode::Char('u') => app.undo(),
        KeyCode::Char('U') => app.redo(),
        KeyCode::Char('s') => app.save(),

        // Help
        KeyCode::Char('?') => {
            app.mode = Mode::Help;
        }

        _ => {}
    }
}

fn handle_filter_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.mode = Mode::Normal;
            app.clear_filter();
        }
        KeyCode::Enter => {
            app.mode = Mode::Normal;
            // Keep filter active
        }
        KeyCode::Backspace => {
            app.pop_filter_char();
        }
        KeyCode::Char(c) => {
            app.push_filter_char(c);
        }
        _ => {}
    }
}

fn handle_add_path_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.mode = Mode::Normal;
            app.input.clear();
        }
        KeyCode::Enter => {
            app.mode = Mode::Normal;
            let input = std::mem::take(&mut app.input);
            if !input.trim().is_empty() {
                app.add_path(&input);
            }
        }
        KeyCode::Backspace => {
            app.input.pop();
        }
        KeyCode::Char(c) => {
            app.input.push(c);
        }
        _ => {}
    }
}

fn handle_confirm_mode(app: &mut App, key: KeyEvent, action: ConfirmAction) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            app.mode = Mode::Normal;
            match action {
                ConfirmAction::Remove => app.remove_selected(),
            }
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.mode = Mode::Normal;
        }
        _ => {}
    }
}

fn handle_message_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => app.dismiss_message(),
        _ => {}
    }
}

fn handle_help_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::Enter => {
            app.mode = Mode::Normal;
        }
        _ => {}
    }
}
