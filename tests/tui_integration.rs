//! Integration tests for the TUI module.
//!
//! These tests drive the app with simulated keys, mouse events and pastes,
//! without requiring an actual terminal.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use media_bin::browser::TypeFilter;
use media_bin::config::BrowserConfig;
use media_bin::project::Session;
use media_bin::tui::app::{ConfirmAction, Mode};
use media_bin::tui::event::{handle_key_event, handle_mouse_event, handle_paste};
use media_bin::tui::App;
use ratatui::layout::Rect;
use tempfile::{tempdir, TempDir};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn key_char(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        handle_key_event(app, key_char(c));
    }
}

fn media_dir() -> (TempDir, Vec<PathBuf>) {
    let temp = tempdir().unwrap();
    let files: Vec<PathBuf> = ["beach.mp4", "song.mp3", "photo.png"]
        .iter()
        .map(|name| {
            let path = temp.path().join(name);
            fs::write(&path, name).unwrap();
            path
        })
        .collect();
    (temp, files)
}

fn app_with(files: &[PathBuf]) -> App {
    let mut app = App::new(Session::new(), &BrowserConfig::default());
    for file in files {
        app.add_path(file.to_str().unwrap());
    }
    app
}

fn names(app: &App) -> Vec<&str> {
    app.view.rows().iter().map(|r| r.name.as_str()).collect()
}

#[test]
fn add_path_through_input_mode() {
    let (_temp, files) = media_dir();
    let mut app = app_with(&[]);

    handle_key_event(&mut app, key_char('a'));
    assert_eq!(app.mode, Mode::AddPath);
    type_text(&mut app, files[0].to_str().unwrap());
    handle_key_event(&mut app, key(KeyCode::Enter));

    assert_eq!(app.mode, Mode::Normal);
    assert_eq!(names(&app), vec!["beach.mp4"]);
    assert_eq!(app.view.rows()[0].file_type.as_str(), "video");
}

#[test]
fn typed_relative_path_matches_later_drop() {
    let (temp, _files) = media_dir();
    let base = temp.path().canonicalize().unwrap();
    let mut app = app_with(&[]);

    let original = env::current_dir().unwrap();
    env::set_current_dir(&base).unwrap();
    app.add_path("beach.mp4");
    app.add_path("does-not-exist.mp4");
    env::set_current_dir(original).unwrap();

    let stored: Vec<_> = app
        .session
        .project()
        .files()
        .iter()
        .map(|f| PathBuf::from(&f.path))
        .collect();
    assert_eq!(stored, vec![base.join("beach.mp4")]);

    handle_paste(&mut app, base.join("beach.mp4").to_str().unwrap());
    assert_eq!(app.session.project().files().len(), 1);
    assert_eq!(app.mode, Mode::Message);
}

#[test]
fn duplicate_add_shows_modal_message() {
    let (_temp, files) = media_dir();
    let mut app = app_with(&files[..1]);

    app.add_path(files[0].to_str().unwrap());

    assert_eq!(app.mode, Mode::Message);
    assert_eq!(
        app.messages.front().map(String::as_str),
        Some("File already added to project.")
    );
    assert_eq!(app.session.project().files().len(), 1);

    handle_key_event(&mut app, key(KeyCode::Enter));
    assert_eq!(app.mode, Mode::Normal);
}

#[test]
fn paste_drops_files_into_project() {
    let (_temp, files) = media_dir();
    let mut app = app_with(&[]);

    let text = files
        .iter()
        .map(|p| url::Url::from_file_path(p).unwrap().to_string())
        .collect::<Vec<_>>()
        .join("\n");
    handle_paste(&mut app, &text);

    assert_eq!(app.session.project().files().len(), 3);
    assert_eq!(names(&app), vec!["beach.mp4", "song.mp3", "photo.png"]);
}

#[test]
fn paste_of_plain_paths_is_a_drop() {
    let (_temp, files) = media_dir();
    let mut app = app_with(&[]);

    handle_paste(&mut app, files[1].to_str().unwrap());

    assert_eq!(names(&app), vec!["song.mp3"]);
}

#[test]
fn dropping_duplicates_keeps_the_rest() {
    let (_temp, files) = media_dir();
    let mut app = app_with(&files[..1]);

    let text = format!("{}\n{}", files[0].display(), files[2].display());
    handle_paste(&mut app, &text);

    assert_eq!(app.session.project().files().len(), 2);
    assert_eq!(app.mode, Mode::Message);
    assert_eq!(app.messages.len(), 1);
}

#[test]
fn dropping_missing_file_is_ignored() {
    let mut app = app_with(&[]);

    handle_paste(&mut app, "file:///definitely/not/here.mp4");

    assert!(app.session.project().files().is_empty());
    assert_eq!(app.mode, Mode::Normal);
}

#[test]
fn filter_mode_narrows_rows() {
    let (_temp, files) = media_dir();
    let mut app = app_with(&files);

    handle_key_event(&mut app, key_char('/'));
    assert_eq!(app.mode, Mode::Filter);
    type_text(&mut app, "song");
    handle_key_event(&mut app, key(KeyCode::Enter));

    assert_eq!(app.mode, Mode::Normal);
    assert_eq!(names(&app), vec!["song.mp3"]);
    assert!(app.view.clear_enabled());

    handle_key_event(&mut app, key_char('x'));
    assert_eq!(app.view.rows().len(), 3);
    assert!(!app.view.clear_enabled());
}

#[test]
fn filter_is_case_sensitive() {
    let (_temp, files) = media_dir();
    let mut app = app_with(&files);

    handle_key_event(&mut app, key_char('/'));
    type_text(&mut app, "BEACH");

    assert!(app.view.rows().is_empty());
}

#[test]
fn escape_in_filter_mode_clears_text() {
    let (_temp, files) = media_dir();
    let mut app = app_with(&files);

    handle_key_event(&mut app, key_char('/'));
    type_text(&mut app, "photo");
    assert_eq!(app.view.rows().len(), 1);

    handle_key_event(&mut app, key(KeyCode::Esc));
    assert_eq!(app.view.filter_text(), "");
    assert_eq!(app.view.rows().len(), 3);
}

#[test]
fn number_keys_select_type_filter() {
    let (_temp, files) = media_dir();
    let mut app = app_with(&files);

    handle_key_event(&mut app, key_char('3'));
    assert_eq!(app.view.type_filter(), TypeFilter::Audio);
    assert_eq!(names(&app), vec!["song.mp3"]);

    handle_key_event(&mut app, key_char('4'));
    assert_eq!(names(&app), vec!["photo.png"]);

    handle_key_event(&mut app, key_char('1'));
    assert_eq!(app.view.rows().len(), 3);
}

#[test]
fn type_and_text_filters_combine() {
    let (_temp, files) = media_dir();
    let mut app = app_with(&files);

    handle_key_event(&mut app, key_char('2'));
    handle_key_event(&mut app, key_char('/'));
    type_text(&mut app, "song");

    assert!(app.view.rows().is_empty());
}

#[test]
fn remove_with_confirmation_and_undo() {
    let (_temp, files) = media_dir();
    let mut app = app_with(&files);

    handle_key_event(&mut app, key(KeyCode::Down));
    handle_key_event(&mut app, key_char('d'));
    assert_eq!(app.mode, Mode::Confirm(ConfirmAction::Remove));

    handle_key_event(&mut app, key_char('y'));
    assert_eq!(names(&app), vec!["beach.mp4", "photo.png"]);

    handle_key_event(&mut app, key_char('u'));
    assert_eq!(names(&app), vec!["beach.mp4", "song.mp3", "photo.png"]);

    handle_key_event(&mut app, key_char('U'));
    assert_eq!(names(&app), vec!["beach.mp4", "photo.png"]);
}

#[test]
fn cancel_remove_keeps_file() {
    let (_temp, files) = media_dir();
    let mut app = app_with(&files);

    handle_key_event(&mut app, key_char('d'));
    handle_key_event(&mut app, key_char('n'));

    assert_eq!(app.mode, Mode::Normal);
    assert_eq!(app.view.rows().len(), 3);
}

#[test]
fn navigation_stays_in_bounds() {
    let (_temp, files) = media_dir();
    let mut app = app_with(&files);

    handle_key_event(&mut app, key(KeyCode::Up));
    assert_eq!(app.selected, 0);

    handle_key_event(&mut app, key_char('G'));
    assert_eq!(app.selected, 2);

    handle_key_event(&mut app, key(KeyCode::PageDown));
    assert_eq!(app.selected, 2);

    handle_key_event(&mut app, key_char('g'));
    assert_eq!(app.selected, 0);
}

#[test]
fn mouse_drag_past_threshold_starts_once() {
    let (_temp, files) = media_dir();
    let mut app = app_with(&files);
    app.table_area = Rect::new(0, 3, 80, 20);
    app.status_message = None;

    let mouse = |kind, column, row| MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    };

    handle_mouse_event(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), 5, 6));
    assert_eq!(app.selected, 1);

    handle_mouse_event(&mut app, mouse(MouseEventKind::Drag(MouseButton::Left), 6, 6));
    assert!(app.status_message.is_none());

    handle_mouse_event(&mut app, mouse(MouseEventKind::Drag(MouseButton::Left), 8, 6));
    assert!(app
        .status_message
        .as_deref()
        .is_some_and(|s| s.starts_with("Dragging")));

    handle_mouse_event(&mut app, mouse(MouseEventKind::Up(MouseButton::Left), 8, 6));
}

#[test]
fn save_writes_project_file() {
    let (temp, files) = media_dir();
    let project_path = temp.path().join("project.json");
    let mut app = App::new(
        Session::open(&project_path).unwrap(),
        &BrowserConfig::default(),
    );
    app.add_path(files[0].to_str().unwrap());

    handle_key_event(&mut app, key_char('s'));

    assert!(Path::new(&project_path).exists());
    let saved = fs::read_to_string(&project_path).unwrap();
    assert!(saved.contains("beach.mp4"));
}

#[test]
fn quit_on_q() {
    let mut app = app_with(&[]);
    handle_key_event(&mut app, key_char('q'));
    assert!(app.should_quit);
}

#[test]
fn ctrl_c_quits_from_any_mode() {
    let mut app = app_with(&[]);
    handle_key_event(&mut app, key_char('/'));
    handle_key_event(
        &mut app,
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
    );
    assert!(app.should_quit);
}
