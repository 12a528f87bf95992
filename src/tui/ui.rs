//! UI rendering for the TUI.

use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::app::{App, ConfirmAction, Mode};
use super::widgets::RowTable;
use crate::browser::TypeFilter;

const COLUMN_WIDTHS: [Constraint; 4] = [
    Constraint::Percentage(35),
    Constraint::Length(7),
    Constraint::Fill(1),
    Constraint::Length(10),
];

/// Split the screen into header, table and footer.
fn layout(area: Rect) -> [Rect; 3] {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // File table
            Constraint::Length(2), // Footer
        ])
        .areas(area)
}

/// Where the file table will be drawn for a given screen size.
pub fn table_area(screen: Rect) -> Rect {
    layout(screen)[1]
}

/// Render the entire UI.
pub fn render(app: &App, frame: &mut Frame) {
    let [header, table, footer] = layout(frame.area());

    render_header(app, frame, header);
    render_table(app, frame, table);
    render_footer(app, frame, footer);

    // Render overlays based on mode
    match app.mode {
        Mode::Filter => render_input_overlay(frame, " Filter ", "/", app.view.filter_text()),
        Mode::AddPath => render_input_overlay(frame, " Add file ", "", &app.input),
        Mode::Confirm(action) => render_confirm_dialog(app, frame, action),
        Mode::Message => render_message_dialog(app, frame),
        Mode::Help => render_help_overlay(frame),
        Mode::Normal => {}
    }
}

fn render_header(app: &App, frame: &mut Frame, area: Rect) {
    let project = app
        .session
        .path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(unsaved project)".to_string());
    let file_count = app.session.project().files().len();
    let size = humansize::format_size(app.total_size(), humansize::BINARY);

    let mut spans = vec![
        Span::styled(format!(" {}", project), Style::default().fg(Color::White)),
        Span::raw(format!("  {} files, {}  │ ", file_count, size)),
    ];

    let selected_filter = app.view.type_filter();
    for filter in TypeFilter::ALL {
        let (mark, style) = if filter == selected_filter {
            ("(•)", Style::default().fg(Color::Yellow).bold())
        } else {
            ("( )", Style::default().fg(Color::Gray))
        };
        spans.push(Span::styled(format!(" {} {}", mark, filter.label()), style));
    }

    let block = Block::default()
        .title(" Media Bin ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_table(app: &App, frame: &mut Frame, area: Rect) {
    let title = if app.view.filter_text().is_empty() {
        String::new()
    } else {
        format!(" filter: {} ", app.view.filter_text())
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));

    if app.view.rows().is_empty() {
        let message = if app.session.project().files().is_empty() {
            "No files yet. Drop files here or press [a] to add one."
        } else {
            "No matches found"
        };

        let paragraph = Paragraph::new(message)
            .block(block)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));

        frame.render_widget(paragraph, area);
        return;
    }

    let table = RowTable::new(app.view.model(), &COLUMN_WIDTHS)
        .selected(Some(app.selected))
        .block(block);
    frame.render_widget(table, area);
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let hints = match app.mode {
        Mode::Normal if app.view.clear_enabled() => {
            "[↑↓] Navigate  [/] Filter  [x] Clear  [1-4] Type  [a] Add  [d] Remove  [?] Help  [q] Quit"
        }
        Mode::Normal => {
            "[↑↓] Navigate  [/] Filter  [1-4] Type  [a] Add  [d] Remove  [u] Undo  [?] Help  [q] Quit"
        }
        Mode::Filter | Mode::AddPath => "[Enter] Confirm  [Esc] Cancel",
        Mode::Confirm(_) => "[y] Yes  [n] No",
        Mode::Message => "[Enter] OK",
        Mode::Help => "[Esc] Close",
    };

    // Show status message if present, otherwise hints
    let text = app.status_message.as_deref().unwrap_or(hints);

    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn render_input_overlay(frame: &mut Frame, title: &str, prefix: &str, value: &str) {
    let area = frame.area();

    // Position at bottom, above footer
    let input_area = Rect {
        x: 2,
        y: area.height.saturating_sub(6),
        width: area.width.saturating_sub(4).min(70),
        height: 3,
    };

    frame.render_widget(Clear, input_area);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let paragraph = Paragraph::new(format!("{}{}", prefix, value))
        .block(block)
        .style(Style::default().fg(Color::White));

    frame.render_widget(paragraph, input_area);

    frame.set_cursor_position(Position::new(
        input_cursor_x(input_area, prefix, value),
        input_area.y + 1,
    ));
}

/// Cursor column after `prefix` + `value`, kept inside the input box border.
fn input_cursor_x(input_area: Rect, prefix: &str, value: &str) -> u16 {
    let offset = 1 + prefix.chars().count() + value.chars().count();
    let x = usize::from(input_area.x).saturating_add(offset);
    let max = usize::from(input_area.right().saturating_sub(2));
    // `max` came from a u16, so the clamped value fits.
    x.min(max) as u16
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height);
    Rect {
        x: (area.width.saturating_sub(width)) / 2,
        y: (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

fn render_confirm_dialog(app: &App, frame: &mut Frame, action: ConfirmAction) {
    let dialog_area = centered(frame.area(), 50, 7);
    frame.render_widget(Clear, dialog_area);

    let (title, message) = match action {
        ConfirmAction::Remove => {
            let name = app
                .selected_row()
                .map(|r| r.name.clone())
                .unwrap_or_default();
            (
                " Remove File ",
                format!("Remove '{}' from the project?\n\n[y]es  [n]o", name),
            )
        }
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let paragraph = Paragraph::new(message)
        .block(block)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, dialog_area);
}

fn render_message_dialog(app: &App, frame: &mut Frame) {
    let Some(message) = app.messages.front() else {
        return;
    };
    let dialog_area = centered(frame.area(), 44, 5);
    frame.render_widget(Clear, dialog_area);

    let block = Block::default()
        .title(" Media Bin ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let paragraph = Paragraph::new(format!("{}\n\n[Enter] OK", message))
        .block(block)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, dialog_area);
}

fn render_help_overlay(frame: &mut Frame) {
    let help_area = centered(frame.area(), 60, 24);
    frame.render_widget(Clear, help_area);

    let help_text = r#"
 NAVIGATION
 ─────────────────────────────────
 ↑/k ↓/j    Move up / down
 g / G      Go to top / bottom
 Mouse      Click to select, wheel to scroll

 FILTER
 ─────────────────────────────────
 /          Filter by file name
 x          Clear filter
 1 2 3 4    Show all / video / audio / image

 PROJECT
 ─────────────────────────────────
 (drop)     Drop files on the terminal to import
 a          Add a file by path
 d          Remove selected file
 u / U      Undo / Redo
 s          Save project
 ?          Toggle this help
 q/Esc      Quit
"#;

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .style(Style::default().fg(Color::White));

    frame.render_widget(paragraph, help_area);
}
