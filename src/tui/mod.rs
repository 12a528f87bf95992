//! TUI module: the media browser in a terminal.

pub mod app;
pub mod event;
pub mod ui;
pub mod widgets;

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::{
    event::{DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::config::TuiConfig;

pub use app::App;

/// Take over the terminal and run `app` until the user quits.
pub fn run(app: &mut App, config: &TuiConfig) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    if config.mouse {
        execute!(stdout, EnableMouseCapture)?;
    }

    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    let result = event_loop(&mut terminal, app, Duration::from_millis(config.tick_rate_ms));

    // Restore the terminal even if the loop failed.
    disable_raw_mode()?;
    if config.mouse {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    tick: Duration,
) -> io::Result<()> {
    while !app.should_quit {
        app.sync();
        terminal.draw(|frame| {
            app.table_area = ui::table_area(frame.area());
            ui::render(app, frame);
        })?;
        event::handle_events(app, tick)?;
    }
    tracing::debug!("TUI event loop finished");
    Ok(())
}
