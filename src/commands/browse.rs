//! Interactive browser command

use crate::cli::TuiArgs;
use crate::config::Config;
use crate::error::{MediaBinError, Result};
use crate::project::Session;
use crate::tui::{self, App};

use super::project_path;

/// Run the interactive browser
pub fn run(args: TuiArgs, config: &Config) -> Result<()> {
    let mut session = match project_path(args.project.as_deref(), config) {
        Some(path) => Session::open(&path)?,
        None => Session::new(),
    };
    session.set_history_limit(config.project.history_limit);

    let mut app = App::new(session, &config.browser);
    for path in &args.paths {
        app.add_path(&path.to_string_lossy());
    }

    tui::run(&mut app, &config.tui).map_err(MediaBinError::Terminal)?;

    if config.project.autosave {
        if let Some(path) = app.session.save()? {
            tracing::info!(path = %path.display(), "Project saved");
        }
    }

    Ok(())
}
