//! List command implementation

use crate::browser::{build_rows, format_json, format_table, FilterState};
use crate::cli::ListArgs;
use crate::config::Config;
use crate::error::{MediaBinError, Result};
use crate::project::Project;

use super::project_path;

/// Run the list command
pub fn run(args: ListArgs, config: &Config) -> Result<()> {
    print!("{}", render(&args, config)?);
    Ok(())
}

/// Render the listing for `args` without printing it.
pub fn render(args: &ListArgs, config: &Config) -> Result<String> {
    let path = project_path(args.project.as_deref(), config).ok_or(MediaBinError::NoProject)?;
    let project = Project::load(&path)?;

    let mut filter = FilterState::new(args.type_filter.unwrap_or(config.browser.type_filter));
    if let Some(text) = &args.filter {
        filter.text = text.clone();
    }

    let rows = build_rows(project.files(), &filter);
    tracing::debug!(count = rows.len(), "Listing files");

    if args.json {
        let mut json = format_json(&rows, true)?;
        json.push('\n');
        Ok(json)
    } else {
        Ok(format_table(&rows))
    }
}
