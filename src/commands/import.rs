//! Import command implementation

use crate::browser::{absolute_path, AddOutcome, MediaTreeView, DUPLICATE_FILE_MESSAGE};
use crate::cli::ImportArgs;
use crate::config::Config;
use crate::error::{MediaBinError, Result};
use crate::project::Session;

use super::project_path;

/// Summary of an import run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub added: usize,
    pub duplicates: usize,
    pub skipped: usize,
}

/// Run the import command
pub fn run(args: ImportArgs, config: &Config) -> Result<ImportSummary> {
    let path = project_path(args.project.as_deref(), config).ok_or(MediaBinError::NoProject)?;
    let mut session = Session::open(&path)?;
    let mut view = MediaTreeView::new(&mut session, &config.browser);
    let mut summary = ImportSummary::default();

    for file in &args.paths {
        let file = absolute_path(file)?;
        if !file.is_file() {
            eprintln!("Skipping {}: not a regular file", file.display());
            summary.skipped += 1;
            continue;
        }

        match view.add_file(&mut session, &file)? {
            AddOutcome::Added(id) => {
                println!("Added {} ({})", file.display(), id);
                summary.added += 1;
            }
            AddOutcome::Duplicate(file) => {
                eprintln!("{}: {}", file.display(), DUPLICATE_FILE_MESSAGE);
                summary.duplicates += 1;
            }
        }
    }

    session.save()?;
    tracing::info!(?summary, project = %path.display(), "Import finished");
    println!(
        "{} file(s) imported into {}",
        summary.added,
        path.display()
    );

    Ok(summary)
}
