pub mod browse;
pub mod import;
pub mod list;

use std::path::{Path, PathBuf};

use crate::config::Config;

/// The project file named on the command line, else the configured default.
fn project_path(arg: Option<&Path>, config: &Config) -> Option<PathBuf> {
    arg.map(Path::to_path_buf)
        .or_else(|| config.project.default_path.clone())
}
