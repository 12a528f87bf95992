use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::browser::TypeFilter;
use crate::error::{ConfigError, Result};
use crate::project::DEFAULT_HISTORY_LIMIT;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub project: ProjectConfig,
    pub browser: BrowserConfig,
    pub tui: TuiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Project file opened when none is given on the command line
    pub default_path: Option<PathBuf>,
    /// Save the project when leaving the TUI
    pub autosave: bool,
    /// Undo steps kept; 0 disables undo
    pub history_limit: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// Manhattan distance (in cells) the mouse must travel before a drag starts
    pub drag_distance: u16,
    /// Type filter selected at startup: all, video, audio, image
    pub type_filter: TypeFilter,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Event poll interval in milliseconds
    pub tick_rate_ms: u64,
    /// Capture mouse input (press, drag)
    pub mouse: bool,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            default_path: None,
            autosave: false,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            drag_distance: 2,
            type_filter: TypeFilter::All,
        }
    }
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 250,
            mouse: true,
        }
    }
}

impl Config {
    /// Load configuration from `path`, or from the default location if it exists.
    ///
    /// An explicit path that cannot be read is an error; a missing default file
    /// yields the built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::default_path() {
                Some(p) if p.is_file() => p,
                _ => return Ok(Self::default()),
            },
        };

        let content = fs::read_to_string(&path).map_err(|source| ConfigError::ReadError {
            path: path.clone(),
            source,
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ParseError {
                path: path.clone(),
                source,
            })?;

        config.validate()?;
        Ok(config)
    }

    /// `$XDG_CONFIG_HOME/media-bin/config.toml` or the platform equivalent.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("media-bin").join("config.toml"))
    }

    fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.tui.tick_rate_ms == 0 {
            return Err(ConfigError::Invalid(
                "tui.tick_rate_ms must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}
