//! Media Bin - a terminal media browser for video project files
//!
//! This crate provides functionality for:
//! - Loading and saving JSON project files with undoable edits
//! - Browsing the project's media as a filterable table
//! - Importing files by path or by dropping them onto the terminal

pub mod browser;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod project;
pub mod tui;

// Re-export commonly used types
pub use config::Config;
pub use error::{MediaBinError, Result};
