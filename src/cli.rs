use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::browser::TypeFilter;

/// Media Bin - browse and import the media files of a video editing project
#[derive(Parser, Debug)]
#[command(name = "media-bin")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Launch the interactive media browser
    Tui(TuiArgs),

    /// Import media files into a project
    Import(ImportArgs),

    /// List the files of a project
    List(ListArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(Args, Debug)]
pub struct TuiArgs {
    /// Project file (JSON); created on save if missing
    #[arg(short, long, value_name = "FILE", env = "MEDIA_BIN_PROJECT")]
    pub project: Option<PathBuf>,

    /// Files to import before the browser opens
    #[arg(value_name = "PATHS")]
    pub paths: Vec<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ImportArgs {
    /// Project file (JSON); created if missing
    #[arg(short, long, value_name = "FILE", env = "MEDIA_BIN_PROJECT")]
    pub project: Option<PathBuf>,

    /// Files to import
    #[arg(required = true, value_name = "PATHS")]
    pub paths: Vec<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Project file (JSON)
    #[arg(short, long, value_name = "FILE", env = "MEDIA_BIN_PROJECT")]
    pub project: Option<PathBuf>,

    /// Only show files of this type: all, video, audio, image
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub type_filter: Option<TypeFilter>,

    /// Only show files whose name contains TEXT
    #[arg(short, long, value_name = "TEXT")]
    pub filter: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
