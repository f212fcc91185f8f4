//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `scan`: Scan sources for translation markers and update the dictionaries
//! - `init`: Create a default configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

/// Common arguments shared by commands that read the configuration.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Configuration file to use instead of searching the current and parent folders
    #[arg(long, env = "TTSCAN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct ScanArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Reconcile and report, but do not write the translation files
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Args)]
pub struct ScanCommand {
    #[command(flatten)]
    pub args: ScanArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Scan source files for translation markers and update the translation files
    Scan(ScanCommand),
    /// Initialize a new ufttconfig.json configuration file
    Init,
}
