use std::path::PathBuf;

use crate::core::ScanReport;

#[derive(Debug)]
pub enum CommandSummary {
    Scan(ScanReport),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
    /// False when a configuration file already existed.
    pub created: bool,
}

/// Result of running a ttscan command
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
}
