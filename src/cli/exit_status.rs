use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed; diagnostics never change this
/// - `Failure` (1): Command refused to do its work (e.g. config already exists)
/// - `Error` (2): Command failed (config error, unreadable file, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed successfully.
    Success,
    /// Command completed without doing its work.
    Failure,
    /// Command failed due to a configuration or I/O error.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
