//! Command-line interface layer.

use anyhow::Result;

pub mod args;
pub mod commands;
pub mod exit_status;
pub mod report;
mod run;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

use commands::{CommandResult, CommandSummary};

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    let result = run::run(args)?;
    report::print(&result);

    Ok(exit_status_from_result(&result))
}

/// Diagnostics never fail a run; only a refused `init` does.
fn exit_status_from_result(result: &CommandResult) -> ExitStatus {
    match &result.summary {
        CommandSummary::Init(summary) if !summary.created => ExitStatus::Failure,
        _ => ExitStatus::Success,
    }
}
