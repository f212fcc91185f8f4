use std::env;

use anyhow::{Context, Result};
use colored::Colorize;

use super::{CommandResult, CommandSummary};
use crate::{
    cli::args::ScanCommand,
    config::{load_config, load_config_file},
    core::{ScanOptions, run_scan},
};

pub fn scan(cmd: ScanCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let loaded = match &args.common.config {
        Some(path) => load_config_file(path)?,
        None => {
            let cwd = env::current_dir().context("Failed to determine the current directory")?;
            load_config(&cwd)?
        }
    };

    if args.common.verbose {
        eprintln!(
            "{} {}",
            "Using configuration file".bold().green(),
            loaded.path.display()
        );
    }

    let report = run_scan(
        &loaded,
        ScanOptions {
            dry_run: args.dry_run,
            verbose: args.common.verbose,
        },
    )?;

    Ok(CommandResult {
        summary: CommandSummary::Scan(report),
    })
}
