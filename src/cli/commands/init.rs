use std::{fs, path::Path};

use anyhow::{Context, Result};

use super::{CommandResult, CommandSummary, InitSummary};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

/// Write a default configuration file into `dir`, unless one exists.
pub fn init(dir: &Path) -> Result<CommandResult> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    let created = if config_path.exists() {
        false
    } else {
        fs::write(&config_path, format!("{}\n", default_config_json()?))
            .with_context(|| format!("Failed to write file: {}", config_path.display()))?;
        true
    };

    Ok(CommandResult {
        summary: CommandSummary::Init(InitSummary {
            path: config_path,
            created,
        }),
    })
}
