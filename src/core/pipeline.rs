//! One complete scan run.
//!
//! Phases, strictly in order:
//! 1. **Setup**: build the marker matcher, load both dictionaries and list
//!    the source files. Any failure here aborts before scanning.
//! 2. **Reconcile**: read each file and feed its markers to the reconciler.
//! 3. **Finish**: sweep unreferenced entries and check for duplicate content.
//! 4. **Persist**: write both dictionaries, unless this is a dry run.

use std::fs;

use anyhow::{Context, Result};
use colored::Colorize;

use super::{
    file_scanner::scan_files,
    matcher::MarkerMatcher,
    reconcile::Reconciler,
    session::ScanCounters,
};
use crate::{
    config::ConfigLoadResult,
    issues::Diagnostic,
    json_store::{load_store, save_store},
};

#[derive(Debug, Clone, Copy, Default)]
pub struct ScanOptions {
    /// Run everything but do not write the dictionaries.
    pub dry_run: bool,
    pub verbose: bool,
}

/// Counts reported after a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub files_scanned: usize,
    pub markers_found: usize,
    pub counters: ScanCounters,
    pub moved_to_unused: usize,
    /// Whether language pruning was enabled (and `languages_removed` is meaningful).
    pub clean_languages: bool,
}

/// Everything a finished run produced.
#[derive(Debug)]
pub struct ScanReport {
    pub summary: ScanSummary,
    pub diagnostics: Vec<Diagnostic>,
    /// True when the dictionaries were written.
    pub saved: bool,
}

pub fn run_scan(loaded: &ConfigLoadResult, options: ScanOptions) -> Result<ScanReport> {
    let config = &loaded.config;
    let target_path = loaded.target_path();
    let unused_path = loaded.unused_path();

    // Phase 1: Setup
    let matcher = MarkerMatcher::new(&config.tags)?;

    if options.verbose {
        for path in [&target_path, &unused_path] {
            if path.exists() {
                eprintln!("{} {}", "Loading".bold().green(), path.display());
            }
        }
    }
    let store = load_store(&target_path, &unused_path)?;

    let sources = scan_files(
        &loaded.base_dir,
        &config.source_folders,
        &config.extensions,
        &config.ignores,
    )?;

    // Phase 2: Reconcile
    let mut reconciler = Reconciler::new(store, config.language_policy());
    let mut markers_found = 0;
    for file in &sources {
        let source = fs::read_to_string(file)
            .with_context(|| format!("Failed to read source file: {}", file.display()))?;
        let found = reconciler.scan_source(&matcher, &source);
        if options.verbose && found > 0 {
            eprintln!(
                "{} {} ({} {})",
                "Scanned".bold().green(),
                file.display(),
                found,
                if found == 1 { "marker" } else { "markers" }
            );
        }
        markers_found += found;
    }

    // Phase 3: Finish
    let outcome = reconciler.finish();

    // Phase 4: Persist
    if !options.dry_run {
        if options.verbose {
            for path in [&target_path, &unused_path] {
                eprintln!("{} {}", "Saving".bold().green(), path.display());
            }
        }
        save_store(&outcome.store, &target_path, &unused_path)?;
    }

    Ok(ScanReport {
        summary: ScanSummary {
            files_scanned: sources.len(),
            markers_found,
            counters: outcome.counters,
            moved_to_unused: outcome.moved_to_unused,
            clean_languages: config.clean_languages,
        },
        diagnostics: outcome.diagnostics,
        saved: !options.dry_run,
    })
}
