//! Report formatting and printing utilities.
//!
//! Separate from the engine so ttscan can be used as a library without
//! printing side effects.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{CommandResult, CommandSummary, InitSummary};
use crate::config::CONFIG_FILE_NAME;
use crate::core::{ScanReport, ScanSummary};
use crate::issues::{Diagnostic, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print the result of a command to stdout.
pub fn print(result: &CommandResult) {
    print_to(result, &mut io::stdout().lock());
}

/// Print the result of a command to a custom writer.
pub fn print_to<W: Write>(result: &CommandResult, writer: &mut W) {
    match &result.summary {
        CommandSummary::Scan(report) => print_scan_to(report, writer),
        CommandSummary::Init(summary) => print_init_to(summary, writer),
    }
}

/// Print the scan summary followed by all diagnostics.
pub fn print_scan_to<W: Write>(report: &ScanReport, writer: &mut W) {
    let summary = &report.summary;

    let _ = writeln!(writer, "{}", format_summary(summary));
    if summary.moved_to_unused > 0 {
        let _ = writeln!(
            writer,
            "Moved {} entries to unused",
            summary.moved_to_unused
        );
    }

    print_diagnostics_to(&report.diagnostics, writer);

    if !report.saved {
        let _ = writeln!(
            writer,
            "{} dry run, translation files were not written",
            "note:".bold()
        );
    }
}

/// One-line summary of the counters of a run.
pub fn format_summary(summary: &ScanSummary) -> String {
    let counters = &summary.counters;
    let mut line = format!(
        "Scanned {} source files, added {} entries, updated {} contents, \
         skipped {} contents, added {} language entries",
        summary.files_scanned,
        counters.new,
        counters.updated,
        counters.skipped,
        counters.languages_added
    );
    if summary.clean_languages {
        line.push_str(&format!(
            ", removed {} language entries",
            counters.languages_removed
        ));
    }
    line
}

/// Print diagnostics in the order they were produced.
pub fn print_diagnostics_to<W: Write>(diagnostics: &[Diagnostic], writer: &mut W) {
    for diagnostic in diagnostics {
        let label = match diagnostic.severity() {
            Severity::Warning => format!("{}:", diagnostic.severity()).bold().yellow(),
            Severity::Info => format!("{}:", diagnostic.severity()).bold().cyan(),
        };
        let _ = writeln!(writer, "{} {}", label, diagnostic.message());
    }
}

fn print_init_to<W: Write>(summary: &InitSummary, writer: &mut W) {
    if summary.created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", summary.path.display()).green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.red(),
            format!("{} already exists", CONFIG_FILE_NAME).red()
        );
    }
}
