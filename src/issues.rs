//! Diagnostics produced while reconciling translations.
//!
//! Diagnostics are advisory: they are reported after the run and never
//! change the exit status or prevent the dictionaries from being saved.

use std::fmt;

/// Severity level of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// A non-fatal finding about ids or content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The same id was found twice in one scan with different content.
    /// The later content wins.
    ContentConflict {
        id: String,
        original: String,
        new: String,
    },
    /// Several active ids share the same default content.
    DuplicateContent { ids: Vec<String>, content: String },
}

impl Diagnostic {
    pub fn severity(&self) -> Severity {
        match self {
            Diagnostic::ContentConflict { .. } => Severity::Warning,
            Diagnostic::DuplicateContent { .. } => Severity::Info,
        }
    }

    /// Human-readable message without the severity label.
    pub fn message(&self) -> String {
        match self {
            Diagnostic::ContentConflict { id, original, new } => format!(
                "adding entry for \"{}\" with different content: original=\"{}\" new=\"{}\"",
                id, original, new
            ),
            Diagnostic::DuplicateContent { ids, content } => format!(
                "\"{}\" have the same content \"{}\"",
                ids.join("\", \""),
                content
            ),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity(), self.message())
    }
}
