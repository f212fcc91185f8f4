//! Per-run scan state.

use std::collections::HashSet;

use crate::issues::Diagnostic;

/// Counters accumulated while reconciling markers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanCounters {
    /// Entries created in the active dictionary.
    pub new: usize,
    /// Entries whose default content changed.
    pub updated: usize,
    /// Entries matched with unchanged content.
    pub skipped: usize,
    /// Empty language values added.
    pub languages_added: usize,
    /// Language values removed by pruning.
    pub languages_removed: usize,
}

/// How an occurrence relates to the active dictionary before it is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryChange {
    New,
    Updated,
    Skipped,
}

/// State of a single scan run. Never persisted.
#[derive(Debug, Default)]
pub struct ScanSession {
    observed: HashSet<String>,
    pub counters: ScanCounters,
    pub diagnostics: Vec<Diagnostic>,
}

impl ScanSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `id` as observed. Returns true if it was already observed
    /// earlier in this session.
    pub fn observe(&mut self, id: &str) -> bool {
        if self.observed.contains(id) {
            return true;
        }
        self.observed.insert(id.to_string());
        false
    }

    pub fn is_observed(&self, id: &str) -> bool {
        self.observed.contains(id)
    }

    pub fn observed_count(&self) -> usize {
        self.observed.len()
    }

    pub fn count(&mut self, change: EntryChange) {
        match change {
            EntryChange::New => self.counters.new += 1,
            EntryChange::Updated => self.counters.updated += 1,
            EntryChange::Skipped => self.counters.skipped += 1,
        }
    }

    pub fn warn(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}
