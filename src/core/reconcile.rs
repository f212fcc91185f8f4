//! Reconciliation of discovered markers against the translation store.
//!
//! A [`Reconciler`] owns the store and the scan session for one run:
//! every marker occurrence goes through [`Reconciler::update_translation`],
//! and [`Reconciler::finish`] sweeps unreferenced entries into the unused
//! dictionary and hands the store back.

use std::collections::HashMap;

use super::{
    matcher::MarkerMatcher,
    normalize::normalize_content,
    session::{EntryChange, ScanCounters, ScanSession},
    store::{DictionaryKind, TranslationEntry, TranslationStore},
};
use crate::issues::Diagnostic;

/// Which languages every active entry must (and may) carry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguagePolicy {
    /// Languages guaranteed on every entry, empty until translated.
    pub languages: Vec<String>,
    /// Language seeded once with the default content.
    pub content_language: Option<String>,
    /// Remove languages that are neither configured nor the content language.
    pub clean_languages: bool,
}

impl LanguagePolicy {
    fn keeps(&self, code: &str) -> bool {
        self.content_language.as_deref() == Some(code) || self.languages.iter().any(|l| l == code)
    }
}

/// Result of a finished reconciliation run.
#[derive(Debug)]
pub struct ReconcileOutcome {
    pub store: TranslationStore,
    pub counters: ScanCounters,
    /// Entries moved from active to unused by the sweep.
    pub moved_to_unused: usize,
    pub diagnostics: Vec<Diagnostic>,
}

pub struct Reconciler {
    policy: LanguagePolicy,
    store: TranslationStore,
    session: ScanSession,
}

impl Reconciler {
    pub fn new(store: TranslationStore, policy: LanguagePolicy) -> Self {
        Self {
            policy,
            store,
            session: ScanSession::new(),
        }
    }

    pub fn store(&self) -> &TranslationStore {
        &self.store
    }

    pub fn session(&self) -> &ScanSession {
        &self.session
    }

    /// Feed every marker in `source` through [`Self::update_translation`].
    ///
    /// Returns the number of markers found.
    pub fn scan_source(&mut self, matcher: &MarkerMatcher, source: &str) -> usize {
        let mut found = 0;
        for marker in matcher.find_iter(source) {
            let content = normalize_content(marker.content);
            self.update_translation(marker.id, &content);
            found += 1;
        }
        found
    }

    /// Apply one marker occurrence.
    ///
    /// Without an explicit id (or with an empty one) the content itself is
    /// used as the id. Occurrences with neither are ignored.
    pub fn update_translation(&mut self, id: Option<&str>, content: &str) {
        let id = match id {
            Some(id) if !id.is_empty() => id,
            _ => content,
        };
        if id.is_empty() {
            return;
        }

        let seen_before = self.session.observe(id);
        self.revive(id);

        let change = match self.store.active.get(id) {
            None => EntryChange::New,
            Some(entry) if entry.default_content() != Some(content) => EntryChange::Updated,
            Some(_) => EntryChange::Skipped,
        };
        self.session.count(change);

        let entry = self.store.get_or_create(id);
        if seen_before
            && let Some(original) = entry.default_content()
            && original != content
        {
            self.session.warn(Diagnostic::ContentConflict {
                id: id.to_string(),
                original: original.to_string(),
                new: content.to_string(),
            });
        }
        entry.default = Some(content.to_string());

        if let Some(code) = &self.policy.content_language
            && !entry.has_language(code)
        {
            entry.languages.insert(code.clone(), content.to_string());
        }

        self.session.counters.languages_added += complete_languages(entry, &self.policy);
        if self.policy.clean_languages {
            self.session.counters.languages_removed += prune_languages(entry, &self.policy);
        }
    }

    /// Move `id` back from unused if it is not active yet. The unused entry
    /// is dropped either way.
    fn revive(&mut self, id: &str) {
        if let Some(entry) = self.store.remove(DictionaryKind::Unused, id)
            && !self.store.contains(DictionaryKind::Active, id)
        {
            self.store.active.insert(id, entry);
        }
    }

    /// Move every active entry that was not observed into unused.
    ///
    /// Returns the number of entries moved.
    pub fn sweep(&mut self) -> usize {
        let stale: Vec<String> = self
            .store
            .active
            .ids()
            .filter(|id| !self.session.is_observed(id))
            .map(String::from)
            .collect();

        for id in &stale {
            if let Some(entry) = self.store.remove(DictionaryKind::Active, id) {
                self.store.unused.insert(id.clone(), entry);
            }
        }
        stale.len()
    }

    /// Report groups of active ids that share the same default content.
    pub fn check_duplicate_content(&mut self) {
        for (content, ids) in duplicate_content_groups(&self.store) {
            self.session
                .warn(Diagnostic::DuplicateContent { ids, content });
        }
    }

    /// Sweep, check for duplicate content and hand the store back.
    pub fn finish(mut self) -> ReconcileOutcome {
        let moved_to_unused = self.sweep();
        self.check_duplicate_content();
        ReconcileOutcome {
            store: self.store,
            counters: self.session.counters,
            moved_to_unused,
            diagnostics: self.session.diagnostics,
        }
    }
}

/// Add every configured language missing from `entry` with an empty value.
fn complete_languages(entry: &mut TranslationEntry, policy: &LanguagePolicy) -> usize {
    let mut added = 0;
    for code in &policy.languages {
        if !entry.has_language(code) {
            entry.languages.insert(code.clone(), String::new());
            added += 1;
        }
    }
    added
}

/// Remove languages the policy does not keep.
fn prune_languages(entry: &mut TranslationEntry, policy: &LanguagePolicy) -> usize {
    let before = entry.languages.len();
    entry.languages.retain(|code, _| policy.keeps(code));
    before - entry.languages.len()
}

/// Groups of more than one id sharing a default content, ordered by their
/// first id. Each id appears in at most one group.
fn duplicate_content_groups(store: &TranslationStore) -> Vec<(String, Vec<String>)> {
    let mut groups: Vec<(String, Vec<String>)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for (id, entry) in &store.active {
        let Some(content) = entry.default_content() else {
            continue;
        };
        match index.get(content) {
            Some(&i) => groups[i].1.push(id.clone()),
            None => {
                index.insert(content, groups.len());
                groups.push((content.to_string(), vec![id.clone()]));
            }
        }
    }

    groups.retain(|(_, ids)| ids.len() > 1);
    groups
}
