//! In-memory translation dictionaries.
//!
//! An entry is persisted as a flat JSON object: the reserved key `_` holds
//! the default content and every other key is a language code.
//!
//! ```json
//! {
//!   "greet": { "_": "Hello", "en": "Hello", "nl": "Hallo" }
//! }
//! ```

use std::collections::{BTreeMap, btree_map};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize, Serializer, ser::SerializeMap};
use serde_json::Value;

/// Reserved key holding an entry's default content.
pub const DEFAULT_KEY: &str = "_";

/// One translation: default content plus per-language strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "BTreeMap<String, String>")]
pub struct TranslationEntry {
    /// Canonical content, `None` until the entry is touched by a scan.
    pub default: Option<String>,
    /// Language code -> translation. An empty string means "not yet translated".
    pub languages: BTreeMap<String, String>,
}

impl TranslationEntry {
    pub fn new(default: impl Into<String>) -> Self {
        Self {
            default: Some(default.into()),
            languages: BTreeMap::new(),
        }
    }

    pub fn with_language(mut self, code: impl Into<String>, value: impl Into<String>) -> Self {
        self.languages.insert(code.into(), value.into());
        self
    }

    pub fn default_content(&self) -> Option<&str> {
        self.default.as_deref()
    }

    pub fn has_language(&self, code: &str) -> bool {
        self.languages.contains_key(code)
    }

    pub fn language(&self, code: &str) -> Option<&str> {
        self.languages.get(code).map(String::as_str)
    }
}

impl From<BTreeMap<String, String>> for TranslationEntry {
    fn from(mut map: BTreeMap<String, String>) -> Self {
        let default = map.remove(DEFAULT_KEY);
        Self {
            default,
            languages: map,
        }
    }
}

impl Serialize for TranslationEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = self.languages.len() + usize::from(self.default.is_some());
        let mut map = serializer.serialize_map(Some(len))?;
        // Default first, then languages in code order.
        if let Some(default) = &self.default {
            map.serialize_entry(DEFAULT_KEY, default)?;
        }
        for (code, value) in &self.languages {
            map.serialize_entry(code, value)?;
        }
        map.end()
    }
}

/// Mapping id -> entry. Iteration and serialization are in ascending id order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslationDictionary {
    entries: BTreeMap<String, TranslationEntry>,
}

impl TranslationDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dictionary from a parsed JSON document.
    ///
    /// The root must be an object of objects whose values are all strings.
    pub fn from_json(value: Value) -> Result<Self> {
        if !value.is_object() {
            bail!("Root of a translation file must be an object");
        }
        serde_json::from_value(value)
            .context("Translation entries must be objects with string values")
    }

    /// Serialize to pretty-printed JSON (2-space indent, no trailing newline).
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize translations")
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&TranslationEntry> {
        self.entries.get(id)
    }

    /// Return the entry for `id`, inserting an empty one if absent.
    pub fn get_or_create(&mut self, id: &str) -> &mut TranslationEntry {
        self.entries.entry(id.to_string()).or_default()
    }

    /// Insert an entry, replacing any existing one with the same id.
    pub fn insert(&mut self, id: impl Into<String>, entry: TranslationEntry) {
        self.entries.insert(id.into(), entry);
    }

    pub fn remove(&mut self, id: &str) -> Option<TranslationEntry> {
        self.entries.remove(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl FromIterator<(String, TranslationEntry)> for TranslationDictionary {
    fn from_iter<T: IntoIterator<Item = (String, TranslationEntry)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TranslationDictionary {
    type Item = (&'a String, &'a TranslationEntry);
    type IntoIter = btree_map::Iter<'a, String, TranslationEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Which of the two dictionaries an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DictionaryKind {
    Active,
    Unused,
}

/// The active and unused dictionaries of one project.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationStore {
    pub active: TranslationDictionary,
    pub unused: TranslationDictionary,
}

impl TranslationStore {
    pub fn new(active: TranslationDictionary, unused: TranslationDictionary) -> Self {
        Self { active, unused }
    }

    pub fn dictionary(&self, kind: DictionaryKind) -> &TranslationDictionary {
        match kind {
            DictionaryKind::Active => &self.active,
            DictionaryKind::Unused => &self.unused,
        }
    }

    pub fn dictionary_mut(&mut self, kind: DictionaryKind) -> &mut TranslationDictionary {
        match kind {
            DictionaryKind::Active => &mut self.active,
            DictionaryKind::Unused => &mut self.unused,
        }
    }

    pub fn contains(&self, kind: DictionaryKind, id: &str) -> bool {
        self.dictionary(kind).contains(id)
    }

    pub fn remove(&mut self, kind: DictionaryKind, id: &str) -> Option<TranslationEntry> {
        self.dictionary_mut(kind).remove(id)
    }

    /// Get or create `id` in the active dictionary. Never touches unused.
    pub fn get_or_create(&mut self, id: &str) -> &mut TranslationEntry {
        self.active.get_or_create(id)
    }
}
