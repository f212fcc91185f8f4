//! Loading and saving translation dictionaries.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde_json::Value;

use crate::core::store::{TranslationDictionary, TranslationStore};

/// Load a dictionary file. A missing file is an empty dictionary.
pub fn load_dictionary(path: &Path) -> Result<TranslationDictionary> {
    if !path.exists() {
        return Ok(TranslationDictionary::new());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    let value: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON: {}", path.display()))?;
    TranslationDictionary::from_json(value)
        .with_context(|| format!("Invalid translation file: {}", path.display()))
}

/// Load the active and unused dictionaries.
pub fn load_store(target: &Path, unused: &Path) -> Result<TranslationStore> {
    Ok(TranslationStore::new(
        load_dictionary(target)?,
        load_dictionary(unused)?,
    ))
}

/// Render a dictionary the way it is written to disk: sorted ids,
/// 2-space indentation and a trailing newline.
pub fn render_dictionary(dictionary: &TranslationDictionary) -> Result<String> {
    Ok(format!("{}\n", dictionary.to_json_string()?))
}

/// Save both dictionaries.
///
/// Both documents are rendered before anything is written, so a
/// serialization failure leaves both files untouched.
pub fn save_store(store: &TranslationStore, target: &Path, unused: &Path) -> Result<()> {
    let target_content = render_dictionary(&store.active)?;
    let unused_content = render_dictionary(&store.unused)?;

    write_atomic(target, &target_content)?;
    write_atomic(unused, &unused_content)?;
    Ok(())
}

/// Write through a sibling temp file and rename it over `path`.
fn write_atomic(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let tmp = tmp_path(path);
    fs::write(&tmp, content)
        .with_context(|| format!("Failed to write file: {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "translations.json".to_string());
    tmp.set_file_name(format!("{}.tmp", file_name));
    tmp
}
