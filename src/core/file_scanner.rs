use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use walkdir::WalkDir;

/// Collect candidate files under every source folder.
///
/// Folders are relative to `base_dir` and walked in the given order; files
/// inside a folder are sorted by name so repeated runs see the same order.
/// Symbolic links are followed. A file is kept when its extension
/// (case-insensitive) is listed in `extensions` and no `ignores` glob
/// matches its path relative to `base_dir`.
///
/// Any path that cannot be read fails the whole listing: a skipped folder
/// would leave its markers unobserved and their entries would be swept.
pub fn scan_files(
    base_dir: &Path,
    source_folders: &[String],
    extensions: &[String],
    ignores: &[String],
) -> Result<Vec<PathBuf>> {
    let ignore_patterns = ignores
        .iter()
        .map(|p| {
            Pattern::new(p)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", p))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut files = Vec::new();
    let mut seen: HashSet<PathBuf> = HashSet::new();

    for folder in source_folders {
        let dir = base_dir.join(folder);
        if !dir.is_dir() {
            bail!(
                "Source folder '{}' does not exist or is not a directory.\n\
                 Hint: Check the 'sourceFolders' setting in your configuration file.",
                dir.display()
            );
        }

        for entry in WalkDir::new(&dir).follow_links(true).sort_by_file_name() {
            let entry = entry
                .with_context(|| format!("Failed to read source folder: {}", dir.display()))?;
            let path = entry.path();
            if !entry.file_type().is_file() || !has_extension(path, extensions) {
                continue;
            }

            let relative = path.strip_prefix(base_dir).unwrap_or(path);
            if ignore_patterns.iter().any(|p| p.matches_path(relative)) {
                continue;
            }

            if seen.insert(path.to_path_buf()) {
                files.push(path.to_path_buf());
            }
        }
    }

    Ok(files)
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|x| x.eq_ignore_ascii_case(ext)))
}
