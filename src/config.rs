use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::{
    matcher::{DEFAULT_TAGS, MarkerMatcher},
    reconcile::LanguagePolicy,
    store::DEFAULT_KEY,
};

pub const CONFIG_FILE_NAME: &str = "ufttconfig.json";

/// Scanner configuration. Paths are relative to the configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Folders searched recursively for source files.
    #[serde(default = "default_source_folders")]
    pub source_folders: Vec<String>,
    /// Dictionary of translations referenced in the sources.
    #[serde(default = "default_target_file")]
    pub target_file: String,
    /// Dictionary of translations no longer referenced.
    #[serde(default = "default_unused_file")]
    pub unused_file: String,
    /// Languages every entry gets an (initially empty) value for.
    #[serde(default)]
    pub languages: Vec<String>,
    /// When not empty, new entries get the content as value for this language.
    #[serde(default)]
    pub content_language: String,
    /// Marker element names.
    #[serde(default = "default_tags")]
    pub tags: Vec<String>,
    /// Remove values for languages not listed in `languages`.
    #[serde(default)]
    pub clean_languages: bool,
    /// File extensions to scan, without the dot.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    /// Glob patterns, relative to the configuration folder, of files to skip.
    #[serde(default)]
    pub ignores: Vec<String>,
}

fn default_source_folders() -> Vec<String> {
    vec!["src".to_string()]
}

fn default_target_file() -> String {
    "src/translations/translation.json".to_string()
}

fn default_unused_file() -> String {
    "src/translations/unused.json".to_string()
}

fn default_tags() -> Vec<String> {
    DEFAULT_TAGS.iter().map(|t| t.to_string()).collect()
}

fn default_extensions() -> Vec<String> {
    ["jsx", "tsx"].map(String::from).to_vec()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_folders: default_source_folders(),
            target_file: default_target_file(),
            unused_file: default_unused_file(),
            languages: Vec::new(),
            content_language: String::new(),
            tags: default_tags(),
            clean_languages: false,
            extensions: default_extensions(),
            ignores: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Everything that could otherwise fail in the middle of a scan is
    /// checked here, so a bad configuration aborts before any file is read.
    pub fn validate(&self) -> Result<()> {
        MarkerMatcher::new(&self.tags)?;

        if self.source_folders.is_empty() {
            bail!("'sourceFolders' must list at least one folder");
        }
        if self.extensions.is_empty() {
            bail!("'extensions' must list at least one file extension");
        }

        for language in &self.languages {
            validate_language_code(language, "languages")?;
        }
        if !self.content_language.is_empty() {
            validate_language_code(&self.content_language, "contentLanguage")?;
        }

        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        Ok(())
    }

    pub fn content_language(&self) -> Option<&str> {
        Some(self.content_language.as_str()).filter(|l| !l.is_empty())
    }

    pub fn language_policy(&self) -> LanguagePolicy {
        LanguagePolicy {
            languages: self.languages.clone(),
            content_language: self.content_language().map(String::from),
            clean_languages: self.clean_languages,
        }
    }
}

fn validate_language_code(code: &str, field: &str) -> Result<()> {
    if code.trim().is_empty() {
        bail!("Empty language code in '{}'", field);
    }
    if code == DEFAULT_KEY {
        bail!(
            "Language code \"{}\" in '{}' is reserved for the default content",
            code,
            field
        );
    }
    Ok(())
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

/// Look for the configuration file in `start_dir` and each of its parents.
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.is_file() {
            return Some(config_path);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    pub config: Config,
    /// The configuration file that was used.
    pub path: PathBuf,
    /// Folder containing the configuration file; all paths resolve against it.
    pub base_dir: PathBuf,
}

impl ConfigLoadResult {
    pub fn target_path(&self) -> PathBuf {
        self.base_dir.join(&self.config.target_file)
    }

    pub fn unused_path(&self) -> PathBuf {
        self.base_dir.join(&self.config.unused_file)
    }
}

/// Load and validate a configuration file.
pub fn load_config_file(path: &Path) -> Result<ConfigLoadResult> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("Invalid config file: {}", path.display()))?;

    let base_dir = path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));

    Ok(ConfigLoadResult {
        config,
        path: path.to_path_buf(),
        base_dir,
    })
}

/// Find the configuration file starting at `start_dir` and load it.
pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => load_config_file(&path),
        None => bail!(
            "Can not find {} in {} or any of its parent folders.\n\
             Hint: Run `ttscan init` to create one.",
            CONFIG_FILE_NAME,
            start_dir.display()
        ),
    }
}
