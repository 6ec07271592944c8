use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::translate::TranslatePolicy;

pub const CONFIG_FILE_NAME: &str = ".tscatrc.json";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_catalogues_root")]
    pub catalogues_root: String,
    #[serde(default = "default_includes")]
    pub includes: Vec<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default = "default_source_language")]
    pub source_language: String,
    #[serde(default = "default_include_unfinished")]
    pub include_unfinished: bool,
    #[serde(default)]
    pub ignore_contexts: Vec<String>,
}

fn default_catalogues_root() -> String {
    "./translations".to_string()
}

fn default_includes() -> Vec<String> {
    vec!["**/*.ts".to_string()]
}

fn default_source_language() -> String {
    "en".to_string()
}

fn default_include_unfinished() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalogues_root: default_catalogues_root(),
            includes: default_includes(),
            ignores: Vec::new(),
            source_language: default_source_language(),
            include_unfinished: default_include_unfinished(),
            ignore_contexts: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `includes` or `ignores` is invalid.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.includes {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'includes': \"{}\"", pattern))?;
        }
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }
        if self.source_language.trim().is_empty() {
            anyhow::bail!("'sourceLanguage' must not be empty");
        }

        Ok(())
    }

    pub fn translate_policy(&self) -> TranslatePolicy {
        TranslatePolicy {
            include_unfinished: self.include_unfinished,
        }
    }

    pub fn is_ignored_context(&self, context: &str) -> bool {
        self.ignore_contexts.iter().any(|name| name == context)
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
