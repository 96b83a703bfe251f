use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::{ARDUINO_EXTENSIONS, DEFAULT_SEPARATOR, SettingType, default_setting_types};

pub const CONFIG_FILE_NAME: &str = ".tagdbrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default = "default_separator")]
    pub separator: String,
    #[serde(default = "default_setting_type_entries")]
    pub setting_types: Vec<SettingTypeEntry>,
}

/// A setting tag and the database file it is written to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SettingTypeEntry {
    pub tag: String,
    pub file: String,
}

fn default_extensions() -> Vec<String> {
    ARDUINO_EXTENSIONS.iter().map(|e| e.to_string()).collect()
}

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

fn default_setting_type_entries() -> Vec<SettingTypeEntry> {
    default_setting_types()
        .into_iter()
        .map(|t| SettingTypeEntry {
            tag: t.tag,
            file: t.file,
        })
        .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            ignores: Vec::new(),
            separator: default_separator(),
            setting_types: default_setting_type_entries(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error for invalid `ignores` globs, extensions without a
    /// leading dot, and setting types sharing a tag or output file.
    pub fn validate(&self) -> Result<()> {
        self.ignore_patterns()?;

        for ext in &self.extensions {
            if !ext.starts_with('.') || ext.len() < 2 {
                anyhow::bail!(
                    "Invalid extension in 'extensions': \"{}\" (expected e.g. \".ino\")",
                    ext
                );
            }
        }

        for (i, entry) in self.setting_types.iter().enumerate() {
            for other in &self.setting_types[i + 1..] {
                if entry.tag == other.tag {
                    anyhow::bail!("Duplicate tag in 'settingTypes': \"{}\"", entry.tag);
                }
                if entry.file == other.file {
                    anyhow::bail!("Duplicate file in 'settingTypes': \"{}\"", entry.file);
                }
            }
        }

        Ok(())
    }

    /// Compile the `ignores` globs.
    pub fn ignore_patterns(&self) -> Result<Vec<Pattern>> {
        self.ignores
            .iter()
            .map(|pattern| {
                Pattern::new(pattern)
                    .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))
            })
            .collect()
    }

    pub fn setting_types(&self) -> Vec<SettingType> {
        self.setting_types
            .iter()
            .map(|entry| SettingType::new(&entry.tag, &entry.file))
            .collect()
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

/// Search `start_dir` and its parents for a config file.
///
/// The search stops at a directory containing `.git`.
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    // A relative start would stop popping at the working directory.
    let mut current = start_dir
        .canonicalize()
        .unwrap_or_else(|_| start_dir.to_path_buf());

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
    /// Path of the config file, or `None` if defaults were used.
    pub path: Option<PathBuf>,
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
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
