//! Logger configuration: programmatic construction and TOML file loading.

use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// `#[serde(default)]` on every field: an empty config source must still
/// produce a working logger (console output, built-in levels).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Custom level-to-color bindings. Absent means the built-in four
    /// levels; present means the map replaces them entirely.
    pub levels: Option<HashMap<String, String>>,
    /// Destination selection. Absent means console only.
    pub output: Option<OutputConfig>,
}

/// One field per recognized destination. Keys a config source sets beyond
/// these deserialize to nothing and are silently ignored.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    /// The console has no destination path, only a presence toggle.
    pub console: bool,
    /// Plain-text destination; must end in `.log` or `.txt`.
    pub file: Option<String>,
    /// HTML destination; must end in `.html`.
    pub html: Option<String>,
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    /// [`crate::Error::Io`] if the file cannot be read,
    /// [`crate::Error::ConfigParse`] on a TOML syntax error.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }
}
