//! Level-to-color bindings shared by every output of one logger.

use crate::error::Error;
use std::collections::HashMap;

/// Owns the map from level name to color identifier. Constructed once per
/// logger, shared read-only by all of its outputs, and never mutated
/// afterwards, so sharing needs no synchronization.
#[derive(Debug, Clone)]
pub struct Colorizer {
    levels: HashMap<String, String>,
}

impl Colorizer {
    /// A caller-supplied map replaces the built-in levels entirely; partial
    /// maps are not merged with the defaults.
    #[must_use]
    pub const fn new(levels: HashMap<String, String>) -> Self {
        Self { levels }
    }

    /// Existence check, used by outputs to validate a level before
    /// formatting anything.
    #[must_use]
    pub fn has_level(&self, level: &str) -> bool {
        self.levels.contains_key(level)
    }

    /// The color identifier bound to `level`.
    ///
    /// # Errors
    /// [`Error::UnknownLevel`] if `level` has no binding.
    pub fn color_of(&self, level: &str) -> Result<&str, Error> {
        self.levels
            .get(level)
            .map(String::as_str)
            .ok_or_else(|| Error::UnknownLevel(level.to_string()))
    }
}

impl Default for Colorizer {
    /// The built-in four-level palette.
    fn default() -> Self {
        let mut levels = HashMap::new();
        levels.insert("info".to_string(), "green".to_string());
        levels.insert("warning".to_string(), "yellow".to_string());
        levels.insert("error".to_string(), "red".to_string());
        levels.insert("yolo".to_string(), "magenta".to_string());
        Self { levels }
    }
}
