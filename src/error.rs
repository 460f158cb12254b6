//! Unified error type for all fanlog operations.

use std::path::PathBuf;

/// Error type for fanlog operations.
///
/// Nothing in this crate catches and downgrades these; every failure
/// propagates to the caller of the operation that triggered it.
#[derive(Debug)]
pub enum Error {
    /// Level not present in the active level map.
    UnknownLevel(String),
    /// Destination path whose extension is outside the output's accepted set.
    InvalidDestination {
        path: PathBuf,
        expected: &'static [&'static str],
    },
    /// I/O error from a console write, a file append, or a config read.
    Io(std::io::Error),
    /// TOML config parsing error.
    ConfigParse(toml::de::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownLevel(level) => write!(f, "unknown level: '{level}'"),
            Self::InvalidDestination { path, expected } => {
                let accepted = expected
                    .iter()
                    .map(|ext| format!(".{ext}"))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(
                    f,
                    "invalid destination: {} (expected {accepted})",
                    path.display()
                )
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::ConfigParse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}
