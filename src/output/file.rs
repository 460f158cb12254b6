//! Plain-text file output.

use super::appender::Appender;
use super::{Output, Receipt, TIMESTAMP_FORMAT, resolve_destination};
use crate::colorizer::Colorizer;
use crate::error::Error;
use chrono::Local;
use std::sync::Arc;

const EXTENSIONS: &[&str] = &["log", "txt"];

/// Appends one uncolored `[timestamp] level: message` line per record.
#[derive(Debug)]
pub struct FileOutput {
    colorizer: Arc<Colorizer>,
    appender: Appender,
}

impl FileOutput {
    /// # Errors
    /// [`Error::InvalidDestination`] unless `path` ends in `.log` or `.txt`
    /// (ASCII case-insensitive).
    pub fn new(colorizer: Arc<Colorizer>, path: &str) -> Result<Self, Error> {
        let destination = resolve_destination(path, EXTENSIONS)?;
        Ok(Self {
            colorizer,
            appender: Appender::spawn(destination),
        })
    }

    fn format_record(
        &self,
        level: &str,
        message: &str,
        timestamp: &str,
    ) -> Result<String, Error> {
        if !self.colorizer.has_level(level) {
            return Err(Error::UnknownLevel(level.to_string()));
        }
        Ok(format!("[{timestamp}] {level}: {message}\n"))
    }
}

impl Output for FileOutput {
    fn log(&self, level: &str, message: &str) -> Result<Receipt, Error> {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        let line = self.format_record(level, message, &timestamp)?;

        Ok(Receipt::pending(self.appender.append(line.into_bytes())))
    }

    fn flush(&self) -> Result<(), Error> {
        self.appender.flush()
    }
}
