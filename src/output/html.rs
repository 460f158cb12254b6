//! HTML file output.
//!
//! Appends one `<p>` fragment per record. The level's color identifier is
//! emitted verbatim into the `style` attribute: CSS accepts both palette
//! names and `#RRGGBB` strings, so no resolution happens on this path.

use super::appender::Appender;
use super::{Output, Receipt, TIMESTAMP_FORMAT, resolve_destination};
use crate::colorizer::Colorizer;
use crate::error::Error;
use chrono::Local;
use std::sync::Arc;

const EXTENSIONS: &[&str] = &["html"];

#[derive(Debug)]
pub struct HtmlOutput {
    colorizer: Arc<Colorizer>,
    appender: Appender,
}

impl HtmlOutput {
    /// # Errors
    /// [`Error::InvalidDestination`] unless `path` ends in `.html` (ASCII
    /// case-insensitive).
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
        let color = self.colorizer.color_of(level)?;
        Ok(format!(
            "<p><span>[{timestamp}]</span>\
             <span style=\"color:{color};\">{level}</span>\
             <span>: {message}</span></p>\n"
        ))
    }
}

impl Output for HtmlOutput {
    fn log(&self, level: &str, message: &str) -> Result<Receipt, Error> {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        let fragment = self.format_record(level, message, &timestamp)?;

        Ok(Receipt::pending(self.appender.append(fragment.into_bytes())))
    }

    fn flush(&self) -> Result<(), Error> {
        self.appender.flush()
    }
}
