//! Console output: immediate feedback on stdout, with the timestamp dimmed
//! and the level rendered in its bound color.

use super::{Output, Receipt, TIMESTAMP_FORMAT};
use crate::color::{self, Color};
use crate::colorizer::Colorizer;
use crate::error::Error;
use chrono::Local;
use std::io::{self, Write};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct ConsoleOutput {
    colorizer: Arc<Colorizer>,
    /// Piped output and CI environments can't render ANSI escape codes.
    colors_enabled: bool,
}

impl ConsoleOutput {
    #[must_use]
    pub const fn new(colorizer: Arc<Colorizer>) -> Self {
        Self {
            colorizer,
            colors_enabled: true,
        }
    }

    /// Piped output and CI environments can't render ANSI escape codes.
    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.colors_enabled = enabled;
        self
    }

    /// Kept separate from the actual write so the record shape stays
    /// testable without capturing stdout.
    fn format_record(
        &self,
        level: &str,
        message: &str,
        timestamp: &str,
    ) -> Result<String, Error> {
        let color_id = self.colorizer.color_of(level)?;
        let stamp = format!("[{timestamp}]");

        let (stamp, level) = if self.colors_enabled {
            let colored = color::colorize(level, Color::resolve(color_id));
            (color::dim(&stamp), colored)
        } else {
            (stamp, level.to_string())
        };

        Ok(format!("{stamp} {level}: {message}"))
    }
}

impl Output for ConsoleOutput {
    fn log(&self, level: &str, message: &str) -> Result<Receipt, Error> {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        let line = self.format_record(level, message, &timestamp)?;

        writeln!(io::stdout(), "{line}")?;
        Ok(Receipt::settled())
    }

    fn flush(&self) -> Result<(), Error> {
        io::stdout().flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn console(colors: bool) -> ConsoleOutput {
        ConsoleOutput::new(Arc::new(Colorizer::default())).colors(colors)
    }

    #[test]
    fn plain_record_shape() {
        let line = console(false)
            .format_record("info", "server started", "2026-08-07 10:15:00")
            .unwrap();
        assert_eq!(line, "[2026-08-07 10:15:00] info: server started");
    }

    #[test]
    fn colored_record_dims_timestamp_and_colors_level() {
        let line = console(true)
            .format_record("error", "boom", "2026-08-07 10:15:00")
            .unwrap();

        let stamp = color::dim("[2026-08-07 10:15:00]");
        let level = color::colorize("error", Color::red());
        assert_eq!(line, format!("{stamp} {level}: boom"));
    }

    #[test]
    fn unknown_level_fails_before_formatting() {
        let err = console(false)
            .format_record("nonexistent", "m", "2026-08-07 10:15:00")
            .unwrap_err();
        assert!(matches!(err, Error::UnknownLevel(level) if level == "nonexistent"));
    }
}
