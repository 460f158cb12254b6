//! Stepwise Logger construction for programmatic callers.

use super::Logger;
use crate::colorizer::Colorizer;
use crate::error::Error;
use crate::output::{ConsoleOutput, FileOutput, HtmlOutput, Output};
use std::collections::HashMap;
use std::sync::Arc;

/// Outputs can't be constructed as they are requested: they all share one
/// Colorizer, which isn't fixed until `build`. Requests are recorded and
/// replayed in order at build time.
enum Requested {
    Console,
    File(String),
    Html(String),
    Custom(Box<dyn Output>),
}

pub struct LoggerBuilder {
    levels: Option<HashMap<String, String>>,
    console_colors: bool,
    requested: Vec<Requested>,
}

impl LoggerBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            levels: None,
            console_colors: true,
            requested: Vec::new(),
        }
    }

    /// A supplied map replaces the built-in levels entirely; partial maps
    /// are not merged with the defaults.
    #[must_use]
    pub fn levels(mut self, levels: HashMap<String, String>) -> Self {
        self.levels = Some(levels);
        self
    }

    #[must_use]
    pub fn console(mut self) -> Self {
        self.requested.push(Requested::Console);
        self
    }

    /// Piped output and CI environments can't render ANSI escape codes.
    #[must_use]
    pub const fn console_colors(mut self, enabled: bool) -> Self {
        self.console_colors = enabled;
        self
    }

    /// Plain-text destination; the path must end in `.log` or `.txt`.
    #[must_use]
    pub fn file(mut self, path: impl Into<String>) -> Self {
        self.requested.push(Requested::File(path.into()));
        self
    }

    /// HTML destination; the path must end in `.html`.
    #[must_use]
    pub fn html(mut self, path: impl Into<String>) -> Self {
        self.requested.push(Requested::Html(path.into()));
        self
    }

    /// The built-in outputs can't cover every medium.
    #[must_use]
    pub fn output(mut self, output: impl Output + 'static) -> Self {
        self.requested.push(Requested::Custom(Box::new(output)));
        self
    }

    /// Constructs the shared Colorizer once, then the requested outputs in
    /// call order.
    ///
    /// # Errors
    /// [`Error::InvalidDestination`] for the first file or HTML destination
    /// with a wrong extension; the whole build aborts, no partial logger is
    /// returned.
    pub fn build(self) -> Result<Logger, Error> {
        let colorizer = Arc::new(self.levels.map_or_else(Colorizer::default, Colorizer::new));

        let mut outputs: Vec<Box<dyn Output>> = Vec::with_capacity(self.requested.len());
        for request in self.requested {
            outputs.push(match request {
                Requested::Console => Box::new(
                    ConsoleOutput::new(Arc::clone(&colorizer)).colors(self.console_colors),
                ),
                Requested::File(path) => {
                    Box::new(FileOutput::new(Arc::clone(&colorizer), &path)?)
                }
                Requested::Html(path) => {
                    Box::new(HtmlOutput::new(Arc::clone(&colorizer), &path)?)
                }
                Requested::Custom(output) => output,
            });
        }

        Ok(Logger { outputs })
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
