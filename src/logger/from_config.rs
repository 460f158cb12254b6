//! Logger assembly from a configuration object.

use super::{Logger, LoggerBuilder};
use crate::config::Config;
use crate::error::Error;

impl Logger {
    /// Builds a logger from `config` in one shot.
    ///
    /// Absent sections fall back to defaults: no `levels` map means the
    /// built-in four levels, no `output` section means a single console
    /// output. A present `output` section is read over a fixed, ordered set
    /// of recognized options (console, then file, then html); entries it
    /// does not set are skipped, and anything a config source declares
    /// beyond that set is ignored outright rather than rejected.
    ///
    /// # Errors
    /// [`Error::InvalidDestination`] if a file or HTML destination carries
    /// the wrong extension; the whole construction aborts.
    pub fn from_config(config: &Config) -> Result<Self, Error> {
        let mut builder = LoggerBuilder::new();

        if let Some(levels) = &config.levels {
            builder = builder.levels(levels.clone());
        }

        match &config.output {
            None => builder = builder.console(),
            Some(output) => {
                if output.console {
                    builder = builder.console();
                }
                if let Some(path) = &output.file {
                    builder = builder.file(path);
                }
                if let Some(path) = &output.html {
                    builder = builder.html(path);
                }
            }
        }

        builder.build()
    }
}
