//! The logger fans each record out to every configured output in order.

mod builder;
mod from_config;

pub use builder::LoggerBuilder;

use crate::error::Error;
use crate::output::{Output, Receipt};
use std::fmt;

/// Owns an ordered sequence of outputs. Immutable after construction, so
/// concurrent logging needs no locks; there is no other state.
pub struct Logger {
    outputs: Vec<Box<dyn Output>>,
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("outputs", &self.outputs.len())
            .finish()
    }
}

impl Logger {
    /// Direct construction would expose output internals; the builder
    /// provides a guided API instead.
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Broadcasts one record to every output in insertion order.
    ///
    /// Delivery is fail-fast: the first output that rejects the record
    /// stops the sequence and later outputs see nothing. Console writes
    /// complete before this returns; file and HTML appends are queued in
    /// the background and tracked by the returned [`Receipt`], which may be
    /// dropped for fire-and-forget delivery or waited on to observe write
    /// faults.
    ///
    /// # Errors
    /// [`Error::UnknownLevel`] if `level` is not in the level map, or
    /// [`Error::Io`] from a synchronous console write.
    pub fn log(&self, level: &str, message: &str) -> Result<Receipt, Error> {
        let mut receipt = Receipt::settled();
        for output in &self.outputs {
            receipt.merge(output.log(level, message)?);
        }
        Ok(receipt)
    }

    /// Packages one log operation for use as a step in a callback-driven
    /// sequence: nothing happens until [`DeferredLog::run`] is invoked.
    #[must_use]
    pub fn deferred(
        &self,
        level: impl Into<String>,
        message: impl Into<String>,
    ) -> DeferredLog<'_> {
        DeferredLog {
            logger: self,
            level: level.into(),
            message: message.into(),
        }
    }

    /// Blocks until every queued append across all outputs has completed.
    ///
    /// # Errors
    /// The first error encountered across the outputs, including faults
    /// from fire-and-forget appends whose receipts were dropped.
    pub fn flush(&self) -> Result<(), Error> {
        for output in &self.outputs {
            output.flush()?;
        }
        Ok(())
    }

    /// Tests verify construction wired up the expected number of outputs.
    #[must_use]
    pub fn output_count(&self) -> usize {
        self.outputs.len()
    }
}

/// One pending log operation plus a completion notification.
pub struct DeferredLog<'a> {
    logger: &'a Logger,
    level: String,
    message: String,
}

impl DeferredLog<'_> {
    /// Performs the full multi-output log, then invokes `done` exactly once
    /// with its result. No ordering guarantee stronger than "logs, then
    /// calls `done`".
    pub fn run<F>(self, done: F)
    where
        F: FnOnce(Result<Receipt, Error>),
    {
        done(self.logger.log(&self.level, &self.message));
    }
}
