//! Output destinations: each pairs one record format with one emission
//! medium (console write or file append), so the built-in trio varies only
//! in the textual shape it produces.

mod appender;
mod console;
mod file;
mod html;

pub use console::ConsoleOutput;
pub use file::FileOutput;
pub use html::HtmlOutput;

use crate::error::Error;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Receiver;

/// Wall-clock stamp rendered at second precision, local time.
pub(crate) const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// `Send + Sync` bounds let one logger be shared across threads without
/// locks on the trait object.
pub trait Output: Send + Sync {
    /// Emits one record for `(level, message)` in this output's format.
    ///
    /// The level is validated against the shared
    /// [`Colorizer`](crate::Colorizer) before anything is written; an
    /// unknown level fails here, synchronously, and nothing reaches the
    /// medium.
    ///
    /// # Errors
    /// [`Error::UnknownLevel`] for a level missing from the level map, or
    /// [`Error::Io`] from a synchronous write. Background append failures
    /// travel through the returned [`Receipt`] instead.
    fn log(&self, level: &str, message: &str) -> Result<Receipt, Error>;

    /// Blocks until every append queued so far has hit the medium.
    ///
    /// # Errors
    /// The first [`Error::Io`] among the drained writes.
    fn flush(&self) -> Result<(), Error>;
}

/// Completion handle for the appends queued by one or more `log` calls.
///
/// Dropping it keeps fire-and-forget delivery; [`Receipt::wait`] turns a
/// background append failure into an inspectable error instead of an
/// unobserved fault.
#[derive(Debug, Default)]
pub struct Receipt {
    pending: Vec<Receiver<Result<(), Error>>>,
}

impl Receipt {
    /// A settled receipt for synchronous outputs with nothing left to wait
    /// on.
    #[must_use]
    pub fn settled() -> Self {
        Self::default()
    }

    /// A receipt tracking one queued append.
    #[must_use]
    pub fn pending(ack: Receiver<Result<(), Error>>) -> Self {
        Self { pending: vec![ack] }
    }

    /// Folds another receipt's pending acks into this one, preserving queue
    /// order.
    pub fn merge(&mut self, other: Self) {
        self.pending.extend(other.pending);
    }

    /// Blocks until every tracked append has completed.
    ///
    /// # Errors
    /// The first failed append. A vanished append worker also surfaces as
    /// [`Error::Io`].
    pub fn wait(self) -> Result<(), Error> {
        for ack in self.pending {
            ack.recv().unwrap_or_else(|_| Err(worker_gone()))?;
        }
        Ok(())
    }
}

pub(crate) fn worker_gone() -> Error {
    Error::Io(io::Error::new(
        io::ErrorKind::BrokenPipe,
        "append worker disconnected",
    ))
}

/// Validates the destination's extension against `accepted` (ASCII
/// case-insensitive) and expands a leading tilde.
pub(crate) fn resolve_destination(
    path: &str,
    accepted: &'static [&'static str],
) -> Result<PathBuf, Error> {
    let extension_ok = Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| accepted.iter().any(|a| ext.eq_ignore_ascii_case(a)));

    if !extension_ok {
        return Err(Error::InvalidDestination {
            path: PathBuf::from(path),
            expected: accepted,
        });
    }

    Ok(PathBuf::from(shellexpand::tilde(path).as_ref()))
}
