#![forbid(unsafe_code)]

//! `fanlog` - Fan-out logging to terminal, plain-text, and HTML
//! destinations.
//!
//! A caller selects severity levels and destinations through a [`Config`]
//! (or the [`LoggerBuilder`]) and receives one [`Logger`] whose
//! [`log`](Logger::log) call broadcasts each record, reformatted per
//! medium, to every configured destination.
//!
//! # Example
//!
//! ```
//! use fanlog::Logger;
//!
//! # fn main() -> Result<(), fanlog::Error> {
//! let logger = Logger::builder().console().build()?;
//!
//! logger.log("info", "Application started")?;
//! logger.log("warning", "Disk usage at 90%")?;
//! # Ok(())
//! # }
//! ```
//!
//! Console records are written synchronously. File and HTML destinations
//! append in the background: drop the returned [`Receipt`] for
//! fire-and-forget delivery, or [`wait`](Receipt::wait) on it (or call
//! [`Logger::flush`]) to observe write failures.

pub mod color;
pub mod colorizer;
pub mod config;
mod error;
pub mod logger;
pub mod output;

pub use colorizer::Colorizer;
pub use config::{Config, OutputConfig};
pub use error::Error;
pub use logger::{DeferredLog, Logger, LoggerBuilder};
pub use output::{ConsoleOutput, FileOutput, HtmlOutput, Output, Receipt};
