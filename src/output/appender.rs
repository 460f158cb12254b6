//! Background append worker shared by the file-based outputs.
//!
//! Appends must not block the logging caller, so each destination owns one
//! worker thread fed through a channel. Every append is acknowledged with
//! the write's outcome, and a flush marker round-trips the queue so callers
//! can observe completion of everything queued before it.

use super::worker_gone;
use crate::error::Error;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};

enum Job {
    Append {
        bytes: Vec<u8>,
        ack: Sender<Result<(), Error>>,
    },
    Flush(Sender<Result<(), Error>>),
    Shutdown,
}

#[derive(Debug)]
pub(crate) struct Appender {
    sender: Sender<Job>,
    handle: Option<JoinHandle<()>>,
}

impl Appender {
    /// Spawns the worker that owns the destination path.
    pub(crate) fn spawn(path: PathBuf) -> Self {
        let (sender, receiver) = mpsc::channel();
        let handle = thread::spawn(move || run(&path, &receiver));

        Self {
            sender,
            handle: Some(handle),
        }
    }

    /// Queues one formatted record and returns its ack channel without
    /// waiting for the write.
    pub(crate) fn append(&self, bytes: Vec<u8>) -> Receiver<Result<(), Error>> {
        let (ack, outcome) = mpsc::channel();
        let _ = self.sender.send(Job::Append { bytes, ack });
        outcome
    }

    /// Blocks until every append queued before this call has completed.
    pub(crate) fn flush(&self) -> Result<(), Error> {
        let (ack, outcome) = mpsc::channel();
        if self.sender.send(Job::Flush(ack)).is_err() {
            return Err(worker_gone());
        }
        outcome.recv().unwrap_or_else(|_| Err(worker_gone()))
    }
}

impl Drop for Appender {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = self.sender.send(Job::Shutdown);
            let _ = handle.join();
        }
    }
}

fn run(path: &Path, jobs: &Receiver<Job>) {
    // First unflushed fault, kept so a fire-and-forget append whose receipt
    // was dropped still surfaces at the next flush.
    let mut unflushed: Option<(io::ErrorKind, String)> = None;

    while let Ok(job) = jobs.recv() {
        match job {
            Job::Append { bytes, ack } => match append_once(path, &bytes) {
                Ok(()) => {
                    let _ = ack.send(Ok(()));
                }
                Err(e) => {
                    unflushed.get_or_insert((e.kind(), e.to_string()));
                    let _ = ack.send(Err(Error::Io(e)));
                }
            },
            Job::Flush(ack) => {
                let outcome = unflushed
                    .take()
                    .map_or(Ok(()), |(kind, msg)| Err(Error::Io(io::Error::new(kind, msg))));
                let _ = ack.send(outcome);
            }
            Job::Shutdown => break,
        }
    }
}

fn append_once(path: &Path, bytes: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }

    // Handles are opened per write, never held across records.
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(bytes)
}
