// src/sink/mod.rs

//! Destinations for relayed child stderr.
//!
//! The runner only knows [`LineSink`]: "write this line for this label".
//! - [`WriterSink`] writes `"<label>: <line>\n"` to any writer, stderr in
//!   production.
//! - [`syslog::SyslogSink`] sends the line to the system log with the label
//!   as the ident.

pub mod syslog;

use std::ffi::OsStr;
use std::io::{self, Write};
use std::os::unix::ffi::OsStrExt;

use crate::types::RelayTarget;

pub use syslog::SyslogSink;

/// Receives one line of a child's stderr at a time.
pub trait LineSink: Send {
    /// `line` has no trailing newline.
    fn write_line(&mut self, label: &OsStr, line: &[u8]) -> io::Result<()>;
}

/// Writes labelled lines to a byte stream.
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: W,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterSink<io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write + Send> LineSink for WriterSink<W> {
    fn write_line(&mut self, label: &OsStr, line: &[u8]) -> io::Result<()> {
        // One write per line so lines from us and other writers don't interleave mid-line.
        let mut record = Vec::with_capacity(label.len() + line.len() + 3);
        record.extend_from_slice(label.as_bytes());
        record.extend_from_slice(b": ");
        record.extend_from_slice(line);
        record.push(b'\n');
        self.writer.write_all(&record)?;
        self.writer.flush()
    }
}

/// Build the production sink for a relay target.
pub fn sink_for(target: RelayTarget) -> Box<dyn LineSink> {
    match target {
        RelayTarget::Stderr => Box::new(WriterSink::stderr()),
        RelayTarget::Syslog(target) => Box::new(SyslogSink::new(target)),
    }
}
