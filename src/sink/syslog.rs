// src/sink/syslog.rs

//! Relay to the system log through `openlog(3)`/`syslog(3)`.

use std::ffi::{CStr, CString, OsStr};
use std::io;
use std::os::unix::ffi::OsStrExt;

use nix::libc;
use tracing::debug;

use super::LineSink;
use crate::types::SyslogTarget;

/// Sends each line to syslog at a fixed facility and level, using the
/// entry label as the ident.
///
/// `openlog` keeps a pointer to the ident, so the current one is owned here
/// and only replaced after `openlog` has been handed the new one.
#[derive(Debug)]
pub struct SyslogSink {
    target: SyslogTarget,
    ident: Option<CString>,
}

impl SyslogSink {
    pub fn new(target: SyslogTarget) -> Self {
        Self {
            target,
            ident: None,
        }
    }

    fn open_for(&mut self, label: &OsStr) -> io::Result<()> {
        if !needs_reopen(self.ident.as_deref(), label) {
            return Ok(());
        }

        let ident = CString::new(label.as_bytes())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        // SAFETY: `ident` is stored in `self` right after and outlives every
        // syslog call made through this sink; `closelog` runs on drop.
        unsafe { libc::openlog(ident.as_ptr(), 0, self.target.facility.code()) };
        debug!(ident = ?label, target = %self.target, "opened syslog");
        self.ident = Some(ident);
        Ok(())
    }
}

impl LineSink for SyslogSink {
    fn write_line(&mut self, label: &OsStr, line: &[u8]) -> io::Result<()> {
        self.open_for(label)?;

        let message = message_cstring(line);
        // SAFETY: constant "%s" format with one NUL-terminated argument.
        unsafe { libc::syslog(self.target.priority(), c"%s".as_ptr(), message.as_ptr()) };
        Ok(())
    }
}

/// Whether `label` differs from the ident syslog is currently open with.
fn needs_reopen(current: Option<&CStr>, label: &OsStr) -> bool {
    current.map(CStr::to_bytes) != Some(label.as_bytes())
}

/// Message for `syslog(3)`. Embedded NULs would truncate it, so they are dropped.
fn message_cstring(line: &[u8]) -> CString {
    let bytes: Vec<u8> = line.iter().copied().filter(|&b| b != 0).collect();
    // No NUL bytes remain.
    CString::new(bytes).unwrap_or_default()
}

impl Drop for SyslogSink {
    fn drop(&mut self) {
        if self.ident.is_some() {
            // SAFETY: closes the connection opened in `open_for`; the ident
            // is released afterwards with the rest of `self`.
            unsafe { libc::closelog() };
        }
    }
}
