// src/exec/outcome.rs

//! Result taxonomy of running one entry.

use std::fmt;
use std::io;
use std::os::unix::process::ExitStatusExt;
use std::process::ExitStatus;

/// How one entry ended. Produced once, never mutated.
#[derive(Debug)]
pub enum ExecutionOutcome {
    /// Not run, or run attempt ignored under `--ignore`.
    Skipped,
    Succeeded,
    FailedWithExitCode(i32),
    FailedWithSignal(i32),
    SpawnError(io::Error),
    WaitError(io::Error),
}

impl ExecutionOutcome {
    /// Map an OS exit status.
    ///
    /// Normal exit 0 is success, any other normal exit carries its code,
    /// death by signal carries the signal number. Anything else (a stopped
    /// or continued report) cannot come out of a blocking wait and is
    /// treated as a wait failure.
    pub fn from_status(status: ExitStatus) -> Self {
        if let Some(code) = status.code() {
            if code == 0 {
                ExecutionOutcome::Succeeded
            } else {
                ExecutionOutcome::FailedWithExitCode(code)
            }
        } else if let Some(signal) = status.signal() {
            ExecutionOutcome::FailedWithSignal(signal)
        } else {
            ExecutionOutcome::WaitError(io::Error::other(format!(
                "unrecognised wait status {:#x}",
                status.into_raw()
            )))
        }
    }

    /// Whether the sequencer moves on to the next entry.
    pub fn continues(&self) -> bool {
        matches!(self, ExecutionOutcome::Succeeded | ExecutionOutcome::Skipped)
    }

    /// Exit status of the whole run if this outcome halts it.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            ExecutionOutcome::Skipped | ExecutionOutcome::Succeeded => None,
            ExecutionOutcome::FailedWithExitCode(code) => Some(*code),
            ExecutionOutcome::FailedWithSignal(signal) => Some(signal + 128),
            ExecutionOutcome::SpawnError(_) | ExecutionOutcome::WaitError(_) => Some(1),
        }
    }
}

impl fmt::Display for ExecutionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutionOutcome::Skipped => write!(f, "skipped"),
            ExecutionOutcome::Succeeded => write!(f, "succeeded"),
            ExecutionOutcome::FailedWithExitCode(code) => write!(f, "returned {code}"),
            ExecutionOutcome::FailedWithSignal(signal) => write!(f, "signaled {signal}"),
            ExecutionOutcome::SpawnError(err) => write!(f, "could not be executed: {err}"),
            ExecutionOutcome::WaitError(err) => write!(f, "could not be waited for: {err}"),
        }
    }
}
