// src/engine/mod.rs

//! Orchestration engine for sequence.
//!
//! This module ties together:
//! - the entry listing (already sorted, fully materialised)
//! - the `--ignore` policy
//! - either the print-mode listing writer ([`print`]) or the sequential
//!   runner loop ([`sequencer`]).

use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

use crate::cli::CliArgs;
use crate::exec::ExecutionOutcome;
use crate::types::RelayTarget;

pub mod print;
pub mod sequencer;

pub use print::print_listing;
pub use sequencer::Sequencer;

/// Resolved configuration of one invocation.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Target directory exactly as given; labels are built from it.
    pub directory: PathBuf,
    /// Base that a relative `directory` is resolved against.
    pub base: Option<PathBuf>,
    /// Arguments forwarded to every entry.
    pub args: Vec<OsString>,
    pub print: bool,
    pub zero: bool,
    pub ignore: bool,
    pub relay: Option<RelayTarget>,
}

impl RunOptions {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            ..Self::default()
        }
    }

    pub fn directory_arg(&self) -> &OsStr {
        self.directory.as_os_str()
    }
}

impl From<&CliArgs> for RunOptions {
    fn from(args: &CliArgs) -> Self {
        Self {
            directory: args.directory.clone(),
            base: args.base.clone(),
            args: args.args.clone(),
            print: args.print,
            zero: args.zero,
            ignore: args.ignore,
            relay: args.relay(),
        }
    }
}

/// Final status of a run.
#[derive(Debug)]
pub enum RunResult {
    /// Every entry succeeded or was skipped (or everything was printed).
    Completed,
    /// The run stopped at `label`, nothing after it was started.
    Halted {
        label: OsString,
        outcome: ExecutionOutcome,
    },
}

impl RunResult {
    pub fn exit_code(&self) -> i32 {
        match self {
            RunResult::Completed => 0,
            RunResult::Halted { outcome, .. } => outcome.exit_code().unwrap_or(0),
        }
    }

    /// Message for stderr explaining a halt, without the program prefix.
    pub fn diagnostic(&self) -> Option<String> {
        let RunResult::Halted { label, outcome } = self else {
            return None;
        };
        let label = label.to_string_lossy();
        Some(match outcome {
            ExecutionOutcome::FailedWithExitCode(code) => format!("{label} returned {code}"),
            ExecutionOutcome::FailedWithSignal(signal) => format!("{label} signaled {signal}"),
            ExecutionOutcome::SpawnError(err) => format!("Could not execute '{label}': {err}"),
            ExecutionOutcome::WaitError(err) => format!("waitpid for '{label}' failed: {err}"),
            ExecutionOutcome::Succeeded | ExecutionOutcome::Skipped => return None,
        })
    }
}
