// src/errors.rs

//! Crate-wide error type.
//!
//! Only conditions that stop the run before (or instead of) executing an
//! entry live here. A failing entry is not an error: it is an
//! [`ExecutionOutcome`](crate::exec::ExecutionOutcome) that the sequencer
//! turns into the process exit status.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SequenceError {
    #[error("Could not open '{}': {}", .path.display(), .source)]
    OpenDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not read directory '{}': {}", .path.display(), .source)]
    ReadDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not stat '{}': {}", .path.display(), .source)]
    Stat {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not write output: {0}")]
    Output(#[from] io::Error),
}

impl SequenceError {
    /// Exit status used for every fatal error.
    pub const EXIT_STATUS: i32 = 1;
}

pub type Result<T> = std::result::Result<T, SequenceError>;
