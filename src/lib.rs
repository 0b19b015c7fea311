// src/lib.rs

pub mod cli;
pub mod engine;
pub mod errors;
pub mod exec;
pub mod fs;
pub mod listing;
pub mod logging;
pub mod sink;
pub mod types;

use std::io;

use tracing::debug;

use crate::cli::CliArgs;
use crate::engine::{print_listing, RunOptions, RunResult, Sequencer};
use crate::errors::{Result, SequenceError};
use crate::exec::ProcessRunner;
use crate::fs::{resolve_directory, RealDirectory};
use crate::listing::{list_entries, EntryListing};

/// High-level entry point used by `main.rs`.
pub async fn run(args: CliArgs) -> Result<RunResult> {
    run_with_options(RunOptions::from(&args)).await
}

/// Run with already-resolved options.
///
/// This wires together:
/// - directory resolution and listing
/// - print mode, writing to stdout
/// - or the sequencer with the production process runner
pub async fn run_with_options(options: RunOptions) -> Result<RunResult> {
    let listing = load_listing(&options)?;

    if options.print {
        let stdout = io::stdout();
        let printed = print_listing(&listing, &options, &mut stdout.lock())?;
        debug!(printed, "print mode complete (no execution)");
        return Ok(RunResult::Completed);
    }

    let runner = ProcessRunner::for_relay(options.relay);
    let mut sequencer = Sequencer::new(options, runner);
    Ok(sequencer.execute(&listing).await)
}

/// Process exit status for the result of [`run`].
///
/// Fatal errors exit [`SequenceError::EXIT_STATUS`]; a halted run exits with
/// the status derived from the entry that stopped it.
pub fn exit_code(result: &Result<RunResult>) -> i32 {
    match result {
        Ok(run) => run.exit_code(),
        Err(_) => SequenceError::EXIT_STATUS,
    }
}

/// Resolve, open and list the target directory.
///
/// The directory handle is released before this returns; nothing is
/// spawned while it is open.
pub fn load_listing(options: &RunOptions) -> Result<EntryListing> {
    let target = resolve_directory(options.base.as_deref(), &options.directory)?;
    let dir = RealDirectory::open(&target)?;
    list_entries(&dir)
}
