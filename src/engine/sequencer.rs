// src/engine/sequencer.rs

use std::fmt;

use tracing::{debug, info};

use crate::engine::{RunOptions, RunResult};
use crate::exec::{EntryRunner, ExecutionRequest};
use crate::listing::eligibility::reclassify;
use crate::listing::EntryListing;

/// Runs the entries of a listing one after another and stops at the first
/// failure.
///
/// Actual process handling is delegated to an [`EntryRunner`]; the sequencer
/// only decides what runs next. Exactly one entry is in flight at a time and
/// an entry only starts once the previous one has been waited for.
pub struct Sequencer<R: EntryRunner> {
    options: RunOptions,
    runner: R,
}

impl<R: EntryRunner> fmt::Debug for Sequencer<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sequencer")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl<R: EntryRunner> Sequencer<R> {
    pub fn new(options: RunOptions, runner: R) -> Self {
        Self { options, runner }
    }

    pub fn into_runner(self) -> R {
        self.runner
    }

    /// Run every entry of `listing` in order.
    pub async fn execute(&mut self, listing: &EntryListing) -> RunResult {
        info!(
            dir = %listing.dir().display(),
            entries = listing.len(),
            "running entries"
        );

        for name in listing.names() {
            let request = ExecutionRequest::new(
                self.options.directory_arg(),
                listing.dir(),
                name,
                &self.options.args,
            );

            let outcome = self.runner.run_entry(&request).await;
            let outcome = reclassify(outcome, self.options.ignore);

            if outcome.continues() {
                debug!(entry = ?request.label, %outcome, "continuing");
                continue;
            }

            info!(entry = ?request.label, %outcome, "halting run");
            return RunResult::Halted {
                label: request.label,
                outcome,
            };
        }

        RunResult::Completed
    }
}
