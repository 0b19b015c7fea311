// src/exec/runner.rs

//! Pluggable entry runner.
//!
//! The sequencer talks to an [`EntryRunner`] instead of spawning processes
//! itself, so tests can swap in a fake runner that records the order of
//! requests and returns scripted outcomes.
//!
//! [`ProcessRunner`] is the production implementation.

use std::future::Future;
use std::pin::Pin;

use crate::exec::outcome::ExecutionOutcome;
use crate::exec::process::run_process;
use crate::exec::request::ExecutionRequest;
use crate::sink::{sink_for, LineSink};
use crate::types::RelayTarget;

/// Runs a single entry to completion.
pub trait EntryRunner: Send {
    /// Run `request` and report how it ended.
    ///
    /// Implementations must not return before the entry has finished: the
    /// next entry is started as soon as this resolves.
    fn run_entry<'a>(
        &'a mut self,
        request: &'a ExecutionRequest,
    ) -> Pin<Box<dyn Future<Output = ExecutionOutcome> + Send + 'a>>;
}

/// Runs entries as real child processes.
pub struct ProcessRunner {
    sink: Option<Box<dyn LineSink>>,
}

impl ProcessRunner {
    /// A runner whose children inherit our stderr.
    pub fn inherit_stderr() -> Self {
        Self { sink: None }
    }

    /// A runner that relays every child's stderr into `sink`.
    pub fn with_sink(sink: Box<dyn LineSink>) -> Self {
        Self { sink: Some(sink) }
    }

    /// The production runner for an optional relay target.
    pub fn for_relay(relay: Option<RelayTarget>) -> Self {
        match relay {
            Some(target) => Self::with_sink(sink_for(target)),
            None => Self::inherit_stderr(),
        }
    }
}

impl EntryRunner for ProcessRunner {
    fn run_entry<'a>(
        &'a mut self,
        request: &'a ExecutionRequest,
    ) -> Pin<Box<dyn Future<Output = ExecutionOutcome> + Send + 'a>> {
        let sink: Option<&mut dyn LineSink> = match self.sink.as_mut() {
            Some(sink) => Some(&mut **sink),
            None => None,
        };
        Box::pin(run_process(request, sink))
    }
}
