use std::collections::HashMap;
use std::future::Future;
use std::io;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use sequence::exec::{EntryRunner, ExecutionOutcome, ExecutionRequest};

/// Scripted result for one entry name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FakeOutcome {
    Exit(i32),
    Signal(i32),
    PermissionDenied,
    NotFound,
}

impl FakeOutcome {
    fn to_outcome(self) -> ExecutionOutcome {
        match self {
            FakeOutcome::Exit(0) => ExecutionOutcome::Succeeded,
            FakeOutcome::Exit(code) => ExecutionOutcome::FailedWithExitCode(code),
            FakeOutcome::Signal(signal) => ExecutionOutcome::FailedWithSignal(signal),
            FakeOutcome::PermissionDenied => {
                ExecutionOutcome::SpawnError(io::Error::from(io::ErrorKind::PermissionDenied))
            }
            FakeOutcome::NotFound => {
                ExecutionOutcome::SpawnError(io::Error::from(io::ErrorKind::NotFound))
            }
        }
    }
}

/// A fake runner that:
/// - records every request it was asked to run
/// - returns the scripted outcome for the entry's file name, success otherwise.
#[derive(Debug, Default)]
pub struct FakeRunner {
    outcomes: HashMap<String, FakeOutcome>,
    executed: Arc<Mutex<Vec<ExecutionRequest>>>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_outcome(mut self, name: &str, outcome: FakeOutcome) -> Self {
        self.outcomes.insert(name.to_string(), outcome);
        self
    }

    /// Shared handle to the recorded requests.
    pub fn executed(&self) -> Arc<Mutex<Vec<ExecutionRequest>>> {
        Arc::clone(&self.executed)
    }

    /// File names of the recorded requests, in order.
    pub fn executed_names(&self) -> Vec<String> {
        self.executed
            .lock()
            .unwrap()
            .iter()
            .filter_map(|r| r.program.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .collect()
    }
}

impl EntryRunner for FakeRunner {
    fn run_entry<'a>(
        &'a mut self,
        request: &'a ExecutionRequest,
    ) -> Pin<Box<dyn Future<Output = ExecutionOutcome> + Send + 'a>> {
        let name = request
            .program
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let outcome = self
            .outcomes
            .get(&name)
            .copied()
            .unwrap_or(FakeOutcome::Exit(0));

        self.executed.lock().unwrap().push(request.clone());

        Box::pin(async move { outcome.to_outcome() })
    }
}
