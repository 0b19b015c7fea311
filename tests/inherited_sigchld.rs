// tests/inherited_sigchld.rs
//
// Runs as its own test binary: it changes the process-wide SIGCHLD
// disposition, as init or cron sometimes leave it for their children.

mod common;
use crate::common::builders::{read_trace, ScriptDirBuilder};
use crate::common::{init_tracing, process_lock};

use nix::sys::signal::{signal, SigHandler, Signal};

use sequence::engine::{RunOptions, RunResult};
use sequence::run_with_options;

struct IgnoredSigchld;

impl IgnoredSigchld {
    fn install() -> Self {
        unsafe { signal(Signal::SIGCHLD, SigHandler::SigIgn) }.unwrap();
        IgnoredSigchld
    }
}

impl Drop for IgnoredSigchld {
    fn drop(&mut self) {
        let _ = unsafe { signal(Signal::SIGCHLD, SigHandler::SigDfl) };
    }
}

#[tokio::test]
async fn ignored_sigchld_from_invoker_does_not_lose_exit_statuses() {
    init_tracing();
    let _guard = process_lock();

    let mut builder = ScriptDirBuilder::new();
    for i in 0..20 {
        builder = builder.traced(&format!("{i:02}"), "exit 0");
    }
    let dir = builder.traced("20-fail", "exit 5").traced("30-after", "").build();

    let _sigchld = IgnoredSigchld::install();
    let result = run_with_options(RunOptions::new(dir.path())).await.unwrap();

    match &result {
        RunResult::Halted { label, .. } => {
            assert!(label.to_string_lossy().ends_with("/20-fail"), "{result:?}");
        }
        other => panic!("expected halt at 20-fail, got {other:?}"),
    }
    assert_eq!(result.exit_code(), 5);

    let trace = read_trace(dir.path());
    assert_eq!(trace.len(), 21);
    assert_eq!(trace.last().map(String::as_str), Some("20-fail"));
}
