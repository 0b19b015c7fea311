// src/exec/process.rs

//! Running one entry as a child process.

use std::io;
use std::mem::MaybeUninit;
use std::process::Stdio;
use std::ptr;

use nix::libc;
use nix::sys::signal::{signal, SigHandler, Signal};
use tokio::process::Command;
use tracing::{debug, info, warn};

use crate::exec::outcome::ExecutionOutcome;
use crate::exec::relay::drain_lines;
use crate::exec::request::ExecutionRequest;
use crate::sink::LineSink;

/// Spawn the entry, drain its stderr into `sink` if one is given, then wait.
///
/// stdin and stdout are always inherited. stderr is inherited too unless a
/// sink is given, in which case it is a pipe that is read to EOF before the
/// child is waited for.
pub async fn run_process(
    request: &ExecutionRequest,
    sink: Option<&mut dyn LineSink>,
) -> ExecutionOutcome {
    info!(entry = ?request.label, args = ?request.args, "starting entry");

    if let Err(err) = restore_sigchld() {
        warn!(error = %err, "could not restore SIGCHLD disposition");
    }

    let mut cmd = Command::new(&request.program);
    cmd.arg0(&request.label)
        .args(&request.args)
        .current_dir(&request.working_dir)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(if sink.is_some() {
            Stdio::piped()
        } else {
            Stdio::inherit()
        });

    // SAFETY: `reset_child_signals` only calls sigaction(2), which is
    // async-signal-safe.
    unsafe {
        cmd.pre_exec(reset_child_signals);
    }

    let mut child = match cmd.spawn() {
        Ok(child) => child,
        Err(err) => {
            debug!(entry = ?request.label, error = %err, "spawn failed");
            return ExecutionOutcome::SpawnError(err);
        }
    };

    if let (Some(sink), Some(stderr)) = (sink, child.stderr.take()) {
        match drain_lines(stderr, &request.label, sink).await {
            Ok(lines) => debug!(entry = ?request.label, lines, "stderr drained"),
            // The pipe is closed by now, so the child cannot block on it.
            Err(err) => warn!(entry = ?request.label, error = %err, "reading stderr failed"),
        }
    }

    // tokio's reaper retries interrupted waits itself.
    let outcome = match child.wait().await {
        Ok(status) => ExecutionOutcome::from_status(status),
        Err(err) => ExecutionOutcome::WaitError(err),
    };

    info!(entry = ?request.label, %outcome, "entry finished");
    outcome
}

/// Runs in the child between fork and exec.
///
/// An ignored SIGCHLD survives exec; put it back to the default so entries
/// that wait for their own children are not handed an ignored disposition
/// inherited from whoever started us.
fn reset_child_signals() -> io::Result<()> {
    // SAFETY: installing SIG_DFL does not run any handler code.
    unsafe { signal(Signal::SIGCHLD, SigHandler::SigDfl) }
        .map(drop)
        .map_err(io::Error::from)
}

/// Put SIGCHLD back to the default if whoever started us discarded it.
///
/// With SIGCHLD ignored (or `SA_NOCLDWAIT` set) the kernel reaps children
/// itself and waiting for them fails with ECHILD. An installed handler, such
/// as tokio's when it reaps through signals, is left in place.
pub fn restore_sigchld() -> io::Result<()> {
    let mut current = MaybeUninit::<libc::sigaction>::uninit();
    // SAFETY: a null new action only reads the current disposition.
    let rc = unsafe { libc::sigaction(libc::SIGCHLD, ptr::null(), current.as_mut_ptr()) };
    if rc != 0 {
        return Err(io::Error::last_os_error());
    }
    // SAFETY: filled in by the successful sigaction call above.
    let current = unsafe { current.assume_init() };

    let discards_children = current.sa_sigaction == libc::SIG_IGN
        || (current.sa_sigaction == libc::SIG_DFL && current.sa_flags & libc::SA_NOCLDWAIT != 0);
    if !discards_children {
        return Ok(());
    }

    debug!("SIGCHLD was discarded by our parent; restoring the default");
    // SAFETY: installing SIG_DFL does not run any handler code.
    unsafe { signal(Signal::SIGCHLD, SigHandler::SigDfl) }
        .map(drop)
        .map_err(io::Error::from)
}
