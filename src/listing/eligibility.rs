// src/listing/eligibility.rs

//! The `--ignore` policy.
//!
//! There are two separate mechanisms and they stay separate:
//!
//! - [`passes_precheck`] is used in print mode. It stats the path and probes
//!   `access(X_OK)` before the name is printed. The answer can be stale by
//!   the time whoever reads the listing acts on it; that race is accepted.
//! - [`reclassify`] is used in execute mode. Nothing is checked up front:
//!   the spawn is attempted and only a spawn that failed with EACCES is
//!   turned into [`ExecutionOutcome::Skipped`]. A missing file stays fatal.

use std::fs;
use std::io;
use std::path::Path;

use nix::unistd::{access, AccessFlags};
use tracing::debug;

use crate::exec::ExecutionOutcome;

/// Best-effort "could this be executed" check for print mode.
pub fn passes_precheck(path: &Path) -> bool {
    let is_file = fs::metadata(path).map(|m| m.is_file()).unwrap_or(false);
    if !is_file {
        debug!(path = %path.display(), "precheck: not a regular file");
        return false;
    }

    match access(path, AccessFlags::X_OK) {
        Ok(()) => true,
        Err(errno) => {
            debug!(path = %path.display(), %errno, "precheck: not executable");
            false
        }
    }
}

/// Apply the execute-mode ignore policy to an outcome.
pub fn reclassify(outcome: ExecutionOutcome, ignore: bool) -> ExecutionOutcome {
    match outcome {
        ExecutionOutcome::SpawnError(err)
            if ignore && err.kind() == io::ErrorKind::PermissionDenied =>
        {
            debug!(error = %err, "ignoring entry that could not be executed");
            ExecutionOutcome::Skipped
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::os::unix::fs::PermissionsExt;

    fn spawn_error(errno: i32) -> ExecutionOutcome {
        ExecutionOutcome::SpawnError(io::Error::from_raw_os_error(errno))
    }

    #[test]
    fn permission_denied_is_skipped_only_with_ignore() {
        assert!(matches!(
            reclassify(spawn_error(nix::libc::EACCES), true),
            ExecutionOutcome::Skipped
        ));
        assert!(matches!(
            reclassify(spawn_error(nix::libc::EACCES), false),
            ExecutionOutcome::SpawnError(_)
        ));
    }

    #[test]
    fn missing_file_stays_fatal_with_ignore() {
        assert!(matches!(
            reclassify(spawn_error(nix::libc::ENOENT), true),
            ExecutionOutcome::SpawnError(_)
        ));
    }

    #[test]
    fn other_outcomes_pass_through() {
        assert!(matches!(
            reclassify(ExecutionOutcome::FailedWithExitCode(3), true),
            ExecutionOutcome::FailedWithExitCode(3)
        ));
        assert!(matches!(
            reclassify(ExecutionOutcome::Succeeded, true),
            ExecutionOutcome::Succeeded
        ));
    }

    #[test]
    fn precheck_requires_execute_bit() {
        let dir = tempfile::tempdir().unwrap();
        let exec = dir.path().join("exec");
        let plain = dir.path().join("plain");
        fs::write(&exec, b"#!/bin/sh\n").unwrap();
        fs::write(&plain, b"#!/bin/sh\n").unwrap();
        fs::set_permissions(&exec, fs::Permissions::from_mode(0o755)).unwrap();
        fs::set_permissions(&plain, fs::Permissions::from_mode(0o644)).unwrap();

        assert!(passes_precheck(&exec));
        assert!(!passes_precheck(&plain));
        assert!(!passes_precheck(dir.path()));
        assert!(!passes_precheck(&dir.path().join("missing")));
    }
}
