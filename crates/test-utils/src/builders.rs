#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::{symlink, PermissionsExt};
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Name of the hidden file scripts built with [`ScriptDirBuilder::traced`]
/// append their own name to. Hidden, so it is never an entry itself.
pub const TRACE_FILE: &str = ".trace";

/// Builder for a temporary directory of entries.
pub struct ScriptDirBuilder {
    dir: TempDir,
}

impl ScriptDirBuilder {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Executable `/bin/sh` script with the given body.
    pub fn script(self, name: &str, body: &str) -> Self {
        self.file(name, &format!("#!/bin/sh\n{body}\n"), 0o755)
    }

    /// Executable script that records its name in [`TRACE_FILE`] (in its
    /// working directory) and then runs `body`.
    pub fn traced(self, name: &str, body: &str) -> Self {
        self.script(name, &format!("echo {name} >> {TRACE_FILE}\n{body}"))
    }

    /// Regular file with explicit permission bits.
    pub fn file(self, name: &str, contents: &str, mode: u32) -> Self {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).expect("Failed to write entry");
        fs::set_permissions(&path, fs::Permissions::from_mode(mode))
            .expect("Failed to set permissions");
        self
    }

    pub fn subdir(self, name: &str) -> Self {
        fs::create_dir(self.dir.path().join(name)).expect("Failed to create subdir");
        self
    }

    pub fn symlink(self, name: &str, target: impl AsRef<Path>) -> Self {
        symlink(target, self.dir.path().join(name)).expect("Failed to create symlink");
        self
    }

    pub fn build(self) -> TempDir {
        self.dir
    }
}

impl Default for ScriptDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Names recorded in [`TRACE_FILE`] by traced scripts, in execution order.
pub fn read_trace(dir: &Path) -> Vec<String> {
    let path: PathBuf = dir.join(TRACE_FILE);
    match fs::read_to_string(&path) {
        Ok(contents) => contents.lines().map(str::to_string).collect(),
        Err(_) => Vec::new(),
    }
}
