// src/exec/request.rs

//! Label formatting and per-entry execution requests.

use std::ffi::{OsStr, OsString};
use std::os::unix::ffi::{OsStrExt, OsStringExt};
use std::path::{Path, PathBuf};

/// `directory/name`, byte for byte.
///
/// `directory` is the directory argument exactly as the user gave it, so a
/// trailing slash survives (`"d/" + "x"` is `"d//x"`).
pub fn format_label(directory: &OsStr, name: &OsStr) -> OsString {
    let mut label = Vec::with_capacity(directory.len() + name.len() + 1);
    label.extend_from_slice(directory.as_bytes());
    label.push(b'/');
    label.extend_from_slice(name.as_bytes());
    OsString::from_vec(label)
}

/// Everything needed to run one entry.
///
/// Built fresh for every entry; nothing is shared between requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionRequest {
    /// Absolute path of the executable.
    pub program: PathBuf,
    /// `argv[0]` of the child and the label used for relayed stderr.
    pub label: OsString,
    /// Trailing user arguments, unmodified.
    pub args: Vec<OsString>,
    /// Working directory of the child: the listed directory.
    pub working_dir: PathBuf,
}

impl ExecutionRequest {
    pub fn new(directory_arg: &OsStr, listed_dir: &Path, name: &OsStr, args: &[OsString]) -> Self {
        Self {
            program: listed_dir.join(name),
            label: format_label(directory_arg, name),
            args: args.to_vec(),
            working_dir: listed_dir.to_path_buf(),
        }
    }

    /// Full argument vector as the child sees it.
    pub fn argv(&self) -> Vec<&OsStr> {
        std::iter::once(self.label.as_os_str())
            .chain(self.args.iter().map(OsString::as_os_str))
            .collect()
    }
}
