// src/fs/mod.rs

//! Directory access used by the entry lister.
//!
//! [`DirectorySource`] is the seam between the lister and the OS so the
//! ordering and classification rules can be exercised against
//! [`mock::MockDirectory`] without touching the disk.

use std::ffi::{OsStr, OsString};
use std::fmt::Debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use nix::libc;
use tracing::debug;

use crate::errors::{Result, SequenceError};

pub mod mock;

/// Type tag reported for a directory entry, before following symlinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryType {
    File,
    Symlink,
    Other,
}

/// One raw directory entry, as enumerated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    pub name: OsString,
    pub entry_type: EntryType,
}

/// An opened directory that can be enumerated once.
pub trait DirectorySource: Debug {
    /// Absolute path of the directory.
    fn path(&self) -> &Path;

    /// Every entry in the directory, in whatever order the OS yields them.
    fn read_entries(&self) -> Result<Vec<RawEntry>>;

    /// Follow `name` (relative to this directory) and report whether it
    /// ends at a regular file.
    fn resolves_to_file(&self, name: &OsStr) -> io::Result<bool>;
}

/// Directory on the real filesystem.
#[derive(Debug, Clone)]
pub struct RealDirectory {
    path: PathBuf,
}

impl RealDirectory {
    /// Open `path` as the directory to enumerate.
    ///
    /// Fails if it does not exist or is not a directory.
    pub fn open(path: &Path) -> Result<Self> {
        let open_err = |source| SequenceError::OpenDirectory {
            path: path.to_path_buf(),
            source,
        };

        let meta = fs::metadata(path).map_err(open_err)?;
        if !meta.is_dir() {
            return Err(open_err(io::Error::from_raw_os_error(libc::ENOTDIR)));
        }

        let path = std::path::absolute(path).map_err(open_err)?;
        debug!(dir = %path.display(), "opened directory");
        Ok(Self { path })
    }
}

impl DirectorySource for RealDirectory {
    fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<Vec<RawEntry>> {
        let read_err = |source| SequenceError::ReadDirectory {
            path: self.path.clone(),
            source,
        };

        let mut entries = Vec::new();
        for entry in fs::read_dir(&self.path).map_err(read_err)? {
            let entry = entry.map_err(read_err)?;
            // Uses d_type when the filesystem reports it, lstat otherwise.
            let file_type = entry.file_type().map_err(read_err)?;
            let entry_type = if file_type.is_file() {
                EntryType::File
            } else if file_type.is_symlink() {
                EntryType::Symlink
            } else {
                EntryType::Other
            };
            entries.push(RawEntry {
                name: entry.file_name(),
                entry_type,
            });
        }
        Ok(entries)
    }

    fn resolves_to_file(&self, name: &OsStr) -> io::Result<bool> {
        fs::metadata(self.path.join(name)).map(|meta| meta.is_file())
    }
}

/// Resolve the target directory against an optional base directory.
///
/// An absolute `directory` ignores the base. The base itself must be an
/// accessible directory even then, so a typo in `--base` is never silent.
pub fn resolve_directory(base: Option<&Path>, directory: &Path) -> Result<PathBuf> {
    let Some(base) = base else {
        return Ok(directory.to_path_buf());
    };

    let base_dir = RealDirectory::open(base)?;
    Ok(base_dir.path().join(directory))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::os::unix::fs::symlink;

    #[test]
    fn open_rejects_regular_files() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("plain");
        fs::write(&file, b"x").unwrap();

        let err = RealDirectory::open(&file).unwrap_err();
        assert!(matches!(err, SequenceError::OpenDirectory { .. }), "{err:?}");
    }

    #[test]
    fn open_rejects_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = RealDirectory::open(&dir.path().join("missing")).unwrap_err();
        assert!(err.to_string().starts_with("Could not open"), "{err}");
    }

    #[test]
    fn read_entries_reports_type_tags() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("file"), b"x").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        symlink("file", dir.path().join("link")).unwrap();

        let source = RealDirectory::open(dir.path()).unwrap();
        let mut entries = source.read_entries().unwrap();
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        let tags: Vec<_> = entries
            .iter()
            .map(|e| (e.name.to_str().unwrap(), e.entry_type))
            .collect();
        assert_eq!(
            tags,
            vec![
                ("file", EntryType::File),
                ("link", EntryType::Symlink),
                ("sub", EntryType::Other),
            ]
        );
        assert!(source.resolves_to_file(OsStr::new("link")).unwrap());
        assert!(!source.resolves_to_file(OsStr::new("sub")).unwrap());
    }

    #[test]
    fn base_directory_prefixes_relative_targets() {
        let base = tempfile::tempdir().unwrap();
        fs::create_dir(base.path().join("rc3.d")).unwrap();

        let resolved = resolve_directory(Some(base.path()), Path::new("rc3.d")).unwrap();
        assert!(resolved.ends_with("rc3.d"));
        assert!(resolved.is_dir());

        let absolute = resolve_directory(Some(base.path()), Path::new("/etc")).unwrap();
        assert_eq!(absolute, PathBuf::from("/etc"));

        let missing = resolve_directory(Some(&base.path().join("nope")), Path::new("rc3.d"));
        assert!(missing.is_err());
    }
}
