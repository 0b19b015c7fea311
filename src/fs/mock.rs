// src/fs/mock.rs

use super::{DirectorySource, EntryType, RawEntry};
use crate::errors::Result;
use std::ffi::{OsStr, OsString};
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockEntry {
    File,
    Dir,
    Fifo,
    /// Symlink whose target is (or is not) a regular file.
    Symlink { to_file: bool },
    /// Symlink whose target does not exist.
    BrokenSymlink,
}

/// In-memory directory. Entries are yielded in insertion order, which lets
/// tests control the "filesystem" enumeration order.
#[derive(Debug, Clone)]
pub struct MockDirectory {
    path: PathBuf,
    entries: Vec<(OsString, MockEntry)>,
}

impl MockDirectory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            entries: Vec::new(),
        }
    }

    pub fn add(&mut self, name: impl Into<OsString>, entry: MockEntry) -> &mut Self {
        self.entries.push((name.into(), entry));
        self
    }

    pub fn with(mut self, name: impl Into<OsString>, entry: MockEntry) -> Self {
        self.add(name, entry);
        self
    }

    fn lookup(&self, name: &OsStr) -> Option<MockEntry> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, e)| *e)
    }
}

impl DirectorySource for MockDirectory {
    fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<Vec<RawEntry>> {
        Ok(self
            .entries
            .iter()
            .map(|(name, entry)| RawEntry {
                name: name.clone(),
                entry_type: match entry {
                    MockEntry::File => EntryType::File,
                    MockEntry::Symlink { .. } | MockEntry::BrokenSymlink => EntryType::Symlink,
                    MockEntry::Dir | MockEntry::Fifo => EntryType::Other,
                },
            })
            .collect())
    }

    fn resolves_to_file(&self, name: &OsStr) -> io::Result<bool> {
        match self.lookup(name) {
            Some(MockEntry::File) | Some(MockEntry::Symlink { to_file: true }) => Ok(true),
            Some(MockEntry::Dir) | Some(MockEntry::Fifo) | Some(MockEntry::Symlink { to_file: false }) => {
                Ok(false)
            }
            Some(MockEntry::BrokenSymlink) | None => {
                Err(io::Error::from_raw_os_error(nix::libc::ENOENT))
            }
        }
    }
}
