// src/listing/mod.rs

//! Entry lister: turns a directory into the ordered set of candidates.
//!
//! Rules:
//! - names starting with `.` are never candidates;
//! - regular files are accepted;
//! - symlinks are followed and accepted only when they end at a regular
//!   file. A symlink that cannot be followed aborts the listing;
//! - everything else (directories, fifos, sockets, devices) is dropped.
//!
//! The result is sorted by the raw bytes of the names. The listing is
//! materialised completely before anything runs.

pub mod eligibility;

use std::ffi::{OsStr, OsString};
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::errors::{Result, SequenceError};
use crate::fs::{DirectorySource, EntryType, RawEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedKind {
    RegularFile,
    SymlinkToRegularFile,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateEntry {
    pub name: OsString,
    pub kind: ResolvedKind,
}

/// Sorted candidates of one directory.
#[derive(Debug, Clone)]
pub struct EntryListing {
    dir: PathBuf,
    entries: Vec<CandidateEntry>,
}

impl EntryListing {
    /// Absolute path of the listed directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn entries(&self) -> &[CandidateEntry] {
        &self.entries
    }

    pub fn names(&self) -> impl Iterator<Item = &OsStr> {
        self.entries.iter().map(|e| e.name.as_os_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub fn is_hidden(name: &OsStr) -> bool {
    name.as_bytes().first() == Some(&b'.')
}

/// Enumerate, classify and sort the entries of `source`.
pub fn list_entries(source: &dyn DirectorySource) -> Result<EntryListing> {
    let mut entries = Vec::new();

    for raw in source.read_entries()? {
        if is_hidden(&raw.name) {
            continue;
        }
        match classify(source, &raw)? {
            ResolvedKind::Other => {
                debug!(entry = ?raw.name, "skipping entry that is not a regular file");
            }
            kind => entries.push(CandidateEntry {
                name: raw.name,
                kind,
            }),
        }
    }

    entries.sort_by(|a, b| a.name.as_bytes().cmp(b.name.as_bytes()));

    debug!(
        dir = %source.path().display(),
        count = entries.len(),
        "listed directory"
    );

    Ok(EntryListing {
        dir: source.path().to_path_buf(),
        entries,
    })
}

fn classify(source: &dyn DirectorySource, raw: &RawEntry) -> Result<ResolvedKind> {
    match raw.entry_type {
        EntryType::File => Ok(ResolvedKind::RegularFile),
        EntryType::Symlink => {
            let is_file = source
                .resolves_to_file(&raw.name)
                .map_err(|source_err| SequenceError::Stat {
                    path: source.path().join(&raw.name),
                    source: source_err,
                })?;
            Ok(if is_file {
                ResolvedKind::SymlinkToRegularFile
            } else {
                ResolvedKind::Other
            })
        }
        EntryType::Other => Ok(ResolvedKind::Other),
    }
}
