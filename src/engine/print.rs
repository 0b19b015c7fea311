// src/engine/print.rs

//! `--print`: write the would-be labels instead of running anything.

use std::io::Write;
use std::os::unix::ffi::OsStrExt;

use tracing::debug;

use crate::engine::RunOptions;
use crate::errors::Result;
use crate::exec::format_label;
use crate::listing::eligibility::passes_precheck;
use crate::listing::EntryListing;

/// Write one label per entry, each terminated by `\n` (or NUL with
/// `zero`). With `ignore`, entries failing the executable precheck are left
/// out. Returns the number of labels written.
pub fn print_listing<W: Write>(listing: &EntryListing, options: &RunOptions, out: &mut W) -> Result<usize> {
    let terminator: &[u8] = if options.zero { b"\0" } else { b"\n" };
    let mut printed = 0;

    for name in listing.names() {
        if options.ignore && !passes_precheck(&listing.dir().join(name)) {
            debug!(entry = ?name, "not printing inaccessible entry");
            continue;
        }

        let label = format_label(options.directory_arg(), name);
        out.write_all(label.as_bytes())?;
        out.write_all(terminator)?;
        printed += 1;
    }

    out.flush()?;
    Ok(printed)
}
