// tests/print_mode.rs

mod common;
use crate::common::builders::ScriptDirBuilder;
use crate::common::{init_tracing, process_lock};

use std::path::Path;

use sequence::engine::{print_listing, RunOptions};
use sequence::load_listing;

fn print(options: &RunOptions) -> Vec<u8> {
    let listing = load_listing(options).unwrap();
    let mut out = Vec::new();
    print_listing(&listing, options, &mut out).unwrap();
    out
}

#[test]
fn prints_sorted_labels_without_running() {
    init_tracing();
    let _guard = process_lock();

    let dir = ScriptDirBuilder::new()
        .traced("b", "")
        .traced("a", "")
        .traced(".hidden", "")
        .subdir("c-dir")
        .build();
    let d = dir.path().display().to_string();

    let out = print(&RunOptions::new(dir.path()));
    assert_eq!(String::from_utf8(out).unwrap(), format!("{d}/a\n{d}/b\n"));
    assert!(!dir.path().join(".trace").exists(), "print mode must not execute");
}

#[test]
fn zero_flag_terminates_with_nul() {
    init_tracing();
    let _guard = process_lock();

    let dir = ScriptDirBuilder::new()
        .traced("a", "")
        .traced("b", "")
        .build();
    let d = dir.path().display().to_string();

    let out = print(&RunOptions {
        zero: true,
        ..RunOptions::new(dir.path())
    });
    assert_eq!(out, format!("{d}/a\0{d}/b\0").into_bytes());
}

#[test]
fn ignore_omits_entries_without_execute_permission() {
    init_tracing();
    let _guard = process_lock();

    let dir = ScriptDirBuilder::new()
        .traced("10-a", "")
        .file("20-plain", "data", 0o644)
        .traced("30-c", "")
        .build();
    let d = dir.path().display().to_string();

    let with_ignore = print(&RunOptions {
        ignore: true,
        ..RunOptions::new(dir.path())
    });
    assert_eq!(String::from_utf8(with_ignore).unwrap(), format!("{d}/10-a\n{d}/30-c\n"));

    let without_ignore = print(&RunOptions::new(dir.path()));
    assert_eq!(
        String::from_utf8(without_ignore).unwrap(),
        format!("{d}/10-a\n{d}/20-plain\n{d}/30-c\n")
    );
}

#[test]
fn base_directory_resolves_relative_target_but_labels_keep_the_argument() {
    init_tracing();
    let _guard = process_lock();

    let base = ScriptDirBuilder::new().subdir("rc3.d").build();
    std::fs::write(base.path().join("rc3.d/S10net"), "#!/bin/sh\n").unwrap();

    let out = print(&RunOptions {
        base: Some(base.path().to_path_buf()),
        ..RunOptions::new(Path::new("rc3.d"))
    });
    assert_eq!(String::from_utf8(out).unwrap(), "rc3.d/S10net\n");
}
