// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! Everything after `--` is forwarded verbatim to every executed entry.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, ValueEnum};

use crate::types::{RelayTarget, SyslogTarget};

const AFTER_HELP: &str = "\
The sequence command runs all the executables in a specified directory,
running each one in sequence ordered alphabetically. Each executable is
named sensibly so it is clear which executable is responsible for output
in logfiles.

RETURN VALUE
  The return code from the first executable to fail. If the executable was
  interrupted with a signal, the signal number plus 128. If the executable
  could not be executed, or if the options are invalid, 1.

EXAMPLES
  Execute all commands in /etc/rc3.d, passing 'start' to each command:

    sequence /etc/rc3.d -- start";

/// Command-line arguments for `sequence`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "sequence",
    version,
    about = "Run all executables in a directory in sequence.",
    after_help = AFTER_HELP,
    disable_version_flag = true
)]
pub struct CliArgs {
    /// Directory containing the executables to run.
    #[arg(value_name = "DIRECTORY")]
    pub directory: PathBuf,

    /// Arguments passed to every executable.
    #[arg(last = true, value_name = "ARGS")]
    pub args: Vec<OsString>,

    /// Terminate names with a zero instead of newline.
    #[arg(short = '0', long)]
    pub zero: bool,

    /// Print the name of executables rather than execute.
    #[arg(short, long)]
    pub print: bool,

    /// Skip entries that are not executable instead of failing.
    #[arg(short, long)]
    pub ignore: bool,

    /// Resolve a relative DIRECTORY against this base directory.
    #[arg(short, long, value_name = "DIR")]
    pub base: Option<PathBuf>,

    /// Prefix each line of an executable's stderr with its path.
    #[arg(short, long, conflicts_with = "syslog")]
    pub label: bool,

    /// Send each line of an executable's stderr to syslog (e.g. user.info).
    #[arg(short, long, value_name = "FACILITY.LEVEL")]
    pub syslog: Option<SyslogTarget>,

    /// Logging level of sequence itself (error, warn, info, debug, trace).
    ///
    /// If omitted, `SEQUENCE_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Display the version number.
    #[arg(short = 'v', long, action = ArgAction::Version)]
    #[allow(dead_code)]
    version: Option<bool>,
}

impl CliArgs {
    /// Relay target selected by `--label` / `--syslog`, if any.
    pub fn relay(&self) -> Option<RelayTarget> {
        match (self.syslog, self.label) {
            (Some(target), _) => Some(RelayTarget::Syslog(target)),
            (None, true) => Some(RelayTarget::Stderr),
            (None, false) => None,
        }
    }
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    #[value(alias = "warning")]
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::try_parse()`.
///
/// Errors include `--help` and `--version`; map them with [`exit_code_for`].
pub fn try_parse() -> Result<CliArgs, clap::Error> {
    CliArgs::try_parse()
}

/// Process exit status for a parse failure.
///
/// Usage errors exit 1 rather than clap's 2. `--help` and `--version` are
/// reported through the same error path but exit 0.
pub fn exit_code_for(err: &clap::Error) -> i32 {
    if err.use_stderr() { 1 } else { 0 }
}

/// Name used to prefix diagnostics: the basename of `argv[0]`.
pub fn program_name() -> String {
    std::env::args_os()
        .next()
        .as_deref()
        .map(Path::new)
        .and_then(Path::file_name)
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "sequence".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn trailing_args_follow_separator() {
        let args = CliArgs::try_parse_from(["sequence", "-0", "-p", "/etc/rc3.d", "--", "start", "-x"])
            .unwrap();
        assert!(args.zero);
        assert!(args.print);
        assert_eq!(args.directory, PathBuf::from("/etc/rc3.d"));
        assert_eq!(args.args, vec![OsString::from("start"), OsString::from("-x")]);
        assert_eq!(args.relay(), None);
    }

    #[test]
    fn missing_directory_is_a_usage_error() {
        let err = CliArgs::try_parse_from(["sequence", "-p"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert!(err.use_stderr());
    }

    #[test]
    fn unknown_syslog_facility_is_rejected() {
        let err = CliArgs::try_parse_from(["sequence", "-s", "bogus.info", "/d"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn label_and_syslog_conflict() {
        let err = CliArgs::try_parse_from(["sequence", "-l", "-s", "user.info", "/d"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn version_and_help_short_circuit() {
        let err = CliArgs::try_parse_from(["sequence", "-v"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayVersion);
        assert!(!err.use_stderr());

        let err = CliArgs::try_parse_from(["sequence", "-h"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    fn status_for(argv: &[&str]) -> i32 {
        let err = CliArgs::try_parse_from(argv).unwrap_err();
        exit_code_for(&err)
    }

    #[test]
    fn usage_errors_exit_1() {
        assert_eq!(status_for(&["sequence"]), 1);
        assert_eq!(status_for(&["sequence", "-p"]), 1);
        assert_eq!(status_for(&["sequence", "-s", "bogus.info", "/d"]), 1);
        assert_eq!(status_for(&["sequence", "-l", "-s", "user.info", "/d"]), 1);
        assert_eq!(status_for(&["sequence", "--frobnicate", "/d"]), 1);
    }

    #[test]
    fn help_and_version_exit_0() {
        assert_eq!(status_for(&["sequence", "-h"]), 0);
        assert_eq!(status_for(&["sequence", "--help"]), 0);
        assert_eq!(status_for(&["sequence", "-v"]), 0);
        assert_eq!(status_for(&["sequence", "--version"]), 0);
    }

    #[test]
    fn relay_selection() {
        let args = CliArgs::try_parse_from(["sequence", "-l", "/d"]).unwrap();
        assert_eq!(args.relay(), Some(RelayTarget::Stderr));

        let args = CliArgs::try_parse_from(["sequence", "--syslog", "daemon.err", "/d"]).unwrap();
        assert!(matches!(args.relay(), Some(RelayTarget::Syslog(_))));
    }
}
