// src/logging.rs

//! Logging setup for `sequence` using `tracing` + `tracing-subscriber`.
//!
//! The level comes from `--log-level`, then `SEQUENCE_LOG`, then `warn`.
//! `SEQUENCE_LOG` takes the same names as the flag; an unrecognised value
//! is reported once logging is up and otherwise ignored.
//!
//! Logs go to STDERR, interleaved with whatever the entries write there.
//! STDOUT belongs to the entries and to the `--print` listing.

use anyhow::{anyhow, Result};
use clap::ValueEnum;
use tracing::Level;
use tracing_subscriber::fmt;

use crate::cli::LogLevel;

pub const LOG_ENV_VAR: &str = "SEQUENCE_LOG";

const DEFAULT_LEVEL: Level = Level::WARN;

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

/// Pick the level from the flag and the raw `SEQUENCE_LOG` value.
///
/// Returns the rejected environment value alongside, so it can be logged
/// after the subscriber exists.
fn resolve_level(cli_level: Option<LogLevel>, env_value: Option<&str>) -> (Level, Option<String>) {
    if let Some(level) = cli_level {
        return (level.into(), None);
    }
    match env_value.map(str::trim).filter(|v| !v.is_empty()) {
        None => (DEFAULT_LEVEL, None),
        Some(raw) => match LogLevel::from_str(raw, true) {
            Ok(level) => (level.into(), None),
            Err(_) => (DEFAULT_LEVEL, Some(raw.to_string())),
        },
    }
}

/// Install the global subscriber. Call once at startup.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let env_value = std::env::var(LOG_ENV_VAR).ok();
    let (level, rejected) = resolve_level(cli_level, env_value.as_deref());

    fmt()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {e}"))?;

    if let Some(raw) = rejected {
        tracing::warn!(value = %raw, "ignoring unknown {LOG_ENV_VAR} level");
    }
    Ok(())
}
