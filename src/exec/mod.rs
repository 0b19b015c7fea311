// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`request`] formats labels and builds per-entry [`ExecutionRequest`]s.
//! - [`outcome`] maps exit statuses into [`ExecutionOutcome`].
//! - [`relay`] drains a child's stderr into a line sink.
//! - [`process`] spawns, drains and waits for one child.
//! - [`runner`] provides the `EntryRunner` trait and the production
//!   `ProcessRunner`, which tests can replace with a fake implementation.

pub mod outcome;
pub mod process;
pub mod relay;
pub mod request;
pub mod runner;

pub use outcome::ExecutionOutcome;
pub use request::{format_label, ExecutionRequest};
pub use runner::{EntryRunner, ProcessRunner};
