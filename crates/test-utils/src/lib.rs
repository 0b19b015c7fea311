pub mod builders;
pub mod fake_runner;
pub mod recording_sink;

use std::sync::{Mutex, MutexGuard, Once};
use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();
static PROCESS_LOCK: Mutex<()> = Mutex::new(());

/// Initialise tracing for tests.
///
/// - Uses `with_test_writer()`, so logs are captured per-test.
/// - The Rust test harness only prints captured output for **failing** tests
///   (unless you run with `-- --nocapture`).
///
/// Enable levels with e.g.:
/// `RUST_LOG=debug cargo test`
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer() // print only for failing tests unless --nocapture
            .with_target(true)
            .init();
    });
}

/// Serialise tests that write scripts and then execute them.
///
/// A script written by one test thread can still be open for writing in a
/// child forked by another thread, and exec then fails with ETXTBSY.
pub fn process_lock() -> MutexGuard<'static, ()> {
    PROCESS_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
