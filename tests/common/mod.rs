#![allow(unused_imports)]

pub use sequence_test_utils::builders;
pub use sequence_test_utils::fake_runner;
pub use sequence_test_utils::recording_sink;
pub use sequence_test_utils::{init_tracing, process_lock};
